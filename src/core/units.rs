//! Unit registry
//!
//! Fixed, ordered catalog of linear unit groups. Every unit stores the number of
//! base units one of it equals; the base unit of each group has `ratio = 1.0`.
//! Temperature is affine and lives in [`temperature`] instead.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use ts_rs::TS;

pub mod pace;
pub mod parsing;
pub mod temperature;

/// A single convertible unit inside a group
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitDefinition {
    pub id: &'static str,
    pub label: &'static str,
    /// Base units per one of this unit
    pub ratio: f64,
}

const fn unit(id: &'static str, label: &'static str, ratio: f64) -> UnitDefinition {
    UnitDefinition { id, label, ratio }
}

impl UnitDefinition {
    /// Abbreviation inside the trailing parentheses of the label, if any
    pub fn abbreviation(&self) -> Option<&'static str> {
        let open = self.label.rfind('(')?;
        let close = self.label.rfind(')')?;
        (close > open + 1).then(|| &self.label[open + 1..close])
    }
}

/// Identifier of a linear unit group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum UnitGroupId {
    Length,
    Area,
    Weight,
    Volume,
    Time,
    DataSize,
    Speed,
    Pressure,
    Power,
    Energy,
    Voltage,
    Current,
    Angle,
    Frequency,
    Quantity,
    PartsPer,
    Pace,
    ReactivePower,
    ApparentPower,
    FlowRate,
    Illuminance,
    Torque,
    Charge,
    Currency,
}

impl UnitGroupId {
    pub const ALL: [UnitGroupId; 24] = [
        UnitGroupId::Length,
        UnitGroupId::Area,
        UnitGroupId::Weight,
        UnitGroupId::Volume,
        UnitGroupId::Time,
        UnitGroupId::DataSize,
        UnitGroupId::Speed,
        UnitGroupId::Pressure,
        UnitGroupId::Power,
        UnitGroupId::Energy,
        UnitGroupId::Voltage,
        UnitGroupId::Current,
        UnitGroupId::Angle,
        UnitGroupId::Frequency,
        UnitGroupId::Quantity,
        UnitGroupId::PartsPer,
        UnitGroupId::Pace,
        UnitGroupId::ReactivePower,
        UnitGroupId::ApparentPower,
        UnitGroupId::FlowRate,
        UnitGroupId::Illuminance,
        UnitGroupId::Torque,
        UnitGroupId::Charge,
        UnitGroupId::Currency,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitGroupId::Length => "length",
            UnitGroupId::Area => "area",
            UnitGroupId::Weight => "weight",
            UnitGroupId::Volume => "volume",
            UnitGroupId::Time => "time",
            UnitGroupId::DataSize => "data_size",
            UnitGroupId::Speed => "speed",
            UnitGroupId::Pressure => "pressure",
            UnitGroupId::Power => "power",
            UnitGroupId::Energy => "energy",
            UnitGroupId::Voltage => "voltage",
            UnitGroupId::Current => "current",
            UnitGroupId::Angle => "angle",
            UnitGroupId::Frequency => "frequency",
            UnitGroupId::Quantity => "quantity",
            UnitGroupId::PartsPer => "parts_per",
            UnitGroupId::Pace => "pace",
            UnitGroupId::ReactivePower => "reactive_power",
            UnitGroupId::ApparentPower => "apparent_power",
            UnitGroupId::FlowRate => "flow_rate",
            UnitGroupId::Illuminance => "illuminance",
            UnitGroupId::Torque => "torque",
            UnitGroupId::Charge => "charge",
            UnitGroupId::Currency => "currency",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == value)
    }

    /// Localized quantity name, used in tool titles
    pub fn display_name(&self) -> &'static str {
        match self {
            UnitGroupId::Length => "độ dài",
            UnitGroupId::Area => "diện tích",
            UnitGroupId::Weight => "khối lượng",
            UnitGroupId::Volume => "thể tích",
            UnitGroupId::Time => "thời gian",
            UnitGroupId::DataSize => "dung lượng dữ liệu",
            UnitGroupId::Speed => "tốc độ",
            UnitGroupId::Pressure => "áp suất",
            UnitGroupId::Power => "công suất",
            UnitGroupId::Energy => "năng lượng",
            UnitGroupId::Voltage => "điện áp",
            UnitGroupId::Current => "dòng điện",
            UnitGroupId::Angle => "góc",
            UnitGroupId::Frequency => "tần số",
            UnitGroupId::Quantity => "số lượng",
            UnitGroupId::PartsPer => "nồng độ phần triệu",
            UnitGroupId::Pace => "tốc độ chạy bộ",
            UnitGroupId::ReactivePower => "công suất phản kháng",
            UnitGroupId::ApparentPower => "công suất biểu kiến",
            UnitGroupId::FlowRate => "lưu lượng",
            UnitGroupId::Illuminance => "độ rọi",
            UnitGroupId::Torque => "mô-men xoắn",
            UnitGroupId::Charge => "điện lượng",
            UnitGroupId::Currency => "tiền tệ",
        }
    }
}

/// Ordered set of mutually convertible units
#[derive(Debug, Clone, Copy)]
pub struct UnitGroup {
    pub id: UnitGroupId,
    pub units: &'static [UnitDefinition],
}

impl UnitGroup {
    pub fn unit(&self, id: &str) -> Option<&'static UnitDefinition> {
        self.units.iter().find(|u| u.id == id)
    }

    /// First unit, preselected as the source
    pub fn default_from(&self) -> &'static UnitDefinition {
        &self.units[0]
    }

    /// Second unit, preselected as the target
    pub fn default_to(&self) -> &'static UnitDefinition {
        self.units.get(1).unwrap_or(&self.units[0])
    }

    pub fn base_unit(&self) -> Option<&'static UnitDefinition> {
        self.units.iter().find(|u| u.ratio == 1.0)
    }
}

// ============================================================================
// Ratio tables
// ============================================================================

// Length (base: metre)
const LENGTH: &[UnitDefinition] = &[
    unit("m", "Mét (m)", 1.0),
    unit("cm", "Xăng-ti-mét (cm)", 0.01),
    unit("mm", "Mi-li-mét (mm)", 0.001),
    unit("km", "Ki-lô-mét (km)", 1000.0),
    unit("dm", "Đề-xi-mét (dm)", 0.1),
    unit("um", "Mi-crô-mét (µm)", 1e-6),
    unit("nm", "Na-nô-mét (nm)", 1e-9),
    unit("in", "Inch (in)", 0.0254),
    unit("ft", "Feet (ft)", 0.3048),
    unit("yd", "Yard (yd)", 0.9144),
    unit("mi", "Dặm Anh (mi)", 1609.344),
    unit("nmi", "Hải lý (nmi)", 1852.0),
];

// Area (base: square metre)
const AREA: &[UnitDefinition] = &[
    unit("m2", "Mét vuông (m²)", 1.0),
    unit("km2", "Ki-lô-mét vuông (km²)", 1e6),
    unit("cm2", "Xăng-ti-mét vuông (cm²)", 1e-4),
    unit("mm2", "Mi-li-mét vuông (mm²)", 1e-6),
    unit("ha", "Héc-ta (ha)", 1e4),
    unit("are", "A (a)", 100.0),
    unit("sao_bb", "Sào Bắc Bộ (sào)", 360.0),
    unit("mau_bb", "Mẫu Bắc Bộ (mẫu)", 3600.0),
    unit("sao_tb", "Sào Trung Bộ (sào TB)", 500.0),
    unit("ft2", "Feet vuông (ft²)", 0.09290304),
    unit("in2", "Inch vuông (in²)", 0.00064516),
    unit("yd2", "Yard vuông (yd²)", 0.83612736),
    unit("ac", "Mẫu Anh (ac)", 4046.8564224),
    unit("mi2", "Dặm vuông (mi²)", 2_589_988.110336),
];

// Weight (base: kilogram)
const WEIGHT: &[UnitDefinition] = &[
    unit("kg", "Ki-lô-gam (kg)", 1.0),
    unit("g", "Gam (g)", 0.001),
    unit("mg", "Mi-li-gam (mg)", 1e-6),
    unit("t", "Tấn (t)", 1000.0),
    unit("ta", "Tạ (tạ)", 100.0),
    unit("yen", "Yến (yến)", 10.0),
    unit("lang", "Lạng (lạng)", 0.1),
    unit("lb", "Pound (lb)", 0.45359237),
    unit("oz", "Ounce (oz)", 0.028349523125),
    unit("st", "Stone (st)", 6.35029318),
    unit("ct", "Carat (ct)", 0.0002),
];

// Volume (base: litre)
const VOLUME: &[UnitDefinition] = &[
    unit("l", "Lít (l)", 1.0),
    unit("ml", "Mi-li-lít (ml)", 0.001),
    unit("m3", "Mét khối (m³)", 1000.0),
    unit("dm3", "Đề-xi-mét khối (dm³)", 1.0),
    unit("cm3", "Xăng-ti-mét khối (cm³)", 0.001),
    unit("gal", "Gallon Mỹ (gal)", 3.785411784),
    unit("gal_uk", "Gallon Anh (gal UK)", 4.54609),
    unit("qt", "Quart Mỹ (qt)", 0.946352946),
    unit("pt", "Pint Mỹ (pt)", 0.473176473),
    unit("cup", "Cốc Mỹ (cup)", 0.2365882365),
    unit("floz", "Ounce chất lỏng (fl oz)", 0.0295735295625),
    unit("tbsp", "Thìa canh (tbsp)", 0.01478676478125),
    unit("tsp", "Thìa cà phê (tsp)", 0.00492892159375),
];

// Time (base: second); month and year use the Gregorian mean
const TIME: &[UnitDefinition] = &[
    unit("s", "Giây (s)", 1.0),
    unit("min", "Phút (min)", 60.0),
    unit("h", "Giờ (h)", 3600.0),
    unit("ms", "Mi-li-giây (ms)", 0.001),
    unit("us", "Mi-crô-giây (µs)", 1e-6),
    unit("ns", "Na-nô-giây (ns)", 1e-9),
    unit("d", "Ngày (ngày)", 86_400.0),
    unit("wk", "Tuần (tuần)", 604_800.0),
    unit("mo", "Tháng (tháng)", 2_629_746.0),
    unit("yr", "Năm (năm)", 31_556_952.0),
    unit("decade", "Thập kỷ (thập kỷ)", 315_569_520.0),
    unit("century", "Thế kỷ (thế kỷ)", 3_155_695_200.0),
];

// Data size (base: byte)
const DATA_SIZE: &[UnitDefinition] = &[
    unit("mb", "Megabyte (MB)", 1e6),
    unit("gb", "Gigabyte (GB)", 1e9),
    unit("b", "Byte (B)", 1.0),
    unit("kb", "Kilobyte (KB)", 1e3),
    unit("tb", "Terabyte (TB)", 1e12),
    unit("pb", "Petabyte (PB)", 1e15),
    unit("bit", "Bit (bit)", 0.125),
    unit("kbit", "Kilobit (Kbit)", 125.0),
    unit("mbit", "Megabit (Mbit)", 125_000.0),
    unit("gbit", "Gigabit (Gbit)", 1.25e8),
    unit("kib", "Kibibyte (KiB)", 1024.0),
    unit("mib", "Mebibyte (MiB)", 1_048_576.0),
    unit("gib", "Gibibyte (GiB)", 1_073_741_824.0),
    unit("tib", "Tebibyte (TiB)", 1_099_511_627_776.0),
];

// Speed (base: metre per second)
const SPEED: &[UnitDefinition] = &[
    unit("kmh", "Ki-lô-mét/giờ (km/h)", 1.0 / 3.6),
    unit("ms", "Mét/giây (m/s)", 1.0),
    unit("mph", "Dặm/giờ (mph)", 0.44704),
    unit("kn", "Hải lý/giờ (kn)", 1852.0 / 3600.0),
    unit("fts", "Feet/giây (ft/s)", 0.3048),
    unit("mach", "Mach ở mực nước biển (Ma)", 340.29),
];

// Pressure (base: pascal)
const PRESSURE: &[UnitDefinition] = &[
    unit("pa", "Pascal (Pa)", 1.0),
    unit("kpa", "Kilopascal (kPa)", 1000.0),
    unit("mpa", "Megapascal (MPa)", 1e6),
    unit("bar", "Bar (bar)", 1e5),
    unit("mbar", "Millibar (mbar)", 100.0),
    unit("atm", "Átmốtphe (atm)", 101_325.0),
    unit("at", "Átmốtphe kỹ thuật (kgf/cm²)", 98_066.5),
    unit("psi", "Pound trên inch vuông (psi)", 6894.757293168),
    unit("mmhg", "Mi-li-mét thủy ngân (mmHg)", 133.322387415),
    unit("inhg", "Inch thủy ngân (inHg)", 3386.388640341),
    unit("torr", "Torr (Torr)", 101_325.0 / 760.0),
];

// Power (base: watt)
const POWER: &[UnitDefinition] = &[
    unit("w", "Oát (W)", 1.0),
    unit("kw", "Ki-lô-oát (kW)", 1000.0),
    unit("mw", "Mê-ga-oát (MW)", 1e6),
    unit("milliw", "Mi-li-oát (mW)", 0.001),
    unit("hp", "Mã lực cơ học (hp)", 745.699_871_582_270_2),
    unit("ps", "Mã lực mét (PS)", 735.49875),
    unit("btuh", "BTU/giờ (BTU/h)", 0.293_071_070_172_222_2),
    unit("kcalh", "Ki-lô-calo/giờ (kcal/h)", 1.163),
];

// Energy (base: joule)
const ENERGY: &[UnitDefinition] = &[
    unit("j", "Jun (J)", 1.0),
    unit("kj", "Ki-lô-jun (kJ)", 1000.0),
    unit("mj", "Mê-ga-jun (MJ)", 1e6),
    unit("cal", "Calo (cal)", 4.184),
    unit("kcal", "Ki-lô-calo (kcal)", 4184.0),
    unit("wh", "Oát giờ (Wh)", 3600.0),
    unit("kwh", "Ki-lô-oát giờ (kWh)", 3.6e6),
    unit("ev", "Electron-vôn (eV)", 1.602_176_634e-19),
    unit("btu", "BTU (BTU)", 1055.05585262),
    unit("ftlbf", "Foot-pound lực (ft·lbf)", 1.355_817_948_331_400_4),
];

// Voltage (base: volt)
const VOLTAGE: &[UnitDefinition] = &[
    unit("v", "Vôn (V)", 1.0),
    unit("mv", "Mi-li-vôn (mV)", 0.001),
    unit("uv", "Mi-crô-vôn (µV)", 1e-6),
    unit("kv", "Ki-lô-vôn (kV)", 1000.0),
    unit("megav", "Mê-ga-vôn (MV)", 1e6),
];

// Current (base: ampere)
const CURRENT: &[UnitDefinition] = &[
    unit("a", "Ampe (A)", 1.0),
    unit("ma", "Mi-li-ampe (mA)", 0.001),
    unit("ua", "Mi-crô-ampe (µA)", 1e-6),
    unit("ka", "Ki-lô-ampe (kA)", 1000.0),
];

// Angle (base: degree)
const ANGLE: &[UnitDefinition] = &[
    unit("deg", "Độ (°)", 1.0),
    unit("rad", "Radian (rad)", 180.0 / std::f64::consts::PI),
    unit("grad", "Gradian (grad)", 0.9),
    unit("arcmin", "Phút góc (′)", 1.0 / 60.0),
    unit("arcsec", "Giây góc (″)", 1.0 / 3600.0),
    unit("turn", "Vòng (vòng)", 360.0),
    unit("mil", "Mil NATO (mil)", 360.0 / 6400.0),
];

// Frequency (base: hertz)
const FREQUENCY: &[UnitDefinition] = &[
    unit("hz", "Héc (Hz)", 1.0),
    unit("khz", "Ki-lô-héc (kHz)", 1e3),
    unit("mhz", "Mê-ga-héc (MHz)", 1e6),
    unit("ghz", "Gi-ga-héc (GHz)", 1e9),
    unit("thz", "Tê-ra-héc (THz)", 1e12),
    unit("rpm", "Vòng/phút (rpm)", 1.0 / 60.0),
];

// Counting units (base: one piece)
const QUANTITY: &[UnitDefinition] = &[
    unit("pcs", "Cái (cái)", 1.0),
    unit("dozen", "Tá (tá)", 12.0),
    unit("pair", "Đôi (đôi)", 2.0),
    unit("chuc", "Chục (chục)", 10.0),
    unit("hundred", "Trăm (trăm)", 100.0),
    unit("gross", "Gốt (gross)", 144.0),
    unit("ream", "Ram giấy (ram)", 500.0),
    unit("thousand", "Nghìn (nghìn)", 1000.0),
];

// Parts-per notation (base: plain fraction)
const PARTS_PER: &[UnitDefinition] = &[
    unit("percent", "Phần trăm (%)", 0.01),
    unit("ppm", "Phần triệu (ppm)", 1e-6),
    unit("fraction", "Tỷ lệ thập phân (1)", 1.0),
    unit("permille", "Phần nghìn (‰)", 0.001),
    unit("ppb", "Phần tỷ (ppb)", 1e-9),
    unit("ppt", "Phần nghìn tỷ (ppt)", 1e-12),
];

// Running pace (base: minutes per kilometre). See `pace` for the derivation.
const PACE: &[UnitDefinition] = &[
    unit("min_km", "Phút/km (min/km)", 1.0),
    unit("min_mi", "Phút/dặm (min/mi)", pace::MIN_PER_MILE_IN_MIN_PER_KM),
    unit("sec_km", "Giây/km (s/km)", pace::SEC_PER_KM_IN_MIN_PER_KM),
    unit("sec_mi", "Giây/dặm (s/mi)", pace::SEC_PER_MILE_IN_MIN_PER_KM),
    unit("sec_100m", "Giây/100 m (s/100m)", pace::SEC_PER_100M_IN_MIN_PER_KM),
];

// Reactive power (base: volt-ampere reactive)
const REACTIVE_POWER: &[UnitDefinition] = &[
    unit("var", "Var (var)", 1.0),
    unit("kvar", "Ki-lô-var (kvar)", 1e3),
    unit("mvar", "Mê-ga-var (Mvar)", 1e6),
    unit("millivar", "Mi-li-var (mvar)", 1e-3),
];

// Apparent power (base: volt-ampere)
const APPARENT_POWER: &[UnitDefinition] = &[
    unit("va", "Vôn-ampe (VA)", 1.0),
    unit("kva", "Ki-lô-vôn-ampe (kVA)", 1e3),
    unit("mva", "Mê-ga-vôn-ampe (MVA)", 1e6),
    unit("milliva", "Mi-li-vôn-ampe (mVA)", 1e-3),
];

// Flow rate (base: cubic metre per second)
const FLOW_RATE: &[UnitDefinition] = &[
    unit("m3s", "Mét khối/giây (m³/s)", 1.0),
    unit("m3h", "Mét khối/giờ (m³/h)", 1.0 / 3600.0),
    unit("ls", "Lít/giây (l/s)", 0.001),
    unit("lmin", "Lít/phút (l/min)", 0.001 / 60.0),
    unit("lh", "Lít/giờ (l/h)", 0.001 / 3600.0),
    unit("gpm", "Gallon Mỹ/phút (gpm)", 0.003785411784 / 60.0),
    unit("cfs", "Feet khối/giây (ft³/s)", 0.028316846592),
    unit("cfm", "Feet khối/phút (ft³/min)", 0.028316846592 / 60.0),
];

// Illuminance (base: lux)
const ILLUMINANCE: &[UnitDefinition] = &[
    unit("lx", "Lux (lx)", 1.0),
    unit("klx", "Ki-lô-lux (klx)", 1000.0),
    unit("mlx", "Mi-li-lux (mlx)", 0.001),
    unit("fc", "Foot-candle (fc)", 10.763_910_416_709_722),
    unit("ph", "Phot (ph)", 1e4),
];

// Torque (base: newton metre)
const TORQUE: &[UnitDefinition] = &[
    unit("nm", "Niu-tơn mét (N·m)", 1.0),
    unit("knm", "Ki-lô-niu-tơn mét (kN·m)", 1000.0),
    unit("ncm", "Niu-tơn xăng-ti-mét (N·cm)", 0.01),
    unit("kgfm", "Ki-lô-gam lực mét (kgf·m)", 9.80665),
    unit("kgfcm", "Ki-lô-gam lực xăng-ti-mét (kgf·cm)", 0.0980665),
    unit("lbfft", "Pound lực feet (lbf·ft)", 1.355_817_948_331_400_4),
    unit("lbfin", "Pound lực inch (lbf·in)", 0.112_984_829_027_616_7),
];

// Electric charge (base: coulomb)
const CHARGE: &[UnitDefinition] = &[
    unit("c", "Cu-lông (C)", 1.0),
    unit("mc", "Mi-li-cu-lông (mC)", 1e-3),
    unit("uc", "Mi-crô-cu-lông (µC)", 1e-6),
    unit("nc", "Na-nô-cu-lông (nC)", 1e-9),
    unit("ah", "Ampe giờ (Ah)", 3600.0),
    unit("mah", "Mi-li-ampe giờ (mAh)", 3.6),
    unit("e", "Điện tích nguyên tố (e)", 1.602_176_634e-19),
];

// Estimated currency (base: Vietnamese dong). Fixed, approximate rates with no refresh.
const CURRENCY: &[UnitDefinition] = &[
    unit("usd", "Đô la Mỹ (USD)", 25_400.0),
    unit("vnd", "Việt Nam đồng (VND)", 1.0),
    unit("eur", "Euro (EUR)", 27_500.0),
    unit("gbp", "Bảng Anh (GBP)", 32_000.0),
    unit("jpy", "Yên Nhật (JPY)", 170.0),
    unit("krw", "Won Hàn Quốc (KRW)", 18.5),
    unit("cny", "Nhân dân tệ (CNY)", 3_500.0),
    unit("thb", "Baht Thái (THB)", 700.0),
    unit("sgd", "Đô la Singapore (SGD)", 18_800.0),
    unit("aud", "Đô la Úc (AUD)", 16_600.0),
];

/// Indexed by `UnitGroupId as usize`; order must follow `UnitGroupId::ALL`
static GROUPS: [UnitGroup; 24] = [
    UnitGroup { id: UnitGroupId::Length, units: LENGTH },
    UnitGroup { id: UnitGroupId::Area, units: AREA },
    UnitGroup { id: UnitGroupId::Weight, units: WEIGHT },
    UnitGroup { id: UnitGroupId::Volume, units: VOLUME },
    UnitGroup { id: UnitGroupId::Time, units: TIME },
    UnitGroup { id: UnitGroupId::DataSize, units: DATA_SIZE },
    UnitGroup { id: UnitGroupId::Speed, units: SPEED },
    UnitGroup { id: UnitGroupId::Pressure, units: PRESSURE },
    UnitGroup { id: UnitGroupId::Power, units: POWER },
    UnitGroup { id: UnitGroupId::Energy, units: ENERGY },
    UnitGroup { id: UnitGroupId::Voltage, units: VOLTAGE },
    UnitGroup { id: UnitGroupId::Current, units: CURRENT },
    UnitGroup { id: UnitGroupId::Angle, units: ANGLE },
    UnitGroup { id: UnitGroupId::Frequency, units: FREQUENCY },
    UnitGroup { id: UnitGroupId::Quantity, units: QUANTITY },
    UnitGroup { id: UnitGroupId::PartsPer, units: PARTS_PER },
    UnitGroup { id: UnitGroupId::Pace, units: PACE },
    UnitGroup { id: UnitGroupId::ReactivePower, units: REACTIVE_POWER },
    UnitGroup { id: UnitGroupId::ApparentPower, units: APPARENT_POWER },
    UnitGroup { id: UnitGroupId::FlowRate, units: FLOW_RATE },
    UnitGroup { id: UnitGroupId::Illuminance, units: ILLUMINANCE },
    UnitGroup { id: UnitGroupId::Torque, units: TORQUE },
    UnitGroup { id: UnitGroupId::Charge, units: CHARGE },
    UnitGroup { id: UnitGroupId::Currency, units: CURRENCY },
];

/// String id -> group, built once on first lookup
static GROUP_INDEX: Lazy<HashMap<&'static str, &'static UnitGroup>> = Lazy::new(|| {
    GROUPS.iter().map(|g| (g.id.as_str(), g)).collect()
});

pub fn group(id: UnitGroupId) -> &'static UnitGroup {
    &GROUPS[id as usize]
}

pub fn groups() -> &'static [UnitGroup] {
    &GROUPS
}

pub fn find_group(id: &str) -> Option<&'static UnitGroup> {
    GROUP_INDEX.get(id).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_group_table_matches_enum_order() {
        for (index, id) in UnitGroupId::ALL.iter().enumerate() {
            assert_eq!(GROUPS[index].id, *id);
            assert_eq!(group(*id).id, *id);
        }
    }

    #[test]
    fn test_every_group_has_single_base_unit() {
        for g in groups() {
            let bases = g.units.iter().filter(|u| u.ratio == 1.0).count();
            // dm3 and l share the litre scale
            let expected = if g.id == UnitGroupId::Volume { 2 } else { 1 };
            assert_eq!(bases, expected, "group {:?}", g.id);
            assert!(g.base_unit().is_some());
        }
    }

    #[test]
    fn test_ratios_positive_and_finite() {
        for g in groups() {
            for u in g.units {
                assert!(u.ratio.is_finite() && u.ratio > 0.0, "{} in {:?}", u.id, g.id);
            }
        }
    }

    #[test]
    fn test_unit_ids_unique_within_group() {
        for g in groups() {
            let ids: HashSet<_> = g.units.iter().map(|u| u.id).collect();
            assert_eq!(ids.len(), g.units.len(), "group {:?}", g.id);
            assert!(g.units.len() >= 2);
        }
    }

    #[test]
    fn test_defaults_are_first_two_units() {
        let length = group(UnitGroupId::Length);
        assert_eq!(length.default_from().id, "m");
        assert_eq!(length.default_to().id, "cm");
    }

    #[test]
    fn test_find_group_by_string_id() {
        assert_eq!(find_group("data_size").map(|g| g.id), Some(UnitGroupId::DataSize));
        assert!(find_group("temperature").is_none());
        assert_eq!(UnitGroupId::parse("flow_rate"), Some(UnitGroupId::FlowRate));
    }

    #[test]
    fn test_abbreviation_from_label() {
        assert_eq!(group(UnitGroupId::Length).unit("km").unwrap().abbreviation(), Some("km"));
        assert_eq!(group(UnitGroupId::Area).unit("m2").unwrap().abbreviation(), Some("m²"));
    }
}
