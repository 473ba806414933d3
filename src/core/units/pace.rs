//! Running pace helpers
//!
//! Pace is time per distance, so converting between pace units is still
//! linear: one minute per mile is one minute spent on 1.609344 km, i.e.
//! `1 / 1.609344` minutes per kilometre. Speed is the reciprocal of pace and
//! cannot share a ratio table with it; use [`speed_kmh_from_pace`] and
//! [`pace_from_speed_kmh`] for that.

pub const KM_PER_MILE: f64 = 1.609344;

/// 1 min/mi expressed in min/km
pub const MIN_PER_MILE_IN_MIN_PER_KM: f64 = 1.0 / KM_PER_MILE;

/// 1 s/km expressed in min/km
pub const SEC_PER_KM_IN_MIN_PER_KM: f64 = 1.0 / 60.0;

/// 1 s/mi expressed in min/km
pub const SEC_PER_MILE_IN_MIN_PER_KM: f64 = 1.0 / (60.0 * KM_PER_MILE);

/// 1 s/100m is 10 s/km
pub const SEC_PER_100M_IN_MIN_PER_KM: f64 = 10.0 / 60.0;

/// km/h for a pace given in minutes per kilometre. Non-positive pace has no speed.
pub fn speed_kmh_from_pace(min_per_km: f64) -> Option<f64> {
    (min_per_km.is_finite() && min_per_km > 0.0).then(|| 60.0 / min_per_km)
}

pub fn pace_from_speed_kmh(kmh: f64) -> Option<f64> {
    (kmh.is_finite() && kmh > 0.0).then(|| 60.0 / kmh)
}

/// Render decimal minutes as `m:ss` (5.5 -> "5:30")
pub fn format_pace(minutes: f64) -> Option<String> {
    if !minutes.is_finite() || minutes < 0.0 {
        return None;
    }
    let total_seconds = (minutes * 60.0).round() as u64;
    Some(format!("{}:{:02}", total_seconds / 60, total_seconds % 60))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::convert::convert;
    use crate::core::units::{group, UnitGroupId};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_pace_ratios_match_derivation() {
        let pace = group(UnitGroupId::Pace);
        let min_km = pace.unit("min_km").unwrap();
        let min_mi = pace.unit("min_mi").unwrap();
        let sec_km = pace.unit("sec_km").unwrap();
        let sec_mi = pace.unit("sec_mi").unwrap();
        let sec_100m = pace.unit("sec_100m").unwrap();

        // 5 min/km is 5 * 1.609344 min/mi
        assert!(close(convert(5.0, min_km, min_mi), 5.0 * KM_PER_MILE));
        // 5 min/km is 300 s/km
        assert!(close(convert(5.0, min_km, sec_km), 300.0));
        // 300 s/km is 30 s/100m
        assert!(close(convert(300.0, sec_km, sec_100m), 30.0));
        // 8 min/mi in s/mi
        assert!(close(convert(8.0, min_mi, sec_mi), 480.0));
    }

    #[test]
    fn test_speed_pace_reciprocal() {
        assert!(close(speed_kmh_from_pace(5.0).unwrap(), 12.0));
        assert!(close(pace_from_speed_kmh(12.0).unwrap(), 5.0));
        assert!(speed_kmh_from_pace(0.0).is_none());
        assert!(pace_from_speed_kmh(-3.0).is_none());
    }

    #[test]
    fn test_format_pace() {
        assert_eq!(format_pace(5.5).as_deref(), Some("5:30"));
        assert_eq!(format_pace(4.0).as_deref(), Some("4:00"));
        assert_eq!(format_pace(f64::NAN), None);
    }
}
