//! Age and countdown calculators
//!
//! Both widgets accept an optional reference date so results stay
//! reproducible; without it they use the local clock.

use super::{Widget, WidgetInput};
use crate::core::convert::format::{format_number, NumberFormat};
use crate::shared::types::{FieldKind, FieldSpec, WidgetOutput};
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok()
}

/// Accepts `datetime-local` values, or a bare date meaning midnight
pub fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(text, f).ok())
        .or_else(|| parse_date(text).and_then(|d| d.and_hms_opt(0, 0, 0)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Age {
    pub years: i32,
    pub months: u32,
    pub days: u32,
    pub total_days: i64,
}

fn days_in_previous_month(date: NaiveDate) -> Option<u32> {
    date.with_day(1)?.pred_opt().map(|d| d.day())
}

/// Calendar age on `on`; `None` when born after `on`
pub fn age_between(birth: NaiveDate, on: NaiveDate) -> Option<Age> {
    if on < birth {
        return None;
    }
    let mut years = on.year() - birth.year();
    let mut months = on.month() as i32 - birth.month() as i32;
    let mut days = on.day() as i32 - birth.day() as i32;

    if days < 0 {
        months -= 1;
        let previous = days_in_previous_month(on)? as i32;
        // Birthdays past the end of a short month count from its last day
        days = on.day() as i32 + (previous - birth.day() as i32).max(0);
    }
    if months < 0 {
        years -= 1;
        months += 12;
    }

    Some(Age {
        years,
        months: months as u32,
        days: days as u32,
        total_days: (on - birth).num_days(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AgeWidget;

impl Widget for AgeWidget {
    fn kind(&self) -> &'static str {
        "age_calculator"
    }

    fn fields(&self) -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("birth_date", "Ngày sinh", FieldKind::Date),
            FieldSpec::new("on_date", "Tính đến ngày", FieldKind::Date),
        ]
    }

    fn evaluate(&self, input: &WidgetInput, format: &NumberFormat) -> Option<WidgetOutput> {
        let birth = parse_date(input.get("birth_date"))?;
        let on = match input.get("on_date").trim() {
            "" => Local::now().date_naive(),
            text => parse_date(text)?,
        };
        let age = age_between(birth, on)?;

        Some(
            WidgetOutput::default()
                .line(
                    "Tuổi",
                    format!("{} năm {} tháng {} ngày", age.years, age.months, age.days),
                )
                .line("Tổng số ngày", format_number(age.total_days as f64, format)),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

/// Time left until `target`; `None` once it has passed
pub fn remaining_until(target: NaiveDateTime, now: NaiveDateTime) -> Option<Remaining> {
    let total = (target - now).num_seconds();
    if total < 0 {
        return None;
    }
    Some(Remaining {
        days: total / 86_400,
        hours: total % 86_400 / 3_600,
        minutes: total % 3_600 / 60,
        seconds: total % 60,
    })
}

pub const COUNTDOWN_LABEL: &str = "Còn lại";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountdownWidget;

impl Widget for CountdownWidget {
    fn kind(&self) -> &'static str {
        "countdown"
    }

    fn fields(&self) -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("target", "Thời điểm", FieldKind::DateTime),
            FieldSpec::new("now", "Tính từ", FieldKind::DateTime),
        ]
    }

    fn evaluate(&self, input: &WidgetInput, _format: &NumberFormat) -> Option<WidgetOutput> {
        let target = parse_datetime(input.get("target"))?;
        let now = match input.get("now").trim() {
            "" => Local::now().naive_local(),
            text => parse_datetime(text)?,
        };

        let value = match remaining_until(target, now) {
            Some(r) => format!(
                "{} ngày {} giờ {} phút {} giây",
                r.days, r.hours, r.minutes, r.seconds
            ),
            None => "Đã qua".to_string(),
        };
        Some(WidgetOutput::default().line(COUNTDOWN_LABEL, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_borrows_days_and_months() {
        let age = age_between(date(1990, 8, 31), date(2024, 3, 1)).unwrap();
        assert_eq!((age.years, age.months, age.days), (33, 6, 1));

        let age = age_between(date(2000, 1, 15), date(2000, 1, 15)).unwrap();
        assert_eq!((age.years, age.months, age.days, age.total_days), (0, 0, 0, 0));

        assert!(age_between(date(2030, 1, 1), date(2024, 1, 1)).is_none());
    }

    #[test]
    fn test_age_widget() {
        let input = WidgetInput::new()
            .set("birth_date", "2000-01-01")
            .set("on_date", "2001-01-01");
        let output = AgeWidget.evaluate(&input, &NumberFormat::default()).unwrap();
        assert_eq!(output.value_of("Tuổi"), Some("1 năm 0 tháng 0 ngày"));
        assert_eq!(output.value_of("Tổng số ngày"), Some("366"));

        let input = WidgetInput::new().set("birth_date", "01/01/2000");
        assert!(AgeWidget.evaluate(&input, &NumberFormat::default()).is_none());
    }

    #[test]
    fn test_countdown() {
        let input = WidgetInput::new()
            .set("target", "2025-01-02T01:02")
            .set("now", "2025-01-01T00:00");
        let output = CountdownWidget.evaluate(&input, &NumberFormat::default()).unwrap();
        assert_eq!(output.value_of(COUNTDOWN_LABEL), Some("1 ngày 1 giờ 2 phút 0 giây"));

        let input = WidgetInput::new().set("target", "2020-01-01").set("now", "2025-01-01");
        let output = CountdownWidget.evaluate(&input, &NumberFormat::default()).unwrap();
        assert_eq!(output.value_of(COUNTDOWN_LABEL), Some("Đã qua"));
    }
}
