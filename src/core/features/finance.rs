use super::{Widget, WidgetInput};
use crate::core::convert::format::{format_number, NumberFormat};
use crate::shared::types::{FieldKind, FieldSpec, WidgetOutput};

pub const PAYMENT_LABEL: &str = "Trả hàng tháng";
pub const TOTAL_LABEL: &str = "Tổng tiền phải trả";
pub const INTEREST_LABEL: &str = "Tổng tiền lãi";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanSchedule {
    pub monthly_payment: f64,
    pub total_paid: f64,
    pub total_interest: f64,
}

/// Fixed-rate amortized loan, paid monthly
pub fn amortize(principal: f64, annual_rate_percent: f64, months: u32) -> Option<LoanSchedule> {
    if principal <= 0.0 || annual_rate_percent < 0.0 || months == 0 {
        return None;
    }
    let n = f64::from(months);
    let r = annual_rate_percent / 100.0 / 12.0;
    let monthly_payment = if r == 0.0 {
        principal / n
    } else {
        principal * r / (1.0 - (1.0 + r).powf(-n))
    };
    let total_paid = monthly_payment * n;
    Some(LoanSchedule {
        monthly_payment,
        total_paid,
        total_interest: total_paid - principal,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoanWidget;

impl Widget for LoanWidget {
    fn kind(&self) -> &'static str {
        "loan"
    }

    fn fields(&self) -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("principal", "Số tiền vay", FieldKind::Number),
            FieldSpec::new("rate", "Lãi suất năm (%)", FieldKind::Number),
            FieldSpec::new("months", "Thời hạn (tháng)", FieldKind::Number).with_default("12"),
        ]
    }

    fn evaluate(&self, input: &WidgetInput, format: &NumberFormat) -> Option<WidgetOutput> {
        let months = input.number("months")?;
        if months < 1.0 || months.fract() != 0.0 || months > f64::from(u32::MAX) {
            return None;
        }
        let schedule = amortize(input.number("principal")?, input.number("rate")?, months as u32)?;
        let money = NumberFormat { max_fraction_digits: 0, ..*format };
        Some(
            WidgetOutput::default()
                .line(PAYMENT_LABEL, format_number(schedule.monthly_payment, &money))
                .line(TOTAL_LABEL, format_number(schedule.total_paid, &money))
                .line(INTEREST_LABEL, format_number(schedule.total_interest, &money)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_rate_splits_evenly() {
        let schedule = amortize(1_200_000.0, 0.0, 12).unwrap();
        assert_eq!(schedule.monthly_payment, 100_000.0);
        assert_eq!(schedule.total_interest, 0.0);
    }

    #[test]
    fn test_amortized_payment() {
        // 100,000,000 at 12%/yr over 12 months
        let schedule = amortize(100_000_000.0, 12.0, 12).unwrap();
        assert!((schedule.monthly_payment - 8_884_878.87).abs() < 0.01);
        assert!(schedule.total_interest > 6_600_000.0 && schedule.total_interest < 6_700_000.0);
    }

    #[test]
    fn test_widget_rejects_fractional_months() {
        let input = WidgetInput::new()
            .set("principal", "1000")
            .set("rate", "10")
            .set("months", "2.5");
        assert!(LoanWidget.evaluate(&input, &NumberFormat::default()).is_none());
    }

    #[test]
    fn test_widget_output() {
        let input = WidgetInput::new()
            .set("principal", "1200000")
            .set("rate", "0")
            .set("months", "12");
        let output = LoanWidget.evaluate(&input, &NumberFormat::default()).unwrap();
        assert_eq!(output.value_of(PAYMENT_LABEL), Some("100.000"));
        assert_eq!(output.value_of(INTEREST_LABEL), Some("0"));
    }
}
