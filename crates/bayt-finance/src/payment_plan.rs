//! Off-plan payment plans: the price split across construction milestones

use crate::error::{self, CalculationError};
use bayt_types::{Installment, Milestone};

/// Allowed drift between the milestone total and 100%
const PERCENT_TOLERANCE: f64 = 0.01;

pub fn payment_plan(
    property_price: f64,
    milestones: &[Milestone],
) -> Result<Vec<Installment>, CalculationError> {
    let price = error::non_negative("propertyPrice", property_price)?;
    if milestones.is_empty() {
        return Err(CalculationError::InvalidInput {
            field: "milestones",
            reason: "at least one milestone is required".to_string(),
        });
    }

    let mut cumulative_percent = 0.0;
    let mut installments = Vec::with_capacity(milestones.len());
    for milestone in milestones {
        let percent = error::percent("milestones.percent", milestone.percent)?;
        if percent == 0.0 {
            return Err(CalculationError::InvalidInput {
                field: "milestones.percent",
                reason: format!("milestone '{}' must be above 0%", milestone.label),
            });
        }
        cumulative_percent += percent;
        installments.push(Installment {
            label: milestone.label.clone(),
            percent,
            amount: price * percent / 100.0,
            cumulative_percent,
        });
    }

    if (cumulative_percent - 100.0).abs() > PERCENT_TOLERANCE {
        return Err(CalculationError::InvalidInput {
            field: "milestones",
            reason: format!("percentages must add up to 100 (found: {})", cumulative_percent),
        });
    }
    Ok(installments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan_60_40() -> Vec<Milestone> {
        vec![
            Milestone::new("On booking", 10.0),
            Milestone::new("During construction", 50.0),
            Milestone::new("On handover", 40.0),
        ]
    }

    #[test]
    fn test_sixty_forty_plan() {
        let installments = payment_plan(1_500_000.0, &plan_60_40()).unwrap();
        assert_eq!(installments.len(), 3);
        assert_eq!(installments[0].amount, 150_000.0);
        assert_eq!(installments[1].amount, 750_000.0);
        assert_eq!(installments[2].amount, 600_000.0);
        assert_eq!(installments[1].cumulative_percent, 60.0);
        assert_eq!(installments[2].cumulative_percent, 100.0);

        let total: f64 = installments.iter().map(|i| i.amount).sum();
        assert_eq!(total, 1_500_000.0);
    }

    #[test]
    fn test_total_must_be_one_hundred() {
        let short = vec![Milestone::new("Booking", 20.0), Milestone::new("Handover", 70.0)];
        let err = payment_plan(1_000_000.0, &short).unwrap_err();
        assert!(err.to_string().contains("add up to 100"));
    }

    #[test]
    fn test_rejects_empty_and_zero_milestones() {
        assert!(payment_plan(1_000_000.0, &[]).is_err());
        let with_zero = vec![Milestone::new("Booking", 0.0), Milestone::new("Handover", 100.0)];
        assert!(payment_plan(1_000_000.0, &with_zero).is_err());
    }

    #[test]
    fn test_tolerates_thirds() {
        let thirds = vec![
            Milestone::new("First", 33.33),
            Milestone::new("Second", 33.33),
            Milestone::new("Third", 33.34),
        ];
        assert!(payment_plan(900_000.0, &thirds).is_ok());
    }
}
