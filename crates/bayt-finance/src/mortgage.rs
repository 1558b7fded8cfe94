//! Mortgage plan and amortization schedule
//!
//! Uses the standard annuity formula:
//! `payment = L × r(1+r)^n / ((1+r)^n − 1)` with `r` the monthly rate and
//! `n` the number of monthly payments. Nothing is rounded here; see
//! [`MortgagePlanResult::rounded`] for display.

use crate::error::{self, CalculationError};
use bayt_types::{AmortizationRow, MortgagePlanInput, MortgagePlanResult};

/// Longest term accepted; also bounds the amortization schedule length
pub const MAX_LOAN_TERM_YEARS: u32 = 100;

/// Validate the input and compute the full plan
pub fn mortgage_plan(input: &MortgagePlanInput) -> Result<MortgagePlanResult, CalculationError> {
    let terms = LoanTerms::from_input(input)?;
    let monthly_payment = terms.monthly_payment()?;
    let total_payment = monthly_payment * f64::from(terms.payments);

    let plan = MortgagePlanResult {
        down_payment: terms.down_payment,
        loan_amount: terms.loan_amount,
        monthly_payment,
        total_interest: total_payment - terms.loan_amount,
        total_payment,
        number_of_payments: terms.payments,
    };
    tracing::debug!(
        loan_amount = plan.loan_amount,
        monthly_payment = plan.monthly_payment,
        payments = plan.number_of_payments,
        "computed mortgage plan"
    );
    Ok(plan)
}

/// Year-by-year split of each payment into principal and interest
pub fn amortization_schedule(
    input: &MortgagePlanInput,
) -> Result<Vec<AmortizationRow>, CalculationError> {
    let terms = LoanTerms::from_input(input)?;
    let payment = terms.monthly_payment()?;
    let mut balance = terms.loan_amount;
    let mut rows = Vec::with_capacity(input.loan_term_years as usize);

    for year in 1..=input.loan_term_years {
        let mut principal_paid = 0.0;
        let mut interest_paid = 0.0;
        for _ in 0..12 {
            let interest = balance * terms.monthly_rate;
            let principal = payment - interest;
            interest_paid += interest;
            principal_paid += principal;
            balance -= principal;
        }
        rows.push(AmortizationRow {
            year,
            principal_paid,
            interest_paid,
            // float drift can leave a sub-cent negative balance at the end
            closing_balance: balance.max(0.0),
        });
    }
    Ok(rows)
}

struct LoanTerms {
    down_payment: f64,
    loan_amount: f64,
    monthly_rate: f64,
    payments: u32,
}

impl LoanTerms {
    fn from_input(input: &MortgagePlanInput) -> Result<Self, CalculationError> {
        let price = error::non_negative("propertyPrice", input.property_price)?;
        let down_percent = error::percent("downPaymentPercent", input.down_payment_percent)?;
        let annual_rate =
            error::non_negative("annualInterestRatePercent", input.annual_interest_rate_percent)?;

        if !(1..=MAX_LOAN_TERM_YEARS).contains(&input.loan_term_years) {
            return Err(CalculationError::InvalidInput {
                field: "loanTermYears",
                reason: format!(
                    "must be between 1 and {} years (found: {})",
                    MAX_LOAN_TERM_YEARS, input.loan_term_years
                ),
            });
        }
        let payments = input.loan_term_years * 12;

        let down_payment = price * (down_percent / 100.0);
        Ok(Self {
            down_payment,
            loan_amount: price - down_payment,
            monthly_rate: annual_rate / 100.0 / 12.0,
            payments,
        })
    }

    /// Payment per month; errors when the plan total leaves f64 range
    fn monthly_payment(&self) -> Result<f64, CalculationError> {
        let n = f64::from(self.payments);
        let payment = if self.monthly_rate == 0.0 {
            self.loan_amount / n
        } else {
            let growth = (1.0 + self.monthly_rate).powf(n);
            let denominator = growth - 1.0;
            if denominator == 0.0 {
                // a rate below f64 resolution leaves growth at exactly 1.0
                self.loan_amount / n
            } else if growth.is_infinite() {
                // r(1+r)^n / ((1+r)^n - 1) tends to r
                self.loan_amount * self.monthly_rate
            } else {
                self.loan_amount * (self.monthly_rate * growth / denominator)
            }
        };

        if !(payment * n).is_finite() {
            return Err(CalculationError::InvalidInput {
                field: "propertyPrice",
                reason: format!("too large to finance (found: {})", self.loan_amount),
            });
        }
        Ok(payment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(price: f64, down: f64, years: u32, rate: f64) -> MortgagePlanInput {
        MortgagePlanInput {
            property_price: price,
            down_payment_percent: down,
            loan_term_years: years,
            annual_interest_rate_percent: rate,
        }
    }

    #[test]
    fn test_reference_plan() {
        let plan = mortgage_plan(&input(2_000_000.0, 20.0, 20, 4.5)).unwrap();
        assert_eq!(plan.down_payment, 400_000.0);
        assert_eq!(plan.loan_amount, 1_600_000.0);
        assert_eq!(plan.number_of_payments, 240);
        assert!(plan.monthly_payment > 0.0);
        assert_eq!(plan.total_interest, plan.total_payment - plan.loan_amount);
        // published tables give ~10,122.39 per month for these terms
        assert!((plan.monthly_payment - 10_122.39).abs() < 0.01);
    }

    #[test]
    fn test_zero_interest_is_straight_division() {
        let plan = mortgage_plan(&input(1_200_000.0, 0.0, 10, 0.0)).unwrap();
        assert_eq!(plan.monthly_payment, plan.loan_amount / 120.0);
        assert_eq!(plan.total_interest, 0.0);
    }

    #[test]
    fn test_full_down_payment_has_no_loan() {
        for rate in [0.0, 3.99] {
            let plan = mortgage_plan(&input(750_000.0, 100.0, 25, rate)).unwrap();
            assert_eq!(plan.loan_amount, 0.0);
            assert_eq!(plan.monthly_payment, 0.0);
            assert_eq!(plan.total_interest, 0.0);
            assert!(plan.total_payment.is_finite());
        }
    }

    #[test]
    fn test_negligible_rate_does_not_divide_by_zero() {
        let plan = mortgage_plan(&input(100_000.0, 0.0, 1, 1e-20)).unwrap();
        assert!(plan.monthly_payment.is_finite());
        assert!((plan.monthly_payment - 100_000.0 / 12.0).abs() < 1e-6);
    }

    #[test]
    fn test_huge_price_stays_finite() {
        let plan = mortgage_plan(&input(1e307, 20.0, 20, 4.5)).unwrap();
        assert!(plan.down_payment.is_finite());
        assert!(plan.loan_amount.is_finite());
        assert!(plan.monthly_payment.is_finite());
        assert!(plan.total_payment.is_finite());
        assert!((plan.down_payment / 2e306 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_unrepresentable_total_is_rejected() {
        let err = mortgage_plan(&input(f64::MAX, 0.0, 30, 4.5)).unwrap_err();
        assert!(matches!(
            err,
            CalculationError::InvalidInput {
                field: "propertyPrice",
                ..
            }
        ));
        assert!(amortization_schedule(&input(f64::MAX, 0.0, 30, 4.5)).is_err());
    }

    #[test]
    fn test_extreme_rate_does_not_produce_nan() {
        let plan = mortgage_plan(&input(1_000_000.0, 0.0, 100, 1e6)).unwrap();
        assert!(plan.monthly_payment.is_finite());
    }

    #[test]
    fn test_invalid_inputs() {
        let cases = [
            (input(-1.0, 20.0, 20, 4.5), "propertyPrice"),
            (input(1.0, -5.0, 20, 4.5), "downPaymentPercent"),
            (input(1.0, 100.5, 20, 4.5), "downPaymentPercent"),
            (input(1.0, 20.0, 0, 4.5), "loanTermYears"),
            (input(1.0, 20.0, 101, 4.5), "loanTermYears"),
            (input(1.0, 20.0, u32::MAX, 4.5), "loanTermYears"),
            (input(1.0, 20.0, 20, -0.1), "annualInterestRatePercent"),
            (input(f64::NAN, 20.0, 20, 4.5), "propertyPrice"),
        ];
        for (bad, expected_field) in cases {
            match mortgage_plan(&bad) {
                Err(CalculationError::InvalidInput { field, .. }) => {
                    assert_eq!(field, expected_field)
                }
                other => panic!("expected InvalidInput for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_schedule_pays_off_loan() {
        let terms = input(2_000_000.0, 20.0, 20, 4.5);
        let plan = mortgage_plan(&terms).unwrap();
        let schedule = amortization_schedule(&terms).unwrap();

        assert_eq!(schedule.len(), 20);
        assert_eq!(schedule[0].year, 1);
        let last = schedule.last().unwrap();
        assert!(last.closing_balance < 0.01);

        let principal: f64 = schedule.iter().map(|r| r.principal_paid).sum();
        let interest: f64 = schedule.iter().map(|r| r.interest_paid).sum();
        assert!((principal - plan.loan_amount).abs() < 0.01);
        assert!((interest - plan.total_interest).abs() < 0.01);

        // interest share shrinks every year
        assert!(schedule
            .windows(2)
            .all(|w| w[1].interest_paid < w[0].interest_paid));
    }

    #[test]
    fn test_schedule_without_interest() {
        let schedule = amortization_schedule(&input(120_000.0, 0.0, 2, 0.0)).unwrap();
        assert_eq!(schedule.len(), 2);
        assert!(schedule.iter().all(|r| r.interest_paid == 0.0));
        assert!((schedule[0].principal_paid - 60_000.0).abs() < 1e-6);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: loan and interest identities hold for any valid input
        #[test]
        fn plan_identities(
            price in 0.0f64..50_000_000.0,
            down in 0.0f64..=100.0,
            years in 1u32..=40,
            rate in 0.0f64..20.0,
        ) {
            let terms = MortgagePlanInput {
                property_price: price,
                down_payment_percent: down,
                loan_term_years: years,
                annual_interest_rate_percent: rate,
            };
            let plan = mortgage_plan(&terms).unwrap();
            prop_assert_eq!(plan.loan_amount, price - plan.down_payment);
            prop_assert_eq!(plan.total_payment, plan.monthly_payment * f64::from(years * 12));
            prop_assert_eq!(plan.total_interest, plan.total_payment - plan.loan_amount);
            prop_assert!(plan.monthly_payment.is_finite());
            prop_assert!(plan.total_interest >= -1e-6 * plan.loan_amount.max(1.0));
        }

        /// Property: identical inputs give bit-identical plans
        #[test]
        fn plan_is_deterministic(
            price in 0.0f64..10_000_000.0,
            years in 1u32..=30,
            rate in 0.0f64..15.0,
        ) {
            let terms = MortgagePlanInput {
                property_price: price,
                down_payment_percent: 25.0,
                loan_term_years: years,
                annual_interest_rate_percent: rate,
            };
            let first = mortgage_plan(&terms).unwrap();
            let second = mortgage_plan(&terms).unwrap();
            prop_assert_eq!(first.monthly_payment.to_bits(), second.monthly_payment.to_bits());
            prop_assert_eq!(first.total_interest.to_bits(), second.total_interest.to_bits());
        }
    }
}
