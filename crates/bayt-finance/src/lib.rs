//! Pricing arithmetic for Gulf property sales: mortgage plans, transaction
//! fees, broker commission and off-plan payment plans.
//!
//! All operations are pure. Amounts are returned unrounded; call the
//! `rounded()` helpers on the result types when presenting them.

pub mod commission;
pub mod error;
pub mod fees;
pub mod mortgage;
pub mod payment_plan;
pub mod rates;

pub use error::CalculationError;
pub use rates::{FeeRates, RateTable};

use bayt_types::{
    AmortizationRow, CommissionResult, FeeBreakdown, Installment, Jurisdiction, Milestone,
    MortgagePlanInput, MortgagePlanResult,
};

/// FinanceEngine entry point, owning its rate table
#[derive(Debug, Clone, Default)]
pub struct FinanceEngine {
    rates: RateTable,
}

impl FinanceEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with a substitute rate table, checked before use
    pub fn with_rates(rates: RateTable) -> Result<Self, CalculationError> {
        rates.validate()?;
        Ok(Self { rates })
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    pub fn mortgage_plan(
        &self,
        input: &MortgagePlanInput,
    ) -> Result<MortgagePlanResult, CalculationError> {
        mortgage::mortgage_plan(input)
    }

    pub fn amortization_schedule(
        &self,
        input: &MortgagePlanInput,
    ) -> Result<Vec<AmortizationRow>, CalculationError> {
        mortgage::amortization_schedule(input)
    }

    /// Fees using the jurisdiction's override, or the Gulf defaults
    pub fn fee_breakdown(
        &self,
        property_price: f64,
        jurisdiction: Option<Jurisdiction>,
    ) -> Result<FeeBreakdown, CalculationError> {
        fees::fee_breakdown(property_price, &self.rates.fee_rates(jurisdiction))
    }

    pub fn commission(
        &self,
        property_price: f64,
        jurisdiction_code: &str,
        manual_rate_percent: Option<f64>,
    ) -> Result<CommissionResult, CalculationError> {
        commission::commission(
            &self.rates,
            property_price,
            jurisdiction_code,
            manual_rate_percent,
        )
    }

    pub fn payment_plan(
        &self,
        property_price: f64,
        milestones: &[Milestone],
    ) -> Result<Vec<Installment>, CalculationError> {
        payment_plan::payment_plan(property_price, milestones)
    }
}

/// Mortgage plan from the four calculator-form fields
pub fn compute_mortgage_plan(
    property_price: f64,
    down_payment_percent: f64,
    loan_term_years: u32,
    annual_interest_rate_percent: f64,
) -> Result<MortgagePlanResult, CalculationError> {
    mortgage::mortgage_plan(&MortgagePlanInput {
        property_price,
        down_payment_percent,
        loan_term_years,
        annual_interest_rate_percent,
    })
}

/// Commission using the built-in Gulf rate table
pub fn compute_commission(
    property_price: f64,
    jurisdiction_code: &str,
    manual_rate_percent: Option<f64>,
) -> Result<CommissionResult, CalculationError> {
    FinanceEngine::new().commission(property_price, jurisdiction_code, manual_rate_percent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_engine_uses_its_own_table() {
        let mut rates = RateTable::default();
        rates.commission_rates.insert(Jurisdiction::Dubai, 1.0);
        let custom = FinanceEngine::with_rates(rates).unwrap();
        let stock = FinanceEngine::new();

        let custom_result = custom.commission(1_000_000.0, "AE-DU", None).unwrap();
        let stock_result = stock.commission(1_000_000.0, "AE-DU", None).unwrap();
        assert_eq!(custom_result.base_commission, 10_000.0);
        assert_eq!(stock_result.base_commission, 20_000.0);
    }

    #[test]
    fn test_with_rates_rejects_invalid_table() {
        let rates = RateTable {
            commission_rates: BTreeMap::from([(Jurisdiction::Oman, 250.0)]),
            ..RateTable::default()
        };
        assert!(matches!(
            FinanceEngine::with_rates(rates),
            Err(CalculationError::Config(_))
        ));
    }

    #[test]
    fn test_fee_override_applies_per_jurisdiction() {
        let mut rates = RateTable::default();
        rates.fee_overrides.insert(
            Jurisdiction::Dubai,
            FeeRates {
                vat_rate: 5.0,
                registration_rate: 4.0,
                service_rate: 0.0,
            },
        );
        let engine = FinanceEngine::with_rates(rates).unwrap();

        let dubai = engine.fee_breakdown(1_000_000.0, Some(Jurisdiction::Dubai)).unwrap();
        let qatar = engine.fee_breakdown(1_000_000.0, Some(Jurisdiction::Qatar)).unwrap();
        let default = engine.fee_breakdown(1_000_000.0, None).unwrap();
        assert_eq!(dubai.service_fee, 0.0);
        assert_eq!(qatar.service_fee, 20_000.0);
        assert_eq!(qatar, default);
    }

    #[test]
    fn test_free_functions_match_engine() {
        let engine = FinanceEngine::new();
        let input = MortgagePlanInput {
            property_price: 900_000.0,
            down_payment_percent: 25.0,
            loan_term_years: 15,
            annual_interest_rate_percent: 3.75,
        };
        assert_eq!(
            compute_mortgage_plan(900_000.0, 25.0, 15, 3.75),
            engine.mortgage_plan(&input)
        );
        assert_eq!(
            compute_commission(450_000.0, "OM-MU", None),
            engine.commission(450_000.0, "OM-MU", None)
        );
    }
}
