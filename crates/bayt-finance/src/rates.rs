//! Rate tables for commission, commission VAT and transaction fees.
//!
//! A [`RateTable`] is owned by each [`crate::FinanceEngine`]; there is no
//! process-wide table to mutate. All rates are percentages.

use crate::error::CalculationError;
use bayt_types::Jurisdiction;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fee rates applied to the property price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeeRates {
    pub vat_rate: f64,
    pub registration_rate: f64,
    pub service_rate: f64,
}

impl Default for FeeRates {
    /// Gulf-wide defaults: VAT 5%, registration 4%, service 2%
    fn default() -> Self {
        Self {
            vat_rate: 5.0,
            registration_rate: 4.0,
            service_rate: 2.0,
        }
    }
}

/// Commission and fee rates keyed by jurisdiction.
///
/// When loaded from JSON, omitted fields keep the built-in Gulf values; a
/// map that is present replaces the built-in map entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RateTable {
    /// Commission rate for codes missing from `commission_rates`
    pub default_commission_rate: f64,
    pub commission_rates: BTreeMap<Jurisdiction, f64>,
    /// VAT on commission for codes missing from `commission_vat_rates`
    pub default_commission_vat_rate: f64,
    pub commission_vat_rates: BTreeMap<Jurisdiction, f64>,
    pub default_fees: FeeRates,
    pub fee_overrides: BTreeMap<Jurisdiction, FeeRates>,
}

impl Default for RateTable {
    fn default() -> Self {
        let commission_rates = BTreeMap::from([
            (Jurisdiction::Dubai, 2.0),
            (Jurisdiction::AbuDhabi, 2.0),
            (Jurisdiction::SaudiArabia, 2.5),
            (Jurisdiction::Qatar, 1.0),
            (Jurisdiction::Kuwait, 1.0),
            (Jurisdiction::Oman, 3.0),
        ]);
        let commission_vat_rates = BTreeMap::from([
            (Jurisdiction::Dubai, 5.0),
            (Jurisdiction::AbuDhabi, 5.0),
            (Jurisdiction::SaudiArabia, 15.0),
            (Jurisdiction::Qatar, 0.0),
            (Jurisdiction::Bahrain, 10.0),
        ]);

        Self {
            default_commission_rate: 2.0,
            commission_rates,
            default_commission_vat_rate: 0.0,
            commission_vat_rates,
            default_fees: FeeRates::default(),
            fee_overrides: BTreeMap::new(),
        }
    }
}

impl RateTable {
    /// Load a table from JSON and check every rate
    pub fn from_json(json: &str) -> Result<Self, CalculationError> {
        let table: RateTable = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    /// Every rate must be a finite percentage in 0-100
    pub fn validate(&self) -> Result<(), CalculationError> {
        check_rate("defaultCommissionRate", self.default_commission_rate)?;
        check_rate("defaultCommissionVatRate", self.default_commission_vat_rate)?;
        check_fees("defaultFees", &self.default_fees)?;

        for (jurisdiction, rate) in &self.commission_rates {
            check_rate(&format!("commissionRates.{}", jurisdiction), *rate)?;
        }
        for (jurisdiction, rate) in &self.commission_vat_rates {
            check_rate(&format!("commissionVatRates.{}", jurisdiction), *rate)?;
        }
        for (jurisdiction, fees) in &self.fee_overrides {
            check_fees(&format!("feeOverrides.{}", jurisdiction), fees)?;
        }
        Ok(())
    }

    pub fn commission_rate(&self, jurisdiction: Option<Jurisdiction>) -> f64 {
        jurisdiction
            .and_then(|j| self.commission_rates.get(&j).copied())
            .unwrap_or(self.default_commission_rate)
    }

    pub fn commission_vat_rate(&self, jurisdiction: Option<Jurisdiction>) -> f64 {
        jurisdiction
            .and_then(|j| self.commission_vat_rates.get(&j).copied())
            .unwrap_or(self.default_commission_vat_rate)
    }

    pub fn fee_rates(&self, jurisdiction: Option<Jurisdiction>) -> FeeRates {
        jurisdiction
            .and_then(|j| self.fee_overrides.get(&j).copied())
            .unwrap_or(self.default_fees)
    }
}

fn check_rate(name: &str, rate: f64) -> Result<(), CalculationError> {
    if rate.is_finite() && (0.0..=100.0).contains(&rate) {
        Ok(())
    } else {
        Err(CalculationError::Config(format!(
            "{} must be a percentage between 0 and 100 (found: {})",
            name, rate
        )))
    }
}

fn check_fees(name: &str, fees: &FeeRates) -> Result<(), CalculationError> {
    check_rate(&format!("{}.vatRate", name), fees.vat_rate)?;
    check_rate(&format!("{}.registrationRate", name), fees.registration_rate)?;
    check_rate(&format!("{}.serviceRate", name), fees.service_rate)
}
