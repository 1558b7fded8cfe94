use crate::jurisdiction::{Currency, Jurisdiction, UNKNOWN_JURISDICTION_CODE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a regulatory identifier was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ValidationError {
    /// Input matches none of the accepted spellings
    #[error("invalid {} identifier: expected {expected}", region(.jurisdiction))]
    InvalidFormat {
        jurisdiction: Option<Jurisdiction>,
        expected: String,
    },

    /// Hint names no supported jurisdiction
    #[error("unknown jurisdiction hint '{hint}'")]
    UnknownJurisdiction { hint: String },

    /// Bare digits that several jurisdictions accept, with no hint to pick one
    #[error(
        "identifier without prefix matches {}; supply a jurisdiction or an authority prefix",
        names(.candidates)
    )]
    AmbiguousAutoDetection { candidates: Vec<Jurisdiction> },
}

fn region(jurisdiction: &Option<Jurisdiction>) -> &'static str {
    jurisdiction.map(|j| j.name()).unwrap_or("regulatory")
}

fn names(candidates: &[Jurisdiction]) -> String {
    candidates
        .iter()
        .map(|j| j.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Outcome of a single identifier validation.
///
/// `valid == true` implies `error` is `None` and `normalized_number` is the
/// canonical form. On rejection `normalized_number` still carries the
/// cleaned-up input so forms can echo it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub valid: bool,
    pub jurisdiction: String,
    pub jurisdiction_code: String,
    pub normalized_number: String,
    pub authority_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ValidationError>,
}

impl ValidationResult {
    pub fn accepted(jurisdiction: Jurisdiction, normalized_number: String) -> Self {
        Self {
            valid: true,
            jurisdiction: jurisdiction.name().to_string(),
            jurisdiction_code: jurisdiction.code().to_string(),
            normalized_number,
            authority_name: jurisdiction.authority().to_string(),
            error: None,
            error_kind: None,
        }
    }

    pub fn rejected(
        jurisdiction: Option<Jurisdiction>,
        normalized_number: String,
        error: ValidationError,
    ) -> Self {
        Self {
            valid: false,
            jurisdiction: jurisdiction.map(|j| j.name()).unwrap_or("Unknown").to_string(),
            jurisdiction_code: jurisdiction
                .map(|j| j.code())
                .unwrap_or(UNKNOWN_JURISDICTION_CODE)
                .to_string(),
            normalized_number,
            authority_name: jurisdiction.map(|j| j.authority()).unwrap_or_default().to_string(),
            error: Some(error.to_string()),
            error_kind: Some(error),
        }
    }

    /// The jurisdiction this result was attributed to, if any
    pub fn detected_jurisdiction(&self) -> Option<Jurisdiction> {
        Jurisdiction::parse_code(&self.jurisdiction_code)
    }
}

/// Round to a whole currency unit, half away from zero.
///
/// Only applied when presenting results; intermediate steps keep full
/// precision.
pub fn round_currency(amount: f64) -> f64 {
    amount.round()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionResult {
    pub base_commission: f64,
    pub vat_amount: f64,
    pub final_commission: f64,
    /// Commission rate applied, in percent
    pub rate_used: f64,
    /// VAT rate applied to the commission, in percent
    pub vat_rate: f64,
    pub currency: Currency,
}

impl CommissionResult {
    pub fn rounded(&self) -> Self {
        Self {
            base_commission: round_currency(self.base_commission),
            vat_amount: round_currency(self.vat_amount),
            final_commission: round_currency(self.final_commission),
            ..self.clone()
        }
    }
}

/// Mortgage calculator request, as posted by the calculator form
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgagePlanInput {
    pub property_price: f64,
    pub down_payment_percent: f64,
    pub loan_term_years: u32,
    #[serde(alias = "annualInterestRate")]
    pub annual_interest_rate_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgagePlanResult {
    pub down_payment: f64,
    pub loan_amount: f64,
    pub monthly_payment: f64,
    pub total_interest: f64,
    pub total_payment: f64,
    pub number_of_payments: u32,
}

impl MortgagePlanResult {
    pub fn rounded(&self) -> Self {
        Self {
            down_payment: round_currency(self.down_payment),
            loan_amount: round_currency(self.loan_amount),
            monthly_payment: round_currency(self.monthly_payment),
            total_interest: round_currency(self.total_interest),
            total_payment: round_currency(self.total_payment),
            number_of_payments: self.number_of_payments,
        }
    }
}

/// One year of an amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationRow {
    pub year: u32,
    pub principal_paid: f64,
    pub interest_paid: f64,
    pub closing_balance: f64,
}

/// Transaction costs on top of the purchase price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeBreakdown {
    pub property_price: f64,
    pub vat_amount: f64,
    pub registration_fee: f64,
    pub service_fee: f64,
    pub total_fees: f64,
    pub total_cost: f64,
}

impl FeeBreakdown {
    pub fn rounded(&self) -> Self {
        Self {
            property_price: round_currency(self.property_price),
            vat_amount: round_currency(self.vat_amount),
            registration_fee: round_currency(self.registration_fee),
            service_fee: round_currency(self.service_fee),
            total_fees: round_currency(self.total_fees),
            total_cost: round_currency(self.total_cost),
        }
    }
}

/// A payment-plan milestone as entered by the developer or agent,
/// e.g. "On booking", 10%
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub label: String,
    pub percent: f64,
}

impl Milestone {
    pub fn new(label: impl Into<String>, percent: f64) -> Self {
        Self {
            label: label.into(),
            percent,
        }
    }
}

/// One milestone of an off-plan payment plan, priced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Installment {
    pub label: String,
    pub percent: f64,
    pub amount: f64,
    pub cumulative_percent: f64,
}
