pub mod jurisdiction;
pub mod types;

pub use jurisdiction::{Country, Currency, Jurisdiction, UNKNOWN_JURISDICTION_CODE};
pub use types::{
    round_currency, AmortizationRow, CommissionResult, FeeBreakdown, Installment,
    Milestone, MortgagePlanInput, MortgagePlanResult, ValidationError, ValidationResult,
};
