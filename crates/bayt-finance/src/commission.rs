//! Broker commission with VAT

use crate::error::{self, CalculationError};
use crate::rates::RateTable;
use bayt_types::{CommissionResult, Currency, Jurisdiction};

/// Commission on a sale.
///
/// `manual_rate_percent` overrides the table. Codes outside the supported
/// set use the table defaults and a currency derived from their country
/// prefix.
pub fn commission(
    rates: &RateTable,
    property_price: f64,
    jurisdiction_code: &str,
    manual_rate_percent: Option<f64>,
) -> Result<CommissionResult, CalculationError> {
    let price = error::non_negative("propertyPrice", property_price)?;
    let jurisdiction = Jurisdiction::parse_code(jurisdiction_code);
    if jurisdiction.is_none() {
        tracing::debug!(
            jurisdiction_code,
            "unrecognized jurisdiction code, using default commission rates"
        );
    }

    let rate_used = match manual_rate_percent {
        Some(rate) => error::percent("manualRatePercent", rate)?,
        None => rates.commission_rate(jurisdiction),
    };
    let vat_rate = rates.commission_vat_rate(jurisdiction);

    let base_commission = price * rate_used / 100.0;
    let vat_amount = base_commission * vat_rate / 100.0;

    Ok(CommissionResult {
        base_commission,
        vat_amount,
        final_commission: base_commission + vat_amount,
        rate_used,
        vat_rate,
        currency: Currency::for_code(jurisdiction_code),
    })
}
