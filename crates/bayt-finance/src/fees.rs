//! VAT, registration and service fees on a purchase

use crate::error::{self, CalculationError};
use crate::rates::FeeRates;
use bayt_types::FeeBreakdown;

pub fn fee_breakdown(
    property_price: f64,
    rates: &FeeRates,
) -> Result<FeeBreakdown, CalculationError> {
    let price = error::non_negative("propertyPrice", property_price)?;

    let vat_amount = price * rates.vat_rate / 100.0;
    let registration_fee = price * rates.registration_rate / 100.0;
    let service_fee = price * rates.service_rate / 100.0;
    let total_fees = vat_amount + registration_fee + service_fee;

    Ok(FeeBreakdown {
        property_price: price,
        vat_amount,
        registration_fee,
        service_fee,
        total_fees,
        total_cost: price + total_fees,
    })
}
