use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::BookingQuote;
use crate::utils::money::round_currency;
use crate::utils::validation::validate_not_empty;

// Request para presupuestar una reserva
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingQuoteRequest {
    #[validate(custom = "validate_not_empty")]
    pub vehicle_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

// Response del presupuesto
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingQuoteResponse {
    pub vehicle_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration_days: i64,
    pub daily_rate: Decimal,
    pub subtotal: Decimal,
    pub tax_rate: Decimal,
    pub taxes: Decimal,
    pub total: Decimal,
}

impl BookingQuoteResponse {
    pub fn new(request: &BookingQuoteRequest, quote: &BookingQuote) -> Self {
        Self {
            vehicle_id: request.vehicle_id.clone(),
            start_date: request.start_date,
            end_date: request.end_date,
            duration_days: quote.duration_days,
            daily_rate: round_currency(quote.daily_rate),
            subtotal: round_currency(quote.subtotal),
            tax_rate: quote.tax_rate,
            taxes: round_currency(quote.taxes),
            total: round_currency(quote.total),
        }
    }
}
