//! Servicio de presupuestos de reserva
//! 
//! Calcula el precio de una reserva nueva a partir de la tarifa diaria del
//! vehículo y el rango de fechas elegido en el asistente de reserva.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{BookingQuote, PricingPolicy};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuoteError {
    #[error("End date {end} is before start date {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Daily rate must be greater than 0, got {0}")]
    InvalidDailyRate(Decimal),
}

/// Días facturables entre dos fechas; una reserva en el mismo día cuenta como 1
pub fn rental_duration_days(start: NaiveDate, end: NaiveDate) -> Result<i64, QuoteError> {
    if end < start {
        return Err(QuoteError::InvalidDateRange { start, end });
    }
    Ok((end - start).num_days().max(1))
}

pub fn quote_booking(
    daily_rate: Decimal,
    start: NaiveDate,
    end: NaiveDate,
    policy: &PricingPolicy,
) -> Result<BookingQuote, QuoteError> {
    if daily_rate <= Decimal::ZERO {
        return Err(QuoteError::InvalidDailyRate(daily_rate));
    }

    let duration_days = rental_duration_days(start, end)?;
    let subtotal = Decimal::from(duration_days) * daily_rate;
    let taxes = subtotal * policy.tax_rate;

    Ok(BookingQuote {
        duration_days,
        daily_rate,
        subtotal,
        tax_rate: policy.tax_rate,
        taxes,
        total: subtotal + taxes,
    })
}
