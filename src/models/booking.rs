//! Modelo de Booking
//! 
//! Presupuesto de una reserva nueva: días × tarifa diaria más impuestos.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Política de precios de las reservas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPolicy {
    /// Impuestos y tasas sobre el subtotal (0.10 = 10%)
    pub tax_rate: Decimal,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            tax_rate: Decimal::new(10, 2),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingQuote {
    pub duration_days: i64,
    pub daily_rate: Decimal,
    pub subtotal: Decimal,
    pub tax_rate: Decimal,
    pub taxes: Decimal,
    pub total: Decimal,
}
