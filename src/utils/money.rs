//! Redondeo de importes para presentación
//! 
//! Los cálculos trabajan con precisión completa; solo la capa de respuesta
//! redondea a céntimos.

use rust_decimal::{Decimal, RoundingStrategy};

const CURRENCY_DECIMALS: u32 = 2;

/// Redondear a 2 decimales (mitad hacia arriba) con escala fija: 555 -> "555.00"
pub fn round_currency(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(CURRENCY_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(CURRENCY_DECIMALS);
    rounded
}
