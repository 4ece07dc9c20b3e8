//! Utilidades del sistema
//! 
//! Este módulo contiene utilidades para manejo de errores, validación
//! y redondeo de importes.

pub mod errors;
pub mod money;
pub mod validation;

pub use errors::*;
