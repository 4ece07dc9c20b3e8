//! Modelos del sistema
//! 
//! Este módulo contiene los modelos de datos del dominio de alquileres:
//! vehículos, alquileres, liquidación, reservas y auditoría.

pub mod audit;
pub mod booking;
pub mod rental;
pub mod settlement;
pub mod vehicle;

pub use audit::*;
pub use booking::*;
pub use rental::*;
pub use settlement::*;
pub use vehicle::*;
