//! Services module
//! 
//! Este módulo contiene la lógica de negocio de la aplicación: liquidación de
//! alquileres, presupuestos de reserva, recordatorios y auditoría.
//! Los servicios no conocen HTTP; los controladores los orquestan.

pub mod audit_service;
pub mod booking_quote_service;
pub mod reminder_service;
pub mod settlement_service;

pub use audit_service::*;
pub use booking_quote_service::*;
pub use reminder_service::*;
pub use settlement_service::*;
