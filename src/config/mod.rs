//! Configuración del proyecto
//! 
//! Este módulo contiene las variables de entorno y las políticas de tarifas
//! que se cargan al arrancar.

pub mod environment;

pub use environment::*;
