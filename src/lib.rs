//! Backend de la consola de alquiler de vehículos RentFlow.
//!
//! El núcleo es la liquidación de alquileres (`services::settlement_service`);
//! alrededor hay un API axum con presupuestos de reserva, cierre de alquileres
//! y un job de recordatorios sobre un repositorio en memoria.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod jobs;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
