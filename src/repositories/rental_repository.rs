//! Repositorio de alquileres y vehículos
//! 
//! Almacenamiento en memoria compartido entre handlers y jobs. Cada operación
//! que toca alquiler y vehículo a la vez se hace bajo un único write lock.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::{Rental, RentalStatus, ReturnInspection, Vehicle, VehicleStatus};
use crate::utils::errors::{conflict_error, not_found_error, AppResult};

#[derive(Debug, Default)]
struct Store {
    rentals: HashMap<String, Rental>,
    vehicles: HashMap<String, Vehicle>,
}

/// Cierre aplicado: el alquiler actualizado y el estado que tenía antes
#[derive(Debug, Clone)]
pub struct ClosedRental {
    pub rental: Rental,
    pub previous_status: RentalStatus,
}

#[derive(Clone, Default)]
pub struct RentalRepository {
    store: Arc<RwLock<Store>>,
}

impl RentalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_vehicle(&self, vehicle: Vehicle) {
        let mut store = self.store.write().await;
        store.vehicles.insert(vehicle.id.clone(), vehicle);
    }

    pub async fn insert_rental(&self, rental: Rental) {
        let mut store = self.store.write().await;
        store.rentals.insert(rental.id.clone(), rental);
    }

    pub async fn find_rental(&self, id: &str) -> Option<Rental> {
        self.store.read().await.rentals.get(id).cloned()
    }

    pub async fn find_vehicle(&self, id: &str) -> Option<Vehicle> {
        self.store.read().await.vehicles.get(id).cloned()
    }

    pub async fn list_rentals(&self) -> Vec<Rental> {
        let store = self.store.read().await;
        let mut rentals: Vec<Rental> = store.rentals.values().cloned().collect();
        rentals.sort_by(|a, b| a.id.cmp(&b.id));
        rentals
    }

    pub async fn list_vehicles(&self) -> Vec<Vehicle> {
        let store = self.store.read().await;
        let mut vehicles: Vec<Vehicle> = store.vehicles.values().cloned().collect();
        vehicles.sort_by(|a, b| a.id.cmp(&b.id));
        vehicles
    }

    /// Marcar el alquiler como completado y devolver el vehículo a la flota.
    ///
    /// El estado se vuelve a comprobar bajo el lock: si otro cierre llegó
    /// antes, devuelve `Conflict`.
    pub async fn complete_rental(
        &self,
        rental_id: &str,
        inspection: &ReturnInspection,
        final_amount: Decimal,
        closed_at: DateTime<Utc>,
    ) -> AppResult<ClosedRental> {
        let mut store = self.store.write().await;
        let Store { rentals, vehicles } = &mut *store;

        let rental = rentals
            .get_mut(rental_id)
            .ok_or_else(|| not_found_error("Rental", rental_id))?;
        if !rental.status.is_open() {
            return Err(conflict_error(
                "Rental",
                rental_id,
                &format!("is {} and cannot be closed", rental.status),
            ));
        }
        let vehicle = vehicles
            .get_mut(&rental.vehicle_id)
            .ok_or_else(|| not_found_error("Vehicle", &rental.vehicle_id))?;

        let previous_status = rental.status;
        rental.status = RentalStatus::Completed;
        rental.end_mileage = Some(inspection.return_odometer);
        rental.final_amount = Some(final_amount);
        rental.closed_at = Some(closed_at);

        vehicle.mileage = inspection.return_odometer;
        vehicle.fuel_level = inspection.return_fuel_percent;
        vehicle.status = VehicleStatus::Available;

        Ok(ClosedRental {
            rental: rental.clone(),
            previous_status,
        })
    }

    /// Pasar a `Late` los alquileres indicados que sigan activos
    pub async fn mark_late(&self, rental_ids: &[String]) -> Vec<String> {
        let mut store = self.store.write().await;
        let mut updated = Vec::new();
        for id in rental_ids {
            if let Some(rental) = store.rentals.get_mut(id) {
                if rental.status == RentalStatus::Active {
                    rental.status = RentalStatus::Late;
                    updated.push(id.clone());
                }
            }
        }
        updated
    }
}
