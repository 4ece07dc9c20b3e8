//! Datos de demostración
//! 
//! Flota y alquileres con los que arranca el servidor en desarrollo. Las fechas
//! son relativas al momento de carga para que el job de recordatorios tenga
//! trabajo: el 101 vence mañana y el 102 en tres días.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use super::RentalRepository;
use crate::models::{Rental, RentalStatus, Vehicle, VehicleStatus};

#[allow(clippy::too_many_arguments)]
fn vehicle(
    id: &str,
    make: &str,
    model: &str,
    year: i32,
    license_plate: &str,
    fuel_type: &str,
    status: VehicleStatus,
    mileage: i64,
    fuel_level: i32,
    tank_capacity: i64,
    daily_rate: i64,
) -> Vehicle {
    Vehicle {
        id: id.to_string(),
        make: make.to_string(),
        model: model.to_string(),
        year,
        license_plate: license_plate.to_string(),
        fuel_type: fuel_type.to_string(),
        status,
        mileage,
        fuel_level,
        tank_capacity: Decimal::from(tank_capacity),
        daily_rate: Decimal::from(daily_rate),
    }
}

#[allow(clippy::too_many_arguments)]
fn rental(
    id: &str,
    client_name: &str,
    vehicle_id: &str,
    end_date: DateTime<Utc>,
    duration_days: i32,
    status: RentalStatus,
    total_amount: i64,
    start_mileage: i64,
) -> Rental {
    let first_name = client_name.split_whitespace().next().unwrap_or(client_name);
    Rental {
        id: id.to_string(),
        client_name: client_name.to_string(),
        client_email: Some(format!("{}@example.com", first_name.to_lowercase())),
        client_phone: Some(format!("555-0{}", id)),
        vehicle_id: vehicle_id.to_string(),
        start_date: end_date - Duration::days(i64::from(duration_days)),
        end_date,
        duration_days,
        status,
        total_amount: Decimal::from(total_amount),
        start_mileage,
        end_mileage: None,
        final_amount: None,
        closed_at: None,
    }
}

pub fn demo_vehicles() -> Vec<Vehicle> {
    use VehicleStatus::*;
    vec![
        vehicle("1", "Toyota", "Camry", 2023, "NSW-123", "Petrol", Rented, 15420, 45, 60, 120),
        vehicle("2", "Hyundai", "i30", 2022, "VIC-456", "Petrol", Available, 32100, 100, 50, 95),
        vehicle("3", "Tesla", "Model 3", 2024, "QLD-789", "Electric", Available, 5000, 80, 75, 210),
        vehicle("4", "Ford", "Ranger", 2021, "WA-321", "Diesel", Maintenance, 56000, 20, 80, 145),
        vehicle("5", "Kia", "Carnival", 2023, "SA-654", "Diesel", Rented, 12000, 60, 72, 175),
        vehicle("6", "Toyota", "Corolla", 2023, "TAS-999", "Hybrid", Rented, 8000, 90, 43, 85),
    ]
}

pub fn demo_rentals(now: DateTime<Utc>) -> Vec<Rental> {
    use RentalStatus::*;
    vec![
        rental("101", "Alice Smith", "1", now + Duration::hours(20), 5, Active, 450, 15270),
        rental("102", "Bob Jones", "5", now + Duration::days(3), 16, Active, 1200, 10850),
        rental("103", "Charlie Brown", "2", now - Duration::days(20), 4, Completed, 300, 31700),
        rental("104", "David Lee", "3", now + Duration::days(9), 2, Pending, 500, 5000),
        rental("105", "Sarah Connor", "4", now - Duration::days(30), 5, Late, 850, 55400),
        rental("106", "Mike Ross", "6", now - Duration::days(3), 7, Late, 620, 7350),
    ]
}

/// Repositorio cargado con la flota de demostración
pub async fn seeded_repository(now: DateTime<Utc>) -> RentalRepository {
    let repository = RentalRepository::new();
    for vehicle in demo_vehicles() {
        repository.insert_vehicle(vehicle).await;
    }
    for rental in demo_rentals(now) {
        repository.insert_rental(rental).await;
    }
    repository
}
