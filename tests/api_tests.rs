use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use tower::ServiceExt;

use rentflow_backend::config::EnvironmentConfig;
use rentflow_backend::models::{Rental, RentalStatus, Vehicle, VehicleStatus};
use rentflow_backend::repositories::RentalRepository;
use rentflow_backend::routes::create_app;
use rentflow_backend::state::AppState;

fn camry() -> Vehicle {
    Vehicle {
        id: "1".to_string(),
        make: "Toyota".to_string(),
        model: "Camry".to_string(),
        year: 2023,
        license_plate: "NSW-123".to_string(),
        fuel_type: "Petrol".to_string(),
        status: VehicleStatus::Rented,
        mileage: 15420,
        fuel_level: 45,
        tank_capacity: Decimal::from(60),
        daily_rate: Decimal::from(120),
    }
}

fn rental(id: &str, status: RentalStatus) -> Rental {
    let now = Utc::now();
    Rental {
        id: id.to_string(),
        client_name: "Alice Smith".to_string(),
        client_email: Some("alice@example.com".to_string()),
        client_phone: Some("555-0101".to_string()),
        vehicle_id: "1".to_string(),
        start_date: now - Duration::days(5),
        end_date: now + Duration::hours(20),
        duration_days: 5,
        status,
        total_amount: Decimal::from(450),
        start_mileage: 15270,
        end_mileage: None,
        final_amount: None,
        closed_at: None,
    }
}

async fn create_test_app() -> (Router, RentalRepository) {
    let repository = RentalRepository::new();
    repository.insert_vehicle(camry()).await;
    repository.insert_rental(rental("101", RentalStatus::Active)).await;
    repository.insert_rental(rental("103", RentalStatus::Completed)).await;

    let state = AppState::new(EnvironmentConfig::default(), repository.clone());
    (create_app(state), repository)
}

async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    let request = match body {
        Some(body) => request.body(Body::from(body.to_string())).unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn preview_body(return_odometer: i64, return_fuel_percent: i32) -> Value {
    json!({
        "agreement": {
            "durationDays": 5,
            "baseAmount": "450.00",
            "startMileageOdometer": 15270
        },
        "vehicle": { "tankCapacityLiters": "60", "currentMileage": 15420 },
        "inspection": {
            "returnOdometer": return_odometer,
            "returnFuelPercent": return_fuel_percent
        }
    })
}

#[tokio::test]
async fn test_health_check() {
    let (app, _) = create_test_app().await;
    let (status, body) = send(app, "GET", "/api/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_settlement_preview_itemizes_fees() {
    let (app, _) = create_test_app().await;
    let (status, body) = send(
        app,
        "POST",
        "/api/settlements/preview",
        Some(preview_body(16600, 85)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let data = &body["data"];
    assert_eq!(data["excessDistance"], 330);
    assert_eq!(data["excessDistanceFee"], "82.50");
    assert_eq!(data["fuelShortfallPercent"], 15);
    assert_eq!(data["missingFuelLiters"], "9.00");
    assert_eq!(data["fuelShortfallFee"], "22.50");
    assert_eq!(data["finalTotal"], "555.00");
}

#[tokio::test]
async fn test_settlement_preview_rejects_odometer_rollback() {
    let (app, _) = create_test_app().await;
    let (status, body) = send(
        app,
        "POST",
        "/api/settlements/preview",
        Some(preview_body(15000, 100)),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "INVALID_INPUT");
    assert_eq!(body["details"]["field"], "returnOdometer");
}

#[tokio::test]
async fn test_settlement_preview_validates_fuel_range() {
    let (app, _) = create_test_app().await;
    let (status, body) = send(
        app,
        "POST",
        "/api/settlements/preview",
        Some(preview_body(15600, 150)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_settlement_preview_rejects_extreme_magnitudes() {
    let mut huge_base = preview_body(16600, 85);
    huge_base["agreement"]["baseAmount"] = json!("79228162514264337593543950335");
    let mut huge_tank = preview_body(16600, 0);
    huge_tank["vehicle"]["tankCapacityLiters"] = json!("79228162514264337593543950335");
    let huge_odometer = preview_body(i64::MAX, 100);

    let cases = [
        (huge_base, "baseAmount"),
        (huge_tank, "tankCapacityLiters"),
        (huge_odometer, "returnOdometer"),
    ];

    for (body, field) in cases {
        let (app, _) = create_test_app().await;
        let (status, body) = send(app, "POST", "/api/settlements/preview", Some(body)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{}", field);
        assert_eq!(body["code"], "INVALID_INPUT");
        assert_eq!(body["details"]["field"], field);
    }
}

#[tokio::test]
async fn test_close_rental_with_extreme_odometer_leaves_rental_open() {
    let (app, repository) = create_test_app().await;
    let (status, body) = send(
        app,
        "POST",
        "/api/rentals/101/close",
        Some(json!({ "returnOdometer": i64::MAX, "returnFuelPercent": 100 })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"]["field"], "returnOdometer");
    assert_eq!(
        repository.find_rental("101").await.unwrap().status,
        RentalStatus::Active
    );
}

#[tokio::test]
async fn test_close_rental_completes_and_settles() {
    let (app, repository) = create_test_app().await;
    let (status, body) = send(
        app,
        "POST",
        "/api/rentals/101/close",
        Some(json!({ "returnOdometer": 16600, "returnFuelPercent": 85, "actorId": "staff-1" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["rentalId"], "101");
    assert_eq!(body["data"]["finalTotal"], "555.00");

    let rental = repository.find_rental("101").await.unwrap();
    assert_eq!(rental.status, RentalStatus::Completed);
    assert_eq!(rental.final_amount, Some(Decimal::from(555)));

    let vehicle = repository.find_vehicle("1").await.unwrap();
    assert_eq!(vehicle.status, VehicleStatus::Available);
    assert_eq!(vehicle.mileage, 16600);
}

#[tokio::test]
async fn test_close_rental_twice_conflicts() {
    let (app, _) = create_test_app().await;
    let (status, body) = send(
        app,
        "POST",
        "/api/rentals/103/close",
        Some(json!({ "returnOdometer": 16600, "returnFuelPercent": 100 })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "CONFLICT");
}

#[tokio::test]
async fn test_close_unknown_rental_is_not_found() {
    let (app, _) = create_test_app().await;
    let (status, _) = send(
        app,
        "POST",
        "/api/rentals/999/close",
        Some(json!({ "returnOdometer": 16600, "returnFuelPercent": 100 })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_close_rental_with_rollback_leaves_rental_open() {
    let (app, repository) = create_test_app().await;
    let (status, body) = send(
        app,
        "POST",
        "/api/rentals/101/close",
        Some(json!({ "returnOdometer": 15000, "returnFuelPercent": 100 })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"]["field"], "returnOdometer");
    assert_eq!(
        repository.find_rental("101").await.unwrap().status,
        RentalStatus::Active
    );
}

#[tokio::test]
async fn test_booking_quote() {
    let (app, _) = create_test_app().await;
    let (status, body) = send(
        app,
        "POST",
        "/api/bookings/quote",
        Some(json!({ "vehicleId": "1", "startDate": "2024-05-01", "endDate": "2024-05-06" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["durationDays"], 5);
    assert_eq!(data["subtotal"], "600.00");
    assert_eq!(data["taxes"], "60.00");
    assert_eq!(data["total"], "660.00");
}

#[tokio::test]
async fn test_booking_quote_rejects_reversed_dates() {
    let (app, _) = create_test_app().await;
    let (status, body) = send(
        app,
        "POST",
        "/api/bookings/quote",
        Some(json!({ "vehicleId": "1", "startDate": "2024-05-06", "endDate": "2024-05-01" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_QUOTE");
}

#[tokio::test]
async fn test_trigger_reminders_job() {
    let (app, _) = create_test_app().await;
    let (status, body) = send(app, "POST", "/api/jobs/trigger", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["upcomingReturns"], 1);
    assert_eq!(body["data"]["remindersSent"], 1);
}

#[tokio::test]
async fn test_trigger_reminders_with_unbounded_lookahead() {
    let repository = RentalRepository::new();
    repository.insert_vehicle(camry()).await;
    repository.insert_rental(rental("101", RentalStatus::Active)).await;
    let config = EnvironmentConfig {
        reminder_lookahead_hours: i64::MAX,
        ..EnvironmentConfig::default()
    };
    let app = create_app(AppState::new(config, repository));

    let (status, body) = send(app, "POST", "/api/jobs/trigger", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["upcomingReturns"], 1);
}

#[tokio::test]
async fn test_list_rentals_sorted_by_id() {
    let (app, _) = create_test_app().await;
    let (status, body) = send(app, "GET", "/api/rentals", None).await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["101", "103"]);
}
