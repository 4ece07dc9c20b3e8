pub mod booking_controller;
pub mod rental_controller;
pub mod settlement_controller;
