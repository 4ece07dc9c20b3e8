//! Jobs en background

pub mod rental_reminders;
