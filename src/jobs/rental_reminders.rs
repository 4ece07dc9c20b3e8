//! Job de recordatorios de devolución
//! 
//! Cada ejecución envía un recordatorio a los clientes cuya devolución vence
//! en las próximas horas y marca como `Late` los alquileres activos vencidos.
//! En desarrollo corre cada minuto; en producción se configura con
//! `REMINDER_INTERVAL_SECS`.

use chrono::{Duration, Utc};
use serde::Serialize;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{error, info, warn};

use crate::models::RentalStatus;
use crate::services::{find_overdue_rentals, find_upcoming_returns, ReminderEmail};
use crate::state::AppState;

/// Resumen de una ejecución del job
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReminderJobReport {
    pub upcoming_returns: usize,
    pub reminders_sent: usize,
    pub reminders_failed: usize,
    pub marked_late: Vec<String>,
}

/// Arrancar el job en background; la primera ejecución es tras un intervalo
pub fn start_rental_reminder_job(state: AppState) -> JoinHandle<()> {
    let period = std::time::Duration::from_secs(state.config.reminder_interval_secs.max(1));
    info!("⏰ Starting rental reminder background job (cada {:?})", period);

    tokio::spawn(async move {
        let mut ticker = time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            run_rental_reminders_now(&state).await;
        }
    })
}

pub async fn run_rental_reminders_now(state: &AppState) -> ReminderJobReport {
    let now = Utc::now();
    info!("[Job: rentalReminders] Running at {}", now.to_rfc3339());

    let rentals = state.repository.list_rentals().await;
    let lookahead =
        Duration::try_hours(state.config.reminder_lookahead_hours).unwrap_or(Duration::MAX);
    let upcoming = find_upcoming_returns(&rentals, now, lookahead);

    let mut report = ReminderJobReport {
        upcoming_returns: upcoming.len(),
        ..Default::default()
    };

    if upcoming.is_empty() {
        info!("[Job: rentalReminders] No upcoming returns found for tomorrow.");
    } else {
        info!("[Job: rentalReminders] Found {} upcoming returns.", upcoming.len());
    }

    for rental in upcoming {
        let Some(email) = ReminderEmail::for_rental(rental) else {
            warn!("[Job: rentalReminders] Rental {} has no client email, skipping", rental.id);
            report.reminders_failed += 1;
            continue;
        };
        match state.notifier.send(&email).await {
            Ok(()) => report.reminders_sent += 1,
            Err(e) => {
                error!("[Job: rentalReminders] Error sending reminder for {}: {}", rental.id, e);
                report.reminders_failed += 1;
            }
        }
    }

    let overdue_ids: Vec<String> = find_overdue_rentals(&rentals, now)
        .into_iter()
        .map(|r| r.id.clone())
        .collect();
    report.marked_late = state.repository.mark_late(&overdue_ids).await;
    for rental_id in &report.marked_late {
        state
            .audit
            .log_rental_status_change(rental_id, RentalStatus::Active, RentalStatus::Late, None);
    }
    if !report.marked_late.is_empty() {
        warn!(
            "[Job: rentalReminders] {} rentals flagged as late: {:?}",
            report.marked_late.len(),
            report.marked_late
        );
    }

    info!("[Job: rentalReminders] Completed successfully.");
    report
}
