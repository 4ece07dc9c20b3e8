//! Servicio de recordatorios de devolución
//! 
//! Selecciona los alquileres activos que vencen pronto o que ya vencieron y
//! define el canal (`ReminderNotifier`) por el que se avisa al cliente.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tracing::info;

use crate::models::{Rental, RentalStatus};

/// Alquileres activos cuya devolución cae en `(now, now + lookahead]`
pub fn find_upcoming_returns<'a>(
    rentals: &'a [Rental],
    now: DateTime<Utc>,
    lookahead: Duration,
) -> Vec<&'a Rental> {
    rentals
        .iter()
        .filter(|r| r.status == RentalStatus::Active)
        .filter(|r| r.end_date > now && r.end_date.signed_duration_since(now) <= lookahead)
        .collect()
}

/// Alquileres activos cuya fecha de devolución ya pasó
pub fn find_overdue_rentals(rentals: &[Rental], now: DateTime<Utc>) -> Vec<&Rental> {
    rentals
        .iter()
        .filter(|r| r.status == RentalStatus::Active && r.end_date < now)
        .collect()
}

/// Email de recordatorio listo para enviar
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl ReminderEmail {
    /// `None` si el cliente no tiene email registrado
    pub fn for_rental(rental: &Rental) -> Option<Self> {
        let to = rental.client_email.clone()?;
        Some(Self {
            to,
            subject: "Reminder: Your rental return is due tomorrow".to_string(),
            body: format!(
                "Hi {},\n\n\
                 This is a friendly reminder that your vehicle rental (ID: {}) \
                 is due for return tomorrow.\n\
                 Please ensure the vehicle is returned on time and with the agreed fuel level.\n\n\
                 Thank you for choosing RentFlow!",
                rental.client_name, rental.id
            ),
        })
    }
}

#[async_trait]
pub trait ReminderNotifier: Send + Sync {
    async fn send(&self, email: &ReminderEmail) -> Result<()>;
}

/// Notificador de desarrollo: escribe el email en el log en lugar de enviarlo
#[derive(Debug, Default, Clone)]
pub struct LogReminderNotifier;

#[async_trait]
impl ReminderNotifier for LogReminderNotifier {
    async fn send(&self, email: &ReminderEmail) -> Result<()> {
        info!(
            to = %email.to,
            subject = %email.subject,
            "📧 EMAIL SENT\n{}",
            email.body
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn rental(id: &str, status: RentalStatus, end_date: DateTime<Utc>) -> Rental {
        Rental {
            id: id.to_string(),
            client_name: "Alice Smith".to_string(),
            client_email: Some("alice@example.com".to_string()),
            client_phone: None,
            vehicle_id: "1".to_string(),
            start_date: end_date - Duration::days(5),
            end_date,
            duration_days: 5,
            status,
            total_amount: Decimal::from(450),
            start_mileage: 15270,
            end_mileage: None,
            final_amount: None,
            closed_at: None,
        }
    }

    #[test]
    fn test_upcoming_returns_window() {
        let now = Utc::now();
        let rentals = vec![
            rental("due-tomorrow", RentalStatus::Active, now + Duration::hours(20)),
            rental("due-later", RentalStatus::Active, now + Duration::days(3)),
            rental("edge", RentalStatus::Active, now + Duration::hours(24)),
            rental("already-due", RentalStatus::Active, now),
            rental("pending", RentalStatus::Pending, now + Duration::hours(2)),
        ];

        let ids: Vec<&str> = find_upcoming_returns(&rentals, now, Duration::hours(24))
            .into_iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["due-tomorrow", "edge"]);
    }

    #[test]
    fn test_unbounded_lookahead_includes_all_future_returns() {
        let now = Utc::now();
        let rentals = vec![
            rental("due-later", RentalStatus::Active, now + Duration::days(3650)),
            rental("past", RentalStatus::Active, now - Duration::hours(1)),
        ];

        let upcoming = find_upcoming_returns(&rentals, now, Duration::MAX);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].id, "due-later");
    }

    #[test]
    fn test_overdue_only_picks_active_rentals() {
        let now = Utc::now();
        let rentals = vec![
            rental("overdue", RentalStatus::Active, now - Duration::hours(1)),
            rental("late", RentalStatus::Late, now - Duration::days(2)),
            rental("completed", RentalStatus::Completed, now - Duration::days(2)),
            rental("future", RentalStatus::Active, now + Duration::hours(1)),
        ];

        let ids: Vec<&str> = find_overdue_rentals(&rentals, now)
            .into_iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["overdue"]);
    }

    #[test]
    fn test_reminder_email_requires_address() {
        let now = Utc::now();
        let mut r = rental("101", RentalStatus::Active, now);
        let email = ReminderEmail::for_rental(&r).unwrap();
        assert_eq!(email.to, "alice@example.com");
        assert!(email.body.contains("(ID: 101)"));

        r.client_email = None;
        assert!(ReminderEmail::for_rental(&r).is_none());
    }
}
