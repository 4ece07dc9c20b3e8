//! Configuración de variables de entorno
//! 
//! Este módulo maneja la configuración del entorno y variables de configuración.
//! Todas las variables tienen valor por defecto; un valor presente pero
//! mal formado es un error de arranque.

use rust_decimal::Decimal;
use std::env;
use std::str::FromStr;
use thiserror::Error;

use crate::models::{PricingPolicy, SettlementPolicy};

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} has an invalid value '{value}'")]
    Invalid { key: &'static str, value: String },

    #[error("{key} must not be negative, got '{value}'")]
    Negative { key: &'static str, value: String },

    #[error("{key} must not exceed {max}, got '{value}'")]
    TooLarge {
        key: &'static str,
        value: String,
        max: String,
    },
}

const MAX_KM_LIMIT_PER_DAY: i64 = 10_000;
const MAX_PENALTY_RATE: Decimal = Decimal::from_parts(1_000, 0, 0, false, 0);
const MAX_TAX_RATE: Decimal = Decimal::ONE;
const MAX_REMINDER_INTERVAL_SECS: u64 = 86_400;
const MAX_REMINDER_LOOKAHEAD_HOURS: i64 = 24 * 365;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    pub tenant_id: String,
    pub settlement: SettlementPolicy,
    pub pricing: PricingPolicy,
    pub reminder_interval_secs: u64,
    pub reminder_lookahead_hours: i64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            cors_origins: Vec::new(),
            tenant_id: "default".to_string(),
            settlement: SettlementPolicy::default(),
            pricing: PricingPolicy::default(),
            reminder_interval_secs: 60,
            reminder_lookahead_hours: 24,
        }
    }
}

impl EnvironmentConfig {
    /// Cargar la configuración desde las variables de entorno del proceso
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Cargar la configuración desde una fuente arbitraria de variables
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let settlement = SettlementPolicy {
            allowed_distance_per_day: bounded(
                "KM_LIMIT_PER_DAY",
                parse_var(
                    &lookup,
                    "KM_LIMIT_PER_DAY",
                    defaults.settlement.allowed_distance_per_day,
                )?,
                MAX_KM_LIMIT_PER_DAY,
            )?,
            excess_distance_rate: bounded(
                "EXCESS_KM_RATE",
                parse_var(&lookup, "EXCESS_KM_RATE", defaults.settlement.excess_distance_rate)?,
                MAX_PENALTY_RATE,
            )?,
            fuel_penalty_rate: bounded(
                "FUEL_PENALTY_RATE",
                parse_var(&lookup, "FUEL_PENALTY_RATE", defaults.settlement.fuel_penalty_rate)?,
                MAX_PENALTY_RATE,
            )?,
        };

        let pricing = PricingPolicy {
            tax_rate: bounded(
                "BOOKING_TAX_RATE",
                parse_var(&lookup, "BOOKING_TAX_RATE", defaults.pricing.tax_rate)?,
                MAX_TAX_RATE,
            )?,
        };

        let cors_origins = lookup("CORS_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            port: parse_var(&lookup, "PORT", defaults.port)?,
            host: lookup("HOST").unwrap_or(defaults.host),
            cors_origins,
            tenant_id: lookup("TENANT_ID").unwrap_or(defaults.tenant_id),
            settlement,
            pricing,
            reminder_interval_secs: bounded(
                "REMINDER_INTERVAL_SECS",
                parse_var(&lookup, "REMINDER_INTERVAL_SECS", defaults.reminder_interval_secs)?,
                MAX_REMINDER_INTERVAL_SECS,
            )?,
            reminder_lookahead_hours: bounded(
                "REMINDER_LOOKAHEAD_HOURS",
                parse_var(
                    &lookup,
                    "REMINDER_LOOKAHEAD_HOURS",
                    defaults.reminder_lookahead_hours,
                )?,
                MAX_REMINDER_LOOKAHEAD_HOURS,
            )?,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid { key, value: raw }),
        None => Ok(default),
    }
}

fn non_negative<T>(key: &'static str, value: T) -> Result<T, ConfigError>
where
    T: PartialOrd + Default + ToString,
{
    if value < T::default() {
        return Err(ConfigError::Negative {
            key,
            value: value.to_string(),
        });
    }
    Ok(value)
}

fn bounded<T>(key: &'static str, value: T, max: T) -> Result<T, ConfigError>
where
    T: PartialOrd + Default + ToString,
{
    let value = non_negative(key, value)?;
    if value > max {
        return Err(ConfigError::TooLarge {
            key,
            value: value.to_string(),
            max: max.to_string(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_match_policy_constants() {
        let config = EnvironmentConfig::from_lookup(lookup_from(&[])).unwrap();

        assert!(config.is_development());
        assert_eq!(config.port, 3000);
        assert_eq!(config.settlement.allowed_distance_per_day, 200);
        assert_eq!(config.settlement.excess_distance_rate, Decimal::new(25, 2));
        assert_eq!(config.settlement.fuel_penalty_rate, Decimal::new(250, 2));
        assert_eq!(config.pricing.tax_rate, Decimal::new(10, 2));
        assert_eq!(config.reminder_lookahead_hours, 24);
    }

    #[test]
    fn test_overrides_from_environment() {
        let config = EnvironmentConfig::from_lookup(lookup_from(&[
            ("ENVIRONMENT", "production"),
            ("PORT", "8080"),
            ("CORS_ORIGINS", "https://admin.rentflow.app, https://ops.rentflow.app,"),
            ("KM_LIMIT_PER_DAY", "250"),
            ("FUEL_PENALTY_RATE", "3.10"),
        ]))
        .unwrap();

        assert!(config.is_production());
        assert_eq!(config.server_url(), "0.0.0.0:8080");
        assert_eq!(config.cors_origins.len(), 2);
        assert_eq!(config.settlement.allowed_distance_per_day, 250);
        assert_eq!(config.settlement.fuel_penalty_rate, Decimal::new(310, 2));
    }

    #[test]
    fn test_malformed_values_are_rejected() {
        let err = EnvironmentConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "PORT",
                value: "eighty".to_string()
            }
        );

        let err = EnvironmentConfig::from_lookup(lookup_from(&[("EXCESS_KM_RATE", "-0.25")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Negative { key: "EXCESS_KM_RATE", .. }));
    }

    #[test]
    fn test_oversized_values_are_rejected() {
        let cases = [
            ("KM_LIMIT_PER_DAY", "9223372036854775807"),
            ("EXCESS_KM_RATE", "1000.01"),
            ("FUEL_PENALTY_RATE", "79228162514264337593543950335"),
            ("BOOKING_TAX_RATE", "1.5"),
            ("REMINDER_INTERVAL_SECS", "18446744073709551615"),
            ("REMINDER_LOOKAHEAD_HOURS", "9223372036854775807"),
        ];

        for (key, value) in cases {
            let err = EnvironmentConfig::from_lookup(lookup_from(&[(key, value)])).unwrap_err();
            assert!(
                matches!(err, ConfigError::TooLarge { key: k, .. } if k == key),
                "{}: {}",
                key,
                err
            );
        }
    }

    #[test]
    fn test_upper_bounds_are_inclusive() {
        let config = EnvironmentConfig::from_lookup(lookup_from(&[
            ("KM_LIMIT_PER_DAY", "10000"),
            ("BOOKING_TAX_RATE", "1"),
            ("REMINDER_LOOKAHEAD_HOURS", "8760"),
        ]))
        .unwrap();

        assert_eq!(config.settlement.allowed_distance_per_day, 10_000);
        assert_eq!(config.pricing.tax_rate, Decimal::ONE);
        assert_eq!(config.reminder_lookahead_hours, 8_760);
    }
}
