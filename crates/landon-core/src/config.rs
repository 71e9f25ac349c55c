//! Configuration types and loading
//!
//! Values are layered: built-in defaults, then an optional `landon.toml`
//! (or `.yaml`/`.json`) file, then `LANDON__SECTION__KEY` environment
//! variables.

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Paging defaults for list endpoints
    pub paging: PagingConfig,

    /// Booking calendar settings
    pub booking: BookingConfig,

    /// Log output settings
    pub logging: LoggingConfig,

    /// Public hotel details
    pub hotel: HotelConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PagingConfig {
    pub default_offset: i64,
    pub default_limit: i64,
    pub max_limit: i64,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_offset: 0,
            default_limit: 25,
            max_limit: 100,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BookingConfig {
    /// Length of one atomic slot
    pub minimum_stay_hours: i64,
    /// How far past "now" bookings may reach
    pub furthest_booking_days: i64,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            minimum_stay_hours: 12,
            furthest_booking_days: 30,
        }
    }
}

/// Upper bound for `booking.minimum_stay_hours` (one year)
pub const MAX_MINIMUM_STAY_HOURS: i64 = 24 * 366;
/// Upper bound for `booking.furthest_booking_days` (ten years)
pub const MAX_FURTHEST_BOOKING_DAYS: i64 = 3660;

impl BookingConfig {
    pub fn minimum_stay(&self) -> Result<Duration, ConfigError> {
        Duration::try_hours(self.minimum_stay_hours)
            .ok_or_else(|| invalid("booking.minimum_stay_hours", "out of range"))
    }

    pub fn horizon(&self) -> Result<Duration, ConfigError> {
        Duration::try_days(self.furthest_booking_days)
            .ok_or_else(|| invalid("booking.furthest_booking_days", "out of range"))
    }
}

/// Hotel details served by `landon info`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HotelConfig {
    pub title: String,
    pub tagline: String,
    pub email: String,
    pub website: String,
    pub location: HotelLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HotelLocation {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
}

impl Default for HotelConfig {
    fn default() -> Self {
        Self {
            title: "The Landon Hotel".to_string(),
            tagline: "You'll feel right at home here.".to_string(),
            email: "hello@landonhotel.example".to_string(),
            website: "https://landonhotel.example".to_string(),
            location: HotelLocation::default(),
        }
    }
}

impl Default for HotelLocation {
    fn default() -> Self {
        Self {
            street: "123 Main Street".to_string(),
            city: "Landon".to_string(),
            state: "CA".to_string(),
            country: "United States".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
        }
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
    #[error("Config source error: {0}")]
    Source(#[from] config::ConfigError),
}

impl From<ConfigError> for crate::error::LandonError {
    fn from(err: ConfigError) -> Self {
        crate::error::LandonError::Config(err.to_string())
    }
}

impl AppConfig {
    /// Load configuration from `landon.*` in the working directory and the
    /// environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("landon")
    }

    /// Load configuration using `file_stem` as the optional config file
    pub fn load_from(file_stem: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = config::Config::builder()
            .add_source(config::File::with_name(file_stem).required(false))
            .add_source(
                config::Environment::with_prefix("LANDON")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Check the values the engines rely on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_MINIMUM_STAY_HOURS).contains(&self.booking.minimum_stay_hours) {
            return Err(invalid(
                "booking.minimum_stay_hours",
                &format!("must be between 1 and {MAX_MINIMUM_STAY_HOURS}"),
            ));
        }
        if !(1..=MAX_FURTHEST_BOOKING_DAYS).contains(&self.booking.furthest_booking_days) {
            return Err(invalid(
                "booking.furthest_booking_days",
                &format!("must be between 1 and {MAX_FURTHEST_BOOKING_DAYS}"),
            ));
        }
        if self.hotel.title.trim().is_empty() {
            return Err(invalid("hotel.title", "must not be blank"));
        }
        if self.paging.max_limit < 1 {
            return Err(invalid("paging.max_limit", "must be at least 1"));
        }
        if !(1..=self.paging.max_limit).contains(&self.paging.default_limit) {
            return Err(invalid(
                "paging.default_limit",
                "must be between 1 and paging.max_limit",
            ));
        }
        if self.paging.default_offset < 0 {
            return Err(invalid("paging.default_offset", "must not be negative"));
        }
        Ok(())
    }
}

fn invalid(key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.paging.default_limit, 25);
        assert_eq!(config.paging.max_limit, 100);
        assert_eq!(config.booking.minimum_stay().unwrap(), Duration::hours(12));
        assert_eq!(config.booking.horizon().unwrap(), Duration::days(30));
        assert_eq!(config.hotel.title, "The Landon Hotel");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_huge_booking_durations() {
        let mut config = AppConfig::default();
        config.booking.minimum_stay_hours = i64::MAX / 10;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("minimum_stay_hours"));
        assert!(config.booking.minimum_stay().is_err());

        let mut config = AppConfig::default();
        config.booking.furthest_booking_days = 200_000_000;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("furthest_booking_days"));

        config.booking.furthest_booking_days = MAX_FURTHEST_BOOKING_DAYS;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_hotel_section_keeps_defaults() {
        let hotel: HotelConfig =
            serde_json::from_str(r#"{"title": "Landon West", "location": {"city": "Reno"}}"#)
                .unwrap();
        assert_eq!(hotel.title, "Landon West");
        assert_eq!(hotel.location.city, "Reno");
        assert_eq!(hotel.location.street, "123 Main Street");
        assert_eq!(hotel.tagline, HotelConfig::default().tagline);
    }

    #[test]
    fn test_rejects_blank_hotel_title() {
        let mut config = AppConfig::default();
        config.hotel.title = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_minimum_stay() {
        let mut config = AppConfig::default();
        config.booking.minimum_stay_hours = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("minimum_stay_hours"));
    }

    #[test]
    fn test_rejects_default_limit_above_max() {
        let mut config = AppConfig::default();
        config.paging.default_limit = 500;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = AppConfig::load_from("does-not-exist-landon").unwrap();
        assert_eq!(config.booking.minimum_stay_hours, 12);
    }
}
