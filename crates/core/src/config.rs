//! Time-zone configuration.
//!
//! Date construction goes through an explicit [`DateTimeConfig`] snapshot
//! rather than hidden global state. A process-wide default still exists for
//! callers that do not thread a config through; changing it is only safe at
//! application start or between walks, never concurrently with one.

use std::sync::{PoisonError, RwLock};

use chrono_tz::Tz;
use thiserror::Error;

/// The default time zone used when nothing else is configured.
pub const DEFAULT_ZONE: Tz = chrono_tz::Europe::Vienna;

static GLOBAL: RwLock<DateTimeConfig> = RwLock::new(DateTimeConfig { zone: DEFAULT_ZONE });

/// Errors that can occur when changing the configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown time zone ID: {0}")]
    UnknownZone(String),
}

/// An immutable time-zone configuration snapshot.
///
/// Cheap to copy; pass it by value to the factory functions that need it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeConfig {
    zone: Tz,
}

impl DateTimeConfig {
    /// Creates a configuration for the given zone.
    pub fn new(zone: Tz) -> Self {
        Self { zone }
    }

    /// Creates a UTC configuration.
    pub fn utc() -> Self {
        Self { zone: chrono_tz::UTC }
    }

    /// Returns a snapshot of the process-wide default configuration.
    pub fn global() -> Self {
        *GLOBAL.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the configured time zone.
    pub fn zone(&self) -> Tz {
        self.zone
    }
}

impl Default for DateTimeConfig {
    fn default() -> Self {
        Self { zone: DEFAULT_ZONE }
    }
}

/// Replaces the process-wide default configuration.
pub fn set_global(config: DateTimeConfig) {
    *GLOBAL.write().unwrap_or_else(PoisonError::into_inner) = config;
}

/// Sets the process-wide default time zone from a zone ID like
/// `"Europe/Vienna"`.
///
/// An unknown ID is rejected and the previous zone stays in effect.
pub fn set_global_zone(id: &str) -> Result<(), ConfigError> {
    match id.parse::<Tz>() {
        Ok(zone) => {
            set_global(DateTimeConfig::new(zone));
            Ok(())
        }
        Err(_) => {
            tracing::warn!(zone = %id, "Unsupported time zone ID");
            Err(ConfigError::UnknownZone(id.to_string()))
        }
    }
}
