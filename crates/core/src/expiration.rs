//! Expiration-tracking value objects.
//!
//! An expiration is an optional instant; a value without one never expires.
//! Expiry is strict: a value expires the moment its instant lies in the past,
//! not at the instant itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Anything that carries an optional expiration instant.
pub trait Expirable {
    /// Returns the expiration of this value.
    fn expiration(&self) -> Expiration;

    /// Returns true if an expiration instant is set.
    fn is_expiration_defined(&self) -> bool {
        self.expiration().is_defined()
    }

    /// Returns true if the value was expired at the given instant.
    fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expiration().is_expired_at(now)
    }

    /// Returns true if the value is expired now.
    fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// An optional expiration instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expiration {
    pub expires_at: Option<DateTime<Utc>>,
}

impl Expiration {
    /// Creates an expiration that never triggers.
    pub fn never() -> Self {
        Self { expires_at: None }
    }

    /// Creates an expiration at the given instant.
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            expires_at: Some(instant),
        }
    }

    /// Returns true if an expiration instant is set.
    pub fn is_defined(&self) -> bool {
        self.expires_at.is_some()
    }

    /// Returns true if the expiration instant lies strictly before `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at < now)
    }

    /// Returns true if the expiration instant lies in the past.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

impl Expirable for Expiration {
    fn expiration(&self) -> Expiration {
        *self
    }
}

/// A value with an expiration and an optional replacement to fall back to
/// once it has expired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expiring<T> {
    pub value: T,
    pub expiration: Expiration,
    pub replacement: Option<T>,
}

impl<T> Expiring<T> {
    /// Creates a value that never expires.
    pub fn never(value: T) -> Self {
        Self {
            value,
            expiration: Expiration::never(),
            replacement: None,
        }
    }

    /// Creates a value expiring at the given instant.
    pub fn until(value: T, expires_at: DateTime<Utc>) -> Self {
        Self {
            value,
            expiration: Expiration::at(expires_at),
            replacement: None,
        }
    }

    /// Sets the replacement used once the value has expired.
    pub fn with_replacement(mut self, replacement: T) -> Self {
        self.replacement = Some(replacement);
        self
    }

    /// Returns the value, or its replacement once expired and one is set.
    /// An expired value without a replacement yields `None`.
    pub fn current_at(&self, now: DateTime<Utc>) -> Option<&T> {
        if self.expiration.is_expired_at(now) {
            self.replacement.as_ref()
        } else {
            Some(&self.value)
        }
    }

    /// Returns the currently valid value, evaluated against `Utc::now()`.
    pub fn current(&self) -> Option<&T> {
        self.current_at(Utc::now())
    }
}

impl<T> Expirable for Expiring<T> {
    fn expiration(&self) -> Expiration {
        self.expiration
    }
}
