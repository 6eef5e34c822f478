//! Registry configuration.
//!
//! Configuration is resolved once, when a registry is constructed, and then
//! treated as fixed. The scheduling gate reads the configured hours on every
//! booking.

use crate::constants::{DEFAULT_CLOSING_HOUR, DEFAULT_OPENING_HOUR};
use crate::{RegistryError, RegistryResult};
use chrono::NaiveTime;

/// The daily window during which appointments may be scheduled.
///
/// Both bounds are inclusive: an appointment at exactly `opens_at` or
/// exactly `closes_at` is accepted. The window applies to the time-of-day
/// component only; the calendar date of an appointment is unconstrained.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BusinessHours {
    opens_at: NaiveTime,
    closes_at: NaiveTime,
}

impl BusinessHours {
    /// Create a new `BusinessHours` window.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidInput`] if `opens_at` is not strictly
    /// before `closes_at`.
    pub fn new(opens_at: NaiveTime, closes_at: NaiveTime) -> RegistryResult<Self> {
        if opens_at >= closes_at {
            return Err(RegistryError::InvalidInput(
                "business hours must open before they close".into(),
            ));
        }

        Ok(Self { opens_at, closes_at })
    }

    pub fn opens_at(&self) -> NaiveTime {
        self.opens_at
    }

    pub fn closes_at(&self) -> NaiveTime {
        self.closes_at
    }

    /// Returns true if `time` falls within the window, bounds included.
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.opens_at <= time && time <= self.closes_at
    }
}

impl Default for BusinessHours {
    /// The standard clinic day: 08:00:00 to 19:00:00, both ends bookable.
    fn default() -> Self {
        Self {
            opens_at: NaiveTime::from_hms_opt(DEFAULT_OPENING_HOUR, 0, 0)
                .expect("default opening hour is a valid time"),
            closes_at: NaiveTime::from_hms_opt(DEFAULT_CLOSING_HOUR, 0, 0)
                .expect("default closing hour is a valid time"),
        }
    }
}
