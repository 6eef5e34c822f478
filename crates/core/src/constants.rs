//! Constants used throughout the clinic core crate.
//!
//! This module collects the registry's fixed capacities and default opening
//! times so the limits are defined in one place.

/// Maximum number of specialisations a single doctor may hold.
pub const MAX_SPECIALISATIONS: usize = 10;

/// Maximum number of visit records a single medical card may hold.
pub const MAX_VISIT_RECORDS: usize = 100;

/// Hour (24h clock) at which the clinic opens by default.
pub const DEFAULT_OPENING_HOUR: u32 = 8;

/// Hour (24h clock) at which the clinic closes by default.
///
/// The closing instant itself is bookable: an appointment at exactly
/// 19:00:00 is within hours, one second later is not.
pub const DEFAULT_CLOSING_HOUR: u32 = 19;
