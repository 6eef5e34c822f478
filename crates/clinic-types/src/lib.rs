//! Validated primitive types shared across the clinic registry.
//!
//! The registry never stores raw strings or raw identifiers. Inputs are
//! validated once, at the edge, and the rest of the codebase works with types
//! that cannot hold an invalid value:
//!
//! - [`NonEmptyText`] — a trimmed string guaranteed to contain at least one
//!   non-whitespace character. Used for names, diagnosis codes, and any other
//!   field where a blank value would be meaningless.
//! - [`DoctorId`] / [`PatientId`] — entity identifiers in canonical UUID form
//!   (32 lowercase hexadecimal characters, no hyphens). The two are distinct
//!   types, so a patient identifier can never be passed where a doctor
//!   identifier is expected.
//!
//! ## Canonical identifier form
//! - Length: 32
//! - Characters: `0-9` and `a-f` only
//! - Example: `550e8400e29b41d4a716446655440000`
//!
//! This is the same value you would get from `Uuid::new_v4().simple().to_string()`.
//! Externally supplied identifiers (CLI arguments, roster files) must already be
//! canonical; hyphenated or uppercase forms are rejected rather than normalised.

mod id;
mod text;

// Re-export public types
pub use id::{DoctorId, PatientId, Uuid};
pub use text::NonEmptyText;

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("text cannot be empty")]
    Empty,
}

/// Errors that can occur when parsing entity identifiers.
#[derive(Debug, thiserror::Error)]
pub enum IdError {
    /// Invalid identifier supplied
    #[error("invalid identifier: {0}")]
    InvalidInput(String),
}

/// Result type for identifier parsing.
pub type IdResult<T> = Result<T, IdError>;
