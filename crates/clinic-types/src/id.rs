//! Typed entity identifiers in canonical UUID form.
//!
//! The registry does not mint identifiers on behalf of callers; whoever
//! constructs an entity supplies its identifier. These wrappers guarantee
//! that once constructed, the contained UUID is canonical, and they keep
//! doctor and patient identifiers apart at the type level.

use crate::{IdError, IdResult};
use std::{fmt, str::FromStr};

/// Re-exported for convenience.
pub use ::uuid::Uuid;

/// Returns true if `input` is a canonical UUID: exactly 32 bytes of
/// lowercase hex (`0-9`, `a-f`), no hyphens.
fn is_canonical(input: &str) -> bool {
    input.len() == 32
        && input
            .bytes()
            .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

fn parse_canonical(input: &str, entity: &str) -> IdResult<Uuid> {
    if is_canonical(input) {
        // SAFETY: is_canonical guarantees valid hex, so parse_str will succeed
        return Ok(Uuid::parse_str(input).expect("is_canonical guarantees valid UUID"));
    }
    Err(IdError::InvalidInput(format!(
        "{} id must be 32 lowercase hex characters without hyphens, got: '{}'",
        entity, input
    )))
}

/// Identifier of a registered doctor.
///
/// Canonical form only: 32 lowercase hex characters without hyphens. Use
/// [`DoctorId::new`] to allocate a fresh identifier and [`DoctorId::parse`]
/// to validate an externally supplied one. Hyphenated or uppercase inputs
/// are rejected rather than normalised, so any identifier that round-trips
/// through a roster file or CLI argument compares equal to the original.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DoctorId(Uuid);

impl DoctorId {
    /// Generates a new random identifier (RFC 4122 version 4).
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Validates and parses an identifier that must already be canonical.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::InvalidInput`] if `input` is not 32 lowercase hex
    /// characters.
    pub fn parse(input: &str) -> IdResult<Self> {
        parse_canonical(input, "doctor").map(Self)
    }

    /// Returns the underlying `uuid::Uuid`.
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for DoctorId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DoctorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Display in canonical (simple) form
        write!(f, "{}", self.0.simple())
    }
}

impl FromStr for DoctorId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DoctorId::parse(s)
    }
}

impl serde::Serialize for DoctorId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for DoctorId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DoctorId::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Identifier of a registered patient.
///
/// Patient counterpart of [`DoctorId`]; the same canonical-form rules apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PatientId(Uuid);

impl PatientId {
    /// Generates a new random identifier (RFC 4122 version 4).
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Validates and parses an identifier that must already be canonical.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::InvalidInput`] if `input` is not 32 lowercase hex
    /// characters.
    pub fn parse(input: &str) -> IdResult<Self> {
        parse_canonical(input, "patient").map(Self)
    }

    /// Returns the underlying `uuid::Uuid`.
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for PatientId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

impl FromStr for PatientId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PatientId::parse(s)
    }
}

impl serde::Serialize for PatientId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for PatientId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PatientId::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_generates_canonical_id() {
        let id = DoctorId::new();
        let canonical = id.to_string();

        assert_eq!(canonical.len(), 32);
        assert!(is_canonical(&canonical));
    }

    #[test]
    fn test_parse_valid_canonical_id() {
        let canonical = "550e8400e29b41d4a716446655440000";
        let id = DoctorId::parse(canonical).unwrap();
        assert_eq!(id.to_string(), canonical);
    }

    #[test]
    fn test_parse_rejects_hyphenated_id() {
        let result = DoctorId::parse("550e8400-e29b-41d4-a716-446655440000");

        match result {
            Err(IdError::InvalidInput(msg)) => {
                assert!(msg.contains("32 lowercase hex characters"));
            }
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_parse_rejects_uppercase_id() {
        assert!(DoctorId::parse("550E8400E29B41D4A716446655440000").is_err());
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        // One character short
        assert!(DoctorId::parse("550e8400e29b41d4a71644665544000").is_err());
        // One character long
        assert!(PatientId::parse("550e8400e29b41d4a7164466554400000").is_err());
        assert!(PatientId::parse("").is_err());
    }

    #[test]
    fn test_parse_rejects_non_hex_characters() {
        assert!(PatientId::parse("550e8400e29b41d4a716446655440zzz").is_err());
    }

    #[test]
    fn test_error_message_names_the_entity() {
        let doctor = DoctorId::parse("nope").unwrap_err();
        assert!(doctor.to_string().contains("doctor id"));

        let patient = PatientId::parse("nope").unwrap_err();
        assert!(patient.to_string().contains("patient id"));
    }

    #[test]
    fn test_from_str_round_trip() {
        let original = PatientId::new();
        let parsed: PatientId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_doctor_and_patient_ids_are_distinct_types() {
        // Compile-time property: equality is only defined within one id type.
        // Here we just confirm two fresh ids of the same type differ.
        assert_ne!(DoctorId::new(), DoctorId::new());
        assert_ne!(PatientId::new(), PatientId::new());
    }

    #[test]
    fn test_serialize_as_canonical_string() {
        let id = DoctorId::parse("550e8400e29b41d4a716446655440000").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"550e8400e29b41d4a716446655440000\"");
    }

    #[test]
    fn test_deserialize_valid_id() {
        let id: PatientId =
            serde_json::from_str("\"550e8400e29b41d4a716446655440000\"").unwrap();
        assert_eq!(id.to_string(), "550e8400e29b41d4a716446655440000");
    }

    #[test]
    fn test_deserialize_rejects_hyphenated_id() {
        let result: Result<DoctorId, _> =
            serde_json::from_str("\"550e8400-e29b-41d4-a716-446655440000\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_uuid_accessor_matches_display() {
        let id = DoctorId::parse("550e8400e29b41d4a716446655440000").unwrap();
        assert_eq!(
            id.uuid().simple().to_string(),
            "550e8400e29b41d4a716446655440000"
        );
    }
}
