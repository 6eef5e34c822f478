//! Medical specialisations.
//!
//! A specialisation is identified by its name, compared without regard to
//! letter case: `"Cardiologist"`, `"cardiologist"` and `"CARDIOLOGIST"` are
//! the same specialisation. The original casing is preserved for display.
//!
//! Case folding happens once, at construction, and the folded key is cached
//! in the value. Equality, hashing and search all compare cached keys, so no
//! lookup ever folds a stored name a second time.

use crate::{RegistryError, RegistryResult};
use clinic_types::NonEmptyText;

/// A named medical specialisation with case-insensitive identity.
#[derive(Debug, Clone)]
pub struct Specialisation {
    name: NonEmptyText,
    key: String,
}

impl Specialisation {
    /// Create a specialisation from a display name.
    ///
    /// The name is trimmed; the comparison key is derived by Unicode
    /// lowercasing the trimmed name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidInput`] if the name is empty or
    /// contains only whitespace.
    pub fn new(name: impl AsRef<str>) -> RegistryResult<Self> {
        let name = NonEmptyText::new(name).map_err(|_| {
            RegistryError::InvalidInput("specialisation name cannot be empty".into())
        })?;
        let key = name.as_str().to_lowercase();

        Ok(Self { name, key })
    }

    /// The display name, with the casing it was created with.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The cached lowercase comparison key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns true if `candidate` names this specialisation, ignoring case.
    pub fn matches(&self, candidate: &str) -> bool {
        self.key == candidate.trim().to_lowercase()
    }
}

// Identity is the folded key only; display casing does not participate.
impl PartialEq for Specialisation {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Specialisation {}

impl std::hash::Hash for Specialisation {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl std::fmt::Display for Specialisation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl std::str::FromStr for Specialisation {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Specialisation::new(s)
    }
}

impl serde::Serialize for Specialisation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for Specialisation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Specialisation::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_preserves_display_casing() {
        let spec = Specialisation::new("Cardiologist").unwrap();
        assert_eq!(spec.name(), "Cardiologist");
        assert_eq!(spec.key(), "cardiologist");
    }

    #[test]
    fn test_new_trims_whitespace() {
        let spec = Specialisation::new("  Surgeon  ").unwrap();
        assert_eq!(spec.name(), "Surgeon");
    }

    #[test]
    fn test_new_rejects_empty_name() {
        assert!(matches!(
            Specialisation::new("   "),
            Err(RegistryError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_equality_ignores_case() {
        let upper = Specialisation::new("CARDIOLOGIST").unwrap();
        let lower = Specialisation::new("cardiologist").unwrap();
        let mixed = Specialisation::new("Cardiologist").unwrap();

        assert_eq!(upper, lower);
        assert_eq!(lower, mixed);
    }

    #[test]
    fn test_hash_agrees_with_equality() {
        let mut set = HashSet::new();
        set.insert(Specialisation::new("Cardiologist").unwrap());

        // Same specialisation in different casing must collide.
        assert!(!set.insert(Specialisation::new("CARDIOLOGIST").unwrap()));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_matches_ignores_case_and_whitespace() {
        let spec = Specialisation::new("Cardiologist").unwrap();
        assert!(spec.matches("cardiologist"));
        assert!(spec.matches(" CARDIOLOGIST "));
        assert!(!spec.matches("surgeon"));
    }

    #[test]
    fn test_display_uses_original_casing() {
        let spec = Specialisation::new("Cardiologist").unwrap();
        assert_eq!(format!("{}", spec), "Cardiologist");
    }

    #[test]
    fn test_serialize_emits_display_name() {
        let spec = Specialisation::new("Cardiologist").unwrap();
        assert_eq!(serde_json::to_string(&spec).unwrap(), "\"Cardiologist\"");
    }

    #[test]
    fn test_deserialize_rejects_blank_name() {
        let result: Result<Specialisation, _> = serde_json::from_str("\"  \"");
        assert!(result.is_err());
    }
}
