//! Non-empty text validation.

use crate::TextError;

/// A string type that guarantees non-empty content.
///
/// Wraps a `String` and ensures it contains at least one non-whitespace
/// character. The input is trimmed of leading and trailing whitespace during
/// construction, so `"  Smith  "` and `"Smith"` produce the same value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// The input is trimmed of leading and trailing whitespace. If the trimmed
    /// result is empty, an error is returned.
    ///
    /// # Arguments
    ///
    /// * `input` - Any type that can be converted to a string reference
    ///
    /// # Errors
    ///
    /// Returns [`TextError::Empty`] if the trimmed input is empty or contains
    /// only whitespace.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compares this text against `other`, ignoring letter case.
    ///
    /// `other` is trimmed before comparison so that `" smith "` still matches
    /// a stored `"Smith"`. Case folding uses full Unicode lowercasing rather
    /// than the ASCII-only variant, so accented names compare correctly.
    pub fn eq_ignore_case(&self, other: &str) -> bool {
        self.0.to_lowercase() == other.trim().to_lowercase()
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for NonEmptyText {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NonEmptyText::new(s)
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_plain_text() {
        let text = NonEmptyText::new("Smith").unwrap();
        assert_eq!(text.as_str(), "Smith");
    }

    #[test]
    fn test_new_trims_surrounding_whitespace() {
        let text = NonEmptyText::new("  Smith  ").unwrap();
        assert_eq!(text.as_str(), "Smith");
    }

    #[test]
    fn test_new_rejects_empty_string() {
        let result = NonEmptyText::new("");
        assert!(matches!(result, Err(TextError::Empty)));
    }

    #[test]
    fn test_new_rejects_whitespace_only() {
        let result = NonEmptyText::new("   \t\n  ");
        assert!(matches!(result, Err(TextError::Empty)));
    }

    #[test]
    fn test_new_keeps_interior_whitespace() {
        let text = NonEmptyText::new("van der Berg").unwrap();
        assert_eq!(text.as_str(), "van der Berg");
    }

    #[test]
    fn test_eq_ignore_case_matches_different_casing() {
        let text = NonEmptyText::new("Smith").unwrap();
        assert!(text.eq_ignore_case("SMITH"));
        assert!(text.eq_ignore_case("smith"));
        assert!(text.eq_ignore_case("  sMiTh  "));
    }

    #[test]
    fn test_eq_ignore_case_rejects_different_text() {
        let text = NonEmptyText::new("Smith").unwrap();
        assert!(!text.eq_ignore_case("Smyth"));
        assert!(!text.eq_ignore_case(""));
    }

    #[test]
    fn test_display_shows_inner_text() {
        let text = NonEmptyText::new("Smith").unwrap();
        assert_eq!(format!("{}", text), "Smith");
    }

    #[test]
    fn test_from_str_round_trip() {
        let text: NonEmptyText = "Smith".parse().unwrap();
        assert_eq!(text.as_str(), "Smith");
    }

    #[test]
    fn test_serialize_as_plain_string() {
        let text = NonEmptyText::new("Smith").unwrap();
        let json = serde_json::to_string(&text).unwrap();
        assert_eq!(json, "\"Smith\"");
    }

    #[test]
    fn test_deserialize_valid_string() {
        let text: NonEmptyText = serde_json::from_str("\"Smith\"").unwrap();
        assert_eq!(text.as_str(), "Smith");
    }

    #[test]
    fn test_deserialize_rejects_empty_string() {
        let result: Result<NonEmptyText, _> = serde_json::from_str("\"   \"");
        assert!(result.is_err());
    }
}
