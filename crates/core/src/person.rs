//! Shared behaviour for people known to the registry.
//!
//! Doctors and patients carry the same identifying fields. Rather than a
//! common base struct, each entity owns its fields and exposes them through
//! this trait, which also supplies the name-matching rule used by every
//! lookup in the registry.

use chrono::NaiveDate;
use clinic_types::NonEmptyText;

/// A person with a validated name and a date of birth.
pub trait Person {
    fn last_name(&self) -> &NonEmptyText;
    fn first_name(&self) -> &NonEmptyText;
    fn birth_date(&self) -> NaiveDate;

    /// The person's full name, first name first.
    fn full_name(&self) -> String {
        format!("{} {}", self.first_name(), self.last_name())
    }

    /// Returns true if both name parts match, ignoring letter case.
    ///
    /// This is the single matching rule for name lookups: `"smith"`,
    /// `"SMITH"` and `"Smith"` all find the same person.
    fn matches_name(&self, last_name: &str, first_name: &str) -> bool {
        self.last_name().eq_ignore_case(last_name) && self.first_name().eq_ignore_case(first_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_types::NonEmptyText;

    struct TestPerson {
        last: NonEmptyText,
        first: NonEmptyText,
        born: NaiveDate,
    }

    impl Person for TestPerson {
        fn last_name(&self) -> &NonEmptyText {
            &self.last
        }

        fn first_name(&self) -> &NonEmptyText {
            &self.first
        }

        fn birth_date(&self) -> NaiveDate {
            self.born
        }
    }

    fn person() -> TestPerson {
        TestPerson {
            last: NonEmptyText::new("Smith").unwrap(),
            first: NonEmptyText::new("Anna").unwrap(),
            born: NaiveDate::from_ymd_opt(1980, 5, 14).unwrap(),
        }
    }

    #[test]
    fn test_full_name_is_first_then_last() {
        assert_eq!(person().full_name(), "Anna Smith");
    }

    #[test]
    fn test_matches_name_ignores_case() {
        let p = person();
        assert!(p.matches_name("smith", "ANNA"));
        assert!(p.matches_name("Smith", "Anna"));
    }

    #[test]
    fn test_matches_name_requires_both_parts() {
        let p = person();
        assert!(!p.matches_name("Smith", "Berta"));
        assert!(!p.matches_name("Jones", "Anna"));
    }
}
