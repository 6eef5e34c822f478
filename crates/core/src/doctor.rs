//! Doctors and their specialisations.

use crate::constants::MAX_SPECIALISATIONS;
use crate::person::Person;
use crate::specialisation::Specialisation;
use crate::{RegistryError, RegistryResult};
use chrono::NaiveDate;
use clinic_types::{DoctorId, NonEmptyText};
use serde::Serialize;

/// A doctor known to the registry.
///
/// Specialisations form a set with case-insensitive membership, capped at
/// [`MAX_SPECIALISATIONS`]. Insertion order is preserved for display, so a
/// roster listing shows specialisations in the order they were granted.
///
/// The identifier is supplied by the caller at construction and never
/// changes; the registry does not mint identifiers itself.
#[derive(Debug, Clone, Serialize)]
pub struct Doctor {
    id: DoctorId,
    last_name: NonEmptyText,
    first_name: NonEmptyText,
    birth_date: NaiveDate,
    specialisations: Vec<Specialisation>,
}

impl Doctor {
    /// Create a doctor with no specialisations.
    ///
    /// # Arguments
    ///
    /// * `id` - Caller-supplied identifier for this doctor.
    /// * `last_name` - Family name; must not be blank.
    /// * `first_name` - Given name; must not be blank.
    /// * `birth_date` - Date of birth.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidInput`] naming the offending field if
    /// either name is empty or contains only whitespace.
    pub fn new(
        id: DoctorId,
        last_name: impl AsRef<str>,
        first_name: impl AsRef<str>,
        birth_date: NaiveDate,
    ) -> RegistryResult<Self> {
        let last_name = NonEmptyText::new(last_name)
            .map_err(|_| RegistryError::InvalidInput("last name cannot be empty".into()))?;
        let first_name = NonEmptyText::new(first_name)
            .map_err(|_| RegistryError::InvalidInput("first name cannot be empty".into()))?;

        Ok(Self {
            id,
            last_name,
            first_name,
            birth_date,
            specialisations: Vec::new(),
        })
    }

    pub fn id(&self) -> DoctorId {
        self.id
    }

    /// The doctor's specialisations in the order they were added.
    pub fn specialisations(&self) -> &[Specialisation] {
        &self.specialisations
    }

    /// Returns true if the doctor holds a specialisation with this name,
    /// compared without regard to letter case.
    pub fn has_specialisation(&self, name: &str) -> bool {
        self.specialisations.iter().any(|s| s.matches(name))
    }

    /// Grant a specialisation.
    ///
    /// Granting one the doctor already holds (in any casing) has no effect
    /// and succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::SpecialisationsFull`] if the doctor already
    /// holds [`MAX_SPECIALISATIONS`] distinct specialisations and this one is
    /// new. The existing set is left untouched.
    pub fn add_specialisation(&mut self, specialisation: Specialisation) -> RegistryResult<()> {
        if self.specialisations.contains(&specialisation) {
            return Ok(());
        }
        if self.specialisations.len() >= MAX_SPECIALISATIONS {
            return Err(RegistryError::SpecialisationsFull {
                max: MAX_SPECIALISATIONS,
            });
        }

        self.specialisations.push(specialisation);
        Ok(())
    }

    /// Revoke a specialisation.
    ///
    /// Returns true if it was held and has been removed, false if the doctor
    /// never held it. Absence is not an error.
    pub fn remove_specialisation(&mut self, specialisation: &Specialisation) -> bool {
        match self.specialisations.iter().position(|s| s == specialisation) {
            Some(index) => {
                self.specialisations.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace the full specialisation set.
    ///
    /// Duplicates in `specialisations` (including case-variant duplicates)
    /// are collapsed to their first occurrence before the capacity check, so
    /// a list of eleven entries naming ten distinct specialisations is
    /// accepted.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::SpecialisationsFull`] if more than
    /// [`MAX_SPECIALISATIONS`] distinct specialisations remain after
    /// collapsing duplicates. On error the current set is left untouched.
    pub fn set_specialisations(
        &mut self,
        specialisations: Vec<Specialisation>,
    ) -> RegistryResult<()> {
        let mut distinct: Vec<Specialisation> = Vec::new();
        for spec in specialisations {
            if !distinct.contains(&spec) {
                distinct.push(spec);
            }
        }

        if distinct.len() > MAX_SPECIALISATIONS {
            return Err(RegistryError::SpecialisationsFull {
                max: MAX_SPECIALISATIONS,
            });
        }

        self.specialisations = distinct;
        Ok(())
    }

    pub fn set_last_name(&mut self, last_name: NonEmptyText) {
        self.last_name = last_name;
    }

    pub fn set_first_name(&mut self, first_name: NonEmptyText) {
        self.first_name = first_name;
    }

    pub fn set_birth_date(&mut self, birth_date: NaiveDate) {
        self.birth_date = birth_date;
    }
}

impl Person for Doctor {
    fn last_name(&self) -> &NonEmptyText {
        &self.last_name
    }

    fn first_name(&self) -> &NonEmptyText {
        &self.first_name
    }

    fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn birth_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(1975, 3, 22).unwrap()
    }

    fn test_doctor() -> Doctor {
        Doctor::new(DoctorId::new(), "House", "Gregory", birth_date()).unwrap()
    }

    fn spec(name: &str) -> Specialisation {
        Specialisation::new(name).unwrap()
    }

    #[test]
    fn test_new_doctor_has_no_specialisations() {
        let doctor = test_doctor();
        assert!(doctor.specialisations().is_empty());
        assert_eq!(doctor.full_name(), "Gregory House");
        assert_eq!(doctor.birth_date(), birth_date());
    }

    #[test]
    fn test_new_rejects_blank_last_name() {
        let result = Doctor::new(DoctorId::new(), "  ", "Gregory", birth_date());
        match result {
            Err(RegistryError::InvalidInput(msg)) => assert!(msg.contains("last name")),
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_new_rejects_blank_first_name() {
        let result = Doctor::new(DoctorId::new(), "House", "", birth_date());
        match result {
            Err(RegistryError::InvalidInput(msg)) => assert!(msg.contains("first name")),
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_add_specialisation_deduplicates_across_casing() {
        let mut doctor = test_doctor();
        doctor.add_specialisation(spec("Cardiologist")).unwrap();
        doctor.add_specialisation(spec("CARDIOLOGIST")).unwrap();

        assert_eq!(doctor.specialisations().len(), 1);
        // First casing wins for display.
        assert_eq!(doctor.specialisations()[0].name(), "Cardiologist");
    }

    #[test]
    fn test_add_specialisation_enforces_capacity() {
        let mut doctor = test_doctor();
        for i in 0..MAX_SPECIALISATIONS {
            doctor.add_specialisation(spec(&format!("Field{}", i))).unwrap();
        }

        let result = doctor.add_specialisation(spec("One Too Many"));
        assert!(matches!(
            result,
            Err(RegistryError::SpecialisationsFull { max: MAX_SPECIALISATIONS })
        ));
        assert_eq!(doctor.specialisations().len(), MAX_SPECIALISATIONS);
    }

    #[test]
    fn test_adding_held_specialisation_at_capacity_still_succeeds() {
        let mut doctor = test_doctor();
        for i in 0..MAX_SPECIALISATIONS {
            doctor.add_specialisation(spec(&format!("Field{}", i))).unwrap();
        }

        // Already held, so this is a no-op rather than an overflow.
        doctor.add_specialisation(spec("FIELD0")).unwrap();
        assert_eq!(doctor.specialisations().len(), MAX_SPECIALISATIONS);
    }

    #[test]
    fn test_remove_specialisation_matches_any_casing() {
        let mut doctor = test_doctor();
        doctor.add_specialisation(spec("Cardiologist")).unwrap();

        assert!(doctor.remove_specialisation(&spec("cardiologist")));
        assert!(doctor.specialisations().is_empty());
    }

    #[test]
    fn test_remove_absent_specialisation_returns_false() {
        let mut doctor = test_doctor();
        assert!(!doctor.remove_specialisation(&spec("Surgeon")));
    }

    #[test]
    fn test_has_specialisation_ignores_case() {
        let mut doctor = test_doctor();
        doctor.add_specialisation(spec("Cardiologist")).unwrap();

        assert!(doctor.has_specialisation("cardiologist"));
        assert!(doctor.has_specialisation("CARDIOLOGIST"));
        assert!(!doctor.has_specialisation("Surgeon"));
    }

    #[test]
    fn test_set_specialisations_collapses_duplicates() {
        let mut doctor = test_doctor();
        doctor
            .set_specialisations(vec![
                spec("Cardiologist"),
                spec("Surgeon"),
                spec("CARDIOLOGIST"),
            ])
            .unwrap();

        assert_eq!(doctor.specialisations().len(), 2);
    }

    #[test]
    fn test_set_specialisations_rejects_oversized_set_without_change() {
        let mut doctor = test_doctor();
        doctor.add_specialisation(spec("Original")).unwrap();

        let oversized: Vec<Specialisation> = (0..=MAX_SPECIALISATIONS)
            .map(|i| spec(&format!("Field{}", i)))
            .collect();
        let result = doctor.set_specialisations(oversized);

        assert!(matches!(
            result,
            Err(RegistryError::SpecialisationsFull { .. })
        ));
        // Failed replacement leaves the previous set in place.
        assert_eq!(doctor.specialisations().len(), 1);
        assert!(doctor.has_specialisation("Original"));
    }

    #[test]
    fn test_set_specialisations_accepts_exactly_the_maximum() {
        let mut doctor = test_doctor();
        let full: Vec<Specialisation> = (0..MAX_SPECIALISATIONS)
            .map(|i| spec(&format!("Field{}", i)))
            .collect();

        doctor.set_specialisations(full).unwrap();
        assert_eq!(doctor.specialisations().len(), MAX_SPECIALISATIONS);
    }

    #[test]
    fn test_setters_replace_name_parts() {
        let mut doctor = test_doctor();
        doctor.set_last_name(NonEmptyText::new("Wilson").unwrap());
        doctor.set_first_name(NonEmptyText::new("James").unwrap());

        assert_eq!(doctor.full_name(), "James Wilson");
        assert!(doctor.matches_name("wilson", "james"));
    }
}
