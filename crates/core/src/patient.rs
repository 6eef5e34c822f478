//! Patients and their medical cards.

use crate::clinical::MedicalCard;
use crate::person::Person;
use crate::{RegistryError, RegistryResult};
use chrono::NaiveDate;
use clinic_types::{NonEmptyText, PatientId};
use serde::Serialize;

/// A patient known to the registry.
///
/// Every patient owns exactly one [`MedicalCard`], created empty alongside
/// the patient. The card has no life of its own: it cannot be detached,
/// swapped, or shared, and it is dropped with the patient.
#[derive(Debug, Clone, Serialize)]
pub struct Patient {
    id: PatientId,
    last_name: NonEmptyText,
    first_name: NonEmptyText,
    birth_date: NaiveDate,
    medical_card: MedicalCard,
}

impl Patient {
    /// Create a patient with an empty medical card.
    ///
    /// # Arguments
    ///
    /// * `id` - Caller-supplied identifier for this patient.
    /// * `last_name` - Family name; must not be blank.
    /// * `first_name` - Given name; must not be blank.
    /// * `birth_date` - Date of birth.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidInput`] naming the offending field if
    /// either name is empty or contains only whitespace.
    pub fn new(
        id: PatientId,
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
            medical_card: MedicalCard::new(),
        })
    }

    pub fn id(&self) -> PatientId {
        self.id
    }

    pub fn medical_card(&self) -> &MedicalCard {
        &self.medical_card
    }

    /// Mutable access to the card, for the registry's visit-record
    /// operations. External callers go through the registry so the card
    /// cannot drift while the patient is registered.
    pub(crate) fn medical_card_mut(&mut self) -> &mut MedicalCard {
        &mut self.medical_card
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

impl Person for Patient {
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
