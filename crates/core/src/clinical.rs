//! Clinical history: diagnoses, visit records, and the medical card.
//!
//! A visit record is a statement of fact about a past consultation. Once
//! written it never changes; correcting a mistake means removing the record
//! and adding a corrected one. Records reference their patient and doctor by
//! identifier rather than holding the entities themselves, so a record
//! remains meaningful (if orphaned) after the doctor it names is removed
//! from the registry.

use crate::constants::MAX_VISIT_RECORDS;
use crate::{RegistryError, RegistryResult};
use chrono::NaiveDate;
use clinic_types::{DoctorId, NonEmptyText, PatientId};
use serde::Serialize;

/// A coded diagnosis.
///
/// Diagnoses are plain values with no registry of their own; two visit
/// records may carry equal diagnoses without either referencing the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnosis {
    code: NonEmptyText,
    name: NonEmptyText,
    description: Option<String>,
}

impl Diagnosis {
    /// Create a diagnosis.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidInput`] naming the offending field if
    /// `code` or `name` is blank. The description is free text and may be
    /// omitted entirely.
    pub fn new(
        code: impl AsRef<str>,
        name: impl AsRef<str>,
        description: Option<String>,
    ) -> RegistryResult<Self> {
        let code = NonEmptyText::new(code)
            .map_err(|_| RegistryError::InvalidInput("diagnosis code cannot be empty".into()))?;
        let name = NonEmptyText::new(name)
            .map_err(|_| RegistryError::InvalidInput("diagnosis name cannot be empty".into()))?;

        Ok(Self {
            code,
            name,
            description,
        })
    }

    pub fn code(&self) -> &str {
        self.code.as_str()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl std::fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

/// One consultation, written after the fact.
///
/// Immutable once constructed. Equality is plain value equality over all
/// fields; the card's remove operation relies on it to find "the same
/// record" again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisitRecord {
    patient: PatientId,
    doctor: DoctorId,
    diagnosis: Diagnosis,
    visited_on: NaiveDate,
    notes: Option<String>,
}

impl VisitRecord {
    pub fn new(
        patient: PatientId,
        doctor: DoctorId,
        diagnosis: Diagnosis,
        visited_on: NaiveDate,
        notes: Option<String>,
    ) -> Self {
        Self {
            patient,
            doctor,
            diagnosis,
            visited_on,
            notes,
        }
    }

    pub fn patient(&self) -> PatientId {
        self.patient
    }

    pub fn doctor(&self) -> DoctorId {
        self.doctor
    }

    pub fn diagnosis(&self) -> &Diagnosis {
        &self.diagnosis
    }

    pub fn visited_on(&self) -> NaiveDate {
        self.visited_on
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

/// A patient's bounded visit history.
///
/// Holds at most [`MAX_VISIT_RECORDS`] records in insertion order, oldest
/// first. The card never reorders: callers that want chronological order by
/// visit date must sort the slice themselves.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MedicalCard {
    records: Vec<VisitRecord>,
}

impl MedicalCard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a visit record.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::MedicalCardFull`] if the card already holds
    /// [`MAX_VISIT_RECORDS`] records. The existing records are untouched.
    pub fn add_visit(&mut self, record: VisitRecord) -> RegistryResult<()> {
        if self.records.len() >= MAX_VISIT_RECORDS {
            return Err(RegistryError::MedicalCardFull {
                max: MAX_VISIT_RECORDS,
            });
        }

        self.records.push(record);
        Ok(())
    }

    /// Remove the first record equal to `record`.
    ///
    /// Returns true if a record was removed, false if none matched. Absence
    /// is not an error.
    pub fn remove_visit(&mut self, record: &VisitRecord) -> bool {
        match self.records.iter().position(|r| r == record) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[VisitRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
