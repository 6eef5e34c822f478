//! The appointment book.
//!
//! The schedule is a dumb container: it stores appointments for the whole
//! clinic and answers participant queries, but it enforces no booking
//! policy. Business hours and double-booking are the registry's concern;
//! by the time an appointment reaches the schedule it has already passed
//! those gates.

use crate::{RegistryError, RegistryResult};
use chrono::NaiveDateTime;
use clinic_types::{DoctorId, PatientId};
use serde::Serialize;

/// A booked slot: one doctor, one patient, one exact instant.
///
/// An appointment has no duration. It is immutable once constructed;
/// rescheduling replaces the appointment rather than editing it in place.
/// Participants are referenced by identifier, not owned, so an appointment
/// can outlive the registration of either participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Appointment {
    doctor: DoctorId,
    patient: PatientId,
    scheduled_at: NaiveDateTime,
}

impl Appointment {
    pub fn new(doctor: DoctorId, patient: PatientId, scheduled_at: NaiveDateTime) -> Self {
        Self {
            doctor,
            patient,
            scheduled_at,
        }
    }

    pub fn doctor(&self) -> DoctorId {
        self.doctor
    }

    pub fn patient(&self) -> PatientId {
        self.patient
    }

    pub fn scheduled_at(&self) -> NaiveDateTime {
        self.scheduled_at
    }
}

/// All appointments for the clinic, in insertion order.
///
/// Store order carries no meaning; queries that need chronological order
/// sort on the way out.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Schedule {
    entries: Vec<Appointment>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an appointment unconditionally.
    pub fn add(&mut self, appointment: Appointment) {
        self.entries.push(appointment);
    }

    /// Remove the first entry equal to `appointment`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::AppointmentNotFound`] if no entry matches.
    /// The schedule is unchanged on error.
    pub fn remove(&mut self, appointment: &Appointment) -> RegistryResult<()> {
        match self.entries.iter().position(|a| a == appointment) {
            Some(index) => {
                self.entries.remove(index);
                Ok(())
            }
            None => Err(RegistryError::AppointmentNotFound),
        }
    }

    /// All appointments for one doctor, in store order.
    pub fn for_doctor(&self, doctor: DoctorId) -> Vec<Appointment> {
        self.entries
            .iter()
            .filter(|a| a.doctor() == doctor)
            .copied()
            .collect()
    }

    /// All appointments for one patient, in store order.
    pub fn for_patient(&self, patient: PatientId) -> Vec<Appointment> {
        self.entries
            .iter()
            .filter(|a| a.patient() == patient)
            .copied()
            .collect()
    }

    /// Every entry, in store order.
    pub fn entries(&self) -> &[Appointment] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
