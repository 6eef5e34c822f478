//! The clinic registry.
//!
//! [`Hospital`] owns the doctor and patient stores and the schedule, and is
//! the only write path into any of them. Every booking passes three gates in
//! a fixed order: both participants must be registered, the time of day must
//! fall within business hours, and the doctor must be free at that exact
//! instant. Compound operations validate everything before mutating
//! anything, so a failure never leaves the registry half-updated.
//!
//! A `Hospital` is an ordinary value: construct one, pass it where it is
//! needed, and it is gone when dropped. Nothing here is global. The registry
//! never consults a clock of its own either; queries that depend on "now"
//! take the reference instant as an argument.

use crate::clinical::VisitRecord;
use crate::config::BusinessHours;
use crate::doctor::Doctor;
use crate::patient::Patient;
use crate::person::Person;
use crate::schedule::{Appointment, Schedule};
use crate::specialisation::Specialisation;
use crate::{RegistryError, RegistryResult};
use chrono::{NaiveDate, NaiveDateTime};
use clinic_types::{DoctorId, NonEmptyText, PatientId};

/// Field changes to apply to a registered doctor.
///
/// `None` leaves a field as it is. Values arrive pre-validated, so applying
/// an update performs no validation of its own beyond the specialisation
/// capacity check.
#[derive(Debug, Clone, Default)]
pub struct DoctorUpdate {
    pub last_name: Option<NonEmptyText>,
    pub first_name: Option<NonEmptyText>,
    pub birth_date: Option<NaiveDate>,
    /// Full replacement set; duplicates are collapsed before the capacity
    /// check, exactly as in [`Doctor::set_specialisations`].
    pub specialisations: Option<Vec<Specialisation>>,
}

/// Field changes to apply to a registered patient.
#[derive(Debug, Clone, Default)]
pub struct PatientUpdate {
    pub last_name: Option<NonEmptyText>,
    pub first_name: Option<NonEmptyText>,
    pub birth_date: Option<NaiveDate>,
}

/// Optional doctor search filters; every comparison ignores letter case.
///
/// An absent filter matches every doctor, so the empty query returns the
/// whole roster. A doctor matches the specialisation filter if any of their
/// specialisations carries that name.
#[derive(Debug, Clone, Default)]
pub struct DoctorQuery {
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub specialisation: Option<String>,
}

/// The in-memory registry for one clinic.
#[derive(Debug, Default)]
pub struct Hospital {
    doctors: Vec<Doctor>,
    patients: Vec<Patient>,
    schedule: Schedule,
    hours: BusinessHours,
}

impl Hospital {
    /// An empty registry with the default business hours.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty registry with a custom booking window.
    pub fn with_hours(hours: BusinessHours) -> Self {
        Self {
            hours,
            ..Self::default()
        }
    }

    pub fn hours(&self) -> BusinessHours {
        self.hours
    }

    // ========================================================================
    // Doctor registry
    // ========================================================================

    /// All registered doctors, in registration order.
    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    /// Register a doctor.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateDoctor`] if a doctor with the same
    /// id is already registered.
    pub fn add_doctor(&mut self, doctor: Doctor) -> RegistryResult<()> {
        if self.doctors.iter().any(|d| d.id() == doctor.id()) {
            return Err(RegistryError::DuplicateDoctor(doctor.id()));
        }

        self.doctors.push(doctor);
        Ok(())
    }

    /// Look up a doctor by id.
    pub fn doctor(&self, id: DoctorId) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id() == id)
    }

    /// Remove a doctor from the registry, returning the removed entity.
    ///
    /// Scheduled appointments referencing the doctor are left on the
    /// schedule; they become orphans and are reported via a warning rather
    /// than cancelled.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DoctorNotFound`] if the id is not registered.
    pub fn remove_doctor(&mut self, id: DoctorId) -> RegistryResult<Doctor> {
        let index = self
            .doctors
            .iter()
            .position(|d| d.id() == id)
            .ok_or(RegistryError::DoctorNotFound(id))?;

        let orphaned = self.schedule.for_doctor(id).len();
        if orphaned > 0 {
            tracing::warn!(
                "doctor {} removed with {} appointment(s) still on the schedule",
                id,
                orphaned
            );
        }

        Ok(self.doctors.remove(index))
    }

    /// Apply field changes to a registered doctor.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DoctorNotFound`] if the id is not registered,
    /// or [`RegistryError::SpecialisationsFull`] if the replacement set is
    /// over capacity. On error no field is changed.
    pub fn update_doctor(&mut self, id: DoctorId, update: DoctorUpdate) -> RegistryResult<()> {
        let doctor = self
            .doctors
            .iter_mut()
            .find(|d| d.id() == id)
            .ok_or(RegistryError::DoctorNotFound(id))?;

        // The specialisation swap is the only fallible step; it runs before
        // any other field is touched.
        if let Some(specialisations) = update.specialisations {
            doctor.set_specialisations(specialisations)?;
        }
        if let Some(last_name) = update.last_name {
            doctor.set_last_name(last_name);
        }
        if let Some(first_name) = update.first_name {
            doctor.set_first_name(first_name);
        }
        if let Some(birth_date) = update.birth_date {
            doctor.set_birth_date(birth_date);
        }

        Ok(())
    }

    /// Doctors whose last and first names both match, ignoring case.
    pub fn doctors_by_name(&self, last_name: &str, first_name: &str) -> Vec<&Doctor> {
        self.doctors
            .iter()
            .filter(|d| d.matches_name(last_name, first_name))
            .collect()
    }

    /// Doctors matching every filter present in `query`.
    pub fn search_doctors(&self, query: &DoctorQuery) -> Vec<&Doctor> {
        self.doctors
            .iter()
            .filter(|doctor| {
                let last_ok = query
                    .last_name
                    .as_deref()
                    .map_or(true, |v| doctor.last_name().eq_ignore_case(v));
                let first_ok = query
                    .first_name
                    .as_deref()
                    .map_or(true, |v| doctor.first_name().eq_ignore_case(v));
                let spec_ok = query
                    .specialisation
                    .as_deref()
                    .map_or(true, |v| doctor.has_specialisation(v));
                last_ok && first_ok && spec_ok
            })
            .collect()
    }

    // ========================================================================
    // Patient registry
    // ========================================================================

    /// All registered patients, in registration order.
    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    /// Register a patient.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicatePatient`] if a patient with the
    /// same id is already registered.
    pub fn add_patient(&mut self, patient: Patient) -> RegistryResult<()> {
        if self.patients.iter().any(|p| p.id() == patient.id()) {
            return Err(RegistryError::DuplicatePatient(patient.id()));
        }

        self.patients.push(patient);
        Ok(())
    }

    /// Look up a patient by id.
    pub fn patient(&self, id: PatientId) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id() == id)
    }

    /// Remove a patient from the registry, returning the removed entity.
    ///
    /// The medical card leaves with the patient. Appointments referencing
    /// the patient stay on the schedule as orphans, reported via a warning.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::PatientNotFound`] if the id is not
    /// registered.
    pub fn remove_patient(&mut self, id: PatientId) -> RegistryResult<Patient> {
        let index = self
            .patients
            .iter()
            .position(|p| p.id() == id)
            .ok_or(RegistryError::PatientNotFound(id))?;

        let orphaned = self.schedule.for_patient(id).len();
        if orphaned > 0 {
            tracing::warn!(
                "patient {} removed with {} appointment(s) still on the schedule",
                id,
                orphaned
            );
        }

        Ok(self.patients.remove(index))
    }

    /// Apply field changes to a registered patient.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::PatientNotFound`] if the id is not
    /// registered.
    pub fn update_patient(&mut self, id: PatientId, update: PatientUpdate) -> RegistryResult<()> {
        let patient = self
            .patients
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or(RegistryError::PatientNotFound(id))?;

        if let Some(last_name) = update.last_name {
            patient.set_last_name(last_name);
        }
        if let Some(first_name) = update.first_name {
            patient.set_first_name(first_name);
        }
        if let Some(birth_date) = update.birth_date {
            patient.set_birth_date(birth_date);
        }

        Ok(())
    }

    /// Patients whose last and first names both match, ignoring case.
    pub fn patients_by_name(&self, last_name: &str, first_name: &str) -> Vec<&Patient> {
        self.patients
            .iter()
            .filter(|p| p.matches_name(last_name, first_name))
            .collect()
    }

    // ========================================================================
    // Appointments
    // ========================================================================

    /// Book an appointment.
    ///
    /// The gates run in a fixed order: participant existence, business
    /// hours, then the conflict scan. Nothing is inserted unless all three
    /// pass.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::DoctorNotFound`] / [`RegistryError::PatientNotFound`]
    ///   if a participant is not registered.
    /// - [`RegistryError::OutsideBusinessHours`] if the time of day is
    ///   outside the booking window.
    /// - [`RegistryError::AppointmentConflict`] if the doctor already has an
    ///   appointment at exactly that instant.
    pub fn add_appointment(&mut self, appointment: Appointment) -> RegistryResult<()> {
        self.ensure_bookable(&appointment, None)?;
        self.schedule.add(appointment);
        Ok(())
    }

    /// Replace one scheduled appointment with another.
    ///
    /// `new` passes the same gates as a fresh booking, except that the
    /// conflict scan ignores one occurrence of `old` — moving an appointment
    /// onto its own current slot does not conflict with itself. Only after
    /// `new` has cleared every gate is `old` removed, so a rejected update
    /// leaves the schedule exactly as it was.
    ///
    /// # Errors
    ///
    /// Any error [`Hospital::add_appointment`] can produce, plus
    /// [`RegistryError::AppointmentNotFound`] if `old` is not currently
    /// scheduled.
    pub fn update_appointment(
        &mut self,
        old: &Appointment,
        new: Appointment,
    ) -> RegistryResult<()> {
        self.ensure_bookable(&new, Some(old))?;
        self.schedule.remove(old)?;
        self.schedule.add(new);
        Ok(())
    }

    /// Cancel a scheduled appointment.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::AppointmentNotFound`] if the appointment is
    /// not on the schedule.
    pub fn remove_appointment(&mut self, appointment: &Appointment) -> RegistryResult<()> {
        self.schedule.remove(appointment)
    }

    /// The full schedule, earliest first.
    pub fn appointments(&self) -> Vec<Appointment> {
        Self::sorted_by_time(self.schedule.entries().to_vec())
    }

    /// One doctor's appointments, earliest first.
    pub fn appointments_for_doctor(&self, doctor: DoctorId) -> Vec<Appointment> {
        Self::sorted_by_time(self.schedule.for_doctor(doctor))
    }

    /// One patient's appointments, earliest first.
    pub fn appointments_for_patient(&self, patient: PatientId) -> Vec<Appointment> {
        Self::sorted_by_time(self.schedule.for_patient(patient))
    }

    /// One doctor's appointments within `[from, to]`, bounds included,
    /// earliest first.
    pub fn appointments_for_doctor_between(
        &self,
        doctor: DoctorId,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Vec<Appointment> {
        let in_range = self
            .schedule
            .for_doctor(doctor)
            .into_iter()
            .filter(|a| from <= a.scheduled_at() && a.scheduled_at() <= to)
            .collect();
        Self::sorted_by_time(in_range)
    }

    /// Every appointment at exactly `instant`, across all doctors.
    pub fn appointments_at(&self, instant: NaiveDateTime) -> Vec<Appointment> {
        self.schedule
            .entries()
            .iter()
            .filter(|a| a.scheduled_at() == instant)
            .copied()
            .collect()
    }

    /// Appointments strictly after `now`, earliest first.
    ///
    /// The registry holds no clock; the caller says what "now" is.
    pub fn upcoming_appointments(&self, now: NaiveDateTime) -> Vec<Appointment> {
        let upcoming = self
            .schedule
            .entries()
            .iter()
            .filter(|a| a.scheduled_at() > now)
            .copied()
            .collect();
        Self::sorted_by_time(upcoming)
    }

    // ========================================================================
    // Visit records
    // ========================================================================

    /// Attach a visit record to a patient's medical card.
    ///
    /// The record's own patient reference is not required to match the
    /// addressed card; a mismatch is recorded as a warning and the record is
    /// attached to the card named by `patient_id`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::PatientNotFound`] if the id is not
    /// registered, or [`RegistryError::MedicalCardFull`] if the card is at
    /// capacity.
    pub fn add_visit_record(
        &mut self,
        patient_id: PatientId,
        record: VisitRecord,
    ) -> RegistryResult<()> {
        let patient = self
            .patients
            .iter_mut()
            .find(|p| p.id() == patient_id)
            .ok_or(RegistryError::PatientNotFound(patient_id))?;

        if record.patient() != patient_id {
            tracing::warn!(
                "visit record names patient {} but is being attached to patient {}'s card",
                record.patient(),
                patient_id
            );
        }

        patient.medical_card_mut().add_visit(record)
    }

    /// A patient's visit records, in the order they were attached.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::PatientNotFound`] if the id is not
    /// registered.
    pub fn visit_records(&self, patient_id: PatientId) -> RegistryResult<&[VisitRecord]> {
        self.patient(patient_id)
            .map(|p| p.medical_card().records())
            .ok_or(RegistryError::PatientNotFound(patient_id))
    }

    /// Detach a visit record from a patient's medical card.
    ///
    /// Deliberately lenient, unlike the add side: an unknown patient id or
    /// an absent record both return false rather than failing.
    pub fn remove_visit_record(&mut self, patient_id: PatientId, record: &VisitRecord) -> bool {
        match self.patients.iter_mut().find(|p| p.id() == patient_id) {
            Some(patient) => patient.medical_card_mut().remove_visit(record),
            None => false,
        }
    }

    // ========================================================================
    // Booking gates
    // ========================================================================

    /// Run the three booking gates for `candidate`, in order. When
    /// `excluding` is set, the conflict scan skips one schedule entry equal
    /// to it.
    fn ensure_bookable(
        &self,
        candidate: &Appointment,
        excluding: Option<&Appointment>,
    ) -> RegistryResult<()> {
        if self.doctor(candidate.doctor()).is_none() {
            return Err(RegistryError::DoctorNotFound(candidate.doctor()));
        }
        if self.patient(candidate.patient()).is_none() {
            return Err(RegistryError::PatientNotFound(candidate.patient()));
        }

        let time = candidate.scheduled_at().time();
        if !self.hours.contains(time) {
            return Err(RegistryError::OutsideBusinessHours {
                at: candidate.scheduled_at(),
                opens_at: self.hours.opens_at(),
                closes_at: self.hours.closes_at(),
            });
        }

        self.ensure_no_conflict(candidate, excluding)
    }

    /// Conflict gate: the doctor must have no other appointment at exactly
    /// the candidate's instant. Two appointments conflict only on instant
    /// equality; adjacent or overlapping-in-spirit times are not modelled.
    fn ensure_no_conflict(
        &self,
        candidate: &Appointment,
        excluding: Option<&Appointment>,
    ) -> RegistryResult<()> {
        // At most one occurrence of the excluded appointment is skipped, so
        // a genuine duplicate at the same instant still conflicts.
        let mut to_skip = excluding;
        for entry in self.schedule.entries() {
            if let Some(excluded) = to_skip {
                if entry == excluded {
                    to_skip = None;
                    continue;
                }
            }
            if entry.doctor() == candidate.doctor()
                && entry.scheduled_at() == candidate.scheduled_at()
            {
                return Err(RegistryError::AppointmentConflict {
                    doctor: candidate.doctor(),
                    at: candidate.scheduled_at(),
                });
            }
        }

        Ok(())
    }

    fn sorted_by_time(mut appointments: Vec<Appointment>) -> Vec<Appointment> {
        appointments.sort_by_key(Appointment::scheduled_at);
        appointments
    }
}
