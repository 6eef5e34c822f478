//! # Clinic Core
//!
//! Core business logic for the in-memory clinic registry.
//!
//! This crate contains pure data operations over the registry's three
//! stores:
//! - Doctor and patient registration, update, and search
//! - The appointment schedule with its booking gates (business hours,
//!   double-booking prevention, participant existence)
//! - Bounded medical-record history per patient
//!
//! **No presentation concerns**: formatting, argument parsing, and roster
//! files belong in `clinic-cli`. Everything here is synchronous, holds no
//! global state, and performs no I/O; the only side channel is `tracing`
//! diagnostics on the soft paths (orphaned appointments, mismatched visit
//! records).

pub mod clinical;
pub mod config;
pub mod constants;
pub mod doctor;
pub mod error;
pub mod hospital;
pub mod patient;
pub mod person;
pub mod schedule;
pub mod specialisation;

// Re-export the public surface at the crate root.
pub use clinical::{Diagnosis, MedicalCard, VisitRecord};
pub use config::BusinessHours;
pub use doctor::Doctor;
pub use error::{RegistryError, RegistryResult};
pub use hospital::{DoctorQuery, DoctorUpdate, Hospital, PatientUpdate};
pub use patient::Patient;
pub use person::Person;
pub use schedule::{Appointment, Schedule};
pub use specialisation::Specialisation;

// Identifier and text primitives come from clinic-types; re-exported so
// downstream crates rarely need a direct dependency.
pub use clinic_types::{DoctorId, NonEmptyText, PatientId};
