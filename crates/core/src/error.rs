use chrono::{NaiveDateTime, NaiveTime};
use clinic_types::{DoctorId, PatientId};

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("doctor {0} is already registered")]
    DuplicateDoctor(DoctorId),
    #[error("patient {0} is already registered")]
    DuplicatePatient(PatientId),
    #[error("doctor already holds the maximum of {max} specialisations")]
    SpecialisationsFull { max: usize },
    #[error("medical card already holds the maximum of {max} visit records")]
    MedicalCardFull { max: usize },
    #[error("no doctor registered with id {0}")]
    DoctorNotFound(DoctorId),
    #[error("no patient registered with id {0}")]
    PatientNotFound(PatientId),
    #[error("appointment is not on the schedule")]
    AppointmentNotFound,
    #[error("doctor {doctor} already has an appointment at {at}")]
    AppointmentConflict {
        doctor: DoctorId,
        at: NaiveDateTime,
    },
    #[error("appointment time {at} is outside business hours ({opens_at} to {closes_at})")]
    OutsideBusinessHours {
        at: NaiveDateTime,
        opens_at: NaiveTime,
        closes_at: NaiveTime,
    },
}

pub type RegistryResult<T> = std::result::Result<T, RegistryError>;
