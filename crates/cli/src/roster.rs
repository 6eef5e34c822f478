//! Roster files: a JSON seed for a registry.
//!
//! A roster is not persistence. It is a declarative description of a clinic's
//! starting state; loading one replays every entry through the registry's
//! ordinary operations, so a roster that violates a business rule (a
//! double-booked doctor, an out-of-hours appointment, an eleventh
//! specialisation) is rejected with the same error an interactive caller
//! would see.
//!
//! The wire model is strict: unknown keys fail the parse rather than being
//! silently dropped, so a typo in a hand-written roster surfaces immediately.

use anyhow::Context;
use chrono::{NaiveDate, NaiveDateTime};
use clinic_core::{
    Appointment, Diagnosis, Doctor, DoctorId, Hospital, Patient, PatientId, Specialisation,
    VisitRecord,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Wire model for a roster file.
///
/// Every section is optional; an empty object is a valid (empty) clinic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Roster {
    #[serde(default)]
    pub doctors: Vec<DoctorEntry>,
    #[serde(default)]
    pub patients: Vec<PatientEntry>,
    #[serde(default)]
    pub appointments: Vec<AppointmentEntry>,
    #[serde(default)]
    pub visits: Vec<VisitEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DoctorEntry {
    pub id: DoctorId,
    pub last_name: String,
    pub first_name: String,
    pub birth_date: NaiveDate,
    #[serde(default)]
    pub specialisations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatientEntry {
    pub id: PatientId,
    pub last_name: String,
    pub first_name: String,
    pub birth_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppointmentEntry {
    pub doctor: DoctorId,
    pub patient: PatientId,
    pub scheduled_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VisitEntry {
    pub patient: PatientId,
    pub doctor: DoctorId,
    pub diagnosis_code: String,
    pub diagnosis_name: String,
    #[serde(default)]
    pub diagnosis_description: Option<String>,
    pub visited_on: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Read and parse a roster file.
pub fn load(path: &Path) -> anyhow::Result<Roster> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading roster file {}", path.display()))?;
    let roster = serde_json::from_str(&text)
        .with_context(|| format!("parsing roster file {}", path.display()))?;
    Ok(roster)
}

/// Serialise a roster to a file, pretty-printed.
pub fn save(roster: &Roster, path: &Path) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(roster).context("serialising roster")?;
    std::fs::write(path, text)
        .with_context(|| format!("writing roster file {}", path.display()))?;
    Ok(())
}

/// Replay a roster through a fresh registry.
///
/// Entries are applied in section order: doctors, patients, appointments,
/// visits. Any entry the registry rejects aborts the build with context
/// naming the offending entry.
pub fn build_hospital(roster: &Roster) -> anyhow::Result<Hospital> {
    let mut hospital = Hospital::new();

    for entry in &roster.doctors {
        let mut doctor = Doctor::new(entry.id, &entry.last_name, &entry.first_name, entry.birth_date)
            .with_context(|| format!("doctor {}", entry.id))?;
        for name in &entry.specialisations {
            let specialisation = Specialisation::new(name)
                .with_context(|| format!("specialisation {:?} of doctor {}", name, entry.id))?;
            doctor
                .add_specialisation(specialisation)
                .with_context(|| format!("doctor {}", entry.id))?;
        }
        hospital
            .add_doctor(doctor)
            .with_context(|| format!("registering doctor {}", entry.id))?;
    }

    for entry in &roster.patients {
        let patient =
            Patient::new(entry.id, &entry.last_name, &entry.first_name, entry.birth_date)
                .with_context(|| format!("patient {}", entry.id))?;
        hospital
            .add_patient(patient)
            .with_context(|| format!("registering patient {}", entry.id))?;
    }

    for entry in &roster.appointments {
        let appointment = Appointment::new(entry.doctor, entry.patient, entry.scheduled_at);
        hospital.add_appointment(appointment).with_context(|| {
            format!(
                "booking doctor {} at {}",
                entry.doctor, entry.scheduled_at
            )
        })?;
    }

    for entry in &roster.visits {
        let diagnosis = Diagnosis::new(
            &entry.diagnosis_code,
            &entry.diagnosis_name,
            entry.diagnosis_description.clone(),
        )
        .with_context(|| format!("visit record for patient {}", entry.patient))?;
        let record = VisitRecord::new(
            entry.patient,
            entry.doctor,
            diagnosis,
            entry.visited_on,
            entry.notes.clone(),
        );
        hospital
            .add_visit_record(entry.patient, record)
            .with_context(|| format!("visit record for patient {}", entry.patient))?;
    }

    Ok(hospital)
}

/// The built-in demonstration clinic.
///
/// Two doctors, two patients, a morning of appointments and one recorded
/// visit. Identifiers are fixed so repeated runs and emitted roster files
/// stay comparable.
pub fn demo() -> Roster {
    let house = DoctorId::parse("11111111111111111111111111111111").expect("valid demo id");
    let wilson = DoctorId::parse("22222222222222222222222222222222").expect("valid demo id");
    let adams = PatientId::parse("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa").expect("valid demo id");
    let brand = PatientId::parse("bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb").expect("valid demo id");

    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).expect("valid demo date");
    let at = |d: NaiveDate, h, min| d.and_hms_opt(h, min, 0).expect("valid demo time");
    let day = date(2024, 1, 10);

    Roster {
        doctors: vec![
            DoctorEntry {
                id: house,
                last_name: "House".into(),
                first_name: "Gregory".into(),
                birth_date: date(1959, 6, 11),
                specialisations: vec!["Cardiologist".into(), "Diagnostician".into()],
            },
            DoctorEntry {
                id: wilson,
                last_name: "Wilson".into(),
                first_name: "James".into(),
                birth_date: date(1961, 3, 4),
                specialisations: vec!["Oncologist".into()],
            },
        ],
        patients: vec![
            PatientEntry {
                id: adams,
                last_name: "Adams".into(),
                first_name: "Beatrice".into(),
                birth_date: date(1990, 11, 2),
            },
            PatientEntry {
                id: brand,
                last_name: "Brand".into(),
                first_name: "Casper".into(),
                birth_date: date(1985, 7, 23),
            },
        ],
        appointments: vec![
            AppointmentEntry {
                doctor: house,
                patient: adams,
                scheduled_at: at(day, 9, 0),
            },
            AppointmentEntry {
                doctor: house,
                patient: brand,
                scheduled_at: at(day, 10, 0),
            },
            AppointmentEntry {
                doctor: wilson,
                patient: adams,
                // Deliberately the same instant as House's 09:00 slot;
                // different doctors may share an instant.
                scheduled_at: at(day, 9, 0),
            },
        ],
        visits: vec![VisitEntry {
            patient: adams,
            doctor: house,
            diagnosis_code: "I49".into(),
            diagnosis_name: "Cardiac arrhythmia".into(),
            diagnosis_description: Some("Irregular heartbeat noted at rest".into()),
            visited_on: date(2024, 1, 3),
            notes: Some("Follow-up booked for the 10th".into()),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_roster_replays_cleanly() {
        let hospital = build_hospital(&demo()).unwrap();

        assert_eq!(hospital.doctors().len(), 2);
        assert_eq!(hospital.patients().len(), 2);
        assert_eq!(hospital.appointments().len(), 3);

        let adams = PatientId::parse("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa").unwrap();
        assert_eq!(hospital.visit_records(adams).unwrap().len(), 1);
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");

        save(&demo(), &path).unwrap();
        let loaded = load(&path).unwrap();

        assert_eq!(loaded.doctors.len(), 2);
        assert_eq!(loaded.appointments.len(), 3);
        // The reloaded roster must still replay.
        build_hospital(&loaded).unwrap();
    }

    #[test]
    fn test_load_rejects_unknown_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");
        std::fs::write(&path, r#"{"doctors": [], "staff": []}"#).unwrap();

        assert!(load(&path).is_err());
    }

    #[test]
    fn test_load_rejects_malformed_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");
        std::fs::write(
            &path,
            r#"{"doctors": [{"id": "not-canonical", "last_name": "House",
                "first_name": "Gregory", "birth_date": "1959-06-11"}]}"#,
        )
        .unwrap();

        assert!(load(&path).is_err());
    }

    #[test]
    fn test_build_rejects_double_booking() {
        let mut roster = demo();
        let clash = roster.appointments[0].clone();
        roster.appointments.push(clash);

        let err = build_hospital(&roster).unwrap_err();
        assert!(format!("{:#}", err).contains("already has an appointment"));
    }

    #[test]
    fn test_build_rejects_out_of_hours_appointment() {
        let mut roster = demo();
        roster.appointments[0].scheduled_at = NaiveDate::from_ymd_opt(2024, 1, 10)
            .unwrap()
            .and_hms_opt(21, 0, 0)
            .unwrap();

        let err = build_hospital(&roster).unwrap_err();
        assert!(format!("{:#}", err).contains("outside business hours"));
    }

    #[test]
    fn test_build_rejects_appointment_for_unknown_doctor() {
        let mut roster = demo();
        roster.appointments[0].doctor =
            DoctorId::parse("99999999999999999999999999999999").unwrap();

        assert!(build_hospital(&roster).is_err());
    }

    #[test]
    fn test_build_rejects_blank_doctor_name() {
        let mut roster = demo();
        roster.doctors[0].last_name = "   ".into();

        let err = build_hospital(&roster).unwrap_err();
        assert!(format!("{:#}", err).contains("last name"));
    }

    #[test]
    fn test_empty_object_is_an_empty_clinic() {
        let roster: Roster = serde_json::from_str("{}").unwrap();
        let hospital = build_hospital(&roster).unwrap();

        assert!(hospital.doctors().is_empty());
        assert!(hospital.appointments().is_empty());
    }
}
