//! Command-line front end for the clinic registry.
//!
//! The binary is a thin presentation layer: it loads a roster file (or the
//! built-in demo clinic), replays it through `clinic-core`, and formats
//! query results. All business rules live in the core crate; nothing here
//! validates anything beyond argument parsing.

mod roster;

use anyhow::Context;
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use clinic_core::{Appointment, DoctorId, DoctorQuery, Hospital, PatientId, Person};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "clinic")]
#[command(about = "In-memory clinic registry CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk the built-in demo clinic through the registry's rules
    Demo {
        /// Also write the demo clinic to a roster file
        #[arg(long)]
        emit_roster: Option<PathBuf>,
    },
    /// Search the doctors of a roster
    Doctors {
        /// Roster file describing the clinic
        #[arg(long)]
        roster: PathBuf,
        /// Filter by last name (case-insensitive)
        #[arg(long)]
        last_name: Option<String>,
        /// Filter by first name (case-insensitive)
        #[arg(long)]
        first_name: Option<String>,
        /// Filter by specialisation (case-insensitive)
        #[arg(long)]
        specialisation: Option<String>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a roster's appointment schedule
    Schedule {
        /// Roster file describing the clinic
        #[arg(long)]
        roster: PathBuf,
        /// Restrict to one doctor's appointments
        #[arg(long)]
        doctor: Option<DoctorId>,
        /// Start of the window, e.g. 2024-01-10T09:30:00
        #[arg(long)]
        from: Option<NaiveDateTime>,
        /// End of the window, inclusive
        #[arg(long)]
        to: Option<NaiveDateTime>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("clinic_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { emit_roster } => run_demo(emit_roster),
        Commands::Doctors {
            roster,
            last_name,
            first_name,
            specialisation,
            json,
        } => run_doctors(roster, last_name, first_name, specialisation, json),
        Commands::Schedule {
            roster,
            doctor,
            from,
            to,
            json,
        } => run_schedule(roster, doctor, from, to, json),
    }
}

/// Loads a roster file and replays it into a fresh registry.
fn load_hospital(path: &Path) -> anyhow::Result<Hospital> {
    let roster = roster::load(path)?;
    let hospital = roster::build_hospital(&roster)?;
    tracing::info!(
        "++ Loaded {}: {} doctors, {} patients, {} appointments",
        path.display(),
        hospital.doctors().len(),
        hospital.patients().len(),
        hospital.appointments().len()
    );
    Ok(hospital)
}

fn run_doctors(
    roster_path: PathBuf,
    last_name: Option<String>,
    first_name: Option<String>,
    specialisation: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let hospital = load_hospital(&roster_path)?;

    let query = DoctorQuery {
        last_name,
        first_name,
        specialisation,
    };
    let doctors = hospital.search_doctors(&query);

    if json {
        println!("{}", serde_json::to_string_pretty(&doctors)?);
        return Ok(());
    }

    if doctors.is_empty() {
        println!("No matching doctors.");
    } else {
        for doctor in doctors {
            let specialisations: Vec<&str> =
                doctor.specialisations().iter().map(|s| s.name()).collect();
            println!(
                "ID: {}, Name: {}, Born: {}, Specialisations: [{}]",
                doctor.id(),
                doctor.full_name(),
                doctor.birth_date(),
                specialisations.join(", ")
            );
        }
    }

    Ok(())
}

fn run_schedule(
    roster_path: PathBuf,
    doctor: Option<DoctorId>,
    from: Option<NaiveDateTime>,
    to: Option<NaiveDateTime>,
    json: bool,
) -> anyhow::Result<()> {
    let hospital = load_hospital(&roster_path)?;

    let appointments = match (doctor, from, to) {
        (Some(id), Some(from), Some(to)) => hospital.appointments_for_doctor_between(id, from, to),
        (Some(id), None, None) => hospital.appointments_for_doctor(id),
        (None, None, None) => hospital.appointments(),
        _ => anyhow::bail!("--from and --to must be given together, and only with --doctor"),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&appointments)?);
        return Ok(());
    }

    if appointments.is_empty() {
        println!("No appointments.");
    } else {
        for appointment in &appointments {
            println!("{}", describe(&hospital, appointment));
        }
    }

    Ok(())
}

/// One schedule line: instant, patient, doctor. Participants removed from
/// the registry are shown by id so orphaned appointments stay visible.
fn describe(hospital: &Hospital, appointment: &Appointment) -> String {
    let doctor = hospital
        .doctor(appointment.doctor())
        .map(|d| format!("Dr {}", d.full_name()))
        .unwrap_or_else(|| format!("removed doctor {}", appointment.doctor()));
    let patient = hospital
        .patient(appointment.patient())
        .map(|p| p.full_name())
        .unwrap_or_else(|| format!("removed patient {}", appointment.patient()));

    format!("{}  {} with {}", appointment.scheduled_at(), patient, doctor)
}

fn run_demo(emit_roster: Option<PathBuf>) -> anyhow::Result<()> {
    let roster = roster::demo();
    let mut hospital = roster::build_hospital(&roster).context("building the demo clinic")?;

    println!(
        "Demo clinic loaded: {} doctors, {} patients, {} appointments.",
        hospital.doctors().len(),
        hospital.patients().len(),
        hospital.appointments().len()
    );

    println!();
    println!("Schedule:");
    for appointment in hospital.appointments() {
        println!("  {}", describe(&hospital, &appointment));
    }

    let house = DoctorId::parse("11111111111111111111111111111111")?;
    let brand = PatientId::parse("bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb")?;
    let day = chrono::NaiveDate::from_ymd_opt(2024, 1, 10).expect("valid demo date");
    let at = |h, m| day.and_hms_opt(h, m, 0).expect("valid demo time");

    println!();
    println!("Booking Dr House at an instant he already has:");
    match hospital.add_appointment(Appointment::new(house, brand, at(9, 0))) {
        Ok(()) => println!("  booked (unexpected)"),
        Err(err) => println!("  rejected: {}", err),
    }

    println!("Booking outside business hours (21:00):");
    match hospital.add_appointment(Appointment::new(house, brand, at(21, 0))) {
        Ok(()) => println!("  booked (unexpected)"),
        Err(err) => println!("  rejected: {}", err),
    }

    println!("Moving the 10:00 slot to 11:00:");
    let old = Appointment::new(house, brand, at(10, 0));
    let new = Appointment::new(house, brand, at(11, 0));
    hospital
        .update_appointment(&old, new)
        .context("rescheduling the 10:00 appointment")?;
    println!("  done; Dr House's day is now:");
    for appointment in hospital.appointments_for_doctor(house) {
        println!("  {}", describe(&hospital, &appointment));
    }

    println!();
    println!("Searching for a cardiologist (lower-case query):");
    let cardiologists = hospital.search_doctors(&DoctorQuery {
        specialisation: Some("cardiologist".into()),
        ..DoctorQuery::default()
    });
    for doctor in cardiologists {
        println!("  {}", doctor.full_name());
    }

    let adams = PatientId::parse("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa")?;
    println!();
    println!("Beatrice Adams's visit history:");
    for record in hospital.visit_records(adams)? {
        println!(
            "  {}: {} (seen by {})",
            record.visited_on(),
            record.diagnosis(),
            hospital
                .doctor(record.doctor())
                .map(|d| d.full_name())
                .unwrap_or_else(|| record.doctor().to_string())
        );
    }

    println!();
    println!("Removing Dr Wilson; his appointment stays behind as an orphan:");
    let wilson = DoctorId::parse("22222222222222222222222222222222")?;
    hospital.remove_doctor(wilson)?;
    for appointment in hospital.appointments_for_doctor(wilson) {
        println!("  {}", describe(&hospital, &appointment));
    }

    println!();
    println!("Upcoming after 09:30:");
    for appointment in hospital.upcoming_appointments(at(9, 30)) {
        println!("  {}", describe(&hospital, &appointment));
    }

    if let Some(path) = emit_roster {
        roster::save(&roster, &path)?;
        println!();
        println!("Wrote roster to {}", path.display());
    }

    Ok(())
}
