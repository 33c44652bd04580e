use anyhow::{anyhow, Result};
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod session;

use registration_cell::RegistrationForm;
use session::Session;
use shared_config::AppConfig;

fn main() -> Result<()> {
    // Loading Env Vars
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting hospital management session");

    let config = AppConfig::from_env();
    let mut session = Session::new(&config);

    session.register(&RegistrationForm {
        role: "admin".into(),
        name: "Anita Desai".into(),
        hospital: "CityHosp".into(),
        location: "Pune".into(),
        departments: "Cardiology, Neurology".into(),
        ..RegistrationForm::default()
    })?;

    let rao = RegistrationForm {
        role: "doctor".into(),
        name: "Dr. Rao".into(),
        unique_id: "DOC-1".into(),
        qualifications: "MBBS, MD".into(),
        specializations: "cardiology".into(),
        experience: "8 years".into(),
        hospital: "CityHosp".into(),
        consultation_fee: "500".into(),
        slot_date: "2024-01-01".into(),
        start_time: "09:00".into(),
        end_time: "10:00".into(),
        ..RegistrationForm::default()
    };
    let doctor = session.register(&rao)?;

    let overlapping = RegistrationForm {
        start_time: "09:30".into(),
        end_time: "10:30".into(),
        ..rao
    };
    if let Err(err) = session.register(&overlapping) {
        println!("{}", serde_json::to_string_pretty(&err.to_json())?);
    }

    let patient = session.register(&RegistrationForm {
        role: "patient".into(),
        name: "Meera".into(),
        ..RegistrationForm::default()
    })?;

    let slot = session
        .first_slot(doctor)
        .ok_or_else(|| anyhow!("doctor {} has no slot", doctor))?;
    session.book(patient, doctor, slot)?;

    println!("{}", serde_json::to_string_pretty(&session.users())?);
    println!("{}", serde_json::to_string_pretty(&session.hospitals())?);
    for input in ["1", "2", "3", "42"] {
        println!("{}", serde_json::to_string_pretty(&session.dashboard(input))?);
    }

    info!("Session finished");
    Ok(())
}
