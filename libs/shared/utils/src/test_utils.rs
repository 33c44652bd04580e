//! Record builders shared by the cells' test suites.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use shared_config::AppConfig;
use shared_models::{
    AdminProfile, Booking, DoctorProfile, DoctorRegistration, Identity, PatientProfile, Profile,
    ProposedSlot, Slot, SlotId, User, UserId,
};

pub struct TestConfig {
    pub doctor_share_percent: u32,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            doctor_share_percent: 60,
        }
    }
}

impl TestConfig {
    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            doctor_share_percent: self.doctor_share_percent,
            ..AppConfig::default()
        }
    }
}

pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("test date must be YYYY-MM-DD")
}

pub fn time(value: &str) -> NaiveTime {
    NaiveTime::parse_from_str(value, "%H:%M").expect("test time must be HH:MM")
}

pub fn identity(name: &str, unique_id: &str) -> Identity {
    Identity {
        name: name.to_string(),
        gender: "F".to_string(),
        dob: Some(date("1990-05-17")),
        unique_id: unique_id.to_string(),
    }
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn slot(day: &str, start: &str, end: &str, fee: Decimal, hospital: &str) -> Slot {
    Slot {
        id: SlotId::new(),
        date: date(day),
        start_time: time(start),
        end_time: time(end),
        fee,
        hospital: hospital.to_string(),
    }
}

pub fn proposed_slot(day: &str, start: &str, end: &str, fee: Decimal) -> ProposedSlot {
    ProposedSlot {
        date: date(day),
        start_time: time(start),
        end_time: time(end),
        fee,
    }
}

/// Booking against `slot` of the doctor with `doctor_id`, priced at the slot fee.
pub fn booking(doctor_id: UserId, slot: &Slot) -> Booking {
    Booking {
        slot_id: slot.id,
        doctor_id,
        hospital: slot.hospital.clone(),
        date: slot.date,
        time: slot.start_time,
        amount: slot.fee,
    }
}

pub struct TestUser;

impl TestUser {
    pub fn admin(id: u64, name: &str, hospital: &str, departments: &[&str]) -> User {
        User {
            id: UserId(id),
            identity: identity(name, &format!("ADM-{}", id)),
            profile: Profile::Admin(AdminProfile {
                hospital: hospital.to_string(),
                location: "Pune".to_string(),
                departments: strings(departments),
            }),
        }
    }

    pub fn doctor(
        id: u64,
        name: &str,
        unique_id: &str,
        hospital: &str,
        specializations: &[&str],
        slots: Vec<Slot>,
    ) -> User {
        User {
            id: UserId(id),
            identity: identity(name, unique_id),
            profile: Profile::Doctor(DoctorProfile {
                qualifications: "MBBS, MD".to_string(),
                specializations: strings(specializations),
                experience: "8 years".to_string(),
                hospital: hospital.to_string(),
                slots,
            }),
        }
    }

    pub fn patient(id: u64, name: &str, bookings: Vec<Booking>) -> User {
        User {
            id: UserId(id),
            identity: identity(name, &format!("PAT-{}", id)),
            profile: Profile::Patient(PatientProfile { bookings }),
        }
    }
}

pub fn doctor_registration(
    unique_id: &str,
    hospital: &str,
    specializations: &[&str],
    slot: ProposedSlot,
) -> DoctorRegistration {
    DoctorRegistration {
        identity: identity("Dr. Candidate", unique_id),
        qualifications: "MBBS".to_string(),
        specializations: strings(specializations),
        experience: "3 years".to_string(),
        hospital: hospital.to_string(),
        slot,
    }
}
