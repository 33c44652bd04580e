use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::user::{Identity, Role};

/// Slot a doctor offers at registration time, before it is given an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposedSlot {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub fee: Decimal,
}

impl ProposedSlot {
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.start_time)
    }

    pub fn ends_at(&self) -> NaiveDateTime {
        self.date.and_time(self.end_time)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminRegistration {
    pub identity: Identity,
    pub hospital: String,
    pub location: String,
    pub departments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorRegistration {
    pub identity: Identity,
    pub qualifications: String,
    pub specializations: Vec<String>,
    pub experience: String,
    pub hospital: String,
    pub slot: ProposedSlot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRegistration {
    pub identity: Identity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Registration {
    Admin(AdminRegistration),
    Doctor(DoctorRegistration),
    Patient(PatientRegistration),
}

impl Registration {
    pub fn role(&self) -> Role {
        match self {
            Registration::Admin(_) => Role::Admin,
            Registration::Doctor(_) => Role::Doctor,
            Registration::Patient(_) => Role::Patient,
        }
    }

    pub fn identity(&self) -> &Identity {
        match self {
            Registration::Admin(r) => &r.identity,
            Registration::Doctor(r) => &r.identity,
            Registration::Patient(r) => &r.identity,
        }
    }
}
