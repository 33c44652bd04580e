use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::schedule::{Booking, Slot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(UserId)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Doctor,
    Patient,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Doctor => write!(f, "doctor"),
            Role::Patient => write!(f, "patient"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "doctor" => Ok(Role::Doctor),
            "patient" => Ok(Role::Patient),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

/// Fields every registered user carries, whatever the role.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub gender: String,
    pub dob: Option<NaiveDate>,
    pub unique_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminProfile {
    pub hospital: String,
    pub location: String,
    pub departments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorProfile {
    pub qualifications: String,
    pub specializations: Vec<String>,
    pub experience: String,
    pub hospital: String,
    pub slots: Vec<Slot>,
}

impl DoctorProfile {
    pub fn has_specialization(&self, department: &str) -> bool {
        let department = department.to_lowercase();
        self.specializations
            .iter()
            .any(|s| s.to_lowercase() == department)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PatientProfile {
    pub bookings: Vec<Booking>,
}

/// Role-specific part of a user record. Only the fields that make sense for
/// the role exist on each variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Profile {
    Admin(AdminProfile),
    Doctor(DoctorProfile),
    Patient(PatientProfile),
}

impl Profile {
    pub fn role(&self) -> Role {
        match self {
            Profile::Admin(_) => Role::Admin,
            Profile::Doctor(_) => Role::Doctor,
            Profile::Patient(_) => Role::Patient,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(flatten)]
    pub identity: Identity,
    #[serde(flatten)]
    pub profile: Profile,
}

impl User {
    pub fn name(&self) -> &str {
        &self.identity.name
    }

    pub fn unique_id(&self) -> &str {
        &self.identity.unique_id
    }

    pub fn role(&self) -> Role {
        self.profile.role()
    }

    pub fn as_admin(&self) -> Option<&AdminProfile> {
        match &self.profile {
            Profile::Admin(admin) => Some(admin),
            _ => None,
        }
    }

    pub fn as_doctor(&self) -> Option<&DoctorProfile> {
        match &self.profile {
            Profile::Doctor(doctor) => Some(doctor),
            _ => None,
        }
    }

    pub fn as_patient(&self) -> Option<&PatientProfile> {
        match &self.profile {
            Profile::Patient(patient) => Some(patient),
            _ => None,
        }
    }

    pub fn as_patient_mut(&mut self) -> Option<&mut PatientProfile> {
        match &mut self.profile {
            Profile::Patient(patient) => Some(patient),
            _ => None,
        }
    }
}
