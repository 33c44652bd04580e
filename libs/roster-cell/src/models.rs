use serde::Serialize;
use thiserror::Error;

use shared_models::{AppError, DoctorProfile, Role, SlotId, User, UserId};

/// Hospital as seen through its admin record. Never stored; rebuilt from the
/// roster on every lookup.
#[derive(Debug, Clone, Serialize)]
pub struct Hospital<'a> {
    pub name: &'a str,
    pub location: &'a str,
    pub departments: &'a [String],
    #[serde(skip)]
    pub doctors: Vec<&'a User>,
}

impl<'a> Hospital<'a> {
    /// True when any department equals any of `specializations`, ignoring case.
    pub fn has_department_matching(&self, specializations: &[String]) -> bool {
        let wanted: Vec<String> = specializations.iter().map(|s| s.to_lowercase()).collect();
        self.departments
            .iter()
            .any(|dept| wanted.contains(&dept.to_lowercase()))
    }

    pub fn doctor_profiles(&self) -> impl Iterator<Item = (&'a User, &'a DoctorProfile)> + '_ {
        self.doctors
            .iter()
            .copied()
            .filter_map(|user| user.as_doctor().map(|doctor| (user, doctor)))
    }
}

/// One line of the registered-users list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub id: UserId,
    pub name: String,
    pub role: Role,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name().to_string(),
            role: user.role(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Patient not found: {0}")]
    PatientNotFound(UserId),

    #[error("Doctor not found: {0}")]
    DoctorNotFound(UserId),

    #[error("Slot {slot_id} not offered by doctor {doctor_id}")]
    SlotNotFound { doctor_id: UserId, slot_id: SlotId },

    #[error("Patient {patient_id} already booked slot {slot_id}")]
    AlreadyBooked { patient_id: UserId, slot_id: SlotId },
}

impl From<RosterError> for AppError {
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::PatientNotFound(_)
            | RosterError::DoctorNotFound(_)
            | RosterError::SlotNotFound { .. } => AppError::NotFound(err.to_string()),
            RosterError::AlreadyBooked { .. } => AppError::Conflict(err.to_string()),
        }
    }
}
