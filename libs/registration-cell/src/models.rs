use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_models::{AppError, DoctorProfile, Identity, Slot, SlotId};

/// Doctor record that passed hospital, department and overlap checks. Only
/// the validator builds one; the caller commits it to the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedDoctor {
    pub(crate) identity: Identity,
    pub(crate) profile: DoctorProfile,
}

impl ValidatedDoctor {
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn profile(&self) -> &DoctorProfile {
        &self.profile
    }

    /// The slot appended during validation.
    pub fn new_slot(&self) -> Option<&Slot> {
        self.profile.slots.last()
    }

    pub fn into_parts(self) -> (Identity, DoctorProfile) {
        (self.identity, self.profile)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Hospital not found: {hospital}")]
    HospitalNotFound { hospital: String },

    #[error("No department at {hospital} matches specializations {specializations:?}")]
    DepartmentMismatch {
        hospital: String,
        specializations: Vec<String>,
    },

    #[error("Slot on {date} {start}-{end} overlaps existing slot {existing}")]
    SlotOverlap {
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
        existing: SlotId,
    },

    #[error("Slot ends at {end}, not after its start at {start}")]
    EmptyTimeRange { start: NaiveTime, end: NaiveTime },

    #[error("Consultation fee cannot be negative: {0}")]
    NegativeFee(Decimal),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::HospitalNotFound { .. } => AppError::NotFound(err.to_string()),
            ValidationError::DepartmentMismatch { .. } => AppError::ValidationError(err.to_string()),
            ValidationError::SlotOverlap { .. } => AppError::Conflict(err.to_string()),
            ValidationError::EmptyTimeRange { .. } | ValidationError::NegativeFee(_) => {
                AppError::BadRequest(err.to_string())
            }
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Unknown role: {0}")]
    InvalidRole(String),

    #[error("Invalid date in {field}: {value}")]
    InvalidDate { field: &'static str, value: String },

    #[error("Invalid time in {field}: {value}")]
    InvalidTime { field: &'static str, value: String },

    #[error("Invalid consultation fee: {0}")]
    InvalidFee(String),

    #[error("Consultation fee cannot be negative")]
    NegativeFee,

    #[error("Start time {start} must be before end time {end}")]
    EmptyTimeRange { start: NaiveTime, end: NaiveTime },
}

impl From<FormError> for AppError {
    fn from(err: FormError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl From<RegistrationError> for AppError {
    fn from(err: RegistrationError) -> Self {
        match err {
            RegistrationError::Form(e) => e.into(),
            RegistrationError::Validation(e) => e.into(),
        }
    }
}

/// Raw registration form as the presentation layer collects it: every field
/// is free text, list fields are comma separated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationForm {
    pub name: String,
    pub gender: String,
    pub dob: String,
    pub unique_id: String,
    pub role: String,
    pub qualifications: String,
    pub specializations: String,
    pub experience: String,
    pub hospital: String,
    pub location: String,
    pub departments: String,
    pub consultation_fee: String,
    pub slot_date: String,
    pub start_time: String,
    pub end_time: String,
}
