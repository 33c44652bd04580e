use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use tracing::debug;

use shared_models::money::round_money;
use shared_models::{
    AdminRegistration, DoctorRegistration, Identity, PatientRegistration, ProposedSlot,
    Registration, Role,
};

use crate::models::{FormError, RegistrationForm};

impl RegistrationForm {
    /// Turn the free-text form into a typed registration for its role. An
    /// empty role means patient.
    pub fn parse(&self) -> Result<Registration, FormError> {
        let role = match self.role.trim() {
            "" => Role::Patient,
            raw => Role::from_str(raw).map_err(|_| FormError::InvalidRole(raw.to_string()))?,
        };
        debug!("Parsing {} registration form", role);

        let identity = Identity {
            name: required(&self.name, "name")?,
            gender: self.gender.trim().to_string(),
            dob: optional_date(&self.dob, "dob")?,
            unique_id: self.unique_id.trim().to_string(),
        };

        let registration = match role {
            Role::Admin => Registration::Admin(AdminRegistration {
                identity,
                hospital: self.hospital.trim().to_string(),
                location: self.location.trim().to_string(),
                departments: split_list(&self.departments),
            }),
            Role::Doctor => {
                if identity.unique_id.is_empty() {
                    return Err(FormError::MissingField("unique_id"));
                }
                Registration::Doctor(DoctorRegistration {
                    identity,
                    qualifications: self.qualifications.trim().to_string(),
                    specializations: split_list(&self.specializations),
                    experience: self.experience.trim().to_string(),
                    hospital: self.hospital.trim().to_string(),
                    slot: self.proposed_slot()?,
                })
            }
            Role::Patient => Registration::Patient(PatientRegistration { identity }),
        };

        Ok(registration)
    }

    fn proposed_slot(&self) -> Result<ProposedSlot, FormError> {
        let date = required_date(&self.slot_date, "slot_date")?;
        let start_time = required_time(&self.start_time, "start_time")?;
        let end_time = required_time(&self.end_time, "end_time")?;

        if end_time <= start_time {
            return Err(FormError::EmptyTimeRange {
                start: start_time,
                end: end_time,
            });
        }

        Ok(ProposedSlot {
            date,
            start_time,
            end_time,
            fee: parse_fee(&self.consultation_fee)?,
        })
    }
}

/// Split a comma-separated field, trimming entries and dropping empty ones.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

fn required(raw: &str, field: &'static str) -> Result<String, FormError> {
    match raw.trim() {
        "" => Err(FormError::MissingField(field)),
        value => Ok(value.to_string()),
    }
}

fn optional_date(raw: &str, field: &'static str) -> Result<Option<NaiveDate>, FormError> {
    match raw.trim() {
        "" => Ok(None),
        _ => required_date(raw, field).map(Some),
    }
}

fn required_date(raw: &str, field: &'static str) -> Result<NaiveDate, FormError> {
    let value = required(raw, field)?;
    match NaiveDate::parse_from_str(&value, "%Y-%m-%d") {
        Ok(date) => Ok(date),
        Err(_) => Err(FormError::InvalidDate { field, value }),
    }
}

fn required_time(raw: &str, field: &'static str) -> Result<NaiveTime, FormError> {
    let value = required(raw, field)?;
    let parsed = NaiveTime::parse_from_str(&value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(&value, "%H:%M:%S"));

    match parsed {
        Ok(time) => Ok(time),
        Err(_) => Err(FormError::InvalidTime { field, value }),
    }
}

fn parse_fee(raw: &str) -> Result<Decimal, FormError> {
    let value = required(raw, "consultation_fee")?;
    let fee = match Decimal::from_str(&value) {
        Ok(fee) => fee,
        Err(_) => return Err(FormError::InvalidFee(value)),
    };

    if fee.is_sign_negative() && !fee.is_zero() {
        return Err(FormError::NegativeFee);
    }

    Ok(round_money(fee))
}
