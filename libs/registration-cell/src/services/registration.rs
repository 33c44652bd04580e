use tracing::info;

use roster_cell::Roster;
use shared_models::{
    AdminProfile, DoctorRegistration, PatientProfile, Profile, Registration, UserId,
};

use crate::models::{RegistrationError, RegistrationForm, ValidatedDoctor, ValidationError};
use crate::services::validator;

/// Validate a doctor registration without touching the roster. The caller
/// commits the returned record.
pub fn register_doctor(
    candidate: DoctorRegistration,
    roster: &Roster,
) -> Result<ValidatedDoctor, ValidationError> {
    let validated = validator::validate(candidate, roster)?;
    info!(
        "Doctor {} accepted at {}",
        validated.identity().unique_id,
        validated.profile().hospital
    );
    Ok(validated)
}

/// Register any role and commit the record. Admins and patients are admitted
/// as-is; doctors only after validation.
pub fn register(registration: Registration, roster: &mut Roster) -> Result<UserId, ValidationError> {
    let id = match registration {
        Registration::Admin(admin) => roster.admit(
            admin.identity,
            Profile::Admin(AdminProfile {
                hospital: admin.hospital,
                location: admin.location,
                departments: admin.departments,
            }),
        ),
        Registration::Doctor(candidate) => {
            let (identity, profile) = register_doctor(candidate, roster)?.into_parts();
            roster.admit(identity, Profile::Doctor(profile))
        }
        Registration::Patient(patient) => {
            roster.admit(patient.identity, Profile::Patient(PatientProfile::default()))
        }
    };

    Ok(id)
}

/// Parse a raw form and register it.
pub fn submit(form: &RegistrationForm, roster: &mut Roster) -> Result<UserId, RegistrationError> {
    let registration = form.parse()?;
    Ok(register(registration, roster)?)
}
