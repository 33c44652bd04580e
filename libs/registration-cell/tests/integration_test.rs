use assert_matches::assert_matches;
use rust_decimal_macros::dec;

use registration_cell::{
    register, register_doctor, submit, FormError, RegistrationError, RegistrationForm,
    ValidationError,
};
use roster_cell::Roster;
use shared_models::{AppError, Registration, Role, UserId};
use shared_utils::test_utils::{doctor_registration, proposed_slot};

fn admin_form() -> RegistrationForm {
    RegistrationForm {
        name: "Anita".to_string(),
        role: "admin".to_string(),
        hospital: "CityHosp".to_string(),
        location: "Pune".to_string(),
        departments: "Cardiology, Neurology".to_string(),
        ..RegistrationForm::default()
    }
}

fn doctor_form(unique_id: &str, start: &str, end: &str) -> RegistrationForm {
    RegistrationForm {
        name: "Dr. Rao".to_string(),
        unique_id: unique_id.to_string(),
        role: "doctor".to_string(),
        qualifications: "MBBS".to_string(),
        specializations: "cardiology".to_string(),
        experience: "6".to_string(),
        hospital: "CityHosp".to_string(),
        consultation_fee: "500".to_string(),
        slot_date: "2024-01-01".to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
        ..RegistrationForm::default()
    }
}

#[test]
fn test_full_registration_session() {
    let mut roster = Roster::new();

    let admin_id = submit(&admin_form(), &mut roster).unwrap();
    let doctor_id = submit(&doctor_form("DOC-1", "09:00", "10:00"), &mut roster).unwrap();
    let patient_form = RegistrationForm {
        name: "Meera".to_string(),
        role: "patient".to_string(),
        ..RegistrationForm::default()
    };
    let patient_id = submit(&patient_form, &mut roster).unwrap();

    assert_eq!((admin_id, doctor_id, patient_id), (UserId(1), UserId(2), UserId(3)));

    let roles: Vec<Role> = roster.summaries().iter().map(|s| s.role).collect();
    assert_eq!(roles, vec![Role::Admin, Role::Doctor, Role::Patient]);

    let hospital = roster.find_hospital("CityHosp").unwrap();
    assert_eq!(hospital.doctors.len(), 1);
    assert_eq!(hospital.doctors[0].as_doctor().unwrap().slots.len(), 1);
}

#[test]
fn test_doctor_before_any_admin_is_rejected() {
    let mut roster = Roster::new();

    let err = submit(&doctor_form("DOC-1", "09:00", "10:00"), &mut roster).unwrap_err();

    assert_matches!(
        err,
        RegistrationError::Validation(ValidationError::HospitalNotFound { .. })
    );
    assert!(roster.is_empty());
}

#[test]
fn test_re_registration_with_overlapping_slot_is_rejected() {
    let mut roster = Roster::new();
    submit(&admin_form(), &mut roster).unwrap();
    submit(&doctor_form("DOC-1", "09:00", "10:00"), &mut roster).unwrap();

    let err = submit(&doctor_form("DOC-1", "09:30", "10:30"), &mut roster).unwrap_err();
    assert_matches!(
        err,
        RegistrationError::Validation(ValidationError::SlotOverlap { .. })
    );
    assert_matches!(AppError::from(err), AppError::Conflict(_));
    assert_eq!(roster.len(), 2);
}

#[test]
fn test_re_registration_checks_every_prior_record() {
    let mut roster = Roster::new();
    submit(&admin_form(), &mut roster).unwrap();
    submit(&doctor_form("DOC-1", "09:00", "10:00"), &mut roster).unwrap();
    submit(&doctor_form("DOC-1", "10:00", "11:00"), &mut roster).unwrap();

    let err = submit(&doctor_form("DOC-1", "10:30", "10:45"), &mut roster).unwrap_err();
    assert_matches!(
        err,
        RegistrationError::Validation(ValidationError::SlotOverlap { .. })
    );
    assert_eq!(roster.doctors_with_unique_id("DOC-1").count(), 2);
}

#[test]
fn test_form_errors_surface_as_bad_request() {
    let mut roster = Roster::new();
    let form = RegistrationForm {
        name: String::new(),
        ..admin_form()
    };

    let err = submit(&form, &mut roster).unwrap_err();
    assert_matches!(err, RegistrationError::Form(FormError::MissingField("name")));
    assert_matches!(AppError::from(err), AppError::BadRequest(_));
}

#[test]
fn test_register_doctor_leaves_roster_untouched() {
    let mut roster = Roster::new();
    submit(&admin_form(), &mut roster).unwrap();

    let candidate = doctor_registration(
        "DOC-5",
        "CityHosp",
        &["NEUROLOGY"],
        proposed_slot("2024-03-01", "08:00", "09:00", dec!(400)),
    );
    let validated = register_doctor(candidate.clone(), &roster).unwrap();

    assert_eq!(roster.len(), 1);
    assert_eq!(validated.profile().slots[0].fee, dec!(400));

    let id = register(Registration::Doctor(candidate), &mut roster).unwrap();
    assert_eq!(roster.find(id).unwrap().role(), Role::Doctor);
}

#[test]
fn test_slots_on_different_dates_never_conflict() {
    let mut roster = Roster::new();
    submit(&admin_form(), &mut roster).unwrap();
    submit(&doctor_form("DOC-1", "09:00", "10:00"), &mut roster).unwrap();

    let next_day = RegistrationForm {
        slot_date: "2024-01-02".to_string(),
        ..doctor_form("DOC-1", "09:00", "10:00")
    };

    assert!(submit(&next_day, &mut roster).is_ok());
}

#[test]
fn test_typed_registration_rejects_malformed_slots() {
    let mut roster = Roster::new();
    submit(&admin_form(), &mut roster).unwrap();

    let reversed = doctor_registration(
        "DOC-5",
        "CityHosp",
        &["Cardiology"],
        proposed_slot("2024-01-01", "10:00", "09:00", dec!(500)),
    );
    let err = register_doctor(reversed, &roster).unwrap_err();
    assert_matches!(err, ValidationError::EmptyTimeRange { .. });
    assert_matches!(AppError::from(err), AppError::BadRequest(_));

    let negative = doctor_registration(
        "DOC-5",
        "CityHosp",
        &["Cardiology"],
        proposed_slot("2024-01-01", "09:00", "10:00", dec!(-50)),
    );
    assert_matches!(
        register(Registration::Doctor(negative), &mut roster),
        Err(ValidationError::NegativeFee(_))
    );
    assert_eq!(roster.len(), 1);
}
