use shared_models::{PatientProfile, User};

use crate::models::{BookingEntry, PatientDashboard};

/// The patient's own bookings, in the order they were recorded.
pub fn patient_dashboard(user: &User, patient: &PatientProfile) -> PatientDashboard {
    PatientDashboard {
        patient_name: user.name().to_string(),
        bookings: patient.bookings.iter().map(BookingEntry::from).collect(),
    }
}
