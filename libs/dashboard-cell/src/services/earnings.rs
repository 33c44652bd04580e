use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::debug;

use roster_cell::Roster;
use shared_models::money::{percent_of, round_money};
use shared_models::User;

use crate::models::DoctorDashboard;
use crate::services::revenue::round_buckets;

/// Earnings of one doctor record across every patient booking that names it.
/// The doctor keeps `share_percent` of each booking amount.
pub fn doctor_dashboard(doctor: &User, roster: &Roster, share_percent: u32) -> DoctorDashboard {
    let mut total_consultations = 0;
    let mut total_earnings = Decimal::ZERO;
    let mut earnings_by_hospital: BTreeMap<String, Decimal> = BTreeMap::new();

    let consultations = roster
        .patients()
        .flat_map(|(_, patient)| patient.bookings.iter())
        .filter(|booking| booking.doctor_id == doctor.id);

    for booking in consultations {
        let share = percent_of(booking.amount, share_percent);

        total_consultations += 1;
        total_earnings += share;
        *earnings_by_hospital.entry(booking.hospital.clone()).or_default() += share;
    }

    debug!(
        "Doctor {}: {} consultations, earnings {}",
        doctor.id, total_consultations, total_earnings
    );

    DoctorDashboard {
        doctor_name: doctor.name().to_string(),
        total_consultations,
        total_earnings: round_money(total_earnings),
        earnings_by_hospital: round_buckets(earnings_by_hospital),
    }
}
