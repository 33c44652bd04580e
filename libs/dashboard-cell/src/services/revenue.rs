use std::collections::{BTreeMap, HashMap, HashSet};

use rust_decimal::Decimal;
use tracing::debug;

use roster_cell::Roster;
use shared_models::money::round_money;
use shared_models::{AdminProfile, SlotId};

use crate::models::AdminDashboard;

/// Revenue rollup over every doctor registered at the admin's hospital.
///
/// A slot's booking count is the number of distinct patients holding a
/// booking for it; its revenue is that count times the slot fee.
pub fn admin_dashboard(admin: &AdminProfile, roster: &Roster) -> AdminDashboard {
    let patients_per_slot = patients_per_slot(roster);

    let mut total_consultations = 0;
    let mut total_revenue = Decimal::ZERO;
    let mut revenue_by_doctor: BTreeMap<String, Decimal> = BTreeMap::new();
    let mut revenue_by_department: BTreeMap<String, Decimal> = BTreeMap::new();

    let doctors = roster
        .doctors()
        .filter(|(_, doctor)| doctor.hospital == admin.hospital);

    for (user, doctor) in doctors {
        for slot in &doctor.slots {
            let count = patients_per_slot.get(&slot.id).copied().unwrap_or(0);
            let revenue = slot.fee * Decimal::from(count);

            total_consultations += count;
            total_revenue += revenue;
            *revenue_by_doctor.entry(user.name().to_string()).or_default() += revenue;

            for department in &doctor.specializations {
                *revenue_by_department.entry(department.clone()).or_default() += revenue;
            }
        }
    }

    debug!(
        "Hospital {}: {} consultations, revenue {}",
        admin.hospital, total_consultations, total_revenue
    );

    AdminDashboard {
        hospital: admin.hospital.clone(),
        total_consultations,
        total_revenue: round_money(total_revenue),
        revenue_by_doctor: round_buckets(revenue_by_doctor),
        revenue_by_department: round_buckets(revenue_by_department),
    }
}

fn patients_per_slot(roster: &Roster) -> HashMap<SlotId, usize> {
    let mut counts = HashMap::new();

    for (_, patient) in roster.patients() {
        let distinct: HashSet<SlotId> = patient.bookings.iter().map(|b| b.slot_id).collect();
        for slot_id in distinct {
            *counts.entry(slot_id).or_insert(0) += 1;
        }
    }

    counts
}

pub(crate) fn round_buckets(buckets: BTreeMap<String, Decimal>) -> BTreeMap<String, Decimal> {
    buckets
        .into_iter()
        .map(|(key, amount)| (key, round_money(amount)))
        .collect()
}
