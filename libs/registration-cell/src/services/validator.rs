use tracing::{debug, warn};

use roster_cell::Roster;
use shared_models::money::round_money;
use shared_models::{DoctorProfile, DoctorRegistration, ProposedSlot, Slot, SlotId};

use crate::models::{ValidatedDoctor, ValidationError};

/// Check a doctor registration against the roster and, on success, return the
/// doctor record with the proposed slot appended under a fresh id.
///
/// Checks run in order: the hospital must have an admin record (exact name),
/// one of its departments must equal one of the candidate's specializations
/// ignoring case, the slot must end after it starts and carry a non-negative
/// fee, and it must not overlap any slot already held by a doctor registered
/// under the same unique id. The fee is kept to two decimal places.
pub fn validate(
    candidate: DoctorRegistration,
    roster: &Roster,
) -> Result<ValidatedDoctor, ValidationError> {
    debug!(
        "Validating doctor registration {} at {}",
        candidate.identity.unique_id, candidate.hospital
    );

    let hospital = roster.find_hospital(&candidate.hospital).ok_or_else(|| {
        warn!("Hospital not registered: {}", candidate.hospital);
        ValidationError::HospitalNotFound {
            hospital: candidate.hospital.clone(),
        }
    })?;

    if !hospital.has_department_matching(&candidate.specializations) {
        warn!(
            "Specializations {:?} match no department at {}",
            candidate.specializations, candidate.hospital
        );
        return Err(ValidationError::DepartmentMismatch {
            hospital: candidate.hospital,
            specializations: candidate.specializations,
        });
    }

    check_slot_shape(&candidate.slot)?;

    if let Some(existing) = find_overlap(&candidate.slot, &candidate.identity.unique_id, roster) {
        warn!(
            "Slot {} {}-{} overlaps {} for doctor {}",
            candidate.slot.date,
            candidate.slot.start_time,
            candidate.slot.end_time,
            existing,
            candidate.identity.unique_id
        );
        return Err(ValidationError::SlotOverlap {
            date: candidate.slot.date,
            start: candidate.slot.start_time,
            end: candidate.slot.end_time,
            existing,
        });
    }

    let slot = Slot {
        id: SlotId::new(),
        date: candidate.slot.date,
        start_time: candidate.slot.start_time,
        end_time: candidate.slot.end_time,
        fee: round_money(candidate.slot.fee),
        hospital: candidate.hospital.clone(),
    };

    Ok(ValidatedDoctor {
        identity: candidate.identity,
        profile: DoctorProfile {
            qualifications: candidate.qualifications,
            specializations: candidate.specializations,
            experience: candidate.experience,
            hospital: candidate.hospital,
            slots: vec![slot],
        },
    })
}

fn check_slot_shape(slot: &ProposedSlot) -> Result<(), ValidationError> {
    if slot.end_time <= slot.start_time {
        warn!("Slot on {} ends at {} before it starts at {}", slot.date, slot.end_time, slot.start_time);
        return Err(ValidationError::EmptyTimeRange {
            start: slot.start_time,
            end: slot.end_time,
        });
    }

    if slot.fee.is_sign_negative() && !slot.fee.is_zero() {
        warn!("Rejected negative consultation fee {}", slot.fee);
        return Err(ValidationError::NegativeFee(slot.fee));
    }

    Ok(())
}

/// First existing slot, across every record sharing `unique_id`, whose
/// interval intersects the proposed one.
fn find_overlap(proposed: &ProposedSlot, unique_id: &str, roster: &Roster) -> Option<SlotId> {
    let (start, end) = (proposed.starts_at(), proposed.ends_at());

    roster
        .doctors_with_unique_id(unique_id)
        .flat_map(|(_, doctor)| doctor.slots.iter())
        .find(|slot| slot.overlaps(start, end))
        .map(|slot| slot.id)
}
