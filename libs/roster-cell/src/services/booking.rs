use tracing::{debug, info, warn};

use shared_models::{Booking, SlotId, UserId};

use crate::models::RosterError;
use crate::services::roster::Roster;

impl Roster {
    /// Record a patient's booking against one of a doctor's slots. The booking
    /// copies the slot's hospital, date, start time and fee.
    pub fn book_slot(
        &mut self,
        patient_id: UserId,
        doctor_id: UserId,
        slot_id: SlotId,
    ) -> Result<Booking, RosterError> {
        debug!("Booking slot {} with doctor {} for patient {}", slot_id, doctor_id, patient_id);

        let doctor = self
            .find(doctor_id)
            .and_then(|u| u.as_doctor())
            .ok_or(RosterError::DoctorNotFound(doctor_id))?;

        let slot = doctor
            .slots
            .iter()
            .find(|s| s.id == slot_id)
            .ok_or(RosterError::SlotNotFound { doctor_id, slot_id })?;

        let booking = Booking {
            slot_id,
            doctor_id,
            hospital: slot.hospital.clone(),
            date: slot.date,
            time: slot.start_time,
            amount: slot.fee,
        };

        let patient = self
            .find_mut(patient_id)
            .and_then(|u| u.as_patient_mut())
            .ok_or(RosterError::PatientNotFound(patient_id))?;

        if patient.bookings.iter().any(|b| b.slot_id == slot_id) {
            warn!("Patient {} already holds slot {}", patient_id, slot_id);
            return Err(RosterError::AlreadyBooked { patient_id, slot_id });
        }

        patient.bookings.push(booking.clone());
        info!("Patient {} booked slot {} ({})", patient_id, slot_id, booking.amount);

        Ok(booking)
    }
}
