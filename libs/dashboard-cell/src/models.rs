use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use shared_models::{AppError, Booking, Role, UserId};

/// Role-specific view-model handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Dashboard {
    Admin(AdminDashboard),
    Doctor(DoctorDashboard),
    Patient(PatientDashboard),
}

impl Dashboard {
    pub fn role(&self) -> Role {
        match self {
            Dashboard::Admin(_) => Role::Admin,
            Dashboard::Doctor(_) => Role::Doctor,
            Dashboard::Patient(_) => Role::Patient,
        }
    }
}

/// Revenue rollup for one hospital. Department buckets attribute a slot's full
/// revenue to every specialization of its doctor, so they may sum to more than
/// `total_revenue`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    pub hospital: String,
    pub total_consultations: usize,
    pub total_revenue: Decimal,
    pub revenue_by_doctor: BTreeMap<String, Decimal>,
    pub revenue_by_department: BTreeMap<String, Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorDashboard {
    pub doctor_name: String,
    pub total_consultations: usize,
    pub total_earnings: Decimal,
    pub earnings_by_hospital: BTreeMap<String, Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientDashboard {
    pub patient_name: String,
    pub bookings: Vec<BookingEntry>,
}

/// One line of a patient's booking history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingEntry {
    pub doctor_id: UserId,
    pub hospital: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub amount: Decimal,
}

impl From<&Booking> for BookingEntry {
    fn from(booking: &Booking) -> Self {
        Self {
            doctor_id: booking.doctor_id,
            hospital: booking.hospital.clone(),
            date: booking.date,
            time: booking.time,
            amount: booking.amount,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    #[error("No user selected: {0}")]
    NotFound(String),
}

impl From<DashboardError> for AppError {
    fn from(err: DashboardError) -> Self {
        AppError::NotFound(err.to_string())
    }
}
