use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::user::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotId(pub Uuid);

impl SlotId {
    pub fn new() -> Self {
        SlotId(Uuid::new_v4())
    }
}

impl Default for SlotId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A doctor's consultation window at one hospital.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub id: SlotId,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub fee: Decimal,
    pub hospital: String,
}

impl Slot {
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.start_time)
    }

    pub fn ends_at(&self) -> NaiveDateTime {
        self.date.and_time(self.end_time)
    }

    /// Half-open `[start, end)` intersection test.
    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        start < self.ends_at() && end > self.starts_at()
    }
}

/// A patient's reservation against a slot. `amount` is the slot fee at
/// booking time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub slot_id: SlotId,
    pub doctor_id: UserId,
    pub hospital: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn slot(date: &str, start: &str, end: &str) -> Slot {
        Slot {
            id: SlotId::new(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            start_time: NaiveTime::parse_from_str(start, "%H:%M").unwrap(),
            end_time: NaiveTime::parse_from_str(end, "%H:%M").unwrap(),
            fee: dec!(500),
            hospital: "CityHosp".to_string(),
        }
    }

    fn at(date: &str, time: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date, time), "%Y-%m-%d %H:%M").unwrap()
    }

    #[test]
    fn test_overlap_is_half_open() {
        let existing = slot("2024-01-01", "09:00", "10:00");

        assert!(existing.overlaps(at("2024-01-01", "09:30"), at("2024-01-01", "10:30")));
        assert!(existing.overlaps(at("2024-01-01", "08:00"), at("2024-01-01", "11:00")));
        assert!(!existing.overlaps(at("2024-01-01", "10:00"), at("2024-01-01", "11:00")));
        assert!(!existing.overlaps(at("2024-01-01", "08:00"), at("2024-01-01", "09:00")));
    }

    #[test]
    fn test_different_dates_never_overlap() {
        let existing = slot("2024-01-01", "09:00", "10:00");
        assert!(!existing.overlaps(at("2024-01-02", "09:00"), at("2024-01-02", "10:00")));
    }

    #[test]
    fn test_booking_serializes_camel_case() {
        let existing = slot("2024-01-01", "09:00", "10:00");
        let booking = Booking {
            slot_id: existing.id,
            doctor_id: UserId(3),
            hospital: existing.hospital.clone(),
            date: existing.date,
            time: existing.start_time,
            amount: existing.fee,
        };

        let value = serde_json::to_value(&booking).unwrap();
        assert_eq!(value["doctorId"], 3);
        assert_eq!(value["date"], "2024-01-01");
        assert!(value.get("slotId").is_some());
    }
}
