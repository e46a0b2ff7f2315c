use crate::model::booking::BookingStatus;
use crate::model::id::{BookingId, FacilityId};
use chrono::{DateTime, NaiveDate, Utc};
use derive_new::new;

#[derive(new)]
pub struct CreateBooking {
    pub user_id: String,
    pub facility_id: FacilityId,
    pub date: NaiveDate,
    pub time_slot: String,
    // derived once from date + slot end, never recomputed afterwards
    pub end_at: Option<DateTime<Utc>>,
    pub user_name: String,
    pub user_email: String,
}

#[derive(new)]
pub struct UpdateBookingStatus {
    pub booking_id: BookingId,
    // conditional-write predicate: the update applies only while the stored
    // status still matches `expected`
    pub expected: BookingStatus,
    pub status: BookingStatus,
}
