use chrono::{DateTime, NaiveDate, Utc};
use garde::Validate;
use kernel::model::{
    booking::{Booking, BookingStatus},
    id::{BookingId, FacilityId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[garde(length(min = 1))]
    pub user_id: String,
    #[garde(skip)]
    pub facility_id: FacilityId,
    #[garde(skip)]
    pub date: NaiveDate,
    #[garde(length(min = 1))]
    pub time_slot: String,
    #[garde(length(min = 1))]
    pub user_name: String,
    #[garde(email)]
    pub user_email: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingListQuery {
    #[garde(length(min = 1))]
    pub user_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingStatusRequest {
    pub status: BookingStatus,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingsResponse {
    pub items: Vec<BookingResponse>,
}

impl From<Vec<Booking>> for BookingsResponse {
    fn from(value: Vec<Booking>) -> Self {
        Self {
            items: value.into_iter().map(BookingResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub booking_id: BookingId,
    pub user_id: String,
    pub facility_id: FacilityId,
    pub date: NaiveDate,
    pub time_slot: String,
    pub end_at: Option<DateTime<Utc>>,
    pub status: BookingStatus,
    pub user_name: String,
    pub user_email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let Booking {
            booking_id,
            user_id,
            facility_id,
            date,
            time_slot,
            end_at,
            status,
            user_name,
            user_email,
            created_at,
            updated_at,
        } = value;
        Self {
            booking_id,
            user_id,
            facility_id,
            date,
            time_slot,
            end_at,
            status,
            user_name,
            user_email,
            created_at,
            updated_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingStatusResponse {
    pub booking_id: BookingId,
    pub status: BookingStatus,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepResponse {
    pub completed: u64,
}
