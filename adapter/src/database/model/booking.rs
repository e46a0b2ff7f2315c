use kernel::model::{
    booking::{Booking, BookingStatus},
    id::{BookingId, FacilityId},
};
use shared::error::AppError;
use sqlx::types::chrono::{DateTime, NaiveDate, Utc};

#[derive(sqlx::FromRow)]
pub struct BookingRow {
    pub booking_id: BookingId,
    pub user_id: String,
    pub facility_id: FacilityId,
    pub date: NaiveDate,
    pub time_slot: String,
    pub end_at: Option<DateTime<Utc>>,
    pub status: String,
    pub user_name: String,
    pub user_email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<BookingRow> for Booking {
    type Error = AppError;

    fn try_from(value: BookingRow) -> Result<Self, Self::Error> {
        let BookingRow {
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
        Ok(Booking {
            booking_id,
            user_id,
            facility_id,
            date,
            time_slot,
            end_at,
            status: status.parse::<BookingStatus>()?,
            user_name,
            user_email,
            created_at,
            updated_at,
        })
    }
}
