use crate::model::{
    booking::{
        event::{CreateBooking, UpdateBookingStatus},
        Booking,
    },
    id::BookingId,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::error::AppResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    // persists a new booking; the initial status is always `upcoming`
    async fn create(&self, event: CreateBooking) -> AppResult<Booking>;
    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>>;
    // a user's bookings, newest first by creation time
    async fn find_by_user_id(&self, user_id: &str) -> AppResult<Vec<Booking>>;
    // explicit status change guarded by the expected prior status
    async fn update_status(&self, event: UpdateBookingStatus) -> AppResult<()>;
    // sweep candidates: upcoming bookings whose end instant has passed
    async fn find_elapsed_upcoming(&self, now: DateTime<Utc>) -> AppResult<Vec<Booking>>;
    // conditional completion; Ok(false) means another writer moved the
    // booking out of `upcoming` first
    async fn mark_completed(&self, booking_id: BookingId, now: DateTime<Utc>)
        -> AppResult<bool>;
}
