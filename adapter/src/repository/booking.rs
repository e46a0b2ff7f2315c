use crate::database::{model::booking::BookingRow, ConnectionPool};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use derive_new::new;
use kernel::model::booking::{
    event::{CreateBooking, UpdateBookingStatus},
    Booking, BookingStatus,
};
use kernel::model::id::BookingId;
use kernel::repository::booking::BookingRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn create(&self, event: CreateBooking) -> AppResult<Booking> {
        // the referenced facility must exist; its absence is a not-found
        // condition, distinct from a malformed request
        let facility: Option<(i32,)> =
            sqlx::query_as("SELECT 1 FROM facilities WHERE facility_id = $1")
                .bind(event.facility_id)
                .fetch_optional(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;
        if facility.is_none() {
            return Err(AppError::EntityNotFound(format!(
                "facility {} not found",
                event.facility_id
            )));
        }

        let row: BookingRow = sqlx::query_as(
            r#"
                INSERT INTO bookings
                (booking_id, user_id, facility_id, date, time_slot, end_at,
                status, user_name, user_email)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                RETURNING
                booking_id, user_id, facility_id, date, time_slot, end_at,
                status, user_name, user_email, created_at, updated_at
                ;
            "#,
        )
        .bind(BookingId::new())
        .bind(&event.user_id)
        .bind(event.facility_id)
        .bind(event.date)
        .bind(&event.time_slot)
        .bind(event.end_at)
        .bind(BookingStatus::Upcoming.as_str())
        .bind(&event.user_name)
        .bind(&event.user_email)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.try_into()
    }

    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>> {
        let row: Option<BookingRow> = sqlx::query_as(
            r#"
                SELECT
                booking_id, user_id, facility_id, date, time_slot, end_at,
                status, user_name, user_email, created_at, updated_at
                FROM bookings
                WHERE booking_id = $1
                ;
            "#,
        )
        .bind(booking_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Booking::try_from).transpose()
    }

    async fn find_by_user_id(&self, user_id: &str) -> AppResult<Vec<Booking>> {
        // newest first, backed by the (user_id, created_at) index
        let rows: Vec<BookingRow> = sqlx::query_as(
            r#"
                SELECT
                booking_id, user_id, facility_id, date, time_slot, end_at,
                status, user_name, user_email, created_at, updated_at
                FROM bookings
                WHERE user_id = $1
                ORDER BY created_at DESC
                ;
            "#,
        )
        .bind(user_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Booking::try_from).collect()
    }

    async fn update_status(&self, event: UpdateBookingStatus) -> AppResult<()> {
        // the predicate on the prior status turns a lost-update race into a
        // zero-row update instead of a silent overwrite
        let res = sqlx::query(
            r#"
                UPDATE bookings
                SET status = $1, updated_at = CURRENT_TIMESTAMP(3)
                WHERE booking_id = $2 AND status = $3
                ;
            "#,
        )
        .bind(event.status.as_str())
        .bind(event.booking_id)
        .bind(event.expected.as_str())
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::UnprocessableEntity(format!(
                "booking {} was modified concurrently",
                event.booking_id
            )));
        }

        Ok(())
    }

    async fn find_elapsed_upcoming(&self, now: DateTime<Utc>) -> AppResult<Vec<Booking>> {
        // bounded by the partial (status, end_at) index; bookings without a
        // derivable end instant are excluded and never auto-complete
        let rows: Vec<BookingRow> = sqlx::query_as(
            r#"
                SELECT
                booking_id, user_id, facility_id, date, time_slot, end_at,
                status, user_name, user_email, created_at, updated_at
                FROM bookings
                WHERE status = 'upcoming' AND end_at IS NOT NULL AND end_at < $1
                ORDER BY end_at ASC
                ;
            "#,
        )
        .bind(now)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Booking::try_from).collect()
    }

    async fn mark_completed(
        &self,
        booking_id: BookingId,
        now: DateTime<Utc>,
    ) -> AppResult<bool> {
        let res = sqlx::query(
            r#"
                UPDATE bookings
                SET status = 'completed', updated_at = $2
                WHERE booking_id = $1 AND status = 'upcoming'
                ;
            "#,
        )
        .bind(booking_id)
        .bind(now)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(res.rows_affected() > 0)
    }
}
