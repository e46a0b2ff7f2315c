use crate::model::booking::BookingStatus;
use crate::repository::booking::BookingRepository;
use chrono::{DateTime, Utc};
use shared::error::AppResult;

/// Decides what a booking's status should be at `now`. Pure and
/// deterministic: an `upcoming` booking whose end instant lies strictly in
/// the past becomes `completed`; everything else keeps its current status.
/// Bookings without a derivable end instant are left `upcoming` until an
/// explicit status change.
pub fn evaluate(
    status: BookingStatus,
    end_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> BookingStatus {
    match (status, end_at) {
        (BookingStatus::Upcoming, Some(end)) if end < now => BookingStatus::Completed,
        _ => status,
    }
}

/// Applies the evaluator across all candidate bookings and persists the
/// resulting transitions. Failures are isolated per booking: a failed write
/// is logged and retried on the next scheduled run, never aborting the
/// batch. Returns the number of bookings transitioned to `completed`.
pub async fn sweep(repo: &dyn BookingRepository, now: DateTime<Utc>) -> AppResult<u64> {
    let candidates = repo.find_elapsed_upcoming(now).await?;

    let mut completed = 0u64;
    for booking in candidates {
        if evaluate(booking.status, booking.end_at, now) != BookingStatus::Completed {
            continue;
        }
        match repo.mark_completed(booking.booking_id, now).await {
            Ok(true) => completed += 1,
            // another writer (a concurrent sweep or an explicit cancel)
            // moved the booking out of `upcoming` first
            Ok(false) => {}
            Err(e) => {
                tracing::warn!(
                    booking_id = %booking.booking_id,
                    error = ?e,
                    "failed to complete elapsed booking; will retry on next sweep"
                );
            }
        }
    }

    Ok(completed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::booking::event::{CreateBooking, UpdateBookingStatus};
    use crate::model::booking::{slot_end_at, Booking};
    use crate::model::id::{BookingId, FacilityId};
    use async_trait::async_trait;
    use chrono::TimeZone;
    use shared::error::AppError;
    use std::collections::HashSet;
    use std::sync::Mutex;

    struct InMemoryBookingRepository {
        bookings: Mutex<Vec<Booking>>,
        failing: HashSet<BookingId>,
    }

    impl InMemoryBookingRepository {
        fn with(bookings: Vec<Booking>) -> Self {
            Self {
                bookings: Mutex::new(bookings),
                failing: HashSet::new(),
            }
        }

        fn failing_on(mut self, booking_id: BookingId) -> Self {
            self.failing.insert(booking_id);
            self
        }

        fn status_of(&self, booking_id: BookingId) -> BookingStatus {
            self.bookings
                .lock()
                .unwrap()
                .iter()
                .find(|b| b.booking_id == booking_id)
                .unwrap()
                .status
        }
    }

    #[async_trait]
    impl BookingRepository for InMemoryBookingRepository {
        async fn create(&self, _event: CreateBooking) -> AppResult<Booking> {
            unimplemented!("not exercised by the sweep")
        }

        async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>> {
            Ok(self
                .bookings
                .lock()
                .unwrap()
                .iter()
                .find(|b| b.booking_id == booking_id)
                .cloned())
        }

        async fn find_by_user_id(&self, _user_id: &str) -> AppResult<Vec<Booking>> {
            unimplemented!("not exercised by the sweep")
        }

        async fn update_status(&self, _event: UpdateBookingStatus) -> AppResult<()> {
            unimplemented!("not exercised by the sweep")
        }

        async fn find_elapsed_upcoming(&self, now: DateTime<Utc>) -> AppResult<Vec<Booking>> {
            Ok(self
                .bookings
                .lock()
                .unwrap()
                .iter()
                .filter(|b| {
                    b.status == BookingStatus::Upcoming
                        && b.end_at.is_some_and(|end| end < now)
                })
                .cloned()
                .collect())
        }

        async fn mark_completed(
            &self,
            booking_id: BookingId,
            now: DateTime<Utc>,
        ) -> AppResult<bool> {
            if self.failing.contains(&booking_id) {
                return Err(AppError::NoRowsAffectedError("injected failure".into()));
            }
            let mut bookings = self.bookings.lock().unwrap();
            let Some(booking) = bookings
                .iter_mut()
                .find(|b| b.booking_id == booking_id && b.status == BookingStatus::Upcoming)
            else {
                return Ok(false);
            };
            booking.status = BookingStatus::Completed;
            booking.updated_at = now;
            Ok(true)
        }
    }

    fn booking(date: &str, time_slot: &str, status: BookingStatus) -> Booking {
        let date = date.parse().unwrap();
        let created = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        Booking {
            booking_id: BookingId::new(),
            user_id: "user-1".into(),
            facility_id: FacilityId::new(),
            date,
            time_slot: time_slot.into(),
            end_at: slot_end_at(date, time_slot),
            status,
            user_name: "Aina".into(),
            user_email: "aina@example.com".into(),
            created_at: created,
            updated_at: created,
        }
    }

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 10, h, m, s).unwrap()
    }

    #[test]
    fn elapsed_upcoming_booking_evaluates_to_completed() {
        let b = booking("2025-01-10", "09:00 - 10:00", BookingStatus::Upcoming);
        assert_eq!(
            evaluate(b.status, b.end_at, at(10, 0, 1)),
            BookingStatus::Completed
        );
    }

    #[test]
    fn booking_is_not_completed_before_or_at_its_end_instant() {
        let b = booking("2025-01-10", "09:00 - 10:00", BookingStatus::Upcoming);
        assert_eq!(
            evaluate(b.status, b.end_at, at(9, 59, 59)),
            BookingStatus::Upcoming
        );
        // strict comparison: the exact end instant does not complete
        assert_eq!(
            evaluate(b.status, b.end_at, at(10, 0, 0)),
            BookingStatus::Upcoming
        );
    }

    #[test]
    fn terminal_statuses_are_never_reevaluated() {
        for status in [BookingStatus::Completed, BookingStatus::Cancelled] {
            let b = booking("2025-01-10", "09:00 - 10:00", status);
            assert_eq!(evaluate(b.status, b.end_at, at(23, 0, 0)), status);
        }
    }

    #[test]
    fn unparseable_slot_never_auto_completes() {
        let b = booking("2000-01-01", "sometime later", BookingStatus::Upcoming);
        assert_eq!(b.end_at, None);
        assert_eq!(
            evaluate(b.status, b.end_at, at(23, 0, 0)),
            BookingStatus::Upcoming
        );
    }

    #[tokio::test]
    async fn sweep_completes_only_elapsed_upcoming_bookings() {
        let elapsed = booking("2025-01-10", "09:00 - 10:00", BookingStatus::Upcoming);
        let future = booking("2025-01-10", "20:00 - 21:00", BookingStatus::Upcoming);
        let cancelled = booking("2025-01-09", "09:00 - 10:00", BookingStatus::Cancelled);
        let unparseable = booking("2000-01-01", "whenever", BookingStatus::Upcoming);
        let ids = (
            elapsed.booking_id,
            future.booking_id,
            cancelled.booking_id,
            unparseable.booking_id,
        );
        let repo =
            InMemoryBookingRepository::with(vec![elapsed, future, cancelled, unparseable]);

        let count = sweep(&repo, at(12, 0, 0)).await.unwrap();

        assert_eq!(count, 1);
        assert_eq!(repo.status_of(ids.0), BookingStatus::Completed);
        assert_eq!(repo.status_of(ids.1), BookingStatus::Upcoming);
        assert_eq!(repo.status_of(ids.2), BookingStatus::Cancelled);
        assert_eq!(repo.status_of(ids.3), BookingStatus::Upcoming);
    }

    #[tokio::test]
    async fn sweep_is_idempotent_without_clock_advance() {
        let repo = InMemoryBookingRepository::with(vec![booking(
            "2025-01-10",
            "09:00 - 10:00",
            BookingStatus::Upcoming,
        )]);

        assert_eq!(sweep(&repo, at(11, 0, 0)).await.unwrap(), 1);
        assert_eq!(sweep(&repo, at(11, 0, 0)).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn failed_item_does_not_abort_the_batch() {
        let failing = booking("2025-01-10", "09:00 - 10:00", BookingStatus::Upcoming);
        let healthy = booking("2025-01-10", "10:00 - 11:00", BookingStatus::Upcoming);
        let failing_id = failing.booking_id;
        let healthy_id = healthy.booking_id;
        let repo = InMemoryBookingRepository::with(vec![failing, healthy]).failing_on(failing_id);

        let count = sweep(&repo, at(12, 0, 0)).await.unwrap();

        assert_eq!(count, 1);
        assert_eq!(repo.status_of(healthy_id), BookingStatus::Completed);
        // the failed item stays a candidate for the next run
        assert_eq!(repo.status_of(failing_id), BookingStatus::Upcoming);
    }

    #[tokio::test]
    async fn sweep_updates_the_last_update_timestamp() {
        let b = booking("2025-01-10", "09:00 - 10:00", BookingStatus::Upcoming);
        let id = b.booking_id;
        let repo = InMemoryBookingRepository::with(vec![b]);

        let now = at(10, 30, 0);
        sweep(&repo, now).await.unwrap();

        let swept = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(swept.updated_at, now);
    }
}
