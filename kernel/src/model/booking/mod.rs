use crate::model::id::{BookingId, FacilityId};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use shared::error::AppError;

pub mod event;

#[derive(Debug, Clone)]
pub struct Booking {
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

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Upcoming,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Upcoming => "upcoming",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, BookingStatus::Completed | BookingStatus::Cancelled)
    }

    /// Transition table for explicit status changes. A booking never leaves
    /// a terminal state; re-asserting the current status is a no-op.
    pub fn can_transition_to(self, next: BookingStatus) -> bool {
        match (self, next) {
            (from, to) if from == to => true,
            (BookingStatus::Upcoming, BookingStatus::Completed) => true,
            (BookingStatus::Upcoming, BookingStatus::Cancelled) => true,
            _ => false,
        }
    }
}

impl std::str::FromStr for BookingStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upcoming" => Ok(BookingStatus::Upcoming),
            "completed" => Ok(BookingStatus::Completed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            other => Err(AppError::ConversionEntityError(format!(
                "unknown booking status: {other}"
            ))),
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derives the absolute end instant of a booking from its date and the end
/// half of the slot text (canonical form `"09:00 - 10:00"`). Computed once
/// at creation; slot text that cannot be parsed yields `None`, and such a
/// booking is never auto-completed.
pub fn slot_end_at(date: NaiveDate, time_slot: &str) -> Option<DateTime<Utc>> {
    let (_, end) = time_slot.split_once('-')?;
    let end = NaiveTime::parse_from_str(end.trim(), "%H:%M").ok()?;
    Some(date.and_time(end).and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn slot_end_at_parses_canonical_slot_text() {
        let end = slot_end_at(date("2025-01-10"), "09:00 - 10:00");
        assert_eq!(end, Some(Utc.with_ymd_and_hms(2025, 1, 10, 10, 0, 0).unwrap()));
    }

    #[test]
    fn slot_end_at_tolerates_missing_whitespace() {
        let end = slot_end_at(date("2025-01-10"), "20:00-21:00");
        assert_eq!(end, Some(Utc.with_ymd_and_hms(2025, 1, 10, 21, 0, 0).unwrap()));
    }

    #[test]
    fn slot_end_at_rejects_garbage() {
        assert_eq!(slot_end_at(date("2025-01-10"), "morning session"), None);
        assert_eq!(slot_end_at(date("2025-01-10"), "09:00 - late"), None);
        assert_eq!(slot_end_at(date("2025-01-10"), ""), None);
    }

    #[test]
    fn upcoming_may_reach_both_terminal_states() {
        assert!(BookingStatus::Upcoming.can_transition_to(BookingStatus::Completed));
        assert!(BookingStatus::Upcoming.can_transition_to(BookingStatus::Cancelled));
    }

    #[test]
    fn terminal_states_are_frozen() {
        for terminal in [BookingStatus::Completed, BookingStatus::Cancelled] {
            assert!(!terminal.can_transition_to(BookingStatus::Upcoming));
        }
        assert!(!BookingStatus::Completed.can_transition_to(BookingStatus::Cancelled));
        assert!(!BookingStatus::Cancelled.can_transition_to(BookingStatus::Completed));
    }

    #[test]
    fn reasserting_current_status_is_allowed() {
        for status in [
            BookingStatus::Upcoming,
            BookingStatus::Completed,
            BookingStatus::Cancelled,
        ] {
            assert!(status.can_transition_to(status));
        }
    }

    #[test]
    fn status_round_trips_through_str() {
        for status in [
            BookingStatus::Upcoming,
            BookingStatus::Completed,
            BookingStatus::Cancelled,
        ] {
            assert_eq!(status.as_str().parse::<BookingStatus>().unwrap(), status);
        }
        assert!("pending".parse::<BookingStatus>().is_err());
    }
}
