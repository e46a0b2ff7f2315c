use crate::model::booking::Booking;
use crate::model::id::{BookingId, FacilityId, TicketId};
use crate::model::ticket::TicketStatus;
use derive_new::new;

#[derive(Debug, PartialEq, Eq, new)]
pub struct CreateTicket {
    pub booking_id: BookingId,
    pub facility_id: FacilityId,
    pub user_name: String,
    pub user_email: String,
    pub issue_details: String,
    pub status: TicketStatus,
}

impl CreateTicket {
    /// Derives a maintenance ticket from an issue report attached to
    /// feedback. Returns `None` when the report carries no actual details,
    /// in which case no ticket is raised.
    pub fn from_issue(
        booking: &Booking,
        issue_details: &str,
        status: Option<TicketStatus>,
    ) -> Option<Self> {
        let details = issue_details.trim();
        if details.is_empty() {
            return None;
        }
        Some(Self {
            booking_id: booking.booking_id,
            facility_id: booking.facility_id,
            user_name: booking.user_name.clone(),
            user_email: booking.user_email.clone(),
            issue_details: details.to_string(),
            status: status.unwrap_or(TicketStatus::Open),
        })
    }
}

#[derive(new)]
pub struct UpdateTicketStatus {
    pub ticket_id: TicketId,
    pub status: TicketStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::booking::BookingStatus;
    use chrono::Utc;

    fn completed_booking() -> Booking {
        Booking {
            booking_id: BookingId::new(),
            user_id: "user-1".into(),
            facility_id: FacilityId::new(),
            date: "2025-01-10".parse().unwrap(),
            time_slot: "09:00 - 10:00".into(),
            end_at: Some(Utc::now()),
            status: BookingStatus::Completed,
            user_name: "Aina".into(),
            user_email: "aina@example.com".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn issue_report_yields_one_open_ticket_for_the_same_booking() {
        let booking = completed_booking();
        let ticket = CreateTicket::from_issue(&booking, "net is torn", None).unwrap();
        assert_eq!(ticket.booking_id, booking.booking_id);
        assert_eq!(ticket.facility_id, booking.facility_id);
        assert_eq!(ticket.user_name, booking.user_name);
        assert_eq!(ticket.user_email, booking.user_email);
        assert_eq!(ticket.status, TicketStatus::Open);
    }

    #[test]
    fn explicit_initial_status_is_honored() {
        let booking = completed_booking();
        let ticket =
            CreateTicket::from_issue(&booking, "flooded floor", Some(TicketStatus::InProgress))
                .unwrap();
        assert_eq!(ticket.status, TicketStatus::InProgress);
    }

    #[test]
    fn blank_issue_details_raise_no_ticket() {
        let booking = completed_booking();
        assert_eq!(CreateTicket::from_issue(&booking, "", None), None);
        assert_eq!(CreateTicket::from_issue(&booking, "   ", None), None);
    }
}
