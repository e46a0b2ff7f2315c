use kernel::model::{
    id::{BookingId, FacilityId, TicketId},
    ticket::{MaintenanceTicket, TicketStatus},
};
use shared::error::AppError;
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct TicketRow {
    pub ticket_id: TicketId,
    pub booking_id: BookingId,
    pub facility_id: FacilityId,
    pub user_name: String,
    pub user_email: String,
    pub issue_details: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<TicketRow> for MaintenanceTicket {
    type Error = AppError;

    fn try_from(value: TicketRow) -> Result<Self, Self::Error> {
        let TicketRow {
            ticket_id,
            booking_id,
            facility_id,
            user_name,
            user_email,
            issue_details,
            status,
            created_at,
        } = value;
        Ok(MaintenanceTicket {
            ticket_id,
            booking_id,
            facility_id,
            user_name,
            user_email,
            issue_details,
            status: status.parse::<TicketStatus>()?,
            created_at,
        })
    }
}
