use chrono::{DateTime, Utc};
use kernel::model::{
    id::{BookingId, FacilityId, TicketId},
    ticket::{MaintenanceTicket, TicketStatus},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketListQuery {
    // a ticket status, `all`, or absent for everything
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTicketStatusRequest {
    pub status: TicketStatus,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketsResponse {
    pub items: Vec<TicketResponse>,
}

impl From<Vec<MaintenanceTicket>> for TicketsResponse {
    fn from(value: Vec<MaintenanceTicket>) -> Self {
        Self {
            items: value.into_iter().map(TicketResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketResponse {
    pub ticket_id: TicketId,
    pub booking_id: BookingId,
    pub facility_id: FacilityId,
    pub user_name: String,
    pub user_email: String,
    pub issue_details: String,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
}

impl From<MaintenanceTicket> for TicketResponse {
    fn from(value: MaintenanceTicket) -> Self {
        let MaintenanceTicket {
            ticket_id,
            booking_id,
            facility_id,
            user_name,
            user_email,
            issue_details,
            status,
            created_at,
        } = value;
        Self {
            ticket_id,
            booking_id,
            facility_id,
            user_name,
            user_email,
            issue_details,
            status,
            created_at,
        }
    }
}
