use crate::model::ticket::{event::UpdateTicketStatus, MaintenanceTicket, TicketStatus};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait TicketRepository: Send + Sync {
    // newest first; `None` lists every ticket regardless of status
    async fn find_all(&self, status: Option<TicketStatus>) -> AppResult<Vec<MaintenanceTicket>>;
    async fn update_status(&self, event: UpdateTicketStatus) -> AppResult<()>;
}
