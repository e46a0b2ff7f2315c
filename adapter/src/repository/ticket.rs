use crate::database::{model::ticket::TicketRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::ticket::{event::UpdateTicketStatus, MaintenanceTicket, TicketStatus};
use kernel::repository::ticket::TicketRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct TicketRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl TicketRepository for TicketRepositoryImpl {
    async fn find_all(&self, status: Option<TicketStatus>) -> AppResult<Vec<MaintenanceTicket>> {
        // both branches walk the (status, created_at) index
        let rows: Vec<TicketRow> = match status {
            Some(status) => {
                sqlx::query_as(
                    r#"
                        SELECT
                        ticket_id, booking_id, facility_id, user_name,
                        user_email, issue_details, status, created_at
                        FROM tickets
                        WHERE status = $1
                        ORDER BY created_at DESC
                        ;
                    "#,
                )
                .bind(status.as_str())
                .fetch_all(self.db.inner_ref())
                .await
            }
            None => {
                sqlx::query_as(
                    r#"
                        SELECT
                        ticket_id, booking_id, facility_id, user_name,
                        user_email, issue_details, status, created_at
                        FROM tickets
                        ORDER BY created_at DESC
                        ;
                    "#,
                )
                .fetch_all(self.db.inner_ref())
                .await
            }
        }
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(MaintenanceTicket::try_from).collect()
    }

    async fn update_status(&self, event: UpdateTicketStatus) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE tickets
                SET status = $1
                WHERE ticket_id = $2
                ;
            "#,
        )
        .bind(event.status.as_str())
        .bind(event.ticket_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(
                "specified ticket not found".into(),
            ));
        }

        Ok(())
    }
}
