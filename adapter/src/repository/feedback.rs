use crate::database::{model::feedback::FeedbackRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::feedback::{event::CreateFeedback, Feedback};
use kernel::model::id::{FacilityId, FeedbackId, TicketId};
use kernel::model::ticket::event::CreateTicket;
use kernel::repository::feedback::FeedbackRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct FeedbackRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl FeedbackRepository for FeedbackRepositoryImpl {
    async fn create(
        &self,
        event: CreateFeedback,
        ticket: Option<CreateTicket>,
    ) -> AppResult<Feedback> {
        // feedback and its derived ticket land atomically; a failed ticket
        // insert must not leave an orphan feedback row
        let mut tx = self.db.begin().await?;

        let row: FeedbackRow = sqlx::query_as(
            r#"
                INSERT INTO feedback
                (feedback_id, booking_id, facility_id, user_name, rating,
                comment, has_issue, issue_details)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                RETURNING
                feedback_id, booking_id, facility_id, user_name, rating,
                comment, has_issue, issue_details, created_at
                ;
            "#,
        )
        .bind(FeedbackId::new())
        .bind(event.booking_id)
        .bind(event.facility_id)
        .bind(&event.user_name)
        .bind(event.rating)
        .bind(&event.comment)
        .bind(event.has_issue)
        .bind(&event.issue_details)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match &e {
            // the unique key on booking_id makes re-submission explicit
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::UnprocessableEntity(format!(
                    "feedback already submitted for booking {}",
                    event.booking_id
                ))
            }
            _ => AppError::SpecificOperationError(e),
        })?;

        if let Some(ticket) = ticket {
            let res = sqlx::query(
                r#"
                    INSERT INTO tickets
                    (ticket_id, booking_id, facility_id, user_name,
                    user_email, issue_details, status)
                    VALUES ($1, $2, $3, $4, $5, $6, $7)
                    ;
                "#,
            )
            .bind(TicketId::new())
            .bind(ticket.booking_id)
            .bind(ticket.facility_id)
            .bind(&ticket.user_name)
            .bind(&ticket.user_email)
            .bind(&ticket.issue_details)
            .bind(ticket.status.as_str())
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            if res.rows_affected() < 1 {
                return Err(AppError::NoRowsAffectedError(
                    "No ticket record has been created".into(),
                ));
            }
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(row.into())
    }

    async fn find_by_facility_id(
        &self,
        facility_id: FacilityId,
        limit: i64,
    ) -> AppResult<Vec<Feedback>> {
        let rows: Vec<FeedbackRow> = sqlx::query_as(
            r#"
                SELECT
                feedback_id, booking_id, facility_id, user_name, rating,
                comment, has_issue, issue_details, created_at
                FROM feedback
                WHERE facility_id = $1
                ORDER BY created_at DESC
                LIMIT $2
                ;
            "#,
        )
        .bind(facility_id)
        .bind(limit)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Feedback::from).collect())
    }
}
