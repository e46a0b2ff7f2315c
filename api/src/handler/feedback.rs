use crate::model::feedback::{CreateFeedbackRequest, FeedbackResponse};
use axum::{extract::State, http::StatusCode, Json};
use garde::Validate;
use kernel::model::feedback::event::CreateFeedback;
use kernel::model::ticket::event::CreateTicket;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_feedback(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateFeedbackRequest>,
) -> AppResult<(StatusCode, Json<FeedbackResponse>)> {
    req.validate(&())?;

    // the parent booking must resolve before anything is written; facility
    // and contact fields are denormalized from it
    let booking = registry
        .booking_repository()
        .find_by_id(req.booking_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("booking not found".into()))?;

    let issue = req
        .has_issue
        .then_some(req.issue_details.as_ref())
        .flatten();

    let ticket = issue
        .and_then(|details| CreateTicket::from_issue(&booking, &details.description, details.status));

    let issue_details = issue.map(|details| details.description.clone());

    let event = CreateFeedback::new(
        booking.booking_id,
        booking.facility_id,
        booking.user_name.clone(),
        req.rating,
        req.comment,
        req.has_issue,
        issue_details,
    );

    registry
        .feedback_repository()
        .create(event, ticket)
        .await
        .map(|feedback| (StatusCode::CREATED, Json(feedback.into())))
}
