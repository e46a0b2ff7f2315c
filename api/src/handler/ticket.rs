use crate::model::ticket::{TicketListQuery, TicketsResponse, UpdateTicketStatusRequest};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use kernel::model::id::TicketId;
use kernel::model::ticket::{event::UpdateTicketStatus, TicketStatus};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn show_ticket_list(
    Query(query): Query<TicketListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<TicketsResponse>> {
    let filter = match query.status.as_deref() {
        None | Some("all") => None,
        Some(s) => Some(s.parse::<TicketStatus>().map_err(|_| {
            AppError::UnprocessableEntity(format!("invalid ticket status filter: {s}"))
        })?),
    };

    registry
        .ticket_repository()
        .find_all(filter)
        .await
        .map(TicketsResponse::from)
        .map(Json)
}

pub async fn update_ticket_status(
    Path(ticket_id): Path<TicketId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateTicketStatusRequest>,
) -> AppResult<StatusCode> {
    let event = UpdateTicketStatus::new(ticket_id, req.status);
    registry
        .ticket_repository()
        .update_status(event)
        .await
        .map(|_| StatusCode::OK)
}
