use crate::model::booking::{
    BookingListQuery, BookingResponse, BookingStatusResponse, BookingsResponse,
    CreateBookingRequest, SweepResponse, UpdateBookingStatusRequest,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use garde::Validate;
use kernel::lifecycle;
use kernel::model::booking::event::{CreateBooking, UpdateBookingStatus};
use kernel::model::booking::slot_end_at;
use kernel::model::id::BookingId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_booking(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBookingRequest>,
) -> AppResult<(StatusCode, Json<BookingResponse>)> {
    req.validate(&())?;

    // the end instant is derived exactly once, here; slot text that cannot
    // be parsed leaves it absent and the booking never auto-completes
    let end_at = slot_end_at(req.date, &req.time_slot);

    let event = CreateBooking::new(
        req.user_id,
        req.facility_id,
        req.date,
        req.time_slot,
        end_at,
        req.user_name,
        req.user_email,
    );

    registry
        .booking_repository()
        .create(event)
        .await
        .map(|booking| (StatusCode::CREATED, Json(booking.into())))
}

pub async fn show_booking_list(
    Query(query): Query<BookingListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingsResponse>> {
    query.validate(&())?;

    registry
        .booking_repository()
        .find_by_user_id(&query.user_id)
        .await
        .map(BookingsResponse::from)
        .map(Json)
}

pub async fn show_booking(
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingResponse>> {
    registry
        .booking_repository()
        .find_by_id(booking_id)
        .await
        .and_then(|booking| match booking {
            Some(booking) => Ok(Json(booking.into())),
            None => Err(AppError::EntityNotFound("booking not found".into())),
        })
}

pub async fn update_booking_status(
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateBookingStatusRequest>,
) -> AppResult<Json<BookingStatusResponse>> {
    let booking = registry
        .booking_repository()
        .find_by_id(booking_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("booking not found".into()))?;

    if !booking.status.can_transition_to(req.status) {
        return Err(AppError::UnprocessableEntity(format!(
            "illegal status transition: {} -> {}",
            booking.status, req.status
        )));
    }

    // re-asserting the current status is accepted without a write
    if booking.status != req.status {
        let event = UpdateBookingStatus::new(booking_id, booking.status, req.status);
        registry.booking_repository().update_status(event).await?;
    }

    Ok(Json(BookingStatusResponse {
        booking_id,
        status: req.status,
    }))
}

pub async fn sweep_bookings(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<SweepResponse>> {
    let repo = registry.booking_repository();
    let completed = lifecycle::sweep(repo.as_ref(), Utc::now()).await?;
    Ok(Json(SweepResponse { completed }))
}
