use crate::model::facility::{
    FacilityDetailResponse, TimeSlotResponse, TimeSlotsResponse, VenuesResponse,
};
use crate::model::feedback::FeedbackListResponse;
use axum::{
    extract::{Path, State},
    Json,
};
use kernel::model::facility::TIME_SLOTS;
use kernel::model::id::FacilityId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

// feedback page size on the facility detail view
const FACILITY_FEEDBACK_LIMIT: i64 = 20;

pub async fn show_venue_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<VenuesResponse>> {
    registry
        .facility_repository()
        .find_all_venues()
        .await
        .map(VenuesResponse::from)
        .map(Json)
}

pub async fn show_facility(
    Path(facility_id): Path<FacilityId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<FacilityDetailResponse>> {
    registry
        .facility_repository()
        .find_facility_by_id(facility_id)
        .await
        .and_then(|facility| match facility {
            Some(facility) => Ok(Json(facility.into())),
            None => Err(AppError::EntityNotFound("facility not found".into())),
        })
}

pub async fn show_facility_feedback(
    Path(facility_id): Path<FacilityId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<FeedbackListResponse>> {
    registry
        .feedback_repository()
        .find_by_facility_id(facility_id, FACILITY_FEEDBACK_LIMIT)
        .await
        .map(FeedbackListResponse::from)
        .map(Json)
}

pub async fn show_time_slots() -> Json<TimeSlotsResponse> {
    let items = TIME_SLOTS
        .iter()
        .enumerate()
        .map(|(i, time)| TimeSlotResponse {
            id: format!("slot-{i}"),
            time: (*time).to_string(),
            available: true,
        })
        .collect();
    Json(TimeSlotsResponse { items })
}
