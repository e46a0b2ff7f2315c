use super::{
    booking::build_booking_routers, facility::build_facility_routers,
    feedback::build_feedback_routers, health::build_health_check_routers,
    ticket::build_ticket_routers,
};
use axum::Router;
use registry::AppRegistry;

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_health_check_routers())
        .merge(build_booking_routers())
        .merge(build_feedback_routers())
        .merge(build_facility_routers())
        .merge(build_ticket_routers());
    Router::new().nest("/api/v1", router)
}
