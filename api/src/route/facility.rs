use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::facility::{
    show_facility, show_facility_feedback, show_time_slots, show_venue_list,
};

pub fn build_facility_routers() -> Router<AppRegistry> {
    let facility_routers = Router::new()
        .route("/slots", get(show_time_slots))
        .route("/:facility_id", get(show_facility))
        .route("/:facility_id/feedback", get(show_facility_feedback));

    Router::new()
        .route("/venues", get(show_venue_list))
        .nest("/facilities", facility_routers)
}
