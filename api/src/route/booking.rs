use axum::{
    routing::{get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::booking::{
    register_booking, show_booking, show_booking_list, sweep_bookings, update_booking_status,
};

pub fn build_booking_routers() -> Router<AppRegistry> {
    let booking_routers = Router::new()
        .route("/", post(register_booking).get(show_booking_list))
        .route("/sweep", post(sweep_bookings))
        .route("/:booking_id", get(show_booking))
        .route("/:booking_id/status", put(update_booking_status));

    Router::new().nest("/bookings", booking_routers)
}
