use axum::{
    routing::{get, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::ticket::{show_ticket_list, update_ticket_status};

pub fn build_ticket_routers() -> Router<AppRegistry> {
    let ticket_routers = Router::new()
        .route("/", get(show_ticket_list))
        .route("/:ticket_id/status", put(update_ticket_status));

    Router::new().nest("/tickets", ticket_routers)
}
