use axum::{routing::post, Router};
use registry::AppRegistry;

use crate::handler::feedback::register_feedback;

pub fn build_feedback_routers() -> Router<AppRegistry> {
    let feedback_routers = Router::new().route("/", post(register_feedback));

    Router::new().nest("/feedback", feedback_routers)
}
