//! Route table. Returns a composable `Router` that can be mounted on
//! any axum server instance.

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the API router. One route per task plus the liveness probe.
pub fn api_router(ctx: ApiContext) -> Router {
    Router::new()
        .route("/", get(endpoints::health::check))
        .route("/incident-analysis", post(endpoints::analysis::analyze))
        .route("/impact-forecast", post(endpoints::forecast::forecast))
        .route("/team-briefing", post(endpoints::briefing::briefing))
        .route("/training-scenario", post(endpoints::scenario::scenario))
        .route("/preparedness-chat", post(endpoints::chat::send))
        .with_state(ctx)
        .layer(TraceLayer::new_for_http())
}
