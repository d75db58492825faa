use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::shared::app_state::AppState;
use crate::system;

/// All application routes
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // A001 Team
        .route(
            "/api/teams",
            get(handlers::a001_team::list_all).post(handlers::a001_team::create),
        )
        .route(
            "/api/teams/:id",
            get(handlers::a001_team::get_by_id).post(handlers::a001_team::update),
        )
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .with_state(state)
}
