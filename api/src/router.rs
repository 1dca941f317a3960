use crate::{handler, AppState};
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// Build the router for every resource route.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handler::home))
        .route(
            "/scientists",
            get(handler::list_scientists).post(handler::create_scientist),
        )
        .route(
            "/scientists/{id}",
            get(handler::get_scientist)
                .patch(handler::update_scientist)
                .delete(handler::delete_scientist),
        )
        .route(
            "/planets",
            get(handler::list_planets).post(handler::create_planet),
        )
        .route("/planets/{id}", get(handler::get_planet))
        .route(
            "/missions",
            get(handler::list_missions).post(handler::create_mission),
        )
        .route("/missions/{id}", get(handler::get_mission))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
