//! HTTP front end: the lookup form and the rendered report page.

mod handlers;
mod pages;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::openai::OpenAiClient;
use crate::search::GoogleSearchClient;

/// Per-process state shared by all requests. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub search: GoogleSearchClient,
    pub completion: OpenAiClient,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/get_info", post(handlers::get_info))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
