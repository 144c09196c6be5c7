use crate::interface_adapters::handlers::{get_cards, health};
use crate::interface_adapters::state::AppState;
use axum::{Router, routing::get};
use std::sync::Arc;

// Build the HTTP router for the card API.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/cards", get(get_cards))
        .route("/health", get(health))
        .with_state(state)
}
