use crate::domain::ports::CardSource;
use std::sync::Arc;

// Shared application state for the HTTP handlers. Immutable after startup.
pub struct AppState {
    pub cards: Arc<dyn CardSource>,
}
