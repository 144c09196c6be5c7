use crate::domain::errors::CardError;
use crate::interface_adapters::protocol::{ErrorResponse, HealthResponse};
use crate::interface_adapters::state::AppState;
use crate::use_cases::GetCardsUseCase;
use axum::{Json, extract::State, http::StatusCode};
use serde_json::value::RawValue;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, warn};

pub const SOURCE_MISSING_MESSAGE: &str = "filtered_cards.json not found.";
pub const SOURCE_INVALID_MESSAGE: &str = "Invalid JSON format.";
pub const SOURCE_UNREADABLE_MESSAGE: &str = "Failed to read filtered_cards.json.";

// Handler returning the card document verbatim.
pub async fn get_cards(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Box<RawValue>>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = GetCardsUseCase {
        source: state.cards.clone(),
    };

    let cards = use_case
        .execute()
        .await
        .map_err(|err| map_card_error(err, state.cards.location()))?;

    Ok(Json(cards.into_inner()))
}

// Liveness probe; never touches the card source.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

fn map_card_error(err: CardError, location: &Path) -> (StatusCode, Json<ErrorResponse>) {
    let path = location.display();
    match err {
        CardError::SourceMissing => {
            warn!(%path, "card source not found");
            error_response(StatusCode::NOT_FOUND, SOURCE_MISSING_MESSAGE)
        }
        CardError::SourceInvalid(err) => {
            warn!(%path, error = %err, "card source is not valid json");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, SOURCE_INVALID_MESSAGE)
        }
        CardError::SourceUnreadable(err) => {
            error!(%path, error = %err, "failed to read card source");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, SOURCE_UNREADABLE_MESSAGE)
        }
    }
}
