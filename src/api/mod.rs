use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Deserialize;
use tracing::instrument;

use crate::{TravelAiError, web::AppState};

/// Inbound relay body, fields other than `prompt` are ignored
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub prompt: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/v1/hotels", post(search_hotels))
}

/// Forward the prompt upstream and answer with the upstream JSON as-is.
#[instrument(skip_all)]
async fn search_hotels(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, TravelAiError> {
    let request: SearchRequest =
        serde_json::from_slice(&body).map_err(|e| TravelAiError::validation(e.to_string()))?;

    let upstream = state.search.search(&request.prompt).await?;

    Ok(([(CONTENT_TYPE, "application/json")], String::from(upstream.get())).into_response())
}
