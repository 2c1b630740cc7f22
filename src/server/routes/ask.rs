//! Question answering endpoint

use axum::{extract::State, Json};

use crate::error::Result;
use crate::server::state::AppState;
use crate::types::{query::AskRequest, response::AskResponse};

/// POST /ask - Answer a question from the indexed documents
pub async fn ask_question(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>> {
    let response = state
        .query_pipeline()
        .answer(state.index(), &request.question)
        .await?;

    Ok(Json(response))
}
