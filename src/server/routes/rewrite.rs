//! Answer rewriting endpoint

use axum::{extract::State, Json};

use crate::error::{Error, Result};
use crate::server::state::AppState;
use crate::types::{query::RewriteRequest, response::RewriteResponse};

/// POST /rewrite - Restyle an existing answer without re-retrieving sources
pub async fn rewrite_answer(
    State(state): State<AppState>,
    Json(request): Json<RewriteRequest>,
) -> Result<Json<RewriteResponse>> {
    if request.answer.trim().is_empty() || request.style.trim().is_empty() {
        return Err(Error::InvalidRequest(
            "Missing original answer or style request".to_string(),
        ));
    }

    let new_answer = state.llm().rewrite(&request.answer, &request.style).await?;

    Ok(Json(RewriteResponse {
        original_answer: request.answer,
        style_request: request.style,
        new_answer,
    }))
}
