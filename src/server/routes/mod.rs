//! API routes for the document Q&A server

pub mod ask;
pub mod rewrite;
pub mod upload;

use axum::{
    extract::DefaultBodyLimit,
    routing::post,
    Router,
};

use crate::server::state::AppState;

/// Build all API routes
pub fn api_routes(max_upload_size: usize) -> Router<AppState> {
    Router::new()
        .route(
            "/upload",
            post(upload::upload_file).layer(DefaultBodyLimit::max(max_upload_size)),
        )
        .route("/ask", post(ask::ask_question))
        .route("/rewrite", post(rewrite::rewrite_answer))
}
