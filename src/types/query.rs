//! Request types for the HTTP API

use serde::Deserialize;

/// Request body for `POST /ask`
#[derive(Debug, Clone, Deserialize)]
pub struct AskRequest {
    /// Natural-language question
    pub question: String,
}

/// Request body for `POST /rewrite`
#[derive(Debug, Clone, Deserialize)]
pub struct RewriteRequest {
    /// The answer text to restyle
    pub answer: String,
    /// Requested style or tone (e.g. "formal", "like a pirate")
    pub style: String,
}
