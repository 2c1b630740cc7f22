//! Prompt construction for answer generation and rewriting

mod prompt;

pub use prompt::{PromptBuilder, NO_INFORMATION_ANSWER};
