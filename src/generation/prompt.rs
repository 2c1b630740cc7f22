//! Prompt templates for grounded answers and restyling

use crate::index::SearchResult;

/// Answer returned when retrieval finds nothing to ground on
pub const NO_INFORMATION_ANSWER: &str =
    "No information about this topic was found in the indexed documents.";

/// Prompt builder for the RAG pipeline
pub struct PromptBuilder;

impl PromptBuilder {
    /// Build the context block from retrieved chunks
    pub fn build_context(results: &[SearchResult]) -> String {
        let mut context = String::new();

        for (i, result) in results.iter().enumerate() {
            context.push_str(&format!(
                "[{}] {}, chunk {}\n\n{}\n\n---\n\n",
                i + 1,
                result.chunk.source.filename,
                result.chunk.chunk_index,
                result.chunk.content
            ));
        }

        context
    }

    /// Build the grounded question-answering prompt
    pub fn build_answer_prompt(question: &str, context: &str) -> String {
        format!(
            r#"You are a document-grounded assistant. Answer the question using ONLY the context below.

RULES:
1. Only use information explicitly stated in the context.
2. If the answer is not in the context, say the documents do not contain this information.
3. Do not use external knowledge or make assumptions beyond what is stated.

CONTEXT FROM DOCUMENTS:
{context}

QUESTION: {question}

Answer:"#,
            context = context,
            question = question
        )
    }

    /// Build the answer-rewriting prompt. Pure restyling: same content, new tone.
    pub fn build_rewrite_prompt(answer: &str, style: &str) -> String {
        format!(
            r#"Rewrite the following answer in the requested style. Preserve every factual claim exactly; do not add, remove, or alter any information. Change only the phrasing and tone.

REQUESTED STYLE: {style}

ORIGINAL ANSWER:
{answer}

Rewritten answer:"#,
            style = style,
            answer = answer
        )
    }
}
