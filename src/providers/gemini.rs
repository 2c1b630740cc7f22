//! Gemini API client for embeddings and answer generation
//!
//! Talks to the Google Generative Language API (`generativelanguage.googleapis.com`)
//! using an API key. One client serves both the embedding model and the
//! generation model.

use async_trait::async_trait;
use std::time::Duration;

use crate::config::{EmbeddingConfig, LlmConfig};
use crate::error::{Error, Result};
use crate::generation::PromptBuilder;
use crate::providers::{EmbeddingProvider, LlmProvider};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini API client
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    embed_model: String,
    generate_model: String,
    temperature: f32,
    max_output_tokens: u32,
}

impl GeminiClient {
    /// Create a new client from configuration
    pub fn new(llm: &LlmConfig, embeddings: &EmbeddingConfig) -> Result<Self> {
        if llm.api_key.is_empty() {
            return Err(Error::Config(
                "GEMINI_API_KEY not set; cannot create Gemini client".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(llm.timeout_secs))
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: llm.base_url.trim_end_matches('/').to_string(),
            api_key: llm.api_key.clone(),
            embed_model: embeddings.model.clone(),
            generate_model: llm.model.clone(),
            temperature: llm.temperature,
            max_output_tokens: llm.max_output_tokens,
        })
    }

    fn model_endpoint(&self, model: &str, method: &str) -> String {
        format!("{}/v1beta/models/{}:{}", self.base_url, model, method)
    }

    async fn generate(&self, prompt: String) -> Result<String> {
        let request = GenerateRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
            },
        };

        let response = self
            .http
            .post(self.model_endpoint(&self.generate_model, "generateContent"))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::llm(format!("Gemini request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::llm(format!(
                "Gemini generation failed ({}): {}",
                status, body
            )));
        }

        let gen_response: GenerateResponse = response
            .json()
            .await
            .map_err(|e| Error::llm(format!("Failed to parse Gemini response: {}", e)))?;

        gen_response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| Error::llm("No text in Gemini response"))
    }
}

#[derive(serde::Serialize)]
struct EmbedRequest {
    content: ContentParts,
}

#[derive(serde::Serialize)]
struct BatchEmbedRequest {
    requests: Vec<BatchEmbedItem>,
}

#[derive(serde::Serialize)]
struct BatchEmbedItem {
    model: String,
    content: ContentParts,
}

#[derive(serde::Serialize)]
struct ContentParts {
    parts: Vec<Part>,
}

#[derive(serde::Serialize)]
struct Part {
    text: String,
}

#[derive(serde::Deserialize)]
struct EmbedResponse {
    embedding: EmbeddingValues,
}

#[derive(serde::Deserialize)]
struct BatchEmbedResponse {
    embeddings: Vec<EmbeddingValues>,
}

#[derive(serde::Deserialize)]
struct EmbeddingValues {
    values: Vec<f32>,
}

#[derive(serde::Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(serde::Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(serde::Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(serde::Deserialize)]
struct GenerateResponse {
    candidates: Vec<Candidate>,
}

#[derive(serde::Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(serde::Deserialize)]
struct ResponseContent {
    parts: Vec<ResponsePart>,
}

#[derive(serde::Deserialize)]
struct ResponsePart {
    text: String,
}

#[async_trait]
impl EmbeddingProvider for GeminiClient {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let request = EmbedRequest {
            content: ContentParts {
                parts: vec![Part {
                    text: text.to_string(),
                }],
            },
        };

        let response = self
            .http
            .post(self.model_endpoint(&self.embed_model, "embedContent"))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::embedding(format!("Gemini embed request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::embedding(format!(
                "Gemini embedding failed ({}): {}",
                status, body
            )));
        }

        let embed_response: EmbedResponse = response
            .json()
            .await
            .map_err(|e| Error::embedding(format!("Failed to parse embed response: {}", e)))?;

        Ok(embed_response.embedding.values)
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let request = BatchEmbedRequest {
            requests: texts
                .iter()
                .map(|text| BatchEmbedItem {
                    model: format!("models/{}", self.embed_model),
                    content: ContentParts {
                        parts: vec![Part { text: text.clone() }],
                    },
                })
                .collect(),
        };

        let response = self
            .http
            .post(self.model_endpoint(&self.embed_model, "batchEmbedContents"))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::embedding(format!("Gemini batch embed failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::embedding(format!(
                "Gemini batch embedding failed ({}): {}",
                status, body
            )));
        }

        let batch_response: BatchEmbedResponse = response
            .json()
            .await
            .map_err(|e| Error::embedding(format!("Failed to parse batch response: {}", e)))?;

        Ok(batch_response
            .embeddings
            .into_iter()
            .map(|e| e.values)
            .collect())
    }

    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.embed_model
    }
}

#[async_trait]
impl LlmProvider for GeminiClient {
    async fn generate_answer(&self, question: &str, context: &str) -> Result<String> {
        self.generate(PromptBuilder::build_answer_prompt(question, context))
            .await
    }

    async fn rewrite(&self, answer: &str, style: &str) -> Result<String> {
        self.generate(PromptBuilder::build_rewrite_prompt(answer, style))
            .await
    }

    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.generate_model
    }
}
