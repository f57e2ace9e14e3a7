//! GroqApiAgent - Direct REST API implementation for Groq-hosted models.
//!
//! This agent calls the Groq Chat Completions API (OpenAI-compatible)
//! directly. Configuration priority: ~/.config/ladle/secret.json >
//! environment variables.

use async_trait::async_trait;
use ladle_core::error::{LadleError, Result};
use ladle_core::generator::{RecipeGenerator, RecipeRequest};
use ladle_infrastructure::storage::SecretStorage;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::env;

use crate::prompt::build_prompt;

const DEFAULT_GROQ_MODEL: &str = "openai/gpt-oss-20b";
const BASE_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Sampling parameters are fixed: deterministic reproducibility is
/// explicitly not a goal, but output length is bounded.
const TEMPERATURE: f32 = 0.8;
const MAX_COMPLETION_TOKENS: u32 = 1024;
const TOP_P: f32 = 1.0;

/// Generator implementation that talks to the Groq HTTP API.
#[derive(Clone)]
pub struct GroqApiAgent {
    client: Client,
    api_key: String,
    model: String,
}

impl GroqApiAgent {
    /// Creates a new agent with the provided API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Loads configuration from ~/.config/ladle/secret.json or environment
    /// variables.
    ///
    /// Priority:
    /// 1. ~/.config/ladle/secret.json (`groq` section)
    /// 2. Environment variables (GROQ_API_KEY, GROQ_MODEL_NAME)
    ///
    /// Model name defaults to `openai/gpt-oss-20b` if not specified.
    pub fn try_from_env() -> Result<Self> {
        // Try loading from SecretStorage first
        if let Ok(storage) = SecretStorage::new() {
            if let Ok(secret_config) = storage.load() {
                if let Some(groq_config) = secret_config.groq {
                    let model = groq_config
                        .model_name
                        .unwrap_or_else(|| DEFAULT_GROQ_MODEL.into());
                    return Ok(Self::new(groq_config.api_key, model));
                }
            }
        }

        // Fallback to environment variables
        let api_key = env::var("GROQ_API_KEY").map_err(|_| {
            LadleError::config(
                "GROQ_API_KEY not found in ~/.config/ladle/secret.json or environment variables",
            )
        })?;

        let model = env::var("GROQ_MODEL_NAME").unwrap_or_else(|_| DEFAULT_GROQ_MODEL.into());
        Ok(Self::new(api_key, model))
    }

    /// Overrides the model after construction.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    async fn send_request(&self, body: &ChatCompletionRequest) -> Result<String> {
        let response = self
            .client
            .post(BASE_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|err| LadleError::generation(format!("Groq API request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Groq error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|err| LadleError::generation(format!("Failed to parse Groq response: {err}")))?;

        extract_text_response(parsed)
    }
}

#[async_trait]
impl RecipeGenerator for GroqApiAgent {
    async fn generate(&self, request: &RecipeRequest) -> Result<String> {
        let prompt = build_prompt(request);

        let body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt,
            }],
            temperature: TEMPERATURE,
            max_completion_tokens: MAX_COMPLETION_TOKENS,
            top_p: TOP_P,
        };

        tracing::debug!(model = %self.model, dish = %request.dish, "requesting recipe generation");
        self.send_request(&body).await
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_completion_tokens: u32,
    top_p: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
    #[allow(dead_code)]
    r#type: Option<String>,
    #[allow(dead_code)]
    code: Option<String>,
}

fn extract_text_response(response: ChatCompletionResponse) -> Result<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| LadleError::generation("Groq API returned no content in the response"))
}

fn map_http_error(status: StatusCode, body: String) -> LadleError {
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|wrapper| wrapper.error.message)
        .unwrap_or(body);

    LadleError::generation(format!("Groq API returned {}: {}", status, message))
}
