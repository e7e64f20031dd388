//! Article generator client
//!
//! The generator is an opaque collaborator: it takes a composed prompt and
//! returns structured article content. The trait seam keeps the pipeline
//! testable with a stub; the shipped implementation talks to an
//! OpenAI-compatible chat-completions endpoint with JSON response format.

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::GenerationError;
use crate::generator::article::GeneratedArticle;

/// Default chat model
pub const DEFAULT_MODEL: &str = "gpt-5-mini";

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default end-to-end request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Longest API error body echoed into an error message
const MAX_ERROR_BODY: usize = 300;

/// An opaque structured-article generator.
#[async_trait]
pub trait ArticleGenerator: Send + Sync {
    /// Generate an article from a fully composed prompt.
    async fn generate(&self, prompt: &str) -> Result<GeneratedArticle, GenerationError>;

    /// Model identifier used for generation.
    fn model_name(&self) -> &str;
}

/// Generator client configuration, loaded from the environment.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// API key (env `OPENAI_API_KEY`, required)
    pub api_key: String,
    /// Model name (env `SEOSCRIBE_MODEL`)
    pub model: String,
    /// API base URL (env `SEOSCRIBE_OPENAI_BASE_URL`)
    pub base_url: String,
    /// Request timeout (env `SEOSCRIBE_GENERATION_TIMEOUT_SECS`)
    pub timeout: Duration,
}

impl GeneratorConfig {
    /// Load configuration from environment variables.
    ///
    /// Fails when `OPENAI_API_KEY` is absent; everything else has defaults.
    pub fn from_env() -> Result<Self, GenerationError> {
        let api_key = env::var("OPENAI_API_KEY").map_err(|_| {
            GenerationError::Config("OPENAI_API_KEY environment variable not set".to_string())
        })?;

        let model = env::var("SEOSCRIBE_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base_url =
            env::var("SEOSCRIBE_OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout = match env::var("SEOSCRIBE_GENERATION_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    GenerationError::Config(format!(
                        "SEOSCRIBE_GENERATION_TIMEOUT_SECS is not a number: {raw}"
                    ))
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            api_key,
            model,
            base_url,
            timeout,
        })
    }

    /// Build a config with explicit values (used by tests and embedders).
    pub fn new(api_key: impl Into<String>, model: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Chat-completions client for OpenAI-compatible endpoints.
pub struct OpenAiGenerator {
    client: reqwest::Client,
    config: GeneratorConfig,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: String,
}

impl OpenAiGenerator {
    /// Create a client for the given configuration.
    pub fn new(config: GeneratorConfig) -> Result<Self, GenerationError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl ArticleGenerator for OpenAiGenerator {
    #[instrument(skip_all, fields(model = %self.config.model))]
    async fn generate(&self, prompt: &str) -> Result<GeneratedArticle, GenerationError> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let mut message = response.text().await.unwrap_or_default();
            message.truncate(MAX_ERROR_BODY);
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let payload: ChatResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::MalformedPayload(e.to_string()))?;

        let content = payload
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(GenerationError::MissingContent)?;

        debug!(bytes = content.len(), "received completion content");

        serde_json::from_str(&content)
            .map_err(|e| GenerationError::MalformedPayload(e.to_string()))
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
