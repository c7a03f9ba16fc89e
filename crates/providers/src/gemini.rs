//! Google Gemini provider (`generateContent`).
//!
//! The instruction is injected as a priming exchange ahead of the history:
//! a `user` turn carrying the instruction, then a `model` turn
//! acknowledging it. `assistant` turns map to `model`, everything else to
//! `user`, so the only text outside the visitor's turns is the instruction.
//!
//! Authentication uses the `x-goog-api-key` header, keeping the key out of
//! request URLs and therefore out of trace logs.

use std::time::Duration;

use angstrom_core::error::ProviderError;
use angstrom_core::message::{Message, Role};
use angstrom_core::provider::*;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{http_client, send_error, status_error, DEFAULT_TIMEOUT};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const API_VERSION: &str = "v1";

/// Model turn that closes the priming exchange.
pub const PRIMING_ACK: &str = "Understood. I will follow these instructions.";

/// Gemini `generateContent` provider.
pub struct GeminiProvider {
    name: String,
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl GeminiProvider {
    /// Create a new Gemini provider.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            name: "gemini".into(),
            base_url: DEFAULT_BASE_URL.into(),
            api_key: api_key.into(),
            client: http_client(DEFAULT_TIMEOUT),
        }
    }

    /// Create with a custom base URL (e.g., for testing or proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Bound every round trip by `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = http_client(timeout);
        self
    }

    /// Build the `contents` array: priming exchange, then the history.
    fn to_contents(instruction: &str, messages: &[Message]) -> Vec<Content> {
        let mut contents = Vec::with_capacity(messages.len() + 2);
        contents.push(Content::text("user", instruction));
        contents.push(Content::text("model", PRIMING_ACK));

        for msg in messages {
            let role = match msg.role {
                Role::Assistant => "model",
                Role::User | Role::System => "user",
            };
            contents.push(Content::text(role, &msg.content));
        }

        contents
    }

    /// First candidate's first text part, or empty when the structure is absent.
    fn extract_text(resp: &GenerateResponse) -> String {
        resp.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .and_then(|p| p.text.clone())
            .unwrap_or_default()
    }

    fn ensure_configured(&self) -> Result<(), ProviderError> {
        if self.api_key.trim().is_empty() {
            return Err(ProviderError::NotConfigured(
                "GEMINI_API_KEY is not configured".into(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl Provider for GeminiProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(
        &self,
        request: ProviderRequest,
    ) -> std::result::Result<ProviderResponse, ProviderError> {
        self.ensure_configured()?;

        let url = format!(
            "{}/{}/models/{}:generateContent",
            self.base_url, API_VERSION, request.model
        );

        let body = GenerateRequest {
            contents: Self::to_contents(&request.instruction, &request.messages),
            generation_config: GenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_tokens,
            },
        };

        debug!(
            provider = "gemini",
            model = %request.model,
            turns = request.messages.len(),
            "Sending generateContent request"
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(send_error)?;

        let status = response.status().as_u16();

        if !response.status().is_success() {
            let error_body = response.text().await.unwrap_or_default();
            // Gemini reports a bad key as 400 INVALID_ARGUMENT rather than 401.
            if status == 400 && error_body.contains("API_KEY_INVALID") {
                return Err(ProviderError::AuthenticationFailed(
                    "gemini rejected the configured API key".into(),
                ));
            }
            return Err(status_error("gemini", status, error_body));
        }

        let api_resp: GenerateResponse =
            response.json().await.map_err(|e| ProviderError::ApiError {
                status_code: 200,
                message: format!("Failed to parse Gemini response: {e}"),
            })?;

        let usage = api_resp.usage_metadata.as_ref().map(|u| Usage {
            prompt_tokens: u.prompt_token_count,
            completion_tokens: u.candidates_token_count,
            total_tokens: u.total_token_count,
        });

        Ok(ProviderResponse {
            text: Self::extract_text(&api_resp),
            model: api_resp.model_version.clone().unwrap_or(request.model),
            usage,
        })
    }

    async fn health_check(&self) -> std::result::Result<bool, ProviderError> {
        self.ensure_configured()?;

        let url = format!("{}/{}/models", self.base_url, API_VERSION);
        let response = self
            .client
            .get(&url)
            .header("x-goog-api-key", &self.api_key)
            .send()
            .await
            .map_err(send_error)?;

        Ok(response.status().is_success())
    }
}

// --- Gemini API types ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    role: String,
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    fn text(role: &str, text: &str) -> Self {
        Self {
            role: role.into(),
            parts: vec![Part {
                text: Some(text.into()),
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    usage_metadata: Option<UsageMetadata>,
    #[serde(default)]
    model_version: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
    #[serde(default)]
    total_token_count: u32,
}
