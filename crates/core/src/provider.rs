//! The provider trait: the abstraction over hosted generation backends.
//!
//! A Provider knows how to send one instruction plus a conversation to an
//! LLM and get the generated text back. One request, one response: no
//! caching, retries or streaming live behind this trait.
//!
//! Implementations: Gemini `generateContent`, OpenAI-compatible chat
//! completions.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ProviderError;
use crate::message::Message;

/// Everything one generation round trip needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderRequest {
    /// The model to use (e.g., "gemini-2.5-flash", "gpt-4o-mini")
    pub model: String,

    /// Behavioral instruction; takes precedence over every turn in `messages`
    pub instruction: String,

    /// The conversation turns, in order
    pub messages: Vec<Message>,

    /// Temperature (0.0 = deterministic, 1.0 = creative)
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens to generate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

fn default_temperature() -> f32 {
    0.7
}

impl ProviderRequest {
    pub fn new(
        model: impl Into<String>,
        instruction: impl Into<String>,
        messages: Vec<Message>,
    ) -> Self {
        Self {
            model: model.into(),
            instruction: instruction.into(),
            messages,
            temperature: default_temperature(),
            max_tokens: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// A complete response from a provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderResponse {
    /// The generated text; empty when the provider returned no candidate
    pub text: String,

    /// Which model actually responded (may differ from requested)
    pub model: String,

    /// Token usage statistics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

/// Token usage information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// The core Provider trait.
///
/// Every hosted backend implements this trait. The dispatcher calls
/// `complete()` without knowing which provider is configured.
///
/// Implementations must fail with [`ProviderError::NotConfigured`] when
/// their credential or endpoint is absent, so callers can tell a setup
/// problem apart from an outage.
#[async_trait]
pub trait Provider: Send + Sync {
    /// A human-readable name for this provider (e.g., "gemini", "openai").
    fn name(&self) -> &str;

    /// Send a request and get a complete response.
    async fn complete(
        &self,
        request: ProviderRequest,
    ) -> std::result::Result<ProviderResponse, ProviderError>;

    /// Can we reach the provider?
    async fn health_check(&self) -> std::result::Result<bool, ProviderError> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoProvider;

    #[async_trait]
    impl Provider for EchoProvider {
        fn name(&self) -> &str {
            "echo"
        }

        async fn complete(
            &self,
            request: ProviderRequest,
        ) -> std::result::Result<ProviderResponse, ProviderError> {
            Ok(ProviderResponse {
                text: request
                    .messages
                    .last()
                    .map(|m| m.content.clone())
                    .unwrap_or_default(),
                model: request.model,
                usage: None,
            })
        }
    }

    #[test]
    fn provider_request_defaults() {
        let req = ProviderRequest::new("gemini-2.5-flash", "Be brief.", vec![]);
        assert!((req.temperature - 0.7).abs() < f32::EPSILON);
        assert!(req.max_tokens.is_none());
    }

    #[test]
    fn builder_overrides() {
        let req = ProviderRequest::new("m", "i", vec![Message::user("hi")])
            .with_temperature(0.0)
            .with_max_tokens(Some(256));
        assert_eq!(req.temperature, 0.0);
        assert_eq!(req.max_tokens, Some(256));
    }

    #[tokio::test]
    async fn default_health_check_is_ok() {
        let provider = EchoProvider;
        assert_eq!(provider.health_check().await, Ok(true));

        let resp = provider
            .complete(ProviderRequest::new("m", "i", vec![Message::user("ping")]))
            .await
            .unwrap();
        assert_eq!(resp.text, "ping");
    }
}
