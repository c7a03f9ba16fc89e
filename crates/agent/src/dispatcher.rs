//! The conversation dispatcher.
//!
//! Turns a caller-owned history plus an optional pinned mode into one reply
//! and a definite mode:
//!
//! ```text
//! (history, mode?) ──► mode pinned? ──yes──────────────┐
//!                          │ no                        │
//!                          ▼                           ▼
//!                 classification call ──► mode ──► generation call ──► (reply, mode)
//!                 (latest user turn only)          (full history)
//! ```
//!
//! The dispatcher holds no per-conversation state. Both inference calls run
//! sequentially, one attempt each.

use std::sync::Arc;

use angstrom_config::AppConfig;
use angstrom_core::message::{Message, Role};
use angstrom_core::provider::{Provider, ProviderRequest};
use angstrom_core::{Mode, ProviderError};
use tracing::{debug, error, info};

use crate::instructions;

/// Temperature of the classification call; the answer should be one word.
const CLASSIFICATION_TEMPERATURE: f32 = 0.0;

/// One chat turn to dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchRequest {
    /// Full history, oldest first. Must not be empty.
    pub messages: Vec<Message>,
    /// Mode pinned by the client, or `None` to classify.
    pub mode: Option<Mode>,
}

impl DispatchRequest {
    pub fn new(messages: Vec<Message>, mode: Option<Mode>) -> Self {
        Self { messages, mode }
    }
}

/// A generated reply together with the mode that governed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult {
    pub reply: String,
    pub resolved_mode: Mode,
}

/// Which of the two inference calls failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Classification,
    Generation,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Classification => f.write_str("classification"),
            Stage::Generation => f.write_str("generation"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DispatchError {
    /// Rejected before any inference call.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Inference failed during {stage}: {source}")]
    Inference {
        stage: Stage,
        /// Mode resolved before the failure, if classification got that far.
        resolved: Option<Mode>,
        #[source]
        source: ProviderError,
    },
}

/// The canned text returned in place of a generated reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// The provider credential is missing or was rejected.
    Configuration,
    /// Any other provider failure.
    Unavailable,
}

impl Fallback {
    pub fn for_error(err: &ProviderError) -> Self {
        if err.is_configuration() {
            Fallback::Configuration
        } else {
            Fallback::Unavailable
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Fallback::Configuration => {
                "The AI assistant is not configured yet: the site's language-model API key \
                 is missing or invalid. Please contact info@aatech.sg for assistance."
            }
            Fallback::Unavailable => {
                "Sorry, the AI assistant is temporarily unavailable. Please try again in a \
                 moment, or contact info@aatech.sg for assistance."
            }
        }
    }
}

/// What the HTTP layer hands back to the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    /// Mode for the client to pin; `None` only when classification failed.
    pub mode: Option<Mode>,
    /// Set when `text` is a canned fallback rather than generated.
    pub fallback: Option<Fallback>,
}

/// Resolve a classification call's raw output to a mode.
///
/// Anything mentioning "recruitment" (case-insensitive) is recruitment;
/// everything else, including empty or unexpected output, is customer.
pub fn resolve_classification(output: &str) -> Mode {
    if output.trim().to_lowercase().contains("recruitment") {
        Mode::Recruitment
    } else {
        Mode::Customer
    }
}

/// Routes each conversation turn to the right instruction and provider call.
pub struct Dispatcher {
    provider: Arc<dyn Provider>,
    model: String,
    temperature: f32,
    max_tokens: Option<u32>,
}

impl Dispatcher {
    pub fn new(provider: Arc<dyn Provider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            temperature: 0.7,
            max_tokens: None,
        }
    }

    /// Build with the model and sampling settings from `config`.
    pub fn from_config(provider: Arc<dyn Provider>, config: &AppConfig) -> Self {
        Self::new(provider, &config.model)
            .with_temperature(config.temperature)
            .with_max_tokens(config.max_tokens)
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Classify if needed, then generate.
    ///
    /// Inference failures come back as [`DispatchError::Inference`]; see
    /// [`Dispatcher::respond`] for the fallback-converting variant.
    pub async fn dispatch(
        &self,
        request: DispatchRequest,
    ) -> Result<DispatchResult, DispatchError> {
        if request.messages.is_empty() {
            return Err(DispatchError::InvalidRequest("No messages provided".into()));
        }

        let classified = request.mode.is_none();
        let mode = match request.mode {
            Some(mode) => mode,
            None => self
                .classify(&request.messages)
                .await
                .map_err(|source| DispatchError::Inference {
                    stage: Stage::Classification,
                    resolved: None,
                    source,
                })?,
        };

        let turns = request.messages.len();
        let reply = self
            .generate(instructions::for_mode(mode), request.messages, self.temperature)
            .await
            .map_err(|source| DispatchError::Inference {
                stage: Stage::Generation,
                resolved: Some(mode),
                source,
            })?;

        info!(mode = %mode, classified, turns, "Dispatched chat turn");

        Ok(DispatchResult {
            reply,
            resolved_mode: mode,
        })
    }

    /// Like [`Dispatcher::dispatch`], but inference failures become a canned
    /// fallback reply. Only `InvalidRequest` is returned as an error.
    pub async fn respond(&self, request: DispatchRequest) -> Result<Reply, DispatchError> {
        match self.dispatch(request).await {
            Ok(result) => Ok(Reply {
                text: result.reply,
                mode: Some(result.resolved_mode),
                fallback: None,
            }),
            Err(DispatchError::Inference {
                stage,
                resolved,
                source,
            }) => {
                let fallback = Fallback::for_error(&source);
                error!(
                    provider = %self.provider.name(),
                    %stage,
                    error = %source,
                    ?fallback,
                    "Inference failed, returning fallback reply"
                );
                Ok(Reply {
                    text: fallback.message().to_string(),
                    mode: resolved,
                    fallback: Some(fallback),
                })
            }
            Err(err) => Err(err),
        }
    }

    /// Classify the latest user turn.
    async fn classify(&self, messages: &[Message]) -> Result<Mode, ProviderError> {
        let latest = messages
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .or_else(|| messages.last())
            .map(|m| m.content.clone())
            .unwrap_or_default();

        let output = self
            .generate(
                instructions::CLASSIFICATION,
                vec![Message::user(latest)],
                CLASSIFICATION_TEMPERATURE,
            )
            .await?;

        let mode = resolve_classification(&output);
        debug!(output = %output.trim(), mode = %mode, "Classified conversation");
        Ok(mode)
    }

    /// One round trip to the provider.
    async fn generate(
        &self,
        instruction: &str,
        messages: Vec<Message>,
        temperature: f32,
    ) -> Result<String, ProviderError> {
        let request = ProviderRequest::new(&self.model, instruction, messages)
            .with_temperature(temperature)
            .with_max_tokens(self.max_tokens);
        Ok(self.provider.complete(request).await?.text)
    }
}
