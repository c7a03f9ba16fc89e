//! Error types for inference calls.
//!
//! Uses `thiserror` for ergonomic error definitions. Other bounded contexts
//! (config, content, dispatch) define their own enums in their crates.

use thiserror::Error;

/// Result type alias for provider operations.
pub type Result<T> = std::result::Result<T, ProviderError>;

/// Everything that can go wrong on one round trip to a hosted model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Rate limited by provider, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),
}

impl ProviderError {
    /// True when the failure is a setup problem (missing or rejected
    /// credential) rather than an outage.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ProviderError::NotConfigured(_) | ProviderError::AuthenticationFailed(_)
        )
    }

    /// Map a `reqwest`-style transport failure description onto a variant.
    pub fn transport(timed_out: bool, detail: impl Into<String>) -> Self {
        if timed_out {
            ProviderError::Timeout(detail.into())
        } else {
            ProviderError::Network(detail.into())
        }
    }
}
