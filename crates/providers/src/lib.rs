//! Hosted LLM provider implementations for Angstrom.
//!
//! All providers implement the `angstrom_core::Provider` trait.
//! [`router::build_from_config`] picks exactly one of them from the
//! `provider` switch in the configuration.

pub mod gemini;
pub mod openai_compat;
pub mod router;

pub use gemini::GeminiProvider;
pub use openai_compat::OpenAiCompatProvider;
pub use router::build_from_config;

use std::time::Duration;

use angstrom_core::ProviderError;
use tracing::warn;

/// Timeout used when a provider is built without an explicit one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Build the HTTP client shared by every call of one provider.
pub(crate) fn http_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|e| {
            warn!(error = %e, "Failed to build HTTP client with timeout, using defaults");
            reqwest::Client::new()
        })
}

/// Map a failed `send()` onto the provider error taxonomy.
pub(crate) fn send_error(e: reqwest::Error) -> ProviderError {
    ProviderError::transport(e.is_timeout(), e.to_string())
}

/// Map a non-success HTTP status onto the provider error taxonomy.
pub(crate) fn status_error(provider: &str, status: u16, body: String) -> ProviderError {
    match status {
        429 => ProviderError::RateLimited {
            retry_after_secs: 5,
        },
        401 | 403 => ProviderError::AuthenticationFailed(format!(
            "{provider} rejected the configured API key"
        )),
        _ => {
            warn!(provider, status, body = %body, "Provider returned error");
            ProviderError::ApiError {
                status_code: status,
                message: body,
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert!(matches!(
            status_error("gemini", 429, String::new()),
            ProviderError::RateLimited { .. }
        ));
        assert!(status_error("gemini", 401, String::new()).is_configuration());
        assert!(status_error("openai", 403, String::new()).is_configuration());
        assert_eq!(
            status_error("gemini", 500, "boom".into()),
            ProviderError::ApiError {
                status_code: 500,
                message: "boom".into()
            }
        );
    }
}
