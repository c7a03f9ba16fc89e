//! Provider selection: builds the one configured provider.
//!
//! The `provider` switch in [`AppConfig`] is the only place a backend is
//! chosen; everything downstream sees an `Arc<dyn Provider>`.

use std::sync::Arc;
use std::time::Duration;

use angstrom_config::AppConfig;
use angstrom_core::provider::Provider;
use tracing::{info, warn};

use crate::gemini::GeminiProvider;
use crate::openai_compat::OpenAiCompatProvider;

/// Build the configured provider.
///
/// A missing credential is not an error here: the provider is still built
/// and reports `ProviderError::NotConfigured` on each call, which the
/// dispatcher turns into the configuration fallback reply.
pub fn build_from_config(config: &AppConfig) -> Arc<dyn Provider> {
    let api_key = config.api_key.clone().unwrap_or_default();
    let base_url = config
        .api_url
        .clone()
        .unwrap_or_else(|| default_base_url(&config.provider).to_string());
    let timeout = Duration::from_secs(config.request_timeout_secs);

    if !config.has_api_key() {
        warn!(
            provider = %config.provider,
            env = config.credential_env(),
            "No API key configured; chat replies will fall back to the setup notice"
        );
    }

    info!(provider = %config.provider, model = %config.model, base_url = %base_url, "Provider selected");

    match config.provider.as_str() {
        "openai" => Arc::new(
            OpenAiCompatProvider::new("openai", base_url, api_key).with_timeout(timeout),
        ),
        _ => Arc::new(
            GeminiProvider::new(api_key)
                .with_base_url(base_url)
                .with_timeout(timeout),
        ),
    }
}

/// Get the default base URL for the supported providers.
fn default_base_url(provider_name: &str) -> &'static str {
    match provider_name {
        "openai" => crate::openai_compat::OPENAI_BASE_URL,
        _ => crate::gemini::DEFAULT_BASE_URL,
    }
}
