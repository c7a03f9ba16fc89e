//! Shared test helpers for dispatcher tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use angstrom_core::error::ProviderError;
use angstrom_core::provider::{Provider, ProviderRequest, ProviderResponse};

/// A mock provider that answers from a script and records every request.
///
/// Each call to `complete` pops the next scripted outcome. Panics if more
/// calls are made than outcomes provided.
pub struct RecordingProvider {
    script: Mutex<VecDeque<Result<String, ProviderError>>>,
    requests: Mutex<Vec<ProviderRequest>>,
}

impl RecordingProvider {
    pub fn new(script: Vec<Result<String, ProviderError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A provider that only ever succeeds, with these texts in order.
    pub fn replies(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|t| Ok(t.to_string())).collect())
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<ProviderRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Provider for RecordingProvider {
    fn name(&self) -> &str {
        "recording_mock"
    }

    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, ProviderError> {
        let model = request.model.clone();
        let call = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(request);
            requests.len()
        };

        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(outcome) => outcome.map(|text| ProviderResponse {
                text,
                model,
                usage: None,
            }),
            None => panic!("RecordingProvider: no scripted outcome for call #{call}"),
        }
    }
}
