use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::execution::{ExecutionRequest, ExecutionResponse};

const EXECUTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Boundary to the remote code-execution service. The service compiles and
/// runs submitted code against the stored cases for `problem_id` plus the
/// supplied custom cases, and decides pass/fail per case. Trait seam so
/// tests can substitute a scripted backend.
#[async_trait]
pub trait ExecutionBackend: Send + Sync {
    async fn execute(&self, request: &ExecutionRequest) -> Result<ExecutionResponse, CoreError>;
}

pub struct ExecutionClient {
    http_client: Client,
    base_url: String,
}

impl ExecutionClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ExecutionBackend for ExecutionClient {
    async fn execute(&self, request: &ExecutionRequest) -> Result<ExecutionResponse, CoreError> {
        let url = format!("{}/execute", self.base_url);

        tracing::debug!(
            "Calling execution service: {} mode={}, custom_cases={}",
            url,
            request.mode.as_str(),
            request.custom_cases.len()
        );

        let response = self
            .http_client
            .post(&url)
            .json(request)
            .timeout(EXECUTION_TIMEOUT)
            .send()
            .await
            .map_err(|e| CoreError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(CoreError::ExecutionService { status, message });
        }

        let payload: ExecutionResponse = response
            .json()
            .await
            .map_err(|e| CoreError::Transport(format!("failed to parse execution response: {}", e)))?;

        tracing::info!(
            "Execution service answered: success={}, {}/{} cases",
            payload.success,
            payload.total_passed,
            payload.total_cases
        );

        Ok(payload)
    }
}
