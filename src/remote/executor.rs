//! Remote method executor
//!
//! Sends one JSON payload to a method URL and hands back the parsed JSON
//! body. One attempt per call; no retry.

use crate::config::HttpConfig;
use crate::errors::{Result, StepError};
use crate::remote::payload::MethodRequest;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

/// Anything that can run a method on a payload
#[async_trait]
pub trait MethodExecutor: Send + Sync {
    /// POST `payload` to `url` and return the JSON response
    async fn execute(&self, url: &str, payload: &MethodRequest) -> Result<Value>;
}

/// Build the shared HTTP client from configuration
pub fn build_client(config: &HttpConfig) -> Result<Client> {
    let mut builder = Client::builder().user_agent(config.user_agent.clone());
    if let Some(timeout) = config.timeout() {
        builder = builder.timeout(timeout);
    }

    builder
        .build()
        .map_err(|e| StepError::ConfigError(format!("Failed to build HTTP client: {}", e)))
}

/// reqwest-backed executor
#[derive(Debug, Clone)]
pub struct HttpExecutor {
    client: Client,
}

impl HttpExecutor {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn from_config(config: &HttpConfig) -> Result<Self> {
        Ok(Self::new(build_client(config)?))
    }
}

#[async_trait]
impl MethodExecutor for HttpExecutor {
    async fn execute(&self, url: &str, payload: &MethodRequest) -> Result<Value> {
        debug!(url, payload = ?payload, "executing method");

        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(|e| StepError::request(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StepError::request(url, format!("HTTP status {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| StepError::request(url, format!("Failed to read response: {}", e)))?;

        serde_json::from_str(&body)
            .map_err(|e| StepError::ParseError(format!("response from {} is not JSON: {}", url, e)))
    }
}
