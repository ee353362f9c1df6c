use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use serde_json::Value;

use super::{Completion, CompletionProvider, CompletionRequest, ProviderError};
use crate::config::UpstreamConfig;

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const API_VERSION: &str = "2023-06-01";

// Client for the Anthropic Messages API
pub struct AnthropicClient {
    endpoint: String,
    api_key: String,
    client: Client,
}

impl AnthropicClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let endpoint = format!("{}/v1/messages", config.base_url.trim_end_matches('/'));
        info!("Using completion endpoint: {}", endpoint);

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            endpoint,
            api_key: config.api_key.clone(),
            client,
        })
    }
}

#[async_trait]
impl CompletionProvider for AnthropicClient {
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<Completion, ProviderError> {
        debug!(
            "Sending {} messages to {} (max_tokens: {})",
            request.messages.len(),
            request.model,
            request.max_tokens
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message: api_error_message(&error_text),
            });
        }

        let completion: Completion = response
            .json()
            .await
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

        if let Some(usage) = &completion.usage {
            info!(
                "Completion finished ({}): {} input / {} output tokens",
                completion.stop_reason.as_deref().unwrap_or("unknown"),
                usage.input_tokens,
                usage.output_tokens
            );
        }
        Ok(completion)
    }
}

/// Pulls `error.message` out of an API error body, falling back to the raw text.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")?
                .get("message")?
                .as_str()
                .map(str::to_owned)
        })
        .unwrap_or_else(|| body.to_string())
}
