use crate::domain::model::ClassifierResponse;
use crate::domain::ports::Classifier;
use crate::utils::error::{Result, SentimentError};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::time::Duration;

pub const RATE_LIMIT_HEADER: &str = "X-RateLimit-Remaining";
pub const UNKNOWN_REMAINING: &str = "Unknown";

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

/// Bearer-authenticated client for a hosted text-classification endpoint.
pub struct SentimentClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl SentimentClient {
    pub fn new(endpoint: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
        }
    }

    pub fn with_timeout(endpoint: String, api_key: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            api_key,
        })
    }
}

#[async_trait]
impl Classifier for SentimentClient {
    async fn classify(&self, text: &str) -> Result<ClassifierResponse> {
        tracing::debug!("Making API request to: {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&InferenceRequest { inputs: text })
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status == StatusCode::TOO_MANY_REQUESTS {
            tracing::debug!("Rate limited by {}", self.endpoint);
            return Err(SentimentError::RateLimited);
        }
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("Unknown status");
            return Err(SentimentError::RequestFailed {
                status: status.as_u16(),
                message: format!("{} for url {}", reason, self.endpoint),
            });
        }

        let remaining_calls = response
            .headers()
            .get(RATE_LIMIT_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
            .unwrap_or_else(|| UNKNOWN_REMAINING.to_string());

        let raw = response.text().await?;
        let body = serde_json::from_str(&raw).map_err(|e| {
            tracing::debug!("Response body is not JSON: {}", e);
            SentimentError::UnexpectedFormat {
                payload: serde_json::Value::String(raw.clone()),
            }
        })?;

        Ok(ClassifierResponse {
            body,
            remaining_calls,
        })
    }
}
