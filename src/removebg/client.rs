//! Remove.bg HTTP client.
//!
//! Thin wrapper over `POST /v1.0/removebg`. Pure helpers (`parse_error_body`,
//! `backoff_cap_ms`) carry the logic so the HTTP edge stays trivial. One
//! upstream call per attempt; the attempt count comes from the configured
//! [`RetryPolicy`] and defaults to a single attempt.

use std::time::Duration;

use rand::Rng;

use super::types::{RemoveBgError, RemovalOutput, UploadedImage};
use super::BackgroundRemover;
use crate::config::{RemoveBgConfig, RetryPolicy};

// =============================================================================
// CLIENT
// =============================================================================

pub struct RemoveBgClient {
    http: reqwest::Client,
    config: RemoveBgConfig,
}

impl RemoveBgClient {
    /// Build the client from a typed config.
    ///
    /// # Errors
    ///
    /// Returns [`RemoveBgError::HttpClientBuild`] if reqwest cannot construct
    /// the underlying client.
    pub fn new(config: RemoveBgConfig) -> Result<Self, RemoveBgError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| RemoveBgError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config })
    }

    /// One upstream attempt: multipart upload, status check, body read.
    async fn attempt(&self, upload: &UploadedImage) -> Result<RemovalOutput, RemoveBgError> {
        // `size=auto` asks the upstream to pick the output resolution; no
        // `bg_color` is sent so the result always carries a transparent alpha.
        let part = reqwest::multipart::Part::bytes(upload.bytes.clone())
            .file_name(upload.file_name.clone())
            .mime_str(&upload.content_type)
            .map_err(|e| RemoveBgError::ApiRequest(e.to_string()))?;
        let form = reqwest::multipart::Form::new()
            .part("image_file", part)
            .text("size", "auto");

        let response = self
            .http
            .post(&self.config.endpoint)
            .header("X-Api-Key", &self.config.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| RemoveBgError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RemoveBgError::Upstream { status, message: parse_error_body(&body, status) });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("image/png")
            .to_owned();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| RemoveBgError::ApiRequest(e.to_string()))?;

        Ok(RemovalOutput { content_type, bytes: bytes.to_vec() })
    }
}

#[async_trait::async_trait]
impl BackgroundRemover for RemoveBgClient {
    async fn remove_background(&self, upload: &UploadedImage) -> Result<RemovalOutput, RemoveBgError> {
        let policy = self.config.retry;
        let mut attempt = 1;
        loop {
            match self.attempt(upload).await {
                Ok(output) => return Ok(output),
                Err(e) if e.retryable() && attempt < policy.max_attempts => {
                    let cap = backoff_cap_ms(policy, attempt);
                    let sleep_ms = rand::rng().random_range(0..=cap);
                    tracing::warn!(error = %e, attempt, sleep_ms, "remove.bg attempt failed, retrying");
                    tokio::time::sleep(Duration::from_millis(sleep_ms)).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

// =============================================================================
// PURE HELPERS
// =============================================================================

#[derive(serde::Deserialize, Default)]
struct UpstreamErrorBody {
    #[serde(default)]
    errors: Vec<UpstreamErrorItem>,
}

#[derive(serde::Deserialize, Default)]
struct UpstreamErrorItem {
    #[serde(default)]
    title: Option<String>,
}

/// Best-effort extraction of the upstream error message.
///
/// The upstream error format is `{"errors":[{"title": ...}]}`; anything that
/// fails to parse falls back to a generic status-coded message.
pub(crate) fn parse_error_body(body: &str, status: u16) -> String {
    serde_json::from_str::<UpstreamErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.errors.into_iter().next())
        .and_then(|item| item.title)
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| format!("Remove.bg API 错误: {status}"))
}

/// Full-jitter backoff cap for the given attempt (1-based), in milliseconds.
pub(crate) fn backoff_cap_ms(policy: RetryPolicy, attempt: u32) -> u64 {
    let shift = attempt.saturating_sub(1).min(16);
    policy
        .base_delay_ms
        .saturating_mul(1 << shift)
        .min(policy.max_delay_ms)
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
