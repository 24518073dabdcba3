//! Typed configuration parsed from environment variables.
//!
//! Everything is read once at startup and passed into components at
//! construction; handlers never consult the environment directly.

pub const DEFAULT_REMOVE_BG_ENDPOINT: &str = "https://api.remove.bg/v1.0/removebg";
/// Scaffold value shipped in `.env.example`; treated as unconfigured.
pub const API_KEY_PLACEHOLDER: &str = "your_api_key_here";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_RETRY_BASE_DELAY_MS: u64 = 250;
pub const DEFAULT_RETRY_MAX_DELAY_MS: u64 = 2_000;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

/// Bounded-retry policy for the upstream call. Defaults to a single attempt;
/// retries (with jittered backoff) are opt-in via `REMOVE_BG_MAX_ATTEMPTS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl RetryPolicy {
    /// One attempt, no retries.
    #[must_use]
    pub fn single() -> Self {
        Self {
            max_attempts: 1,
            base_delay_ms: DEFAULT_RETRY_BASE_DELAY_MS,
            max_delay_ms: DEFAULT_RETRY_MAX_DELAY_MS,
        }
    }
}

/// Upstream remove.bg client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveBgConfig {
    pub api_key: String,
    pub endpoint: String,
    pub timeouts: HttpTimeouts,
    pub retry: RetryPolicy,
}

/// Display-only payment contact values for the frontend modal.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct PaymentConfig {
    pub wechat_id: Option<String>,
    pub wechat_qr_path: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    /// `None` when `REMOVE_BG_API_KEY` is absent or still the placeholder;
    /// the proxy route then fails with a configuration error.
    pub remove_bg: Option<RemoveBgConfig>,
    pub payment: PaymentConfig,
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Recognized:
    /// - `PORT`: bind port, default 3000
    /// - `REMOVE_BG_API_KEY`: upstream credential (placeholder = unconfigured)
    /// - `REMOVE_BG_ENDPOINT`: default remove.bg v1.0 URL
    /// - `REMOVE_BG_REQUEST_TIMEOUT_SECS` / `REMOVE_BG_CONNECT_TIMEOUT_SECS`
    /// - `REMOVE_BG_MAX_ATTEMPTS`: default 1 (no retry)
    /// - `REMOVE_BG_RETRY_BASE_DELAY_MS` / `REMOVE_BG_RETRY_MAX_DELAY_MS`
    /// - `PAYMENT_WECHAT_ID` / `PAYMENT_WECHAT_QR_PATH`: display-only
    #[must_use]
    pub fn from_env() -> Self {
        let port = env_parse("PORT", DEFAULT_PORT);

        let remove_bg = configured_api_key().map(|api_key| RemoveBgConfig {
            api_key,
            endpoint: std::env::var("REMOVE_BG_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_REMOVE_BG_ENDPOINT.to_string()),
            timeouts: HttpTimeouts {
                request_secs: env_parse("REMOVE_BG_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
                connect_secs: env_parse("REMOVE_BG_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
            },
            retry: RetryPolicy {
                max_attempts: env_parse("REMOVE_BG_MAX_ATTEMPTS", RetryPolicy::single().max_attempts)
                    .max(1),
                base_delay_ms: env_parse("REMOVE_BG_RETRY_BASE_DELAY_MS", DEFAULT_RETRY_BASE_DELAY_MS),
                max_delay_ms: env_parse("REMOVE_BG_RETRY_MAX_DELAY_MS", DEFAULT_RETRY_MAX_DELAY_MS),
            },
        });

        let payment = PaymentConfig {
            wechat_id: env_non_empty("PAYMENT_WECHAT_ID"),
            wechat_qr_path: env_non_empty("PAYMENT_WECHAT_QR_PATH"),
        };

        Self { port, remove_bg, payment }
    }
}

/// The credential, unless absent, empty, or still the scaffold placeholder.
fn configured_api_key() -> Option<String> {
    let key = env_non_empty("REMOVE_BG_API_KEY")?;
    if key == API_KEY_PLACEHOLDER {
        return None;
    }
    Some(key)
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
