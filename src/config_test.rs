use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("REMOVE_BG_API_KEY");
        std::env::remove_var("REMOVE_BG_ENDPOINT");
        std::env::remove_var("REMOVE_BG_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("REMOVE_BG_CONNECT_TIMEOUT_SECS");
        std::env::remove_var("REMOVE_BG_MAX_ATTEMPTS");
        std::env::remove_var("REMOVE_BG_RETRY_BASE_DELAY_MS");
        std::env::remove_var("REMOVE_BG_RETRY_MAX_DELAY_MS");
        std::env::remove_var("PAYMENT_WECHAT_ID");
        std::env::remove_var("PAYMENT_WECHAT_QR_PATH");
    }
}

#[test]
fn from_env_without_key_is_unconfigured() {
    unsafe { clear_env() };

    let cfg = AppConfig::from_env();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert!(cfg.remove_bg.is_none());
    assert_eq!(cfg.payment, PaymentConfig::default());

    unsafe { clear_env() };
}

#[test]
fn from_env_placeholder_key_is_unconfigured() {
    unsafe {
        clear_env();
        std::env::set_var("REMOVE_BG_API_KEY", API_KEY_PLACEHOLDER);
    }

    assert!(AppConfig::from_env().remove_bg.is_none());

    unsafe { clear_env() };
}

#[test]
fn from_env_blank_key_is_unconfigured() {
    unsafe {
        clear_env();
        std::env::set_var("REMOVE_BG_API_KEY", "   ");
    }

    assert!(AppConfig::from_env().remove_bg.is_none());

    unsafe { clear_env() };
}

#[test]
fn from_env_real_key_uses_defaults() {
    unsafe {
        clear_env();
        std::env::set_var("REMOVE_BG_API_KEY", "secret");
    }

    let remove_bg = AppConfig::from_env().remove_bg.unwrap();
    assert_eq!(remove_bg.api_key, "secret");
    assert_eq!(remove_bg.endpoint, DEFAULT_REMOVE_BG_ENDPOINT);
    assert_eq!(
        remove_bg.timeouts,
        HttpTimeouts {
            request_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    );
    assert_eq!(remove_bg.retry, RetryPolicy::single());

    unsafe { clear_env() };
}

#[test]
fn from_env_parses_overrides() {
    unsafe {
        clear_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("REMOVE_BG_API_KEY", "secret");
        std::env::set_var("REMOVE_BG_ENDPOINT", "https://example.test/removebg");
        std::env::set_var("REMOVE_BG_REQUEST_TIMEOUT_SECS", "5");
        std::env::set_var("REMOVE_BG_MAX_ATTEMPTS", "3");
        std::env::set_var("PAYMENT_WECHAT_ID", "my_wechat");
        std::env::set_var("PAYMENT_WECHAT_QR_PATH", "/wechat-qr.png");
    }

    let cfg = AppConfig::from_env();
    assert_eq!(cfg.port, 8080);
    let remove_bg = cfg.remove_bg.unwrap();
    assert_eq!(remove_bg.endpoint, "https://example.test/removebg");
    assert_eq!(remove_bg.timeouts.request_secs, 5);
    assert_eq!(remove_bg.retry.max_attempts, 3);
    assert_eq!(cfg.payment.wechat_id.as_deref(), Some("my_wechat"));
    assert_eq!(cfg.payment.wechat_qr_path.as_deref(), Some("/wechat-qr.png"));

    unsafe { clear_env() };
}

#[test]
fn max_attempts_is_clamped_to_at_least_one() {
    unsafe {
        clear_env();
        std::env::set_var("REMOVE_BG_API_KEY", "secret");
        std::env::set_var("REMOVE_BG_MAX_ATTEMPTS", "0");
    }

    assert_eq!(AppConfig::from_env().remove_bg.unwrap().retry.max_attempts, 1);

    unsafe { clear_env() };
}
