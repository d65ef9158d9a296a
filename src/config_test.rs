use std::sync::{Mutex, PoisonError};

use super::*;

/// Serializes tests that touch process-wide environment variables.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn with_env(vars: &[(&str, &str)], f: impl FnOnce()) {
    let _guard = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    unsafe {
        std::env::remove_var(API_BASE_URL_ENV);
        std::env::remove_var(AUTH_MODE_ENV);
        std::env::remove_var(THEME_ENV);
        for (key, value) in vars {
            std::env::set_var(key, value);
        }
    }
    f();
    unsafe {
        for (key, _) in vars {
            std::env::remove_var(key);
        }
    }
}

// =============================================================
// Base URL resolution
// =============================================================

#[test]
fn from_env_base_url_defaults_to_localhost() {
    with_env(&[], || {
        let cfg = AppConfig::from_env().unwrap();
        assert_eq!(cfg.base_url, "http://localhost");
    });
}

#[test]
fn from_env_base_url_respects_override() {
    with_env(&[(API_BASE_URL_ENV, "https://api.example.com")], || {
        let cfg = AppConfig::from_env().unwrap();
        assert_eq!(cfg.base_url, "https://api.example.com");
    });
}

#[test]
fn from_env_empty_base_url_falls_back_to_default() {
    with_env(&[(API_BASE_URL_ENV, "")], || {
        let cfg = AppConfig::from_env().unwrap();
        assert_eq!(cfg.base_url, DEFAULT_API_BASE_URL);
    });
}

#[test]
fn from_env_base_url_trims_trailing_slash() {
    with_env(&[(API_BASE_URL_ENV, "https://api.example.com/")], || {
        let cfg = AppConfig::from_env().unwrap();
        assert_eq!(cfg.base_url, "https://api.example.com");
    });
}

// =============================================================
// Mode and theme parsing
// =============================================================

#[test]
fn from_env_defaults_to_cookie_mode_and_light_theme() {
    with_env(&[], || {
        let cfg = AppConfig::from_env().unwrap();
        assert_eq!(cfg.mode, AuthMode::Cookie);
        assert_eq!(cfg.theme, Theme::Light);
    });
}

#[test]
fn from_env_parses_dark_theme() {
    with_env(&[(THEME_ENV, "dark")], || {
        let cfg = AppConfig::from_env().unwrap();
        assert_eq!(cfg.theme, Theme::Dark);
    });
}

#[test]
fn from_env_unknown_mode_errors() {
    with_env(&[(AUTH_MODE_ENV, "token")], || {
        let err = AppConfig::from_env().unwrap_err().to_string();
        assert!(err.contains("unknown auth mode 'token'"));
    });
}

#[test]
fn from_env_unknown_theme_errors() {
    with_env(&[(THEME_ENV, "solarized")], || {
        let err = AppConfig::from_env().unwrap_err().to_string();
        assert!(err.contains("unknown theme 'solarized'"));
    });
}

// =============================================================
// Static defaults (the backend contract)
// =============================================================

#[test]
fn default_session_endpoints() {
    let endpoints = SessionEndpoints::default();
    assert_eq!(endpoints.csrf, "/sanctum/csrf-cookie");
    assert_eq!(endpoints.login, "/auth/session/login");
    assert_eq!(endpoints.logout, "/auth/session/logout");
    assert_eq!(endpoints.user, "/auth/session/me");
}

#[test]
fn default_redirect_routes() {
    let redirect = RedirectRoutes::default();
    assert!(redirect.keep_requested_route);
    assert_eq!(redirect.on_login, "/");
    assert_eq!(redirect.on_logout, "/auth/login");
    assert_eq!(redirect.on_auth_only, "/auth/login");
    assert_eq!(redirect.on_guest_only, "/");
}

#[test]
fn default_route_guard_is_disabled_and_allows_404() {
    let guard = RouteGuard::default();
    assert!(!guard.enabled);
    assert!(guard.allow_404_without_auth);
}

#[test]
fn default_config_matches_from_env_without_overrides() {
    with_env(&[], || {
        assert_eq!(AppConfig::default(), AppConfig::from_env().unwrap());
    });
}

#[test]
fn theme_classes_are_distinct() {
    assert_ne!(Theme::Light.as_class(), Theme::Dark.as_class());
}
