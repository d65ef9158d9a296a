//! Application configuration parsed from environment variables.
//!
//! Describes how the hosting framework wires the cookie-session
//! authentication collaborator: backend origin, session endpoints,
//! redirect routes for each auth-state transition, route guarding, and
//! the UI theme. Loaded once at startup and immutable afterwards.
//!
//! DESIGN
//! ======
//! Every recognized option is a named, typed field so an unknown auth
//! mode or theme is rejected at load time instead of silently ignored.
//! The backend origin is the only value resolved from the environment;
//! everything else defaults to the values the backend contract expects.

use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost";

/// Overrides the backend origin when set and non-empty.
pub const API_BASE_URL_ENV: &str = "TICKETS_API_BASE_URL";
pub const AUTH_MODE_ENV: &str = "TICKETS_AUTH_MODE";
pub const THEME_ENV: &str = "TICKETS_THEME";

/// Configuration load failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),
}

/// Authentication strategy used by the session collaborator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    /// Cookie-based sessions with CSRF priming.
    #[default]
    Cookie,
}

/// Backend paths for each session lifecycle operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionEndpoints {
    pub csrf: String,
    pub login: String,
    pub logout: String,
    pub user: String,
}

impl Default for SessionEndpoints {
    fn default() -> Self {
        Self {
            csrf: "/sanctum/csrf-cookie".to_owned(),
            login: "/auth/session/login".to_owned(),
            logout: "/auth/session/logout".to_owned(),
            user: "/auth/session/me".to_owned(),
        }
    }
}

/// Destination routes for each auth-state transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedirectRoutes {
    /// On forced login, return the user to the originally requested route.
    pub keep_requested_route: bool,
    pub on_login: String,
    pub on_logout: String,
    pub on_auth_only: String,
    pub on_guest_only: String,
}

impl Default for RedirectRoutes {
    fn default() -> Self {
        Self {
            keep_requested_route: true,
            on_login: "/".to_owned(),
            on_logout: "/auth/login".to_owned(),
            on_auth_only: "/auth/login".to_owned(),
            on_guest_only: "/".to_owned(),
        }
    }
}

/// Default route-guard behavior consumed by the routing layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteGuard {
    /// Guard every route with an auth check by default.
    pub enabled: bool,
    /// Let unauthenticated users see "not found" pages.
    pub allow_404_without_auth: bool,
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self { enabled: false, allow_404_without_auth: true }
    }
}

/// UI color theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// CSS class applied to the `<html>` element.
    pub fn as_class(self) -> &'static str {
        match self {
            Self::Light => "theme-light",
            Self::Dark => "theme-dark",
        }
    }
}

/// Process-wide application configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub mode: AuthMode,
    /// Backend origin for all authenticated requests, no trailing slash.
    pub base_url: String,
    pub endpoints: SessionEndpoints,
    pub redirect: RedirectRoutes,
    pub route_guard: RouteGuard,
    pub theme: Theme,
}

impl AppConfig {
    /// Build typed application config from environment variables.
    ///
    /// Optional:
    /// - `TICKETS_API_BASE_URL`: backend origin; default `http://localhost`.
    ///   An empty value falls back to the default.
    /// - `TICKETS_AUTH_MODE`: `cookie` (default)
    /// - `TICKETS_THEME`: `light` (default) or `dark`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ConfigParse` for an unknown auth mode or theme.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mode = parse_mode(std::env::var(AUTH_MODE_ENV).ok().as_deref())?;
        let theme = parse_theme(std::env::var(THEME_ENV).ok().as_deref())?;
        let base_url = resolve_base_url(std::env::var(API_BASE_URL_ENV).ok().as_deref());

        Ok(Self {
            mode,
            base_url,
            endpoints: SessionEndpoints::default(),
            redirect: RedirectRoutes::default(),
            route_guard: RouteGuard::default(),
            theme,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: AuthMode::Cookie,
            base_url: DEFAULT_API_BASE_URL.to_owned(),
            endpoints: SessionEndpoints::default(),
            redirect: RedirectRoutes::default(),
            route_guard: RouteGuard::default(),
            theme: Theme::Light,
        }
    }
}

fn resolve_base_url(raw: Option<&str>) -> String {
    match raw {
        Some(value) if !value.is_empty() => value.trim_end_matches('/').to_owned(),
        _ => DEFAULT_API_BASE_URL.to_owned(),
    }
}

fn parse_mode(raw: Option<&str>) -> Result<AuthMode, ConfigError> {
    match raw.unwrap_or("cookie") {
        "cookie" => Ok(AuthMode::Cookie),
        other => Err(ConfigError::ConfigParse(format!("unknown auth mode '{other}' (expected 'cookie')"))),
    }
}

fn parse_theme(raw: Option<&str>) -> Result<Theme, ConfigError> {
    match raw.unwrap_or("light") {
        "light" => Ok(Theme::Light),
        "dark" => Ok(Theme::Dark),
        other => Err(ConfigError::ConfigParse(format!("unknown theme '{other}' (expected 'light' or 'dark')"))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
