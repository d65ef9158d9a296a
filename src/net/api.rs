//! REST API helpers for the ticket backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` with cookies
//! included, since the backend uses cookie sessions. Server-side (SSR):
//! stubs returning `None`/error, since the session cookie only exists in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth and
//! ticket fetch failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::config::AppConfig;
use crate::net::types::{LoginCredentials, SessionUser, TicketPage};
use crate::state::filters::TicketFilters;

/// Build the query pairs for a ticket list request.
///
/// `status` and `priority` are omitted when unset and `search` when
/// empty; `page` is always sent. Values go out exactly as stored.
pub fn ticket_query(filters: &TicketFilters) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    if let Some(status) = filters.status() {
        pairs.push(("status", status.to_owned()));
    }
    if let Some(priority) = filters.priority() {
        pairs.push(("priority", priority.to_owned()));
    }
    if !filters.search().is_empty() {
        pairs.push(("search", filters.search().to_owned()));
    }
    pairs.push(("page", filters.page().to_string()));
    pairs
}

/// Prime the CSRF cookie before a login attempt.
pub async fn prime_csrf(config: &AppConfig) {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}{}", config.base_url, config.endpoints.csrf);
        let _ = gloo_net::http::Request::get(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
    }
}

/// Open a session by posting credentials to the login endpoint.
///
/// # Errors
///
/// Returns an error string if the request fails or the backend rejects
/// the credentials.
pub async fn login(config: &AppConfig, credentials: &LoginCredentials) -> Result<SessionUser, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}{}", config.base_url, config.endpoints.login);
        let resp = gloo_net::http::Request::post(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .json(credentials)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("login failed: {}", resp.status()));
        }
        resp.json::<SessionUser>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, credentials);
        Err("not available on server".to_owned())
    }
}

/// Close the current session via the logout endpoint.
pub async fn logout(config: &AppConfig) {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}{}", config.base_url, config.endpoints.logout);
        if let Err(err) = gloo_net::http::Request::post(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
        {
            log::warn!("logout request failed: {err}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
    }
}

/// Fetch the currently authenticated user from the session user endpoint.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user(config: &AppConfig) -> Option<SessionUser> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}{}", config.base_url, config.endpoints.user);
        let resp = gloo_net::http::Request::get(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<SessionUser>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        None
    }
}

/// Fetch one page of tickets matching the current filters.
/// Returns `None` on any failure or on the server.
pub async fn fetch_tickets(config: &AppConfig, filters: &TicketFilters) -> Option<TicketPage> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/api/tickets", config.base_url);
        let pairs = ticket_query(filters);
        let resp = gloo_net::http::Request::get(&url)
            .query(pairs.iter().map(|(key, value)| (*key, value.as_str())))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            log::warn!("ticket fetch failed: {}", resp.status());
            return None;
        }
        resp.json::<TicketPage>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, filters);
        None
    }
}
