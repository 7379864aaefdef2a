//! Auth endpoint client.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, raced against a
//! `gloo-timers` timeout.
//! Server-side (SSR) and native tests: the HTTP backend reports
//! `AuthError::Unavailable`, which the session store treats like any other
//! remote failure.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode (transport, status, body shape, timeout) maps onto one
//! `AuthError` so the store can apply a single degrade-or-propagate policy.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{LoginPayload, LoginReply, User};
use crate::config::AuthConfig;

const UNEXPECTED_RESPONSE: &str = "Unexpected server response";
const LOGIN_FAILED: &str = "Login failed";

/// Failure talking to the remote auth endpoint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-2xx status. Displays the body text,
    /// or "Login failed" when the body is blank.
    #[error("{}", status_message(.body))]
    Status { status: u16, body: String },

    /// The body was not a recognised login reply.
    #[error("{0}")]
    Malformed(String),

    /// No reply within the configured timeout.
    #[error("login request timed out after {0} ms")]
    Timeout(u32),

    /// HTTP is not available in this environment (SSR, native tests).
    #[error("auth endpoint not available")]
    Unavailable,
}

/// Remote authentication collaborator used by the session store.
#[allow(async_fn_in_trait)]
pub trait AuthBackend {
    /// Exchange credentials for a login reply.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] for any transport, status, or decode failure.
    async fn login(&self, payload: &LoginPayload) -> Result<LoginReply, AuthError>;
}

/// `POST {endpoint}` with a JSON `{ email, password, role }` body.
#[derive(Debug, Clone)]
pub struct HttpAuthBackend {
    endpoint: String,
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    timeout_ms: u32,
}

impl HttpAuthBackend {
    pub fn new(endpoint: impl Into<String>, timeout_ms: u32) -> Self {
        Self { endpoint: endpoint.into(), timeout_ms }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.login_endpoint.clone(), config.login_timeout_ms)
    }
}

impl AuthBackend for HttpAuthBackend {
    async fn login(&self, payload: &LoginPayload) -> Result<LoginReply, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            use futures::future::{Either, select};

            let request = gloo_net::http::Request::post(&self.endpoint)
                .json(payload)
                .map_err(|e| AuthError::Network(e.to_string()))?;
            let send = Box::pin(request.send());
            let timeout = Box::pin(gloo_timers::future::TimeoutFuture::new(self.timeout_ms));

            let resp = match select(send, timeout).await {
                Either::Left((result, _)) => result.map_err(|e| AuthError::Network(e.to_string()))?,
                Either::Right(((), _)) => return Err(AuthError::Timeout(self.timeout_ms)),
            };
            if !resp.ok() {
                let body = resp.text().await.unwrap_or_default();
                return Err(AuthError::Status { status: resp.status(), body });
            }
            let value: serde_json::Value = resp
                .json()
                .await
                .map_err(|_| AuthError::Malformed(UNEXPECTED_RESPONSE.to_owned()))?;
            parse_login_reply(value)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            Err(AuthError::Unavailable)
        }
    }
}

/// Decode a login response body.
///
/// A non-empty `token` with a decodable `user` wins; otherwise a non-empty
/// `route` yields [`LoginReply::Route`]; anything else is malformed.
///
/// # Errors
///
/// Returns [`AuthError::Malformed`] when neither shape is present.
pub fn parse_login_reply(value: serde_json::Value) -> Result<LoginReply, AuthError> {
    let token = value.get("token").and_then(serde_json::Value::as_str).filter(|t| !t.is_empty());
    let user = value
        .get("user")
        .cloned()
        .and_then(|u| serde_json::from_value::<User>(u).ok());
    if let (Some(token), Some(user)) = (token, user) {
        return Ok(LoginReply::Session { token: token.to_owned(), user });
    }

    if let Some(route) = value.get("route").and_then(serde_json::Value::as_str).filter(|r| !r.is_empty()) {
        return Ok(LoginReply::Route { route: route.to_owned() });
    }

    Err(AuthError::Malformed(UNEXPECTED_RESPONSE.to_owned()))
}

fn status_message(body: &str) -> &str {
    let body = body.trim();
    if body.is_empty() { LOGIN_FAILED } else { body }
}
