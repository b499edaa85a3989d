//! REST transport for the auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with cookies
//! included on every request.
//! Server-side (SSR): stubs returning transport errors since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses into [`ApiError`]: `Transport` for network-level
//! problems, `Rejected` for non-2xx responses. A rejected response may carry
//! a `{ "error": string }` body; that message is preserved verbatim for the
//! store to surface.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{LoginRequest, RegisterRequest, User};
#[cfg(feature = "hydrate")]
use super::types::ErrorBody;

/// Errors produced by auth endpoint calls.
#[derive(Clone, Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network failure, bad build).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("request rejected: status {status}")]
    Rejected {
        status: u16,
        /// Server-provided message from the response body, when present.
        message: Option<String>,
    },
}

impl ApiError {
    /// Server-provided error message, if the failure carried one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Transport(_) => None,
            Self::Rejected { message, .. } => message.as_deref(),
        }
    }
}

/// Transport seam for the auth store.
///
/// Production code uses [`HttpAuthApi`]; tests substitute scripted fakes so
/// store behavior can be exercised without a browser.
#[async_trait::async_trait(?Send)]
pub trait AuthApi {
    /// `GET /api/auth/me`: identity of the current cookie session.
    async fn fetch_me(&self) -> Result<User, ApiError>;

    /// `POST /api/auth/login`: establish a session from credentials.
    async fn login(&self, request: &LoginRequest) -> Result<(), ApiError>;

    /// `POST /api/auth/register`: create an account; does not log in.
    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError>;

    /// `POST /api/auth/logout`: invalidate the server-side session.
    async fn logout(&self) -> Result<(), ApiError>;
}

/// `AuthApi` implementation backed by `gloo-net` fetch calls.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAuthApi;

#[cfg(feature = "hydrate")]
async fn rejection(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let message = resp.json::<ErrorBody>().await.ok().and_then(|body| body.error);
    ApiError::Rejected { status, message }
}

#[async_trait::async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn fetch_me(&self) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get("/api/auth/me")
                .credentials(web_sys::RequestCredentials::Include)
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(rejection(resp).await);
            }
            resp.json::<User>()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Transport("not available on server".to_owned()))
        }
    }

    async fn login(&self, request: &LoginRequest) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post("/api/auth/login")
                .credentials(web_sys::RequestCredentials::Include)
                .json(request)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(rejection(resp).await);
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Transport("not available on server".to_owned()))
        }
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post("/api/auth/register")
                .credentials(web_sys::RequestCredentials::Include)
                .json(request)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(rejection(resp).await);
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Transport("not available on server".to_owned()))
        }
    }

    async fn logout(&self) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post("/api/auth/logout")
                .credentials(web_sys::RequestCredentials::Include)
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(rejection(resp).await);
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Transport("not available on server".to_owned()))
        }
    }
}
