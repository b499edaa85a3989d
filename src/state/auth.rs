//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `RwSignal<AuthState>` is provided from the app root; route guards and
//! user-aware components read it, and the operations below are the only
//! writers. Every mutation goes through `RwSignal::update`, which is the
//! publish point for observers.
//!
//! ERROR HANDLING
//! ==============
//! Operations never propagate failures to callers. `login` and `register`
//! return a success flag and park the human-readable message in
//! `AuthState::error`; `check_me` and `logout` swallow failures into the
//! logged-out state.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::api::{ApiError, AuthApi};
use crate::net::types::{LoginRequest, RegisterRequest, User};

/// Message shown when a login fails without a server-provided reason.
pub const LOGIN_ERROR_MESSAGE: &str = "Login error";

/// Message shown when a registration fails without a server-provided reason.
pub const REGISTER_ERROR_MESSAGE: &str = "Registration error";

/// Authentication state tracking the current user, request progress, and the
/// most recent failure message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    /// Identity of the current session; `None` means not authenticated.
    pub user: Option<User>,
    /// True while a login or register request is in flight.
    pub loading: bool,
    /// Message from the most recent failed operation; empty means no error.
    pub error: String,
}

/// Account type selected on the registration form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RegistrationRole {
    /// Standard resident account.
    #[default]
    Resident,
    /// Administrative account.
    Admin,
}

impl RegistrationRole {
    /// Server-side role identifier sent in the register request.
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Resident => "ROLE_USER",
            Self::Admin => "ROLE_ADMIN",
        }
    }
}

/// Refresh `user` from the session-identity endpoint.
///
/// Any failure (network or non-2xx) resolves to the logged-out state without
/// touching `error` or `loading`.
pub async fn check_me(auth: RwSignal<AuthState>, api: &dyn AuthApi) {
    match api.fetch_me().await {
        Ok(user) => auth.update(|state| state.user = Some(user)),
        Err(_) => auth.update(|state| state.user = None),
    }
}

/// Establish a session from credentials. Returns whether the login succeeded.
///
/// The login response carries no authorities, so a successful login is
/// followed by an identity fetch and `user` is set from that response.
pub async fn login(
    auth: RwSignal<AuthState>,
    api: &dyn AuthApi,
    username: &str,
    password: &str,
) -> bool {
    auth.update(|state| {
        state.loading = true;
        state.error.clear();
    });

    let request = LoginRequest {
        username: username.to_owned(),
        password: password.to_owned(),
    };
    let succeeded = match api.login(&request).await {
        Ok(()) => {
            check_me(auth, api).await;
            true
        }
        Err(error) => {
            auth.update(|state| state.error = failure_message(&error, LOGIN_ERROR_MESSAGE));
            false
        }
    };

    auth.update(|state| state.loading = false);
    succeeded
}

/// Create an account. Returns whether the registration succeeded.
///
/// Registration does not log the user in; the session is only established by
/// a subsequent [`login`].
pub async fn register(
    auth: RwSignal<AuthState>,
    api: &dyn AuthApi,
    username: &str,
    email: &str,
    password: &str,
    role: RegistrationRole,
) -> bool {
    auth.update(|state| {
        state.loading = true;
        state.error.clear();
    });

    let request = RegisterRequest {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        roles: role.wire_name().to_owned(),
    };
    let succeeded = match api.register(&request).await {
        Ok(()) => true,
        Err(error) => {
            auth.update(|state| state.error = failure_message(&error, REGISTER_ERROR_MESSAGE));
            false
        }
    };

    auth.update(|state| state.loading = false);
    succeeded
}

/// End the current session.
pub async fn logout(auth: RwSignal<AuthState>, api: &dyn AuthApi) {
    // Invalidation result intentionally discarded: the local session ends
    // whether or not the server acknowledged it.
    let _ = api.logout().await;
    auth.update(|state| state.user = None);
}

fn failure_message(error: &ApiError, fallback: &str) -> String {
    error
        .server_message()
        .map_or_else(|| fallback.to_owned(), ToOwned::to_owned)
}
