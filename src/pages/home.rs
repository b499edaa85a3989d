//! Authenticated landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows who is signed in (username plus authority tags, display only) and
//! offers sign-out. Redirects to `/login` once the session check settles
//! without a user.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::SessionChecked;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// One-line identity summary: username, with authority tags when present.
pub(crate) fn identity_line(state: &AuthState) -> String {
    state.user.as_ref().map_or_else(String::new, |user| {
        if user.authorities.is_empty() {
            user.username.clone()
        } else {
            format!("{} ({})", user.username, user.authorities.join(", "))
        }
    })
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let checked = expect_context::<RwSignal<SessionChecked>>();
    let navigate = use_navigate();

    install_unauth_redirect(auth, checked, navigate);

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::state::auth::logout(auth, &crate::net::api::HttpAuthApi).await;
        });
    };

    view! {
        <div class="home-page">
            <header class="home-header">
                <h1>"CivicDesk"</h1>
                <div class="home-header__session">
                    <span class="home-header__identity">
                        {move || identity_line(&auth.get())}
                    </span>
                    <button class="home-header__logout" on:click=on_logout>
                        "Sign out"
                    </button>
                </div>
            </header>
            <main class="home-main">
                <p class="home-main__greeting">
                    {move || {
                        let state = auth.get();
                        state.user.map_or_else(
                            || "Checking session...".to_owned(),
                            |user| format!("Welcome back, {}.", user.username),
                        )
                    }}
                </p>
            </main>
        </div>
    }
}
