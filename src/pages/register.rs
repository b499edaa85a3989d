//! Registration page with the resident/administrator account selector.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::state::auth::{AuthState, RegistrationRole};

/// Map the form's selector value to a registration role. Unknown values fall
/// back to the non-privileged account type.
pub(crate) fn role_from_selection(value: &str) -> RegistrationRole {
    match value {
        "admin" => RegistrationRole::Admin,
        _ => RegistrationRole::Resident,
    }
}

/// Trim identity fields and require all three before submitting.
pub(crate) fn validate_register_input(
    username: &str,
    email: &str,
    password: &str,
) -> Result<(String, String, String), &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Enter username, email, and password.");
    }
    Ok((username.to_owned(), email.to_owned(), password.to_owned()))
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new("resident".to_owned());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get().loading {
            return;
        }
        let (username_value, email_value, password_value) =
            match validate_register_input(&username.get(), &email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        info.set(String::new());
        let role_value = role_from_selection(&role.get());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = crate::net::api::HttpAuthApi;
            let created = crate::state::auth::register(
                auth,
                &api,
                &username_value,
                &email_value,
                &password_value,
                role_value,
            )
            .await;
            if created {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/login");
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (username_value, email_value, password_value, role_value);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"CivicDesk"</h1>
                <p class="login-card__subtitle">"Create an account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <select
                        class="login-input"
                        prop:value=move || role.get()
                        on:change=move |ev| role.set(event_target_value(&ev))
                    >
                        <option value="resident">"Resident"</option>
                        <option value="admin">"Administrator"</option>
                    </select>
                    <button class="login-button" type="submit" disabled=move || auth.get().loading>
                        {move || if auth.get().loading { "Creating..." } else { "Create account" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <Show when=move || !auth.get().error.is_empty()>
                    <p class="login-message login-message--error">{move || auth.get().error}</p>
                </Show>
                <div class="login-divider"></div>
                <a class="login-link" href="/login">"Back to sign in"</a>
            </div>
        </div>
    }
}
