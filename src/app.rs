//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{home::HomePage, login::LoginPage, register::RegisterPage};
use crate::state::auth::AuthState;

/// Set once the initial session check has settled. Gates the
/// unauthenticated redirect so an existing cookie session can be restored
/// before route guards engage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionChecked(pub bool);

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared auth state context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let session_checked = RwSignal::new(SessionChecked::default());

    provide_context(auth);
    provide_context(session_checked);

    // Restore an existing cookie session before route guards engage.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::state::auth::check_me(auth, &crate::net::api::HttpAuthApi).await;
        session_checked.set(SessionChecked(true));
        log::debug!("initial session check complete");
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/civicdesk.css"/>
        <Title text="CivicDesk"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
