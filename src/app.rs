//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::api;
use crate::pages::{chat::ChatPage, login::LoginPage};
use crate::state::auth::AuthState;
use crate::state::chat::{ChatState, PendingPrompt};
use crate::state::sessions::SessionsState;
use crate::util::token;

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
/// Provides the shared state contexts, restores the signed-in user from the
/// stored token, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState { user: None, loading: true });
    let sessions = RwSignal::new(SessionsState::default());
    let chat = RwSignal::new(ChatState::default());
    let pending = RwSignal::new(None::<PendingPrompt>);

    provide_context(auth);
    provide_context(sessions);
    provide_context(chat);
    provide_context(pending);

    // Restore the session from a stored token, once, on the client.
    Effect::new(move || {
        if token::read().is_none() {
            auth.update(|a| a.loading = false);
            return;
        }
        leptos::task::spawn_local(async move {
            match api::fetch_me().await {
                Ok(user) => auth.update(|a| {
                    a.user = Some(user);
                    a.loading = false;
                }),
                Err(err) => {
                    leptos::logging::warn!("stored token rejected: {err}");
                    token::clear();
                    auth.update(|a| a.loading = false);
                }
            }
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/slidechat.css"/>
        <Title text="SlideChat"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=ChatPage/>
                <Route path=StaticSegment("chat") view=ChatPage/>
                <Route path=(StaticSegment("chat"), ParamSegment("id")) view=ChatPage/>
            </Routes>
        </Router>
    }
}
