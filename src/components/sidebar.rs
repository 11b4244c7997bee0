//! Session list sidebar with navigation and sign-out.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::chat::ChatState;
use crate::state::sessions::SessionsState;
use crate::util::token;

/// Sidebar listing the signed-in user's sessions, newest first.
///
/// Refetches when the owner changes or when `SessionsState::revision` is
/// bumped after a lazy session creation.
#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let sessions = expect_context::<RwSignal<SessionsState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let navigate = use_navigate();

    let owner = Memo::new(move |_| auth.read().user.as_ref().map(|u| u.email.clone()));
    let revision = Memo::new(move |_| sessions.read().revision);

    Effect::new(move || {
        let Some(owner) = owner.get() else {
            return;
        };
        let _ = revision.get();

        sessions.update(|s| s.loading = true);
        leptos::task::spawn_local(async move {
            match api::fetch_sessions(&owner).await {
                Ok(items) => sessions.update(|s| s.set_items(items)),
                Err(err) => {
                    leptos::logging::warn!("session list fetch failed: {err}");
                    if err == crate::net::ApiError::Auth {
                        token::clear();
                        auth.update(AuthState::sign_out);
                    }
                    sessions.update(|s| s.loading = false);
                }
            }
        });
    });

    let active_id = move || chat.read().session_id.clone();

    let on_new_chat = {
        let navigate = navigate.clone();
        move |_| navigate("/chat", NavigateOptions::default())
    };

    let on_sign_out = {
        let navigate = navigate.clone();
        move |_| {
            token::clear();
            auth.update(AuthState::sign_out);
            navigate("/login", NavigateOptions::default());
        }
    };

    let nav_for_list = navigate.clone();

    view! {
        <aside class="sidebar">
            <button class="btn btn--primary sidebar__new" on:click=on_new_chat>
                "New Chat"
            </button>

            <div class="sidebar__sessions">
                {move || {
                    let state = sessions.get();
                    if state.loading && state.items.is_empty() {
                        return view! { <div class="sidebar__empty">"Loading..."</div> }.into_any();
                    }
                    if state.items.is_empty() {
                        return view! { <div class="sidebar__empty">"No conversations yet"</div> }
                            .into_any();
                    }

                    state
                        .items
                        .iter()
                        .map(|session| {
                            let id = session.id.clone();
                            let title = session.title.clone();
                            let href = format!("/chat/{id}");
                            let navigate = nav_for_list.clone();
                            let is_active = {
                                let id = id.clone();
                                move || active_id().as_deref() == Some(id.as_str())
                            };
                            view! {
                                <button
                                    class="sidebar__session"
                                    class:sidebar__session--active=is_active
                                    on:click=move |_| navigate(&href, NavigateOptions::default())
                                >
                                    {title}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>

            <div class="sidebar__footer">
                <span class="sidebar__user">
                    {move || auth.read().user.as_ref().map(|u| u.email.clone()).unwrap_or_default()}
                </span>
                <button class="sidebar__sign-out" on:click=on_sign_out>
                    "Sign out"
                </button>
            </div>
        </aside>
    }
}
