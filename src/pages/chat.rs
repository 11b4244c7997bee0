//! Chat page — the main conversation view and generation orchestrator.
//!
//! One route-change effect owns the session lifecycle: it resets the chat
//! state for the routed session, consumes a pending first prompt left by
//! lazy session creation, or loads persisted history. Async completions
//! compare their session id against the live state and drop stale results.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use artifact::payload::ArtifactPayload;

use crate::components::sidebar::Sidebar;
use crate::components::slide_preview::SlidePreview;
use crate::net::{ApiError, api};
use crate::state::auth::AuthState;
use crate::state::chat::{ChatState, Message, MessageKind, PendingPrompt, Phase, Role};
use crate::state::sessions::SessionsState;
use crate::util::token;

/// A rejected or missing token is fatal to the view: drop the token and the
/// user, which trips the login redirect.
fn handle_auth_failure(auth: RwSignal<AuthState>, err: &ApiError) {
    if *err == ApiError::Auth {
        token::clear();
        auth.update(AuthState::sign_out);
    }
}

/// Issue a generation request and settle the chat with the outcome, unless
/// the user navigated away in the meantime.
fn start_generation(
    chat: RwSignal<ChatState>,
    auth: RwSignal<AuthState>,
    text: String,
    session_id: String,
) {
    leptos::task::spawn_local(async move {
        let result = api::generate(&text, &session_id).await;

        if chat.read_untracked().session_id.as_deref() != Some(session_id.as_str()) {
            return;
        }
        match result {
            Ok(data) => chat.update(|c| c.settle_success(&data)),
            Err(err) => {
                leptos::logging::warn!("generation failed: {err}");
                handle_auth_failure(auth, &err);
                // The phase settles on every failure so the progress ticker
                // always stops.
                chat.update(ChatState::settle_failure);
            }
        }
    });
}

/// Advance the simulated progress stages while the generation is in flight.
/// Stops as soon as the view settles or switches sessions.
fn spawn_progress_ticker(chat: RwSignal<ChatState>, session_id: String) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use artifact::consts::PROGRESS_STAGE_MS;

        loop {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                PROGRESS_STAGE_MS,
            )))
            .await;

            let live = {
                let state = chat.read_untracked();
                state.session_id.as_deref() == Some(session_id.as_str())
                    && state.phase == Phase::AwaitingGeneration
            };
            if !live {
                break;
            }
            chat.update(ChatState::advance_progress);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (chat, session_id);
    }
}

/// Load persisted history: fetch the transcript, resolve every referenced
/// artifact in parallel, then rebuild the messages in order. A failed
/// lookup downgrades that one message; it never aborts the rest.
fn load_history(chat: RwSignal<ChatState>, auth: RwSignal<AuthState>, session_id: String) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use artifact::classify::{ArtifactId, Label, classify};
        use crate::state::chat::reconcile;

        let detail = match api::fetch_session(&session_id).await {
            Ok(detail) => detail,
            Err(err) => {
                leptos::logging::warn!("history load failed: {err}");
                handle_auth_failure(auth, &err);
                return;
            }
        };

        let lookups = detail.messages.iter().map(|msg| {
            let id = match classify(&msg.content).label {
                Label::Artifact(ArtifactId::Generated(id)) => Some(id),
                _ => None,
            };
            async move {
                match id {
                    Some(id) => api::fetch_artifact(&id).await,
                    None => None,
                }
            }
        });
        let resolved = futures::future::join_all(lookups).await;

        if chat.read_untracked().session_id.as_deref() != Some(session_id.as_str()) {
            return;
        }
        let messages: Vec<Message> = detail
            .messages
            .iter()
            .zip(&resolved)
            .map(|(msg, data)| reconcile(&msg.role, &msg.content, data.as_ref()))
            .collect();
        chat.update(|c| {
            c.messages = messages;
            c.phase = Phase::Idle;
        });
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (chat, auth, session_id);
    }
}

fn message_view(msg: &Message) -> AnyView {
    let is_user = msg.role == Role::User;
    let content = msg.content.clone();
    let slide = match &msg.kind {
        MessageKind::Artifact(payload) => Some(payload.clone()),
        MessageKind::Text => None,
    };

    view! {
        <div class="chat-message" class:chat-message--user=is_user>
            <div class="chat-message__content">{content}</div>
            {slide.map(|payload: ArtifactPayload| view! { <SlidePreview payload=payload/> })}
        </div>
    }
    .into_any()
}

/// Chat page. Routed with or without a session id; without one it shows an
/// empty conversation and creates the session lazily on first send.
#[component]
pub fn ChatPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let sessions = expect_context::<RwSignal<SessionsState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let pending = expect_context::<RwSignal<Option<PendingPrompt>>>();
    let params = use_params_map();
    let navigate = use_navigate();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    let route_id = move || params.read().get("id");

    // Session lifecycle, all in one place so teardown and startup cannot
    // race each other: reset for the routed session, then either consume
    // the pending first prompt or load history.
    Effect::new(move || {
        let id = route_id();
        chat.update(|c| c.reset_for(id.clone()));

        let Some(id) = id else {
            return;
        };

        let mut intent = None;
        pending.update(|p| {
            if p.as_ref().is_some_and(|i| i.session_id == id) {
                intent = p.take();
            }
        });

        if let Some(intent) = intent {
            chat.update(|c| c.begin_send(&intent.text));
            start_generation(chat, auth, intent.text, id.clone());
            spawn_progress_ticker(chat, id);
        } else {
            load_history(chat, auth, id);
        }
    });

    // Redirect to login if not authenticated.
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            let state = auth.get();
            if !state.loading && state.user.is_none() {
                navigate("/login", NavigateOptions::default());
            }
        });
    }

    // Keep the transcript pinned to the newest message.
    Effect::new(move || {
        let _ = chat.read().messages.len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = {
        let navigate = navigate.clone();
        move || {
            let text = input.get_untracked().trim().to_owned();
            if text.is_empty() || chat.read_untracked().phase.is_busy() {
                return;
            }

            if let Some(id) = chat.read_untracked().session_id.clone() {
                input.set(String::new());
                chat.update(|c| c.begin_send(&text));
                start_generation(chat, auth, text, id.clone());
                spawn_progress_ticker(chat, id);
                return;
            }

            // No session yet: create one, stash the prompt for the freshly
            // routed view, and navigate. The new view consumes the prompt
            // exactly once. The input comes back if creation fails.
            let Some(owner) = auth.read_untracked().owner().map(ToOwned::to_owned) else {
                return;
            };
            chat.update(ChatState::begin_session_create);
            input.set(String::new());
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api::create_session(&owner, crate::state::chat::NEW_SESSION_TITLE).await {
                    Ok(created) => {
                        pending.set(Some(PendingPrompt {
                            session_id: created.id.clone(),
                            text,
                        }));
                        sessions.update(SessionsState::bump);
                        navigate(&format!("/chat/{}", created.id), NavigateOptions::default());
                    }
                    Err(err) => {
                        leptos::logging::warn!("session create failed: {err}");
                        handle_auth_failure(auth, &err);
                        chat.update(ChatState::settle_failure);
                        input.set(text);
                    }
                }
            });
        }
    };

    let on_click = {
        let do_send = do_send.clone();
        move |_| do_send()
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let busy = move || chat.read().phase.is_busy();

    view! {
        <div class="chat-page">
            <Sidebar/>

            <main class="chat-page__main">
                <div class="chat-page__messages" node_ref=messages_ref>
                    {move || {
                        let messages = chat.get().messages;
                        if messages.is_empty() && !busy() {
                            return view! {
                                <div class="chat-page__empty">
                                    "Describe the slide you want and press Enter."
                                </div>
                            }
                                .into_any();
                        }
                        messages.iter().map(message_view).collect::<Vec<_>>().into_any()
                    }}

                    {move || {
                        let state = chat.get();
                        (state.phase == Phase::AwaitingGeneration).then(|| {
                            view! {
                                <div class="chat-page__progress">
                                    <span class="chat-page__progress-caption">
                                        {state.progress.caption()}
                                    </span>
                                    <span class="chat-page__progress-dots"></span>
                                </div>
                            }
                        })
                    }}
                </div>

                <div class="chat-page__input-row">
                    <input
                        class="chat-page__input"
                        type="text"
                        placeholder="Describe a slide..."
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                        on:keydown=on_keydown
                    />
                    <button
                        class="btn btn--primary chat-page__send"
                        on:click=on_click
                        disabled=move || busy() || input.get().trim().is_empty()
                    >
                        "Send"
                    </button>
                </div>
            </main>
        </div>
    }
}
