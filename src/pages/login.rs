//! Email/password sign-in and registration page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::state::auth::AuthState;
use crate::util::token;

/// Login page. A successful login or registration stores the bearer token,
/// loads the user, and navigates to the chat.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let registering = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let submit = move || {
        let email_value = email.get_untracked().trim().to_owned();
        let password_value = password.get_untracked();
        if email_value.is_empty() || password_value.is_empty() || busy.get_untracked() {
            return;
        }

        busy.set(true);
        error.set(None);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = if registering.get_untracked() {
                api::register(&email_value, &password_value).await
            } else {
                api::login(&email_value, &password_value).await
            };

            match result {
                Ok(bearer) => {
                    token::store(&bearer);
                    match api::fetch_me().await {
                        Ok(user) => {
                            auth.update(|a| {
                                a.user = Some(user);
                                a.loading = false;
                            });
                            navigate("/", NavigateOptions::default());
                        }
                        Err(err) => {
                            token::clear();
                            error.set(Some(err.to_string()));
                        }
                    }
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            busy.set(false);
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit();
    };

    let toggle_mode = move |_| {
        registering.update(|r| *r = !*r);
        error.set(None);
    };

    view! {
        <div class="login-page">
            <h1>"SlideChat"</h1>
            <p>"Describe a slide and watch it render"</p>

            <form class="login-form" on:submit=on_submit>
                <input
                    class="login-form__input"
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="login-form__input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="btn btn--primary login-form__submit" disabled=move || busy.get()>
                    {move || if registering.get() { "Create account" } else { "Sign in" }}
                </button>
            </form>

            {move || error.get().map(|msg| view! { <div class="login-form__error">{msg}</div> })}

            <button class="login-form__toggle" on:click=toggle_mode>
                {move || {
                    if registering.get() {
                        "Already have an account? Sign in"
                    } else {
                        "New here? Create an account"
                    }
                }}
            </button>
        </div>
    }
}
