//! Login page with an email/password session form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::AppConfig;
use crate::net::api;
use crate::net::types::LoginCredentials;
use crate::state::session::SessionState;

/// Login page — primes the CSRF cookie, posts credentials to the session
/// login endpoint, and navigates to the configured post-login route.
/// Already-authenticated visitors are sent to the guest-only redirect.
#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    // Guest-only page: bounce signed-in users.
    {
        let navigate = navigate.clone();
        let target = config.redirect.on_guest_only.clone();
        Effect::new(move || {
            let state = session.get();
            if !state.loading && state.is_authenticated() {
                navigate(&target, NavigateOptions::default());
            }
        });
    }

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let pending = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get() {
            return;
        }
        pending.set(true);
        error.set(None);

        let config = config.clone();
        let navigate = navigate.clone();
        let credentials = LoginCredentials { email: email.get(), password: password.get() };
        leptos::task::spawn_local(async move {
            api::prime_csrf(&config).await;
            match api::login(&config, &credentials).await {
                Ok(user) => {
                    session.update(|state| {
                        state.user = Some(user);
                        state.loading = false;
                    });
                    navigate(&config.redirect.on_login, NavigateOptions::default());
                }
                Err(message) => {
                    error.set(Some(message));
                    pending.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <h1>"Tickets"</h1>
            <p>"Sign in to your support workspace"</p>
            <form class="login-form" on:submit=on_submit>
                <input
                    type="email"
                    class="login-form__email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    class="login-form__password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                </button>
                {move || error.get().map(|message| view! { <p class="login-form__error">{message}</p> })}
            </form>
        </div>
    }
}
