//! Access page: backend status banner plus username/password login.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only page of the bundle. State lives in one `RwSignal<LoginView>`;
//! the async flows come from `controller` and only run in the browser.

use leptos::prelude::*;

use crate::messages;
use crate::state::login::{Feedback, Field, LoginView};

#[component]
pub fn LoginPage() -> impl IntoView {
    let state = RwSignal::new(LoginView::default());

    #[cfg(feature = "csr")]
    let client = {
        let config = expect_context::<crate::config::ClientConfig>();
        crate::net::api::ApiClient::new(&config, crate::net::transport::GlooTransport)
    };

    // Probe the backend once per mount; cleanup drops a late answer.
    #[cfg(feature = "csr")]
    {
        let (task, guard) = crate::controller::health_check(client.clone(), state);
        leptos::task::spawn_local(task);
        on_cleanup(move || guard.unmount());
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "csr")]
        {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                crate::controller::submit(&client, &state).await;
            });
        }
    };

    let loading = move || state.with(|v| v.loading);

    view! {
        <div class="app">
            <main class="login-card">
                <h1>{messages::PAGE_TITLE}</h1>
                <p class="tagline">{messages::TAGLINE}</p>

                <div class=move || {
                    format!("status-banner {}", state.with(|v| v.health.status.banner_class()))
                }>
                    {move || state.with(|v| v.health.banner_text().to_owned())}
                </div>

                <form class="login-form" on:submit=on_submit>
                    <label for="username">{messages::USERNAME_LABEL}</label>
                    <input
                        id="username"
                        name="username"
                        type="text"
                        autocomplete="username"
                        placeholder=messages::USERNAME_PLACEHOLDER
                        required=true
                        disabled=loading
                        prop:value=move || state.with(|v| v.credentials.username.clone())
                        on:input=move |ev| {
                            state.update(|v| v.credentials.set(Field::Username, event_target_value(&ev)));
                        }
                    />

                    <label for="password">{messages::PASSWORD_LABEL}</label>
                    <input
                        id="password"
                        name="password"
                        type="password"
                        autocomplete="current-password"
                        placeholder="••••••••"
                        required=true
                        disabled=loading
                        prop:value=move || state.with(|v| v.credentials.password.clone())
                        on:input=move |ev| {
                            state.update(|v| v.credentials.set(Field::Password, event_target_value(&ev)));
                        }
                    />

                    {move || state.with(render_feedback)}

                    <button type="submit" disabled=loading>
                        {move || state.with(LoginView::submit_label)}
                    </button>
                </form>
            </main>
        </div>
    }
}

fn render_feedback(view: &LoginView) -> AnyView {
    match view.feedback() {
        Feedback::Empty => ().into_any(),
        Feedback::Error(message) => view! { <p class="feedback error">{message.to_owned()}</p> }.into_any(),
        Feedback::Welcome(card) => view! {
            <div class="feedback success">
                <strong>{card.heading}</strong>
                <span>{card.role}</span>
                {card.email.map(|email| view! { <span>{email}</span> })}
            </div>
        }
        .into_any(),
    }
}
