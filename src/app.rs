//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::config::ClientConfig;
use crate::messages;
use crate::pages::login::LoginPage;

/// Root application component.
///
/// Resolves the client config once and provides it to the page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ClientConfig::from_env());

    view! {
        <Title text=messages::PAGE_TITLE/>
        <LoginPage/>
    }
}
