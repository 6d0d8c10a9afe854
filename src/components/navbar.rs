//! Top bar: sidebar toggle, brand, and the signed-in username.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn Navbar(sidebar_open: RwSignal<bool>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let username = move || {
        auth.get()
            .user
            .map(|u| u.username)
            .unwrap_or_default()
    };

    view! {
        <header class="navbar">
            <button
                class="navbar__toggle"
                aria-label="Toggle sidebar"
                on:click=move |_| sidebar_open.update(|v| *v = !*v)
            >
                "\u{2630}"
            </button>
            <span class="navbar__brand">"Transplant Link"</span>
            <span class="navbar__user">{username}</span>
        </header>
    }
}
