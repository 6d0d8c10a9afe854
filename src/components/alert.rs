//! Inline dismissible message shown near the triggering form or table.

use leptos::prelude::*;

/// Visual flavor of an [`Alert`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Danger,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            Self::Success => "alert alert--success",
            Self::Danger => "alert alert--danger",
        }
    }
}

/// Renders while `message` is non-empty; the dismiss button clears it.
/// None of these messages are fatal; the user may simply retry.
#[component]
pub fn Alert(
    message: RwSignal<String>,
    #[prop(default = AlertKind::Danger)] kind: AlertKind,
) -> impl IntoView {
    view! {
        <Show when=move || !message.get().is_empty()>
            <div class=kind.class() role="alert">
                <span class="alert__text">{move || message.get()}</span>
                <button
                    class="alert__dismiss"
                    aria-label="Dismiss"
                    on:click=move |_| message.set(String::new())
                >
                    "\u{d7}"
                </button>
            </div>
        </Show>
    }
}
