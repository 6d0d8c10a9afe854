//! Labelled text input bound to a string signal.

use leptos::prelude::*;

/// A single form field. Required fields are marked visually; presence is
/// still checked on submit since that is the only client-side validation.
#[component]
pub fn TextField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = false)] required: bool,
    #[prop(default = "")] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">
                {label}
                <Show when=move || required>
                    <span class="field__required">" *"</span>
                </Show>
            </span>
            <input
                class="field__input"
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}
