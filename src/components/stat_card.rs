//! Counter card for the dashboard and reports summaries.

use leptos::prelude::*;

/// A labelled count; `None` renders as a dash (the backend reports a count
/// it failed to compute as null rather than failing the whole response).
#[component]
pub fn StatCard(
    title: &'static str,
    value: Option<i64>,
    #[prop(default = "")] desc: &'static str,
) -> impl IntoView {
    let shown = value.map_or_else(|| "\u{2014}".to_owned(), |v| v.to_string());

    view! {
        <div class="stat-card">
            <div class="stat-card__title">{title}</div>
            <div class="stat-card__value">{shown}</div>
            <Show when=move || !desc.is_empty()>
                <div class="stat-card__desc">{desc}</div>
            </Show>
        </div>
    }
}
