//! Portal screens, one module per entity group.

pub mod dashboard;
pub mod donors;
pub mod login;
pub mod logout;
pub mod matching;
pub mod patients;
pub mod profile;
pub mod reports;
pub mod users;

use leptos::prelude::*;

use crate::state::list::ListState;

/// Kick off (or re-run) a list fetch for a page-owned controller.
///
/// The epoch returned by `begin` travels with the spawned task so a result
/// arriving after teardown or after a newer fetch is dropped by `finish`.
/// `try_update` is used on completion because the page (and its signals) may
/// already be gone by then.
pub(crate) fn load_list<T, F, Fut>(list: RwSignal<ListState<T>>, fetch: F)
where
    T: Clone + Send + Sync + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: std::future::Future<Output = Result<Vec<T>, String>> + 'static,
{
    let epoch = list.try_update(ListState::begin).unwrap_or_default();
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = fetch().await;
        let _ = list.try_update(|l| l.finish(epoch, result));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (epoch, fetch);
    }
}

/// Inline dismissible error for a list controller, rendered above its table.
pub(crate) fn list_error_view<T>(list: RwSignal<ListState<T>>) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    move || {
        list.get().error.map(|msg| {
            view! {
                <div class="alert alert--danger" role="alert">
                    <span class="alert__text">{msg}</span>
                    <button
                        class="alert__dismiss"
                        aria-label="Dismiss"
                        on:click=move |_| list.update(|l| l.error = None)
                    >
                        "\u{d7}"
                    </button>
                </div>
            }
        })
    }
}

/// Optional cell text: absent columns render as a dash.
pub(crate) fn dash(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_owned())
}

/// Blank form fields become explicit nulls in create payloads.
pub(crate) fn blank_to_none(value: String) -> Option<String> {
    if value.trim().is_empty() { None } else { Some(value) }
}

/// Parse a numeric identifier typed into a form field.
pub(crate) fn parse_id(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}
