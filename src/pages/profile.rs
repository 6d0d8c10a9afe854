//! Current session details.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="card">
            <h2 class="card__title">"Profile"</h2>
            {move || {
                let state = auth.get();
                if state.loading {
                    view! { <p class="muted">"Loading session..."</p> }.into_any()
                } else if let Some(user) = state.user {
                    view! {
                        <dl class="profile">
                            <dt>"Username"</dt>
                            <dd>{user.username}</dd>
                        </dl>
                    }
                    .into_any()
                } else {
                    view! { <p class="muted">"Not signed in."</p> }.into_any()
                }
            }}
        </div>
    }
}
