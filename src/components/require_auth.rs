//! Guarded-route wrapper.
//!
//! A stored token is necessary but not sufficient: the session cookie may
//! have expired server-side, so the guard probes `/auth/me` once before
//! rendering anything protected. No token, or a rejected probe, redirects
//! to `/login`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{AuthState, GuardStatus};
use crate::util::session;

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let status = RwSignal::new(GuardStatus::initial(session::has_token()));
    let navigate = use_navigate();

    if status.get_untracked() == GuardStatus::Checking {
        auth.update(|a| a.loading = true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_me().await {
                Some(user) => {
                    let _ = auth.try_update(|a| {
                        a.user = Some(user);
                        a.loading = false;
                    });
                    let _ = status.try_set(GuardStatus::Verified);
                }
                None => {
                    session::clear_token();
                    let _ = auth.try_update(|a| {
                        a.user = None;
                        a.loading = false;
                    });
                    let _ = status.try_set(GuardStatus::Unauthed);
                }
            }
        });
    }

    Effect::new(move || {
        if status.get().requires_login() {
            navigate(
                "/login",
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! {
        <Show
            when=move || status.get() == GuardStatus::Verified
            fallback=|| view! { <div class="session-check">"Checking session..."</div> }
        >
            {children()}
        </Show>
    }
}
