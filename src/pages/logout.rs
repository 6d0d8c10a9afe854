//! Logout page: tears the session down and bounces to the login screen.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Calls `POST /auth/logout` (best effort), clears the stored token, and
/// replaces the location with `/login` after a short beat so the message is
/// visible.
#[component]
pub fn LogoutPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    #[cfg(feature = "hydrate")]
    {
        use leptos_router::NavigateOptions;
        use leptos_router::hooks::use_navigate;

        let navigate = use_navigate();
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            crate::util::session::clear_token();
            let _ = auth.try_update(|a| {
                a.user = None;
                a.loading = false;
            });
            gloo_timers::future::sleep(std::time::Duration::from_millis(300)).await;
            navigate(
                "/login",
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }

    view! {
        <div class="card">
            <h2 class="card__title">"Logging out..."</h2>
            <p class="muted">"Clearing your session and redirecting."</p>
        </div>
    }
}
