//! Sign-in page: exchanges credentials for a session and stores the token.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::alert::Alert;
use crate::state::auth::AuthState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(not(feature = "hydrate"))]
    let _ = auth;
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let navigate = use_navigate();
    #[cfg(not(feature = "hydrate"))]
    let _ = &navigate;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(String::new());
        if username.get().is_empty() || password.get().is_empty() {
            error.set("Please enter username and password.".to_owned());
            return;
        }
        loading.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&username.get_untracked(), &password.get_untracked())
                    .await
                {
                    Ok(resp) => {
                        crate::util::session::set_token(resp.token.as_deref().unwrap_or("session"));
                        let _ = auth.try_update(|a| {
                            a.user = resp.user;
                            a.loading = false;
                        });
                        navigate("/", leptos_router::NavigateOptions::default());
                    }
                    Err(msg) => {
                        let _ = error.try_set(msg);
                        let _ = loading.try_set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            loading.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-page__intro">
                <h1>"Transplant Link"</h1>
                <p class="muted">
                    "A simplified organ donation and transplantation management portal \
                     for users, donors and patients."
                </p>
            </div>
            <div class="card login-page__card">
                <h2 class="card__title">"Sign in"</h2>
                <Alert message=error/>
                <form on:submit=on_submit>
                    <label class="field">
                        <span class="field__label">"Username"</span>
                        <input
                            class="field__input"
                            type="text"
                            placeholder="username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Password"</span>
                        <input
                            class="field__input"
                            type="password"
                            placeholder="\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
