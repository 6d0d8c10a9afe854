//! Application shell for the guarded routes: sidebar + navbar + outlet.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::navbar::Navbar;
use crate::components::require_auth::RequireAuth;
use crate::components::sidebar::Sidebar;

/// Layout rendered as the parent of every protected route.
#[component]
pub fn ProtectedLayout() -> impl IntoView {
    let sidebar_open = RwSignal::new(false);

    view! {
        <RequireAuth>
            <div class="layout">
                <Sidebar open=sidebar_open/>
                <div class="layout__main">
                    <Navbar sidebar_open=sidebar_open/>
                    <main class="layout__content" on:click=move |_| sidebar_open.set(false)>
                        <Outlet/>
                    </main>
                </div>
            </div>
        </RequireAuth>
    }
}
