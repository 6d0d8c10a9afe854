//! Navigation sidebar listing every portal screen by section.

use leptos::prelude::*;

/// Sidebar nav. On small screens it overlays the content and `open`
/// controls its visibility; link clicks close it.
#[component]
pub fn Sidebar(open: RwSignal<bool>) -> impl IntoView {
    let close = move |_| open.set(false);
    let aside_class = move || {
        if open.get() { "sidebar sidebar--open" } else { "sidebar" }
    };

    view! {
        <aside class=aside_class>
            <div class="sidebar__brand">
                <span class="sidebar__dot"></span>
                <strong>"Transplant Link"</strong>
            </div>
            <nav class="sidebar__nav" on:click=close>
                <a class="sidebar__link" href="/">"Dashboard"</a>

                <div class="sidebar__section">"Users"</div>
                <a class="sidebar__link" href="/users">"View Users"</a>
                <a class="sidebar__link" href="/users/add">"Add User"</a>

                <div class="sidebar__section">"Donors"</div>
                <a class="sidebar__link" href="/donors">"Donor List"</a>
                <a class="sidebar__link" href="/donors/register">"Register Donor"</a>

                <div class="sidebar__section">"Patients"</div>
                <a class="sidebar__link" href="/patients">"Patient List"</a>
                <a class="sidebar__link" href="/patients/register">"Register Patient"</a>

                <div class="sidebar__section">"Matching"</div>
                <a class="sidebar__link" href="/matching/manual">"Manual Matching"</a>
                <a class="sidebar__link" href="/matching/auto">"Auto Matching"</a>

                <div class="sidebar__section">"More"</div>
                <a class="sidebar__link" href="/reports">"Reports"</a>
                <a class="sidebar__link" href="/profile">"Profile"</a>
                <a class="sidebar__link" href="/logout">"Logout"</a>
            </nav>
        </aside>
    }
}
