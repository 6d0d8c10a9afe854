//! Dashboard with aggregate counters for each collection.

use leptos::prelude::*;

use crate::components::stat_card::StatCard;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let stats = LocalResource::new(|| crate::net::api::fetch_stats());

    view! {
        <div class="dashboard-page">
            <h1 class="dashboard-page__title">"Transplant Link Dashboard"</h1>
            <p class="muted dashboard-page__blurb">
                "Register users, donors and patients, link them through organizations \
                 and doctors, and track organ donation matches. Use the sidebar to \
                 add or list records and manage the data lifecycle."
            </p>
            {move || match stats.get() {
                None => view! { <p class="muted">"Loading statistics..."</p> }.into_any(),
                Some(Err(msg)) => view! { <div class="alert alert--danger" role="alert">{msg}</div> }.into_any(),
                Some(Ok(s)) => view! {
                    <div class="stat-grid">
                        <StatCard title="Users" value=s.users desc="Registered user profiles"/>
                        <StatCard title="Donors" value=s.donors desc="Active donor records"/>
                        <StatCard title="Patients" value=s.patients desc="Patients awaiting / recorded"/>
                        <StatCard title="Matches" value=s.matches desc="Matches recorded"/>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
