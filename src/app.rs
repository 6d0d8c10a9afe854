//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::layout::ProtectedLayout;
use crate::pages::{
    dashboard::DashboardPage,
    donors::{DonorListPage, RegisterDonorPage},
    login::LoginPage,
    logout::LogoutPage,
    matching::{AutoMatchingPage, ManualMatchingPage},
    patients::{PatientListPage, RegisterPatientPage},
    profile::ProfilePage,
    reports::ReportsPage,
    users::{AddUserPage, DeleteUserPage, EditUserPage, UserListPage},
};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context and sets up client-side routing. Everything
/// except `/login` lives under the guarded layout.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/transplant-link-ui.css"/>
        <Title text="Transplant Link"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("") view=ProtectedLayout>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("users") view=UserListPage/>
                    <Route path=(StaticSegment("users"), StaticSegment("add")) view=AddUserPage/>
                    <Route
                        path=(StaticSegment("users"), ParamSegment("id"), StaticSegment("edit"))
                        view=EditUserPage
                    />
                    <Route
                        path=(StaticSegment("users"), ParamSegment("id"), StaticSegment("delete"))
                        view=DeleteUserPage
                    />
                    <Route path=StaticSegment("donors") view=DonorListPage/>
                    <Route
                        path=(StaticSegment("donors"), StaticSegment("register"))
                        view=RegisterDonorPage
                    />
                    <Route path=StaticSegment("patients") view=PatientListPage/>
                    <Route
                        path=(StaticSegment("patients"), StaticSegment("register"))
                        view=RegisterPatientPage
                    />
                    <Route
                        path=(StaticSegment("matching"), StaticSegment("manual"))
                        view=ManualMatchingPage
                    />
                    <Route
                        path=(StaticSegment("matching"), StaticSegment("auto"))
                        view=AutoMatchingPage
                    />
                    <Route path=StaticSegment("reports") view=ReportsPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("logout") view=LogoutPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
