//! Demo Leptos App: navbar on top of a router with one page per entry

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::{PageStub, ResponsiveMenu};

/// Main App component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="app">
                <ResponsiveMenu />
                <main class="content">
                    <Routes fallback=|| "Not found">
                        <Route path=path!("/") view=|| view! { <PageStub title="Home" path="/" /> } />
                        <Route
                            path=path!("/dashboard")
                            view=|| view! { <PageStub title="Dashboard" path="/dashboard" /> }
                        />
                        <Route
                            path=path!("/test-cases")
                            view=|| view! { <PageStub title="Test Cases" path="/test-cases" /> }
                        />
                        <Route
                            path=path!("/duplicates")
                            view=|| view! { <PageStub title="Duplicates" path="/duplicates" /> }
                        />
                        <Route
                            path=path!("/jira")
                            view=|| view! { <PageStub title="Jira Integration" path="/jira" /> }
                        />
                        <Route path=path!("/help") view=|| view! { <PageStub title="Help" path="/help" /> } />
                        <Route
                            path=path!("/settings")
                            view=|| view! { <PageStub title="Settings" path="/settings" /> }
                        />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
