//! Placeholder page for routes reached from the navbar

use leptos::prelude::*;
use leptos_router::components::A;

/// Page body showing which route the navbar led to
#[component]
pub fn PageStub(
    /// Page title (e.g., "Dashboard", "Settings")
    title: &'static str,
    /// Route this page is mounted at
    path: &'static str,
) -> impl IntoView {
    view! {
        <div class="page-stub">
            <h2 class="page-stub-title">{title}</h2>
            <p class="page-stub-path">
                <code>{path}</code>
            </p>
            <div class="page-stub-actions">
                <A href="/" attr:class="btn btn-primary">
                    "Back to Home"
                </A>
            </div>
        </div>
    }
}
