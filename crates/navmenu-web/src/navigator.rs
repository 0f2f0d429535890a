//! Navigator backed by the Leptos router

use leptos::leptos_dom::helpers::window;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use navmenu_core::Navigator;

/// Routes entries client-side; logout is a full page navigation so the
/// server can drop the session.
pub struct RouterNavigator {
    navigate: Box<dyn Fn(&str)>,
    logout_path: String,
}

impl RouterNavigator {
    pub fn new(navigate: impl Fn(&str) + 'static, logout_path: impl Into<String>) -> Self {
        Self {
            navigate: Box::new(navigate),
            logout_path: logout_path.into(),
        }
    }

    /// Must be called under a `<Router>`
    pub fn from_router(logout_path: impl Into<String>) -> Self {
        let navigate = use_navigate();
        Self::new(
            move |path| navigate(path, NavigateOptions::default()),
            logout_path,
        )
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&mut self, path: &str) {
        leptos::logging::log!("Navigating to {}", path);
        (self.navigate)(path);
    }

    fn logout(&mut self) {
        if let Err(e) = window().location().set_href(&self.logout_path) {
            leptos::logging::error!("Logout navigation to {} failed: {:?}", self.logout_path, e);
        }
    }
}
