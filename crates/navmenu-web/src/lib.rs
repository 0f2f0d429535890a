//! navmenu-web - Leptos frontend for navmenu

#![recursion_limit = "1024"]

pub mod app;
pub mod components;
pub mod dom;
pub mod navigator;

pub use app::App;
pub use components::ResponsiveMenu;
pub use navigator::RouterNavigator;
