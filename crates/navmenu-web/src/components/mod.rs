//! Leptos UI components

mod page_stub;
mod responsive_menu;

pub use page_stub::PageStub;
pub use responsive_menu::ResponsiveMenu;
