//! Data models for navmenu

pub mod config;
pub mod menu;

pub use config::NavbarConfig;
pub use menu::{MenuEntry, MenuSide, UserIdentity};
