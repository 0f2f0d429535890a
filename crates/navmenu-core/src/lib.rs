//! navmenu-core - Core library for navmenu
//!
//! Headless state machine for a responsive navigation bar: viewport
//! detection, exclusive dropdown state, outside-click/Escape dismissal and a
//! pure renderer, plus the configuration layer.

pub mod dismiss;
pub mod error;
pub mod interaction;
pub mod models;
pub mod navbar;
pub mod render;
pub mod state;
pub mod viewport;

pub use dismiss::Dismisser;
pub use error::NavError;
pub use interaction::{InteractionEvent, InteractionSource, ListenerKind, Region, RegionRegistry};
pub use models::{MenuEntry, MenuSide, NavbarConfig, UserIdentity};
pub use navbar::{NavAction, NavSnapshot, Navigator, ResponsiveNavbar};
pub use render::{render, NavbarView};
pub use state::{MenuController, OpenState};
pub use viewport::{ViewportClass, ViewportDetector, DEFAULT_COMPACT_BREAKPOINT};
