//! Responsive navbar orchestrator
//!
//! Owns the viewport detector, menu controller, dismisser, region registry
//! and the injected interaction source. Hosts call into it for every user
//! action and every global event, then re-render from [`ResponsiveNavbar::view`]
//! or [`ResponsiveNavbar::snapshot`].

use crate::dismiss::Dismisser;
use crate::interaction::{InteractionEvent, InteractionSource, Region, RegionRegistry};
use crate::models::{MenuSide, NavbarConfig};
use crate::render::{render, NavbarView};
use crate::state::{MenuController, OpenState};
use crate::viewport::{ViewportClass, ViewportDetector};
use tracing::{debug, trace};

/// Key that activates a focused menu entry
pub const ENTER_KEY: &str = "Enter";

/// Output boundary: where selections go
pub trait Navigator {
    /// Client-side route change
    fn navigate(&mut self, path: &str);

    fn logout(&mut self);
}

/// What a selection asked the navigator to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    Navigate(String),
    Logout,
}

impl NavAction {
    pub fn dispatch(&self, navigator: &mut dyn Navigator) {
        match self {
            NavAction::Navigate(path) => navigator.navigate(path),
            NavAction::Logout => navigator.logout(),
        }
    }
}

/// Everything a renderer needs to know about the live state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSnapshot {
    pub viewport: ViewportClass,
    pub open: OpenState,
}

pub struct ResponsiveNavbar<S: InteractionSource, R> {
    config: NavbarConfig,
    viewport: ViewportDetector<S::Handle>,
    menus: MenuController,
    dismisser: Dismisser<S::Handle>,
    regions: RegionRegistry<R>,
    source: S,
}

impl<S: InteractionSource, R> ResponsiveNavbar<S, R> {
    pub fn new(config: NavbarConfig, source: S) -> Self {
        Self {
            viewport: ViewportDetector::new(config.compact_breakpoint),
            menus: MenuController::for_config(&config),
            dismisser: Dismisser::new(),
            regions: RegionRegistry::new(),
            config,
            source,
        }
    }

    pub fn config(&self) -> &NavbarConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Read the initial width and subscribe to resizes
    pub fn mount(&mut self, width: u32) {
        self.viewport.mount(width, &mut self.source);
        if !self.viewport.is_compact() {
            self.close_all();
        }
    }

    /// Release every global listener and close all menus
    pub fn teardown(&mut self) {
        self.menus.close_all();
        self.dismisser.disarm(&mut self.source);
        self.viewport.teardown(&mut self.source);
        debug!("Navbar torn down");
    }

    pub fn is_mounted(&self) -> bool {
        self.viewport.is_mounted()
    }

    pub fn is_compact(&self) -> bool {
        self.viewport.is_compact()
    }

    pub fn is_armed(&self) -> bool {
        self.dismisser.is_armed()
    }

    pub fn open_side(&self) -> Option<MenuSide> {
        self.menus.open_side()
    }

    pub fn open_state(&self) -> OpenState {
        self.menus.state()
    }

    pub fn snapshot(&self) -> NavSnapshot {
        NavSnapshot {
            viewport: self.viewport.class(),
            open: self.menus.state(),
        }
    }

    pub fn view(&self) -> Option<NavbarView> {
        render(self.viewport.class(), self.menus.state(), &self.config)
    }

    /// Toggle a menu. No-op on wide viewports, where no menu is rendered.
    pub fn toggle(&mut self, side: MenuSide) -> OpenState {
        if !self.viewport.is_compact() {
            debug!(%side, "Ignoring toggle on wide viewport");
            return self.menus.state();
        }
        let state = self.menus.toggle(side);
        self.dismisser.sync(state, &mut self.source);
        state
    }

    pub fn close_all(&mut self) {
        self.menus.close_all();
        self.dismisser.sync(self.menus.state(), &mut self.source);
    }

    pub fn register_region(&mut self, side: MenuSide, region: R) {
        self.regions.register(side, region);
    }

    pub fn unregister_region(&mut self, side: MenuSide) {
        self.regions.unregister(side);
    }

    /// Select a link entry: always closes, then navigates once if the entry
    /// exists. Returns the action taken.
    pub fn select(
        &mut self,
        side: MenuSide,
        index: usize,
        navigator: &mut dyn Navigator,
    ) -> Option<NavAction> {
        self.close_all();
        let entry = self.config.entries(side).get(index)?;
        let action = NavAction::Navigate(entry.href.clone());
        debug!(%side, index, href = %entry.href, "Menu entry selected");
        action.dispatch(navigator);
        Some(action)
    }

    /// Keyboard activation of a focused entry; only Enter selects
    pub fn entry_key(
        &mut self,
        side: MenuSide,
        index: usize,
        key: &str,
        navigator: &mut dyn Navigator,
    ) -> Option<NavAction> {
        if key != ENTER_KEY {
            return None;
        }
        self.select(side, index, navigator)
    }

    pub fn logout(&mut self, navigator: &mut dyn Navigator) -> NavAction {
        self.close_all();
        debug!("Logout selected");
        let action = NavAction::Logout;
        action.dispatch(navigator);
        action
    }

    /// Route a host event. Returns `true` when the snapshot changed.
    pub fn handle<T>(&mut self, event: InteractionEvent<T>) -> bool
    where
        R: Region<T>,
    {
        let before = self.snapshot();
        match event {
            InteractionEvent::Resize { width } => {
                if self.viewport.on_resize(width) && !self.viewport.is_compact() {
                    // Nothing is rendered wide, so nothing may stay open
                    self.close_all();
                }
            }
            InteractionEvent::PointerDown { target } => {
                if self
                    .dismisser
                    .should_dismiss_pointer(target.as_ref(), &self.regions)
                {
                    debug!("Outside pointer down, dismissing");
                    self.close_all();
                }
            }
            InteractionEvent::KeyDown { key } => {
                if self.dismisser.should_dismiss_key(&key) {
                    debug!("Escape pressed, dismissing");
                    self.close_all();
                } else {
                    trace!(%key, "Key ignored");
                }
            }
        }
        self.snapshot() != before
    }
}

impl<S: InteractionSource, R> Drop for ResponsiveNavbar<S, R> {
    fn drop(&mut self) {
        self.teardown();
    }
}
