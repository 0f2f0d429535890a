//! Menu state controller
//!
//! Which dropdown is open is a single optional side, so two menus can never
//! be open at once.

use crate::models::{MenuSide, NavbarConfig};
use tracing::debug;

/// Open/closed state of all dropdowns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OpenState(Option<MenuSide>);

impl OpenState {
    pub const CLOSED: OpenState = OpenState(None);

    pub fn open(side: MenuSide) -> Self {
        OpenState(Some(side))
    }

    pub fn side(&self) -> Option<MenuSide> {
        self.0
    }

    pub fn is_open(&self, side: MenuSide) -> bool {
        self.0 == Some(side)
    }

    pub fn any_open(&self) -> bool {
        self.0.is_some()
    }
}

/// Holds the open side and applies toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuController {
    state: OpenState,
    enabled: [bool; 3],
}

impl Default for MenuController {
    fn default() -> Self {
        Self {
            state: OpenState::CLOSED,
            enabled: [true; 3],
        }
    }
}

impl MenuController {
    /// Controller with every side enabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller that ignores sides the config has nothing to show for
    pub fn for_config(config: &NavbarConfig) -> Self {
        let mut enabled = [false; 3];
        for side in config.enabled_sides() {
            enabled[side.index()] = true;
        }
        Self {
            state: OpenState::CLOSED,
            enabled,
        }
    }

    pub fn state(&self) -> OpenState {
        self.state
    }

    pub fn open_side(&self) -> Option<MenuSide> {
        self.state.side()
    }

    pub fn is_open(&self, side: MenuSide) -> bool {
        self.state.is_open(side)
    }

    pub fn is_enabled(&self, side: MenuSide) -> bool {
        self.enabled[side.index()]
    }

    /// Close `side` if it is open, otherwise open it and close the others
    pub fn toggle(&mut self, side: MenuSide) -> OpenState {
        if !self.is_enabled(side) {
            debug!(%side, "Ignoring toggle of disabled menu");
            return self.state;
        }

        self.state = if self.state.is_open(side) {
            OpenState::CLOSED
        } else {
            OpenState::open(side)
        };
        debug!(%side, open = ?self.state.side(), "Menu toggled");
        self.state
    }

    pub fn close_all(&mut self) {
        if self.state.any_open() {
            debug!(closed = ?self.state.side(), "Closing all menus");
        }
        self.state = OpenState::CLOSED;
    }
}
