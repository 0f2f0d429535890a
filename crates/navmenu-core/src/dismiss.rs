//! Outside-interaction dismisser
//!
//! Idle while every menu is closed (no global listeners). Armed while a menu
//! is open: holds a pointer-down and a key-down listener and decides whether
//! an incoming event should close everything.

use crate::interaction::{InteractionSource, ListenerKind, Region, RegionRegistry};
use crate::state::OpenState;
use tracing::{debug, trace};

pub const ESCAPE_KEY: &str = "Escape";

#[derive(Debug)]
enum DismissState<H> {
    Idle,
    Armed { pointer: H, key: H },
}

#[derive(Debug)]
pub struct Dismisser<H> {
    state: DismissState<H>,
}

impl<H> Default for Dismisser<H> {
    fn default() -> Self {
        Self {
            state: DismissState::Idle,
        }
    }
}

impl<H> Dismisser<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.state, DismissState::Armed { .. })
    }

    /// Attach or release listeners so that the dismisser is armed exactly
    /// when some menu is open.
    pub fn sync<S>(&mut self, open: OpenState, source: &mut S)
    where
        S: InteractionSource<Handle = H>,
    {
        match (open.any_open(), self.is_armed()) {
            (true, false) => {
                let pointer = source.attach(ListenerKind::PointerDown);
                let key = source.attach(ListenerKind::KeyDown);
                self.state = DismissState::Armed { pointer, key };
                debug!(open = ?open.side(), "Dismisser armed");
            }
            (false, true) => self.disarm(source),
            _ => {}
        }
    }

    pub fn disarm<S>(&mut self, source: &mut S)
    where
        S: InteractionSource<Handle = H>,
    {
        if let DismissState::Armed { pointer, key } =
            std::mem::replace(&mut self.state, DismissState::Idle)
        {
            source.detach(pointer);
            source.detach(key);
            debug!("Dismisser idle");
        }
    }

    /// Whether a pointer-down should close all menus
    pub fn should_dismiss_pointer<T, R>(&self, target: Option<&T>, regions: &RegionRegistry<R>) -> bool
    where
        R: Region<T>,
    {
        if !self.is_armed() {
            return false;
        }
        let inside = regions.contains(target);
        trace!(inside, "Pointer down while armed");
        !inside
    }

    /// Whether a key-down should close all menus
    pub fn should_dismiss_key(&self, key: &str) -> bool {
        self.is_armed() && key == ESCAPE_KEY
    }
}
