//! Viewport detector: compact vs wide layout from the window width

use crate::interaction::{InteractionSource, ListenerKind};
use tracing::debug;

/// Widths strictly below this collapse into the compact bar
pub const DEFAULT_COMPACT_BREAKPOINT: u32 = 800;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewportClass {
    Compact,
    Wide,
}

impl ViewportClass {
    pub fn from_width(width: u32, breakpoint: u32) -> Self {
        if width < breakpoint {
            ViewportClass::Compact
        } else {
            ViewportClass::Wide
        }
    }

    pub fn is_compact(&self) -> bool {
        matches!(self, ViewportClass::Compact)
    }
}

/// Tracks the viewport class and owns the resize subscription
#[derive(Debug)]
pub struct ViewportDetector<H> {
    breakpoint: u32,
    class: ViewportClass,
    listener: Option<H>,
}

impl<H> ViewportDetector<H> {
    /// Detector that reports wide until mounted
    pub fn new(breakpoint: u32) -> Self {
        Self {
            breakpoint,
            class: ViewportClass::Wide,
            listener: None,
        }
    }

    pub fn class(&self) -> ViewportClass {
        self.class
    }

    pub fn is_compact(&self) -> bool {
        self.class.is_compact()
    }

    pub fn is_mounted(&self) -> bool {
        self.listener.is_some()
    }

    /// Read the initial width and subscribe to resizes. Mounting twice keeps
    /// the first subscription.
    pub fn mount<S>(&mut self, width: u32, source: &mut S)
    where
        S: InteractionSource<Handle = H>,
    {
        self.class = ViewportClass::from_width(width, self.breakpoint);
        if self.listener.is_none() {
            self.listener = Some(source.attach(ListenerKind::Resize));
            debug!(width, class = ?self.class, "Viewport detector mounted");
        }
    }

    pub fn teardown<S>(&mut self, source: &mut S)
    where
        S: InteractionSource<Handle = H>,
    {
        if let Some(handle) = self.listener.take() {
            source.detach(handle);
            debug!("Viewport detector torn down");
        }
    }

    /// Recompute the class; returns `true` when it flipped
    pub fn on_resize(&mut self, width: u32) -> bool {
        let class = ViewportClass::from_width(width, self.breakpoint);
        if class == self.class {
            return false;
        }
        debug!(width, from = ?self.class, to = ?class, "Viewport class changed");
        self.class = class;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_exclusive() {
        assert_eq!(ViewportClass::from_width(799, 800), ViewportClass::Compact);
        assert_eq!(ViewportClass::from_width(800, 800), ViewportClass::Wide);
        assert_eq!(ViewportClass::from_width(0, 800), ViewportClass::Compact);
    }

    #[test]
    fn test_on_resize_reports_flips_only() {
        let mut viewport: ViewportDetector<()> = ViewportDetector::new(800);
        assert!(!viewport.on_resize(1024));
        assert!(viewport.on_resize(600));
        assert!(viewport.is_compact());
        assert!(!viewport.on_resize(500));
        assert!(viewport.on_resize(1200));
    }
}
