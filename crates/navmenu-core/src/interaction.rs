//! Host interaction plumbing: listener kinds, events, the injected event
//! source, and the registry of menu regions used for containment checks.

use crate::models::MenuSide;
use tracing::trace;

/// Global listeners the navbar may hold on its host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// Window width changes
    Resize,
    /// Pointer press anywhere (mouse, touch or pen)
    PointerDown,
    /// Key press anywhere
    KeyDown,
}

impl ListenerKind {
    /// DOM event name
    pub fn event_name(&self) -> &'static str {
        match self {
            ListenerKind::Resize => "resize",
            ListenerKind::PointerDown => "pointerdown",
            ListenerKind::KeyDown => "keydown",
        }
    }
}

/// Event delivered by the host. `T` is whatever identifies a hit target
/// (a DOM node in the browser, a plain id in tests).
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionEvent<T> {
    Resize { width: u32 },
    /// `target` is `None` when the host could not resolve one
    PointerDown { target: Option<T> },
    KeyDown { key: String },
}

impl<T> InteractionEvent<T> {
    pub fn key(key: impl Into<String>) -> Self {
        InteractionEvent::KeyDown { key: key.into() }
    }

    pub fn pointer_down(target: T) -> Self {
        InteractionEvent::PointerDown {
            target: Some(target),
        }
    }
}

/// Capability to subscribe to host events.
///
/// Implementations own whatever keeps a listener alive and release it in
/// `detach`. Events are fed back to the navbar by the host, not through
/// this trait.
pub trait InteractionSource {
    type Handle;

    fn attach(&mut self, kind: ListenerKind) -> Self::Handle;

    fn detach(&mut self, handle: Self::Handle);
}

/// A screen area belonging to one menu (trigger plus panel)
pub trait Region<T> {
    fn contains(&self, target: &T) -> bool;
}

/// Maps each side to its mounted region
#[derive(Debug, Clone)]
pub struct RegionRegistry<R> {
    regions: [Option<R>; 3],
}

impl<R> Default for RegionRegistry<R> {
    fn default() -> Self {
        Self {
            regions: [None, None, None],
        }
    }
}

impl<R> RegionRegistry<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace the region of a side
    pub fn register(&mut self, side: MenuSide, region: R) -> Option<R> {
        self.regions[side.index()].replace(region)
    }

    pub fn unregister(&mut self, side: MenuSide) -> Option<R> {
        self.regions[side.index()].take()
    }

    pub fn get(&self, side: MenuSide) -> Option<&R> {
        self.regions[side.index()].as_ref()
    }

    pub fn len(&self) -> usize {
        self.regions.iter().filter(|r| r.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Side whose region holds `target`, if any
    pub fn side_of<T>(&self, target: &T) -> Option<MenuSide>
    where
        R: Region<T>,
    {
        MenuSide::all()
            .iter()
            .copied()
            .find(|side| self.get(*side).is_some_and(|r| r.contains(target)))
    }

    /// Whether `target` lies inside any registered region.
    /// Missing targets and unregistered sides count as outside.
    pub fn contains<T>(&self, target: Option<&T>) -> bool
    where
        R: Region<T>,
    {
        let Some(target) = target else {
            trace!("Pointer target unresolved, treating as outside");
            return false;
        };
        self.side_of(target).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ids(Vec<u32>);

    impl Region<u32> for Ids {
        fn contains(&self, target: &u32) -> bool {
            self.0.contains(target)
        }
    }

    #[test]
    fn test_registry_lookup() {
        let mut regions = RegionRegistry::new();
        regions.register(MenuSide::Left, Ids(vec![1, 2]));
        regions.register(MenuSide::Right, Ids(vec![7]));

        assert_eq!(regions.side_of(&2), Some(MenuSide::Left));
        assert_eq!(regions.side_of(&7), Some(MenuSide::Right));
        assert!(!regions.contains(Some(&5)));
        assert!(!regions.contains::<u32>(None));
        assert_eq!(regions.len(), 2);
    }

    #[test]
    fn test_unregistered_side_is_outside() {
        let mut regions = RegionRegistry::new();
        regions.register(MenuSide::User, Ids(vec![3]));
        assert!(regions.contains(Some(&3)));

        regions.unregister(MenuSide::User);
        assert!(!regions.contains(Some(&3)));
        assert!(regions.is_empty());
    }

    #[test]
    fn test_event_names() {
        assert_eq!(ListenerKind::PointerDown.event_name(), "pointerdown");
        assert_eq!(ListenerKind::KeyDown.event_name(), "keydown");
        assert_eq!(ListenerKind::Resize.event_name(), "resize");
    }
}
