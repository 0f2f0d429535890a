//! Browser implementation of the interaction source
//!
//! All three global listeners sit on `window` through leptos'
//! `window_event_listener`; the returned handle is what detach removes.

use leptos::ev;
use leptos::leptos_dom::helpers::{window, window_event_listener, WindowListenerHandle};
use navmenu_core::{InteractionEvent, InteractionSource, ListenerKind, Region};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, Node};

/// Callback the source feeds translated events into
pub type Dispatch = Rc<dyn Fn(InteractionEvent<Node>)>;

/// Current `window.innerWidth` in CSS pixels
pub fn window_width() -> u32 {
    window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .map(|w| w.max(0.0) as u32)
        .unwrap_or(0)
}

pub struct DomInteractionSource {
    dispatch: Dispatch,
}

impl DomInteractionSource {
    pub fn new(dispatch: Dispatch) -> Self {
        Self { dispatch }
    }
}

impl InteractionSource for DomInteractionSource {
    type Handle = WindowListenerHandle;

    fn attach(&mut self, kind: ListenerKind) -> WindowListenerHandle {
        let dispatch = Rc::clone(&self.dispatch);
        match kind {
            ListenerKind::Resize => window_event_listener(ev::resize, move |_| {
                dispatch(InteractionEvent::Resize {
                    width: window_width(),
                })
            }),
            ListenerKind::PointerDown => window_event_listener(ev::pointerdown, move |e| {
                dispatch(InteractionEvent::PointerDown {
                    target: e.target().and_then(|t| t.dyn_into::<Node>().ok()),
                })
            }),
            ListenerKind::KeyDown => window_event_listener(ev::keydown, move |e| {
                dispatch(InteractionEvent::KeyDown { key: e.key() })
            }),
        }
    }

    fn detach(&mut self, handle: WindowListenerHandle) {
        handle.remove();
    }
}

/// A mounted menu container element
pub struct DomRegion(pub Element);

impl Region<Node> for DomRegion {
    fn contains(&self, target: &Node) -> bool {
        self.0.contains(Some(target))
    }
}
