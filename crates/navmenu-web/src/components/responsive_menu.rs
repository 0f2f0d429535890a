//! Responsive navbar with hamburger dropdowns for compact viewports

use leptos::html::Div;
use leptos::prelude::*;
use navmenu_core::navbar::ENTER_KEY;
use navmenu_core::render::{MenuView, PanelContent, PanelView};
use navmenu_core::{
    render, InteractionEvent, MenuSide, NavSnapshot, NavbarConfig, OpenState, ResponsiveNavbar,
    ViewportClass,
};
use std::rc::Rc;

use crate::dom::{window_width, DomInteractionSource, DomRegion};
use crate::navigator::RouterNavigator;

type WebNavbar = ResponsiveNavbar<DomInteractionSource, DomRegion>;

/// Container element of each menu, used for outside-click detection
#[derive(Clone, Copy)]
struct MenuRefs {
    left: NodeRef<Div>,
    user: NodeRef<Div>,
    right: NodeRef<Div>,
}

impl MenuRefs {
    fn new() -> Self {
        Self {
            left: NodeRef::new(),
            user: NodeRef::new(),
            right: NodeRef::new(),
        }
    }

    fn get(&self, side: MenuSide) -> NodeRef<Div> {
        match side {
            MenuSide::Left => self.left,
            MenuSide::User => self.user,
            MenuSide::Right => self.right,
        }
    }

    /// Point the registry at whatever is mounted right now
    fn sync(&self, navbar: &mut WebNavbar) {
        for side in MenuSide::all() {
            match self.get(*side).get_untracked() {
                Some(el) => navbar.register_region(*side, DomRegion(el.into())),
                None => navbar.unregister_region(*side),
            }
        }
    }
}

/// Handles shared by every trigger and entry
#[derive(Clone, Copy)]
struct MenuActions {
    navbar: StoredValue<Option<WebNavbar>, LocalStorage>,
    navigator: StoredValue<RouterNavigator, LocalStorage>,
    snapshot: RwSignal<NavSnapshot>,
}

impl MenuActions {
    /// Run `f` on the navbar and publish the resulting state
    fn apply(&self, f: impl FnOnce(&mut WebNavbar)) {
        let next = self
            .navbar
            .try_update_value(|slot| {
                slot.as_mut().map(|navbar| {
                    f(navbar);
                    navbar.snapshot()
                })
            })
            .flatten();
        if let Some(next) = next {
            if next != self.snapshot.get_untracked() {
                self.snapshot.set(next);
            }
        }
    }

    fn toggle(&self, side: MenuSide) {
        self.apply(|navbar| {
            navbar.toggle(side);
        });
    }

    fn select(&self, side: MenuSide, index: usize) {
        self.navigator.update_value(|nav| {
            self.apply(|navbar| {
                navbar.select(side, index, nav);
            })
        });
    }

    fn entry_key(&self, side: MenuSide, index: usize, key: &str) {
        self.navigator.update_value(|nav| {
            self.apply(|navbar| {
                navbar.entry_key(side, index, key, nav);
            })
        });
    }

    fn logout(&self) {
        self.navigator.update_value(|nav| {
            self.apply(|navbar| {
                navbar.logout(nav);
            })
        });
    }
}

/// Compact-only navigation bar: left hamburger, title, account menu and
/// right hamburger. Renders nothing on wide viewports.
#[component]
pub fn ResponsiveMenu(
    /// Title, breakpoint, entry tables and user (defaults when omitted)
    #[prop(optional)]
    config: Option<NavbarConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let refs = MenuRefs::new();

    let actions = MenuActions {
        navbar: StoredValue::new_local(None),
        navigator: StoredValue::new_local(RouterNavigator::from_router(
            config.logout_path.clone(),
        )),
        snapshot: RwSignal::new(NavSnapshot {
            viewport: ViewportClass::Wide,
            open: OpenState::CLOSED,
        }),
    };

    // Global events come back through here
    let dispatch = Rc::new(move |event: InteractionEvent<web_sys::Node>| {
        let pointer = matches!(event, InteractionEvent::PointerDown { .. });
        actions.apply(move |navbar| {
            if pointer {
                refs.sync(navbar);
            }
            navbar.handle(event);
        });
    });

    let config = StoredValue::new(config);
    actions.navbar.set_value(Some(ResponsiveNavbar::new(
        config.get_value(),
        DomInteractionSource::new(dispatch),
    )));
    actions.apply(|navbar| navbar.mount(window_width()));

    on_cleanup(move || {
        actions.navbar.try_update_value(|slot| {
            if let Some(navbar) = slot.as_mut() {
                navbar.teardown();
            }
        });
    });

    // Bar layout only changes with the viewport class; open state flows
    // into each menu separately so focus survives toggles
    let viewport = Memo::new(move |_| actions.snapshot.get().viewport);

    move || {
        config
            .with_value(|config| render(viewport.get(), OpenState::CLOSED, config))
            .map(|bar| {
                let right_group = bar
                    .right_group
                    .into_iter()
                    .map(|menu| {
                        let node_ref = refs.get(menu.side);
                        view! { <MenuContainer menu node_ref actions config /> }
                    })
                    .collect_view();

                view! {
                    <nav class="responsive-navbar">
                        <div class="navbar-start">
                            {bar.left.map(|menu| {
                                view! { <MenuContainer menu node_ref=refs.left actions config /> }
                            })}
                            <span class="navbar-title">{bar.title}</span>
                        </div>
                        <div class="navbar-spacer"></div>
                        <div class="navbar-end">{right_group}</div>
                    </nav>
                }
            })
    }
}

/// Dropdown panel body
fn panel_view(side: MenuSide, panel: PanelView, actions: MenuActions) -> impl IntoView {
    let content = match panel.content {
        PanelContent::Links(entries) => entries
            .into_iter()
            .map(|entry| {
                let index = entry.index;
                view! {
                    <a
                        class="dropdown-item"
                        href=entry.href
                        role="menuitem"
                        tabindex="0"
                        on:click=move |ev| {
                            ev.prevent_default();
                            actions.select(side, index);
                        }
                        on:keydown=move |ev| {
                            let key = ev.key();
                            if key == ENTER_KEY {
                                ev.prevent_default();
                            }
                            actions.entry_key(side, index, &key);
                        }
                    >
                        {entry.label}
                    </a>
                }
            })
            .collect_view()
            .into_any(),
        PanelContent::Account {
            summary,
            logout_label,
        } => view! {
            <div class="dropdown-summary">{summary}</div>
            <hr class="dropdown-divider" />
            <button
                type="button"
                class="btn btn-primary dropdown-logout"
                role="menuitem"
                on:click=move |_| actions.logout()
            >
                {logout_label}
            </button>
        }
        .into_any(),
    };

    view! {
        <div
            class=format!("dropdown {}", panel.anchor.class())
            role="menu"
            tabindex="-1"
            on:click=|ev| ev.stop_propagation()
        >
            {content}
        </div>
    }
}

/// Trigger button plus its dropdown panel. The button is built once; only
/// `aria-expanded` and the panel follow the open state.
#[component]
fn MenuContainer(
    menu: MenuView,
    node_ref: NodeRef<Div>,
    actions: MenuActions,
    config: StoredValue<NavbarConfig>,
) -> impl IntoView {
    let side = menu.side;
    let trigger = menu.trigger;
    let trigger_class = match side {
        MenuSide::User => "icon-button avatar-button",
        MenuSide::Left | MenuSide::Right => "icon-button",
    };

    let live = Memo::new(move |_| {
        let snapshot = actions.snapshot.get();
        config
            .with_value(|config| render(snapshot.viewport, snapshot.open, config))
            .and_then(|bar| bar.menu(side).cloned())
    });
    let expanded = move || {
        live.with(|menu| menu.as_ref().is_some_and(|m| m.trigger.aria_expanded))
            .to_string()
    };
    let panel = move || {
        live.get()
            .and_then(|menu| menu.panel)
            .map(|panel| panel_view(side, panel, actions))
    };

    view! {
        <div class="menu-container" node_ref=node_ref>
            <button
                type="button"
                class=trigger_class
                aria-label=trigger.aria_label
                aria-haspopup=trigger.aria_haspopup.to_string()
                aria-expanded=expanded
                tabindex="0"
                on:click=move |ev| {
                    ev.stop_propagation();
                    actions.toggle(side);
                }
            >
                <span aria-hidden="true">{trigger.glyph}</span>
            </button>
            {panel}
        </div>
    }
}
