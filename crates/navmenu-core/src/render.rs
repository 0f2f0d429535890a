//! Menu renderer: (viewport, open state, config) -> view model
//!
//! Pure and host-independent. The web crate maps the result to DOM and the
//! CLI prints it with [`NavbarView::outline`].

use crate::models::{MenuSide, NavbarConfig};
use crate::state::OpenState;
use crate::viewport::ViewportClass;
use std::fmt::Write;

pub const HAMBURGER_GLYPH: &str = "☰";
pub const LOGOUT_LABEL: &str = "Logout";

/// Which edge of its trigger a panel hangs from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAnchor {
    Left,
    Right,
}

impl PanelAnchor {
    pub fn class(&self) -> &'static str {
        match self {
            PanelAnchor::Left => "dropdown-left",
            PanelAnchor::Right => "dropdown-right",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerView {
    pub aria_label: &'static str,
    pub aria_expanded: bool,
    pub aria_haspopup: bool,
    /// Hamburger glyph or the user's initial
    pub glyph: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView {
    pub index: usize,
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelContent {
    Links(Vec<EntryView>),
    Account { summary: String, logout_label: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub anchor: PanelAnchor,
    pub content: PanelContent,
}

/// One menu container: trigger plus its panel when open
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuView {
    pub side: MenuSide,
    pub trigger: TriggerView,
    pub panel: Option<PanelView>,
}

/// Compact navigation bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavbarView {
    pub title: String,
    /// Left hamburger, if enabled
    pub left: Option<MenuView>,
    /// Account and right hamburger, in that order, if enabled
    pub right_group: Vec<MenuView>,
}

impl NavbarView {
    pub fn menus(&self) -> impl Iterator<Item = &MenuView> {
        self.left.iter().chain(self.right_group.iter())
    }

    pub fn menu(&self, side: MenuSide) -> Option<&MenuView> {
        self.menus().find(|m| m.side == side)
    }

    pub fn open_panel(&self) -> Option<(MenuSide, &PanelView)> {
        self.menus()
            .find_map(|m| m.panel.as_ref().map(|panel| (m.side, panel)))
    }

    /// Indented text outline of the bar
    pub fn outline(&self) -> String {
        let mut out = String::from("nav.responsive-navbar\n");
        if let Some(left) = &self.left {
            write_menu(&mut out, left);
        }
        let _ = writeln!(out, "  title \"{}\"", self.title);
        out.push_str("  spacer\n");
        for menu in &self.right_group {
            write_menu(&mut out, menu);
        }
        out
    }
}

fn write_menu(out: &mut String, menu: &MenuView) {
    let _ = writeln!(
        out,
        "  [{}] {} aria-label=\"{}\" aria-expanded={}",
        menu.side, menu.trigger.glyph, menu.trigger.aria_label, menu.trigger.aria_expanded
    );
    let Some(panel) = &menu.panel else {
        return;
    };
    let _ = writeln!(out, "    menu ({})", panel.anchor.class());
    match &panel.content {
        PanelContent::Links(entries) => {
            for entry in entries {
                let _ = writeln!(out, "      menuitem \"{}\" -> {}", entry.label, entry.href);
            }
        }
        PanelContent::Account {
            summary,
            logout_label,
        } => {
            let _ = writeln!(out, "      {}", summary);
            out.push_str("      ---\n");
            let _ = writeln!(out, "      button \"{}\"", logout_label);
        }
    }
}

/// Render the bar. Wide viewports render nothing.
pub fn render(viewport: ViewportClass, open: OpenState, config: &NavbarConfig) -> Option<NavbarView> {
    if !viewport.is_compact() {
        return None;
    }

    let menu = |side: MenuSide| -> Option<MenuView> {
        if !config.is_enabled(side) {
            return None;
        }
        let expanded = open.is_open(side);
        let glyph = match (side, &config.user) {
            (MenuSide::User, Some(user)) => user.initial(),
            _ => HAMBURGER_GLYPH.to_string(),
        };
        let panel = expanded.then(|| panel_for(side, config));
        Some(MenuView {
            side,
            trigger: TriggerView {
                aria_label: side.trigger_label(),
                aria_expanded: expanded,
                aria_haspopup: true,
                glyph,
            },
            panel,
        })
    };

    Some(NavbarView {
        title: config.title.clone(),
        left: menu(MenuSide::Left),
        right_group: [MenuSide::User, MenuSide::Right]
            .into_iter()
            .filter_map(menu)
            .collect(),
    })
}

fn panel_for(side: MenuSide, config: &NavbarConfig) -> PanelView {
    let anchor = match side {
        MenuSide::Left => PanelAnchor::Left,
        MenuSide::User | MenuSide::Right => PanelAnchor::Right,
    };
    let content = match side {
        MenuSide::User => PanelContent::Account {
            summary: config
                .user
                .as_ref()
                .map(|u| u.summary().to_string())
                .unwrap_or_default(),
            logout_label: LOGOUT_LABEL,
        },
        MenuSide::Left | MenuSide::Right => PanelContent::Links(
            config
                .entries(side)
                .iter()
                .enumerate()
                .map(|(index, e)| EntryView {
                    index,
                    label: e.label.clone(),
                    href: e.href.clone(),
                })
                .collect(),
        ),
    };
    PanelView { anchor, content }
}
