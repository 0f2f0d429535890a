//! CLI command handlers
//!
//! Each handler returns the text to print so it can be tested directly.

use anyhow::{anyhow, Context, Result};
use navmenu_core::{
    InteractionSource, ListenerKind, MenuSide, NavError, NavbarConfig, ResponsiveNavbar,
};
use std::fmt::Write;
use std::path::Path;
use tracing::debug;

/// Source for a navbar that never receives host events
struct HeadlessSource;

impl InteractionSource for HeadlessSource {
    type Handle = ListenerKind;

    fn attach(&mut self, kind: ListenerKind) -> ListenerKind {
        debug!(event = kind.event_name(), "Headless listener attached");
        kind
    }

    fn detach(&mut self, kind: ListenerKind) {
        debug!(event = kind.event_name(), "Headless listener detached");
    }
}

/// Turn a config error into an anyhow error carrying its suggestion
fn with_suggestion(err: NavError) -> anyhow::Error {
    match err.suggestion() {
        Some(hint) => anyhow!("{}\n  hint: {}", err, hint),
        None => anyhow!(err),
    }
}

fn load_config(path: Option<&Path>) -> Result<NavbarConfig> {
    match path {
        Some(path) => NavbarConfig::load(path)
            .map_err(with_suggestion)
            .with_context(|| format!("Failed to load navbar config {}", path.display())),
        None => Ok(NavbarConfig::default()),
    }
}

pub fn run_check(path: &Path) -> Result<String> {
    let config = load_config(Some(path))?;

    let mut out = String::new();
    writeln!(out, "✓ {} is valid", path.display())?;
    writeln!(out, "  title:       {}", config.title)?;
    writeln!(out, "  breakpoint:  {}px", config.compact_breakpoint)?;
    for side in MenuSide::all() {
        let status = if config.is_enabled(*side) {
            match side {
                MenuSide::User => config
                    .user
                    .as_ref()
                    .map(|u| u.summary().to_string())
                    .unwrap_or_default(),
                MenuSide::Left | MenuSide::Right => {
                    format!("{} entries", config.entries(*side).len())
                }
            }
        } else {
            "disabled".to_string()
        };
        writeln!(out, "  {:<12} {}", format!("{}:", side), status)?;
    }
    writeln!(out, "  logout:      {}", config.logout_path)?;
    Ok(out)
}

pub fn run_render(config_path: Option<&Path>, width: u32, open: Option<MenuSide>) -> Result<String> {
    let config = load_config(config_path)?;
    let mut navbar: ResponsiveNavbar<HeadlessSource, ()> =
        ResponsiveNavbar::new(config, HeadlessSource);
    navbar.mount(width);

    if let Some(side) = open {
        if !navbar.config().is_enabled(side) {
            return Err(anyhow!("The {} menu is disabled by this config", side));
        }
        navbar.toggle(side);
    }

    Ok(match navbar.view() {
        Some(view) => view.outline(),
        None => format!(
            "(wide viewport: {}px >= {}px, nothing rendered)\n",
            width,
            navbar.config().compact_breakpoint
        ),
    })
}

pub fn run_default_config(format: &str) -> Result<String> {
    let config = NavbarConfig::default();
    match format {
        "json" => {
            let mut json = config
                .to_json_pretty()
                .context("Failed to serialize config")?;
            json.push('\n');
            Ok(json)
        }
        "yaml" => config.to_yaml().context("Failed to serialize config"),
        other => Err(anyhow!("Unsupported format '{}'", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_render_wide_prints_nothing_rendered() {
        let out = run_render(None, 1024, None).unwrap();
        assert!(out.contains("nothing rendered"));
    }

    #[test]
    fn test_render_wide_ignores_open_request() {
        let out = run_render(None, 1024, Some(MenuSide::Left)).unwrap();
        assert!(out.contains("nothing rendered"));
    }

    #[test]
    fn test_render_compact_with_left_open() {
        let out = run_render(None, 600, Some(MenuSide::Left)).unwrap();
        assert!(out.contains("[left] ☰ aria-label=\"Open navigation menu\" aria-expanded=true"));
        assert!(out.contains("menuitem \"Dashboard\" -> /dashboard"));
        assert!(out.contains("[user] T"));
    }

    #[test]
    fn test_render_disabled_side_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nav.json");
        std::fs::write(&path, r#"{"right_entries": []}"#).unwrap();

        let err = run_render(Some(&path), 600, Some(MenuSide::Right)).unwrap_err();
        assert!(err.to_string().contains("disabled"));
    }

    #[test]
    fn test_check_reports_summary() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nav.yaml");
        std::fs::write(&path, "title: Acme\nuser: null\n").unwrap();

        let out = run_check(&path).unwrap();
        assert!(out.contains("title:       Acme"));
        assert!(out.contains("left:        5 entries"));
        assert!(out.contains("user:        disabled"));
    }

    #[test]
    fn test_check_missing_file_has_hint() {
        let dir = TempDir::new().unwrap();
        let err = run_check(&dir.path().join("nope.yaml")).unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.contains("hint: Check if file exists"));
    }

    #[test]
    fn test_default_config_outputs_parse_back() {
        let yaml = run_default_config("yaml").unwrap();
        assert_eq!(
            NavbarConfig::from_yaml_str(&yaml).unwrap(),
            NavbarConfig::default()
        );
        let json = run_default_config("json").unwrap();
        assert_eq!(
            NavbarConfig::from_json_str(&json).unwrap(),
            NavbarConfig::default()
        );
    }
}
