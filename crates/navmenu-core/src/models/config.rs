//! Navbar configuration: title, breakpoint, entry tables and user
//!
//! Loaded once from `.json` or `.yaml`/`.yml`. Every field has a default so a
//! partial file only overrides what it names.

use crate::error::NavError;
use crate::models::menu::{MenuEntry, MenuSide, UserIdentity};
use crate::viewport::DEFAULT_COMPACT_BREAKPOINT;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    /// Brand label shown next to the left hamburger
    pub title: String,
    /// Widths strictly below this are compact
    pub compact_breakpoint: u32,
    /// Primary navigation (left hamburger)
    pub left_entries: Vec<MenuEntry>,
    /// Secondary links (right hamburger)
    pub right_entries: Vec<MenuEntry>,
    /// Signed-in user; `None` hides the account menu
    pub user: Option<UserIdentity>,
    pub logout_path: String,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            title: "AutoQA Pro".to_string(),
            compact_breakpoint: DEFAULT_COMPACT_BREAKPOINT,
            left_entries: vec![
                MenuEntry::new("Dashboard", "/dashboard"),
                MenuEntry::new("Test Cases", "/test-cases"),
                MenuEntry::new("Duplicates", "/duplicates"),
                MenuEntry::new("Jira Integration", "/jira"),
                MenuEntry::new("Help", "/help"),
            ],
            right_entries: vec![
                MenuEntry::new("Home", "/"),
                MenuEntry::new("Settings", "/settings"),
            ],
            user: Some(UserIdentity::new("Test User", "test.user@email.com")),
            logout_path: "/logout".to_string(),
        }
    }
}

impl NavbarConfig {
    /// Load and validate a config file, picking the parser by extension
    pub fn load(path: &Path) -> Result<Self, NavError> {
        if !path.exists() {
            return Err(NavError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let content = std::fs::read_to_string(path).map_err(|source| NavError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let config: NavbarConfig = match ext.as_deref() {
            Some("json") => {
                serde_json::from_str(&content).map_err(|source| NavError::JsonParse {
                    path: path.to_path_buf(),
                    message: source.to_string(),
                    source,
                })?
            }
            Some("yaml") | Some("yml") => {
                serde_yaml::from_str(&content).map_err(|source| NavError::YamlParse {
                    path: path.to_path_buf(),
                    message: source.to_string(),
                    source,
                })?
            }
            _ => {
                return Err(NavError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        config.validate()?;
        info!(
            path = %path.display(),
            left = config.left_entries.len(),
            right = config.right_entries.len(),
            "Loaded navbar config"
        );
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> Result<Self, NavError> {
        let config: NavbarConfig =
            serde_json::from_str(content).map_err(|source| NavError::JsonParse {
                path: "<inline>".into(),
                message: source.to_string(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, NavError> {
        let config: NavbarConfig =
            serde_yaml::from_str(content).map_err(|source| NavError::YamlParse {
                path: "<inline>".into(),
                message: source.to_string(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), NavError> {
        if self.title.trim().is_empty() {
            return Err(NavError::invalid("title must not be empty"));
        }
        if self.compact_breakpoint == 0 {
            return Err(NavError::invalid("compact_breakpoint must be greater than 0"));
        }
        if !self.logout_path.starts_with('/') {
            return Err(NavError::invalid(format!(
                "logout_path '{}' must start with '/'",
                self.logout_path
            )));
        }

        for (side, entries) in [
            (MenuSide::Left, &self.left_entries),
            (MenuSide::Right, &self.right_entries),
        ] {
            let mut seen = HashSet::new();
            for entry in entries {
                if entry.label.trim().is_empty() {
                    return Err(NavError::invalid(format!(
                        "{} menu has an entry with an empty label ({})",
                        side, entry.href
                    )));
                }
                if !entry.href.starts_with('/') {
                    return Err(NavError::invalid(format!(
                        "{} menu entry '{}' has path '{}' that does not start with '/'",
                        side, entry.label, entry.href
                    )));
                }
                // Paths key the rendered entries
                if !seen.insert(entry.href.as_str()) {
                    return Err(NavError::invalid(format!(
                        "{} menu lists path '{}' more than once",
                        side, entry.href
                    )));
                }
            }
        }

        debug!("Navbar config validated");
        Ok(())
    }

    /// Entries listed in a side's panel (the account menu has none)
    pub fn entries(&self, side: MenuSide) -> &[MenuEntry] {
        match side {
            MenuSide::Left => &self.left_entries,
            MenuSide::Right => &self.right_entries,
            MenuSide::User => &[],
        }
    }

    /// Whether a side has anything to show
    pub fn is_enabled(&self, side: MenuSide) -> bool {
        match side {
            MenuSide::Left => !self.left_entries.is_empty(),
            MenuSide::Right => !self.right_entries.is_empty(),
            MenuSide::User => self.user.is_some(),
        }
    }

    pub fn enabled_sides(&self) -> impl Iterator<Item = MenuSide> + '_ {
        MenuSide::all()
            .iter()
            .copied()
            .filter(move |side| self.is_enabled(*side))
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = NavbarConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.left_entries.len(), 5);
        assert_eq!(config.right_entries[0].href, "/");
        assert_eq!(config.enabled_sides().count(), 3);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = NavbarConfig::from_yaml_str("title: Acme\ncompact_breakpoint: 640\n").unwrap();
        assert_eq!(config.title, "Acme");
        assert_eq!(config.compact_breakpoint, 640);
        assert_eq!(config.logout_path, "/logout");
        assert_eq!(config.left_entries, NavbarConfig::default().left_entries);
    }

    #[test]
    fn test_two_menu_variant() {
        let config = NavbarConfig::from_json_str(r#"{"right_entries": [], "user": null}"#).unwrap();
        let sides: Vec<_> = config.enabled_sides().collect();
        assert_eq!(sides, vec![MenuSide::Left]);
        assert!(config.entries(MenuSide::User).is_empty());
    }

    #[test]
    fn test_rejects_empty_title() {
        let config = NavbarConfig {
            title: "  ".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(NavError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_breakpoint() {
        let config = NavbarConfig {
            compact_breakpoint: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_relative_path() {
        let mut config = NavbarConfig::default();
        config.left_entries.push(MenuEntry::new("Reports", "reports"));
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("'reports'"));
    }

    #[test]
    fn test_rejects_empty_label() {
        let mut config = NavbarConfig::default();
        config.right_entries.push(MenuEntry::new("", "/about"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_duplicate_path_in_same_menu() {
        let mut config = NavbarConfig::default();
        config
            .left_entries
            .push(MenuEntry::new("Dash again", "/dashboard"));
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_same_path_in_both_menus_is_fine() {
        let mut config = NavbarConfig::default();
        config.right_entries.push(MenuEntry::new("Help", "/help"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_relative_logout_path() {
        let config = NavbarConfig {
            logout_path: "logout".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = NavbarConfig::from_json_str("{ title: ").unwrap_err();
        assert!(matches!(err, NavError::JsonParse { .. }));
        assert!(err.suggestion().is_some());
    }
}
