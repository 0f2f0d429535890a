//! Menu sides, entries and the signed-in user

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the dropdown menus on the compact bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuSide {
    /// Hamburger on the far left, primary navigation
    Left,
    /// Avatar button, account summary and logout
    User,
    /// Hamburger on the far right, secondary links
    Right,
}

impl MenuSide {
    /// All sides in render order
    pub fn all() -> &'static [MenuSide] {
        &[MenuSide::Left, MenuSide::User, MenuSide::Right]
    }

    pub fn name(&self) -> &'static str {
        match self {
            MenuSide::Left => "left",
            MenuSide::User => "user",
            MenuSide::Right => "right",
        }
    }

    /// Accessible label of the trigger button
    pub fn trigger_label(&self) -> &'static str {
        match self {
            MenuSide::Left => "Open navigation menu",
            MenuSide::User => "Open user menu",
            MenuSide::Right => "Open options menu",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            MenuSide::Left => 0,
            MenuSide::User => 1,
            MenuSide::Right => 2,
        }
    }
}

impl fmt::Display for MenuSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MenuSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(MenuSide::Left),
            "user" | "account" => Ok(MenuSide::User),
            "right" => Ok(MenuSide::Right),
            other => Err(format!(
                "unknown menu side '{}' (expected left, user or right)",
                other
            )),
        }
    }
}

/// A static navigation link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub label: String,
    /// Client-side route, always absolute (`/dashboard`)
    pub href: String,
}

impl MenuEntry {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Identity shown in the account menu
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserIdentity {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }

    /// Avatar letter: first character of the email, else of the name, else `?`
    pub fn initial(&self) -> String {
        [self.email.as_deref(), self.name.as_deref()]
            .into_iter()
            .flatten()
            .find_map(|s| s.trim().chars().next())
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string())
    }

    /// Summary line of the account panel (email preferred)
    pub fn summary(&self) -> &str {
        self.email
            .as_deref()
            .filter(|e| !e.trim().is_empty())
            .or(self.name.as_deref())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_prefers_email() {
        let user = UserIdentity::new("Test User", "test.user@email.com");
        assert_eq!(user.initial(), "T");

        let user = UserIdentity::new("Zed", "alice@example.com");
        assert_eq!(user.initial(), "A");
    }

    #[test]
    fn test_initial_falls_back_to_name_then_question_mark() {
        let user = UserIdentity {
            name: Some("bob".to_string()),
            email: Some("   ".to_string()),
        };
        assert_eq!(user.initial(), "B");
        assert_eq!(UserIdentity::default().initial(), "?");
    }

    #[test]
    fn test_summary() {
        let user = UserIdentity::new("Test User", "test.user@email.com");
        assert_eq!(user.summary(), "test.user@email.com");

        let name_only = UserIdentity {
            name: Some("Test User".to_string()),
            email: None,
        };
        assert_eq!(name_only.summary(), "Test User");
    }

    #[test]
    fn test_side_parse_roundtrip() {
        for side in MenuSide::all() {
            assert_eq!(side.name().parse::<MenuSide>().unwrap(), *side);
        }
        assert_eq!("Account".parse::<MenuSide>().unwrap(), MenuSide::User);
        assert!("middle".parse::<MenuSide>().is_err());
    }
}
