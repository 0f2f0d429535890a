//! Integration tests for loading navbar config files from disk

use navmenu_core::{MenuSide, NavError, NavbarConfig};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_yaml_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("navbar.yaml");
    fs::write(
        &path,
        r#"
title: Acme QA
compact_breakpoint: 720
left_entries:
  - label: Runs
    href: /runs
  - label: Reports
    href: /reports
right_entries:
  - label: Home
    href: /
user:
  email: jane@acme.io
"#,
    )
    .unwrap();

    let config = NavbarConfig::load(&path).unwrap();
    assert_eq!(config.title, "Acme QA");
    assert_eq!(config.compact_breakpoint, 720);
    assert_eq!(config.entries(MenuSide::Left)[1].href, "/reports");
    assert_eq!(config.user.as_ref().unwrap().initial(), "J");
    assert_eq!(config.logout_path, "/logout");
}

#[test]
fn test_load_json_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("navbar.json");
    let original = NavbarConfig {
        title: "Json Bar".to_string(),
        ..Default::default()
    };
    fs::write(&path, original.to_json_pretty().unwrap()).unwrap();

    let loaded = NavbarConfig::load(&path).unwrap();
    assert_eq!(loaded, original);
}

#[test]
fn test_yaml_export_loads_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("navbar.yml");
    fs::write(&path, NavbarConfig::default().to_yaml().unwrap()).unwrap();

    assert_eq!(NavbarConfig::load(&path).unwrap(), NavbarConfig::default());
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = NavbarConfig::load(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, NavError::FileNotFound { .. }));
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("navbar.toml");
    fs::write(&path, "title = \"x\"").unwrap();

    let err = NavbarConfig::load(&path).unwrap_err();
    assert!(matches!(err, NavError::UnsupportedFormat { .. }));
}

#[test]
fn test_invalid_yaml_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.yaml");
    fs::write(&path, "left_entries: [ {label: ").unwrap();

    let err = NavbarConfig::load(&path).unwrap_err();
    assert!(matches!(err, NavError::YamlParse { .. }));
    assert!(err.to_string().contains("broken.yaml"));
}

#[test]
fn test_file_failing_validation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("navbar.json");
    fs::write(&path, r#"{"left_entries": [{"label": "Runs", "href": "runs"}]}"#).unwrap();

    let err = NavbarConfig::load(&path).unwrap_err();
    assert!(matches!(err, NavError::InvalidConfig { .. }));
}
