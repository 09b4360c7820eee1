//! Integration tests for the settings registry and its TOML file

use keeper::adapters::file::TomlSettingsStore;
use keeper::core::persistence::SettingsPersistence;
use keeper::core::registry::SettingRegistry;
use keeper::domain::{ConsoleError, SettingValue};
use std::collections::BTreeMap;
use std::fs;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

fn pairs(registry: &SettingRegistry) -> BTreeMap<(String, String), SettingValue> {
    registry
        .snapshot()
        .into_iter()
        .flat_map(|section| section.items)
        .map(|item| ((item.section, item.key), item.current))
        .collect()
}

fn setup() -> (TempDir, SettingsPersistence) {
    let dir = TempDir::new().unwrap();
    let store = TomlSettingsStore::new(dir.path().join("settings.toml"));
    (dir, SettingsPersistence::new(Arc::new(store)))
}

#[test]
fn test_save_then_load_reproduces_values() {
    let (_dir, persistence) = setup();
    let registry = SettingRegistry::server().unwrap();

    let outcome = registry.update_many([
        ("MaxLevel", "70"),
        ("AllowLogin", "off"),
        ("RelogDelay", "1.02:03:04"),
        ("ExperienceRate", "3"),
        ("BossDropRate", "2.5"),
        ("DefaultAttackMode", "guild"),
        ("ReleaseDate", "2024-06-01 18:30"),
    ]);
    assert!(outcome.all_ok(), "{outcome}");

    let report = persistence.save(&registry).unwrap();
    assert_eq!(report.receipt.checksum.len(), 64);
    let saved = pairs(&registry);

    let fresh = SettingRegistry::server().unwrap();
    let loaded = persistence.load(&fresh).unwrap();
    assert!(loaded.unmatched.is_empty());
    assert_eq!(loaded.applied, saved.len());
    assert_eq!(pairs(&fresh), saved);
}

#[test]
fn test_save_keeps_section_order() {
    let (dir, persistence) = setup();
    let registry = SettingRegistry::server().unwrap();
    persistence.save(&registry).unwrap();

    let text = fs::read_to_string(dir.path().join("settings.toml")).unwrap();
    let headers: Vec<String> = text
        .lines()
        .filter(|line| line.starts_with('['))
        .map(|line| line.trim_matches(|c| c == '[' || c == ']').to_string())
        .collect();
    assert_eq!(headers, registry.section_names());
}

#[test]
fn test_update_many_is_not_transactional() {
    let registry = SettingRegistry::server().unwrap();
    let before = registry.get("RelogDelay").unwrap();

    let outcome = registry.update_many([("MaxLevel", "65"), ("RelogDelay", "whenever")]);

    assert!(!outcome.all_ok());
    assert_eq!(outcome.updated_count(), 1);
    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.failures[0].key, "RelogDelay");
    assert_eq!(registry.get("MaxLevel").unwrap(), SettingValue::I32(65));
    assert_eq!(registry.get("RelogDelay").unwrap(), before);
}

#[test]
fn test_load_keeps_values_missing_from_file() {
    let (dir, persistence) = setup();
    fs::write(dir.path().join("settings.toml"), "[Players]\nMaxLevel = 40\n").unwrap();

    let registry = SettingRegistry::server().unwrap();
    registry.update_one("RelogDelay", "5").unwrap();

    let report = persistence.load(&registry).unwrap();
    assert_eq!(report.applied, 1);
    assert_eq!(registry.get("MaxLevel").unwrap(), SettingValue::I32(40));
    assert_eq!(
        registry.get("RelogDelay").unwrap(),
        SettingValue::Duration(Duration::from_secs(300))
    );
}

#[test]
fn test_load_reports_unmatched_entries() {
    let (dir, persistence) = setup();
    fs::write(
        dir.path().join("settings.toml"),
        "[Players]\nMaxLevel = 40\nRetiredSetting = true\n\n[Network]\nMaxLevel = 1\n",
    )
    .unwrap();

    let registry = SettingRegistry::server().unwrap();
    let report = persistence.load(&registry).unwrap();

    assert_eq!(report.applied, 1);
    assert_eq!(
        report.unmatched,
        vec!["Players.RetiredSetting".to_string(), "Network.MaxLevel".to_string()]
    );
    assert_eq!(registry.get("MaxLevel").unwrap(), SettingValue::I32(40));
}

#[test]
fn test_bad_file_leaves_registry_untouched() {
    let (dir, persistence) = setup();
    let registry = SettingRegistry::server().unwrap();
    let before = pairs(&registry);

    // Missing
    assert!(matches!(persistence.load(&registry), Err(ConsoleError::Persistence(_))));

    // Unparseable
    fs::write(dir.path().join("settings.toml"), "[Players\nMaxLevel = ").unwrap();
    assert!(matches!(persistence.load(&registry), Err(ConsoleError::Persistence(_))));

    // One good value and one of the wrong kind
    fs::write(
        dir.path().join("settings.toml"),
        "[Players]\nMaxLevel = 99\n\n[Control]\nRelogDelay = \"soon\"\n",
    )
    .unwrap();
    assert!(matches!(persistence.load(&registry), Err(ConsoleError::Persistence(_))));

    assert_eq!(pairs(&registry), before);
}

#[test]
fn test_failed_save_leaves_registry_untouched() {
    let dir = TempDir::new().unwrap();
    let store = TomlSettingsStore::new(dir.path().join("missing").join("settings.toml"));
    let persistence = SettingsPersistence::new(Arc::new(store));

    let registry = SettingRegistry::server().unwrap();
    registry.update_one("MaxLevel", "55").unwrap();

    assert!(matches!(persistence.save(&registry), Err(ConsoleError::Persistence(_))));
    assert_eq!(registry.get("MaxLevel").unwrap(), SettingValue::I32(55));
}
