//! Integration tests for configuration loading and validation
//!
//! Note: Tests that modify environment variables should be run with --test-threads=1
//! to avoid interference between tests.

use keeper::config::{load_config, StoreBackend};
use keeper::domain::AccessLevel;
use secrecy::ExposeSecret;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("KEEPER_APPLICATION_LOG_LEVEL");
    std::env::remove_var("KEEPER_SETTINGS_PATH");
    std::env::remove_var("KEEPER_AUTH_CONSOLE_ACCESS_LEVEL");
    std::env::remove_var("KEEPER_AUTH_BOOTSTRAP_SECRET");
    std::env::remove_var("KEEPER_LOGGING_LOCAL_ENABLED");
    std::env::remove_var("TEST_KEEPER_BOOTSTRAP");
}

fn write_config(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    let temp_file = write_config(
        r#"
[application]
log_level = "debug"

[settings]
store = "file"
path = "/srv/zircon/settings.toml"

[auth]
store = "memory"
accounts_path = "/srv/zircon/accounts.json"
reserved_identifier = "root@zircon"
bootstrap_secret = "change-me"
console_access_level = "superadmin"

[logging]
local_enabled = false
local_path = "/tmp/keeper"
local_rotation = "hourly"
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.settings.store, StoreBackend::File);
    assert_eq!(config.settings.path, "/srv/zircon/settings.toml");
    assert_eq!(config.auth.store, StoreBackend::Memory);
    assert_eq!(config.auth.reserved_identifier, "root@zircon");
    assert_eq!(config.auth.console_access_level, AccessLevel::SuperAdmin);
    let secret: &str = config.auth.bootstrap_secret.as_ref().unwrap().expose_secret().as_ref();
    assert_eq!(secret, "change-me");
    assert!(!config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_load_empty_config_with_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    let temp_file = write_config("");

    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "info");
    assert_eq!(config.settings.store, StoreBackend::File);
    assert_eq!(config.settings.path, "./keeper-settings.toml");
    assert_eq!(config.auth.accounts_path, "./keeper-accounts.json");
    assert_eq!(config.auth.reserved_identifier, "admin@keeper.local");
    assert!(config.auth.bootstrap_secret.is_none());
    assert_eq!(config.auth.console_access_level, AccessLevel::Supervisor);
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "daily");
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("TEST_KEEPER_BOOTSTRAP", "from-env");

    let temp_file = write_config(
        r#"
[auth]
# bootstrap_secret = "${TEST_KEEPER_UNSET_IN_COMMENT}"
bootstrap_secret = "${TEST_KEEPER_BOOTSTRAP}"
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");
    let secret: &str = config.auth.bootstrap_secret.as_ref().unwrap().expose_secret().as_ref();
    assert_eq!(secret, "from-env");

    cleanup_env_vars();
}

#[test]
fn test_missing_env_var_is_reported() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config("[auth]\nbootstrap_secret = \"${TEST_KEEPER_BOOTSTRAP}\"\n");
    let err = load_config(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("TEST_KEEPER_BOOTSTRAP"));
}

#[test]
fn test_env_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("KEEPER_APPLICATION_LOG_LEVEL", "warn");
    std::env::set_var("KEEPER_SETTINGS_PATH", "/override/settings.toml");
    std::env::set_var("KEEPER_AUTH_CONSOLE_ACCESS_LEVEL", "admin");
    std::env::set_var("KEEPER_LOGGING_LOCAL_ENABLED", "false");

    let temp_file = write_config("[application]\nlog_level = \"debug\"\n");
    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "warn");
    assert_eq!(config.settings.path, "/override/settings.toml");
    assert_eq!(config.auth.console_access_level, AccessLevel::Admin);
    assert!(!config.logging.local_enabled);

    cleanup_env_vars();
}

#[test]
fn test_invalid_override_is_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("KEEPER_AUTH_CONSOLE_ACCESS_LEVEL", "overlord");

    let temp_file = write_config("");
    assert!(load_config(temp_file.path()).is_err());

    cleanup_env_vars();
}

#[test]
fn test_validation_errors() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    for content in [
        "[application]\nlog_level = \"loud\"\n",
        "[auth]\nconsole_access_level = \"guest\"\n",
        "[auth]\nreserved_identifier = \"  \"\n",
        "[logging]\nlocal_rotation = \"weekly\"\n",
        "[settings]\npath = \"\"\n",
    ] {
        let temp_file = write_config(content);
        let err = load_config(temp_file.path()).unwrap_err();
        assert!(
            err.to_string().contains("validation failed"),
            "{content}: {err}"
        );
    }
}

#[test]
fn test_missing_file() {
    let err = load_config("/nonexistent/keeper.toml").unwrap_err();
    assert!(err.to_string().contains("not found"));
}
