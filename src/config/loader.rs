//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{ConsoleConfig, StoreBackend};
use super::secret_string;
use crate::domain::errors::ConsoleError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into ConsoleConfig
/// 4. Applies environment variable overrides (KEEPER_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns [`ConsoleError::Configuration`] if the file cannot be read or
/// parsed, a referenced environment variable is missing, an override has
/// an invalid value, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use keeper::config::loader::load_config;
///
/// let config = load_config("keeper.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ConsoleConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConsoleError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ConsoleError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: ConsoleConfig = toml::from_str(&contents)
        .map_err(|e| ConsoleError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        ConsoleError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| ConsoleError::Configuration(e.to_string()))?;
    let mut lines = Vec::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_string());
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    processed_line = processed_line.replace(&format!("${{{var_name}}}"), &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        lines.push(processed_line);
    }

    if !missing_vars.is_empty() {
        return Err(ConsoleError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(lines.join("\n"))
}

fn parse_store(var: &str, value: &str) -> Result<StoreBackend> {
    match value.trim().to_ascii_lowercase().as_str() {
        "file" => Ok(StoreBackend::File),
        "memory" => Ok(StoreBackend::Memory),
        other => Err(ConsoleError::Configuration(format!(
            "{var}: invalid store '{other}'. Must be one of: file, memory"
        ))),
    }
}

/// Applies environment variable overrides using KEEPER_* prefix
///
/// Environment variables follow the pattern: KEEPER_<SECTION>_<KEY>
/// For example: KEEPER_SETTINGS_PATH, KEEPER_AUTH_CONSOLE_ACCESS_LEVEL
fn apply_env_overrides(config: &mut ConsoleConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("KEEPER_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Settings overrides
    if let Ok(val) = std::env::var("KEEPER_SETTINGS_STORE") {
        config.settings.store = parse_store("KEEPER_SETTINGS_STORE", &val)?;
    }
    if let Ok(val) = std::env::var("KEEPER_SETTINGS_PATH") {
        config.settings.path = val;
    }

    // Auth overrides
    if let Ok(val) = std::env::var("KEEPER_AUTH_STORE") {
        config.auth.store = parse_store("KEEPER_AUTH_STORE", &val)?;
    }
    if let Ok(val) = std::env::var("KEEPER_AUTH_ACCOUNTS_PATH") {
        config.auth.accounts_path = val;
    }
    if let Ok(val) = std::env::var("KEEPER_AUTH_RESERVED_IDENTIFIER") {
        config.auth.reserved_identifier = val;
    }
    if let Ok(val) = std::env::var("KEEPER_AUTH_BOOTSTRAP_SECRET") {
        config.auth.bootstrap_secret = Some(secret_string(val));
    }
    if let Ok(val) = std::env::var("KEEPER_AUTH_CONSOLE_ACCESS_LEVEL") {
        config.auth.console_access_level = val
            .parse()
            .map_err(|e| ConsoleError::Configuration(format!("KEEPER_AUTH_CONSOLE_ACCESS_LEVEL: {e}")))?;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("KEEPER_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(true);
    }
    if let Ok(val) = std::env::var("KEEPER_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("KEEPER_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}
