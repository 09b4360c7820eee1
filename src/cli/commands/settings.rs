//! Settings command implementation
//!
//! Reads and changes the game server settings file through the registry, so
//! every value is checked against its setting's kind before it is written.

use super::{open_settings, EXIT_CONFIG, EXIT_FATAL, EXIT_OK, EXIT_REJECTED};
use crate::config::load_config;
use crate::core::registry::SettingSection;
use crate::domain::ConsoleError;
use clap::{Args, Subcommand};

/// Arguments for the settings command
#[derive(Args, Debug)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub action: SettingsAction,
}

/// Settings operations
#[derive(Subcommand, Debug)]
pub enum SettingsAction {
    /// List sections and their current values
    List {
        /// Only show this section
        #[arg(long)]
        section: Option<String>,
    },

    /// Show one setting
    Get {
        /// Setting key, e.g. MaxLevel
        key: String,
    },

    /// Change settings and save them if every value is accepted
    Set {
        /// KEY=VALUE pairs
        #[arg(required = true, value_parser = parse_assignment)]
        assignments: Vec<(String, String)>,
    },

    /// Re-read the settings file and report what it contains
    Reload,
}

impl SettingsArgs {
    /// Execute the settings command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        let (registry, persistence) = match open_settings(&config) {
            Ok(opened) => opened,
            Err(e) => {
                println!("❌ Failed to open settings");
                println!("   Error: {e}");
                return Ok(EXIT_FATAL);
            }
        };

        match &self.action {
            SettingsAction::List { section } => {
                let sections = match section {
                    Some(name) => match registry.section(name) {
                        Ok(s) => vec![s],
                        Err(ConsoleError::NotFound(_)) => {
                            println!("❌ Unknown section: {name}");
                            println!("   Known sections: {}", registry.section_names().join(", "));
                            return Ok(EXIT_REJECTED);
                        }
                        Err(e) => return Err(e.into()),
                    },
                    None => registry.snapshot(),
                };
                for section in &sections {
                    print_section(section);
                }
                Ok(EXIT_OK)
            }

            SettingsAction::Get { key } => match registry.descriptor(key) {
                Ok(d) => {
                    println!("{} ({})", d.display_name, d.key);
                    println!("  Section: {}", d.section);
                    println!("  Kind: {}", d.kind.name());
                    println!("  Value: {}", d.display_value());
                    println!("  Edit form: {}", d.edit_value());
                    if d.requires_restart {
                        println!("  Takes effect after a restart");
                    }
                    if d.read_only {
                        println!("  Read only");
                    }
                    println!("  {}", d.description);
                    Ok(EXIT_OK)
                }
                Err(e) => {
                    println!("❌ {e}");
                    Ok(EXIT_REJECTED)
                }
            },

            SettingsAction::Set { assignments } => {
                let outcome = registry.update_many(
                    assignments.iter().map(|(k, v)| (k.as_str(), v.as_str())),
                );

                if !outcome.all_ok() {
                    println!("❌ {outcome}");
                    println!("   Nothing was saved");
                    return Ok(EXIT_REJECTED);
                }

                match persistence.save(&registry) {
                    Ok(report) => {
                        println!(
                            "✅ Updated {} setting(s), saved {} to {}",
                            outcome.updated_count(),
                            report.settings,
                            report.receipt.location
                        );
                        println!("   SHA-256: {}", report.receipt.checksum);
                        Ok(EXIT_OK)
                    }
                    Err(e) => {
                        println!("❌ Saving failed");
                        println!("   Error: {e}");
                        Ok(EXIT_FATAL)
                    }
                }
            }

            // open_settings has already loaded the file
            SettingsAction::Reload => match persistence.load(&registry) {
                Ok(report) => {
                    println!(
                        "✅ Reloaded {} setting(s) from {}",
                        report.applied,
                        persistence.location()
                    );
                    for entry in &report.unmatched {
                        println!("   ⚠️  Unknown entry ignored: {entry}");
                    }
                    Ok(EXIT_OK)
                }
                Err(e) => {
                    println!("❌ Reload failed");
                    println!("   Error: {e}");
                    Ok(EXIT_FATAL)
                }
            },
        }
    }
}

fn print_section(section: &SettingSection) {
    println!("{} [{}]", section.display_name, section.name);
    println!("  {}", section.description);
    for item in &section.items {
        let restart = if item.requires_restart { " (restart)" } else { "" };
        println!("  {:<28} {}{restart}", item.key, item.display_value());
    }
    println!();
}

/// Parses a `KEY=VALUE` argument; the value may be empty
fn parse_assignment(arg: &str) -> Result<(String, String), String> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{arg}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in '{arg}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir) -> String {
        let settings = dir.path().join("settings.toml");
        let path = dir.path().join("keeper.toml");
        fs::write(
            &path,
            format!(
                "[settings]\npath = '{}'\n\n[logging]\nlocal_enabled = false\n",
                settings.display()
            ),
        )
        .unwrap();
        path.display().to_string()
    }

    fn run(config: &str, action: SettingsAction) -> i32 {
        SettingsArgs { action }.execute(config).unwrap()
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("MaxLevel=70").unwrap(),
            ("MaxLevel".to_string(), "70".to_string())
        );
        assert_eq!(
            parse_assignment("WelcomeText=a=b").unwrap(),
            ("WelcomeText".to_string(), "a=b".to_string())
        );
        assert_eq!(parse_assignment("Motd=").unwrap().1, "");
        assert!(parse_assignment("MaxLevel").is_err());
        assert!(parse_assignment("=70").is_err());
    }

    #[test]
    fn test_set_saves_only_when_all_ok() {
        let dir = TempDir::new().unwrap();
        let config = write_config(&dir);
        let settings = dir.path().join("settings.toml");

        let rejected = run(
            &config,
            SettingsAction::Set {
                assignments: vec![
                    ("AllowLogin".into(), "on".into()),
                    ("RelogDelay".into(), "later".into()),
                ],
            },
        );
        assert_eq!(rejected, EXIT_REJECTED);
        assert!(!settings.exists());

        let accepted = run(
            &config,
            SettingsAction::Set {
                assignments: vec![("RelogDelay".into(), "90".into())],
            },
        );
        assert_eq!(accepted, EXIT_OK);
        assert!(fs::read_to_string(&settings).unwrap().contains("RelogDelay = \"01:30:00\""));
    }

    #[test]
    fn test_get_unknown_key() {
        let dir = TempDir::new().unwrap();
        let config = write_config(&dir);
        assert_eq!(run(&config, SettingsAction::Get { key: "Nope".into() }), EXIT_REJECTED);
        assert_eq!(run(&config, SettingsAction::Get { key: "MaxLevel".into() }), EXIT_OK);
    }

    #[test]
    fn test_list_unknown_section() {
        let dir = TempDir::new().unwrap();
        let config = write_config(&dir);
        assert_eq!(
            run(&config, SettingsAction::List { section: Some("Nope".into()) }),
            EXIT_REJECTED
        );
        assert_eq!(run(&config, SettingsAction::List { section: None }), EXIT_OK);
    }

    #[test]
    fn test_reload_without_file_fails() {
        let dir = TempDir::new().unwrap();
        let config = write_config(&dir);
        assert_eq!(run(&config, SettingsAction::Reload), EXIT_FATAL);
    }

    #[test]
    fn test_memory_store_starts_from_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("keeper.toml");
        fs::write(&path, "[settings]\nstore = \"memory\"\n\n[logging]\nlocal_enabled = false\n").unwrap();
        let config = path.display().to_string();

        assert_eq!(run(&config, SettingsAction::List { section: None }), EXIT_OK);
        assert_eq!(run(&config, SettingsAction::Get { key: "MaxLevel".into() }), EXIT_OK);
        assert_eq!(
            run(
                &config,
                SettingsAction::Set {
                    assignments: vec![("RelogDelay".into(), "90".into())],
                },
            ),
            EXIT_OK
        );
    }
}
