//! TOML settings file
//!
//! One table per section, one `key = value` line per setting:
//!
//! ```toml
//! [Network]
//! Port = 7000
//! TimeOut = "00:00:20"
//! UseProxy = false
//! ```

use super::atomic::write_atomic;
use crate::adapters::storage::SettingsStore;
use crate::core::persistence::checksum::calculate_checksum_bytes;
use crate::core::persistence::{SettingsDocument, StoreReceipt, StoredSection, StoredValue};
use crate::domain::{ConsoleError, Result};
use std::path::{Path, PathBuf};
use toml::{Table, Value};

/// Settings store backed by a TOML file
#[derive(Debug, Clone)]
pub struct TomlSettingsStore {
    path: PathBuf,
}

impl TomlSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Renders a document as TOML text, keeping section and key order
pub fn render(document: &SettingsDocument) -> Result<String> {
    let mut root = Table::new();
    for section in &document.sections {
        if !root.contains_key(&section.name) {
            root.insert(section.name.clone(), Value::Table(Table::new()));
        }
        let Some(Value::Table(table)) = root.get_mut(&section.name) else {
            return Err(ConsoleError::Serialization(format!(
                "Section '{}' collides with a value",
                section.name
            )));
        };
        for (key, value) in &section.entries {
            table.insert(key.clone(), to_toml(value));
        }
    }
    toml::to_string(&root).map_err(|e| ConsoleError::Serialization(e.to_string()))
}

/// Parses TOML text into a document
pub fn parse(text: &str) -> Result<SettingsDocument> {
    let root: Table = text
        .parse()
        .map_err(|e: toml::de::Error| ConsoleError::Persistence(format!("Invalid settings file: {e}")))?;

    let mut sections = Vec::with_capacity(root.len());
    for (name, value) in root {
        let Value::Table(table) = value else {
            return Err(ConsoleError::Persistence(format!(
                "Expected a [section] table, found top-level key '{name}'"
            )));
        };
        let mut entries = Vec::with_capacity(table.len());
        for (key, value) in table {
            let stored = from_toml(&value).ok_or_else(|| {
                ConsoleError::Persistence(format!(
                    "Unsupported value for '{name}.{key}': {}",
                    value.type_str()
                ))
            })?;
            entries.push((key, stored));
        }
        sections.push(StoredSection { name, entries });
    }
    Ok(SettingsDocument { sections })
}

fn to_toml(value: &StoredValue) -> Value {
    match value {
        StoredValue::Bool(b) => Value::Boolean(*b),
        StoredValue::Integer(i) => Value::Integer(*i),
        StoredValue::Float(f) => Value::Float(*f),
        StoredValue::Text(s) => Value::String(s.clone()),
    }
}

fn from_toml(value: &Value) -> Option<StoredValue> {
    match value {
        Value::Boolean(b) => Some(StoredValue::Bool(*b)),
        Value::Integer(i) => Some(StoredValue::Integer(*i)),
        Value::Float(f) => Some(StoredValue::Float(*f)),
        Value::String(s) => Some(StoredValue::Text(s.clone())),
        Value::Datetime(dt) => Some(StoredValue::Text(dt.to_string())),
        Value::Array(_) | Value::Table(_) => None,
    }
}

impl SettingsStore for TomlSettingsStore {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn read(&self) -> Result<SettingsDocument> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| {
            ConsoleError::Persistence(format!("Cannot read {}: {e}", self.path.display()))
        })?;
        parse(&text)
    }

    fn write(&self, document: &SettingsDocument) -> Result<StoreReceipt> {
        let text = render(document)?;
        write_atomic(&self.path, text.as_bytes())?;
        Ok(StoreReceipt {
            location: self.location(),
            bytes: text.len(),
            checksum: calculate_checksum_bytes(text.as_bytes()),
        })
    }
}
