//! Save and load of the registry through a settings store

use super::document::SettingsDocument;
use crate::adapters::storage::SettingsStore;
use crate::core::registry::SettingRegistry;
use crate::domain::{ConsoleError, Result, SettingValue};
use std::sync::Arc;

/// What a store reports after a successful write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreReceipt {
    pub location: String,
    pub bytes: usize,
    /// Hex SHA-256 of the written bytes
    pub checksum: String,
}

/// Outcome of a save
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReport {
    pub settings: usize,
    pub receipt: StoreReceipt,
}

/// Outcome of a load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Descriptors overwritten from the file
    pub applied: usize,
    /// `section.key` entries in the file with no matching descriptor
    pub unmatched: Vec<String>,
}

/// Coordinates a [`SettingRegistry`] with its external store
///
/// Both operations run under the registry lock, so they never interleave
/// with updates or with each other.
pub struct SettingsPersistence {
    store: Arc<dyn SettingsStore>,
}

impl SettingsPersistence {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    pub fn location(&self) -> String {
        self.store.location()
    }

    /// Whether the store holds anything to load
    pub fn has_stored(&self) -> bool {
        self.store.exists()
    }

    /// Writes every current value, replacing the stored file
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Persistence`] when the store cannot be
    /// written. The registry is not modified either way.
    pub fn save(&self, registry: &SettingRegistry) -> Result<SaveReport> {
        let state = registry.lock();
        let document = SettingsDocument::from_sections(state.sections());

        let receipt = self.store.write(&document).map_err(|e| {
            tracing::error!(location = %self.store.location(), error = %e, "Saving settings failed");
            into_persistence(e)
        })?;

        let report = SaveReport {
            settings: document.entry_count(),
            receipt,
        };
        crate::log_settings_saved!(
            &report.receipt.location,
            report.settings,
            &report.receipt.checksum
        );
        Ok(report)
    }

    /// Replaces in-memory values with those in the store
    ///
    /// Entries are matched on `(section, key)`. Descriptors with no entry
    /// keep their value. Every entry is converted before any is applied, so
    /// a single bad value leaves the registry exactly as it was. Changes
    /// made since the last save are discarded for every matched key.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Persistence`] when the store cannot be read
    /// or parsed, or when an entry does not convert to its setting's kind.
    pub fn load(&self, registry: &SettingRegistry) -> Result<LoadReport> {
        let mut state = registry.lock();
        let document = self.store.read().map_err(into_persistence)?;

        let mut staged: Vec<(String, SettingValue)> = Vec::new();
        let mut report = LoadReport::default();

        for section in &document.sections {
            for (key, stored) in &section.entries {
                let descriptor = state
                    .descriptor(key)
                    .filter(|d| d.section == section.name);

                let Some(descriptor) = descriptor else {
                    report.unmatched.push(format!("{}.{key}", section.name));
                    continue;
                };

                let value = stored.to_setting(&descriptor.kind).map_err(|e| {
                    ConsoleError::Persistence(format!(
                        "{}: invalid value in [{}]: {}",
                        self.store.location(),
                        section.name,
                        e.for_key(key)
                    ))
                })?;
                staged.push((key.clone(), value));
            }
        }

        for (key, value) in staged {
            if state.replace(&key, value) {
                report.applied += 1;
            }
        }

        if !report.unmatched.is_empty() {
            tracing::warn!(
                location = %self.store.location(),
                unmatched = ?report.unmatched,
                "Settings file has entries with no matching setting"
            );
        }
        crate::log_settings_loaded!(&self.store.location(), report.applied);
        Ok(report)
    }
}

fn into_persistence(err: ConsoleError) -> ConsoleError {
    match err {
        ConsoleError::Persistence(_) => err,
        other => ConsoleError::Persistence(other.to_string()),
    }
}
