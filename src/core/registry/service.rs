//! Lock-guarded registry service
//!
//! All registry state lives behind one mutex owned by [`SettingRegistry`].
//! Reads copy values out; writers (single updates, batches, save and load)
//! hold the lock for the duration of their operation.

use super::{discover, Property, SectionMeta, SettingDescriptor, SettingSection};
use super::{SERVER_PROPERTIES, SERVER_SECTIONS};
use crate::core::coerce;
use crate::domain::{ConsoleError, Result, SettingValue};
use parking_lot::{Mutex, MutexGuard};
use std::collections::HashMap;
use std::fmt;

/// Sections plus a key index into them
#[derive(Debug)]
pub(crate) struct RegistryState {
    sections: Vec<SettingSection>,
    index: HashMap<String, (usize, usize)>,
}

impl RegistryState {
    fn new(sections: Vec<SettingSection>) -> Self {
        let index = sections
            .iter()
            .enumerate()
            .flat_map(|(s, section)| {
                section
                    .items
                    .iter()
                    .enumerate()
                    .map(move |(i, item)| (item.key.clone(), (s, i)))
            })
            .collect();
        Self { sections, index }
    }

    pub(crate) fn sections(&self) -> &[SettingSection] {
        &self.sections
    }

    pub(crate) fn descriptor(&self, key: &str) -> Option<&SettingDescriptor> {
        let (s, i) = *self.index.get(key)?;
        Some(&self.sections[s].items[i])
    }

    fn descriptor_mut(&mut self, key: &str) -> Option<&mut SettingDescriptor> {
        let (s, i) = *self.index.get(key)?;
        Some(&mut self.sections[s].items[i])
    }

    /// Parses `raw` for `key` and stores it, leaving the value untouched on failure
    fn apply(&mut self, key: &str, raw: &str) -> Result<SettingValue> {
        let descriptor = self
            .descriptor_mut(key)
            .ok_or_else(|| ConsoleError::NotFound(format!("setting '{key}'")))?;

        if descriptor.read_only {
            return Err(ConsoleError::ReadOnly(key.to_string()));
        }

        let value = coerce::parse(raw, &descriptor.kind).map_err(|e| e.for_key(key))?;
        descriptor.current = value.clone();
        Ok(value)
    }

    /// Stores an already converted value, used when reloading from a file
    pub(crate) fn replace(&mut self, key: &str, value: SettingValue) -> bool {
        match self.descriptor_mut(key) {
            Some(descriptor) if value.matches_kind(&descriptor.kind) => {
                descriptor.current = value;
                true
            }
            _ => false,
        }
    }
}

/// One key of a batch that was not applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyFailure {
    pub key: String,
    pub message: String,
}

/// Result of a batch update
///
/// Batches are not transactional: every key listed in `updated` was stored
/// even when `failures` is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    pub updated: Vec<String>,
    pub failures: Vec<KeyFailure>,
}

impl BatchOutcome {
    pub fn all_ok(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn updated_count(&self) -> usize {
        self.updated.len()
    }

    /// Operator-facing summary naming every failed key
    pub fn message(&self) -> String {
        if self.all_ok() {
            return format!("Updated {} setting(s)", self.updated_count());
        }
        let failed: Vec<String> = self
            .failures
            .iter()
            .map(|f| format!("{}: {}", f.key, f.message))
            .collect();
        format!(
            "Updated {} setting(s), {} failed: {}",
            self.updated_count(),
            self.failures.len(),
            failed.join("; ")
        )
    }
}

impl fmt::Display for BatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Shared registry of typed settings
///
/// # Examples
///
/// ```
/// use keeper::core::registry::SettingRegistry;
/// use keeper::domain::SettingValue;
///
/// let registry = SettingRegistry::server().unwrap();
/// registry.update_one("MaxLevel", "60").unwrap();
/// assert_eq!(registry.get("MaxLevel").unwrap(), SettingValue::I32(60));
/// ```
#[derive(Debug)]
pub struct SettingRegistry {
    state: Mutex<RegistryState>,
}

impl SettingRegistry {
    /// Discovers a registry from a surface and section catalog
    pub fn new(properties: &[Property], catalog: &[SectionMeta]) -> Result<Self> {
        let sections = discover(properties, catalog)?;
        let count: usize = sections.iter().map(|s| s.items.len()).sum();
        tracing::debug!(sections = sections.len(), settings = count, "Setting registry discovered");
        Ok(Self {
            state: Mutex::new(RegistryState::new(sections)),
        })
    }

    /// Registry over the built-in game server surface
    pub fn server() -> Result<Self> {
        Self::new(SERVER_PROPERTIES, SERVER_SECTIONS)
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, RegistryState> {
        self.state.lock()
    }

    /// Owned copy of every section, safe to hold while others write
    pub fn snapshot(&self) -> Vec<SettingSection> {
        self.lock().sections.clone()
    }

    pub fn section_names(&self) -> Vec<String> {
        self.lock().sections.iter().map(|s| s.name.clone()).collect()
    }

    /// Owned copy of one section
    pub fn section(&self, name: &str) -> Result<SettingSection> {
        self.lock()
            .sections
            .iter()
            .find(|s| s.name == name)
            .cloned()
            .ok_or_else(|| ConsoleError::NotFound(format!("section '{name}'")))
    }

    pub fn descriptor(&self, key: &str) -> Result<SettingDescriptor> {
        self.lock()
            .descriptor(key)
            .cloned()
            .ok_or_else(|| ConsoleError::NotFound(format!("setting '{key}'")))
    }

    /// Current value of `key`
    pub fn get(&self, key: &str) -> Result<SettingValue> {
        self.lock()
            .descriptor(key)
            .map(|d| d.current.clone())
            .ok_or_else(|| ConsoleError::NotFound(format!("setting '{key}'")))
    }

    /// Converts `raw` and stores it as the value of `key`
    ///
    /// # Errors
    ///
    /// - [`ConsoleError::NotFound`] for an unregistered key
    /// - [`ConsoleError::ReadOnly`] for a read-only setting
    /// - [`ConsoleError::Conversion`] naming the key and target kind; the
    ///   stored value is unchanged
    pub fn update_one(&self, key: &str, raw: &str) -> Result<SettingValue> {
        let result = self.lock().apply(key, raw);
        match &result {
            Ok(value) => tracing::debug!(key, value = %coerce::format(value), "Setting updated"),
            Err(e) => tracing::debug!(key, error = %e, "Setting update rejected"),
        }
        result
    }

    /// Applies every entry independently under one lock
    ///
    /// Successful entries stay applied when others fail.
    pub fn update_many<I, K, V>(&self, entries: I) -> BatchOutcome
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut outcome = BatchOutcome::default();
        {
            let mut state = self.lock();
            for (key, raw) in entries {
                let key = key.as_ref();
                match state.apply(key, raw.as_ref()) {
                    Ok(_) => outcome.updated.push(key.to_string()),
                    Err(e) => outcome.failures.push(KeyFailure {
                        key: key.to_string(),
                        message: e.to_string(),
                    }),
                }
            }
        }

        crate::log_batch_update!(outcome.updated_count(), outcome.failures.len());
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValueKind;
    use std::time::Duration;

    fn registry() -> SettingRegistry {
        let props = [
            Property::new("Port", ValueKind::U16, "7000").section("Network"),
            Property::new("TimeOut", ValueKind::Duration, "00:00:20"),
            Property::new("Build", ValueKind::String, "dev").read_only(),
            Property::new("MaxLevel", ValueKind::I32, "50").section("Players"),
        ];
        SettingRegistry::new(&props, &[]).unwrap()
    }

    #[test]
    fn test_get_unknown_key() {
        let err = registry().get("Missing").unwrap_err();
        assert!(matches!(err, ConsoleError::NotFound(_)));
    }

    #[test]
    fn test_update_one_visible_immediately() {
        let registry = registry();
        registry.update_one("TimeOut", "2").unwrap();
        assert_eq!(
            registry.get("TimeOut").unwrap(),
            SettingValue::Duration(Duration::from_secs(120))
        );
    }

    #[test]
    fn test_update_one_failure_keeps_value() {
        let registry = registry();
        let err = registry.update_one("Port", "70000").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Port"));
        assert!(message.contains("u16"));
        assert_eq!(registry.get("Port").unwrap(), SettingValue::U16(7000));
    }

    #[test]
    fn test_read_only_rejected() {
        let registry = registry();
        let err = registry.update_one("Build", "release").unwrap_err();
        assert!(matches!(err, ConsoleError::ReadOnly(_)));
        assert_eq!(registry.get("Build").unwrap(), SettingValue::String("dev".into()));
    }

    #[test]
    fn test_update_many_partial() {
        let registry = registry();
        let outcome = registry.update_many([("Port", "not-a-port"), ("MaxLevel", "60")]);

        assert!(!outcome.all_ok());
        assert_eq!(outcome.updated, ["MaxLevel"]);
        assert_eq!(outcome.failures[0].key, "Port");
        assert!(outcome.message().contains("Port"));
        assert_eq!(registry.get("MaxLevel").unwrap(), SettingValue::I32(60));
        assert_eq!(registry.get("Port").unwrap(), SettingValue::U16(7000));
    }

    #[test]
    fn test_update_many_reports_unknown_keys() {
        let outcome = registry().update_many([("Nope", "1")]);
        assert_eq!(outcome.updated_count(), 0);
        assert_eq!(outcome.failures.len(), 1);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let registry = registry();
        let before = registry.snapshot();
        registry.update_one("MaxLevel", "99").unwrap();
        assert_eq!(before[1].items[0].current, SettingValue::I32(50));
        assert_eq!(registry.snapshot()[1].items[0].current, SettingValue::I32(99));
    }

    #[test]
    fn test_section_lookup() {
        let registry = registry();
        assert_eq!(registry.section("Network").unwrap().items.len(), 3);
        assert!(matches!(
            registry.section("Nowhere").unwrap_err(),
            ConsoleError::NotFound(_)
        ));
        assert_eq!(registry.section_names(), ["Network", "Players"]);
    }

    #[test]
    fn test_replace_checks_kind() {
        let registry = registry();
        let mut state = registry.lock();
        assert!(!state.replace("Port", SettingValue::I32(1)));
        assert!(state.replace("Port", SettingValue::U16(8000)));
        assert!(!state.replace("Missing", SettingValue::U16(1)));
    }
}
