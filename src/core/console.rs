//! Operator-facing settings workflow
//!
//! Ties the registry, its persistence and access checks together the way the
//! console pages use them: viewing needs [`VIEW_LEVEL`], changing or
//! reloading needs [`EDIT_LEVEL`].

use crate::core::auth::CredentialVerifier;
use crate::core::persistence::{LoadReport, SaveReport, SettingsPersistence};
use crate::core::registry::{form, BatchOutcome, SettingRegistry, SettingSection};
use crate::domain::{AccessLevel, Principal, Result};
use std::collections::HashMap;
use std::sync::Arc;

/// Level needed to read settings
pub const VIEW_LEVEL: AccessLevel = AccessLevel::Admin;

/// Level needed to change, save or reload settings
pub const EDIT_LEVEL: AccessLevel = AccessLevel::SuperAdmin;

/// Result of a form save
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub batch: BatchOutcome,
    /// Present when the registry was written to the store
    pub saved: Option<SaveReport>,
    /// Present when writing was attempted and failed
    pub save_error: Option<String>,
}

impl SaveOutcome {
    pub fn persisted(&self) -> bool {
        self.saved.is_some()
    }

    /// Operator-facing summary
    pub fn message(&self) -> String {
        match (&self.saved, &self.save_error) {
            (Some(report), _) if self.batch.all_ok() => format!(
                "Saved {} setting(s) to {}",
                self.batch.updated_count(),
                report.receipt.location
            ),
            (Some(_), _) => format!("{}; applied settings were saved", self.batch.message()),
            (None, Some(error)) => format!(
                "Updated {} setting(s) but saving failed: {error}",
                self.batch.updated_count()
            ),
            (None, None) => self.batch.message(),
        }
    }
}

/// Settings workflow for authenticated operators
pub struct SettingsConsole {
    registry: Arc<SettingRegistry>,
    persistence: SettingsPersistence,
}

impl SettingsConsole {
    pub fn new(registry: Arc<SettingRegistry>, persistence: SettingsPersistence) -> Self {
        Self {
            registry,
            persistence,
        }
    }

    pub fn registry(&self) -> &Arc<SettingRegistry> {
        &self.registry
    }

    /// Snapshot of every section
    pub fn view(&self, principal: &Principal) -> Result<Vec<SettingSection>> {
        CredentialVerifier::authorize(principal, VIEW_LEVEL)?;
        Ok(self.registry.snapshot())
    }

    /// Applies one section's form and saves only if every key was accepted
    pub fn save_section(
        &self,
        principal: &Principal,
        section: &str,
        submitted: &HashMap<String, String>,
    ) -> Result<SaveOutcome> {
        CredentialVerifier::authorize(principal, EDIT_LEVEL)?;
        let entries = form::collect_section(&self.registry, section, submitted)?;
        let batch = self.registry.update_many(entries);

        let outcome = if batch.all_ok() {
            self.persist(batch)
        } else {
            SaveOutcome {
                batch,
                saved: None,
                save_error: None,
            }
        };

        if outcome.persisted() {
            crate::log_settings_operation!(
                &principal.identifier,
                "save_section",
                section = section,
                count = outcome.batch.updated_count()
            );
        }
        Ok(outcome)
    }

    /// Applies the form across all sections and saves if anything was applied
    pub fn save_all(&self, principal: &Principal, submitted: &HashMap<String, String>) -> Result<SaveOutcome> {
        CredentialVerifier::authorize(principal, EDIT_LEVEL)?;
        let entries = form::collect_all(&self.registry, submitted);
        let batch = self.registry.update_many(entries);

        let outcome = if batch.all_ok() || batch.updated_count() > 0 {
            self.persist(batch)
        } else {
            SaveOutcome {
                batch,
                saved: None,
                save_error: None,
            }
        };

        if outcome.persisted() {
            crate::log_settings_operation!(
                &principal.identifier,
                "save_all",
                count = outcome.batch.updated_count()
            );
        }
        Ok(outcome)
    }

    /// Replaces in-memory values with the stored file
    pub fn reload(&self, principal: &Principal) -> Result<LoadReport> {
        CredentialVerifier::authorize(principal, EDIT_LEVEL)?;
        let report = self.persistence.load(&self.registry)?;
        crate::log_settings_operation!(&principal.identifier, "reload", count = report.applied);
        Ok(report)
    }

    fn persist(&self, batch: BatchOutcome) -> SaveOutcome {
        match self.persistence.save(&self.registry) {
            Ok(report) => SaveOutcome {
                batch,
                saved: Some(report),
                save_error: None,
            },
            Err(e) => SaveOutcome {
                batch,
                saved: None,
                save_error: Some(e.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemorySettingsStore;
    use crate::core::registry::Property;
    use crate::domain::{AuthError, ConsoleError, SettingValue, ValueKind};

    fn console() -> (SettingsConsole, Arc<MemorySettingsStore>) {
        let props = [
            Property::new("AllowLogin", ValueKind::Bool, "true").section("Control"),
            Property::new("RelogDelay", ValueKind::Duration, "00:00:10"),
            Property::new("MaxLevel", ValueKind::I32, "50").section("Players"),
        ];
        let registry = Arc::new(SettingRegistry::new(&props, &[]).unwrap());
        let store = Arc::new(MemorySettingsStore::new());
        let persistence = SettingsPersistence::new(store.clone());
        (SettingsConsole::new(registry, persistence), store)
    }

    fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn superadmin() -> Principal {
        Principal::new("root@keeper", AccessLevel::SuperAdmin)
    }

    #[test]
    fn test_view_requires_admin() {
        let (console, _) = console();
        let guest = Principal::new("guest@keeper", AccessLevel::Guest);
        assert!(matches!(
            console.view(&guest),
            Err(ConsoleError::Auth(AuthError::InsufficientAccess { .. }))
        ));
        let admin = Principal::new("gm@keeper", AccessLevel::Admin);
        assert_eq!(console.view(&admin).unwrap().len(), 2);
    }

    #[test]
    fn test_edit_requires_superadmin() {
        let (console, _) = console();
        let supervisor = Principal::new("gm@keeper", AccessLevel::Supervisor);
        assert!(console.save_all(&supervisor, &HashMap::new()).is_err());
        assert!(console.reload(&supervisor).is_err());
    }

    #[test]
    fn test_section_save_persists_when_all_ok() {
        let (console, store) = console();
        let outcome = console
            .save_section(&superadmin(), "Control", &form(&[("config_RelogDelay", "00:01:00")]))
            .unwrap();

        assert!(outcome.persisted());
        assert_eq!(outcome.batch.updated_count(), 2);
        assert_eq!(console.registry().get("AllowLogin").unwrap(), SettingValue::Bool(false));
        assert!(store.document().is_some());
    }

    #[test]
    fn test_section_save_skips_persist_on_failure() {
        let (console, store) = console();
        let outcome = console
            .save_section(&superadmin(), "Control", &form(&[("config_RelogDelay", "soon")]))
            .unwrap();

        assert!(!outcome.persisted());
        assert!(outcome.save_error.is_none());
        assert!(outcome.message().contains("RelogDelay"));
        // The valid part of the batch stays applied in memory
        assert_eq!(console.registry().get("AllowLogin").unwrap(), SettingValue::Bool(false));
        assert!(store.document().is_none());
    }

    #[test]
    fn test_save_all_persists_partial_batch() {
        let (console, store) = console();
        let submitted = form(&[
            ("config_AllowLogin", "on"),
            ("config_RelogDelay", "soon"),
            ("config_MaxLevel", "70"),
        ]);
        let outcome = console.save_all(&superadmin(), &submitted).unwrap();

        assert!(!outcome.batch.all_ok());
        assert!(outcome.persisted());
        assert_eq!(store.document().unwrap().entry_count(), 3);
    }

    #[test]
    fn test_unknown_section() {
        let (console, _) = console();
        assert!(matches!(
            console.save_section(&superadmin(), "Mail", &HashMap::new()),
            Err(ConsoleError::NotFound(_))
        ));
    }

    #[test]
    fn test_reload_restores_saved_values() {
        let (console, _) = console();
        console
            .save_section(&superadmin(), "Players", &form(&[("config_MaxLevel", "80")]))
            .unwrap();
        console.registry().update_one("MaxLevel", "10").unwrap();

        let report = console.reload(&superadmin()).unwrap();
        assert_eq!(report.applied, 3);
        assert_eq!(console.registry().get("MaxLevel").unwrap(), SettingValue::I32(80));
    }
}
