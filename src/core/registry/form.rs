//! Update requests from submitted forms
//!
//! Form fields are named `config_<key>`. Browsers omit unchecked
//! checkboxes, so an absent boolean field means `false`. The registry itself
//! never infers that; these helpers do it before calling
//! [`SettingRegistry::update_many`].

use super::{SettingRegistry, SettingSection};
use crate::domain::{Result, ValueKind};
use std::collections::HashMap;

/// Prefix of every setting field in a submitted form
pub const FORM_FIELD_PREFIX: &str = "config_";

/// Form field name for a setting key
pub fn field_name(key: &str) -> String {
    format!("{FORM_FIELD_PREFIX}{key}")
}

fn collect_items(section: &SettingSection, form: &HashMap<String, String>, out: &mut Vec<(String, String)>) {
    for item in section.items.iter().filter(|item| !item.read_only) {
        match form.get(&field_name(&item.key)) {
            Some(raw) => out.push((item.key.clone(), raw.clone())),
            None if item.kind == ValueKind::Bool => out.push((item.key.clone(), "false".to_string())),
            None => {}
        }
    }
}

/// Builds the update request for one section
///
/// # Errors
///
/// Returns [`crate::domain::ConsoleError::NotFound`] for an unknown section.
pub fn collect_section(
    registry: &SettingRegistry,
    section: &str,
    form: &HashMap<String, String>,
) -> Result<Vec<(String, String)>> {
    let section = registry.section(section)?;
    let mut entries = Vec::new();
    collect_items(&section, form, &mut entries);
    Ok(entries)
}

/// Builds the update request across every section
pub fn collect_all(registry: &SettingRegistry, form: &HashMap<String, String>) -> Vec<(String, String)> {
    let mut entries = Vec::new();
    for section in registry.snapshot() {
        collect_items(&section, form, &mut entries);
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::Property;
    use crate::domain::ConsoleError;

    fn registry() -> SettingRegistry {
        let props = [
            Property::new("AllowLogin", ValueKind::Bool, "true").section("Control"),
            Property::new("RelogDelay", ValueKind::Duration, "00:00:10"),
            Property::new("Build", ValueKind::String, "dev").read_only(),
            Property::new("MaxLevel", ValueKind::I32, "50").section("Players"),
        ];
        SettingRegistry::new(&props, &[]).unwrap()
    }

    fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_absent_bool_becomes_false() {
        let entries = collect_section(&registry(), "Control", &form(&[("config_RelogDelay", "5")])).unwrap();
        assert_eq!(
            entries,
            [
                ("AllowLogin".to_string(), "false".to_string()),
                ("RelogDelay".to_string(), "5".to_string()),
            ]
        );
    }

    #[test]
    fn test_read_only_and_foreign_fields_skipped() {
        let submitted = form(&[("config_Build", "x"), ("config_MaxLevel", "70"), ("csrf", "t")]);
        let entries = collect_section(&registry(), "Control", &submitted).unwrap();
        assert_eq!(entries, [("AllowLogin".to_string(), "false".to_string())]);
    }

    #[test]
    fn test_unknown_section() {
        let err = collect_section(&registry(), "Mail", &HashMap::new()).unwrap_err();
        assert!(matches!(err, ConsoleError::NotFound(_)));
    }

    #[test]
    fn test_collect_all_spans_sections() {
        let submitted = form(&[("config_AllowLogin", "on"), ("config_MaxLevel", "70")]);
        let entries = collect_all(&registry(), &submitted);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1], ("MaxLevel".to_string(), "70".to_string()));
    }
}
