//! Store-neutral shape of a settings file
//!
//! A document is a list of sections, each a list of `key = value` entries,
//! in registry order. Values are kept in the small set of shapes a
//! key/value file can hold natively; everything else travels as text in
//! the edit form so it converts back losslessly.

use crate::core::coerce;
use crate::core::registry::SettingSection;
use crate::domain::{SettingValue, ValueKind};

/// A value as written to or read from a settings file
#[derive(Debug, Clone, PartialEq)]
pub enum StoredValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl StoredValue {
    /// File representation of a native value
    pub fn from_setting(value: &SettingValue) -> Self {
        match value {
            SettingValue::Bool(b) => StoredValue::Bool(*b),
            SettingValue::F64(f) => StoredValue::Float(*f),
            other => match other.as_i64() {
                Some(i) => StoredValue::Integer(i),
                None => StoredValue::Text(coerce::raw_for_editing(other)),
            },
        }
    }

    /// Text handed to the coercer when loading
    pub fn to_text(&self) -> String {
        match self {
            StoredValue::Bool(b) => b.to_string(),
            StoredValue::Integer(i) => i.to_string(),
            StoredValue::Float(f) => f.to_string(),
            StoredValue::Text(s) => s.clone(),
        }
    }

    /// Converts back to a native value of `kind`
    pub fn to_setting(&self, kind: &ValueKind) -> crate::domain::Result<SettingValue> {
        coerce::parse(&self.to_text(), kind)
    }
}

/// One section of a settings file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoredSection {
    pub name: String,
    pub entries: Vec<(String, StoredValue)>,
}

/// Whole settings file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsDocument {
    pub sections: Vec<StoredSection>,
}

impl SettingsDocument {
    /// Captures the current value of every descriptor
    pub fn from_sections(sections: &[SettingSection]) -> Self {
        let sections = sections
            .iter()
            .map(|section| StoredSection {
                name: section.name.clone(),
                entries: section
                    .items
                    .iter()
                    .map(|item| (item.key.clone(), StoredValue::from_setting(&item.current)))
                    .collect(),
            })
            .collect();
        Self { sections }
    }

    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }

    /// Looks up `(section, key)`
    pub fn get(&self, section: &str, key: &str) -> Option<&StoredValue> {
        self.sections
            .iter()
            .find(|s| s.name == section)?
            .entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::time::Duration;

    #[test]
    fn test_native_shapes() {
        assert_eq!(StoredValue::from_setting(&SettingValue::Bool(true)), StoredValue::Bool(true));
        assert_eq!(StoredValue::from_setting(&SettingValue::U16(7000)), StoredValue::Integer(7000));
        assert_eq!(StoredValue::from_setting(&SettingValue::I8(-3)), StoredValue::Integer(-3));
        assert_eq!(StoredValue::from_setting(&SettingValue::F64(1.25)), StoredValue::Float(1.25));
    }

    #[test]
    fn test_text_shapes_use_edit_form() {
        assert_eq!(
            StoredValue::from_setting(&SettingValue::U64(u64::MAX)),
            StoredValue::Text(u64::MAX.to_string())
        );
        assert_eq!(
            StoredValue::from_setting(&SettingValue::Duration(Duration::from_secs(90_061))),
            StoredValue::Text("1.01:01:01".into())
        );
        let ts = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap().and_hms_opt(23, 59, 1).unwrap();
        assert_eq!(
            StoredValue::from_setting(&SettingValue::Timestamp(ts)),
            StoredValue::Text("2024-02-29T23:59:01".into())
        );
    }

    #[test]
    fn test_to_setting_converts_back() {
        let stored = StoredValue::from_setting(&SettingValue::F32(0.1));
        assert_eq!(stored.to_setting(&ValueKind::F32).unwrap(), SettingValue::F32(0.1));
        assert_eq!(StoredValue::Integer(1).to_setting(&ValueKind::Bool).unwrap(), SettingValue::Bool(true));
        assert!(StoredValue::Text("x".into()).to_setting(&ValueKind::U8).is_err());
    }

    #[test]
    fn test_document_lookup() {
        let doc = SettingsDocument {
            sections: vec![StoredSection {
                name: "Network".into(),
                entries: vec![("Port".into(), StoredValue::Integer(7000))],
            }],
        };
        assert_eq!(doc.get("Network", "Port"), Some(&StoredValue::Integer(7000)));
        assert_eq!(doc.get("System", "Port"), None);
        assert_eq!(doc.entry_count(), 1);
    }
}
