//! Setting registry
//!
//! The registry is built from a declarative surface (an ordered slice of
//! [`Property`]) and a curated section catalog. Discovery walks the surface
//! once, files every property under the running section, and orders the
//! resulting sections by the catalog.
//!
//! # Modules
//!
//! - [`property`] - Table entries describing one setting
//! - [`catalog`] - Curated section metadata and ordering
//! - [`surface`] - The game server's configuration surface
//! - [`service`] - The lock-guarded [`SettingRegistry`]
//! - [`form`] - Building update requests from submitted forms

pub mod catalog;
pub mod form;
pub mod property;
pub mod service;
pub mod surface;

pub use catalog::{SectionMeta, DEFAULT_SECTION, SERVER_SECTIONS};
pub use property::Property;
pub use service::{BatchOutcome, KeyFailure, SettingRegistry};
pub use surface::SERVER_PROPERTIES;

use crate::core::coerce;
use crate::domain::{ConsoleError, Result, SettingValue, ValueKind};
use std::collections::HashSet;

/// Metadata and current value of one setting
#[derive(Debug, Clone, PartialEq)]
pub struct SettingDescriptor {
    pub section: String,
    /// Unique across the registry; used in files and form submissions
    pub key: String,
    pub display_name: String,
    pub description: String,
    pub kind: ValueKind,
    pub requires_restart: bool,
    pub read_only: bool,
    pub current: SettingValue,
    pub default: Option<SettingValue>,
}

impl SettingDescriptor {
    /// Current value rendered for reading
    pub fn display_value(&self) -> String {
        coerce::format(&self.current)
    }

    /// Current value rendered for an edit field
    pub fn edit_value(&self) -> String {
        coerce::raw_for_editing(&self.current)
    }

    pub fn input_kind(&self) -> coerce::InputKind {
        coerce::input_kind(&self.kind)
    }
}

/// Named, ordered group of descriptors
#[derive(Debug, Clone, PartialEq)]
pub struct SettingSection {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub icon: String,
    pub items: Vec<SettingDescriptor>,
}

impl SettingSection {
    fn open(name: &str, catalog: &[SectionMeta]) -> Self {
        let (display_name, description, icon) = catalog::lookup(catalog, name);
        Self {
            name: name.to_string(),
            display_name,
            description,
            icon,
            items: Vec::new(),
        }
    }

    /// Finds a descriptor of this section by key
    pub fn item(&self, key: &str) -> Option<&SettingDescriptor> {
        self.items.iter().find(|item| item.key == key)
    }
}

/// Builds the ordered sections of a surface
///
/// Every property is filed under the running section, which starts at
/// [`DEFAULT_SECTION`] and changes whenever a property carries a marker.
/// A marker naming a section seen earlier continues that section. Sections
/// listed in `catalog` come first in catalog order; the rest follow in the
/// order they were first encountered.
///
/// # Errors
///
/// Returns [`ConsoleError::Configuration`] when a key is declared twice or a
/// default does not convert to the property's kind.
pub fn discover(properties: &[Property], catalog: &[SectionMeta]) -> Result<Vec<SettingSection>> {
    let mut discovered: Vec<SettingSection> = Vec::new();
    let mut seen_keys = HashSet::new();
    let mut current = DEFAULT_SECTION;

    for prop in properties {
        if let Some(marker) = prop.section {
            current = marker;
        }

        if !seen_keys.insert(prop.key) {
            return Err(ConsoleError::Configuration(format!(
                "Setting '{}' is declared more than once",
                prop.key
            )));
        }

        let default = coerce::parse(prop.default, &prop.kind).map_err(|e| {
            ConsoleError::Configuration(format!("Invalid default for '{}': {e}", prop.key))
        })?;

        let position = match discovered.iter().position(|s| s.name == current) {
            Some(position) => position,
            None => {
                discovered.push(SettingSection::open(current, catalog));
                discovered.len() - 1
            }
        };

        discovered[position].items.push(SettingDescriptor {
            section: current.to_string(),
            key: prop.key.to_string(),
            display_name: prop.display_name_or_key().to_string(),
            description: prop.description_or_default(),
            kind: prop.kind,
            requires_restart: prop.requires_restart,
            read_only: prop.read_only,
            current: default.clone(),
            default: Some(default),
        });
    }

    Ok(order_sections(discovered, catalog))
}

fn order_sections(discovered: Vec<SettingSection>, catalog: &[SectionMeta]) -> Vec<SettingSection> {
    let rank = |section: &SettingSection| {
        catalog
            .iter()
            .position(|meta| meta.name == section.name)
            .unwrap_or(catalog.len())
    };

    let mut ordered = discovered;
    // Stable sort keeps discovery order among uncatalogued sections
    ordered.sort_by_key(rank);
    ordered
}
