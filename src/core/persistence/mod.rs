//! Persistence of registry values
//!
//! - [`document`] - Store-neutral shape of a settings file
//! - [`manager`] - [`SettingsPersistence`], the save/load coordinator
//! - [`checksum`] - SHA-256 of written files for the operational log

pub mod checksum;
pub mod document;
pub mod manager;

pub use document::{SettingsDocument, StoredSection, StoredValue};
pub use manager::{LoadReport, SaveReport, SettingsPersistence, StoreReceipt};
