//! File-backed stores
//!
//! - [`settings`] - TOML settings file
//! - [`credentials`] - JSON account file
//!
//! Both replace their file atomically on every write.

pub mod atomic;
pub mod credentials;
pub mod settings;

pub use credentials::JsonCredentialStore;
pub use settings::TomlSettingsStore;
