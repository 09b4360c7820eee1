//! Core business logic for Keeper.
//!
//! # Modules
//!
//! - [`coerce`] - Conversion between setting values and their text forms
//! - [`registry`] - Setting discovery, sections, reads and writes
//! - [`persistence`] - Saving and reloading the registry through a store
//! - [`auth`] - Credential hashing and verification
//! - [`console`] - Operator workflow over the registry with access checks
//! - [`players`] - Online player queries
//!
//! # Settings Workflow
//!
//! 1. **Discover**: Build sections from the declared property table
//! 2. **Collect**: Turn a submitted form into key/text pairs
//! 3. **Apply**: Coerce and write each key, reporting failures per key
//! 4. **Save**: Write every current value to the settings store
//!
//! # Example
//!
//! ```rust,no_run
//! use keeper::adapters::memory::MemorySettingsStore;
//! use keeper::core::persistence::SettingsPersistence;
//! use keeper::core::registry::SettingRegistry;
//! use std::sync::Arc;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = SettingRegistry::server()?;
//! let persistence = SettingsPersistence::new(Arc::new(MemorySettingsStore::new()));
//!
//! let outcome = registry.update_many([("MaxLevel", "70"), ("AllowLogin", "on")]);
//! if outcome.all_ok() {
//!     persistence.save(&registry)?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod coerce;
pub mod console;
pub mod persistence;
pub mod players;
pub mod registry;
