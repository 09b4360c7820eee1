//! External system integrations for Keeper.
//!
//! - [`storage`] - Store traits and the factory that picks a backend
//! - [`file`] - TOML settings file and JSON credential file stores
//! - [`memory`] - In-memory stores
//! - [`game`] - Read access to the running game server
//!
//! # Design Pattern
//!
//! Core services depend only on the traits in [`storage`] and [`game`], so
//! the file stores can be swapped for the in-memory ones in tests.
//!
//! ```rust,no_run
//! use keeper::adapters::file::TomlSettingsStore;
//! use keeper::adapters::storage::SettingsStore;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = TomlSettingsStore::new("./keeper-settings.toml");
//! let document = store.read()?;
//! println!("{} stored settings", document.entry_count());
//! # Ok(())
//! # }
//! ```

pub mod file;
pub mod game;
pub mod memory;
pub mod storage;
