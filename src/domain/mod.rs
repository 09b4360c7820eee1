//! Domain models and types for Keeper.
//!
//! The domain layer provides:
//! - **Value kinds and native values** ([`ValueKind`], [`SettingValue`], [`EnumDef`])
//! - **Access levels** ([`AccessLevel`], [`Principal`])
//! - **Error types** ([`ConsoleError`], [`AuthError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible library operations return [`Result<T, ConsoleError>`]:
//!
//! ```rust
//! use keeper::domain::{ConsoleError, Result, ValueKind};
//!
//! fn port(text: &str) -> Result<u16> {
//!     text.parse()
//!         .map_err(|_| ConsoleError::conversion(ValueKind::U16.name(), text).for_key("Port"))
//! }
//!
//! assert!(port("70000").is_err());
//! ```

pub mod access;
pub mod errors;
pub mod result;
pub mod value;

// Re-export commonly used types for convenience
pub use access::{AccessLevel, Principal};
pub use errors::{AuthError, ConsoleError};
pub use result::Result;
pub use value::{EnumDef, SettingValue, ValueKind};
