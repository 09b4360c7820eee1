//! Declarative setting table entries
//!
//! A configuration surface is an ordered slice of [`Property`] values built
//! at compile time. Section membership is implicit: a property that carries
//! a section marker switches the running section, and every later property
//! without a marker stays in it.

use crate::domain::ValueKind;

/// One entry of a configuration surface
///
/// # Examples
///
/// ```
/// use keeper::core::registry::Property;
/// use keeper::domain::ValueKind;
///
/// const PORT: Property = Property::new("Port", ValueKind::U16, "7000")
///     .section("Network")
///     .describe("Game port", "TCP port the game server listens on")
///     .restart();
///
/// assert_eq!(PORT.section, Some("Network"));
/// assert!(PORT.requires_restart);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Property {
    /// Stable identity, unique across the whole surface
    pub key: &'static str,
    pub kind: ValueKind,
    /// Default value in any text form accepted for `kind`
    pub default: &'static str,
    /// Section marker; `None` keeps the running section
    pub section: Option<&'static str>,
    pub display_name: Option<&'static str>,
    pub description: Option<&'static str>,
    pub requires_restart: bool,
    pub read_only: bool,
}

impl Property {
    pub const fn new(key: &'static str, kind: ValueKind, default: &'static str) -> Self {
        Self {
            key,
            kind,
            default,
            section: None,
            display_name: None,
            description: None,
            requires_restart: false,
            read_only: false,
        }
    }

    /// Starts a new section at this property
    pub const fn section(mut self, name: &'static str) -> Self {
        self.section = Some(name);
        self
    }

    pub const fn describe(mut self, display_name: &'static str, description: &'static str) -> Self {
        self.display_name = Some(display_name);
        self.description = Some(description);
        self
    }

    /// Changes only take effect after a server restart
    pub const fn restart(mut self) -> Self {
        self.requires_restart = true;
        self
    }

    pub const fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Display name, falling back to the key
    pub fn display_name_or_key(&self) -> &'static str {
        self.display_name.unwrap_or(self.key)
    }

    /// Description, falling back to `Setting: <key>`
    pub fn description_or_default(&self) -> String {
        match self.description {
            Some(description) => description.to_string(),
            None => format!("Setting: {}", self.key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let prop = Property::new("MaxLevel", ValueKind::I32, "50");
        assert_eq!(prop.section, None);
        assert!(!prop.requires_restart);
        assert!(!prop.read_only);
        assert_eq!(prop.display_name_or_key(), "MaxLevel");
        assert_eq!(prop.description_or_default(), "Setting: MaxLevel");
    }

    #[test]
    fn test_builder_chain() {
        let prop = Property::new("MapPath", ValueKind::String, "./Map/")
            .section("System")
            .describe("Map path", "Directory holding map files")
            .restart()
            .read_only();
        assert_eq!(prop.section, Some("System"));
        assert_eq!(prop.display_name_or_key(), "Map path");
        assert!(prop.requires_restart);
        assert!(prop.read_only);
    }
}
