//! Curated section metadata
//!
//! The order of [`SERVER_SECTIONS`] is the order sections are presented in.
//! Sections discovered on the surface but missing here are appended after
//! the curated ones with fallback metadata.

/// Section a surface starts in before any marker is seen
pub const DEFAULT_SECTION: &str = "Unknown";

/// Icon used for sections without curated metadata
pub const DEFAULT_ICON: &str = "bi-gear";

/// Presentation metadata of a section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionMeta {
    pub name: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

impl SectionMeta {
    pub const fn new(
        name: &'static str,
        display_name: &'static str,
        description: &'static str,
        icon: &'static str,
    ) -> Self {
        Self {
            name,
            display_name,
            description,
            icon,
        }
    }
}

/// Curated priority list for the game server surface
pub static SERVER_SECTIONS: &[SectionMeta] = &[
    SectionMeta::new(
        "Network",
        "Network",
        "Listen address, ports and connection limits",
        "bi-ethernet",
    ),
    SectionMeta::new(
        "System",
        "System",
        "Database, paths, passwords and other core settings",
        "bi-cpu",
    ),
    SectionMeta::new(
        "Control",
        "Login control",
        "Permissions for login, registration and character creation",
        "bi-shield-lock",
    ),
    SectionMeta::new(
        "Mail",
        "Mail",
        "SMTP server and sender account",
        "bi-envelope",
    ),
    SectionMeta::new(
        "WebServer",
        "Web server",
        "Web command and payment endpoints",
        "bi-globe",
    ),
    SectionMeta::new(
        "Players",
        "Players",
        "Level cap, PK rules, rebirth and other player settings",
        "bi-people",
    ),
    SectionMeta::new(
        "Monsters",
        "Monsters",
        "Monster behaviour, drops and pets",
        "bi-bug",
    ),
    SectionMeta::new(
        "Items",
        "Items",
        "Drops, refinement and weapon settings",
        "bi-box-seam",
    ),
    SectionMeta::new(
        "Rates",
        "Rates",
        "Experience, drop and gold multipliers",
        "bi-graph-up",
    ),
    SectionMeta::new(
        "Admin",
        "Admin console",
        "Console port and IP allow list",
        "bi-gear-wide-connected",
    ),
];

/// Metadata for `name`, falling back to `(name, "<name> settings", bi-gear)`
pub fn lookup(catalog: &[SectionMeta], name: &str) -> (String, String, String) {
    match catalog.iter().find(|meta| meta.name == name) {
        Some(meta) => (
            meta.display_name.to_string(),
            meta.description.to_string(),
            meta.icon.to_string(),
        ),
        None => (
            name.to_string(),
            format!("{name} settings"),
            DEFAULT_ICON.to_string(),
        ),
    }
}
