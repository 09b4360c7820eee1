//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Human-readable console output on stderr
//! - Configurable log levels, overridable through `RUST_LOG`
//! - JSON-formatted local file logging with rotation
//!
//! Operational events (saves, reloads, batch results, sign-ins) have
//! dedicated macros so they carry the same fields everywhere. Secrets are
//! never passed to them.
//!
//! # Example
//!
//! ```no_run
//! use keeper::logging::init_logging;
//! use keeper::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Console started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the result of a batch update
///
/// # Example
///
/// ```no_run
/// use keeper::log_batch_update;
///
/// log_batch_update!(12, 1);
/// ```
#[macro_export]
macro_rules! log_batch_update {
    ($updated:expr, $failed:expr) => {
        if $failed == 0 {
            tracing::info!(updated = $updated, failed = $failed, "Settings batch applied");
        } else {
            tracing::warn!(
                updated = $updated,
                failed = $failed,
                "Settings batch partially applied"
            );
        }
    };
}

/// Log a completed settings save
///
/// # Example
///
/// ```no_run
/// use keeper::log_settings_saved;
///
/// log_settings_saved!("/srv/zircon/settings.toml", 97, "e3b0c442");
/// ```
#[macro_export]
macro_rules! log_settings_saved {
    ($location:expr, $count:expr, $checksum:expr) => {
        tracing::info!(
            location = %$location,
            settings = $count,
            checksum = %$checksum,
            "Settings saved"
        );
    };
}

/// Log a completed settings reload
///
/// # Example
///
/// ```no_run
/// use keeper::log_settings_loaded;
///
/// log_settings_loaded!("/srv/zircon/settings.toml", 97);
/// ```
#[macro_export]
macro_rules! log_settings_loaded {
    ($location:expr, $applied:expr) => {
        tracing::info!(location = %$location, applied = $applied, "Settings reloaded");
    };
}

/// Log an operator action on the settings, with optional extra fields
///
/// # Example
///
/// ```no_run
/// use keeper::log_settings_operation;
///
/// log_settings_operation!("root@zircon", "save_section", section = "Mail", count = 3);
/// ```
#[macro_export]
macro_rules! log_settings_operation {
    ($operator:expr, $action:expr $(, $field:ident = $value:expr)* $(,)?) => {
        tracing::info!(
            operator = %$operator,
            action = $action,
            $($field = $value,)*
            "Settings operation"
        );
    };
}

/// Log the outcome of a credential verification
///
/// # Example
///
/// ```no_run
/// use keeper::log_auth_outcome;
///
/// log_auth_outcome!("gm@zircon", "rejected", "secret mismatch");
/// ```
#[macro_export]
macro_rules! log_auth_outcome {
    ($identifier:expr, $outcome:expr, $reason:expr) => {
        tracing::info!(
            identifier = %$identifier,
            outcome = $outcome,
            reason = %$reason,
            "Credential verification"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use keeper::log_error_with_context;
/// use keeper::domain::ConsoleError;
///
/// let error = ConsoleError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_macros_expand() {
        let failed = 0usize;
        crate::log_batch_update!(3usize, failed);
        crate::log_settings_saved!("memory", 3usize, "abc");
        crate::log_settings_loaded!("memory", 3usize);
        crate::log_settings_operation!("root", "reload");
        crate::log_settings_operation!("root", "save_section", section = "Mail", count = 2usize);
        crate::log_auth_outcome!("root", "accepted", "current");
    }
}
