//! Result type alias for Keeper

use super::errors::ConsoleError;

/// Result type alias for Keeper operations
///
/// # Examples
///
/// ```
/// use keeper::domain::result::Result;
/// use keeper::domain::errors::ConsoleError;
///
/// fn lookup(key: &str) -> Result<()> {
///     Err(ConsoleError::NotFound(key.to_string()))
/// }
///
/// assert!(lookup("Port").is_err());
/// ```
pub type Result<T> = std::result::Result<T, ConsoleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<u16> {
            Ok(7000)
        }

        let value = inner()?;
        assert_eq!(value, 7000);
        Ok(())
    }
}
