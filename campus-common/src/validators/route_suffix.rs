//! Route suffix validation
//!
//! Server-declared modules carry route suffixes that end up appended to the
//! tenant base path and handed to the hosting router. A malformed route is
//! dropped at the parse boundary rather than navigated to.

/// Maximum length for route suffixes in bytes
pub const MAX_ROUTE_SUFFIX_LENGTH: usize = 256;

/// Validation error for route suffixes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteSuffixError {
    /// Route is empty
    Empty,
    /// Route does not start with '/'
    MissingLeadingSlash,
    /// Route exceeds maximum length
    TooLong,
    /// Route contains a `..` segment
    Traversal,
    /// Route contains whitespace or control characters
    InvalidCharacters,
}

impl std::fmt::Display for RouteSuffixError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "route is empty"),
            Self::MissingLeadingSlash => write!(f, "route must start with '/'"),
            Self::TooLong => write!(f, "route exceeds {} bytes", MAX_ROUTE_SUFFIX_LENGTH),
            Self::Traversal => write!(f, "route contains a '..' segment"),
            Self::InvalidCharacters => {
                write!(f, "route contains whitespace or control characters")
            }
        }
    }
}

/// Validate a route suffix
///
/// Checks:
/// - Not empty
/// - Starts with '/'
/// - Does not exceed maximum length
/// - No `..` path segments
/// - No whitespace or control characters
///
/// # Errors
///
/// Returns a `RouteSuffixError` variant describing the validation failure.
pub fn validate_route_suffix(route: &str) -> Result<(), RouteSuffixError> {
    if route.is_empty() {
        return Err(RouteSuffixError::Empty);
    }

    if !route.starts_with('/') {
        return Err(RouteSuffixError::MissingLeadingSlash);
    }

    if route.len() > MAX_ROUTE_SUFFIX_LENGTH {
        return Err(RouteSuffixError::TooLong);
    }

    if route.split('/').any(|segment| segment == "..") {
        return Err(RouteSuffixError::Traversal);
    }

    if route
        .chars()
        .any(|ch| ch.is_whitespace() || ch.is_control())
    {
        return Err(RouteSuffixError::InvalidCharacters);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_routes() {
        assert!(validate_route_suffix("/students").is_ok());
        assert!(validate_route_suffix("/fees/heads").is_ok());
        assert!(validate_route_suffix("/exams/schedule/term-1").is_ok());
    }

    #[test]
    fn test_empty_route() {
        assert_eq!(validate_route_suffix(""), Err(RouteSuffixError::Empty));
    }

    #[test]
    fn test_missing_leading_slash() {
        assert_eq!(
            validate_route_suffix("students"),
            Err(RouteSuffixError::MissingLeadingSlash)
        );
    }

    #[test]
    fn test_too_long_route() {
        let route = format!("/{}", "a".repeat(MAX_ROUTE_SUFFIX_LENGTH));
        assert_eq!(validate_route_suffix(&route), Err(RouteSuffixError::TooLong));
    }

    #[test]
    fn test_traversal_rejected() {
        assert_eq!(
            validate_route_suffix("/students/../admin"),
            Err(RouteSuffixError::Traversal)
        );
        assert_eq!(validate_route_suffix("/.."), Err(RouteSuffixError::Traversal));
    }

    #[test]
    fn test_invalid_characters() {
        assert_eq!(
            validate_route_suffix("/stu dents"),
            Err(RouteSuffixError::InvalidCharacters)
        );
        assert_eq!(
            validate_route_suffix("/students\n"),
            Err(RouteSuffixError::InvalidCharacters)
        );
    }
}
