//! Tenant slug validation
//!
//! Tenant slugs appear in URLs and in durable storage keys, so the charset
//! is kept deliberately narrow: lowercase ASCII letters, digits, and
//! hyphens, no leading or trailing hyphen.

/// Maximum length for tenant slugs in bytes
pub const MAX_TENANT_SLUG_LENGTH: usize = 64;

/// Validation error for tenant slugs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TenantSlugError {
    /// Slug is empty
    Empty,
    /// Slug exceeds maximum length
    TooLong,
    /// Slug contains characters outside [a-z0-9-]
    InvalidCharacters,
    /// Slug starts or ends with a hyphen
    InvalidHyphen,
}

impl std::fmt::Display for TenantSlugError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "tenant slug is empty"),
            Self::TooLong => write!(
                f,
                "tenant slug exceeds {} bytes",
                MAX_TENANT_SLUG_LENGTH
            ),
            Self::InvalidCharacters => {
                write!(f, "tenant slug may only contain a-z, 0-9 and hyphens")
            }
            Self::InvalidHyphen => write!(f, "tenant slug may not start or end with a hyphen"),
        }
    }
}

/// Validate a tenant slug
///
/// # Errors
///
/// Returns a `TenantSlugError` variant describing the validation failure.
pub fn validate_tenant_slug(slug: &str) -> Result<(), TenantSlugError> {
    if slug.is_empty() {
        return Err(TenantSlugError::Empty);
    }

    if slug.len() > MAX_TENANT_SLUG_LENGTH {
        return Err(TenantSlugError::TooLong);
    }

    if !slug
        .chars()
        .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
    {
        return Err(TenantSlugError::InvalidCharacters);
    }

    if slug.starts_with('-') || slug.ends_with('-') {
        return Err(TenantSlugError::InvalidHyphen);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_slugs() {
        assert!(validate_tenant_slug("st-marys").is_ok());
        assert!(validate_tenant_slug("greenfield2").is_ok());
        assert!(validate_tenant_slug("a").is_ok());
    }

    #[test]
    fn test_empty_slug() {
        assert_eq!(validate_tenant_slug(""), Err(TenantSlugError::Empty));
    }

    #[test]
    fn test_too_long_slug() {
        let slug = "a".repeat(MAX_TENANT_SLUG_LENGTH + 1);
        assert_eq!(validate_tenant_slug(&slug), Err(TenantSlugError::TooLong));
    }

    #[test]
    fn test_invalid_characters() {
        assert_eq!(
            validate_tenant_slug("St-Marys"),
            Err(TenantSlugError::InvalidCharacters)
        );
        assert_eq!(
            validate_tenant_slug("st marys"),
            Err(TenantSlugError::InvalidCharacters)
        );
        assert_eq!(
            validate_tenant_slug("st_marys"),
            Err(TenantSlugError::InvalidCharacters)
        );
        assert_eq!(
            validate_tenant_slug("../etc"),
            Err(TenantSlugError::InvalidCharacters)
        );
    }

    #[test]
    fn test_invalid_hyphen_positions() {
        assert_eq!(
            validate_tenant_slug("-stmarys"),
            Err(TenantSlugError::InvalidHyphen)
        );
        assert_eq!(
            validate_tenant_slug("stmarys-"),
            Err(TenantSlugError::InvalidHyphen)
        );
    }
}
