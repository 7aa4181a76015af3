//! Sidebar search query validation
//!
//! The sidebar filter is a plain case-insensitive substring match, so the
//! only hard requirements are a sane length cap and no control characters.
//! An empty or whitespace-only query means "no filter".

/// Maximum length for search queries in bytes
pub const MAX_SEARCH_QUERY_LENGTH: usize = 128;

/// Validation error for search queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQueryError {
    /// Query exceeds maximum length
    TooLong,
    /// Query contains control characters
    InvalidCharacters,
}

impl std::fmt::Display for SearchQueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooLong => write!(f, "query exceeds {} bytes", MAX_SEARCH_QUERY_LENGTH),
            Self::InvalidCharacters => write!(f, "query contains control characters"),
        }
    }
}

/// Validate a sidebar search query
///
/// Returns the trimmed query on success; `None` means the query is empty
/// after trimming and no filtering should occur.
///
/// # Errors
///
/// Returns a `SearchQueryError` variant describing the validation failure.
pub fn validate_search_query(query: &str) -> Result<Option<&str>, SearchQueryError> {
    if query.len() > MAX_SEARCH_QUERY_LENGTH {
        return Err(SearchQueryError::TooLong);
    }

    for ch in query.chars() {
        if ch.is_control() {
            return Err(SearchQueryError::InvalidCharacters);
        }
    }

    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    Ok(Some(trimmed))
}
