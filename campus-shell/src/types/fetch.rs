//! Fetch lifecycle state
//!
//! Each access-control fetch is tracked with an explicit four-state
//! lifecycle instead of boolean loading flags. "Loading" is distinct from
//! "resolved with nothing granted": while loading, the menu shows only the
//! always-visible subset, never everything and never nothing.

/// Lifecycle of an asynchronous fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState<T> {
    /// No fetch has been issued
    NotStarted,
    /// A fetch is in flight
    Loading,
    /// The fetch completed with a value
    Resolved(T),
    /// The fetch failed; callers treat this as resolved-empty (fail-closed)
    Failed,
}

impl<T> FetchState<T> {
    /// The resolved value, if any
    #[must_use]
    pub fn resolved(&self) -> Option<&T> {
        match self {
            Self::Resolved(value) => Some(value),
            _ => None,
        }
    }

    /// Whether the fetch completed successfully
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// Whether a fetch is currently in flight
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::NotStarted
    }
}
