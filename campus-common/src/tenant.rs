//! Tenant identification
//!
//! Each school is a tenant; the tenant slug is the leading segment of every
//! dashboard URL (`/{tenant}/dashboard`, `/{tenant}/students`, ...). The
//! slug also keys persisted client state.

use serde::{Deserialize, Serialize};

use crate::validators::validate_tenant_slug;

/// Identifier for a tenant (one school)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(String);

impl TenantId {
    /// Create a tenant id from a validated slug
    ///
    /// Returns None if the slug fails validation.
    #[must_use]
    pub fn new(slug: &str) -> Option<Self> {
        validate_tenant_slug(slug).ok()?;
        Some(Self(slug.to_string()))
    }

    /// Parse the tenant id from a URL path
    ///
    /// The tenant slug is the first path segment: `/st-marys/students/add`
    /// yields `st-marys`. Returns None for paths without a valid leading
    /// slug.
    #[must_use]
    pub fn parse_from_path(path: &str) -> Option<Self> {
        let segment = path.strip_prefix('/')?.split('/').next()?;
        Self::new(segment)
    }

    /// The tenant slug
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Base path prefix for this tenant's routes
    #[must_use]
    pub fn base_path(&self) -> String {
        format!("/{}", self.0)
    }
}

impl std::fmt::Display for TenantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
