//! Input validation functions
//!
//! Reusable validators for inputs that cross the subsystem's boundaries:
//! route suffixes from server-declared modules, search queries typed into
//! the sidebar, and tenant slugs parsed out of URLs.

mod route_suffix;
mod search_query;
mod tenant_slug;

pub use route_suffix::{MAX_ROUTE_SUFFIX_LENGTH, RouteSuffixError, validate_route_suffix};
pub use search_query::{MAX_SEARCH_QUERY_LENGTH, SearchQueryError, validate_search_query};
pub use tenant_slug::{MAX_TENANT_SLUG_LENGTH, TenantSlugError, validate_tenant_slug};
