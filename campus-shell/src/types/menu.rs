//! Effective menu types
//!
//! The composer produces `MenuEntry` values: catalog entries and
//! synthesized dynamic-module entries reduced to a common shape. The full
//! composed menu is shared as `Arc<[MenuEntry]>` so downstream consumers
//! (order manager, projection) see a referentially stable value until the
//! inputs actually change.

use std::sync::Arc;

/// A resolved sub-item of an effective menu entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSubItem {
    /// Display label
    pub label: String,
    /// Route suffix
    pub route: String,
    /// Whether the user may edit within this sub-item
    pub has_edit_access: bool,
}

/// An entry of the effective menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    /// Stable id; also the entry's base route suffix
    pub id: String,
    /// Display label
    pub label: String,
    /// Icon reference
    pub icon: String,
    /// Whether selecting this entry opens an inline panel
    pub opens_inline_panel: bool,
    /// Resolved sub-items (permission-filtered for restricted users)
    pub sub_items: Vec<MenuSubItem>,
}

impl MenuEntry {
    /// The entry's base route suffix
    #[must_use]
    pub fn base_route(&self) -> &str {
        &self.id
    }
}

/// The composed, permission-filtered menu
pub type EffectiveMenu = Arc<[MenuEntry]>;
