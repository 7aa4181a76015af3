//! Menu composition
//!
//! Merges the static capability catalog with the resolved permission state
//! into the effective menu. Administrators get the full catalog; restricted
//! users get the always-visible subset plus entries synthesized from their
//! server-declared modules.
//!
//! Composition is memoized: the cache hands out the same `Arc` until the
//! inputs change, so the order manager and projection can key off entry
//! identity across renders.

use campus_common::validators::validate_route_suffix;
use campus_common::{DynamicModule, PermissionSet};

use crate::catalog::{CATALOG, CapabilityEntry, is_admin_only, module_icon};
use crate::types::{EffectiveMenu, MenuEntry, MenuSubItem};

/// Inputs the effective menu is a pure function of
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComposeInputs {
    /// Whether the current identity bypasses permission checks
    pub is_admin: bool,
    /// Granted permissions (empty while loading or for admins)
    pub permissions: PermissionSet,
    /// Server-declared modules (empty while loading or for admins)
    pub modules: Vec<DynamicModule>,
}

/// Compose the effective menu from the catalog and resolved access state
///
/// With `is_admin` the permission set and module list are ignored and the
/// full catalog is returned. Otherwise the result is the always-visible
/// subset (minus the admin-only exception list) merged with one synthesized
/// entry per dynamic module that has at least one view-accessible
/// sub-module. Merging deduplicates by entry id; a static entry wins over a
/// same-id dynamic one.
#[must_use]
pub fn compose(inputs: &ComposeInputs) -> Vec<MenuEntry> {
    if inputs.is_admin {
        return CATALOG.iter().map(static_entry).collect();
    }

    let mut menu: Vec<MenuEntry> = CATALOG
        .iter()
        .filter(|entry| entry.is_always_visible() && !is_admin_only(entry.id))
        .map(static_entry)
        .collect();

    let mut modules: Vec<&DynamicModule> = inputs.modules.iter().collect();
    modules.sort_by_key(|module| module.display_order);

    for module in modules {
        let Some(entry) = dynamic_entry(module) else {
            continue;
        };
        if menu.iter().any(|existing| existing.id == entry.id) {
            continue;
        }
        menu.push(entry);
    }

    menu
}

/// Build a menu entry from a static catalog entry
fn static_entry(entry: &CapabilityEntry) -> MenuEntry {
    MenuEntry {
        id: entry.id.to_string(),
        label: entry.label.to_string(),
        icon: entry.icon.to_string(),
        opens_inline_panel: entry.opens_inline_panel,
        sub_items: entry
            .sub_items
            .iter()
            .map(|sub| MenuSubItem {
                label: sub.label.to_string(),
                route: sub.route.to_string(),
                has_edit_access: true,
            })
            .collect(),
    }
}

/// Synthesize a menu entry from a dynamic module
///
/// Returns None when the module has no view-accessible sub-module with a
/// well-formed route. The entry id derives from the first accessible
/// sub-module's route so it stays stable across permission changes that
/// don't affect that sub-module.
fn dynamic_entry(module: &DynamicModule) -> Option<MenuEntry> {
    let sub_items: Vec<MenuSubItem> = module
        .viewable_sub_modules()
        .filter(|sub| {
            if let Err(err) = validate_route_suffix(&sub.route) {
                eprintln!(
                    "Dropping sub-module '{}' of '{}': {}",
                    sub.key, module.module_key, err
                );
                return false;
            }
            true
        })
        .map(|sub| MenuSubItem {
            label: sub.name.clone(),
            route: sub.route.clone(),
            has_edit_access: sub.has_edit_access,
        })
        .collect();

    let first = sub_items.first()?;

    Some(MenuEntry {
        id: first.route.clone(),
        label: module.module_name.clone(),
        icon: module_icon(&module.module_key).to_string(),
        opens_inline_panel: false,
        sub_items,
    })
}

// =============================================================================
// Menu Cache
// =============================================================================

/// Memoizing wrapper around [`compose`]
///
/// Returns the previously composed `Arc` while the inputs compare equal, so
/// consumers can rely on pointer identity to skip downstream work.
#[derive(Debug, Default)]
pub struct MenuCache {
    last: Option<(ComposeInputs, EffectiveMenu)>,
}

impl MenuCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the effective menu for the given inputs, recomposing only on
    /// change
    pub fn get(&mut self, inputs: ComposeInputs) -> EffectiveMenu {
        if let Some((cached_inputs, cached_menu)) = &self.last
            && *cached_inputs == inputs
        {
            return cached_menu.clone();
        }

        let menu: EffectiveMenu = compose(&inputs).into();
        self.last = Some((inputs, menu.clone()));
        menu
    }
}

// =============================================================================
// Tests
// =============================================================================
