//! Menu order reconciliation and persistence
//!
//! The user may reorder top-level entries; the chosen order is persisted
//! per tenant and survives permission changes across sessions. On every
//! menu change the persisted order is reconciled against the current
//! effective menu: surviving ids keep their persisted positions, new ids
//! are appended in catalog order, stale ids are dropped from the resolved
//! order.
//!
//! The stored value is deliberately conservative. While access resolution
//! is incomplete the effective menu is a transient subset, and writing the
//! reconciled order back would clobber the user's saved layout. Writes are
//! therefore gated on resolution completeness, with a strict-subset check
//! as a second guard.

use std::collections::HashSet;

use campus_common::TenantId;

use crate::storage::KeyValueStore;

/// Storage key for the persisted menu order
fn order_key(tenant: &TenantId) -> String {
    format!("menu-order-{}", tenant)
}

/// Storage key for the reorder-mode opt-in flag
fn drag_key(tenant: &TenantId) -> String {
    format!("drag-enabled-{}", tenant)
}

/// Reconcile a persisted order with the current effective menu ids
///
/// Returns a total order over exactly `effective_ids`: surviving ids in
/// persisted order first, then ids absent from the persisted order in
/// their `effective_ids` (catalog) order.
#[must_use]
pub fn reconcile(effective_ids: &[String], persisted: &[String]) -> Vec<String> {
    let effective: HashSet<&str> = effective_ids.iter().map(String::as_str).collect();

    // Stored values are tolerated rather than trusted, so a tampered or
    // corrupt order may repeat ids; keep only the first occurrence.
    let mut seen: HashSet<&str> = HashSet::new();
    let mut resolved: Vec<String> = persisted
        .iter()
        .filter(|id| effective.contains(id.as_str()) && seen.insert(id.as_str()))
        .cloned()
        .collect();

    for id in effective_ids {
        if !seen.contains(id.as_str()) {
            resolved.push(id.clone());
        }
    }

    resolved
}

/// Whether writing back would truncate the stored order
///
/// True when the effective id set is a strict subset of the stored id set,
/// i.e. the current menu is missing entries the stored layout knows about.
#[must_use]
pub fn is_truncating(effective_ids: &[String], stored: &[String]) -> bool {
    let effective: HashSet<&str> = effective_ids.iter().map(String::as_str).collect();
    let stored_set: HashSet<&str> = stored.iter().map(String::as_str).collect();

    effective.len() < stored_set.len() && effective.is_subset(&stored_set)
}

/// Per-tenant menu order state backed by durable storage
///
/// Owns the storage handle; no other component writes the order or the
/// reorder flag. Storage failure downgrades the manager to session-only
/// behavior: reconciliation still works, persistence silently stops.
#[derive(Debug)]
pub struct OrderManager {
    store: Box<dyn KeyValueStore>,
    tenant: TenantId,
    /// Cached persisted order (what's on disk, best effort)
    stored: Vec<String>,
    /// Reorder-mode opt-in flag
    reorder_enabled: bool,
}

impl OrderManager {
    /// Load persisted state for a tenant
    ///
    /// Unreadable or malformed stored values are treated as absent.
    pub fn load(tenant: TenantId, store: Box<dyn KeyValueStore>) -> Self {
        let stored = match store.get(&order_key(&tenant)) {
            Ok(Some(raw)) => serde_json::from_str::<Vec<String>>(&raw).unwrap_or_default(),
            Ok(None) => Vec::new(),
            Err(err) => {
                eprintln!("Failed to read menu order for '{}': {}", tenant, err);
                Vec::new()
            }
        };

        let reorder_enabled = match store.get(&drag_key(&tenant)) {
            Ok(Some(raw)) => serde_json::from_str::<bool>(&raw).unwrap_or(false),
            _ => false,
        };

        Self {
            store,
            tenant,
            stored,
            reorder_enabled,
        }
    }

    /// Resolve the display order for the current effective menu without
    /// touching storage
    #[must_use]
    pub fn resolve(&self, effective_ids: &[String]) -> Vec<String> {
        reconcile(effective_ids, &self.stored)
    }

    /// Reconcile and, when safe, persist the resolved order
    ///
    /// `resolution_complete` is the explicit persistence gate: false while
    /// either access fetch is unresolved. Even with the gate open, a
    /// reconciliation that would truncate the stored order (effective ids a
    /// strict subset of stored ids) is not written back.
    pub fn reconcile_and_persist(
        &mut self,
        effective_ids: &[String],
        resolution_complete: bool,
    ) -> Vec<String> {
        let resolved = reconcile(effective_ids, &self.stored);

        if resolution_complete
            && !is_truncating(effective_ids, &self.stored)
            && resolved != self.stored
        {
            self.write_order(resolved.clone());
        }

        resolved
    }

    /// Persist an explicitly user-chosen order (drag drop)
    ///
    /// User action is authoritative: no truncation guard applies.
    pub fn persist_user_order(&mut self, order: Vec<String>) {
        self.write_order(order);
    }

    /// The reorder-mode opt-in flag
    #[must_use]
    pub fn reorder_enabled(&self) -> bool {
        self.reorder_enabled
    }

    /// Set and persist the reorder-mode opt-in flag
    pub fn set_reorder_enabled(&mut self, enabled: bool) {
        self.reorder_enabled = enabled;
        match serde_json::to_string(&enabled) {
            Ok(raw) => {
                if let Err(err) = self.store.set(&drag_key(&self.tenant), &raw) {
                    eprintln!(
                        "Failed to persist reorder flag for '{}': {}",
                        self.tenant, err
                    );
                }
            }
            Err(err) => {
                eprintln!(
                    "Failed to serialize reorder flag for '{}': {}",
                    self.tenant, err
                );
            }
        }
    }

    /// The cached stored order (test inspection)
    #[cfg(test)]
    pub fn stored(&self) -> &[String] {
        &self.stored
    }

    fn write_order(&mut self, order: Vec<String>) {
        match serde_json::to_string(&order) {
            Ok(raw) => {
                if let Err(err) = self.store.set(&order_key(&self.tenant), &raw) {
                    eprintln!("Failed to persist menu order for '{}': {}", self.tenant, err);
                    return;
                }
                self.stored = order;
            }
            Err(err) => {
                eprintln!("Failed to serialize menu order for '{}': {}", self.tenant, err);
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
