//! Drag-reorder and presentation handlers
//!
//! Drag state is validated at every step: a drag can only start on an
//! entry that exists in the current resolved order, and a drop over an
//! unknown or identical target leaves the order untouched. Collapsing the
//! sidebar or leaving reorder mode cancels any drag in flight.

use crate::DashboardShell;
use crate::menu::{DragState, relocate};
use crate::types::Effect;

impl DashboardShell {
    /// The user picked up an entry
    pub(crate) fn handle_drag_started(&mut self, entry_id: &str) -> Vec<Effect> {
        if !self.order.reorder_enabled() || self.sidebar_collapsed || self.drag.is_dragging() {
            return Vec::new();
        }

        let menu = self.effective_menu();
        if !menu.iter().any(|entry| entry.id == entry_id) {
            return Vec::new();
        }

        self.drag = DragState::Dragging {
            active_id: entry_id.to_string(),
        };
        Vec::new()
    }

    /// The user dropped the dragged entry over a target
    pub(crate) fn handle_drag_dropped(&mut self, over_id: &str) -> Vec<Effect> {
        let DragState::Dragging { active_id } = std::mem::take(&mut self.drag) else {
            return Vec::new();
        };

        let menu = self.effective_menu();
        let ids = Self::menu_ids(&menu);
        let resolved = self.order.resolve(&ids);

        if let Some(reordered) = relocate(&resolved, &active_id, over_id) {
            self.order.persist_user_order(reordered);
        }
        Vec::new()
    }

    /// The drag was abandoned (escape, pointer leave, or layout change)
    pub(crate) fn handle_drag_cancelled(&mut self) -> Vec<Effect> {
        self.drag = DragState::Idle;
        Vec::new()
    }

    /// Reorder mode was switched on or off for this tenant
    pub(crate) fn handle_reorder_mode_toggled(&mut self, enabled: bool) -> Vec<Effect> {
        self.order.set_reorder_enabled(enabled);
        if !enabled {
            self.drag = DragState::Idle;
        }
        Vec::new()
    }

    /// The sidebar was collapsed or expanded
    pub(crate) fn handle_sidebar_collapse_toggled(&mut self, collapsed: bool) -> Vec<Effect> {
        self.sidebar_collapsed = collapsed;
        if collapsed {
            self.drag = DragState::Idle;
        }
        Vec::new()
    }
}
