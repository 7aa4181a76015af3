//! Drag reorder state machine
//!
//! An opt-in interactive mode for reordering top-level entries. The state
//! machine is deliberately tiny: `Idle -> Dragging(active_id) -> Idle`.
//! Inconsistent drops (unknown ids, dropping onto itself, races with a
//! permission refresh that removed an entry) are no-ops, never errors.

/// Drag interaction state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    /// No drag in progress
    #[default]
    Idle,
    /// A top-level entry is being dragged
    Dragging {
        /// Id of the dragged entry
        active_id: String,
    },
}

impl DragState {
    /// Whether a drag is in progress
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// The dragged entry id, if any
    #[must_use]
    pub fn active_id(&self) -> Option<&str> {
        match self {
            Self::Dragging { active_id } => Some(active_id),
            Self::Idle => None,
        }
    }
}

/// Compute the order after dropping `active_id` onto `over_id`
///
/// Removes `active_id` from its position and reinserts it at `over_id`'s
/// resolved position, producing a new total order over the same id set.
/// Returns None for no-op drops: identical ids, or either id absent from
/// the order.
#[must_use]
pub fn relocate(order: &[String], active_id: &str, over_id: &str) -> Option<Vec<String>> {
    if active_id == over_id {
        return None;
    }

    let from = order.iter().position(|id| id == active_id)?;
    let to = order.iter().position(|id| id == over_id)?;

    let mut next = order.to_vec();
    let moved = next.remove(from);
    // Inserting at the target's pre-removal index places the dragged entry
    // exactly where the target used to sit, for moves in either direction.
    next.insert(to, moved);

    Some(next)
}
