//! The navigation menu pipeline
//!
//! Composition, ordering, drag reorder, and route/search projection. Data
//! flows composer to order manager to projection; the reorder controller
//! writes back into the order manager on drop.

pub mod composer;
pub mod order;
pub mod projection;
pub mod reorder;

pub use composer::{ComposeInputs, MenuCache, compose};
pub use order::{OrderManager, is_truncating, reconcile};
pub use projection::{
    RouteTarget, RoutingTable, SidebarEntry, SidebarSubItem, entry_matches_query, project,
    route_matches,
};
pub use reorder::{DragState, relocate};
