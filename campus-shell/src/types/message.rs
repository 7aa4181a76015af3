//! Messages and effects for the Elm-style update loop
//!
//! The hosting dashboard feeds `Message`s into `DashboardShell::update` and
//! executes the returned `Effect`s. Network results arrive as messages
//! tagged with the identity or tenant they were fetched for; the handlers
//! drop tags that no longer match current state.

use campus_common::{DynamicModule, TenantBranding, TenantId, UserIdentity};
use uuid::Uuid;

use crate::network::AccessError;

/// Messages that drive the shell state machine
#[derive(Debug, Clone)]
pub enum Message {
    /// Network: tenant branding fetch completed
    BrandingLoaded {
        tenant: TenantId,
        result: Result<TenantBranding, AccessError>,
    },
    /// Drag reorder: drag abandoned without a drop
    DragCancelled,
    /// Drag reorder: dragged entry released over another entry
    DragDropped { over_id: String },
    /// Drag reorder: drag initiated on a top-level entry
    DragStarted { entry_id: String },
    /// Sidebar: top-level entry selected
    EntrySelected { entry_id: String },
    /// Sidebar: entry's sub-item list manually toggled
    ExpansionToggled { entry_id: String },
    /// Session: signed-in identity changed (None = signed out)
    IdentityChanged(Option<UserIdentity>),
    /// Network: dynamic module fetch completed for a user
    ModulesLoaded {
        user_id: Uuid,
        result: Result<Vec<DynamicModule>, AccessError>,
    },
    /// Network: permission fetch completed for a user
    PermissionsLoaded {
        user_id: Uuid,
        result: Result<Vec<String>, AccessError>,
    },
    /// Sidebar: reorder mode opt-in toggled
    ReorderModeToggled(bool),
    /// Router: current URL path changed
    RouteChanged { path: String },
    /// Sidebar: search input changed
    SearchChanged { query: String },
    /// Sidebar: collapsed (icon-only) presentation toggled
    SidebarCollapseToggled(bool),
    /// Sidebar: sub-item selected
    SubItemSelected { route: String },
}

/// Effects the hosting application executes on the shell's behalf
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch permissions and dynamic modules for an identity
    FetchAccess { identity: UserIdentity },
    /// Fetch tenant branding
    FetchBranding { tenant: TenantId },
    /// Navigate the hosting router to an absolute path
    Navigate { path: String },
    /// Open the inline panel owned by the given entry
    OpenPanel { entry_id: String },
}
