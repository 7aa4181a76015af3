//! Dashboard shell state
//!
//! `DashboardShell` owns the navigation subsystem's state and is driven
//! Elm-style: the host feeds it [`Message`]s and executes the returned
//! [`Effect`]s. Everything the sidebar renders is derived on demand from
//! this state; nothing here blocks or performs IO besides the order
//! manager's storage writes.

use std::collections::HashMap;

use campus_common::{DynamicModule, PermissionSet, TenantBranding, TenantId, UserIdentity};

use crate::menu::{ComposeInputs, DragState, MenuCache, OrderManager, SidebarEntry, project};
use crate::storage::KeyValueStore;
use crate::types::{Effect, FetchState, Message};

/// Landing path suffix when the current route has no tenant suffix
const DEFAULT_PATH: &str = "/dashboard";

/// State for the permission-aware navigation shell of one tenant
#[derive(Debug)]
pub struct DashboardShell {
    /// Tenant this shell instance serves
    pub(crate) tenant: TenantId,
    /// Signed-in identity (None = signed out)
    pub(crate) identity: Option<UserIdentity>,
    /// Permission fetch lifecycle
    pub(crate) permissions: FetchState<PermissionSet>,
    /// Dynamic module fetch lifecycle
    pub(crate) modules: FetchState<Vec<DynamicModule>>,
    /// Tenant branding, once loaded
    pub(crate) branding: Option<TenantBranding>,
    /// Persisted menu order and reorder flag
    pub(crate) order: OrderManager,
    /// Drag reorder state machine
    pub(crate) drag: DragState,
    /// Whether the sidebar is in collapsed (icon-only) presentation
    pub(crate) sidebar_collapsed: bool,
    /// User expansion toggles, by entry id (component lifetime only)
    pub(crate) expansion_toggles: HashMap<String, bool>,
    /// Current path suffix within the tenant
    pub(crate) path: String,
    /// Current validated search query
    pub(crate) search: String,
    /// Memoized menu composition
    pub(crate) menu_cache: MenuCache,
}

impl DashboardShell {
    /// Create a shell for a tenant, loading persisted state from the store
    pub fn new(tenant: TenantId, store: Box<dyn KeyValueStore>) -> Self {
        let order = OrderManager::load(tenant.clone(), store);
        Self {
            tenant,
            identity: None,
            permissions: FetchState::NotStarted,
            modules: FetchState::NotStarted,
            branding: None,
            order,
            drag: DragState::Idle,
            sidebar_collapsed: false,
            expansion_toggles: HashMap::new(),
            path: DEFAULT_PATH.to_string(),
            search: String::new(),
            menu_cache: MenuCache::new(),
        }
    }

    /// Effects to run once at mount
    pub fn init(&mut self) -> Vec<Effect> {
        vec![Effect::FetchBranding {
            tenant: self.tenant.clone(),
        }]
    }

    /// Advance the state machine with one message
    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        match message {
            Message::BrandingLoaded { tenant, result } => {
                self.handle_branding_loaded(tenant, result)
            }
            Message::DragCancelled => self.handle_drag_cancelled(),
            Message::DragDropped { over_id } => self.handle_drag_dropped(&over_id),
            Message::DragStarted { entry_id } => self.handle_drag_started(&entry_id),
            Message::EntrySelected { entry_id } => self.handle_entry_selected(&entry_id),
            Message::ExpansionToggled { entry_id } => self.handle_expansion_toggled(&entry_id),
            Message::IdentityChanged(identity) => self.handle_identity_changed(identity),
            Message::ModulesLoaded { user_id, result } => {
                self.handle_modules_loaded(user_id, result)
            }
            Message::PermissionsLoaded { user_id, result } => {
                self.handle_permissions_loaded(user_id, result)
            }
            Message::ReorderModeToggled(enabled) => self.handle_reorder_mode_toggled(enabled),
            Message::RouteChanged { path } => self.handle_route_changed(&path),
            Message::SearchChanged { query } => self.handle_search_changed(&query),
            Message::SidebarCollapseToggled(collapsed) => {
                self.handle_sidebar_collapse_toggled(collapsed)
            }
            Message::SubItemSelected { route } => self.handle_sub_item_selected(&route),
        }
    }

    /// Project the sidebar for rendering
    ///
    /// Ordered by the reconciled menu order, filtered by the search query,
    /// with active/expansion state derived from the current route.
    pub fn sidebar(&mut self) -> Vec<SidebarEntry> {
        let menu = self.effective_menu();
        let ids = Self::menu_ids(&menu);
        let resolved = self.order.resolve(&ids);
        project(
            &menu,
            &resolved,
            &self.path,
            &self.search,
            &self.expansion_toggles,
        )
    }

    // ==================== Accessors ====================

    /// The tenant this shell serves
    #[must_use]
    pub fn tenant(&self) -> &TenantId {
        &self.tenant
    }

    /// Tenant branding, once loaded
    #[must_use]
    pub fn branding(&self) -> Option<&TenantBranding> {
        self.branding.as_ref()
    }

    /// Current validated search query (empty = no filter)
    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search
    }

    /// Whether access resolution is still in flight for the current
    /// identity
    #[must_use]
    pub fn is_access_loading(&self) -> bool {
        self.permissions.is_loading() || self.modules.is_loading()
    }

    /// The drag state machine's current state
    #[must_use]
    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    /// Whether reorder mode is enabled for this tenant
    #[must_use]
    pub fn reorder_enabled(&self) -> bool {
        self.order.reorder_enabled()
    }

    /// Whether the sidebar is collapsed (icon-only)
    #[must_use]
    pub fn sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    // ==================== Shared Helpers ====================

    /// Whether the current identity bypasses permission checks
    pub(crate) fn is_admin(&self) -> bool {
        self.identity
            .as_ref()
            .is_some_and(|identity| identity.is_unrestricted_admin)
    }

    /// Whether access resolution has settled for the current identity
    ///
    /// This is the persistence gate: only a settled menu may overwrite the
    /// stored order. A failed fetch never settles; the menu stays in the
    /// always-visible subset and the stored order stays untouched.
    pub(crate) fn resolution_complete(&self) -> bool {
        match &self.identity {
            None => false,
            Some(identity) if identity.is_unrestricted_admin => true,
            Some(_) => self.permissions.is_resolved() && self.modules.is_resolved(),
        }
    }

    /// Compose (or reuse) the effective menu for the current access state
    pub(crate) fn effective_menu(&mut self) -> crate::types::EffectiveMenu {
        let inputs = ComposeInputs {
            is_admin: self.is_admin(),
            permissions: self
                .permissions
                .resolved()
                .cloned()
                .unwrap_or_default(),
            modules: self.modules.resolved().cloned().unwrap_or_default(),
        };
        self.menu_cache.get(inputs)
    }

    /// Entry ids of a composed menu, in composition (catalog) order
    pub(crate) fn menu_ids(menu: &[crate::types::MenuEntry]) -> Vec<String> {
        menu.iter().map(|entry| entry.id.clone()).collect()
    }

    /// Reconcile the persisted order against the current menu, persisting
    /// when resolution has settled
    pub(crate) fn sync_order(&mut self) -> Vec<String> {
        let menu = self.effective_menu();
        let ids = Self::menu_ids(&menu);
        let complete = self.resolution_complete();
        self.order.reconcile_and_persist(&ids, complete)
    }

    /// Normalize a full URL path to a suffix within this tenant
    ///
    /// `/st-marys/students/add` becomes `/students/add`; a bare tenant
    /// path falls back to the default landing suffix. Paths that don't
    /// carry the tenant prefix are taken as-is.
    pub(crate) fn path_suffix(&self, path: &str) -> String {
        let base = self.tenant.base_path();
        match path.strip_prefix(&base) {
            Some("") => DEFAULT_PATH.to_string(),
            Some(rest) if rest.starts_with('/') => rest.to_string(),
            _ => path.to_string(),
        }
    }
}
