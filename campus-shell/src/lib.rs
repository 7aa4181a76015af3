//! Permission-aware navigation shell for multi-tenant campus dashboards
//!
//! This crate is the headless core of the dashboard's sidebar: it
//! composes the effective menu from the static capability catalog plus a
//! user's permissions and dynamic modules, keeps a per-tenant persisted
//! menu order, and projects the result for rendering. The host embeds a
//! [`DashboardShell`], feeds it [`Message`]s, and executes the returned
//! [`Effect`]s (navigation, panel opening, access fetches).
//!
//! All menu decisions fail closed: while permissions are unresolved or a
//! fetch has failed, only the always-visible entries are offered, and the
//! persisted order is never overwritten by a partial menu.

pub mod catalog;
mod handlers;
pub mod menu;
pub mod network;
mod shell;
pub mod storage;
pub mod types;

pub use catalog::{CATALOG, CapabilityEntry, SubCapability, entry_by_id, is_admin_only};
pub use menu::{DragState, SidebarEntry, SidebarSubItem};
pub use network::{AccessApi, AccessError, spawn_access_fetch, spawn_branding_fetch};
pub use shell::DashboardShell;
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use types::{Effect, EffectiveMenu, FetchState, MenuEntry, MenuSubItem, Message};
