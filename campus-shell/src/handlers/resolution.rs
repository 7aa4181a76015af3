//! Identity and access-resolution handlers
//!
//! These drive the fetch lifecycle: identity changes reset and restart
//! resolution, and fetch results are accepted only when tagged with the
//! identity (or tenant) they were requested for. Late responses from a
//! previous identity are dropped on the floor.

use campus_common::{DynamicModule, PermissionSet, TenantBranding, TenantId, UserIdentity};
use uuid::Uuid;

use crate::DashboardShell;
use crate::menu::DragState;
use crate::network::AccessError;
use crate::types::{Effect, FetchState};

impl DashboardShell {
    /// The signed-in identity changed (sign-in, sign-out, or switch)
    pub(crate) fn handle_identity_changed(
        &mut self,
        identity: Option<UserIdentity>,
    ) -> Vec<Effect> {
        self.identity = identity;
        self.permissions = FetchState::NotStarted;
        self.modules = FetchState::NotStarted;
        self.expansion_toggles.clear();
        self.drag = DragState::Idle;

        let Some(identity) = self.identity.clone() else {
            return Vec::new();
        };

        if identity.is_unrestricted_admin {
            // Admins see the full catalog with no fetch; the menu is
            // already settled.
            self.sync_order();
            return Vec::new();
        }

        self.permissions = FetchState::Loading;
        self.modules = FetchState::Loading;
        vec![Effect::FetchAccess { identity }]
    }

    /// A permission fetch finished
    pub(crate) fn handle_permissions_loaded(
        &mut self,
        user_id: Uuid,
        result: Result<Vec<String>, AccessError>,
    ) -> Vec<Effect> {
        if !self.is_current_user(user_id) {
            eprintln!("Dropping stale permission response for user {user_id}");
            return Vec::new();
        }

        match result {
            Ok(raw) => {
                let (set, rejected) = PermissionSet::parse(&raw);
                for key in &rejected {
                    eprintln!("Ignoring unknown permission key: {key}");
                }
                self.permissions = FetchState::Resolved(set);
            }
            Err(err) => {
                eprintln!("Permission fetch failed: {err}");
                self.permissions = FetchState::Failed;
            }
        }

        self.sync_order();
        Vec::new()
    }

    /// A dynamic-module fetch finished
    pub(crate) fn handle_modules_loaded(
        &mut self,
        user_id: Uuid,
        result: Result<Vec<DynamicModule>, AccessError>,
    ) -> Vec<Effect> {
        if !self.is_current_user(user_id) {
            eprintln!("Dropping stale module response for user {user_id}");
            return Vec::new();
        }

        match result {
            Ok(modules) => {
                self.modules = FetchState::Resolved(modules);
            }
            Err(err) => {
                eprintln!("Module fetch failed: {err}");
                self.modules = FetchState::Failed;
            }
        }

        self.sync_order();
        Vec::new()
    }

    /// Tenant branding arrived
    pub(crate) fn handle_branding_loaded(
        &mut self,
        tenant: TenantId,
        result: Result<TenantBranding, AccessError>,
    ) -> Vec<Effect> {
        if tenant != self.tenant {
            eprintln!("Dropping branding response for other tenant {tenant}");
            return Vec::new();
        }

        match result {
            Ok(branding) => self.branding = Some(branding),
            Err(err) => eprintln!("Branding fetch failed: {err}"),
        }

        Vec::new()
    }

    fn is_current_user(&self, user_id: Uuid) -> bool {
        self.identity
            .as_ref()
            .is_some_and(|identity| identity.id == user_id)
    }
}

#[cfg(test)]
mod tests {
    use campus_common::{PermissionKey, TenantId, UserIdentity, UserRole};

    use crate::DashboardShell;
    use crate::storage::MemoryStore;
    use crate::types::{Effect, FetchState, Message};

    fn shell() -> DashboardShell {
        DashboardShell::new(
            TenantId::new("st-marys").unwrap(),
            Box::new(MemoryStore::new()),
        )
    }

    fn teacher() -> UserIdentity {
        UserIdentity::new("Ms. Finch", UserRole::Teacher, false)
    }

    #[test]
    fn test_admin_sign_in_needs_no_fetch() {
        let mut shell = shell();
        let admin = UserIdentity::new("Head", UserRole::SchoolAdministrator, true);
        let effects = shell.update(Message::IdentityChanged(Some(admin)));

        assert!(effects.is_empty());
        assert!(shell.resolution_complete());
    }

    #[test]
    fn test_restricted_sign_in_requests_access() {
        let mut shell = shell();
        let identity = teacher();
        let effects = shell.update(Message::IdentityChanged(Some(identity.clone())));

        assert_eq!(effects.len(), 1);
        match &effects[0] {
            Effect::FetchAccess { identity: requested } => {
                assert_eq!(requested.id, identity.id);
            }
            other => panic!("unexpected effect: {other:?}"),
        }
        assert!(shell.is_access_loading());
        assert!(!shell.resolution_complete());
    }

    #[test]
    fn test_permission_result_accepted_for_current_user() {
        let mut shell = shell();
        let identity = teacher();
        shell.update(Message::IdentityChanged(Some(identity.clone())));
        shell.update(Message::PermissionsLoaded {
            user_id: identity.id,
            result: Ok(vec!["students_view".into()]),
        });

        let set = shell.permissions.resolved().expect("resolved");
        assert!(set.has(PermissionKey::StudentsView));
    }

    #[test]
    fn test_unknown_permission_keys_are_dropped() {
        let mut shell = shell();
        let identity = teacher();
        shell.update(Message::IdentityChanged(Some(identity.clone())));
        shell.update(Message::PermissionsLoaded {
            user_id: identity.id,
            result: Ok(vec!["students_view".into(), "root_access".into()]),
        });

        let set = shell.permissions.resolved().expect("resolved");
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_stale_permission_result_is_dropped() {
        let mut shell = shell();
        let first = teacher();
        shell.update(Message::IdentityChanged(Some(first.clone())));

        let second = UserIdentity::new("Mr. Ode", UserRole::StaffMember, false);
        shell.update(Message::IdentityChanged(Some(second)));

        // Late response for the first identity must not touch state.
        shell.update(Message::PermissionsLoaded {
            user_id: first.id,
            result: Ok(vec!["fees_view".into()]),
        });

        assert!(matches!(shell.permissions, FetchState::Loading));
    }

    #[test]
    fn test_sign_out_resets_resolution() {
        let mut shell = shell();
        let identity = teacher();
        shell.update(Message::IdentityChanged(Some(identity.clone())));
        shell.update(Message::PermissionsLoaded {
            user_id: identity.id,
            result: Ok(vec!["students_view".into()]),
        });

        shell.update(Message::IdentityChanged(None));
        assert!(matches!(shell.permissions, FetchState::NotStarted));
        assert!(matches!(shell.modules, FetchState::NotStarted));
    }

    #[test]
    fn test_failed_fetch_marks_failed_not_resolved() {
        let mut shell = shell();
        let identity = teacher();
        shell.update(Message::IdentityChanged(Some(identity.clone())));
        shell.update(Message::PermissionsLoaded {
            user_id: identity.id,
            result: Err(crate::network::AccessError::Unavailable("timeout".into())),
        });

        assert!(matches!(shell.permissions, FetchState::Failed));
        assert!(!shell.resolution_complete());
    }

    #[test]
    fn test_branding_for_other_tenant_is_dropped() {
        let mut shell = shell();
        shell.update(Message::BrandingLoaded {
            tenant: TenantId::new("other-school").unwrap(),
            result: Ok(campus_common::TenantBranding {
                logo_url: Some("https://cdn.example/logo.png".into()),
            }),
        });

        assert!(shell.branding().is_none());
    }
}
