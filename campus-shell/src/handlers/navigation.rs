//! Route and selection handlers
//!
//! Selection is validated against the composed menu before any effect is
//! emitted: an entry or sub-route that is not in the effective menu is a
//! no-op, so a stale click can never navigate past a permission check.

use crate::DashboardShell;
use crate::types::Effect;

impl DashboardShell {
    /// The host router reports a new URL path
    pub(crate) fn handle_route_changed(&mut self, path: &str) -> Vec<Effect> {
        self.path = self.path_suffix(path);
        Vec::new()
    }

    /// A top-level menu entry was activated
    pub(crate) fn handle_entry_selected(&mut self, entry_id: &str) -> Vec<Effect> {
        let menu = self.effective_menu();
        let Some(entry) = menu.iter().find(|entry| entry.id == entry_id) else {
            return Vec::new();
        };

        if entry.opens_inline_panel {
            return vec![Effect::OpenPanel {
                entry_id: entry.id.clone(),
            }];
        }

        vec![Effect::Navigate {
            path: format!("{}{}", self.tenant.base_path(), entry.base_route()),
        }]
    }

    /// A sub-item inside an expanded entry was activated
    pub(crate) fn handle_sub_item_selected(&mut self, route: &str) -> Vec<Effect> {
        let menu = self.effective_menu();
        let known = menu
            .iter()
            .flat_map(|entry| entry.sub_items.iter())
            .any(|sub| sub.route == route);
        if !known {
            return Vec::new();
        }

        vec![Effect::Navigate {
            path: format!("{}{route}", self.tenant.base_path()),
        }]
    }

    /// The user toggled an entry's expansion chevron
    pub(crate) fn handle_expansion_toggled(&mut self, entry_id: &str) -> Vec<Effect> {
        let menu = self.effective_menu();
        if !menu.iter().any(|entry| entry.id == entry_id) {
            return Vec::new();
        }

        let current = self
            .expansion_toggles
            .get(entry_id)
            .copied()
            .unwrap_or(false);
        self.expansion_toggles
            .insert(entry_id.to_string(), !current);
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use campus_common::{TenantId, UserIdentity, UserRole};

    use crate::DashboardShell;
    use crate::storage::MemoryStore;
    use crate::types::{Effect, Message};

    fn admin_shell() -> DashboardShell {
        let mut shell = DashboardShell::new(
            TenantId::new("st-marys").unwrap(),
            Box::new(MemoryStore::new()),
        );
        let admin = UserIdentity::new("Head", UserRole::SchoolAdministrator, true);
        shell.update(Message::IdentityChanged(Some(admin)));
        shell
    }

    #[test]
    fn test_route_change_strips_tenant_prefix() {
        let mut shell = admin_shell();
        shell.update(Message::RouteChanged {
            path: "/st-marys/students/add".into(),
        });
        assert_eq!(shell.path, "/students/add");
    }

    #[test]
    fn test_bare_tenant_path_falls_back_to_dashboard() {
        let mut shell = admin_shell();
        shell.update(Message::RouteChanged {
            path: "/st-marys".into(),
        });
        assert_eq!(shell.path, "/dashboard");
    }

    #[test]
    fn test_entry_selection_navigates_with_tenant_prefix() {
        let mut shell = admin_shell();
        let effects = shell.update(Message::EntrySelected {
            entry_id: "/students".into(),
        });
        assert_eq!(
            effects,
            vec![Effect::Navigate {
                path: "/st-marys/students".into()
            }]
        );
    }

    #[test]
    fn test_panel_entry_opens_inline() {
        let mut shell = admin_shell();
        let effects = shell.update(Message::EntrySelected {
            entry_id: "/messages".into(),
        });
        assert_eq!(
            effects,
            vec![Effect::OpenPanel {
                entry_id: "/messages".into()
            }]
        );
    }

    #[test]
    fn test_unknown_entry_selection_is_a_no_op() {
        let mut shell = admin_shell();
        let effects = shell.update(Message::EntrySelected {
            entry_id: "/payroll".into(),
        });
        assert!(effects.is_empty());
    }

    #[test]
    fn test_sub_item_outside_menu_is_a_no_op() {
        let mut shell = admin_shell();
        let effects = shell.update(Message::SubItemSelected {
            route: "/payroll/run".into(),
        });
        assert!(effects.is_empty());
    }

    #[test]
    fn test_expansion_toggle_flips() {
        let mut shell = admin_shell();
        shell.update(Message::ExpansionToggled {
            entry_id: "/students".into(),
        });
        assert_eq!(shell.expansion_toggles.get("/students"), Some(&true));

        shell.update(Message::ExpansionToggled {
            entry_id: "/students".into(),
        });
        assert_eq!(shell.expansion_toggles.get("/students"), Some(&false));
    }
}
