//! Server-declared dynamic module shapes
//!
//! Restricted users receive their navigable modules from the access-control
//! backend as structured records. Unknown or missing access fields
//! deserialize to `false` so a sparse or malformed response never widens
//! access.

use serde::{Deserialize, Serialize};

/// A sub-module inside a server-declared module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubModule {
    /// Display name (e.g. "Fee Heads")
    pub name: String,
    /// Stable key (e.g. "fee_heads")
    pub key: String,
    /// Route suffix the sub-module navigates to (e.g. "/fees/heads")
    pub route: String,
    /// Whether the user may view this sub-module
    #[serde(default)]
    pub has_view_access: bool,
    /// Whether the user may edit within this sub-module
    #[serde(default)]
    pub has_edit_access: bool,
}

/// A server-declared, per-user navigation module
///
/// Fetched once per authenticated session for restricted users and replaced
/// wholesale on refetch; never partially patched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicModule {
    /// Stable module key (e.g. "fees")
    pub module_key: String,
    /// Display name (e.g. "Fees")
    pub module_name: String,
    /// Server-suggested position among dynamic modules
    #[serde(default)]
    pub display_order: u32,
    /// Ordered sub-modules
    #[serde(default)]
    pub sub_modules: Vec<SubModule>,
}

impl DynamicModule {
    /// Sub-modules the user may view, in declared order
    pub fn viewable_sub_modules(&self) -> impl Iterator<Item = &SubModule> {
        self.sub_modules.iter().filter(|sub| sub.has_view_access)
    }

    /// First sub-module the user may view, if any
    ///
    /// The synthesized menu entry derives its id from this sub-module's
    /// route; a module with no viewable sub-module yields no entry.
    #[must_use]
    pub fn first_viewable(&self) -> Option<&SubModule> {
        self.viewable_sub_modules().next()
    }
}

/// Cosmetic per-tenant branding
///
/// Not part of menu logic proper; carried so the shell can hand the hosting
/// layout a logo without a second fetch path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantBranding {
    /// Logo URL, if the tenant configured one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sub(name: &str, route: &str, view: bool) -> SubModule {
        SubModule {
            name: name.to_string(),
            key: name.to_lowercase().replace(' ', "_"),
            route: route.to_string(),
            has_view_access: view,
            has_edit_access: false,
        }
    }

    #[test]
    fn test_missing_access_fields_deserialize_closed() {
        // A response that omits the access booleans grants nothing
        let json = r#"{
            "name": "Fee Heads",
            "key": "fee_heads",
            "route": "/fees/heads"
        }"#;
        let parsed: SubModule = serde_json::from_str(json).expect("deserialize");
        assert!(!parsed.has_view_access);
        assert!(!parsed.has_edit_access);
    }

    #[test]
    fn test_module_missing_sub_modules_deserializes_empty() {
        let json = r#"{"module_key": "fees", "module_name": "Fees"}"#;
        let parsed: DynamicModule = serde_json::from_str(json).expect("deserialize");
        assert!(parsed.sub_modules.is_empty());
        assert_eq!(parsed.display_order, 0);
    }

    #[test]
    fn test_first_viewable_skips_denied() {
        let module = DynamicModule {
            module_key: "fees".to_string(),
            module_name: "Fees".to_string(),
            display_order: 1,
            sub_modules: vec![
                sub("Fee Heads", "/fees/heads", false),
                sub("Collect Fee", "/fees/collect", true),
                sub("Dues", "/fees/dues", true),
            ],
        };

        assert_eq!(module.first_viewable().map(|s| s.route.as_str()), Some("/fees/collect"));
        assert_eq!(module.viewable_sub_modules().count(), 2);
    }

    #[test]
    fn test_first_viewable_none_when_all_denied() {
        let module = DynamicModule {
            module_key: "fees".to_string(),
            module_name: "Fees".to_string(),
            display_order: 1,
            sub_modules: vec![sub("Fee Heads", "/fees/heads", false)],
        };
        assert!(module.first_viewable().is_none());
    }

    #[test]
    fn test_branding_default_has_no_logo() {
        assert!(TenantBranding::default().logo_url.is_none());
    }
}
