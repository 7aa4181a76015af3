//! Static capability catalog
//!
//! The catalog is the fixed universe of navigation capabilities the
//! dashboard knows about. It is defined at process start and never
//! mutated; the composer decides which slice of it a given user sees.
//!
//! Entry ids double as the entry's base route suffix, which keeps persisted
//! orders readable and lets the routing table treat ids and routes
//! uniformly.

use std::collections::HashMap;

use campus_common::PermissionKey;
use once_cell::sync::Lazy;

/// A statically-declared sub-capability of a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubCapability {
    /// Display label
    pub label: &'static str,
    /// Route suffix
    pub route: &'static str,
}

/// A navigation capability in the static catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilityEntry {
    /// Stable key; also the entry's base route suffix
    pub id: &'static str,
    /// Display label
    pub label: &'static str,
    /// Icon reference understood by the hosting renderer
    pub icon: &'static str,
    /// Permission required to manage within this capability.
    ///
    /// None means the entry is always visible (subject to the admin-only
    /// exception list below).
    pub required_permission: Option<PermissionKey>,
    /// Permission required to view this capability
    pub required_view_permission: Option<PermissionKey>,
    /// Whether selecting the entry opens an inline panel instead of
    /// navigating
    pub opens_inline_panel: bool,
    /// Static sub-items
    pub sub_items: &'static [SubCapability],
}

impl CapabilityEntry {
    /// Whether this entry is always visible (no required permission)
    #[must_use]
    pub fn is_always_visible(&self) -> bool {
        self.required_permission.is_none()
    }
}

/// The static catalog, in canonical catalog order
pub const CATALOG: &[CapabilityEntry] = &[
    CapabilityEntry {
        id: "/dashboard",
        label: "Dashboard",
        icon: "speedometer",
        required_permission: None,
        required_view_permission: None,
        opens_inline_panel: false,
        sub_items: &[],
    },
    CapabilityEntry {
        id: "/calendar",
        label: "Academic Calendar",
        icon: "calendar",
        required_permission: None,
        required_view_permission: None,
        opens_inline_panel: false,
        sub_items: &[],
    },
    CapabilityEntry {
        id: "/messages",
        label: "Quick Messages",
        icon: "chat",
        required_permission: None,
        required_view_permission: None,
        opens_inline_panel: true,
        sub_items: &[],
    },
    CapabilityEntry {
        id: "/students",
        label: "Students",
        icon: "people",
        required_permission: Some(PermissionKey::StudentsManage),
        required_view_permission: Some(PermissionKey::StudentsView),
        opens_inline_panel: false,
        sub_items: &[
            SubCapability {
                label: "All Students",
                route: "/students",
            },
            SubCapability {
                label: "Add Student",
                route: "/students/add",
            },
            SubCapability {
                label: "Promotions",
                route: "/students/promotions",
            },
        ],
    },
    CapabilityEntry {
        id: "/staff",
        label: "Staff",
        icon: "person-badge",
        required_permission: Some(PermissionKey::StaffManage),
        required_view_permission: Some(PermissionKey::StaffView),
        opens_inline_panel: false,
        sub_items: &[
            SubCapability {
                label: "All Staff",
                route: "/staff",
            },
            SubCapability {
                label: "Add Staff",
                route: "/staff/add",
            },
            SubCapability {
                label: "Payroll",
                route: "/staff/payroll",
            },
        ],
    },
    CapabilityEntry {
        id: "/fees",
        label: "Fees",
        icon: "cash-stack",
        required_permission: Some(PermissionKey::FeesManage),
        required_view_permission: Some(PermissionKey::FeesView),
        opens_inline_panel: false,
        sub_items: &[
            SubCapability {
                label: "Fee Heads",
                route: "/fees/heads",
            },
            SubCapability {
                label: "Collect Fee",
                route: "/fees/collect",
            },
            SubCapability {
                label: "Fee Dues",
                route: "/fees/dues",
            },
        ],
    },
    CapabilityEntry {
        id: "/certificates",
        label: "Certificates",
        icon: "award",
        required_permission: Some(PermissionKey::CertificatesManage),
        required_view_permission: Some(PermissionKey::CertificatesView),
        opens_inline_panel: false,
        sub_items: &[
            SubCapability {
                label: "Issued Certificates",
                route: "/certificates",
            },
            SubCapability {
                label: "Templates",
                route: "/certificates/templates",
            },
        ],
    },
    CapabilityEntry {
        id: "/exams",
        label: "Examinations",
        icon: "journal-check",
        required_permission: Some(PermissionKey::ExamsManage),
        required_view_permission: Some(PermissionKey::ExamsView),
        opens_inline_panel: false,
        sub_items: &[
            SubCapability {
                label: "Schedule",
                route: "/exams/schedule",
            },
            SubCapability {
                label: "Marks Entry",
                route: "/exams/marks",
            },
            SubCapability {
                label: "Results",
                route: "/exams/results",
            },
        ],
    },
    CapabilityEntry {
        id: "/communications",
        label: "Communications",
        icon: "megaphone",
        required_permission: Some(PermissionKey::CommunicationsSend),
        required_view_permission: Some(PermissionKey::CommunicationsView),
        opens_inline_panel: false,
        sub_items: &[
            SubCapability {
                label: "Notices",
                route: "/communications/notices",
            },
            SubCapability {
                label: "SMS & Email",
                route: "/communications/outbox",
            },
        ],
    },
    CapabilityEntry {
        id: "/reports",
        label: "Reports",
        icon: "bar-chart",
        required_permission: Some(PermissionKey::ReportsView),
        required_view_permission: Some(PermissionKey::ReportsView),
        opens_inline_panel: false,
        sub_items: &[],
    },
    CapabilityEntry {
        id: "/settings",
        label: "School Settings",
        icon: "gear",
        required_permission: None,
        required_view_permission: Some(PermissionKey::SettingsManage),
        opens_inline_panel: false,
        sub_items: &[],
    },
    CapabilityEntry {
        id: "/roles",
        label: "Roles & Permissions",
        icon: "shield-lock",
        required_permission: None,
        required_view_permission: Some(PermissionKey::RolesManage),
        opens_inline_panel: false,
        sub_items: &[
            SubCapability {
                label: "Roles",
                route: "/roles",
            },
            SubCapability {
                label: "Permission Grants",
                route: "/roles/grants",
            },
        ],
    },
];

/// Entry ids that are admin-only even though their required permission is
/// None.
///
/// These are role-administration screens. The list is explicit; admin-only
/// status is never inferred from other entry fields.
pub const ADMIN_ONLY_ENTRY_IDS: &[&str] = &["/settings", "/roles"];

/// Index from entry id to catalog position
static CATALOG_INDEX: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    CATALOG
        .iter()
        .enumerate()
        .map(|(index, entry)| (entry.id, index))
        .collect()
});

/// Look up a catalog entry by id
#[must_use]
pub fn entry_by_id(id: &str) -> Option<&'static CapabilityEntry> {
    CATALOG_INDEX.get(id).map(|index| &CATALOG[*index])
}

/// Whether the given entry id is on the admin-only exception list
#[must_use]
pub fn is_admin_only(id: &str) -> bool {
    ADMIN_ONLY_ENTRY_IDS.contains(&id)
}

/// Icon for a server-declared module key
///
/// Dynamic modules that mirror a catalog capability reuse its icon; unknown
/// module keys fall back to a generic grid icon.
#[must_use]
pub fn module_icon(module_key: &str) -> &'static str {
    match module_key {
        "students" => "people",
        "staff" => "person-badge",
        "fees" => "cash-stack",
        "certificates" => "award",
        "exams" | "examinations" => "journal-check",
        "communications" => "megaphone",
        "reports" => "bar-chart",
        "admissions" => "door-open",
        "attendance" => "clipboard-check",
        "library" => "book",
        "transport" => "bus-front",
        _ => "grid",
    }
}
