//! Typed permission keys and permission sets
//!
//! The access-control backend speaks flat snake_case permission strings.
//! Those strings are parsed into a closed enum at the wire boundary so the
//! rest of the subsystem never handles unchecked strings; unknown keys are
//! rejected there rather than silently treated as absent.

use std::collections::HashSet;

use strum::AsRefStr;

/// Permission keys recognized by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum PermissionKey {
    /// Create and edit admission records
    AdmissionsManage,
    /// View admission records
    AdmissionsView,
    /// Record and correct attendance
    AttendanceManage,
    /// View attendance registers
    AttendanceView,
    /// Issue and revoke certificates
    CertificatesManage,
    /// View issued certificates
    CertificatesView,
    /// Send notices and messages
    CommunicationsSend,
    /// View notices and messages
    CommunicationsView,
    /// Schedule exams and enter marks
    ExamsManage,
    /// View exam schedules and results
    ExamsView,
    /// Collect fee payments
    FeesCollect,
    /// Define fee heads and structures
    FeesManage,
    /// View fee records and dues
    FeesView,
    /// Manage the book catalog and loans
    LibraryManage,
    /// Browse the library catalog
    LibraryView,
    /// View generated reports
    ReportsView,
    /// Manage roles and permission grants
    RolesManage,
    /// Edit school-wide settings
    SettingsManage,
    /// Create and edit staff records
    StaffManage,
    /// View staff records
    StaffView,
    /// Create and edit student records
    StudentsManage,
    /// View student records
    StudentsView,
    /// Manage routes and vehicles
    TransportManage,
    /// View transport assignments
    TransportView,
}

impl PermissionKey {
    /// Convert a permission key to its wire string.
    ///
    /// Uses strum's AsRefStr to convert PascalCase variants to snake_case
    /// strings (StudentsView to students_view). Zero allocation.
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    /// Parse a permission string into a PermissionKey variant.
    ///
    /// Accepts snake_case strings like "students_view", "fees_collect", etc.
    ///
    /// Returns Some(PermissionKey) if the string is valid, None otherwise.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admissions_manage" => Some(PermissionKey::AdmissionsManage),
            "admissions_view" => Some(PermissionKey::AdmissionsView),
            "attendance_manage" => Some(PermissionKey::AttendanceManage),
            "attendance_view" => Some(PermissionKey::AttendanceView),
            "certificates_manage" => Some(PermissionKey::CertificatesManage),
            "certificates_view" => Some(PermissionKey::CertificatesView),
            "communications_send" => Some(PermissionKey::CommunicationsSend),
            "communications_view" => Some(PermissionKey::CommunicationsView),
            "exams_manage" => Some(PermissionKey::ExamsManage),
            "exams_view" => Some(PermissionKey::ExamsView),
            "fees_collect" => Some(PermissionKey::FeesCollect),
            "fees_manage" => Some(PermissionKey::FeesManage),
            "fees_view" => Some(PermissionKey::FeesView),
            "library_manage" => Some(PermissionKey::LibraryManage),
            "library_view" => Some(PermissionKey::LibraryView),
            "reports_view" => Some(PermissionKey::ReportsView),
            "roles_manage" => Some(PermissionKey::RolesManage),
            "settings_manage" => Some(PermissionKey::SettingsManage),
            "staff_manage" => Some(PermissionKey::StaffManage),
            "staff_view" => Some(PermissionKey::StaffView),
            "students_manage" => Some(PermissionKey::StudentsManage),
            "students_view" => Some(PermissionKey::StudentsView),
            "transport_manage" => Some(PermissionKey::TransportManage),
            "transport_view" => Some(PermissionKey::TransportView),
            _ => None,
        }
    }
}

/// A set of granted permission keys
///
/// Wraps a `HashSet<PermissionKey>` so callers query typed keys instead of
/// comparing strings. Empty for unrestricted administrators, who bypass
/// permission checks entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionSet {
    keys: HashSet<PermissionKey>,
}

impl PermissionSet {
    /// Create a new empty permission set
    pub fn new() -> Self {
        Self {
            keys: HashSet::new(),
        }
    }

    /// Parse a flat list of wire permission strings into a set.
    ///
    /// Unknown keys are rejected, not granted: they are returned separately
    /// so the caller can log them. Missing or empty input yields an empty
    /// set (fail-closed).
    pub fn parse(raw: &[String]) -> (Self, Vec<String>) {
        let mut set = Self::new();
        let mut rejected = Vec::new();

        for key in raw {
            match PermissionKey::parse(key) {
                Some(parsed) => {
                    set.keys.insert(parsed);
                }
                None => rejected.push(key.clone()),
            }
        }

        (set, rejected)
    }

    /// Add a permission key to the set
    pub fn insert(&mut self, key: PermissionKey) {
        self.keys.insert(key);
    }

    /// Check whether a permission key is granted
    #[must_use]
    pub fn has(&self, key: PermissionKey) -> bool {
        self.keys.contains(&key)
    }

    /// Check whether any of the given permission keys is granted
    ///
    /// Returns true if the slice is empty (no permissions required).
    #[must_use]
    pub fn has_any(&self, keys: &[PermissionKey]) -> bool {
        keys.is_empty() || keys.iter().any(|key| self.keys.contains(key))
    }

    /// Number of granted keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Convert the set to a vector (order unspecified)
    pub fn to_vec(&self) -> Vec<PermissionKey> {
        self.keys.iter().copied().collect()
    }
}

impl FromIterator<PermissionKey> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = PermissionKey>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}
