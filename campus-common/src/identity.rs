//! User identity and role types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role of the signed-in user
///
/// The role drives the displayed role label and which dashboard the hosting
/// application lands the user on; access decisions come from
/// `is_unrestricted_admin` and the granted permission set, never from the
/// role alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// School administrator (typically unrestricted)
    SchoolAdministrator,
    /// Teaching staff
    Teacher,
    /// Non-teaching school staff
    StaffMember,
    /// Student account
    Student,
}

impl UserRole {
    /// Human-readable role label for display next to the user's name
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::SchoolAdministrator => "School Administrator",
            Self::Teacher => "Teacher",
            Self::StaffMember => "Staff Member",
            Self::Student => "Student",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Identity of the signed-in user
///
/// Sourced from the login flow and handed to the shell as a message. The
/// shell treats it as read-only; a logout/login produces a fresh value with
/// a different `id`, which is what stale-response rejection keys off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Stable user id, used to tag access-control fetches
    pub id: Uuid,
    /// Display name
    pub display_name: String,
    /// User role
    pub role: UserRole,
    /// Whether this user bypasses permission checks entirely
    pub is_unrestricted_admin: bool,
}

impl UserIdentity {
    /// Create an identity with a fresh id
    pub fn new(display_name: impl Into<String>, role: UserRole, is_unrestricted_admin: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            display_name: display_name.into(),
            role,
            is_unrestricted_admin,
        }
    }
}
