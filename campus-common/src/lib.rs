//! Campus Common Library
//!
//! Shared types and validators for the Campus school-management dashboard.

pub mod identity;
pub mod modules;
pub mod permission;
pub mod tenant;
pub mod validators;

pub use identity::{UserIdentity, UserRole};
pub use modules::{DynamicModule, SubModule, TenantBranding};
pub use permission::{PermissionKey, PermissionSet};
pub use tenant::TenantId;

/// All known permission keys in the Campus access-control system.
///
/// These permission strings are what the access-control backend returns in
/// its flattened permission list. The list is maintained in alphabetical
/// order.
///
/// Permission meanings:
/// - `admissions_manage`: Create and edit admission records
/// - `admissions_view`: View admission records
/// - `attendance_manage`: Record and correct attendance
/// - `attendance_view`: View attendance registers
/// - `certificates_manage`: Issue and revoke certificates
/// - `certificates_view`: View issued certificates
/// - `communications_send`: Send notices and messages
/// - `communications_view`: View notices and messages
/// - `exams_manage`: Schedule exams and enter marks
/// - `exams_view`: View exam schedules and results
/// - `fees_collect`: Collect fee payments
/// - `fees_manage`: Define fee heads and structures
/// - `fees_view`: View fee records and dues
/// - `library_manage`: Manage the book catalog and loans
/// - `library_view`: Browse the library catalog
/// - `reports_view`: View generated reports
/// - `roles_manage`: Manage roles and permission grants
/// - `settings_manage`: Edit school-wide settings
/// - `staff_manage`: Create and edit staff records
/// - `staff_view`: View staff records
/// - `students_manage`: Create and edit student records
/// - `students_view`: View student records
/// - `transport_manage`: Manage routes and vehicles
/// - `transport_view`: View transport assignments
pub const ALL_PERMISSION_KEYS: &[&str] = &[
    "admissions_manage",
    "admissions_view",
    "attendance_manage",
    "attendance_view",
    "certificates_manage",
    "certificates_view",
    "communications_send",
    "communications_view",
    "exams_manage",
    "exams_view",
    "fees_collect",
    "fees_manage",
    "fees_view",
    "library_manage",
    "library_view",
    "reports_view",
    "roles_manage",
    "settings_manage",
    "staff_manage",
    "staff_view",
    "students_manage",
    "students_view",
    "transport_manage",
    "transport_view",
];

/// Number of known permission keys.
pub const PERMISSION_KEY_COUNT: usize = ALL_PERMISSION_KEYS.len();
