//! Access-control network boundary
//!
//! The shell never talks to the backend directly; it consumes an
//! [`AccessApi`] implementation supplied by the hosting application. The
//! fetch driver runs both access fetches concurrently and delivers
//! identity-tagged result messages, so responses that outlive their
//! identity are recognizable and droppable on arrival.

use std::sync::Arc;

use async_trait::async_trait;
use campus_common::{DynamicModule, TenantBranding, TenantId, UserIdentity};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::types::Message;

/// Errors from the access-control backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// The backend could not be reached or rejected the request
    Unavailable(String),
    /// The response body did not match the expected shape
    Malformed(String),
}

impl std::fmt::Display for AccessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(detail) => write!(f, "access backend unavailable: {}", detail),
            Self::Malformed(detail) => write!(f, "malformed access response: {}", detail),
        }
    }
}

impl std::error::Error for AccessError {}

/// Read-only access-control collaborator
#[async_trait]
pub trait AccessApi: Send + Sync {
    /// Flat permission keys granted to a user
    async fn permissions_for(&self, user_id: Uuid) -> Result<Vec<String>, AccessError>;

    /// Server-declared navigation modules for a user
    async fn modules_for(&self, user_id: Uuid) -> Result<Vec<DynamicModule>, AccessError>;

    /// Cosmetic branding for a tenant
    async fn branding_for(&self, tenant: &TenantId) -> Result<TenantBranding, AccessError>;
}

/// Spawn both access fetches for an identity
///
/// The fetches run concurrently; each result is sent as its own message
/// tagged with the identity id it was issued for. The receiving handler
/// compares that tag against the current identity and drops stale results.
///
/// Send failures mean the shell is gone; the task just stops.
pub fn spawn_access_fetch(
    api: Arc<dyn AccessApi>,
    identity: &UserIdentity,
    tx: UnboundedSender<Message>,
) -> JoinHandle<()> {
    let user_id = identity.id;
    tokio::spawn(async move {
        let (permissions, modules) =
            tokio::join!(api.permissions_for(user_id), api.modules_for(user_id));

        let _ = tx.send(Message::PermissionsLoaded {
            user_id,
            result: permissions,
        });
        let _ = tx.send(Message::ModulesLoaded {
            user_id,
            result: modules,
        });
    })
}

/// Spawn the tenant branding fetch
pub fn spawn_branding_fetch(
    api: Arc<dyn AccessApi>,
    tenant: TenantId,
    tx: UnboundedSender<Message>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let result = api.branding_for(&tenant).await;
        let _ = tx.send(Message::BrandingLoaded { tenant, result });
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use campus_common::{SubModule, UserRole};
    use tokio::sync::mpsc;

    use super::*;

    /// Scripted fake backend
    struct FakeApi {
        permissions: Result<Vec<String>, AccessError>,
        modules: Result<Vec<DynamicModule>, AccessError>,
    }

    #[async_trait]
    impl AccessApi for FakeApi {
        async fn permissions_for(&self, _user_id: Uuid) -> Result<Vec<String>, AccessError> {
            self.permissions.clone()
        }

        async fn modules_for(&self, _user_id: Uuid) -> Result<Vec<DynamicModule>, AccessError> {
            self.modules.clone()
        }

        async fn branding_for(&self, _tenant: &TenantId) -> Result<TenantBranding, AccessError> {
            Ok(TenantBranding {
                logo_url: Some("https://cdn.example/logo.png".to_string()),
            })
        }
    }

    fn sample_module() -> DynamicModule {
        DynamicModule {
            module_key: "fees".to_string(),
            module_name: "Fees".to_string(),
            display_order: 1,
            sub_modules: vec![SubModule {
                name: "Fee Heads".to_string(),
                key: "fee_heads".to_string(),
                route: "/fees/heads".to_string(),
                has_view_access: true,
                has_edit_access: false,
            }],
        }
    }

    #[tokio::test]
    async fn test_fetch_delivers_tagged_results() {
        let api = Arc::new(FakeApi {
            permissions: Ok(vec!["fees_view".to_string()]),
            modules: Ok(vec![sample_module()]),
        });
        let identity = UserIdentity::new("Asha", UserRole::StaffMember, false);
        let (tx, mut rx) = mpsc::unbounded_channel();

        spawn_access_fetch(api, &identity, tx)
            .await
            .expect("fetch task");

        let first = rx.recv().await.expect("permissions message");
        match first {
            Message::PermissionsLoaded { user_id, result } => {
                assert_eq!(user_id, identity.id);
                assert_eq!(result, Ok(vec!["fees_view".to_string()]));
            }
            other => panic!("unexpected message: {:?}", other),
        }

        let second = rx.recv().await.expect("modules message");
        match second {
            Message::ModulesLoaded { user_id, result } => {
                assert_eq!(user_id, identity.id);
                assert_eq!(result.expect("modules").len(), 1);
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_delivers_errors_as_results() {
        let api = Arc::new(FakeApi {
            permissions: Err(AccessError::Unavailable("503".to_string())),
            modules: Ok(vec![]),
        });
        let identity = UserIdentity::new("Asha", UserRole::StaffMember, false);
        let (tx, mut rx) = mpsc::unbounded_channel();

        spawn_access_fetch(api, &identity, tx)
            .await
            .expect("fetch task");

        let first = rx.recv().await.expect("permissions message");
        match first {
            Message::PermissionsLoaded { result, .. } => {
                assert_eq!(result, Err(AccessError::Unavailable("503".to_string())));
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_branding_fetch() {
        let api = Arc::new(FakeApi {
            permissions: Ok(vec![]),
            modules: Ok(vec![]),
        });
        let tenant = TenantId::new("st-marys").expect("tenant");
        let (tx, mut rx) = mpsc::unbounded_channel();

        spawn_branding_fetch(api, tenant.clone(), tx)
            .await
            .expect("branding task");

        match rx.recv().await.expect("branding message") {
            Message::BrandingLoaded {
                tenant: tagged,
                result,
            } => {
                assert_eq!(tagged, tenant);
                assert!(result.expect("branding").logo_url.is_some());
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }
}
