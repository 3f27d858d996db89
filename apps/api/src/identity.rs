//! Request ownership. Every handler that reads or writes owner data gets the
//! owner through [`CurrentUser`], which asks the configured [`OwnerResolver`].

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

/// Decides which user a request acts for.
///
/// Carried in `AppState` as `Arc<dyn OwnerResolver>`.
#[async_trait]
pub trait OwnerResolver: Send + Sync {
    async fn resolve(&self, parts: &Parts) -> Result<Uuid, AppError>;
}

/// Every request belongs to one configured user.
pub struct SingleTenant(pub Uuid);

#[async_trait]
impl OwnerResolver for SingleTenant {
    async fn resolve(&self, _parts: &Parts) -> Result<Uuid, AppError> {
        Ok(self.0)
    }
}

/// Extractor yielding the owner of the current request.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser(pub Uuid);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        state.owner.resolve(parts).await.map(CurrentUser)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    #[tokio::test]
    async fn test_single_tenant_ignores_request() {
        let id = Uuid::new_v4();
        let resolver = SingleTenant(id);
        let (parts, _) = Request::builder()
            .uri("/api/v1/profile")
            .header("authorization", "Bearer someone-else")
            .body(())
            .unwrap()
            .into_parts();
        assert_eq!(resolver.resolve(&parts).await.unwrap(), id);
    }
}
