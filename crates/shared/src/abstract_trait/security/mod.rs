use crate::{errors::ServiceError, model::auth::AuthPrincipal};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynSecurityService = Arc<dyn SecurityServiceTrait + Send + Sync>;

/// Access decisions for collector-scoped data. Called by handlers before
/// any aggregation work; a `false` answer must reject the request.
#[async_trait]
pub trait SecurityServiceTrait {
    fn can_access_collecteur(&self, collecteur_id: i64, principal: &AuthPrincipal) -> bool;

    /// Resolves the client's collecting agent, then delegates to
    /// [`Self::can_access_collecteur`]. An unknown client propagates as
    /// NotFound.
    async fn can_access_client(
        &self,
        client_id: i64,
        principal: &AuthPrincipal,
    ) -> Result<bool, ServiceError>;
}
