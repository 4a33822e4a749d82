use crate::domain::responses::CommissionParameterResponse;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCommissionParameterService = Arc<dyn CommissionParameterServiceTrait + Send + Sync>;

/// Resolves the commission schedule applying to a client. Always succeeds,
/// including for identifiers with no matching client.
#[async_trait]
pub trait CommissionParameterServiceTrait {
    async fn resolve(&self, client_id: i64) -> CommissionParameterResponse;
}
