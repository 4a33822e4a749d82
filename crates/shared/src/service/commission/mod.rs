use crate::{
    abstract_trait::commission::CommissionParameterServiceTrait,
    domain::responses::{CommissionParameterResponse, DEFAULT_COMMISSION_RATE},
};
use async_trait::async_trait;
use tracing::debug;

/// Placeholder resolver: every client gets the default percentage
/// schedule until commission rules are stored per client profile. Real
/// tiered/profile-based logic replaces this implementation behind the
/// same trait.
pub struct DefaultCommissionParameterService;

impl DefaultCommissionParameterService {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DefaultCommissionParameterService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommissionParameterServiceTrait for DefaultCommissionParameterService {
    async fn resolve(&self, client_id: i64) -> CommissionParameterResponse {
        debug!("resolving commission parameters for client {client_id} (default schedule)");
        CommissionParameterResponse::percentage(DEFAULT_COMMISSION_RATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::responses::CommissionType;

    #[tokio::test]
    async fn every_client_gets_the_default_percentage() {
        let service = DefaultCommissionParameterService::new();

        for client_id in [1, 42, 999_999, -5] {
            let params = service.resolve(client_id).await;
            assert_eq!(params.type_commission, CommissionType::Pourcentage);
            assert_eq!(params.pourcentage, Some(2.0));
            assert!(params.montant_fixe.is_none());
            assert!(params.paliers.is_none());
        }
    }
}
