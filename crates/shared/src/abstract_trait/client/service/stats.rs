use crate::{
    domain::responses::{ApiResponse, ClientSummaryResponse, MouvementResponse},
    errors::ServiceError,
    model::client::ClientModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynClientStatsService = Arc<dyn ClientStatsServiceTrait + Send + Sync>;

#[async_trait]
pub trait ClientStatsServiceTrait {
    /// Most recent transactions of a client, projected for display.
    /// A non-positive `limit` yields an empty sequence.
    async fn recent_transactions(
        &self,
        client_id: i64,
        limit: i64,
    ) -> Result<Vec<MouvementResponse>, ServiceError>;

    async fn total_epargne(&self, client_id: i64) -> Result<f64, ServiceError>;

    async fn total_retraits(&self, client_id: i64) -> Result<f64, ServiceError>;

    /// Full summary for one already-loaded client row.
    async fn enrich_client(
        &self,
        client: &ClientModel,
    ) -> Result<ClientSummaryResponse, ServiceError>;

    /// Independent per-item enrichment; output order matches input order,
    /// one summary per client. Any item failure fails the whole batch.
    async fn enrich_all(
        &self,
        clients: Vec<ClientModel>,
    ) -> Result<Vec<ClientSummaryResponse>, ServiceError>;

    /// Enriched summaries for every client of a collecting agent.
    async fn collecteur_clients(
        &self,
        collecteur_id: i64,
    ) -> Result<ApiResponse<Vec<ClientSummaryResponse>>, ServiceError>;

    /// Enriched summary for a single client looked up by id.
    async fn client_summary(
        &self,
        client_id: i64,
    ) -> Result<ApiResponse<ClientSummaryResponse>, ServiceError>;
}
