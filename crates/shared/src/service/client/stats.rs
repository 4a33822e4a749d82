use crate::{
    abstract_trait::{
        client::{repository::query::DynClientQueryRepository, service::stats::ClientStatsServiceTrait},
        collecteur::repository::query::DynCollecteurQueryRepository,
        commission::DynCommissionParameterService,
        mouvement::repository::{
            query::DynMouvementQueryRepository, stats::DynMouvementStatsRepository,
        },
    },
    domain::responses::{ApiResponse, ClientSummaryResponse, MouvementResponse},
    errors::{RepositoryError, ServiceError},
    model::{
        client::ClientModel,
        mouvement::{SENS_EPARGNE, SENS_RETRAIT},
    },
};
use async_trait::async_trait;
use futures::future::try_join_all;
use tracing::{error, info, warn};

/// Size of the recent-transaction window attached to every summary.
pub const RECENT_TRANSACTIONS_WINDOW: i64 = 20;

pub struct ClientStatsServiceDeps {
    pub client_query: DynClientQueryRepository,
    pub collecteur_query: DynCollecteurQueryRepository,
    pub mouvement_query: DynMouvementQueryRepository,
    pub mouvement_stats: DynMouvementStatsRepository,
    pub commission: DynCommissionParameterService,
}

pub struct ClientStatsService {
    client_query: DynClientQueryRepository,
    collecteur_query: DynCollecteurQueryRepository,
    mouvement_query: DynMouvementQueryRepository,
    mouvement_stats: DynMouvementStatsRepository,
    commission: DynCommissionParameterService,
}

impl ClientStatsService {
    pub fn new(deps: ClientStatsServiceDeps) -> Self {
        Self {
            client_query: deps.client_query,
            collecteur_query: deps.collecteur_query,
            mouvement_query: deps.mouvement_query,
            mouvement_stats: deps.mouvement_stats,
            commission: deps.commission,
        }
    }

    /// Both totals, preferring the single grouped query. When that query
    /// fails, each total is recomputed through an independent sum; for
    /// well-formed data the two paths agree.
    async fn compute_totals(&self, client_id: i64) -> Result<(f64, f64), ServiceError> {
        match self.mouvement_stats.totals_by_client(client_id).await {
            Ok(totals) => Ok((totals.total_epargne, totals.total_retraits)),
            Err(e) => {
                warn!(
                    "⚠️ grouped totals query failed for client {client_id}, falling back to per-sens sums: {e:?}"
                );
                let epargne = self.mouvement_stats.sum_by_sens(client_id, SENS_EPARGNE).await?;
                let retraits = self.mouvement_stats.sum_by_sens(client_id, SENS_RETRAIT).await?;
                Ok((epargne, retraits))
            }
        }
    }
}

#[async_trait]
impl ClientStatsServiceTrait for ClientStatsService {
    async fn recent_transactions(
        &self,
        client_id: i64,
        limit: i64,
    ) -> Result<Vec<MouvementResponse>, ServiceError> {
        if limit <= 0 {
            return Ok(Vec::new());
        }

        let mouvements = self
            .mouvement_query
            .find_recent_by_client(client_id, limit)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch recent mouvements for client {client_id}: {e:?}");
                ServiceError::Repo(e)
            })?;

        Ok(mouvements.into_iter().map(MouvementResponse::from).collect())
    }

    async fn total_epargne(&self, client_id: i64) -> Result<f64, ServiceError> {
        Ok(self.mouvement_stats.sum_by_sens(client_id, SENS_EPARGNE).await?)
    }

    async fn total_retraits(&self, client_id: i64) -> Result<f64, ServiceError> {
        Ok(self.mouvement_stats.sum_by_sens(client_id, SENS_RETRAIT).await?)
    }

    async fn enrich_client(
        &self,
        client: &ClientModel,
    ) -> Result<ClientSummaryResponse, ServiceError> {
        let client_id = client.client_id;

        let transactions = self
            .recent_transactions(client_id, RECENT_TRANSACTIONS_WINDOW)
            .await?;
        let (total_epargne, total_retraits) = self.compute_totals(client_id).await?;
        let commission_parameter = self.commission.resolve(client_id).await;

        Ok(ClientSummaryResponse::compose(
            client,
            transactions,
            total_epargne,
            total_retraits,
            commission_parameter,
        ))
    }

    async fn enrich_all(
        &self,
        clients: Vec<ClientModel>,
    ) -> Result<Vec<ClientSummaryResponse>, ServiceError> {
        // Items are independent reads; fan them out and let try_join_all
        // keep the output aligned with the input order. One failing item
        // fails the batch rather than silently dropping a position.
        try_join_all(clients.iter().map(|client| self.enrich_client(client))).await
    }

    async fn collecteur_clients(
        &self,
        collecteur_id: i64,
    ) -> Result<ApiResponse<Vec<ClientSummaryResponse>>, ServiceError> {
        info!("📋 Fetching enriched clients for collecteur {collecteur_id}");

        let exists = self.collecteur_query.exists_by_id(collecteur_id).await?;
        if !exists {
            return Err(ServiceError::NotFound(format!(
                "Collecteur {collecteur_id} not found"
            )));
        }

        let clients = self.client_query.find_by_collecteur(collecteur_id).await?;
        let total = clients.len();
        let summaries = self.enrich_all(clients).await?;

        info!("✅ Enriched {total} clients for collecteur {collecteur_id}");

        Ok(ApiResponse::success(
            format!("Retrieved {total} clients with full statistics"),
            summaries,
        ))
    }

    async fn client_summary(
        &self,
        client_id: i64,
    ) -> Result<ApiResponse<ClientSummaryResponse>, ServiceError> {
        info!("📊 Fetching full summary for client {client_id}");

        let client = self.client_query.find_by_id(client_id).await.map_err(|e| {
            if matches!(e, RepositoryError::NotFound) {
                ServiceError::NotFound(format!("Client {client_id} not found"))
            } else {
                ServiceError::Repo(e)
            }
        })?;

        let summary = self.enrich_client(&client).await?;

        info!("✅ Summary composed for client {client_id}");

        Ok(ApiResponse::success("Client summary retrieved", summary))
    }
}
