use crate::{errors::RepositoryError, model::mouvement::MouvementTotalsModel};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::sync::Arc;

pub type DynMouvementStatsRepository = Arc<dyn MouvementStatsRepositoryTrait + Send + Sync>;

/// Aggregate queries over a client's movement history. A client with no
/// movements (or an unknown id) yields zero totals, an empty last date and
/// a zero count, never an error.
#[async_trait]
pub trait MouvementStatsRepositoryTrait {
    /// Both totals in a single grouped query.
    async fn totals_by_client(
        &self,
        client_id: i64,
    ) -> Result<MouvementTotalsModel, RepositoryError>;

    /// Independent per-direction sum, used as the fallback when the
    /// grouped query fails. `sens` is matched case-insensitively.
    async fn sum_by_sens(&self, client_id: i64, sens: &str) -> Result<f64, RepositoryError>;

    async fn count_by_client(&self, client_id: i64) -> Result<i64, RepositoryError>;

    async fn last_operation_date(
        &self,
        client_id: i64,
    ) -> Result<Option<NaiveDateTime>, RepositoryError>;
}
