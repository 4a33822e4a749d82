use crate::{errors::RepositoryError, model::mouvement::MouvementModel};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynMouvementQueryRepository = Arc<dyn MouvementQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait MouvementQueryRepositoryTrait {
    /// Most recent movements of a client, strictly descending by
    /// `date_operation`, at most `limit` rows.
    async fn find_recent_by_client(
        &self,
        client_id: i64,
        limit: i64,
    ) -> Result<Vec<MouvementModel>, RepositoryError>;
}
