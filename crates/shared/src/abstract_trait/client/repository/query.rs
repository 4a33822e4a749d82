use crate::{errors::RepositoryError, model::client::ClientModel};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynClientQueryRepository = Arc<dyn ClientQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ClientQueryRepositoryTrait {
    async fn find_by_id(&self, client_id: i64) -> Result<ClientModel, RepositoryError>;

    async fn find_by_collecteur(
        &self,
        collecteur_id: i64,
    ) -> Result<Vec<ClientModel>, RepositoryError>;
}
