use crate::errors::RepositoryError;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCollecteurQueryRepository = Arc<dyn CollecteurQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CollecteurQueryRepositoryTrait {
    async fn exists_by_id(&self, collecteur_id: i64) -> Result<bool, RepositoryError>;
}
