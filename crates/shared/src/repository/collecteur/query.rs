use crate::{
    abstract_trait::collecteur::repository::query::CollecteurQueryRepositoryTrait,
    config::ConnectionPool, errors::RepositoryError,
};
use async_trait::async_trait;
use sqlx::Row;
use tracing::error;

pub struct CollecteurQueryRepository {
    db: ConnectionPool,
}

impl CollecteurQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn get_conn(
        &self,
    ) -> Result<sqlx::pool::PoolConnection<sqlx::Postgres>, RepositoryError> {
        self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })
    }
}

#[async_trait]
impl CollecteurQueryRepositoryTrait for CollecteurQueryRepository {
    async fn exists_by_id(&self, collecteur_id: i64) -> Result<bool, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = r#"
            SELECT EXISTS(
                SELECT 1 FROM collecteurs WHERE collecteur_id = $1
            ) AS present;
        "#;

        let row = sqlx::query(sql)
            .bind(collecteur_id)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in exists_by_id: {e:?}");
                RepositoryError::Sqlx(e)
            })?;

        Ok(row.try_get("present")?)
    }
}
