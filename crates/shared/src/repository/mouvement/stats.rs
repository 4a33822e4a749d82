use crate::{
    abstract_trait::mouvement::repository::stats::MouvementStatsRepositoryTrait,
    config::ConnectionPool, errors::RepositoryError, model::mouvement::MouvementTotalsModel,
};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::Row;
use tracing::error;

pub struct MouvementStatsRepository {
    db: ConnectionPool,
}

impl MouvementStatsRepository {
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
impl MouvementStatsRepositoryTrait for MouvementStatsRepository {
    async fn totals_by_client(
        &self,
        client_id: i64,
    ) -> Result<MouvementTotalsModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        // Movements whose sens matches neither tag count toward neither
        // total.
        let sql = r#"
            SELECT
                COALESCE(SUM(CASE WHEN UPPER(m.sens) = 'EPARGNE' THEN m.montant ELSE 0 END), 0)::double precision AS total_epargne,
                COALESCE(SUM(CASE WHEN UPPER(m.sens) = 'RETRAIT' THEN m.montant ELSE 0 END), 0)::double precision AS total_retraits
            FROM mouvements m
            WHERE m.client_id = $1;
        "#;

        let row = sqlx::query(sql)
            .bind(client_id)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in totals_by_client: {e:?}");
                RepositoryError::Sqlx(e)
            })?;

        Ok(MouvementTotalsModel {
            total_epargne: row.try_get("total_epargne")?,
            total_retraits: row.try_get("total_retraits")?,
        })
    }

    async fn sum_by_sens(&self, client_id: i64, sens: &str) -> Result<f64, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = r#"
            SELECT COALESCE(SUM(m.montant), 0)::double precision AS total
            FROM mouvements m
            WHERE m.client_id = $1 AND UPPER(m.sens) = UPPER($2);
        "#;

        let row = sqlx::query(sql)
            .bind(client_id)
            .bind(sens)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in sum_by_sens ({sens}): {e:?}");
                RepositoryError::Sqlx(e)
            })?;

        Ok(row.try_get("total")?)
    }

    async fn count_by_client(&self, client_id: i64) -> Result<i64, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = r#"
            SELECT COUNT(*) AS total
            FROM mouvements m
            WHERE m.client_id = $1;
        "#;

        let row = sqlx::query(sql)
            .bind(client_id)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in count_by_client: {e:?}");
                RepositoryError::Sqlx(e)
            })?;

        Ok(row.try_get("total")?)
    }

    async fn last_operation_date(
        &self,
        client_id: i64,
    ) -> Result<Option<NaiveDateTime>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = r#"
            SELECT MAX(m.date_operation) AS last_date
            FROM mouvements m
            WHERE m.client_id = $1;
        "#;

        let row = sqlx::query(sql)
            .bind(client_id)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in last_operation_date: {e:?}");
                RepositoryError::Sqlx(e)
            })?;

        Ok(row.try_get("last_date")?)
    }
}
