use crate::{
    abstract_trait::mouvement::repository::query::MouvementQueryRepositoryTrait,
    config::ConnectionPool, errors::RepositoryError, model::mouvement::MouvementModel,
};
use async_trait::async_trait;
use sqlx::Row;
use tracing::error;

pub struct MouvementQueryRepository {
    db: ConnectionPool,
}

impl MouvementQueryRepository {
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
impl MouvementQueryRepositoryTrait for MouvementQueryRepository {
    async fn find_recent_by_client(
        &self,
        client_id: i64,
        limit: i64,
    ) -> Result<Vec<MouvementModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = r#"
            SELECT
                m.mouvement_id,
                m.client_id,
                m.montant,
                m.sens,
                m.libelle,
                m.date_operation,
                m.type_mouvement,
                m.collecteur_id,
                col.nom AS collecteur_nom,
                col.prenom AS collecteur_prenom
            FROM mouvements m
            LEFT JOIN collecteurs col ON col.collecteur_id = m.collecteur_id
            WHERE m.client_id = $1
            ORDER BY m.date_operation DESC
            LIMIT $2;
        "#;

        let rows = sqlx::query(sql)
            .bind(client_id)
            .bind(limit)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in find_recent_by_client: {e:?}");
                RepositoryError::Sqlx(e)
            })?;

        let data = rows
            .into_iter()
            .map(|row| {
                Ok(MouvementModel {
                    mouvement_id: row.try_get("mouvement_id")?,
                    client_id: row.try_get("client_id")?,
                    montant: row.try_get("montant")?,
                    sens: row.try_get("sens")?,
                    libelle: row.try_get("libelle")?,
                    date_operation: row.try_get("date_operation")?,
                    type_mouvement: row.try_get("type_mouvement")?,
                    collecteur_id: row.try_get("collecteur_id")?,
                    collecteur_nom: row.try_get("collecteur_nom")?,
                    collecteur_prenom: row.try_get("collecteur_prenom")?,
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()
            .map_err(|e| {
                error!("Failed to map mouvement rows: {e:?}");
                RepositoryError::Sqlx(e)
            })?;

        Ok(data)
    }
}
