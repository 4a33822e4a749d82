use crate::{
    abstract_trait::client::repository::query::ClientQueryRepositoryTrait,
    config::ConnectionPool, errors::RepositoryError, model::client::ClientModel,
};
use async_trait::async_trait;
use sqlx::Row;
use tracing::error;

pub struct ClientQueryRepository {
    db: ConnectionPool,
}

impl ClientQueryRepository {
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

    fn map_row(row: &sqlx::postgres::PgRow) -> Result<ClientModel, sqlx::Error> {
        Ok(ClientModel {
            client_id: row.try_get("client_id")?,
            nom: row.try_get("nom")?,
            prenom: row.try_get("prenom")?,
            numero_compte: row.try_get("numero_compte")?,
            telephone: row.try_get("telephone")?,
            valide: row.try_get("valide")?,
            quartier: row.try_get("quartier")?,
            ville: row.try_get("ville")?,
            date_creation: row.try_get("date_creation")?,
            collecteur_id: row.try_get("collecteur_id")?,
            compte_id: row.try_get("compte_id")?,
            compte_numero: row.try_get("compte_numero")?,
            compte_solde: row.try_get("compte_solde")?,
            compte_type: row.try_get("compte_type")?,
        })
    }
}

#[async_trait]
impl ClientQueryRepositoryTrait for ClientQueryRepository {
    async fn find_by_id(&self, client_id: i64) -> Result<ClientModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = r#"
            SELECT
                c.client_id,
                c.nom,
                c.prenom,
                c.numero_compte,
                c.telephone,
                c.valide,
                c.quartier,
                c.ville,
                c.date_creation,
                c.collecteur_id,
                cc.compte_id,
                cc.numero_compte AS compte_numero,
                cc.solde AS compte_solde,
                cc.type_compte AS compte_type
            FROM clients c
            LEFT JOIN comptes_clients cc ON cc.client_id = c.client_id
            WHERE c.client_id = $1;
        "#;

        let row = sqlx::query(sql)
            .bind(client_id)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("Client not found or database error: {e:?}");
                match e {
                    sqlx::Error::RowNotFound => RepositoryError::NotFound,
                    _ => RepositoryError::Sqlx(e),
                }
            })?;

        Self::map_row(&row).map_err(|e| {
            error!("Failed to map client row: {e:?}");
            RepositoryError::Sqlx(e)
        })
    }

    async fn find_by_collecteur(
        &self,
        collecteur_id: i64,
    ) -> Result<Vec<ClientModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = r#"
            SELECT
                c.client_id,
                c.nom,
                c.prenom,
                c.numero_compte,
                c.telephone,
                c.valide,
                c.quartier,
                c.ville,
                c.date_creation,
                c.collecteur_id,
                cc.compte_id,
                cc.numero_compte AS compte_numero,
                cc.solde AS compte_solde,
                cc.type_compte AS compte_type
            FROM clients c
            LEFT JOIN comptes_clients cc ON cc.client_id = c.client_id
            WHERE c.collecteur_id = $1
            ORDER BY c.nom, c.prenom;
        "#;

        let rows = sqlx::query(sql)
            .bind(collecteur_id)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in find_by_collecteur: {e:?}");
                RepositoryError::Sqlx(e)
            })?;

        rows.iter()
            .map(Self::map_row)
            .collect::<Result<Vec<_>, sqlx::Error>>()
            .map_err(|e| {
                error!("Failed to map client rows: {e:?}");
                RepositoryError::Sqlx(e)
            })
    }
}
