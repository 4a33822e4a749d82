use crate::{
    abstract_trait::{
        client::repository::query::DynClientQueryRepository, security::SecurityServiceTrait,
    },
    errors::{RepositoryError, ServiceError},
    model::auth::AuthPrincipal,
};
use async_trait::async_trait;
use tracing::{info, warn};

pub struct SecurityService {
    client_query: DynClientQueryRepository,
}

impl SecurityService {
    pub fn new(client_query: DynClientQueryRepository) -> Self {
        Self { client_query }
    }
}

#[async_trait]
impl SecurityServiceTrait for SecurityService {
    fn can_access_collecteur(&self, collecteur_id: i64, principal: &AuthPrincipal) -> bool {
        if principal.is_admin() {
            return true;
        }

        let allowed = principal.collecteur_id == Some(collecteur_id);
        if !allowed {
            warn!(
                "🚫 user {} (collecteur {:?}) denied access to collecteur {collecteur_id}",
                principal.user_id, principal.collecteur_id
            );
        }
        allowed
    }

    async fn can_access_client(
        &self,
        client_id: i64,
        principal: &AuthPrincipal,
    ) -> Result<bool, ServiceError> {
        let client = self.client_query.find_by_id(client_id).await.map_err(|e| {
            if matches!(e, RepositoryError::NotFound) {
                info!("🔍 access check on unknown client {client_id}");
            }
            ServiceError::Repo(e)
        })?;

        Ok(self.can_access_collecteur(client.collecteur_id, principal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::auth::{ROLE_ADMIN, ROLE_COLLECTEUR};
    use crate::{
        abstract_trait::client::repository::query::ClientQueryRepositoryTrait,
        model::client::ClientModel,
    };
    use std::sync::Arc;

    struct FakeClients(Vec<ClientModel>);

    #[async_trait]
    impl ClientQueryRepositoryTrait for FakeClients {
        async fn find_by_id(&self, client_id: i64) -> Result<ClientModel, RepositoryError> {
            self.0
                .iter()
                .find(|c| c.client_id == client_id)
                .cloned()
                .ok_or(RepositoryError::NotFound)
        }

        async fn find_by_collecteur(
            &self,
            collecteur_id: i64,
        ) -> Result<Vec<ClientModel>, RepositoryError> {
            Ok(self
                .0
                .iter()
                .filter(|c| c.collecteur_id == collecteur_id)
                .cloned()
                .collect())
        }
    }

    fn client(client_id: i64, collecteur_id: i64) -> ClientModel {
        ClientModel {
            client_id,
            nom: "Talla".to_string(),
            prenom: "Rose".to_string(),
            numero_compte: None,
            telephone: None,
            valide: true,
            quartier: None,
            ville: None,
            date_creation: None,
            collecteur_id,
            compte_id: None,
            compte_numero: None,
            compte_solde: None,
            compte_type: None,
        }
    }

    fn principal(role: &str, collecteur_id: Option<i64>) -> AuthPrincipal {
        AuthPrincipal {
            user_id: 1,
            role: role.to_string(),
            collecteur_id,
        }
    }

    #[test]
    fn admin_accesses_any_collecteur() {
        let service = SecurityService::new(Arc::new(FakeClients(vec![])));
        assert!(service.can_access_collecteur(99, &principal(ROLE_ADMIN, None)));
    }

    #[test]
    fn collecteur_only_accesses_own_portfolio() {
        let service = SecurityService::new(Arc::new(FakeClients(vec![])));
        let me = principal(ROLE_COLLECTEUR, Some(3));

        assert!(service.can_access_collecteur(3, &me));
        assert!(!service.can_access_collecteur(4, &me));
    }

    #[tokio::test]
    async fn client_access_follows_its_collecteur() {
        let service = SecurityService::new(Arc::new(FakeClients(vec![client(7, 3)])));

        assert!(
            service
                .can_access_client(7, &principal(ROLE_COLLECTEUR, Some(3)))
                .await
                .unwrap()
        );
        assert!(
            !service
                .can_access_client(7, &principal(ROLE_COLLECTEUR, Some(8)))
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn unknown_client_propagates_not_found() {
        let service = SecurityService::new(Arc::new(FakeClients(vec![])));

        let err = service
            .can_access_client(404, &principal(ROLE_ADMIN, None))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::NotFound)
        ));
    }
}
