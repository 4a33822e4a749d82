use shared::{
    abstract_trait::{
        client::{repository::query::DynClientQueryRepository, service::stats::DynClientStatsService},
        collecteur::repository::query::DynCollecteurQueryRepository,
        commission::DynCommissionParameterService,
        mouvement::repository::{
            query::DynMouvementQueryRepository, stats::DynMouvementStatsRepository,
        },
        security::DynSecurityService,
    },
    config::ConnectionPool,
    repository::{
        client::query::ClientQueryRepository, collecteur::query::CollecteurQueryRepository,
        mouvement::query::MouvementQueryRepository, mouvement::stats::MouvementStatsRepository,
    },
    service::{
        client::stats::{ClientStatsService, ClientStatsServiceDeps},
        commission::DefaultCommissionParameterService,
        security::SecurityService,
    },
};
use std::sync::Arc;

#[derive(Clone)]
pub struct DependenciesInject {
    pub client_stats: DynClientStatsService,
    pub security: DynSecurityService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("client_stats", &"ClientStatsService")
            .field("security", &"SecurityService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool) -> Self {
        let client_query =
            Arc::new(ClientQueryRepository::new(pool.clone())) as DynClientQueryRepository;
        let collecteur_query =
            Arc::new(CollecteurQueryRepository::new(pool.clone())) as DynCollecteurQueryRepository;
        let mouvement_query =
            Arc::new(MouvementQueryRepository::new(pool.clone())) as DynMouvementQueryRepository;
        let mouvement_stats =
            Arc::new(MouvementStatsRepository::new(pool)) as DynMouvementStatsRepository;

        let commission = Arc::new(DefaultCommissionParameterService::new())
            as DynCommissionParameterService;

        let client_stats = Arc::new(ClientStatsService::new(ClientStatsServiceDeps {
            client_query: client_query.clone(),
            collecteur_query,
            mouvement_query,
            mouvement_stats,
            commission,
        })) as DynClientStatsService;

        let security = Arc::new(SecurityService::new(client_query)) as DynSecurityService;

        Self {
            client_stats,
            security,
        }
    }
}
