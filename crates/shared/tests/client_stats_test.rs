use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use std::sync::Arc;

use shared::{
    abstract_trait::{
        client::{repository::query::ClientQueryRepositoryTrait, service::stats::ClientStatsServiceTrait},
        collecteur::repository::query::CollecteurQueryRepositoryTrait,
        mouvement::repository::{
            query::MouvementQueryRepositoryTrait, stats::MouvementStatsRepositoryTrait,
        },
    },
    errors::{RepositoryError, ServiceError},
    model::{
        client::ClientModel,
        mouvement::{MouvementModel, MouvementTotalsModel},
    },
    service::{
        client::stats::{ClientStatsService, ClientStatsServiceDeps},
        commission::DefaultCommissionParameterService,
    },
};

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

struct FakeCollecteurs(Vec<i64>);

#[async_trait]
impl CollecteurQueryRepositoryTrait for FakeCollecteurs {
    async fn exists_by_id(&self, collecteur_id: i64) -> Result<bool, RepositoryError> {
        Ok(self.0.contains(&collecteur_id))
    }
}

/// Movement store backing both the window query and the aggregates, so a
/// test seeds one list of facts and every read path sees the same data.
struct FakeMouvements {
    rows: Vec<MouvementModel>,
    grouped_query_fails: bool,
}

impl FakeMouvements {
    fn new(rows: Vec<MouvementModel>) -> Self {
        Self {
            rows,
            grouped_query_fails: false,
        }
    }

    fn with_broken_grouped_query(rows: Vec<MouvementModel>) -> Self {
        Self {
            rows,
            grouped_query_fails: true,
        }
    }

    fn of_client(&self, client_id: i64) -> impl Iterator<Item = &MouvementModel> {
        self.rows.iter().filter(move |m| m.client_id == client_id)
    }
}

#[async_trait]
impl MouvementQueryRepositoryTrait for FakeMouvements {
    async fn find_recent_by_client(
        &self,
        client_id: i64,
        limit: i64,
    ) -> Result<Vec<MouvementModel>, RepositoryError> {
        let mut rows: Vec<MouvementModel> = self.of_client(client_id).cloned().collect();
        rows.sort_by(|a, b| b.date_operation.cmp(&a.date_operation));
        rows.truncate(limit.max(0) as usize);
        Ok(rows)
    }
}

#[async_trait]
impl MouvementStatsRepositoryTrait for FakeMouvements {
    async fn totals_by_client(
        &self,
        client_id: i64,
    ) -> Result<MouvementTotalsModel, RepositoryError> {
        if self.grouped_query_fails {
            return Err(RepositoryError::Custom(
                "grouped aggregate unavailable".to_string(),
            ));
        }

        Ok(MouvementTotalsModel {
            total_epargne: self
                .of_client(client_id)
                .filter(|m| m.is_epargne())
                .map(|m| m.montant)
                .sum(),
            total_retraits: self
                .of_client(client_id)
                .filter(|m| m.is_retrait())
                .map(|m| m.montant)
                .sum(),
        })
    }

    async fn sum_by_sens(&self, client_id: i64, sens: &str) -> Result<f64, RepositoryError> {
        Ok(self
            .of_client(client_id)
            .filter(|m| m.sens.eq_ignore_ascii_case(sens))
            .map(|m| m.montant)
            .sum())
    }

    async fn count_by_client(&self, client_id: i64) -> Result<i64, RepositoryError> {
        Ok(self.of_client(client_id).count() as i64)
    }

    async fn last_operation_date(
        &self,
        client_id: i64,
    ) -> Result<Option<NaiveDateTime>, RepositoryError> {
        Ok(self.of_client(client_id).map(|m| m.date_operation).max())
    }
}

fn client(client_id: i64, collecteur_id: i64, nom: &str) -> ClientModel {
    ClientModel {
        client_id,
        nom: nom.to_string(),
        prenom: "Test".to_string(),
        numero_compte: Some(format!("C-{client_id:04}")),
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

fn at(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, day)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
}

fn mouvement(id: i64, client_id: i64, montant: f64, sens: &str, day: u32) -> MouvementModel {
    MouvementModel {
        mouvement_id: id,
        client_id,
        montant,
        sens: sens.to_string(),
        libelle: None,
        date_operation: at(day),
        type_mouvement: None,
        collecteur_id: None,
        collecteur_nom: None,
        collecteur_prenom: None,
    }
}

fn service(
    clients: Vec<ClientModel>,
    collecteurs: Vec<i64>,
    mouvements: FakeMouvements,
) -> ClientStatsService {
    let store = Arc::new(mouvements);
    ClientStatsService::new(ClientStatsServiceDeps {
        client_query: Arc::new(FakeClients(clients)),
        collecteur_query: Arc::new(FakeCollecteurs(collecteurs)),
        mouvement_query: store.clone(),
        mouvement_stats: store,
        commission: Arc::new(DefaultCommissionParameterService::new()),
    })
}

#[tokio::test]
async fn client_without_movements_has_zero_totals() {
    let svc = service(
        vec![client(1, 10, "Ngo")],
        vec![10],
        FakeMouvements::new(vec![]),
    );

    let summary = svc.client_summary(1).await.unwrap().data;
    assert_eq!(summary.total_epargne, 0.0);
    assert_eq!(summary.total_retraits, 0.0);
    assert_eq!(summary.solde_net, 0.0);
    assert_eq!(summary.nombre_transactions, 0);
    assert!(summary.derniere_transaction.is_none());
    assert!(summary.transactions.is_empty());
}

#[tokio::test]
async fn summary_totals_and_recent_window() {
    let svc = service(
        vec![client(1, 10, "Ngo")],
        vec![10],
        FakeMouvements::new(vec![
            mouvement(1, 1, 100.0, "EPARGNE", 1),
            mouvement(2, 1, 30.0, "RETRAIT", 2),
            mouvement(3, 1, 50.0, "EPARGNE", 3),
        ]),
    );

    let summary = svc.client_summary(1).await.unwrap().data;
    assert_eq!(summary.total_epargne, 150.0);
    assert_eq!(summary.total_retraits, 30.0);
    assert_eq!(summary.solde_net, 120.0);
    assert_eq!(summary.derniere_transaction, Some(at(3)));

    let recent = svc.recent_transactions(1, 2).await.unwrap();
    let ids: Vec<i64> = recent.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![3, 2]);
}

#[tokio::test]
async fn sens_matching_is_case_insensitive_and_unknown_tags_excluded() {
    let svc = service(
        vec![client(1, 10, "Ngo")],
        vec![10],
        FakeMouvements::new(vec![
            mouvement(1, 1, 10.0, "EPARGNE", 1),
            mouvement(2, 1, 20.0, "epargne", 2),
            mouvement(3, 1, 30.0, "Epargne", 3),
            mouvement(4, 1, 5.0, "retrait", 4),
            mouvement(5, 1, 999.0, "TRANSFERT", 5),
        ]),
    );

    assert_eq!(svc.total_epargne(1).await.unwrap(), 60.0);
    assert_eq!(svc.total_retraits(1).await.unwrap(), 5.0);

    let summary = svc.client_summary(1).await.unwrap().data;
    assert_eq!(summary.total_epargne, 60.0);
    assert_eq!(summary.total_retraits, 5.0);
    assert_eq!(summary.solde_net, 55.0);
}

#[tokio::test]
async fn recent_window_is_capped_at_twenty() {
    let rows = (1..=25)
        .map(|i| mouvement(i, 1, 10.0, "EPARGNE", i as u32))
        .collect();
    let svc = service(vec![client(1, 10, "Ngo")], vec![10], FakeMouvements::new(rows));

    let summary = svc.client_summary(1).await.unwrap().data;
    assert_eq!(summary.transactions.len(), 20);
    assert_eq!(summary.nombre_transactions, 20);
    // Full-history totals are unaffected by the display window.
    assert_eq!(summary.total_epargne, 250.0);

    let dates: Vec<NaiveDateTime> = summary.transactions.iter().map(|m| m.date_operation).collect();
    let mut sorted = dates.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(dates, sorted);
    assert_eq!(summary.transactions[0].id, 25);
}

#[tokio::test]
async fn non_positive_limit_yields_empty_window() {
    let svc = service(
        vec![client(1, 10, "Ngo")],
        vec![10],
        FakeMouvements::new(vec![mouvement(1, 1, 10.0, "EPARGNE", 1)]),
    );

    assert!(svc.recent_transactions(1, 0).await.unwrap().is_empty());
    assert!(svc.recent_transactions(1, -3).await.unwrap().is_empty());
}

#[tokio::test]
async fn totals_survive_grouped_query_failure() {
    let rows = vec![
        mouvement(1, 1, 100.0, "EPARGNE", 1),
        mouvement(2, 1, 30.0, "RETRAIT", 2),
        mouvement(3, 1, 50.0, "EPARGNE", 3),
    ];
    let svc = service(
        vec![client(1, 10, "Ngo")],
        vec![10],
        FakeMouvements::with_broken_grouped_query(rows),
    );

    let summary = svc.client_summary(1).await.unwrap().data;
    assert_eq!(summary.total_epargne, 150.0);
    assert_eq!(summary.total_retraits, 30.0);
    assert_eq!(summary.solde_net, 120.0);
}

#[tokio::test]
async fn collecteur_clients_preserves_portfolio_order() {
    let svc = service(
        vec![
            client(1, 10, "Abanda"),
            client(2, 10, "Biya"),
            client(3, 11, "Chantal"),
            client(4, 10, "Dikoto"),
        ],
        vec![10, 11],
        FakeMouvements::new(vec![
            mouvement(1, 2, 40.0, "EPARGNE", 1),
            mouvement(2, 4, 15.0, "RETRAIT", 2),
        ]),
    );

    let response = svc.collecteur_clients(10).await.unwrap();
    let ids: Vec<i64> = response.data.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 2, 4]);

    assert_eq!(response.data[1].total_epargne, 40.0);
    assert_eq!(response.data[2].total_retraits, 15.0);
    assert_eq!(response.data[0].solde_net, 0.0);
}

#[tokio::test]
async fn every_summary_carries_the_commission_schedule() {
    let svc = service(
        vec![client(1, 10, "Ngo"), client(2, 10, "Essomba")],
        vec![10],
        FakeMouvements::new(vec![]),
    );

    let response = svc.collecteur_clients(10).await.unwrap();
    for summary in &response.data {
        assert_eq!(summary.commission_parameter.pourcentage, Some(2.0));
    }
}

#[tokio::test]
async fn unknown_collecteur_is_not_found() {
    let svc = service(vec![], vec![10], FakeMouvements::new(vec![]));

    let err = svc.collecteur_clients(77).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn unknown_client_is_not_found() {
    let svc = service(vec![], vec![10], FakeMouvements::new(vec![]));

    let err = svc.client_summary(404).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}
