use crate::{
    domain::responses::{CommissionParameterResponse, MouvementResponse},
    model::client::ClientModel,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CompteClientResponse {
    pub id: i64,
    pub numero_compte: Option<String>,
    pub solde: Option<f64>,
    pub type_compte: Option<String>,
}

/// Enriched client read model for the mobile app. Recomputed on every
/// request, never persisted.
///
/// `nombre_transactions` and `derniere_transaction` are derived from the
/// attached recent-transaction window, not from the full history, so a
/// client with more transactions than the window reports the window size.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ClientSummaryResponse {
    pub id: i64,
    pub nom: String,
    pub prenom: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numero_compte: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    pub valide: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quartier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ville: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_creation: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compte_client: Option<CompteClientResponse>,
    pub transactions: Vec<MouvementResponse>,
    pub total_epargne: f64,
    pub total_retraits: f64,
    pub solde_net: f64,
    pub commission_parameter: CommissionParameterResponse,
    pub nombre_transactions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub derniere_transaction: Option<NaiveDateTime>,
}

impl ClientSummaryResponse {
    /// Builds the summary from complete inputs. All derived fields
    /// (`solde_net`, `nombre_transactions`, `derniere_transaction`) are
    /// computed here, in one place, so they can never drift out of sync
    /// with the fields they depend on.
    pub fn compose(
        client: &ClientModel,
        transactions: Vec<MouvementResponse>,
        total_epargne: f64,
        total_retraits: f64,
        commission_parameter: CommissionParameterResponse,
    ) -> Self {
        let compte_client = client.compte_id.map(|id| CompteClientResponse {
            id,
            numero_compte: client.compte_numero.clone(),
            solde: client.compte_solde,
            type_compte: client.compte_type.clone(),
        });

        let nombre_transactions = transactions.len();
        let derniere_transaction = transactions.iter().map(|m| m.date_operation).max();

        Self {
            id: client.client_id,
            nom: client.nom.clone(),
            prenom: client.prenom.clone(),
            numero_compte: client.numero_compte.clone(),
            telephone: client.telephone.clone(),
            valide: client.valide,
            quartier: client.quartier.clone(),
            ville: client.ville.clone(),
            date_creation: client.date_creation,
            compte_client,
            transactions,
            total_epargne,
            total_retraits,
            solde_net: total_epargne - total_retraits,
            commission_parameter,
            nombre_transactions,
            derniere_transaction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn client(compte: bool) -> ClientModel {
        ClientModel {
            client_id: 1,
            nom: "Mbarga".to_string(),
            prenom: "Alice".to_string(),
            numero_compte: Some("C-0001".to_string()),
            telephone: None,
            valide: true,
            quartier: Some("Bastos".to_string()),
            ville: Some("Yaoundé".to_string()),
            date_creation: None,
            collecteur_id: 10,
            compte_id: compte.then_some(42),
            compte_numero: compte.then(|| "A-0042".to_string()),
            compte_solde: compte.then_some(1250.0),
            compte_type: compte.then(|| "EPARGNE_JOURNALIERE".to_string()),
        }
    }

    fn mouvement(id: i64, day: u32) -> MouvementResponse {
        MouvementResponse {
            id,
            montant: 100.0,
            sens: "EPARGNE".to_string(),
            libelle: None,
            date_operation: NaiveDate::from_ymd_opt(2024, 3, day)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
            type_mouvement: None,
            collecteur_id: None,
            collecteur_nom: None,
        }
    }

    #[test]
    fn solde_net_is_difference_of_totals() {
        let summary = ClientSummaryResponse::compose(
            &client(true),
            vec![],
            150.0,
            30.0,
            CommissionParameterResponse::percentage(2.0),
        );

        assert_eq!(summary.solde_net, 120.0);
        assert_eq!(summary.total_epargne, 150.0);
        assert_eq!(summary.total_retraits, 30.0);
    }

    #[test]
    fn stats_derive_from_attached_window() {
        let summary = ClientSummaryResponse::compose(
            &client(true),
            vec![mouvement(3, 9), mouvement(2, 7), mouvement(1, 2)],
            300.0,
            0.0,
            CommissionParameterResponse::percentage(2.0),
        );

        assert_eq!(summary.nombre_transactions, 3);
        assert_eq!(
            summary.derniere_transaction,
            Some(
                NaiveDate::from_ymd_opt(2024, 3, 9)
                    .unwrap()
                    .and_hms_opt(12, 0, 0)
                    .unwrap()
            )
        );
    }

    #[test]
    fn empty_window_has_no_last_transaction() {
        let summary = ClientSummaryResponse::compose(
            &client(false),
            vec![],
            0.0,
            0.0,
            CommissionParameterResponse::percentage(2.0),
        );

        assert_eq!(summary.nombre_transactions, 0);
        assert!(summary.derniere_transaction.is_none());
        assert!(summary.compte_client.is_none());
    }

    #[test]
    fn account_snapshot_copied_when_present() {
        let summary = ClientSummaryResponse::compose(
            &client(true),
            vec![],
            0.0,
            0.0,
            CommissionParameterResponse::percentage(2.0),
        );

        let compte = summary.compte_client.expect("compte attached");
        assert_eq!(compte.id, 42);
        assert_eq!(compte.solde, Some(1250.0));
    }
}
