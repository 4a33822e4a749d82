use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Client row with its account snapshot LEFT JOINed in.
/// The account fields are optional: a freshly registered client may not
/// have an opened account yet.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ClientModel {
    pub client_id: i64,
    pub nom: String,
    pub prenom: String,
    pub numero_compte: Option<String>,
    pub telephone: Option<String>,
    pub valide: bool,
    pub quartier: Option<String>,
    pub ville: Option<String>,
    pub date_creation: Option<NaiveDateTime>,
    pub collecteur_id: i64,
    pub compte_id: Option<i64>,
    pub compte_numero: Option<String>,
    pub compte_solde: Option<f64>,
    pub compte_type: Option<String>,
}
