use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const SENS_EPARGNE: &str = "EPARGNE";
pub const SENS_RETRAIT: &str = "RETRAIT";

/// Immutable transaction fact. `sens` is stored as free text and compared
/// case-insensitively against the two known tags; anything else belongs to
/// neither bucket.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MouvementModel {
    pub mouvement_id: i64,
    pub client_id: i64,
    pub montant: f64,
    pub sens: String,
    pub libelle: Option<String>,
    pub date_operation: NaiveDateTime,
    pub type_mouvement: Option<String>,
    pub collecteur_id: Option<i64>,
    pub collecteur_nom: Option<String>,
    pub collecteur_prenom: Option<String>,
}

impl MouvementModel {
    pub fn is_epargne(&self) -> bool {
        self.sens.eq_ignore_ascii_case(SENS_EPARGNE)
    }

    pub fn is_retrait(&self) -> bool {
        self.sens.eq_ignore_ascii_case(SENS_RETRAIT)
    }
}

/// Both aggregate totals as produced by the grouped query.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MouvementTotalsModel {
    pub total_epargne: f64,
    pub total_retraits: f64,
}
