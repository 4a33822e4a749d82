use crate::{model::mouvement::MouvementModel, utils::format_collecteur_name};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Reduced transaction view for the mobile history screen. The recording
/// agent is denormalized to id + display name and omitted entirely when no
/// agent is attached to the fact.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MouvementResponse {
    pub id: i64,
    pub montant: f64,
    pub sens: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub libelle: Option<String>,
    pub date_operation: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_mouvement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collecteur_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collecteur_nom: Option<String>,
}

impl From<MouvementModel> for MouvementResponse {
    fn from(model: MouvementModel) -> Self {
        let collecteur_nom = model
            .collecteur_id
            .map(|_| format_collecteur_name(&model.collecteur_prenom, &model.collecteur_nom));

        Self {
            id: model.mouvement_id,
            montant: model.montant,
            sens: model.sens,
            libelle: model.libelle,
            date_operation: model.date_operation,
            type_mouvement: model.type_mouvement,
            collecteur_id: model.collecteur_id,
            collecteur_nom,
        }
    }
}
