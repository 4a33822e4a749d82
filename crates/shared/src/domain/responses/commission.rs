use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Default schedule applied while commission rules are not yet backed by a
/// dedicated table: a flat percentage.
pub const DEFAULT_COMMISSION_RATE: f64 = 2.0;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, Copy, PartialEq, Eq)]
pub enum CommissionType {
    #[serde(rename = "POURCENTAGE")]
    Pourcentage,
    #[serde(rename = "FIXE")]
    Fixe,
    #[serde(rename = "PALIER")]
    Palier,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PalierCommissionResponse {
    pub montant_min: f64,
    pub montant_max: f64,
    pub pourcentage: f64,
}

/// Discriminated commission schedule. Exactly one of the payload fields is
/// populated, matching `type_commission`.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommissionParameterResponse {
    pub type_commission: CommissionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pourcentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub montant_fixe: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paliers: Option<Vec<PalierCommissionResponse>>,
}

impl CommissionParameterResponse {
    pub fn percentage(rate: f64) -> Self {
        Self {
            type_commission: CommissionType::Pourcentage,
            pourcentage: Some(rate),
            montant_fixe: None,
            paliers: None,
        }
    }
}
