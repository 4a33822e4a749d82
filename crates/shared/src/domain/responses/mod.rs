mod api;
mod client;
mod commission;
mod mouvement;

pub use self::api::ApiResponse;
pub use self::client::{ClientSummaryResponse, CompteClientResponse};
pub use self::commission::{
    CommissionParameterResponse, CommissionType, DEFAULT_COMMISSION_RATE, PalierCommissionResponse,
};
pub use self::mouvement::MouvementResponse;
