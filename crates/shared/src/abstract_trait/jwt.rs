use crate::{errors::ServiceError, model::auth::AuthPrincipal};
use std::sync::Arc;

pub type DynJwtService = Arc<dyn JwtServiceTrait + Send + Sync>;

pub trait JwtServiceTrait {
    fn create_token(
        &self,
        principal: &AuthPrincipal,
        ttl_secs: i64,
    ) -> Result<String, ServiceError>;

    fn verify_token(&self, token: &str) -> Result<AuthPrincipal, ServiceError>;
}
