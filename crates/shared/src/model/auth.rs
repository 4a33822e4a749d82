use serde::{Deserialize, Serialize};

pub const ROLE_ADMIN: &str = "ADMIN";
pub const ROLE_COLLECTEUR: &str = "COLLECTEUR";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub role: String,
    pub collecteur_id: Option<i64>,
    pub exp: i64,
    pub iat: i64,
}

/// Authenticated caller as seen by handlers and the security service.
#[derive(Debug, Clone)]
pub struct AuthPrincipal {
    pub user_id: i64,
    pub role: String,
    pub collecteur_id: Option<i64>,
}

impl AuthPrincipal {
    pub fn is_admin(&self) -> bool {
        self.role.eq_ignore_ascii_case(ROLE_ADMIN)
    }
}

impl From<Claims> for AuthPrincipal {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            role: claims.role,
            collecteur_id: claims.collecteur_id,
        }
    }
}
