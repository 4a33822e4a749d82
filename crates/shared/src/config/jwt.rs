use crate::{
    abstract_trait::jwt::JwtServiceTrait,
    errors::ServiceError,
    model::auth::{AuthPrincipal, Claims},
};
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

pub struct JwtConfig {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl JwtConfig {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

impl JwtServiceTrait for JwtConfig {
    fn create_token(&self, principal: &AuthPrincipal, ttl_secs: i64) -> Result<String, ServiceError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: principal.user_id,
            role: principal.role.clone(),
            collecteur_id: principal.collecteur_id,
            iat: now,
            exp: now + ttl_secs,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(ServiceError::Jwt)
    }

    fn verify_token(&self, token: &str) -> Result<AuthPrincipal, ServiceError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::new(Algorithm::HS256))
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => ServiceError::TokenExpired,
                _ => ServiceError::Jwt(e),
            })?;

        Ok(data.claims.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::auth::ROLE_COLLECTEUR;

    #[test]
    fn token_roundtrip_preserves_principal() {
        let jwt = JwtConfig::new("test-secret");
        let principal = AuthPrincipal {
            user_id: 7,
            role: ROLE_COLLECTEUR.to_string(),
            collecteur_id: Some(3),
        };

        let token = jwt.create_token(&principal, 3600).expect("create token");
        let verified = jwt.verify_token(&token).expect("verify token");

        assert_eq!(verified.user_id, 7);
        assert_eq!(verified.role, ROLE_COLLECTEUR);
        assert_eq!(verified.collecteur_id, Some(3));
    }

    #[test]
    fn expired_token_is_rejected() {
        let jwt = JwtConfig::new("test-secret");
        let principal = AuthPrincipal {
            user_id: 1,
            role: ROLE_COLLECTEUR.to_string(),
            collecteur_id: Some(1),
        };

        let token = jwt.create_token(&principal, -3600).expect("create token");
        assert!(matches!(
            jwt.verify_token(&token),
            Err(ServiceError::TokenExpired)
        ));
    }
}
