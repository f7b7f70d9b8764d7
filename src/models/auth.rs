//! Session identity issued by the external auth service.
//!
//! The auth service signs a JWT and stores it in the identity cookie shared
//! across subdomains. This application never issues tokens itself; it only
//! validates the signature and reads identity and roles out of the claims.

use actix_identity::IdentityExt;
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, error::ErrorUnauthorized, web};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use crate::models::config::ServerConfig;

/// Claims carried by the auth service session token.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AuthenticatedUser {
    /// Opaque subject identifier assigned by the auth service.
    pub sub: String,
    pub email: String,
    pub name: String,
    pub roles: Vec<String>,
    /// Expiry as a unix timestamp, validated on decode.
    pub exp: usize,
}

impl AuthenticatedUser {
    /// Decodes and validates a session token with the shared secret.
    pub fn from_jwt(token: &str, secret: &str) -> Option<Self> {
        let validation = Validation::new(Algorithm::HS256);
        decode::<AuthenticatedUser>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .ok()
    }

    /// Signs claims into a token. Only the auth service does this in
    /// production; the application itself uses it in tests.
    pub fn to_jwt(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            self,
            &jsonwebtoken::EncodingKey::from_secret(secret.as_bytes()),
        )
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user = req
            .get_identity()
            .ok()
            .and_then(|identity| identity.id().ok())
            .and_then(|token| {
                req.app_data::<web::Data<ServerConfig>>()
                    .and_then(|config| AuthenticatedUser::from_jwt(&token, &config.secret))
            });

        std::future::ready(user.ok_or_else(|| ErrorUnauthorized("Unauthorized")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "42".to_string(),
            email: "seeker@example.com".to_string(),
            name: "Seeker".to_string(),
            roles: vec!["tarot".to_string()],
            exp: (chrono::Utc::now().timestamp() + 3600) as usize,
        }
    }

    #[test]
    fn token_round_trip() {
        let user = claims();
        let token = user.to_jwt("secret").unwrap();
        let decoded = AuthenticatedUser::from_jwt(&token, "secret").unwrap();
        assert_eq!(decoded, user);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = claims().to_jwt("secret").unwrap();
        assert!(AuthenticatedUser::from_jwt(&token, "other").is_none());
    }

    #[test]
    fn expired_token_is_rejected() {
        let mut user = claims();
        user.exp = 1;
        let token = user.to_jwt("secret").unwrap();
        assert!(AuthenticatedUser::from_jwt(&token, "secret").is_none());
    }
}
