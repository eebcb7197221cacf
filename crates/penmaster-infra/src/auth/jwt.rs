//! JWT bearer token service.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use penmaster_core::ports::{AuthError, TokenClaims, TokenService};

const DEFAULT_SECRET: &str = "dev-only-secret";

/// JWT token service configuration.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_hours: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_SECRET.to_string(),
            expiration_hours: 24,
        }
    }
}

/// Wire-format claims.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    email: String,
    exp: i64,
    iat: i64,
}

/// JWT-based token service.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    config: JwtConfig,
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            config,
        }
    }

    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using development default");
            DEFAULT_SECRET.to_string()
        });
        let expiration_hours = std::env::var("JWT_EXPIRATION_HOURS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(24);
        Self::new(JwtConfig {
            secret,
            expiration_hours,
        })
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, user_id: Uuid, email: &str) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            exp: (now + TimeDelta::hours(self.config.expiration_hours)).timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }

    fn validate(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default()).map_err(
            |e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken(e.to_string()),
            },
        )?;

        let user_id = Uuid::parse_str(&data.claims.sub)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        Ok(TokenClaims {
            user_id,
            email: data.claims.email,
            exp: data.claims.exp,
        })
    }

    fn expiration_seconds(&self) -> i64 {
        self.config.expiration_hours * 3600
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> JwtTokenService {
        JwtTokenService::new(JwtConfig {
            secret: "test-secret".into(),
            expiration_hours: 2,
        })
    }

    #[test]
    fn issue_then_validate() {
        let svc = service();
        let user_id = Uuid::new_v4();

        let token = svc.issue(user_id, "pen@example.com").unwrap();
        let claims = svc.validate(&token).unwrap();

        assert_eq!(claims.user_id, user_id);
        assert_eq!(claims.email, "pen@example.com");
    }

    #[test]
    fn tampered_token_is_rejected() {
        let svc = service();
        let other = JwtTokenService::new(JwtConfig {
            secret: "different-secret".into(),
            expiration_hours: 2,
        });

        let token = other.issue(Uuid::new_v4(), "a@b.c").unwrap();
        assert!(matches!(
            svc.validate(&token),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn reports_expiration_in_seconds() {
        assert_eq!(service().expiration_seconds(), 7200);
    }
}
