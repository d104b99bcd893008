use anyhow::{ensure, Result};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Role, UserId};

/// Tokens are valid for 30 days
pub const TOKEN_TTL_DAYS: i64 = 30;

/// JWT Claims - data stored in the token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,   // Subject (user id as string)
    pub id: UserId,    // User id
    pub email: String, // Email at login time
    pub role: Role,    // Role at login time
    pub exp: i64,      // Expiration timestamp
    pub iat: i64,      // Issued at timestamp
    pub iss: String,   // Issuer
    pub jti: String,   // JWT ID (unique token identifier)
}

/// JWT Service - creates and verifies JWT tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
}

impl JwtService {
    /// Create new JWT service with secret and issuer
    pub fn new(secret: &str, issuer: String) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            issuer,
        }
    }

    /// Create a token for a user, valid for `TOKEN_TTL_DAYS`
    pub fn create_token(&self, user_id: UserId, email: String, role: Role) -> Result<String> {
        self.create_token_with_ttl(user_id, email, role, chrono::Duration::days(TOKEN_TTL_DAYS))
    }

    /// Create a token with an explicit lifetime (negative yields an expired token)
    pub fn create_token_with_ttl(
        &self,
        user_id: UserId,
        email: String,
        role: Role,
        ttl: chrono::Duration,
    ) -> Result<String> {
        let now = chrono::Utc::now();
        let exp = now + ttl;

        let claims = Claims {
            sub: user_id.to_string(),
            id: user_id,
            email,
            role,
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: self.issuer.clone(),
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(Into::into)
    }

    /// Verify and decode a JWT token
    ///
    /// Returns claims if the signature and issuer match and `exp` is strictly
    /// in the future. No clock leeway is granted.
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.issuer]);
        validation.leeway = 0;

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)?.claims;

        // jsonwebtoken still accepts exp == now
        ensure!(claims.exp > chrono::Utc::now().timestamp(), "token expired");

        Ok(claims)
    }
}
