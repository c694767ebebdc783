//! Token issuance and verification.
//!
//! Tokens are stateless HS256 JWTs carrying `{ id, email, iat, exp }`. There
//! is no server-side session or revocation list; a token is good until its
//! expiry passes.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use clipvault_core::models::User;
use clipvault_core::AppError;

use super::models::Claims;

#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiry_hours: i64,
}

impl TokenService {
    pub fn new(secret: &str, expiry_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiry_hours,
        }
    }

    /// Sign a token for a freshly authenticated account.
    pub fn issue(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            id: user.id,
            email: user.email.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(self.expiry_hours)).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("token signing failed: {}", e)))
    }

    /// Validate signature and expiry with zero leeway.
    ///
    /// Every failure collapses into [`AppError::Unauthorized`] so the client
    /// cannot distinguish a bad signature from an expired token; the cause
    /// goes to the debug log only.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(reason = %e, "token rejected");
                AppError::Unauthorized
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn test_user() -> User {
        User {
            id: Uuid::new_v4(),
            first_name: "Priya".to_string(),
            last_name: "Sharma".to_string(),
            email: "priya@example.com".to_string(),
            phone_number: "9876543210".to_string(),
            password_hash: "irrelevant".to_string(),
            bio: None,
            created_at: Utc::now(),
        }
    }

    const SECRET: &str = "test-secret-key-min-32-characters-long";

    #[test]
    fn issued_token_round_trips_claims() {
        let service = TokenService::new(SECRET, 24);
        let user = test_user();

        let token = service.issue(&user).unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.id, user.id);
        assert_eq!(claims.email, user.email);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn expired_token_is_rejected() {
        let service = TokenService::new(SECRET, -1);
        let token = service.issue(&test_user()).unwrap();

        let err = service.verify(&token).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized));
    }

    #[test]
    fn tampered_token_is_rejected() {
        let service = TokenService::new(SECRET, 24);
        let token = service.issue(&test_user()).unwrap();

        let mut tampered = token.clone();
        tampered.truncate(token.len() - 2);
        assert!(service.verify(&tampered).is_err());
        assert!(service.verify("not-a-jwt").is_err());
    }

    #[test]
    fn token_from_another_secret_is_rejected() {
        let issuer = TokenService::new(SECRET, 24);
        let verifier = TokenService::new("another-secret-that-is-also-32-chars", 24);

        let token = issuer.issue(&test_user()).unwrap();
        assert!(matches!(
            verifier.verify(&token),
            Err(AppError::Unauthorized)
        ));
    }
}
