//! Main token service implementation

use chrono::Duration;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::TokenServiceConfig;

/// Service issuing and verifying signed, time-limited bearer tokens.
///
/// Tokens are stateless: validity is the signature plus the expiration
/// claim, nothing is looked up or recorded.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    pub fn config(&self) -> &TokenServiceConfig {
        &self.config
    }

    /// Lifetime used by the login endpoints
    pub fn login_ttl(&self) -> Duration {
        Duration::minutes(self.config.login_ttl_minutes)
    }

    /// Issues a token for `email`/`user_id`.
    ///
    /// Without an explicit `ttl` the token lives for the configured default
    /// lifetime.
    pub fn issue(&self, email: &str, user_id: &str, ttl: Option<Duration>) -> DomainResult<String> {
        let ttl = ttl.unwrap_or_else(|| Duration::minutes(self.config.default_ttl_minutes));
        let claims = Claims::new(email, user_id, ttl);
        self.encode_jwt(&claims)
    }

    /// Encodes claims into a JWT
    pub(crate) fn encode_jwt(&self, claims: &Claims) -> DomainResult<String> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Verifies a token and returns the claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - Signature and expiration are valid
    /// * `Err(TokenError::TokenExpired)` - The token is past its expiration
    /// * `Err(TokenError::InvalidToken)` - Bad signature, wrong algorithm,
    ///   malformed token or missing subject
    pub fn verify(&self, token: &str) -> DomainResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                if e.kind() == &jsonwebtoken::errors::ErrorKind::ExpiredSignature {
                    DomainError::Token(TokenError::TokenExpired)
                } else {
                    DomainError::Token(TokenError::InvalidToken)
                }
            })?;

        let claims = token_data.claims;
        if claims.sub.trim().is_empty() || claims.id.trim().is_empty() {
            return Err(DomainError::Token(TokenError::InvalidToken));
        }

        Ok(claims)
    }
}
