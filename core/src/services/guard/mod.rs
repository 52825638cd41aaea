//! Authorization guard for protected operations.
//!
//! Two checks with deliberately different costs:
//! - [`AuthGuard::identify`] and [`AuthGuard::require_authenticated`] trust
//!   the token alone and never touch the store.
//! - [`AuthGuard::require_role`] re-reads the account so a role change or a
//!   deleted account takes effect immediately.

use std::sync::Arc;

use crate::domain::entities::token::Identity;
use crate::domain::entities::user::{Role, User};
use crate::errors::{AuthError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

#[cfg(test)]
mod tests;

/// Extract the token from an `Authorization: Bearer <token>` header value
pub fn extract_bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Gate in front of every operation that needs a caller identity or role
pub struct AuthGuard<U>
where
    U: UserRepository,
{
    user_repository: Arc<U>,
    token_service: Arc<TokenService>,
}

impl<U> AuthGuard<U>
where
    U: UserRepository,
{
    pub fn new(user_repository: Arc<U>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_repository,
            token_service,
        }
    }

    /// Resolve the caller from an optional token.
    ///
    /// No token means no identity (`Ok(None)`); a token that is present but
    /// invalid or expired is an error.
    pub fn identify(&self, token: Option<&str>) -> DomainResult<Option<Identity>> {
        match token {
            None => Ok(None),
            Some(token) => Ok(Some(self.token_service.verify(token)?.identity())),
        }
    }

    /// Like [`identify`](Self::identify) but a missing token is an error too
    pub fn require_authenticated(&self, token: Option<&str>) -> DomainResult<Identity> {
        self.identify(token)?
            .ok_or_else(|| AuthError::MissingToken.into())
    }

    /// Require a valid bearer token whose account currently holds `role`.
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The freshly loaded account
    /// * `Err(AuthError::MissingToken)` - Header absent or not a bearer token
    /// * `Err(DomainError::Token(_))` - Token invalid or expired
    /// * `Err(AuthError::InvalidCredentials)` - The account no longer exists
    /// * `Err(AuthError::InsufficientRole)` - The account has another role
    pub async fn require_role(
        &self,
        authorization_header: Option<&str>,
        role: Role,
    ) -> DomainResult<User> {
        let token = authorization_header
            .and_then(extract_bearer_token)
            .ok_or(AuthError::MissingToken)?;

        let claims = self.token_service.verify(token)?;

        let user = self
            .user_repository
            .find_by_email(&claims.sub)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if user.role != role {
            tracing::warn!(user_id = %user.id, required = %role, "Role check failed");
            return Err(AuthError::InsufficientRole { required: role }.into());
        }

        Ok(user)
    }
}
