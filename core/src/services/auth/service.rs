//! Main authentication service implementation

use std::sync::Arc;

use uuid::Uuid;

use recipe_shared::validation::{check_password_strength, is_valid_email};

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;

/// Input of an account registration
#[derive(Debug, Clone)]
pub struct RegistrationRequest {
    pub email: String,
    pub username: String,
    pub password: String,
    pub password_confirmation: String,
}

/// Authentication service covering credential checks, token issuance on
/// login and account registration
pub struct AuthService<U>
where
    U: UserRepository,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Token service for JWT management
    token_service: Arc<TokenService>,
    /// Password hasher
    hasher: PasswordHasher,
    /// Hash checked on unknown emails so both failure paths cost one bcrypt run
    pub(super) dummy_hash: Option<String>,
}

impl<U> AuthService<U>
where
    U: UserRepository,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for account persistence
    /// * `token_service` - Service for JWT token management
    /// * `config` - Service configuration
    pub fn new(
        user_repository: Arc<U>,
        token_service: Arc<TokenService>,
        config: AuthServiceConfig,
    ) -> Self {
        let hasher = PasswordHasher::new(config.bcrypt_cost);
        let dummy_hash = match hasher.hash(&Uuid::new_v4().to_string()) {
            Ok(hash) => Some(hash),
            Err(e) => {
                tracing::warn!(error = %e, "Could not prepare dummy password hash");
                None
            }
        };

        Self {
            user_repository,
            token_service,
            hasher,
            dummy_hash,
        }
    }

    pub fn token_service(&self) -> &TokenService {
        &self.token_service
    }

    /// Check an email/password pair.
    ///
    /// Returns `Ok(None)` both when no account has that email and when the
    /// password is wrong; callers cannot tell the two apart.
    pub async fn authenticate(&self, email: &str, password: &str) -> DomainResult<Option<User>> {
        let Some(user) = self.user_repository.find_by_email(email).await? else {
            if let Some(dummy_hash) = &self.dummy_hash {
                self.hasher
                    .verify_blocking(password.to_string(), dummy_hash.clone())
                    .await?;
            }
            tracing::debug!("Authentication failed: unknown account");
            return Ok(None);
        };

        let matches = self
            .hasher
            .verify_blocking(password.to_string(), user.hashed_password.clone())
            .await?;

        if matches {
            Ok(Some(user))
        } else {
            tracing::debug!(user_id = %user.id, "Authentication failed: password mismatch");
            Ok(None)
        }
    }

    /// Authenticate and, on success, issue a login-lifetime token
    pub async fn issue_access_token(
        &self,
        email: &str,
        password: &str,
    ) -> DomainResult<Option<String>> {
        match self.authenticate(email, password).await? {
            Some(user) => self.issue_login_token(&user).map(Some),
            None => Ok(None),
        }
    }

    /// Like [`issue_access_token`](Self::issue_access_token) but a failed
    /// authentication is an error
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<String> {
        require_field("username", email)?;
        require_field("password", password)?;

        let user = self
            .authenticate(email, password)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        tracing::info!(user_id = %user.id, "User logged in");
        self.issue_login_token(&user)
    }

    /// Register a new account with the `user` role.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// required fields, email availability, password confirmation, email
    /// format, password length, password character rules. Nothing is
    /// written unless every check passes.
    pub async fn register(&self, request: RegistrationRequest) -> DomainResult<User> {
        let RegistrationRequest {
            email,
            username,
            password,
            password_confirmation,
        } = request;

        require_field("email", &email)?;
        require_field("username", &username)?;
        require_field("password", &password)?;
        require_field("password_2", &password_confirmation)?;

        if self.user_repository.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailAlreadyRegistered.into());
        }

        if password != password_confirmation {
            return Err(ValidationError::PasswordMismatch.into());
        }

        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail.into());
        }

        check_password_strength(&password).map_err(ValidationError::from)?;

        let hashed_password = self.hasher.hash_blocking(password).await?;
        let user = self
            .user_repository
            .create(User::new(username, email, hashed_password))
            .await?;

        tracing::info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    fn issue_login_token(&self, user: &User) -> DomainResult<String> {
        self.token_service.issue(
            &user.email,
            &user.id.to_string(),
            Some(self.token_service.login_ttl()),
        )
    }
}

fn require_field(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::RequiredField {
            field: field.to_string(),
        }
        .into());
    }
    Ok(())
}
