//! User repository trait defining the interface for account persistence.
//!
//! This is the identity store: the only component that reads or writes
//! account records. The trait is async-first and every method reports
//! storage failures as a `DomainError` rather than panicking.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use uuid::Uuid;
/// use recipe_core::repositories::UserRepository;
/// use recipe_core::domain::entities::user::User;
/// use recipe_core::errors::DomainError;
///
/// struct MySqlUserRepository {
///     // database connection pool
/// }
///
/// #[async_trait]
/// impl UserRepository for MySqlUserRepository {
///     async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
///         // Implementation here
///         Ok(None)
///     }
///
///     // ... other methods
/// #   async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> { Ok(None) }
/// #   async fn create(&self, user: User) -> Result<User, DomainError> { Ok(user) }
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find an account by email.
    ///
    /// Matching is exact: `Bob@x.com` and `bob@x.com` are different keys.
    ///
    /// # Returns
    /// * `Ok(Some(User))` - Account found
    /// * `Ok(None)` - No account with that email
    /// * `Err(DomainError)` - Storage failure
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find an account by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Persist a new account
    ///
    /// # Returns
    /// * `Ok(User)` - The stored account
    /// * `Err(DomainError::Auth(AuthError::EmailAlreadyRegistered))` - The
    ///   email is already taken, even if a concurrent insert won the race
    /// * `Err(DomainError)` - Storage failure
    async fn create(&self, user: User) -> Result<User, DomainError>;
}
