//! MySQL implementation of the UserRepository trait.
//!
//! Email matching is exact because the `email` column uses a binary
//! collation (see [`crate::database::schema`]).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use recipe_core::domain::entities::user::{Role, User};
use recipe_core::errors::{AuthError, DomainError};
use recipe_core::repositories::UserRepository;

use super::{db_error, is_unique_violation};

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Database(format!("Failed to get id: {}", e)))?;

        let role: String = row
            .try_get("role")
            .map_err(|e| DomainError::Database(format!("Failed to get role: {}", e)))?;

        Ok(User {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::Database(format!("Invalid UUID: {}", e)))?,
            name: row
                .try_get("name")
                .map_err(|e| DomainError::Database(format!("Failed to get name: {}", e)))?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::Database(format!("Failed to get email: {}", e)))?,
            hashed_password: row
                .try_get("hashed_password")
                .map_err(|e| DomainError::Database(format!("Failed to get hashed_password: {}", e)))?,
            role: role
                .parse::<Role>()
                .map_err(DomainError::Database)?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database(format!("Failed to get created_at: {}", e)))?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, name, email, hashed_password, role, created_at
            FROM users
            WHERE email = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Database query failed", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, name, email, hashed_password, role, created_at
            FROM users
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Database query failed", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (id, name, email, hashed_password, role, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.hashed_password)
            .bind(user.role.as_str())
            .bind(user.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                // Lost a registration race: another insert took the email
                if is_unique_violation(&e) {
                    DomainError::Auth(AuthError::EmailAlreadyRegistered)
                } else {
                    db_error("Failed to create user", e)
                }
            })?;

        Ok(user)
    }
}
