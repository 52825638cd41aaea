//! MySQL repository implementations

pub mod catalog_repository_impl;
pub mod recipe_repository_impl;
pub mod user_repository_impl;

pub use catalog_repository_impl::MySqlCatalogRepository;
pub use recipe_repository_impl::MySqlRecipeRepository;
pub use user_repository_impl::MySqlUserRepository;

use recipe_core::errors::DomainError;

/// Wrap a SQLx failure with the operation that hit it
pub(crate) fn db_error(context: &str, err: sqlx::Error) -> DomainError {
    tracing::error!(error = %err, "{}", context);
    DomainError::Database(format!("{}: {}", context, err))
}

/// Whether `err` is a duplicate key on a unique index
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.is_unique_violation(),
        _ => false,
    }
}
