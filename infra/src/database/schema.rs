//! Table bootstrap for a fresh database.
//!
//! Every statement is `CREATE TABLE IF NOT EXISTS`, so running it against an
//! existing database is a no-op. Schema changes are out of scope here.

use sqlx::MySqlPool;

use crate::InfrastructureError;

/// `users.email` uses a binary collation: lookups are exact and
/// case-sensitive, and the unique index treats `Bob@x.com` and `bob@x.com`
/// as different keys.
const CREATE_USERS: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id CHAR(36) NOT NULL PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        email VARCHAR(255) CHARACTER SET utf8mb4 COLLATE utf8mb4_bin NOT NULL,
        hashed_password VARCHAR(255) NOT NULL,
        role VARCHAR(16) NOT NULL DEFAULT 'user',
        created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
        UNIQUE KEY uq_users_email (email)
    ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4
"#;

const CREATE_RECIPES: &str = r#"
    CREATE TABLE IF NOT EXISTS recipes (
        id CHAR(36) NOT NULL PRIMARY KEY,
        recipe_title VARCHAR(255) NOT NULL,
        text TEXT NOT NULL,
        user_id CHAR(36) NOT NULL,
        created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
        KEY idx_recipes_user_id (user_id)
    ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4
"#;

fn create_catalog_table(table: &str) -> String {
    format!(
        r#"
    CREATE TABLE IF NOT EXISTS {} (
        id CHAR(36) NOT NULL PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
    ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4
"#,
        table
    )
}

/// Create any missing table
pub async fn ensure_tables(pool: &MySqlPool) -> Result<(), InfrastructureError> {
    tracing::info!("Ensuring database tables exist");

    sqlx::query(CREATE_USERS).execute(pool).await?;
    sqlx::query(CREATE_RECIPES).execute(pool).await?;

    for kind in recipe_core::CatalogKind::ALL {
        sqlx::query(&create_catalog_table(kind.table()))
            .execute(pool)
            .await?;
    }

    Ok(())
}
