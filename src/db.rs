//! Database connection pool and migration management.
//!
//! Each service owns its own PostgreSQL database; the pool helper is shared
//! and the migration runners are per service, reading from
//! `migrations/accounts` and `migrations/clients` respectively.

use sqlx::{Pool, Postgres};

/// Type alias for the PostgreSQL connection pool.
pub type DbPool = Pool<Postgres>;

/// Create a new PostgreSQL connection pool.
///
/// Connections are created lazily and reused across requests.
///
/// # Errors
///
/// Returns an error if the connection string is invalid or the database
/// is unreachable.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    sqlx::postgres::PgPoolOptions::new()
        // Limit concurrent connections
        .max_connections(5)
        .connect(database_url)
        .await
}

/// Run the accounts-service migrations.
///
/// Migration files are read at compile time from `migrations/accounts` and
/// tracked in the `_sqlx_migrations` table, so each runs only once.
pub async fn run_accounts_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations/accounts").run(pool).await
}

/// Run the clients-service migrations from `migrations/clients`.
pub async fn run_clients_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations/clients").run(pool).await
}
