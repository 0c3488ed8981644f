use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::models;

/// Create a new in-memory SQLite database for testing.
/// Each call creates a fresh, isolated database instance.
///
/// The pool is pinned to a single connection: every new SQLite connection to
/// `:memory:` would otherwise open its own empty database.
pub async fn create_test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1).sqlx_logging(false);

    Database::connect(options)
        .await
        .expect("Failed to create test database")
}

/// Create a new in-memory SQLite database with migrations already applied.
/// This is a convenience function for tests that need a fully set up database.
///
/// # Example
/// ```
/// use blog_core::test_utils;
///
/// # async fn example() {
/// let db = test_utils::create_test_db_with_migrations().await;
/// // Database is ready to use!
/// # }
/// ```
pub async fn create_test_db_with_migrations() -> DatabaseConnection {
    let db = create_test_db().await;

    models::migrate_up(&db)
        .await
        .expect("Failed to run migrations");

    db
}
