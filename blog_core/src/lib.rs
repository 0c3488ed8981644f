pub mod dto;
pub mod entity;
pub mod fixtures;
pub mod ids;
pub mod models;

use sea_orm::DatabaseConnection;

use crate::service::{comments::CommentsService, posts::PostsService, users::UsersService};

pub mod service;

pub mod error;

pub mod config;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

/// Main runtime handle for the blog: the open database plus one service per
/// entity.
#[derive(Clone)]
pub struct BlogCore {
    pub config: config::BlogConfig,

    pub db: DatabaseConnection,

    pub posts: PostsService,
    pub comments: CommentsService,
    pub users: UsersService,
}

impl BlogCore {
    /// Opens (creating if needed) the configured database and brings its
    /// schema up to date.
    pub async fn start(config: config::BlogConfig) -> Result<Self, error::SetupError> {
        tracing::info!(database = %config.database_path.display(), "starting blog core");

        // DB + migrations
        let db = models::open_or_create_db(&config).await?;
        models::migrate_up(&db).await?;

        Ok(Self::with_connection(config, db))
    }

    /// Wraps an already migrated connection.
    pub fn with_connection(config: config::BlogConfig, db: DatabaseConnection) -> Self {
        Self {
            posts: PostsService::new(db.clone()),
            comments: CommentsService::new(db.clone()),
            users: UsersService::new(db.clone()),
            config,
            db,
        }
    }

    pub async fn shutdown(self) -> Result<(), error::SetupError> {
        self.db.close().await?;
        Ok(())
    }
}

pub mod prelude {
    pub use super::ids;
    pub use super::entity;
    pub use super::models;

    pub use super::service;

    pub use super::error;

    pub use super::config;

    pub use super::dto;
    pub use super::fixtures;
}
