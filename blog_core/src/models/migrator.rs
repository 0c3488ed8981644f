use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_post_table;
mod m20260301_000003_create_comment_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_post_table::Migration),
            Box::new(m20260301_000003_create_comment_table::Migration),
        ]
    }
}

#[cfg(test)]
use crate::test_utils::create_test_db;

#[tokio::test]
async fn test_migrations_okay() -> Result<(), DbErr> {
    let db = create_test_db().await;
    let schema_manager = SchemaManager::new(&db);

    Migrator::refresh(&db).await?;

    assert!(schema_manager.has_table("user").await?);
    assert!(schema_manager.has_table("post").await?);
    assert!(schema_manager.has_table("comment").await?);

    Ok(())
}

#[tokio::test]
async fn test_migrations_down() -> Result<(), DbErr> {
    let db = create_test_db().await;
    let schema_manager = SchemaManager::new(&db);

    Migrator::up(&db, None).await?;
    Migrator::down(&db, None).await?;

    assert!(!schema_manager.has_table("comment").await?);
    assert!(!schema_manager.has_table("post").await?);
    assert!(!schema_manager.has_table("user").await?);

    Ok(())
}
