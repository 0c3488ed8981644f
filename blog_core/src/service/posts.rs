use sea_orm::DatabaseConnection;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::{dto::NewPost, entity::prelude::*, ids::PostId};

#[derive(Debug, Error)]
pub enum PostsServiceError {
    #[error("fatal database error")]
    DbError(#[from] DbErr),

    #[error("post not found")]
    PostNotFound,

    #[error("invalid post")]
    Invalid(#[from] ValidationErrors),
}

#[derive(Clone)]
pub struct PostsService {
    db: DatabaseConnection,
}

impl PostsService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a new post; the id is assigned by the database.
    pub async fn create_post(&self, new_post: NewPost) -> Result<PostModel, PostsServiceError> {
        new_post.validate()?;

        let post = new_post.into_active_model().insert(&self.db).await?;
        tracing::debug!(post_id = %post.id, "created post");

        Ok(post)
    }

    /// Get a specific post by ID
    pub async fn get_post(&self, post_id: PostId) -> Result<PostModel, PostsServiceError> {
        Post::find_by_id(post_id)
            .one(&self.db)
            .await?
            .ok_or(PostsServiceError::PostNotFound)
    }

    /// List every post, oldest first. Not paginated.
    pub async fn list_posts(&self) -> Result<Vec<PostModel>, PostsServiceError> {
        let posts = Post::find()
            .order_by_asc(PostColumn::Id)
            .all(&self.db)
            .await?;

        Ok(posts)
    }

    pub async fn count_posts(&self) -> Result<u64, PostsServiceError> {
        Ok(Post::find().count(&self.db).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;
    use std::collections::HashSet;

    async fn setup_test_service() -> PostsService {
        PostsService::new(test_utils::create_test_db_with_migrations().await)
    }

    #[tokio::test]
    async fn test_create_post() {
        let service = setup_test_service().await;

        let post = service
            .create_post(NewPost::new("Test Post", "This is a test post body"))
            .await
            .expect("Failed to create post");

        assert_eq!(post.title, "Test Post");
        assert_eq!(post.content, "This is a test post body");
    }

    #[tokio::test]
    async fn test_ids_assigned_on_persist() {
        let service = setup_test_service().await;

        let first = service.create_post(NewPost::new("One", "1")).await.unwrap();
        let second = service.create_post(NewPost::new("Two", "2")).await.unwrap();

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_create_post_rejects_blank_title() {
        let service = setup_test_service().await;

        let result = service.create_post(NewPost::new("   ", "Body")).await;
        assert!(matches!(result, Err(PostsServiceError::Invalid(_))));
        assert_eq!(service.count_posts().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_get_post() {
        let service = setup_test_service().await;

        let created = service
            .create_post(NewPost::new("Title", "Body"))
            .await
            .unwrap();
        service
            .create_post(NewPost::new("Other", "Other body"))
            .await
            .unwrap();

        let fetched = service.get_post(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_missing_post() {
        let service = setup_test_service().await;

        let result = service.get_post(PostId::from(404)).await;
        assert!(matches!(result, Err(PostsServiceError::PostNotFound)));
    }

    #[tokio::test]
    async fn test_list_posts_empty() {
        let service = setup_test_service().await;
        assert!(service.list_posts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_posts_returns_all() {
        let service = setup_test_service().await;

        let mut created = Vec::new();
        for i in 0..5 {
            let post = service
                .create_post(NewPost::new(format!("Post {}", i), format!("Body {}", i)))
                .await
                .unwrap();
            created.push(post);
        }

        let listed = service.list_posts().await.unwrap();
        assert_eq!(listed, created);

        let unique: HashSet<_> = listed.iter().map(|post| post.id).collect();
        assert_eq!(unique.len(), 5);
        assert_eq!(service.count_posts().await.unwrap(), 5);
    }
}
