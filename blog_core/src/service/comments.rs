use sea_orm::DatabaseConnection;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::{
    dto::NewComment,
    entity::prelude::*,
    ids::{CommentId, PostId},
};

#[derive(Debug, Error)]
pub enum CommentsServiceError {
    #[error("fatal database error")]
    DbError(#[from] DbErr),

    #[error("comment not found")]
    CommentNotFound,

    #[error("post not found")]
    PostNotFound,

    #[error("user not found")]
    UserNotFound,

    #[error("invalid comment")]
    Invalid(#[from] ValidationErrors),
}

/// Exact-match filters for [`CommentsService::list_comments`].
#[derive(Debug, Default, Clone, Copy)]
pub struct CommentFilter {
    pub post_id: Option<PostId>,
}

#[derive(Clone)]
pub struct CommentsService {
    db: DatabaseConnection,
}

impl CommentsService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Attach a new comment to an existing post
    pub async fn create_comment(
        &self,
        new_comment: NewComment,
    ) -> Result<CommentModel, CommentsServiceError> {
        new_comment.validate()?;

        // Verify post exists
        let post_exists = Post::find_by_id(new_comment.post_id)
            .one(&self.db)
            .await?
            .is_some();

        if !post_exists {
            return Err(CommentsServiceError::PostNotFound);
        }

        // Verify user exists, anonymous comments skip this
        if let Some(user_id) = new_comment.user_id {
            let user_exists = User::find_by_id(user_id).one(&self.db).await?.is_some();

            if !user_exists {
                return Err(CommentsServiceError::UserNotFound);
            }
        }

        let comment = new_comment.into_active_model().insert(&self.db).await?;
        tracing::debug!(comment_id = %comment.id, post_id = %comment.post_id, "created comment");

        Ok(comment)
    }

    /// Get a specific comment by ID
    pub async fn get_comment(
        &self,
        comment_id: CommentId,
    ) -> Result<CommentModel, CommentsServiceError> {
        Comment::find_by_id(comment_id)
            .one(&self.db)
            .await?
            .ok_or(CommentsServiceError::CommentNotFound)
    }

    /// List comments newest first, optionally narrowed to one post. Not paginated.
    pub async fn list_comments(
        &self,
        filter: CommentFilter,
    ) -> Result<Vec<CommentModel>, CommentsServiceError> {
        let mut query = Comment::find();

        if let Some(post_id) = filter.post_id {
            query = query.filter(CommentColumn::PostId.eq(post_id));
        }

        let comments = query
            .order_by_desc(CommentColumn::PostedAt)
            .order_by_desc(CommentColumn::Id)
            .all(&self.db)
            .await?;

        Ok(comments)
    }

    /// List the comments of one post in conversation order (oldest first)
    pub async fn list_for_post(
        &self,
        post_id: PostId,
    ) -> Result<Vec<CommentModel>, CommentsServiceError> {
        let comments = Comment::find()
            .filter(CommentColumn::PostId.eq(post_id))
            .order_by_asc(CommentColumn::PostedAt)
            .order_by_asc(CommentColumn::Id)
            .all(&self.db)
            .await?;

        Ok(comments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::{NewPost, NewUser};
    use crate::ids::UserId;
    use crate::service::{posts::PostsService, users::UsersService};
    use crate::test_utils;
    use chrono::{Duration, Utc};

    struct Fixture {
        comments: CommentsService,
        posts: PostsService,
        users: UsersService,
    }

    async fn setup() -> Fixture {
        let db = test_utils::create_test_db_with_migrations().await;
        Fixture {
            comments: CommentsService::new(db.clone()),
            posts: PostsService::new(db.clone()),
            users: UsersService::new(db),
        }
    }

    async fn create_test_post(fixture: &Fixture, title: &str) -> PostId {
        fixture
            .posts
            .create_post(NewPost::new(title, "Body"))
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_create_comment() {
        let fixture = setup().await;
        let post_id = create_test_post(&fixture, "Post").await;

        let comment = fixture
            .comments
            .create_comment(NewComment::new(post_id, "First comment").with_author("Author 1"))
            .await
            .expect("Failed to create comment");

        assert_eq!(comment.post_id, post_id);
        assert_eq!(comment.author.as_deref(), Some("Author 1"));
        assert_eq!(comment.content, "First comment");
        assert_eq!(comment.user_id, None);
    }

    #[tokio::test]
    async fn test_create_comment_posted_at_defaults_to_now() {
        let fixture = setup().await;
        let post_id = create_test_post(&fixture, "Post").await;

        let before = Utc::now() - Duration::seconds(1);
        let comment = fixture
            .comments
            .create_comment(NewComment::new(post_id, "Timestamped"))
            .await
            .unwrap();

        assert!(comment.posted_at >= before);
        assert!(comment.posted_at <= Utc::now() + Duration::seconds(1));
    }

    #[tokio::test]
    async fn test_create_comment_with_user() {
        let fixture = setup().await;
        let post_id = create_test_post(&fixture, "Post").await;
        let user = fixture
            .users
            .create_user(NewUser::new("reader@example.com"))
            .await
            .unwrap();

        let comment = fixture
            .comments
            .create_comment(NewComment::new(post_id, "Signed comment").with_user(user.id))
            .await
            .unwrap();

        assert_eq!(comment.user_id, Some(user.id));
    }

    #[tokio::test]
    async fn test_create_comment_unknown_user() {
        let fixture = setup().await;
        let post_id = create_test_post(&fixture, "Post").await;

        let result = fixture
            .comments
            .create_comment(NewComment::new(post_id, "Ghost comment").with_user(UserId::from(99)))
            .await;

        assert!(matches!(result, Err(CommentsServiceError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_create_comment_unknown_post() {
        let fixture = setup().await;

        let result = fixture
            .comments
            .create_comment(NewComment::new(PostId::from(99), "Orphan comment"))
            .await;

        assert!(matches!(result, Err(CommentsServiceError::PostNotFound)));
    }

    #[tokio::test]
    async fn test_create_comment_too_short() {
        let fixture = setup().await;
        let post_id = create_test_post(&fixture, "Post").await;

        let result = fixture
            .comments
            .create_comment(NewComment::new(post_id, "Hey"))
            .await;
        assert!(matches!(result, Err(CommentsServiceError::Invalid(_))));

        let result = fixture
            .comments
            .create_comment(NewComment::new(post_id, "Long enough").with_author("X"))
            .await;
        assert!(matches!(result, Err(CommentsServiceError::Invalid(_))));

        assert!(fixture.comments.list_for_post(post_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_comment() {
        let fixture = setup().await;
        let post_id = create_test_post(&fixture, "Post").await;

        let created = fixture
            .comments
            .create_comment(NewComment::new(post_id, "Find me"))
            .await
            .unwrap();

        let fetched = fixture.comments.get_comment(created.id).await.unwrap();
        assert_eq!(fetched, created);

        let missing = fixture.comments.get_comment(CommentId::from(404)).await;
        assert!(matches!(missing, Err(CommentsServiceError::CommentNotFound)));
    }

    #[tokio::test]
    async fn test_list_comments_newest_first() {
        let fixture = setup().await;
        let post_id = create_test_post(&fixture, "Post").await;
        let now = Utc::now();

        for (i, age) in [3, 1, 2].into_iter().enumerate() {
            fixture
                .comments
                .create_comment(
                    NewComment::new(post_id, format!("Comment {}", i))
                        .posted_at(now - Duration::minutes(age)),
                )
                .await
                .unwrap();
        }

        let newest_first = fixture
            .comments
            .list_comments(CommentFilter::default())
            .await
            .unwrap();
        let contents: Vec<_> = newest_first.iter().map(|c| c.content.as_str()).collect();
        assert_eq!(contents, vec!["Comment 1", "Comment 2", "Comment 0"]);

        let oldest_first = fixture.comments.list_for_post(post_id).await.unwrap();
        let contents: Vec<_> = oldest_first.iter().map(|c| c.content.as_str()).collect();
        assert_eq!(contents, vec!["Comment 0", "Comment 2", "Comment 1"]);
    }

    #[tokio::test]
    async fn test_list_comments_filter_by_post() {
        let fixture = setup().await;
        let first = create_test_post(&fixture, "First").await;
        let second = create_test_post(&fixture, "Second").await;

        for i in 0..3 {
            fixture
                .comments
                .create_comment(NewComment::new(first, format!("First {}", i)))
                .await
                .unwrap();
        }
        fixture
            .comments
            .create_comment(NewComment::new(second, "Second 0"))
            .await
            .unwrap();

        let filtered = fixture
            .comments
            .list_comments(CommentFilter {
                post_id: Some(second),
            })
            .await
            .unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].post_id, second);

        let all = fixture
            .comments
            .list_comments(CommentFilter::default())
            .await
            .unwrap();
        assert_eq!(all.len(), 4);
    }
}
