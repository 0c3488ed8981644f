use blog_core::service::{
    comments::CommentsServiceError, posts::PostsServiceError, users::UsersServiceError,
};
use salvo::prelude::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("resource not found")]
    NotFound,

    #[error("invalid input: {0}")]
    Invalid(String),

    #[error("application state missing from depot")]
    MissingState,

    #[error("template rendering failed")]
    Template(#[from] tera::Error),

    #[error("database error")]
    Db(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl WebError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebError::NotFound => StatusCode::NOT_FOUND,
            WebError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
            WebError::MissingState | WebError::Template(_) | WebError::Db(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<PostsServiceError> for WebError {
    fn from(error: PostsServiceError) -> Self {
        match error {
            PostsServiceError::PostNotFound => WebError::NotFound,
            PostsServiceError::Invalid(errors) => WebError::Invalid(errors.to_string()),
            PostsServiceError::DbError(error) => WebError::Db(Box::new(error)),
        }
    }
}

impl From<CommentsServiceError> for WebError {
    fn from(error: CommentsServiceError) -> Self {
        match error {
            CommentsServiceError::CommentNotFound | CommentsServiceError::PostNotFound => {
                WebError::NotFound
            }
            CommentsServiceError::UserNotFound => WebError::Invalid(error.to_string()),
            CommentsServiceError::Invalid(errors) => WebError::Invalid(errors.to_string()),
            CommentsServiceError::DbError(error) => WebError::Db(Box::new(error)),
        }
    }
}

impl From<UsersServiceError> for WebError {
    fn from(error: UsersServiceError) -> Self {
        match error {
            UsersServiceError::UsernameTaken => WebError::Invalid(error.to_string()),
            UsersServiceError::Invalid(errors) => WebError::Invalid(errors.to_string()),
            UsersServiceError::DbError(error) => WebError::Db(Box::new(error)),
        }
    }
}

#[async_trait]
impl Writer for WebError {
    async fn write(self, req: &mut Request, _depot: &mut Depot, res: &mut Response) {
        let code = self.status_code();
        if code.is_server_error() {
            tracing::error!(error = ?self, path = %req.uri(), "request failed");
        } else {
            tracing::debug!(error = %self, path = %req.uri(), "request rejected");
        }

        match StatusError::from_code(code) {
            Some(status) => res.render(status.brief(self.to_string())),
            None => {
                res.status_code(code);
            }
        }
    }
}
