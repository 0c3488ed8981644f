//! Write-side input records.
//!
//! Every insert goes through one of these so the field constraints are checked
//! in one place, whether the row comes from the services or from the fixtures.

use chrono::{DateTime, Utc};
use sea_orm::{NotSet, Set};
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::{
    entity::prelude::*,
    ids::{PostId, UserId},
};

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewPost {
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    #[validate(custom(function = "not_blank"))]
    pub content: String,
}

impl NewPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    pub(crate) fn into_active_model(self) -> PostActiveModel {
        PostActiveModel {
            id: NotSet,
            title: Set(self.title),
            content: Set(self.content),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewComment {
    pub post_id: PostId,
    pub user_id: Option<UserId>,
    #[validate(custom(function = "not_blank"), length(min = 2))]
    pub author: Option<String>,
    #[validate(custom(function = "not_blank"), length(min = 5))]
    pub content: String,
    /// Defaults to the time of insertion when left empty.
    pub posted_at: Option<DateTime<Utc>>,
}

impl NewComment {
    pub fn new(post_id: PostId, content: impl Into<String>) -> Self {
        Self {
            post_id,
            user_id: None,
            author: None,
            content: content.into(),
            posted_at: None,
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_user(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn posted_at(mut self, posted_at: DateTime<Utc>) -> Self {
        self.posted_at = Some(posted_at);
        self
    }

    pub(crate) fn into_active_model(self) -> CommentActiveModel {
        CommentActiveModel {
            id: NotSet,
            author: Set(self.author),
            content: Set(self.content),
            posted_at: Set(self.posted_at.unwrap_or_else(Utc::now)),
            post_id: Set(self.post_id),
            user_id: Set(self.user_id),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewUser {
    #[validate(custom(function = "not_blank"), length(max = 180))]
    pub username: String,
}

impl NewUser {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    pub(crate) fn into_active_model(self) -> UserActiveModel {
        UserActiveModel {
            id: NotSet,
            username: Set(self.username),
        }
    }
}
