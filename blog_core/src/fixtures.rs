//! Development seed data.
//!
//! Loads numbered sample posts, each optionally followed by a random batch of
//! comments. Every row is inserted inside one transaction that is committed
//! once at the end, so a failed load leaves the database untouched.

use std::ops::RangeInclusive;

use rand::{rngs::StdRng, Rng, SeedableRng};
use sea_orm::{DatabaseConnection, DatabaseTransaction};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::{
    dto::{NewComment, NewPost},
    entity::prelude::*,
};

pub const DEFAULT_POST_COUNT: u32 = 25;
pub const COMMENTS_PER_POST: RangeInclusive<u32> = 5..=15;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("fatal database error")]
    DbError(#[from] DbErr),
    #[error("generated fixture row is invalid")]
    Invalid(#[from] ValidationErrors),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureOptions {
    /// Number of posts to generate, numbered from 1.
    pub posts: u32,
    pub with_comments: bool,
    /// Seed for the comment counts; `None` draws from the thread rng.
    pub seed: Option<u64>,
}

impl Default for FixtureOptions {
    fn default() -> Self {
        Self {
            posts: DEFAULT_POST_COUNT,
            with_comments: true,
            seed: None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FixtureSummary {
    pub posts: u64,
    pub comments: u64,
}

pub fn post_title(index: u32) -> String {
    format!("Article №{}", index)
}

pub fn post_content(index: u32) -> String {
    format!("content №{}", index)
}

pub fn comment_author(post_index: u32) -> String {
    format!("Author {}", post_index)
}

pub fn comment_content(index: u32) -> String {
    format!("Comment {}", index)
}

pub struct PostFixtures {
    options: FixtureOptions,
}

impl PostFixtures {
    pub fn new(options: FixtureOptions) -> Self {
        Self { options }
    }

    pub async fn load(&self, db: &DatabaseConnection) -> Result<FixtureSummary, FixtureError> {
        let mut rng = match self.options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        let txn = db.begin().await?;
        let summary = self.persist_all(&txn, &mut rng).await?;
        txn.commit().await?;

        tracing::info!(
            posts = summary.posts,
            comments = summary.comments,
            "fixtures loaded"
        );
        Ok(summary)
    }

    async fn persist_all(
        &self,
        txn: &DatabaseTransaction,
        rng: &mut StdRng,
    ) -> Result<FixtureSummary, FixtureError> {
        let mut summary = FixtureSummary::default();

        for i in 1..=self.options.posts {
            let new_post = NewPost::new(post_title(i), post_content(i));
            new_post.validate()?;
            let post = new_post.into_active_model().insert(txn).await?;
            summary.posts += 1;

            if !self.options.with_comments {
                continue;
            }

            let count = rng.random_range(COMMENTS_PER_POST);
            for j in 1..=count {
                let new_comment =
                    NewComment::new(post.id, comment_content(j)).with_author(comment_author(i));
                new_comment.validate()?;
                new_comment.into_active_model().insert(txn).await?;
                summary.comments += 1;
            }
            tracing::debug!(post_id = %post.id, comments = count, "seeded post");
        }

        Ok(summary)
    }
}
