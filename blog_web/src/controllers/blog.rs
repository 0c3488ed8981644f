use blog_core::ids::PostId;
use salvo::prelude::*;

use crate::{error::WebError, state::AppState};

// Handler for the post listing
#[handler]
pub async fn index(depot: &mut Depot) -> Result<Text<String>, WebError> {
    let state = AppState::from_depot(depot)?;
    let posts = state.core.posts.list_posts().await?;

    let mut ctx = tera::Context::new();
    ctx.insert("posts", &posts);

    state.render("index.html", &ctx)
}

// Handler for a single post and its comments
#[handler]
pub async fn read(req: &mut Request, depot: &mut Depot) -> Result<Text<String>, WebError> {
    let state = AppState::from_depot(depot)?;
    // `{id:num}` only guarantees digits; out of range ids are simply unknown
    let post_id = req
        .param::<i32>("id")
        .map(PostId::from)
        .ok_or(WebError::NotFound)?;

    let post = state.core.posts.get_post(post_id).await?;
    let comments = state.core.comments.list_for_post(post.id).await?;
    tracing::debug!(%post_id, comments = comments.len(), "read post");

    let mut ctx = tera::Context::new();
    ctx.insert("post", &post);
    ctx.insert("comments", &comments);

    state.render("read.html", &ctx)
}
