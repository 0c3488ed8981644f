use blog_core::{
    entity::prelude::CommentModel,
    ids::{CommentId, PostId},
    service::comments::CommentFilter,
};
use salvo::prelude::*;

use crate::{error::WebError, state::AppState};

/// `GET /api/comments[?post={id}]`, newest first, unpaginated.
#[handler]
pub async fn list(req: &mut Request, depot: &mut Depot) -> Result<Json<Vec<CommentModel>>, WebError> {
    let state = AppState::from_depot(depot)?;

    let post_id = match req.query::<String>("post") {
        Some(raw) => Some(
            raw.parse::<PostId>()
                .map_err(|_| WebError::Invalid(format!("invalid post id `{raw}`")))?,
        ),
        None => None,
    };

    let comments = state
        .core
        .comments
        .list_comments(CommentFilter { post_id })
        .await?;

    Ok(Json(comments))
}

#[handler]
pub async fn show(req: &mut Request, depot: &mut Depot) -> Result<Json<CommentModel>, WebError> {
    let state = AppState::from_depot(depot)?;
    let comment_id = req
        .param::<i32>("id")
        .map(CommentId::from)
        .ok_or(WebError::NotFound)?;

    let comment = state.core.comments.get_comment(comment_id).await?;
    Ok(Json(comment))
}
