use salvo::prelude::*;

use crate::{
    admin::{self, CrudEntity},
    error::WebError,
    state::AppState,
};

fn admin_context(current: CrudEntity) -> tera::Context {
    let mut ctx = tera::Context::new();
    ctx.insert("dashboard_title", admin::DASHBOARD_TITLE);
    ctx.insert("menu", &admin::configure_menu_items());
    ctx.insert("current", &current);
    ctx
}

#[handler]
pub async fn index(res: &mut Response) {
    res.render(Redirect::found(admin::crud_url(admin::LANDING)));
}

#[handler]
pub async fn posts(depot: &mut Depot) -> Result<Text<String>, WebError> {
    let state = AppState::from_depot(depot)?;
    let rows = state.core.posts.list_posts().await?;

    let mut ctx = admin_context(CrudEntity::Post);
    ctx.insert("posts", &rows);

    state.render("admin/post_index.html", &ctx)
}

#[handler]
pub async fn users(depot: &mut Depot) -> Result<Text<String>, WebError> {
    let state = AppState::from_depot(depot)?;
    let rows = state.core.users.list_users().await?;

    let mut ctx = admin_context(CrudEntity::User);
    ctx.insert("users", &rows);

    state.render("admin/user_index.html", &ctx)
}
