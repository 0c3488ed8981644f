use salvo::logging::Logger;
use salvo::prelude::*;

use crate::{
    controllers::{api, blog, dashboard, login},
    state::AppState,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .hoop(Logger::new())
        .hoop(affix_state::inject(state))
        .get(blog::index)
        .push(Router::with_path("article-{id|\\d+}").get(blog::read))
        .push(Router::with_path("login").get(login::form).post(login::check))
        .push(
            Router::with_path("admin")
                .get(dashboard::index)
                .push(Router::with_path("post").get(dashboard::posts))
                .push(Router::with_path("user").get(dashboard::users)),
        )
        .push(
            Router::with_path("api/comments")
                .get(api::list)
                .push(Router::with_path("{id:num}").get(api::show)),
        )
}

pub fn service(state: AppState) -> Service {
    Service::new(router(state))
}
