use salvo::prelude::*;

use crate::{
    error::WebError,
    forms::{Credentials, LoginType},
    state::AppState,
};

fn render_form(
    state: &AppState,
    credentials: &Credentials,
    error: Option<&str>,
) -> Result<Text<String>, WebError> {
    let mut ctx = tera::Context::new();
    ctx.insert("action", LoginType::ACTION);
    ctx.insert("fields", &LoginType::build_form(credentials));
    ctx.insert("error", &error);

    state.render("login.html", &ctx)
}

#[handler]
pub async fn form(depot: &mut Depot) -> Result<Text<String>, WebError> {
    let state = AppState::from_depot(depot)?;
    render_form(state, &Credentials::default(), None)
}

// No authenticator is wired in, so a submission is bound and shown again.
#[handler]
pub async fn check(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Text<String>, WebError> {
    let state = AppState::from_depot(depot)?;
    let credentials = req
        .parse_form::<Credentials>()
        .await
        .map_err(|error| WebError::Invalid(error.to_string()))?;
    tracing::info!(username = %credentials.username, "rejected login attempt");

    res.status_code(StatusCode::UNAUTHORIZED);
    render_form(state, &credentials, Some("Invalid credentials."))
}
