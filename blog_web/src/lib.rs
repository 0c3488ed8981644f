pub mod admin;
pub mod cli;
pub mod controllers;
pub mod error;
pub mod forms;
pub mod routes;
pub mod state;

use blog_core::BlogCore;
use salvo::prelude::*;

use crate::state::AppState;

/// Binds the configured address and serves until the process is stopped.
pub async fn serve(core: BlogCore) -> anyhow::Result<()> {
    let bind_address = core.config.bind_address.clone();
    let state = AppState::new(core)?;

    tracing::info!(%bind_address, "starting server");
    let acceptor = TcpListener::new(bind_address).try_bind().await?;
    Server::new(acceptor).serve(routes::router(state)).await;

    Ok(())
}
