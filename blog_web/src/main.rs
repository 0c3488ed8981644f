use anyhow::Context;
use blog_core::{config, dto::NewUser, fixtures::PostFixtures, BlogCore};
use blog_web::cli::{Cli, Command};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.data_dir {
        Some(dir) => config::get_or_init_in(dir.clone()).await,
        None => config::get_or_init().await,
    }
    .context("failed to load config")?;

    let command = cli.resolved_command();
    if let Command::Serve { bind: Some(bind) } = &command {
        config.bind_address = bind.clone();
    }

    let core = BlogCore::start(config)
        .await
        .context("failed to open database")?;

    match command {
        Command::Serve { .. } => {
            blog_web::serve(core.clone())
                .await
                .context("failed to start server")?;
        }
        Command::Seed { .. } => {
            let options = command
                .fixture_options()
                .context("seed command without fixture options")?;
            let summary = PostFixtures::new(options)
                .load(&core.db)
                .await
                .context("failed to load fixtures")?;
            println!(
                "loaded {} posts and {} comments",
                summary.posts, summary.comments
            );
        }
        Command::CreateUser { username } => {
            let user = core
                .users
                .create_user(NewUser::new(username))
                .await
                .context("failed to create user")?;
            println!("created user {} ({})", user.username, user.id);
        }
    }

    core.shutdown().await.context("failed to close database")?;
    Ok(())
}
