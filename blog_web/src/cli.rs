use std::path::PathBuf;

use blog_core::fixtures::{FixtureOptions, DEFAULT_POST_COUNT};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "blog")]
#[command(about = "Blog server and maintenance commands", long_about = None)]
pub struct Cli {
    /// Directory holding config.json and the database
    #[arg(long, value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Migrate the database and start the HTTP server
    Serve {
        /// Override the configured listen address
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },
    /// Migrate the database and load the sample posts
    Seed {
        /// Number of posts to generate
        #[arg(long, default_value_t = DEFAULT_POST_COUNT)]
        posts: u32,

        /// Generate posts only
        #[arg(long)]
        no_comments: bool,

        /// Seed for the comment counts
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Create a user that can be managed from the dashboard
    CreateUser {
        #[arg(value_name = "USERNAME")]
        username: String,
    },
}

impl Cli {
    /// The requested subcommand, `serve` when none was given.
    pub fn resolved_command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Serve { bind: None })
    }
}

impl Command {
    pub fn fixture_options(&self) -> Option<FixtureOptions> {
        match self {
            Command::Seed {
                posts,
                no_comments,
                seed,
            } => Some(FixtureOptions {
                posts: *posts,
                with_comments: !no_comments,
                seed: *seed,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_serve() {
        let cli = Cli::parse_from(["blog"]);
        assert_eq!(cli.resolved_command(), Command::Serve { bind: None });
    }

    #[test]
    fn test_seed_defaults() {
        let cli = Cli::parse_from(["blog", "seed"]);
        let options = cli.resolved_command().fixture_options().unwrap();
        assert_eq!(options, FixtureOptions::default());
    }

    #[test]
    fn test_seed_flags() {
        let cli = Cli::parse_from(["blog", "seed", "--posts", "3", "--no-comments", "--seed", "9"]);
        let options = cli.resolved_command().fixture_options().unwrap();
        assert_eq!(
            options,
            FixtureOptions {
                posts: 3,
                with_comments: false,
                seed: Some(9),
            }
        );
    }

    #[test]
    fn test_create_user_and_data_dir() {
        let cli = Cli::parse_from(["blog", "--data-dir", "/tmp/blog", "create-user", "admin"]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/blog")));
        assert_eq!(
            cli.resolved_command(),
            Command::CreateUser {
                username: "admin".to_string()
            }
        );
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
