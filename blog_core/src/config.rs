use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use crate::error::ConfigError;

static DATA_DIR_NAME: &str = "blog";
static BLOG_DB_NAME: &str = "blog_db.sqlite";
static CONFIG_FILE_NAME: &str = "config.json";

// For now this directory structure should be like
// data_dir_path
// |- blog
//    |- blog_db.sqlite
//    |- config.json

fn default_bind_address() -> String {
    "127.0.0.1:5800".to_string()
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BlogConfig {
    pub database_path: PathBuf,

    /// Address the HTTP server listens on.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Directory holding the tera templates, `None` uses the bundled ones.
    ///
    /// `serde(default)` keeps backward compatibility with old config.json files.
    #[serde(default)]
    pub templates_dir: Option<PathBuf>,
}

impl BlogConfig {
    /// Creates a new BlogConfig storing its database in the specified data directory
    pub fn new(data_dir: PathBuf) -> Self {
        let database_path = data_dir.join(BLOG_DB_NAME);

        BlogConfig {
            database_path,
            bind_address: default_bind_address(),
            templates_dir: None,
        }
    }
}

/// Returns `<platform data dir>/blog`.
pub fn default_data_dir() -> Result<PathBuf, ConfigError> {
    let data_dir = dirs::data_dir().ok_or(ConfigError::NoDataDir)?;
    Ok(data_dir.join(DATA_DIR_NAME))
}

/// Gets the existing config or initializes a new one in the platform data directory
pub async fn get_or_init() -> Result<BlogConfig, ConfigError> {
    get_or_init_in(default_data_dir()?).await
}

/// Gets the existing config or initializes a new one inside `blog_dir`
pub async fn get_or_init_in(blog_dir: PathBuf) -> Result<BlogConfig, ConfigError> {
    let config_path = blog_dir.join(CONFIG_FILE_NAME);

    // Create the blog directory if it doesn't exist
    fs::create_dir_all(&blog_dir).await?;

    // Check if config file exists
    if fs::try_exists(&config_path).await? {
        // Read and deserialize existing config
        let mut file = fs::File::open(&config_path).await?;
        let mut contents = String::new();
        file.read_to_string(&mut contents).await?;

        let config: BlogConfig = serde_json::from_str(&contents)?;
        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    } else {
        // Create new config
        let config = BlogConfig::new(blog_dir.clone());

        // Serialize and write to file
        let json = serde_json::to_string_pretty(&config)?;
        let mut file = fs::File::create(&config_path).await?;
        file.write_all(json.as_bytes()).await?;

        tracing::info!(path = %config_path.display(), "wrote default config");
        Ok(config)
    }
}
