use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to find a data directory on this platform")]
    NoDataDir,
    #[error("config file io error")]
    Io(#[from] std::io::Error),
    #[error("malformed config file")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum SetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("data store unavailable")]
    Db(#[from] sea_orm::DbErr),
}
