use thiserror::Error;

#[allow(dead_code)]
#[derive(Error, Debug)]
pub enum GreenscanError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("not a regular file: {0}")]
    NotAFile(String),

    #[error("not a directory: {0}")]
    NotADirectory(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("snapshot parse error: {0}")]
    SnapshotParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GreenscanError>;
