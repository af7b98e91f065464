use thiserror::Error;

#[derive(Error, Debug)]
pub enum DepthError {
    #[error("remote unavailable: {0}")]
    RemoteUnavailable(String),

    #[error("content fetch failed: {0}")]
    ContentFetch(String),

    #[error("unexpected content encoding: {0}")]
    DecodeFailure(String),

    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("invalid heuristic pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DepthError>;
