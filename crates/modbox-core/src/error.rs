use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid score entry: {0}")]
    InvalidEntry(String),

    #[error("Display error: {0}")]
    Display(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("Audio error: {0}")]
    Audio(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigParseError(e.to_string())
    }
}
