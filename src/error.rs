use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unable to extract channel ID from the URL: {0}")]
    UnresolvedReference(String),

    #[error("Upstream request failed: {0}")]
    Upstream(String),

    #[error("API key not set. Run `channel-views init` or set YOUTUBE_API_KEY.")]
    ApiKeyMissing,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Upstream(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
