use std::path::PathBuf;
use std::sync::OnceLock;

use crate::error::{Error, Result};

static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Retries on top of the first attempt for transient upstream failures.
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Get the base data directory (~/.channel-views/)
pub fn data_dir() -> &'static PathBuf {
    DATA_DIR.get_or_init(|| {
        std::env::var("CHANNEL_VIEWS_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".channel-views")
            })
    })
}

/// Get the .env file path
pub fn env_file_path() -> PathBuf {
    data_dir().join(".env")
}

/// Load environment variables from the data directory's .env file
pub fn load_env() {
    let env_path = env_file_path();
    if env_path.exists() {
        let _ = dotenvy::from_path(&env_path);
    } else {
        // Try current directory as fallback
        let _ = dotenvy::dotenv();
    }
}

/// Get the YouTube Data API key
pub fn youtube_api_key() -> Option<String> {
    std::env::var("YOUTUBE_API_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty())
}

/// Create the data directory if it doesn't exist
pub fn ensure_directories() -> Result<()> {
    std::fs::create_dir_all(data_dir())?;
    Ok(())
}

/// Settings passed explicitly to the provider client.
#[derive(Debug, Clone)]
pub struct Config {
    /// Credential attached to every request, never inspected.
    pub api_key: String,
    pub max_retries: u32,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Build from the environment, preferring an explicitly supplied key.
    pub fn from_env(api_key: Option<String>) -> Result<Self> {
        let api_key = api_key
            .filter(|key| !key.trim().is_empty())
            .or_else(youtube_api_key)
            .ok_or(Error::ApiKeyMissing)?;

        let max_retries = match std::env::var("CHANNEL_VIEWS_MAX_RETRIES") {
            Ok(raw) => parse_max_retries(&raw)?,
            Err(_) => DEFAULT_MAX_RETRIES,
        };

        Ok(Self {
            api_key,
            max_retries,
        })
    }
}

fn parse_max_retries(raw: &str) -> Result<u32> {
    raw.trim().parse().map_err(|_| {
        Error::Config(format!(
            "CHANNEL_VIEWS_MAX_RETRIES must be a non-negative integer, got '{}'",
            raw
        ))
    })
}
