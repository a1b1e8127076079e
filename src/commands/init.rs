use crate::commands::prompt;
use crate::config::{data_dir, ensure_directories, env_file_path};
use crate::error::{Error, Result};

pub fn run(api_key: Option<String>, force: bool) -> Result<()> {
    ensure_directories()?;

    let env_file = env_file_path();

    if env_file.exists() && !force {
        println!("Config already exists at {}", env_file.display());
        println!("Use --force to overwrite.");
        return Ok(());
    }

    let api_key = match api_key {
        Some(key) => key.trim().to_string(),
        None => prompt("Enter your YouTube Data API key: ")?,
    };

    if api_key.is_empty() {
        return Err(Error::ApiKeyMissing);
    }

    std::fs::write(&env_file, format!("YOUTUBE_API_KEY={}\n", api_key))?;

    println!("Config saved to {}", env_file.display());
    println!("Data directory: {}", data_dir().display());

    Ok(())
}
