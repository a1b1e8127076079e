use std::path::Path;

use crate::collector::collect_all_with_progress;
use crate::config::Config;
use crate::error::Result;
use crate::report::save_text_report;
use crate::resolver::resolve;
use crate::youtube::DataApiClient;

pub async fn run(channel_url: &str, output: &Path, api_key: Option<String>) -> Result<()> {
    let config = Config::from_env(api_key)?;
    let api = DataApiClient::new(&config)?;

    let channel_id = resolve(&api, channel_url.trim()).await?;
    println!("Channel ID: {}", channel_id);

    let mut videos = collect_all_with_progress(&api, &channel_id, |progress| {
        eprintln!("Fetched page {} ({} videos)", progress.page, progress.collected);
    })
    .await?;
    println!("Found {} videos.", videos.len());

    save_text_report(output, &mut videos)?;
    println!(
        "Saved {} video titles and views to {}",
        videos.len(),
        output.display()
    );

    Ok(())
}
