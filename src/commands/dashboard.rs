use std::io::{self, Write};
use std::path::PathBuf;

use chrono::Utc;

use crate::collector::collect_all_with_progress;
use crate::commands::prompt;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::report::{default_csv_name, format_views, monthly_uploads, save_csv, sort_by_views, Summary};
use crate::resolver::resolve;
use crate::types::VideoRecord;
use crate::youtube::DataApiClient;

/// Where to save the CSV export, if at all.
pub enum CsvTarget {
    None,
    DefaultName,
    Path(PathBuf),
}

pub async fn run(
    channel_url: Option<String>,
    top: usize,
    csv: CsvTarget,
    api_key: Option<String>,
) -> Result<()> {
    let config = match Config::from_env(api_key) {
        Ok(config) => config,
        Err(Error::ApiKeyMissing) => {
            let key = prompt("YouTube Data API key: ")?;
            if key.is_empty() {
                return Err(Error::ApiKeyMissing);
            }
            Config::new(key)
        }
        Err(e) => return Err(e),
    };

    let channel_url = match channel_url {
        Some(url) => url.trim().to_string(),
        None => prompt("Enter the YouTube channel URL: ")?,
    };
    if channel_url.is_empty() {
        return Err(Error::Config("Please enter a YouTube channel URL.".to_string()));
    }

    let api = DataApiClient::new(&config)?;

    eprintln!("Getting channel information...");
    let channel_id = resolve(&api, &channel_url).await?;
    println!("Found channel! Channel ID: {}", channel_id);

    let mut videos = collect_all_with_progress(&api, &channel_id, |progress| {
        eprintln!("Fetched page {} ({} videos so far)", progress.page, progress.collected);
    })
    .await?;

    if videos.is_empty() {
        println!("No videos found for this channel.");
        return Ok(());
    }

    sort_by_views(&mut videos);
    render(&mut io::stdout().lock(), &videos, top)?;

    let csv_path = match csv {
        CsvTarget::None => None,
        CsvTarget::DefaultName => Some(PathBuf::from(default_csv_name(Utc::now()))),
        CsvTarget::Path(path) => Some(path),
    };
    if let Some(path) = csv_path {
        save_csv(&path, &mut videos)?;
        println!("Saved CSV to {}", path.display());
    }

    Ok(())
}

/// Print the dashboard for records already sorted by views.
pub fn render<W: Write>(out: &mut W, videos: &[VideoRecord], top: usize) -> Result<()> {
    let summary = Summary::from_records(videos);

    writeln!(out, "Analysis complete! Found {} videos.\n", summary.total_videos)?;
    writeln!(out, "Total Videos:  {}", summary.total_videos)?;
    writeln!(out, "Total Views:   {}", format_views(summary.total_views))?;
    writeln!(out, "Average Views: {}", format_views(summary.average_views))?;
    writeln!(out, "Most Viewed:   {}", format_views(summary.most_viewed))?;
    writeln!(out)?;

    let shown = top.max(1).min(videos.len());
    writeln!(out, "Top {} Videos", shown)?;
    writeln!(out, "==============")?;
    for (i, video) in videos.iter().take(shown).enumerate() {
        print_video_entry(out, i + 1, video)?;
    }

    writeln!(out, "Monthly Uploads")?;
    writeln!(out, "===============")?;
    for (month, count) in monthly_uploads(videos) {
        writeln!(out, "{}  {}", month, count)?;
    }

    Ok(())
}

fn print_video_entry<W: Write>(out: &mut W, index: usize, video: &VideoRecord) -> Result<()> {
    writeln!(out, "{}. {}", index, video.title)?;
    writeln!(
        out,
        "   Published: {} | {} views",
        video.published_at.format("%Y-%m-%d"),
        format_views(video.view_count)
    )?;
    writeln!(out)?;
    Ok(())
}
