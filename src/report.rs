//! Presentation helpers shared by the front ends: view formatting, ranking,
//! the text and CSV reports, and dashboard aggregates.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::types::VideoRecord;

pub const DEFAULT_TEXT_REPORT: &str = "video_titles_and_views.txt";

/// Format a view count as `999`, `2k` or `2.6M`. Halves round up.
pub fn format_views(views: u64) -> String {
    if views >= 1_000_000 {
        let tenths = (views + 50_000) / 100_000;
        format!("{}.{}M", tenths / 10, tenths % 10)
    } else if views >= 1_000 {
        format!("{}k", (views + 500) / 1_000)
    } else {
        views.to_string()
    }
}

/// Sort by view count, highest first. Equal counts keep their order.
pub fn sort_by_views(records: &mut [VideoRecord]) {
    records.sort_by(|a, b| b.view_count.cmp(&a.view_count));
}

/// Write one `<title> - <views>` line per record, in the given order.
pub fn write_text_report<W: Write>(writer: &mut W, records: &[VideoRecord]) -> Result<()> {
    for record in records {
        writeln!(writer, "{} - {}", record.title, format_views(record.view_count))?;
    }
    Ok(())
}

/// Sort `records` and save the text report to `path`.
pub fn save_text_report(path: &Path, records: &mut [VideoRecord]) -> Result<()> {
    sort_by_views(records);
    let mut writer = BufWriter::new(File::create(path)?);
    write_text_report(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}

/// Write the CSV export (`Title,Views,Formatted_Views,Published`).
pub fn write_csv<W: Write>(writer: W, records: &[VideoRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(["Title", "Views", "Formatted_Views", "Published"])?;
    for record in records {
        let views = record.view_count.to_string();
        let formatted = format_views(record.view_count);
        let published = record.published_at.format("%Y-%m-%d %H:%M:%S").to_string();
        writer.write_record([
            record.title.as_str(),
            views.as_str(),
            formatted.as_str(),
            published.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Sort `records` and save the CSV export to `path`.
pub fn save_csv(path: &Path, records: &mut [VideoRecord]) -> Result<()> {
    sort_by_views(records);
    write_csv(File::create(path)?, records)
}

/// `youtube_channel_analysis_<YYYYMMDD_HHMMSS>.csv`
pub fn default_csv_name(now: DateTime<Utc>) -> String {
    format!("youtube_channel_analysis_{}.csv", now.format("%Y%m%d_%H%M%S"))
}

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total_videos: usize,
    pub total_views: u64,
    /// Mean, truncated.
    pub average_views: u64,
    pub most_viewed: u64,
}

impl Summary {
    pub fn from_records(records: &[VideoRecord]) -> Self {
        if records.is_empty() {
            return Self::default();
        }

        let total_views: u64 = records.iter().map(|r| r.view_count).sum();
        Self {
            total_videos: records.len(),
            total_views,
            average_views: total_views / records.len() as u64,
            most_viewed: records.iter().map(|r| r.view_count).max().unwrap_or(0),
        }
    }
}

/// Uploads per publish month (`YYYY-MM`), oldest month first.
pub fn monthly_uploads(records: &[VideoRecord]) -> BTreeMap<String, usize> {
    let mut months = BTreeMap::new();
    for record in records {
        *months
            .entry(record.published_at.format("%Y-%m").to_string())
            .or_insert(0) += 1;
    }
    months
}
