pub mod client;
mod models;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{PlaylistPage, VideoRecord};

pub use client::DataApiClient;

pub const YOUTUBE_API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// The three YouTube Data API calls the pipeline needs.
#[async_trait]
pub trait YouTubeApi: Send + Sync {
    /// Channel ids matching `query`, in the provider's ranking order.
    async fn search_channels(&self, query: &str, max_results: u32) -> Result<Vec<String>>;

    /// One page of a playlist. `page_token` is passed through untouched.
    async fn playlist_items(
        &self,
        playlist_id: &str,
        page_size: u32,
        page_token: Option<&str>,
    ) -> Result<PlaylistPage>;

    /// Title, view count and publish time for every id in a single request.
    async fn videos(&self, ids: &[String]) -> Result<Vec<VideoRecord>>;
}
