use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use super::models::{ErrorResponse, PlaylistItemListResponse, SearchListResponse, VideoListResponse};
use super::{YouTubeApi, YOUTUBE_API_BASE};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::{PlaylistPage, VideoRecord};

/// YouTube Data API v3 client authenticated with a static API key
pub struct DataApiClient {
    client: Client,
    api_key: String,
    base_url: String,
    max_retries: u32,
}

impl DataApiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: YOUTUBE_API_BASE.to_string(),
            max_retries: config.max_retries,
        })
    }

    /// Point the client at another host (used against local test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// GET `resource` with `params`, retrying rate-limit and server errors
    async fn get<T: DeserializeOwned>(&self, resource: &str, params: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}/{}", self.base_url, resource);
        let mut attempt = 0;

        loop {
            let response = self
                .client
                .get(&url)
                .query(params)
                .query(&[("key", self.api_key.as_str())])
                .send()
                .await
                .map_err(|e| Error::Upstream(format!("{}: {}", resource, e.without_url())))?;

            let status = response.status();
            if status.is_success() {
                return response.json::<T>().await.map_err(|e| {
                    Error::Upstream(format!(
                        "{}: malformed response: {}",
                        resource,
                        e.without_url()
                    ))
                });
            }

            let text = response.text().await.unwrap_or_default();
            let body: ErrorResponse = serde_json::from_str(&text).unwrap_or_default();

            if attempt < self.max_retries && is_transient(status, body.reason()) {
                attempt += 1;
                tracing::warn!(
                    "{} returned {}, retrying ({}/{})",
                    resource,
                    status,
                    attempt,
                    self.max_retries
                );
                tokio::time::sleep(Duration::from_secs(attempt as u64)).await;
                continue;
            }

            let message = if body.error.message.is_empty() {
                text
            } else {
                body.error.message
            };
            return Err(Error::Upstream(format!(
                "{} failed ({}): {}",
                resource, status, message
            )));
        }
    }
}

/// Whether a failed response is worth repeating. Quota exhaustion is final
/// until the daily reset, so it is never retried.
pub fn is_transient(status: StatusCode, reason: Option<&str>) -> bool {
    if reason == Some("quotaExceeded") {
        return false;
    }
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

#[async_trait]
impl YouTubeApi for DataApiClient {
    async fn search_channels(&self, query: &str, max_results: u32) -> Result<Vec<String>> {
        let max_results = max_results.to_string();
        let response: SearchListResponse = self
            .get(
                "search",
                &[
                    ("part", "snippet"),
                    ("type", "channel"),
                    ("q", query),
                    ("maxResults", max_results.as_str()),
                ],
            )
            .await?;

        Ok(response
            .items
            .into_iter()
            .map(|item| item.snippet.channel_id)
            .collect())
    }

    async fn playlist_items(
        &self,
        playlist_id: &str,
        page_size: u32,
        page_token: Option<&str>,
    ) -> Result<PlaylistPage> {
        let page_size = page_size.to_string();
        let mut params = vec![
            ("part", "snippet"),
            ("playlistId", playlist_id),
            ("maxResults", page_size.as_str()),
        ];
        if let Some(token) = page_token {
            params.push(("pageToken", token));
        }

        let response: PlaylistItemListResponse = self.get("playlistItems", &params).await?;
        Ok(response.into())
    }

    async fn videos(&self, ids: &[String]) -> Result<Vec<VideoRecord>> {
        let ids = ids.join(",");
        let response: VideoListResponse = self
            .get("videos", &[("part", "snippet,statistics"), ("id", ids.as_str())])
            .await?;

        response
            .items
            .into_iter()
            .map(|video| video.into_record())
            .collect()
    }
}
