//! Paginated walk over a channel's uploads playlist.
//!
//! Each playlist page costs one cheap `playlistItems` call plus, when the page
//! has items, exactly one `videos` call for all of its ids. Pages are fetched
//! strictly one after another since every cursor comes from the previous page.

use std::collections::HashSet;

use crate::error::Result;
use crate::types::{ChannelId, VideoRecord};
use crate::youtube::YouTubeApi;

/// Playlist page size, also the provider's cap on ids per `videos` call.
pub const PAGE_SIZE: u32 = 50;

/// Reported after each processed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageProgress {
    /// 1-based page number.
    pub page: usize,
    /// Records collected so far, this page included.
    pub collected: usize,
}

/// Collect every upload of a channel with its statistics.
pub async fn collect_all<A>(api: &A, channel_id: &ChannelId) -> Result<Vec<VideoRecord>>
where
    A: YouTubeApi + ?Sized,
{
    collect_all_with_progress(api, channel_id, |_| {}).await
}

/// Like [`collect_all`], calling `on_page` after each page.
pub async fn collect_all_with_progress<A, F>(
    api: &A,
    channel_id: &ChannelId,
    mut on_page: F,
) -> Result<Vec<VideoRecord>>
where
    A: YouTubeApi + ?Sized,
    F: FnMut(PageProgress),
{
    let playlist_id = channel_id.uploads_listing_id();
    let mut records = Vec::new();
    let mut seen = HashSet::new();
    let mut page_token: Option<String> = None;
    let mut page = 0;

    loop {
        page += 1;
        let listing = api
            .playlist_items(&playlist_id, PAGE_SIZE, page_token.as_deref())
            .await?;

        if !listing.video_ids.is_empty() {
            let videos = api.videos(&listing.video_ids).await?;
            for video in videos {
                if seen.insert(video.id.clone()) {
                    records.push(video);
                } else {
                    tracing::debug!("Skipping duplicate video {}", video.id);
                }
            }
        }

        tracing::debug!(
            "Page {} of {}: {} ids, {} records total",
            page,
            playlist_id,
            listing.video_ids.len(),
            records.len()
        );
        on_page(PageProgress {
            page,
            collected: records.len(),
        });

        page_token = listing.next_page_token.filter(|t| !t.is_empty());
        if page_token.is_none() {
            break;
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::youtube::fake::{record_for, Call, FakeApi};

    fn ids(prefix: &str, n: usize) -> Vec<String> {
        (0..n).map(|i| format!("{}{:03}", prefix, i)).collect()
    }

    fn as_refs(ids: &[String]) -> Vec<&str> {
        ids.iter().map(String::as_str).collect()
    }

    fn is_playlist(call: &Call) -> bool {
        matches!(call, Call::Playlist { .. })
    }

    fn is_videos(call: &Call) -> bool {
        matches!(call, Call::Videos { .. })
    }

    #[tokio::test]
    async fn test_single_page() {
        let api = FakeApi::new().with_page(&["a", "b", "c"], None);
        let records = collect_all(&api, &ChannelId::new("UCchan")).await.unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(api.count(is_playlist), 1);
        assert_eq!(api.count(is_videos), 1);
        // Statistics order is kept as returned, not re-aligned to the listing.
        let got: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(got, vec!["c", "b", "a"]);
        assert_eq!(records[0], record_for("c"));
    }

    #[tokio::test]
    async fn test_uses_uploads_playlist_and_threads_tokens() {
        let api = FakeApi::new()
            .with_page(&["a"], Some("TOKEN_A"))
            .with_page(&["b"], Some("TOKEN_B"))
            .with_page(&["c"], None);
        collect_all(&api, &ChannelId::new("UCxyz")).await.unwrap();

        let listing_calls: Vec<(String, u32, Option<String>)> = api
            .calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Playlist {
                    playlist_id,
                    page_size,
                    page_token,
                } => Some((playlist_id, page_size, page_token)),
                _ => None,
            })
            .collect();
        assert_eq!(
            listing_calls,
            vec![
                ("UUxyz".to_string(), 50, None),
                ("UUxyz".to_string(), 50, Some("TOKEN_A".to_string())),
                ("UUxyz".to_string(), 50, Some("TOKEN_B".to_string())),
            ]
        );
    }

    #[tokio::test]
    async fn test_page_count_matches_upload_count() {
        // 120 uploads -> 50 + 50 + 20 -> three listing and three videos calls
        let all = ids("v", 120);
        let api = FakeApi::new()
            .with_page(&as_refs(&all[0..50]), Some("p2"))
            .with_page(&as_refs(&all[50..100]), Some("p3"))
            .with_page(&as_refs(&all[100..120]), None);

        let records = collect_all(&api, &ChannelId::new("UCbig")).await.unwrap();
        assert_eq!(records.len(), 120);
        assert_eq!(api.count(is_playlist), 3);
        assert_eq!(api.count(is_videos), 3);

        let mut got: Vec<String> = records.into_iter().map(|r| r.id).collect();
        got.sort();
        assert_eq!(got, all);
    }

    #[tokio::test]
    async fn test_each_page_is_one_batched_lookup() {
        let first = ids("a", 50);
        let api = FakeApi::new()
            .with_page(&as_refs(&first), Some("next"))
            .with_page(&["b0"], None);
        collect_all(&api, &ChannelId::new("UCbatch")).await.unwrap();

        let batches: Vec<Vec<String>> = api
            .calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Videos { ids } => Some(ids),
                _ => None,
            })
            .collect();
        assert_eq!(batches, vec![first, vec!["b0".to_string()]]);
    }

    #[tokio::test]
    async fn test_empty_page_skips_lookup() {
        let api = FakeApi::new()
            .with_page(&[], Some("more"))
            .with_page(&["x"], None);
        let records = collect_all(&api, &ChannelId::new("UCgap")).await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(api.count(is_playlist), 2);
        assert_eq!(api.count(is_videos), 1);
    }

    #[tokio::test]
    async fn test_empty_channel() {
        let api = FakeApi::new().with_page(&[], None);
        let records = collect_all(&api, &ChannelId::new("UCnone")).await.unwrap();
        assert!(records.is_empty());
        assert_eq!(api.count(is_videos), 0);
    }

    #[tokio::test]
    async fn test_empty_token_ends_pagination() {
        let api = FakeApi::new()
            .with_page(&["a"], Some(""))
            .with_page(&["never"], None);
        let records = collect_all(&api, &ChannelId::new("UCend")).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(api.count(is_playlist), 1);
    }

    #[tokio::test]
    async fn test_duplicate_ids_are_recorded_once() {
        let api = FakeApi::new()
            .with_page(&["a", "b"], Some("next"))
            .with_page(&["b", "c"], None);
        let records = collect_all(&api, &ChannelId::new("UCdup")).await.unwrap();
        let mut got: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        got.sort();
        assert_eq!(got, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_listing_failure_on_second_page_aborts() {
        let api = FakeApi::new()
            .with_page(&["a"], Some("p2"))
            .with_failing_page("backend error")
            .with_page(&["c"], None);
        let err = collect_all(&api, &ChannelId::new("UCfail")).await.unwrap_err();

        assert!(matches!(err, Error::Upstream(_)));
        assert_eq!(api.count(is_playlist), 2);
    }

    #[tokio::test]
    async fn test_lookup_failure_on_second_page_aborts() {
        let api = FakeApi::new()
            .with_page(&["a"], Some("p2"))
            .with_page(&["b"], Some("p3"))
            .with_page(&["c"], None)
            .with_failing_videos_call(2);
        let err = collect_all(&api, &ChannelId::new("UCfail")).await.unwrap_err();

        assert!(matches!(err, Error::Upstream(_)));
        assert_eq!(api.count(is_playlist), 2);
    }

    #[tokio::test]
    async fn test_progress_reported_per_page() {
        let api = FakeApi::new()
            .with_page(&["a", "b"], Some("p2"))
            .with_page(&["c"], None);
        let mut seen = Vec::new();
        collect_all_with_progress(&api, &ChannelId::new("UCprog"), |p| seen.push(p))
            .await
            .unwrap();

        assert_eq!(
            seen,
            vec![
                PageProgress { page: 1, collected: 2 },
                PageProgress { page: 2, collected: 3 },
            ]
        );
    }
}
