//! Channel URL to channel id resolution.
//!
//! `/channel/<id>` URLs carry the id directly. Handle (`/@name`) and legacy
//! custom (`/c/name`) URLs are looked up with a single channel search; the
//! first hit wins even when several channels match.

use crate::error::{Error, Result};
use crate::types::ChannelId;
use crate::youtube::YouTubeApi;

const CHANNEL_MARKER: &str = "/channel/";
const HANDLE_MARKERS: [&str; 2] = ["/@", "/c/"];

/// How a user-supplied channel URL will be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelReference {
    /// The id is embedded in the URL.
    Direct(String),
    /// A handle or custom name that needs a search.
    Handle(String),
    Unrecognized,
}

/// Classify a channel URL without touching the network.
pub fn parse_reference(reference: &str) -> ChannelReference {
    if reference.contains(CHANNEL_MARKER) {
        let id = reference.rsplit(CHANNEL_MARKER).next().unwrap_or_default();
        return ChannelReference::Direct(id.to_string());
    }

    if HANDLE_MARKERS.iter().any(|marker| reference.contains(marker)) {
        let query = reference.rsplit('/').next().unwrap_or_default();
        return ChannelReference::Handle(query.to_string());
    }

    ChannelReference::Unrecognized
}

/// Resolve a channel URL to its channel id.
pub async fn resolve<A>(api: &A, reference: &str) -> Result<ChannelId>
where
    A: YouTubeApi + ?Sized,
{
    match parse_reference(reference) {
        ChannelReference::Direct(id) => Ok(ChannelId::new(id)),
        ChannelReference::Handle(query) => {
            tracing::debug!("Searching for channel '{}'", query);
            let hits = api.search_channels(&query, 1).await?;
            hits.into_iter()
                .next()
                .map(ChannelId::new)
                .ok_or_else(|| Error::UnresolvedReference(reference.to_string()))
        }
        ChannelReference::Unrecognized => Err(Error::UnresolvedReference(reference.to_string())),
    }
}
