use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Provider-assigned channel identifier (e.g. `UCxxxxxxxx`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChannelId(String);

impl ChannelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Id of the channel's uploads playlist: the two-character channel
    /// prefix is swapped for `UU`.
    pub fn uploads_listing_id(&self) -> String {
        format!("UU{}", self.0.get(2..).unwrap_or_default())
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One uploaded video with its statistics at collection time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub id: String,
    pub title: String,
    pub view_count: u64,
    pub published_at: DateTime<Utc>,
}

/// One page of a playlist listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistPage {
    pub video_ids: Vec<String>,
    pub next_page_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uploads_listing_id() {
        let id = ChannelId::new("UCabcdEFGH");
        assert_eq!(id.uploads_listing_id(), "UUabcdEFGH");
    }

    #[test]
    fn test_uploads_listing_id_short_input() {
        assert_eq!(ChannelId::new("U").uploads_listing_id(), "UU");
        assert_eq!(ChannelId::new("UC").uploads_listing_id(), "UU");
    }

    #[test]
    fn test_display_is_verbatim() {
        let id = ChannelId::new("UC_x5XG1OV2P6uZZ5FSM9Ttw");
        assert_eq!(id.to_string(), "UC_x5XG1OV2P6uZZ5FSM9Ttw");
        assert_eq!(id.as_str(), "UC_x5XG1OV2P6uZZ5FSM9Ttw");
    }
}
