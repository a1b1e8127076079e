//! Rank a YouTube channel's uploads by view count.
//!
//! [`resolver::resolve`] turns a channel URL into a [`ChannelId`],
//! [`collector::collect_all`] pages through the channel's uploads with one
//! batched statistics lookup per page, and [`report`] holds the formatting
//! and ranking helpers used by the `export` and `dashboard` commands.

pub mod collector;
pub mod commands;
pub mod config;
pub mod error;
pub mod report;
pub mod resolver;
pub mod types;
pub mod youtube;

pub use error::{Error, Result};
pub use types::{ChannelId, PlaylistPage, VideoRecord};
