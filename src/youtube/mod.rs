pub mod client;
pub mod error;
pub mod playlist_item;
pub mod thumbnail;

pub use client::{RawResponse, YouTube};
pub use error::FeedError;
pub use playlist_item::{PlaylistItem, PlaylistItemResponse};
pub use thumbnail::ThumbnailQuality;
