use crate::{
    config::Config,
    markup::Element,
    youtube::{playlist_item::Thumbnail, PlaylistItem, ThumbnailQuality},
};
use thiserror::Error;

pub type Tile = Element;

#[derive(Debug, Error, PartialEq)]
pub enum TileError {
    #[error("video {video_id} has no '{quality}' thumbnail or any lower tier")]
    MissingThumbnail {
        video_id: String,
        quality: ThumbnailQuality,
    },
}

/// Picks the configured tier, falling back to the next lower one that exists.
pub fn thumbnail<'a>(
    item: &'a PlaylistItem,
    quality: ThumbnailQuality,
) -> Result<&'a Thumbnail, TileError> {
    quality
        .and_lower()
        .find_map(|q| item.snippet.thumbnails.get(q.key()))
        .ok_or_else(|| TileError::MissingThumbnail {
            video_id: item.video_id().to_owned(),
            quality,
        })
}

/// Builds the tile for one video:
/// `div.tile > a.link > (span.header, img.thumbnail, span.description)`.
pub fn build_tile(item: &PlaylistItem, config: &Config) -> Result<Tile, TileError> {
    let classes = &config.classes;
    let snippet = &item.snippet;
    let thumbnail = thumbnail(item, config.thumbnail_quality)?;

    let mut img = Element::new("img")
        .class(&classes.thumbnail)
        .attr("src", &thumbnail.url);
    if let Some(width) = thumbnail.width {
        img = img.attr("width", width.to_string());
    }
    if let Some(height) = thumbnail.height {
        img = img.attr("height", height.to_string());
    }

    let link = Element::new("a")
        .attr("href", item.watch_url())
        .class(&classes.link)
        .child(
            Element::new("span")
                .class(&classes.header)
                .text(&snippet.title),
        )
        .child(img)
        .child(
            Element::new("span")
                .class(&classes.description)
                .text(&snippet.description),
        );

    Ok(Element::new("div").class(&classes.tile).child(link))
}
