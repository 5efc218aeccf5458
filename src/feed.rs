use crate::{
    config::Config,
    page::Page,
    tile::build_tile,
    youtube::{FeedError, PlaylistItemResponse, RawResponse, YouTube},
};
use reqwest::StatusCode;

/// Fetches one page of the playlist and renders it into `page`.
/// Returns the number of tiles appended.
pub async fn load_videos(youtube: &YouTube<'_>, page: &mut Page) -> Result<usize, FeedError> {
    let response = match youtube.fetch_playlist_items().await {
        Ok(response) => response,
        Err(e) => {
            log::error!("Error loading videos. Here's what we know: {}", e);
            return Err(e);
        }
    };

    render_response(response, youtube.config(), page)
}

/// Applies a completed response to the page. The page is only touched once
/// the status is 200 and the whole body has parsed.
pub fn render_response(
    response: RawResponse,
    config: &Config,
    page: &mut Page,
) -> Result<usize, FeedError> {
    if response.status != StatusCode::OK {
        log::warn!(
            "Playlist request returned {}; leaving the loading indicator up",
            response.status
        );
        return Err(FeedError::Status {
            status: response.status,
            body: response.body,
        });
    }

    let playlist: PlaylistItemResponse = serde_json::from_str(&response.body).map_err(|e| {
        log::error!("Could not parse playlist response: {}", e);
        FeedError::Malformed(e)
    })?;

    page.hide_loading();

    let mut rendered = 0;
    for item in &playlist.items {
        match build_tile(item, config) {
            Ok(tile) => {
                page.append(tile);
                rendered += 1;
            }
            Err(e) => log::warn!("Skipping video: {}", e),
        }
    }

    if let Some(newest) = playlist
        .items
        .iter()
        .filter_map(|i| i.snippet.published_at)
        .max()
    {
        log::debug!("Newest video was published {}", newest.format("%Y-%m-%d"));
    }
    log::info!(
        "Rendered {} of {} videos into '{}'",
        rendered,
        playlist.items.len(),
        config.parent_id
    );

    Ok(rendered)
}
