use crate::{
    config::Config,
    markup::{escape, Element},
    tile::Tile,
};

/// The two elements the tiles interact with: the container they are appended
/// to and the loading indicator hidden when they arrive.
#[derive(Debug)]
pub struct Page {
    container: Element,
    loading_id: String,
    loading_visible: bool,
    /// Number of tiles in the container when the indicator was hidden.
    loading_hidden_at: Option<usize>,
}

impl Page {
    pub fn new(config: &Config) -> Self {
        Self {
            container: Element::new("div").attr("id", &config.parent_id),
            loading_id: config.loading_id.clone(),
            loading_visible: true,
            loading_hidden_at: None,
        }
    }

    pub fn hide_loading(&mut self) {
        if !self.loading_visible {
            log::warn!("Loading indicator '{}' is already hidden", self.loading_id);
            return;
        }
        self.loading_visible = false;
        self.loading_hidden_at = Some(self.tile_count());
    }

    /// Adds `tile` as the last child of the container.
    pub fn append(&mut self, tile: Tile) {
        self.container.push(tile);
    }

    pub fn loading_visible(&self) -> bool {
        self.loading_visible
    }

    pub fn loading_hidden_at(&self) -> Option<usize> {
        self.loading_hidden_at
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.container.children()
    }

    pub fn tile_count(&self) -> usize {
        self.tiles().count()
    }

    pub fn to_html(&self) -> String {
        let mut out = String::from("<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"></head>\n<body>\n");
        out.push_str(&format!("<div id=\"{}\"", escape(&self.loading_id)));
        if !self.loading_visible {
            out.push_str(" style=\"display: none\"");
        }
        out.push_str("></div>\n");
        self.container.write_html(&mut out);
        out.push_str("\n</body>\n</html>\n");
        out
    }
}
