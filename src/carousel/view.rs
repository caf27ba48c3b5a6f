//! Render model handed to hosts.

use crate::catalog::ItemId;

use super::zoom::ZoomTransform;

/// Opacity of tiles outside the visible window.
pub const INACTIVE_OPACITY: f64 = 0.3;
/// Scale of tiles outside the visible window.
pub const INACTIVE_SCALE: f64 = 0.95;

#[derive(Debug, Clone, PartialEq)]
pub struct TileView {
    pub index: usize,
    pub id: ItemId,
    pub title: Option<String>,
    pub src: String,
    pub alt: String,
    pub active: bool,
    pub first_visible: bool,
    pub last_visible: bool,
    pub width_percent: f64,
    pub opacity: f64,
    pub scale: f64,
    pub has_hover_content: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayView {
    pub index: usize,
    pub id: ItemId,
    /// Full-resolution source when available.
    pub src: String,
    pub alt: String,
    pub zoom_level: f64,
    pub transform: ZoomTransform,
}

/// Everything a host needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CarouselView {
    pub tiles: Vec<TileView>,
    pub current_index: usize,
    pub max_index: usize,
    pub items_per_page: usize,
    /// Track translation in percent.
    pub offset_percent: f64,
    pub transition_ms: u64,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub is_animating: bool,
    pub is_swiping: bool,
    pub autoplay_running: bool,
    pub is_loading: bool,
    pub overlay: Option<OverlayView>,
}

impl CarouselView {
    pub fn active_tiles(&self) -> impl Iterator<Item = &TileView> {
        self.tiles.iter().filter(|t| t.active)
    }
}
