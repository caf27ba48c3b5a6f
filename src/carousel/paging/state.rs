//! State for the paging navigator.

use std::ops::Range;

use crate::carousel::viewport::{self, LayoutRegime, PageSize};
use crate::mvi::UiState;

/// Window position over the item list.
///
/// `current_index` is the first visible item and always stays within
/// `[0, max_index()]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PagingState {
    pub current_index: usize,
    pub items_per_page: usize,
    pub item_count: usize,
    pub regime: LayoutRegime,
    /// True while a slide transition is running; navigation is ignored.
    pub is_animating: bool,
}

impl Default for PagingState {
    fn default() -> Self {
        Self {
            current_index: 0,
            items_per_page: 1,
            item_count: 0,
            regime: LayoutRegime::default(),
            is_animating: false,
        }
    }
}

impl UiState for PagingState {}

impl PagingState {
    pub fn new(item_count: usize, page: PageSize) -> Self {
        Self {
            current_index: 0,
            items_per_page: page.items_per_page.max(1),
            item_count,
            regime: page.regime,
            is_animating: false,
        }
    }

    pub fn max_index(&self) -> usize {
        viewport::max_index(self.item_count, self.items_per_page)
    }

    /// Whether any navigation is possible at all.
    pub fn is_pageable(&self) -> bool {
        self.max_index() > 0
    }

    /// Wrap-around is only honoured in the mobile layout.
    pub fn wraps(&self, loop_enabled: bool) -> bool {
        loop_enabled && self.regime == LayoutRegime::Mobile
    }

    pub fn can_go_prev(&self, loop_enabled: bool) -> bool {
        !self.is_animating
            && self.is_pageable()
            && (self.current_index > 0 || self.wraps(loop_enabled))
    }

    pub fn can_go_next(&self, loop_enabled: bool) -> bool {
        !self.is_animating
            && self.is_pageable()
            && (self.current_index < self.max_index() || self.wraps(loop_enabled))
    }

    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.current_index + self.items_per_page).min(self.item_count);
        self.current_index.min(end)..end
    }

    pub fn is_active(&self, index: usize) -> bool {
        index >= self.current_index && index < self.current_index + self.items_per_page
    }

    pub fn tile_width_percent(&self) -> f64 {
        100.0 / self.items_per_page.max(1) as f64
    }

    /// Horizontal track translation in percent of the track width.
    pub fn offset_percent(&self) -> f64 {
        self.current_index as f64 * -self.tile_width_percent()
    }
}
