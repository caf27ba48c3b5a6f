//! Intents for the paging navigator.

use crate::carousel::viewport::PageSize;
use crate::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum PagingIntent {
    /// Previous-arrow press or right swipe.
    Prev,
    /// Next-arrow press or left swipe.
    Next,
    /// Autoplay step to an explicit index. Clamped to the valid range.
    GoTo { index: usize },
    /// Transition window elapsed.
    AnimationFinished,
    /// Viewport resolved to a (possibly new) page size.
    Resize(PageSize),
    /// The item list changed length.
    SetItemCount(usize),
}

impl Intent for PagingIntent {}
