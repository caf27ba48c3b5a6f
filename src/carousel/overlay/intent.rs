use crate::carousel::zoom::ZoomIntent;
use crate::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum OverlayIntent {
    Open { index: usize },
    /// Escape key or close button.
    Close,
    Zoom(ZoomIntent),
}

impl Intent for OverlayIntent {}
