//! State for the fullscreen overlay.

use crate::carousel::zoom::ZoomState;
use crate::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    /// Showing the item at `index`; zoom state lives only while open.
    Open { index: usize, zoom: ZoomState },
}

impl UiState for OverlayState {}

impl OverlayState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Open { index, .. } => Some(*index),
            Self::Closed => None,
        }
    }

    pub fn zoom(&self) -> Option<&ZoomState> {
        match self {
            Self::Open { zoom, .. } => Some(zoom),
            Self::Closed => None,
        }
    }
}
