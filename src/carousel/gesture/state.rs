//! State for the swipe gesture handler.

use crate::mvi::UiState;

/// Touch tracking phase.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TouchPhase {
    #[default]
    Idle,
    /// Finger down. `end_x` is the last reported position, if it moved.
    Active { start_x: f64, end_x: Option<f64> },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GestureState {
    pub phase: TouchPhase,
    /// Set by the first move of a touch and kept briefly after it ends, so
    /// the click the platform synthesizes for the same touch is swallowed.
    pub is_swiping: bool,
}

impl UiState for GestureState {}

impl GestureState {
    pub fn touch_start_x(&self) -> Option<f64> {
        match self.phase {
            TouchPhase::Active { start_x, .. } => Some(start_x),
            TouchPhase::Idle => None,
        }
    }

    pub fn touch_end_x(&self) -> Option<f64> {
        match self.phase {
            TouchPhase::Active { end_x, .. } => end_x,
            TouchPhase::Idle => None,
        }
    }

    pub fn is_touching(&self) -> bool {
        matches!(self.phase, TouchPhase::Active { .. })
    }
}
