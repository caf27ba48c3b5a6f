//! Intents for the swipe gesture handler.

use crate::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum GestureIntent {
    TouchStart { x: f64 },
    TouchMove { x: f64 },
    /// Finger lifted. `animating` is the paging flag at that moment.
    TouchEnd { animating: bool },
    /// Platform aborted the touch.
    TouchCancel,
    /// Release timer fired.
    ReleaseSwipe,
}

impl Intent for GestureIntent {}
