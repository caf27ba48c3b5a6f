//! Intents for the autoplay driver.

use crate::carousel::viewport::LayoutRegime;
use crate::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum AutoplayIntent {
    /// Start the repeating timer.
    Enable,
    /// Stop the repeating timer and forget pauses.
    Disable,
    /// Pointer entered the carousel. Ignored in the mobile layout.
    HoverStart { regime: LayoutRegime },
    /// Pointer left the carousel.
    HoverEnd,
    /// A touch began.
    TouchStart,
    /// A touch ended or was cancelled.
    InteractionEnded,
    /// Cooldown timer fired.
    CooldownElapsed,
    /// Repeating timer fired. Carries a snapshot of the paging window.
    Tick {
        index: usize,
        max_index: usize,
        animating: bool,
    },
}

impl Intent for AutoplayIntent {}
