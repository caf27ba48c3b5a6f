//! Intents for the zoom/pan view.

use crate::mvi::Intent;

use super::state::{ImageBounds, Point};

#[derive(Debug, Clone, PartialEq)]
pub enum ZoomIntent {
    /// Click on the image.
    Click { at: Point, bounds: ImageBounds },
    /// Wheel notch; negative `delta_y` scrolls up and zooms in.
    Wheel { delta_y: f64 },
    ZoomIn,
    ZoomOut,
    Reset,
    DragStart { at: Point },
    DragMove { at: Point },
    DragEnd,
    /// Pointer left the overlay; ends any drag.
    PointerLeave,
}

impl Intent for ZoomIntent {}
