//! Zoom and pan of the fullscreen image.

mod intent;
mod reducer;
mod state;

pub use intent::ZoomIntent;
pub use reducer::ZoomReducer;
pub use state::{DragAnchor, ImageBounds, Point, ZoomState, ZoomTransform, MIN_ZOOM};
