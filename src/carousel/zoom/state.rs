//! State for the fullscreen zoom/pan view.

use crate::mvi::UiState;

/// Unzoomed level.
pub const MIN_ZOOM: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// On-screen rectangle of the displayed image.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ImageBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ImageBounds {
    /// Offset of `at` from the image center, in percent of the image size.
    pub fn percent_from_center(&self, at: Point) -> Point {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Point::ZERO;
        }
        Point {
            x: ((at.x - self.left) / self.width - 0.5) * 100.0,
            y: ((at.y - self.top) / self.height - 0.5) * 100.0,
        }
    }
}

/// Where a drag started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAnchor {
    /// Pointer position at drag start minus the offset at drag start.
    pub origin: Point,
    /// Pointer position at drag start.
    pub start: Point,
    /// Total travel from `start` exceeded the click slop.
    pub moved: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ZoomState {
    pub level: f64,
    /// Transform origin as percent offsets from the image center.
    pub origin: Point,
    /// Pan translation in pixels.
    pub drag_offset: Point,
    pub drag: Option<DragAnchor>,
    /// The next click ends a pan and must not toggle the zoom.
    pub swallow_click: bool,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self {
            level: MIN_ZOOM,
            origin: Point::ZERO,
            drag_offset: Point::ZERO,
            drag: None,
            swallow_click: false,
        }
    }
}

impl UiState for ZoomState {}

/// Render transform of the zoomed image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomTransform {
    pub scale: f64,
    /// Translation applied after scaling, so the pan offset is divided by
    /// the scale to move the image by exactly `drag_offset` pixels.
    pub translate: Point,
    /// Transform origin in percent of the image box.
    pub origin_percent: Point,
    /// Smooth transitions, off while dragging.
    pub animate: bool,
}

impl ZoomState {
    pub fn is_zoomed(&self) -> bool {
        self.level > MIN_ZOOM
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn transform(&self) -> ZoomTransform {
        ZoomTransform {
            scale: self.level,
            translate: Point {
                x: self.drag_offset.x / self.level,
                y: self.drag_offset.y / self.level,
            },
            origin_percent: Point {
                x: 50.0 + self.origin.x,
                y: 50.0 + self.origin.y,
            },
            animate: !self.is_dragging(),
        }
    }
}
