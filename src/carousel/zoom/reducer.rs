//! Reducer for the zoom/pan view.

use crate::carousel::effect::Effect;
use crate::config::ZoomConfig;
use crate::mvi::{Reducer, Transition};

use super::intent::ZoomIntent;
use super::state::{DragAnchor, Point, ZoomState, MIN_ZOOM};

/// Pointer travel (px) below which a drag counts as a click.
const DRAG_SLOP: f64 = 3.0;

/// Levels this close to 1 are treated as exactly 1.
const SNAP_EPSILON: f64 = 1e-6;

#[derive(Debug, Clone)]
pub struct ZoomReducer {
    click_zoom: f64,
    max_zoom: f64,
    wheel_step: f64,
}

impl ZoomReducer {
    pub fn new(click_zoom: f64, max_zoom: f64, wheel_step: f64) -> Self {
        let max_zoom = max_zoom.max(MIN_ZOOM);
        Self {
            click_zoom: click_zoom.clamp(MIN_ZOOM, max_zoom),
            max_zoom,
            wheel_step: wheel_step.max(1.0),
        }
    }

    pub fn from_config(config: &ZoomConfig) -> Self {
        Self::new(config.click_zoom, config.max_zoom, config.wheel_step)
    }

    /// Clamps `level` and resets pan state when it lands on 1.
    fn set_level(&self, state: ZoomState, level: f64) -> ZoomState {
        let level = level.clamp(MIN_ZOOM, self.max_zoom);
        if level - MIN_ZOOM < SNAP_EPSILON {
            return ZoomState::default();
        }
        ZoomState { level, ..state }
    }
}

impl Reducer for ZoomReducer {
    type State = ZoomState;
    type Intent = ZoomIntent;
    type Effect = Effect;

    fn reduce(&self, state: Self::State, intent: Self::Intent) -> Transition<ZoomState, Effect> {
        let next = match intent {
            ZoomIntent::Click { at, bounds } => {
                if state.swallow_click {
                    ZoomState {
                        swallow_click: false,
                        ..state
                    }
                } else if state.is_zoomed() {
                    ZoomState::default()
                } else {
                    ZoomState {
                        level: self.click_zoom,
                        origin: bounds.percent_from_center(at),
                        drag_offset: Point::ZERO,
                        drag: None,
                        swallow_click: false,
                    }
                }
            }

            ZoomIntent::Wheel { delta_y } => {
                if delta_y < 0.0 {
                    let level = state.level * self.wheel_step;
                    self.set_level(state, level)
                } else if delta_y > 0.0 {
                    let level = state.level / self.wheel_step;
                    self.set_level(state, level)
                } else {
                    state
                }
            }

            ZoomIntent::ZoomIn => {
                let level = state.level * 2.0;
                self.set_level(state, level)
            }

            ZoomIntent::ZoomOut => {
                let level = state.level / 2.0;
                self.set_level(state, level)
            }

            ZoomIntent::Reset => ZoomState::default(),

            ZoomIntent::DragStart { at } => {
                if !state.is_zoomed() {
                    state
                } else {
                    ZoomState {
                        drag: Some(DragAnchor {
                            origin: Point::new(at.x - state.drag_offset.x, at.y - state.drag_offset.y),
                            start: at,
                            moved: false,
                        }),
                        swallow_click: false,
                        ..state
                    }
                }
            }

            ZoomIntent::DragMove { at } => match state.drag {
                Some(anchor) => {
                    let offset = Point::new(at.x - anchor.origin.x, at.y - anchor.origin.y);
                    let travelled = (at.x - anchor.start.x).hypot(at.y - anchor.start.y);
                    ZoomState {
                        drag_offset: offset,
                        drag: Some(DragAnchor {
                            moved: anchor.moved || travelled > DRAG_SLOP,
                            ..anchor
                        }),
                        ..state
                    }
                }
                None => state,
            },

            ZoomIntent::DragEnd => match state.drag {
                Some(anchor) => ZoomState {
                    drag: None,
                    swallow_click: anchor.moved,
                    ..state
                },
                None => state,
            },

            ZoomIntent::PointerLeave => ZoomState {
                drag: None,
                ..state
            },
        };
        Transition::to(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::zoom::state::ImageBounds;

    fn reducer() -> ZoomReducer {
        ZoomReducer::new(3.0, 8.0, 1.2)
    }

    fn bounds() -> ImageBounds {
        ImageBounds {
            left: 0.0,
            top: 0.0,
            width: 400.0,
            height: 200.0,
        }
    }

    fn zoomed() -> ZoomState {
        reducer()
            .reduce(
                ZoomState::default(),
                ZoomIntent::Click {
                    at: Point::new(300.0, 50.0),
                    bounds: bounds(),
                },
            )
            .state
    }

    #[test]
    fn click_zooms_towards_point() {
        let state = zoomed();
        assert_eq!(state.level, 3.0);
        assert_eq!(state.origin, Point::new(25.0, -25.0));
    }

    #[test]
    fn click_while_zoomed_resets() {
        let state = reducer()
            .reduce(
                zoomed(),
                ZoomIntent::Click {
                    at: Point::ZERO,
                    bounds: bounds(),
                },
            )
            .state;
        assert_eq!(state, ZoomState::default());
    }

    #[test]
    fn drag_only_when_zoomed() {
        let state = reducer()
            .reduce(ZoomState::default(), ZoomIntent::DragStart { at: Point::ZERO })
            .state;
        assert!(!state.is_dragging());
    }

    #[test]
    fn drag_offsets_relative_to_start() {
        let r = reducer();
        let state = r.reduce(zoomed(), ZoomIntent::DragStart { at: Point::new(10.0, 10.0) }).state;
        let state = r.reduce(state, ZoomIntent::DragMove { at: Point::new(40.0, 0.0) }).state;
        assert_eq!(state.drag_offset, Point::new(30.0, -10.0));
        assert!(!state.transform().animate);

        let state = r.reduce(state, ZoomIntent::DragEnd).state;
        let state = r.reduce(state, ZoomIntent::DragStart { at: Point::new(0.0, 0.0) }).state;
        let state = r.reduce(state, ZoomIntent::DragMove { at: Point::new(5.0, 5.0) }).state;
        assert_eq!(state.drag_offset, Point::new(35.0, -5.0));
    }

    #[test]
    fn click_after_pan_is_swallowed() {
        let r = reducer();
        let state = r.reduce(zoomed(), ZoomIntent::DragStart { at: Point::ZERO }).state;
        let state = r.reduce(state, ZoomIntent::DragMove { at: Point::new(50.0, 0.0) }).state;
        let state = r.reduce(state, ZoomIntent::DragEnd).state;
        let state = r
            .reduce(
                state,
                ZoomIntent::Click {
                    at: Point::ZERO,
                    bounds: bounds(),
                },
            )
            .state;
        assert_eq!(state.level, 3.0);
        assert!(!state.swallow_click);
    }

    #[test]
    fn slow_pan_is_measured_from_drag_start() {
        let r = reducer();
        let mut state = r.reduce(zoomed(), ZoomIntent::DragStart { at: Point::new(100.0, 100.0) }).state;
        for step in 1..=100 {
            let at = Point::new(100.0 + f64::from(step), 100.0);
            state = r.reduce(state, ZoomIntent::DragMove { at }).state;
        }
        let state = r.reduce(state, ZoomIntent::DragEnd).state;
        assert!(state.swallow_click);

        let state = r
            .reduce(
                state,
                ZoomIntent::Click {
                    at: Point::new(200.0, 100.0),
                    bounds: bounds(),
                },
            )
            .state;
        assert_eq!(state.level, 3.0);
        assert_eq!(state.drag_offset, Point::new(100.0, 0.0));
    }

    #[test]
    fn jitter_within_slop_still_clicks() {
        let r = reducer();
        let state = r.reduce(zoomed(), ZoomIntent::DragStart { at: Point::new(10.0, 10.0) }).state;
        let state = r.reduce(state, ZoomIntent::DragMove { at: Point::new(12.0, 10.0) }).state;
        let state = r.reduce(state, ZoomIntent::DragMove { at: Point::new(10.0, 11.0) }).state;
        let state = r.reduce(state, ZoomIntent::DragEnd).state;
        assert!(!state.swallow_click);
    }

    #[test]
    fn pointer_leave_releases_drag() {
        let r = reducer();
        let state = r.reduce(zoomed(), ZoomIntent::DragStart { at: Point::ZERO }).state;
        let state = r.reduce(state, ZoomIntent::PointerLeave).state;
        assert!(!state.is_dragging());
    }

    #[test]
    fn wheel_clamps_to_limits() {
        let r = reducer();
        let mut state = ZoomState::default();
        for _ in 0..50 {
            state = r.reduce(state, ZoomIntent::Wheel { delta_y: -1.0 }).state;
        }
        assert_eq!(state.level, 8.0);
        for _ in 0..50 {
            state = r.reduce(state, ZoomIntent::Wheel { delta_y: 1.0 }).state;
        }
        assert_eq!(state, ZoomState::default());
    }

    #[test]
    fn zoom_out_to_one_resets_pan() {
        let r = reducer();
        let state = ZoomState {
            level: 2.0,
            origin: Point::new(10.0, 10.0),
            drag_offset: Point::new(5.0, 5.0),
            ..Default::default()
        };
        let state = r.reduce(state, ZoomIntent::ZoomOut).state;
        assert_eq!(state, ZoomState::default());
    }

    #[test]
    fn zoom_in_doubles() {
        let state = reducer().reduce(zoomed(), ZoomIntent::ZoomIn).state;
        assert_eq!(state.level, 6.0);
        let state = reducer().reduce(state, ZoomIntent::ZoomIn).state;
        assert_eq!(state.level, 8.0);
    }
}
