//! State for the autoplay driver.

use crate::mvi::UiState;

/// Sweep direction of ping-pong autoplay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AutoplayState {
    pub enabled: bool,
    pub direction: Direction,
    /// Pointer is over the carousel (desktop and tablet layouts only).
    pub hovered: bool,
    /// A touch is in progress.
    pub touching: bool,
    /// An interaction ended recently; waiting for the cooldown timer.
    pub cooling_down: bool,
}

impl UiState for AutoplayState {}

impl AutoplayState {
    pub fn is_paused(&self) -> bool {
        self.hovered || self.touching || self.cooling_down
    }

    pub fn is_running(&self) -> bool {
        self.enabled && !self.is_paused()
    }

    /// Direction and target of the next automatic step, if any.
    ///
    /// Looping always moves forward and wraps to the start. Otherwise the
    /// direction flips at either boundary before stepping, so the window
    /// sweeps back and forth.
    pub fn next_step(
        &self,
        index: usize,
        max_index: usize,
        loop_enabled: bool,
    ) -> Option<(Direction, usize)> {
        if max_index == 0 {
            return None;
        }

        if loop_enabled {
            let target = if index >= max_index { 0 } else { index + 1 };
            return Some((Direction::Forward, target));
        }

        let direction = if index >= max_index {
            Direction::Backward
        } else if index == 0 {
            Direction::Forward
        } else {
            self.direction
        };
        let target = match direction {
            Direction::Forward => index + 1,
            Direction::Backward => index.min(max_index) - 1,
        };
        Some((direction, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paused_by_any_interaction() {
        let mut state = AutoplayState {
            enabled: true,
            ..Default::default()
        };
        assert!(state.is_running());
        state.cooling_down = true;
        assert!(state.is_paused());
        assert!(!state.is_running());
    }

    #[test]
    fn looping_wraps_forward() {
        let state = AutoplayState::default();
        assert_eq!(state.next_step(2, 4, true), Some((Direction::Forward, 3)));
        assert_eq!(state.next_step(4, 4, true), Some((Direction::Forward, 0)));
    }

    #[test]
    fn ping_pong_reverses_at_boundaries() {
        let state = AutoplayState::default();
        assert_eq!(state.next_step(4, 4, false), Some((Direction::Backward, 3)));

        let backward = AutoplayState {
            direction: Direction::Backward,
            ..Default::default()
        };
        assert_eq!(backward.next_step(2, 4, false), Some((Direction::Backward, 1)));
        assert_eq!(backward.next_step(0, 4, false), Some((Direction::Forward, 1)));
    }

    #[test]
    fn nothing_to_do_without_pages() {
        assert_eq!(AutoplayState::default().next_step(0, 0, true), None);
        assert_eq!(AutoplayState::default().next_step(0, 0, false), None);
    }
}
