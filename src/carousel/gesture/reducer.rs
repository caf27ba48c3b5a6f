//! Reducer for the swipe gesture handler.

use std::time::Duration;

use crate::carousel::effect::Effect;
use crate::carousel::paging::PagingIntent;
use crate::carousel::timers::TimerKind;
use crate::mvi::{Reducer, Transition};

use super::intent::GestureIntent;
use super::state::{GestureState, TouchPhase};

/// Swipe state machine: `Idle → Active → Idle`, committing a page move
/// when the finger travelled further than `min_distance`.
#[derive(Debug, Clone)]
pub struct GestureReducer {
    min_distance: f64,
    release_delay: Duration,
}

impl GestureReducer {
    pub fn new(min_distance: f64, release_delay: Duration) -> Self {
        Self {
            min_distance,
            release_delay,
        }
    }
}

impl Reducer for GestureReducer {
    type State = GestureState;
    type Intent = GestureIntent;
    type Effect = Effect;

    fn reduce(&self, state: Self::State, intent: Self::Intent) -> Transition<GestureState, Effect> {
        match intent {
            GestureIntent::TouchStart { x } => Transition::to(GestureState {
                phase: TouchPhase::Active {
                    start_x: x,
                    end_x: None,
                },
                is_swiping: false,
            })
            .with(Effect::Cancel(TimerKind::SwipeRelease)),

            GestureIntent::TouchMove { x } => match state.phase {
                TouchPhase::Active { start_x, .. } => Transition::to(GestureState {
                    phase: TouchPhase::Active {
                        start_x,
                        end_x: Some(x),
                    },
                    is_swiping: true,
                }),
                TouchPhase::Idle => Transition::to(state),
            },

            GestureIntent::TouchEnd { animating } => {
                let TouchPhase::Active { start_x, end_x } = state.phase else {
                    return Transition::to(state);
                };

                let mut transition = Transition::to(GestureState {
                    phase: TouchPhase::Idle,
                    is_swiping: state.is_swiping,
                });

                if let Some(end_x) = end_x {
                    let delta = start_x - end_x;
                    if delta.abs() > self.min_distance && !animating {
                        let page = if delta > 0.0 {
                            PagingIntent::Next
                        } else {
                            PagingIntent::Prev
                        };
                        tracing::debug!(delta, ?page, "Swipe committed");
                        transition = transition.with(Effect::Page(page));
                    }
                }

                if state.is_swiping {
                    transition = transition.with(Effect::Schedule {
                        timer: TimerKind::SwipeRelease,
                        after: self.release_delay,
                    });
                }
                transition
            }

            GestureIntent::TouchCancel => Transition::to(GestureState::default())
                .with(Effect::Cancel(TimerKind::SwipeRelease)),

            GestureIntent::ReleaseSwipe => Transition::to(GestureState {
                is_swiping: false,
                ..state
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reducer() -> GestureReducer {
        GestureReducer::new(50.0, Duration::from_millis(100))
    }

    fn swipe(from: f64, to: f64, animating: bool) -> Transition<GestureState, Effect> {
        let r = reducer();
        let state = r.reduce(GestureState::default(), GestureIntent::TouchStart { x: from }).state;
        let state = r.reduce(state, GestureIntent::TouchMove { x: to }).state;
        r.reduce(state, GestureIntent::TouchEnd { animating })
    }

    #[test]
    fn left_swipe_commits_next() {
        let t = swipe(300.0, 200.0, false);
        assert_eq!(t.effects[0], Effect::Page(PagingIntent::Next));
        assert!(t.state.is_swiping);
        assert!(!t.state.is_touching());
    }

    #[test]
    fn right_swipe_commits_prev() {
        let t = swipe(100.0, 180.0, false);
        assert_eq!(t.effects[0], Effect::Page(PagingIntent::Prev));
    }

    #[test]
    fn short_swipe_commits_nothing() {
        let t = swipe(300.0, 260.0, false);
        assert!(!t.effects.iter().any(|e| matches!(e, Effect::Page(_))));
        assert!(t.effects.contains(&Effect::Schedule {
            timer: TimerKind::SwipeRelease,
            after: Duration::from_millis(100),
        }));
    }

    #[test]
    fn exactly_threshold_is_not_enough() {
        let t = swipe(300.0, 250.0, false);
        assert!(!t.effects.iter().any(|e| matches!(e, Effect::Page(_))));
    }

    #[test]
    fn swipe_during_animation_is_dropped() {
        let t = swipe(300.0, 100.0, true);
        assert!(!t.effects.iter().any(|e| matches!(e, Effect::Page(_))));
    }

    #[test]
    fn tap_without_move_is_not_a_swipe() {
        let r = reducer();
        let state = r.reduce(GestureState::default(), GestureIntent::TouchStart { x: 10.0 }).state;
        assert_eq!(state.touch_start_x(), Some(10.0));
        assert_eq!(state.touch_end_x(), None);

        let t = r.reduce(state, GestureIntent::TouchEnd { animating: false });
        assert!(!t.state.is_swiping);
        assert!(t.effects.is_empty());
    }

    #[test]
    fn release_clears_swipe_flag() {
        let state = swipe(300.0, 100.0, false).state;
        let state = reducer().reduce(state, GestureIntent::ReleaseSwipe).state;
        assert_eq!(state, GestureState::default());
    }

    #[test]
    fn cancel_abandons_gesture() {
        let r = reducer();
        let state = r.reduce(GestureState::default(), GestureIntent::TouchStart { x: 300.0 }).state;
        let state = r.reduce(state, GestureIntent::TouchMove { x: 10.0 }).state;
        let t = r.reduce(state, GestureIntent::TouchCancel);
        assert_eq!(t.state, GestureState::default());
        assert!(!t.effects.iter().any(|e| matches!(e, Effect::Page(_))));
    }
}
