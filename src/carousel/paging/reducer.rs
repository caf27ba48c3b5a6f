//! Reducer for the paging navigator.

use std::time::Duration;

use crate::carousel::effect::Effect;
use crate::carousel::timers::TimerKind;
use crate::carousel::viewport::reclamp_index;
use crate::mvi::{Reducer, Transition};

use super::intent::PagingIntent;
use super::state::PagingState;

/// Paging state transitions.
///
/// Every index change opens a transition window of `transition` during
/// which further navigation is ignored. A zero duration disables the window.
#[derive(Debug, Clone)]
pub struct PagingReducer {
    loop_enabled: bool,
    transition: Duration,
}

impl PagingReducer {
    pub fn new(loop_enabled: bool, transition: Duration) -> Self {
        Self {
            loop_enabled,
            transition,
        }
    }

    fn move_to(&self, mut state: PagingState, index: usize) -> Transition<PagingState, Effect> {
        let index = index.min(state.max_index());
        if index == state.current_index {
            return Transition::to(state);
        }

        state.current_index = index;
        if self.transition.is_zero() {
            return Transition::to(state);
        }

        state.is_animating = true;
        Transition::to(state).with(Effect::Schedule {
            timer: TimerKind::AnimationEnd,
            after: self.transition,
        })
    }
}

impl Reducer for PagingReducer {
    type State = PagingState;
    type Intent = PagingIntent;
    type Effect = Effect;

    fn reduce(&self, state: Self::State, intent: Self::Intent) -> Transition<PagingState, Effect> {
        match intent {
            PagingIntent::Prev => {
                if !state.can_go_prev(self.loop_enabled) {
                    return Transition::to(state);
                }
                let target = if state.current_index == 0 {
                    state.max_index()
                } else {
                    state.current_index - 1
                };
                self.move_to(state, target)
            }

            PagingIntent::Next => {
                if !state.can_go_next(self.loop_enabled) {
                    return Transition::to(state);
                }
                let target = if state.current_index >= state.max_index() {
                    0
                } else {
                    state.current_index + 1
                };
                self.move_to(state, target)
            }

            PagingIntent::GoTo { index } => {
                if state.is_animating {
                    return Transition::to(state);
                }
                self.move_to(state, index)
            }

            PagingIntent::AnimationFinished => Transition::to(PagingState {
                is_animating: false,
                ..state
            }),

            PagingIntent::Resize(page) => {
                let items_per_page = page.items_per_page.max(1);
                let current_index = if items_per_page != state.items_per_page {
                    reclamp_index(state.current_index, state.item_count, items_per_page)
                } else {
                    state.current_index
                };
                Transition::to(PagingState {
                    current_index,
                    items_per_page,
                    regime: page.regime,
                    ..state
                })
            }

            PagingIntent::SetItemCount(item_count) => {
                let current_index =
                    reclamp_index(state.current_index, item_count, state.items_per_page);
                Transition::to(PagingState {
                    current_index,
                    item_count,
                    ..state
                })
            }
        }
    }
}
