//! Reducer for the autoplay driver.

use std::time::Duration;

use crate::carousel::effect::Effect;
use crate::carousel::paging::PagingIntent;
use crate::carousel::timers::TimerKind;
use crate::carousel::viewport::LayoutRegime;
use crate::mvi::{Reducer, Transition};

use super::intent::AutoplayIntent;
use super::state::{AutoplayState, Direction};

#[derive(Debug, Clone)]
pub struct AutoplayReducer {
    interval: Duration,
    cooldown: Duration,
    loop_enabled: bool,
}

impl AutoplayReducer {
    pub fn new(interval: Duration, cooldown: Duration, loop_enabled: bool) -> Self {
        Self {
            interval,
            cooldown,
            loop_enabled,
        }
    }

    /// Starts the cooldown unless autoplay is off.
    fn interaction_over(&self, state: AutoplayState) -> Transition<AutoplayState, Effect> {
        if !state.enabled {
            return Transition::to(state);
        }
        Transition::to(AutoplayState {
            cooling_down: true,
            ..state
        })
        .with(Effect::Schedule {
            timer: TimerKind::InteractionCooldown,
            after: self.cooldown,
        })
    }
}

impl Reducer for AutoplayReducer {
    type State = AutoplayState;
    type Intent = AutoplayIntent;
    type Effect = Effect;

    fn reduce(&self, state: Self::State, intent: Self::Intent) -> Transition<AutoplayState, Effect> {
        match intent {
            AutoplayIntent::Enable => {
                if state.enabled {
                    return Transition::to(state);
                }
                Transition::to(AutoplayState {
                    enabled: true,
                    ..state
                })
                .with(Effect::Repeat {
                    timer: TimerKind::AutoplayTick,
                    every: self.interval,
                })
            }

            // Hover and touch tracking survive.
            AutoplayIntent::Disable => Transition::to(AutoplayState {
                enabled: false,
                direction: Direction::default(),
                cooling_down: false,
                ..state
            })
            .with(Effect::Cancel(TimerKind::AutoplayTick))
            .with(Effect::Cancel(TimerKind::InteractionCooldown)),

            AutoplayIntent::HoverStart { regime } => {
                if regime == LayoutRegime::Mobile {
                    return Transition::to(state);
                }
                Transition::to(AutoplayState {
                    hovered: true,
                    cooling_down: false,
                    ..state
                })
                .with(Effect::Cancel(TimerKind::InteractionCooldown))
            }

            AutoplayIntent::HoverEnd => {
                if !state.hovered {
                    return Transition::to(state);
                }
                self.interaction_over(AutoplayState {
                    hovered: false,
                    ..state
                })
            }

            AutoplayIntent::TouchStart => Transition::to(AutoplayState {
                touching: true,
                cooling_down: false,
                ..state
            })
            .with(Effect::Cancel(TimerKind::InteractionCooldown)),

            AutoplayIntent::InteractionEnded => {
                if !state.touching {
                    return Transition::to(state);
                }
                self.interaction_over(AutoplayState {
                    touching: false,
                    ..state
                })
            }

            AutoplayIntent::CooldownElapsed => Transition::to(AutoplayState {
                cooling_down: false,
                ..state
            }),

            AutoplayIntent::Tick {
                index,
                max_index,
                animating,
            } => {
                if !state.is_running() || animating {
                    return Transition::to(state);
                }
                match state.next_step(index, max_index, self.loop_enabled) {
                    Some((direction, target)) => Transition::to(AutoplayState {
                        direction,
                        ..state
                    })
                    .with(Effect::Page(PagingIntent::GoTo { index: target })),
                    None => Transition::to(state),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reducer() -> AutoplayReducer {
        AutoplayReducer::new(Duration::from_secs(5), Duration::from_secs(3), false)
    }

    fn running() -> AutoplayState {
        AutoplayState {
            enabled: true,
            ..Default::default()
        }
    }

    #[test]
    fn enable_arms_repeating_timer_once() {
        let t = reducer().reduce(AutoplayState::default(), AutoplayIntent::Enable);
        assert!(t.state.enabled);
        assert_eq!(
            t.effects,
            vec![Effect::Repeat {
                timer: TimerKind::AutoplayTick,
                every: Duration::from_secs(5),
            }]
        );

        let again = reducer().reduce(t.state, AutoplayIntent::Enable);
        assert!(again.effects.is_empty());
    }

    #[test]
    fn disable_cancels_timers() {
        let t = reducer().reduce(running(), AutoplayIntent::Disable);
        assert!(!t.state.enabled);
        assert!(t.effects.contains(&Effect::Cancel(TimerKind::AutoplayTick)));
        assert!(t.effects.contains(&Effect::Cancel(TimerKind::InteractionCooldown)));
    }

    #[test]
    fn hover_is_ignored_on_mobile() {
        let t = reducer().reduce(
            running(),
            AutoplayIntent::HoverStart {
                regime: LayoutRegime::Mobile,
            },
        );
        assert!(!t.state.hovered);

        let t = reducer().reduce(
            running(),
            AutoplayIntent::HoverStart {
                regime: LayoutRegime::Desktop,
            },
        );
        assert!(t.state.hovered);
    }

    #[test]
    fn hover_is_tracked_while_disabled() {
        let state = reducer()
            .reduce(
                AutoplayState::default(),
                AutoplayIntent::HoverStart {
                    regime: LayoutRegime::Desktop,
                },
            )
            .state;
        assert!(state.hovered);

        let t = reducer().reduce(state, AutoplayIntent::Enable);
        assert!(t.state.enabled);
        assert!(!t.state.is_running());

        let t = reducer().reduce(AutoplayState { enabled: false, ..t.state }, AutoplayIntent::HoverEnd);
        assert!(!t.state.hovered);
        assert!(!t.state.cooling_down);
        assert!(t.effects.is_empty());
    }

    #[test]
    fn disable_keeps_pointer_tracking() {
        let state = AutoplayState {
            direction: Direction::Backward,
            hovered: true,
            touching: true,
            cooling_down: true,
            ..running()
        };
        let state = reducer().reduce(state, AutoplayIntent::Disable).state;
        assert_eq!(
            state,
            AutoplayState {
                hovered: true,
                touching: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn touch_end_starts_cooldown() {
        let state = reducer().reduce(running(), AutoplayIntent::TouchStart).state;
        assert!(state.touching);

        let t = reducer().reduce(state, AutoplayIntent::InteractionEnded);
        assert!(!t.state.touching);
        assert!(t.state.cooling_down);
        assert_eq!(
            t.effects,
            vec![Effect::Schedule {
                timer: TimerKind::InteractionCooldown,
                after: Duration::from_secs(3),
            }]
        );

        let state = reducer().reduce(t.state, AutoplayIntent::CooldownElapsed).state;
        assert!(state.is_running());
    }

    #[test]
    fn tick_skips_while_paused_or_animating() {
        let paused = AutoplayState {
            touching: true,
            ..running()
        };
        let tick = AutoplayIntent::Tick {
            index: 0,
            max_index: 4,
            animating: false,
        };
        assert!(reducer().reduce(paused, tick.clone()).effects.is_empty());

        let busy = AutoplayIntent::Tick {
            index: 0,
            max_index: 4,
            animating: true,
        };
        assert!(reducer().reduce(running(), busy).effects.is_empty());

        let t = reducer().reduce(running(), tick);
        assert_eq!(t.effects, vec![Effect::Page(PagingIntent::GoTo { index: 1 })]);
    }
}
