//! Loading gate for the carousel media.
//!
//! A loader is shown until the media reports ready, fails, or the fallback
//! timer fires. Failures are logged and otherwise treated as ready; they
//! never block paging.

use crate::mvi::{Intent, Reducer, Transition, UiState};

use super::effect::Effect;
use super::timers::TimerKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaState {
    #[default]
    Loading,
    Ready,
}

impl UiState for MediaState {}

impl MediaState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MediaIntent {
    Loaded,
    Failed { reason: String },
    FallbackElapsed,
}

impl Intent for MediaIntent {}

#[derive(Debug, Clone, Copy, Default)]
pub struct MediaReducer;

impl Reducer for MediaReducer {
    type State = MediaState;
    type Intent = MediaIntent;
    type Effect = Effect;

    fn reduce(&self, state: Self::State, intent: Self::Intent) -> Transition<MediaState, Effect> {
        match intent {
            MediaIntent::Loaded => {
                Transition::to(MediaState::Ready).with(Effect::Cancel(TimerKind::LoadingFallback))
            }
            MediaIntent::Failed { reason } => {
                tracing::warn!(%reason, "Media failed to load, dismissing loader");
                Transition::to(MediaState::Ready).with(Effect::Cancel(TimerKind::LoadingFallback))
            }
            MediaIntent::FallbackElapsed => {
                if state.is_loading() {
                    tracing::debug!("Loading fallback elapsed");
                }
                Transition::to(MediaState::Ready)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_signal_ends_loading() {
        for intent in [
            MediaIntent::Loaded,
            MediaIntent::Failed {
                reason: "autoplay rejected".to_string(),
            },
            MediaIntent::FallbackElapsed,
        ] {
            let t = MediaReducer.reduce(MediaState::Loading, intent);
            assert_eq!(t.state, MediaState::Ready);
        }
    }

    #[test]
    fn ready_signal_cancels_fallback() {
        let t = MediaReducer.reduce(MediaState::Loading, MediaIntent::Loaded);
        assert_eq!(t.effects, vec![Effect::Cancel(TimerKind::LoadingFallback)]);
    }
}
