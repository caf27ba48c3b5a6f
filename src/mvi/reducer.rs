//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Result of a reduction: the next state plus the effects the caller must
/// carry out (scheduling timers, forwarding intents to other features).
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<S, E> {
    pub state: S,
    pub effects: Vec<E>,
}

impl<S, E> Transition<S, E> {
    /// A transition with no side effects.
    pub fn to(state: S) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    pub fn with(mut self, effect: E) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn into_parts(self) -> (S, Vec<E>) {
        (self.state, self.effects)
    }
}

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen. It holds
/// immutable settings (durations, thresholds) and must stay pure:
/// (Settings, State, Intent) -> (State, Effects).
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Side effects requested by a transition.
    type Effect;

    /// Process an intent and return the new state with its effects.
    fn reduce(
        &self,
        state: Self::State,
        intent: Self::Intent,
    ) -> Transition<Self::State, Self::Effect>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_has_no_effects() {
        let t: Transition<u8, &str> = Transition::to(3);
        assert_eq!(t.state, 3);
        assert!(t.effects.is_empty());
    }

    #[test]
    fn with_appends_in_order() {
        let (state, effects) = Transition::to(1u8).with("a").with("b").into_parts();
        assert_eq!(state, 1);
        assert_eq!(effects, vec!["a", "b"]);
    }
}
