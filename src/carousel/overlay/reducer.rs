use crate::carousel::effect::Effect;
use crate::carousel::zoom::{ZoomReducer, ZoomState};
use crate::mvi::{Reducer, Transition};

use super::intent::OverlayIntent;
use super::state::OverlayState;

#[derive(Debug, Clone)]
pub struct OverlayReducer {
    zoom: ZoomReducer,
}

impl OverlayReducer {
    pub fn new(zoom: ZoomReducer) -> Self {
        Self { zoom }
    }
}

impl Reducer for OverlayReducer {
    type State = OverlayState;
    type Intent = OverlayIntent;
    type Effect = Effect;

    fn reduce(&self, state: Self::State, intent: Self::Intent) -> Transition<OverlayState, Effect> {
        match intent {
            OverlayIntent::Open { index } => Transition::to(OverlayState::Open {
                index,
                zoom: ZoomState::default(),
            }),

            OverlayIntent::Close => Transition::to(OverlayState::Closed),

            OverlayIntent::Zoom(zoom_intent) => match state {
                OverlayState::Open { index, zoom } => {
                    let (zoom, effects) = self.zoom.reduce(zoom, zoom_intent).into_parts();
                    Transition {
                        state: OverlayState::Open { index, zoom },
                        effects,
                    }
                }
                OverlayState::Closed => Transition::to(OverlayState::Closed),
            },
        }
    }
}
