//! Swipe gesture feature module.

mod intent;
mod reducer;
mod state;

pub use intent::GestureIntent;
pub use reducer::GestureReducer;
pub use state::{GestureState, TouchPhase};
