//! Fullscreen overlay feature module.
//!
//! Owns the zoom state for as long as the overlay is open.

mod intent;
mod reducer;
mod state;

pub use intent::OverlayIntent;
pub use reducer::OverlayReducer;
pub use state::OverlayState;
