//! Autoplay feature module.
//!
//! Steps the paging window on a repeating timer, pausing while the user
//! interacts with the carousel.

mod intent;
mod reducer;
mod state;

pub use intent::AutoplayIntent;
pub use reducer::AutoplayReducer;
pub use state::{AutoplayState, Direction};
