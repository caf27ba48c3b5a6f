//! Paging navigator feature module.
//!
//! Tracks which window of items is visible and guards navigation with a
//! transition window.
//!
//! - `state.rs` - Window position, page size, animation flag
//! - `intent.rs` - Prev/Next, autoplay steps, resize, item count changes
//! - `reducer.rs` - State transitions (pure, timers requested as effects)

mod intent;
mod reducer;
mod state;

pub use intent::PagingIntent;
pub use reducer::PagingReducer;
pub use state::PagingState;
