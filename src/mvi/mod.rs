//! Model-View-Intent (MVI) primitives.
//!
//! Every carousel feature (paging, autoplay, gestures, zoom, overlay) is a
//! small state machine built from these traits.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑          │
//!    │          └──→ Effects (timers, follow-up intents)
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of a feature's state
//! - **Intent**: Host events or timer deadlines
//! - **Reducer**: Pure function from (state, intent) to the next state and
//!   the effects the caller must perform

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::{Reducer, Transition};
pub use state::UiState;
