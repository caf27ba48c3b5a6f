//! Paged media carousel.
//!
//! Each interaction concern is a small MVI feature (state, intent, pure
//! reducer). Reducers never touch timers directly; they emit [`Effect`]s
//! which the [`Carousel`] controller applies against its [`TimerRegistry`].
//!
//! - `paging` - Visible window, prev/next, transition lock
//! - `autoplay` - Repeating advance with ping-pong and pause rules
//! - `gesture` - Horizontal swipe detection
//! - `zoom` / `overlay` - Fullscreen view with zoom and pan
//! - `click` - Item click routing
//! - `media` - Loading gate

pub mod autoplay;
pub mod click;
mod controller;
mod effect;
pub mod gesture;
pub mod media;
pub mod navigator;
pub mod overlay;
pub mod paging;
pub mod timers;
pub mod view;
pub mod viewport;
pub mod zoom;

pub use click::{ClickDecision, ClickOutcome, ClickPolicy};
pub use controller::{Carousel, CarouselBuilder, CarouselEvent};
pub use effect::Effect;
pub use navigator::{Navigator, NoopNavigator, RecordingNavigator};
pub use timers::{TimerKind, TimerRegistry};
pub use view::{CarouselView, OverlayView, TileView};
pub use viewport::{LayoutRegime, PageSize, PageSizeResolver};
