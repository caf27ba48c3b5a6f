//! Base trait for intents (host events and timer deadlines).

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Pointer, touch and keyboard input forwarded by the host
/// - Viewport changes
/// - Timer deadlines (animation end, autoplay tick, cooldowns)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
