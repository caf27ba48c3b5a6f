use std::time::Duration;

use super::paging::PagingIntent;
use super::timers::TimerKind;

/// Side effects requested by carousel reducers.
///
/// Reducers stay pure; the [`Carousel`](super::Carousel) applies these
/// after each dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Arm a one-shot timer.
    Schedule { timer: TimerKind, after: Duration },
    /// Arm a repeating timer.
    Repeat { timer: TimerKind, every: Duration },
    /// Disarm a timer if it is live.
    Cancel(TimerKind),
    /// Forward an intent to the paging reducer (swipe commit, autoplay step).
    Page(PagingIntent),
}
