//! Instance-owned timer bookkeeping.
//!
//! The carousel never sleeps. Reducers request timers through effects, the
//! registry records their deadlines, and the host calls
//! [`Carousel::advance`](super::Carousel::advance) with the current time to
//! fire whatever is due. Each [`TimerKind`] has at most one live timer;
//! scheduling a kind again replaces the previous deadline.

use std::time::{Duration, Instant};

/// Purpose of a timer. Doubles as its key in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Clears the paging animation flag.
    AnimationEnd,
    /// Repeating autoplay step.
    AutoplayTick,
    /// Lifts the autoplay pause after an interaction ended.
    InteractionCooldown,
    /// Clears the swipe flag after a touch ended.
    SwipeRelease,
    /// Applies the last viewport width of a resize burst.
    ResizeSettle,
    /// Dismisses the media loader without a ready signal.
    LoadingFallback,
    /// Starts full-resolution preloading.
    Preload,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Timer {
    id: TimerId,
    kind: TimerKind,
    deadline: Instant,
    every: Option<Duration>,
}

#[derive(Debug, Default)]
pub struct TimerRegistry {
    timers: Vec<Timer>,
    next_id: u64,
}

impl TimerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// One-shot timer firing at `deadline`.
    pub fn schedule(&mut self, kind: TimerKind, deadline: Instant) -> TimerId {
        self.insert(kind, deadline, None)
    }

    /// Repeating timer firing every `every`, first at `start + every`.
    pub fn repeat(&mut self, kind: TimerKind, start: Instant, every: Duration) -> TimerId {
        let every = every.max(Duration::from_millis(1));
        self.insert(kind, start + every, Some(every))
    }

    fn insert(&mut self, kind: TimerKind, deadline: Instant, every: Option<Duration>) -> TimerId {
        self.cancel(kind);
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer {
            id,
            kind,
            deadline,
            every,
        });
        tracing::trace!(?kind, ?id, "Timer scheduled");
        id
    }

    /// Returns true if a timer of that kind was live.
    pub fn cancel(&mut self, kind: TimerKind) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.kind != kind);
        before != self.timers.len()
    }

    pub fn is_scheduled(&self, kind: TimerKind) -> bool {
        self.timers.iter().any(|t| t.kind == kind)
    }

    pub fn deadline(&self, kind: TimerKind) -> Option<Instant> {
        self.timers.iter().find(|t| t.kind == kind).map(|t| t.deadline)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.iter().map(|t| t.deadline).min()
    }

    /// Removes and returns the earliest timer due at `now`, with the
    /// deadline it was due at.
    ///
    /// Repeating timers are re-armed instead of removed. A repeating timer
    /// that fell several periods behind fires once and is re-armed one
    /// period after `now`, so a stalled host never sees a burst of ticks.
    pub fn pop_due(&mut self, now: Instant) -> Option<(TimerKind, Instant)> {
        let (pos, _) = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.deadline <= now)
            .min_by_key(|(_, t)| (t.deadline, t.id))?;

        let kind = self.timers[pos].kind;
        let due = self.timers[pos].deadline;
        match self.timers[pos].every {
            Some(every) => {
                let timer = &mut self.timers[pos];
                let next = timer.deadline + every;
                timer.deadline = if next <= now { now + every } else { next };
            }
            None => {
                self.timers.remove(pos);
            }
        }
        Some((kind, due))
    }

    /// Drops every live timer, returning how many there were.
    pub fn clear(&mut self) -> usize {
        let count = self.timers.len();
        self.timers.clear();
        count
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}
