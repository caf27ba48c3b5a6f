//! Carousel orchestrator.
//!
//! Owns the per-feature MVI states, applies the effects their reducers
//! emit and fires timers against a host-supplied clock. Hosts feed
//! [`CarouselEvent`]s, call [`Carousel::advance`] when
//! [`Carousel::next_deadline`] passes, and draw [`Carousel::view`].

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Instant;

use crate::catalog::CarouselItem;
use crate::config::{Config, TimingConfig};
use crate::mvi::Reducer;

use super::autoplay::{AutoplayIntent, AutoplayReducer, AutoplayState};
use super::click::{ClickDecision, ClickOutcome, ClickPolicy};
use super::effect::Effect;
use super::gesture::{GestureIntent, GestureReducer, GestureState};
use super::media::{MediaIntent, MediaReducer, MediaState};
use super::navigator::{Navigator, NoopNavigator};
use super::overlay::{OverlayIntent, OverlayReducer, OverlayState};
use super::paging::{PagingIntent, PagingReducer, PagingState};
use super::timers::{TimerKind, TimerRegistry};
use super::view::{CarouselView, OverlayView, TileView, INACTIVE_OPACITY, INACTIVE_SCALE};
use super::viewport::PageSizeResolver;
use super::zoom::{ImageBounds, Point, ZoomIntent, ZoomReducer};

/// Reduce one feature state in place and apply the resulting effects.
macro_rules! dispatch {
    ($self:expr, $field:ident, $reducer:ident, $intent:expr, $now:expr) => {{
        let intent = $intent;
        let (state, effects) = $self
            .$reducer
            .reduce(std::mem::take(&mut $self.$field), intent)
            .into_parts();
        $self.$field = state;
        $self.apply(effects, $now);
    }};
}

/// Input from the host.
#[derive(Debug, Clone, PartialEq)]
pub enum CarouselEvent {
    /// Viewport width in px. Debounced.
    Resize { width: u32 },
    Prev,
    Next,
    HoverStart,
    HoverEnd,
    TouchStart { x: f64 },
    TouchMove { x: f64 },
    TouchEnd,
    TouchCancel,
    ItemClick { index: usize },
    /// Close the fullscreen view.
    CloseOverlay,
    OverlayClick { at: Point, bounds: ImageBounds },
    Wheel { delta_y: f64 },
    ZoomIn,
    ZoomOut,
    ZoomReset,
    DragStart { at: Point },
    DragMove { at: Point },
    DragEnd,
    PointerLeave,
    MediaLoaded,
    MediaFailed { reason: String },
    SetAutoplay(bool),
}

pub struct CarouselBuilder {
    items: Vec<CarouselItem>,
    config: Config,
    policy: ClickPolicy,
    navigator: Arc<dyn Navigator>,
}

impl CarouselBuilder {
    pub fn config(mut self, config: &Config) -> Self {
        self.config = config.clone();
        self
    }

    pub fn on_item_click<F>(mut self, handler: F) -> Self
    where
        F: Fn(&CarouselItem) -> ClickDecision + Send + Sync + 'static,
    {
        self.policy.on_item_click = Some(Arc::new(handler));
        self
    }

    pub fn full_screen_predicate<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&CarouselItem) -> bool + Send + Sync + 'static,
    {
        self.policy.full_screen_predicate = Some(Arc::new(predicate));
        self
    }

    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = navigator;
        self
    }

    pub fn build(self) -> Carousel {
        let Self {
            items,
            config,
            mut policy,
            navigator,
        } = self;
        let carousel = &config.carousel;
        let timing = config.timing.clone();

        policy.enable_full_screen_view = carousel.enable_full_screen_view;
        policy.disable_navigation = carousel.disable_navigation;

        let items: Vec<CarouselItem> = items
            .into_iter()
            .filter(|item| {
                let keep = item.image.is_some();
                if !keep {
                    tracing::debug!(id = %item.id, "Skipping item without image");
                }
                keep
            })
            .collect();

        Carousel {
            resolver: PageSizeResolver::from_config(carousel),
            paging: PagingState::default(),
            paging_reducer: PagingReducer::new(
                carousel.loop_enabled,
                carousel.transition_duration(),
            ),
            autoplay: AutoplayState::default(),
            autoplay_reducer: AutoplayReducer::new(
                carousel.autoplay_interval(),
                timing.interaction_cooldown(),
                carousel.loop_enabled,
            ),
            gesture: GestureState::default(),
            gesture_reducer: GestureReducer::new(
                config.gesture.min_swipe_distance_px,
                timing.swipe_release(),
            ),
            overlay: OverlayState::default(),
            overlay_reducer: OverlayReducer::new(ZoomReducer::from_config(&config.zoom)),
            media: MediaState::default(),
            media_reducer: MediaReducer,
            loop_enabled: carousel.loop_enabled,
            autoplay_on_mount: carousel.autoplay,
            transition_ms: carousel.transition_duration_ms,
            timing,
            items,
            policy,
            navigator,
            timers: TimerRegistry::new(),
            pending_width: None,
            mounted: false,
            last_click: None,
        }
    }
}

pub struct Carousel {
    items: Vec<CarouselItem>,
    resolver: PageSizeResolver,
    loop_enabled: bool,
    autoplay_on_mount: bool,
    transition_ms: u64,
    timing: TimingConfig,

    paging: PagingState,
    paging_reducer: PagingReducer,
    autoplay: AutoplayState,
    autoplay_reducer: AutoplayReducer,
    gesture: GestureState,
    gesture_reducer: GestureReducer,
    overlay: OverlayState,
    overlay_reducer: OverlayReducer,
    media: MediaState,
    media_reducer: MediaReducer,

    policy: ClickPolicy,
    navigator: Arc<dyn Navigator>,
    timers: TimerRegistry,
    /// Width waiting for the resize debounce to settle.
    pending_width: Option<u32>,
    mounted: bool,
    last_click: Option<ClickOutcome>,
}

impl Carousel {
    /// Start building a carousel over `items`. Items without an image are
    /// dropped at build time.
    pub fn builder(items: Vec<CarouselItem>) -> CarouselBuilder {
        CarouselBuilder {
            items,
            config: Config::default(),
            policy: ClickPolicy::default(),
            navigator: Arc::new(NoopNavigator),
        }
    }

    /// Mount at viewport `width`. Re-mounting tears the previous session down first.
    pub fn setup(&mut self, width: u32, now: Instant) {
        if self.mounted {
            self.teardown();
        }

        let page = self.resolver.resolve(width);
        self.paging = PagingState::new(self.items.len(), page);
        self.media = MediaState::Loading;
        self.mounted = true;

        self.timers
            .schedule(TimerKind::LoadingFallback, now + self.timing.loading_fallback());
        if !self.preload_sources().is_empty() {
            self.timers
                .schedule(TimerKind::Preload, now + self.timing.preload_delay());
        }
        if self.autoplay_on_mount {
            dispatch!(self, autoplay, autoplay_reducer, AutoplayIntent::Enable, now);
        }

        tracing::info!(
            items = self.items.len(),
            items_per_page = page.items_per_page,
            regime = ?page.regime,
            autoplay = self.autoplay.enabled,
            "Carousel mounted"
        );
    }

    /// Cancel every timer and drop transient interaction state.
    pub fn teardown(&mut self) {
        let released = self.timers.clear();
        self.autoplay = AutoplayState::default();
        self.gesture = GestureState::default();
        self.overlay = OverlayState::Closed;
        self.paging.is_animating = false;
        self.pending_width = None;
        self.mounted = false;
        tracing::info!(released, "Carousel unmounted");
    }

    /// Feed one host event. Ignored while unmounted.
    pub fn handle(&mut self, event: CarouselEvent, now: Instant) {
        if !self.mounted {
            tracing::trace!(?event, "Event ignored while unmounted");
            return;
        }

        match event {
            CarouselEvent::Resize { width } => {
                let debounce = self.timing.resize_debounce();
                if debounce.is_zero() {
                    self.apply_width(width, now);
                } else {
                    self.pending_width = Some(width);
                    self.timers.schedule(TimerKind::ResizeSettle, now + debounce);
                }
            }
            CarouselEvent::Prev => dispatch!(self, paging, paging_reducer, PagingIntent::Prev, now),
            CarouselEvent::Next => dispatch!(self, paging, paging_reducer, PagingIntent::Next, now),
            CarouselEvent::HoverStart => {
                let regime = self.paging.regime;
                dispatch!(
                    self,
                    autoplay,
                    autoplay_reducer,
                    AutoplayIntent::HoverStart { regime },
                    now
                );
            }
            CarouselEvent::HoverEnd => {
                dispatch!(self, autoplay, autoplay_reducer, AutoplayIntent::HoverEnd, now)
            }
            CarouselEvent::TouchStart { x } => {
                dispatch!(self, gesture, gesture_reducer, GestureIntent::TouchStart { x }, now);
                dispatch!(self, autoplay, autoplay_reducer, AutoplayIntent::TouchStart, now);
            }
            CarouselEvent::TouchMove { x } => {
                dispatch!(self, gesture, gesture_reducer, GestureIntent::TouchMove { x }, now)
            }
            CarouselEvent::TouchEnd => {
                let animating = self.paging.is_animating;
                dispatch!(
                    self,
                    gesture,
                    gesture_reducer,
                    GestureIntent::TouchEnd { animating },
                    now
                );
                dispatch!(self, autoplay, autoplay_reducer, AutoplayIntent::InteractionEnded, now);
            }
            CarouselEvent::TouchCancel => {
                dispatch!(self, gesture, gesture_reducer, GestureIntent::TouchCancel, now);
                dispatch!(self, autoplay, autoplay_reducer, AutoplayIntent::InteractionEnded, now);
            }
            CarouselEvent::ItemClick { index } => {
                self.click_item(index, now);
            }
            CarouselEvent::CloseOverlay => {
                dispatch!(self, overlay, overlay_reducer, OverlayIntent::Close, now)
            }
            CarouselEvent::OverlayClick { at, bounds } => {
                self.zoom(ZoomIntent::Click { at, bounds }, now)
            }
            CarouselEvent::Wheel { delta_y } => self.zoom(ZoomIntent::Wheel { delta_y }, now),
            CarouselEvent::ZoomIn => self.zoom(ZoomIntent::ZoomIn, now),
            CarouselEvent::ZoomOut => self.zoom(ZoomIntent::ZoomOut, now),
            CarouselEvent::ZoomReset => self.zoom(ZoomIntent::Reset, now),
            CarouselEvent::DragStart { at } => self.zoom(ZoomIntent::DragStart { at }, now),
            CarouselEvent::DragMove { at } => self.zoom(ZoomIntent::DragMove { at }, now),
            CarouselEvent::DragEnd => self.zoom(ZoomIntent::DragEnd, now),
            CarouselEvent::PointerLeave => self.zoom(ZoomIntent::PointerLeave, now),
            CarouselEvent::MediaLoaded => {
                dispatch!(self, media, media_reducer, MediaIntent::Loaded, now)
            }
            CarouselEvent::MediaFailed { reason } => {
                dispatch!(self, media, media_reducer, MediaIntent::Failed { reason }, now)
            }
            CarouselEvent::SetAutoplay(on) => {
                let intent = if on {
                    AutoplayIntent::Enable
                } else {
                    AutoplayIntent::Disable
                };
                dispatch!(self, autoplay, autoplay_reducer, intent, now);
            }
        }
    }

    /// Route a click on the tile at `index` and act on the outcome.
    pub fn click_item(&mut self, index: usize, now: Instant) -> ClickOutcome {
        if !self.mounted {
            return ClickOutcome::Ignored;
        }
        let outcome = match self.items.get(index) {
            Some(item) => self.policy.route(item, self.gesture.is_swiping),
            None => ClickOutcome::Ignored,
        };

        match &outcome {
            ClickOutcome::OpenFullScreen => {
                dispatch!(self, overlay, overlay_reducer, OverlayIntent::Open { index }, now)
            }
            ClickOutcome::Navigate(path) => self.navigator.navigate(path),
            ClickOutcome::Suppressed | ClickOutcome::Handled | ClickOutcome::Ignored => {}
        }

        tracing::debug!(index, ?outcome, "Item click routed");
        self.last_click = Some(outcome.clone());
        outcome
    }

    /// Replace the item list, keeping the window position where possible.
    pub fn replace_items(&mut self, items: Vec<CarouselItem>, now: Instant) {
        self.items = items.into_iter().filter(|i| i.image.is_some()).collect();
        let count = self.items.len();
        dispatch!(self, paging, paging_reducer, PagingIntent::SetItemCount(count), now);
        if self.overlay.index().is_some_and(|i| i >= count) {
            dispatch!(self, overlay, overlay_reducer, OverlayIntent::Close, now);
        }
    }

    /// Fire every timer due at `now`, in deadline order.
    pub fn advance(&mut self, now: Instant) {
        if !self.mounted {
            return;
        }
        while let Some((kind, due)) = self.timers.pop_due(now) {
            tracing::trace!(?kind, "Timer fired");
            self.fire(kind, due);
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        if self.mounted {
            self.timers.next_deadline()
        } else {
            None
        }
    }

    pub fn view(&self) -> CarouselView {
        let paging = &self.paging;
        let count = self.items.len();
        let width_percent = paging.tile_width_percent();

        let tiles = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let active = paging.is_active(index);
                TileView {
                    index,
                    id: item.id.clone(),
                    title: item.title.clone(),
                    src: item
                        .image
                        .as_ref()
                        .map(|m| m.src.clone())
                        .unwrap_or_default(),
                    alt: item.alt().to_string(),
                    active,
                    first_visible: index == paging.current_index,
                    last_visible: index + 1 == paging.current_index + paging.items_per_page
                        || index + 1 == count,
                    width_percent,
                    opacity: if active { 1.0 } else { INACTIVE_OPACITY },
                    scale: if active { 1.0 } else { INACTIVE_SCALE },
                    has_hover_content: item.has_hover_content(),
                }
            })
            .collect();

        let overlay = match &self.overlay {
            OverlayState::Open { index, zoom } => self.items.get(*index).map(|item| OverlayView {
                index: *index,
                id: item.id.clone(),
                src: item
                    .image
                    .as_ref()
                    .map(|m| m.full_or_display().to_string())
                    .unwrap_or_default(),
                alt: item.alt().to_string(),
                zoom_level: zoom.level,
                transform: zoom.transform(),
            }),
            OverlayState::Closed => None,
        };

        CarouselView {
            tiles,
            current_index: paging.current_index,
            max_index: paging.max_index(),
            items_per_page: paging.items_per_page,
            offset_percent: paging.offset_percent(),
            transition_ms: self.transition_ms,
            prev_enabled: paging.can_go_prev(self.loop_enabled),
            next_enabled: paging.can_go_next(self.loop_enabled),
            is_animating: paging.is_animating,
            is_swiping: self.gesture.is_swiping,
            autoplay_running: self.autoplay.is_running(),
            is_loading: self.media.is_loading(),
            overlay,
        }
    }

    pub fn items(&self) -> &[CarouselItem] {
        &self.items
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn paging(&self) -> &PagingState {
        &self.paging
    }

    pub fn autoplay(&self) -> &AutoplayState {
        &self.autoplay
    }

    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    pub fn overlay(&self) -> &OverlayState {
        &self.overlay
    }

    pub fn media(&self) -> MediaState {
        self.media
    }

    pub fn timers(&self) -> &TimerRegistry {
        &self.timers
    }

    pub fn last_click(&self) -> Option<&ClickOutcome> {
        self.last_click.as_ref()
    }

    fn zoom(&mut self, intent: ZoomIntent, now: Instant) {
        dispatch!(self, overlay, overlay_reducer, OverlayIntent::Zoom(intent), now);
    }

    fn apply_width(&mut self, width: u32, now: Instant) {
        let page = self.resolver.resolve(width);
        tracing::debug!(width, items_per_page = page.items_per_page, "Viewport resized");
        dispatch!(self, paging, paging_reducer, PagingIntent::Resize(page), now);
    }

    /// Full-resolution sources worth warming: single-image items that open fullscreen.
    fn preload_sources(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|item| item.is_single_image_gallery() && self.policy.is_full_screen_eligible(item))
            .filter_map(|item| item.image.as_ref().and_then(|m| m.full_src.clone()))
            .collect()
    }

    /// Run the follow-up for a timer that was due at `due`.
    fn fire(&mut self, kind: TimerKind, due: Instant) {
        match kind {
            TimerKind::AnimationEnd => {
                dispatch!(self, paging, paging_reducer, PagingIntent::AnimationFinished, due)
            }
            TimerKind::AutoplayTick => {
                let tick = AutoplayIntent::Tick {
                    index: self.paging.current_index,
                    max_index: self.paging.max_index(),
                    animating: self.paging.is_animating,
                };
                dispatch!(self, autoplay, autoplay_reducer, tick, due);
            }
            TimerKind::InteractionCooldown => {
                dispatch!(self, autoplay, autoplay_reducer, AutoplayIntent::CooldownElapsed, due)
            }
            TimerKind::SwipeRelease => {
                dispatch!(self, gesture, gesture_reducer, GestureIntent::ReleaseSwipe, due)
            }
            TimerKind::ResizeSettle => {
                if let Some(width) = self.pending_width.take() {
                    self.apply_width(width, due);
                }
            }
            TimerKind::LoadingFallback => {
                dispatch!(self, media, media_reducer, MediaIntent::FallbackElapsed, due)
            }
            TimerKind::Preload => {
                let sources = self.preload_sources();
                tracing::debug!(count = sources.len(), "Preloading full-resolution images");
                self.navigator.preload(&sources);
            }
        }
    }

    /// Apply reducer effects. Paging follow-ups are reduced inline so their
    /// own effects land in the same pass.
    fn apply(&mut self, effects: Vec<Effect>, now: Instant) {
        let mut queue: VecDeque<Effect> = effects.into();
        while let Some(effect) = queue.pop_front() {
            match effect {
                Effect::Schedule { timer, after } => {
                    self.timers.schedule(timer, now + after);
                }
                Effect::Repeat { timer, every } => {
                    self.timers.repeat(timer, now, every);
                }
                Effect::Cancel(timer) => {
                    self.timers.cancel(timer);
                }
                Effect::Page(intent) => {
                    let (state, effects) = self
                        .paging_reducer
                        .reduce(std::mem::take(&mut self.paging), intent)
                        .into_parts();
                    self.paging = state;
                    queue.extend(effects);
                }
            }
        }
    }
}
