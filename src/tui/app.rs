use std::sync::Arc;
use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::carousel::zoom::{ImageBounds, Point};
use crate::carousel::{Carousel, CarouselEvent, CarouselView, RecordingNavigator};
use crate::tui::layout::{body_rect, overlay_rect};

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: u32 = 2;

/// Pointer state of the primary mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pointer {
    #[default]
    Released,
    /// Pressed over the tile track.
    OnTrack,
    /// Pressed inside the fullscreen image.
    OnOverlay,
}

pub struct App {
    carousel: Carousel,
    navigator: Arc<RecordingNavigator>,
    title: String,
    column_px: u32,
    area: Rect,
    should_quit: bool,
    hovering: bool,
    pointer: Pointer,
    media_reported: bool,
}

impl App {
    pub fn new(
        carousel: Carousel,
        navigator: Arc<RecordingNavigator>,
        title: impl Into<String>,
        column_px: u32,
    ) -> Self {
        Self {
            carousel,
            navigator,
            title: title.into(),
            column_px: column_px.max(1),
            area: Rect::default(),
            should_quit: false,
            hovering: false,
            pointer: Pointer::default(),
            media_reported: false,
        }
    }

    pub fn mount(&mut self, cols: u16, rows: u16, now: Instant) {
        self.area = Rect::new(0, 0, cols, rows);
        self.carousel.setup(self.viewport_px(), now);
    }

    pub fn unmount(&mut self) {
        self.carousel.teardown();
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16, now: Instant) {
        self.area = Rect::new(0, 0, cols, rows);
        let width = self.viewport_px();
        self.dispatch(CarouselEvent::Resize { width }, now);
    }

    /// Fire due timers.
    pub fn on_tick(&mut self, now: Instant) {
        self.carousel.advance(now);
    }

    /// The first completed frame counts as the media becoming ready.
    pub fn on_drawn(&mut self, now: Instant) {
        if !self.media_reported {
            self.media_reported = true;
            self.dispatch(CarouselEvent::MediaLoaded, now);
        }
    }

    /// How long the main loop may block before timers need attention.
    pub fn next_wakeup(&self, now: Instant, tick_rate: Duration) -> Duration {
        self.carousel
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
            .map_or(tick_rate, |until| until.min(tick_rate))
    }

    pub fn dispatch(&mut self, event: CarouselEvent, now: Instant) {
        self.carousel.handle(event, now);
        self.carousel.advance(now);
    }

    pub fn click_slot(&mut self, slot: usize, now: Instant) {
        let index = self.carousel.paging().current_index + slot;
        if self.carousel.paging().is_active(index) {
            self.dispatch(CarouselEvent::ItemClick { index }, now);
        }
    }

    pub fn set_hovering(&mut self, hovering: bool, now: Instant) {
        if self.hovering == hovering {
            return;
        }
        self.hovering = hovering;
        let event = if hovering {
            CarouselEvent::HoverStart
        } else {
            CarouselEvent::HoverEnd
        };
        self.dispatch(event, now);
    }

    pub fn toggle_autoplay(&mut self, now: Instant) {
        let on = !self.carousel.autoplay().enabled;
        self.dispatch(CarouselEvent::SetAutoplay(on), now);
    }

    pub fn pointer(&self) -> Pointer {
        self.pointer
    }

    pub fn set_pointer(&mut self, pointer: Pointer) {
        self.pointer = pointer;
    }

    /// Horizontal position of a terminal column in viewport pixels.
    pub fn column_to_px(&self, column: u16) -> f64 {
        f64::from(u32::from(column).saturating_mul(self.column_px))
    }

    pub fn cell_to_point(&self, column: u16, row: u16) -> Point {
        Point::new(
            self.column_to_px(column),
            f64::from(
                u32::from(row)
                    .saturating_mul(self.column_px)
                    .saturating_mul(CELL_ASPECT),
            ),
        )
    }

    /// Pixel bounds of the image in the fullscreen overlay.
    pub fn overlay_bounds(&self) -> ImageBounds {
        let rect = overlay_rect(self.area);
        let origin = self.cell_to_point(rect.x, rect.y);
        let far = self.cell_to_point(rect.x + rect.width, rect.y + rect.height);
        ImageBounds {
            left: origin.x,
            top: origin.y,
            width: far.x - origin.x,
            height: far.y - origin.y,
        }
    }

    pub fn track_rect(&self) -> Rect {
        body_rect(self.area)
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn view(&self) -> CarouselView {
        self.carousel.view()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn last_navigation(&self) -> Option<String> {
        self.navigator.last_visited()
    }

    pub fn overlay_open(&self) -> bool {
        self.carousel.overlay().is_open()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    fn viewport_px(&self) -> u32 {
        u32::from(self.area.width).saturating_mul(self.column_px)
    }
}
