use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::carousel::CarouselEvent;
use crate::tui::app::{App, Pointer};
use crate::tui::layout::{contains, overlay_rect, slot_at};

/// Wheel delta reported per scroll notch.
const WHEEL_DELTA: f64 = 100.0;

pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.request_quit();
        return;
    }

    if app.overlay_open() {
        let event = match key.code {
            KeyCode::Esc | KeyCode::Char('q') => CarouselEvent::CloseOverlay,
            KeyCode::Char('+') | KeyCode::Char('=') => CarouselEvent::ZoomIn,
            KeyCode::Char('-') => CarouselEvent::ZoomOut,
            KeyCode::Char('0') => CarouselEvent::ZoomReset,
            _ => return,
        };
        app.dispatch(event, now);
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Left | KeyCode::Char('h') => app.dispatch(CarouselEvent::Prev, now),
        KeyCode::Right | KeyCode::Char('l') => app.dispatch(CarouselEvent::Next, now),
        KeyCode::Char('a') => app.toggle_autoplay(now),
        KeyCode::Enter => app.click_slot(0, now),
        KeyCode::Char(c @ '1'..='9') => {
            let slot = c as usize - '1' as usize;
            app.click_slot(slot, now);
        }
        _ => {}
    }
}

/// Mouse on the track behaves like touch: press, drag and release form a
/// swipe, and the release also clicks the tile under the cursor. Inside the
/// fullscreen view the same gestures drive zoom and pan.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, now: Instant) {
    if app.overlay_open() {
        handle_overlay_mouse(app, mouse, now);
        return;
    }

    let track = app.track_rect();
    let over_track = contains(track, mouse.column, mouse.row);
    let x = app.column_to_px(mouse.column);

    match mouse.kind {
        MouseEventKind::Moved => app.set_hovering(over_track, now),
        MouseEventKind::Down(MouseButton::Left) if over_track => {
            app.set_pointer(Pointer::OnTrack);
            app.dispatch(CarouselEvent::TouchStart { x }, now);
        }
        MouseEventKind::Drag(MouseButton::Left) if app.pointer() == Pointer::OnTrack => {
            app.dispatch(CarouselEvent::TouchMove { x }, now);
        }
        MouseEventKind::Up(MouseButton::Left) if app.pointer() == Pointer::OnTrack => {
            app.set_pointer(Pointer::Released);
            app.dispatch(CarouselEvent::TouchEnd, now);
            let slots = app.carousel().paging().items_per_page;
            if let Some(slot) = slot_at(track, slots, mouse.column, mouse.row) {
                app.click_slot(slot, now);
            }
        }
        _ => {}
    }
}

fn handle_overlay_mouse(app: &mut App, mouse: MouseEvent, now: Instant) {
    let at = app.cell_to_point(mouse.column, mouse.row);
    let inside = contains(overlay_rect(app.area()), mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::ScrollUp => app.dispatch(CarouselEvent::Wheel { delta_y: -WHEEL_DELTA }, now),
        MouseEventKind::ScrollDown => app.dispatch(CarouselEvent::Wheel { delta_y: WHEEL_DELTA }, now),
        MouseEventKind::Down(MouseButton::Left) if inside => {
            app.set_pointer(Pointer::OnOverlay);
            app.dispatch(CarouselEvent::DragStart { at }, now);
        }
        MouseEventKind::Down(MouseButton::Left) => app.dispatch(CarouselEvent::CloseOverlay, now),
        MouseEventKind::Drag(MouseButton::Left) if app.pointer() == Pointer::OnOverlay => {
            if inside {
                app.dispatch(CarouselEvent::DragMove { at }, now);
            } else {
                app.set_pointer(Pointer::Released);
                app.dispatch(CarouselEvent::PointerLeave, now);
            }
        }
        MouseEventKind::Up(MouseButton::Left) if app.pointer() == Pointer::OnOverlay => {
            app.set_pointer(Pointer::Released);
            app.dispatch(CarouselEvent::DragEnd, now);
            let bounds = app.overlay_bounds();
            app.dispatch(CarouselEvent::OverlayClick { at, bounds }, now);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::{Carousel, RecordingNavigator};
    use crate::catalog::{CarouselItem, ItemId, MediaRef};
    use crate::config::Config;
    use std::sync::Arc;

    fn app(full_screen: bool) -> (App, Arc<RecordingNavigator>) {
        let items = (0..10)
            .map(|i| {
                CarouselItem::new(ItemId::new(format!("{i}")), MediaRef::new("a.jpg"))
                    .with_link(format!("/interior-design/p{i}"))
            })
            .collect();
        let mut config = Config::default();
        config.carousel.enable_full_screen_view = full_screen;
        let navigator = Arc::new(RecordingNavigator::new());
        let carousel = Carousel::builder(items)
            .config(&config)
            .navigator(navigator.clone())
            .build();
        let mut app = App::new(carousel, navigator.clone(), "Test", 10);
        app.mount(160, 30, Instant::now());
        (app, navigator)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn right_arrow_pages_forward() {
        let (mut app, _) = app(false);
        handle_key(&mut app, KeyEvent::from(KeyCode::Right), Instant::now());
        assert_eq!(app.carousel().paging().current_index, 1);
    }

    #[test]
    fn tap_on_tile_follows_link() {
        let (mut app, navigator) = app(false);
        let now = Instant::now();
        // Second of four 40-column slots.
        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 50, 10), now);
        handle_mouse(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), 50, 10), now);
        assert_eq!(navigator.last_visited().as_deref(), Some("/interior-design/p1"));
    }

    #[test]
    fn drag_across_track_swipes_without_clicking() {
        let (mut app, navigator) = app(false);
        let now = Instant::now();
        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 100, 10), now);
        handle_mouse(&mut app, mouse(MouseEventKind::Drag(MouseButton::Left), 40, 10), now);
        handle_mouse(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), 40, 10), now);
        assert_eq!(app.carousel().paging().current_index, 1);
        assert!(navigator.visited().is_empty());
    }

    #[test]
    fn escape_closes_overlay_before_quitting() {
        let (mut app, _) = app(true);
        let now = Instant::now();
        handle_key(&mut app, KeyEvent::from(KeyCode::Enter), now);
        assert!(app.overlay_open());

        handle_key(&mut app, KeyEvent::from(KeyCode::Esc), now);
        assert!(!app.overlay_open());
        assert!(!app.should_quit());

        handle_key(&mut app, KeyEvent::from(KeyCode::Esc), now);
        assert!(app.should_quit());
    }
}
