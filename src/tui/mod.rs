//! Terminal gallery host.
//!
//! Terminal columns stand in for viewport pixels (`column_px` each), the
//! mouse stands in for touch, and timers are advanced from the main loop.

pub mod app;
pub mod events;
pub mod input;
pub mod layout;
pub mod render;
pub mod terminal_guard;
pub mod theme;

use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Instant;

use crate::carousel::{Carousel, RecordingNavigator};
use crate::config::TerminalConfig;
use crate::tui::app::App;
use crate::tui::events::{AppEvent, EventHandler};
use crate::tui::input::{handle_key, handle_mouse};
use crate::tui::render::draw;
use crate::tui::terminal_guard::setup_terminal;

pub fn run(
    carousel: Carousel,
    navigator: Arc<RecordingNavigator>,
    title: &str,
    config: &TerminalConfig,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.tick_rate();
    let mut app = App::new(carousel, navigator, title, config.column_px);
    let (cols, rows) = crossterm::terminal::size()?;
    app.mount(cols, rows, Instant::now());
    let events = EventHandler::new(tick_rate);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        app.on_drawn(Instant::now());
        if app.should_quit() {
            break;
        }

        let timeout = app.next_wakeup(Instant::now(), tick_rate);
        match events.next(timeout) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key, Instant::now()),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse, Instant::now()),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows, Instant::now()),
            Ok(AppEvent::Tick) | Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
        app.on_tick(Instant::now());
    }

    app.unmount();
    drop(guard);
    Ok(())
}
