use crate::carousel::{CarouselView, OverlayView, TileView};
use crate::tui::app::App;
use crate::tui::layout::{layout_regions, overlay_rect, tile_rects};
use crate::tui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, INACTIVE_TEXT, OVERLAY_BORDER,
    STATUS_OK, STATUS_PAUSED,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let view = app.view();

    frame.render_widget(header_widget(app.title(), &view), header);
    frame.render_widget(Clear, body);
    draw_track(frame, body, &view);
    frame.render_widget(footer_widget(&view, app.last_navigation(), footer), footer);

    if let Some(overlay) = &view.overlay {
        let popup = overlay_rect(area);
        frame.render_widget(Clear, popup);
        frame.render_widget(overlay_widget(overlay), popup);
    }
}

fn header_widget(title: &str, view: &CarouselView) -> Paragraph<'static> {
    let text_style = Style::default().fg(HEADER_TEXT);
    let separator_style = Style::default().fg(HEADER_SEPARATOR);
    let (autoplay, autoplay_style) = if view.autoplay_running {
        ("▶ autoplay", Style::default().fg(STATUS_OK))
    } else {
        ("⏸ autoplay", Style::default().fg(STATUS_PAUSED))
    };

    let mut spans = vec![
        Span::styled("  ", text_style),
        Span::styled(title.to_string(), text_style.add_modifier(Modifier::BOLD)),
        Span::styled("  │  ", separator_style),
        Span::styled(
            format!("{} / {}", view.current_index + 1, view.max_index + 1),
            text_style,
        ),
        Span::styled("  │  ", separator_style),
        Span::styled(autoplay, autoplay_style),
    ];
    if view.is_loading {
        spans.push(Span::styled("  │  ", separator_style));
        spans.push(Span::styled("loading…", separator_style));
    }

    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn draw_track(frame: &mut Frame<'_>, body: Rect, view: &CarouselView) {
    let visible: Vec<&TileView> = view.active_tiles().collect();
    for (tile, rect) in visible.iter().zip(tile_rects(body, view.items_per_page)) {
        frame.render_widget(tile_widget(tile, view.is_animating), rect);
    }
}

fn tile_widget(tile: &TileView, animating: bool) -> Paragraph<'static> {
    let border = if animating { INACTIVE_TEXT } else { ACCENT };
    let title = tile
        .title
        .clone()
        .unwrap_or_else(|| tile.id.to_string());

    let mut lines = vec![
        Line::from(Span::styled(
            tile.src.clone(),
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(Span::styled(
            tile.alt.clone(),
            Style::default().fg(INACTIVE_TEXT).add_modifier(Modifier::ITALIC),
        )),
    ];
    if tile.first_visible || tile.last_visible {
        let edge = match (tile.first_visible, tile.last_visible) {
            (true, true) => "◀ ▶",
            (true, false) => "◀",
            _ => "▶",
        };
        lines.push(Line::from(Span::styled(edge, Style::default().fg(HEADER_SEPARATOR))));
    }

    Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    )
}

fn footer_widget(view: &CarouselView, last_navigation: Option<String>, area: Rect) -> Paragraph<'static> {
    let enabled = Style::default().fg(HEADER_TEXT);
    let disabled = Style::default().fg(INACTIVE_TEXT).add_modifier(Modifier::DIM);
    let hints = if view.overlay.is_some() {
        " +/-: Zoom │ 0: Reset │ Drag: Pan │ Esc: Close".to_string()
    } else {
        " 1-9/Enter: Open │ a: Autoplay │ q: Quit".to_string()
    };
    let navigation = last_navigation
        .map(|path| format!("→ {} ", path))
        .unwrap_or_else(|| format!("v{} ", VERSION));

    let fixed = 4 + hints.chars().count() + navigation.chars().count();
    let padding = (area.width.saturating_sub(2) as usize).saturating_sub(fixed);

    let line = Line::from(vec![
        Span::styled(" ◀", if view.prev_enabled { enabled } else { disabled }),
        Span::styled(" ▶", if view.next_enabled { enabled } else { disabled }),
        Span::styled(hints, disabled),
        Span::styled(" ".repeat(padding), disabled),
        Span::styled(navigation, enabled),
    ]);

    Paragraph::new(line).alignment(Alignment::Left).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn overlay_widget(overlay: &OverlayView) -> Paragraph<'static> {
    let text = Style::default().fg(HEADER_TEXT);
    let muted = Style::default().fg(HEADER_SEPARATOR);
    let t = overlay.transform;

    let lines = vec![
        Line::from(Span::styled(overlay.src.clone(), text)),
        Line::from(Span::styled(overlay.alt.clone(), muted)),
        Line::from(""),
        Line::from(Span::styled(format!("zoom  {:.2}×", overlay.zoom_level), text)),
        Line::from(Span::styled(
            format!("pan   {:+.0}, {:+.0}", t.translate.x, t.translate.y),
            muted,
        )),
        Line::from(Span::styled(
            format!("origin {:.0}% {:.0}%", t.origin_percent.x, t.origin_percent.y),
            muted,
        )),
    ];

    Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" {} ", overlay.id))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(OVERLAY_BORDER)),
    )
}
