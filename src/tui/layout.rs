use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Header, body and footer bands of the screen.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

/// Splits `track` into `slots` equal-width columns, one per visible tile.
pub fn tile_rects(track: Rect, slots: usize) -> Vec<Rect> {
    let slots = slots.max(1) as u16;
    let width = track.width / slots;
    (0..slots)
        .map(|i| {
            let x = track.x + i * width;
            // Last slot absorbs the rounding remainder.
            let w = if i + 1 == slots {
                track.width.saturating_sub(i * width)
            } else {
                width
            };
            Rect {
                x,
                y: track.y,
                width: w,
                height: track.height,
            }
        })
        .collect()
}

/// Slot under the cell at (`column`, `row`), if any.
pub fn slot_at(track: Rect, slots: usize, column: u16, row: u16) -> Option<usize> {
    tile_rects(track, slots)
        .iter()
        .position(|r| r.width > 0 && contains(*r, column, row))
}

pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Fullscreen overlay area.
pub fn overlay_rect(area: Rect) -> Rect {
    centered_rect(90, 90, area)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_cover_the_track() {
        let track = Rect::new(0, 3, 101, 10);
        let tiles = tile_rects(track, 4);
        assert_eq!(tiles.len(), 4);
        assert_eq!(tiles[0].width, 25);
        assert_eq!(tiles[3].x + tiles[3].width, 101);
    }

    #[test]
    fn slot_lookup() {
        let track = Rect::new(0, 3, 100, 10);
        assert_eq!(slot_at(track, 4, 0, 3), Some(0));
        assert_eq!(slot_at(track, 4, 60, 5), Some(2));
        assert_eq!(slot_at(track, 4, 60, 2), None);
    }

    #[test]
    fn regions_fit_small_screens() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 80, 4));
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 1);
        assert_eq!(body.height, 0);
    }
}
