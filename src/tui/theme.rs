use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xc8, 0xa9, 0x6e);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const OVERLAY_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const INACTIVE_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_PAUSED: Color = Color::Rgb(0xea, 0xb3, 0x08);
