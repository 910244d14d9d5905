use ratatui::style::Color;

// Palette lifted from the original page: gold title, purple gradient.
pub const TITLE_GOLD: Color = Color::Rgb(0xff, 0xd9, 0x66);
pub const ACCENT_PURPLE: Color = Color::Rgb(0x7a, 0x4d, 0xa7);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const POPUP_BORDER: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
