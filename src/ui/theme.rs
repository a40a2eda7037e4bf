use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(215, 119, 87);
pub const POPUP_BORDER: Color = Color::Rgb(110, 110, 110);
pub const GLOBAL_BORDER: Color = Color::Rgb(70, 70, 70);
pub const HEADER_TEXT: Color = Color::Rgb(200, 200, 200);
pub const MUTED_TEXT: Color = Color::Rgb(140, 140, 140);
pub const COMMENT_PIPE: Color = Color::Rgb(90, 120, 170);
pub const FOCUS_BG: Color = Color::Rgb(45, 45, 55);
pub const STATUS_OK: Color = Color::Rgb(80, 200, 120);
pub const STATUS_ERROR: Color = Color::Rgb(230, 80, 80);
