use ratatui::style::{Color, Modifier, Style};

pub(super) const ACCENT_PINK: Color = Color::Indexed(205);
pub(super) const RATE_RGB: (u8, u8, u8) = (0x00, 0xa5, 0xd4);
pub(super) const SUCCESS_RGB: (u8, u8, u8) = (0x00, 0xcc, 0x3e);
pub(super) const FAIL_RGB: (u8, u8, u8) = (0xcc, 0x00, 0x00);
pub(super) const LABEL_INDENT: &str = "    ";

pub(super) const fn rgb(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

pub(super) fn style_color(no_color: bool, color: Color) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default().fg(color)
    }
}

pub(super) fn number_style(no_color: bool, color: Color) -> Style {
    style_color(no_color, color).add_modifier(Modifier::BOLD)
}
