pub use self::{piles_display::*, turn_log_display::*};

mod piles_display;
mod turn_log_display;

mod color {
    use ratatui::style::Color;

    pub const CYAN: Color = Color::Rgb(0, 255, 255);
    pub const YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const GREEN: Color = Color::Rgb(0, 255, 0);
    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub mod style {
    use ratatui::style::{Color, Modifier, Style};

    use crate::ui::widgets::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const DIM: Style = fg_bg(color::GRAY, color::BLACK);
    pub const PILE: Style = fg_bg(color::CYAN, color::BLACK).add_modifier(Modifier::BOLD);
    pub const HEADER: Style = fg_bg(color::YELLOW, color::BLACK).add_modifier(Modifier::BOLD);
    pub const HUMAN: Style = fg_bg(color::GREEN, color::BLACK);
    pub const AUTOMATED: Style = fg_bg(color::RED, color::BLACK);
    pub const WARNING: Style = fg_bg(color::BLACK, color::YELLOW);
    pub const WIN: Style = fg_bg(color::BLACK, color::GREEN);
    pub const LOSS: Style = fg_bg(color::WHITE, color::RED);
}
