use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::{Buffer, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Widget},
};
use wythoff_engine::Position;

use crate::ui::widgets::style;

/// The two piles side by side.
#[derive(Debug)]
pub struct PilesDisplay {
    position: Position,
    border_style: Style,
}

impl PilesDisplay {
    const PILE_WIDTH: u16 = 16;
    pub const HEIGHT: u16 = 5;

    pub fn new(position: Position) -> Self {
        Self {
            position,
            border_style: style::DEFAULT,
        }
    }

    pub fn border_style(self, border_style: Style) -> Self {
        Self {
            border_style,
            ..self
        }
    }
}

impl Widget for PilesDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &PilesDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let [first_area, second_area] =
            Layout::horizontal([Constraint::Length(PilesDisplay::PILE_WIDTH); 2])
                .flex(Flex::Center)
                .spacing(2)
                .areas(area);

        for (title, value, area) in [
            ("FIRST", self.position.first(), first_area),
            ("SECOND", self.position.second(), second_area),
        ] {
            let block = Block::bordered()
                .title(Line::from(title).centered())
                .border_style(self.border_style)
                .style(style::DEFAULT);
            let inner = block.inner(area);
            block.render(area, buf);
            Text::styled(value.to_string(), style::PILE)
                .centered()
                .render(inner.centered_vertically(Constraint::Length(1)), buf);
        }
    }
}
