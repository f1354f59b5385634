use ratatui::{
    layout::Constraint,
    prelude::{Buffer, Rect},
    text::Line,
    widgets::{Block, Cell, Row, Table, Widget},
};
use wythoff_engine::{Actor, TurnRecord};

use crate::ui::widgets::style;

/// Table of the moves made so far, newest at the bottom.
///
/// Only the most recent turns that fit into the area are shown.
#[derive(Debug)]
pub struct TurnLogDisplay<'a> {
    history: &'a [TurnRecord],
}

impl<'a> TurnLogDisplay<'a> {
    pub fn new(history: &'a [TurnRecord]) -> Self {
        Self { history }
    }
}

impl Widget for TurnLogDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &TurnLogDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = Block::bordered()
            .title(Line::from("TURN LOG").centered())
            .style(style::DEFAULT);
        // borders and header row
        let visible = usize::from(area.height.saturating_sub(3));
        let skip = self.history.len().saturating_sub(visible);

        let rows = self.history[skip..].iter().map(|record| {
            let actor_style = match record.actor {
                Actor::Human => style::HUMAN,
                Actor::Automated => style::AUTOMATED,
            };
            Row::new([
                Cell::from(record.turn.to_string()),
                Cell::from(record.actor.to_string()).style(actor_style),
                Cell::from(record.position.first().to_string()),
                Cell::from(record.position.second().to_string()),
            ])
        });
        let header = Row::new(["Turn", "Player", "First", "Second"]).style(style::HEADER);

        Table::new(rows, [Constraint::Length(6); 4])
            .header(header)
            .column_spacing(2)
            .block(block)
            .render(area, buf);
    }
}
