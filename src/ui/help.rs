// ui/help.rs

//! Panel with contextual help

use ratatui::layout::Constraint;
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::block::{Block, BorderType};
use ratatui::widgets::{Borders, Cell, Row, Table};

use crate::app::actions::Actions;
use crate::theme::Palette;

const HELP_KEY_WIDTH: u16 = 12;
const HELP_ACTION_WIDTH: u16 = 22;
pub const HELP_WIDTH: u16 = HELP_KEY_WIDTH + HELP_ACTION_WIDTH;

/// Draw the help panel as a `Table` containing available keys and
/// their associated `Action`
/// Argument `actions`: list of actions currently available
pub fn draw_help<'a>(actions: &Actions, palette: &Palette) -> Table<'a> {
    let key_style = Style::default().fg(palette.accent());
    let help_style = Style::default().fg(palette.muted());

    let mut rows = vec![];
    for action in actions.actions().iter() {
        for (i, key) in action.keys().iter().enumerate() {
            let help = if i == 0 {
                action.to_string()
            } else {
                String::new()
            };
            rows.push(Row::new(vec![
                Cell::from(Span::styled(key.to_string(), key_style)),
                Cell::from(Span::styled(help, help_style)),
            ]));
        }
    }

    Table::new(
        rows,
        [
            Constraint::Length(HELP_KEY_WIDTH),
            Constraint::Min(HELP_ACTION_WIDTH),
        ],
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(palette.pane(false))
            .title("Help"),
    )
    .column_spacing(1)
}
