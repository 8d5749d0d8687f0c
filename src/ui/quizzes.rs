//! List of quizzes in the current catalog

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::block::{Block, BorderType};
use ratatui::widgets::{Borders, List, ListItem};

use crate::app::state::{ActivePane, AppState};

pub const QUIZ_LIST_WIDTH: u16 = 36;

// Draw the quizzes of the selected catalog
pub fn draw_quiz_list<'a>(state: &AppState) -> List<'a> {
    let palette = state.session.palette();
    let active = state.active_pane() == ActivePane::Quizzes;
    let items: Vec<ListItem> = state
        .visible_quizzes()
        .iter()
        .map(|quiz| {
            ListItem::new(Line::from(vec![
                Span::styled(quiz.title.clone(), Style::default().fg(palette.text())),
                Span::styled(
                    format!(" ({})", quiz.len()),
                    Style::default().fg(palette.muted()),
                ),
            ]))
        })
        .collect();
    List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(palette.pane(active))
                .title(format!("{}", state.catalog_kind())),
        )
        .highlight_style(palette.selection())
        .highlight_symbol("> ")
}
