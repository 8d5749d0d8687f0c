use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::block::{Block, BorderType};
use ratatui::widgets::{Borders, Paragraph};

use crate::app::state::AppState;

pub const TITLE_BLOCK_HEIGHT: u16 = 3;

pub fn draw_title<'a>(state: &AppState) -> Paragraph<'a> {
    let palette = state.session.palette();
    let theme = state.session.theme.theme();
    let icon = if theme.is_dark() { "☾" } else { "☀" };
    let title = Line::from(vec![
        Span::styled(
            "vue-primer",
            Style::default()
                .fg(palette.accent())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " · Vue & Nuxt for React developers · ",
            Style::default().fg(palette.muted()),
        ),
        Span::styled(format!("{icon} {theme}"), Style::default().fg(palette.highlight())),
    ]);
    Paragraph::new(title).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .style(palette.pane(false))
            .border_type(BorderType::Plain),
    )
}
