//! Panel showing log messages

use ratatui::style::Style;
use ratatui::widgets::block::{Block, BorderType};
use ratatui::widgets::Borders;
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

use crate::app::state::AppState;

pub(crate) const LOG_BLOCK_HEIGHT: u16 = 10;

// Draw the logs panel
pub(crate) fn draw_logs(state: &AppState) -> TuiLoggerWidget<'_> {
    let palette = state.session.palette();
    TuiLoggerWidget::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(palette.pane(false))
                .title("Logs"),
        )
        .style_error(Style::default().fg(palette.incorrect()))
        .style_warn(Style::default().fg(palette.highlight()))
        .style_info(Style::default().fg(palette.accent()))
        .style_debug(Style::default().fg(palette.correct()))
        .style_trace(Style::default().fg(palette.muted()))
        .output_separator(' ')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(false)
        .output_file(false)
        .output_line(false)
        .state(&state.log_state)
}
