// ui/mod.rs

//! ratatui user interface

use log::*;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::Block;
use ratatui::Frame;

mod help;
mod logs;
mod question;
mod quizzes;
mod title;

use crate::app::state::AppState;
use help::{draw_help, HELP_WIDTH};
use logs::{draw_logs, LOG_BLOCK_HEIGHT};
use question::{draw_quiz, QUIZ_MIN_WIDTH};
use quizzes::{draw_quiz_list, QUIZ_LIST_WIDTH};
use title::{draw_title, TITLE_BLOCK_HEIGHT};

const BODY_MIN_HEIGHT: u16 = 12;

/// Render all blocks.
pub fn render(rect: &mut Frame, state: &mut AppState) {
    let size = rect.area();
    check_size(&size, state);

    // The root frame carries the palette selected by the theme marker
    rect.render_widget(Block::default().style(state.session.palette().base()), size);

    let mut app_constraints = vec![
        Constraint::Length(TITLE_BLOCK_HEIGHT),
        Constraint::Min(BODY_MIN_HEIGHT),
    ];
    if state.show_logs {
        app_constraints.push(Constraint::Length(LOG_BLOCK_HEIGHT));
    }

    // Vertical layout
    let app_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(app_constraints)
        .split(size);

    // Title
    rect.render_widget(draw_title(state), app_rows[0]);

    // Body: quiz list, active quiz, help
    let mut body_constraints = vec![
        Constraint::Length(QUIZ_LIST_WIDTH),
        Constraint::Min(QUIZ_MIN_WIDTH),
    ];
    if state.show_help {
        body_constraints.push(Constraint::Length(HELP_WIDTH));
    }

    let body_columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(body_constraints)
        .split(app_rows[1]);

    let quiz_list = draw_quiz_list(state);
    rect.render_stateful_widget(quiz_list, body_columns[0], &mut state.quiz_list);

    rect.render_widget(draw_quiz(state), body_columns[1]);

    if state.show_help {
        let help = draw_help(&state.actions, state.session.palette());
        rect.render_widget(help, body_columns[2]);
    }

    if state.show_logs {
        rect.render_widget(draw_logs(state), app_rows[2]);
    }
}

/// Logs warnings when terminal size constraints are not respected.
fn check_size(rect: &Rect, state: &AppState) {
    let mut min_width = QUIZ_LIST_WIDTH + QUIZ_MIN_WIDTH;
    if state.show_help {
        min_width += HELP_WIDTH
    };
    if rect.width < min_width {
        trace!("Require width >= {}, (got {})", min_width, rect.width);
    }

    let mut min_height = TITLE_BLOCK_HEIGHT + BODY_MIN_HEIGHT;
    if state.show_logs {
        min_height += LOG_BLOCK_HEIGHT
    };
    if rect.height < min_height {
        trace!("Require height >= {}, (got {})", min_height, rect.height);
    }
}
