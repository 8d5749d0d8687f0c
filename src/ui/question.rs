//! Active quiz: current question, options and feedback

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::block::{Block, BorderType};
use ratatui::widgets::{Borders, Paragraph, Wrap};

use crate::app::state::{ActivePane, AppState};
use crate::quiz::QuizRun;
use crate::theme::Palette;

pub const QUIZ_MIN_WIDTH: u16 = 40;

/// Draw the active quiz, or a preview of the selected one.
pub fn draw_quiz<'a>(state: &AppState) -> Paragraph<'a> {
    let palette = state.session.palette();
    let active = state.active_pane() == ActivePane::Quiz;
    let (title, text) = match state.run() {
        Some(run) if active => (
            format!(
                "{} · {}/{}",
                run.quiz().title,
                run.position() + 1,
                run.quiz().len()
            ),
            run_text(run, palette),
        ),
        _ => match state.selected_quiz() {
            Some(quiz) => (
                quiz.title.clone(),
                Text::from(vec![
                    Line::styled(
                        format!("{} questions", quiz.len()),
                        Style::default().fg(palette.text()),
                    ),
                    Line::default(),
                    Line::styled(
                        "Press <Enter> to start.",
                        Style::default().fg(palette.muted()),
                    ),
                ]),
            ),
            None => (String::from("Quiz"), Text::from("No quiz available.")),
        },
    };

    Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(palette.pane(active))
                .title(title),
        )
}

fn run_text<'a>(run: &QuizRun, palette: &Palette) -> Text<'a> {
    let Some(question) = run.current_question() else {
        return Text::from("This quiz has no questions.");
    };
    let outcome = run.current_outcome();
    let mut lines = vec![
        Line::styled(
            question.question.clone(),
            Style::default()
                .fg(palette.text())
                .add_modifier(Modifier::BOLD),
        ),
        Line::default(),
    ];

    for (i, option) in question.options.iter().enumerate() {
        let highlighted = i == run.highlighted() && outcome.is_none();
        let marker = if highlighted { ">" } else { " " };
        let style = match outcome {
            Some(_) if i == question.correct_answer => Style::default().fg(palette.correct()),
            Some(o) if i == o.choice => Style::default().fg(palette.incorrect()),
            Some(_) => Style::default().fg(palette.muted()),
            None if highlighted => Style::default()
                .fg(palette.accent())
                .add_modifier(Modifier::BOLD),
            None => Style::default().fg(palette.text()),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{marker} {}. ", i + 1), style),
            Span::styled(option.clone(), style),
        ]));
    }

    if let Some(outcome) = outcome {
        lines.push(Line::default());
        let (verdict, color) = if outcome.is_correct() {
            ("Correct! ", palette.correct())
        } else {
            ("Not quite. ", palette.incorrect())
        };
        let verdict = Span::styled(
            verdict,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        );
        lines.push(Line::from(vec![
            verdict,
            Span::styled(question.explanation.clone(), Style::default().fg(palette.text())),
        ]));
    }

    let score = run.score();
    lines.push(Line::default());
    let summary = if run.is_complete() {
        format!(
            "Finished: {}/{} correct ({}%). Press <r> to try again.",
            score.correct,
            score.total,
            score.percent()
        )
    } else {
        format!("Score: {}/{} answered correctly", score.correct, score.answered)
    };
    lines.push(Line::styled(summary, Style::default().fg(palette.highlight())));
    Text::from(lines)
}
