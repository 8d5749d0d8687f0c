// app/state.rs

use enum_iterator::{first, next};
use log::*;
use ratatui::widgets::ListState;
use tui_logger::TuiWidgetState;

use super::actions::{Action, Actions};
use crate::quiz::{QuizKind, QuizRun, TopicQuiz};
use crate::session::Session;

pub struct AppState {
    // App
    pub actions: Actions,
    pub session: Session,

    // UI
    pub show_logs: bool,
    pub show_help: bool,
    pub log_state: TuiWidgetState,
    pub quiz_list: ListState,
    catalog_kind: QuizKind,
    run: Option<QuizRun>,
    active_pane: ActivePane,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ActivePane {
    #[default]
    Quizzes,
    Quiz,
}

impl AppState {
    pub fn new(session: Session) -> Self {
        let mut state = AppState {
            actions: Actions::default(),
            session,
            show_logs: false,
            show_help: true,
            log_state: TuiWidgetState::new(),
            quiz_list: ListState::default(),
            catalog_kind: QuizKind::default(),
            run: None,
            active_pane: ActivePane::default(),
        };
        state.set_active_pane(ActivePane::Quizzes);
        state.reset_selection();
        state
    }

    pub fn active_pane(&self) -> ActivePane {
        self.active_pane
    }

    pub fn set_active_pane(&mut self, active_pane: ActivePane) {
        self.active_pane = active_pane;
        self.actions = match active_pane {
            ActivePane::Quizzes => vec![
                Action::NextCatalog,
                Action::NextQuiz,
                Action::PreviousQuiz,
                Action::Quit,
                Action::StartQuiz,
                Action::ToggleHelp,
                Action::ToggleLogs,
                Action::ToggleTheme,
            ]
            .into(),
            ActivePane::Quiz => vec![
                Action::LeaveQuiz,
                Action::NextOption,
                Action::NextQuestion,
                Action::PreviousOption,
                Action::PreviousQuestion,
                Action::Quit,
                Action::RestartQuiz,
                Action::SubmitAnswer,
                Action::ToggleHelp,
                Action::ToggleLogs,
                Action::ToggleTheme,
            ]
            .into(),
        }
    }

    pub fn catalog_kind(&self) -> QuizKind {
        self.catalog_kind
    }

    /// Switches between the topic quizzes and the lesson card quizzes.
    pub fn next_catalog(&mut self) {
        self.catalog_kind = next(&self.catalog_kind)
            .or_else(first::<QuizKind>)
            .unwrap_or_default();
        trace!("Showing {}", self.catalog_kind);
        self.reset_selection();
    }

    pub fn visible_quizzes(&self) -> &[TopicQuiz] {
        self.session.catalog.quizzes(self.catalog_kind)
    }

    pub fn selected_quiz(&self) -> Option<&TopicQuiz> {
        self.quiz_list
            .selected()
            .and_then(|i| self.visible_quizzes().get(i))
    }

    pub fn select_next_quiz(&mut self) {
        let len = self.visible_quizzes().len();
        if len == 0 {
            return;
        }
        let i = self.quiz_list.selected().map_or(0, |i| (i + 1) % len);
        self.quiz_list.select(Some(i));
    }

    pub fn select_previous_quiz(&mut self) {
        let len = self.visible_quizzes().len();
        if len == 0 {
            return;
        }
        let i = self.quiz_list.selected().map_or(0, |i| (i + len - 1) % len);
        self.quiz_list.select(Some(i));
    }

    /// Starts a fresh attempt at the selected quiz.
    pub fn start_selected_quiz(&mut self) -> bool {
        match self.selected_quiz().cloned() {
            Some(quiz) => {
                info!("Starting quiz '{}'", quiz.key);
                self.run = Some(QuizRun::new(quiz));
                self.set_active_pane(ActivePane::Quiz);
                true
            }
            None => false,
        }
    }

    pub fn leave_quiz(&mut self) {
        self.set_active_pane(ActivePane::Quizzes);
    }

    pub fn run(&self) -> Option<&QuizRun> {
        self.run.as_ref()
    }

    pub fn run_mut(&mut self) -> Option<&mut QuizRun> {
        self.run.as_mut()
    }

    fn reset_selection(&mut self) {
        let selected = if self.visible_quizzes().is_empty() {
            None
        } else {
            Some(0)
        };
        self.quiz_list.select(selected);
    }
}
