// app/mod.rs

//! Controller used to handle user input.

pub mod actions;
pub mod state;

use self::state::AppState;
use crate::app::actions::Action;
use crate::inputs::key::Key;
use crate::session::Session;

use crossterm::event::KeyEvent;
use log::*;

/// Return status indicating whether the app should exit or not.
#[derive(Debug, PartialEq, Eq)]
pub enum AppReturn {
    Exit,
    Continue,
}

/// `App` contains the state of the application.
pub struct App {
    pub state: AppState,
}

impl App {
    /// Returns an app over the given session.
    pub fn new(session: Session) -> Self {
        Self {
            state: AppState::new(session),
        }
    }

    /// Process a key event by executing the corresponding action
    pub fn process_key_event(&mut self, key_event: KeyEvent) -> AppReturn {
        trace!("Keyevent: {:?}", key_event);
        self.do_action(Key::from(key_event))
    }

    /// Handle a user action
    pub fn do_action(&mut self, key: Key) -> AppReturn {
        if let Some(action) = self.state.actions.find(key) {
            debug!("Run action [{:?}]", action);
            match action {
                Action::LeaveQuiz => self.state.leave_quiz(),
                Action::NextCatalog => self.state.next_catalog(),
                Action::NextOption => {
                    if let Some(run) = self.state.run_mut() {
                        run.highlight_next();
                    }
                }
                Action::NextQuestion => {
                    if let Some(run) = self.state.run_mut() {
                        run.next();
                    }
                }
                Action::NextQuiz => self.state.select_next_quiz(),
                Action::PreviousOption => {
                    if let Some(run) = self.state.run_mut() {
                        run.highlight_previous();
                    }
                }
                Action::PreviousQuestion => {
                    if let Some(run) = self.state.run_mut() {
                        run.previous();
                    }
                }
                Action::PreviousQuiz => self.state.select_previous_quiz(),
                Action::Quit => return AppReturn::Exit,
                Action::RestartQuiz => {
                    if let Some(run) = self.state.run_mut() {
                        run.restart();
                    }
                }
                Action::StartQuiz => {
                    if !self.state.start_selected_quiz() {
                        warn!("No quiz selected");
                    }
                }
                Action::SubmitAnswer => self.submit_answer(),
                Action::ToggleHelp => {
                    self.state.show_help = !self.state.show_help;
                }
                Action::ToggleLogs => {
                    self.state.show_logs = !self.state.show_logs;
                }
                Action::ToggleTheme => {
                    self.state.session.theme.toggle_theme();
                    info!("Theme is now {}", self.state.session.theme.theme());
                }
            }
        } else {
            debug!("No action associated with {} in this mode", key);
        }
        AppReturn::Continue
    }

    /// Answers with the highlighted option, or moves on once answered.
    fn submit_answer(&mut self) {
        let Some(run) = self.state.run_mut() else {
            return;
        };
        if run.current_outcome().is_some() {
            run.next();
            return;
        }
        match run.answer_highlighted() {
            Ok(outcome) if outcome.is_correct() => info!("Correct!"),
            Ok(_) => info!("Not quite, see the explanation"),
            Err(e) => error!("Could not submit answer: {}", e),
        }
        if run.is_complete() {
            let score = run.score();
            info!(
                "Quiz complete: {}/{} ({}%)",
                score.correct,
                score.total,
                score.percent()
            );
        }
    }

    /// We could update the app on tick
    pub fn update_on_tick(&mut self) -> AppReturn {
        AppReturn::Continue
    }
}
