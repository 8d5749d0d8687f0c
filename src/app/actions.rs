// app/actions.rs

//! Actions the user can trigger on the main `App`.

use enum_iterator::{all, Sequence};
use std::collections::HashMap;
use std::fmt::{self, Display};

use crate::inputs::key::Key;

/// All possible user actions.
/// Not all actions are available in all contexts.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Sequence)]
pub enum Action {
    LeaveQuiz,
    NextCatalog,
    NextOption,
    NextQuestion,
    NextQuiz,
    PreviousOption,
    PreviousQuestion,
    PreviousQuiz,
    Quit,
    RestartQuiz,
    StartQuiz,
    SubmitAnswer,
    ToggleHelp,
    ToggleLogs,
    ToggleTheme,
}

impl Action {
    /// Return a slice with the key(s) associated to the action.
    pub fn keys(&self) -> &[Key] {
        match self {
            Action::LeaveQuiz => &[Key::Esc],
            Action::NextCatalog => &[Key::Tab],
            Action::NextOption => &[Key::Down, Key::Char('j')],
            Action::NextQuestion => &[Key::Right, Key::Char('n')],
            Action::NextQuiz => &[Key::Down, Key::Char('j')],
            Action::PreviousOption => &[Key::Up, Key::Char('k')],
            Action::PreviousQuestion => &[Key::Left, Key::Char('p')],
            Action::PreviousQuiz => &[Key::Up, Key::Char('k')],
            Action::Quit => &[Key::Ctrl('c'), Key::Char('q')],
            Action::RestartQuiz => &[Key::Char('r')],
            Action::StartQuiz => &[Key::Enter],
            Action::SubmitAnswer => &[Key::Enter],
            Action::ToggleHelp => &[Key::Char('h')],
            Action::ToggleLogs => &[Key::Char('l')],
            Action::ToggleTheme => &[Key::Char('t')],
        }
    }
}

/// User friendly short description of the action
impl Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let str = match self {
            Action::LeaveQuiz => "Back to quiz list",
            Action::NextCatalog => "Topics / lesson cards",
            Action::NextOption => "Next option",
            Action::NextQuestion => "Next question",
            Action::NextQuiz => "Next quiz",
            Action::PreviousOption => "Previous option",
            Action::PreviousQuestion => "Previous question",
            Action::PreviousQuiz => "Previous quiz",
            Action::Quit => "Quit",
            Action::RestartQuiz => "Restart quiz",
            Action::StartQuiz => "Start quiz",
            Action::SubmitAnswer => "Submit answer",
            Action::ToggleHelp => "Toggle help",
            Action::ToggleLogs => "Toggle logs",
            Action::ToggleTheme => "Dark / light theme",
        };
        write!(f, "{}", str)
    }
}

/// Vec of actions.
/// Can be used to enumerate the actions available in a
/// given context.
/// In a context, a key must map to at most one action.
#[derive(Default, Debug, Clone)]
pub struct Actions(Vec<Action>);

impl Actions {
    /// Given a key, find the corresponding action
    pub fn find(&self, key: Key) -> Option<Action> {
        all::<Action>()
            .filter(|action| self.0.contains(action))
            .find(|action| action.keys().contains(&key))
    }

    pub fn actions(&self) -> &[Action] {
        self.0.as_slice()
    }
}

impl From<Vec<Action>> for Actions {
    /// Builds contextual actions
    ///
    /// # Panics
    ///
    /// If two actions have same key
    fn from(actions: Vec<Action>) -> Self {
        let mut map: HashMap<Key, Vec<Action>> = HashMap::new();
        for action in actions.iter() {
            for key in action.keys().iter() {
                map.entry(*key).or_default().push(*action);
            }
        }
        let errors = map
            .iter()
            .filter(|(_, actions)| actions.len() > 1)
            .map(|(key, actions)| {
                let actions = actions
                    .iter()
                    .map(Action::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("Conflict key {} with actions {}", key, actions)
            })
            .collect::<Vec<_>>();
        if !errors.is_empty() {
            panic!("{}", errors.join("; "))
        }

        Self(actions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_find_action_by_key() {
        let actions: Actions = vec![Action::Quit, Action::ToggleTheme].into();
        assert_eq!(actions.find(Key::Char('q')), Some(Action::Quit));
        assert_eq!(actions.find(Key::Char('t')), Some(Action::ToggleTheme));
    }

    #[test]
    fn should_find_action_by_key_not_found() {
        let actions: Actions = vec![Action::Quit, Action::ToggleTheme].into();
        assert_eq!(actions.find(Key::Char('w')), None);
    }

    #[test]
    fn should_resolve_shared_key_by_context() {
        let list: Actions = vec![Action::NextQuiz, Action::StartQuiz].into();
        let quiz: Actions = vec![Action::NextOption, Action::SubmitAnswer].into();
        assert_eq!(list.find(Key::Down), Some(Action::NextQuiz));
        assert_eq!(quiz.find(Key::Down), Some(Action::NextOption));
        assert_eq!(quiz.find(Key::Enter), Some(Action::SubmitAnswer));
    }

    #[test]
    #[should_panic]
    fn should_panic_when_create_actions_conflict_key() {
        let _actions: Actions = vec![Action::StartQuiz, Action::SubmitAnswer].into();
    }
}
