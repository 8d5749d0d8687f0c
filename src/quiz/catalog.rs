//! Quiz catalog loading and lookup

use enum_iterator::Sequence;
use itertools::Itertools;
use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::fs;
use std::path::Path;

use super::models::TopicQuiz;
use super::QuizError;

const BUNDLED_QUIZZES: &str = include_str!("../../assets/quizzes.yml");

/// Which of the two quiz tables to look in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Sequence)]
pub enum QuizKind {
    /// One quiz per tutorial topic
    #[default]
    Topic,
    /// One quiz per lesson card inside a topic
    Card,
}

impl Display for QuizKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let str = match self {
            QuizKind::Topic => "Topics",
            QuizKind::Card => "Lesson cards",
        };
        write!(f, "{}", str)
    }
}

/// Both quiz tables, in the order they are presented.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizCatalog {
    #[serde(default)]
    topics: Vec<TopicQuiz>,
    #[serde(default)]
    cards: Vec<TopicQuiz>,
}

impl QuizCatalog {
    /// Parses and validates a catalog.
    pub fn from_yaml_str(content: &str) -> Result<Self, QuizError> {
        let catalog: QuizCatalog = serde_yaml::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// The catalog shipped with the binary.
    pub fn bundled() -> Result<Self, QuizError> {
        Self::from_yaml_str(BUNDLED_QUIZZES)
    }

    pub fn from_path(path: &Path) -> Result<Self, QuizError> {
        debug!("Loading quizzes from: {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Checks every quiz of both tables.
    pub fn validate(&self) -> Result<(), QuizError> {
        for table in [&self.topics, &self.cards] {
            if let Some(key) = table.iter().map(|quiz| &quiz.key).duplicates().next() {
                return Err(QuizError::DuplicateKey(key.clone()));
            }
            for quiz in table.iter() {
                validate_quiz(quiz)?;
            }
        }
        Ok(())
    }

    pub fn quizzes(&self, kind: QuizKind) -> &[TopicQuiz] {
        match kind {
            QuizKind::Topic => &self.topics,
            QuizKind::Card => &self.cards,
        }
    }

    pub fn get(&self, kind: QuizKind, key: &str) -> Option<&TopicQuiz> {
        self.quizzes(kind).iter().find(|quiz| quiz.key == key)
    }

    pub fn topic(&self, key: &str) -> Option<&TopicQuiz> {
        self.get(QuizKind::Topic, key)
    }

    pub fn card(&self, key: &str) -> Option<&TopicQuiz> {
        self.get(QuizKind::Card, key)
    }

    /// Looks a key up in the topic table first, then in the card table.
    pub fn find(&self, key: &str) -> Option<(QuizKind, &TopicQuiz)> {
        enum_iterator::all::<QuizKind>()
            .find_map(|kind| self.get(kind, key).map(|quiz| (kind, quiz)))
    }

    pub fn question_count(&self) -> usize {
        self.topics
            .iter()
            .chain(self.cards.iter())
            .map(TopicQuiz::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty() && self.cards.is_empty()
    }
}

fn validate_quiz(quiz: &TopicQuiz) -> Result<(), QuizError> {
    if quiz.key.trim().is_empty() || quiz.title.trim().is_empty() {
        return Err(QuizError::MissingTitle(quiz.key.clone()));
    }
    if quiz.is_empty() {
        return Err(QuizError::EmptyQuiz(quiz.key.clone()));
    }
    if let Some(id) = quiz.questions.iter().map(|q| q.id).duplicates().next() {
        return Err(QuizError::DuplicateQuestion {
            key: quiz.key.clone(),
            id,
        });
    }
    for question in quiz.questions.iter() {
        if question.options.len() < 2 {
            return Err(QuizError::TooFewOptions {
                key: quiz.key.clone(),
                id: question.id,
            });
        }
        if question.correct_answer >= question.options.len() {
            return Err(QuizError::AnswerOutOfRange {
                key: quiz.key.clone(),
                id: question.id,
                answer: question.correct_answer,
                options: question.options.len(),
            });
        }
    }
    Ok(())
}

/// Load the quiz catalog, from `path` if given, with fallback to the bundled one
pub fn load_catalog(path: Option<&Path>) -> QuizCatalog {
    if let Some(path) = path {
        match QuizCatalog::from_path(path) {
            Ok(catalog) => {
                info!(
                    "Loaded {} questions from {}",
                    catalog.question_count(),
                    path.display()
                );
                return catalog;
            }
            Err(e) => warn!(
                "Failed to load quizzes from '{}': {e}. Using bundled quizzes.",
                path.display()
            ),
        }
    }
    match QuizCatalog::bundled() {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Bundled quizzes are invalid: {e}");
            QuizCatalog::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::tempdir;

    const SMALL_CATALOG: &str = r#"topics:
- key: basics
  title: Vue Basics Quiz
  questions:
  - id: 1
    question: What is an SFC?
    options: [Simple Function Component, Single File Component]
    correct_answer: 1
    explanation: A .vue file holding template, script and style.
cards:
- key: basics-structure
  title: Component Structure Quiz
  questions:
  - id: 1
    question: Is export default required in script setup?
    options: ["Yes", "No"]
    correct_answer: 1
    explanation: The compiler generates it.
"#;

    #[test]
    fn test_bundled_catalog_is_valid() {
        let catalog = QuizCatalog::bundled().unwrap();
        assert_eq!(catalog.quizzes(QuizKind::Topic).len(), 8);
        assert_eq!(catalog.quizzes(QuizKind::Card).len(), 48);
        assert_eq!(catalog.quizzes(QuizKind::Topic)[0].key, "basics");
        assert_eq!(catalog.topic("basics").unwrap().title, "Vue Basics Quiz");
        assert!(catalog.card("migration-fonts").is_some());
    }

    #[test]
    fn test_lookup_by_kind() {
        let catalog = QuizCatalog::from_yaml_str(SMALL_CATALOG).unwrap();
        assert!(catalog.topic("basics").is_some());
        assert!(catalog.card("basics").is_none());
        assert!(catalog.topic("missing").is_none());
        let (kind, quiz) = catalog.find("basics-structure").unwrap();
        assert_eq!(kind, QuizKind::Card);
        assert_eq!(quiz.title, "Component Structure Quiz");
        assert_eq!(catalog.question_count(), 2);
    }

    #[rstest]
    #[case("correct_answer: 1", "correct_answer: 2")]
    #[case("options: [\"Yes\", \"No\"]", "options: [\"Yes\"]")]
    #[case("title: Vue Basics Quiz", "title: ''")]
    fn test_invalid_catalogs_are_rejected(#[case] from: &str, #[case] to: &str) {
        let broken = SMALL_CATALOG.replacen(from, to, 1);
        assert!(QuizCatalog::from_yaml_str(&broken).is_err(), "{broken}");
    }

    #[test]
    fn test_duplicate_keys_are_rejected() {
        let broken = SMALL_CATALOG.replace("basics-structure", "basics");
        // Same key in different tables is fine
        assert!(QuizCatalog::from_yaml_str(&broken).is_ok());

        let doubled = format!(
            "topics:\n{0}{0}",
            "- key: a\n  title: A\n  questions:\n  - {id: 1, question: q, options: [x, y], correct_answer: 0, explanation: e}\n"
        );
        assert!(matches!(
            QuizCatalog::from_yaml_str(&doubled),
            Err(QuizError::DuplicateKey(key)) if key == "a"
        ));
    }

    #[test]
    fn test_empty_quiz_and_duplicate_question_ids_are_rejected() {
        let empty = "topics:\n- key: a\n  title: A\n  questions: []\n";
        assert!(matches!(
            QuizCatalog::from_yaml_str(empty),
            Err(QuizError::EmptyQuiz(key)) if key == "a"
        ));

        let question = "  - {id: 7, question: q, options: [x, y], correct_answer: 0, explanation: e}\n";
        let repeated = format!("cards:\n- key: b\n  title: B\n  questions:\n{question}{question}");
        assert!(matches!(
            QuizCatalog::from_yaml_str(&repeated),
            Err(QuizError::DuplicateQuestion { id: 7, .. })
        ));
    }

    #[test]
    fn test_load_catalog_falls_back_to_bundled() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("quizzes.yml");
        fs::write(&path, "topics: 12").unwrap();
        let catalog = load_catalog(Some(&path));
        assert_eq!(catalog, QuizCatalog::bundled().unwrap());

        let missing = load_catalog(Some(&dir.path().join("missing.yml")));
        assert!(!missing.is_empty());
    }

    #[test]
    fn test_load_catalog_from_user_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("quizzes.yml");
        fs::write(&path, SMALL_CATALOG).unwrap();
        let catalog = load_catalog(Some(&path));
        assert_eq!(catalog.quizzes(QuizKind::Topic).len(), 1);
    }
}
