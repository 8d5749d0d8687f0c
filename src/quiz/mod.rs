//! Quiz catalog for the tutorial topics
//!
//! Quizzes are static data bundled with the binary (`assets/quizzes.yml`),
//! split into per-topic quizzes and per-lesson-card quizzes.

pub mod catalog;
pub mod models;
pub mod run;

pub use catalog::{load_catalog, QuizCatalog, QuizKind};
pub use models::{QuizQuestion, TopicQuiz};
pub use run::{AnswerOutcome, QuizRun, Score};

/// Error type for quiz loading and quiz runs
#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("Could not read quiz file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed quiz file: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Quiz '{0}' has an empty key or title")]
    MissingTitle(String),
    #[error("Quiz '{0}' has no questions")]
    EmptyQuiz(String),
    #[error("Duplicate quiz key '{0}'")]
    DuplicateKey(String),
    #[error("Quiz '{key}' has several questions with id {id}")]
    DuplicateQuestion { key: String, id: u32 },
    #[error("Question {id} of quiz '{key}' needs at least two options")]
    TooFewOptions { key: String, id: u32 },
    #[error("Question {id} of quiz '{key}' points at option {answer} but has {options} options")]
    AnswerOutOfRange {
        key: String,
        id: u32,
        answer: usize,
        options: usize,
    },
    #[error("Option {choice} does not exist, question has {options} options")]
    InvalidChoice { choice: usize, options: usize },
    #[error("Question {0} was already answered")]
    AlreadyAnswered(u32),
}
