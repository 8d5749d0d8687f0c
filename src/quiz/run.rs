//! An attempt at one quiz

use log::debug;

use super::models::{QuizQuestion, TopicQuiz};
use super::QuizError;

/// Result of answering one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub choice: usize,
    pub correct_answer: usize,
}

impl AnswerOutcome {
    pub fn is_correct(&self) -> bool {
        self.choice == self.correct_answer
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub answered: usize,
    pub total: usize,
}

impl Score {
    /// Share of correct answers over all questions, in percent.
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        (self.correct * 100 / self.total) as u8
    }
}

/// Walks through the questions of a quiz, recording one answer per question.
#[derive(Debug, Clone)]
pub struct QuizRun {
    quiz: TopicQuiz,
    current: usize,
    highlighted: usize,
    answers: Vec<Option<AnswerOutcome>>,
}

impl QuizRun {
    pub fn new(quiz: TopicQuiz) -> Self {
        let answers = vec![None; quiz.len()];
        Self {
            quiz,
            current: 0,
            highlighted: 0,
            answers,
        }
    }

    pub fn quiz(&self) -> &TopicQuiz {
        &self.quiz
    }

    /// 0-based position of the current question.
    pub fn position(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.quiz.questions.get(self.current)
    }

    /// Answer given to the current question, if any.
    pub fn current_outcome(&self) -> Option<AnswerOutcome> {
        self.answers.get(self.current).copied().flatten()
    }

    /// Option under the cursor of the current question.
    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn highlight_next(&mut self) {
        let options = self.current_question().map_or(0, |q| q.options.len());
        if options > 0 {
            self.highlighted = (self.highlighted + 1) % options;
        }
    }

    pub fn highlight_previous(&mut self) {
        let options = self.current_question().map_or(0, |q| q.options.len());
        if options > 0 {
            self.highlighted = (self.highlighted + options - 1) % options;
        }
    }

    /// Records `choice` as the answer to the current question.
    pub fn answer(&mut self, choice: usize) -> Result<AnswerOutcome, QuizError> {
        let question = self
            .quiz
            .questions
            .get(self.current)
            .ok_or(QuizError::InvalidChoice { choice, options: 0 })?;
        if self.answers[self.current].is_some() {
            return Err(QuizError::AlreadyAnswered(question.id));
        }
        if choice >= question.options.len() {
            return Err(QuizError::InvalidChoice {
                choice,
                options: question.options.len(),
            });
        }
        let outcome = AnswerOutcome {
            choice,
            correct_answer: question.correct_answer,
        };
        debug!(
            "Quiz '{}' question {}: chose {} ({})",
            self.quiz.key,
            question.id,
            choice,
            if outcome.is_correct() { "correct" } else { "wrong" }
        );
        self.answers[self.current] = Some(outcome);
        Ok(outcome)
    }

    /// Answers the current question with the highlighted option.
    pub fn answer_highlighted(&mut self) -> Result<AnswerOutcome, QuizError> {
        self.answer(self.highlighted)
    }

    /// Moves to the next question. Returns false on the last one.
    pub fn next(&mut self) -> bool {
        if self.current + 1 < self.quiz.len() {
            self.current += 1;
            self.highlighted = 0;
            true
        } else {
            false
        }
    }

    /// Moves to the previous question. Returns false on the first one.
    pub fn previous(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            self.highlighted = 0;
            true
        } else {
            false
        }
    }

    pub fn is_complete(&self) -> bool {
        self.answers.iter().all(Option::is_some)
    }

    pub fn score(&self) -> Score {
        let answered = self.answers.iter().flatten().collect::<Vec<_>>();
        Score {
            correct: answered.iter().filter(|a| a.is_correct()).count(),
            answered: answered.len(),
            total: self.quiz.len(),
        }
    }

    /// Clears all answers and goes back to the first question.
    pub fn restart(&mut self) {
        self.current = 0;
        self.highlighted = 0;
        self.answers.iter_mut().for_each(|a| *a = None);
    }
}
