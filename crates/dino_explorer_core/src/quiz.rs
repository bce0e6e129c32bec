//! crates/dino_explorer_core/src/quiz.rs
//!
//! The quiz state machine. Questions are asked in catalog order, one answer each.

use crate::domain::QuizQuestion;
use std::sync::Arc;

/// Where a quiz session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    InProgress {
        index: usize,
        score: usize,
        selected: Option<usize>,
        answered: bool,
    },
    Complete {
        score: usize,
    },
}

impl QuizState {
    const START: QuizState = QuizState::InProgress {
        index: 0,
        score: 0,
        selected: None,
        answered: false,
    };
}

/// Result of a `select_answer` call that was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub selected: usize,
    pub correct_answer: usize,
    pub is_correct: bool,
}

/// A single learner's pass through the question list.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Arc<[QuizQuestion]>,
    state: QuizState,
}

impl QuizSession {
    pub fn new(questions: Arc<[QuizQuestion]>) -> Self {
        let state = if questions.is_empty() {
            QuizState::Complete { score: 0 }
        } else {
            QuizState::START
        };
        Self { questions, state }
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> usize {
        match self.state {
            QuizState::InProgress { score, .. } | QuizState::Complete { score } => score,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.state, QuizState::Complete { .. })
    }

    /// The question being asked, or `None` once the quiz is complete.
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match self.state {
            QuizState::InProgress { index, .. } => self.questions.get(index),
            QuizState::Complete { .. } => None,
        }
    }

    /// Records an answer for the current question.
    ///
    /// Ignored (returns `None`) if the question was already answered, the quiz is
    /// complete, or `option` is not one of the question's options.
    pub fn select_answer(&mut self, option: usize) -> Option<AnswerFeedback> {
        let QuizState::InProgress {
            index,
            score,
            answered: false,
            ..
        } = self.state
        else {
            return None;
        };
        let question = self.questions.get(index)?;
        if option >= question.options.len() {
            return None;
        }

        let is_correct = option == question.correct_answer;
        self.state = QuizState::InProgress {
            index,
            score: if is_correct { score + 1 } else { score },
            selected: Some(option),
            answered: true,
        };

        Some(AnswerFeedback {
            selected: option,
            correct_answer: question.correct_answer,
            is_correct,
        })
    }

    /// Moves past an answered question. Returns `false` when nothing changed.
    pub fn advance(&mut self) -> bool {
        let QuizState::InProgress {
            index,
            score,
            answered: true,
            ..
        } = self.state
        else {
            return false;
        };

        self.state = if index + 1 >= self.questions.len() {
            QuizState::Complete { score }
        } else {
            QuizState::InProgress {
                index: index + 1,
                score,
                selected: None,
                answered: false,
            }
        };
        true
    }

    /// Starts over from the first question with a zero score.
    pub fn restart(&mut self) {
        *self = Self::new(Arc::clone(&self.questions));
    }
}
