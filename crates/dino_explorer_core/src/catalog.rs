//! crates/dino_explorer_core/src/catalog.rs
//!
//! The immutable, in-memory catalog of dinosaurs and quiz questions.

use crate::domain::{Dinosaur, QuizQuestion};
use chrono::{Datelike, NaiveDate};
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Duplicate dinosaur id: {0}")]
    DuplicateId(String),
    #[error("Duplicate quiz question id: {0}")]
    DuplicateQuestionId(String),
    #[error("Quiz question {id} has correct answer {index} but only {options} options")]
    AnswerOutOfRange {
        id: String,
        index: usize,
        options: usize,
    },
}

/// Read-only collection loaded once at startup. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Catalog {
    dinosaurs: Arc<[Dinosaur]>,
    questions: Arc<[QuizQuestion]>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids and out-of-range answers.
    pub fn new(
        dinosaurs: Vec<Dinosaur>,
        questions: Vec<QuizQuestion>,
    ) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for dino in &dinosaurs {
            if !seen.insert(dino.id.as_str()) {
                return Err(CatalogError::DuplicateId(dino.id.clone()));
            }
        }

        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id.as_str()) {
                return Err(CatalogError::DuplicateQuestionId(question.id.clone()));
            }
            if question.correct_answer >= question.options.len() {
                return Err(CatalogError::AnswerOutOfRange {
                    id: question.id.clone(),
                    index: question.correct_answer,
                    options: question.options.len(),
                });
            }
        }

        Ok(Self {
            dinosaurs: dinosaurs.into(),
            questions: questions.into(),
        })
    }

    pub fn dinosaurs(&self) -> &[Dinosaur] {
        &self.dinosaurs
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    /// Shared handle to the question list, for quiz sessions.
    pub fn question_set(&self) -> Arc<[QuizQuestion]> {
        Arc::clone(&self.questions)
    }

    pub fn len(&self) -> usize {
        self.dinosaurs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dinosaurs.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Dinosaur> {
        self.dinosaurs.iter().find(|d| d.id == id)
    }

    /// Records that should appear as markers on the fossil map.
    pub fn map_markers(&self) -> impl Iterator<Item = &Dinosaur> {
        self.dinosaurs.iter().filter(|d| d.is_on_map())
    }

    /// The "dinosaur of the day". `None` only for an empty catalog.
    pub fn daily_feature(&self, date: NaiveDate) -> Option<&Dinosaur> {
        daily_feature_index(date, self.dinosaurs.len()).map(|i| &self.dinosaurs[i])
    }
}

/// Date-seeded index in `[0, len)` that changes once per calendar day.
///
/// Seed is day-of-month + month * 31 + year * 366, with a zero-based month.
pub fn daily_feature_index(date: NaiveDate, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let seed = i64::from(date.day())
        + i64::from(date.month0()) * 31
        + i64::from(date.year()) * 366;
    Some(seed.rem_euclid(len as i64) as usize)
}
