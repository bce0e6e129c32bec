//! crates/dino_explorer_core/src/filter.rs
//!
//! Facet filtering over the catalog for the Browse screen.

use crate::domain::{Diet, Dinosaur, Environment, HipAnatomy, ParseFacetError};
use std::str::FromStr;

/// Sentinel label meaning "no restriction on this facet".
pub const ALL: &str = "All";

/// Era choices offered by the Browse screen.
pub const ERAS: [&str; 3] = ["Triassic", "Jurassic", "Cretaceous"];

/// One facet selector: either everything, or a single value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T> Selection<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Selection::All => None,
            Selection::Only(value) => Some(value),
        }
    }
}

impl<T: FromStr<Err = ParseFacetError>> Selection<T> {
    /// Parses a selector label; `"All"` and blank input select everything.
    pub fn parse(label: &str) -> Result<Self, ParseFacetError> {
        let label = label.trim();
        if label.is_empty() || label == ALL {
            return Ok(Selection::All);
        }
        label.parse().map(Selection::Only)
    }
}

impl Selection<String> {
    /// Era selectors are free text, so any non-"All" label is accepted.
    pub fn era(label: &str) -> Self {
        let label = label.trim();
        if label.is_empty() || label == ALL {
            Selection::All
        } else {
            Selection::Only(label.to_string())
        }
    }
}

/// The four independent Browse selectors.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub era: Selection<String>,
    pub hip: Selection<HipAnatomy>,
    pub diet: Selection<Diet>,
    pub environment: Selection<Environment>,
}

impl FilterCriteria {
    pub fn is_unfiltered(&self) -> bool {
        self.era.is_all() && self.hip.is_all() && self.diet.is_all() && self.environment.is_all()
    }

    /// True when every selector accepts the record.
    pub fn matches(&self, dino: &Dinosaur) -> bool {
        let era_match = match &self.era {
            Selection::All => true,
            Selection::Only(era) => dino.period.contains(era.as_str()),
        };
        let hip_match = facet_matches(&self.hip, dino.hip_anatomy);
        let diet_match = facet_matches(&self.diet, Some(dino.diet));
        let env_match = facet_matches(&self.environment, dino.environment);

        era_match && hip_match && diet_match && env_match
    }

    /// Selects matching records, preserving catalog order.
    pub fn apply<'a>(&self, dinosaurs: &'a [Dinosaur]) -> Vec<&'a Dinosaur> {
        dinosaurs.iter().filter(|d| self.matches(d)).collect()
    }
}

// A record lacking an optional facet never matches a specific selector.
fn facet_matches<T: PartialEq>(selection: &Selection<T>, value: Option<T>) -> bool {
    match selection {
        Selection::All => true,
        Selection::Only(wanted) => value.as_ref() == Some(wanted),
    }
}
