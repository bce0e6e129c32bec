//! crates/dino_explorer_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any storage or serialization format.

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

//=========================================================================================
// Facet Enums
//=========================================================================================

/// Returned when a facet label does not name a known value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {facet} value: '{value}'")]
pub struct ParseFacetError {
    pub facet: &'static str,
    pub value: String,
}

/// Generates `as_str`, `ALL`, `Display` and `FromStr` for a closed label enum.
macro_rules! labelled_enum {
    ($name:ident, $facet:literal, { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseFacetError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($label => Ok($name::$variant),)+
                    other => Err(ParseFacetError {
                        facet: $facet,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

/// What a dinosaur ate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Diet {
    Carnivore,
    Herbivore,
    Omnivore,
    Piscivore,
    Insectivore,
}

labelled_enum!(Diet, "diet", {
    Carnivore => "Carnivore",
    Herbivore => "Herbivore",
    Omnivore => "Omnivore",
    Piscivore => "Piscivore",
    Insectivore => "Insectivore",
});

/// Hip structure: lizard-hipped, bird-hipped, or neither (marine reptiles, pterosaurs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HipAnatomy {
    Saurischian,
    Ornithischian,
    Other,
}

labelled_enum!(HipAnatomy, "hip anatomy", {
    Saurischian => "Saurischian",
    Ornithischian => "Ornithischian",
    Other => "Other",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    Land,
    Water,
    Sky,
}

labelled_enum!(Environment, "environment", {
    Land => "Land",
    Water => "Water",
    Sky => "Sky",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DinosaurGroup {
    Theropods,
    Sauropods,
    Stegosaurs,
    Ankylosaurs,
    Ornithopods,
    Ceratopsians,
    Pachycephalosaurs,
    Spinosaurs,
    MarineReptiles,
    Pterosaurs,
    Crocodylomorphs,
}

labelled_enum!(DinosaurGroup, "group", {
    Theropods => "Theropods",
    Sauropods => "Sauropods",
    Stegosaurs => "Stegosaurs",
    Ankylosaurs => "Ankylosaurs",
    Ornithopods => "Ornithopods",
    Ceratopsians => "Ceratopsians",
    Pachycephalosaurs => "Pachycephalosaurs",
    Spinosaurs => "Spinosaurs",
    MarineReptiles => "Marine Reptiles",
    Pterosaurs => "Pterosaurs",
    Crocodylomorphs => "Crocodylomorphs",
});

//=========================================================================================
// Catalog Records
//=========================================================================================

/// Where a specimen was found.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

/// A single labelled note about a body part.
#[derive(Debug, Clone, PartialEq)]
pub struct AnatomyNote {
    pub feature: String,
    pub description: String,
}

/// Four 1-10 scores shown on the detail radar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub intelligence: u8,
    pub speed: u8,
    pub defense: u8,
    pub attack: u8,
}

impl Stats {
    pub const FULL_MARK: u8 = 10;

    /// The stat series in chart order, each paired with its axis label.
    pub fn chart_series(&self) -> [(&'static str, u8); 4] {
        [
            ("Intel", self.intelligence),
            ("Speed", self.speed),
            ("Attack", self.attack),
            ("Defense", self.defense),
        ]
    }
}

/// A dinosaur (or other prehistoric animal) in the catalog.
///
/// Records are immutable once the catalog is loaded; `id` is unique within a catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Dinosaur {
    pub id: String,
    pub name: String,
    pub pronunciation: String,
    pub meaning: String,
    /// Free text such as "Late Cretaceous"; era filters match by containment.
    pub period: String,
    /// Year of discovery.
    pub year: i32,
    pub diet: Diet,
    pub group: DinosaurGroup,
    pub length_meters: f64,
    pub weight_tons: f64,
    pub description: String,
    pub habitat: String,
    pub location: Location,
    pub fun_fact: String,
    pub image_url: String,
    pub anatomy: Vec<AnatomyNote>,
    pub stats: Stats,
    pub show_on_map: Option<bool>,
    pub hip_anatomy: Option<HipAnatomy>,
    pub environment: Option<Environment>,
}

impl Dinosaur {
    pub fn is_on_map(&self) -> bool {
        self.show_on_map.unwrap_or(true)
    }
}

/// A multiple-choice quiz question. `correct_answer` indexes into `options`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub explanation: String,
}

//=========================================================================================
// Chat
//=========================================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// One message in a chat transcript. Never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatTurn {
    pub id: Uuid,
    pub role: ChatRole,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl ChatTurn {
    pub fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            text: text.into(),
            created_at: Utc::now(),
        }
    }

    /// The role/text pair forwarded to the model as context.
    pub fn to_history(&self) -> HistoryTurn {
        HistoryTurn {
            role: self.role,
            text: self.text.clone(),
        }
    }
}

/// A role/text pair as sent to the text-generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryTurn {
    pub role: ChatRole,
    pub text: String,
}
