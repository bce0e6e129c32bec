//! services/api/src/adapters/catalog_file.rs
//!
//! Loads the dinosaur and quiz catalog from a JSON document and maps it onto the
//! core domain types. Field names follow the content team's JSON, which mixes
//! snake_case and camelCase keys.

use dino_explorer_core::{
    AnatomyNote, Catalog, CatalogError, Diet, Dinosaur, DinosaurGroup, Environment, HipAnatomy,
    Location, ParseFacetError, QuizQuestion, Stats,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum CatalogFileError {
    #[error("Failed to read catalog file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid entry '{id}': {source}")]
    Facet {
        id: String,
        source: ParseFacetError,
    },
    #[error("Invalid entry '{id}': stat {stat} is {value}, expected 1-10")]
    StatOutOfRange {
        id: String,
        stat: &'static str,
        value: u8,
    },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

//=========================================================================================
// File Records
//=========================================================================================

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    dinosaurs: Vec<DinosaurRecord>,
    #[serde(default, alias = "quizQuestions")]
    quiz_questions: Vec<QuizQuestionRecord>,
}

#[derive(Debug, Deserialize)]
struct LocationRecord {
    name: String,
    lat: f64,
    lng: f64,
}

#[derive(Debug, Deserialize)]
struct AnatomyRecord {
    feature: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct StatsRecord {
    intelligence: u8,
    speed: u8,
    defense: u8,
    attack: u8,
}

#[derive(Debug, Deserialize)]
struct DinosaurRecord {
    id: String,
    name: String,
    #[serde(default)]
    pronunciation: String,
    #[serde(default)]
    meaning: String,
    period: String,
    year: i32,
    diet: String,
    group: String,
    length_meters: f64,
    weight_tons: f64,
    #[serde(default)]
    description: String,
    #[serde(default)]
    habitat: String,
    location: LocationRecord,
    #[serde(default)]
    fun_fact: String,
    #[serde(default)]
    image_url: String,
    #[serde(default)]
    anatomy: Vec<AnatomyRecord>,
    stats: StatsRecord,
    #[serde(default, rename = "showOnMap", alias = "show_on_map")]
    show_on_map: Option<bool>,
    #[serde(default, rename = "hipAnatomy", alias = "hip_anatomy")]
    hip_anatomy: Option<String>,
    #[serde(default)]
    environment: Option<String>,
}

#[derive(Debug, Deserialize)]
struct QuizQuestionRecord {
    id: String,
    question: String,
    options: Vec<String>,
    #[serde(rename = "correctAnswer", alias = "correct_answer")]
    correct_answer: usize,
    #[serde(default)]
    explanation: String,
}

//=========================================================================================
// Mapping
//=========================================================================================

impl StatsRecord {
    fn into_domain(self, id: &str) -> Result<Stats, CatalogFileError> {
        for (stat, value) in [
            ("intelligence", self.intelligence),
            ("speed", self.speed),
            ("defense", self.defense),
            ("attack", self.attack),
        ] {
            if !(1..=Stats::FULL_MARK).contains(&value) {
                return Err(CatalogFileError::StatOutOfRange {
                    id: id.to_string(),
                    stat,
                    value,
                });
            }
        }
        Ok(Stats {
            intelligence: self.intelligence,
            speed: self.speed,
            defense: self.defense,
            attack: self.attack,
        })
    }
}

impl TryFrom<DinosaurRecord> for Dinosaur {
    type Error = CatalogFileError;

    fn try_from(record: DinosaurRecord) -> Result<Self, Self::Error> {
        let facet_err = |source: ParseFacetError| CatalogFileError::Facet {
            id: record.id.clone(),
            source,
        };

        let diet: Diet = record.diet.parse().map_err(facet_err)?;
        let group: DinosaurGroup = record.group.parse().map_err(facet_err)?;
        let hip_anatomy: Option<HipAnatomy> = record
            .hip_anatomy
            .as_deref()
            .map(str::parse)
            .transpose()
            .map_err(facet_err)?;
        let environment: Option<Environment> = record
            .environment
            .as_deref()
            .map(str::parse)
            .transpose()
            .map_err(facet_err)?;
        let stats = record.stats.into_domain(&record.id)?;

        Ok(Dinosaur {
            id: record.id,
            name: record.name,
            pronunciation: record.pronunciation,
            meaning: record.meaning,
            period: record.period,
            year: record.year,
            diet,
            group,
            length_meters: record.length_meters,
            weight_tons: record.weight_tons,
            description: record.description,
            habitat: record.habitat,
            location: Location {
                name: record.location.name,
                lat: record.location.lat,
                lng: record.location.lng,
            },
            fun_fact: record.fun_fact,
            image_url: record.image_url,
            anatomy: record
                .anatomy
                .into_iter()
                .map(|a| AnatomyNote {
                    feature: a.feature,
                    description: a.description,
                })
                .collect(),
            stats,
            show_on_map: record.show_on_map,
            hip_anatomy,
            environment,
        })
    }
}

impl From<QuizQuestionRecord> for QuizQuestion {
    fn from(record: QuizQuestionRecord) -> Self {
        QuizQuestion {
            id: record.id,
            question: record.question,
            options: record.options,
            correct_answer: record.correct_answer,
            explanation: record.explanation,
        }
    }
}

//=========================================================================================
// Loading
//=========================================================================================

/// Parses and validates a catalog document.
pub fn parse_catalog(json: &str) -> Result<Catalog, CatalogFileError> {
    let document: CatalogDocument = serde_json::from_str(json)?;

    let dinosaurs = document
        .dinosaurs
        .into_iter()
        .map(Dinosaur::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    let questions = document
        .quiz_questions
        .into_iter()
        .map(QuizQuestion::from)
        .collect();

    Ok(Catalog::new(dinosaurs, questions)?)
}

/// Reads the catalog file at `path`. Called once at startup.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogFileError> {
    let json = std::fs::read_to_string(path).map_err(|source| CatalogFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse_catalog(&json)?;
    info!(
        dinosaurs = catalog.len(),
        questions = catalog.questions().len(),
        "Catalog loaded from {}",
        path.display()
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "dinosaurs": [{
            "id": "pteranodon",
            "name": "Pteranodon",
            "period": "Late Cretaceous",
            "year": 1876,
            "diet": "Piscivore",
            "group": "Pterosaurs",
            "length_meters": 1.8,
            "weight_tons": 0.02,
            "location": { "name": "Kansas, USA", "lat": 38.5, "lng": -98.0 },
            "stats": { "intelligence": 4, "speed": 8, "defense": 2, "attack": 3 },
            "hipAnatomy": "Other",
            "environment": "Sky",
            "showOnMap": false
        }],
        "quiz_questions": [{
            "id": "q1",
            "question": "Could Pteranodon fly?",
            "options": ["Yes", "No", "Only downhill", "Only at night"],
            "correctAnswer": 0,
            "explanation": "It soared over ancient seas."
        }]
    }"#;

    #[test]
    fn parses_mixed_case_keys() {
        let catalog = parse_catalog(MINIMAL).unwrap();
        let dino = catalog.get("pteranodon").unwrap();
        assert_eq!(dino.diet, Diet::Piscivore);
        assert_eq!(dino.hip_anatomy, Some(HipAnatomy::Other));
        assert_eq!(dino.environment, Some(Environment::Sky));
        assert!(!dino.is_on_map());
        assert_eq!(catalog.questions()[0].correct_answer, 0);
    }

    #[test]
    fn rejects_unknown_diet() {
        let json = MINIMAL.replace("Piscivore", "Fungivore");
        let err = parse_catalog(&json).unwrap_err();
        assert!(matches!(err, CatalogFileError::Facet { ref id, .. } if id == "pteranodon"));
    }

    #[test]
    fn rejects_out_of_range_stat() {
        let json = MINIMAL.replace("\"speed\": 8", "\"speed\": 11");
        let err = parse_catalog(&json).unwrap_err();
        assert!(matches!(
            err,
            CatalogFileError::StatOutOfRange { stat: "speed", value: 11, .. }
        ));
    }

    #[test]
    fn rejects_answer_outside_options() {
        let json = MINIMAL.replace("\"correctAnswer\": 0", "\"correctAnswer\": 4");
        let err = parse_catalog(&json).unwrap_err();
        assert!(matches!(
            err,
            CatalogFileError::Catalog(CatalogError::AnswerOutOfRange { .. })
        ));
    }

    #[test]
    fn bundled_catalog_is_valid() {
        let catalog = parse_catalog(include_str!("../../data/catalog.json")).unwrap();
        assert!(!catalog.is_empty());
        assert!(!catalog.questions().is_empty());
    }
}
