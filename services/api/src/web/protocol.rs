//! services/api/src/web/protocol.rs
//!
//! Defines the JSON payloads exchanged between the browser client and the API server.

use chrono::{DateTime, Utc};
use dino_explorer_core::{
    filter,
    quiz::QuizState, AnswerFeedback, ChatTurn, ConversationState, Diet, Dinosaur, Environment,
    FilterCriteria, HipAnatomy, ParseFacetError, QuizQuestion, QuizSession, Selection,
    Stats, ViewContent,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

//=========================================================================================
// Catalog
//=========================================================================================

#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct LocationResponse {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct AnatomyResponse {
    pub feature: String,
    pub description: String,
}

#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct StatsResponse {
    pub intelligence: u8,
    pub speed: u8,
    pub defense: u8,
    pub attack: u8,
}

/// One axis of the Detail radar chart.
#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct StatPointResponse {
    pub subject: String,
    pub value: u8,
    pub full_mark: u8,
}

/// A full catalog record.
#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct DinosaurResponse {
    pub id: String,
    pub name: String,
    pub pronunciation: String,
    pub meaning: String,
    pub period: String,
    pub year: i32,
    pub diet: String,
    pub group: String,
    pub length_meters: f64,
    pub weight_tons: f64,
    pub description: String,
    pub habitat: String,
    pub location: LocationResponse,
    pub fun_fact: String,
    pub image_url: String,
    pub anatomy: Vec<AnatomyResponse>,
    pub stats: StatsResponse,
    /// `stats` in radar-chart order.
    pub chart: Vec<StatPointResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hip_anatomy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
}

impl From<&Dinosaur> for DinosaurResponse {
    fn from(dino: &Dinosaur) -> Self {
        Self {
            id: dino.id.clone(),
            name: dino.name.clone(),
            pronunciation: dino.pronunciation.clone(),
            meaning: dino.meaning.clone(),
            period: dino.period.clone(),
            year: dino.year,
            diet: dino.diet.to_string(),
            group: dino.group.to_string(),
            length_meters: dino.length_meters,
            weight_tons: dino.weight_tons,
            description: dino.description.clone(),
            habitat: dino.habitat.clone(),
            location: LocationResponse {
                name: dino.location.name.clone(),
                lat: dino.location.lat,
                lng: dino.location.lng,
            },
            fun_fact: dino.fun_fact.clone(),
            image_url: dino.image_url.clone(),
            anatomy: dino
                .anatomy
                .iter()
                .map(|a| AnatomyResponse {
                    feature: a.feature.clone(),
                    description: a.description.clone(),
                })
                .collect(),
            stats: StatsResponse {
                intelligence: dino.stats.intelligence,
                speed: dino.stats.speed,
                defense: dino.stats.defense,
                attack: dino.stats.attack,
            },
            chart: dino
                .stats
                .chart_series()
                .iter()
                .map(|&(subject, value)| StatPointResponse {
                    subject: subject.to_string(),
                    value,
                    full_mark: Stats::FULL_MARK,
                })
                .collect(),
            hip_anatomy: dino.hip_anatomy.map(|h| h.to_string()),
            environment: dino.environment.map(|e| e.to_string()),
        }
    }
}

/// What the map widget needs to place a marker.
#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct MapMarkerResponse {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub location: LocationResponse,
}

impl From<&Dinosaur> for MapMarkerResponse {
    fn from(dino: &Dinosaur) -> Self {
        Self {
            id: dino.id.clone(),
            name: dino.name.clone(),
            image_url: dino.image_url.clone(),
            location: LocationResponse {
                name: dino.location.name.clone(),
                lat: dino.location.lat,
                lng: dino.location.lng,
            },
        }
    }
}

/// Browse selectors. Absent or "All" means no restriction.
#[derive(Deserialize, Serialize, Debug, Clone, Default, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FilterQuery {
    pub era: Option<String>,
    pub hip: Option<String>,
    pub diet: Option<String>,
    pub environment: Option<String>,
}

impl FilterQuery {
    pub fn into_criteria(self) -> Result<FilterCriteria, ParseFacetError> {
        Ok(FilterCriteria {
            era: Selection::era(self.era.as_deref().unwrap_or_default()),
            hip: Selection::<HipAnatomy>::parse(self.hip.as_deref().unwrap_or_default())?,
            diet: Selection::<Diet>::parse(self.diet.as_deref().unwrap_or_default())?,
            environment: Selection::<Environment>::parse(
                self.environment.as_deref().unwrap_or_default(),
            )?,
        })
    }
}

impl From<&FilterCriteria> for FilterQuery {
    fn from(criteria: &FilterCriteria) -> Self {
        Self {
            era: criteria.era.as_option().cloned(),
            hip: criteria.hip.as_option().map(|h| h.to_string()),
            diet: criteria.diet.as_option().map(|d| d.to_string()),
            environment: criteria.environment.as_option().map(|e| e.to_string()),
        }
    }
}

/// The choices offered by each Browse selector, "All" first.
#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct FacetsResponse {
    pub eras: Vec<String>,
    pub hips: Vec<String>,
    pub diets: Vec<String>,
    pub environments: Vec<String>,
}

impl FacetsResponse {
    pub fn new() -> Self {
        fn with_all<I: IntoIterator<Item = String>>(values: I) -> Vec<String> {
            std::iter::once(filter::ALL.to_string()).chain(values).collect()
        }
        Self {
            eras: with_all(filter::ERAS.iter().map(|e| e.to_string())),
            hips: with_all(HipAnatomy::ALL.iter().map(|h| h.to_string())),
            diets: with_all(Diet::ALL.iter().map(|d| d.to_string())),
            environments: with_all(Environment::ALL.iter().map(|e| e.to_string())),
        }
    }
}

impl Default for FacetsResponse {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================================
// Quiz
//=========================================================================================

#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct QuestionResponse {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
}

impl From<&QuizQuestion> for QuestionResponse {
    fn from(q: &QuizQuestion) -> Self {
        Self {
            id: q.id.clone(),
            question: q.question.clone(),
            options: q.options.clone(),
        }
    }
}

/// Quiz progress. The correct answer and explanation are only revealed once answered.
#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct QuizResponse {
    pub quiz_id: Uuid,
    pub complete: bool,
    pub score: usize,
    pub total_questions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<QuestionResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<usize>,
    pub answered: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl QuizResponse {
    pub fn new(quiz_id: Uuid, quiz: &QuizSession) -> Self {
        let mut response = Self {
            quiz_id,
            complete: quiz.is_complete(),
            score: quiz.score(),
            total_questions: quiz.total_questions(),
            index: None,
            question: None,
            selected: None,
            answered: false,
            correct_answer: None,
            explanation: None,
        };
        if let QuizState::InProgress {
            index,
            selected,
            answered,
            ..
        } = quiz.state()
        {
            response.index = Some(index);
            response.selected = selected;
            response.answered = answered;
            if let Some(question) = quiz.current_question() {
                response.question = Some(question.into());
                if answered {
                    response.correct_answer = Some(question.correct_answer);
                    response.explanation = Some(question.explanation.clone());
                }
            }
        }
        response
    }
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct AnswerRequest {
    pub option: usize,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct AnswerResponse {
    /// False when the answer was ignored (already answered, or quiz complete).
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_correct: Option<bool>,
    pub quiz: QuizResponse,
}

impl AnswerResponse {
    pub fn new(feedback: Option<AnswerFeedback>, quiz: QuizResponse) -> Self {
        Self {
            accepted: feedback.is_some(),
            is_correct: feedback.map(|f| f.is_correct),
            quiz,
        }
    }
}

//=========================================================================================
// Chat
//=========================================================================================

#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct ChatTurnResponse {
    pub id: Uuid,
    pub role: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl From<&ChatTurn> for ChatTurnResponse {
    fn from(turn: &ChatTurn) -> Self {
        Self {
            id: turn.id,
            role: turn.role.as_str().to_string(),
            text: turn.text.clone(),
            timestamp: turn.created_at,
        }
    }
}

#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct ConversationResponse {
    pub conversation_id: Uuid,
    pub pending: bool,
    pub assistant_unavailable: bool,
    pub turns: Vec<ChatTurnResponse>,
}

impl ConversationResponse {
    pub fn new(conversation_id: Uuid, state: &ConversationState) -> Self {
        Self {
            conversation_id,
            pending: state.pending,
            assistant_unavailable: state.assistant_unavailable,
            turns: state.turns.iter().map(ChatTurnResponse::from).collect(),
        }
    }
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct PostMessageRequest {
    pub text: String,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct PostMessageResponse {
    /// False when the message was blank or another reply was still pending.
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<ChatTurnResponse>,
    pub conversation: ConversationResponse,
}

//=========================================================================================
// Views
//=========================================================================================

#[derive(Serialize, Debug, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewContentResponse {
    Home {
        featured: Option<DinosaurResponse>,
    },
    Browse {
        results: Vec<DinosaurResponse>,
        filters: FilterQuery,
    },
    Map {
        markers: Vec<MapMarkerResponse>,
    },
    Quiz,
    Chat,
    Detail {
        dinosaur: DinosaurResponse,
    },
    Profile,
    Empty,
}

impl From<ViewContent<'_>> for ViewContentResponse {
    fn from(content: ViewContent<'_>) -> Self {
        match content {
            ViewContent::Home { featured } => ViewContentResponse::Home {
                featured: featured.map(DinosaurResponse::from),
            },
            ViewContent::Browse { results, filters } => ViewContentResponse::Browse {
                results: results.into_iter().map(DinosaurResponse::from).collect(),
                filters: filters.into(),
            },
            ViewContent::Map { markers } => ViewContentResponse::Map {
                markers: markers.into_iter().map(MapMarkerResponse::from).collect(),
            },
            ViewContent::Quiz => ViewContentResponse::Quiz,
            ViewContent::Chat => ViewContentResponse::Chat,
            ViewContent::Detail { dinosaur } => ViewContentResponse::Detail {
                dinosaur: dinosaur.into(),
            },
            ViewContent::Profile => ViewContentResponse::Profile,
            ViewContent::Empty => ViewContentResponse::Empty,
        }
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ViewResponse {
    pub view_id: Uuid,
    pub screen: String,
    pub content: ViewContentResponse,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct NavigateRequest {
    pub screen: String,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct SelectRequest {
    pub dinosaur_id: String,
}
