pub mod catalog;
pub mod chat;
pub mod conversation;
pub mod domain;
pub mod filter;
pub mod ports;
pub mod quiz;
pub mod view;

pub use catalog::{daily_feature_index, Catalog, CatalogError};
pub use chat::ChatClient;
pub use conversation::{ConversationSession, ConversationState};
pub use domain::{
    AnatomyNote, ChatRole, ChatTurn, Diet, Dinosaur, DinosaurGroup, Environment, HipAnatomy,
    HistoryTurn, Location, ParseFacetError, QuizQuestion, Stats,
};
pub use filter::{FilterCriteria, Selection};
pub use ports::{GenerationRequest, PortError, PortResult, TextGenerationService};
pub use quiz::{AnswerFeedback, QuizSession, QuizState};
pub use view::{Screen, ViewContent, ViewRouter};
