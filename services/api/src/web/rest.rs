//! services/api/src/web/rest.rs
//!
//! Assembles the REST API router and holds the master definition for the OpenAPI
//! specification.

use crate::web::{catalog, chat, protocol, quiz, state::AppState, view};
use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use utoipa::OpenApi;

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        catalog::list_dinosaurs_handler,
        catalog::get_dinosaur_handler,
        catalog::featured_handler,
        catalog::map_handler,
        catalog::facets_handler,
        quiz::create_quiz_handler,
        quiz::get_quiz_handler,
        quiz::answer_handler,
        quiz::advance_handler,
        quiz::restart_handler,
        quiz::delete_quiz_handler,
        chat::create_conversation_handler,
        chat::get_conversation_handler,
        chat::post_message_handler,
        chat::delete_conversation_handler,
        view::create_view_handler,
        view::get_view_handler,
        view::navigate_handler,
        view::select_handler,
        view::set_filters_handler,
        view::clear_filters_handler,
        view::delete_view_handler,
    ),
    components(
        schemas(
            protocol::DinosaurResponse,
            protocol::StatPointResponse,
            protocol::MapMarkerResponse,
            protocol::FilterQuery,
            protocol::FacetsResponse,
            protocol::QuizResponse,
            protocol::AnswerRequest,
            protocol::AnswerResponse,
            protocol::ConversationResponse,
            protocol::PostMessageRequest,
            protocol::PostMessageResponse,
            protocol::ViewResponse,
            protocol::NavigateRequest,
            protocol::SelectRequest,
        )
    ),
    tags(
        (name = "Dinosaur Explorer API", description = "Catalog browsing, quiz, chat assistant and view routing.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// Router
//=========================================================================================

/// All API routes, bound to the shared state.
pub fn api_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        // --- Catalog ---
        .route("/dinosaurs", get(catalog::list_dinosaurs_handler))
        .route("/dinosaurs/{id}", get(catalog::get_dinosaur_handler))
        .route("/featured", get(catalog::featured_handler))
        .route("/map", get(catalog::map_handler))
        .route("/facets", get(catalog::facets_handler))
        // --- Quiz ---
        .route("/quiz", post(quiz::create_quiz_handler))
        .route(
            "/quiz/{quiz_id}",
            get(quiz::get_quiz_handler).delete(quiz::delete_quiz_handler),
        )
        .route("/quiz/{quiz_id}/answer", post(quiz::answer_handler))
        .route("/quiz/{quiz_id}/advance", post(quiz::advance_handler))
        .route("/quiz/{quiz_id}/restart", post(quiz::restart_handler))
        // --- Chat ---
        .route("/chat", post(chat::create_conversation_handler))
        .route(
            "/chat/{conversation_id}",
            get(chat::get_conversation_handler).delete(chat::delete_conversation_handler),
        )
        .route(
            "/chat/{conversation_id}/messages",
            post(chat::post_message_handler),
        )
        // --- Views ---
        .route("/views", post(view::create_view_handler))
        .route(
            "/views/{view_id}",
            get(view::get_view_handler).delete(view::delete_view_handler),
        )
        .route("/views/{view_id}/navigate", post(view::navigate_handler))
        .route("/views/{view_id}/select", post(view::select_handler))
        .route(
            "/views/{view_id}/filters",
            put(view::set_filters_handler).delete(view::clear_filters_handler),
        )
        .with_state(app_state)
}
