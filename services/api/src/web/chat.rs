//! services/api/src/web/chat.rs
//!
//! Chat endpoints. A conversation allows one outstanding request at a time; a post
//! that arrives while a reply is pending is answered with `accepted: false`.

use crate::web::{
    protocol::{ChatTurnResponse, ConversationResponse, PostMessageRequest, PostMessageResponse},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use dino_explorer_core::ConversationSession;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;
use uuid::Uuid;

fn conversation_not_found(conversation_id: Uuid) -> (StatusCode, String) {
    (
        StatusCode::NOT_FOUND,
        format!("Conversation {} not found", conversation_id),
    )
}

async fn find_conversation(
    app_state: &AppState,
    conversation_id: Uuid,
) -> Result<Arc<ConversationSession>, (StatusCode, String)> {
    app_state
        .conversations
        .read()
        .await
        .get(&conversation_id)
        .cloned()
        .ok_or_else(|| conversation_not_found(conversation_id))
}

/// Open a new conversation, seeded with the assistant's greeting.
#[utoipa::path(
    post,
    path = "/chat",
    responses((status = 201, description = "Conversation created", body = ConversationResponse))
)]
pub async fn create_conversation_handler(
    State(app_state): State<Arc<AppState>>,
) -> (StatusCode, Json<ConversationResponse>) {
    let conversation_id = Uuid::new_v4();
    let session = Arc::new(ConversationSession::with_greeting(
        app_state.chat_client.clone(),
    ));
    let response = ConversationResponse::new(conversation_id, &session.snapshot());

    app_state
        .conversations
        .write()
        .await
        .insert(conversation_id, session);
    info!(
        "Conversation {} opened (model: {}, assistant available: {}).",
        conversation_id,
        app_state.config.chat_model,
        app_state.chat_client.is_available()
    );
    (StatusCode::CREATED, Json(response))
}

/// The transcript and flags of a conversation.
#[utoipa::path(
    get,
    path = "/chat/{conversation_id}",
    params(("conversation_id" = Uuid, Path, description = "The conversation id.")),
    responses(
        (status = 200, description = "Conversation state", body = ConversationResponse),
        (status = 404, description = "No such conversation")
    )
)]
pub async fn get_conversation_handler(
    State(app_state): State<Arc<AppState>>,
    Path(conversation_id): Path<Uuid>,
) -> Result<Json<ConversationResponse>, (StatusCode, String)> {
    let session = find_conversation(&app_state, conversation_id).await?;
    Ok(Json(ConversationResponse::new(
        conversation_id,
        &session.snapshot(),
    )))
}

/// Post a user message and wait for the assistant's reply.
#[utoipa::path(
    post,
    path = "/chat/{conversation_id}/messages",
    params(("conversation_id" = Uuid, Path, description = "The conversation id.")),
    request_body = PostMessageRequest,
    responses(
        (status = 200, description = "Reply appended, or message ignored", body = PostMessageResponse),
        (status = 404, description = "No such conversation")
    )
)]
pub async fn post_message_handler(
    State(app_state): State<Arc<AppState>>,
    Path(conversation_id): Path<Uuid>,
    Json(request): Json<PostMessageRequest>,
) -> Result<Json<PostMessageResponse>, (StatusCode, String)> {
    let session = find_conversation(&app_state, conversation_id).await?;

    let start = Instant::now();
    let reply = session.post_user_message(&request.text).await;
    if reply.is_some() {
        info!(
            "Conversation {}: reply in {:?}",
            conversation_id,
            start.elapsed()
        );
    }

    Ok(Json(PostMessageResponse {
        accepted: reply.is_some(),
        reply: reply.as_ref().map(ChatTurnResponse::from),
        conversation: ConversationResponse::new(conversation_id, &session.snapshot()),
    }))
}

/// Discard a conversation. A reply still in flight finishes against the detached session.
#[utoipa::path(
    delete,
    path = "/chat/{conversation_id}",
    params(("conversation_id" = Uuid, Path, description = "The conversation id.")),
    responses(
        (status = 204, description = "Conversation removed"),
        (status = 404, description = "No such conversation")
    )
)]
pub async fn delete_conversation_handler(
    State(app_state): State<Arc<AppState>>,
    Path(conversation_id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    app_state
        .conversations
        .write()
        .await
        .remove(&conversation_id)
        .ok_or_else(|| conversation_not_found(conversation_id))?;
    info!("Conversation {} removed.", conversation_id);
    Ok(StatusCode::NO_CONTENT)
}
