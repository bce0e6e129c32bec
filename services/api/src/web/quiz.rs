//! services/api/src/web/quiz.rs
//!
//! Quiz session endpoints. Each session walks the catalog's questions in order.

use crate::web::{
    protocol::{AnswerRequest, AnswerResponse, QuizResponse},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use dino_explorer_core::QuizSession;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

fn quiz_not_found(quiz_id: Uuid) -> (StatusCode, String) {
    (
        StatusCode::NOT_FOUND,
        format!("Quiz session {} not found", quiz_id),
    )
}

/// Start a new quiz session.
#[utoipa::path(
    post,
    path = "/quiz",
    responses((status = 201, description = "Quiz started", body = QuizResponse))
)]
pub async fn create_quiz_handler(
    State(app_state): State<Arc<AppState>>,
) -> (StatusCode, Json<QuizResponse>) {
    let quiz_id = Uuid::new_v4();
    let quiz = QuizSession::new(app_state.catalog.question_set());
    let response = QuizResponse::new(quiz_id, &quiz);

    app_state.quizzes.lock().await.insert(quiz_id, quiz);
    info!("Quiz session {} started.", quiz_id);
    (StatusCode::CREATED, Json(response))
}

/// Current state of a quiz session.
#[utoipa::path(
    get,
    path = "/quiz/{quiz_id}",
    params(("quiz_id" = Uuid, Path, description = "The quiz session id.")),
    responses(
        (status = 200, description = "Quiz state", body = QuizResponse),
        (status = 404, description = "No such quiz session")
    )
)]
pub async fn get_quiz_handler(
    State(app_state): State<Arc<AppState>>,
    Path(quiz_id): Path<Uuid>,
) -> Result<Json<QuizResponse>, (StatusCode, String)> {
    let quizzes = app_state.quizzes.lock().await;
    let quiz = quizzes.get(&quiz_id).ok_or_else(|| quiz_not_found(quiz_id))?;
    Ok(Json(QuizResponse::new(quiz_id, quiz)))
}

/// Answer the current question. Repeat answers are ignored.
#[utoipa::path(
    post,
    path = "/quiz/{quiz_id}/answer",
    params(("quiz_id" = Uuid, Path, description = "The quiz session id.")),
    request_body = AnswerRequest,
    responses(
        (status = 200, description = "Answer recorded or ignored", body = AnswerResponse),
        (status = 404, description = "No such quiz session")
    )
)]
pub async fn answer_handler(
    State(app_state): State<Arc<AppState>>,
    Path(quiz_id): Path<Uuid>,
    Json(request): Json<AnswerRequest>,
) -> Result<Json<AnswerResponse>, (StatusCode, String)> {
    let mut quizzes = app_state.quizzes.lock().await;
    let quiz = quizzes
        .get_mut(&quiz_id)
        .ok_or_else(|| quiz_not_found(quiz_id))?;

    let feedback = quiz.select_answer(request.option);
    if feedback.is_none() {
        debug!("Quiz {}: answer {} ignored.", quiz_id, request.option);
    }
    Ok(Json(AnswerResponse::new(
        feedback,
        QuizResponse::new(quiz_id, quiz),
    )))
}

/// Move on from an answered question, completing the quiz after the last one.
#[utoipa::path(
    post,
    path = "/quiz/{quiz_id}/advance",
    params(("quiz_id" = Uuid, Path, description = "The quiz session id.")),
    responses(
        (status = 200, description = "Quiz state after advancing", body = QuizResponse),
        (status = 404, description = "No such quiz session")
    )
)]
pub async fn advance_handler(
    State(app_state): State<Arc<AppState>>,
    Path(quiz_id): Path<Uuid>,
) -> Result<Json<QuizResponse>, (StatusCode, String)> {
    let mut quizzes = app_state.quizzes.lock().await;
    let quiz = quizzes
        .get_mut(&quiz_id)
        .ok_or_else(|| quiz_not_found(quiz_id))?;

    if quiz.advance() && quiz.is_complete() {
        info!(
            "Quiz {} complete: {}/{}",
            quiz_id,
            quiz.score(),
            quiz.total_questions()
        );
    }
    Ok(Json(QuizResponse::new(quiz_id, quiz)))
}

/// Start the same quiz session over.
#[utoipa::path(
    post,
    path = "/quiz/{quiz_id}/restart",
    params(("quiz_id" = Uuid, Path, description = "The quiz session id.")),
    responses(
        (status = 200, description = "Quiz reset to the first question", body = QuizResponse),
        (status = 404, description = "No such quiz session")
    )
)]
pub async fn restart_handler(
    State(app_state): State<Arc<AppState>>,
    Path(quiz_id): Path<Uuid>,
) -> Result<Json<QuizResponse>, (StatusCode, String)> {
    let mut quizzes = app_state.quizzes.lock().await;
    let quiz = quizzes
        .get_mut(&quiz_id)
        .ok_or_else(|| quiz_not_found(quiz_id))?;

    quiz.restart();
    Ok(Json(QuizResponse::new(quiz_id, quiz)))
}

/// Discard a quiz session.
#[utoipa::path(
    delete,
    path = "/quiz/{quiz_id}",
    params(("quiz_id" = Uuid, Path, description = "The quiz session id.")),
    responses(
        (status = 204, description = "Quiz session removed"),
        (status = 404, description = "No such quiz session")
    )
)]
pub async fn delete_quiz_handler(
    State(app_state): State<Arc<AppState>>,
    Path(quiz_id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    app_state
        .quizzes
        .lock()
        .await
        .remove(&quiz_id)
        .ok_or_else(|| quiz_not_found(quiz_id))?;
    info!("Quiz session {} removed.", quiz_id);
    Ok(StatusCode::NO_CONTENT)
}
