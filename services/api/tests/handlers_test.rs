//! Handler-level tests against the bundled catalog, with the chat assistant unconfigured.

use api_lib::{
    adapters::parse_catalog,
    config::Config,
    web::{
        catalog, chat,
        protocol::{
            AnswerRequest, FilterQuery, NavigateRequest, PostMessageRequest, SelectRequest,
            ViewContentResponse,
        },
        quiz,
        state::AppState,
        view,
    },
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use dino_explorer_core::{chat::UNAVAILABLE_REPLY, ChatClient};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::Level;
use uuid::Uuid;

fn test_state() -> Arc<AppState> {
    let config = Config {
        bind_address: "127.0.0.1:0".parse().unwrap(),
        log_level: Level::DEBUG,
        catalog_path: PathBuf::from("data/catalog.json"),
        openai_api_key: None,
        chat_model: "gpt-4o-mini".to_string(),
        allowed_origin: "http://localhost:3000".to_string(),
    };
    let catalog = parse_catalog(include_str!("../data/catalog.json")).unwrap();
    Arc::new(AppState::new(
        Arc::new(config),
        catalog,
        ChatClient::unavailable(),
    ))
}

fn query(diet: Option<&str>, environment: Option<&str>) -> Query<FilterQuery> {
    Query(FilterQuery {
        diet: diet.map(str::to_string),
        environment: environment.map(str::to_string),
        ..FilterQuery::default()
    })
}

#[tokio::test]
async fn browse_filters_by_facets() {
    let state = test_state();

    let Json(all) = catalog::list_dinosaurs_handler(State(state.clone()), query(None, None))
        .await
        .unwrap();
    assert_eq!(all.len(), state.catalog.len());

    let Json(sky) =
        catalog::list_dinosaurs_handler(State(state.clone()), query(None, Some("Sky")))
            .await
            .unwrap();
    let ids: Vec<_> = sky.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["pteranodon"]);

    let Json(fish) =
        catalog::list_dinosaurs_handler(State(state.clone()), query(Some("Piscivore"), None))
            .await
            .unwrap();
    assert!(fish.iter().all(|d| d.diet == "Piscivore"));
}

#[tokio::test]
async fn unknown_facet_is_a_bad_request() {
    let state = test_state();
    let (status, _) = catalog::list_dinosaurs_handler(State(state), query(Some("Fungivore"), None))
        .await
        .unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_dinosaur_is_not_found() {
    let state = test_state();
    let (status, _) = catalog::get_dinosaur_handler(State(state), Path("barney".to_string()))
        .await
        .unwrap_err();
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn quiz_round_trip() {
    let state = test_state();
    let (status, Json(created)) = quiz::create_quiz_handler(State(state.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created.index, Some(0));
    assert!(created.correct_answer.is_none());
    let quiz_id = created.quiz_id;

    // q1: Stegosaurus is option 1.
    let Json(first) = quiz::answer_handler(
        State(state.clone()),
        Path(quiz_id),
        Json(AnswerRequest { option: 1 }),
    )
    .await
    .unwrap();
    assert!(first.accepted);
    assert_eq!(first.is_correct, Some(true));
    assert_eq!(first.quiz.score, 1);
    assert_eq!(first.quiz.correct_answer, Some(1));

    let Json(repeat) = quiz::answer_handler(
        State(state.clone()),
        Path(quiz_id),
        Json(AnswerRequest { option: 0 }),
    )
    .await
    .unwrap();
    assert!(!repeat.accepted);
    assert_eq!(repeat.quiz.selected, Some(1));
    assert_eq!(repeat.quiz.score, 1);

    let Json(next) = quiz::advance_handler(State(state.clone()), Path(quiz_id))
        .await
        .unwrap();
    assert_eq!(next.index, Some(1));
    assert!(!next.answered);

    let Json(reset) = quiz::restart_handler(State(state.clone()), Path(quiz_id))
        .await
        .unwrap();
    assert_eq!(reset.index, Some(0));
    assert_eq!(reset.score, 0);

    let (status, _) = quiz::get_quiz_handler(State(state), Path(Uuid::new_v4()))
        .await
        .unwrap_err();
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn chat_without_credential_replies_unavailable() {
    let state = test_state();
    let (_, Json(created)) = chat::create_conversation_handler(State(state.clone())).await;
    assert!(created.assistant_unavailable);
    assert_eq!(created.turns.len(), 1);
    let conversation_id = created.conversation_id;

    let Json(blank) = chat::post_message_handler(
        State(state.clone()),
        Path(conversation_id),
        Json(PostMessageRequest {
            text: "   ".to_string(),
        }),
    )
    .await
    .unwrap();
    assert!(!blank.accepted);
    assert_eq!(blank.conversation.turns.len(), 1);

    let Json(posted) = chat::post_message_handler(
        State(state.clone()),
        Path(conversation_id),
        Json(PostMessageRequest {
            text: "What did T-Rex eat?".to_string(),
        }),
    )
    .await
    .unwrap();
    assert!(posted.accepted);
    assert_eq!(posted.reply.unwrap().text, UNAVAILABLE_REPLY);
    assert!(!posted.conversation.pending);

    let roles: Vec<_> = posted
        .conversation
        .turns
        .iter()
        .map(|t| t.role.as_str())
        .collect();
    assert_eq!(roles, vec!["assistant", "user", "assistant"]);
}

#[tokio::test]
async fn detail_without_selection_renders_empty() {
    let state = test_state();
    let (_, Json(created)) = view::create_view_handler(State(state.clone())).await;
    assert_eq!(created.screen, "HOME");
    assert!(matches!(
        created.content,
        ViewContentResponse::Home { featured: Some(_) }
    ));
    let view_id = created.view_id;

    let Json(detail) = view::navigate_handler(
        State(state.clone()),
        Path(view_id),
        Json(NavigateRequest {
            screen: "DETAIL".to_string(),
        }),
    )
    .await
    .unwrap();
    assert!(matches!(detail.content, ViewContentResponse::Empty));

    let Json(selected) = view::select_handler(
        State(state.clone()),
        Path(view_id),
        Json(SelectRequest {
            dinosaur_id: "triceratops".to_string(),
        }),
    )
    .await
    .unwrap();
    assert_eq!(selected.screen, "DETAIL");
    match selected.content {
        ViewContentResponse::Detail { dinosaur } => {
            assert_eq!(dinosaur.id, "triceratops");
            let chart: Vec<_> = dinosaur
                .chart
                .iter()
                .map(|p| (p.subject.as_str(), p.value, p.full_mark))
                .collect();
            assert_eq!(
                chart,
                vec![
                    ("Intel", 4, 10),
                    ("Speed", 4, 10),
                    ("Attack", 7, 10),
                    ("Defense", 9, 10)
                ]
            );
        }
        other => panic!("unexpected content: {:?}", other),
    }

    let (status, _) = view::navigate_handler(
        State(state),
        Path(view_id),
        Json(NavigateRequest {
            screen: "SETTINGS".to_string(),
        }),
    )
    .await
    .unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn view_filters_apply_and_clear() {
    let state = test_state();
    let (_, Json(created)) = view::create_view_handler(State(state.clone())).await;
    let view_id = created.view_id;

    view::navigate_handler(
        State(state.clone()),
        Path(view_id),
        Json(NavigateRequest {
            screen: "BROWSE".to_string(),
        }),
    )
    .await
    .unwrap();

    let Json(filtered) = view::set_filters_handler(
        State(state.clone()),
        Path(view_id),
        Json(FilterQuery {
            era: Some("Jurassic".to_string()),
            ..FilterQuery::default()
        }),
    )
    .await
    .unwrap();
    match filtered.content {
        ViewContentResponse::Browse { results, filters } => {
            assert!(results.iter().all(|d| d.period.contains("Jurassic")));
            assert!(!results.is_empty());
            assert_eq!(filters.era.as_deref(), Some("Jurassic"));
        }
        other => panic!("unexpected content: {:?}", other),
    }

    let Json(cleared) = view::clear_filters_handler(State(state.clone()), Path(view_id))
        .await
        .unwrap();
    match cleared.content {
        ViewContentResponse::Browse { results, .. } => {
            assert_eq!(results.len(), state.catalog.len())
        }
        other => panic!("unexpected content: {:?}", other),
    }
}

#[tokio::test]
async fn deleted_sessions_are_gone() {
    let state = test_state();

    let (_, Json(created)) = quiz::create_quiz_handler(State(state.clone())).await;
    let quiz_id = created.quiz_id;
    let status = quiz::delete_quiz_handler(State(state.clone()), Path(quiz_id))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = quiz::get_quiz_handler(State(state.clone()), Path(quiz_id))
        .await
        .unwrap_err();
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = quiz::delete_quiz_handler(State(state.clone()), Path(quiz_id))
        .await
        .unwrap_err();
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, Json(created)) = chat::create_conversation_handler(State(state.clone())).await;
    let conversation_id = created.conversation_id;
    let status = chat::delete_conversation_handler(State(state.clone()), Path(conversation_id))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = chat::get_conversation_handler(State(state.clone()), Path(conversation_id))
        .await
        .unwrap_err();
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, Json(created)) = view::create_view_handler(State(state.clone())).await;
    let view_id = created.view_id;
    let status = view::delete_view_handler(State(state.clone()), Path(view_id))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = view::get_view_handler(State(state.clone()), Path(view_id))
        .await
        .unwrap_err();
    assert_eq!(status, StatusCode::NOT_FOUND);

    assert!(state.quizzes.lock().await.is_empty());
    assert!(state.conversations.read().await.is_empty());
    assert!(state.views.lock().await.is_empty());
}
