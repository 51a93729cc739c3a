//! Page state call-issuance tests
//!
//! Drive the async handlers against a local recording backend. These pin
//! how many calls each transition issues, the exact payloads on the wire,
//! and the no-rollback behavior when the backend fails.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use leptos::prelude::*;
use likeit_console_web::graphql::LikesClient;
use likeit_console_web::state::LikesPageState;
use likeit_console_web::types::{Like, LikeDraft, NotificationKind};
use rstest::rstest;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

/// In-process GraphQL backend that records every request body and answers
/// the three operations with canned data, or rejects everything.
#[derive(Clone)]
struct StubBackend {
    requests: Arc<Mutex<Vec<Value>>>,
    items: Value,
    fail: bool,
}

async fn graphql_stub(State(stub): State<StubBackend>, Json(body): Json<Value>) -> Json<Value> {
    stub.requests.lock().expect("request log").push(body.clone());

    if stub.fail {
        return Json(json!({
            "data": null,
            "errors": [{ "message": "backend rejected the operation" }],
        }));
    }

    let data = match body["operationName"].as_str().unwrap_or_default() {
        "ListLikes" => json!({ "listLikes": { "items": stub.items } }),
        "CreateLike" => {
            let mut created = body["variables"]["input"].clone();
            created["id"] = json!("backend-1");
            json!({ "createLike": created })
        }
        "DeleteLike" => json!({ "deleteLike": { "id": body["variables"]["input"]["id"] } }),
        _ => Value::Null,
    };
    Json(json!({ "data": data }))
}

async fn spawn_backend(items: Value, fail: bool) -> (LikesClient, Arc<Mutex<Vec<Value>>>) {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let stub = StubBackend {
        requests: requests.clone(),
        items,
        fail,
    };
    let router = Router::new()
        .route("/graphql", post(graphql_stub))
        .with_state(stub);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub backend");
    let endpoint = format!(
        "http://{}/graphql",
        listener.local_addr().expect("stub address")
    );
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve stub backend");
    });

    (LikesClient::new(endpoint), requests)
}

fn inception_draft() -> LikeDraft {
    LikeDraft {
        name: "Inception".to_string(),
        kind: "Movie".to_string(),
        description: "Dream heist".to_string(),
    }
}

fn confirmed(id: &str, name: &str) -> Like {
    Like {
        id: Some(id.to_string()),
        name: name.to_string(),
        kind: Some("Movie".to_string()),
        description: format!("{name} description"),
    }
}

#[rstest]
#[tokio::test]
async fn test_submit_with_missing_fields_issues_no_call() {
    // Given a draft missing its description
    let (client, requests) = spawn_backend(json!([]), false).await;
    let state = LikesPageState::new();
    state.draft.set(LikeDraft {
        name: "Inception".to_string(),
        kind: String::new(),
        description: String::new(),
    });

    // When the draft is submitted
    state.submit(client).await;

    // Then nothing reaches the backend, the list and draft are unchanged,
    // and the user gets a warning
    assert!(requests.lock().expect("request log").is_empty());
    assert!(state.likes.get_untracked().is_empty());
    assert_eq!(state.draft.get_untracked().name, "Inception");

    let notices = state.notifications.get_untracked();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NotificationKind::Warning);
}

#[rstest]
#[tokio::test]
async fn test_submit_issues_exactly_one_create_with_the_draft_as_input() {
    let (client, requests) = spawn_backend(json!([]), false).await;
    let state = LikesPageState::new();
    state.draft.set(inception_draft());

    state.submit(client).await;

    // Exactly one create call, carrying exactly the draft
    let requests = requests.lock().expect("request log");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0]["operationName"], "CreateLike");
    assert_eq!(
        requests[0]["variables"]["input"],
        json!({ "name": "Inception", "type": "Movie", "description": "Dream heist" })
    );

    // The optimistic entry is appended without an id and the draft resets
    let likes = state.likes.get_untracked();
    assert_eq!(likes.len(), 1);
    assert_eq!(likes[0].id, None);
    assert_eq!(likes[0].name, "Inception");
    assert_eq!(state.draft.get_untracked(), LikeDraft::default());
}

#[rstest]
#[tokio::test]
async fn test_failed_create_leaves_the_optimistic_entry_in_place() {
    let (client, requests) = spawn_backend(Value::Null, true).await;
    let state = LikesPageState::new();
    state.draft.set(inception_draft());

    state.submit(client).await;

    // One call went out and failed; no compensating transition runs
    assert_eq!(requests.lock().expect("request log").len(), 1);

    let likes = state.likes.get_untracked();
    assert_eq!(likes.len(), 1);
    assert!(likes[0].id.is_none() && likes[0].name == "Inception");
    assert_eq!(state.draft.get_untracked(), LikeDraft::default());

    let notices = state.notifications.get_untracked();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NotificationKind::Error);
}

#[rstest]
#[tokio::test]
async fn test_delete_issues_exactly_one_call_with_the_id() {
    let (client, requests) = spawn_backend(json!([]), false).await;
    let state = LikesPageState::new();
    state
        .likes
        .set(vec![confirmed("42", "Severance"), confirmed("7", "Alien")]);

    state.delete(client, confirmed("42", "Severance")).await;

    let requests = requests.lock().expect("request log");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0]["operationName"], "DeleteLike");
    assert_eq!(requests[0]["variables"], json!({ "input": { "id": "42" } }));

    // Local removal already happened, the other entry is untouched
    let likes = state.likes.get_untracked();
    assert_eq!(likes.len(), 1);
    assert_eq!(likes[0].id.as_deref(), Some("7"));
}

#[rstest]
#[tokio::test]
async fn test_deleting_an_unconfirmed_entry_is_local_only() {
    // Given an entry the backend never confirmed (no id yet)
    let (client, requests) = spawn_backend(json!([]), false).await;
    let state = LikesPageState::new();
    let unconfirmed = Like {
        id: None,
        name: "Dune".to_string(),
        kind: None,
        description: "Spice".to_string(),
    };
    state.likes.set(vec![unconfirmed.clone()]);

    state.delete(client, unconfirmed).await;

    // Nothing remote to delete: no call is issued
    assert!(requests.lock().expect("request log").is_empty());
    assert!(state.likes.get_untracked().is_empty());
}

#[rstest]
#[tokio::test]
async fn test_failed_delete_keeps_the_local_removal() {
    let (client, requests) = spawn_backend(Value::Null, true).await;
    let state = LikesPageState::new();
    state.likes.set(vec![confirmed("42", "Severance")]);

    state.delete(client, confirmed("42", "Severance")).await;

    // The entry stays removed; only a notice records the drift
    assert_eq!(requests.lock().expect("request log").len(), 1);
    assert!(state.likes.get_untracked().is_empty());

    let notices = state.notifications.get_untracked();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NotificationKind::Error);
}

#[rstest]
#[tokio::test]
async fn test_load_replaces_the_list_in_backend_order() {
    let items = json!([
        { "id": "a", "name": "Inception", "type": "Movie", "description": "Dream heist" },
        { "id": "b", "name": "Severance", "type": "TV Show", "description": "Work-life split" },
        { "id": "c", "name": "Alien", "description": "Space horror" },
    ]);
    let (client, requests) = spawn_backend(items, false).await;
    let state = LikesPageState::new();
    state.likes.set(vec![confirmed("stale", "Stale")]);

    state.load(client).await;

    {
        let requests = requests.lock().expect("request log");
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0]["operationName"], "ListLikes");
    }

    // Wholesale replacement, in the order the backend returned
    let ids: Vec<Option<String>> = state
        .likes
        .get_untracked()
        .iter()
        .map(|like| like.id.clone())
        .collect();
    assert_eq!(
        ids,
        vec![
            Some("a".to_string()),
            Some("b".to_string()),
            Some("c".to_string())
        ]
    );
    assert!(!state.is_loading.get_untracked());
}

#[rstest]
#[tokio::test]
async fn test_failed_load_surfaces_an_error_and_stops_loading() {
    let (client, _requests) = spawn_backend(Value::Null, true).await;
    let state = LikesPageState::new();

    state.load(client).await;

    assert!(state.likes.get_untracked().is_empty());
    assert!(!state.is_loading.get_untracked());

    let notices = state.notifications.get_untracked();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NotificationKind::Error);
}
