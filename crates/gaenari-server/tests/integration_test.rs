//! End-to-end tests for the favorites HTTP API.
//!
//! Tests exercise the full stack: HTTP request -> axum router -> handler ->
//! FavoriteService -> store -> HTTP response. Each test builds a fresh
//! in-memory AppState and sends requests with `tower::ServiceExt::oneshot`
//! without starting a network server.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use gaenari_core::{MemberId, NewIntervalRange, NewProgram, ProgramType};
use gaenari_server::router::build_router;
use gaenari_server::state::AppState;

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

async fn send(
    app: &Router,
    method: &str,
    path: &str,
    member: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(member) = member {
        builder = builder.header("User-Info", member);
    }
    let response = app
        .clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap_or(json!(null));
    (status, json)
}

fn distance(member: &str, target: f64) -> NewProgram {
    NewProgram {
        member_id: MemberId::new(member),
        title: "morning 5k".into(),
        program_type: ProgramType::Distance,
        target_value: target,
        set_count: 1,
        ranges: vec![],
    }
}

fn interval(member: &str) -> NewProgram {
    NewProgram {
        member_id: MemberId::new(member),
        title: "pyramid".into(),
        program_type: ProgramType::Interval,
        target_value: 0.0,
        set_count: 3,
        ranges: vec![
            NewIntervalRange {
                is_running: true,
                time: 30,
                speed: 12.0,
            },
            NewIntervalRange {
                is_running: false,
                time: 60,
                speed: 5.0,
            },
        ],
    }
}

/// Builds an app with the given programs stored; returns their ids in order.
async fn seeded_app(programs: &[NewProgram]) -> (Router, Vec<i64>) {
    let state = AppState::in_memory();
    let mut ids = Vec::new();
    {
        let mut service = state.service.lock().await;
        for program in programs {
            ids.push(service.create_program(program).unwrap().id.0);
        }
    }
    (build_router(state), ids)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_is_ok() {
    let (app, _) = seeded_app(&[]).await;
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn empty_favorites_returns_empty_list() {
    let (app, _) = seeded_app(&[distance("m1", 5.0)]).await;
    let (status, body) = send(&app, "GET", "/program/favorite", Some("m1")).await;
    assert_eq!(status, StatusCode::OK, "{body:?}");
    assert_eq!(body["success"], true);
    assert_eq!(body["code"], "FAVORITE_PROGRAM_LIST_FETCHED");
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn register_then_list_includes_program_once() {
    let (app, ids) = seeded_app(&[distance("m1", 5.0), interval("m1")]).await;

    let path = format!("/program/favorite/{}", ids[1]);
    let (status, body) = send(&app, "PUT", &path, Some("m1")).await;
    assert_eq!(status, StatusCode::OK, "{body:?}");
    assert_eq!(body["code"], "FAVORITE_PROGRAM_UPDATED");
    assert_eq!(body["data"], true);

    // Registering twice is harmless.
    send(&app, "PUT", &path, Some("m1")).await;

    let (_, body) = send(&app, "GET", "/program/favorite", Some("m1")).await;
    let lists = body["data"].as_array().unwrap();
    assert_eq!(lists.len(), 1);
    let programs = lists[0]["programs"].as_array().unwrap();
    assert_eq!(programs.len(), 1);

    let program = &programs[0];
    assert_eq!(program["id"], ids[1]);
    assert_eq!(program["title"], "pyramid");
    assert_eq!(program["usageCount"], 0);
    assert_eq!(program["type"], "I");
    assert_eq!(program["program"]["duration"], 270);
    assert_eq!(program["program"]["setCount"], 3);
    assert_eq!(program["program"]["rangeCount"], 2);
    assert_eq!(program["program"]["ranges"][0]["time"], 30);
    assert_eq!(program["program"]["ranges"][0]["isRunning"], true);
    assert_eq!(program["program"]["ranges"][1]["time"], 60);
}

#[tokio::test]
async fn distance_program_projects_target_value() {
    let (app, ids) = seeded_app(&[distance("m1", 7.5)]).await;
    send(&app, "PUT", &format!("/program/favorite/{}", ids[0]), Some("m1")).await;

    let (_, body) = send(&app, "GET", "/program/favorite", Some("m1")).await;
    let program = &body["data"][0]["programs"][0];
    assert_eq!(program["type"], "D");
    assert_eq!(program["program"], json!({ "targetValue": 7.5 }));
}

#[tokio::test]
async fn clear_removes_program_from_list() {
    let (app, ids) = seeded_app(&[distance("m1", 5.0), distance("m1", 10.0)]).await;
    for id in &ids {
        send(&app, "PUT", &format!("/program/favorite/{id}"), Some("m1")).await;
    }

    let path = format!("/program/favorite/{}", ids[0]);
    let (status, body) = send(&app, "DELETE", &path, Some("m1")).await;
    assert_eq!(status, StatusCode::OK, "{body:?}");
    assert_eq!(body["code"], "FAVORITE_PROGRAM_DELETED");
    assert_eq!(body["data"], true);

    let (_, body) = send(&app, "GET", "/program/favorite", Some("m1")).await;
    let programs = body["data"][0]["programs"].as_array().unwrap();
    assert_eq!(programs.len(), 1);
    assert_eq!(programs[0]["id"], ids[1]);
}

#[tokio::test]
async fn register_missing_program_is_not_found() {
    let (app, _) = seeded_app(&[]).await;
    let (status, body) = send(&app, "PUT", "/program/favorite/99", Some("m1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["status"], 404);
    assert_eq!(body["code"], "FAVORITE_CREATE_FAILED");
}

#[tokio::test]
async fn clear_missing_program_is_not_found() {
    let (app, _) = seeded_app(&[]).await;
    let (status, body) = send(&app, "DELETE", "/program/favorite/99", Some("m1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "FAVORITE_DELETE_FAILED");
}

#[tokio::test]
async fn missing_user_info_is_bad_request() {
    let (app, _) = seeded_app(&[]).await;
    let (status, body) = send(&app, "GET", "/program/favorite", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MISSING_USER_INFO");

    let (status, _) = send(&app, "GET", "/program/favorite", Some("  ")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_numeric_program_id_is_rejected() {
    let (app, _) = seeded_app(&[]).await;
    for method in ["PUT", "DELETE"] {
        let (status, body) = send(&app, method, "/program/favorite/abc", Some("m1")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["status"], 400);
        assert_eq!(body["code"], "BAD_REQUEST");
        assert!(body["message"].as_str().unwrap().contains("abc"));
    }
}

#[tokio::test]
async fn favorites_are_per_member() {
    let (app, ids) = seeded_app(&[distance("m1", 5.0), distance("m2", 5.0)]).await;
    send(&app, "PUT", &format!("/program/favorite/{}", ids[1]), Some("m2")).await;

    let (_, body) = send(&app, "GET", "/program/favorite", Some("m1")).await;
    assert_eq!(body["data"], json!([]));
    let (_, body) = send(&app, "GET", "/program/favorite", Some("m2")).await;
    assert_eq!(body["data"][0]["programs"][0]["id"], ids[1]);
}

#[tokio::test]
async fn cannot_toggle_another_members_program() {
    let (app, ids) = seeded_app(&[distance("m2", 5.0)]).await;
    let path = format!("/program/favorite/{}", ids[0]);

    let (status, body) = send(&app, "PUT", &path, Some("m1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "FAVORITE_CREATE_FAILED");

    let (_, body) = send(&app, "GET", "/program/favorite", Some("m2")).await;
    assert_eq!(body["data"], json!([]));

    send(&app, "PUT", &path, Some("m2")).await;
    let (status, body) = send(&app, "DELETE", &path, Some("m1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "FAVORITE_DELETE_FAILED");

    let (_, body) = send(&app, "GET", "/program/favorite", Some("m2")).await;
    assert_eq!(body["data"][0]["programs"][0]["id"], ids[0]);
}

#[tokio::test]
async fn unknown_program_type_fails_listing() {
    let state = AppState::in_memory();
    {
        let mut service = state.service.lock().await;
        let mut program = service.create_program(&distance("m1", 5.0)).unwrap();
        program.type_code = "Q".into();
        program.update_is_favorite(true);
        service.save_program(&program).unwrap();
    }
    let app = build_router(state);

    let (status, body) = send(&app, "GET", "/program/favorite", Some("m1")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "UNEXPECTED_PROGRAM_TYPE");
    assert!(body.get("data").is_none());
}
