#![allow(dead_code)]

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, Mutex},
};

use assert_cmd::Command;
use axum::{
    extract::{Path as UrlPath, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post, put},
    Json, Router,
};
use serde_json::{json, Value};

/// Requests seen by the fake backend: (path, authorization header, body).
pub type Seen = Arc<Mutex<Vec<(String, Option<String>, Value)>>>;

/// Command with --no-color, pointed at `api_url`, with its own identity file.
pub fn wk_cmd(api_url: &str, identity_file: &Path) -> Command {
    let mut cmd = Command::cargo_bin("wk").expect("Failed to find wk binary");
    cmd.env_remove("WEEKNIGHT_API_URL")
        .arg("--no-color")
        .arg("--api-url")
        .arg(api_url)
        .arg("--identity-file")
        .arg(identity_file);
    cmd
}

/// Writes a saved identity, as `wk login` would.
pub fn sign_in(identity_file: &Path) {
    std::fs::write(
        identity_file,
        r#"{ "user_id": "user-1", "access_token": "token-abc" }"#,
    )
    .expect("Failed to write identity file");
}

/// Paths of the recorded requests, in arrival order.
pub fn paths(seen: &Seen) -> Vec<String> {
    seen.lock().unwrap().iter().map(|(p, _, _)| p.clone()).collect()
}

/// Bodies posted to `path`.
pub fn bodies(seen: &Seen, path: &str) -> Vec<Value> {
    seen.lock()
        .unwrap()
        .iter()
        .filter(|(p, _, _)| p == path)
        .map(|(_, _, body)| body.clone())
        .collect()
}

fn auth(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

fn record(seen: &Seen, path: String, headers: &HeaderMap, body: Value) {
    seen.lock().unwrap().push((path, auth(headers), body));
}

fn leftover_json(servings: u64) -> Value {
    json!({
        "id": "leftover-1",
        "recipe_id": "recipe-1",
        "recipe_title": "Sheet Pan Chicken",
        "servings": servings,
        "safe_until": "2030-01-04T00:00:00Z",
        "is_consumed": false,
        "created_at": "2030-01-01T00:00:00Z"
    })
}

fn router(seen: Seen) -> Router {
    Router::new()
        .route(
            "/recipes/{id}",
            get(
                |UrlPath(id): UrlPath<String>, State(seen): State<Seen>, headers: HeaderMap| async move {
                    record(&seen, format!("/recipes/{id}"), &headers, Value::Null);
                    if id == "missing" {
                        return (
                            StatusCode::NOT_FOUND,
                            Json(json!({ "message": "Recipe not found" })),
                        );
                    }
                    (
                        StatusCode::OK,
                        Json(json!({ "ok": true, "data": {
                            "recipe_id": id,
                            "title": "Sheet Pan Chicken",
                            "servings": 4,
                            "time_total_min": 35
                        }})),
                    )
                },
            ),
        )
        .route(
            "/recipes/search",
            get(
                |State(seen): State<Seen>, headers: HeaderMap, Query(q): Query<HashMap<String, String>>| async move {
                    let empty = q.get("q").is_some_and(|q| q == "nothing");
                    record(&seen, "/recipes/search".to_string(), &headers, json!(q));
                    if empty {
                        return Json(json!({
                            "ok": true, "data": [], "total": 0, "page": 1, "limit": 20, "has_more": false
                        }));
                    }
                    Json(json!({
                        "ok": true,
                        "data": [{
                            "recipe_id": "recipe-3",
                            "slug": "air-fryer-wings",
                            "title": "Air Fryer Wings",
                            "time_total_min": 25,
                            "cookware_count": 1,
                            "servings": 4,
                            "kid_friendly": true,
                            "equipment": ["air_fryer"]
                        }],
                        "total": 21,
                        "page": 1,
                        "limit": 20,
                        "has_more": true
                    }))
                },
            ),
        )
        .route(
            "/recipes/{id}/timeline",
            get(|UrlPath(id): UrlPath<String>| async move {
                Json(json!({ "ok": true, "data": [
                    { "id": "c", "step_order": 3, "instruction": "Rest and slice", "timer_sec": 0 },
                    { "id": "a", "step_order": 1, "instruction": "Preheat oven to 425°F" },
                    { "id": "b", "step_order": 2, "instruction": format!("Roast {id}"), "timer_sec": 30 }
                ]}))
            }),
        )
        .route(
            "/api/flags",
            get(|| async {
                Json(json!({ "ok": true, "flags": { "emoji_feedback": true }, "source": "database" }))
            }),
        )
        .route(
            "/telemetry",
            post(
                |State(seen): State<Seen>, headers: HeaderMap, Json(body): Json<Value>| async move {
                    record(&seen, "/telemetry".to_string(), &headers, body);
                    Json(json!({ "ok": true }))
                },
            ),
        )
        .route(
            "/api/leftovers",
            post(
                |State(seen): State<Seen>, headers: HeaderMap, Json(body): Json<Value>| async move {
                    let servings = body["servings"].as_u64().unwrap_or(0);
                    record(&seen, "/api/leftovers".to_string(), &headers, body);
                    Json(json!({ "ok": true, "data": leftover_json(servings) }))
                },
            )
            .get(|State(seen): State<Seen>, headers: HeaderMap| async move {
                record(&seen, "/api/leftovers".to_string(), &headers, Value::Null);
                Json(json!({ "ok": true, "data": [leftover_json(2)], "total": 1 }))
            }),
        )
        .route(
            "/api/leftovers/{id}/consume",
            put(|UrlPath(id): UrlPath<String>| async move {
                if id != "leftover-1" {
                    return (
                        StatusCode::NOT_FOUND,
                        Json(json!({ "message": "Leftover not found" })),
                    );
                }
                let mut leftover = leftover_json(2);
                leftover["is_consumed"] = json!(true);
                (StatusCode::OK, Json(json!({ "ok": true, "data": leftover })))
            }),
        )
        .route(
            "/api/tonight",
            post(
                |State(seen): State<Seen>, headers: HeaderMap, Json(body): Json<Value>| async move {
                    record(&seen, "/api/tonight".to_string(), &headers, body);
                    Json(json!({
                        "ok": true,
                        "suggestions": [
                            {
                                "recipe_id": "recipe-1",
                                "title": "Sheet Pan Chicken",
                                "time_total_min": 35,
                                "cookware_count": 1,
                                "servings": 4,
                                "score": 0.92
                            },
                            {
                                "recipe_id": "recipe-2",
                                "title": "Tomato Egg Stir-fry",
                                "time_total_min": 15,
                                "cookware_count": 1,
                                "servings": 2,
                                "kid_friendly": true,
                                "score": 0.87
                            }
                        ],
                        "trace_id": "trace-1",
                        "decision_time_ms": 120
                    }))
                },
            ),
        )
        .route(
            "/api/groceries",
            post(|Json(body): Json<Value>| async move {
                let recipes = body["recipes"].as_array().map(Vec::len).unwrap_or(0);
                Json(json!({
                    "ok": true,
                    "grocery_list": [
                        { "aisle": "Produce", "items": [
                            { "name": "scallions", "qty": 2, "unit": "bunch", "aisle": "Produce" }
                        ]}
                    ],
                    "total_items": 1,
                    "recipes_included": recipes
                }))
            }),
        )
        .with_state(seen)
}

/// Starts the fake backend on its own thread. Returns its base URL.
pub fn spawn_server() -> (String, Seen) {
    let seen: Seen = Arc::new(Mutex::new(Vec::new()));
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    listener
        .set_nonblocking(true)
        .expect("Failed to set non-blocking");
    let url = format!("http://{}", listener.local_addr().unwrap());

    let app = router(Arc::clone(&seen));
    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("Failed to build runtime");
        runtime.block_on(async move {
            let listener =
                tokio::net::TcpListener::from_std(listener).expect("Failed to adopt listener");
            axum::serve(listener, app).await.expect("Server failed");
        });
    });

    (url, seen)
}
