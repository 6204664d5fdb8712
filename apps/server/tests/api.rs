use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use indexmap::IndexMap;
use mhs::domain::config::ApiConfig;
use mhs_server::Server;
use serde_json::Value;
use std::path::PathBuf;
use tower::ServiceExt;

fn app() -> Router {
    let mut cfg = ApiConfig::default();
    cfg.storage.static_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../public");

    Server::builder().config(cfg).build().expect("server should build").router()
}

async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri).body(Body::empty()).expect("request");
    let response = app.clone().oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

fn participants(body: &Value, activity: &str) -> Vec<String> {
    body[activity]["participants"]
        .as_array()
        .expect("participants array")
        .iter()
        .map(|p| p.as_str().expect("email").to_owned())
        .collect()
}

#[tokio::test]
async fn lists_seeded_activities_in_order() {
    let app = app();
    let request = Request::builder().uri("/activities").body(Body::empty()).expect("request");
    let response = app.oneshot(request).await.expect("router is infallible");
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let listing: IndexMap<String, Value> = serde_json::from_slice(&bytes).expect("json object");
    let names: Vec<&str> = listing.keys().map(String::as_str).collect();

    assert_eq!(
        names,
        [
            "Chess Club",
            "Programming Class",
            "Gym Class",
            "Basketball",
            "Swimming",
            "Art Club",
            "Drama Club",
            "Debate Team",
            "Math Club",
        ]
    );
}

#[tokio::test]
async fn activity_records_have_expected_fields() {
    let app = app();
    let (_, body) = send(&app, Method::GET, "/activities").await;

    for (name, activity) in body.as_object().expect("object") {
        assert!(activity["description"].is_string(), "{name} description");
        assert!(activity["schedule"].is_string(), "{name} schedule");
        assert!(activity["max_participants"].as_u64().is_some_and(|n| n > 0), "{name} capacity");
        assert!(activity["participants"].is_array(), "{name} participants");
    }
}

#[tokio::test]
async fn signup_adds_student_to_roster() {
    let app = app();
    let (status, body) =
        send(&app, Method::POST, "/activities/Basketball/signup?email=newstudent@mergington.edu")
            .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Signed up newstudent@mergington.edu for Basketball");

    let (_, listing) = send(&app, Method::GET, "/activities").await;
    assert_eq!(
        participants(&listing, "Basketball"),
        ["james@mergington.edu", "newstudent@mergington.edu"]
    );
}

#[tokio::test]
async fn duplicate_signup_is_rejected() {
    let app = app();
    let uri = "/activities/Swimming/signup?email=duplicate@mergington.edu";

    let (first, _) = send(&app, Method::POST, uri).await;
    assert_eq!(first, StatusCode::OK);

    let (status, body) = send(&app, Method::POST, uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().expect("detail").contains("already signed up"));

    let (_, listing) = send(&app, Method::GET, "/activities").await;
    let roster = participants(&listing, "Swimming");
    assert_eq!(roster.iter().filter(|p| *p == "duplicate@mergington.edu").count(), 1);
}

#[tokio::test]
async fn signup_for_unknown_activity_is_not_found() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/activities/Underwater%20Chess/signup?email=student@mergington.edu",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["detail"].as_str().expect("detail").contains("not found"));
}

#[tokio::test]
async fn signup_without_email_is_a_client_error() {
    let app = app();
    let (status, _) = send(&app, Method::POST, "/activities/Basketball/signup").await;

    assert!(status.is_client_error());

    let (_, listing) = send(&app, Method::GET, "/activities").await;
    assert_eq!(participants(&listing, "Basketball"), ["james@mergington.edu"]);
}

#[tokio::test]
async fn unregister_removes_student() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::DELETE,
        "/activities/Chess%20Club/unregister?email=michael@mergington.edu",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Unregistered michael@mergington.edu from Chess Club");

    let (_, listing) = send(&app, Method::GET, "/activities").await;
    assert_eq!(participants(&listing, "Chess Club"), ["daniel@mergington.edu"]);
}

#[tokio::test]
async fn unregister_absent_student_is_not_found() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::DELETE,
        "/activities/Art%20Club/unregister?email=notregistered%40mergington.edu",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["detail"].as_str().expect("detail").contains("not registered"));
}

#[tokio::test]
async fn unregister_from_unknown_activity_is_not_found() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::DELETE,
        "/activities/Underwater%20Chess/unregister?email=student@mergington.edu",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["detail"].as_str().expect("detail").contains("not found"));
}

#[tokio::test]
async fn signup_unregister_cycle_restores_roster() {
    let app = app();
    let (_, before) = send(&app, Method::GET, "/activities").await;
    let original = participants(&before, "Drama Club");
    let email = "cycle@mergington.edu";

    let (signed, _) =
        send(&app, Method::POST, &format!("/activities/Drama%20Club/signup?email={email}")).await;
    assert_eq!(signed, StatusCode::OK);

    let (_, during) = send(&app, Method::GET, "/activities").await;
    assert!(participants(&during, "Drama Club").contains(&email.to_owned()));

    let (left, _) =
        send(&app, Method::DELETE, &format!("/activities/Drama%20Club/unregister?email={email}"))
            .await;
    assert_eq!(left, StatusCode::OK);

    let (_, after) = send(&app, Method::GET, "/activities").await;
    assert_eq!(participants(&after, "Drama Club"), original);
}

#[tokio::test]
async fn student_can_join_several_activities() {
    let app = app();
    let email = "multi@mergington.edu";

    for activity in ["Math%20Club", "Debate%20Team", "Art%20Club"] {
        let (status, _) =
            send(&app, Method::POST, &format!("/activities/{activity}/signup?email={email}")).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, listing) = send(&app, Method::GET, "/activities").await;
    for activity in ["Math Club", "Debate Team", "Art Club"] {
        assert!(participants(&listing, activity).contains(&email.to_owned()), "{activity}");
    }
    assert!(!participants(&listing, "Chess Club").contains(&email.to_owned()));
}

#[tokio::test]
async fn servers_do_not_share_rosters() {
    let first = app();
    let second = app();

    let (status, _) =
        send(&first, Method::POST, "/activities/Gym%20Class/signup?email=solo@mergington.edu")
            .await;
    assert_eq!(status, StatusCode::OK);

    let (_, listing) = send(&second, Method::GET, "/activities").await;
    assert!(!participants(&listing, "Gym Class").contains(&"solo@mergington.edu".to_owned()));
}

#[tokio::test]
async fn root_redirects_to_front_end() {
    let app = app();
    let request = Request::builder().uri("/").body(Body::empty()).expect("request");
    let response = app.oneshot(request).await.expect("router is infallible");

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    let location = response.headers()[header::LOCATION].to_str().expect("ascii location");
    assert!(location.contains("/static/index.html"));
}

#[tokio::test]
async fn serves_front_end_assets() {
    let app = app();
    let request = Request::builder().uri("/static/index.html").body(Body::empty()).expect("request");
    let response = app.oneshot(request).await.expect("router is infallible");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn health_reports_up() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "up");
}
