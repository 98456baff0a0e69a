use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use scheda_server::{Config, EXTRACT_EXERCISES_PATH, HEALTH_PATH, Health, router};
use scheda_wire::{ErrorResponse, Exercise, ExerciseSet, ExtractResponse};
use serde::de::DeserializeOwned;
use tower::ServiceExt;

fn app() -> Router {
    router(&Config::default()).unwrap()
}

fn post(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(EXTRACT_EXERCISES_PATH)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

async fn send<T: DeserializeOwned>(app: Router, request: Request<Body>) -> (StatusCode, T) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

fn set(set_number: u32, reps: u32, target_weight: Option<f64>) -> ExerciseSet {
    ExerciseSet {
        set_number,
        reps,
        target_weight,
        notes: None,
    }
}

#[tokio::test]
async fn test_extract_exercises() {
    let text = "Panca piana 4x8 recupero 90s\nCorsa 20 min\n\nStacco da terra 1x10, 1x8, 1x6 - 80kg";
    let (status, response): (_, ExtractResponse) =
        send(app(), post(serde_json::json!({ "text": text }).to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        response.exercises,
        vec![
            Exercise {
                name: "Panca piana".to_string(),
                machine: String::new(),
                sets: (1..=4).map(|n| set(n, 8, None)).collect(),
                rest_time: 90,
                notes: String::new(),
                day: None,
            },
            Exercise {
                name: "Corsa".to_string(),
                machine: String::new(),
                sets: vec![ExerciseSet {
                    notes: Some("min".to_string()),
                    ..set(1, 20, None)
                }],
                rest_time: 120,
                notes: "Cardio".to_string(),
                day: None,
            },
            Exercise {
                name: "Stacco da terra".to_string(),
                machine: String::new(),
                sets: vec![
                    set(1, 10, Some(80.0)),
                    set(2, 8, Some(80.0)),
                    set(3, 6, Some(80.0)),
                ],
                rest_time: 60,
                notes: String::new(),
                day: None,
            },
        ]
    );
}

#[tokio::test]
async fn test_extract_exercises_nothing_found() {
    let (status, response): (_, ExtractResponse) =
        send(app(), post(r####"{"text": "###???\n  \nab"}"####)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(response.exercises.is_empty());
}

#[rstest]
#[case::missing_text(r"{}", "Testo mancante")]
#[case::null_text(r#"{"text": null}"#, "Testo mancante")]
#[case::empty_text(r#"{"text": ""}"#, "Testo mancante")]
#[case::not_json("Squat 3x10", "Corpo della richiesta non valido")]
#[case::empty_body("", "Corpo della richiesta non valido")]
#[case::wrong_type(r#"{"text": 42}"#, "Corpo della richiesta non valido")]
#[case::not_an_object(r#"["Squat 3x10"]"#, "Corpo della richiesta non valido")]
#[tokio::test]
async fn test_extract_exercises_bad_request(#[case] body: &'static str, #[case] error: &str) {
    let (status, response): (_, ErrorResponse) = send(app(), post(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response, ErrorResponse::new(error));
}

#[tokio::test]
async fn test_extract_exercises_payload_too_large() {
    let app = router(&Config {
        max_body_bytes: 32,
        ..Config::default()
    })
    .unwrap();
    let body = serde_json::json!({ "text": "Squat 3x10\n".repeat(10) }).to_string();

    let response = app.oneshot(post(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_extract_exercises_method_not_allowed() {
    let request = Request::builder()
        .uri(EXTRACT_EXERCISES_PATH)
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_cors_preflight() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri(EXTRACT_EXERCISES_PATH)
        .header(header::ORIGIN, "https://app.example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(
            header::ACCESS_CONTROL_REQUEST_HEADERS,
            "authorization, content-type",
        )
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
    let allowed_headers = response.headers()[header::ACCESS_CONTROL_ALLOW_HEADERS]
        .to_str()
        .unwrap()
        .to_string();
    for name in ["authorization", "x-client-info", "apikey", "content-type"] {
        assert!(allowed_headers.contains(name), "{name} not in {allowed_headers}");
    }
}

#[tokio::test]
async fn test_cors_exact_origin() {
    let app = router(&Config {
        allowed_origin: "https://app.example.com".to_string(),
        ..Config::default()
    })
    .unwrap();
    let mut request = post(r#"{"text": "Squat 3x10"}"#);
    request.headers_mut().insert(
        header::ORIGIN,
        "https://app.example.com".parse().unwrap(),
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://app.example.com"
    );
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder()
        .uri(HEALTH_PATH)
        .body(Body::empty())
        .unwrap();

    let (status, health): (_, Health) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        health,
        Health {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    );
}
