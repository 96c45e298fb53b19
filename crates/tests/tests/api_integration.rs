use askbot_api::build_app;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

const DEV_KEY: &str = "dev-askbot-key";

fn respond_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/v1/respond")
        .header("content-type", "application/json")
        .header("x-api-key", DEV_KEY)
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_is_public() {
    let app = build_app().expect("app should build");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let parsed = parse_body(response).await;
    assert_eq!(parsed["status"], "ok");
    assert!(parsed.get("metrics").is_some());
}

#[tokio::test]
async fn respond_requires_api_key() {
    let app = build_app().expect("app should build");

    let request = Request::builder()
        .method("POST")
        .uri("/v1/respond")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "name": "Asha",
                "text": "where is my order",
                "email": "asha@example.com",
                "order_id": "ORD-42"
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn angry_refund_in_forced_english() {
    let app = build_app().expect("app should build");

    let response = app
        .oneshot(respond_request(json!({
            "name": "Asha",
            "text": "I want a refund, this is so frustrating",
            "email": "asha@example.com",
            "order_id": "ORD-42",
            "lang_mode": "English"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let parsed = parse_body(response).await;

    assert_eq!(parsed["resolved"]["locale"], "en");
    assert_eq!(parsed["resolved"]["emotion"], "angry");
    assert_eq!(parsed["resolved"]["intent"], "refund");
    assert_eq!(
        parsed["resolved"]["reply_text"],
        "I'm really sorry you're facing this. Let me fix it immediately."
    );

    let message = parsed["message"].as_str().unwrap();
    assert!(message.contains("**Language Selected:** English 🇬🇧"));
    assert!(message.contains("**Hi Asha!**"));
    assert!(message.contains("Order ID: **ORD-42**"));
}

#[tokio::test]
async fn slang_query_detects_hindi_and_order_wins_over_cancel() {
    let app = build_app().expect("app should build");

    let response = app
        .oneshot(respond_request(json!({
            "name": "Ravi",
            "text": "chal nikal bhai order cancel karo",
            "email": "ravi@example.com",
            "order_id": "ORD-7",
            "lang_mode": "Auto Detect"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let parsed = parse_body(response).await;

    assert_eq!(parsed["resolved"]["locale"], "hi");
    // "order" is matched before "cancel" in the priority table.
    assert_eq!(parsed["resolved"]["intent"], "order");

    let message = parsed["message"].as_str().unwrap();
    assert!(message.contains("**Language Selected:** Hindi 🇮🇳"));
}

#[tokio::test]
async fn empty_query_is_rejected_with_a_warning() {
    let app = build_app().expect("app should build");

    let response = app
        .oneshot(respond_request(json!({
            "name": "Asha",
            "text": "",
            "email": "asha@example.com",
            "order_id": "ORD-42"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let parsed = parse_body(response).await;
    assert_eq!(
        parsed["warning"],
        "Please fill in all fields before submitting."
    );
    assert_eq!(parsed["missing_fields"], json!(["text"]));
}

#[tokio::test]
async fn identical_queries_produce_identical_replies() {
    let app = build_app().expect("app should build");

    let body = json!({
        "name": "Asha",
        "text": "my delivery is late and I am disappointed",
        "email": "asha@example.com",
        "order_id": "ORD-42"
    });

    let first = app
        .clone()
        .oneshot(respond_request(body.clone()))
        .await
        .unwrap();
    let second = app.oneshot(respond_request(body)).await.unwrap();

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::OK);

    let first = parse_body(first).await;
    let second = parse_body(second).await;

    assert_eq!(first["resolved"], second["resolved"]);
    assert_eq!(first["message"], second["message"]);
}
