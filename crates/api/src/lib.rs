mod rate_limit;

use std::env;
use std::sync::Arc;

use anyhow::Result;
use askbot_agents::{QueryError, SupportAgent};
use askbot_core::QueryInput;
use askbot_ml::SupportMlStack;
use askbot_observability::AppMetrics;
use axum::extract::{Json, State};
use axum::http::{HeaderMap, Request, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{body::Body, Router};
use serde::Serialize;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::rate_limit::IpRateLimiter;

const MAX_BODY_BYTES: usize = 16 * 1024;
const RATE_LIMIT_CAPACITY: u32 = 30;
const RATE_LIMIT_REFILL_PER_SEC: f64 = 0.5;

#[derive(Clone)]
pub struct ApiState {
    pub agent: Arc<SupportAgent>,
    pub metrics: Arc<AppMetrics>,
    pub api_key: String,
    pub limiter: IpRateLimiter,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp_utc: String,
    metrics: askbot_observability::MetricsSnapshot,
    supported_locales: [&'static str; 2],
}

pub fn build_app() -> Result<Router> {
    let metrics = AppMetrics::shared();
    let ml_stack = SupportMlStack::load_default();
    let agent = Arc::new(SupportAgent::new(ml_stack, metrics.clone()));

    let api_key = env::var("ASKBOT_API_KEY").unwrap_or_else(|_| "dev-askbot-key".to_string());

    let state = ApiState {
        agent,
        metrics,
        api_key,
        limiter: IpRateLimiter::new(RATE_LIMIT_CAPACITY, RATE_LIMIT_REFILL_PER_SEC),
    };

    let app = Router::new()
        .route("/health", get(health))
        .route("/v1/respond", post(respond_query))
        .layer(middleware::from_fn_with_state(state.clone(), guard))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .with_state(state);

    Ok(app)
}

/// API-key and rate-limit gate. `/health` stays public.
async fn guard(
    State(state): State<ApiState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if request.uri().path() == "/health" {
        return next.run(request).await;
    }

    let headers = request.headers();
    if !key_matches(headers, &state.api_key) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "missing or invalid x-api-key" })),
        )
            .into_response();
    }

    let client = client_key(headers);
    if !state.limiter.allow(&client) {
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({ "error": "rate limit exceeded" })),
        )
            .into_response();
    }

    next.run(request).await
}

fn key_matches(headers: &HeaderMap, expected: &str) -> bool {
    headers
        .get("x-api-key")
        .and_then(|value| value.to_str().ok())
        .map(|value| value == expected)
        .unwrap_or(false)
}

fn client_key(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|ip| ip.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

async fn health(State(state): State<ApiState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp_utc: chrono::Utc::now().to_rfc3339(),
        metrics: state.metrics.snapshot(),
        supported_locales: ["en", "hi"],
    })
}

async fn respond_query(State(state): State<ApiState>, Json(input): Json<QueryInput>) -> Response {
    match state.agent.handle_query(input) {
        Ok(reply) => (StatusCode::OK, Json(reply)).into_response(),
        Err(QueryError::Invalid(err)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "warning": "Please fill in all fields before submitting.",
                "missing_fields": err.fields,
            })),
        )
            .into_response(),
        Err(err @ QueryError::EmotionModel(_)) => {
            tracing::error!(error = %err, "emotion model failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response()
        }
    }
}
