//! Lead submission route
//!
//! The landing page posts lead forms to `POST /api/leads`. The handler
//! forwards the body once to the configured email endpoint and reports the
//! result as JSON. There are no retries: a failed delivery is reported to the
//! visitor, who may submit again.

use axum::{
    Json, Router,
    body::Body,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use std::sync::Arc;
use std::time::Duration;

use super::config::Config;
use super::lead::{ErrorDetail, ErrorResponse, LEAD_API_PATH, LeadError, LeadSubmission};

/// Upper bound on one upstream delivery, connect through response
pub const LEAD_FORWARD_TIMEOUT: Duration = Duration::from_secs(10);

/// Client builder used for forwarding; every request is bounded by `timeout`
pub fn lead_client_builder(timeout: Duration) -> reqwest::ClientBuilder {
    reqwest::Client::builder().timeout(timeout)
}

/// Shared state of the lead route
#[derive(Clone)]
pub struct LeadApiState {
    pub endpoint: String,
    pub client: reqwest::Client,
}

impl LeadApiState {
    pub fn new(endpoint: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            client,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let client = lead_client_builder(LEAD_FORWARD_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Falling back to default HTTP client: {}", e);
                reqwest::Client::new()
            });
        Self::new(config.lead_endpoint(), client)
    }
}

/// Create the lead router
pub fn lead_api_router(state: LeadApiState) -> Router {
    Router::new()
        .route(LEAD_API_PATH, post(submit_lead_handler))
        .with_state(Arc::new(state))
}

async fn submit_lead_handler(
    State(state): State<Arc<LeadApiState>>,
    Json(submission): Json<LeadSubmission>,
) -> Response {
    tracing::info!(
        plan = submission.plan.as_deref().unwrap_or("-"),
        has_name = submission.name.is_some(),
        has_mobile = submission.mobile.is_some(),
        "Lead submission received"
    );

    match forward_lead(&state.client, &state.endpoint, &submission).await {
        Ok(()) => {
            tracing::info!("Lead delivered to email endpoint");
            (StatusCode::OK, Json(serde_json::json!({ "ok": true }))).into_response()
        }
        Err(e) => {
            tracing::warn!("Lead delivery failed: {}", e);
            error_response(StatusCode::BAD_GATEWAY, &e.to_string())
        }
    }
}

/// Send one submission to the email endpoint. 2xx is success, anything else
/// is an error.
pub async fn forward_lead(
    client: &reqwest::Client,
    endpoint: &str,
    submission: &LeadSubmission,
) -> Result<(), LeadError> {
    let response = client
        .post(endpoint)
        .json(submission)
        .send()
        .await
        .map_err(|e| LeadError::Transport(e.to_string()))?;

    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    let body = response.text().await.unwrap_or_default();
    Err(LeadError::Rejected {
        status: status.as_u16(),
        message: upstream_error_message(&body)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string()),
    })
}

/// Pull a human readable message out of an upstream error body.
///
/// Accepts `{"error": "..."}`, `{"error": {"message": "..."}}` and
/// `{"message": "..."}`.
fn upstream_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let message = match value.get("error") {
        Some(serde_json::Value::String(s)) => Some(s.as_str()),
        Some(obj) => obj.get("message").and_then(|m| m.as_str()),
        None => value.get("message").and_then(|m| m.as_str()),
    };
    message.map(str::to_string)
}

fn error_response(status: StatusCode, message: &str) -> Response {
    let error = ErrorResponse {
        error: ErrorDetail {
            message: message.to_string(),
            code: status.as_u16(),
        },
    };

    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_string(&error).unwrap_or_default()))
        .unwrap_or_else(|_| status.into_response())
}
