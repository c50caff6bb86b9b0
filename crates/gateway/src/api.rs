//! HTTP handlers for the chatbot API.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::Json;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info, warn};

use crate::SharedState;

const MESSAGE_REQUIRED: &str = "Message is required";
const MODEL_FAILURE: &str = "Error contacting AI";

/// Body of `POST /api/chatbot`.
///
/// `message` stays untyped so a non-string value is reported the same way
/// as a missing one.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<Value>,
}

impl ChatRequest {
    /// The trimmed question, if one was supplied.
    ///
    /// Whitespace-only text counts as absent, which is stricter than a plain
    /// emptiness check: `"   "` never reaches the model.
    fn question(&self) -> Option<&str> {
        match &self.message {
            Some(Value::String(text)) => {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then_some(trimmed)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, message: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

/// POST /api/chatbot: answer one question from the alumni data.
pub async fn chatbot_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) = payload.map_err(reject_body)?;

    let Some(question) = request.question() else {
        return Err(api_error(StatusCode::BAD_REQUEST, MESSAGE_REQUIRED));
    };

    info!(question_len = question.len(), "Chatbot request");

    match state.assistant.answer(question).await {
        Ok(reply) => Ok(Json(ChatResponse { reply })),
        Err(e) => {
            error!(error = %e, "Chat pipeline failed");
            Err(api_error(StatusCode::INTERNAL_SERVER_ERROR, MODEL_FAILURE))
        }
    }
}

/// Unparseable JSON reads as a missing message; a body that could not be
/// read at all (such as one over the size limit) keeps its own status.
fn reject_body(rejection: JsonRejection) -> ApiError {
    warn!(status = %rejection.status(), reason = %rejection.body_text(), "Rejected chatbot request body");
    match rejection {
        JsonRejection::JsonSyntaxError(_)
        | JsonRejection::JsonDataError(_)
        | JsonRejection::MissingJsonContentType(_) => {
            api_error(StatusCode::BAD_REQUEST, MESSAGE_REQUIRED)
        }
        other => api_error(other.status(), &other.body_text()),
    }
}

/// GET /api/health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
