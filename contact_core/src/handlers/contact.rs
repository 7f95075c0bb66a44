//! Contact form submission handler

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, info};

use crate::{
    email::Delivery,
    error::Result,
    middleware::cors::preflight_headers,
    models::contact::{ContactResponse, ContactSubmission},
    validation::validate_body,
    AppState,
};

/// Body read failures, such as exceeding the body limit, answer like a parse failure.
pub async fn handle_contact_submit(
    State(state): State<AppState>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Response {
    match process_submission(&state, body).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn handle_contact_preflight() -> impl IntoResponse {
    (StatusCode::NO_CONTENT, preflight_headers())
}

async fn process_submission(
    state: &AppState,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<ContactResponse> {
    let body = body?;
    let payload: serde_json::Value = serde_json::from_slice(&body)?;
    let submission = validate_body(&payload)?;

    log_submission(&submission);
    notify(state, &submission).await;

    Ok(ContactResponse::received())
}

fn log_submission(submission: &ContactSubmission) {
    info!(
        name = %submission.name,
        email = %submission.email,
        company = ?submission.company,
        service = %submission.service,
        message = %submission.message,
        timestamp = %chrono::Utc::now().to_rfc3339(),
        "Contact form submission"
    );
}

/// Delivery problems are logged and never reach the caller.
async fn notify(state: &AppState, submission: &ContactSubmission) {
    match state.notifier.send_notification(submission).await {
        Ok(Delivery::Sent { id }) => {
            info!(email_id = ?id, "Email sent successfully");
        }
        Ok(Delivery::Skipped) => {}
        Err(err) => {
            error!(error = %err, "Email sending failed");
        }
    }
}
