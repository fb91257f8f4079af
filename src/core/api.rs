//! REST API handlers for the site forms
//!
//! - POST /api/contact - Submit the contact form
//! - POST /api/track   - Record an analytics event
//!
//! Both endpoints answer with a [`FormState`] body. Accepted payloads are
//! only logged; nothing is persisted.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

use super::config::Config;
use super::forms::{
    CONTACT_FAILURE, CONTACT_SUCCESS, ContactRequest, FieldErrors, FormState, TRACK_SUCCESS,
    TrackRequest,
};

/// Headline for bodies that are not valid JSON for the endpoint
pub const MALFORMED_BODY: &str = "Malformed request body.";

// ============================================================================
// Application State
// ============================================================================

/// Shared state for the form endpoints
#[derive(Clone)]
pub struct ApiState {
    pub config: Arc<Config>,
}

impl ApiState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

impl Default for ApiState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

// ============================================================================
// Router
// ============================================================================

/// Create the form API router
///
/// Routes:
/// - `POST /api/contact` - contact form submission
/// - `POST /api/track` - analytics event
pub fn api_router(state: ApiState) -> Router {
    Router::new()
        .route("/api/contact", post(submit_contact))
        .route("/api/track", post(track_event))
        .with_state(state)
}

// ============================================================================
// API Handlers
// ============================================================================

/// Submit the contact form
///
/// POST /api/contact
///
/// Request body: ContactRequest
/// Response: FormState (200 OK, or 422 with field errors)
async fn submit_contact(
    State(state): State<ApiState>,
    body: Result<Json<ContactRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => return malformed(rejection),
    };

    match request.validate() {
        Ok(submission) => {
            let client_slug = submission
                .client_slug
                .as_deref()
                .unwrap_or(state.config.client_slug.as_str());

            tracing::info!(
                name = %submission.name,
                email = %submission.email,
                phone = ?submission.phone,
                client_slug = %client_slug,
                inbox = ?state.config.contact_email,
                message_chars = submission.message.chars().count(),
                "Contact form submitted"
            );

            (StatusCode::OK, Json(FormState::succeeded(CONTACT_SUCCESS))).into_response()
        }
        Err(errors) => {
            tracing::warn!(fields = ?errors.fields().collect::<Vec<_>>(), "Contact form rejected");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(FormState::failed(CONTACT_FAILURE, errors)),
            )
                .into_response()
        }
    }
}

/// Track an analytics event
///
/// POST /api/track
///
/// Request body: TrackRequest
/// Response: FormState (200 OK, or 422 with field errors)
async fn track_event(
    State(state): State<ApiState>,
    body: Result<Json<TrackRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => return malformed(rejection),
    };

    match request.validate() {
        Ok(event) => {
            if state.config.analytics_enabled {
                let event_id = Uuid::new_v4();
                let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

                tracing::info!(
                    event_id = %event_id,
                    timestamp = %timestamp,
                    event = %event.event,
                    properties = ?event.properties,
                    user_id = ?event.user_id,
                    session_id = ?event.session_id,
                    "Event tracked"
                );
            }

            (StatusCode::OK, Json(FormState::succeeded(TRACK_SUCCESS))).into_response()
        }
        Err(rejection) => {
            tracing::warn!(reason = rejection.message, "Tracking event rejected");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(FormState::from(rejection)),
            )
                .into_response()
        }
    }
}

fn malformed(rejection: JsonRejection) -> Response {
    tracing::warn!(error = %rejection.body_text(), "Rejected malformed form body");
    (
        rejection.status(),
        Json(FormState::failed(MALFORMED_BODY, FieldErrors::new())),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        http::Request,
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn create_test_app() -> Router {
        api_router(ApiState::default())
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, FormState) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(serde_json::to_string(&body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_contact_success() {
        let (status, state) = post_json(
            create_test_app(),
            "/api/contact",
            json!({
                "name": "Jane Doe",
                "email": "jane@example.com",
                "phone": "(555) 123-4567",
                "message": "I would like a full audit please.",
                "client_slug": "gruntworksagency"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(state.success);
        assert_eq!(state.message.as_deref(), Some(CONTACT_SUCCESS));
        assert!(state.errors.is_empty());
    }

    #[tokio::test]
    async fn test_contact_validation_failure() {
        let (status, state) = post_json(
            create_test_app(),
            "/api/contact",
            json!({ "name": "J", "email": "nope", "message": "hi" }),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(!state.success);
        assert_eq!(state.message.as_deref(), Some(CONTACT_FAILURE));
        assert_eq!(state.errors.get("name"), ["Name must be at least 2 characters"]);
        assert_eq!(state.errors.get("email"), ["Please enter a valid email address"]);
        assert_eq!(state.errors.get("message"), ["Message must be at least 10 characters"]);
    }

    #[tokio::test]
    async fn test_contact_empty_body_object() {
        let (status, state) = post_json(create_test_app(), "/api/contact", json!({})).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(state.errors.len(), 3);
    }

    #[tokio::test]
    async fn test_contact_malformed_json() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/contact")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_contact_requires_json_content_type() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/contact")
                    .body(Body::from("name=Jane"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn test_track_success() {
        let (status, state) = post_json(
            create_test_app(),
            "/api/track",
            json!({
                "event": "cta_click",
                "properties": { "location": "hero" },
                "session_id": "abc"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(state.message.as_deref(), Some(TRACK_SUCCESS));
    }

    #[tokio::test]
    async fn test_track_with_analytics_disabled_still_succeeds() {
        let app = api_router(ApiState::new(Config {
            analytics_enabled: false,
            ..Config::default()
        }));

        let (status, state) = post_json(app, "/api/track", json!({ "event": "page_view" })).await;

        assert_eq!(status, StatusCode::OK);
        assert!(state.success);
    }

    #[tokio::test]
    async fn test_track_invalid_properties_string() {
        let (status, state) = post_json(
            create_test_app(),
            "/api/track",
            json!({ "event": "cta_click", "properties": "{oops" }),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            state.message.as_deref(),
            Some("Invalid properties format. Failed to track event.")
        );
        assert_eq!(state.errors.get("properties"), ["Invalid JSON format for properties"]);
    }

    #[tokio::test]
    async fn test_track_missing_event() {
        let (status, state) = post_json(create_test_app(), "/api/track", json!({})).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            state.message.as_deref(),
            Some("Missing or invalid fields. Failed to track event.")
        );
        assert_eq!(state.errors.get("event"), ["Event name is required"]);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/unknown")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
