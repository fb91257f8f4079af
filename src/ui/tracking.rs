//! Fire-and-forget analytics events posted to `/api/track`

use serde_json::Value;

use crate::core::forms::TrackRequest;

pub const TRACK_ENDPOINT: &str = "/api/track";

/// Builds the request body for an event
pub fn track_request(event: &str, properties: Option<Value>) -> TrackRequest {
    TrackRequest {
        event: event.to_string(),
        properties,
        user_id: None,
        session_id: None,
    }
}

/// Sends an event in the background. Failures are logged, never shown.
pub fn track(event: &str, properties: Option<Value>) {
    let request = track_request(event, properties);

    if let Err(rejection) = request.validate() {
        leptos::logging::warn!("Not tracking invalid event: {}", rejection.message);
        return;
    }

    #[cfg(not(feature = "ssr"))]
    leptos::task::spawn_local(async move {
        use gloo_net::http::Request;

        let sent = match Request::post(TRACK_ENDPOINT)
            .header("Content-Type", "application/json")
            .json(&request)
        {
            Ok(req) => req.send().await,
            Err(err) => Err(err),
        };

        match sent {
            Ok(response) if response.ok() => {}
            Ok(response) => {
                leptos::logging::warn!("Tracking {} rejected: {}", request.event, response.status())
            }
            Err(err) => leptos::logging::error!("Tracking {} failed: {}", request.event, err),
        }
    });

    #[cfg(feature = "ssr")]
    let _ = request;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_track_request_is_valid() {
        let request = track_request("contact_form_submitted", Some(json!({ "page": "/contact" })));

        let event = request.validate().unwrap();
        assert_eq!(event.event, "contact_form_submitted");
    }

    #[test]
    fn test_blank_event_is_rejected() {
        assert!(track_request("  ", None).validate().is_err());
    }
}
