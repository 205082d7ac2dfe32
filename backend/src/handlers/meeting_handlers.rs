use std::sync::Arc;
use axum::{
    Json,
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
};

use crate::{
    api::resend::OutgoingEmail,
    error::{api_error, ApiError},
    handlers::meeting_dtos::{MeetingRequest, MeetingResponse},
    utils::{email_templates, meeting_link::generate_meeting_link},
    AppState,
};

pub async fn send_meeting_confirmation(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<MeetingRequest>, JsonRejection>,
) -> Result<Json<MeetingResponse>, ApiError> {
    // Malformed JSON, wrong content type or wrong field types
    let Json(meeting_req) = payload.map_err(|rejection| {
        tracing::warn!("Rejected meeting request body: {}", rejection.body_text());
        api_error(StatusCode::BAD_REQUEST, "Invalid request body.")
    })?;
    let meeting_req = meeting_req.trimmed();
    if let Err(reason) = meeting_req.validate() {
        return Err(api_error(StatusCode::BAD_REQUEST, reason));
    }

    let limiter_key = meeting_req.email.to_lowercase();
    if state.meeting_limiter.check_key(&limiter_key).is_err() {
        tracing::warn!("Rate limit exceeded for meeting request: [redacted email]");
        return Err(api_error(
            StatusCode::TOO_MANY_REQUESTS,
            "Too many meeting requests. Please try again later.",
        ));
    }

    let meeting_link = generate_meeting_link(&state.config.meeting_link_template);
    let email = OutgoingEmail {
        from: state.config.mail_from.clone(),
        to: vec![meeting_req.email.clone()],
        subject: email_templates::MEETING_SUBJECT.to_string(),
        html: email_templates::meeting_confirmation_html(
            &meeting_req.name,
            &meeting_req.time_slot,
            &meeting_link,
        ),
    };

    if let Err(e) = state.mailer.send(email).await {
        tracing::error!("Error in send-meeting-confirmation: {}", e);
        return Err(api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to send confirmation email",
        ));
    }

    tracing::info!("Meeting confirmation sent for slot {}", meeting_req.time_slot);
    Ok(Json(MeetingResponse {
        success: true,
        meeting_link,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::resend::{MailError, MockConfirmationMailer};
    use crate::config::tests::config_from;
    use axum::{body::Body, http::Request, Router};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn state_with(mailer: MockConfirmationMailer) -> Arc<AppState> {
        let config = config_from(&[
            ("RESEND_API_KEY", "re_test"),
            ("MEETING_LINK_TEMPLATE", "https://meet.google.com/your-meeting-room"),
        ])
        .unwrap();
        Arc::new(AppState::new(config, Arc::new(mailer)))
    }

    fn router_with(mailer: MockConfirmationMailer) -> Router {
        crate::app(state_with(mailer))
    }

    fn raw_meeting_request(content_type: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/meeting-confirmation")
            .header("content-type", content_type)
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn meeting_request(body: Value) -> Request<Body> {
        raw_meeting_request("application/json", &body.to_string())
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn sends_confirmation_and_returns_link() {
        let mut mailer = MockConfirmationMailer::new();
        mailer
            .expect_send()
            .withf(|email| {
                email.to == vec!["asha@example.com".to_string()]
                    && email.from == "FrameState <onboarding@resend.dev>"
                    && email.subject == email_templates::MEETING_SUBJECT
                    && email.html.contains("Hi Asha,")
                    && email.html.contains("Afternoon (12:00 PM - 5:00 PM)")
            })
            .times(1)
            .returning(|_| Box::pin(async { Ok::<(), MailError>(()) }));

        let response = router_with(mailer)
            .oneshot(meeting_request(json!({
                "name": " Asha ",
                "email": "asha@example.com",
                "timeSlot": "Afternoon (12:00 PM - 5:00 PM)",
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"success": true, "meetingLink": "https://meet.google.com/your-meeting-room"})
        );
    }

    #[tokio::test]
    async fn missing_fields_are_rejected_before_sending() {
        let mut mailer = MockConfirmationMailer::new();
        mailer.expect_send().never();

        let response = router_with(mailer)
            .oneshot(meeting_request(json!({"name": "Asha", "email": "asha@example.com"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({"error": "Please fill in all required fields."}));
    }

    #[tokio::test]
    async fn delivery_failure_is_a_generic_500() {
        let mut mailer = MockConfirmationMailer::new();
        mailer.expect_send().times(1).returning(|_| {
            Box::pin(async {
                Err::<(), _>(MailError::Rejected {
                    status: 403,
                    body: "{\"message\":\"API key is invalid\"}".to_string(),
                })
            })
        });

        let response = router_with(mailer)
            .oneshot(meeting_request(json!({
                "name": "Asha",
                "email": "asha@example.com",
                "timeSlot": "Morning (9:00 AM - 12:00 PM)",
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body, json!({"error": "Failed to send confirmation email"}));
    }

    #[tokio::test]
    async fn repeated_requests_for_one_address_are_limited() {
        let mut mailer = MockConfirmationMailer::new();
        mailer
            .expect_send()
            .times(3)
            .returning(|_| Box::pin(async { Ok::<(), MailError>(()) }));
        let router = router_with(mailer);

        for attempt in 0..4 {
            // Case differences must not dodge the limiter
            let email = if attempt % 2 == 0 { "asha@example.com" } else { "ASHA@example.com" };
            let response = router
                .clone()
                .oneshot(meeting_request(json!({
                    "name": "Asha",
                    "email": email,
                    "timeSlot": "Evening (5:00 PM - 8:00 PM)",
                })))
                .await
                .unwrap();
            let expected = if attempt < 3 { StatusCode::OK } else { StatusCode::TOO_MANY_REQUESTS };
            assert_eq!(response.status(), expected, "attempt {attempt}");
        }
    }

    #[tokio::test]
    async fn malformed_json_gets_a_json_error() {
        let mut mailer = MockConfirmationMailer::new();
        mailer.expect_send().never();

        let response = router_with(mailer)
            .oneshot(raw_meeting_request("application/json", "{not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({"error": "Invalid request body."}));
    }

    #[tokio::test]
    async fn wrong_content_type_gets_a_json_error() {
        let mut mailer = MockConfirmationMailer::new();
        mailer.expect_send().never();

        let body = json!({
            "name": "Asha",
            "email": "asha@example.com",
            "timeSlot": "Morning (9:00 AM - 12:00 PM)",
        });
        let response = router_with(mailer)
            .oneshot(raw_meeting_request("text/plain", &body.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({"error": "Invalid request body."}));
    }

    #[tokio::test]
    async fn pruning_keeps_active_limits() {
        let mut mailer = MockConfirmationMailer::new();
        mailer
            .expect_send()
            .times(3)
            .returning(|_| Box::pin(async { Ok::<(), MailError>(()) }));
        let state = state_with(mailer);
        let router = crate::app(state.clone());
        let request = || {
            meeting_request(json!({
                "name": "Asha",
                "email": "asha@example.com",
                "timeSlot": "Evening (5:00 PM - 8:00 PM)",
            }))
        };

        for _ in 0..3 {
            let response = router.clone().oneshot(request()).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }
        assert_eq!(state.prune_rate_limits(), 1);

        let response = router.oneshot(request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[tokio::test]
    async fn health_check_answers() {
        let response = router_with(MockConfirmationMailer::new())
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"OK");
    }
}
