use futures::future::{BoxFuture, FutureExt};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use url::Url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Message body as accepted by the Resend `/emails` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("request to email API failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("email API rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Delivers transactional mail. Handlers only see this trait so tests can swap
/// the HTTP client out.
#[cfg_attr(test, mockall::automock)]
pub trait ConfirmationMailer: Send + Sync {
    fn send(&self, email: OutgoingEmail) -> BoxFuture<'static, Result<(), MailError>>;
}

pub struct ResendMailer {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl ResendMailer {
    pub fn new(api_url: &Url, api_key: &str) -> Result<Self, MailError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            endpoint: emails_endpoint(api_url),
            api_key: api_key.to_string(),
        })
    }
}

fn emails_endpoint(api_url: &Url) -> String {
    format!("{}/emails", api_url.as_str().trim_end_matches('/'))
}

impl ConfirmationMailer for ResendMailer {
    fn send(&self, email: OutgoingEmail) -> BoxFuture<'static, Result<(), MailError>> {
        let request = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&email);

        async move {
            let response = request.send().await?;
            let status = response.status();
            if !status.is_success() {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                return Err(MailError::Rejected { status: status.as_u16(), body });
            }
            tracing::debug!("Resend accepted message with status {}", status);
            Ok(())
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_emails_path() {
        let base = Url::parse("https://api.resend.com").unwrap();
        assert_eq!(emails_endpoint(&base), "https://api.resend.com/emails");

        let proxied = Url::parse("http://localhost:9000/resend/").unwrap();
        assert_eq!(emails_endpoint(&proxied), "http://localhost:9000/resend/emails");
    }

    #[test]
    fn email_serializes_to_resend_shape() {
        let email = OutgoingEmail {
            from: "FrameState <onboarding@resend.dev>".to_string(),
            to: vec!["jane@example.com".to_string()],
            subject: "Hi".to_string(),
            html: "<p>Hi</p>".to_string(),
        };
        let value = serde_json::to_value(&email).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "from": "FrameState <onboarding@resend.dev>",
                "to": ["jane@example.com"],
                "subject": "Hi",
                "html": "<p>Hi</p>",
            })
        );
    }
}
