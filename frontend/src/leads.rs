//! Lead capture: the WhatsApp hand-off on the contact page and the meeting
//! scheduler that goes through the backend.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::api::Api;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in all required fields.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("network error: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("could not encode request: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("server answered {status}: {message}")]
    Server { status: u16, message: String },
}

/// Same shape check the backend applies, so obvious typos never leave the page.
pub fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), FormError> {
        if blank(&self.name) || blank(&self.email) || blank(&self.message) {
            return Err(FormError::MissingFields);
        }
        if !looks_like_email(self.email.trim()) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }

    pub fn whatsapp_message(&self) -> String {
        format!(
            "Hi! I'm interested in your services.\n\nName: {}\nEmail: {}\nPhone: {}\n\nMessage: {}",
            self.name.trim(),
            self.email.trim(),
            self.phone.trim(),
            self.message.trim(),
        )
    }

    /// `wa.me` deep link with the message prefilled.
    pub fn whatsapp_url(&self, number: &str) -> String {
        format!(
            "https://wa.me/{}?text={}",
            number,
            urlencoding::encode(&self.whatsapp_message())
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingForm {
    pub name: String,
    pub email: String,
    pub time_slot: String,
}

impl MeetingForm {
    pub fn validate(&self) -> Result<(), FormError> {
        if blank(&self.name) || blank(&self.email) || blank(&self.time_slot) {
            return Err(FormError::MissingFields);
        }
        if !looks_like_email(self.email.trim()) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MeetingConfirmation {
    pub success: bool,
    pub meeting_link: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

pub async fn request_meeting(form: &MeetingForm) -> Result<MeetingConfirmation, SubmitError> {
    let response = Api::post("/api/meeting-confirmation").json(form)?.send().await?;
    if response.ok() {
        return Ok(response.json::<MeetingConfirmation>().await?);
    }
    let status = response.status();
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => response.status_text(),
    };
    Err(SubmitError::Server { status, message })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> ContactForm {
        ContactForm {
            name: "Ravi Mehta".into(),
            email: "ravi@example.com".into(),
            phone: "+91 98765 43210".into(),
            message: "Villa shoot in Whitefield & drone?".into(),
        }
    }

    #[test]
    fn contact_form_requires_name_email_and_message() {
        assert_eq!(contact().validate(), Ok(()));
        let no_phone = ContactForm { phone: String::new(), ..contact() };
        assert_eq!(no_phone.validate(), Ok(()));
        let no_message = ContactForm { message: "   ".into(), ..contact() };
        assert_eq!(no_message.validate(), Err(FormError::MissingFields));
        let bad_email = ContactForm { email: "ravi.example.com".into(), ..contact() };
        assert_eq!(bad_email.validate(), Err(FormError::InvalidEmail));
    }

    #[test]
    fn whatsapp_link_carries_every_field_encoded() {
        let url = contact().whatsapp_url("919558737783");
        assert!(url.starts_with("https://wa.me/919558737783?text="));
        let text = url.split_once("?text=").map(|(_, t)| t).unwrap();
        assert!(!text.contains(' '));
        assert!(!text.contains('&'));
        assert!(!text.contains('\n'));
        let decoded = urlencoding::decode(text).unwrap();
        assert_eq!(decoded, contact().whatsapp_message());
        assert!(decoded.contains("Name: Ravi Mehta"));
        assert!(decoded.contains("Email: ravi@example.com"));
        assert!(decoded.contains("Phone: +91 98765 43210"));
        assert!(decoded.contains("Message: Villa shoot in Whitefield & drone?"));
    }

    #[test]
    fn meeting_form_serializes_camel_case() {
        let form = MeetingForm {
            name: "Asha".into(),
            email: "asha@example.com".into(),
            time_slot: "Morning (9:00 AM - 12:00 PM)".into(),
        };
        assert_eq!(form.validate(), Ok(()));
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["timeSlot"], "Morning (9:00 AM - 12:00 PM)");
        assert!(json.get("time_slot").is_none());
    }

    #[test]
    fn meeting_form_needs_a_slot() {
        let form = MeetingForm {
            name: "Asha".into(),
            email: "asha@example.com".into(),
            time_slot: String::new(),
        };
        assert_eq!(form.validate(), Err(FormError::MissingFields));
    }

    #[test]
    fn email_shape() {
        assert!(looks_like_email("a@b.co"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("@b.co"));
        assert!(!looks_like_email("a@.co"));
        assert!(!looks_like_email("a@b.co."));
        assert!(!looks_like_email("a@@b.co"));
        assert!(!looks_like_email("a b@c.co"));
    }

    #[test]
    fn confirmation_reads_backend_shape() {
        let parsed: MeetingConfirmation =
            serde_json::from_str(r#"{"success":true,"meetingLink":"https://meet.google.com/abc"}"#).unwrap();
        assert_eq!(
            parsed,
            MeetingConfirmation { success: true, meeting_link: "https://meet.google.com/abc".into() }
        );
    }
}
