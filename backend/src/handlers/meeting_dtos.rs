use serde::{Deserialize, Serialize};

/// Body of `POST /api/meeting-confirmation`. Missing fields deserialize as
/// empty so they surface as a validation error instead of a 422.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub time_slot: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingResponse {
    pub success: bool,
    pub meeting_link: String,
}

impl MeetingRequest {
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            time_slot: self.time_slot.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.is_empty() || self.email.is_empty() || self.time_slot.is_empty() {
            return Err("Please fill in all required fields.");
        }
        if !looks_like_email(&self.email) {
            return Err("Please enter a valid email address.");
        }
        Ok(())
    }
}

fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str, time_slot: &str) -> MeetingRequest {
        MeetingRequest {
            name: name.to_string(),
            email: email.to_string(),
            time_slot: time_slot.to_string(),
        }
    }

    #[test]
    fn deserializes_camel_case_and_defaults_missing_fields() {
        let req: MeetingRequest =
            serde_json::from_str(r#"{"name":"Asha","timeSlot":"Morning (9:00 AM - 12:00 PM)"}"#).unwrap();
        assert_eq!(req.name, "Asha");
        assert_eq!(req.email, "");
        assert_eq!(req.time_slot, "Morning (9:00 AM - 12:00 PM)");
    }

    #[test]
    fn blank_fields_fail_after_trimming() {
        let req = request("  ", "a@b.co", "Morning").trimmed();
        assert_eq!(req.validate(), Err("Please fill in all required fields."));
    }

    #[test]
    fn email_shape_is_checked() {
        for bad in ["plainaddress", "@example.com", "a@b", "a b@c.com", "a@@b.com", "a@.com", "a@b."] {
            assert!(request("Asha", bad, "Morning").validate().is_err(), "{bad} passed");
        }
        assert!(request("Asha", "asha@example.co.in", "Morning").validate().is_ok());
    }

    #[test]
    fn response_uses_camel_case() {
        let body = serde_json::to_value(MeetingResponse {
            success: true,
            meeting_link: "https://meet".to_string(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"success": true, "meetingLink": "https://meet"}));
    }
}
