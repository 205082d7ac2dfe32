pub const MEETING_SUBJECT: &str = "Your Real Estate Video Consultation Meeting";
pub const MEETING_DURATION: &str = "15 minutes";

/// Escapes text for interpolation into HTML element content or a quoted attribute.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn meeting_confirmation_html(name: &str, time_slot: &str, meeting_link: &str) -> String {
    let name = escape_html(name);
    let time_slot = escape_html(time_slot);
    let meeting_link = escape_html(meeting_link);
    format!(
        r#"
<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h1 style="color: #f1c40f;">Meeting Confirmed!</h1>
  <p>Hi {name},</p>
  <p>Thank you for scheduling a consultation with FrameState. We're excited to discuss your real estate video production needs!</p>

  <div style="background: #f8f9fa; padding: 20px; border-radius: 8px; margin: 20px 0;">
    <h2 style="margin-top: 0;">Meeting Details</h2>
    <p><strong>Preferred Time:</strong> {time_slot}</p>
    <p><strong>Duration:</strong> {duration}</p>
  </div>

  <div style="text-align: center; margin: 30px 0;">
    <a href="{meeting_link}"
       style="background: #f1c40f; color: #000; padding: 15px 30px; text-decoration: none; border-radius: 5px; font-weight: bold; display: inline-block;">
      Join Meeting
    </a>
  </div>

  <p style="color: #666; font-size: 14px;">
    We'll also send you a WhatsApp message with the meeting details.
  </p>

  <p>Looking forward to speaking with you!</p>
  <p><strong>The FrameState Team</strong></p>
</div>
"#,
        duration = MEETING_DURATION,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("Morning (9:00 AM - 12:00 PM)"), "Morning (9:00 AM - 12:00 PM)");
    }

    #[test]
    fn template_fills_details() {
        let html = meeting_confirmation_html(
            "Priya",
            "Evening (5:00 PM - 8:00 PM)",
            "https://meet.google.com/abc-defg-hij",
        );
        assert!(html.contains("Hi Priya,"));
        assert!(html.contains("<strong>Preferred Time:</strong> Evening (5:00 PM - 8:00 PM)"));
        assert!(html.contains("<strong>Duration:</strong> 15 minutes"));
        assert!(html.contains(r#"href="https://meet.google.com/abc-defg-hij""#));
    }

    #[test]
    fn user_input_cannot_inject_markup() {
        let html = meeting_confirmation_html("<script>alert(1)</script>", "x\" onclick=\"y", "https://meet");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("x&quot; onclick=&quot;y"));
    }
}
