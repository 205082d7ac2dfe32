use uuid::Uuid;

const ROOM_PLACEHOLDER: &str = "{room}";

/// Builds the link sent to the lead. Templates without a `{room}` placeholder
/// are a fixed room and come back unchanged.
pub fn generate_meeting_link(template: &str) -> String {
    if template.contains(ROOM_PLACEHOLDER) {
        template.replace(ROOM_PLACEHOLDER, &room_id())
    } else {
        template.to_string()
    }
}

// xxx-xxxx-xxx, the shape Meet uses for room codes
fn room_id() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("{}-{}-{}", &hex[0..3], &hex[3..7], &hex[7..10])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_link_is_returned_as_is() {
        let link = generate_meeting_link("https://meet.google.com/your-meeting-room");
        assert_eq!(link, "https://meet.google.com/your-meeting-room");
    }

    #[test]
    fn placeholder_gets_a_fresh_room() {
        let first = generate_meeting_link("https://meet.jit.si/framestate-{room}");
        let second = generate_meeting_link("https://meet.jit.si/framestate-{room}");
        assert!(first.starts_with("https://meet.jit.si/framestate-"));
        assert!(!first.contains("{room}"));
        assert_ne!(first, second);

        let room = first.trim_start_matches("https://meet.jit.si/framestate-");
        let parts: Vec<&str> = room.split('-').collect();
        assert_eq!(parts.iter().map(|p| p.len()).collect::<Vec<_>>(), vec![3, 4, 3]);
    }
}
