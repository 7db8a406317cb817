//! Deterministic card addresses.

fn sanitize(part: &str) -> String {
    let mut out = String::with_capacity(part.len());
    let mut pending_dash = false;
    for ch in part.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch);
        } else {
            pending_dash = true;
        }
    }
    out
}

fn part_or(part: &str, fallback: &str) -> String {
    let s = sanitize(part);
    if s.is_empty() { fallback.to_string() } else { s }
}

/// `{sender}-wishes-{receiver}-{event}` with each part reduced to `[a-z0-9-]`.
///
/// Parts that reduce to nothing fall back to `someone`, `you` and `event`.
pub fn slug_for(sender: &str, receiver: &str, event: &str) -> String {
    format!(
        "{}-wishes-{}-{}",
        part_or(sender, "someone"),
        part_or(receiver, "you"),
        part_or(event, "event")
    )
}

/// Default document title.
pub fn card_title(sender: &str, receiver: &str) -> String {
    let sender = Some(sender.trim()).filter(|s| !s.is_empty()).unwrap_or("Someone");
    let receiver = Some(receiver.trim()).filter(|s| !s.is_empty()).unwrap_or("You");
    format!("{sender} wishes {receiver}")
}

/// Slugs are used as file names, so only the sanitized alphabet is accepted.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

#[cfg(test)]
#[path = "../../tests/unit/store/slug.rs"]
mod tests;
