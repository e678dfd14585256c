const MAX_VISIBLE_LENGTH: usize = 100;

/// Shortens user text or transcripts for log output.
pub fn preview_text(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total = trimmed.chars().count();
    if total > MAX_VISIBLE_LENGTH {
        let visible: String = trimmed.chars().take(MAX_VISIBLE_LENGTH).collect();
        format!("{}... ({} chars total)", visible, total)
    } else {
        trimmed.to_string()
    }
}
