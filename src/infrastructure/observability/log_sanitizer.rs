use std::sync::LazyLock;

use regex::Regex;

const MAX_VISIBLE_CHARS: usize = 100;

static SECRET_ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\b(bearer\s+|api_key=|key=|password=|secret=|token=)[^\s&"']+"#).unwrap()
});

/// Shortens prompts and model output for log lines and masks anything shaped like a
/// credential. Lecturer reports carry personal data, so nothing goes to the log in full.
pub fn sanitize_for_log(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total_chars = trimmed.chars().count();
    let visible = if total_chars > MAX_VISIBLE_CHARS {
        let head: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{head}... ({total_chars} chars total)")
    } else {
        trimmed.to_string()
    };

    SECRET_ASSIGNMENT
        .replace_all(&visible, "${1}[REDACTED]")
        .into_owned()
}
