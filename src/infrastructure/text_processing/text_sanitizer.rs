use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

// A word broken across lines: letter, hyphen, line break, lowercase letter.
static HYPHENATED_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\p{L})-[ \t]*\n[ \t]*(\p{Ll})").unwrap());

static INLINE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());

/// Cleans the text layer of one PDF page before it goes into a prompt.
///
/// Applies NFKC (ligatures, full-width digits), drops control characters, rejoins
/// hyphenated words, squeezes runs of spaces and keeps at most one blank line between
/// blocks. Dates and ranges such as `2023-\n2024` are left alone.
pub fn sanitize_page_text(raw: &str) -> String {
    let normalized: String = raw
        .nfkc()
        .filter(|c| !c.is_control() || matches!(c, '\n' | '\t'))
        .collect();
    let rejoined = HYPHENATED_BREAK.replace_all(&normalized, "$1$2");

    let mut lines: Vec<String> = Vec::new();
    let mut pending_blank = false;

    for line in rejoined.lines() {
        let squeezed = INLINE_WHITESPACE.replace_all(line.trim(), " ");
        if squeezed.is_empty() {
            pending_blank = !lines.is_empty();
            continue;
        }

        if pending_blank {
            lines.push(String::new());
            pending_blank = false;
        }
        lines.push(squeezed.into_owned());
    }

    lines.join("\n")
}
