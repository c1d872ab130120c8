use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

const FENCE: &str = "```";

static STRAY_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```(?:json)?(?:\r?\n)?").unwrap());

/// Removes markdown code fences a model may wrap around its JSON answer.
///
/// An opening fence (with or without a language tag) and a closing fence are removed
/// exactly, so the fenced body comes back unchanged. Any fence markers left inside are
/// dropped together with the line break that follows them.
pub fn strip_code_fences(response: &str) -> String {
    let mut body = response.trim();
    let mut crlf_fence = false;

    if let Some(rest) = body.strip_prefix(FENCE) {
        (body, crlf_fence) = strip_fence_tag(rest);
    }

    if let Some(rest) = body.strip_suffix(FENCE) {
        body = strip_closing_line_break(rest, crlf_fence);
    }

    STRAY_FENCE.replace_all(body, "").into_owned()
}

/// Parses normalized model output. With `scan_for_object` set, a failed parse is retried
/// on each balanced `{...}` span in turn, which recovers answers wrapped in prose.
pub fn parse_model_json(text: &str, scan_for_object: bool) -> Result<Value, serde_json::Error> {
    let error = match serde_json::from_str(text) {
        Ok(value) => return Ok(value),
        Err(error) => error,
    };

    if !scan_for_object {
        return Err(error);
    }

    let mut search_from = 0;
    while let Some(offset) = text[search_from..].find('{') {
        let start = search_from + offset;
        let parsed =
            balanced_object_at(text, start).and_then(|span| serde_json::from_str(span).ok());
        if let Some(value) = parsed {
            return Ok(value);
        }
        search_from = start + 1;
    }

    Err(error)
}

/// Returns the fenced body and whether the opening fence ended with `\r\n`.
fn strip_fence_tag(rest: &str) -> (&str, bool) {
    let tag_len = rest
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(rest.len());
    let (tag, after_tag) = rest.split_at(tag_len);

    if let Some(body) = after_tag.strip_prefix("\r\n") {
        return (body, true);
    }
    if let Some(body) = after_tag.strip_prefix('\n') {
        return (body, false);
    }

    if tag.eq_ignore_ascii_case("json") {
        (after_tag, false)
    } else {
        (rest, false)
    }
}

// Only the line break style the opening fence used belongs to the fence.
fn strip_closing_line_break(text: &str, crlf_fence: bool) -> &str {
    let line_break = if crlf_fence { "\r\n" } else { "\n" };
    text.strip_suffix(line_break).unwrap_or(text)
}

fn balanced_object_at(text: &str, start: usize) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let end = start + offset + ch.len_utf8();
                    return Some(&text[start..end]);
                }
            }
            _ => {}
        }
    }

    None
}
