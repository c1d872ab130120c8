use serde_json::Value;

/// Reads a non-negative real out of untrusted model output. Numbers pass through, strings
/// contribute their leading numeric prefix (`"12 SKS"`, `"12,5"`), everything else is 0.
pub(crate) fn lenient_f64(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => parse_numeric_prefix(text),
        _ => None,
    };

    match parsed {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

/// Same coercion as [`lenient_f64`], truncated toward zero. `as` saturates at `u32::MAX`.
pub(crate) fn lenient_u32(value: Option<&Value>) -> u32 {
    lenient_f64(value).trunc() as u32
}

pub(crate) fn lenient_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        _ => String::new(),
    }
}

fn parse_numeric_prefix(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    // Indonesian reports write decimals with a comma.
    let text = if trimmed.contains(',') && !trimmed.contains('.') {
        trimmed.replace(',', ".")
    } else {
        trimmed.to_string()
    };

    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digit_count = end - digits_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let fraction_start = end + 1;
        let mut cursor = fraction_start;
        while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
            cursor += 1;
        }
        digit_count += cursor - fraction_start;
        if cursor > fraction_start || digit_count > 0 {
            end = cursor;
        }
    }

    if digit_count == 0 {
        return None;
    }

    text[..end].parse().ok()
}
