use serde_json::json;

use bkd_wrapped::application::services::{parse_model_json, strip_code_fences};

#[test]
fn given_json_fenced_text_when_stripping_then_original_body_is_returned() {
    for body in [
        r#"{"nama":"Dr. X"}"#,
        "{\n  \"a\": 1,\n  \"b\": [1, 2]\n}",
        "  indented body",
        "plain text without braces",
        "",
    ] {
        let fenced = format!("```json\n{body}\n```");
        assert_eq!(strip_code_fences(&fenced), body);
    }
}

#[test]
fn given_bare_fence_when_stripping_then_body_is_returned() {
    let fenced = "```\n{\"a\": 1}\n```";

    assert_eq!(strip_code_fences(fenced), "{\"a\": 1}");
}

#[test]
fn given_surrounding_whitespace_and_crlf_when_stripping_then_fence_is_removed() {
    let fenced = "\n\n  ```JSON\r\n{\"a\": 1}\r\n```  \n";

    assert_eq!(strip_code_fences(fenced), "{\"a\": 1}");
}

#[test]
fn given_unfenced_json_when_stripping_then_only_outer_whitespace_is_trimmed() {
    assert_eq!(strip_code_fences("  {\"a\": 1}\n"), "{\"a\": 1}");
}

#[test]
fn given_fence_without_line_breaks_when_stripping_then_markers_are_removed() {
    assert_eq!(strip_code_fences("```json{\"a\": 1}```"), "{\"a\": 1}");
}

#[test]
fn given_stray_fences_inside_text_when_stripping_then_markers_are_dropped() {
    let text = "Here you go:\n```json\n{\"a\": 1}\n```\nHope that helps";

    let stripped = strip_code_fences(text);

    assert!(!stripped.contains("```"));
    assert!(stripped.contains("{\"a\": 1}"));
}

#[test]
fn given_valid_json_when_parsing_then_returns_value() {
    let value = parse_model_json("{\"a\": [1, 2]}", false).unwrap();

    assert_eq!(value, json!({"a": [1, 2]}));
}

#[test]
fn given_plain_prose_when_parsing_then_fails_even_with_scan() {
    assert!(parse_model_json("not json at all", true).is_err());
    assert!(parse_model_json("not json at all", false).is_err());
}

#[test]
fn given_json_wrapped_in_prose_when_parsing_with_scan_then_recovers_object() {
    let text = r#"Sure! Here is the data: {"nama": "Dr. {X}", "n": {"a": "\"}"}} Let me know."#;

    let value = parse_model_json(text, true).unwrap();

    assert_eq!(value["nama"], "Dr. {X}");
    assert_eq!(value["n"]["a"], "\"}");
}

#[test]
fn given_json_wrapped_in_prose_when_parsing_without_scan_then_fails() {
    let text = r#"Sure! {"nama": "Dr. X"}"#;

    assert!(parse_model_json(text, false).is_err());
}

#[test]
fn given_unbalanced_braces_when_parsing_with_scan_then_fails() {
    assert!(parse_model_json("prefix {\"a\": 1", true).is_err());
}

#[test]
fn given_body_ending_in_carriage_return_when_stripping_then_it_is_kept() {
    assert_eq!(strip_code_fences("```json\na\r\n```"), "a\r");
}

#[test]
fn given_prose_with_earlier_braces_when_parsing_with_scan_then_recovers_later_object() {
    let text = r#"Note {braces} first. {"nama": "X"}"#;

    let value = parse_model_json(text, true).unwrap();

    assert_eq!(value, json!({"nama": "X"}));
}
