//! Test-only builders for NDJSON event lines.

use serde_json::{Value, json};

/// Assistant event whose `message.content` holds one text entry per item.
pub fn assistant_line(texts: &[&str]) -> String {
    let content: Vec<Value> = texts
        .iter()
        .map(|text| json!({"type": "text", "text": text}))
        .collect();
    json!({"type": "assistant", "message": {"content": content}}).to_string()
}

/// `tool_call` event wrapping the given `tool_call` payload.
pub fn tool_call_line(tool_call: Value) -> String {
    json!({"type": "tool_call", "tool_call": tool_call}).to_string()
}

pub fn thinking_line() -> String {
    json!({"type": "thinking"}).to_string()
}

pub fn user_line() -> String {
    json!({"type": "user", "message": {"content": "ignored"}}).to_string()
}

/// Join lines into an NDJSON document, one trailing newline per line.
pub fn ndjson(lines: &[String]) -> String {
    lines.iter().map(|line| format!("{line}\n")).collect()
}
