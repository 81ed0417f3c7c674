//! Display-text extraction from loosely shaped event fields.
//!
//! Agent CLIs disagree on how they nest message text and tool arguments, so
//! every function here accepts any JSON shape and degrades to a plain string
//! conversion instead of failing.

use serde_json::{Map, Value};

/// Render a JSON value for display.
///
/// Strings are returned verbatim; anything else is compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Loose truthiness used when picking between alternative fields.
///
/// `null`, `false`, zero, and empty strings, arrays, or objects are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Extract assistant text from a `message` field.
///
/// - `{"content": [{"type": "text", "text": ...}, ...]}` joins the `text` of
///   every `text` entry with single spaces, in order.
/// - `{"content": <non-array>}` renders `content` itself.
/// - `null` is empty; any other shape renders the whole field.
///
/// A `content` array holding a non-object entry, or a `text` entry whose
/// `text` is not a string, renders the whole field.
pub fn extract_text(message: &Value) -> String {
    match message {
        Value::Null => String::new(),
        Value::Object(map) => match map.get("content") {
            Some(Value::Array(items)) => {
                join_text_items(items).unwrap_or_else(|| display_value(message))
            }
            Some(content) => display_value(content),
            None => display_value(message),
        },
        other => display_value(other),
    }
}

fn join_text_items(items: &[Value]) -> Option<String> {
    let mut parts = Vec::new();
    for item in items {
        let entry = item.as_object()?;
        if entry.get("type").and_then(Value::as_str) != Some("text") {
            continue;
        }
        match entry.get("text") {
            None => parts.push(""),
            Some(Value::String(text)) => parts.push(text.as_str()),
            Some(_) => return None,
        }
    }
    Some(parts.join(" "))
}

/// Describe a tool invocation from a `tool_call` field.
///
/// Returns `None` when the field carries a `function` entry that is not an
/// object; such records are dropped by the caller.
///
/// - `{"function": {"name", "arguments"}}` renders `"{name} {arguments}"`.
/// - Otherwise `arguments` (or `args`) and `name` are read from the top level.
///   JSON-encoded arguments are decoded: a `command` key wins outright, any
///   other object is shown re-encoded. Everything else renders as
///   `"{name} {arguments}"`, trimmed.
/// - Non-object fields render as-is.
pub fn extract_tool_description(tool_call: &Value) -> Option<String> {
    let Value::Object(call) = tool_call else {
        return Some(display_value(tool_call));
    };

    if let Some(function) = call.get("function") {
        let function = function.as_object()?;
        return Some(format!(
            "{} {}",
            field_or_null(function, "name"),
            field_or_null(function, "arguments")
        ));
    }

    let arguments = first_truthy(call, &["arguments", "args"]);
    let name = first_truthy(call, &["name"]);

    if let Some(Value::String(raw)) = arguments
        && raw.starts_with('{')
        && let Ok(Value::Object(parsed)) = serde_json::from_str::<Value>(raw)
    {
        return Some(match parsed.get("command") {
            Some(command) => display_value(command),
            None => Value::Object(parsed).to_string(),
        });
    }

    let arguments = arguments.map(display_value).unwrap_or_default();
    let name = name.map(display_value).unwrap_or_default();
    Some(format!("{name} {arguments}").trim().to_string())
}

fn field_or_null(map: &Map<String, Value>, key: &str) -> String {
    map.get(key).map_or_else(|| "null".to_string(), display_value)
}

fn first_truthy<'a>(map: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| map.get(*key))
        .find(|value| is_truthy(value))
}
