//! Per-line rendering decisions.
//!
//! [`render_line`] is the whole transform for one input line: parse, classify,
//! extract, and update [`RenderState`]. It never writes anything; the caller
//! hands the resulting [`Rendered`] value to a console writer.

use serde_json::{Map, Value};

use crate::core::event::{EventKind, RenderState, RenderedKind, SkipReason};
use crate::core::extract::{display_value, extract_text, extract_tool_description};

/// Fallback tool label when neither the description nor `name` is usable.
pub const DEFAULT_TOOL_LABEL: &str = "tool";

/// Output decided for one event record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// Non-empty assistant text, printed on its own line.
    Assistant(String),
    /// Tool description (or fallback label) printed after the tool marker.
    Tool(String),
    /// One thinking tick, no newline.
    ThinkingTick,
    /// Fixed user-turn announcement.
    UserTurn,
}

/// Render one raw input line.
///
/// - `Ok(Some(_))`: the line produces output.
/// - `Ok(None)`: nothing to print (blank line, unrecognized kind, or empty
///   assistant text).
/// - `Err(_)`: the line is dropped; `state` is untouched.
pub fn render_line(line: &str, state: &mut RenderState) -> Result<Option<Rendered>, SkipReason> {
    if line.trim().is_empty() {
        return Ok(None);
    }
    let value: Value = serde_json::from_str(line)?;
    let Value::Object(record) = value else {
        return Err(SkipReason::NotAnObject);
    };
    render_record(&record, state)
}

/// Render an already parsed event record.
pub fn render_record(
    record: &Map<String, Value>,
    state: &mut RenderState,
) -> Result<Option<Rendered>, SkipReason> {
    let Some(kind) = record
        .get("type")
        .and_then(Value::as_str)
        .and_then(EventKind::from_type)
    else {
        return Ok(None);
    };

    let rendered = match kind {
        EventKind::Assistant => {
            let text = match record.get("message") {
                Some(message) => extract_text(message),
                None => extract_text(&Value::Object(Map::new())),
            };
            state.last_kind = Some(RenderedKind::Text);
            (!text.is_empty()).then_some(Rendered::Assistant(text))
        }
        EventKind::ToolCall => {
            let description = match record.get("tool_call") {
                Some(tool_call) => extract_tool_description(tool_call),
                None => extract_tool_description(&Value::Object(Map::new())),
            }
            .ok_or(SkipReason::MalformedToolCall)?;
            let label = if description.is_empty() {
                record
                    .get("name")
                    .map_or_else(|| DEFAULT_TOOL_LABEL.to_string(), display_value)
            } else {
                description
            };
            state.last_kind = Some(RenderedKind::Tool);
            Some(Rendered::Tool(label))
        }
        EventKind::Thinking => {
            state.last_kind = Some(RenderedKind::Thinking);
            Some(Rendered::ThinkingTick)
        }
        EventKind::User => Some(Rendered::UserTurn),
    };
    Ok(rendered)
}
