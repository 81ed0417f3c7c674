//! Event classification and the state carried between lines.

use thiserror::Error;

/// Classification of an event record, derived from its `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Assistant message text.
    Assistant,
    /// Tool or shell command invocation (`tool_call` or `command`).
    ToolCall,
    /// Model is thinking; rendered as a single tick.
    Thinking,
    /// A user turn was handed to the agent.
    User,
}

impl EventKind {
    /// Map a `type` value to a kind. Unrecognized values yield `None`.
    pub fn from_type(event_type: &str) -> Option<Self> {
        match event_type {
            "assistant" => Some(Self::Assistant),
            "tool_call" | "command" => Some(Self::ToolCall),
            "thinking" => Some(Self::Thinking),
            "user" => Some(Self::User),
            _ => None,
        }
    }
}

/// Kind of the most recent event that updated [`RenderState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderedKind {
    Text,
    Tool,
    Thinking,
}

/// State threaded through the stream, one value per run.
///
/// `last_kind` is `None` until the first assistant, tool, or thinking event.
/// User events do not touch it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenderState {
    pub last_kind: Option<RenderedKind>,
}

/// Why a line was dropped without output.
#[derive(Debug, Error)]
pub enum SkipReason {
    #[error("line is not valid UTF-8")]
    InvalidUtf8,
    #[error("invalid json: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("event record is not a JSON object")]
    NotAnObject,
    #[error("tool_call.function is not an object")]
    MalformedToolCall,
}
