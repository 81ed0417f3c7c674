//! Colorized transcript renderer for agent NDJSON event streams.
//!
//! Each input line is an independent JSON event record emitted by an agent
//! CLI. The crate turns that stream into a readable console transcript while
//! staying strictly best-effort: lines that cannot be parsed or classified are
//! dropped and the stream keeps going.
//!
//! - **[`core`]**: Pure classification and extraction over `serde_json::Value`.
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: Console writers that put rendered events on a terminal.
//!
//! [`stream`] ties a line source to both layers and implements the CLI.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod stream;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
