//! Deterministic, pure logic for turning event records into display payloads.
//!
//! Core modules must be free of I/O side effects. They operate on parsed JSON
//! values and return owned strings or rendered events suitable for tests.

pub mod event;
pub mod extract;
pub mod render;
