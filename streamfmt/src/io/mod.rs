//! Terminal output for rendered events.

pub mod console;
