//! Stable exit codes for the `streamfmt` binary.

/// Input was exhausted normally. Malformed lines never change this.
pub const OK: i32 = 0;
/// The input source or the output sink failed.
pub const IO_ERROR: i32 = 1;
