//! Unified exit codes for the seedbed CLI.
//! Per-record failures never affect the exit code; only setup does.

pub const SUCCESS: i32 = 0;
pub const SETUP_ERROR: i32 = 2; // Storage/config initialization failed
