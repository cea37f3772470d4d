//! Process exit codes. Part of the CLI contract consumed by build scripts.

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1; // Missing root, I/O failure, identifier collision, stale check
