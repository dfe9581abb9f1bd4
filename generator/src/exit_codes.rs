//! Stable exit codes for generator CLI commands.

/// Command succeeded, or `--help`/`--version` was printed.
pub const OK: i32 = 0;
/// Settings file missing/invalid, or the command line could not be parsed.
pub const INVALID: i32 = 1;
/// The command started but failed (pipeline, cache listing or cleanup I/O).
/// A failed pipeline still removes the scratch directory.
pub const FAILED: i32 = 2;
