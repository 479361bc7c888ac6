//! Shared utilities for CLI commands

use std::fmt;

/// Error type representing a non-zero process exit code.
///
/// Use `return Err(ExitCode(N).into())` instead of `std::process::exit(N)`
/// so that RAII destructors run and cleanup happens properly. `main`
/// downcasts to this before printing anything.
#[derive(Debug)]
pub(crate) struct ExitCode(pub(crate) i32);

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Control-flow mechanism, not a user-facing error; keep anyhow's
        // Display chain empty if it ever reaches here.
        write!(f, "")
    }
}

impl std::error::Error for ExitCode {}
