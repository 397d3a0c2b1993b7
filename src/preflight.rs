//! Environment guards that run before the help invocation.
//!
//! The two precondition failures carry distinct policies on purpose: a
//! missing `Makefile` fails the check, while a missing `make` binary skips
//! it (the environment, not the repository, is deficient).

use std::path::Path;

/// Whether `make` is reachable through `PATH`.
pub fn make_available() -> bool {
    which::which("make").is_ok()
}

/// CI override: when `HELPCHECK_REQUIRE_MAKE` is set to a truthy value, a
/// missing build tool should fail the run instead of skipping it.
pub fn require_make() -> bool {
    match std::env::var("HELPCHECK_REQUIRE_MAKE") {
        Ok(v) => matches!(
            v.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        Err(_) => false,
    }
}

/// Presence of the build-configuration artifact; contents are not inspected.
pub fn makefile_present(root: &Path) -> bool {
    root.join("Makefile").is_file()
}
