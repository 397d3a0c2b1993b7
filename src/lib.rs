//! Regression checking for self-documenting `make help` output.
//!
//! The crate drives one blocking invocation of the build tool's `help`
//! target, strips terminal CSI escape sequences from the captured streams,
//! and verifies that the cleaned standard output advertises the expected
//! usage headings, section headers, and target names. It is a test utility,
//! not a standalone program: the intended entry point is
//! [`run_help_check`] called from an integration test at the repository root.

pub mod ansi;
pub mod expect;
pub mod invoke;
pub mod preflight;
pub mod verify;

pub use ansi::strip_csi;
pub use expect::HelpExpectations;
pub use invoke::{ToolInvocation, ToolOutput};
pub use verify::{run_help_check, verify_help_output, VerifyError};

use std::path::PathBuf;

/// Root of this repository, i.e. the directory holding `Cargo.toml` and the
/// `Makefile` under test. Relative paths inside the invoked tool (such as
/// `$(MAKEFILE_LIST)`) resolve as if a user ran it from here.
pub fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}
