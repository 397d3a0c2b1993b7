//! Verification of captured help output against the fixed contract.

use std::path::{Path, PathBuf};

use regex::Regex;
use thiserror::Error;

use crate::ansi::strip_csi;
use crate::expect::HelpExpectations;
use crate::invoke::{ToolInvocation, ToolOutput};
use crate::preflight;

/// Everything that can make the help check fail. Every variant carries the
/// cleaned output (or both streams) so a failure is diagnosable on its own.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("Makefile not found at repository root ({})", .root.display())]
    MissingMakefile { root: PathBuf },

    #[error("`make help` exited with {status}\nSTDOUT:\n{stdout}\nSTDERR:\n{stderr}")]
    CommandFailed {
        status: String,
        stdout: String,
        stderr: String,
    },

    #[error("heading '{heading}' not found in help output.\nOutput was:\n{output}")]
    MissingHeading { heading: String, output: String },

    #[error("section header '{section}' not found in help output.\nOutput was:\n{output}")]
    MissingSection { section: String, output: String },

    #[error("target '{target}' not found in help output.\nOutput was:\n{output}")]
    MissingTarget { target: String, output: String },
}

impl VerifyError {
    fn missing_makefile(root: &Path) -> Self {
        VerifyError::MissingMakefile {
            root: root.to_path_buf(),
        }
    }
}

/// Whole-word containment via `\b` boundaries, with `word` taken literally.
///
/// A hyphen is not a word character, so `install` matches inside
/// `install-uv` at the `l`/`-` boundary, while `test` can never match
/// inside `testing`.
pub fn contains_word(haystack: &str, word: &str) -> bool {
    let pattern = format!(r"\b{}\b", regex::escape(word));
    Regex::new(&pattern)
        .map(|re| re.is_match(haystack))
        .unwrap_or(false)
}

/// Validate one captured invocation against `expected`.
///
/// Order: exit status first (reported with both cleaned streams), then usage
/// headings, section headers, and whole-word target names against the
/// cleaned standard output. Short-circuits on the first miss; never retries.
pub fn verify_help_output(
    output: &ToolOutput,
    expected: &HelpExpectations,
) -> Result<(), VerifyError> {
    let stdout = strip_csi(&output.stdout);
    let stderr = strip_csi(&output.stderr);

    if !output.success() {
        return Err(VerifyError::CommandFailed {
            status: match output.code {
                Some(code) => code.to_string(),
                None => "a signal".to_string(),
            },
            stdout,
            stderr,
        });
    }

    for heading in &expected.usage_headings {
        if !stdout.contains(heading.as_str()) {
            return Err(VerifyError::MissingHeading {
                heading: heading.clone(),
                output: stdout,
            });
        }
    }

    for section in &expected.sections {
        if !stdout.contains(section.as_str()) {
            return Err(VerifyError::MissingSection {
                section: section.clone(),
                output: stdout,
            });
        }
    }

    for target in &expected.targets {
        if !contains_word(&stdout, target) {
            return Err(VerifyError::MissingTarget {
                target: target.clone(),
                output: stdout,
            });
        }
    }

    Ok(())
}

/// The full check: guard the Makefile, run `make help` from `root`, verify.
///
/// Callers decide the skip policy for a missing `make` binary beforehand
/// (see [`crate::preflight`]); this function assumes the tool exists and
/// reports any spawn failure as an error.
pub fn run_help_check(root: &Path, expected: &HelpExpectations) -> anyhow::Result<()> {
    if !preflight::makefile_present(root) {
        return Err(VerifyError::missing_makefile(root).into());
    }

    let output = ToolInvocation::new("make")
        .arg("help")
        .cwd(root)
        .timeout_from_env()
        .run()?;

    verify_help_output(&output, expected)?;
    Ok(())
}
