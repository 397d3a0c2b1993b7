//! CSI escape-sequence stripping.
//!
//! `make` recipes commonly color their help output; those sequences corrupt
//! substring matching, so they are removed before any assertion runs.

use once_cell::sync::Lazy;
use regex::Regex;

/// Well-formed CSI sequence: ESC `[`, any parameter bytes (`0x30-0x3F`),
/// any intermediate bytes (`0x20-0x2F`), one final byte (`0x40-0x7E`).
static CSI_SEQUENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1B\[[0-?]*[ -/]*[@-~]").expect("CSI pattern compiles"));

/// Remove every well-formed CSI sequence from `s`, preserving all other
/// characters in order.
///
/// Total over all inputs and idempotent. Malformed or truncated sequences
/// (a lone ESC, or `ESC [` with no final byte) do not match the pattern and
/// are left untouched.
pub fn strip_csi(s: &str) -> String {
    CSI_SEQUENCE.replace_all(s, "").into_owned()
}
