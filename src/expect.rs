//! The fixed textual contract expected from `make help`.

/// Headings printed by the help recipe itself.
pub const USAGE_HEADINGS: [&str; 2] = ["Usage:", "Targets:"];

/// `##@` section banners declared in the Makefile.
pub const SECTION_HEADERS: [&str; 3] = ["Bootstrap", "Development and Testing", "Meta"];

/// Documented targets; matched as whole words, not substrings.
pub const TARGET_NAMES: [&str; 5] = ["install-uv", "install", "test", "fmt", "help"];

/// Everything the cleaned help output must contain.
#[derive(Debug, Clone)]
pub struct HelpExpectations {
    pub usage_headings: Vec<String>,
    pub sections: Vec<String>,
    pub targets: Vec<String>,
}

impl Default for HelpExpectations {
    fn default() -> Self {
        Self {
            usage_headings: to_owned(&USAGE_HEADINGS),
            sections: to_owned(&SECTION_HEADERS),
            targets: to_owned(&TARGET_NAMES),
        }
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
