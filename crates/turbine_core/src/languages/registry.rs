//! Bundled language dataset and lookup.

use serde::Deserialize;
use std::sync::OnceLock;

/// One language record from the bundled dataset.
///
/// Entry order in the dataset is meaningful: filename inference scans the
/// registry in declaration order and stops at the first match, so entries
/// with more specific claims are declared before general ones.
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageEntry {
    /// Display name, e.g. `"Python"`.
    pub name: String,
    /// Alternate lookup names.
    #[serde(default)]
    pub aliases: Vec<String>,
    /// File extensions claimed by the language, including the leading dot.
    #[serde(default)]
    pub extensions: Vec<String>,
    /// Literal filenames claimed by the language, such as `"Makefile"`.
    #[serde(default)]
    pub filenames: Vec<String>,
    /// Syntax mode identifier consumed by the embedded editor.
    pub ace_mode: String,
    /// Soft-wrap default for the language.
    #[serde(default)]
    pub wrap: bool,
    /// Display color, when the dataset defines one.
    #[serde(default)]
    pub color: Option<String>,
}

const BUNDLED_LANGUAGES: &str = include_str!("languages.json");

/// All registry entries in dataset declaration order.
///
/// The dataset is parsed once per process and never mutated afterwards.
///
/// # Panics
/// Panics if the bundled dataset fails to parse; that is a corrupted build
/// artifact, not a runtime condition.
pub fn registry() -> &'static [LanguageEntry] {
    static REGISTRY: OnceLock<Vec<LanguageEntry>> = OnceLock::new();
    REGISTRY
        .get_or_init(|| {
            serde_json::from_str(BUNDLED_LANGUAGES).expect("bundled language dataset is valid")
        })
        .as_slice()
}

/// Look up a language by display name or alias.
///
/// # Returns
/// The matching entry, or `None` when the registry does not know the name.
pub fn lookup(name: &str) -> Option<&'static LanguageEntry> {
    registry()
        .iter()
        .find(|entry| entry.name == name || entry.aliases.iter().any(|alias| alias == name))
}
