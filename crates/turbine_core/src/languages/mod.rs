//! Static language registry and syntax-mode resolution for the editor.

mod registry;

pub use registry::{lookup, registry, LanguageEntry};

use crate::constants::PLAIN_TEXT_MODE;

/// Outcome of syntax-mode resolution for a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedLanguage {
    /// Mode identifier handed to the embedded editor.
    pub ace_mode: &'static str,
    /// The language's soft-wrap default.
    pub wrap: bool,
}

/// Fallback used when neither the explicit language nor the filename match.
const PLAIN_TEXT: ResolvedLanguage = ResolvedLanguage {
    ace_mode: PLAIN_TEXT_MODE,
    wrap: false,
};

/// Resolve the editor mode and wrap default for a file.
///
/// An explicit `language` always wins over filename inference. Without one,
/// registry entries are scanned in dataset order and the first entry whose
/// extensions suffix-match the filename, or whose literal filenames match it
/// exactly, is used. Resolution is synchronous and side-effect-free; loading
/// the grammar the returned mode names is the editor widget's business.
///
/// # Panics
/// Panics when `language` names a language absent from the registry. Callers
/// obtain explicit names from the registry itself, so an unknown name is a
/// contract violation rather than a runtime condition.
pub fn resolve(filename: &str, language: Option<&str>) -> ResolvedLanguage {
    if let Some(name) = language {
        let entry =
            lookup(name).unwrap_or_else(|| panic!("language {:?} is not in the registry", name));
        return ResolvedLanguage {
            ace_mode: &entry.ace_mode,
            wrap: entry.wrap,
        };
    }

    registry()
        .iter()
        .find(|entry| {
            entry
                .extensions
                .iter()
                .any(|ext| filename.ends_with(ext.as_str()))
                || entry.filenames.iter().any(|known| known == filename)
        })
        .map(|entry| ResolvedLanguage {
            ace_mode: &entry.ace_mode,
            wrap: entry.wrap,
        })
        .unwrap_or(PLAIN_TEXT)
}
