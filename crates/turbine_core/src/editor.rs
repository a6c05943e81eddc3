//! Editor options owned by the UI layer.
//!
//! Only the wrap preference participates in language resolution; tab
//! handling is consumed by the editor widget as-is.

/// Soft-wrap preference carried by [`EditorOptions`].
///
/// Numeric form on the wire and in the UI: 0 = auto, 1 = on, 2 = off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapSetting {
    /// Defer to the wrap default of the resolved language.
    #[default]
    Auto,
    /// Force soft wrap on.
    On,
    /// Force soft wrap off.
    Off,
}

impl WrapSetting {
    /// Resolve the final wrap behavior given the language's wrap default.
    pub fn resolve(self, language_default: bool) -> bool {
        match self {
            WrapSetting::Auto => language_default,
            WrapSetting::On => true,
            WrapSetting::Off => false,
        }
    }
}

/// Per-file editor configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorOptions {
    /// Spaces per tab stop; the editor accepts 1 through 8.
    pub tab_size: u8,
    /// Insert spaces instead of tab characters.
    pub use_soft_tabs: bool,
    /// Soft-wrap preference.
    pub wrap: WrapSetting,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            tab_size: 4,
            use_soft_tabs: true,
            wrap: WrapSetting::Auto,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{EditorOptions, WrapSetting};

    #[test]
    fn auto_wrap_defers_to_the_language_default() {
        assert!(WrapSetting::Auto.resolve(true));
        assert!(!WrapSetting::Auto.resolve(false));
    }

    #[test]
    fn explicit_wrap_settings_ignore_the_language_default() {
        assert!(WrapSetting::On.resolve(false));
        assert!(!WrapSetting::Off.resolve(true));
    }

    #[test]
    fn default_options_match_the_editor_defaults() {
        let options = EditorOptions::default();
        assert_eq!(options.tab_size, 4);
        assert!(options.use_soft_tabs);
        assert_eq!(options.wrap, WrapSetting::Auto);
    }
}
