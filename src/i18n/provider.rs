//! Bundled default-content collaborators.

use std::collections::HashMap;
use std::fmt::Debug;

/// Supplies bundled fallback `.lang` text for locale codes.
///
/// When the registry loads a locale whose file does not exist yet, the
/// provider's text seeds the store (and the file on disk). How the text is
/// sourced (embedded resources, an asset pack, nothing at all) is the
/// implementer's concern.
pub trait DefaultContentProvider: Debug {
    /// Bundled `.lang` text for `language_code`, or `None` if the
    /// application ships no defaults for that locale.
    fn default_content(&self, language_code: &str) -> Option<String>;
}

/// Provider that ships no defaults; missing files yield empty stores.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDefaults;

impl DefaultContentProvider for NoDefaults {
    fn default_content(&self, _language_code: &str) -> Option<String> {
        None
    }
}

/// In-memory bundled texts, keyed by locale code.
#[derive(Debug, Clone, Default)]
pub struct BundledDefaults {
    texts: HashMap<String, String>,
}

impl BundledDefaults {
    /// 空のプロバイダーを作成
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register bundled text for a locale code, replacing any previous text.
    pub fn insert(&mut self, language_code: impl Into<String>, text: impl Into<String>) {
        self.texts.insert(language_code.into(), text.into());
    }

    /// Builder-style [`BundledDefaults::insert`].
    #[must_use]
    pub fn with(mut self, language_code: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(language_code, text);
        self
    }
}

impl DefaultContentProvider for BundledDefaults {
    fn default_content(&self, language_code: &str) -> Option<String> {
        self.texts.get(language_code).cloned()
    }
}
