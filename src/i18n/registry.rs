//! Multi-locale translation registry.

use std::collections::HashMap;
use std::path::{
    Path,
    PathBuf,
};

use globset::Glob;

use super::provider::DefaultContentProvider;
use crate::config::{
    DEFAULT_FILE_PATTERN,
    I18nSettings,
};
use crate::lang::LangFile;

/// A registry owning one [`LangFile`] per locale code, with one code
/// selected as active.
///
/// Translation requests are routed to the active store; while no locale is
/// active (or the active store misses the key) the key itself is returned.
/// The active selection is an owned code looked up on use, never a
/// reference into the map, so replacing a store can not leave it dangling.
#[derive(Debug)]
pub struct LangI18n {
    language_directory: PathBuf,
    file_pattern: String,
    languages: HashMap<String, LangFile>,
    /// 現在アクティブな言語コード（未選択の場合は `None`）
    localization: Option<String>,
    defaults: Box<dyn DefaultContentProvider>,
}

impl LangI18n {
    /// Create a registry rooted at `language_directory` and activate
    /// `language_code`.
    ///
    /// The initial locale is loaded through the default-content provider;
    /// even when its file can neither be read nor written the registry ends
    /// up with a usable (possibly default-content) store.
    pub fn new(
        language_directory: impl Into<PathBuf>,
        language_code: impl Into<String>,
        defaults: Box<dyn DefaultContentProvider>,
    ) -> Self {
        let i18n = Self {
            language_directory: language_directory.into(),
            file_pattern: DEFAULT_FILE_PATTERN.to_string(),
            languages: HashMap::new(),
            localization: None,
            defaults,
        };
        i18n.with_initial_language(&language_code.into())
    }

    /// [`LangI18n::new`] driven by loaded settings.
    pub fn from_settings(settings: &I18nSettings, defaults: Box<dyn DefaultContentProvider>) -> Self {
        let i18n = Self {
            language_directory: PathBuf::from(&settings.language_directory),
            file_pattern: settings.file_pattern.clone(),
            languages: HashMap::new(),
            localization: None,
            defaults,
        };
        i18n.with_initial_language(&settings.language_code)
    }

    fn with_initial_language(mut self, language_code: &str) -> Self {
        if self.load_or_create_language(language_code) && !self.choose_language(language_code) {
            tracing::warn!("Initial language {:?} could not be activated", language_code);
        }
        self
    }

    /// Load `language_code` through the default-content provider, layering
    /// any existing file on disk over the bundled text.
    ///
    /// The store is registered (replacing a previous one for the same code)
    /// even when persisting it fails; only an empty code is rejected.
    pub fn load_or_create_language(&mut self, language_code: &str) -> bool {
        if language_code.is_empty() {
            return false;
        }
        let path = self.language_file_path(language_code);
        let default_content = self.defaults.default_content(language_code).unwrap_or_default();

        let mut language = LangFile::new(path, default_content);
        if !language.init() {
            tracing::warn!("Language file for {:?} could not be persisted", language_code);
        }
        tracing::debug!(language_code, entries = language.data().len(), "Loaded language");
        self.languages.insert(language_code.to_string(), language);
        true
    }

    /// Register an already-built store for `language_code`.
    ///
    /// A previously registered store under the same code is replaced and
    /// released. Returns whether registration succeeded.
    pub fn load_language(&mut self, language_code: &str, language: LangFile) -> bool {
        if language_code.is_empty() {
            return false;
        }
        self.languages.insert(language_code.to_string(), language);
        true
    }

    /// Register raw `.lang` text as the bundled defaults for
    /// `language_code`, layering any existing file over it.
    pub fn load_language_text(&mut self, language_code: &str, text: &str) -> bool {
        if language_code.is_empty() {
            return false;
        }
        let mut language = LangFile::new(self.language_file_path(language_code), text);
        if !language.init() {
            tracing::warn!("Language file for {:?} could not be persisted", language_code);
        }
        self.languages.insert(language_code.to_string(), language);
        true
    }

    /// Load every file in the language directory whose name matches the
    /// configured file pattern (default `*.lang`), taking the file stem as
    /// the locale code. Returns how many languages were loaded.
    pub fn load_all_languages(&mut self) -> usize {
        let matcher = match Glob::new(&self.file_pattern) {
            Ok(glob) => glob.compile_matcher(),
            Err(e) => {
                tracing::warn!("Invalid language file pattern {:?}: {}", self.file_pattern, e);
                return 0;
            }
        };
        let entries = match std::fs::read_dir(&self.language_directory) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(
                    "Failed to read language directory {:?}: {}",
                    self.language_directory,
                    e
                );
                return 0;
            }
        };

        let mut codes = Vec::new();
        for entry in entries {
            let Ok(entry) = entry else {
                continue;
            };
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(name) = path.file_name() else {
                continue;
            };
            if !matcher.is_match(Path::new(name)) {
                continue;
            }
            if let Some(stem) = path.file_stem() {
                codes.push(stem.to_string_lossy().to_string());
            }
        }

        codes.into_iter().filter(|code| self.load_or_create_language(code)).count()
    }

    /// Make `language_code` the active locale.
    ///
    /// Only registered codes can be chosen; on an unknown code the previous
    /// selection stays active and `false` is returned. Missing codes are
    /// never loaded implicitly.
    pub fn choose_language(&mut self, language_code: &str) -> bool {
        if self.languages.contains_key(language_code) {
            self.localization = Some(language_code.to_string());
            true
        } else {
            tracing::warn!("Cannot choose unregistered language {:?}", language_code);
            false
        }
    }

    /// Translate `key` via the active locale's store.
    ///
    /// With no active locale the key is returned unchanged, matching the
    /// missing-translation fallback of [`crate::lang::LangData::translate`].
    #[must_use]
    pub fn translate(&self, key: &str, args: &[String], pattern: &str) -> String {
        match self.localization.as_ref().and_then(|code| self.languages.get(code)) {
            Some(language) => language.translate(key, args, pattern),
            None => key.to_string(),
        }
    }

    /// [`LangI18n::translate`] の別名
    #[must_use]
    pub fn get(&self, key: &str, args: &[String], pattern: &str) -> String {
        self.translate(key, args, pattern)
    }

    /// 現在アクティブな言語コード
    #[must_use]
    pub fn current_language(&self) -> Option<&str> {
        self.localization.as_deref()
    }

    /// Registered locale codes in ascending order.
    #[must_use]
    pub fn language_codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.languages.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// Registered store for `language_code`, if any.
    #[must_use]
    pub fn language(&self, language_code: &str) -> Option<&LangFile> {
        self.languages.get(language_code)
    }

    /// Mutable access to the registered store for `language_code`.
    pub fn language_mut(&mut self, language_code: &str) -> Option<&mut LangFile> {
        self.languages.get_mut(language_code)
    }

    fn language_file_path(&self, language_code: &str) -> PathBuf {
        self.language_directory.join(format!("{language_code}.lang"))
    }
}
