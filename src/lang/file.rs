//! File-backed language store with bundled default content.

use std::path::{
    Path,
    PathBuf,
};

use super::data::LangData;

/// A [`LangData`] tied to a file on disk, layered over bundled defaults.
///
/// [`LangFile::init`] establishes the layering: the bundled default text is
/// the base, entries from the file on disk override it, and the merged
/// result is written back so that keys added to the bundled defaults in an
/// update materialize in existing user files.
#[derive(Debug, Clone)]
pub struct LangFile {
    path: PathBuf,
    default_content: String,
    data: LangData,
}

impl LangFile {
    /// Create an uninitialized language file.
    ///
    /// `default_content` is raw `.lang` text shipped with the application
    /// (may be empty). No filesystem access happens until
    /// [`LangFile::init`].
    pub fn new(path: impl Into<PathBuf>, default_content: impl Into<String>) -> Self {
        Self { path: path.into(), default_content: default_content.into(), data: LangData::new() }
    }

    /// Load the store: defaults first, then the file on disk on top.
    ///
    /// Creates missing parent directories and persists the merged result.
    /// Returns whether the write-back succeeded; on failure the in-memory
    /// store is still fully usable.
    pub fn init(&mut self) -> bool {
        self.data = LangData::parse(&self.default_content);
        if self.path.exists() {
            let existing = LangData::parse_file(&self.path);
            self.data.merge_patch(&existing);
        }

        if let Some(parent) = self.path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            tracing::warn!("Failed to create language directory {:?}: {}", parent, e);
            return false;
        }
        self.data.write_to_file(&self.path)
    }

    /// Persist the current in-memory store to the backing file.
    pub fn write_back(&self) -> bool {
        self.data.write_to_file(&self.path)
    }

    /// バッキングファイルのパス
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 読み取り用のストアへの参照
    #[must_use]
    pub fn data(&self) -> &LangData {
        &self.data
    }

    /// 書き込み用のストアへの参照
    pub fn data_mut(&mut self) -> &mut LangData {
        &mut self.data
    }

    /// See [`LangData::has_value`].
    #[must_use]
    pub fn has_value(&self, key: &str) -> bool {
        self.data.has_value(key)
    }

    /// See [`LangData::try_get`].
    #[must_use]
    pub fn try_get(&self, key: &str) -> Option<&str> {
        self.data.try_get(key)
    }

    /// See [`LangData::set_value`].
    pub fn set_value(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.data.set_value(key, value);
    }

    /// See [`LangData::translate`].
    #[must_use]
    pub fn translate(&self, key: &str, args: &[String], pattern: &str) -> String {
        self.data.translate(key, args, pattern)
    }

    /// [`LangFile::translate`] の別名
    #[must_use]
    pub fn get(&self, key: &str, args: &[String], pattern: &str) -> String {
        self.data.translate(key, args, pattern)
    }
}
