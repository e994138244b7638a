//! In-memory translation store.

use std::collections::{
    BTreeMap,
    HashMap,
};
use std::path::Path;

use super::format;
use super::parser;

/// One parsed `.lang` file: a mapping from translation keys to values.
///
/// Entries reach the store either through parsing (which never keeps an
/// empty value) or through [`LangData::set_value`] / [`LangData::merge_patch`].
/// Later insertions of the same key always overwrite earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LangData {
    entries: HashMap<String, String>,
}

impl LangData {
    /// 空のストアを作成
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from an existing mapping.
    #[must_use]
    pub fn from_entries(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Parse raw `.lang` text into a store.
    ///
    /// Malformed lines are skipped silently; there is no partial-failure
    /// signal (see [`crate::lang::parser`] for the per-line rules).
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self { entries: parser::parse_text(text) }
    }

    /// Parse a `.lang` file into a store.
    ///
    /// An unopenable file yields an empty store, not an error.
    #[must_use]
    pub fn parse_file(path: impl AsRef<Path>) -> Self {
        Self { entries: parser::parse_path(path.as_ref()) }
    }

    /// キーが存在するか
    #[must_use]
    pub fn has_value(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Unconditional upsert.
    pub fn set_value(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Look up a key without inserting.
    #[must_use]
    pub fn try_get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Remove a key if present. Removing an absent key is a no-op.
    pub fn erase(&mut self, key: &str) {
        self.entries.remove(key);
    }

    /// Upsert every entry of `other` into `self`.
    ///
    /// On conflict the incoming value wins; keys present only in `self` are
    /// untouched. This is the layered-override operation used to apply a
    /// patch file on top of a base language file.
    pub fn merge_patch(&mut self, other: &Self) {
        for (key, value) in &other.entries {
            self.entries.insert(key.clone(), value.clone());
        }
    }

    /// Direct mutable access to the underlying mapping.
    ///
    /// Escape hatch: writes through this reference bypass every store-level
    /// rule except "value is a string". In particular a caller can insert
    /// empty values that parsing would have dropped.
    pub fn entries_mut(&mut self) -> &mut HashMap<String, String> {
        &mut self.entries
    }

    /// 登録されているエントリ数
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// エントリが存在しないか
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize to `.lang` text.
    ///
    /// One `key=value\n` line per entry, in ascending byte-wise key order
    /// regardless of insertion order. Values are written verbatim; no
    /// comments or escaping are emitted.
    #[must_use]
    pub fn dump(&self) -> String {
        let sorted: BTreeMap<&str, &str> =
            self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();

        let mut out = String::new();
        for (key, value) in sorted {
            out.push_str(key);
            out.push('=');
            out.push_str(value);
            out.push('\n');
        }
        out
    }

    /// Write [`LangData::dump`] output to a file.
    ///
    /// Returns whether the destination could be written. Failure is logged
    /// and is not fatal to the store.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        match std::fs::write(path, self.dump()) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Failed to write language file {:?}: {}", path, e);
                false
            }
        }
    }

    /// Translate a key, substituting `args` into the stored value.
    ///
    /// A missing key returns the key itself; that is the defined fallback
    /// for untranslated messages, not an error. See
    /// [`crate::lang::DEFAULT_PATTERN`] for how `pattern` forms the
    /// per-argument tokens.
    #[must_use]
    pub fn translate(&self, key: &str, args: &[String], pattern: &str) -> String {
        match self.entries.get(key) {
            Some(value) => format::apply_args(value, args, pattern),
            None => key.to_string(),
        }
    }

    /// [`LangData::translate`] の別名
    #[must_use]
    pub fn get(&self, key: &str, args: &[String], pattern: &str) -> String {
        self.translate(key, args, pattern)
    }
}
