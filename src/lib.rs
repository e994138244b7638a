//! mclang-i18n
//!
//! Minecraft 形式 `.lang` 翻訳ファイルのパーサーと多言語レジストリ
//!
//! The `.lang` format is one `key=value` entry per line, with `#` comments,
//! tab characters ignored and keys containing no spaces. [`lang::LangData`]
//! holds one parsed file in memory, [`lang::LangFile`] ties a store to a file
//! on disk with bundled default content, and [`i18n::LangI18n`] routes
//! translation lookups to a selected locale.

pub mod config;
pub mod i18n;
pub mod lang;

pub use i18n::{
    BundledDefaults,
    DefaultContentProvider,
    LangI18n,
    NoDefaults,
};
pub use lang::{
    DEFAULT_PATTERN,
    LangData,
    LangFile,
};
