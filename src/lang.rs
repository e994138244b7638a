//! `.lang` 形式の翻訳データ
mod data;
mod file;
mod format;
mod parser;

pub use data::LangData;
pub use file::LangFile;
pub use format::DEFAULT_PATTERN;
