//! レジストリ設定の型と読み込み
mod loader;
mod types;

pub use loader::load_from_dir;
pub(crate) use types::DEFAULT_FILE_PATTERN;
pub use types::{
    ConfigError,
    I18nSettings,
    ValidationError,
};
