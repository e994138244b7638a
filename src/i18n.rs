//! 多言語レジストリ
mod provider;
mod registry;

pub use provider::{
    BundledDefaults,
    DefaultContentProvider,
    NoDefaults,
};
pub use registry::LangI18n;
