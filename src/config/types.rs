use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// Default file-name pattern for language files in the language directory.
pub(crate) const DEFAULT_FILE_PATTERN: &str = "*.lang";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "languageDirectory")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Settings for a [`crate::i18n::LangI18n`] registry.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct I18nSettings {
    /// Directory holding one `<code>.lang` file per locale.
    pub language_directory: String,

    /// Locale code loaded and activated at startup.
    pub language_code: String,

    /// File-name pattern used when discovering language files.
    pub file_pattern: String,
}

impl I18nSettings {
    /// # Errors
    /// - Required field is empty
    /// - Invalid glob pattern
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.language_directory.is_empty() {
            errors.push(ValidationError::new(
                "languageDirectory",
                "The directory cannot be empty. Please specify a path, for example: \"lang\"",
            ));
        }

        if self.language_code.is_empty() {
            errors.push(ValidationError::new(
                "languageCode",
                "The locale code cannot be empty. Example: \"en_US\"",
            ));
        }

        if self.file_pattern.is_empty() {
            errors.push(ValidationError::new(
                "filePattern",
                "The pattern cannot be empty. Example: \"*.lang\"",
            ));
        } else if let Err(e) = globset::Glob::new(&self.file_pattern) {
            errors.push(ValidationError::new(
                "filePattern",
                format!("Invalid glob pattern '{}': {e}", self.file_pattern),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            language_directory: "lang".to_string(),
            language_code: "en_US".to_string(),
            file_pattern: DEFAULT_FILE_PATTERN.to_string(),
        }
    }
}
