use thiserror::Error;

/// Reasons a resize could not be written back into the document.
///
/// None of these reach the host as failures; the plugin logs them and leaves
/// the document untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RewriteError {
    #[error("no active markdown document")]
    NoActiveDocument,

    #[error("image element has no source attribute")]
    MissingSource,

    #[error("cannot resolve a file name from source '{source_text}'")]
    UnresolvableFileName { source_text: String },

    #[error("no reference to '{file_name}' found in document")]
    NoReference { file_name: String },

    #[error("invalid reference pattern: {0}")]
    Pattern(String),
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("malformed settings json: {0}")]
    Json(#[from] serde_json::Error),
}
