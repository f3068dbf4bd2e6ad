use thiserror::Error;

#[derive(Error, Debug)]
pub enum WhichQueryError {
    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Failed to read {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    #[error("No element matches '{0}'")]
    TargetNotFound(String),

    #[error("Unknown variant: {0} (expected one of getBy, queryBy, findBy, getAllBy, queryAllBy, findAllBy)")]
    InvalidVariant(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error")]
    SerializationError(#[from] serde_json::Error),
}
