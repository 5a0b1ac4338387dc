//! Error types for nf-core

use thiserror::Error;

/// Core error type for normflow
#[derive(Error, Debug)]
pub enum CoreError {
    /// N001: Configuration file not found
    #[error("[N001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// N002: Failed to parse configuration file
    #[error("[N002] Failed to parse config: {message}")]
    ConfigParseError { message: String },

    /// N003: Invalid configuration value
    #[error("[N003] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// N004: Catalog could not be understood
    #[error("[N004] Failed to parse catalog: {message}")]
    CatalogParseError { message: String },

    /// N005: Every numbered suffix for a table name was already taken
    #[error("[N005] Could not allocate a unique table name for '{base}' after {attempts} attempts")]
    NameCollisionExhausted { base: String, attempts: usize },

    /// N006: The same table name was registered twice
    #[error("[N006] Duplicate table name: {name}")]
    DuplicateTableName { name: String },

    /// N007: A top-level stream's final table name is already in use
    #[error("[N007] Top-level table '{name}' for stream '{stream}' collides with an existing table")]
    TopLevelNameCollision { name: String, stream: String },

    /// N008: Stage template failed to render
    #[error("[N008] Failed to render {stage} model for '{table}': {message}")]
    RenderError {
        stage: String,
        table: String,
        message: String,
    },

    /// N009: Empty name where an identifier is required
    #[error("[N009] Empty name in {context}")]
    EmptyName { context: String },

    /// N010: IO error
    #[error("[N010] IO error: {0}")]
    Io(#[from] std::io::Error),

    /// N011: IO error with file path context
    #[error("[N011] Failed to access '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// N012: YAML parse or serialization error
    #[error("[N012] YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    /// Whether the error comes from the naming invariants of a compilation run.
    pub fn is_naming_error(&self) -> bool {
        matches!(
            self,
            CoreError::NameCollisionExhausted { .. }
                | CoreError::DuplicateTableName { .. }
                | CoreError::TopLevelNameCollision { .. }
        )
    }
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
