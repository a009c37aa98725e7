//! Error types for schema loading and interpretation.

use thiserror::Error;

/// Errors raised while loading or interpreting a schema.
///
/// Every variant is fatal to the current generation run.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// The schema has no `nodes` section
    #[error("You need to define at least one node to generate (missing `nodes` section)")]
    MissingNodes,

    /// A relationship references a label that no node-spec declares
    #[error("The start or end node of relationship '{relationship}' is not defined (label '{label}')")]
    UndeclaredLabel { relationship: String, label: String },

    /// A property names a generator that does not exist
    #[error("Unknown generator '{generator}' for property '{property}'")]
    UnknownGenerator { property: String, generator: String },

    /// A node property uses a name the generator writes itself
    #[error("Property '{property}' on node '{label}' is reserved")]
    ReservedProperty { label: String, property: String },

    /// A generator received parameters it cannot use
    #[error("Invalid parameters for generator '{generator}' on property '{property}': {reason}")]
    InvalidParams {
        property: String,
        generator: String,
        reason: String,
    },

    /// Error reading a schema file
    #[error("Failed to read schema file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML schema: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Error parsing JSON
    #[error("Failed to parse JSON schema: {0}")]
    Json(#[from] serde_json::Error),

    /// Schema file extension not recognized
    #[error("Unsupported schema file format: {0} (expected .yml, .yaml or .json)")]
    UnsupportedFormat(String),
}

impl ConfigurationError {
    /// Shorthand for [`ConfigurationError::InvalidParams`].
    pub fn invalid_params(
        property: impl Into<String>,
        generator: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidParams {
            property: property.into(),
            generator: generator.into(),
            reason: reason.into(),
        }
    }
}
