use crate::model::ConditionMode;
use thiserror::Error;

/// Errors that can occur while loading condition nodes or bindings from JSON.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Failed to parse JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Could not read file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Bindings must be a JSON object mapping variable names to values")]
    BindingsNotAnObject,

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Errors that can occur when an editing operation cannot be applied to a node.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("An item with id '{0}' already exists in this sequence")]
    DuplicateId(String),

    #[error("Rule '{0}' not found")]
    RuleNotFound(String),

    #[error("Output '{0}' not found")]
    OutputNotFound(String),

    #[error("Cannot add a rule to {target}: it is not evaluated in {mode} mode")]
    InactiveTarget { target: String, mode: ConditionMode },
}

/// Errors that can occur when converting an editor payload into a `ConditionNode`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Unknown condition mode '{0}'")]
    InvalidMode(String),

    #[error("Invalid editor data: {0}")]
    ValidationError(String),
}
