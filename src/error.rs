//! Error types for type lowering and stub planning

use thiserror::Error;

use crate::schema::TypeKind;

/// Result type for codegen operations
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Codegen errors
#[derive(Error, Debug)]
pub enum CodegenError {
    /// The lowering engine was handed a node outside the output type algebra.
    #[error("Invalid type node {node}: {reason}")]
    InvalidTypeNode { node: String, reason: String },

    #[error("Unknown type: {0}")]
    UnknownType(String),

    #[error("Union {union} lists {member} ({kind:?}); members must be object or interface types")]
    InvalidUnionMember { union: String, member: String, kind: TypeKind },

    #[error("Invalid type reference: {0}")]
    InvalidTypeRef(String),

    #[error("Duplicate operation name: {0}")]
    DuplicateOperation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] config_crate::ConfigError),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),
}
