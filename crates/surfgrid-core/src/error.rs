//! Error types for surfgrid.

use thiserror::Error;

/// The main error type for surfgrid operations.
///
/// Every variant is fatal for the load that raised it: the pipeline never
/// retries internally, and nothing is committed on failure.
#[derive(Error, Debug)]
pub enum SurfgridError {
    /// The node table is inconsistent: duplicate node ids, or a face
    /// references a node id that does not exist in the node set.
    #[error("malformed mesh: {0}")]
    MalformedMesh(String),

    /// A per-node or per-element array disagrees in length with its owning
    /// id array.
    #[error("field '{name}' length mismatch: expected {expected}, got {actual}")]
    FieldLengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// An unrecognized unit name was supplied for a rescale.
    #[error("unknown {quantity} unit '{unit}'")]
    Conversion { quantity: &'static str, unit: String },

    /// JSON configuration parse error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for surfgrid operations.
pub type Result<T> = std::result::Result<T, SurfgridError>;
