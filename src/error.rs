use thiserror::Error;

/// Top-level error type for the wireframe scene crate.
#[derive(Debug, Error)]
pub enum WiresceneError {
    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors related to the scene graph arena.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("{child} is already owned by another {parent}")]
    AlreadyOwned {
        child: &'static str,
        parent: &'static str,
    },

    #[error("{child} is listed more than once in the same {parent}")]
    DuplicateChild {
        child: &'static str,
        parent: &'static str,
    },
}

/// Errors related to flattening geometry into line buffers.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`WiresceneError`].
pub type Result<T> = std::result::Result<T, WiresceneError>;
