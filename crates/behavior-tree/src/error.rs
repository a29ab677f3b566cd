//! Errors raised while registering node types and building trees.
//!
//! Every error here is a configuration error: it is reported once, at
//! construction time, and no partially built tree is ever returned. Ticking a
//! tree has no error path; `Failure` is an ordinary [`Status`](crate::Status).

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BuildError>;

/// Failures surfaced by [`Registry`](crate::Registry) and
/// [`TreeBuilder`](crate::TreeBuilder).
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("node type `{type_name}` is not registered")]
    UnknownNodeType { type_name: String },

    #[error("node type `{type_name}` is already registered")]
    DuplicateRegistration { type_name: String },

    #[error(transparent)]
    Structural(#[from] StructuralError),
}

/// The shape of a description (or of a programmatically built node) is
/// invalid.
#[derive(Debug, Error)]
pub enum StructuralError {
    #[error("composite `{name}` has no children")]
    EmptyComposite { name: String },

    #[error("leaf `{name}` of type `{type_name}` cannot have children")]
    LeafWithChildren { name: String, type_name: String },

    #[error("description contains no trees")]
    MissingRoot,

    #[error("description contains {count} trees but no `main_tree` selector")]
    AmbiguousRoot { count: usize },

    #[error("tree `{id}` is not defined in the description")]
    UnknownTree { id: String },

    #[error("tree `{id}` is defined more than once")]
    DuplicateTree { id: String },

    #[error("subtree `{id}` includes itself (via {path})")]
    SubTreeCycle { id: String, path: String },

    #[error("node `{name}` is missing required attribute `{attribute}`")]
    MissingAttribute { name: String, attribute: String },

    #[error("node `{name}` has invalid attribute `{attribute}`: {reason}")]
    InvalidAttribute {
        name: String,
        attribute: String,
        reason: String,
    },

    #[error("malformed tree description: {0}")]
    Malformed(String),

    #[error("invalid RON tree description: {0}")]
    Ron(#[from] ron::error::SpannedError),

    #[error("invalid JSON tree description: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read tree description {path:?}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
