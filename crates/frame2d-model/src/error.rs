//! Error types for the frame2d entity model.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors raised while building or validating a model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// An entity id collides with one already registered.
    #[error("duplicate {kind} id {id}")]
    DuplicateId {
        /// Entity kind ("node", "material", ...).
        kind: &'static str,
        /// The colliding id.
        id: i32,
    },

    /// A node id was referenced but never defined.
    #[error("node {0} does not exist")]
    UnknownNode(i32),

    /// A material id was referenced but never defined.
    #[error("material {0} does not exist")]
    UnknownMaterial(i32),

    /// A cross-section id was referenced but never defined.
    #[error("cross section {0} does not exist")]
    UnknownSection(i32),

    /// A temperature table was empty or its temperatures were not strictly
    /// increasing.
    #[error("temperature table must be non-empty with strictly increasing temperatures")]
    NonMonotonicTable,

    /// An input array has the wrong arity for its element type.
    #[error("{context}: expected {expected} values, got {got}")]
    DimensionMismatch {
        /// What was being parsed or constructed.
        context: &'static str,
        /// Required number of entries.
        expected: usize,
        /// Number of entries supplied.
        got: usize,
    },
}
