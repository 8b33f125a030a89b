//! Error types shared by the construction combinators and the rewriting core.

use thiserror::Error;

use crate::ir::kind::{Category, NodeKind};
use crate::ir::shape::ExpectedShape;

/// Failures surfaced by node construction, updates and traversals.
///
/// Construction-time variants (`ShapeMismatch`, `EmptySequence`) are reported at
/// the offending call. `Custom` carries failures raised by user rewriters; the
/// visitor core propagates it unmodified.
#[derive(Debug, Error)]
pub enum RewriteError {
    #[error("{kind} cannot hold a {found} in its `{slot}` slot (expected {expected})")]
    ShapeMismatch {
        kind: NodeKind,
        slot: &'static str,
        expected: Category,
        found: NodeKind,
    },

    #[error("{kind} requires at least one element in `{slot}`")]
    EmptySequence { kind: NodeKind, slot: &'static str },

    #[error("expected a {expected} node, found {found}")]
    KindMismatch { expected: NodeKind, found: NodeKind },

    #[error("a {found} cannot be coerced to the {shape} shape")]
    Coercion { shape: ExpectedShape, found: NodeKind },

    #[error(transparent)]
    Custom(#[from] anyhow::Error),
}

pub type Result<T, E = RewriteError> = std::result::Result<T, E>;
