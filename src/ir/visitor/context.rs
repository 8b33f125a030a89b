use crate::ir::factory::SyntaxFactory;
use crate::ir::ps_node::Extent;
use crate::ir::shape::ExpectedShape;

/// Traversal state threaded through every rewrite call: the shape requested of
/// the node being rewritten, and the factory whose position context tracks the
/// node's ancestors.
///
/// A context belongs to one traversal at a time. Independent traversals use
/// independent contexts.
#[derive(Debug, Clone, Default)]
pub struct RewriteContext {
    pub(super) expected: ExpectedShape,
    pub(super) factory: SyntaxFactory,
}

impl RewriteContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// A context whose factory falls back to `base` when no node is being
    /// visited.
    pub fn anchored_at(base: Extent) -> Self {
        Self { expected: ExpectedShape::Any, factory: SyntaxFactory::anchored_at(base) }
    }

    /// The shape the caller asked of the node currently being rewritten.
    pub fn expected_shape(&self) -> ExpectedShape {
        self.expected
    }

    /// Convenience constructors anchored at the node currently being rewritten.
    pub fn factory(&self) -> &SyntaxFactory {
        &self.factory
    }

    /// Extent of the innermost node being rewritten.
    pub fn current_extent(&self) -> &Extent {
        self.factory.current_extent()
    }
}
