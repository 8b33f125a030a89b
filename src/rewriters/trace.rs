//! Expression tracing.
//!
//! Wraps expressions in a conversion to the `Tracer` type, so a host that
//! registers such a type sees every value the script computes:
//!
//! ```text
//! $x = 1 + 2     =>    $x = [Tracer]([Tracer]1 + [Tracer]2)
//! ```
//!
//! Only expressions whose use site accepts any node or requires an expression
//! are wrapped. Pipeline elements, conditions and the like keep their original
//! shape.

use tracing::trace;

use crate::error::Result;
use crate::ir::construct::ConstructAs;
use crate::ir::kind;
use crate::ir::ps_node::*;
use crate::ir::shape::ExpectedShape;
use crate::ir::update::{AssignmentStatementOverrides, Update};
use crate::ir::visitor::{rewrite, walk_assignment_statement, RewriteContext, SimpleRewriter};

pub const TRACER_TYPE: &str = "Tracer";

#[derive(Debug, Clone, Default)]
pub struct TraceRewriter {
    /// Leave the left-hand side of assignments unwrapped.
    pub skip_assignment_targets: bool,
    wrapped: usize,
}

impl TraceRewriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn skipping_assignment_targets() -> Self {
        TraceRewriter { skip_assignment_targets: true, ..Self::default() }
    }

    /// Number of wrappers synthesized so far.
    pub fn wrapped(&self) -> usize {
        self.wrapped
    }
}

/// Whether `node` is a tracing wrapper synthesized around its own child.
pub fn is_trace_wrapper(node: &Node) -> bool {
    match node {
        Node::ConvertExpression(convert) => {
            convert.type_constraint.type_name.full_name == TRACER_TYPE && convert.extent.same_span(convert.child.extent())
        }
        _ => false,
    }
}

impl SimpleRewriter for TraceRewriter {
    fn visit_assignment_statement(&mut self, node: &AssignmentStatementAst, cx: &mut RewriteContext) -> Result<Node> {
        let assignment = if self.skip_assignment_targets {
            let right = rewrite(self, &*node.right, ExpectedShape::Statement, cx)?;
            node.update(AssignmentStatementOverrides { right: Some(right), ..Default::default() })?
        } else {
            walk_assignment_statement(self, node, cx)?
        };
        self.visit_statement(assignment.into(), cx)
    }

    fn visit_expression(&mut self, expression: Node, cx: &mut RewriteContext) -> Result<Node> {
        if !matches!(cx.expected_shape(), ExpectedShape::Any | ExpectedShape::Expression) {
            return Ok(expression);
        }
        trace!(kind = %expression.kind(), "wrapping expression");
        let anchor = expression.extent().clone();
        let wrapper = anchor.construct_as(kind::CONVERT_EXPRESSION, (TRACER_TYPE, expression))?;
        self.wrapped += 1;
        Ok(wrapper.into())
    }
}
