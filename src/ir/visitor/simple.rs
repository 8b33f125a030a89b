use super::context::RewriteContext;
use super::rewriter::*;
use crate::error::Result;
use crate::ir::ps_node::catalog::for_each_kind;
use crate::ir::ps_node::*;

macro_rules! route {
    (expression, $this:ident, $node:expr, $cx:ident) => {
        $this.visit_expression($node, $cx)
    };
    (statement, $this:ident, $node:expr, $cx:ident) => {
        $this.visit_statement($node, $cx)
    };
    (other, $this:ident, $node:expr, $cx:ident) => {
        $this.visit_other($node, $cx)
    };
}

macro_rules! define_simple_rewriter {
    ($( $variant:ident($ty:ident) => $visit:ident, $walk:ident, $witness:ident, $route:ident; )*) => {
        /// A rewriter that sees every node after its children were rewritten,
        /// sorted into three buckets instead of one method per kind.
        ///
        /// A hook should hand back a node of the bucket it received:
        /// statements for `visit_statement`, expressions for
        /// `visit_expression`. Anything else is coerced to the shape the
        /// parent asked for, and fails if no coercion exists.
        ///
        /// The per-kind `visit_*` methods default to walking the node and
        /// routing the result to its bucket. Overriding one replaces both steps
        /// for that kind, so the override decides which children are rewritten.
        pub trait SimpleRewriter {
            fn visit_statement(&mut self, statement: Node, _cx: &mut RewriteContext) -> Result<Node> {
                Ok(statement)
            }

            fn visit_expression(&mut self, expression: Node, _cx: &mut RewriteContext) -> Result<Node> {
                Ok(expression)
            }

            /// Parameters, attributes, blocks, redirections, class members and
            /// the like.
            fn visit_other(&mut self, node: Node, _cx: &mut RewriteContext) -> Result<Node> {
                Ok(node)
            }

            $(
                #[doc = concat!("Rewrites a [`", stringify!($ty), "`] and routes it as `", stringify!($route), "`.")]
                fn $visit(&mut self, node: &$ty, cx: &mut RewriteContext) -> Result<Node> {
                    let rewritten = Node::from($walk(self, node, cx)?);
                    route!($route, self, rewritten, cx)
                }
            )*
        }

        impl<T: SimpleRewriter + ?Sized> Rewriter for T {
            $(
                fn $visit(&mut self, node: &$ty, cx: &mut RewriteContext) -> Result<Node> {
                    SimpleRewriter::$visit(self, node, cx)
                }
            )*
        }
    };
}

for_each_kind!(define_simple_rewriter);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::factory::SyntaxFactory;
    use crate::ir::shape::ExpectedShape;

    /// Counts expressions, but leaves `if` conditions alone.
    #[derive(Default)]
    struct SkipConditions {
        expressions: usize,
    }

    impl SimpleRewriter for SkipConditions {
        fn visit_expression(&mut self, expression: Node, _cx: &mut RewriteContext) -> Result<Node> {
            self.expressions += 1;
            Ok(expression)
        }

        fn visit_if_statement(&mut self, node: &IfStatementAst, cx: &mut RewriteContext) -> Result<Node> {
            let clauses = node
                .clauses
                .iter()
                .map(|(condition, body)| {
                    Ok((condition.clone(), rewrite_as(self, body, ExpectedShape::StatementBlock, cx)?))
                })
                .collect::<Result<Vec<_>>>()?;
            let else_clause = rewrite_opt_as(self, node.else_clause.as_ref(), ExpectedShape::StatementBlock, cx)?;
            let rewritten = IfStatementAst::new(node.extent.clone(), clauses, else_clause)?;
            self.visit_statement(rewritten.into(), cx)
        }
    }

    #[test]
    fn test_per_kind_override_replaces_walk() {
        let f = SyntaxFactory::global();
        let body = vec![f.pipeline(vec![f.command_expression(f.constant(1).into()).unwrap().into()]).unwrap().into()];
        let test = f.if_expr(f.variable("a").into(), body).unwrap();

        let mut visitor = SkipConditions::default();
        let rewritten = rewrite_tree(&test, &mut visitor, None).unwrap();

        assert_eq!(rewritten, test);
        assert_eq!(visitor.expressions, 1);
    }
}
