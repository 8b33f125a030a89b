//! Property tests for the rewriting core over randomly generated scripts.
//!
//! - identity rewriting reproduces the input exactly
//! - traversal state is restored after every top-level call, including failed ones
//! - the two-category facade only ever sees statements as statements and
//!   expressions as expressions
//! - deep copies never alias the original

use ps_syntax_rewriter::error::{Result, RewriteError};
use ps_syntax_rewriter::ir::ps_node::*;
use ps_syntax_rewriter::ir::update::Update;
use ps_syntax_rewriter::ir::visitor::{
    rewrite_tree, rewrite_tree_with, walk_constant_expression, Identity, RewriteContext, Rewriter, SimpleRewriter,
};
use ps_syntax_rewriter::ExpectedShape;
use quickcheck::{QuickCheck, TestResult};
use test_utils::ir::generator::{ExpressionTree, ScriptTree};

/// Fails on the first constant it meets, after checking the shape it was asked for.
struct FailOnConstant {
    seen_shape: Option<ExpectedShape>,
}

impl Rewriter for FailOnConstant {
    fn visit_constant_expression(&mut self, node: &ConstantExpressionAst, cx: &mut RewriteContext) -> Result<Node> {
        self.seen_shape = Some(cx.expected_shape());
        let _ = walk_constant_expression(self, node, cx)?;
        Err(anyhow::anyhow!("constant at line {}", node.extent.start_line()).into())
    }
}

/// Records every node the facade hands out, and checks its bucket.
#[derive(Default)]
struct CategoryAudit {
    statements: usize,
    expressions: usize,
    misrouted: Vec<NodeKind>,
}

impl SimpleRewriter for CategoryAudit {
    fn visit_statement(&mut self, statement: Node, _cx: &mut RewriteContext) -> Result<Node> {
        self.statements += 1;
        if !statement.kind().is_statement() {
            self.misrouted.push(statement.kind());
        }
        Ok(statement)
    }

    fn visit_expression(&mut self, expression: Node, _cx: &mut RewriteContext) -> Result<Node> {
        self.expressions += 1;
        if !expression.kind().is_expression() {
            self.misrouted.push(expression.kind());
        }
        Ok(expression)
    }
}

fn count<A: Ast + ?Sized>(root: &A, pred: impl Fn(NodeKind) -> bool) -> usize {
    root.as_node_ref().descendants().filter(|n| pred(n.kind())).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_identity_round_trip() {
        fn prop(script: ScriptTree) -> TestResult {
            match rewrite_tree(&script.0, &mut Identity, None) {
                Ok(rewritten) if rewritten == script.0 => TestResult::passed(),
                _ => TestResult::failed(),
            }
        }

        QuickCheck::new().tests(300).quickcheck(prop as fn(ScriptTree) -> TestResult);
    }

    #[test]
    fn test_property_identity_round_trip_expression_hint() {
        fn prop(expression: ExpressionTree) -> TestResult {
            match rewrite_tree(&expression.0, &mut Identity, Some(ExpectedShape::Expression)) {
                Ok(rewritten) => TestResult::from_bool(rewritten == expression.0),
                Err(_) => TestResult::failed(),
            }
        }

        QuickCheck::new().tests(300).quickcheck(prop as fn(ExpressionTree) -> TestResult);
    }

    #[test]
    fn test_property_context_restored_after_failure() {
        fn prop(script: ScriptTree) -> TestResult {
            let mut cx = RewriteContext::new();
            let mut visitor = FailOnConstant { seen_shape: None };
            let result = rewrite_tree_with(&script.0, &mut visitor, &mut cx, None);

            if cx.expected_shape() != ExpectedShape::Any || cx.factory().depth() != 0 {
                return TestResult::failed();
            }
            let has_constant = count(&script.0, |k| k == NodeKind::ConstantExpression) > 0;
            match result {
                Err(RewriteError::Custom(_)) => TestResult::from_bool(has_constant && visitor.seen_shape.is_some()),
                Ok(rewritten) => TestResult::from_bool(!has_constant && rewritten == script.0),
                Err(_) => TestResult::failed(),
            }
        }

        QuickCheck::new().tests(300).quickcheck(prop as fn(ScriptTree) -> TestResult);
    }

    #[test]
    fn test_same_context_reusable_after_failure() {
        let script = test_utils::ir::fixtures::three_statement_script();
        let mut cx = RewriteContext::new();
        let err = rewrite_tree_with(&script, &mut FailOnConstant { seen_shape: None }, &mut cx, None).unwrap_err();
        assert!(err.to_string().contains("constant at line 1"));

        let again = rewrite_tree_with(&script, &mut Identity, &mut cx, None).unwrap();
        assert_eq!(again, script);
        assert_eq!(cx.expected_shape(), ExpectedShape::Any);
    }

    #[test]
    fn test_property_category_preservation() {
        fn prop(script: ScriptTree) -> TestResult {
            let mut audit = CategoryAudit::default();
            let rewritten = match rewrite_tree(&script.0, &mut audit, None) {
                Ok(rewritten) => rewritten,
                Err(_) => return TestResult::failed(),
            };
            let statements = count(&script.0, |k| k.is_statement());
            let expressions = count(&script.0, |k| k.is_expression());
            TestResult::from_bool(
                audit.misrouted.is_empty()
                    && audit.statements == statements
                    && audit.expressions == expressions
                    && rewritten == script.0,
            )
        }

        QuickCheck::new().tests(300).quickcheck(prop as fn(ScriptTree) -> TestResult);
    }

    #[test]
    fn test_property_deep_copy_does_not_alias() {
        fn prop(script: ScriptTree) -> TestResult {
            let copy = match script.0.deep_copy() {
                Ok(copy) => copy,
                Err(_) => return TestResult::failed(),
            };
            let original: Vec<*const Node> = script.0.as_node_ref().descendants().filter_map(sequence_address).collect();
            let copied: Vec<*const Node> = copy.as_node_ref().descendants().filter_map(sequence_address).collect();
            let aliased = copied.iter().any(|c| original.contains(c));
            TestResult::from_bool(copy == script.0 && !aliased)
        }

        QuickCheck::new().tests(200).quickcheck(prop as fn(ScriptTree) -> TestResult);
    }

    /// Heap address of every non-empty statement list. Empty vectors own no
    /// allocation and are skipped.
    fn sequence_address(node: NodeRef<'_>) -> Option<*const Node> {
        match node {
            NodeRef::NamedBlock(block) if !block.statements.is_empty() => Some(block.statements.as_ptr()),
            NodeRef::StatementBlock(block) if !block.statements.is_empty() => Some(block.statements.as_ptr()),
            _ => None,
        }
    }

    #[test]
    fn test_invalid_tree_is_rejected_not_propagated() {
        let extent = Extent::whole("broken.ps1", "if");
        // Built through public fields: no constructor ever saw it.
        let broken = IfStatementAst { extent, clauses: Vec::new(), else_clause: None };

        let err = rewrite_tree(&broken, &mut Identity, None).unwrap_err();
        assert!(matches!(err, RewriteError::EmptySequence { kind: NodeKind::IfStatement, slot: "clauses" }));

        let err = broken.deep_copy().unwrap_err();
        assert!(matches!(err, RewriteError::EmptySequence { kind: NodeKind::IfStatement, .. }));
    }

    #[test]
    fn test_mistyped_child_is_rejected() {
        let extent = Extent::whole("broken.ps1", "$a $b");
        let var = |name: &str| Node::from(VariableExpressionAst::new(extent.clone(), name, false));
        let broken = AttributedExpressionAst {
            extent: extent.clone(),
            attribute: Box::new(var("a")),
            child: Box::new(var("b")),
        };

        let err = rewrite_tree(&broken, &mut Identity, None).unwrap_err();
        assert!(matches!(
            err,
            RewriteError::Coercion { shape: ExpectedShape::Attribute, found: NodeKind::VariableExpression }
        ));
    }
}
