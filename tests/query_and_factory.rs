//! Read-only queries, and rewriters that build new nodes through the
//! position-aware factory while the tree is being walked.

use ps_syntax_rewriter::ir::factory::SyntaxFactory;
use ps_syntax_rewriter::ir::ps_node::*;
use ps_syntax_rewriter::ir::visitor::{
    query_descendants, rewrite_tree, rewrite_tree_with, walk_variable_expression, Query, RewriteContext, Rewriter,
};
use ps_syntax_rewriter::Result;
use test_utils::ir::fixtures::{three_statement_script, FIXTURE_FILE, THREE_STATEMENTS};

/// Names of referenced variables.
struct VariableNames;

impl Query for VariableNames {
    type Output = Option<String>;

    fn visit_variable_expression(&mut self, node: &VariableExpressionAst) -> Self::Output {
        Some(node.variable_path.clone())
    }
}

/// Operators of binary expressions, as written.
struct Operators;

impl Query for Operators {
    type Output = Vec<&'static str>;

    fn visit_binary_expression(&mut self, node: &BinaryExpressionAst) -> Self::Output {
        vec![node.operator.text()]
    }
}

/// `$x` becomes `$x.Value`, positioned where `$x` was.
struct DerefVariables {
    anchors: Vec<Extent>,
}

impl Rewriter for DerefVariables {
    fn visit_variable_expression(&mut self, node: &VariableExpressionAst, cx: &mut RewriteContext) -> Result<Node> {
        let var = walk_variable_expression(self, node, cx)?;
        self.anchors.push(cx.current_extent().clone());
        Ok(cx.factory().member(var.into(), "Value", false)?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_collects_variable_names_in_source_order() {
        let script = three_statement_script();
        let names: Vec<String> = query_descendants(&mut VariableNames, &script).into_iter().flatten().collect();
        assert_eq!(names, ["x", "x", "x"]);
    }

    #[test]
    fn test_query_defaults_for_uninteresting_kinds() {
        let script = three_statement_script();
        let results = query_descendants(&mut Operators, &script);
        assert_eq!(results.len(), script.as_node_ref().descendants().count());

        let operators: Vec<&str> = results.into_iter().flatten().collect();
        assert_eq!(operators, ["+", "*", "-gt"]);
    }

    #[test]
    fn test_query_on_single_node() {
        let script = three_statement_script();
        let first = &script.end_block.as_deref().unwrap().statements[0];
        let Node::AssignmentStatement(assignment) = first else {
            panic!("expected an assignment, got {}", first.kind());
        };
        assert_eq!(VariableNames.query(assignment.left.as_node_ref()), Some("x".to_string()));
        assert_eq!(VariableNames.query(first.as_node_ref()), None);
    }

    #[test]
    fn test_factory_nodes_take_position_of_visited_node() {
        let script = three_statement_script();
        let mut deref = DerefVariables { anchors: Vec::new() };
        let rewritten = rewrite_tree(&script, &mut deref, None).unwrap();

        let members: Vec<&MemberExpressionAst> = rewritten
            .as_node_ref()
            .descendants()
            .filter_map(|n| match n {
                NodeRef::MemberExpression(m) => Some(m),
                _ => None,
            })
            .collect();
        assert_eq!(members.len(), 3);
        assert_eq!(deref.anchors.len(), 3);

        for (member, anchor) in members.iter().zip(&deref.anchors) {
            assert_eq!(member.extent.text(), "$x");
            assert!(member.extent.same_span(anchor));
            assert!(member.expression.extent().same_span(anchor));
            assert_eq!(member.member.extent(), &member.extent);
        }

        let columns: Vec<(usize, usize)> =
            deref.anchors.iter().map(|e| (e.start_line(), e.start_column())).collect();
        assert_eq!(columns, [(1, 1), (2, 1), (3, 5)]);
    }

    #[test]
    fn test_anchor_falls_back_to_base_between_traversals() {
        let base = Extent::whole(FIXTURE_FILE, THREE_STATEMENTS);
        let mut cx = RewriteContext::anchored_at(base.clone());
        let mut deref = DerefVariables { anchors: Vec::new() };

        let _ = rewrite_tree_with(&three_statement_script(), &mut deref, &mut cx, None).unwrap();

        assert_eq!(cx.factory().depth(), 0);
        assert!(Extent::ptr_eq(cx.current_extent(), &base));
        let fresh = cx.factory().variable("y");
        assert!(Extent::ptr_eq(&fresh.extent, &base));
    }

    #[test]
    fn test_global_factory_uses_placeholder() {
        let factory = SyntaxFactory::global();
        assert_eq!(factory.depth(), 0);
        let var = factory.variable("y");
        assert_eq!(var.extent.text(), "");
        assert_eq!((var.extent.start_line(), var.extent.start_column()), (1, 1));
        assert!(Extent::ptr_eq(&var.extent, &factory.variable("z").extent));
    }
}
