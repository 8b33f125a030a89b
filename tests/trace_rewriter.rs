//! End-to-end tests for the tracing rewriter on a known three-statement script.

use indoc::indoc;
use ps_syntax_rewriter::ir::factory::SyntaxFactory;
use ps_syntax_rewriter::ir::ps_node::*;
use ps_syntax_rewriter::ir::visitor::{rewrite_tree, Identity};
use ps_syntax_rewriter::rewriters::trace::{is_trace_wrapper, TraceRewriter, TRACER_TYPE};
use test_utils::ir::fixtures::{count_expressions, three_statement_script};

/// `$a.b = 1` and `$a[0] = 1`.
fn compound_assignments() -> Vec<AssignmentStatementAst> {
    let f = SyntaxFactory::anchored_at(Extent::whole("targets.ps1", "$a.b = 1\n$a[0] = 1\n"));
    let member: Node = f.member(f.variable("a").into(), "b", false).unwrap().into();
    let index: Node = f.index(f.variable("a").into(), f.constant(0).into()).unwrap().into();
    [member, index]
        .into_iter()
        .map(|target| {
            let one = f.pipeline(vec![f.command_expression(f.constant(1).into()).unwrap().into()]).unwrap();
            f.assignment(target, one.into(), TokenKind::Equals).unwrap()
        })
        .collect()
}

fn wrappers(root: &ScriptBlockAst) -> Vec<&ConvertExpressionAst> {
    root.as_node_ref()
        .descendants()
        .filter_map(|n| match n {
            NodeRef::ConvertExpression(c) if c.type_constraint.type_name.full_name == TRACER_TYPE => Some(c),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_expression_gets_one_wrapper() {
        let script = three_statement_script();
        assert_eq!(count_expressions(&script), 11);

        let mut tracer = TraceRewriter::new();
        let traced = rewrite_tree(&script, &mut tracer, None).unwrap();

        assert_eq!(count_expressions(&traced), 22);
        assert_eq!(tracer.wrapped(), 11);
        assert_eq!(wrappers(&traced).len(), 11);
    }

    #[test]
    fn test_wrappers_are_anchored_to_wrapped_expression() {
        let traced = rewrite_tree(&three_statement_script(), &mut TraceRewriter::new(), None).unwrap();

        for wrapper in wrappers(&traced) {
            let child = wrapper.child.extent();
            assert_eq!(&wrapper.extent, child);
            assert_eq!(&wrapper.type_constraint.extent, child);
            assert_eq!(&**wrapper.extent.file(), "fixture.ps1");
            assert!(is_trace_wrapper(&Node::from(wrapper.clone())));
        }
    }

    #[test]
    fn test_wrapped_sum_keeps_its_position() {
        let traced = rewrite_tree(&three_statement_script(), &mut TraceRewriter::new(), None).unwrap();
        let sum = wrappers(&traced)
            .into_iter()
            .find(|w| w.child.kind() == NodeKind::BinaryExpression)
            .unwrap();
        assert_eq!(sum.extent.text(), "1 + 2");
        assert_eq!((sum.extent.start_line(), sum.extent.start_column()), (1, 6));
        assert_eq!((sum.extent.end_line(), sum.extent.end_column()), (1, 11));
    }

    #[test]
    fn test_original_is_untouched() {
        let script = three_statement_script();
        let before = script.clone();
        let _ = rewrite_tree(&script, &mut TraceRewriter::new(), None).unwrap();
        assert_eq!(script, before);
        assert_eq!(rewrite_tree(&script, &mut Identity, None).unwrap(), before);
    }

    #[test]
    fn test_skip_assignment_targets() {
        let script = three_statement_script();
        let mut tracer = TraceRewriter::skipping_assignment_targets();
        let traced = rewrite_tree(&script, &mut tracer, None).unwrap();

        assert_eq!(tracer.wrapped(), 10);
        assert_eq!(count_expressions(&traced), 21);

        let end = traced.end_block.as_deref().unwrap();
        let Node::AssignmentStatement(assignment) = &end.statements[0] else {
            panic!("expected an assignment, got {}", end.statements[0].kind());
        };
        assert_eq!(assignment.left.kind(), NodeKind::VariableExpression);
    }

    #[test]
    fn test_skip_leaves_compound_targets_verbatim() {
        for assignment in compound_assignments() {
            let mut tracer = TraceRewriter::skipping_assignment_targets();
            let traced = rewrite_tree(&assignment, &mut tracer, None).unwrap();

            assert_eq!(traced.left, assignment.left);
            assert!(!traced.left.as_node_ref().descendants().any(|n| is_trace_wrapper(&n.to_node())));
            assert_eq!(tracer.wrapped(), 1);
            let right_wrappers =
                traced.right.as_node_ref().descendants().filter(|n| n.kind() == NodeKind::ConvertExpression).count();
            assert_eq!(right_wrappers, 1);
        }
    }

    #[test]
    fn test_compound_targets_are_traced_without_skip() {
        for assignment in compound_assignments() {
            let mut tracer = TraceRewriter::new();
            let traced = rewrite_tree(&assignment, &mut tracer, None).unwrap();

            assert!(is_trace_wrapper(&traced.left));
            assert_eq!(tracer.wrapped(), 4);
        }
    }

    #[test]
    fn test_json_tree_is_traced() {
        let json = indoc! {r#"
            {
              "type": "VariableExpression",
              "extent": {
                "start": { "file": "a.ps1", "line": 1, "column": 1, "offset": 0, "line_text": "$a", "script": "$a" },
                "end": { "file": "a.ps1", "line": 1, "column": 3, "offset": 2, "line_text": "$a", "script": "$a" },
                "text": "$a"
              },
              "variable_path": "a",
              "splatted": false
            }
        "#};
        let tree: Node = serde_json::from_str(json).unwrap();
        assert_eq!(tree.extent(), &Extent::whole("a.ps1", "$a"));

        let traced = rewrite_tree(&tree, &mut TraceRewriter::new(), None).unwrap();
        assert!(is_trace_wrapper(&traced));

        let value = serde_json::to_value(&traced).unwrap();
        assert_eq!(value["type"], "ConvertExpression");
        assert_eq!(value["child"]["type"], "VariableExpression");
        assert_eq!(value["type_constraint"]["type_name"]["full_name"], TRACER_TYPE);

        let reparsed: Node = serde_json::from_value(value).unwrap();
        assert_eq!(reparsed, traced);
    }
}
