//! Hand-built trees with exact source extents, as a parser would report them.

use ps_syntax_rewriter::ir::ps_node::*;

pub const FIXTURE_FILE: &str = "fixture.ps1";

pub const THREE_STATEMENTS: &str = "$x = 1 + 2\n$x * 3\nif ($x -gt 5) { 'big' }\n";

fn span(start: usize, end: usize) -> Extent {
    Extent::from_offsets(FIXTURE_FILE, THREE_STATEMENTS, start, end)
}

fn var(start: usize) -> Node {
    VariableExpressionAst::new(span(start, start + 2), "x", false).into()
}

fn int(at: usize, value: i64) -> Node {
    ConstantExpressionAst::new(span(at, at + 1), value).into()
}

fn binary(start: usize, end: usize, left: Node, operator: TokenKind, operator_at: usize, right: Node) -> Node {
    let error_position = span(operator_at, operator_at + operator.text().len());
    BinaryExpressionAst::new(span(start, end), left, operator, right, error_position)
        .expect("operands are expressions")
        .into()
}

/// The pipeline a bare expression statement parses to.
fn expression_statement(expression: Node) -> Node {
    let extent = expression.extent().clone();
    let command = CommandExpressionAst::new(extent.clone(), expression, Vec::new()).expect("wraps an expression");
    PipelineAst::new(extent, vec![command.into()]).expect("one element").into()
}

/// ```text
/// $x = 1 + 2
/// $x * 3
/// if ($x -gt 5) { 'big' }
/// ```
///
/// Eleven expression nodes in total.
pub fn three_statement_script() -> ScriptBlockAst {
    let assignment = AssignmentStatementAst::new(
        span(0, 10),
        var(0),
        TokenKind::Equals,
        expression_statement(binary(5, 10, int(5, 1), TokenKind::Plus, 7, int(9, 2))),
        span(3, 4),
    )
    .expect("assignment is well formed");

    let product = expression_statement(binary(11, 17, var(11), TokenKind::Multiply, 14, int(16, 3)));

    let condition = expression_statement(binary(22, 30, var(22), TokenKind::Igt, 25, int(29, 5)));
    let big = StringConstantExpressionAst::new(span(34, 39), "big", StringConstantType::SingleQuoted);
    let body = StatementBlockAst::new(span(32, 41), vec![expression_statement(big.into())], Vec::new())
        .expect("block holds a statement");
    let test = IfStatementAst::new(span(18, 41), vec![(condition, body)], None).expect("one clause");

    ScriptBlockAst::from_statements(Extent::whole(FIXTURE_FILE, THREE_STATEMENTS), vec![
        assignment.into(),
        product,
        test.into(),
    ])
    .expect("statements are statements")
}

/// Number of expression nodes at or below `node`.
pub fn count_expressions<A: Ast + ?Sized>(node: &A) -> usize {
    node.as_node_ref().descendants().filter(|n| n.kind().is_expression()).count()
}
