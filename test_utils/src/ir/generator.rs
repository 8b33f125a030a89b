//! Module for generating random script trees for property-based testing.
//!
//! Trees are built directly through the validating constructors, shaped the way
//! a parser would produce them: statements in blocks, expressions wrapped in
//! command expressions inside pipelines, pipelines wherever a condition or a
//! value is expected. Rewriting a generated tree with the identity visitor must
//! therefore reproduce it exactly.
//!
//! Generation functions use a depth parameter to limit recursion and prevent excessive tree depth,
//! which helps avoid stack overflows and keeps property tests fast.

use quickcheck::{Arbitrary, Gen};

use ps_syntax_rewriter::ir::ps_node::*;

/// Maximum recursion depth for generation to prevent excessive tree depth.
const MAX_DEPTH: usize = 4;

pub const GENERATED_FILE: &str = "generated.ps1";

/// Text the generated extents point into. Spans are random; only their
/// positions matter to the rewriting engine.
pub const GENERATED_SOURCE: &str = "$total = 0\nforeach ($item in $items) {\n    $total += $item.Length\n}\nif ($total -gt 10) { Write-Output 'long' } else { 'short' }\n";

/// A random script, wrapped so it can implement `Arbitrary`.
#[derive(Clone, Debug)]
pub struct ScriptTree(pub ScriptBlockAst);

/// A random expression.
#[derive(Clone, Debug)]
pub struct ExpressionTree(pub Node);

const BINARY_OPERATORS: &[TokenKind] = &[
    TokenKind::Plus,
    TokenKind::Minus,
    TokenKind::Multiply,
    TokenKind::Divide,
    TokenKind::Format,
    TokenKind::Ieq,
    TokenKind::Igt,
    TokenKind::Ilt,
    TokenKind::And,
    TokenKind::Or,
    TokenKind::DotDot,
];

const UNARY_OPERATORS: &[TokenKind] = &[TokenKind::Not, TokenKind::Minus, TokenKind::PlusPlus, TokenKind::PostfixMinusMinus];

const ASSIGNMENT_OPERATORS: &[TokenKind] = &[TokenKind::Equals, TokenKind::PlusEquals, TokenKind::MinusEquals];

const COMMAND_NAMES: &[&str] = &["Write-Output", "Get-Item", "Set-Content", "Invoke-Thing", "Select-Object"];

const TYPE_NAMES: &[&str] = &["int", "string", "System.Collections.ArrayList", "hashtable"];

/// Generates a random number in the range [min, max] inclusive.
fn gen_range(g: &mut Gen, min: u32, max: u32) -> u32 {
    min + (u32::arbitrary(g) % (max - min + 1))
}

fn gen_extent(g: &mut Gen) -> Extent {
    let len = GENERATED_SOURCE.len() as u32;
    let start = gen_range(g, 0, len);
    let end = gen_range(g, start, len);
    Extent::from_offsets(GENERATED_FILE, GENERATED_SOURCE, start as usize, end as usize)
}

/// Generates a random variable name.
fn gen_var_name(g: &mut Gen) -> String {
    let starters: Vec<char> = "abcdefghijklmnopqrstuvwxyz_".chars().collect();
    let continuers: Vec<char> = "abcdefghijklmnopqrstuvwxyz0123456789_".chars().collect();
    let len = gen_range(g, 1, 8);
    let mut name = String::new();
    name.push(*g.choose(&starters).unwrap());
    for _ in 1..len {
        name.push(*g.choose(&continuers).unwrap());
    }
    name
}

/// Generates random string content (no quotes or control characters).
fn gen_string_content(g: &mut Gen) -> String {
    let len = gen_range(g, 0, 6);
    (0..len)
        .map(|_| {
            let mut c = char::arbitrary(g);
            while c.is_control() || c == '\'' || c == '"' {
                c = char::arbitrary(g);
            }
            c
        })
        .collect()
}

fn gen_variable(g: &mut Gen) -> VariableExpressionAst {
    VariableExpressionAst::new(gen_extent(g), gen_var_name(g), false)
}

fn gen_type_constraint(g: &mut Gen) -> TypeConstraintAst {
    let extent = gen_extent(g);
    let name = *g.choose(TYPE_NAMES).unwrap();
    TypeConstraintAst::new(extent.clone(), TypeName::new(name, extent))
}

/// Generates a random literal: number, string or variable.
fn gen_literal(g: &mut Gen) -> Node {
    const CHOICES: &[&str] = &["int", "string", "expandable", "variable"];
    match *g.choose(CHOICES).unwrap() {
        "int" => ConstantExpressionAst::new(gen_extent(g), i64::from(i32::arbitrary(g))).into(),
        "string" => {
            StringConstantExpressionAst::new(gen_extent(g), gen_string_content(g), StringConstantType::SingleQuoted).into()
        }
        "expandable" => {
            ExpandableStringExpressionAst::new(gen_extent(g), gen_string_content(g), StringConstantType::DoubleQuoted)
                .into()
        }
        "variable" => gen_variable(g).into(),
        _ => unreachable!(),
    }
}

/// Generates a random expression.
pub fn gen_expression(g: &mut Gen, depth: usize) -> Node {
    let depth = depth.min(MAX_DEPTH);
    if depth == 0 {
        return gen_literal(g);
    }
    const CHOICES: &[&str] = &[
        "literal", "binary", "unary", "paren", "array", "array_literal", "hashtable", "index", "member", "invoke",
        "convert", "sub", "script_block",
    ];
    let extent = gen_extent(g);
    match *g.choose(CHOICES).unwrap() {
        "literal" => gen_literal(g),
        "binary" => {
            let operator = *g.choose(BINARY_OPERATORS).unwrap();
            BinaryExpressionAst::new(
                extent.clone(),
                gen_expression(g, depth - 1),
                operator,
                gen_expression(g, depth - 1),
                extent,
            )
            .expect("binary operands are expressions")
            .into()
        }
        "unary" => {
            let operator = *g.choose(UNARY_OPERATORS).unwrap();
            UnaryExpressionAst::new(extent, operator, gen_expression(g, depth - 1))
                .expect("unary operand is an expression")
                .into()
        }
        "paren" => ParenExpressionAst::new(extent, gen_pipeline(g, depth - 1).into())
            .expect("paren holds a pipeline")
            .into(),
        "array" => ArrayExpressionAst::new(extent, gen_block(g, depth - 1)).into(),
        "array_literal" => {
            let elements = (0..gen_range(g, 2, 3)).map(|_| gen_expression(g, depth - 1)).collect();
            ArrayLiteralAst::new(extent, elements).expect("array elements are expressions").into()
        }
        "hashtable" => {
            let pairs = (0..gen_range(g, 0, 2))
                .map(|_| (gen_literal(g), Node::from(gen_pipeline(g, depth - 1))))
                .collect();
            HashtableAst::new(extent, pairs).expect("hashtable pairs are well formed").into()
        }
        "index" => IndexExpressionAst::new(extent, gen_expression(g, depth - 1), gen_expression(g, depth - 1))
            .expect("index operands are expressions")
            .into(),
        "member" => {
            let member = StringConstantExpressionAst::new(gen_extent(g), gen_var_name(g), StringConstantType::BareWord);
            MemberExpressionAst::new(extent, gen_expression(g, depth - 1), member.into(), bool::arbitrary(g))
                .expect("member access is well formed")
                .into()
        }
        "invoke" => {
            let member = StringConstantExpressionAst::new(gen_extent(g), gen_var_name(g), StringConstantType::BareWord);
            let arguments = (0..gen_range(g, 0, 2)).map(|_| gen_expression(g, depth - 1)).collect();
            InvokeMemberExpressionAst::new(extent, gen_expression(g, depth - 1), member.into(), arguments, false)
                .expect("method call is well formed")
                .into()
        }
        "convert" => ConvertExpressionAst::new(extent, gen_type_constraint(g), gen_expression(g, depth - 1))
            .expect("converted child is an expression")
            .into(),
        "sub" => SubExpressionAst::new(extent, gen_block(g, depth - 1)).into(),
        "script_block" => {
            let statements = (0..gen_range(g, 0, 2)).map(|_| gen_statement(g, depth - 1)).collect();
            let body = ScriptBlockAst::from_statements(extent.clone(), statements).expect("statements are statements");
            ScriptBlockExpressionAst::new(extent, body).into()
        }
        _ => unreachable!(),
    }
}

/// Generates a command with a name and a few arguments.
fn gen_command(g: &mut Gen, depth: usize) -> CommandAst {
    let extent = gen_extent(g);
    let name = *g.choose(COMMAND_NAMES).unwrap();
    let mut elements: Vec<Node> =
        vec![StringConstantExpressionAst::new(gen_extent(g), name, StringConstantType::BareWord).into()];
    for _ in 0..gen_range(g, 0, 2) {
        if bool::arbitrary(g) {
            let argument = if bool::arbitrary(g) { Some(gen_expression(g, depth)) } else { None };
            let parameter = CommandParameterAst::new(gen_extent(g), gen_var_name(g), argument, extent.clone())
                .expect("parameter argument is an expression");
            elements.push(parameter.into());
        } else {
            elements.push(gen_expression(g, depth));
        }
    }
    CommandAst::new(extent, elements, TokenKind::Unknown, Vec::new()).expect("command has a name")
}

/// Generates a pipeline of one to three elements.
pub fn gen_pipeline(g: &mut Gen, depth: usize) -> PipelineAst {
    let count = gen_range(g, 1, 3);
    let elements = (0..count)
        .map(|_| {
            if bool::arbitrary(g) {
                gen_command(g, depth).into()
            } else {
                let expression = gen_expression(g, depth);
                CommandExpressionAst::new(gen_extent(g), expression, Vec::new())
                    .expect("command expression wraps an expression")
                    .into()
            }
        })
        .collect();
    PipelineAst::new(gen_extent(g), elements).expect("pipeline is not empty")
}

/// Generates a statement block of zero to two statements.
pub fn gen_block(g: &mut Gen, depth: usize) -> StatementBlockAst {
    let statements = (0..gen_range(g, 0, 2)).map(|_| gen_statement(g, depth)).collect();
    StatementBlockAst::new(gen_extent(g), statements, Vec::new()).expect("block holds statements")
}

/// Generates a random statement.
pub fn gen_statement(g: &mut Gen, depth: usize) -> Node {
    let depth = depth.min(MAX_DEPTH);
    if depth == 0 {
        return gen_pipeline(g, 0).into();
    }
    const CHOICES: &[&str] = &[
        "pipeline", "assignment", "if", "while", "do_while", "foreach", "for", "switch", "try", "return", "throw",
        "break", "function",
    ];
    let extent = gen_extent(g);
    match *g.choose(CHOICES).unwrap() {
        "pipeline" => gen_pipeline(g, depth - 1).into(),
        "assignment" => {
            let operator = *g.choose(ASSIGNMENT_OPERATORS).unwrap();
            AssignmentStatementAst::new(
                extent.clone(),
                gen_variable(g).into(),
                operator,
                gen_pipeline(g, depth - 1).into(),
                extent,
            )
            .expect("assignment is well formed")
            .into()
        }
        "if" => {
            let clauses = (0..gen_range(g, 1, 2))
                .map(|_| (Node::from(gen_pipeline(g, depth - 1)), gen_block(g, depth - 1)))
                .collect();
            let else_clause = if bool::arbitrary(g) { Some(gen_block(g, depth - 1)) } else { None };
            IfStatementAst::new(extent, clauses, else_clause).expect("if has clauses").into()
        }
        "while" => WhileStatementAst::new(extent, None, gen_pipeline(g, depth - 1).into(), gen_block(g, depth - 1))
            .expect("while condition is a pipeline")
            .into(),
        "do_while" => {
            DoWhileStatementAst::new(extent, None, gen_pipeline(g, depth - 1).into(), gen_block(g, depth - 1))
                .expect("do-while condition is a pipeline")
                .into()
        }
        "foreach" => ForEachStatementAst::new(
            extent,
            None,
            ForEachFlags::None,
            gen_variable(g),
            gen_pipeline(g, depth - 1).into(),
            gen_block(g, depth - 1),
        )
        .expect("foreach is well formed")
        .into(),
        "for" => {
            let initializer = if bool::arbitrary(g) { Some(gen_pipeline(g, depth - 1).into()) } else { None };
            let condition = if bool::arbitrary(g) { Some(gen_pipeline(g, depth - 1).into()) } else { None };
            ForStatementAst::new(extent, None, initializer, condition, None, gen_block(g, depth - 1))
                .expect("for is well formed")
                .into()
        }
        "switch" => {
            let clauses = (0..gen_range(g, 0, 2)).map(|_| (gen_literal(g), gen_block(g, depth - 1))).collect();
            SwitchStatementAst::new(
                extent,
                None,
                gen_pipeline(g, depth - 1).into(),
                SwitchFlags::default(),
                clauses,
                None,
            )
            .expect("switch is well formed")
            .into()
        }
        "try" => {
            let catch = CatchClauseAst::new(gen_extent(g), vec![gen_type_constraint(g)], gen_block(g, depth - 1));
            let finally = if bool::arbitrary(g) { Some(gen_block(g, depth - 1)) } else { None };
            TryStatementAst::new(extent, gen_block(g, depth - 1), vec![catch], finally).into()
        }
        "return" => ReturnStatementAst::new(extent, Some(gen_pipeline(g, depth - 1).into()))
            .expect("return value is a pipeline")
            .into(),
        "throw" => ThrowStatementAst::new(extent, Some(gen_pipeline(g, depth - 1).into()))
            .expect("thrown value is a pipeline")
            .into(),
        "break" => BreakStatementAst::new(extent, None).expect("bare break").into(),
        "function" => {
            let parameters = (0..gen_range(g, 0, 2))
                .map(|_| ParameterAst::new(gen_extent(g), gen_variable(g), Vec::new(), None).expect("plain parameter"))
                .collect();
            let statements = (0..gen_range(g, 0, 2)).map(|_| gen_statement(g, depth - 1)).collect();
            let body = ScriptBlockAst::from_statements(gen_extent(g), statements).expect("body holds statements");
            FunctionDefinitionAst::new(extent, false, false, gen_var_name(g), parameters, body).into()
        }
        _ => unreachable!(),
    }
}

/// Generates a script of one to four top-level statements.
pub fn gen_script(g: &mut Gen, depth: usize) -> ScriptBlockAst {
    let statements = (0..gen_range(g, 1, 4)).map(|_| gen_statement(g, depth)).collect();
    ScriptBlockAst::from_statements(Extent::whole(GENERATED_FILE, GENERATED_SOURCE), statements)
        .expect("script holds statements")
}

impl Arbitrary for ScriptTree {
    fn arbitrary(g: &mut Gen) -> Self {
        ScriptTree(gen_script(g, g.size().min(MAX_DEPTH)))
    }
}

impl Arbitrary for ExpressionTree {
    fn arbitrary(g: &mut Gen) -> Self {
        ExpressionTree(gen_expression(g, g.size().min(MAX_DEPTH)))
    }
}
