use std::mem;

use tracing::{debug, trace};

use super::context::RewriteContext;
use crate::error::Result;
use crate::ir::ps_node::catalog::for_each_kind;
use crate::ir::ps_node::*;
use crate::ir::shape::ExpectedShape as Shape;

macro_rules! define_rewriter {
    ($( $variant:ident($ty:ident) => $visit:ident, $walk:ident, $witness:ident, $route:ident; )*) => {
        /// A tree-to-tree transformation.
        ///
        /// Every `visit_*` method defaults to the matching `walk_*` function,
        /// which rebuilds the node from its recursively rewritten children.
        /// Override the methods for the kinds a transformation targets; the
        /// rest of the tree comes back unchanged.
        pub trait Rewriter {
            /// Routes `node` to its kind's `visit_*` method.
            fn visit_node(&mut self, node: NodeRef<'_>, cx: &mut RewriteContext) -> Result<Node> {
                match node {
                    $( NodeRef::$variant(n) => self.$visit(n, cx), )*
                }
            }

            $(
                #[doc = concat!("Rewrites a [`", stringify!($ty), "`]. Defaults to [`", stringify!($walk), "`].")]
                fn $visit(&mut self, node: &$ty, cx: &mut RewriteContext) -> Result<Node> {
                    $walk(self, node, cx).map(Node::from)
                }
            )*
        }
    };
}

for_each_kind!(define_rewriter);

/// The rewriter that changes nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Rewriter for Identity {}

/// Rewrites one child, asking for `shape` back.
///
/// The requested shape and the position context are scoped to this call: both
/// are restored when it returns, whether the rewrite succeeded or failed. A
/// result that does not already fit `shape` is coerced to it.
pub fn rewrite<R, A>(r: &mut R, node: &A, shape: Shape, cx: &mut RewriteContext) -> Result<Node>
where
    R: Rewriter + ?Sized,
    A: Ast + ?Sized,
{
    let node = node.as_node_ref();
    let previous = mem::replace(&mut cx.expected, shape);
    let pushed = cx.factory.push_context(node.extent());
    let mut cx = scopeguard::guard(cx, move |cx| {
        cx.expected = previous;
        if pushed {
            cx.factory.pop_context();
        }
    });

    trace!(kind = %node.kind(), %shape, "rewrite");
    let rewritten = r.visit_node(node, &mut **cx)?;
    shape.coerce(rewritten)
}

/// Rewrites a child held in a slot of one concrete kind.
pub fn rewrite_as<T, R>(r: &mut R, node: &T, shape: Shape, cx: &mut RewriteContext) -> Result<T>
where
    T: Ast + FromNode,
    R: Rewriter + ?Sized,
{
    T::from_node(rewrite(r, node, shape, cx)?)
}

pub fn rewrite_opt<R, A>(r: &mut R, node: Option<&A>, shape: Shape, cx: &mut RewriteContext) -> Result<Option<Node>>
where
    R: Rewriter + ?Sized,
    A: Ast + ?Sized,
{
    node.map(|n| rewrite(r, n, shape, cx)).transpose()
}

pub fn rewrite_opt_as<T, R>(r: &mut R, node: Option<&T>, shape: Shape, cx: &mut RewriteContext) -> Result<Option<T>>
where
    T: Ast + FromNode,
    R: Rewriter + ?Sized,
{
    node.map(|n| rewrite_as(r, n, shape, cx)).transpose()
}

/// Rewrites a sequence in order. The result is always a new vector.
pub fn rewrite_all<R>(r: &mut R, nodes: &[Node], shape: Shape, cx: &mut RewriteContext) -> Result<Vec<Node>>
where
    R: Rewriter + ?Sized,
{
    nodes.iter().map(|n| rewrite(r, n, shape, cx)).collect()
}

pub fn rewrite_all_as<T, R>(r: &mut R, nodes: &[T], shape: Shape, cx: &mut RewriteContext) -> Result<Vec<T>>
where
    T: Ast + FromNode,
    R: Rewriter + ?Sized,
{
    nodes.iter().map(|n| rewrite_as(r, n, shape, cx)).collect()
}

/// Rewrites `(first, second)` pairs such as `if` clauses, left element first.
pub fn rewrite_all_pairs<A, B, R>(
    r: &mut R,
    pairs: &[(A, B)],
    first: Shape,
    second: Shape,
    cx: &mut RewriteContext,
) -> Result<Vec<(A, B)>>
where
    A: Ast + FromNode,
    B: Ast + FromNode,
    R: Rewriter + ?Sized,
{
    pairs
        .iter()
        .map(|(a, b)| Ok((rewrite_as(r, a, first, cx)?, rewrite_as(r, b, second, cx)?)))
        .collect()
}

/// Rewrites a whole tree with a fresh context.
///
/// The result has the root's concrete type; a rewriter that replaces the root
/// with a node of another kind yields a kind mismatch.
pub fn rewrite_tree<T, R>(root: &T, visitor: &mut R, hint: Option<Shape>) -> Result<T>
where
    T: Ast + FromNode,
    R: Rewriter + ?Sized,
{
    let mut cx = RewriteContext::new();
    rewrite_tree_with(root, visitor, &mut cx, hint)
}

/// Rewrites a whole tree with a caller-supplied context.
///
/// On return, successful or not, the context's expected shape and position
/// context are what they were before the call.
pub fn rewrite_tree_with<T, R>(root: &T, visitor: &mut R, cx: &mut RewriteContext, hint: Option<Shape>) -> Result<T>
where
    T: Ast + FromNode,
    R: Rewriter + ?Sized,
{
    let shape = hint.unwrap_or_default();
    debug!(root = %root.kind(), %shape, "starting rewrite");
    let result = rewrite_as(visitor, root, shape, cx);
    match &result {
        Ok(_) => debug!(root = %root.kind(), "rewrite finished"),
        Err(error) => debug!(root = %root.kind(), %error, "rewrite aborted"),
    }
    result
}

pub fn walk_array_expression<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &ArrayExpressionAst,
    cx: &mut RewriteContext,
) -> Result<ArrayExpressionAst> {
    let sub_expression = rewrite_as(r, &node.sub_expression, Shape::StatementBlock, cx)?;
    Ok(ArrayExpressionAst::new(node.extent.clone(), sub_expression))
}

pub fn walk_array_literal<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &ArrayLiteralAst,
    cx: &mut RewriteContext,
) -> Result<ArrayLiteralAst> {
    ArrayLiteralAst::new(node.extent.clone(), rewrite_all(r, &node.elements, Shape::Expression, cx)?)
}

pub fn walk_assignment_statement<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &AssignmentStatementAst,
    cx: &mut RewriteContext,
) -> Result<AssignmentStatementAst> {
    let left = rewrite(r, &node.left, Shape::Expression, cx)?;
    let right = rewrite(r, &node.right, Shape::Statement, cx)?;
    AssignmentStatementAst::new(node.extent.clone(), left, node.operator, right, node.error_position.clone())
}

pub fn walk_attribute<R: Rewriter + ?Sized>(r: &mut R, node: &AttributeAst, cx: &mut RewriteContext) -> Result<AttributeAst> {
    let positional = rewrite_all(r, &node.positional_arguments, Shape::Expression, cx)?;
    let named = rewrite_all_as(r, &node.named_arguments, Shape::NamedAttributeArgument, cx)?;
    AttributeAst::new(node.extent.clone(), node.type_name.clone(), positional, named)
}

pub fn walk_attributed_expression<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &AttributedExpressionAst,
    cx: &mut RewriteContext,
) -> Result<AttributedExpressionAst> {
    let attribute = rewrite(r, &node.attribute, Shape::Attribute, cx)?;
    let child = rewrite(r, &node.child, Shape::Expression, cx)?;
    AttributedExpressionAst::new(node.extent.clone(), attribute, child)
}

pub fn walk_binary_expression<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &BinaryExpressionAst,
    cx: &mut RewriteContext,
) -> Result<BinaryExpressionAst> {
    let left = rewrite(r, &node.left, Shape::Expression, cx)?;
    let right = rewrite(r, &node.right, Shape::Expression, cx)?;
    BinaryExpressionAst::new(node.extent.clone(), left, node.operator, right, node.error_position.clone())
}

pub fn walk_block_statement<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &BlockStatementAst,
    cx: &mut RewriteContext,
) -> Result<BlockStatementAst> {
    let body = rewrite_as(r, &node.body, Shape::StatementBlock, cx)?;
    Ok(BlockStatementAst::new(node.extent.clone(), node.kind, body))
}

pub fn walk_break_statement<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &BreakStatementAst,
    cx: &mut RewriteContext,
) -> Result<BreakStatementAst> {
    BreakStatementAst::new(node.extent.clone(), rewrite_opt(r, node.label.as_deref(), Shape::Expression, cx)?)
}

pub fn walk_catch_clause<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &CatchClauseAst,
    cx: &mut RewriteContext,
) -> Result<CatchClauseAst> {
    let catch_types = rewrite_all_as(r, &node.catch_types, Shape::TypeConstraint, cx)?;
    let body = rewrite_as(r, &node.body, Shape::StatementBlock, cx)?;
    Ok(CatchClauseAst::new(node.extent.clone(), catch_types, body))
}

pub fn walk_command<R: Rewriter + ?Sized>(r: &mut R, node: &CommandAst, cx: &mut RewriteContext) -> Result<CommandAst> {
    let elements = rewrite_all(r, &node.command_elements, Shape::CommandElement, cx)?;
    let redirections = rewrite_all(r, &node.redirections, Shape::Any, cx)?;
    CommandAst::new(node.extent.clone(), elements, node.invocation_operator, redirections)
}

pub fn walk_command_expression<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &CommandExpressionAst,
    cx: &mut RewriteContext,
) -> Result<CommandExpressionAst> {
    let expression = rewrite(r, &node.expression, Shape::Any, cx)?;
    let redirections = rewrite_all(r, &node.redirections, Shape::Any, cx)?;
    CommandExpressionAst::new(node.extent.clone(), expression, redirections)
}

pub fn walk_command_parameter<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &CommandParameterAst,
    cx: &mut RewriteContext,
) -> Result<CommandParameterAst> {
    let argument = rewrite_opt(r, node.argument.as_deref(), Shape::Any, cx)?;
    CommandParameterAst::new(node.extent.clone(), node.parameter_name.clone(), argument, node.error_position.clone())
}

pub fn walk_constant_expression<R: Rewriter + ?Sized>(
    _r: &mut R,
    node: &ConstantExpressionAst,
    _cx: &mut RewriteContext,
) -> Result<ConstantExpressionAst> {
    Ok(node.clone())
}

pub fn walk_continue_statement<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &ContinueStatementAst,
    cx: &mut RewriteContext,
) -> Result<ContinueStatementAst> {
    ContinueStatementAst::new(node.extent.clone(), rewrite_opt(r, node.label.as_deref(), Shape::Any, cx)?)
}

pub fn walk_convert_expression<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &ConvertExpressionAst,
    cx: &mut RewriteContext,
) -> Result<ConvertExpressionAst> {
    let type_constraint = rewrite_as(r, &node.type_constraint, Shape::Any, cx)?;
    let child = rewrite(r, &node.child, Shape::Any, cx)?;
    ConvertExpressionAst::new(node.extent.clone(), type_constraint, child)
}

pub fn walk_data_statement<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &DataStatementAst,
    cx: &mut RewriteContext,
) -> Result<DataStatementAst> {
    let commands_allowed = rewrite_all(r, &node.commands_allowed, Shape::Any, cx)?;
    let body = rewrite_as(r, &node.body, Shape::Any, cx)?;
    DataStatementAst::new(node.extent.clone(), node.variable.clone(), commands_allowed, body)
}

pub fn walk_do_until_statement<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &DoUntilStatementAst,
    cx: &mut RewriteContext,
) -> Result<DoUntilStatementAst> {
    let condition = rewrite(r, &node.condition, Shape::Any, cx)?;
    let body = rewrite_as(r, &node.body, Shape::Any, cx)?;
    DoUntilStatementAst::new(node.extent.clone(), node.label.clone(), condition, body)
}

pub fn walk_do_while_statement<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &DoWhileStatementAst,
    cx: &mut RewriteContext,
) -> Result<DoWhileStatementAst> {
    let condition = rewrite(r, &node.condition, Shape::Any, cx)?;
    let body = rewrite_as(r, &node.body, Shape::Any, cx)?;
    DoWhileStatementAst::new(node.extent.clone(), node.label.clone(), condition, body)
}

/// Error nodes are copied as they are; their contents are not traversed.
pub fn walk_error_expression<R: Rewriter + ?Sized>(
    _r: &mut R,
    node: &ErrorExpressionAst,
    _cx: &mut RewriteContext,
) -> Result<ErrorExpressionAst> {
    Ok(node.clone())
}

pub fn walk_error_statement<R: Rewriter + ?Sized>(
    _r: &mut R,
    node: &ErrorStatementAst,
    _cx: &mut RewriteContext,
) -> Result<ErrorStatementAst> {
    Ok(node.clone())
}

pub fn walk_exit_statement<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &ExitStatementAst,
    cx: &mut RewriteContext,
) -> Result<ExitStatementAst> {
    ExitStatementAst::new(node.extent.clone(), rewrite_opt(r, node.pipeline.as_deref(), Shape::Pipeline, cx)?)
}

pub fn walk_expandable_string_expression<R: Rewriter + ?Sized>(
    _r: &mut R,
    node: &ExpandableStringExpressionAst,
    _cx: &mut RewriteContext,
) -> Result<ExpandableStringExpressionAst> {
    Ok(node.clone())
}

pub fn walk_file_redirection<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &FileRedirectionAst,
    cx: &mut RewriteContext,
) -> Result<FileRedirectionAst> {
    let location = rewrite(r, &node.location, Shape::Any, cx)?;
    FileRedirectionAst::new(node.extent.clone(), node.from_stream, location, node.append)
}

pub fn walk_for_each_statement<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &ForEachStatementAst,
    cx: &mut RewriteContext,
) -> Result<ForEachStatementAst> {
    let variable = rewrite_as(r, &node.variable, Shape::Variable, cx)?;
    let condition = rewrite(r, &node.condition, Shape::Pipeline, cx)?;
    let body = rewrite_as(r, &node.body, Shape::StatementBlock, cx)?;
    ForEachStatementAst::new(node.extent.clone(), node.label.clone(), node.flags, variable, condition, body)
}

pub fn walk_for_statement<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &ForStatementAst,
    cx: &mut RewriteContext,
) -> Result<ForStatementAst> {
    let initializer = rewrite_opt(r, node.initializer.as_deref(), Shape::Pipeline, cx)?;
    let condition = rewrite_opt(r, node.condition.as_deref(), Shape::Pipeline, cx)?;
    let iterator = rewrite_opt(r, node.iterator.as_deref(), Shape::Pipeline, cx)?;
    let body = rewrite_as(r, &node.body, Shape::StatementBlock, cx)?;
    ForStatementAst::new(node.extent.clone(), node.label.clone(), initializer, condition, iterator, body)
}

pub fn walk_function_definition<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &FunctionDefinitionAst,
    cx: &mut RewriteContext,
) -> Result<FunctionDefinitionAst> {
    let parameters = rewrite_all_as(r, &node.parameters, Shape::Any, cx)?;
    let body = rewrite_as(r, node.body.as_ref(), Shape::Any, cx)?;
    Ok(FunctionDefinitionAst::new(
        node.extent.clone(),
        node.is_filter,
        node.is_workflow,
        node.name.clone(),
        parameters,
        body,
    ))
}

pub fn walk_hashtable<R: Rewriter + ?Sized>(r: &mut R, node: &HashtableAst, cx: &mut RewriteContext) -> Result<HashtableAst> {
    HashtableAst::new(node.extent.clone(), rewrite_all_pairs(r, &node.key_value_pairs, Shape::Any, Shape::Any, cx)?)
}

pub fn walk_if_statement<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &IfStatementAst,
    cx: &mut RewriteContext,
) -> Result<IfStatementAst> {
    let clauses = rewrite_all_pairs(r, &node.clauses, Shape::Pipeline, Shape::StatementBlock, cx)?;
    let else_clause = rewrite_opt_as(r, node.else_clause.as_ref(), Shape::StatementBlock, cx)?;
    IfStatementAst::new(node.extent.clone(), clauses, else_clause)
}

pub fn walk_index_expression<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &IndexExpressionAst,
    cx: &mut RewriteContext,
) -> Result<IndexExpressionAst> {
    let target = rewrite(r, &node.target, Shape::Any, cx)?;
    let index = rewrite(r, &node.index, Shape::Any, cx)?;
    IndexExpressionAst::new(node.extent.clone(), target, index)
}

pub fn walk_invoke_member_expression<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &InvokeMemberExpressionAst,
    cx: &mut RewriteContext,
) -> Result<InvokeMemberExpressionAst> {
    let expression = rewrite(r, &node.expression, Shape::Any, cx)?;
    let member = rewrite(r, &node.member, Shape::Any, cx)?;
    let arguments = rewrite_all(r, &node.arguments, Shape::Any, cx)?;
    InvokeMemberExpressionAst::new(node.extent.clone(), expression, member, arguments, node.is_static)
}

pub fn walk_member_expression<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &MemberExpressionAst,
    cx: &mut RewriteContext,
) -> Result<MemberExpressionAst> {
    let expression = rewrite(r, &node.expression, Shape::Any, cx)?;
    let member = rewrite(r, &node.member, Shape::Any, cx)?;
    MemberExpressionAst::new(node.extent.clone(), expression, member, node.is_static)
}

pub fn walk_merging_redirection<R: Rewriter + ?Sized>(
    _r: &mut R,
    node: &MergingRedirectionAst,
    _cx: &mut RewriteContext,
) -> Result<MergingRedirectionAst> {
    Ok(node.clone())
}

pub fn walk_named_attribute_argument<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &NamedAttributeArgumentAst,
    cx: &mut RewriteContext,
) -> Result<NamedAttributeArgumentAst> {
    let argument = rewrite(r, &node.argument, Shape::Any, cx)?;
    NamedAttributeArgumentAst::new(node.extent.clone(), node.argument_name.clone(), argument, node.expression_omitted)
}

pub fn walk_named_block<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &NamedBlockAst,
    cx: &mut RewriteContext,
) -> Result<NamedBlockAst> {
    let statements = rewrite_all(r, &node.statements, Shape::Any, cx)?;
    let traps = rewrite_all_as(r, &node.traps, Shape::Any, cx)?;
    NamedBlockAst::new(node.extent.clone(), node.block_kind, statements, traps, node.unnamed)
}

pub fn walk_param_block<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &ParamBlockAst,
    cx: &mut RewriteContext,
) -> Result<ParamBlockAst> {
    let attributes = rewrite_all_as(r, &node.attributes, Shape::Attribute, cx)?;
    let parameters = rewrite_all_as(r, &node.parameters, Shape::Any, cx)?;
    Ok(ParamBlockAst::new(node.extent.clone(), attributes, parameters))
}

pub fn walk_parameter<R: Rewriter + ?Sized>(r: &mut R, node: &ParameterAst, cx: &mut RewriteContext) -> Result<ParameterAst> {
    let name = rewrite_as(r, &node.name, Shape::Variable, cx)?;
    let attributes = rewrite_all(r, &node.attributes, Shape::Attribute, cx)?;
    let default_value = rewrite_opt(r, node.default_value.as_deref(), Shape::Any, cx)?;
    ParameterAst::new(node.extent.clone(), name, attributes, default_value)
}

pub fn walk_paren_expression<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &ParenExpressionAst,
    cx: &mut RewriteContext,
) -> Result<ParenExpressionAst> {
    ParenExpressionAst::new(node.extent.clone(), rewrite(r, &node.pipeline, Shape::Pipeline, cx)?)
}

pub fn walk_pipeline<R: Rewriter + ?Sized>(r: &mut R, node: &PipelineAst, cx: &mut RewriteContext) -> Result<PipelineAst> {
    PipelineAst::new(node.extent.clone(), rewrite_all(r, &node.pipeline_elements, Shape::Command, cx)?)
}

pub fn walk_return_statement<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &ReturnStatementAst,
    cx: &mut RewriteContext,
) -> Result<ReturnStatementAst> {
    ReturnStatementAst::new(node.extent.clone(), rewrite_opt(r, node.pipeline.as_deref(), Shape::Pipeline, cx)?)
}

pub fn walk_script_block<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &ScriptBlockAst,
    cx: &mut RewriteContext,
) -> Result<ScriptBlockAst> {
    let using_statements = rewrite_all_as(r, &node.using_statements, Shape::UsingStatement, cx)?;
    let attributes = rewrite_all_as(r, &node.attributes, Shape::Attribute, cx)?;
    let param_block = rewrite_opt_as(r, node.param_block.as_deref(), Shape::ParamBlock, cx)?;
    let begin_block = rewrite_opt_as(r, node.begin_block.as_deref(), Shape::NamedBlock, cx)?;
    let process_block = rewrite_opt_as(r, node.process_block.as_deref(), Shape::NamedBlock, cx)?;
    let end_block = rewrite_opt_as(r, node.end_block.as_deref(), Shape::NamedBlock, cx)?;
    let dynamic_param_block = rewrite_opt_as(r, node.dynamic_param_block.as_deref(), Shape::NamedBlock, cx)?;
    Ok(ScriptBlockAst::new(
        node.extent.clone(),
        using_statements,
        attributes,
        param_block,
        begin_block,
        process_block,
        end_block,
        dynamic_param_block,
    ))
}

pub fn walk_script_block_expression<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &ScriptBlockExpressionAst,
    cx: &mut RewriteContext,
) -> Result<ScriptBlockExpressionAst> {
    let script_block = rewrite_as(r, node.script_block.as_ref(), Shape::ScriptBlock, cx)?;
    Ok(ScriptBlockExpressionAst::new(node.extent.clone(), script_block))
}

pub fn walk_statement_block<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &StatementBlockAst,
    cx: &mut RewriteContext,
) -> Result<StatementBlockAst> {
    let statements = rewrite_all(r, &node.statements, Shape::Statement, cx)?;
    let traps = rewrite_all_as(r, &node.traps, Shape::Trap, cx)?;
    StatementBlockAst::new(node.extent.clone(), statements, traps)
}

pub fn walk_string_constant_expression<R: Rewriter + ?Sized>(
    _r: &mut R,
    node: &StringConstantExpressionAst,
    _cx: &mut RewriteContext,
) -> Result<StringConstantExpressionAst> {
    Ok(node.clone())
}

pub fn walk_sub_expression<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &SubExpressionAst,
    cx: &mut RewriteContext,
) -> Result<SubExpressionAst> {
    let sub_expression = rewrite_as(r, &node.sub_expression, Shape::StatementBlock, cx)?;
    Ok(SubExpressionAst::new(node.extent.clone(), sub_expression))
}

pub fn walk_switch_statement<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &SwitchStatementAst,
    cx: &mut RewriteContext,
) -> Result<SwitchStatementAst> {
    let condition = rewrite(r, &node.condition, Shape::Pipeline, cx)?;
    let clauses = rewrite_all_pairs(r, &node.clauses, Shape::Expression, Shape::StatementBlock, cx)?;
    let default = rewrite_opt_as(r, node.default.as_ref(), Shape::StatementBlock, cx)?;
    SwitchStatementAst::new(node.extent.clone(), node.label.clone(), condition, node.flags, clauses, default)
}

pub fn walk_throw_statement<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &ThrowStatementAst,
    cx: &mut RewriteContext,
) -> Result<ThrowStatementAst> {
    ThrowStatementAst::new(node.extent.clone(), rewrite_opt(r, node.pipeline.as_deref(), Shape::Pipeline, cx)?)
}

pub fn walk_trap_statement<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &TrapStatementAst,
    cx: &mut RewriteContext,
) -> Result<TrapStatementAst> {
    let trap_type = rewrite_opt_as(r, node.trap_type.as_ref(), Shape::TypeConstraint, cx)?;
    let body = rewrite_as(r, &node.body, Shape::StatementBlock, cx)?;
    Ok(TrapStatementAst::new(node.extent.clone(), trap_type, body))
}

pub fn walk_try_statement<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &TryStatementAst,
    cx: &mut RewriteContext,
) -> Result<TryStatementAst> {
    let body = rewrite_as(r, &node.body, Shape::StatementBlock, cx)?;
    let catch_clauses = rewrite_all_as(r, &node.catch_clauses, Shape::Catch, cx)?;
    let finally = rewrite_opt_as(r, node.finally.as_ref(), Shape::StatementBlock, cx)?;
    Ok(TryStatementAst::new(node.extent.clone(), body, catch_clauses, finally))
}

pub fn walk_type_constraint<R: Rewriter + ?Sized>(
    _r: &mut R,
    node: &TypeConstraintAst,
    _cx: &mut RewriteContext,
) -> Result<TypeConstraintAst> {
    Ok(node.clone())
}

pub fn walk_type_expression<R: Rewriter + ?Sized>(
    _r: &mut R,
    node: &TypeExpressionAst,
    _cx: &mut RewriteContext,
) -> Result<TypeExpressionAst> {
    Ok(node.clone())
}

pub fn walk_unary_expression<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &UnaryExpressionAst,
    cx: &mut RewriteContext,
) -> Result<UnaryExpressionAst> {
    UnaryExpressionAst::new(node.extent.clone(), node.token_kind, rewrite(r, &node.child, Shape::Expression, cx)?)
}

pub fn walk_using_expression<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &UsingExpressionAst,
    cx: &mut RewriteContext,
) -> Result<UsingExpressionAst> {
    UsingExpressionAst::new(node.extent.clone(), rewrite(r, &node.sub_expression, Shape::Expression, cx)?)
}

pub fn walk_variable_expression<R: Rewriter + ?Sized>(
    _r: &mut R,
    node: &VariableExpressionAst,
    _cx: &mut RewriteContext,
) -> Result<VariableExpressionAst> {
    Ok(node.clone())
}

pub fn walk_while_statement<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &WhileStatementAst,
    cx: &mut RewriteContext,
) -> Result<WhileStatementAst> {
    let condition = rewrite(r, &node.condition, Shape::Pipeline, cx)?;
    let body = rewrite_as(r, &node.body, Shape::StatementBlock, cx)?;
    WhileStatementAst::new(node.extent.clone(), node.label.clone(), condition, body)
}

pub fn walk_base_ctor_invoke_member_expression<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &BaseCtorInvokeMemberExpressionAst,
    cx: &mut RewriteContext,
) -> Result<BaseCtorInvokeMemberExpressionAst> {
    let arguments = rewrite_all(r, &node.arguments, Shape::Expression, cx)?;
    BaseCtorInvokeMemberExpressionAst::new(node.extent.clone(), node.base_keyword_extent.clone(), arguments)
}

pub fn walk_configuration_definition<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &ConfigurationDefinitionAst,
    cx: &mut RewriteContext,
) -> Result<ConfigurationDefinitionAst> {
    let body = rewrite_as(r, &node.body, Shape::ScriptBlockExpression, cx)?;
    let instance_name = rewrite(r, &node.instance_name, Shape::Expression, cx)?;
    ConfigurationDefinitionAst::new(node.extent.clone(), body, node.configuration_type, instance_name)
}

pub fn walk_dynamic_keyword_statement<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &DynamicKeywordStatementAst,
    cx: &mut RewriteContext,
) -> Result<DynamicKeywordStatementAst> {
    let elements = rewrite_all(r, &node.command_elements, Shape::CommandElement, cx)?;
    DynamicKeywordStatementAst::new(node.extent.clone(), elements)
}

pub fn walk_function_member<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &FunctionMemberAst,
    cx: &mut RewriteContext,
) -> Result<FunctionMemberAst> {
    let parameters = rewrite_all_as(r, &node.parameters, Shape::Parameter, cx)?;
    let body = rewrite_as(r, node.body.as_ref(), Shape::ScriptBlock, cx)?;
    let return_type = rewrite_opt_as(r, node.return_type.as_ref(), Shape::TypeConstraint, cx)?;
    let attributes = rewrite_all_as(r, &node.attributes, Shape::Any, cx)?;
    Ok(FunctionMemberAst::new(
        node.extent.clone(),
        node.name.clone(),
        parameters,
        body,
        return_type,
        attributes,
        node.method_attributes,
    ))
}

pub fn walk_property_member<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &PropertyMemberAst,
    cx: &mut RewriteContext,
) -> Result<PropertyMemberAst> {
    let property_type = rewrite_opt_as(r, node.property_type.as_ref(), Shape::TypeConstraint, cx)?;
    let attributes = rewrite_all_as(r, &node.attributes, Shape::Attribute, cx)?;
    let initial_value = rewrite_opt(r, node.initial_value.as_deref(), Shape::Expression, cx)?;
    PropertyMemberAst::new(
        node.extent.clone(),
        node.name.clone(),
        property_type,
        attributes,
        node.property_attributes,
        initial_value,
    )
}

pub fn walk_type_definition<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &TypeDefinitionAst,
    cx: &mut RewriteContext,
) -> Result<TypeDefinitionAst> {
    let attributes = rewrite_all_as(r, &node.attributes, Shape::Attribute, cx)?;
    let members = rewrite_all(r, &node.members, Shape::Member, cx)?;
    let base_types = rewrite_all_as(r, &node.base_types, Shape::TypeConstraint, cx)?;
    TypeDefinitionAst::new(node.extent.clone(), node.name.clone(), attributes, members, node.type_attributes, base_types)
}

pub fn walk_using_statement<R: Rewriter + ?Sized>(
    r: &mut R,
    node: &UsingStatementAst,
    cx: &mut RewriteContext,
) -> Result<UsingStatementAst> {
    let name = rewrite_as(r, &node.name, Shape::StringConstant, cx)?;
    Ok(UsingStatementAst::new(node.extent.clone(), node.using_statement_kind, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RewriteError;
    use crate::ir::factory::SyntaxFactory;

    /// Replaces every expression-only pipeline with its expression.
    struct Unpipe;

    impl Rewriter for Unpipe {
        fn visit_pipeline(&mut self, node: &PipelineAst, cx: &mut RewriteContext) -> Result<Node> {
            let pipeline = walk_pipeline(self, node, cx)?;
            Ok(pipeline.pure_expression().cloned().unwrap_or_else(|| pipeline.into()))
        }
    }

    fn expression_statement(f: &SyntaxFactory, expression: Node) -> Node {
        f.pipeline(vec![f.command_expression(expression).unwrap().into()]).unwrap().into()
    }

    /// `if ($a) { 2; $a = 1 }`
    fn sample(f: &SyntaxFactory) -> IfStatementAst {
        let assignment = f
            .assignment(f.variable("a").into(), expression_statement(f, f.constant(1).into()), TokenKind::Equals)
            .unwrap();
        f.if_expr(f.variable("a").into(), vec![expression_statement(f, f.constant(2).into()), assignment.into()])
            .unwrap()
    }

    #[test]
    fn test_results_are_coerced_to_requested_shape() {
        let f = SyntaxFactory::global();
        let original = sample(f);
        let rewritten = rewrite_tree(&original, &mut Unpipe, None).unwrap();

        let (condition, body) = &rewritten.clauses[0];
        assert_eq!(condition, &original.clauses[0].0);
        assert_eq!(body.statements[0].kind(), NodeKind::CommandExpression);

        let Node::AssignmentStatement(assignment) = &body.statements[1] else {
            panic!("expected an assignment, got {}", body.statements[1].kind());
        };
        assert_eq!(assignment.right.kind(), NodeKind::CommandExpression);
    }

    #[test]
    fn test_root_hint_applies_to_root() {
        let f = SyntaxFactory::global();
        let statement = expression_statement(f, f.constant(2).into());

        let unchanged = rewrite_tree(&statement, &mut Unpipe, Some(Shape::Pipeline)).unwrap();
        assert_eq!(unchanged, statement);

        let bare = rewrite_tree(&statement, &mut Unpipe, None).unwrap();
        assert_eq!(bare.kind(), NodeKind::ConstantExpression);
    }

    #[test]
    fn test_root_replaced_by_other_kind_is_mismatch() {
        struct Flatten;

        impl Rewriter for Flatten {
            fn visit_if_statement(&mut self, _node: &IfStatementAst, cx: &mut RewriteContext) -> Result<Node> {
                Ok(cx.factory().constant(0).into())
            }
        }

        let err = rewrite_tree(&sample(SyntaxFactory::global()), &mut Flatten, None).unwrap_err();
        assert!(matches!(
            err,
            RewriteError::KindMismatch { expected: NodeKind::IfStatement, found: NodeKind::ConstantExpression }
        ));
    }

    #[test]
    fn test_for_body_stays_a_block() {
        let f = SyntaxFactory::global();
        let body = f.block(vec![expression_statement(f, f.constant(1).into())]).unwrap();
        let extent = f.current_extent().clone();
        let for_loop = ForStatementAst::new(extent, None, None, None, None, body).unwrap();

        let rewritten = rewrite_tree(&for_loop, &mut Unpipe, None).unwrap();
        assert_eq!(rewritten.body.statements[0].kind(), NodeKind::CommandExpression);
    }
}
