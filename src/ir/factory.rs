//! The syntax factory: position-context stack plus convenience constructors.
//!
//! Every constructor takes its extent from the current anchor, which the
//! rewriting core pushes as it descends into each node. Outside a traversal,
//! [`SyntaxFactory::global`] anchors everything to the placeholder extent of
//! the unnamed script.

use once_cell::sync::Lazy;
use tracing::debug;

use crate::error::Result;
use crate::ir::position::{extent_from_literal, placeholder_extent, placeholder_for};
use crate::ir::ps_node::*;

static DEFAULT_FACTORY: Lazy<SyntaxFactory> = Lazy::new(SyntaxFactory::new);

#[derive(Debug, Clone)]
pub struct SyntaxFactory {
    base: Extent,
    context: Vec<Extent>,
}

impl Default for SyntaxFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxFactory {
    pub fn new() -> Self {
        Self::anchored_at(placeholder_extent("", ""))
    }

    /// A factory whose base anchor is `extent` instead of the placeholder.
    pub fn anchored_at(extent: Extent) -> Self {
        SyntaxFactory { base: extent, context: Vec::new() }
    }

    /// The shared, immutable default factory.
    pub fn global() -> &'static SyntaxFactory {
        &DEFAULT_FACTORY
    }

    pub fn current_extent(&self) -> &Extent {
        self.context.last().unwrap_or(&self.base)
    }

    /// Number of anchors pushed above the base.
    pub fn depth(&self) -> usize {
        self.context.len()
    }

    /// Makes `extent` the current anchor. Returns `false` without pushing when
    /// it covers the same lines and columns as the current anchor; callers pop
    /// only when this returned `true`.
    pub fn push_context(&mut self, extent: &Extent) -> bool {
        if self.current_extent().same_span(extent) {
            return false;
        }
        self.context.push(extent.clone());
        true
    }

    /// Restores the previous anchor. The base anchor is never removed.
    pub fn pop_context(&mut self) -> Option<Extent> {
        let popped = self.context.pop();
        if popped.is_none() {
            debug!("position context underflow ignored");
        }
        popped
    }

    fn extent(&self) -> Extent {
        self.current_extent().clone()
    }

    fn placeholder(&self) -> Extent {
        placeholder_for(self.current_extent())
    }

    pub fn member(&self, expression: Node, member_name: &str, is_static: bool) -> Result<MemberExpressionAst> {
        self.member_with(expression, self.string(member_name).into(), is_static)
    }

    pub fn member_with(&self, expression: Node, member: Node, is_static: bool) -> Result<MemberExpressionAst> {
        MemberExpressionAst::new(self.extent(), expression, member, is_static)
    }

    pub fn type_expr(&self, type_name: &str) -> TypeExpressionAst {
        TypeExpressionAst::new(self.extent(), TypeName::new(type_name, self.extent()))
    }

    pub fn type_constraint(&self, type_name: &str) -> TypeConstraintAst {
        TypeConstraintAst::new(self.extent(), TypeName::new(type_name, self.extent()))
    }

    /// `@( statements )`
    pub fn array(&self, statements: Vec<Node>) -> Result<ArrayExpressionAst> {
        Ok(ArrayExpressionAst::new(self.extent(), self.block(statements)?))
    }

    pub fn index(&self, target: Node, index: Node) -> Result<IndexExpressionAst> {
        IndexExpressionAst::new(self.extent(), target, index)
    }

    pub fn block(&self, statements: Vec<Node>) -> Result<StatementBlockAst> {
        StatementBlockAst::new(self.extent(), statements, Vec::new())
    }

    pub fn if_else(
        &self,
        condition: Node,
        then_body: StatementBlockAst,
        else_body: Option<StatementBlockAst>,
    ) -> Result<IfStatementAst> {
        IfStatementAst::new(self.extent(), vec![(condition, then_body)], else_body)
    }

    /// `if (condition) { statements }` for an expression condition.
    pub fn if_expr(&self, condition: Node, statements: Vec<Node>) -> Result<IfStatementAst> {
        let condition = self.pipeline(vec![self.command_expression(condition)?.into()])?;
        self.if_else(condition.into(), self.block(statements)?, None)
    }

    pub fn unary(&self, child: Node, operator: TokenKind) -> Result<UnaryExpressionAst> {
        UnaryExpressionAst::new(self.extent(), operator, child)
    }

    pub fn paren(&self, pipeline: Node) -> Result<ParenExpressionAst> {
        ParenExpressionAst::new(self.extent(), pipeline)
    }

    pub fn assignment(&self, left: Node, right: Node, operator: TokenKind) -> Result<AssignmentStatementAst> {
        AssignmentStatementAst::new(self.extent(), left, operator, right, self.placeholder())
    }

    pub fn pipeline(&self, commands: Vec<Node>) -> Result<PipelineAst> {
        PipelineAst::new(self.extent(), commands)
    }

    pub fn variable(&self, name: &str) -> VariableExpressionAst {
        VariableExpressionAst::new(self.extent(), name, false)
    }

    pub fn splatted_variable(&self, name: &str) -> VariableExpressionAst {
        VariableExpressionAst::new(self.extent(), name, true)
    }

    pub fn constant(&self, value: impl Into<ConstantValue>) -> ConstantExpressionAst {
        ConstantExpressionAst::new(self.extent(), value)
    }

    /// `& name elements...`
    pub fn command(&self, command_name: &str, elements: Vec<Node>) -> Result<CommandAst> {
        self.command_with(command_name, TokenKind::Ampersand, elements)
    }

    pub fn command_with(
        &self,
        command_name: &str,
        invocation_operator: TokenKind,
        elements: Vec<Node>,
    ) -> Result<CommandAst> {
        let mut command_elements = Vec::with_capacity(elements.len() + 1);
        command_elements.push(self.string(command_name).into());
        command_elements.extend(elements);
        CommandAst::new(self.extent(), command_elements, invocation_operator, Vec::new())
    }

    pub fn command_parameter(&self, parameter_name: &str, argument: Option<Node>) -> Result<CommandParameterAst> {
        CommandParameterAst::new(self.extent(), parameter_name, argument, self.placeholder())
    }

    /// A bare word.
    pub fn string(&self, value: &str) -> StringConstantExpressionAst {
        self.quoted_string(value, StringConstantType::BareWord)
    }

    pub fn quoted_string(&self, value: &str, string_constant_type: StringConstantType) -> StringConstantExpressionAst {
        StringConstantExpressionAst::new(self.extent(), value, string_constant_type)
    }

    /// A string whose extent is synthesized from its own text rather than the
    /// current anchor.
    pub fn literal(&self, value: &str, string_constant_type: StringConstantType) -> StringConstantExpressionAst {
        StringConstantExpressionAst::new(
            extent_from_literal(value, self.current_extent()),
            value,
            string_constant_type,
        )
    }

    pub fn binary(&self, left: Node, operator: TokenKind, right: Node) -> Result<BinaryExpressionAst> {
        BinaryExpressionAst::new(self.extent(), left, operator, right, self.placeholder())
    }

    pub fn add(&self, left: Node, right: Node) -> Result<BinaryExpressionAst> {
        self.binary(left, TokenKind::Plus, right)
    }

    /// `format -f args`; several arguments are passed as an array literal.
    pub fn format(&self, format: Node, mut args: Vec<Node>) -> Result<BinaryExpressionAst> {
        let right = if args.len() == 1 {
            args.remove(0)
        } else {
            self.array_literal(args)?.into()
        };
        self.binary(format, TokenKind::Format, right)
    }

    pub fn array_literal(&self, items: Vec<Node>) -> Result<ArrayLiteralAst> {
        ArrayLiteralAst::new(self.extent(), items)
    }

    pub fn increment(&self, child: Node) -> Result<UnaryExpressionAst> {
        self.unary(child, TokenKind::PlusPlus)
    }

    pub fn decrement(&self, child: Node) -> Result<UnaryExpressionAst> {
        self.unary(child, TokenKind::MinusMinus)
    }

    pub fn invoke_member(&self, expression: Node, method_name: &str, arguments: Vec<Node>) -> Result<InvokeMemberExpressionAst> {
        self.invoke_member_with(false, expression, self.string(method_name).into(), arguments)
    }

    /// `[type]::Method(args)`
    pub fn invoke_static(&self, type_name: &str, method_name: &str, arguments: Vec<Node>) -> Result<InvokeMemberExpressionAst> {
        self.invoke_member_with(true, self.type_expr(type_name).into(), self.string(method_name).into(), arguments)
    }

    pub fn invoke_member_with(
        &self,
        is_static: bool,
        expression: Node,
        method: Node,
        arguments: Vec<Node>,
    ) -> Result<InvokeMemberExpressionAst> {
        InvokeMemberExpressionAst::new(self.extent(), expression, method, arguments, is_static)
    }

    pub fn sub_expression(&self, statements: Vec<Node>) -> Result<SubExpressionAst> {
        Ok(SubExpressionAst::new(self.extent(), self.block(statements)?))
    }

    pub fn command_expression(&self, expression: Node) -> Result<CommandExpressionAst> {
        CommandExpressionAst::new(self.extent(), expression, Vec::new())
    }

    pub fn true_var(&self) -> VariableExpressionAst {
        self.variable("true")
    }

    pub fn false_var(&self) -> VariableExpressionAst {
        self.variable("false")
    }

    pub fn null_var(&self) -> VariableExpressionAst {
        self.variable("null")
    }

    pub fn host_var(&self) -> VariableExpressionAst {
        self.variable("Host")
    }

    pub fn execution_context_var(&self) -> VariableExpressionAst {
        self.variable("ExecutionContext")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(start: usize, end: usize) -> Extent {
        Extent::from_offsets("factory.ps1", "$a = $b + $c", start, end)
    }

    #[test]
    fn test_push_dedups_identical_spans() {
        let mut factory = SyntaxFactory::new();
        assert!(factory.push_context(&span(0, 12)));
        assert!(!factory.push_context(&span(0, 12)));
        assert!(factory.push_context(&span(5, 12)));
        assert_eq!(factory.depth(), 2);
        assert_eq!(factory.current_extent(), &span(5, 12));
        factory.pop_context();
        assert_eq!(factory.current_extent(), &span(0, 12));
    }

    #[test]
    fn test_pop_keeps_base() {
        let mut factory = SyntaxFactory::new();
        assert!(factory.pop_context().is_none());
        assert_eq!(factory.current_extent().text(), "");
        assert_eq!(factory.current_extent().start_line(), 1);
    }

    #[test]
    fn test_constructors_use_current_anchor() {
        let mut factory = SyntaxFactory::new();
        factory.push_context(&span(5, 12));
        let add = factory.add(factory.variable("b").into(), factory.variable("c").into()).unwrap();
        assert_eq!(add.extent, span(5, 12));
        assert_eq!(add.left.extent(), &span(5, 12));
        assert_eq!(add.error_position.text(), "");
        assert_eq!(&**add.error_position.file(), "factory.ps1");
    }

    #[test]
    fn test_command_prepends_bare_word_name() {
        let factory = SyntaxFactory::global();
        let cmd = factory.command("Write-Output", vec![factory.constant(1).into()]).unwrap();
        assert_eq!(cmd.command_name(), Some("Write-Output"));
        assert_eq!(cmd.invocation_operator, TokenKind::Ampersand);
        assert_eq!(cmd.command_elements.len(), 2);
    }

    #[test]
    fn test_format_with_several_arguments_uses_array_literal() {
        let factory = SyntaxFactory::global();
        let format = factory
            .format(factory.string("{0}{1}").into(), vec![factory.constant(1).into(), factory.constant(2).into()])
            .unwrap();
        assert_eq!(format.right.kind(), NodeKind::ArrayLiteral);
        let single = factory.format(factory.string("{0}").into(), vec![factory.constant(1).into()]).unwrap();
        assert_eq!(single.right.kind(), NodeKind::ConstantExpression);
    }

    #[test]
    fn test_if_expr_wraps_condition_in_pipeline() {
        let factory = SyntaxFactory::global();
        let stmt = factory.if_expr(factory.true_var().into(), vec![]).unwrap();
        assert_eq!(stmt.clauses[0].0.kind(), NodeKind::Pipeline);
        assert!(stmt.else_clause.is_none());
    }
}
