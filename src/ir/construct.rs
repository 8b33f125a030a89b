//! Construct-as-kind: build a node of a witnessed kind from a minimal set of
//! arguments, positioned at an anchor.
//!
//! ```
//! use ps_syntax_rewriter::ir::construct::ConstructAs;
//! use ps_syntax_rewriter::ir::kind;
//! use ps_syntax_rewriter::ir::ps_node::*;
//!
//! let anchor = Extent::whole("demo.ps1", "if ($ready) { Write-Host 'go' }");
//! let ready = anchor.construct_as(kind::VARIABLE_EXPRESSION, "ready")?;
//! let check = anchor.construct_as(kind::COMMAND_EXPRESSION, Node::from(ready))?;
//! let condition = anchor.construct_as(kind::PIPELINE, vec![check.into()])?;
//!
//! let message = anchor.construct_as(kind::STRING_CONSTANT_EXPRESSION, ("go", StringConstantType::SingleQuoted))?;
//! let call = anchor.construct_as(kind::COMMAND, ("Write-Host", vec![message.into()]))?;
//! let call = anchor.construct_as(kind::PIPELINE, vec![call.into()])?;
//! let test = anchor.construct_as(kind::IF_STATEMENT, (condition.into(), vec![call.into()]))?;
//!
//! assert_eq!(test.clauses[0].1.statements.len(), 1);
//! # Ok::<(), ps_syntax_rewriter::RewriteError>(())
//! ```
//!
//! New nodes take the anchor's extent, except string constants and commands
//! built from literal text, whose extents are synthesized from that text.
//! Error positions a kind requires are the placeholder extent of the anchor's
//! file.

use crate::error::Result;
use crate::ir::kind::AstType;
use crate::ir::position::{extent_from_literal, placeholder_for};
use crate::ir::ps_node::*;

/// Builds `Self` at `anchor` from `Args`.
pub trait Construct<Args>: Sized {
    fn construct(anchor: &Extent, args: Args) -> Result<Self>;
}

/// Construction anchored at a node or an extent.
pub trait ConstructAs {
    fn anchor(&self) -> &Extent;

    fn construct_as<T, Args>(&self, _kind: AstType<T>, args: Args) -> Result<T>
    where
        T: Construct<Args>,
    {
        T::construct(self.anchor(), args)
    }
}

impl<A: Ast + ?Sized> ConstructAs for A {
    fn anchor(&self) -> &Extent {
        self.extent()
    }
}

impl ConstructAs for Extent {
    fn anchor(&self) -> &Extent {
        self
    }
}

fn block(anchor: &Extent, statements: Vec<Node>) -> Result<StatementBlockAst> {
    StatementBlockAst::new(anchor.clone(), statements, Vec::new())
}

fn type_name(anchor: &Extent, name: &str) -> TypeName {
    TypeName::new(name, anchor.clone())
}

fn bare_word(anchor: &Extent, value: &str) -> StringConstantExpressionAst {
    StringConstantExpressionAst::new(extent_from_literal(value, anchor), value, StringConstantType::BareWord)
}

impl Construct<Vec<Node>> for ArrayExpressionAst {
    fn construct(anchor: &Extent, statements: Vec<Node>) -> Result<Self> {
        Ok(ArrayExpressionAst::new(anchor.clone(), block(anchor, statements)?))
    }
}

impl Construct<Vec<Node>> for ArrayLiteralAst {
    fn construct(anchor: &Extent, elements: Vec<Node>) -> Result<Self> {
        ArrayLiteralAst::new(anchor.clone(), elements)
    }
}

/// `left = right`
impl Construct<(Node, Node)> for AssignmentStatementAst {
    fn construct(anchor: &Extent, (left, right): (Node, Node)) -> Result<Self> {
        Self::construct(anchor, (left, right, TokenKind::Equals))
    }
}

impl Construct<(Node, Node, TokenKind)> for AssignmentStatementAst {
    fn construct(anchor: &Extent, (left, right, operator): (Node, Node, TokenKind)) -> Result<Self> {
        AssignmentStatementAst::new(anchor.clone(), left, operator, right, placeholder_for(anchor))
    }
}

impl Construct<&str> for AttributeAst {
    fn construct(anchor: &Extent, name: &str) -> Result<Self> {
        AttributeAst::new(anchor.clone(), type_name(anchor, name), Vec::new(), Vec::new())
    }
}

impl Construct<(&str, Vec<Node>)> for AttributeAst {
    fn construct(anchor: &Extent, (name, positional): (&str, Vec<Node>)) -> Result<Self> {
        AttributeAst::new(anchor.clone(), type_name(anchor, name), positional, Vec::new())
    }
}

impl Construct<(Node, Node)> for AttributedExpressionAst {
    fn construct(anchor: &Extent, (attribute, child): (Node, Node)) -> Result<Self> {
        AttributedExpressionAst::new(anchor.clone(), attribute, child)
    }
}

impl Construct<(Node, TokenKind, Node)> for BinaryExpressionAst {
    fn construct(anchor: &Extent, (left, operator, right): (Node, TokenKind, Node)) -> Result<Self> {
        BinaryExpressionAst::new(anchor.clone(), left, operator, right, placeholder_for(anchor))
    }
}

impl Construct<(TokenKind, Vec<Node>)> for BlockStatementAst {
    fn construct(anchor: &Extent, (kind, statements): (TokenKind, Vec<Node>)) -> Result<Self> {
        Ok(BlockStatementAst::new(anchor.clone(), kind, block(anchor, statements)?))
    }
}

impl Construct<Option<Node>> for BreakStatementAst {
    fn construct(anchor: &Extent, label: Option<Node>) -> Result<Self> {
        BreakStatementAst::new(anchor.clone(), label)
    }
}

/// A catch-all clause.
impl Construct<Vec<Node>> for CatchClauseAst {
    fn construct(anchor: &Extent, statements: Vec<Node>) -> Result<Self> {
        Ok(CatchClauseAst::new(anchor.clone(), Vec::new(), block(anchor, statements)?))
    }
}

impl Construct<(Vec<&str>, Vec<Node>)> for CatchClauseAst {
    fn construct(anchor: &Extent, (types, statements): (Vec<&str>, Vec<Node>)) -> Result<Self> {
        let catch_types = types.into_iter().map(|t| TypeConstraintAst::new(anchor.clone(), type_name(anchor, t))).collect();
        Ok(CatchClauseAst::new(anchor.clone(), catch_types, block(anchor, statements)?))
    }
}

/// `& name elements...`
impl Construct<(&str, Vec<Node>)> for CommandAst {
    fn construct(anchor: &Extent, (name, elements): (&str, Vec<Node>)) -> Result<Self> {
        Self::construct(anchor, (name, TokenKind::Ampersand, elements))
    }
}

impl Construct<(&str, TokenKind, Vec<Node>)> for CommandAst {
    fn construct(anchor: &Extent, (name, operator, elements): (&str, TokenKind, Vec<Node>)) -> Result<Self> {
        let mut command_elements = Vec::with_capacity(elements.len() + 1);
        command_elements.push(bare_word(anchor, name).into());
        command_elements.extend(elements);
        CommandAst::new(extent_from_literal(name, anchor), command_elements, operator, Vec::new())
    }
}

impl Construct<Node> for CommandExpressionAst {
    fn construct(anchor: &Extent, expression: Node) -> Result<Self> {
        CommandExpressionAst::new(anchor.clone(), expression, Vec::new())
    }
}

impl Construct<(&str, Option<Node>)> for CommandParameterAst {
    fn construct(anchor: &Extent, (name, argument): (&str, Option<Node>)) -> Result<Self> {
        CommandParameterAst::new(anchor.clone(), name, argument, placeholder_for(anchor))
    }
}

impl<V: Into<ConstantValue>> Construct<V> for ConstantExpressionAst {
    fn construct(anchor: &Extent, value: V) -> Result<Self> {
        Ok(ConstantExpressionAst::new(anchor.clone(), value))
    }
}

impl Construct<Option<Node>> for ContinueStatementAst {
    fn construct(anchor: &Extent, label: Option<Node>) -> Result<Self> {
        ContinueStatementAst::new(anchor.clone(), label)
    }
}

/// `[type] child`
impl Construct<(&str, Node)> for ConvertExpressionAst {
    fn construct(anchor: &Extent, (name, child): (&str, Node)) -> Result<Self> {
        let constraint = TypeConstraintAst::new(anchor.clone(), type_name(anchor, name));
        ConvertExpressionAst::new(anchor.clone(), constraint, child)
    }
}

impl Construct<Vec<Node>> for DataStatementAst {
    fn construct(anchor: &Extent, statements: Vec<Node>) -> Result<Self> {
        DataStatementAst::new(anchor.clone(), None, Vec::new(), block(anchor, statements)?)
    }
}

impl Construct<(Node, Vec<Node>)> for DoUntilStatementAst {
    fn construct(anchor: &Extent, (condition, statements): (Node, Vec<Node>)) -> Result<Self> {
        DoUntilStatementAst::new(anchor.clone(), None, condition, block(anchor, statements)?)
    }
}

impl Construct<(Node, Vec<Node>)> for DoWhileStatementAst {
    fn construct(anchor: &Extent, (condition, statements): (Node, Vec<Node>)) -> Result<Self> {
        DoWhileStatementAst::new(anchor.clone(), None, condition, block(anchor, statements)?)
    }
}

impl Construct<Vec<Node>> for ErrorExpressionAst {
    fn construct(anchor: &Extent, nested: Vec<Node>) -> Result<Self> {
        Ok(ErrorExpressionAst::new(anchor.clone(), nested))
    }
}

impl Construct<Vec<Node>> for ErrorStatementAst {
    fn construct(anchor: &Extent, nested: Vec<Node>) -> Result<Self> {
        Ok(ErrorStatementAst::new(anchor.clone(), None, nested))
    }
}

impl Construct<Option<Node>> for ExitStatementAst {
    fn construct(anchor: &Extent, pipeline: Option<Node>) -> Result<Self> {
        ExitStatementAst::new(anchor.clone(), pipeline)
    }
}

/// A double-quoted string whose extent is synthesized from its text.
impl Construct<&str> for ExpandableStringExpressionAst {
    fn construct(anchor: &Extent, value: &str) -> Result<Self> {
        Ok(ExpandableStringExpressionAst::new(
            extent_from_literal(value, anchor),
            value,
            StringConstantType::DoubleQuoted,
        ))
    }
}

impl Construct<(RedirectionStream, Node)> for FileRedirectionAst {
    fn construct(anchor: &Extent, (stream, location): (RedirectionStream, Node)) -> Result<Self> {
        FileRedirectionAst::new(anchor.clone(), stream, location, false)
    }
}

/// `foreach ($variable in condition) { statements }`
impl Construct<(VariableExpressionAst, Node, Vec<Node>)> for ForEachStatementAst {
    fn construct(
        anchor: &Extent,
        (variable, condition, statements): (VariableExpressionAst, Node, Vec<Node>),
    ) -> Result<Self> {
        let body = block(anchor, statements)?;
        ForEachStatementAst::new(anchor.clone(), None, ForEachFlags::None, variable, condition, body)
    }
}

/// `for (initializer; condition; iterator) { statements }`
impl Construct<(Option<Node>, Option<Node>, Option<Node>, Vec<Node>)> for ForStatementAst {
    fn construct(
        anchor: &Extent,
        (initializer, condition, iterator, statements): (Option<Node>, Option<Node>, Option<Node>, Vec<Node>),
    ) -> Result<Self> {
        let body = block(anchor, statements)?;
        ForStatementAst::new(anchor.clone(), None, initializer, condition, iterator, body)
    }
}

impl Construct<(&str, Vec<Node>)> for FunctionDefinitionAst {
    fn construct(anchor: &Extent, (name, statements): (&str, Vec<Node>)) -> Result<Self> {
        let body = ScriptBlockAst::from_statements(anchor.clone(), statements)?;
        Ok(FunctionDefinitionAst::new(anchor.clone(), false, false, name, Vec::new(), body))
    }
}

impl Construct<Vec<(Node, Node)>> for HashtableAst {
    fn construct(anchor: &Extent, pairs: Vec<(Node, Node)>) -> Result<Self> {
        HashtableAst::new(anchor.clone(), pairs)
    }
}

/// `if (condition) { statements }`
impl Construct<(Node, Vec<Node>)> for IfStatementAst {
    fn construct(anchor: &Extent, (condition, statements): (Node, Vec<Node>)) -> Result<Self> {
        IfStatementAst::new(anchor.clone(), vec![(condition, block(anchor, statements)?)], None)
    }
}

/// `if (condition) { then } else { otherwise }`
impl Construct<(Node, StatementBlockAst, Option<StatementBlockAst>)> for IfStatementAst {
    fn construct(
        anchor: &Extent,
        (condition, then, otherwise): (Node, StatementBlockAst, Option<StatementBlockAst>),
    ) -> Result<Self> {
        IfStatementAst::new(anchor.clone(), vec![(condition, then)], otherwise)
    }
}

impl Construct<(Node, Node)> for IndexExpressionAst {
    fn construct(anchor: &Extent, (target, index): (Node, Node)) -> Result<Self> {
        IndexExpressionAst::new(anchor.clone(), target, index)
    }
}

/// `expression.method(arguments)`
impl Construct<(Node, &str, Vec<Node>)> for InvokeMemberExpressionAst {
    fn construct(anchor: &Extent, (expression, method, arguments): (Node, &str, Vec<Node>)) -> Result<Self> {
        InvokeMemberExpressionAst::new(anchor.clone(), expression, bare_word(anchor, method).into(), arguments, false)
    }
}

impl Construct<(Node, &str)> for MemberExpressionAst {
    fn construct(anchor: &Extent, (expression, member): (Node, &str)) -> Result<Self> {
        MemberExpressionAst::new(anchor.clone(), expression, bare_word(anchor, member).into(), false)
    }
}

impl Construct<(RedirectionStream, RedirectionStream)> for MergingRedirectionAst {
    fn construct(anchor: &Extent, (from, to): (RedirectionStream, RedirectionStream)) -> Result<Self> {
        Ok(MergingRedirectionAst::new(anchor.clone(), from, to))
    }
}

impl Construct<(&str, Node)> for NamedAttributeArgumentAst {
    fn construct(anchor: &Extent, (name, argument): (&str, Node)) -> Result<Self> {
        NamedAttributeArgumentAst::new(anchor.clone(), name, argument, false)
    }
}

impl Construct<(TokenKind, Vec<Node>)> for NamedBlockAst {
    fn construct(anchor: &Extent, (block_kind, statements): (TokenKind, Vec<Node>)) -> Result<Self> {
        NamedBlockAst::new(anchor.clone(), block_kind, statements, Vec::new(), false)
    }
}

impl Construct<Vec<ParameterAst>> for ParamBlockAst {
    fn construct(anchor: &Extent, parameters: Vec<ParameterAst>) -> Result<Self> {
        Ok(ParamBlockAst::new(anchor.clone(), Vec::new(), parameters))
    }
}

/// `$name`, with no attributes or default.
impl Construct<&str> for ParameterAst {
    fn construct(anchor: &Extent, name: &str) -> Result<Self> {
        ParameterAst::new(anchor.clone(), VariableExpressionAst::new(anchor.clone(), name, false), Vec::new(), None)
    }
}

impl Construct<Node> for ParenExpressionAst {
    fn construct(anchor: &Extent, pipeline: Node) -> Result<Self> {
        ParenExpressionAst::new(anchor.clone(), pipeline)
    }
}

impl Construct<Vec<Node>> for PipelineAst {
    fn construct(anchor: &Extent, commands: Vec<Node>) -> Result<Self> {
        PipelineAst::new(anchor.clone(), commands)
    }
}

impl Construct<Option<Node>> for ReturnStatementAst {
    fn construct(anchor: &Extent, pipeline: Option<Node>) -> Result<Self> {
        ReturnStatementAst::new(anchor.clone(), pipeline)
    }
}

impl Construct<Vec<Node>> for ScriptBlockAst {
    fn construct(anchor: &Extent, statements: Vec<Node>) -> Result<Self> {
        ScriptBlockAst::from_statements(anchor.clone(), statements)
    }
}

/// `{ statements }`
impl Construct<Vec<Node>> for ScriptBlockExpressionAst {
    fn construct(anchor: &Extent, statements: Vec<Node>) -> Result<Self> {
        let script_block = ScriptBlockAst::from_statements(anchor.clone(), statements)?;
        Ok(ScriptBlockExpressionAst::new(anchor.clone(), script_block))
    }
}

impl Construct<Vec<Node>> for StatementBlockAst {
    fn construct(anchor: &Extent, statements: Vec<Node>) -> Result<Self> {
        block(anchor, statements)
    }
}

/// A bare word whose extent is synthesized from its text.
impl Construct<&str> for StringConstantExpressionAst {
    fn construct(anchor: &Extent, value: &str) -> Result<Self> {
        Ok(bare_word(anchor, value))
    }
}

impl Construct<(&str, StringConstantType)> for StringConstantExpressionAst {
    fn construct(anchor: &Extent, (value, quoting): (&str, StringConstantType)) -> Result<Self> {
        Ok(StringConstantExpressionAst::new(extent_from_literal(value, anchor), value, quoting))
    }
}

/// `$( statements )`
impl Construct<Vec<Node>> for SubExpressionAst {
    fn construct(anchor: &Extent, statements: Vec<Node>) -> Result<Self> {
        Ok(SubExpressionAst::new(anchor.clone(), block(anchor, statements)?))
    }
}

impl Construct<StatementBlockAst> for SubExpressionAst {
    fn construct(anchor: &Extent, body: StatementBlockAst) -> Result<Self> {
        Ok(SubExpressionAst::new(anchor.clone(), body))
    }
}

impl Construct<(Node, Vec<(Node, StatementBlockAst)>)> for SwitchStatementAst {
    fn construct(anchor: &Extent, (condition, clauses): (Node, Vec<(Node, StatementBlockAst)>)) -> Result<Self> {
        SwitchStatementAst::new(anchor.clone(), None, condition, SwitchFlags::default(), clauses, None)
    }
}

impl Construct<Option<Node>> for ThrowStatementAst {
    fn construct(anchor: &Extent, pipeline: Option<Node>) -> Result<Self> {
        ThrowStatementAst::new(anchor.clone(), pipeline)
    }
}

/// A trap for every exception type.
impl Construct<Vec<Node>> for TrapStatementAst {
    fn construct(anchor: &Extent, statements: Vec<Node>) -> Result<Self> {
        Ok(TrapStatementAst::new(anchor.clone(), None, block(anchor, statements)?))
    }
}

impl Construct<(Vec<Node>, Vec<CatchClauseAst>)> for TryStatementAst {
    fn construct(anchor: &Extent, (statements, catch_clauses): (Vec<Node>, Vec<CatchClauseAst>)) -> Result<Self> {
        Ok(TryStatementAst::new(anchor.clone(), block(anchor, statements)?, catch_clauses, None))
    }
}

impl Construct<&str> for TypeConstraintAst {
    fn construct(anchor: &Extent, name: &str) -> Result<Self> {
        Ok(TypeConstraintAst::new(anchor.clone(), type_name(anchor, name)))
    }
}

impl Construct<&str> for TypeExpressionAst {
    fn construct(anchor: &Extent, name: &str) -> Result<Self> {
        Ok(TypeExpressionAst::new(anchor.clone(), type_name(anchor, name)))
    }
}

impl Construct<(TokenKind, Node)> for UnaryExpressionAst {
    fn construct(anchor: &Extent, (operator, child): (TokenKind, Node)) -> Result<Self> {
        UnaryExpressionAst::new(anchor.clone(), operator, child)
    }
}

impl Construct<Node> for UsingExpressionAst {
    fn construct(anchor: &Extent, sub_expression: Node) -> Result<Self> {
        UsingExpressionAst::new(anchor.clone(), sub_expression)
    }
}

impl Construct<&str> for VariableExpressionAst {
    fn construct(anchor: &Extent, name: &str) -> Result<Self> {
        Ok(VariableExpressionAst::new(anchor.clone(), name, false))
    }
}

impl Construct<(Node, Vec<Node>)> for WhileStatementAst {
    fn construct(anchor: &Extent, (condition, statements): (Node, Vec<Node>)) -> Result<Self> {
        WhileStatementAst::new(anchor.clone(), None, condition, block(anchor, statements)?)
    }
}

/// `: base(arguments)`, with the `base` keyword at the anchor.
impl Construct<Vec<Node>> for BaseCtorInvokeMemberExpressionAst {
    fn construct(anchor: &Extent, arguments: Vec<Node>) -> Result<Self> {
        BaseCtorInvokeMemberExpressionAst::new(anchor.clone(), anchor.clone(), arguments)
    }
}

impl Construct<(Node, Vec<Node>)> for ConfigurationDefinitionAst {
    fn construct(anchor: &Extent, (instance_name, statements): (Node, Vec<Node>)) -> Result<Self> {
        let body = ScriptBlockExpressionAst::construct(anchor, statements)?;
        ConfigurationDefinitionAst::new(anchor.clone(), body, ConfigurationType::Resource, instance_name)
    }
}

impl Construct<Vec<Node>> for DynamicKeywordStatementAst {
    fn construct(anchor: &Extent, command_elements: Vec<Node>) -> Result<Self> {
        DynamicKeywordStatementAst::new(anchor.clone(), command_elements)
    }
}

/// A public instance method with no parameters.
impl Construct<(&str, Vec<Node>)> for FunctionMemberAst {
    fn construct(anchor: &Extent, (name, statements): (&str, Vec<Node>)) -> Result<Self> {
        let body = ScriptBlockAst::from_statements(anchor.clone(), statements)?;
        let attributes = MemberAttributes { is_public: true, ..MemberAttributes::default() };
        Ok(FunctionMemberAst::new(anchor.clone(), name, Vec::new(), body, None, Vec::new(), attributes))
    }
}

/// An untyped public property.
impl Construct<&str> for PropertyMemberAst {
    fn construct(anchor: &Extent, name: &str) -> Result<Self> {
        let attributes = MemberAttributes { is_public: true, ..MemberAttributes::default() };
        PropertyMemberAst::new(anchor.clone(), name, None, Vec::new(), attributes, None)
    }
}

/// A class with the given members.
impl Construct<(&str, Vec<Node>)> for TypeDefinitionAst {
    fn construct(anchor: &Extent, (name, members): (&str, Vec<Node>)) -> Result<Self> {
        TypeDefinitionAst::new(anchor.clone(), name, Vec::new(), members, TypeAttributes::Class, Vec::new())
    }
}

impl Construct<(UsingStatementKind, &str)> for UsingStatementAst {
    fn construct(anchor: &Extent, (kind, name): (UsingStatementKind, &str)) -> Result<Self> {
        Ok(UsingStatementAst::new(anchor.clone(), kind, bare_word(anchor, name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RewriteError;
    use crate::ir::kind;

    fn anchor() -> VariableExpressionAst {
        VariableExpressionAst::new(Extent::from_offsets("c.ps1", "$x + 1", 0, 2), "x", false)
    }

    #[test]
    fn test_command_synthesizes_extents() {
        let source = anchor();
        let cmd = source.construct_as(kind::COMMAND, ("Write-Host", vec![Node::from(source.clone())])).unwrap();
        assert_eq!(cmd.command_name(), Some("Write-Host"));
        assert_eq!(cmd.invocation_operator, TokenKind::Ampersand);
        assert_eq!((cmd.extent.end_line(), cmd.extent.end_column()), (1, 11));
        assert_eq!(&**cmd.extent.file(), "c.ps1");
        assert_eq!(cmd.command_elements[1].extent(), &source.extent);
    }

    #[test]
    fn test_binary_uses_placeholder_error_position() {
        let source = anchor();
        let sum = source
            .construct_as(kind::BINARY_EXPRESSION, (Node::from(source.clone()), TokenKind::Plus, Node::from(source.clone())))
            .unwrap();
        assert_eq!(sum.extent, source.extent);
        assert_eq!((sum.error_position.start_line(), sum.error_position.start_column()), (1, 1));
        assert_eq!(sum.error_position.text(), "");
    }

    #[test]
    fn test_if_rejects_expression_condition() {
        let source = anchor();
        let err = source.construct_as(kind::IF_STATEMENT, (Node::from(source.clone()), Vec::<Node>::new())).unwrap_err();
        assert!(matches!(err, RewriteError::ShapeMismatch { kind: NodeKind::IfStatement, .. }));
    }

    #[test]
    fn test_extent_anchor() {
        let extent = anchor().extent;
        let var = extent.construct_as(kind::VARIABLE_EXPRESSION, "y").unwrap();
        assert!(Extent::ptr_eq(&var.extent, &extent));
    }
}
