//! Validating constructors.
//!
//! Constructors of kinds with category slots return `Result` and reject a child
//! of the wrong category (or an empty mandatory sequence) at the call.
//! Kinds whose children are all concretely typed construct infallibly.

use super::extent::Extent;
use super::node::Node;
use super::node_types::*;
use super::tokens::*;
use crate::error::{Result, RewriteError};
use crate::ir::kind::{Category, NodeKind};

pub(crate) fn check(kind: NodeKind, slot: &'static str, expected: Category, node: Node) -> Result<Node> {
    if expected.admits(node.kind()) {
        Ok(node)
    } else {
        Err(RewriteError::ShapeMismatch { kind, slot, expected, found: node.kind() })
    }
}

fn boxed(kind: NodeKind, slot: &'static str, expected: Category, node: Node) -> Result<Box<Node>> {
    check(kind, slot, expected, node).map(Box::new)
}

fn boxed_opt(kind: NodeKind, slot: &'static str, expected: Category, node: Option<Node>) -> Result<Option<Box<Node>>> {
    node.map(|n| boxed(kind, slot, expected, n)).transpose()
}

fn check_all(kind: NodeKind, slot: &'static str, expected: Category, nodes: Vec<Node>) -> Result<Vec<Node>> {
    nodes.into_iter().map(|n| check(kind, slot, expected, n)).collect()
}

fn non_empty<T>(kind: NodeKind, slot: &'static str, items: Vec<T>) -> Result<Vec<T>> {
    if items.is_empty() {
        Err(RewriteError::EmptySequence { kind, slot })
    } else {
        Ok(items)
    }
}

impl ArrayExpressionAst {
    pub fn new(extent: Extent, sub_expression: StatementBlockAst) -> Self {
        Self { extent, sub_expression }
    }
}

impl ArrayLiteralAst {
    pub fn new(extent: Extent, elements: Vec<Node>) -> Result<Self> {
        const K: NodeKind = NodeKind::ArrayLiteral;
        let elements = non_empty(K, "elements", check_all(K, "elements", Category::Expression, elements)?)?;
        Ok(Self { extent, elements })
    }
}

impl AssignmentStatementAst {
    pub fn new(extent: Extent, left: Node, operator: TokenKind, right: Node, error_position: Extent) -> Result<Self> {
        const K: NodeKind = NodeKind::AssignmentStatement;
        Ok(Self {
            extent,
            left: boxed(K, "left", Category::Expression, left)?,
            operator,
            right: boxed(K, "right", Category::Statement, right)?,
            error_position,
        })
    }
}

impl AttributeAst {
    pub fn new(
        extent: Extent,
        type_name: TypeName,
        positional_arguments: Vec<Node>,
        named_arguments: Vec<NamedAttributeArgumentAst>,
    ) -> Result<Self> {
        Ok(Self {
            extent,
            type_name,
            positional_arguments: check_all(
                NodeKind::Attribute,
                "positional_arguments",
                Category::Expression,
                positional_arguments,
            )?,
            named_arguments,
        })
    }
}

impl AttributedExpressionAst {
    pub fn new(extent: Extent, attribute: Node, child: Node) -> Result<Self> {
        const K: NodeKind = NodeKind::AttributedExpression;
        Ok(Self {
            extent,
            attribute: boxed(K, "attribute", Category::AttributeBase, attribute)?,
            child: boxed(K, "child", Category::Expression, child)?,
        })
    }
}

impl BinaryExpressionAst {
    pub fn new(extent: Extent, left: Node, operator: TokenKind, right: Node, error_position: Extent) -> Result<Self> {
        const K: NodeKind = NodeKind::BinaryExpression;
        Ok(Self {
            extent,
            left: boxed(K, "left", Category::Expression, left)?,
            operator,
            right: boxed(K, "right", Category::Expression, right)?,
            error_position,
        })
    }
}

impl BlockStatementAst {
    pub fn new(extent: Extent, kind: TokenKind, body: StatementBlockAst) -> Self {
        Self { extent, kind, body }
    }
}

impl BreakStatementAst {
    pub fn new(extent: Extent, label: Option<Node>) -> Result<Self> {
        Ok(Self { extent, label: boxed_opt(NodeKind::BreakStatement, "label", Category::Expression, label)? })
    }
}

impl CatchClauseAst {
    pub fn new(extent: Extent, catch_types: Vec<TypeConstraintAst>, body: StatementBlockAst) -> Self {
        Self { extent, catch_types, body }
    }

    pub fn is_catch_all(&self) -> bool {
        self.catch_types.is_empty()
    }
}

impl CommandAst {
    pub fn new(
        extent: Extent,
        command_elements: Vec<Node>,
        invocation_operator: TokenKind,
        redirections: Vec<Node>,
    ) -> Result<Self> {
        const K: NodeKind = NodeKind::Command;
        let command_elements = check_all(K, "command_elements", Category::CommandElement, command_elements)?;
        Ok(Self {
            extent,
            command_elements: non_empty(K, "command_elements", command_elements)?,
            invocation_operator,
            redirections: check_all(K, "redirections", Category::Redirection, redirections)?,
        })
    }

    /// The command name when the first element is a constant string.
    pub fn command_name(&self) -> Option<&str> {
        match self.command_elements.first() {
            Some(Node::StringConstantExpression(name)) => Some(&name.value),
            _ => None,
        }
    }
}

impl CommandExpressionAst {
    pub fn new(extent: Extent, expression: Node, redirections: Vec<Node>) -> Result<Self> {
        const K: NodeKind = NodeKind::CommandExpression;
        Ok(Self {
            extent,
            expression: boxed(K, "expression", Category::Expression, expression)?,
            redirections: check_all(K, "redirections", Category::Redirection, redirections)?,
        })
    }
}

impl CommandParameterAst {
    pub fn new(
        extent: Extent,
        parameter_name: impl Into<String>,
        argument: Option<Node>,
        error_position: Extent,
    ) -> Result<Self> {
        Ok(Self {
            extent,
            parameter_name: parameter_name.into(),
            argument: boxed_opt(NodeKind::CommandParameter, "argument", Category::Expression, argument)?,
            error_position,
        })
    }
}

impl ConstantExpressionAst {
    pub fn new(extent: Extent, value: impl Into<ConstantValue>) -> Self {
        Self { extent, value: value.into() }
    }
}

impl ContinueStatementAst {
    pub fn new(extent: Extent, label: Option<Node>) -> Result<Self> {
        Ok(Self { extent, label: boxed_opt(NodeKind::ContinueStatement, "label", Category::Expression, label)? })
    }
}

impl ConvertExpressionAst {
    pub fn new(extent: Extent, type_constraint: TypeConstraintAst, child: Node) -> Result<Self> {
        Ok(Self {
            extent,
            type_constraint,
            child: boxed(NodeKind::ConvertExpression, "child", Category::Expression, child)?,
        })
    }
}

impl DataStatementAst {
    pub fn new(
        extent: Extent,
        variable: Option<String>,
        commands_allowed: Vec<Node>,
        body: StatementBlockAst,
    ) -> Result<Self> {
        Ok(Self {
            extent,
            variable,
            commands_allowed: check_all(
                NodeKind::DataStatement,
                "commands_allowed",
                Category::Expression,
                commands_allowed,
            )?,
            body,
        })
    }
}

impl DoUntilStatementAst {
    pub fn new(extent: Extent, label: Option<String>, condition: Node, body: StatementBlockAst) -> Result<Self> {
        Ok(Self {
            extent,
            label,
            condition: boxed(NodeKind::DoUntilStatement, "condition", Category::PipelineBase, condition)?,
            body,
        })
    }
}

impl DoWhileStatementAst {
    pub fn new(extent: Extent, label: Option<String>, condition: Node, body: StatementBlockAst) -> Result<Self> {
        Ok(Self {
            extent,
            label,
            condition: boxed(NodeKind::DoWhileStatement, "condition", Category::PipelineBase, condition)?,
            body,
        })
    }
}

impl ErrorExpressionAst {
    pub fn new(extent: Extent, nested: Vec<Node>) -> Self {
        Self { extent, nested }
    }
}

impl ErrorStatementAst {
    pub fn new(extent: Extent, kind: Option<String>, nested: Vec<Node>) -> Self {
        Self { extent, kind, nested }
    }
}

impl ExitStatementAst {
    pub fn new(extent: Extent, pipeline: Option<Node>) -> Result<Self> {
        Ok(Self {
            extent,
            pipeline: boxed_opt(NodeKind::ExitStatement, "pipeline", Category::PipelineBase, pipeline)?,
        })
    }
}

impl ExpandableStringExpressionAst {
    pub fn new(extent: Extent, value: impl Into<String>, string_constant_type: StringConstantType) -> Self {
        Self { extent, value: value.into(), string_constant_type }
    }
}

impl FileRedirectionAst {
    pub fn new(extent: Extent, from_stream: RedirectionStream, location: Node, append: bool) -> Result<Self> {
        Ok(Self {
            extent,
            from_stream,
            location: boxed(NodeKind::FileRedirection, "location", Category::Expression, location)?,
            append,
        })
    }
}

impl ForEachStatementAst {
    pub fn new(
        extent: Extent,
        label: Option<String>,
        flags: ForEachFlags,
        variable: VariableExpressionAst,
        condition: Node,
        body: StatementBlockAst,
    ) -> Result<Self> {
        Ok(Self {
            extent,
            label,
            flags,
            variable,
            condition: boxed(NodeKind::ForEachStatement, "condition", Category::PipelineBase, condition)?,
            body,
        })
    }
}

impl ForStatementAst {
    pub fn new(
        extent: Extent,
        label: Option<String>,
        initializer: Option<Node>,
        condition: Option<Node>,
        iterator: Option<Node>,
        body: StatementBlockAst,
    ) -> Result<Self> {
        const K: NodeKind = NodeKind::ForStatement;
        Ok(Self {
            extent,
            label,
            initializer: boxed_opt(K, "initializer", Category::PipelineBase, initializer)?,
            condition: boxed_opt(K, "condition", Category::PipelineBase, condition)?,
            iterator: boxed_opt(K, "iterator", Category::PipelineBase, iterator)?,
            body,
        })
    }
}

impl FunctionDefinitionAst {
    pub fn new(
        extent: Extent,
        is_filter: bool,
        is_workflow: bool,
        name: impl Into<String>,
        parameters: Vec<ParameterAst>,
        body: ScriptBlockAst,
    ) -> Self {
        Self { extent, is_filter, is_workflow, name: name.into(), parameters, body: Box::new(body) }
    }
}

impl HashtableAst {
    pub fn new(extent: Extent, key_value_pairs: Vec<(Node, Node)>) -> Result<Self> {
        const K: NodeKind = NodeKind::Hashtable;
        let key_value_pairs = key_value_pairs
            .into_iter()
            .map(|(key, value)| {
                Ok((check(K, "key", Category::Expression, key)?, check(K, "value", Category::Statement, value)?))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { extent, key_value_pairs })
    }
}

impl IfStatementAst {
    pub fn new(
        extent: Extent,
        clauses: Vec<(Node, StatementBlockAst)>,
        else_clause: Option<StatementBlockAst>,
    ) -> Result<Self> {
        const K: NodeKind = NodeKind::IfStatement;
        let clauses = clauses
            .into_iter()
            .map(|(condition, body)| Ok((check(K, "clauses", Category::PipelineBase, condition)?, body)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { extent, clauses: non_empty(K, "clauses", clauses)?, else_clause })
    }
}

impl IndexExpressionAst {
    pub fn new(extent: Extent, target: Node, index: Node) -> Result<Self> {
        const K: NodeKind = NodeKind::IndexExpression;
        Ok(Self {
            extent,
            target: boxed(K, "target", Category::Expression, target)?,
            index: boxed(K, "index", Category::Expression, index)?,
        })
    }
}

impl InvokeMemberExpressionAst {
    pub fn new(extent: Extent, expression: Node, member: Node, arguments: Vec<Node>, is_static: bool) -> Result<Self> {
        const K: NodeKind = NodeKind::InvokeMemberExpression;
        Ok(Self {
            extent,
            expression: boxed(K, "expression", Category::Expression, expression)?,
            member: boxed(K, "member", Category::CommandElement, member)?,
            arguments: check_all(K, "arguments", Category::Expression, arguments)?,
            is_static,
        })
    }
}

impl MemberExpressionAst {
    pub fn new(extent: Extent, expression: Node, member: Node, is_static: bool) -> Result<Self> {
        const K: NodeKind = NodeKind::MemberExpression;
        Ok(Self {
            extent,
            expression: boxed(K, "expression", Category::Expression, expression)?,
            member: boxed(K, "member", Category::CommandElement, member)?,
            is_static,
        })
    }
}

impl MergingRedirectionAst {
    pub fn new(extent: Extent, from_stream: RedirectionStream, to_stream: RedirectionStream) -> Self {
        Self { extent, from_stream, to_stream }
    }
}

impl NamedAttributeArgumentAst {
    pub fn new(
        extent: Extent,
        argument_name: impl Into<String>,
        argument: Node,
        expression_omitted: bool,
    ) -> Result<Self> {
        Ok(Self {
            extent,
            argument_name: argument_name.into(),
            argument: boxed(NodeKind::NamedAttributeArgument, "argument", Category::Expression, argument)?,
            expression_omitted,
        })
    }
}

impl NamedBlockAst {
    pub fn new(
        extent: Extent,
        block_kind: TokenKind,
        statements: Vec<Node>,
        traps: Vec<TrapStatementAst>,
        unnamed: bool,
    ) -> Result<Self> {
        Ok(Self {
            extent,
            block_kind,
            statements: check_all(NodeKind::NamedBlock, "statements", Category::Statement, statements)?,
            traps,
            unnamed,
        })
    }
}

impl ParamBlockAst {
    pub fn new(extent: Extent, attributes: Vec<AttributeAst>, parameters: Vec<ParameterAst>) -> Self {
        Self { extent, attributes, parameters }
    }
}

impl ParameterAst {
    pub fn new(
        extent: Extent,
        name: VariableExpressionAst,
        attributes: Vec<Node>,
        default_value: Option<Node>,
    ) -> Result<Self> {
        const K: NodeKind = NodeKind::Parameter;
        Ok(Self {
            extent,
            name,
            attributes: check_all(K, "attributes", Category::AttributeBase, attributes)?,
            default_value: boxed_opt(K, "default_value", Category::Expression, default_value)?,
        })
    }
}

impl ParenExpressionAst {
    pub fn new(extent: Extent, pipeline: Node) -> Result<Self> {
        Ok(Self { extent, pipeline: boxed(NodeKind::ParenExpression, "pipeline", Category::PipelineBase, pipeline)? })
    }
}

impl PipelineAst {
    pub fn new(extent: Extent, pipeline_elements: Vec<Node>) -> Result<Self> {
        const K: NodeKind = NodeKind::Pipeline;
        let pipeline_elements = check_all(K, "pipeline_elements", Category::CommandBase, pipeline_elements)?;
        Ok(Self { extent, pipeline_elements: non_empty(K, "pipeline_elements", pipeline_elements)? })
    }

    /// The lone expression of a pipeline like `1 + 2`, if that is all it is.
    pub fn pure_expression(&self) -> Option<&Node> {
        match self.pipeline_elements.as_slice() {
            [Node::CommandExpression(cmd)] if cmd.redirections.is_empty() => Some(cmd.expression.as_ref()),
            _ => None,
        }
    }
}

impl ReturnStatementAst {
    pub fn new(extent: Extent, pipeline: Option<Node>) -> Result<Self> {
        Ok(Self {
            extent,
            pipeline: boxed_opt(NodeKind::ReturnStatement, "pipeline", Category::PipelineBase, pipeline)?,
        })
    }
}

impl ScriptBlockAst {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        extent: Extent,
        using_statements: Vec<UsingStatementAst>,
        attributes: Vec<AttributeAst>,
        param_block: Option<ParamBlockAst>,
        begin_block: Option<NamedBlockAst>,
        process_block: Option<NamedBlockAst>,
        end_block: Option<NamedBlockAst>,
        dynamic_param_block: Option<NamedBlockAst>,
    ) -> Self {
        Self {
            extent,
            using_statements,
            attributes,
            param_block: param_block.map(Box::new),
            begin_block: begin_block.map(Box::new),
            process_block: process_block.map(Box::new),
            end_block: end_block.map(Box::new),
            dynamic_param_block: dynamic_param_block.map(Box::new),
        }
    }

    /// A script block whose statements all live in an unnamed `end` block, the
    /// shape a plain script file parses to.
    pub fn from_statements(extent: Extent, statements: Vec<Node>) -> Result<Self> {
        let end = NamedBlockAst::new(extent.clone(), TokenKind::End, statements, Vec::new(), true)?;
        Ok(Self::new(extent, Vec::new(), Vec::new(), None, None, None, Some(end), None))
    }
}

impl ScriptBlockExpressionAst {
    pub fn new(extent: Extent, script_block: ScriptBlockAst) -> Self {
        Self { extent, script_block: Box::new(script_block) }
    }
}

impl StatementBlockAst {
    pub fn new(extent: Extent, statements: Vec<Node>, traps: Vec<TrapStatementAst>) -> Result<Self> {
        Ok(Self {
            extent,
            statements: check_all(NodeKind::StatementBlock, "statements", Category::Statement, statements)?,
            traps,
        })
    }
}

impl StringConstantExpressionAst {
    pub fn new(extent: Extent, value: impl Into<String>, string_constant_type: StringConstantType) -> Self {
        Self { extent, value: value.into(), string_constant_type }
    }
}

impl SubExpressionAst {
    pub fn new(extent: Extent, sub_expression: StatementBlockAst) -> Self {
        Self { extent, sub_expression }
    }
}

impl SwitchStatementAst {
    pub fn new(
        extent: Extent,
        label: Option<String>,
        condition: Node,
        flags: SwitchFlags,
        clauses: Vec<(Node, StatementBlockAst)>,
        default: Option<StatementBlockAst>,
    ) -> Result<Self> {
        const K: NodeKind = NodeKind::SwitchStatement;
        let clauses = clauses
            .into_iter()
            .map(|(pattern, body)| Ok((check(K, "clauses", Category::Expression, pattern)?, body)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            extent,
            label,
            condition: boxed(K, "condition", Category::PipelineBase, condition)?,
            flags,
            clauses,
            default,
        })
    }
}

impl ThrowStatementAst {
    pub fn new(extent: Extent, pipeline: Option<Node>) -> Result<Self> {
        Ok(Self {
            extent,
            pipeline: boxed_opt(NodeKind::ThrowStatement, "pipeline", Category::PipelineBase, pipeline)?,
        })
    }
}

impl TrapStatementAst {
    pub fn new(extent: Extent, trap_type: Option<TypeConstraintAst>, body: StatementBlockAst) -> Self {
        Self { extent, trap_type, body }
    }
}

impl TryStatementAst {
    pub fn new(
        extent: Extent,
        body: StatementBlockAst,
        catch_clauses: Vec<CatchClauseAst>,
        finally: Option<StatementBlockAst>,
    ) -> Self {
        Self { extent, body, catch_clauses, finally }
    }
}

impl TypeConstraintAst {
    pub fn new(extent: Extent, type_name: TypeName) -> Self {
        Self { extent, type_name }
    }
}

impl TypeExpressionAst {
    pub fn new(extent: Extent, type_name: TypeName) -> Self {
        Self { extent, type_name }
    }
}

impl UnaryExpressionAst {
    pub fn new(extent: Extent, token_kind: TokenKind, child: Node) -> Result<Self> {
        Ok(Self {
            extent,
            token_kind,
            child: boxed(NodeKind::UnaryExpression, "child", Category::Expression, child)?,
        })
    }
}

impl UsingExpressionAst {
    pub fn new(extent: Extent, sub_expression: Node) -> Result<Self> {
        Ok(Self {
            extent,
            sub_expression: boxed(NodeKind::UsingExpression, "sub_expression", Category::Expression, sub_expression)?,
        })
    }
}

impl VariableExpressionAst {
    pub fn new(extent: Extent, variable_path: impl Into<String>, splatted: bool) -> Self {
        Self { extent, variable_path: variable_path.into(), splatted }
    }
}

impl WhileStatementAst {
    pub fn new(extent: Extent, label: Option<String>, condition: Node, body: StatementBlockAst) -> Result<Self> {
        Ok(Self {
            extent,
            label,
            condition: boxed(NodeKind::WhileStatement, "condition", Category::PipelineBase, condition)?,
            body,
        })
    }
}

impl BaseCtorInvokeMemberExpressionAst {
    pub fn new(extent: Extent, base_keyword_extent: Extent, arguments: Vec<Node>) -> Result<Self> {
        Ok(Self {
            extent,
            base_keyword_extent,
            arguments: check_all(
                NodeKind::BaseCtorInvokeMemberExpression,
                "arguments",
                Category::Expression,
                arguments,
            )?,
        })
    }
}

impl ConfigurationDefinitionAst {
    pub fn new(
        extent: Extent,
        body: ScriptBlockExpressionAst,
        configuration_type: ConfigurationType,
        instance_name: Node,
    ) -> Result<Self> {
        Ok(Self {
            extent,
            body,
            configuration_type,
            instance_name: boxed(
                NodeKind::ConfigurationDefinition,
                "instance_name",
                Category::Expression,
                instance_name,
            )?,
        })
    }
}

impl DynamicKeywordStatementAst {
    pub fn new(extent: Extent, command_elements: Vec<Node>) -> Result<Self> {
        Ok(Self {
            extent,
            command_elements: check_all(
                NodeKind::DynamicKeywordStatement,
                "command_elements",
                Category::CommandElement,
                command_elements,
            )?,
        })
    }
}

impl FunctionMemberAst {
    pub fn new(
        extent: Extent,
        name: impl Into<String>,
        parameters: Vec<ParameterAst>,
        body: ScriptBlockAst,
        return_type: Option<TypeConstraintAst>,
        attributes: Vec<AttributeAst>,
        method_attributes: MemberAttributes,
    ) -> Self {
        Self {
            extent,
            name: name.into(),
            parameters,
            body: Box::new(body),
            return_type,
            attributes,
            method_attributes,
        }
    }
}

impl PropertyMemberAst {
    pub fn new(
        extent: Extent,
        name: impl Into<String>,
        property_type: Option<TypeConstraintAst>,
        attributes: Vec<AttributeAst>,
        property_attributes: MemberAttributes,
        initial_value: Option<Node>,
    ) -> Result<Self> {
        Ok(Self {
            extent,
            name: name.into(),
            property_type,
            attributes,
            property_attributes,
            initial_value: boxed_opt(NodeKind::PropertyMember, "initial_value", Category::Expression, initial_value)?,
        })
    }
}

impl TypeDefinitionAst {
    pub fn new(
        extent: Extent,
        name: impl Into<String>,
        attributes: Vec<AttributeAst>,
        members: Vec<Node>,
        type_attributes: TypeAttributes,
        base_types: Vec<TypeConstraintAst>,
    ) -> Result<Self> {
        Ok(Self {
            extent,
            name: name.into(),
            attributes,
            members: check_all(NodeKind::TypeDefinition, "members", Category::Member, members)?,
            type_attributes,
            base_types,
        })
    }
}

impl UsingStatementAst {
    pub fn new(extent: Extent, using_statement_kind: UsingStatementKind, name: StringConstantExpressionAst) -> Self {
        Self { extent, using_statement_kind, name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extent() -> Extent {
        Extent::whole("t.ps1", "1 + 2")
    }

    fn one() -> Node {
        ConstantExpressionAst::new(extent(), 1).into()
    }

    #[test]
    fn test_binary_rejects_statement_operand() {
        let stmt: Node = PipelineAst::new(
            extent(),
            vec![CommandExpressionAst::new(extent(), one(), vec![]).unwrap().into()],
        )
        .unwrap()
        .into();
        let err = BinaryExpressionAst::new(extent(), stmt, TokenKind::Plus, one(), extent()).unwrap_err();
        assert!(matches!(
            err,
            RewriteError::ShapeMismatch { kind: NodeKind::BinaryExpression, slot: "left", found: NodeKind::Pipeline, .. }
        ));
    }

    #[test]
    fn test_empty_pipeline_is_invalid() {
        let err = PipelineAst::new(extent(), vec![]).unwrap_err();
        assert!(matches!(err, RewriteError::EmptySequence { kind: NodeKind::Pipeline, .. }));
    }

    #[test]
    fn test_command_element_accepts_parameters_and_expressions() {
        let param: Node = CommandParameterAst::new(extent(), "Force", None, extent()).unwrap().into();
        let cmd = CommandAst::new(extent(), vec![one(), param], TokenKind::Unknown, vec![]);
        assert!(cmd.is_ok());
    }

    #[test]
    fn test_pure_expression() {
        let pipeline =
            PipelineAst::new(extent(), vec![CommandExpressionAst::new(extent(), one(), vec![]).unwrap().into()])
                .unwrap();
        assert_eq!(pipeline.pure_expression(), Some(&one()));
    }
}
