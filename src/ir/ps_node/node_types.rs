//! Concrete node kinds of the script syntax tree.
//!
//! Slots that accept any node of a category (expressions, statements, pipelines,
//! command elements, attributes, redirections, members) hold a [`Node`] and are
//! validated by the constructors in `node_impl`. Slots that accept exactly one
//! kind hold that struct directly. Optional children are `Option`s; mandatory
//! children can never be absent.
//!
//! Fields are public so trees can be inspected and pattern-matched freely. Build
//! new nodes through the `new` constructors (or the factory) so category rules
//! are checked at the call site.

use serde::{Deserialize, Serialize};

use super::extent::Extent;
use super::node::Node;
use super::tokens::*;

/// `@( ... )`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayExpressionAst {
    pub extent: Extent,
    pub sub_expression: StatementBlockAst,
}

/// `a, b, c`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayLiteralAst {
    pub extent: Extent,
    pub elements: Vec<Node>,
}

/// `$x = value` and the compound assignment operators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentStatementAst {
    pub extent: Extent,
    pub left: Box<Node>,
    pub operator: TokenKind,
    pub right: Box<Node>,
    pub error_position: Extent,
}

/// `[Name(positional, Named = value)]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeAst {
    pub extent: Extent,
    pub type_name: TypeName,
    pub positional_arguments: Vec<Node>,
    pub named_arguments: Vec<NamedAttributeArgumentAst>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributedExpressionAst {
    pub extent: Extent,
    pub attribute: Box<Node>,
    pub child: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpressionAst {
    pub extent: Extent,
    pub left: Box<Node>,
    pub operator: TokenKind,
    pub right: Box<Node>,
    pub error_position: Extent,
}

/// Workflow blocks such as `parallel { }` and `sequence { }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockStatementAst {
    pub extent: Extent,
    pub kind: TokenKind,
    pub body: StatementBlockAst,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakStatementAst {
    pub extent: Extent,
    pub label: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchClauseAst {
    pub extent: Extent,
    pub catch_types: Vec<TypeConstraintAst>,
    pub body: StatementBlockAst,
}

/// A command invocation. The first element names the command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandAst {
    pub extent: Extent,
    pub command_elements: Vec<Node>,
    pub invocation_operator: TokenKind,
    pub redirections: Vec<Node>,
}

/// An expression used as a pipeline element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandExpressionAst {
    pub extent: Extent,
    pub expression: Box<Node>,
    pub redirections: Vec<Node>,
}

/// `-Name` or `-Name:argument`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandParameterAst {
    pub extent: Extent,
    pub parameter_name: String,
    pub argument: Option<Box<Node>>,
    pub error_position: Extent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstantExpressionAst {
    pub extent: Extent,
    pub value: ConstantValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContinueStatementAst {
    pub extent: Extent,
    pub label: Option<Box<Node>>,
}

/// `[type]child`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertExpressionAst {
    pub extent: Extent,
    pub type_constraint: TypeConstraintAst,
    pub child: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataStatementAst {
    pub extent: Extent,
    pub variable: Option<String>,
    pub commands_allowed: Vec<Node>,
    pub body: StatementBlockAst,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoUntilStatementAst {
    pub extent: Extent,
    pub label: Option<String>,
    pub condition: Box<Node>,
    pub body: StatementBlockAst,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoWhileStatementAst {
    pub extent: Extent,
    pub label: Option<String>,
    pub condition: Box<Node>,
    pub body: StatementBlockAst,
}

/// Placeholder left by the parser for an expression it could not parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorExpressionAst {
    pub extent: Extent,
    pub nested: Vec<Node>,
}

/// Placeholder left by the parser for a statement it could not parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorStatementAst {
    pub extent: Extent,
    pub kind: Option<String>,
    pub nested: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExitStatementAst {
    pub extent: Extent,
    pub pipeline: Option<Box<Node>>,
}

/// A double-quoted string with embedded expressions, kept as raw text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpandableStringExpressionAst {
    pub extent: Extent,
    pub value: String,
    pub string_constant_type: StringConstantType,
}

/// `2> file` or `>> file`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRedirectionAst {
    pub extent: Extent,
    pub from_stream: RedirectionStream,
    pub location: Box<Node>,
    pub append: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForEachStatementAst {
    pub extent: Extent,
    pub label: Option<String>,
    pub flags: ForEachFlags,
    pub variable: VariableExpressionAst,
    pub condition: Box<Node>,
    pub body: StatementBlockAst,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForStatementAst {
    pub extent: Extent,
    pub label: Option<String>,
    pub initializer: Option<Box<Node>>,
    pub condition: Option<Box<Node>>,
    pub iterator: Option<Box<Node>>,
    pub body: StatementBlockAst,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDefinitionAst {
    pub extent: Extent,
    pub is_filter: bool,
    pub is_workflow: bool,
    pub name: String,
    pub parameters: Vec<ParameterAst>,
    pub body: Box<ScriptBlockAst>,
}

/// `@{ key = value }`. Keys are expressions, values are statements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashtableAst {
    pub extent: Extent,
    pub key_value_pairs: Vec<(Node, Node)>,
}

/// `if` / `elseif` clauses pair a condition pipeline with a body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfStatementAst {
    pub extent: Extent,
    pub clauses: Vec<(Node, StatementBlockAst)>,
    pub else_clause: Option<StatementBlockAst>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexExpressionAst {
    pub extent: Extent,
    pub target: Box<Node>,
    pub index: Box<Node>,
}

/// `expr.Member(args)` or `[type]::Member(args)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvokeMemberExpressionAst {
    pub extent: Extent,
    pub expression: Box<Node>,
    pub member: Box<Node>,
    pub arguments: Vec<Node>,
    pub is_static: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberExpressionAst {
    pub extent: Extent,
    pub expression: Box<Node>,
    pub member: Box<Node>,
    pub is_static: bool,
}

/// `2>&1`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergingRedirectionAst {
    pub extent: Extent,
    pub from_stream: RedirectionStream,
    pub to_stream: RedirectionStream,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedAttributeArgumentAst {
    pub extent: Extent,
    pub argument_name: String,
    pub argument: Box<Node>,
    pub expression_omitted: bool,
}

/// `begin`, `process`, `end` or `dynamicparam` block of a script block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedBlockAst {
    pub extent: Extent,
    pub block_kind: TokenKind,
    pub statements: Vec<Node>,
    pub traps: Vec<TrapStatementAst>,
    pub unnamed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamBlockAst {
    pub extent: Extent,
    pub attributes: Vec<AttributeAst>,
    pub parameters: Vec<ParameterAst>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterAst {
    pub extent: Extent,
    pub name: VariableExpressionAst,
    pub attributes: Vec<Node>,
    pub default_value: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParenExpressionAst {
    pub extent: Extent,
    pub pipeline: Box<Node>,
}

/// One or more commands joined by `|`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineAst {
    pub extent: Extent,
    pub pipeline_elements: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnStatementAst {
    pub extent: Extent,
    pub pipeline: Option<Box<Node>>,
}

/// Root of a script, function body or `{ }` literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptBlockAst {
    pub extent: Extent,
    pub using_statements: Vec<UsingStatementAst>,
    pub attributes: Vec<AttributeAst>,
    pub param_block: Option<Box<ParamBlockAst>>,
    pub begin_block: Option<Box<NamedBlockAst>>,
    pub process_block: Option<Box<NamedBlockAst>>,
    pub end_block: Option<Box<NamedBlockAst>>,
    pub dynamic_param_block: Option<Box<NamedBlockAst>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptBlockExpressionAst {
    pub extent: Extent,
    pub script_block: Box<ScriptBlockAst>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementBlockAst {
    pub extent: Extent,
    pub statements: Vec<Node>,
    pub traps: Vec<TrapStatementAst>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringConstantExpressionAst {
    pub extent: Extent,
    pub value: String,
    pub string_constant_type: StringConstantType,
}

/// `$( ... )`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubExpressionAst {
    pub extent: Extent,
    pub sub_expression: StatementBlockAst,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchStatementAst {
    pub extent: Extent,
    pub label: Option<String>,
    pub condition: Box<Node>,
    pub flags: SwitchFlags,
    pub clauses: Vec<(Node, StatementBlockAst)>,
    pub default: Option<StatementBlockAst>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThrowStatementAst {
    pub extent: Extent,
    pub pipeline: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrapStatementAst {
    pub extent: Extent,
    pub trap_type: Option<TypeConstraintAst>,
    pub body: StatementBlockAst,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TryStatementAst {
    pub extent: Extent,
    pub body: StatementBlockAst,
    pub catch_clauses: Vec<CatchClauseAst>,
    pub finally: Option<StatementBlockAst>,
}

/// `[type]` used as a constraint rather than a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeConstraintAst {
    pub extent: Extent,
    pub type_name: TypeName,
}

/// `[type]` used as a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeExpressionAst {
    pub extent: Extent,
    pub type_name: TypeName,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpressionAst {
    pub extent: Extent,
    pub token_kind: TokenKind,
    pub child: Box<Node>,
}

/// `$using:name`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsingExpressionAst {
    pub extent: Extent,
    pub sub_expression: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableExpressionAst {
    pub extent: Extent,
    pub variable_path: String,
    pub splatted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhileStatementAst {
    pub extent: Extent,
    pub label: Option<String>,
    pub condition: Box<Node>,
    pub body: StatementBlockAst,
}

/// `: base(args)` in a class constructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseCtorInvokeMemberExpressionAst {
    pub extent: Extent,
    pub base_keyword_extent: Extent,
    pub arguments: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationDefinitionAst {
    pub extent: Extent,
    pub body: ScriptBlockExpressionAst,
    pub configuration_type: ConfigurationType,
    pub instance_name: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DynamicKeywordStatementAst {
    pub extent: Extent,
    pub command_elements: Vec<Node>,
}

/// A class method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionMemberAst {
    pub extent: Extent,
    pub name: String,
    pub parameters: Vec<ParameterAst>,
    pub body: Box<ScriptBlockAst>,
    pub return_type: Option<TypeConstraintAst>,
    pub attributes: Vec<AttributeAst>,
    pub method_attributes: MemberAttributes,
}

/// A class property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyMemberAst {
    pub extent: Extent,
    pub name: String,
    pub property_type: Option<TypeConstraintAst>,
    pub attributes: Vec<AttributeAst>,
    pub property_attributes: MemberAttributes,
    pub initial_value: Option<Box<Node>>,
}

/// `class`, `interface` or `enum` definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDefinitionAst {
    pub extent: Extent,
    pub name: String,
    pub attributes: Vec<AttributeAst>,
    pub members: Vec<Node>,
    pub type_attributes: TypeAttributes,
    pub base_types: Vec<TypeConstraintAst>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsingStatementAst {
    pub extent: Extent,
    pub using_statement_kind: UsingStatementKind,
    pub name: StringConstantExpressionAst,
}
