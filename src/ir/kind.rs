//! Node-kind catalog.
//!
//! One zero-sized witness per concrete kind (`kind::BINARY_EXPRESSION`, ...)
//! picks the right construction or update overload at compile time. Witnesses
//! carry no data and never appear inside a tree.

use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ir::ps_node::catalog::for_each_kind;
use crate::ir::ps_node::*;

pub use crate::ir::ps_node::NodeKind;

/// Compile-time tag for the node kind `T`.
pub struct AstType<T>(PhantomData<fn() -> T>);

impl<T> AstType<T> {
    pub const fn new() -> Self {
        AstType(PhantomData)
    }
}

impl<T> Clone for AstType<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for AstType<T> {}

impl<T> Default for AstType<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: HasKind> AstType<T> {
    pub fn kind(self) -> NodeKind {
        T::KIND
    }
}

impl<T: HasKind> fmt::Debug for AstType<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AstType<{}>", T::KIND)
    }
}

macro_rules! define_witnesses {
    ($( $variant:ident($ty:ident) => $visit:ident, $walk:ident, $witness:ident, $route:ident; )*) => {
        $(
            #[doc = concat!("Witness for [`", stringify!($ty), "`].")]
            pub const $witness: AstType<$ty> = AstType::new();
        )*
    };
}

for_each_kind!(define_witnesses);

/// The coarse syntactic groups a slot may accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Expression,
    Statement,
    /// Pipelines, assignments and error statements.
    PipelineBase,
    /// Commands and command expressions.
    CommandBase,
    /// Command parameters and expressions.
    CommandElement,
    /// Attributes and type constraints.
    AttributeBase,
    Redirection,
    Member,
}

impl Category {
    pub fn admits(self, kind: NodeKind) -> bool {
        match self {
            Category::Expression => kind.is_expression(),
            Category::Statement => kind.is_statement(),
            Category::PipelineBase => kind.is_pipeline_base(),
            Category::CommandBase => kind.is_command_base(),
            Category::CommandElement => kind.is_command_element(),
            Category::AttributeBase => kind.is_attribute_base(),
            Category::Redirection => kind.is_redirection(),
            Category::Member => kind.is_member(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Expression => "expression",
            Category::Statement => "statement",
            Category::PipelineBase => "pipeline",
            Category::CommandBase => "command",
            Category::CommandElement => "command element",
            Category::AttributeBase => "attribute",
            Category::Redirection => "redirection",
            Category::Member => "member",
        };
        f.write_str(name)
    }
}

impl NodeKind {
    pub fn is_expression(self) -> bool {
        matches!(
            self,
            NodeKind::ArrayExpression
                | NodeKind::ArrayLiteral
                | NodeKind::AttributedExpression
                | NodeKind::BinaryExpression
                | NodeKind::ConstantExpression
                | NodeKind::ConvertExpression
                | NodeKind::ErrorExpression
                | NodeKind::ExpandableStringExpression
                | NodeKind::Hashtable
                | NodeKind::IndexExpression
                | NodeKind::InvokeMemberExpression
                | NodeKind::MemberExpression
                | NodeKind::ParenExpression
                | NodeKind::ScriptBlockExpression
                | NodeKind::StringConstantExpression
                | NodeKind::SubExpression
                | NodeKind::TypeExpression
                | NodeKind::UnaryExpression
                | NodeKind::UsingExpression
                | NodeKind::VariableExpression
                | NodeKind::BaseCtorInvokeMemberExpression
        )
    }

    pub fn is_statement(self) -> bool {
        matches!(
            self,
            NodeKind::AssignmentStatement
                | NodeKind::BlockStatement
                | NodeKind::BreakStatement
                | NodeKind::Command
                | NodeKind::CommandExpression
                | NodeKind::ContinueStatement
                | NodeKind::DataStatement
                | NodeKind::DoUntilStatement
                | NodeKind::DoWhileStatement
                | NodeKind::ErrorStatement
                | NodeKind::ExitStatement
                | NodeKind::ForEachStatement
                | NodeKind::ForStatement
                | NodeKind::FunctionDefinition
                | NodeKind::IfStatement
                | NodeKind::Pipeline
                | NodeKind::ReturnStatement
                | NodeKind::SwitchStatement
                | NodeKind::ThrowStatement
                | NodeKind::TrapStatement
                | NodeKind::TryStatement
                | NodeKind::WhileStatement
                | NodeKind::ConfigurationDefinition
                | NodeKind::DynamicKeywordStatement
                | NodeKind::TypeDefinition
        )
    }

    pub fn is_pipeline_base(self) -> bool {
        matches!(self, NodeKind::Pipeline | NodeKind::AssignmentStatement | NodeKind::ErrorStatement)
    }

    pub fn is_command_base(self) -> bool {
        matches!(self, NodeKind::Command | NodeKind::CommandExpression)
    }

    pub fn is_command_element(self) -> bool {
        self == NodeKind::CommandParameter || self.is_expression()
    }

    pub fn is_attribute_base(self) -> bool {
        matches!(self, NodeKind::Attribute | NodeKind::TypeConstraint)
    }

    pub fn is_redirection(self) -> bool {
        matches!(self, NodeKind::FileRedirection | NodeKind::MergingRedirection)
    }

    pub fn is_member(self) -> bool {
        matches!(self, NodeKind::FunctionMember | NodeKind::PropertyMember)
    }
}

impl Node {
    /// True when this node is of the witnessed kind.
    pub fn is<T: HasKind>(&self, _kind: AstType<T>) -> bool {
        self.kind() == T::KIND
    }

    /// Unwraps the concrete node, failing with a kind mismatch.
    pub fn downcast<T: FromNode>(self, _kind: AstType<T>) -> Result<T> {
        T::from_node(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_one_name() {
        let mut names: Vec<&str> = NodeKind::ALL.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), NodeKind::ALL.len());
        assert_eq!(NodeKind::ALL.len(), 61);
    }

    #[test]
    fn test_witness_kind() {
        assert_eq!(BINARY_EXPRESSION.kind(), NodeKind::BinaryExpression);
        assert_eq!(format!("{:?}", PIPELINE), "AstType<Pipeline>");
    }

    #[test]
    fn test_statement_and_expression_are_disjoint() {
        for kind in NodeKind::ALL {
            assert!(!(kind.is_statement() && kind.is_expression()), "{kind} is both");
        }
    }

    #[test]
    fn test_downcast_mismatch() {
        let node: Node = VariableExpressionAst::new(Extent::whole("", "$x"), "x", false).into();
        assert!(node.is(VARIABLE_EXPRESSION));
        assert!(node.clone().downcast(PIPELINE).is_err());
        assert_eq!(node.downcast(VARIABLE_EXPRESSION).unwrap().variable_path, "x");
    }
}
