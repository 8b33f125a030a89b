//! Expected shapes: the syntactic role a rewritten child must play at its use
//! site, and the standard coercions between roles.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RewriteError};
use crate::ir::ps_node::*;

/// What the caller of a recursive rewrite needs back.
///
/// `Any` requests no coercion; a rewriter that ignores shapes treats it like
/// its own natural result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ExpectedShape {
    #[default]
    Any,
    Pipeline,
    Command,
    Statement,
    Expression,
    Variable,
    StatementBlock,
    Parameter,
    Attribute,
    UsingStatement,
    ParamBlock,
    NamedBlock,
    ScriptBlock,
    ScriptBlockExpression,
    Trap,
    TypeConstraint,
    Catch,
    NamedAttributeArgument,
    CommandElement,
    Member,
    StringConstant,
    Redirection,
    Other,
}

impl ExpectedShape {
    /// True when a node of `kind` already satisfies this shape.
    pub fn accepts(self, kind: NodeKind) -> bool {
        match self {
            ExpectedShape::Any | ExpectedShape::Other => true,
            ExpectedShape::Pipeline => kind.is_pipeline_base(),
            ExpectedShape::Command => kind.is_command_base(),
            ExpectedShape::Statement => kind.is_statement(),
            ExpectedShape::Expression => kind.is_expression(),
            ExpectedShape::Variable => kind == NodeKind::VariableExpression,
            ExpectedShape::StatementBlock => kind == NodeKind::StatementBlock,
            ExpectedShape::Parameter => kind == NodeKind::Parameter,
            ExpectedShape::Attribute => kind.is_attribute_base(),
            ExpectedShape::UsingStatement => kind == NodeKind::UsingStatement,
            ExpectedShape::ParamBlock => kind == NodeKind::ParamBlock,
            ExpectedShape::NamedBlock => kind == NodeKind::NamedBlock,
            ExpectedShape::ScriptBlock => kind == NodeKind::ScriptBlock,
            ExpectedShape::ScriptBlockExpression => kind == NodeKind::ScriptBlockExpression,
            ExpectedShape::Trap => kind == NodeKind::TrapStatement,
            ExpectedShape::TypeConstraint => kind == NodeKind::TypeConstraint,
            ExpectedShape::Catch => kind == NodeKind::CatchClause,
            ExpectedShape::NamedAttributeArgument => kind == NodeKind::NamedAttributeArgument,
            ExpectedShape::CommandElement => kind.is_command_element(),
            ExpectedShape::Member => kind.is_member(),
            ExpectedShape::StringConstant => kind == NodeKind::StringConstantExpression,
            ExpectedShape::Redirection => kind.is_redirection(),
        }
    }

    /// Coerces `node` into this shape, wrapping or unwrapping as needed.
    ///
    /// - expression to statement or command: command expression
    /// - expression or command to pipeline: one-element pipeline
    /// - other statement to pipeline: pipeline over `$( statement )`
    /// - statement to expression: the pipeline's lone expression when it has
    ///   one, otherwise `$( statement )`
    /// - statement or expression to statement block: one-statement block
    ///
    /// Wrappers take the wrapped node's extent. Anything else that does not
    /// already fit is a coercion error.
    pub fn coerce(self, node: Node) -> Result<Node> {
        let kind = node.kind();
        if self.accepts(kind) {
            return Ok(node);
        }
        match self {
            ExpectedShape::Statement | ExpectedShape::Command if kind.is_expression() => {
                Ok(as_command(node)?.into())
            }
            ExpectedShape::Command => match node {
                Node::Pipeline(mut pipeline) if pipeline.pipeline_elements.len() == 1 => {
                    Ok(pipeline.pipeline_elements.remove(0))
                }
                other => Err(RewriteError::Coercion { shape: self, found: other.kind() }),
            },
            ExpectedShape::Pipeline if kind.is_expression() || kind.is_statement() => {
                let command = if kind.is_command_base() { node } else { as_command(as_expression(node)?)?.into() };
                Ok(PipelineAst::new(command.extent().clone(), vec![command])?.into())
            }
            ExpectedShape::Expression | ExpectedShape::CommandElement if kind.is_statement() => as_expression(node),
            ExpectedShape::StatementBlock if kind.is_expression() || kind.is_statement() => {
                let statement = if kind.is_statement() { node } else { as_command(node)?.into() };
                Ok(StatementBlockAst::new(statement.extent().clone(), vec![statement], Vec::new())?.into())
            }
            _ => Err(RewriteError::Coercion { shape: self, found: kind }),
        }
    }
}

fn as_command(expression: Node) -> Result<CommandExpressionAst> {
    CommandExpressionAst::new(expression.extent().clone(), expression, Vec::new())
}

fn as_expression(node: Node) -> Result<Node> {
    match node {
        node if node.kind().is_expression() => Ok(node),
        Node::CommandExpression(cmd) if cmd.redirections.is_empty() => Ok(*cmd.expression),
        Node::Pipeline(pipeline) if pipeline.pure_expression().is_some() => {
            let PipelineAst { mut pipeline_elements, .. } = pipeline;
            match pipeline_elements.pop() {
                Some(Node::CommandExpression(cmd)) => Ok(*cmd.expression),
                Some(other) => Err(RewriteError::Coercion { shape: ExpectedShape::Expression, found: other.kind() }),
                None => Err(RewriteError::EmptySequence { kind: NodeKind::Pipeline, slot: "pipeline_elements" }),
            }
        }
        statement => {
            let extent = statement.extent().clone();
            let block = StatementBlockAst::new(extent.clone(), vec![statement], Vec::new())?;
            Ok(SubExpressionAst::new(extent, block).into())
        }
    }
}

impl fmt::Display for ExpectedShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extent() -> Extent {
        Extent::whole("shape.ps1", "$x")
    }

    fn var() -> Node {
        VariableExpressionAst::new(extent(), "x", false).into()
    }

    #[test]
    fn test_expression_to_pipeline() {
        let node = ExpectedShape::Pipeline.coerce(var()).unwrap();
        let Node::Pipeline(pipeline) = node else { panic!("expected a pipeline") };
        assert_eq!(pipeline.pure_expression(), Some(&var()));
        assert_eq!(pipeline.extent, extent());
    }

    #[test]
    fn test_pipeline_to_expression_unwraps() {
        let pipeline = ExpectedShape::Pipeline.coerce(var()).unwrap();
        assert_eq!(ExpectedShape::Expression.coerce(pipeline).unwrap(), var());
    }

    #[test]
    fn test_statement_to_expression_wraps_in_subexpression() {
        let stmt: Node = BreakStatementAst::new(extent(), None).unwrap().into();
        let node = ExpectedShape::Expression.coerce(stmt).unwrap();
        assert_eq!(node.kind(), NodeKind::SubExpression);
    }

    #[test]
    fn test_statement_to_pipeline_goes_through_subexpression() {
        let stmt: Node = BreakStatementAst::new(extent(), None).unwrap().into();
        let Node::Pipeline(pipeline) = ExpectedShape::Pipeline.coerce(stmt).unwrap() else {
            panic!("expected a pipeline")
        };
        assert_eq!(pipeline.pure_expression().map(Node::kind), Some(NodeKind::SubExpression));
    }

    #[test]
    fn test_expression_to_block() {
        let Node::StatementBlock(block) = ExpectedShape::StatementBlock.coerce(var()).unwrap() else {
            panic!("expected a block")
        };
        assert_eq!(block.statements[0].kind(), NodeKind::CommandExpression);
    }

    #[test]
    fn test_any_accepts_everything() {
        assert_eq!(ExpectedShape::Any.coerce(var()).unwrap(), var());
    }

    #[test]
    fn test_impossible_coercion() {
        let err = ExpectedShape::Parameter.coerce(var()).unwrap_err();
        assert!(matches!(
            err,
            RewriteError::Coercion { shape: ExpectedShape::Parameter, found: NodeKind::VariableExpression }
        ));
    }
}
