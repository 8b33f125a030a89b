use super::node::{Ast, Node, NodeRef};

fn push_all<'a>(out: &mut Vec<NodeRef<'a>>, nodes: &'a [Node]) {
    out.extend(nodes.iter().map(Node::as_node_ref));
}

fn push_opt<'a>(out: &mut Vec<NodeRef<'a>>, node: &'a Option<Box<Node>>) {
    if let Some(node) = node {
        out.push(node.as_node_ref());
    }
}

fn push_typed<'a, T: Ast>(out: &mut Vec<NodeRef<'a>>, nodes: &'a [T]) {
    out.extend(nodes.iter().map(Ast::as_node_ref));
}

impl<'a> NodeRef<'a> {
    /// Direct children in source order.
    pub fn children(self) -> Vec<NodeRef<'a>> {
        let mut out = Vec::new();
        match self {
            NodeRef::ArrayExpression(n) => out.push(NodeRef::StatementBlock(&n.sub_expression)),
            NodeRef::ArrayLiteral(n) => push_all(&mut out, &n.elements),
            NodeRef::AssignmentStatement(n) => {
                out.push(n.left.as_node_ref());
                out.push(n.right.as_node_ref());
            }
            NodeRef::Attribute(n) => {
                push_all(&mut out, &n.positional_arguments);
                push_typed(&mut out, &n.named_arguments);
            }
            NodeRef::AttributedExpression(n) => {
                out.push(n.attribute.as_node_ref());
                out.push(n.child.as_node_ref());
            }
            NodeRef::BinaryExpression(n) => {
                out.push(n.left.as_node_ref());
                out.push(n.right.as_node_ref());
            }
            NodeRef::BlockStatement(n) => out.push(NodeRef::StatementBlock(&n.body)),
            NodeRef::BreakStatement(n) => push_opt(&mut out, &n.label),
            NodeRef::CatchClause(n) => {
                push_typed(&mut out, &n.catch_types);
                out.push(NodeRef::StatementBlock(&n.body));
            }
            NodeRef::Command(n) => {
                push_all(&mut out, &n.command_elements);
                push_all(&mut out, &n.redirections);
            }
            NodeRef::CommandExpression(n) => {
                out.push(n.expression.as_node_ref());
                push_all(&mut out, &n.redirections);
            }
            NodeRef::CommandParameter(n) => push_opt(&mut out, &n.argument),
            NodeRef::ConstantExpression(_) => {}
            NodeRef::ContinueStatement(n) => push_opt(&mut out, &n.label),
            NodeRef::ConvertExpression(n) => {
                out.push(NodeRef::TypeConstraint(&n.type_constraint));
                out.push(n.child.as_node_ref());
            }
            NodeRef::DataStatement(n) => {
                push_all(&mut out, &n.commands_allowed);
                out.push(NodeRef::StatementBlock(&n.body));
            }
            NodeRef::DoUntilStatement(n) => {
                out.push(n.condition.as_node_ref());
                out.push(NodeRef::StatementBlock(&n.body));
            }
            NodeRef::DoWhileStatement(n) => {
                out.push(n.condition.as_node_ref());
                out.push(NodeRef::StatementBlock(&n.body));
            }
            NodeRef::ErrorExpression(n) => push_all(&mut out, &n.nested),
            NodeRef::ErrorStatement(n) => push_all(&mut out, &n.nested),
            NodeRef::ExitStatement(n) => push_opt(&mut out, &n.pipeline),
            NodeRef::ExpandableStringExpression(_) => {}
            NodeRef::FileRedirection(n) => out.push(n.location.as_node_ref()),
            NodeRef::ForEachStatement(n) => {
                out.push(NodeRef::VariableExpression(&n.variable));
                out.push(n.condition.as_node_ref());
                out.push(NodeRef::StatementBlock(&n.body));
            }
            NodeRef::ForStatement(n) => {
                push_opt(&mut out, &n.initializer);
                push_opt(&mut out, &n.condition);
                push_opt(&mut out, &n.iterator);
                out.push(NodeRef::StatementBlock(&n.body));
            }
            NodeRef::FunctionDefinition(n) => {
                push_typed(&mut out, &n.parameters);
                out.push(NodeRef::ScriptBlock(&n.body));
            }
            NodeRef::Hashtable(n) => {
                for (key, value) in &n.key_value_pairs {
                    out.push(key.as_node_ref());
                    out.push(value.as_node_ref());
                }
            }
            NodeRef::IfStatement(n) => {
                for (condition, body) in &n.clauses {
                    out.push(condition.as_node_ref());
                    out.push(NodeRef::StatementBlock(body));
                }
                if let Some(else_clause) = &n.else_clause {
                    out.push(NodeRef::StatementBlock(else_clause));
                }
            }
            NodeRef::IndexExpression(n) => {
                out.push(n.target.as_node_ref());
                out.push(n.index.as_node_ref());
            }
            NodeRef::InvokeMemberExpression(n) => {
                out.push(n.expression.as_node_ref());
                out.push(n.member.as_node_ref());
                push_all(&mut out, &n.arguments);
            }
            NodeRef::MemberExpression(n) => {
                out.push(n.expression.as_node_ref());
                out.push(n.member.as_node_ref());
            }
            NodeRef::MergingRedirection(_) => {}
            NodeRef::NamedAttributeArgument(n) => out.push(n.argument.as_node_ref()),
            NodeRef::NamedBlock(n) => {
                push_all(&mut out, &n.statements);
                push_typed(&mut out, &n.traps);
            }
            NodeRef::ParamBlock(n) => {
                push_typed(&mut out, &n.attributes);
                push_typed(&mut out, &n.parameters);
            }
            NodeRef::Parameter(n) => {
                out.push(NodeRef::VariableExpression(&n.name));
                push_all(&mut out, &n.attributes);
                push_opt(&mut out, &n.default_value);
            }
            NodeRef::ParenExpression(n) => out.push(n.pipeline.as_node_ref()),
            NodeRef::Pipeline(n) => push_all(&mut out, &n.pipeline_elements),
            NodeRef::ReturnStatement(n) => push_opt(&mut out, &n.pipeline),
            NodeRef::ScriptBlock(n) => {
                push_typed(&mut out, &n.using_statements);
                push_typed(&mut out, &n.attributes);
                if let Some(param_block) = &n.param_block {
                    out.push(NodeRef::ParamBlock(param_block));
                }
                for block in [&n.begin_block, &n.process_block, &n.end_block, &n.dynamic_param_block]
                    .into_iter()
                    .flatten()
                {
                    out.push(NodeRef::NamedBlock(block));
                }
            }
            NodeRef::ScriptBlockExpression(n) => out.push(NodeRef::ScriptBlock(&n.script_block)),
            NodeRef::StatementBlock(n) => {
                push_all(&mut out, &n.statements);
                push_typed(&mut out, &n.traps);
            }
            NodeRef::StringConstantExpression(_) => {}
            NodeRef::SubExpression(n) => out.push(NodeRef::StatementBlock(&n.sub_expression)),
            NodeRef::SwitchStatement(n) => {
                out.push(n.condition.as_node_ref());
                for (pattern, body) in &n.clauses {
                    out.push(pattern.as_node_ref());
                    out.push(NodeRef::StatementBlock(body));
                }
                if let Some(default) = &n.default {
                    out.push(NodeRef::StatementBlock(default));
                }
            }
            NodeRef::ThrowStatement(n) => push_opt(&mut out, &n.pipeline),
            NodeRef::TrapStatement(n) => {
                if let Some(trap_type) = &n.trap_type {
                    out.push(NodeRef::TypeConstraint(trap_type));
                }
                out.push(NodeRef::StatementBlock(&n.body));
            }
            NodeRef::TryStatement(n) => {
                out.push(NodeRef::StatementBlock(&n.body));
                push_typed(&mut out, &n.catch_clauses);
                if let Some(finally) = &n.finally {
                    out.push(NodeRef::StatementBlock(finally));
                }
            }
            NodeRef::TypeConstraint(_) => {}
            NodeRef::TypeExpression(_) => {}
            NodeRef::UnaryExpression(n) => out.push(n.child.as_node_ref()),
            NodeRef::UsingExpression(n) => out.push(n.sub_expression.as_node_ref()),
            NodeRef::VariableExpression(_) => {}
            NodeRef::WhileStatement(n) => {
                out.push(n.condition.as_node_ref());
                out.push(NodeRef::StatementBlock(&n.body));
            }
            NodeRef::BaseCtorInvokeMemberExpression(n) => push_all(&mut out, &n.arguments),
            NodeRef::ConfigurationDefinition(n) => {
                out.push(NodeRef::ScriptBlockExpression(&n.body));
                out.push(n.instance_name.as_node_ref());
            }
            NodeRef::DynamicKeywordStatement(n) => push_all(&mut out, &n.command_elements),
            NodeRef::FunctionMember(n) => {
                push_typed(&mut out, &n.attributes);
                if let Some(return_type) = &n.return_type {
                    out.push(NodeRef::TypeConstraint(return_type));
                }
                push_typed(&mut out, &n.parameters);
                out.push(NodeRef::ScriptBlock(&n.body));
            }
            NodeRef::PropertyMember(n) => {
                push_typed(&mut out, &n.attributes);
                if let Some(property_type) = &n.property_type {
                    out.push(NodeRef::TypeConstraint(property_type));
                }
                push_opt(&mut out, &n.initial_value);
            }
            NodeRef::TypeDefinition(n) => {
                push_typed(&mut out, &n.attributes);
                push_typed(&mut out, &n.base_types);
                push_all(&mut out, &n.members);
            }
            NodeRef::UsingStatement(n) => out.push(NodeRef::StringConstantExpression(&n.name)),
        }
        out
    }

    /// Pre-order walk over this node and everything below it.
    pub fn descendants(self) -> Descendants<'a> {
        Descendants { stack: vec![self] }
    }
}

pub struct Descendants<'a> {
    stack: Vec<NodeRef<'a>>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().into_iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::ps_node::{
        ArrayLiteralAst, Extent, NodeKind, StringConstantExpressionAst, StringConstantType, VariableExpressionAst,
    };

    fn extent() -> Extent {
        Extent::whole("t.ps1", "$a")
    }

    #[test]
    fn test_descendants_are_pre_order() {
        let var = VariableExpressionAst { extent: extent(), variable_path: "a".into(), splatted: false };
        let text = StringConstantExpressionAst {
            extent: extent(),
            value: "x".into(),
            string_constant_type: StringConstantType::SingleQuoted,
        };
        let literal = ArrayLiteralAst { extent: extent(), elements: vec![var.into(), text.into()] };
        let kinds: Vec<NodeKind> = literal.as_node_ref().descendants().map(|n| n.kind()).collect();
        assert_eq!(
            kinds,
            vec![NodeKind::ArrayLiteral, NodeKind::VariableExpression, NodeKind::StringConstantExpression]
        );
    }
}
