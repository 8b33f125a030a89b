//! Update-with-overrides: copy a node, replacing only the fields that were
//! given.
//!
//! Every kind has an `...Overrides` struct holding one `Option` per field.
//! `None` keeps a deep copy of the current value. For optional children the
//! override is itself an `Option`, so `Some(None)` removes the child.
//!
//! The copy is rebuilt through the kind's validating constructor, so an
//! override of the wrong category fails the same way construction does.

use crate::error::{Result, RewriteError};
use crate::ir::kind::AstType;
use crate::ir::ps_node::*;

pub trait Update: Sized {
    type Overrides: Default;

    fn update(&self, overrides: Self::Overrides) -> Result<Self>;

    /// A deep copy with nothing replaced.
    fn deep_copy(&self) -> Result<Self> {
        self.update(Self::Overrides::default())
    }
}

impl Node {
    /// Updates `self` as the witnessed kind.
    pub fn update_as<T>(&self, _kind: AstType<T>, overrides: T::Overrides) -> Result<T>
    where
        T: Update + HasKind,
    {
        match T::from_ref(self) {
            Some(node) => node.update(overrides),
            None => Err(RewriteError::KindMismatch { expected: T::KIND, found: self.kind() }),
        }
    }
}

fn keep<T: Clone>(value: Option<T>, current: &T) -> T {
    value.unwrap_or_else(|| current.clone())
}

fn keep_opt<T: Clone>(value: Option<Option<T>>, current: Option<&T>) -> Option<T> {
    value.unwrap_or_else(|| current.cloned())
}

macro_rules! updatable {
    (
        $ty:ident => $overrides:ident { $( $field:ident: $fty:ty ),* $(,)? }
        |$this:ident, $o:ident, $extent:ident| $build:expr
    ) => {
        #[derive(Debug, Clone, Default)]
        pub struct $overrides {
            pub extent: Option<Extent>,
            $( pub $field: Option<$fty>, )*
        }

        impl Update for $ty {
            type Overrides = $overrides;

            fn update(&self, $o: $overrides) -> Result<Self> {
                let $this = self;
                let $extent = keep($o.extent, &$this.extent);
                $build
            }
        }
    };
}

updatable! {
    ArrayExpressionAst => ArrayExpressionOverrides { sub_expression: StatementBlockAst }
    |this, o, extent| Ok(ArrayExpressionAst::new(extent, keep(o.sub_expression, &this.sub_expression)))
}

updatable! {
    ArrayLiteralAst => ArrayLiteralOverrides { elements: Vec<Node> }
    |this, o, extent| ArrayLiteralAst::new(extent, keep(o.elements, &this.elements))
}

updatable! {
    AssignmentStatementAst => AssignmentStatementOverrides {
        left: Node,
        operator: TokenKind,
        right: Node,
        error_position: Extent,
    }
    |this, o, extent| AssignmentStatementAst::new(
        extent,
        keep(o.left, &*this.left),
        keep(o.operator, &this.operator),
        keep(o.right, &*this.right),
        keep(o.error_position, &this.error_position),
    )
}

updatable! {
    AttributeAst => AttributeOverrides {
        type_name: TypeName,
        positional_arguments: Vec<Node>,
        named_arguments: Vec<NamedAttributeArgumentAst>,
    }
    |this, o, extent| AttributeAst::new(
        extent,
        keep(o.type_name, &this.type_name),
        keep(o.positional_arguments, &this.positional_arguments),
        keep(o.named_arguments, &this.named_arguments),
    )
}

updatable! {
    AttributedExpressionAst => AttributedExpressionOverrides { attribute: Node, child: Node }
    |this, o, extent| AttributedExpressionAst::new(
        extent,
        keep(o.attribute, &*this.attribute),
        keep(o.child, &*this.child),
    )
}

updatable! {
    BinaryExpressionAst => BinaryExpressionOverrides {
        left: Node,
        operator: TokenKind,
        right: Node,
        error_position: Extent,
    }
    |this, o, extent| BinaryExpressionAst::new(
        extent,
        keep(o.left, &*this.left),
        keep(o.operator, &this.operator),
        keep(o.right, &*this.right),
        keep(o.error_position, &this.error_position),
    )
}

updatable! {
    BlockStatementAst => BlockStatementOverrides { kind: TokenKind, body: StatementBlockAst }
    |this, o, extent| Ok(BlockStatementAst::new(extent, keep(o.kind, &this.kind), keep(o.body, &this.body)))
}

updatable! {
    BreakStatementAst => BreakStatementOverrides { label: Option<Node> }
    |this, o, extent| BreakStatementAst::new(extent, keep_opt(o.label, this.label.as_deref()))
}

updatable! {
    CatchClauseAst => CatchClauseOverrides { catch_types: Vec<TypeConstraintAst>, body: StatementBlockAst }
    |this, o, extent| Ok(CatchClauseAst::new(extent, keep(o.catch_types, &this.catch_types), keep(o.body, &this.body)))
}

updatable! {
    CommandAst => CommandOverrides {
        command_elements: Vec<Node>,
        invocation_operator: TokenKind,
        redirections: Vec<Node>,
    }
    |this, o, extent| CommandAst::new(
        extent,
        keep(o.command_elements, &this.command_elements),
        keep(o.invocation_operator, &this.invocation_operator),
        keep(o.redirections, &this.redirections),
    )
}

updatable! {
    CommandExpressionAst => CommandExpressionOverrides { expression: Node, redirections: Vec<Node> }
    |this, o, extent| CommandExpressionAst::new(
        extent,
        keep(o.expression, &*this.expression),
        keep(o.redirections, &this.redirections),
    )
}

updatable! {
    CommandParameterAst => CommandParameterOverrides {
        parameter_name: String,
        argument: Option<Node>,
        error_position: Extent,
    }
    |this, o, extent| CommandParameterAst::new(
        extent,
        keep(o.parameter_name, &this.parameter_name),
        keep_opt(o.argument, this.argument.as_deref()),
        keep(o.error_position, &this.error_position),
    )
}

updatable! {
    ConstantExpressionAst => ConstantExpressionOverrides { value: ConstantValue }
    |this, o, extent| Ok(ConstantExpressionAst::new(extent, keep(o.value, &this.value)))
}

updatable! {
    ContinueStatementAst => ContinueStatementOverrides { label: Option<Node> }
    |this, o, extent| ContinueStatementAst::new(extent, keep_opt(o.label, this.label.as_deref()))
}

updatable! {
    ConvertExpressionAst => ConvertExpressionOverrides { type_constraint: TypeConstraintAst, child: Node }
    |this, o, extent| ConvertExpressionAst::new(
        extent,
        keep(o.type_constraint, &this.type_constraint),
        keep(o.child, &*this.child),
    )
}

updatable! {
    DataStatementAst => DataStatementOverrides {
        variable: Option<String>,
        commands_allowed: Vec<Node>,
        body: StatementBlockAst,
    }
    |this, o, extent| DataStatementAst::new(
        extent,
        keep(o.variable, &this.variable),
        keep(o.commands_allowed, &this.commands_allowed),
        keep(o.body, &this.body),
    )
}

updatable! {
    DoUntilStatementAst => DoUntilStatementOverrides {
        label: Option<String>,
        condition: Node,
        body: StatementBlockAst,
    }
    |this, o, extent| DoUntilStatementAst::new(
        extent,
        keep(o.label, &this.label),
        keep(o.condition, &*this.condition),
        keep(o.body, &this.body),
    )
}

updatable! {
    DoWhileStatementAst => DoWhileStatementOverrides {
        label: Option<String>,
        condition: Node,
        body: StatementBlockAst,
    }
    |this, o, extent| DoWhileStatementAst::new(
        extent,
        keep(o.label, &this.label),
        keep(o.condition, &*this.condition),
        keep(o.body, &this.body),
    )
}

updatable! {
    ErrorExpressionAst => ErrorExpressionOverrides { nested: Vec<Node> }
    |this, o, extent| Ok(ErrorExpressionAst::new(extent, keep(o.nested, &this.nested)))
}

updatable! {
    ErrorStatementAst => ErrorStatementOverrides { kind: Option<String>, nested: Vec<Node> }
    |this, o, extent| Ok(ErrorStatementAst::new(extent, keep(o.kind, &this.kind), keep(o.nested, &this.nested)))
}

updatable! {
    ExitStatementAst => ExitStatementOverrides { pipeline: Option<Node> }
    |this, o, extent| ExitStatementAst::new(extent, keep_opt(o.pipeline, this.pipeline.as_deref()))
}

updatable! {
    ExpandableStringExpressionAst => ExpandableStringExpressionOverrides {
        value: String,
        string_constant_type: StringConstantType,
    }
    |this, o, extent| Ok(ExpandableStringExpressionAst::new(
        extent,
        keep(o.value, &this.value),
        keep(o.string_constant_type, &this.string_constant_type),
    ))
}

updatable! {
    FileRedirectionAst => FileRedirectionOverrides {
        from_stream: RedirectionStream,
        location: Node,
        append: bool,
    }
    |this, o, extent| FileRedirectionAst::new(
        extent,
        keep(o.from_stream, &this.from_stream),
        keep(o.location, &*this.location),
        keep(o.append, &this.append),
    )
}

updatable! {
    ForEachStatementAst => ForEachStatementOverrides {
        label: Option<String>,
        flags: ForEachFlags,
        variable: VariableExpressionAst,
        condition: Node,
        body: StatementBlockAst,
    }
    |this, o, extent| ForEachStatementAst::new(
        extent,
        keep(o.label, &this.label),
        keep(o.flags, &this.flags),
        keep(o.variable, &this.variable),
        keep(o.condition, &*this.condition),
        keep(o.body, &this.body),
    )
}

updatable! {
    ForStatementAst => ForStatementOverrides {
        label: Option<String>,
        initializer: Option<Node>,
        condition: Option<Node>,
        iterator: Option<Node>,
        body: StatementBlockAst,
    }
    |this, o, extent| ForStatementAst::new(
        extent,
        keep(o.label, &this.label),
        keep_opt(o.initializer, this.initializer.as_deref()),
        keep_opt(o.condition, this.condition.as_deref()),
        keep_opt(o.iterator, this.iterator.as_deref()),
        keep(o.body, &this.body),
    )
}

updatable! {
    FunctionDefinitionAst => FunctionDefinitionOverrides {
        is_filter: bool,
        is_workflow: bool,
        name: String,
        parameters: Vec<ParameterAst>,
        body: ScriptBlockAst,
    }
    |this, o, extent| Ok(FunctionDefinitionAst::new(
        extent,
        keep(o.is_filter, &this.is_filter),
        keep(o.is_workflow, &this.is_workflow),
        keep(o.name, &this.name),
        keep(o.parameters, &this.parameters),
        keep(o.body, &*this.body),
    ))
}

updatable! {
    HashtableAst => HashtableOverrides { key_value_pairs: Vec<(Node, Node)> }
    |this, o, extent| HashtableAst::new(extent, keep(o.key_value_pairs, &this.key_value_pairs))
}

updatable! {
    IfStatementAst => IfStatementOverrides {
        clauses: Vec<(Node, StatementBlockAst)>,
        else_clause: Option<StatementBlockAst>,
    }
    |this, o, extent| IfStatementAst::new(
        extent,
        keep(o.clauses, &this.clauses),
        keep(o.else_clause, &this.else_clause),
    )
}

updatable! {
    IndexExpressionAst => IndexExpressionOverrides { target: Node, index: Node }
    |this, o, extent| IndexExpressionAst::new(extent, keep(o.target, &*this.target), keep(o.index, &*this.index))
}

updatable! {
    InvokeMemberExpressionAst => InvokeMemberExpressionOverrides {
        expression: Node,
        member: Node,
        arguments: Vec<Node>,
        is_static: bool,
    }
    |this, o, extent| InvokeMemberExpressionAst::new(
        extent,
        keep(o.expression, &*this.expression),
        keep(o.member, &*this.member),
        keep(o.arguments, &this.arguments),
        keep(o.is_static, &this.is_static),
    )
}

updatable! {
    MemberExpressionAst => MemberExpressionOverrides { expression: Node, member: Node, is_static: bool }
    |this, o, extent| MemberExpressionAst::new(
        extent,
        keep(o.expression, &*this.expression),
        keep(o.member, &*this.member),
        keep(o.is_static, &this.is_static),
    )
}

updatable! {
    MergingRedirectionAst => MergingRedirectionOverrides {
        from_stream: RedirectionStream,
        to_stream: RedirectionStream,
    }
    |this, o, extent| Ok(MergingRedirectionAst::new(
        extent,
        keep(o.from_stream, &this.from_stream),
        keep(o.to_stream, &this.to_stream),
    ))
}

updatable! {
    NamedAttributeArgumentAst => NamedAttributeArgumentOverrides {
        argument_name: String,
        argument: Node,
        expression_omitted: bool,
    }
    |this, o, extent| NamedAttributeArgumentAst::new(
        extent,
        keep(o.argument_name, &this.argument_name),
        keep(o.argument, &*this.argument),
        keep(o.expression_omitted, &this.expression_omitted),
    )
}

updatable! {
    NamedBlockAst => NamedBlockOverrides {
        block_kind: TokenKind,
        statements: Vec<Node>,
        traps: Vec<TrapStatementAst>,
        unnamed: bool,
    }
    |this, o, extent| NamedBlockAst::new(
        extent,
        keep(o.block_kind, &this.block_kind),
        keep(o.statements, &this.statements),
        keep(o.traps, &this.traps),
        keep(o.unnamed, &this.unnamed),
    )
}

updatable! {
    ParamBlockAst => ParamBlockOverrides { attributes: Vec<AttributeAst>, parameters: Vec<ParameterAst> }
    |this, o, extent| Ok(ParamBlockAst::new(
        extent,
        keep(o.attributes, &this.attributes),
        keep(o.parameters, &this.parameters),
    ))
}

updatable! {
    ParameterAst => ParameterOverrides {
        name: VariableExpressionAst,
        attributes: Vec<Node>,
        default_value: Option<Node>,
    }
    |this, o, extent| ParameterAst::new(
        extent,
        keep(o.name, &this.name),
        keep(o.attributes, &this.attributes),
        keep_opt(o.default_value, this.default_value.as_deref()),
    )
}

updatable! {
    ParenExpressionAst => ParenExpressionOverrides { pipeline: Node }
    |this, o, extent| ParenExpressionAst::new(extent, keep(o.pipeline, &*this.pipeline))
}

updatable! {
    PipelineAst => PipelineOverrides { pipeline_elements: Vec<Node> }
    |this, o, extent| PipelineAst::new(extent, keep(o.pipeline_elements, &this.pipeline_elements))
}

updatable! {
    ReturnStatementAst => ReturnStatementOverrides { pipeline: Option<Node> }
    |this, o, extent| ReturnStatementAst::new(extent, keep_opt(o.pipeline, this.pipeline.as_deref()))
}

updatable! {
    ScriptBlockAst => ScriptBlockOverrides {
        using_statements: Vec<UsingStatementAst>,
        attributes: Vec<AttributeAst>,
        param_block: Option<ParamBlockAst>,
        begin_block: Option<NamedBlockAst>,
        process_block: Option<NamedBlockAst>,
        end_block: Option<NamedBlockAst>,
        dynamic_param_block: Option<NamedBlockAst>,
    }
    |this, o, extent| Ok(ScriptBlockAst::new(
        extent,
        keep(o.using_statements, &this.using_statements),
        keep(o.attributes, &this.attributes),
        keep_opt(o.param_block, this.param_block.as_deref()),
        keep_opt(o.begin_block, this.begin_block.as_deref()),
        keep_opt(o.process_block, this.process_block.as_deref()),
        keep_opt(o.end_block, this.end_block.as_deref()),
        keep_opt(o.dynamic_param_block, this.dynamic_param_block.as_deref()),
    ))
}

updatable! {
    ScriptBlockExpressionAst => ScriptBlockExpressionOverrides { script_block: ScriptBlockAst }
    |this, o, extent| Ok(ScriptBlockExpressionAst::new(extent, keep(o.script_block, &*this.script_block)))
}

updatable! {
    StatementBlockAst => StatementBlockOverrides { statements: Vec<Node>, traps: Vec<TrapStatementAst> }
    |this, o, extent| StatementBlockAst::new(extent, keep(o.statements, &this.statements), keep(o.traps, &this.traps))
}

updatable! {
    StringConstantExpressionAst => StringConstantExpressionOverrides {
        value: String,
        string_constant_type: StringConstantType,
    }
    |this, o, extent| Ok(StringConstantExpressionAst::new(
        extent,
        keep(o.value, &this.value),
        keep(o.string_constant_type, &this.string_constant_type),
    ))
}

updatable! {
    SubExpressionAst => SubExpressionOverrides { sub_expression: StatementBlockAst }
    |this, o, extent| Ok(SubExpressionAst::new(extent, keep(o.sub_expression, &this.sub_expression)))
}

updatable! {
    SwitchStatementAst => SwitchStatementOverrides {
        label: Option<String>,
        condition: Node,
        flags: SwitchFlags,
        clauses: Vec<(Node, StatementBlockAst)>,
        default: Option<StatementBlockAst>,
    }
    |this, o, extent| SwitchStatementAst::new(
        extent,
        keep(o.label, &this.label),
        keep(o.condition, &*this.condition),
        keep(o.flags, &this.flags),
        keep(o.clauses, &this.clauses),
        keep(o.default, &this.default),
    )
}

updatable! {
    ThrowStatementAst => ThrowStatementOverrides { pipeline: Option<Node> }
    |this, o, extent| ThrowStatementAst::new(extent, keep_opt(o.pipeline, this.pipeline.as_deref()))
}

updatable! {
    TrapStatementAst => TrapStatementOverrides {
        trap_type: Option<TypeConstraintAst>,
        body: StatementBlockAst,
    }
    |this, o, extent| Ok(TrapStatementAst::new(extent, keep(o.trap_type, &this.trap_type), keep(o.body, &this.body)))
}

updatable! {
    TryStatementAst => TryStatementOverrides {
        body: StatementBlockAst,
        catch_clauses: Vec<CatchClauseAst>,
        finally: Option<StatementBlockAst>,
    }
    |this, o, extent| Ok(TryStatementAst::new(
        extent,
        keep(o.body, &this.body),
        keep(o.catch_clauses, &this.catch_clauses),
        keep(o.finally, &this.finally),
    ))
}

updatable! {
    TypeConstraintAst => TypeConstraintOverrides { type_name: TypeName }
    |this, o, extent| Ok(TypeConstraintAst::new(extent, keep(o.type_name, &this.type_name)))
}

updatable! {
    TypeExpressionAst => TypeExpressionOverrides { type_name: TypeName }
    |this, o, extent| Ok(TypeExpressionAst::new(extent, keep(o.type_name, &this.type_name)))
}

updatable! {
    UnaryExpressionAst => UnaryExpressionOverrides { token_kind: TokenKind, child: Node }
    |this, o, extent| UnaryExpressionAst::new(extent, keep(o.token_kind, &this.token_kind), keep(o.child, &*this.child))
}

updatable! {
    UsingExpressionAst => UsingExpressionOverrides { sub_expression: Node }
    |this, o, extent| UsingExpressionAst::new(extent, keep(o.sub_expression, &*this.sub_expression))
}

updatable! {
    VariableExpressionAst => VariableExpressionOverrides { variable_path: String, splatted: bool }
    |this, o, extent| Ok(VariableExpressionAst::new(
        extent,
        keep(o.variable_path, &this.variable_path),
        keep(o.splatted, &this.splatted),
    ))
}

updatable! {
    WhileStatementAst => WhileStatementOverrides {
        label: Option<String>,
        condition: Node,
        body: StatementBlockAst,
    }
    |this, o, extent| WhileStatementAst::new(
        extent,
        keep(o.label, &this.label),
        keep(o.condition, &*this.condition),
        keep(o.body, &this.body),
    )
}

updatable! {
    BaseCtorInvokeMemberExpressionAst => BaseCtorInvokeMemberExpressionOverrides {
        base_keyword_extent: Extent,
        arguments: Vec<Node>,
    }
    |this, o, extent| BaseCtorInvokeMemberExpressionAst::new(
        extent,
        keep(o.base_keyword_extent, &this.base_keyword_extent),
        keep(o.arguments, &this.arguments),
    )
}

updatable! {
    ConfigurationDefinitionAst => ConfigurationDefinitionOverrides {
        body: ScriptBlockExpressionAst,
        configuration_type: ConfigurationType,
        instance_name: Node,
    }
    |this, o, extent| ConfigurationDefinitionAst::new(
        extent,
        keep(o.body, &this.body),
        keep(o.configuration_type, &this.configuration_type),
        keep(o.instance_name, &*this.instance_name),
    )
}

updatable! {
    DynamicKeywordStatementAst => DynamicKeywordStatementOverrides { command_elements: Vec<Node> }
    |this, o, extent| DynamicKeywordStatementAst::new(extent, keep(o.command_elements, &this.command_elements))
}

updatable! {
    FunctionMemberAst => FunctionMemberOverrides {
        name: String,
        parameters: Vec<ParameterAst>,
        body: ScriptBlockAst,
        return_type: Option<TypeConstraintAst>,
        attributes: Vec<AttributeAst>,
        method_attributes: MemberAttributes,
    }
    |this, o, extent| Ok(FunctionMemberAst::new(
        extent,
        keep(o.name, &this.name),
        keep(o.parameters, &this.parameters),
        keep(o.body, &*this.body),
        keep(o.return_type, &this.return_type),
        keep(o.attributes, &this.attributes),
        keep(o.method_attributes, &this.method_attributes),
    ))
}

updatable! {
    PropertyMemberAst => PropertyMemberOverrides {
        name: String,
        property_type: Option<TypeConstraintAst>,
        attributes: Vec<AttributeAst>,
        property_attributes: MemberAttributes,
        initial_value: Option<Node>,
    }
    |this, o, extent| PropertyMemberAst::new(
        extent,
        keep(o.name, &this.name),
        keep(o.property_type, &this.property_type),
        keep(o.attributes, &this.attributes),
        keep(o.property_attributes, &this.property_attributes),
        keep_opt(o.initial_value, this.initial_value.as_deref()),
    )
}

updatable! {
    TypeDefinitionAst => TypeDefinitionOverrides {
        name: String,
        attributes: Vec<AttributeAst>,
        members: Vec<Node>,
        type_attributes: TypeAttributes,
        base_types: Vec<TypeConstraintAst>,
    }
    |this, o, extent| TypeDefinitionAst::new(
        extent,
        keep(o.name, &this.name),
        keep(o.attributes, &this.attributes),
        keep(o.members, &this.members),
        keep(o.type_attributes, &this.type_attributes),
        keep(o.base_types, &this.base_types),
    )
}

updatable! {
    UsingStatementAst => UsingStatementOverrides {
        using_statement_kind: UsingStatementKind,
        name: StringConstantExpressionAst,
    }
    |this, o, extent| Ok(UsingStatementAst::new(
        extent,
        keep(o.using_statement_kind, &this.using_statement_kind),
        keep(o.name, &this.name),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::kind;
    use crate::ir::shape::ExpectedShape;

    fn extent() -> Extent {
        Extent::from_offsets("u.ps1", "$a + $b", 0, 7)
    }

    fn var(name: &str) -> Node {
        VariableExpressionAst::new(extent(), name, false).into()
    }

    fn sum() -> BinaryExpressionAst {
        BinaryExpressionAst::new(extent(), var("a"), TokenKind::Plus, var("b"), extent()).unwrap()
    }

    #[test]
    fn test_no_overrides_is_deep_equal_copy() {
        let original = sum();
        let copy = original.deep_copy().unwrap();
        assert_eq!(copy, original);
        assert!(!std::ptr::eq(&*copy.left, &*original.left));
        assert!(!std::ptr::eq(&*copy.right, &*original.right));
    }

    #[test]
    fn test_override_replaces_only_given_field() {
        let original = sum();
        let updated = original
            .update(BinaryExpressionOverrides { operator: Some(TokenKind::Minus), ..Default::default() })
            .unwrap();
        assert_eq!(updated.operator, TokenKind::Minus);
        assert_eq!(updated.left, original.left);
        assert_eq!(original.operator, TokenKind::Plus);
    }

    #[test]
    fn test_override_is_validated() {
        let cmd: Node = CommandAst::new(
            extent(),
            vec![StringConstantExpressionAst::new(extent(), "ls", StringConstantType::BareWord).into()],
            TokenKind::Unknown,
            Vec::new(),
        )
        .unwrap()
        .into();
        let err = sum().update(BinaryExpressionOverrides { left: Some(cmd), ..Default::default() }).unwrap_err();
        assert!(matches!(err, RewriteError::ShapeMismatch { kind: NodeKind::BinaryExpression, slot: "left", .. }));
    }

    #[test]
    fn test_optional_child_can_be_removed() {
        let pipeline = ExpectedShape::Pipeline.coerce(var("a")).unwrap();
        let ret = ReturnStatementAst::new(extent(), Some(pipeline)).unwrap();
        assert_eq!(ret.pipeline.as_deref().map(Node::kind), Some(NodeKind::Pipeline));

        let bare = ret.update(ReturnStatementOverrides { pipeline: Some(None), ..Default::default() }).unwrap();
        assert!(bare.pipeline.is_none());
        assert!(ret.deep_copy().unwrap().pipeline.is_some());
    }

    #[test]
    fn test_empty_sequences_are_independent() {
        let block = StatementBlockAst::new(extent(), Vec::new(), Vec::new()).unwrap();
        let mut first = block.update(StatementBlockOverrides { statements: Some(Vec::new()), ..Default::default() }).unwrap();
        let second = block.update(StatementBlockOverrides { statements: Some(Vec::new()), ..Default::default() }).unwrap();
        first.statements.push(var("a"));
        assert!(second.statements.is_empty());
        assert!(block.statements.is_empty());
    }

    #[test]
    fn test_update_as_checks_kind() {
        let node: Node = sum().into();
        let err = node.update_as(kind::VARIABLE_EXPRESSION, Default::default()).unwrap_err();
        assert!(matches!(
            err,
            RewriteError::KindMismatch { expected: NodeKind::VariableExpression, found: NodeKind::BinaryExpression }
        ));
        let same = node.update_as(kind::BINARY_EXPRESSION, Default::default()).unwrap();
        assert_eq!(Node::from(same), node);
    }
}
