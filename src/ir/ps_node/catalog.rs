//! The closed list of node kinds.
//!
//! `for_each_kind!(callback)` expands `callback!` once with every kind, in the
//! form `Variant(StructName) => visit_method, walk_function, WITNESS, route;`.
//! `route` is the bucket the two-category facade sends the kind's result to.
//! Every per-kind table in the crate (the node enums, kind witnesses, visitor
//! dispatch) is generated from this one list so they cannot drift apart.

macro_rules! for_each_kind {
    ($callback:ident) => {
        $callback! {
            ArrayExpression(ArrayExpressionAst) => visit_array_expression, walk_array_expression, ARRAY_EXPRESSION, expression;
            ArrayLiteral(ArrayLiteralAst) => visit_array_literal, walk_array_literal, ARRAY_LITERAL, expression;
            AssignmentStatement(AssignmentStatementAst) => visit_assignment_statement, walk_assignment_statement, ASSIGNMENT_STATEMENT, statement;
            Attribute(AttributeAst) => visit_attribute, walk_attribute, ATTRIBUTE, other;
            AttributedExpression(AttributedExpressionAst) => visit_attributed_expression, walk_attributed_expression, ATTRIBUTED_EXPRESSION, expression;
            BinaryExpression(BinaryExpressionAst) => visit_binary_expression, walk_binary_expression, BINARY_EXPRESSION, expression;
            BlockStatement(BlockStatementAst) => visit_block_statement, walk_block_statement, BLOCK_STATEMENT, statement;
            BreakStatement(BreakStatementAst) => visit_break_statement, walk_break_statement, BREAK_STATEMENT, statement;
            CatchClause(CatchClauseAst) => visit_catch_clause, walk_catch_clause, CATCH_CLAUSE, other;
            Command(CommandAst) => visit_command, walk_command, COMMAND, statement;
            CommandExpression(CommandExpressionAst) => visit_command_expression, walk_command_expression, COMMAND_EXPRESSION, statement;
            CommandParameter(CommandParameterAst) => visit_command_parameter, walk_command_parameter, COMMAND_PARAMETER, other;
            ConstantExpression(ConstantExpressionAst) => visit_constant_expression, walk_constant_expression, CONSTANT_EXPRESSION, expression;
            ContinueStatement(ContinueStatementAst) => visit_continue_statement, walk_continue_statement, CONTINUE_STATEMENT, statement;
            ConvertExpression(ConvertExpressionAst) => visit_convert_expression, walk_convert_expression, CONVERT_EXPRESSION, expression;
            DataStatement(DataStatementAst) => visit_data_statement, walk_data_statement, DATA_STATEMENT, statement;
            DoUntilStatement(DoUntilStatementAst) => visit_do_until_statement, walk_do_until_statement, DO_UNTIL_STATEMENT, statement;
            DoWhileStatement(DoWhileStatementAst) => visit_do_while_statement, walk_do_while_statement, DO_WHILE_STATEMENT, statement;
            ErrorExpression(ErrorExpressionAst) => visit_error_expression, walk_error_expression, ERROR_EXPRESSION, expression;
            ErrorStatement(ErrorStatementAst) => visit_error_statement, walk_error_statement, ERROR_STATEMENT, statement;
            ExitStatement(ExitStatementAst) => visit_exit_statement, walk_exit_statement, EXIT_STATEMENT, statement;
            ExpandableStringExpression(ExpandableStringExpressionAst) => visit_expandable_string_expression, walk_expandable_string_expression, EXPANDABLE_STRING_EXPRESSION, expression;
            FileRedirection(FileRedirectionAst) => visit_file_redirection, walk_file_redirection, FILE_REDIRECTION, other;
            ForEachStatement(ForEachStatementAst) => visit_for_each_statement, walk_for_each_statement, FOR_EACH_STATEMENT, statement;
            ForStatement(ForStatementAst) => visit_for_statement, walk_for_statement, FOR_STATEMENT, statement;
            FunctionDefinition(FunctionDefinitionAst) => visit_function_definition, walk_function_definition, FUNCTION_DEFINITION, statement;
            Hashtable(HashtableAst) => visit_hashtable, walk_hashtable, HASHTABLE, expression;
            IfStatement(IfStatementAst) => visit_if_statement, walk_if_statement, IF_STATEMENT, statement;
            IndexExpression(IndexExpressionAst) => visit_index_expression, walk_index_expression, INDEX_EXPRESSION, expression;
            InvokeMemberExpression(InvokeMemberExpressionAst) => visit_invoke_member_expression, walk_invoke_member_expression, INVOKE_MEMBER_EXPRESSION, expression;
            MemberExpression(MemberExpressionAst) => visit_member_expression, walk_member_expression, MEMBER_EXPRESSION, expression;
            MergingRedirection(MergingRedirectionAst) => visit_merging_redirection, walk_merging_redirection, MERGING_REDIRECTION, other;
            NamedAttributeArgument(NamedAttributeArgumentAst) => visit_named_attribute_argument, walk_named_attribute_argument, NAMED_ATTRIBUTE_ARGUMENT, other;
            NamedBlock(NamedBlockAst) => visit_named_block, walk_named_block, NAMED_BLOCK, other;
            ParamBlock(ParamBlockAst) => visit_param_block, walk_param_block, PARAM_BLOCK, other;
            Parameter(ParameterAst) => visit_parameter, walk_parameter, PARAMETER, other;
            ParenExpression(ParenExpressionAst) => visit_paren_expression, walk_paren_expression, PAREN_EXPRESSION, expression;
            Pipeline(PipelineAst) => visit_pipeline, walk_pipeline, PIPELINE, statement;
            ReturnStatement(ReturnStatementAst) => visit_return_statement, walk_return_statement, RETURN_STATEMENT, statement;
            ScriptBlock(ScriptBlockAst) => visit_script_block, walk_script_block, SCRIPT_BLOCK, other;
            ScriptBlockExpression(ScriptBlockExpressionAst) => visit_script_block_expression, walk_script_block_expression, SCRIPT_BLOCK_EXPRESSION, expression;
            StatementBlock(StatementBlockAst) => visit_statement_block, walk_statement_block, STATEMENT_BLOCK, other;
            StringConstantExpression(StringConstantExpressionAst) => visit_string_constant_expression, walk_string_constant_expression, STRING_CONSTANT_EXPRESSION, expression;
            SubExpression(SubExpressionAst) => visit_sub_expression, walk_sub_expression, SUB_EXPRESSION, expression;
            SwitchStatement(SwitchStatementAst) => visit_switch_statement, walk_switch_statement, SWITCH_STATEMENT, statement;
            ThrowStatement(ThrowStatementAst) => visit_throw_statement, walk_throw_statement, THROW_STATEMENT, statement;
            TrapStatement(TrapStatementAst) => visit_trap_statement, walk_trap_statement, TRAP_STATEMENT, statement;
            TryStatement(TryStatementAst) => visit_try_statement, walk_try_statement, TRY_STATEMENT, statement;
            TypeConstraint(TypeConstraintAst) => visit_type_constraint, walk_type_constraint, TYPE_CONSTRAINT, other;
            TypeExpression(TypeExpressionAst) => visit_type_expression, walk_type_expression, TYPE_EXPRESSION, expression;
            UnaryExpression(UnaryExpressionAst) => visit_unary_expression, walk_unary_expression, UNARY_EXPRESSION, expression;
            UsingExpression(UsingExpressionAst) => visit_using_expression, walk_using_expression, USING_EXPRESSION, expression;
            VariableExpression(VariableExpressionAst) => visit_variable_expression, walk_variable_expression, VARIABLE_EXPRESSION, expression;
            WhileStatement(WhileStatementAst) => visit_while_statement, walk_while_statement, WHILE_STATEMENT, statement;
            BaseCtorInvokeMemberExpression(BaseCtorInvokeMemberExpressionAst) => visit_base_ctor_invoke_member_expression, walk_base_ctor_invoke_member_expression, BASE_CTOR_INVOKE_MEMBER_EXPRESSION, other;
            ConfigurationDefinition(ConfigurationDefinitionAst) => visit_configuration_definition, walk_configuration_definition, CONFIGURATION_DEFINITION, statement;
            DynamicKeywordStatement(DynamicKeywordStatementAst) => visit_dynamic_keyword_statement, walk_dynamic_keyword_statement, DYNAMIC_KEYWORD_STATEMENT, statement;
            FunctionMember(FunctionMemberAst) => visit_function_member, walk_function_member, FUNCTION_MEMBER, other;
            PropertyMember(PropertyMemberAst) => visit_property_member, walk_property_member, PROPERTY_MEMBER, other;
            TypeDefinition(TypeDefinitionAst) => visit_type_definition, walk_type_definition, TYPE_DEFINITION, statement;
            UsingStatement(UsingStatementAst) => visit_using_statement, walk_using_statement, USING_STATEMENT, other;
        }
    };
}

pub(crate) use for_each_kind;
