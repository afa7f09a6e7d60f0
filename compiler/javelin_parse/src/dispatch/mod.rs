//! Reduce dispatch.
//!
//! Every rule carries an [`Act`] tag naming the shape of node it builds.
//! The match below is exhaustive over the tags, so adding a tag to the
//! grammar without a handler fails to compile. Handlers live in one module
//! per family and only touch the parser stacks and the arena.

mod declarations;
mod expressions;
mod modifiers;
mod names;
mod statements;
mod types;

use javelin_grammar::Act;
use javelin_ir::ast::{
    DeclId, ExprId, ModifierFlags, Modifiers, QualifiedName, SwitchLabel, TypeDeclKind, TypeId,
};
use javelin_ir::{Span, Token, TokenKind};
use smallvec::SmallVec;

use crate::driver::Cx;
use crate::stacks::AstItem;
use crate::{ParseAbort, Parser};

/// Start offset recorded for a `Modifiersopt` that matched nothing.
pub(crate) const NO_POS: u32 = u32::MAX;

/// The rule being reduced, with the terminals it consumed.
pub(crate) struct Reduction<'a> {
    pub rule: u16,
    pub span: Span,
    pub tokens: &'a [Token],
}

impl<'a> Reduction<'a> {
    pub fn new(rule: u16, span: Span, tokens: &'a [Token]) -> Self {
        Reduction { rule, span, tokens }
    }

    pub fn first(&self) -> Result<Token, ParseAbort> {
        self.token(0)
    }

    pub fn token(&self, index: usize) -> Result<Token, ParseAbort> {
        self.tokens
            .get(index)
            .copied()
            .ok_or(ParseAbort::BadToken { rule: self.rule })
    }

    /// The first identifier among the rule's terminals.
    pub fn ident(&self) -> Result<Token, ParseAbort> {
        self.find(TokenKind::Identifier)
            .ok_or(ParseAbort::BadToken { rule: self.rule })
    }

    pub fn find(&self, kind: TokenKind) -> Option<Token> {
        self.tokens.iter().find(|token| token.kind == kind).copied()
    }

    pub fn has(&self, kind: TokenKind) -> bool {
        self.find(kind).is_some()
    }

    fn unexpected(&self, expected: &'static str) -> ParseAbort {
        ParseAbort::UnexpectedItem {
            rule: self.rule,
            expected,
        }
    }
}

impl Parser<'_> {
    pub(crate) fn dispatch(
        &mut self,
        act: Act,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
    ) -> Result<(), ParseAbort> {
        match act {
            Act::Nothing => Ok(()),

            Act::ConcatAst => Ok(self.stacks.ast.concat()?),
            Act::ConcatExpr => Ok(self.stacks.exprs.concat()?),
            Act::ConcatType => Ok(self.stacks.types.concat()?),
            Act::EmptyAstGroup => {
                self.stacks.ast.push_empty();
                Ok(())
            }
            Act::EmptyExprGroup => {
                self.stacks.exprs.push_empty();
                Ok(())
            }
            Act::EmptyTypeGroup => {
                self.stacks.types.push_empty();
                Ok(())
            }

            Act::NameFirst => self.name_first(r),
            Act::NameAppend => self.name_append(r),
            Act::Literal => self.literal(r, cx),

            Act::PrimitiveType => self.primitive_type(r, cx),
            Act::VoidType => self.void_type(r, cx),
            Act::NameToType => self.name_to_type(cx),
            Act::GenericType => self.generic_type(r, cx),
            Act::ArrayType => self.array_type(r, cx),
            Act::ArrayTypeName => self.array_type_name(r, cx),
            Act::Wildcard => self.wildcard(r, cx),
            Act::WildcardBound => self.wildcard_bound(r, cx),
            Act::DimsFirst => {
                self.stacks.ints.push(1);
                Ok(())
            }
            Act::DimsIncrement => {
                let dims = self.stacks.pop_int()?;
                self.stacks.ints.push(dims + 1);
                Ok(())
            }
            Act::DimsEmpty => {
                self.stacks.ints.push(0);
                Ok(())
            }

            Act::NameToExpr => self.name_to_expr(cx),
            Act::This => self.this(r, cx),
            Act::Paren => self.paren(r, cx),
            Act::FieldAccess => self.field_access(r, cx),
            Act::SuperFieldAccess => self.super_field_access(r, cx),
            Act::MethodCallName => self.method_call_name(r, cx),
            Act::MethodCallPrimary => self.method_call_primary(r, cx),
            Act::MethodCallSuper => self.method_call_super(r, cx),
            Act::ArrayAccessName => self.array_access_name(r, cx),
            Act::ArrayAccess => self.array_access(r, cx),
            Act::Postfix => self.postfix(r, cx),
            Act::Prefix => self.prefix(r, cx),
            Act::Binary => self.binary(r, cx),
            Act::BinaryName => self.binary_name(r, cx),
            Act::InstanceOf => self.instance_of(r, cx),
            Act::Conditional => self.conditional(r, cx),
            Act::AssignOperator => self.assign_operator(r),
            Act::Assign => self.assign(r, cx),
            Act::CastPrimitive => self.cast_primitive(r, cx),
            Act::CastName => self.cast_name(r, cx),
            Act::CastNameDims => self.cast_name_dims(r, cx),
            Act::CastGeneric => self.cast_generic(r, cx),
            Act::ClassLiteralName => self.class_literal_name(r, cx, false),
            Act::ClassLiteralNameDims => self.class_literal_name(r, cx, true),
            Act::ClassLiteralType => self.class_literal_type(r, cx, false),
            Act::ClassLiteralTypeDims => self.class_literal_type(r, cx, true),
            Act::NewObject => self.new_object(r, cx, false),
            Act::AnonymousBodyStart => {
                self.anonymous_depth += 1;
                Ok(())
            }
            Act::NewAnonymous => self.new_object(r, cx, true),
            Act::NewArrayDims => self.new_array_dims(r, cx),
            Act::NewArrayInit => self.new_array_init(r, cx),
            Act::ArrayInitializer => self.array_initializer(r, cx),

            Act::MarkerAnnotation => self.marker_annotation(r, cx),
            Act::SingleMemberAnnotation => self.single_member_annotation(r, cx),
            Act::NormalAnnotation => self.normal_annotation(r, cx),
            Act::MemberValuePair => self.member_value_pair(r),

            Act::Block => self.block(r, cx),
            Act::LocalVariable => self.local_variable(r, cx, false),
            Act::LocalVariableModifiers => self.local_variable(r, cx, true),
            Act::StatementEnd => self.statement_end(r, cx),
            Act::EmptyStatement => self.empty_statement(r, cx),
            Act::ExpressionStatement => self.expression_statement(r, cx),
            Act::Labeled => self.labeled(r, cx),
            Act::If => self.if_statement(r, cx, false),
            Act::IfElse => self.if_statement(r, cx, true),
            Act::While => self.while_statement(r, cx),
            Act::DoWhile => self.do_while(r, cx),
            Act::For => self.for_statement(r, cx),
            Act::ForInitExpressions => self.for_init_expressions(cx),
            Act::ForEach => self.for_each(r, cx, false),
            Act::ForEachModifiers => self.for_each(r, cx, true),
            Act::Break => self.jump(r, cx, true),
            Act::Continue => self.jump(r, cx, false),
            Act::Return => self.return_statement(r, cx),
            Act::Throw => self.throw(r, cx),
            Act::Synchronized => self.synchronized(r, cx),
            Act::TryCatch => self.try_statement(r, cx, false),
            Act::TryFinally => self.try_statement(r, cx, true),
            Act::CatchClause => self.catch_clause(r),
            Act::Switch => self.switch(r, cx),
            Act::SwitchGroup => self.switch_group(r, cx),
            Act::CaseLabel => self.case_label(),
            Act::DefaultLabel => {
                self.stacks.ast.push(AstItem::Label(SwitchLabel::Default));
                Ok(())
            }
            Act::SwitchLabelsOnly => self.switch_labels_only(r),
            Act::SwitchGroupsThenLabels => self.switch_groups_then_labels(r),
            Act::Assert => self.assert(r, cx),
            Act::ConstructorCall => self.constructor_call(r, cx),
            Act::LocalClass => self.local_class(r, cx),

            Act::ModifiersEmpty => {
                self.stacks.ints.extend([0, NO_POS]);
                self.stacks.annotations.push_empty();
                Ok(())
            }
            Act::ModifierKeyword => self.modifier_keyword(r),
            Act::ModifierAnnotation => self.modifier_annotation(r),
            Act::ModifiersConcat => self.modifiers_concat(),
            Act::DeclaratorId => self.declarator_id(r),
            Act::DeclaratorInit => self.declarator_init(r),
            Act::FieldDeclaration => self.field_declaration(r, cx),
            Act::MethodHeaderName => self.method_header_name(r, cx, true),
            Act::ConstructorHeaderName => self.method_header_name(r, cx, false),
            Act::MethodHeader => self.method_header(r, cx, true),
            Act::ConstructorHeader => self.method_header(r, cx, false),
            Act::DeclBody => self.decl_body(r, cx),
            Act::AbstractMethod => self.abstract_method(r, cx),
            Act::FormalParameter => self.formal_parameter(r, false),
            Act::FormalParameterVarargs => self.formal_parameter(r, true),
            Act::InitializerStart => self.initializer_start(r, cx, false),
            Act::StaticOnly => self.initializer_start(r, cx, true),
            Act::ClassHeaderName => self.type_header_name(r, cx, TypeDeclKind::Class),
            Act::InterfaceHeaderName => self.type_header_name(r, cx, TypeDeclKind::Interface),
            Act::EnumHeaderName => self.type_header_name(r, cx, TypeDeclKind::Enum),
            Act::HeaderExtends => self.header_supertypes(r, cx, true),
            Act::HeaderImplements => self.header_supertypes(r, cx, false),
            Act::TypeDeclaration => self.type_declaration(r, cx, false),
            Act::EnumBody => self.type_declaration(r, cx, false),
            Act::EnumBodyWithConstants => self.type_declaration(r, cx, true),
            Act::EnumConstant => self.enum_constant(r, false, false),
            Act::EnumConstantArgs => self.enum_constant(r, true, false),
            Act::EnumConstantBody => self.enum_constant(r, false, true),
            Act::EnumConstantArgsBody => self.enum_constant(r, true, true),
            Act::TypeParameter => self.type_parameter(r),
            Act::TypeParameterBound => self.type_parameter_bound(r),
            Act::CompilationUnit => self.compilation_unit(r),
            Act::PackageDeclaration => self.package_declaration(r),
            Act::Import => self.import(r),

            Act::RecoverItem => self.recover_item(r, cx),
            Act::RecoverHeader => self.recover_header(r, cx),
            Act::RecoverOpenBrace => self.recover_brace(r, cx, true),
            Act::RecoverCloseBrace => self.recover_brace(r, cx, false),
        }
    }

    // Helpers shared by the families.

    pub(crate) fn pop_expr(&mut self) -> Result<ExprId, ParseAbort> {
        Ok(self.stacks.exprs.pop()?)
    }

    pub(crate) fn pop_exprs(&mut self) -> Result<Vec<ExprId>, ParseAbort> {
        Ok(self.stacks.exprs.pop_group()?)
    }

    /// Pop an optional expression: an empty group or a single item.
    pub(crate) fn pop_opt_expr(&mut self) -> Result<Option<ExprId>, ParseAbort> {
        Ok(self.stacks.exprs.pop_group()?.pop())
    }

    pub(crate) fn pop_type(&mut self) -> Result<TypeId, ParseAbort> {
        Ok(self.stacks.types.pop()?)
    }

    pub(crate) fn pop_types(&mut self) -> Result<Vec<TypeId>, ParseAbort> {
        Ok(self.stacks.types.pop_group()?)
    }

    pub(crate) fn pop_name(&mut self) -> Result<QualifiedName, ParseAbort> {
        let parts = self.stacks.names.pop_group()?;
        let span = match (parts.first(), parts.last()) {
            (Some((_, first)), Some((_, last))) => first.merge(*last),
            _ => Span::default(),
        };
        Ok(QualifiedName {
            segments: parts.iter().map(|(name, _)| *name).collect::<SmallVec<_>>(),
            span,
        })
    }

    pub(crate) fn pop_dims(&mut self) -> Result<u32, ParseAbort> {
        Ok(self.stacks.pop_int()?)
    }

    /// Pop what a `Modifiers` or `Modifiersopt` left: two integers and one
    /// annotation group.
    pub(crate) fn pop_modifiers(&mut self) -> Result<Modifiers, ParseAbort> {
        let start = self.stacks.pop_int()?;
        let flags = self.stacks.pop_int()?;
        let annotations = self.stacks.annotations.pop_group()?;
        Ok(Modifiers {
            flags: ModifierFlags::from_bits_truncate(u16::try_from(flags).unwrap_or(0)),
            annotations,
            start: (start != NO_POS).then_some(start),
        })
    }

    /// The declaration whose header is on top of the AST stack.
    pub(crate) fn top_header(&self, r: &Reduction<'_>) -> Result<DeclId, ParseAbort> {
        match self.stacks.ast.top() {
            Some(AstItem::Header(decl)) => Ok(*decl),
            _ => Err(r.unexpected("declaration header")),
        }
    }
}
