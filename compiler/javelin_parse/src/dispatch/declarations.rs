//! Declarations: headers, bodies, members and the compilation unit.
//!
//! Anything with a body is built in two steps. The header reduction
//! allocates the declaration and pushes it as [`AstItem::Header`]; the
//! rule that closes the body turns it into a plain [`AstItem::Decl`].
//! Recovery relies on the split: a header still on the stack marks an
//! element whose body was open when the error hit.

use javelin_ir::ast::{
    Body, CompilationUnit, DeclKind, EnumConstant, FieldDecl, ImportDecl, InitializerDecl,
    MethodDecl, ModifierFlags, Modifiers, PackageDecl, Param, TypeDecl, TypeDeclKind, TypeParam,
    VarDeclarator,
};
use javelin_ir::{Span, TokenKind};

use super::types::array_of;
use super::Reduction;
use crate::driver::Cx;
use crate::stacks::AstItem;
use crate::{ParseAbort, Parser};

impl Parser<'_> {
    pub(super) fn declarator_id(&mut self, r: &Reduction<'_>) -> Result<(), ParseAbort> {
        let ident = r.ident()?;
        let dims = self.pop_dims()?;
        self.stacks.ast.push(AstItem::Declarator(VarDeclarator {
            name: ident.value,
            name_span: ident.span,
            dims,
            init: None,
        }));
        Ok(())
    }

    pub(super) fn declarator_init(&mut self, r: &Reduction<'_>) -> Result<(), ParseAbort> {
        let init = self.pop_expr()?;
        match self.stacks.ast.top_mut() {
            Some(AstItem::Declarator(declarator)) => {
                declarator.init = Some(init);
                Ok(())
            }
            _ => Err(r.unexpected("variable declarator")),
        }
    }

    pub(super) fn field_declaration(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
    ) -> Result<(), ParseAbort> {
        let declarators = self.pop_items(r.rule, "variable declarator", AstItem::into_declarator)?;
        let ty = self.pop_type()?;
        let modifiers = self.pop_modifiers()?;
        let field = FieldDecl { ty, declarators };
        let decl = cx.arena.alloc_decl(DeclKind::Field(field), modifiers, r.span);
        self.stacks.ast.push(AstItem::Decl(decl));
        Ok(())
    }

    /// `Modifiersopt Type Identifier (` and the constructor form without a
    /// return type.
    pub(super) fn method_header_name(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
        has_return: bool,
    ) -> Result<(), ParseAbort> {
        let ident = r.ident()?;
        let return_type = if has_return { Some(self.pop_type()?) } else { None };
        let modifiers = self.pop_modifiers()?;
        let method = MethodDecl {
            name: ident.value,
            name_span: ident.span,
            return_type,
            params: Vec::new(),
            throws: Vec::new(),
            body: Body::Absent,
        };
        let decl = cx.arena.alloc_decl(DeclKind::Method(method), modifiers, r.span);
        self.stacks.ast.push(AstItem::Header(decl));
        Ok(())
    }

    /// Fill in parameters, trailing dimensions and `throws` on the header
    /// beneath them.
    pub(super) fn method_header(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
        is_method: bool,
    ) -> Result<(), ParseAbort> {
        let throws = self.pop_types()?;
        let dims = if is_method { self.pop_dims()? } else { 0 };
        let params = self.pop_items(r.rule, "formal parameter", AstItem::into_param)?;
        let decl = self.top_header(r)?;

        let return_type = match cx.arena.decl(decl).as_method().and_then(|m| m.return_type) {
            Some(ty) if dims > 0 => {
                let span = cx.arena.type_ref(ty).span;
                Some(array_of(cx.arena, ty, dims, span))
            }
            other => other,
        };
        let target = cx.arena.decl_mut(decl);
        target.span = target.span.merge(r.span);
        if let Some(method) = target.as_method_mut() {
            method.params = params;
            method.throws = throws;
            method.return_type = return_type;
        }
        if self.diet_now() {
            self.pending_body = Some(decl);
        }
        Ok(())
    }

    /// Close the body of the method, constructor or initializer on top.
    /// A body already skipped by diet parsing stays skipped.
    pub(super) fn decl_body(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
    ) -> Result<(), ParseAbort> {
        let stmts = self.pop_items(r.rule, "statement", AstItem::into_stmt)?;
        let decl = self.pop_item(r.rule, "declaration header", AstItem::into_header)?;
        let span = match (r.find(TokenKind::LBrace), r.tokens.last()) {
            (Some(open), Some(close)) => open.span.merge(close.span),
            _ => r.span,
        };
        let target = cx.arena.decl_mut(decl);
        target.span = target.span.merge(r.span);
        if let Some(body) = target.body_mut() {
            if !matches!(body, Body::Skipped { .. }) {
                *body = Body::Parsed { stmts, span };
            }
        }
        self.stacks.ast.push(AstItem::Decl(decl));
        Ok(())
    }

    pub(super) fn abstract_method(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
    ) -> Result<(), ParseAbort> {
        let decl = self.pop_item(r.rule, "declaration header", AstItem::into_header)?;
        let target = cx.arena.decl_mut(decl);
        target.span = target.span.merge(r.span);
        self.stacks.ast.push(AstItem::Decl(decl));
        Ok(())
    }

    pub(super) fn formal_parameter(
        &mut self,
        r: &Reduction<'_>,
        varargs: bool,
    ) -> Result<(), ParseAbort> {
        let declarator = self.pop_item(r.rule, "variable declarator", AstItem::into_declarator)?;
        let ty = self.pop_type()?;
        let modifiers = self.pop_modifiers()?;
        self.stacks.ast.push(AstItem::Param(Param {
            modifiers,
            ty,
            name: declarator.name,
            name_span: declarator.name_span,
            dims: declarator.dims,
            varargs,
            span: r.span,
        }));
        Ok(())
    }

    /// Open an instance initializer (an empty rule reduced in front of its
    /// `{`) or a static one.
    pub(super) fn initializer_start(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
        is_static: bool,
    ) -> Result<(), ParseAbort> {
        let modifiers = if is_static {
            Modifiers {
                flags: ModifierFlags::STATIC,
                annotations: Vec::new(),
                start: Some(r.span.start),
            }
        } else {
            Modifiers::default()
        };
        let initializer = InitializerDecl {
            is_static,
            body: Body::Absent,
        };
        let decl = cx
            .arena
            .alloc_decl(DeclKind::Initializer(initializer), modifiers, r.span);
        self.stacks.ast.push(AstItem::Header(decl));
        if self.diet_now() {
            self.pending_body = Some(decl);
        }
        Ok(())
    }

    pub(super) fn type_header_name(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
        kind: TypeDeclKind,
    ) -> Result<(), ParseAbort> {
        let ident = r.ident()?;
        let type_params = if kind == TypeDeclKind::Enum {
            Vec::new()
        } else {
            self.pop_items(r.rule, "type parameter", AstItem::into_type_param)?
        };
        let modifiers = self.pop_modifiers()?;
        let ty = TypeDecl {
            kind,
            name: ident.value,
            name_span: ident.span,
            type_params,
            extends: Vec::new(),
            implements: Vec::new(),
            enum_constants: Vec::new(),
            members: Vec::new(),
            body_start: None,
        };
        let decl = cx.arena.alloc_decl(DeclKind::Type(ty), modifiers, r.span);
        self.stacks.ast.push(AstItem::Header(decl));
        Ok(())
    }

    pub(super) fn header_supertypes(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
        extends: bool,
    ) -> Result<(), ParseAbort> {
        let types = self.pop_types()?;
        let decl = self.top_header(r)?;
        let target = cx.arena.decl_mut(decl);
        target.span = target.span.merge(r.span);
        if let Some(ty) = target.as_type_mut() {
            if extends {
                ty.extends = types;
            } else {
                ty.implements = types;
            }
        }
        Ok(())
    }

    /// `Header { members }`, and the enum forms that also carry constants.
    pub(super) fn type_declaration(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
        with_constants: bool,
    ) -> Result<(), ParseAbort> {
        let members = self.pop_items(r.rule, "member declaration", AstItem::into_decl)?;
        let constants = if with_constants {
            self.pop_items(r.rule, "enum constant", AstItem::into_enum_constant)?
        } else {
            Vec::new()
        };
        let decl = self.pop_item(r.rule, "type header", AstItem::into_header)?;
        let body_start = r.find(TokenKind::LBrace).map(|open| open.span.end);
        let target = cx.arena.decl_mut(decl);
        target.span = target.span.merge(r.span);
        if let Some(ty) = target.as_type_mut() {
            ty.members = members;
            ty.enum_constants = constants;
            ty.body_start = body_start;
        }
        self.stacks.ast.push(AstItem::Decl(decl));
        Ok(())
    }

    pub(super) fn enum_constant(
        &mut self,
        r: &Reduction<'_>,
        with_args: bool,
        with_body: bool,
    ) -> Result<(), ParseAbort> {
        let ident = r.ident()?;
        let body = if with_body {
            self.anonymous_depth = self.anonymous_depth.saturating_sub(1);
            Some(self.pop_items(r.rule, "member declaration", AstItem::into_decl)?)
        } else {
            None
        };
        let args = if with_args { self.pop_exprs()? } else { Vec::new() };
        self.stacks.ast.push(AstItem::EnumConstant(EnumConstant {
            name: ident.value,
            args,
            body,
            span: r.span,
        }));
        Ok(())
    }

    pub(super) fn type_parameter(&mut self, r: &Reduction<'_>) -> Result<(), ParseAbort> {
        let ident = r.ident()?;
        self.stacks.ast.push(AstItem::TypeParam(TypeParam {
            name: ident.value,
            bound: None,
            span: ident.span,
        }));
        Ok(())
    }

    pub(super) fn type_parameter_bound(&mut self, r: &Reduction<'_>) -> Result<(), ParseAbort> {
        let bound = self.pop_type()?;
        match self.stacks.ast.top_mut() {
            Some(AstItem::TypeParam(param)) => {
                param.bound = Some(bound);
                param.span = param.span.merge(r.span);
                Ok(())
            }
            _ => Err(r.unexpected("type parameter")),
        }
    }

    pub(super) fn compilation_unit(&mut self, r: &Reduction<'_>) -> Result<(), ParseAbort> {
        let types = self.pop_items(r.rule, "type declaration", AstItem::into_decl)?;
        let imports = self.pop_items(r.rule, "import", AstItem::into_import)?;
        let package = self
            .pop_items(r.rule, "package declaration", AstItem::into_package)?
            .pop();
        self.stacks.ast.push(AstItem::Unit(CompilationUnit {
            package,
            imports,
            types,
            span: Span::new(self.origin, self.limit),
            has_errors: false,
        }));
        Ok(())
    }

    pub(super) fn package_declaration(&mut self, r: &Reduction<'_>) -> Result<(), ParseAbort> {
        let name = self.pop_name()?;
        self.stacks.ast.push(AstItem::Package(PackageDecl { name, span: r.span }));
        Ok(())
    }

    pub(super) fn import(&mut self, r: &Reduction<'_>) -> Result<(), ParseAbort> {
        let name = self.pop_name()?;
        self.stacks.ast.push(AstItem::Import(ImportDecl {
            name,
            is_static: r.has(TokenKind::Static),
            on_demand: r.has(TokenKind::Multiply),
            span: r.span,
        }));
        Ok(())
    }
}
