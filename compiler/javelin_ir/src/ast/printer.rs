//! Source-like rendering of AST fragments.
//!
//! The output is deterministic and close to Java source: two-space
//! indentation, one member per line, and expressions printed with the
//! parentheses that were written. Skipped bodies print as empty blocks.

use std::fmt::Write;

use javelin_stack::ensure_sufficient_stack;

use crate::{Name, StringInterner};

use super::{
    AnnotationArgs, AstArena, Body, CompilationUnit, DeclId, DeclKind, ExprId, ExprKind,
    LiteralKind, Modifiers, Param, QualifiedName, Receiver, StmtId, StmtKind, SwitchLabel,
    TypeDeclKind, TypeId, TypeRefKind, VarDeclarator, WildcardBound,
};

pub fn print_unit(arena: &AstArena, interner: &StringInterner, unit: &CompilationUnit) -> String {
    let mut p = Printer::new(arena, interner);
    p.unit(unit);
    p.out
}

pub fn print_decl(arena: &AstArena, interner: &StringInterner, decl: DeclId) -> String {
    let mut p = Printer::new(arena, interner);
    p.decl(decl);
    p.out
}

pub fn print_stmt(arena: &AstArena, interner: &StringInterner, stmt: StmtId) -> String {
    let mut p = Printer::new(arena, interner);
    p.stmt(stmt);
    p.out
}

pub fn print_expr(arena: &AstArena, interner: &StringInterner, expr: ExprId) -> String {
    let mut p = Printer::new(arena, interner);
    p.expr(expr);
    p.out
}

pub fn print_type(arena: &AstArena, interner: &StringInterner, ty: TypeId) -> String {
    let mut p = Printer::new(arena, interner);
    p.type_ref(ty);
    p.out
}

struct Printer<'a> {
    arena: &'a AstArena,
    interner: &'a StringInterner,
    out: String,
    indent: usize,
}

impl<'a> Printer<'a> {
    fn new(arena: &'a AstArena, interner: &'a StringInterner) -> Self {
        Printer {
            arena,
            interner,
            out: String::new(),
            indent: 0,
        }
    }

    fn name(&mut self, name: Name) {
        self.out.push_str(self.interner.lookup(name));
    }

    fn qualified(&mut self, name: &QualifiedName) {
        for (i, segment) in name.segments.iter().enumerate() {
            if i > 0 {
                self.out.push('.');
            }
            self.name(*segment);
        }
    }

    fn line_start(&mut self) {
        for _ in 0..self.indent {
            self.out.push_str("  ");
        }
    }

    fn unit(&mut self, unit: &CompilationUnit) {
        if let Some(package) = &unit.package {
            self.out.push_str("package ");
            self.qualified(&package.name);
            self.out.push_str(";\n");
        }
        for import in &unit.imports {
            self.out.push_str("import ");
            if import.is_static {
                self.out.push_str("static ");
            }
            self.qualified(&import.name);
            if import.on_demand {
                self.out.push_str(".*");
            }
            self.out.push_str(";\n");
        }
        for ty in &unit.types {
            self.decl(*ty);
        }
    }

    /// ` { members }` of an anonymous class or an enum constant.
    fn class_body(&mut self, members: &[DeclId]) {
        self.out.push_str(" {\n");
        self.indent += 1;
        for member in members {
            self.decl(*member);
        }
        self.indent -= 1;
        self.line_start();
        self.out.push('}');
    }

    fn modifiers(&mut self, modifiers: &Modifiers) {
        for annotation in &modifiers.annotations {
            self.expr(*annotation);
            self.out.push(' ');
        }
        for (flag, keyword) in super::ModifierFlags::KEYWORDS {
            if modifiers.flags.contains(*flag) {
                self.out.push_str(keyword);
                self.out.push(' ');
            }
        }
    }

    fn decl(&mut self, id: DeclId) {
        ensure_sufficient_stack(|| self.decl_inner(id));
    }

    fn decl_inner(&mut self, id: DeclId) {
        let decl = self.arena.decl(id);
        self.line_start();
        self.modifiers(&decl.modifiers);
        match &decl.kind {
            DeclKind::Type(ty) => {
                self.out.push_str(match ty.kind {
                    TypeDeclKind::Class => "class ",
                    TypeDeclKind::Interface => "interface ",
                    TypeDeclKind::Enum => "enum ",
                });
                self.name(ty.name);
                if !ty.type_params.is_empty() {
                    self.out.push('<');
                    for (i, param) in ty.type_params.iter().enumerate() {
                        if i > 0 {
                            self.out.push_str(", ");
                        }
                        self.name(param.name);
                        if let Some(bound) = param.bound {
                            self.out.push_str(" extends ");
                            self.type_ref(bound);
                        }
                    }
                    self.out.push('>');
                }
                if !ty.extends.is_empty() {
                    self.out.push_str(" extends ");
                    self.type_list(&ty.extends);
                }
                if !ty.implements.is_empty() {
                    self.out.push_str(" implements ");
                    self.type_list(&ty.implements);
                }
                self.out.push_str(" {\n");
                self.indent += 1;
                if !ty.enum_constants.is_empty() {
                    self.line_start();
                    for (i, constant) in ty.enum_constants.iter().enumerate() {
                        if i > 0 {
                            self.out.push_str(", ");
                        }
                        self.name(constant.name);
                        if !constant.args.is_empty() {
                            self.args(&constant.args);
                        }
                        if let Some(members) = &constant.body {
                            self.class_body(members);
                        }
                    }
                    self.out.push_str(";\n");
                }
                for member in &ty.members {
                    self.decl(*member);
                }
                self.indent -= 1;
                self.line_start();
                self.out.push_str("}\n");
            }
            DeclKind::Field(field) => {
                self.type_ref(field.ty);
                self.out.push(' ');
                self.declarators(&field.declarators);
                self.out.push_str(";\n");
            }
            DeclKind::Method(method) => {
                if let Some(ret) = method.return_type {
                    self.type_ref(ret);
                    self.out.push(' ');
                }
                self.name(method.name);
                self.out.push('(');
                for (i, param) in method.params.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    self.param(param);
                }
                self.out.push(')');
                if !method.throws.is_empty() {
                    self.out.push_str(" throws ");
                    self.type_list(&method.throws);
                }
                self.body(&method.body);
            }
            DeclKind::Initializer(init) => match &init.body {
                Body::Parsed { stmts, .. } => {
                    self.block_inline(stmts);
                    self.out.push('\n');
                }
                Body::Absent | Body::Skipped { .. } => {
                    self.out.push_str("{\n");
                    self.line_start();
                    self.out.push_str("}\n");
                }
            },
        }
    }

    fn body(&mut self, body: &Body) {
        match body {
            Body::Absent => self.out.push_str(";\n"),
            Body::Skipped { .. } => {
                self.out.push_str(" {\n");
                self.line_start();
                self.out.push_str("}\n");
            }
            Body::Parsed { stmts, .. } => {
                self.out.push_str(" {\n");
                self.indent += 1;
                for stmt in stmts {
                    self.stmt(*stmt);
                }
                self.indent -= 1;
                self.line_start();
                self.out.push_str("}\n");
            }
        }
    }

    fn type_list(&mut self, types: &[TypeId]) {
        for (i, ty) in types.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            self.type_ref(*ty);
        }
    }

    fn param(&mut self, param: &Param) {
        self.modifiers(&param.modifiers);
        self.type_ref(param.ty);
        if param.varargs {
            self.out.push_str("...");
        }
        self.out.push(' ');
        self.name(param.name);
        for _ in 0..param.dims {
            self.out.push_str("[]");
        }
    }

    fn declarators(&mut self, declarators: &[VarDeclarator]) {
        for (i, d) in declarators.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            self.name(d.name);
            for _ in 0..d.dims {
                self.out.push_str("[]");
            }
            if let Some(init) = d.init {
                self.out.push_str(" = ");
                self.expr(init);
            }
        }
    }

    fn type_ref(&mut self, id: TypeId) {
        ensure_sufficient_stack(|| self.type_ref_inner(id));
    }

    fn type_ref_inner(&mut self, id: TypeId) {
        match &self.arena.type_ref(id).kind {
            TypeRefKind::Primitive(p) => self.out.push_str(p.keyword()),
            TypeRefKind::Void => self.out.push_str("void"),
            TypeRefKind::Named { name, args } => {
                self.qualified(name);
                if !args.is_empty() {
                    self.out.push('<');
                    self.type_list(args);
                    self.out.push('>');
                }
            }
            TypeRefKind::Array { element, dims } => {
                self.type_ref(*element);
                for _ in 0..*dims {
                    self.out.push_str("[]");
                }
            }
            TypeRefKind::Wildcard { bound } => {
                self.out.push('?');
                match bound {
                    Some(WildcardBound::Extends(t)) => {
                        self.out.push_str(" extends ");
                        self.type_ref(*t);
                    }
                    Some(WildcardBound::Super(t)) => {
                        self.out.push_str(" super ");
                        self.type_ref(*t);
                    }
                    None => {}
                }
            }
        }
    }

    fn block_inline(&mut self, stmts: &[StmtId]) {
        self.out.push_str("{\n");
        self.indent += 1;
        for stmt in stmts {
            self.stmt(*stmt);
        }
        self.indent -= 1;
        self.line_start();
        self.out.push('}');
    }

    /// Prints a nested statement that follows a header on the same line.
    fn nested(&mut self, id: StmtId) {
        if let StmtKind::Block(stmts) = &self.arena.stmt(id).kind {
            self.out.push(' ');
            self.block_inline(stmts);
            self.out.push('\n');
        } else {
            self.out.push('\n');
            self.indent += 1;
            self.stmt(id);
            self.indent -= 1;
        }
    }

    fn stmt(&mut self, id: StmtId) {
        ensure_sufficient_stack(|| self.stmt_inner(id));
    }

    fn stmt_inner(&mut self, id: StmtId) {
        let stmt = self.arena.stmt(id);
        self.line_start();
        match &stmt.kind {
            StmtKind::Block(stmts) => {
                self.block_inline(stmts);
                self.out.push('\n');
            }
            StmtKind::LocalVar(local) => {
                self.modifiers(&local.modifiers);
                self.type_ref(local.ty);
                self.out.push(' ');
                self.declarators(&local.declarators);
                self.out.push_str(";\n");
            }
            StmtKind::LocalClass(decl) => {
                let indent = self.indent;
                self.out.truncate(self.out.len() - indent * 2);
                self.decl(*decl);
            }
            StmtKind::Empty => self.out.push_str(";\n"),
            StmtKind::Expr(e) => {
                self.expr(*e);
                self.out.push_str(";\n");
            }
            StmtKind::If {
                cond,
                then_stmt,
                else_stmt,
            } => {
                self.out.push_str("if (");
                self.expr(*cond);
                self.out.push(')');
                self.nested(*then_stmt);
                if let Some(else_stmt) = else_stmt {
                    self.line_start();
                    self.out.push_str("else");
                    self.nested(*else_stmt);
                }
            }
            StmtKind::While { cond, body } => {
                self.out.push_str("while (");
                self.expr(*cond);
                self.out.push(')');
                self.nested(*body);
            }
            StmtKind::DoWhile { body, cond } => {
                self.out.push_str("do");
                self.nested(*body);
                self.line_start();
                self.out.push_str("while (");
                self.expr(*cond);
                self.out.push_str(");\n");
            }
            StmtKind::For {
                init,
                cond,
                update,
                body,
            } => {
                self.out.push_str("for (");
                for (i, s) in init.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    self.inline_stmt(*s);
                }
                self.out.push_str("; ");
                if let Some(cond) = cond {
                    self.expr(*cond);
                }
                self.out.push_str("; ");
                self.expr_list(update);
                self.out.push(')');
                self.nested(*body);
            }
            StmtKind::ForEach {
                var,
                iterable,
                body,
            } => {
                self.out.push_str("for (");
                self.param(var);
                self.out.push_str(" : ");
                self.expr(*iterable);
                self.out.push(')');
                self.nested(*body);
            }
            StmtKind::Labeled { label, body } => {
                self.name(*label);
                self.out.push(':');
                self.nested(*body);
            }
            StmtKind::Break(label) => self.jump("break", *label),
            StmtKind::Continue(label) => self.jump("continue", *label),
            StmtKind::Return(value) => {
                self.out.push_str("return");
                if let Some(value) = value {
                    self.out.push(' ');
                    self.expr(*value);
                }
                self.out.push_str(";\n");
            }
            StmtKind::Throw(value) => {
                self.out.push_str("throw ");
                self.expr(*value);
                self.out.push_str(";\n");
            }
            StmtKind::Synchronized { lock, body } => {
                self.out.push_str("synchronized (");
                self.expr(*lock);
                self.out.push(')');
                self.nested(*body);
            }
            StmtKind::Try {
                body,
                catches,
                finally,
            } => {
                self.out.push_str("try");
                self.nested(*body);
                for catch in catches {
                    self.line_start();
                    self.out.push_str("catch (");
                    self.param(&catch.param);
                    self.out.push(')');
                    self.nested(catch.body);
                }
                if let Some(finally) = finally {
                    self.line_start();
                    self.out.push_str("finally");
                    self.nested(*finally);
                }
            }
            StmtKind::Switch { selector, groups } => {
                self.out.push_str("switch (");
                self.expr(*selector);
                self.out.push_str(") {\n");
                for group in groups {
                    for label in &group.labels {
                        self.line_start();
                        match label {
                            SwitchLabel::Case(e) => {
                                self.out.push_str("case ");
                                self.expr(*e);
                                self.out.push_str(":\n");
                            }
                            SwitchLabel::Default => self.out.push_str("default:\n"),
                        }
                    }
                    self.indent += 1;
                    for s in &group.stmts {
                        self.stmt(*s);
                    }
                    self.indent -= 1;
                }
                self.line_start();
                self.out.push_str("}\n");
            }
            StmtKind::Assert { cond, message } => {
                self.out.push_str("assert ");
                self.expr(*cond);
                if let Some(message) = message {
                    self.out.push_str(" : ");
                    self.expr(*message);
                }
                self.out.push_str(";\n");
            }
            StmtKind::ConstructorCall { kind, args } => {
                self.out.push_str(match kind {
                    super::ConstructorCallKind::This => "this",
                    super::ConstructorCallKind::Super => "super",
                });
                self.args(args);
                self.out.push_str(";\n");
            }
        }
    }

    fn jump(&mut self, keyword: &str, label: Option<Name>) {
        self.out.push_str(keyword);
        if let Some(label) = label {
            self.out.push(' ');
            self.name(label);
        }
        self.out.push_str(";\n");
    }

    /// For-init parts: printed without indentation or trailing `;`.
    fn inline_stmt(&mut self, id: StmtId) {
        match &self.arena.stmt(id).kind {
            StmtKind::LocalVar(local) => {
                self.modifiers(&local.modifiers);
                self.type_ref(local.ty);
                self.out.push(' ');
                self.declarators(&local.declarators);
            }
            StmtKind::Expr(e) => self.expr(*e),
            _ => {
                let mut nested = Printer::new(self.arena, self.interner);
                nested.stmt(id);
                let _ = write!(self.out, "{}", nested.out.trim_end());
            }
        }
    }

    fn expr_list(&mut self, exprs: &[ExprId]) {
        for (i, e) in exprs.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            self.expr(*e);
        }
    }

    fn args(&mut self, args: &[ExprId]) {
        self.out.push('(');
        self.expr_list(args);
        self.out.push(')');
    }

    fn receiver(&mut self, receiver: Receiver) {
        match receiver {
            Receiver::Implicit => {}
            Receiver::Expr(e) => {
                self.expr(e);
                self.out.push('.');
            }
            Receiver::Super => self.out.push_str("super."),
        }
    }

    fn expr(&mut self, id: ExprId) {
        ensure_sufficient_stack(|| self.expr_inner(id));
    }

    fn expr_inner(&mut self, id: ExprId) {
        match &self.arena.expr(id).kind {
            ExprKind::Literal(lit) => match lit.kind {
                LiteralKind::True => self.out.push_str("true"),
                LiteralKind::False => self.out.push_str("false"),
                LiteralKind::Null => self.out.push_str("null"),
                _ => self.name(lit.value),
            },
            ExprKind::Name(name) => self.qualified(name),
            ExprKind::This => self.out.push_str("this"),
            ExprKind::Paren(inner) => {
                self.out.push('(');
                self.expr(*inner);
                self.out.push(')');
            }
            ExprKind::Binary { op, left, right } => {
                self.expr(*left);
                let _ = write!(self.out, " {} ", op.symbol());
                self.expr(*right);
            }
            ExprKind::Unary { op, operand } => {
                if op.is_postfix() {
                    self.expr(*operand);
                    self.out.push_str(op.symbol());
                } else {
                    self.out.push_str(op.symbol());
                    self.expr(*operand);
                }
            }
            ExprKind::Assign { op, target, value } => {
                self.expr(*target);
                let _ = write!(self.out, " {} ", op.symbol());
                self.expr(*value);
            }
            ExprKind::Conditional {
                cond,
                then_expr,
                else_expr,
            } => {
                self.expr(*cond);
                self.out.push_str(" ? ");
                self.expr(*then_expr);
                self.out.push_str(" : ");
                self.expr(*else_expr);
            }
            ExprKind::InstanceOf { expr, ty } => {
                self.expr(*expr);
                self.out.push_str(" instanceof ");
                self.type_ref(*ty);
            }
            ExprKind::Cast { ty, expr } => {
                self.out.push('(');
                self.type_ref(*ty);
                self.out.push_str(") ");
                self.expr(*expr);
            }
            ExprKind::FieldAccess { receiver, name } => {
                self.receiver(*receiver);
                self.name(*name);
            }
            ExprKind::MethodCall {
                receiver,
                name,
                args,
            } => {
                self.receiver(*receiver);
                self.name(*name);
                self.args(args);
            }
            ExprKind::New { ty, args, body } => {
                self.out.push_str("new ");
                self.type_ref(*ty);
                self.args(args);
                if let Some(members) = body {
                    self.class_body(members);
                }
            }
            ExprKind::NewArray {
                element,
                dims,
                extra_dims,
                init,
            } => {
                self.out.push_str("new ");
                self.type_ref(*element);
                for dim in dims {
                    self.out.push('[');
                    self.expr(*dim);
                    self.out.push(']');
                }
                for _ in 0..*extra_dims {
                    self.out.push_str("[]");
                }
                if let Some(init) = init {
                    self.out.push(' ');
                    self.expr(*init);
                }
            }
            ExprKind::ArrayInit(items) => {
                self.out.push('{');
                self.expr_list(items);
                self.out.push('}');
            }
            ExprKind::ArrayAccess { array, index } => {
                self.expr(*array);
                self.out.push('[');
                self.expr(*index);
                self.out.push(']');
            }
            ExprKind::ClassLiteral(ty) => {
                self.type_ref(*ty);
                self.out.push_str(".class");
            }
            ExprKind::Annotation(annotation) => {
                self.out.push('@');
                self.qualified(&annotation.name);
                match &annotation.args {
                    AnnotationArgs::Marker => {}
                    AnnotationArgs::Single(value) => {
                        self.out.push('(');
                        self.expr(*value);
                        self.out.push(')');
                    }
                    AnnotationArgs::Pairs(pairs) => {
                        self.out.push('(');
                        for (i, pair) in pairs.iter().enumerate() {
                            if i > 0 {
                                self.out.push_str(", ");
                            }
                            self.name(pair.name);
                            self.out.push_str(" = ");
                            self.expr(pair.value);
                        }
                        self.out.push(')');
                    }
                }
            }
            ExprKind::Error => self.out.push_str("<error>"),
        }
    }
}
