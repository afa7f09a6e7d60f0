//! The Java grammar.
//!
//! Productions follow the classic JDT `java.g` layout: the JLS statement
//! and `NoShortIf` split for the dangling `else`, the `TypeArgumentList1/2/3`
//! ladder so `>>` and `>>>` can close nested type arguments, and explicit
//! `...opt` nonterminals instead of optional markers.
//!
//! Every nonterminal leaves exactly one group (or one item) on the parser
//! stacks it touches. The right-hand side is a space separated list of
//! symbol names; terminals are spelled as [`TokenKind::display`] strings
//! or entry markers.
//!
//! [`TokenKind::display`]: javelin_ir::TokenKind::display

use crate::{Act, SourceLevel};

/// One production.
#[derive(Copy, Clone, Debug)]
pub struct RuleDef {
    pub lhs: &'static str,
    pub rhs: &'static str,
    pub act: Act,
    /// Lowest source level at which the construct is legal.
    pub level: SourceLevel,
}

impl RuleDef {
    const fn since(self, level: SourceLevel) -> Self {
        RuleDef { level, ..self }
    }
}

pub(crate) const fn rule(lhs: &'static str, rhs: &'static str, act: Act) -> RuleDef {
    RuleDef {
        lhs,
        rhs,
        act,
        level: SourceLevel::JDK1_1,
    }
}

const J4: SourceLevel = SourceLevel::JDK1_4;
const J5: SourceLevel = SourceLevel::JDK1_5;

/// Start symbol.
pub const GOAL: &str = "Goal";

#[rustfmt::skip]
pub static RULES: &[RuleDef] = &[
    rule("Goal", "<unit> CompilationUnit", Act::Nothing),
    rule("Goal", "<expr> Expression", Act::Nothing),
    rule("Goal", "<body> BlockStatementsopt", Act::Nothing),
    rule("Goal", "<stmts> BlockStatementsopt", Act::Nothing),
    rule("Goal", "<members> ClassBodyDeclarationsopt", Act::Nothing),
    rule("Goal", "<package> PackageDeclaration", Act::Nothing),
    rule("Goal", "<value> MemberValue", Act::Nothing),
    rule("Goal", "<headers> RecoveryHeaders", Act::Nothing),
    rule("Goal", "<recovery> RecoveryStatements", Act::Nothing),

    // Literals and names
    rule("Literal", "IntegerLiteral", Act::Literal),
    rule("Literal", "LongLiteral", Act::Literal),
    rule("Literal", "FloatingPointLiteral", Act::Literal),
    rule("Literal", "DoubleLiteral", Act::Literal),
    rule("Literal", "CharacterLiteral", Act::Literal),
    rule("Literal", "StringLiteral", Act::Literal),
    rule("Literal", "true", Act::Literal),
    rule("Literal", "false", Act::Literal),
    rule("Literal", "null", Act::Literal),

    rule("Name", "Identifier", Act::NameFirst),
    rule("Name", "Name . Identifier", Act::NameAppend),

    // Types
    rule("PrimitiveType", "boolean", Act::PrimitiveType),
    rule("PrimitiveType", "byte", Act::PrimitiveType),
    rule("PrimitiveType", "short", Act::PrimitiveType),
    rule("PrimitiveType", "int", Act::PrimitiveType),
    rule("PrimitiveType", "long", Act::PrimitiveType),
    rule("PrimitiveType", "char", Act::PrimitiveType),
    rule("PrimitiveType", "float", Act::PrimitiveType),
    rule("PrimitiveType", "double", Act::PrimitiveType),
    rule("VoidType", "void", Act::VoidType),

    rule("Type", "PrimitiveType", Act::Nothing),
    rule("Type", "ReferenceType", Act::Nothing),
    rule("ReferenceType", "ClassOrInterfaceType", Act::Nothing),
    rule("ReferenceType", "ArrayType", Act::Nothing),
    rule("ClassOrInterfaceType", "ClassOrInterface", Act::Nothing),
    rule("ClassOrInterfaceType", "GenericType", Act::Nothing),
    rule("ClassOrInterface", "Name", Act::NameToType),
    rule("GenericType", "ClassOrInterface TypeArguments", Act::GenericType),
    rule("ArrayType", "PrimitiveType Dims", Act::ArrayType),
    rule("ArrayType", "Name Dims", Act::ArrayTypeName),
    rule("ArrayType", "GenericType Dims", Act::ArrayType),
    rule("ClassType", "ClassOrInterfaceType", Act::Nothing),
    rule("ClassTypeList", "ClassType", Act::Nothing),
    rule("ClassTypeList", "ClassTypeList , ClassType", Act::ConcatType),

    rule("Dims", "[ ]", Act::DimsFirst),
    rule("Dims", "Dims [ ]", Act::DimsIncrement),
    rule("Dimsopt", "", Act::DimsEmpty),
    rule("Dimsopt", "Dims", Act::Nothing),

    rule("TypeArguments", "< TypeArgumentList1", Act::Nothing).since(J5),
    rule("TypeArgumentList", "TypeArgument", Act::Nothing),
    rule("TypeArgumentList", "TypeArgumentList , TypeArgument", Act::ConcatType),
    rule("TypeArgumentList1", "TypeArgument1", Act::Nothing),
    rule("TypeArgumentList1", "TypeArgumentList , TypeArgument1", Act::ConcatType),
    rule("TypeArgumentList2", "TypeArgument2", Act::Nothing),
    rule("TypeArgumentList2", "TypeArgumentList , TypeArgument2", Act::ConcatType),
    rule("TypeArgumentList3", "TypeArgument3", Act::Nothing),
    rule("TypeArgumentList3", "TypeArgumentList , TypeArgument3", Act::ConcatType),
    rule("TypeArgument", "ReferenceType", Act::Nothing),
    rule("TypeArgument", "Wildcard", Act::Nothing),
    rule("TypeArgument1", "ReferenceType1", Act::Nothing),
    rule("TypeArgument1", "Wildcard1", Act::Nothing),
    rule("TypeArgument2", "ReferenceType2", Act::Nothing),
    rule("TypeArgument2", "Wildcard2", Act::Nothing),
    rule("TypeArgument3", "ReferenceType3", Act::Nothing),
    rule("TypeArgument3", "Wildcard3", Act::Nothing),
    rule("ReferenceType1", "ReferenceType >", Act::Nothing),
    rule("ReferenceType1", "ClassOrInterface < TypeArgumentList2", Act::GenericType),
    rule("ReferenceType2", "ReferenceType >>", Act::Nothing),
    rule("ReferenceType2", "ClassOrInterface < TypeArgumentList3", Act::GenericType),
    rule("ReferenceType3", "ReferenceType >>>", Act::Nothing),
    rule("Wildcard", "?", Act::Wildcard),
    rule("Wildcard", "? WildcardBounds", Act::Nothing),
    rule("WildcardBounds", "extends ReferenceType", Act::WildcardBound),
    rule("WildcardBounds", "super ReferenceType", Act::WildcardBound),
    rule("Wildcard1", "? >", Act::Wildcard),
    rule("Wildcard1", "? WildcardBounds1", Act::Nothing),
    rule("WildcardBounds1", "extends ReferenceType1", Act::WildcardBound),
    rule("WildcardBounds1", "super ReferenceType1", Act::WildcardBound),
    rule("Wildcard2", "? >>", Act::Wildcard),
    rule("Wildcard2", "? WildcardBounds2", Act::Nothing),
    rule("WildcardBounds2", "extends ReferenceType2", Act::WildcardBound),
    rule("WildcardBounds2", "super ReferenceType2", Act::WildcardBound),
    rule("Wildcard3", "? >>>", Act::Wildcard),
    rule("Wildcard3", "? WildcardBounds3", Act::Nothing),
    rule("WildcardBounds3", "extends ReferenceType3", Act::WildcardBound),
    rule("WildcardBounds3", "super ReferenceType3", Act::WildcardBound),

    // Compilation unit
    rule("CompilationUnit", "PackageDeclarationopt ImportDeclarationsopt TypeDeclarationsopt",
         Act::CompilationUnit),
    rule("PackageDeclarationopt", "", Act::EmptyAstGroup),
    rule("PackageDeclarationopt", "PackageDeclaration", Act::Nothing),
    rule("PackageDeclaration", "package Name ;", Act::PackageDeclaration),
    rule("ImportDeclarationsopt", "", Act::EmptyAstGroup),
    rule("ImportDeclarationsopt", "ImportDeclarations", Act::Nothing),
    rule("ImportDeclarations", "ImportDeclaration", Act::Nothing),
    rule("ImportDeclarations", "ImportDeclarations ImportDeclaration", Act::ConcatAst),
    rule("ImportDeclaration", "import Name ;", Act::Import),
    rule("ImportDeclaration", "import Name . * ;", Act::Import),
    rule("ImportDeclaration", "import static Name ;", Act::Import).since(J5),
    rule("ImportDeclaration", "import static Name . * ;", Act::Import).since(J5),
    rule("TypeDeclarationsopt", "", Act::EmptyAstGroup),
    rule("TypeDeclarationsopt", "TypeDeclarations", Act::Nothing),
    rule("TypeDeclarations", "TypeDeclaration", Act::Nothing),
    rule("TypeDeclarations", "TypeDeclarations TypeDeclaration", Act::ConcatAst),
    rule("TypeDeclaration", "ClassDeclaration", Act::Nothing),
    rule("TypeDeclaration", "InterfaceDeclaration", Act::Nothing),
    rule("TypeDeclaration", "EnumDeclaration", Act::Nothing),
    rule("TypeDeclaration", ";", Act::EmptyAstGroup),

    // Modifiers and annotations
    rule("Modifiersopt", "", Act::ModifiersEmpty),
    rule("Modifiersopt", "Modifiers", Act::Nothing),
    rule("Modifiers", "Modifier", Act::Nothing),
    rule("Modifiers", "Modifiers Modifier", Act::ModifiersConcat),
    rule("Modifier", "public", Act::ModifierKeyword),
    rule("Modifier", "protected", Act::ModifierKeyword),
    rule("Modifier", "private", Act::ModifierKeyword),
    rule("Modifier", "static", Act::ModifierKeyword),
    rule("Modifier", "abstract", Act::ModifierKeyword),
    rule("Modifier", "final", Act::ModifierKeyword),
    rule("Modifier", "native", Act::ModifierKeyword),
    rule("Modifier", "synchronized", Act::ModifierKeyword),
    rule("Modifier", "transient", Act::ModifierKeyword),
    rule("Modifier", "volatile", Act::ModifierKeyword),
    rule("Modifier", "strictfp", Act::ModifierKeyword),
    rule("Modifier", "Annotation", Act::ModifierAnnotation),
    rule("Annotation", "@ Name", Act::MarkerAnnotation).since(J5),
    rule("Annotation", "@ Name ( MemberValue )", Act::SingleMemberAnnotation).since(J5),
    rule("Annotation", "@ Name ( MemberValuePairsopt )", Act::NormalAnnotation).since(J5),
    rule("MemberValuePairsopt", "", Act::EmptyAstGroup),
    rule("MemberValuePairsopt", "MemberValuePairs", Act::Nothing),
    rule("MemberValuePairs", "MemberValuePair", Act::Nothing),
    rule("MemberValuePairs", "MemberValuePairs , MemberValuePair", Act::ConcatAst),
    rule("MemberValuePair", "Identifier = MemberValue", Act::MemberValuePair),
    rule("MemberValue", "ConditionalExpression", Act::Nothing),
    rule("MemberValue", "Annotation", Act::Nothing),
    rule("MemberValue", "MemberValueArrayInitializer", Act::Nothing),
    rule("MemberValueArrayInitializer", "{ MemberValuesopt }", Act::ArrayInitializer),
    rule("MemberValueArrayInitializer", "{ MemberValues , }", Act::ArrayInitializer),
    rule("MemberValuesopt", "", Act::EmptyExprGroup),
    rule("MemberValuesopt", "MemberValues", Act::Nothing),
    rule("MemberValues", "MemberValue", Act::Nothing),
    rule("MemberValues", "MemberValues , MemberValue", Act::ConcatExpr),

    // Type declarations
    rule("ClassDeclaration", "ClassHeader { ClassBodyDeclarationsopt }", Act::TypeDeclaration),
    rule("ClassHeader", "ClassHeaderName ClassHeaderExtendsopt ClassHeaderImplementsopt",
         Act::Nothing),
    rule("ClassHeaderName", "Modifiersopt class Identifier TypeParametersopt",
         Act::ClassHeaderName),
    rule("ClassHeaderExtendsopt", "", Act::Nothing),
    rule("ClassHeaderExtendsopt", "extends ClassType", Act::HeaderExtends),
    rule("ClassHeaderImplementsopt", "", Act::Nothing),
    rule("ClassHeaderImplementsopt", "implements ClassTypeList", Act::HeaderImplements),
    rule("InterfaceDeclaration", "InterfaceHeader { ClassBodyDeclarationsopt }",
         Act::TypeDeclaration),
    rule("InterfaceHeader", "InterfaceHeaderName InterfaceHeaderExtendsopt", Act::Nothing),
    rule("InterfaceHeaderName", "Modifiersopt interface Identifier TypeParametersopt",
         Act::InterfaceHeaderName),
    rule("InterfaceHeaderExtendsopt", "", Act::Nothing),
    rule("InterfaceHeaderExtendsopt", "extends ClassTypeList", Act::HeaderExtends),
    rule("EnumDeclaration", "EnumHeader { EnumBodyDeclarationsopt }", Act::EnumBody),
    rule("EnumDeclaration", "EnumHeader { , EnumBodyDeclarationsopt }", Act::EnumBody),
    rule("EnumDeclaration", "EnumHeader { EnumConstants , EnumBodyDeclarationsopt }",
         Act::EnumBodyWithConstants),
    rule("EnumDeclaration", "EnumHeader { EnumConstants EnumBodyDeclarationsopt }",
         Act::EnumBodyWithConstants),
    rule("EnumHeader", "EnumHeaderName ClassHeaderImplementsopt", Act::Nothing),
    rule("EnumHeaderName", "Modifiersopt enum Identifier", Act::EnumHeaderName).since(J5),
    rule("EnumConstants", "EnumConstant", Act::Nothing),
    rule("EnumConstants", "EnumConstants , EnumConstant", Act::ConcatAst),
    rule("EnumConstant", "Identifier", Act::EnumConstant),
    rule("EnumConstant", "Identifier ( ArgumentListopt )", Act::EnumConstantArgs),
    rule("EnumConstant", "Identifier AnonymousBodyStart { ClassBodyDeclarationsopt }",
         Act::EnumConstantBody),
    rule("EnumConstant",
         "Identifier ( ArgumentListopt ) AnonymousBodyStart { ClassBodyDeclarationsopt }",
         Act::EnumConstantArgsBody),
    rule("EnumBodyDeclarationsopt", "", Act::EmptyAstGroup),
    rule("EnumBodyDeclarationsopt", "; ClassBodyDeclarationsopt", Act::Nothing),

    rule("TypeParametersopt", "", Act::EmptyAstGroup),
    rule("TypeParametersopt", "TypeParameters", Act::Nothing),
    rule("TypeParameters", "< TypeParameterList1", Act::Nothing).since(J5),
    rule("TypeParameterList", "TypeParameter", Act::Nothing),
    rule("TypeParameterList", "TypeParameterList , TypeParameter", Act::ConcatAst),
    rule("TypeParameterList1", "TypeParameter1", Act::Nothing),
    rule("TypeParameterList1", "TypeParameterList , TypeParameter1", Act::ConcatAst),
    rule("TypeParameter", "TypeParameterHeader", Act::Nothing),
    rule("TypeParameter", "TypeParameterHeader extends ReferenceType", Act::TypeParameterBound),
    rule("TypeParameter1", "TypeParameterHeader >", Act::Nothing),
    rule("TypeParameter1", "TypeParameterHeader extends ReferenceType1", Act::TypeParameterBound),
    rule("TypeParameterHeader", "Identifier", Act::TypeParameter),

    // Class bodies
    rule("ClassBodyDeclarationsopt", "", Act::EmptyAstGroup),
    rule("ClassBodyDeclarationsopt", "ClassBodyDeclarations", Act::Nothing),
    rule("ClassBodyDeclarations", "ClassBodyDeclaration", Act::Nothing),
    rule("ClassBodyDeclarations", "ClassBodyDeclarations ClassBodyDeclaration", Act::ConcatAst),
    rule("ClassBodyDeclaration", "ClassMemberDeclaration", Act::Nothing),
    rule("ClassBodyDeclaration", "StaticInitializer", Act::Nothing),
    rule("ClassBodyDeclaration", "Initializer", Act::Nothing),
    rule("ClassBodyDeclaration", "ConstructorDeclaration", Act::Nothing),
    rule("ClassBodyDeclaration", ";", Act::EmptyAstGroup),
    rule("ClassMemberDeclaration", "FieldDeclaration", Act::Nothing),
    rule("ClassMemberDeclaration", "MethodDeclaration", Act::Nothing),
    rule("ClassMemberDeclaration", "AbstractMethodDeclaration", Act::Nothing),
    rule("ClassMemberDeclaration", "ClassDeclaration", Act::Nothing),
    rule("ClassMemberDeclaration", "InterfaceDeclaration", Act::Nothing),
    rule("ClassMemberDeclaration", "EnumDeclaration", Act::Nothing),

    rule("FieldDeclaration", "Modifiersopt Type VariableDeclarators ;", Act::FieldDeclaration),
    rule("VariableDeclarators", "VariableDeclarator", Act::Nothing),
    rule("VariableDeclarators", "VariableDeclarators , VariableDeclarator", Act::ConcatAst),
    rule("VariableDeclarator", "VariableDeclaratorId", Act::Nothing),
    rule("VariableDeclarator", "VariableDeclaratorId = VariableInitializer", Act::DeclaratorInit),
    rule("VariableDeclaratorId", "Identifier Dimsopt", Act::DeclaratorId),
    rule("VariableInitializer", "Expression", Act::Nothing),
    rule("VariableInitializer", "ArrayInitializer", Act::Nothing),
    rule("ArrayInitializer", "{ VariableInitializersopt }", Act::ArrayInitializer),
    rule("ArrayInitializer", "{ VariableInitializers , }", Act::ArrayInitializer),
    rule("VariableInitializersopt", "", Act::EmptyExprGroup),
    rule("VariableInitializersopt", "VariableInitializers", Act::Nothing),
    rule("VariableInitializers", "VariableInitializer", Act::Nothing),
    rule("VariableInitializers", "VariableInitializers , VariableInitializer", Act::ConcatExpr),

    rule("MethodDeclaration", "MethodHeader { BlockStatementsopt }", Act::DeclBody),
    rule("AbstractMethodDeclaration", "MethodHeader ;", Act::AbstractMethod),
    rule("MethodHeader", "MethodHeaderName FormalParameterListopt ) Dimsopt MethodHeaderThrowsopt",
         Act::MethodHeader),
    rule("MethodHeaderName", "Modifiersopt Type Identifier (", Act::MethodHeaderName),
    rule("MethodHeaderName", "Modifiersopt VoidType Identifier (", Act::MethodHeaderName),
    rule("MethodHeaderThrowsopt", "", Act::EmptyTypeGroup),
    rule("MethodHeaderThrowsopt", "throws ClassTypeList", Act::Nothing),
    rule("FormalParameterListopt", "", Act::EmptyAstGroup),
    rule("FormalParameterListopt", "FormalParameterList", Act::Nothing),
    rule("FormalParameterList", "FormalParameter", Act::Nothing),
    rule("FormalParameterList", "FormalParameterList , FormalParameter", Act::ConcatAst),
    rule("FormalParameter", "Modifiersopt Type VariableDeclaratorId", Act::FormalParameter),
    rule("FormalParameter", "Modifiersopt Type ... VariableDeclaratorId",
         Act::FormalParameterVarargs).since(J5),
    rule("ConstructorDeclaration", "ConstructorHeader { BlockStatementsopt }", Act::DeclBody),
    rule("ConstructorHeader",
         "ConstructorHeaderName FormalParameterListopt ) MethodHeaderThrowsopt",
         Act::ConstructorHeader),
    rule("ConstructorHeaderName", "Modifiersopt Identifier (", Act::ConstructorHeaderName),
    rule("Initializer", "InitializerStart { BlockStatementsopt }", Act::DeclBody),
    rule("InitializerStart", "", Act::InitializerStart),
    rule("StaticInitializer", "StaticOnly { BlockStatementsopt }", Act::DeclBody),
    rule("StaticOnly", "static", Act::StaticOnly),

    // Blocks and statements
    rule("Block", "{ BlockStatementsopt }", Act::Block),
    rule("BlockStatementsopt", "", Act::EmptyAstGroup),
    rule("BlockStatementsopt", "BlockStatements", Act::Nothing),
    rule("BlockStatements", "BlockStatement", Act::Nothing),
    rule("BlockStatements", "BlockStatements BlockStatement", Act::ConcatAst),
    rule("BlockStatement", "LocalVariableDeclarationStatement", Act::Nothing),
    rule("BlockStatement", "Statement", Act::Nothing),
    rule("BlockStatement", "ClassDeclaration", Act::LocalClass),
    rule("BlockStatement", "ExplicitConstructorInvocation", Act::Nothing),
    rule("LocalVariableDeclarationStatement", "LocalVariableDeclaration ;", Act::StatementEnd),
    rule("LocalVariableDeclaration", "Type VariableDeclarators", Act::LocalVariable),
    rule("LocalVariableDeclaration", "Modifiers Type VariableDeclarators",
         Act::LocalVariableModifiers),
    rule("ExplicitConstructorInvocation", "this ( ArgumentListopt ) ;", Act::ConstructorCall),
    rule("ExplicitConstructorInvocation", "super ( ArgumentListopt ) ;", Act::ConstructorCall),

    rule("Statement", "StatementWithoutTrailingSubstatement", Act::Nothing),
    rule("Statement", "LabeledStatement", Act::Nothing),
    rule("Statement", "IfThenStatement", Act::Nothing),
    rule("Statement", "IfThenElseStatement", Act::Nothing),
    rule("Statement", "WhileStatement", Act::Nothing),
    rule("Statement", "ForStatement", Act::Nothing),
    rule("Statement", "EnhancedForStatement", Act::Nothing),
    rule("StatementNoShortIf", "StatementWithoutTrailingSubstatement", Act::Nothing),
    rule("StatementNoShortIf", "LabeledStatementNoShortIf", Act::Nothing),
    rule("StatementNoShortIf", "IfThenElseStatementNoShortIf", Act::Nothing),
    rule("StatementNoShortIf", "WhileStatementNoShortIf", Act::Nothing),
    rule("StatementNoShortIf", "ForStatementNoShortIf", Act::Nothing),
    rule("StatementNoShortIf", "EnhancedForStatementNoShortIf", Act::Nothing),
    rule("StatementWithoutTrailingSubstatement", "Block", Act::Nothing),
    rule("StatementWithoutTrailingSubstatement", "EmptyStatement", Act::Nothing),
    rule("StatementWithoutTrailingSubstatement", "ExpressionStatement", Act::Nothing),
    rule("StatementWithoutTrailingSubstatement", "SwitchStatement", Act::Nothing),
    rule("StatementWithoutTrailingSubstatement", "DoStatement", Act::Nothing),
    rule("StatementWithoutTrailingSubstatement", "BreakStatement", Act::Nothing),
    rule("StatementWithoutTrailingSubstatement", "ContinueStatement", Act::Nothing),
    rule("StatementWithoutTrailingSubstatement", "ReturnStatement", Act::Nothing),
    rule("StatementWithoutTrailingSubstatement", "SynchronizedStatement", Act::Nothing),
    rule("StatementWithoutTrailingSubstatement", "ThrowStatement", Act::Nothing),
    rule("StatementWithoutTrailingSubstatement", "TryStatement", Act::Nothing),
    rule("StatementWithoutTrailingSubstatement", "AssertStatement", Act::Nothing),

    rule("EmptyStatement", ";", Act::EmptyStatement),
    rule("LabeledStatement", "Identifier : Statement", Act::Labeled),
    rule("LabeledStatementNoShortIf", "Identifier : StatementNoShortIf", Act::Labeled),
    rule("ExpressionStatement", "StatementExpression ;", Act::ExpressionStatement),
    rule("StatementExpression", "Assignment", Act::Nothing),
    rule("StatementExpression", "PreIncrementExpression", Act::Nothing),
    rule("StatementExpression", "PreDecrementExpression", Act::Nothing),
    rule("StatementExpression", "PostIncrementExpression", Act::Nothing),
    rule("StatementExpression", "PostDecrementExpression", Act::Nothing),
    rule("StatementExpression", "MethodInvocation", Act::Nothing),
    rule("StatementExpression", "ClassInstanceCreationExpression", Act::Nothing),

    rule("IfThenStatement", "if ( Expression ) Statement", Act::If),
    rule("IfThenElseStatement", "if ( Expression ) StatementNoShortIf else Statement", Act::IfElse),
    rule("IfThenElseStatementNoShortIf",
         "if ( Expression ) StatementNoShortIf else StatementNoShortIf",
         Act::IfElse),

    rule("SwitchStatement", "switch ( Expression ) SwitchBlock", Act::Switch),
    rule("SwitchBlock", "{ }", Act::EmptyAstGroup),
    rule("SwitchBlock", "{ SwitchBlockStatementGroups }", Act::Nothing),
    rule("SwitchBlock", "{ SwitchLabels }", Act::SwitchLabelsOnly),
    rule("SwitchBlock", "{ SwitchBlockStatementGroups SwitchLabels }", Act::SwitchGroupsThenLabels),
    rule("SwitchBlockStatementGroups", "SwitchBlockStatementGroup", Act::Nothing),
    rule("SwitchBlockStatementGroups", "SwitchBlockStatementGroups SwitchBlockStatementGroup",
         Act::ConcatAst),
    rule("SwitchBlockStatementGroup", "SwitchLabels BlockStatements", Act::SwitchGroup),
    rule("SwitchLabels", "SwitchLabel", Act::Nothing),
    rule("SwitchLabels", "SwitchLabels SwitchLabel", Act::ConcatAst),
    rule("SwitchLabel", "case Expression :", Act::CaseLabel),
    rule("SwitchLabel", "default :", Act::DefaultLabel),

    rule("WhileStatement", "while ( Expression ) Statement", Act::While),
    rule("WhileStatementNoShortIf", "while ( Expression ) StatementNoShortIf", Act::While),
    rule("DoStatement", "do Statement while ( Expression ) ;", Act::DoWhile),

    rule("ForStatement", "for ( ForInitopt ; Expressionopt ; ForUpdateopt ) Statement", Act::For),
    rule("ForStatementNoShortIf",
         "for ( ForInitopt ; Expressionopt ; ForUpdateopt ) StatementNoShortIf",
         Act::For),
    rule("ForInitopt", "", Act::EmptyAstGroup),
    rule("ForInitopt", "ForInit", Act::Nothing),
    rule("ForInit", "StatementExpressionList", Act::ForInitExpressions),
    rule("ForInit", "LocalVariableDeclaration", Act::Nothing),
    rule("ForUpdateopt", "", Act::EmptyExprGroup),
    rule("ForUpdateopt", "StatementExpressionList", Act::Nothing),
    rule("StatementExpressionList", "StatementExpression", Act::Nothing),
    rule("StatementExpressionList", "StatementExpressionList , StatementExpression",
         Act::ConcatExpr),
    rule("EnhancedForStatement", "for ( Type Identifier : Expression ) Statement",
         Act::ForEach).since(J5),
    rule("EnhancedForStatement", "for ( Modifiers Type Identifier : Expression ) Statement",
         Act::ForEachModifiers).since(J5),
    rule("EnhancedForStatementNoShortIf", "for ( Type Identifier : Expression ) StatementNoShortIf",
         Act::ForEach).since(J5),
    rule("EnhancedForStatementNoShortIf",
         "for ( Modifiers Type Identifier : Expression ) StatementNoShortIf",
         Act::ForEachModifiers).since(J5),

    rule("BreakStatement", "break ;", Act::Break),
    rule("BreakStatement", "break Identifier ;", Act::Break),
    rule("ContinueStatement", "continue ;", Act::Continue),
    rule("ContinueStatement", "continue Identifier ;", Act::Continue),
    rule("ReturnStatement", "return Expressionopt ;", Act::Return),
    rule("ThrowStatement", "throw Expression ;", Act::Throw),
    rule("SynchronizedStatement", "synchronized ( Expression ) Block", Act::Synchronized),
    rule("TryStatement", "try Block Catches", Act::TryCatch),
    rule("TryStatement", "try Block Catchesopt Finally", Act::TryFinally),
    rule("Catchesopt", "", Act::EmptyAstGroup),
    rule("Catchesopt", "Catches", Act::Nothing),
    rule("Catches", "CatchClause", Act::Nothing),
    rule("Catches", "Catches CatchClause", Act::ConcatAst),
    rule("CatchClause", "catch ( FormalParameter ) Block", Act::CatchClause),
    rule("Finally", "finally Block", Act::Nothing),
    rule("AssertStatement", "assert Expression ;", Act::Assert).since(J4),
    rule("AssertStatement", "assert Expression : Expression ;", Act::Assert).since(J4),

    // Expressions
    rule("Primary", "PrimaryNoNewArray", Act::Nothing),
    rule("Primary", "ArrayCreationExpression", Act::Nothing),
    rule("PrimaryNoNewArray", "Literal", Act::Nothing),
    rule("PrimaryNoNewArray", "this", Act::This),
    rule("PrimaryNoNewArray", "( Expression )", Act::Paren),
    rule("PrimaryNoNewArray", "ClassInstanceCreationExpression", Act::Nothing),
    rule("PrimaryNoNewArray", "FieldAccess", Act::Nothing),
    rule("PrimaryNoNewArray", "MethodInvocation", Act::Nothing),
    rule("PrimaryNoNewArray", "ArrayAccess", Act::Nothing),
    rule("PrimaryNoNewArray", "Name . class", Act::ClassLiteralName),
    rule("PrimaryNoNewArray", "Name Dims . class", Act::ClassLiteralNameDims),
    rule("PrimaryNoNewArray", "PrimitiveType . class", Act::ClassLiteralType),
    rule("PrimaryNoNewArray", "PrimitiveType Dims . class", Act::ClassLiteralTypeDims),
    rule("PrimaryNoNewArray", "VoidType . class", Act::ClassLiteralType),

    // Ahead of `new ClassType ( ... )` so a following `{` opens a body.
    rule("AnonymousBodyStart", "", Act::AnonymousBodyStart),
    rule("ClassInstanceCreationExpression", "new ClassType ( ArgumentListopt )", Act::NewObject),
    rule("ClassInstanceCreationExpression",
         "new ClassType ( ArgumentListopt ) AnonymousBodyStart { ClassBodyDeclarationsopt }",
         Act::NewAnonymous),
    rule("ArgumentListopt", "", Act::EmptyExprGroup),
    rule("ArgumentListopt", "ArgumentList", Act::Nothing),
    rule("ArgumentList", "Expression", Act::Nothing),
    rule("ArgumentList", "ArgumentList , Expression", Act::ConcatExpr),
    rule("ArrayCreationExpression", "new PrimitiveType DimExprs Dimsopt", Act::NewArrayDims),
    rule("ArrayCreationExpression", "new ClassOrInterfaceType DimExprs Dimsopt", Act::NewArrayDims),
    rule("ArrayCreationExpression", "new PrimitiveType Dims ArrayInitializer", Act::NewArrayInit),
    rule("ArrayCreationExpression", "new ClassOrInterfaceType Dims ArrayInitializer",
         Act::NewArrayInit),
    rule("DimExprs", "DimExpr", Act::Nothing),
    rule("DimExprs", "DimExprs DimExpr", Act::ConcatExpr),
    rule("DimExpr", "[ Expression ]", Act::Nothing),

    rule("FieldAccess", "Primary . Identifier", Act::FieldAccess),
    rule("FieldAccess", "super . Identifier", Act::SuperFieldAccess),
    rule("MethodInvocation", "Name ( ArgumentListopt )", Act::MethodCallName),
    rule("MethodInvocation", "Primary . Identifier ( ArgumentListopt )", Act::MethodCallPrimary),
    rule("MethodInvocation", "super . Identifier ( ArgumentListopt )", Act::MethodCallSuper),
    rule("ArrayAccess", "Name [ Expression ]", Act::ArrayAccessName),
    rule("ArrayAccess", "PrimaryNoNewArray [ Expression ]", Act::ArrayAccess),

    rule("PostfixExpression", "Primary", Act::Nothing),
    rule("PostfixExpression", "Name", Act::NameToExpr),
    rule("PostfixExpression", "PostIncrementExpression", Act::Nothing),
    rule("PostfixExpression", "PostDecrementExpression", Act::Nothing),
    rule("PostIncrementExpression", "PostfixExpression ++", Act::Postfix),
    rule("PostDecrementExpression", "PostfixExpression --", Act::Postfix),
    rule("UnaryExpression", "PreIncrementExpression", Act::Nothing),
    rule("UnaryExpression", "PreDecrementExpression", Act::Nothing),
    rule("UnaryExpression", "+ UnaryExpression", Act::Prefix),
    rule("UnaryExpression", "- UnaryExpression", Act::Prefix),
    rule("UnaryExpression", "UnaryExpressionNotPlusMinus", Act::Nothing),
    rule("PreIncrementExpression", "++ UnaryExpression", Act::Prefix),
    rule("PreDecrementExpression", "-- UnaryExpression", Act::Prefix),
    rule("UnaryExpressionNotPlusMinus", "PostfixExpression", Act::Nothing),
    rule("UnaryExpressionNotPlusMinus", "~ UnaryExpression", Act::Prefix),
    rule("UnaryExpressionNotPlusMinus", "! UnaryExpression", Act::Prefix),
    rule("UnaryExpressionNotPlusMinus", "CastExpression", Act::Nothing),
    rule("CastExpression", "( PrimitiveType Dimsopt ) UnaryExpression", Act::CastPrimitive),
    rule("CastExpression", "( Expression ) UnaryExpressionNotPlusMinus", Act::CastName),
    rule("CastExpression", "( Name Dims ) UnaryExpressionNotPlusMinus", Act::CastNameDims),
    rule("CastExpression", "( Name < TypeArgumentList1 Dimsopt ) UnaryExpressionNotPlusMinus",
         Act::CastGeneric).since(J5),

    rule("MultiplicativeExpression", "UnaryExpression", Act::Nothing),
    rule("MultiplicativeExpression", "MultiplicativeExpression * UnaryExpression", Act::Binary),
    rule("MultiplicativeExpression", "MultiplicativeExpression / UnaryExpression", Act::Binary),
    rule("MultiplicativeExpression", "MultiplicativeExpression % UnaryExpression", Act::Binary),
    rule("AdditiveExpression", "MultiplicativeExpression", Act::Nothing),
    rule("AdditiveExpression", "AdditiveExpression + MultiplicativeExpression", Act::Binary),
    rule("AdditiveExpression", "AdditiveExpression - MultiplicativeExpression", Act::Binary),
    rule("ShiftExpression", "AdditiveExpression", Act::Nothing),
    rule("ShiftExpression", "ShiftExpression << AdditiveExpression", Act::Binary),
    rule("ShiftExpression", "ShiftExpression >> AdditiveExpression", Act::Binary),
    rule("ShiftExpression", "ShiftExpression >>> AdditiveExpression", Act::Binary),
    rule("RelationalExpression", "ShiftExpression", Act::Nothing),
    rule("RelationalExpression", "RelationalExpression < ShiftExpression", Act::Binary),
    // Keeps `( a < b` open for a generic cast until the token after `b`.
    rule("RelationalExpression", "Name < ShiftExpression", Act::BinaryName),
    rule("RelationalExpression", "RelationalExpression > ShiftExpression", Act::Binary),
    rule("RelationalExpression", "RelationalExpression <= ShiftExpression", Act::Binary),
    rule("RelationalExpression", "RelationalExpression >= ShiftExpression", Act::Binary),
    rule("RelationalExpression", "RelationalExpression instanceof ReferenceType", Act::InstanceOf),
    rule("EqualityExpression", "RelationalExpression", Act::Nothing),
    rule("EqualityExpression", "EqualityExpression == RelationalExpression", Act::Binary),
    rule("EqualityExpression", "EqualityExpression != RelationalExpression", Act::Binary),
    rule("AndExpression", "EqualityExpression", Act::Nothing),
    rule("AndExpression", "AndExpression & EqualityExpression", Act::Binary),
    rule("ExclusiveOrExpression", "AndExpression", Act::Nothing),
    rule("ExclusiveOrExpression", "ExclusiveOrExpression ^ AndExpression", Act::Binary),
    rule("InclusiveOrExpression", "ExclusiveOrExpression", Act::Nothing),
    rule("InclusiveOrExpression", "InclusiveOrExpression | ExclusiveOrExpression", Act::Binary),
    rule("ConditionalAndExpression", "InclusiveOrExpression", Act::Nothing),
    rule("ConditionalAndExpression", "ConditionalAndExpression && InclusiveOrExpression",
         Act::Binary),
    rule("ConditionalOrExpression", "ConditionalAndExpression", Act::Nothing),
    rule("ConditionalOrExpression", "ConditionalOrExpression || ConditionalAndExpression",
         Act::Binary),
    rule("ConditionalExpression", "ConditionalOrExpression", Act::Nothing),
    rule("ConditionalExpression", "ConditionalOrExpression ? Expression : ConditionalExpression",
         Act::Conditional),
    rule("AssignmentExpression", "ConditionalExpression", Act::Nothing),
    rule("AssignmentExpression", "Assignment", Act::Nothing),
    rule("Assignment", "LeftHandSide AssignmentOperator AssignmentExpression", Act::Assign),
    rule("LeftHandSide", "Name", Act::NameToExpr),
    rule("LeftHandSide", "FieldAccess", Act::Nothing),
    rule("LeftHandSide", "ArrayAccess", Act::Nothing),
    rule("AssignmentOperator", "=", Act::AssignOperator),
    rule("AssignmentOperator", "*=", Act::AssignOperator),
    rule("AssignmentOperator", "/=", Act::AssignOperator),
    rule("AssignmentOperator", "%=", Act::AssignOperator),
    rule("AssignmentOperator", "+=", Act::AssignOperator),
    rule("AssignmentOperator", "-=", Act::AssignOperator),
    rule("AssignmentOperator", "<<=", Act::AssignOperator),
    rule("AssignmentOperator", ">>=", Act::AssignOperator),
    rule("AssignmentOperator", ">>>=", Act::AssignOperator),
    rule("AssignmentOperator", "&=", Act::AssignOperator),
    rule("AssignmentOperator", "^=", Act::AssignOperator),
    rule("AssignmentOperator", "|=", Act::AssignOperator),
    rule("Expression", "AssignmentExpression", Act::Nothing),
    rule("Expressionopt", "", Act::EmptyExprGroup),
    rule("Expressionopt", "Expression", Act::Nothing),

    // Recovery goals. These consume whole constructs without leaving
    // anything on the stacks; the dispatcher hands each reduced element to
    // the recovery tree instead.
    rule("RecoveryHeaders", "RecoveryHeader", Act::Nothing),
    rule("RecoveryHeaders", "RecoveryHeaders RecoveryHeader", Act::Nothing),
    rule("RecoveryHeader", "ImportDeclaration", Act::RecoverItem),
    rule("RecoveryHeader", "PackageDeclaration", Act::RecoverItem),
    rule("RecoveryHeader", "FieldDeclaration", Act::RecoverItem),
    rule("RecoveryHeader", "RecoveryFieldHeader", Act::RecoverItem),
    rule("RecoveryHeader", "AbstractMethodDeclaration", Act::RecoverItem),
    rule("RecoveryHeader", "ClassHeader", Act::RecoverHeader),
    rule("RecoveryHeader", "InterfaceHeader", Act::RecoverHeader),
    rule("RecoveryHeader", "EnumHeader", Act::RecoverHeader),
    rule("RecoveryHeader", "MethodHeader", Act::RecoverHeader),
    rule("RecoveryHeader", "ConstructorHeader", Act::RecoverHeader),
    rule("RecoveryHeader", "StaticOnly", Act::RecoverHeader),
    rule("RecoveryHeader", "{", Act::RecoverOpenBrace),
    rule("RecoveryHeader", "}", Act::RecoverCloseBrace),
    rule("RecoveryFieldHeader", "Modifiersopt Type VariableDeclarators", Act::FieldDeclaration),

    rule("RecoveryStatements", "RecoveryStatement", Act::Nothing),
    rule("RecoveryStatements", "RecoveryStatements RecoveryStatement", Act::Nothing),
    rule("RecoveryStatement", "LocalVariableDeclarationStatement", Act::RecoverItem),
    rule("RecoveryStatement", "LocalVariableDeclaration", Act::RecoverItem),
    rule("RecoveryStatement", "ExpressionStatement", Act::RecoverItem),
    rule("RecoveryStatement", "SwitchStatement", Act::RecoverItem),
    rule("RecoveryStatement", "DoStatement", Act::RecoverItem),
    rule("RecoveryStatement", "BreakStatement", Act::RecoverItem),
    rule("RecoveryStatement", "ContinueStatement", Act::RecoverItem),
    rule("RecoveryStatement", "ReturnStatement", Act::RecoverItem),
    rule("RecoveryStatement", "SynchronizedStatement", Act::RecoverItem),
    rule("RecoveryStatement", "ThrowStatement", Act::RecoverItem),
    rule("RecoveryStatement", "TryStatement", Act::RecoverItem),
    rule("RecoveryStatement", "AssertStatement", Act::RecoverItem),
    rule("RecoveryStatement", "LabeledStatement", Act::RecoverItem),
    rule("RecoveryStatement", "IfThenStatement", Act::RecoverItem),
    rule("RecoveryStatement", "IfThenElseStatement", Act::RecoverItem),
    rule("RecoveryStatement", "WhileStatement", Act::RecoverItem),
    rule("RecoveryStatement", "ForStatement", Act::RecoverItem),
    rule("RecoveryStatement", "EnhancedForStatement", Act::RecoverItem),
    rule("RecoveryStatement", "ExplicitConstructorInvocation", Act::RecoverItem),
    rule("RecoveryStatement", "ClassHeader", Act::RecoverHeader),
    rule("RecoveryStatement", "{", Act::RecoverOpenBrace),
    rule("RecoveryStatement", "}", Act::RecoverCloseBrace),
];
