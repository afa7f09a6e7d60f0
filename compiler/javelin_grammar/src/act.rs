//! Semantic action tags attached to grammar rules.
//!
//! Rules that build the same shape of node share one tag, so the parser's
//! reduce dispatcher switches over a few dozen shape families instead of
//! one arm per rule. The tag is written to the `parser5` resource as a
//! `u16`.

macro_rules! acts {
    ($($(#[$meta:meta])* $variant:ident,)*) => {
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
        #[repr(u16)]
        pub enum Act {
            $($(#[$meta])* $variant,)*
        }

        impl Act {
            pub const ALL: &'static [Act] = &[$(Act::$variant,)*];

            #[inline]
            pub const fn tag(self) -> u16 {
                self as u16
            }

            pub fn from_tag(tag: u16) -> Option<Act> {
                Self::ALL.get(usize::from(tag)).copied()
            }
        }
    };
}

acts! {
    /// Chain rule or punctuation-only rule; stacks are left as they are.
    Nothing,

    ConcatAst,
    ConcatExpr,
    ConcatType,
    EmptyAstGroup,
    EmptyExprGroup,
    EmptyTypeGroup,

    NameFirst,
    NameAppend,
    Literal,

    PrimitiveType,
    VoidType,
    NameToType,
    GenericType,
    ArrayType,
    ArrayTypeName,
    Wildcard,
    WildcardBound,
    DimsFirst,
    DimsIncrement,
    DimsEmpty,

    NameToExpr,
    This,
    Paren,
    FieldAccess,
    SuperFieldAccess,
    MethodCallName,
    MethodCallPrimary,
    MethodCallSuper,
    ArrayAccessName,
    ArrayAccess,
    Postfix,
    Prefix,
    Binary,
    /// A relational operator whose left operand is still a bare name.
    BinaryName,
    InstanceOf,
    Conditional,
    AssignOperator,
    Assign,
    CastPrimitive,
    CastName,
    CastNameDims,
    CastGeneric,
    ClassLiteralName,
    ClassLiteralNameDims,
    ClassLiteralType,
    ClassLiteralTypeDims,
    NewObject,
    /// Empty rule in front of an anonymous class body.
    AnonymousBodyStart,
    NewAnonymous,
    NewArrayDims,
    NewArrayInit,
    ArrayInitializer,

    MarkerAnnotation,
    SingleMemberAnnotation,
    NormalAnnotation,
    MemberValuePair,

    Block,
    LocalVariable,
    LocalVariableModifiers,
    /// Widen the statement on top to cover its terminator.
    StatementEnd,
    EmptyStatement,
    ExpressionStatement,
    Labeled,
    If,
    IfElse,
    While,
    DoWhile,
    For,
    ForInitExpressions,
    ForEach,
    ForEachModifiers,
    Break,
    Continue,
    Return,
    Throw,
    Synchronized,
    TryCatch,
    TryFinally,
    CatchClause,
    Switch,
    SwitchGroup,
    CaseLabel,
    DefaultLabel,
    SwitchLabelsOnly,
    SwitchGroupsThenLabels,
    Assert,
    ConstructorCall,
    LocalClass,

    ModifiersEmpty,
    ModifierKeyword,
    ModifierAnnotation,
    ModifiersConcat,
    DeclaratorId,
    DeclaratorInit,
    FieldDeclaration,
    MethodHeaderName,
    ConstructorHeaderName,
    MethodHeader,
    ConstructorHeader,
    /// Attach a `{ ... }` body to the method, constructor or initializer on top.
    DeclBody,
    AbstractMethod,
    FormalParameter,
    FormalParameterVarargs,
    InitializerStart,
    StaticOnly,
    ClassHeaderName,
    InterfaceHeaderName,
    EnumHeaderName,
    HeaderExtends,
    HeaderImplements,
    TypeDeclaration,
    EnumBody,
    EnumBodyWithConstants,
    EnumConstant,
    EnumConstantArgs,
    EnumConstantBody,
    EnumConstantArgsBody,
    TypeParameter,
    TypeParameterBound,
    CompilationUnit,
    PackageDeclaration,
    Import,

    /// A complete element reduced while parsing recovery goals.
    RecoverItem,
    /// A header that opens a nested element in the recovery tree.
    RecoverHeader,
    RecoverOpenBrace,
    RecoverCloseBrace,
}

#[cfg(test)]
mod tests {
    use super::Act;

    #[test]
    fn tags_round_trip() {
        for act in Act::ALL {
            assert_eq!(Act::from_tag(act.tag()), Some(*act));
        }
        assert_eq!(Act::from_tag(u16::MAX), None);
    }
}
