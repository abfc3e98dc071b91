#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SyntaxKind {
    NAME,
    LITERAL,
    TYPE_REF,

    PATH,
    USING_DIRECTIVE,
    NAMESPACE_DECL,
    CLASS_DECL,
    METHOD_DECL,
    PARAM_LIST,
    PARAM,
    BLOCK,
    CALL_EXPR,
    ARG_LIST,

    SOURCE_FILE,
    ERROR,
}

impl SyntaxKind {
    pub(crate) const ALL: [Self; 15] = [
        Self::NAME,
        Self::LITERAL,
        Self::TYPE_REF,
        Self::PATH,
        Self::USING_DIRECTIVE,
        Self::NAMESPACE_DECL,
        Self::CLASS_DECL,
        Self::METHOD_DECL,
        Self::PARAM_LIST,
        Self::PARAM,
        Self::BLOCK,
        Self::CALL_EXPR,
        Self::ARG_LIST,
        Self::SOURCE_FILE,
        Self::ERROR,
    ];
}
