use crate::SyntaxKind::*;
use crate::query::QueryError;
use crate::syntax::SyntaxNode;

pub trait Node<'a>: Copy {
    const NAME: &'static str;

    fn cast(syntax: SyntaxNode<'a>) -> Option<Self>
    where
        Self: Sized;

    fn syntax(self) -> SyntaxNode<'a>;

    fn try_cast(syntax: SyntaxNode<'a>) -> Result<Self, QueryError>
    where
        Self: Sized,
    {
        Self::cast(syntax)
            .ok_or(QueryError::KindMismatch { expected: Self::NAME, found: syntax.kind() })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceFile<'a>(SyntaxNode<'a>);

impl<'a> SourceFile<'a> {
    pub fn usings(self) -> impl Iterator<Item = UsingDirective<'a>> {
        self.0.children().filter_map(UsingDirective::cast)
    }

    pub fn items(self) -> impl Iterator<Item = Item<'a>> {
        self.0.children().filter_map(Item::cast)
    }
}

impl<'a> Node<'a> for SourceFile<'a> {
    const NAME: &'static str = "a source file";

    fn cast(syntax: SyntaxNode<'a>) -> Option<Self> {
        (syntax.kind() == SOURCE_FILE).then_some(Self(syntax))
    }

    fn syntax(self) -> SyntaxNode<'a> {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsingDirective<'a>(SyntaxNode<'a>);

impl<'a> UsingDirective<'a> {
    pub fn name(self) -> Option<Path<'a>> {
        self.0.children().find_map(Path::cast)
    }
}

impl<'a> Node<'a> for UsingDirective<'a> {
    const NAME: &'static str = "a using directive";

    fn cast(syntax: SyntaxNode<'a>) -> Option<Self> {
        (syntax.kind() == USING_DIRECTIVE).then_some(Self(syntax))
    }

    fn syntax(self) -> SyntaxNode<'a> {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamespaceDecl<'a>(SyntaxNode<'a>);

impl<'a> NamespaceDecl<'a> {
    pub fn name(self) -> Option<Path<'a>> {
        self.0.children().find_map(Path::cast)
    }

    pub fn usings(self) -> impl Iterator<Item = UsingDirective<'a>> {
        self.0.children().filter_map(UsingDirective::cast)
    }

    pub fn items(self) -> impl Iterator<Item = Item<'a>> {
        self.0.children().filter_map(Item::cast)
    }
}

impl<'a> Node<'a> for NamespaceDecl<'a> {
    const NAME: &'static str = "a namespace declaration";

    fn cast(syntax: SyntaxNode<'a>) -> Option<Self> {
        (syntax.kind() == NAMESPACE_DECL).then_some(Self(syntax))
    }

    fn syntax(self) -> SyntaxNode<'a> {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassDecl<'a>(SyntaxNode<'a>);

impl<'a> ClassDecl<'a> {
    pub fn name(self) -> Option<Name<'a>> {
        self.0.children().find_map(Name::cast)
    }

    pub fn methods(self) -> impl Iterator<Item = MethodDecl<'a>> {
        self.0.children().filter_map(MethodDecl::cast)
    }
}

impl<'a> Node<'a> for ClassDecl<'a> {
    const NAME: &'static str = "a class declaration";

    fn cast(syntax: SyntaxNode<'a>) -> Option<Self> {
        (syntax.kind() == CLASS_DECL).then_some(Self(syntax))
    }

    fn syntax(self) -> SyntaxNode<'a> {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodDecl<'a>(SyntaxNode<'a>);

impl<'a> MethodDecl<'a> {
    pub fn name(self) -> Option<Name<'a>> {
        self.0.children().find_map(Name::cast)
    }

    pub fn return_ty(self) -> Option<TypeRef<'a>> {
        self.0.children().find_map(TypeRef::cast)
    }

    pub fn param_list(self) -> Option<ParamList<'a>> {
        self.0.children().find_map(ParamList::cast)
    }

    pub fn body(self) -> Option<Block<'a>> {
        self.0.children().find_map(Block::cast)
    }
}

impl<'a> Node<'a> for MethodDecl<'a> {
    const NAME: &'static str = "a method declaration";

    fn cast(syntax: SyntaxNode<'a>) -> Option<Self> {
        (syntax.kind() == METHOD_DECL).then_some(Self(syntax))
    }

    fn syntax(self) -> SyntaxNode<'a> {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamList<'a>(SyntaxNode<'a>);

impl<'a> ParamList<'a> {
    pub fn params(self) -> impl Iterator<Item = Param<'a>> {
        self.0.children().filter_map(Param::cast)
    }
}

impl<'a> Node<'a> for ParamList<'a> {
    const NAME: &'static str = "a parameter list";

    fn cast(syntax: SyntaxNode<'a>) -> Option<Self> {
        (syntax.kind() == PARAM_LIST).then_some(Self(syntax))
    }

    fn syntax(self) -> SyntaxNode<'a> {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param<'a>(SyntaxNode<'a>);

impl<'a> Param<'a> {
    pub fn name(self) -> Option<Name<'a>> {
        self.0.children().find_map(Name::cast)
    }

    pub fn ty(self) -> Option<TypeRef<'a>> {
        self.0.children().find_map(TypeRef::cast)
    }
}

impl<'a> Node<'a> for Param<'a> {
    const NAME: &'static str = "a parameter";

    fn cast(syntax: SyntaxNode<'a>) -> Option<Self> {
        (syntax.kind() == PARAM).then_some(Self(syntax))
    }

    fn syntax(self) -> SyntaxNode<'a> {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a>(SyntaxNode<'a>);

impl<'a> Node<'a> for Block<'a> {
    const NAME: &'static str = "a block";

    fn cast(syntax: SyntaxNode<'a>) -> Option<Self> {
        (syntax.kind() == BLOCK).then_some(Self(syntax))
    }

    fn syntax(self) -> SyntaxNode<'a> {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeRef<'a>(SyntaxNode<'a>);

impl<'a> TypeRef<'a> {
    pub fn text(self) -> &'a str {
        self.0.payload().unwrap_or_default()
    }
}

impl<'a> Node<'a> for TypeRef<'a> {
    const NAME: &'static str = "a type reference";

    fn cast(syntax: SyntaxNode<'a>) -> Option<Self> {
        (syntax.kind() == TYPE_REF).then_some(Self(syntax))
    }

    fn syntax(self) -> SyntaxNode<'a> {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Path<'a>(SyntaxNode<'a>);

impl<'a> Path<'a> {
    pub fn segments(self) -> impl Iterator<Item = Name<'a>> {
        self.0.children().filter_map(Name::cast)
    }

    pub fn dotted(self) -> String {
        let mut dotted = String::new();
        for segment in self.segments() {
            if !dotted.is_empty() {
                dotted.push('.');
            }
            dotted.push_str(segment.text());
        }
        dotted
    }
}

impl<'a> Node<'a> for Path<'a> {
    const NAME: &'static str = "a path";

    fn cast(syntax: SyntaxNode<'a>) -> Option<Self> {
        (syntax.kind() == PATH).then_some(Self(syntax))
    }

    fn syntax(self) -> SyntaxNode<'a> {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Name<'a>(SyntaxNode<'a>);

impl<'a> Name<'a> {
    pub fn text(self) -> &'a str {
        self.0.payload().unwrap_or_default()
    }
}

impl<'a> Node<'a> for Name<'a> {
    const NAME: &'static str = "a name";

    fn cast(syntax: SyntaxNode<'a>) -> Option<Self> {
        (syntax.kind() == NAME).then_some(Self(syntax))
    }

    fn syntax(self) -> SyntaxNode<'a> {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal<'a>(SyntaxNode<'a>);

impl<'a> Literal<'a> {
    pub fn value(self) -> &'a str {
        self.0.payload().unwrap_or_default()
    }
}

impl<'a> Node<'a> for Literal<'a> {
    const NAME: &'static str = "a literal";

    fn cast(syntax: SyntaxNode<'a>) -> Option<Self> {
        (syntax.kind() == LITERAL).then_some(Self(syntax))
    }

    fn syntax(self) -> SyntaxNode<'a> {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Item<'a> {
    Namespace(NamespaceDecl<'a>),
    Class(ClassDecl<'a>),
    Method(MethodDecl<'a>),
}

impl<'a> Item<'a> {
    pub fn into_namespace(self) -> Option<NamespaceDecl<'a>> {
        if let Self::Namespace(it) = self { Some(it) } else { None }
    }

    pub fn into_class(self) -> Option<ClassDecl<'a>> {
        if let Self::Class(it) = self { Some(it) } else { None }
    }

    pub fn into_method(self) -> Option<MethodDecl<'a>> {
        if let Self::Method(it) = self { Some(it) } else { None }
    }
}

impl<'a> Node<'a> for Item<'a> {
    const NAME: &'static str = "an item";

    fn cast(syntax: SyntaxNode<'a>) -> Option<Self> {
        match syntax.kind() {
            NAMESPACE_DECL => Self::Namespace(NamespaceDecl(syntax)).into(),
            CLASS_DECL => Self::Class(ClassDecl(syntax)).into(),
            METHOD_DECL => Self::Method(MethodDecl(syntax)).into(),
            _ => None,
        }
    }

    fn syntax(self) -> SyntaxNode<'a> {
        match self {
            Self::Namespace(it) => it.0,
            Self::Class(it) => it.0,
            Self::Method(it) => it.0,
        }
    }
}
