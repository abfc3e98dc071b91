//! Table-driven stand-in for a real semantic authority.
//!
//! The walkthroughs need something on the far side of the [`SemanticModel`]
//! boundary; this model resolves paths, path segments, and literals against
//! a fixed table of well-known namespaces and types.

use nuthatch_semantics::SemanticModel;
use nuthatch_tree::ast::{self, Node as _};
use nuthatch_tree::{SyntaxKind, SyntaxNode};

/// Opaque handle into the model's symbol table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol(u32);

#[derive(Clone, Copy, PartialEq, Eq)]
enum SymbolKind {
    Namespace,
    Type,
}

struct SymbolData {
    path: Box<str>,
    kind: SymbolKind,
    parent: Option<u32>,
}

/// Resolves nodes against a fixed table of namespaces and types.
pub struct TableModel {
    symbols: Vec<SymbolData>,
}

const NAMESPACES: &[&str] = &[
    "System",
    "System.Collections",
    "System.Collections.Generic",
    "System.Text",
    "HelloWorld",
];

const TYPES: &[&str] = &["System.String", "System.Int32"];

impl Default for TableModel {
    fn default() -> Self {
        Self::new()
    }
}

impl TableModel {
    pub fn new() -> Self {
        let mut model = Self { symbols: Vec::new() };
        for namespace in NAMESPACES {
            model.intern(namespace, SymbolKind::Namespace);
        }
        for ty in TYPES {
            model.intern(ty, SymbolKind::Type);
        }
        model
    }

    /// Human-readable description, e.g. `namespace System`.
    pub fn describe(&self, symbol: Symbol) -> String {
        let data = &self.symbols[symbol.0 as usize];
        match data.kind {
            SymbolKind::Namespace => format!("namespace {}", data.path),
            SymbolKind::Type => format!("type {}", data.path),
        }
    }

    /// Full dotted path of `symbol`.
    pub fn name(&self, symbol: Symbol) -> &str {
        &self.symbols[symbol.0 as usize].path
    }

    /// Last path segment of `symbol`.
    pub fn local_name(&self, symbol: Symbol) -> &str {
        let path = self.name(symbol);
        path.rsplit('.').next().unwrap_or(path)
    }

    /// Namespaces nested directly under `symbol`, in table order.
    pub fn namespace_members(&self, symbol: Symbol) -> impl Iterator<Item = Symbol> + '_ {
        self.symbols.iter().enumerate().filter_map(move |(index, data)| {
            (data.parent == Some(symbol.0) && data.kind == SymbolKind::Namespace)
                .then_some(Symbol(index as u32))
        })
    }

    /// The symbol `symbol` is declared in, if any.
    pub fn containing(&self, symbol: Symbol) -> Option<Symbol> {
        self.symbols[symbol.0 as usize].parent.map(Symbol)
    }

    fn intern(&mut self, path: &str, kind: SymbolKind) -> Symbol {
        if let Some(existing) = self.lookup(path) {
            return existing;
        }

        // Prefixes of a dotted path are namespaces of their own, so a
        // segment in the middle of a path has something to resolve to.
        let parent =
            path.rsplit_once('.').map(|(prefix, _)| self.intern(prefix, SymbolKind::Namespace).0);

        let index = self.symbols.len() as u32;
        self.symbols.push(SymbolData { path: path.into(), kind, parent });
        Symbol(index)
    }

    fn lookup(&self, path: &str) -> Option<Symbol> {
        let index = self.symbols.iter().position(|symbol| &*symbol.path == path)?;
        Some(Symbol(index as u32))
    }
}

impl<'t> SemanticModel<'t> for TableModel {
    type Symbol = Symbol;

    fn resolve(&self, node: SyntaxNode<'t>) -> Option<Symbol> {
        match node.kind() {
            SyntaxKind::PATH => {
                let path = ast::Path::cast(node)?;
                self.lookup(&path.dotted())
            }
            // A segment resolves to whatever the path up to and including it
            // names, the way `Collections` inside `System.Collections.Generic`
            // names the `System.Collections` namespace.
            SyntaxKind::NAME => {
                let path = ast::Path::cast(node.parent()?)?;
                let mut prefix = String::new();
                for segment in path.segments() {
                    if !prefix.is_empty() {
                        prefix.push('.');
                    }
                    prefix.push_str(segment.text());
                    if segment.syntax() == node {
                        return self.lookup(&prefix);
                    }
                }
                None
            }
            SyntaxKind::LITERAL => {
                let payload = node.payload()?;
                let ty = if payload.starts_with('"') { "System.String" } else { "System.Int32" };
                self.lookup(ty)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use nuthatch_tree::NodeIterator as _;

    use super::*;
    use crate::fixtures;

    #[test]
    fn paths_resolve_by_their_dotted_name() {
        let tree = fixtures::skills();
        let model = TableModel::new();

        // `Console.WriteLine` is absent from the table and drops out.
        let resolved: Vec<_> = tree
            .root()
            .descendants()
            .of_kind(SyntaxKind::PATH)
            .filter_map(|path| model.resolve(path))
            .map(|symbol| model.name(symbol).to_owned())
            .collect();
        assert_eq!(
            resolved,
            ["System", "System.Collections.Generic", "System.Text", "HelloWorld"]
        );
    }

    #[test]
    fn segments_resolve_to_their_prefix() {
        let tree = fixtures::skills();
        let model = TableModel::new();

        // The `Collections` segment of `using System.Collections.Generic`.
        let segment = tree
            .root()
            .descendants()
            .of_kind(SyntaxKind::NAME)
            .find(|name| name.payload() == Some("Collections"))
            .unwrap();

        let symbol = model.resolve(segment).unwrap();
        assert_eq!(model.name(symbol), "System.Collections");
        assert_eq!(model.local_name(symbol), "Collections");
        assert_eq!(model.containing(symbol).map(|parent| model.name(parent)), Some("System"));
    }

    #[test]
    fn string_literals_resolve_to_the_string_type() {
        let tree = fixtures::skills();
        let model = TableModel::new();

        let literal =
            tree.root().descendants().of_kind(SyntaxKind::LITERAL).single().unwrap();
        let symbol = model.resolve(literal).unwrap();
        assert_eq!(model.describe(symbol), "type System.String");
    }

    #[test]
    fn unknown_names_stay_unresolved() {
        let tree = fixtures::nested_usings();
        let model = TableModel::new();

        // `Microsoft` is not in the table.
        let microsoft = tree
            .root()
            .descendants()
            .of_kind(SyntaxKind::NAME)
            .find(|name| name.payload() == Some("Microsoft"))
            .unwrap();
        assert_eq!(model.resolve(microsoft), None);
    }

    #[test]
    fn members_are_namespaces_only() {
        let model = TableModel::new();
        let system = model.lookup("System").unwrap();

        let members: Vec<_> =
            model.namespace_members(system).map(|member| model.local_name(member)).collect();
        assert_eq!(members, ["Collections", "Text"]);
    }
}
