//! Guided tours over the fixture trees.
//!
//! Each function exercises one slice of the API on a fixture and narrates
//! what it finds into a plain-text report.

use std::fmt::Write as _;

use nuthatch_semantics::SemanticModel as _;
use nuthatch_tree::ast::{self, Node as _};
use nuthatch_tree::{NodeIterator as _, QueryError, SyntaxKind};
use nuthatch_visit::Collector;

use crate::fixtures;
use crate::model::TableModel;

/// Walks [`fixtures::hello_world`] top-down with the typed wrappers.
pub fn syntax() -> Result<String, QueryError> {
    let tree = fixtures::hello_world();
    let mut report = String::new();

    let file = ast::SourceFile::try_cast(tree.root())?;
    let _ = writeln!(report, "root: {:?}", file.syntax());
    let _ = writeln!(report, "using directives: {}", file.usings().count());

    let first_item = file.items().next().ok_or(QueryError::NotFound)?;
    let namespace = ast::NamespaceDecl::try_cast(first_item.syntax())?;
    let _ = writeln!(
        report,
        "namespace: `{}`",
        namespace.name().map_or_else(String::new, |name| name.dotted()),
    );

    let class = namespace.items().find_map(ast::Item::into_class).ok_or(QueryError::NotFound)?;
    let _ = writeln!(report, "class: `{}`", class.name().map_or("", |name| name.text()));

    let method = class.methods().next().ok_or(QueryError::NotFound)?;
    let _ = writeln!(
        report,
        "method: `{}`, returning `{}`",
        method.name().map_or("", |name| name.text()),
        method.return_ty().map_or("", |ty| ty.text()),
    );

    let param =
        method.param_list().and_then(|list| list.params().next()).ok_or(QueryError::NotFound)?;
    let _ = writeln!(
        report,
        "parameter: `{}` of type `{}`",
        param.name().map_or("", |name| name.text()),
        param.ty().map_or("", |ty| ty.text()),
    );

    let body = method.body().ok_or(QueryError::NotFound)?;
    let _ = writeln!(report, "statements in the body: {}", body.syntax().children().len());

    Ok(report)
}

/// Finds the `args` parameter twice, by query and by manual navigation, and
/// checks that both land on the same node.
pub fn query() -> Result<String, QueryError> {
    let tree = fixtures::hello_world();
    let mut report = String::new();

    let by_query = tree
        .root()
        .descendants()
        .of_kind(SyntaxKind::METHOD_DECL)
        .filter_map(ast::MethodDecl::cast)
        .filter(|method| method.name().is_some_and(|name| name.text() == "Main"))
        .filter_map(|method| method.param_list()?.params().next())
        .map(|param| param.syntax())
        .single()?;

    let param = ast::Param::try_cast(by_query)?;
    let _ = writeln!(
        report,
        "parameter found by query: `{}` of type `{}`",
        param.name().map_or("", |name| name.text()),
        param.ty().map_or("", |ty| ty.text()),
    );

    let by_hand = ast::SourceFile::try_cast(tree.root())?
        .items()
        .find_map(ast::Item::into_namespace)
        .and_then(|namespace| namespace.items().find_map(ast::Item::into_class))
        .and_then(|class| class.methods().next())
        .and_then(|method| method.param_list())
        .and_then(|list| list.params().next())
        .ok_or(QueryError::NotFound)?;

    let _ =
        writeln!(report, "query and manual navigation agree: {}", by_hand.syntax() == by_query);

    Ok(report)
}

/// Collects every using directive of [`fixtures::nested_usings`] that names
/// something outside the `System` namespace, however deeply nested.
pub fn usings() -> String {
    let tree = fixtures::nested_usings();
    let mut report = String::new();

    let mut collector = Collector::of_kind(SyntaxKind::USING_DIRECTIVE, |node| {
        let Some(name) = ast::UsingDirective::cast(node).and_then(|using| using.name()) else {
            return false;
        };
        let dotted = name.dotted();
        dotted != "System" && !dotted.starts_with("System.")
    });
    collector.run(tree.root());

    let _ = writeln!(report, "using directives outside the `System` namespace:");
    for &node in collector.matches() {
        if let Some(name) = ast::UsingDirective::cast(node).and_then(|using| using.name()) {
            let _ = writeln!(report, "  using {};", name.dotted());
        }
    }
    report
}

/// Resolves names and literals of [`fixtures::skills`] against the table
/// model and compares what they bind to.
pub fn bind() -> Result<String, QueryError> {
    let tree = fixtures::skills();
    let model = TableModel::new();
    let mut report = String::new();

    let file = ast::SourceFile::try_cast(tree.root())?;
    let first_name =
        file.usings().next().and_then(|using| using.name()).ok_or(QueryError::NotFound)?;
    let system = model.resolve_required(first_name.syntax())?;
    let _ = writeln!(report, "the first using binds to: {}", model.describe(system));

    let members: Vec<_> =
        model.namespace_members(system).map(|member| model.local_name(member)).collect();
    let _ = writeln!(report, "members of `{}`: {}", model.name(system), members.join(", "));

    let literal = tree.root().descendants().of_kind(SyntaxKind::LITERAL).single()?;
    let literal_ty = model.resolve_required(literal)?;
    let _ = writeln!(report, "the greeting literal has type `{}`", model.name(literal_ty));

    let segment = file
        .usings()
        .skip(1)
        .filter_map(|using| using.name())
        .flat_map(|name| name.segments())
        .find(|segment| segment.text() == "System")
        .ok_or(QueryError::NotFound)?;
    let _ = writeln!(
        report,
        "`System` in a later using names the same symbol: {}",
        model.same_resolution(first_name.syntax(), segment.syntax()),
    );

    let _ = writeln!(
        report,
        "`{}` is declared inside `{}`: {}",
        model.name(literal_ty),
        model.name(system),
        model.containing(literal_ty) == Some(system),
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use expect_test::expect;
    use nuthatch_tree::{Builder, NodeIterator as _};

    use super::*;

    #[test]
    fn the_tree_walk_narrates_every_level() {
        expect![[r#"
            root: SOURCE_FILE
            using directives: 4
            namespace: `HelloWorld`
            class: `Program`
            method: `Main`, returning `void`
            parameter: `args` of type `string[]`
            statements in the body: 1
        "#]]
        .assert_eq(&syntax().unwrap());
    }

    #[test]
    fn the_query_and_the_manual_walk_agree() {
        expect![[r#"
            parameter found by query: `args` of type `string[]`
            query and manual navigation agree: true
        "#]]
        .assert_eq(&query().unwrap());
    }

    #[test]
    fn foreign_usings_are_reported_in_document_order() {
        expect![[r#"
            using directives outside the `System` namespace:
              using Microsoft.CodeAnalysis;
              using Microsoft.CodeAnalysis.CSharp;
              using Microsoft;
              using Microsoft.Win32;
              using Microsoft.CSharp;
        "#]]
        .assert_eq(&usings());
    }

    #[test]
    fn binding_resolves_usings_and_literals() {
        expect![[r#"
            the first using binds to: namespace System
            members of `System`: Collections, Text
            the greeting literal has type `System.String`
            `System` in a later using names the same symbol: true
            `System.String` is declared inside `System`: true
        "#]]
        .assert_eq(&bind().unwrap());
    }

    #[test]
    fn a_methodless_tree_turns_the_query_into_not_found() {
        let mut builder = Builder::new();
        builder.start_node(SyntaxKind::SOURCE_FILE);
        builder.start_node(SyntaxKind::CLASS_DECL);
        builder.leaf(SyntaxKind::NAME, "Empty");
        builder.finish_node();
        builder.finish_node();
        let tree = builder.finish();

        let err =
            tree.root().descendants().of_kind(SyntaxKind::METHOD_DECL).single().unwrap_err();
        assert_eq!(err, QueryError::NotFound);
    }
}
