//! Hand-built trees standing in for a front end.
//!
//! Parsing is out of scope here, so each fixture drives [`Builder`] with the
//! shape its source snippet would parse to. Literal payloads keep their
//! quotes, the way a lossless parse would.

use nuthatch_tree::SyntaxKind::*;
use nuthatch_tree::{Builder, SyntaxTree};

/// A program with one class whose `Main(string[] args)` prints a greeting.
pub fn hello_world() -> SyntaxTree {
    let mut builder = Builder::new();
    builder.start_node(SOURCE_FILE);
    using(&mut builder, "System");
    using(&mut builder, "System.Collections");
    using(&mut builder, "System.Linq");
    using(&mut builder, "System.Text");

    builder.start_node(NAMESPACE_DECL);
    path(&mut builder, "HelloWorld");
    class_with_main(&mut builder, "Program", "\"Hello, World!\"");
    builder.finish_node();

    builder.finish_node();
    builder.finish()
}

/// The same program shape with the usings and the message of the binding
/// walkthrough.
pub fn skills() -> SyntaxTree {
    let mut builder = Builder::new();
    builder.start_node(SOURCE_FILE);
    using(&mut builder, "System");
    using(&mut builder, "System.Collections.Generic");
    using(&mut builder, "System.Text");

    builder.start_node(NAMESPACE_DECL);
    path(&mut builder, "HelloWorld");
    class_with_main(&mut builder, "Program", "\"I have a particular set of skills!\"");
    builder.finish_node();

    builder.finish_node();
    builder.finish()
}

/// Two namespaces nested under a third, every level carrying its own using
/// directives.
pub fn nested_usings() -> SyntaxTree {
    let mut builder = Builder::new();
    builder.start_node(SOURCE_FILE);
    using(&mut builder, "System");
    using(&mut builder, "System.Collections.Generic");
    using(&mut builder, "System.Linq");
    using(&mut builder, "System.Text");
    using(&mut builder, "Microsoft.CodeAnalysis");
    using(&mut builder, "Microsoft.CodeAnalysis.CSharp");

    builder.start_node(NAMESPACE_DECL);
    path(&mut builder, "TopLevel");
    using(&mut builder, "Microsoft");
    using(&mut builder, "System.ComponentModel");

    builder.start_node(NAMESPACE_DECL);
    path(&mut builder, "Child1");
    using(&mut builder, "Microsoft.Win32");
    using(&mut builder, "System.Runtime.InteropServices");
    empty_class(&mut builder, "Foo");
    builder.finish_node();

    builder.start_node(NAMESPACE_DECL);
    path(&mut builder, "Child2");
    using(&mut builder, "System.CodeDom");
    using(&mut builder, "Microsoft.CSharp");
    empty_class(&mut builder, "Bar");
    builder.finish_node();

    builder.finish_node();
    builder.finish_node();
    builder.finish()
}

fn using(builder: &mut Builder, name: &str) {
    builder.start_node(USING_DIRECTIVE);
    path(builder, name);
    builder.finish_node();
}

fn path(builder: &mut Builder, dotted: &str) {
    builder.start_node(PATH);
    for segment in dotted.split('.') {
        builder.leaf(NAME, segment);
    }
    builder.finish_node();
}

fn empty_class(builder: &mut Builder, name: &str) {
    builder.start_node(CLASS_DECL);
    builder.leaf(NAME, name);
    builder.finish_node();
}

fn class_with_main(builder: &mut Builder, name: &str, message: &str) {
    builder.start_node(CLASS_DECL);
    builder.leaf(NAME, name);

    builder.start_node(METHOD_DECL);
    builder.leaf(TYPE_REF, "void");
    builder.leaf(NAME, "Main");

    builder.start_node(PARAM_LIST);
    builder.start_node(PARAM);
    builder.leaf(TYPE_REF, "string[]");
    builder.leaf(NAME, "args");
    builder.finish_node();
    builder.finish_node();

    builder.start_node(BLOCK);
    builder.start_node(CALL_EXPR);
    path(builder, "Console.WriteLine");
    builder.start_node(ARG_LIST);
    builder.leaf(LITERAL, message);
    builder.finish_node();
    builder.finish_node();
    builder.finish_node();

    builder.finish_node();
    builder.finish_node();
}

#[cfg(test)]
mod tests {
    use expect_test::expect;
    use nuthatch_tree::NodeIterator as _;

    use super::*;

    #[test]
    fn hello_world_has_the_expected_shape() {
        let tree = hello_world();

        expect![[r#"
            SOURCE_FILE
              USING_DIRECTIVE
                PATH
                  NAME "System"
              USING_DIRECTIVE
                PATH
                  NAME "System"
                  NAME "Collections"
              USING_DIRECTIVE
                PATH
                  NAME "System"
                  NAME "Linq"
              USING_DIRECTIVE
                PATH
                  NAME "System"
                  NAME "Text"
              NAMESPACE_DECL
                PATH
                  NAME "HelloWorld"
                CLASS_DECL
                  NAME "Program"
                  METHOD_DECL
                    TYPE_REF "void"
                    NAME "Main"
                    PARAM_LIST
                      PARAM
                        TYPE_REF "string[]"
                        NAME "args"
                    BLOCK
                      CALL_EXPR
                        PATH
                          NAME "Console"
                          NAME "WriteLine"
                        ARG_LIST
                          LITERAL "\"Hello, World!\""
        "#]]
        .assert_eq(&tree.root().dump());
    }

    #[test]
    fn nested_usings_spread_across_levels() {
        let tree = nested_usings();
        let root = tree.root();

        assert_eq!(root.descendants().of_kind(USING_DIRECTIVE).count(), 12);
        assert_eq!(root.descendants().of_kind(NAMESPACE_DECL).count(), 3);
        assert_eq!(root.children().of_kind(USING_DIRECTIVE).count(), 6);
        assert_eq!(root.descendants().of_kind(CLASS_DECL).count(), 2);
    }

    #[test]
    fn skills_carries_its_message() {
        let tree = skills();
        let literal = tree.root().descendants().of_kind(LITERAL).single().unwrap();
        assert_eq!(literal.payload(), Some("\"I have a particular set of skills!\""));
    }
}
