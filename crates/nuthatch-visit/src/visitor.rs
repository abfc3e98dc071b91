//! Kind-dispatched handlers over a preorder walk.

use nuthatch_tree::{SyntaxKind, SyntaxNode, SyntaxSet, WalkEvent};
use rustc_hash::FxHashMap;

/// Verdict a handler returns about the node it was called on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitControl {
    /// Keep walking into the children of the current node.
    #[default]
    Continue,
    /// Do not descend below the current node; its siblings are still visited.
    SkipSubtree,
    /// Abandon the walk entirely.
    Stop,
}

type Handler<'t, 'h> = Box<dyn FnMut(SyntaxNode<'t>) -> VisitControl + 'h>;

/// Drives a preorder walk, dispatching each entered node to the handler
/// registered for its kind.
///
/// Handlers never recurse themselves; descent is the visitor's job, steered
/// only through the returned [`VisitControl`]. Kinds without a handler fall
/// through to the [`Visitor::otherwise`] handler, or to a no-op.
pub struct Visitor<'t, 'h> {
    handlers: Vec<Handler<'t, 'h>>,
    by_kind: FxHashMap<SyntaxKind, usize>,
    fallback: Option<Handler<'t, 'h>>,
}

impl Default for Visitor<'_, '_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t, 'h> Visitor<'t, 'h> {
    pub fn new() -> Self {
        Self { handlers: Vec::new(), by_kind: FxHashMap::default(), fallback: None }
    }

    /// Registers `handler` for one kind, replacing any earlier registration.
    pub fn on<F>(&mut self, kind: SyntaxKind, handler: F)
    where
        F: FnMut(SyntaxNode<'t>) -> VisitControl + 'h,
    {
        self.on_kinds(SyntaxSet::new([kind]), handler);
    }

    /// Registers one `handler` for every kind in `kinds`.
    ///
    /// The handler is stored once; each kind dispatches to the same closure.
    pub fn on_kinds<F>(&mut self, kinds: SyntaxSet, handler: F)
    where
        F: FnMut(SyntaxNode<'t>) -> VisitControl + 'h,
    {
        let slot = self.handlers.len();
        self.handlers.push(Box::new(handler));
        for kind in kinds.iter() {
            self.by_kind.insert(kind, slot);
        }
    }

    /// Registers the handler for kinds without a registration of their own.
    pub fn otherwise<F>(&mut self, handler: F)
    where
        F: FnMut(SyntaxNode<'t>) -> VisitControl + 'h,
    {
        self.fallback = Some(Box::new(handler));
    }

    /// Walks the subtree under `root` in preorder, dispatching every node.
    pub fn visit(&mut self, root: SyntaxNode<'t>) {
        let mut preorder = root.preorder();
        while let Some(event) = preorder.next() {
            let WalkEvent::Enter(node) = event else { continue };
            match self.dispatch(node) {
                VisitControl::Continue => {}
                VisitControl::SkipSubtree => preorder.skip_subtree(),
                VisitControl::Stop => return,
            }
        }
    }

    fn dispatch(&mut self, node: SyntaxNode<'t>) -> VisitControl {
        let handler = match self.by_kind.get(&node.kind()) {
            Some(&slot) => &mut self.handlers[slot],
            None => match &mut self.fallback {
                Some(fallback) => fallback,
                None => return VisitControl::Continue,
            },
        };
        handler(node)
    }
}

#[cfg(test)]
mod tests {
    use nuthatch_tree::SyntaxKind::*;
    use nuthatch_tree::{Builder, SyntaxTree};

    use super::*;

    fn two_namespaces() -> SyntaxTree {
        let mut builder = Builder::new();
        builder.start_node(SOURCE_FILE);

        builder.start_node(NAMESPACE_DECL);
        builder.start_node(PATH);
        builder.leaf(NAME, "First");
        builder.finish_node();
        builder.start_node(CLASS_DECL);
        builder.leaf(NAME, "Inner");
        builder.finish_node();
        builder.finish_node();

        builder.start_node(NAMESPACE_DECL);
        builder.start_node(PATH);
        builder.leaf(NAME, "Second");
        builder.finish_node();
        builder.start_node(CLASS_DECL);
        builder.leaf(NAME, "Keep");
        builder.finish_node();
        builder.finish_node();

        builder.finish_node();
        builder.finish()
    }

    #[test]
    fn descent_continues_below_handled_nodes() {
        let tree = two_namespaces();

        let mut namespaces = 0;
        let mut classes = 0;
        let mut visitor = Visitor::new();
        visitor.on(NAMESPACE_DECL, |_| {
            namespaces += 1;
            VisitControl::Continue
        });
        visitor.on(CLASS_DECL, |_| {
            classes += 1;
            VisitControl::Continue
        });
        visitor.visit(tree.root());
        drop(visitor);

        // The classes sit inside handled namespace subtrees.
        assert_eq!(namespaces, 2);
        assert_eq!(classes, 2);
    }

    #[test]
    fn skip_subtree_suppresses_one_branch() {
        let tree = two_namespaces();

        let mut names = Vec::new();
        let mut visitor = Visitor::new();
        visitor.on(NAMESPACE_DECL, |node| {
            let first = node
                .children()
                .next()
                .and_then(|path| path.children().next())
                .and_then(|name| name.payload());
            if first == Some("First") { VisitControl::SkipSubtree } else { VisitControl::Continue }
        });
        visitor.on(CLASS_DECL, |node| {
            names.extend(node.children().next().and_then(|name| name.payload()));
            VisitControl::Continue
        });
        visitor.visit(tree.root());
        drop(visitor);

        assert_eq!(names, ["Keep"]);
    }

    #[test]
    fn stop_abandons_the_walk() {
        let tree = two_namespaces();

        let mut dispatched = 0;
        let mut visitor = Visitor::new();
        visitor.on(CLASS_DECL, |_| VisitControl::Stop);
        visitor.otherwise(|_| {
            dispatched += 1;
            VisitControl::Continue
        });
        visitor.visit(tree.root());
        drop(visitor);

        // SOURCE_FILE, NAMESPACE_DECL, PATH, NAME fall through before the
        // first class stops the walk.
        assert_eq!(dispatched, 4);
    }

    #[test]
    fn the_fallback_sees_unregistered_kinds() {
        let tree = two_namespaces();

        let mut handled = 0;
        let mut fell_through = 0;
        let mut visitor = Visitor::new();
        visitor.on_kinds(SyntaxSet::new([NAMESPACE_DECL, CLASS_DECL]), |_| {
            handled += 1;
            VisitControl::Continue
        });
        visitor.otherwise(|_| {
            fell_through += 1;
            VisitControl::Continue
        });
        visitor.visit(tree.root());
        drop(visitor);

        assert_eq!(handled, 4);
        assert_eq!(handled + fell_through, tree.node_count());
    }

    #[test]
    fn later_registrations_replace_earlier_ones() {
        let tree = two_namespaces();

        let mut first = 0;
        let mut second = 0;
        let mut visitor = Visitor::new();
        visitor.on(CLASS_DECL, |_| {
            first += 1;
            VisitControl::Continue
        });
        visitor.on(CLASS_DECL, |_| {
            second += 1;
            VisitControl::Continue
        });
        visitor.visit(tree.root());
        drop(visitor);

        assert_eq!(first, 0);
        assert_eq!(second, 2);
    }
}
