//! Public tree API: lifetime-guided node handles and lazy traversal.

use std::fmt::{self, Write as _};
use std::hash::{Hash, Hasher};

use crate::nodes::TreeData;
use crate::syntax_kind::SyntaxKind;

/// An immutable syntax tree handed over by a front end.
///
/// The tree owns all node storage; it is only navigated through
/// [`SyntaxNode`] handles borrowed from it.
pub struct SyntaxTree {
    pub(crate) data: TreeData,
}

impl SyntaxTree {
    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> SyntaxNode<'_> {
        SyntaxNode { tree: &self.data, index: 0 }
    }

    /// Returns the total number of nodes in the tree.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.data.nodes.len()
    }
}

impl fmt::Debug for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyntaxTree").field("node_count", &self.node_count()).finish_non_exhaustive()
    }
}

/// A node handle, two words wide and free to copy.
///
/// Two handles are equal when they designate the same node of the same tree.
#[derive(Clone, Copy)]
pub struct SyntaxNode<'a> {
    tree: &'a TreeData,
    index: u32,
}

impl PartialEq for SyntaxNode<'_> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.index == other.index
    }
}

impl Eq for SyntaxNode<'_> {}

impl Hash for SyntaxNode<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.tree, state);
        self.index.hash(state);
    }
}

impl fmt::Debug for SyntaxNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind())?;
        if let Some(payload) = self.payload() {
            write!(f, " {payload:?}")?;
        }
        Ok(())
    }
}

impl<'a> SyntaxNode<'a> {
    /// Returns the kind of this node.
    #[inline]
    pub fn kind(self) -> SyntaxKind {
        self.tree.node(self.index).kind
    }

    /// Returns the opaque payload text carried by this node, if any.
    #[inline]
    pub fn payload(self) -> Option<&'a str> {
        self.tree.payload_of(self.index)
    }

    /// Returns the parent node, or `None` if this is the root.
    #[inline]
    pub fn parent(self) -> Option<Self> {
        Some(Self { tree: self.tree, index: self.tree.parent_of(self.index)? })
    }

    /// Iterates the proper ancestors, from the parent up to the root.
    #[inline]
    pub fn ancestors(self) -> impl Iterator<Item = SyntaxNode<'a>> + Clone {
        std::iter::successors(self.parent(), |it| it.parent())
    }

    /// Iterates the immediate children, in source order.
    #[inline]
    pub fn children(self) -> Children<'a> {
        Children { tree: self.tree, indices: self.tree.children_of(self.index).iter() }
    }

    /// Returns a preorder walk over this subtree, with enter/leave events.
    #[inline]
    pub fn preorder(self) -> Preorder<'a> {
        Preorder::new(self)
    }

    /// Iterates this node and everything below it, in preorder.
    #[inline]
    pub fn descendants_with_self(self) -> Descendants<'a> {
        Descendants { preorder: self.preorder() }
    }

    /// Iterates everything below this node, in preorder.
    #[inline]
    pub fn descendants(self) -> Descendants<'a> {
        let mut descendants = self.descendants_with_self();
        descendants.next();
        descendants
    }

    /// Renders this subtree as an indented kind-and-payload listing.
    pub fn dump(self) -> String {
        let mut out = String::new();
        let mut depth = 0usize;

        for event in self.preorder() {
            match event {
                WalkEvent::Enter(node) => {
                    for _ in 0..depth {
                        out.push_str("  ");
                    }
                    match node.payload() {
                        Some(payload) => {
                            let _ = writeln!(out, "{:?} {payload:?}", node.kind());
                        }
                        None => {
                            let _ = writeln!(out, "{:?}", node.kind());
                        }
                    }
                    depth += 1;
                }
                WalkEvent::Leave(_) => depth -= 1,
            }
        }

        out
    }
}

/// Iterator over the immediate children of a node.
#[derive(Clone)]
pub struct Children<'a> {
    tree: &'a TreeData,
    indices: std::slice::Iter<'a, u32>,
}

impl<'a> Iterator for Children<'a> {
    type Item = SyntaxNode<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.indices.next().map(|&index| SyntaxNode { tree: self.tree, index })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }

    #[inline]
    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl DoubleEndedIterator for Children<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.indices.next_back().map(|&index| SyntaxNode { tree: self.tree, index })
    }
}

impl ExactSizeIterator for Children<'_> {
    #[inline]
    fn len(&self) -> usize {
        self.indices.len()
    }
}

/// One step of a preorder walk.
#[derive(Clone, Copy, Debug)]
pub enum WalkEvent<'a> {
    /// Fired before any node of the subtree under `SyntaxNode`.
    Enter(SyntaxNode<'a>),
    /// Fired after all nodes of the subtree under `SyntaxNode`.
    Leave(SyntaxNode<'a>),
}

/// Preorder walk over a subtree.
///
/// The walk is lazy: it holds a stack of partially iterated child lists and
/// never looks at nodes it has not reached yet.
#[derive(Clone)]
pub struct Preorder<'a> {
    stack: Vec<(SyntaxNode<'a>, Children<'a>)>,
    start: Option<SyntaxNode<'a>>,
}

impl<'a> Preorder<'a> {
    fn new(start: SyntaxNode<'a>) -> Self {
        Self { stack: Vec::with_capacity(128), start: Some(start) }
    }

    /// Skips the subtree the walk most recently entered.
    ///
    /// The skipped node's descendants are never visited and its `Leave`
    /// event is not fired; the walk resumes at the next sibling.
    pub fn skip_subtree(&mut self) {
        assert!(self.stack.pop().is_some(), "must have a subtree to skip");
    }
}

impl<'a> Iterator for Preorder<'a> {
    type Item = WalkEvent<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let Some((_, children)) = self.stack.last_mut() else {
            let start = self.start.take()?;
            self.stack.push((start, start.children()));
            return Some(WalkEvent::Enter(start));
        };

        match children.next() {
            Some(child) => {
                self.stack.push((child, child.children()));
                Some(WalkEvent::Enter(child))
            }
            None => {
                let (node, _) = self.stack.pop().expect("should have a node to leave");
                Some(WalkEvent::Leave(node))
            }
        }
    }
}

/// Lazy preorder iterator over nodes, without the leave events.
#[derive(Clone)]
pub struct Descendants<'a> {
    preorder: Preorder<'a>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = SyntaxNode<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.preorder.find_map(|event| match event {
            WalkEvent::Enter(node) => Some(node),
            WalkEvent::Leave(_) => None,
        })
    }
}
