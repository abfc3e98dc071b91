//! Incremental builder for the tree.

use crate::SyntaxTree;
use crate::nodes::{NO_PARENT, NO_PAYLOAD, NodeData, TreeData};
use crate::syntax_kind::SyntaxKind;

const DEFAULT_TREE_DEPTH: usize = 128;
const DEFAULT_TREE_SIZE: usize = 1024;

struct PendingNode {
    kind: SyntaxKind,
    parent: Option<usize>,
    children: Vec<usize>,
    payload: Option<(u32, u32)>,
}

/// Builds a [`SyntaxTree`] from front-end events.
///
/// Misuse panics: interior nodes must be balanced with `finish_node`, the
/// tree must end up with exactly one root, and the builder must be consumed
/// by [`Builder::finish`].
pub struct Builder {
    nodes: Vec<PendingNode>,
    payload: String,
    opened: Vec<usize>,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Builder {
    fn drop(&mut self) {
        if !std::thread::panicking() && !self.opened.is_empty() {
            panic!("you should call `Builder::finish()`");
        }
    }
}

impl Builder {
    pub fn new() -> Self {
        Self {
            nodes: Vec::with_capacity(DEFAULT_TREE_SIZE),
            payload: String::new(),
            opened: Vec::with_capacity(DEFAULT_TREE_DEPTH),
        }
    }

    /// Opens an interior node of the given kind.
    pub fn start_node(&mut self, kind: SyntaxKind) {
        let index = self.push_node(kind, None);
        self.opened.push(index);
    }

    /// Closes the most recently opened node.
    pub fn finish_node(&mut self) {
        self.opened.pop().expect("no node to finish");
    }

    /// Adds a childless node carrying `payload` under the open node.
    pub fn leaf(&mut self, kind: SyntaxKind, payload: &str) {
        let start = self.payload.len().try_into().unwrap();
        self.payload.push_str(payload);
        let len = payload.len().try_into().unwrap();
        self.push_node(kind, Some((start, len)));
    }

    /// Completes the tree, flattening it into its final storage.
    pub fn finish(mut self) -> SyntaxTree {
        assert!(self.opened.is_empty(), "unfinished nodes: call `finish_node` first");
        assert!(!self.nodes.is_empty(), "cannot finish an empty tree");

        let nodes = std::mem::take(&mut self.nodes);
        let payload = std::mem::take(&mut self.payload);

        let mut records = Vec::with_capacity(nodes.len());
        let mut children = Vec::with_capacity(nodes.len() - 1);
        for node in &nodes {
            let children_start = children.len().try_into().unwrap();
            children.extend(node.children.iter().map(|&child| u32::try_from(child).unwrap()));
            let (payload_start, payload_len) = node.payload.unwrap_or((NO_PAYLOAD, 0));
            records.push(NodeData {
                kind: node.kind,
                parent: node.parent.map_or(NO_PARENT, |parent| u32::try_from(parent).unwrap()),
                children_start,
                children_len: node.children.len().try_into().unwrap(),
                payload_start,
                payload_len,
            });
        }

        SyntaxTree {
            data: TreeData {
                nodes: records.into_boxed_slice(),
                children: children.into_boxed_slice(),
                payload: payload.into_boxed_str(),
            },
        }
    }

    fn push_node(&mut self, kind: SyntaxKind, payload: Option<(u32, u32)>) -> usize {
        let parent = self.opened.last().copied();
        if parent.is_none() && !self.nodes.is_empty() {
            panic!("the tree already has a root");
        }

        let index = self.nodes.len();
        self.nodes.push(PendingNode { kind, parent, children: Vec::new(), payload });
        if let Some(parent) = parent {
            self.nodes[parent].children.push(index);
        }
        index
    }
}
