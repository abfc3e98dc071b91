//! Flat storage backing one syntax tree.
//!
//! Nodes live in a single slice in preorder. Child links are runs inside one
//! shared index slice, payload text lives in one shared buffer, so a finished
//! tree is three allocations regardless of shape.

use crate::SyntaxKind;

pub(crate) const NO_PARENT: u32 = u32::MAX;
pub(crate) const NO_PAYLOAD: u32 = u32::MAX;

pub(crate) struct NodeData {
    pub(crate) kind: SyntaxKind,
    pub(crate) parent: u32,
    pub(crate) children_start: u32,
    pub(crate) children_len: u32,
    pub(crate) payload_start: u32,
    pub(crate) payload_len: u32,
}

pub(crate) struct TreeData {
    pub(crate) nodes: Box<[NodeData]>,
    pub(crate) children: Box<[u32]>,
    pub(crate) payload: Box<str>,
}

impl TreeData {
    #[inline]
    pub(crate) fn node(&self, index: u32) -> &NodeData {
        &self.nodes[index as usize]
    }

    #[inline]
    pub(crate) fn children_of(&self, index: u32) -> &[u32] {
        let node = self.node(index);
        let start = node.children_start as usize;
        &self.children[start..start + node.children_len as usize]
    }

    #[inline]
    pub(crate) fn parent_of(&self, index: u32) -> Option<u32> {
        let parent = self.node(index).parent;
        (parent != NO_PARENT).then_some(parent)
    }

    #[inline]
    pub(crate) fn payload_of(&self, index: u32) -> Option<&str> {
        let node = self.node(index);
        if node.payload_start == NO_PAYLOAD {
            return None;
        }
        let start = node.payload_start as usize;
        Some(&self.payload[start..start + node.payload_len as usize])
    }
}
