//! Ordered node views with negative indexing and representative proxying.
//!
//! A [`NodeList`] is a read-only, ordered view over zero or more nodes. It
//! either mirrors a live child list (so later structural changes show
//! through) or carries a fixed membership (query results, duplicate/repeat
//! output). There is no mutation surface on the list itself (no index
//! assignment exists), so "immutable collection" holds at compile time;
//! mutation happens only through operations on the nodes it yields.
//!
//! Every single-node operation is proxied to a representative element:
//! the first for everything except `after`, which acts on the last. An
//! ordered multi-node selection behaves like a contiguous run: inserting
//! "before" it prepends at the run's head, while inserting "after" it
//! appends at the run's tail.

use std::fmt;

use crate::document::{Document, ImportValue};
use crate::error::{Error, Result};
use crate::node::Node;
use crate::tree;

/// Ordered, read-only view over zero or more nodes.
#[derive(Debug, Clone)]
pub struct NodeList {
    source: Source,
}

#[derive(Debug, Clone)]
enum Source {
    /// Live view over a parent's child list; membership is re-read on
    /// every access.
    Children(Node),
    /// Fixed membership in document order.
    Nodes(Vec<Node>),
}

impl NodeList {
    pub(crate) fn children_of(parent: Node) -> Self {
        Self {
            source: Source::Children(parent),
        }
    }

    pub(crate) fn from_nodes(nodes: Vec<Node>) -> Self {
        Self {
            source: Source::Nodes(nodes),
        }
    }

    /// Current membership, in document order.
    #[must_use]
    pub fn nodes(&self) -> Vec<Node> {
        match &self.source {
            Source::Children(parent) => {
                let doc = parent.document();
                tree::children(&parent.node_ref())
                    .iter()
                    .map(|child| Node::from_ref(&doc, child))
                    .collect()
            }
            Source::Nodes(nodes) => nodes.clone(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match &self.source {
            Source::Children(parent) => tree::children(&parent.node_ref()).len(),
            Source::Nodes(nodes) => nodes.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Map `index` onto `[0, len)`: negative indices count from the end.
    fn resolve(index: isize, len: usize) -> Option<usize> {
        let len = isize::try_from(len).ok()?;
        let resolved = if index < 0 { len.checked_add(index)? } else { index };
        usize::try_from(resolved).ok().filter(|&position| position < len.unsigned_abs())
    }

    /// The node at `index`, or `None` when the resolved index is out of
    /// bounds.
    #[must_use]
    pub fn get(&self, index: isize) -> Option<Node> {
        let nodes = self.nodes();
        let position = Self::resolve(index, nodes.len())?;
        nodes.into_iter().nth(position)
    }

    /// Whether `index` resolves inside the current bounds.
    #[must_use]
    pub fn has(&self, index: isize) -> bool {
        Self::resolve(index, self.len()).is_some()
    }

    /// The node at `index`, failing with [`Error::IndexOutOfBounds`]
    /// instead of returning `None`.
    pub fn at(&self, index: isize) -> Result<Node> {
        self.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: self.len(),
        })
    }

    /// Snapshot iterator over the current membership.
    pub fn iter(&self) -> std::vec::IntoIter<Node> {
        self.nodes().into_iter()
    }

    // === Proxy operations ===
    //
    // Each delegates to exactly one representative node after an explicit
    // emptiness check, so an empty list always signals EmptyList naming the
    // attempted method, never a bare out-of-bounds.

    fn first(&self, method: &'static str) -> Result<Node> {
        if let Some(node) = self.get(0) {
            Ok(node)
        } else {
            Err(Error::EmptyList { method })
        }
    }

    fn last(&self, method: &'static str) -> Result<Node> {
        if let Some(node) = self.get(-1) {
            Ok(node)
        } else {
            Err(Error::EmptyList { method })
        }
    }

    /// The owning document of the first node.
    pub fn document(&self) -> Result<Document> {
        Ok(self.first("document")?.document())
    }

    /// Import `value` into the first node's document.
    pub fn import(&self, value: impl Into<ImportValue>) -> Result<Node> {
        self.first("import")?.import(value)
    }

    /// Decoded text content of the first node.
    pub fn content(&self) -> Result<Option<String>> {
        Ok(self.first("content")?.content())
    }

    /// Set the first node's content. See [`Node::set_content`].
    pub fn set_content(&self, value: impl fmt::Display) -> Result<Node> {
        self.first("set_content")?.set_content(value)
    }

    /// Insert `value` immediately before the first node.
    pub fn before(&self, value: impl Into<ImportValue>) -> Result<Node> {
        self.first("before")?.before(value)
    }

    /// Append `value` inside the first node.
    pub fn append(&self, value: impl Into<ImportValue>) -> Result<Node> {
        self.first("append")?.append(value)
    }

    /// Prepend `value` inside the first node.
    pub fn prepend(&self, value: impl Into<ImportValue>) -> Result<Node> {
        self.first("prepend")?.prepend(value)
    }

    /// Replace the first node with `value`.
    pub fn replace(&self, value: impl Into<ImportValue>) -> Result<Node> {
        self.first("replace")?.replace(value)
    }

    /// Insert `value` immediately after the **last** node: "after" on a
    /// multi-node selection means after the whole run.
    pub fn after(&self, value: impl Into<ImportValue>) -> Result<Node> {
        self.last("after")?.after(value)
    }

    /// Build a detached fragment containing deep clones of every node in
    /// the list, in order, for inserting the whole selection elsewhere as
    /// one unit.
    pub fn importable_node(&self) -> Result<Node> {
        let document = self.document()?;
        document.create_importable_fragment(self)
    }
}

impl IntoIterator for &NodeList {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes().into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_maps_negative_indices() {
        assert_eq!(NodeList::resolve(0, 3), Some(0));
        assert_eq!(NodeList::resolve(2, 3), Some(2));
        assert_eq!(NodeList::resolve(-1, 3), Some(2));
        assert_eq!(NodeList::resolve(-3, 3), Some(0));
        assert_eq!(NodeList::resolve(3, 3), None);
        assert_eq!(NodeList::resolve(-4, 3), None);
        assert_eq!(NodeList::resolve(0, 0), None);
        assert_eq!(NodeList::resolve(-1, 0), None);
    }
}
