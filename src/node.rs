//! Node handles and structural mutation primitives.
//!
//! A [`Node`] is a typed handle into a [`Document`]'s tree: the underlying
//! node reference, a kind tag, and the owning document. Handles are cheap to
//! clone and compare by identity (same document, same underlying node).
//!
//! Structural edits accept any value [`Document::import`] can coerce, so a
//! caller may pass markup-bearing nodes, nodes from other documents, or
//! plain scalars interchangeably. Fragment nodes splice their children at
//! the insertion point instead of being inserted themselves.

use std::fmt;

use dom_query::{NodeId, NodeRef};
use tendril::StrTendril;

use crate::document::{Document, ImportValue};
use crate::error::{Error, Result};
use crate::list::NodeList;
use crate::tree;

/// The kind tag carried by every node handle.
///
/// Operations that need a capability the kind lacks fail with
/// [`Error::KindMismatch`] at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// The root container of a document.
    Document,
    /// A detached container whose children splice on insertion.
    Fragment,
    Element,
    Text,
    Comment,
    /// Anything else the underlying tree can hold (doctype, processing
    /// instruction).
    Other,
}

impl NodeKind {
    /// Whether this kind may hold children.
    #[must_use]
    pub fn is_parent(self) -> bool {
        matches!(self, Self::Document | Self::Fragment | Self::Element)
    }

    /// Whether this kind may occupy a position under a parent.
    #[must_use]
    pub fn is_child(self) -> bool {
        matches!(self, Self::Element | Self::Text | Self::Comment)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Document => "document",
            Self::Fragment => "fragment",
            Self::Element => "element",
            Self::Text => "text",
            Self::Comment => "comment",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

/// Handle to one node within a [`Document`].
#[derive(Clone)]
pub struct Node {
    doc: Document,
    id: NodeId,
    kind: NodeKind,
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.doc == other.doc && self.id == other.id
    }
}

impl Eq for Node {}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .finish()
    }
}

impl Node {
    pub(crate) fn new(doc: Document, id: NodeId, kind: NodeKind) -> Self {
        Self { doc, id, kind }
    }

    pub(crate) fn from_ref(doc: &Document, node: &NodeRef) -> Self {
        Self {
            doc: doc.clone(),
            id: node.id,
            kind: tree::kind(node),
        }
    }

    /// Resolve the handle against the live tree.
    pub(crate) fn node_ref(&self) -> NodeRef<'_> {
        match tree::get(self.doc.dom(), self.id) {
            Some(node) => node,
            // Ids are arena indices; the tree never frees them.
            None => unreachable!("node handle points into its own document's tree"),
        }
    }

    /// The document this node belongs to.
    #[must_use]
    pub fn document(&self) -> Document {
        self.doc.clone()
    }

    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    // === Navigation ===

    #[must_use]
    pub fn parent(&self) -> Option<Node> {
        self.node_ref().parent().map(|node| Node::from_ref(&self.doc, &node))
    }

    #[must_use]
    pub fn next_sibling(&self) -> Option<Node> {
        self.node_ref()
            .next_sibling()
            .map(|node| Node::from_ref(&self.doc, &node))
    }

    #[must_use]
    pub fn prev_sibling(&self) -> Option<Node> {
        self.node_ref()
            .prev_sibling()
            .map(|node| Node::from_ref(&self.doc, &node))
    }

    /// Live view over this node's direct children, in document order.
    ///
    /// The view re-reads the child list on every access, so structural
    /// changes made after construction are visible through it.
    #[must_use]
    pub fn children(&self) -> NodeList {
        NodeList::children_of(self.clone())
    }

    /// Unlink this node from its parent. A no-op for detached nodes.
    pub fn detach(&self) {
        self.node_ref().remove_from_parent();
    }

    /// Nodes under this one matching a CSS selector, in document order.
    /// Selector matching is the underlying tree library's contract.
    #[must_use]
    pub fn query(&self, css: &str) -> NodeList {
        let node = self.node_ref();
        let nodes = tree::select(&node, css)
            .iter()
            .map(|found| Node::from_ref(&self.doc, found))
            .collect();
        NodeList::from_nodes(nodes)
    }

    // === Content ===

    /// Decoded text content, or `None` when the node has none.
    #[must_use]
    pub fn content(&self) -> Option<String> {
        let text = tree::text(&self.node_ref());
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }

    /// Replace this node's content with the display form of `value`.
    ///
    /// Parent kinds drop all children and gain a single text node; the
    /// serializer entity-escapes it on output. Text and comment nodes carry
    /// their content directly, so they are swapped for a fresh text node at
    /// the same position, which is returned in place of `self`.
    pub fn set_content(&self, value: impl fmt::Display) -> Result<Node> {
        let text = value.to_string();
        if self.kind.is_parent() {
            let node = self.node_ref();
            tree::remove_children(&node);
            let text_node = self.doc.create_text(&text);
            tree::append(&node, &text_node.node_ref());
            Ok(self.clone())
        } else if matches!(self.kind, NodeKind::Text | NodeKind::Comment) {
            let replacement = self.doc.create_text(&text);
            if self.parent().is_some() {
                tree::insert_before(&self.node_ref(), &replacement.node_ref());
                self.node_ref().remove_from_parent();
            }
            Ok(replacement)
        } else {
            Err(Error::KindMismatch {
                operation: "set_content",
                kind: self.kind,
            })
        }
    }

    /// Serialized (entity-escaped) content, byte-for-byte as it would be
    /// written out: inner markup for parent kinds, the node's own serialized
    /// form for leaves.
    #[must_use]
    pub fn raw_content(&self) -> StrTendril {
        let node = self.node_ref();
        if self.kind.is_parent() {
            tree::inner_html(&node)
        } else {
            tree::outer_html(&node)
        }
    }

    /// Replace this node's children with the parse of already-serialized
    /// markup, without re-encoding it.
    pub fn set_raw_content(&self, markup: &str) -> Result<Node> {
        if !self.kind.is_parent() {
            return Err(Error::KindMismatch {
                operation: "set_raw_content",
                kind: self.kind,
            });
        }
        tree::set_inner_html(&self.node_ref(), markup);
        Ok(self.clone())
    }

    // === Import ===

    /// Coerce `value` into a node owned by this node's document.
    /// See [`Document::import`].
    pub fn import(&self, value: impl Into<ImportValue>) -> Result<Node> {
        self.doc.import(value)
    }

    // === Structural edits ===

    /// Insert `value` immediately after this node. Returns the inserted node.
    pub fn after(&self, value: impl Into<ImportValue>) -> Result<Node> {
        self.require_parented("after")?;
        let node = self.doc.import(value)?;
        let mut anchor = self.clone();
        for unit in Self::insertion_units("after", &node)? {
            tree::insert_after(&anchor.node_ref(), &unit.node_ref());
            anchor = unit;
        }
        Ok(node)
    }

    /// Insert `value` immediately before this node. Returns the inserted node.
    pub fn before(&self, value: impl Into<ImportValue>) -> Result<Node> {
        self.require_parented("before")?;
        let node = self.doc.import(value)?;
        for unit in Self::insertion_units("before", &node)? {
            tree::insert_before(&self.node_ref(), &unit.node_ref());
        }
        Ok(node)
    }

    /// Detach this node and put `value` in its place.
    /// Returns the substituted node.
    pub fn replace(&self, value: impl Into<ImportValue>) -> Result<Node> {
        self.require_parented("replace")?;
        let node = self.doc.import(value)?;
        if node == *self {
            return Ok(node);
        }
        for unit in Self::insertion_units("replace", &node)? {
            tree::insert_before(&self.node_ref(), &unit.node_ref());
        }
        self.node_ref().remove_from_parent();
        Ok(node)
    }

    /// Append `value` as this node's last child. Returns the inserted node.
    pub fn append(&self, value: impl Into<ImportValue>) -> Result<Node> {
        self.require_parent_kind("append")?;
        let node = self.doc.import(value)?;
        for unit in Self::insertion_units("append", &node)? {
            tree::append(&self.node_ref(), &unit.node_ref());
        }
        Ok(node)
    }

    /// Insert `value` as this node's first child. Returns the inserted node.
    pub fn prepend(&self, value: impl Into<ImportValue>) -> Result<Node> {
        self.require_parent_kind("prepend")?;
        let node = self.doc.import(value)?;
        let first_child = self.children().get(0);
        for unit in Self::insertion_units("prepend", &node)? {
            match &first_child {
                Some(first) => tree::insert_before(&first.node_ref(), &unit.node_ref()),
                None => tree::append(&self.node_ref(), &unit.node_ref()),
            }
        }
        Ok(node)
    }

    /// Insert `value` as this node's new parent at the current tree
    /// position, then re-parent this node underneath it.
    pub fn wrap(&self, value: impl Into<ImportValue>) -> Result<Node> {
        self.require_parented("wrap")?;
        let wrapper = self.doc.import(value)?;
        if wrapper.kind() != NodeKind::Element {
            return Err(Error::InvalidWrapTarget {
                kind: wrapper.kind(),
            });
        }
        tree::insert_before(&self.node_ref(), &wrapper.node_ref());
        tree::append(&wrapper.node_ref(), &self.node_ref());
        Ok(wrapper)
    }

    // === Attribute accessors ===

    /// Lowercase tag name, for elements.
    #[must_use]
    pub fn tag_name(&self) -> Option<String> {
        if self.kind != NodeKind::Element {
            return None;
        }
        tree::node_name(&self.node_ref()).map(|name| name.to_string())
    }

    /// Change this element's tag in place, keeping attributes and children.
    pub fn rename(&self, tag: &str) -> Result<()> {
        self.require_element("rename")?;
        tree::rename(&self.node_ref(), tag);
        Ok(())
    }

    pub fn attribute(&self, name: &str) -> Result<Option<String>> {
        self.require_element("attribute")?;
        Ok(tree::attr(&self.node_ref(), name).map(|value| value.to_string()))
    }

    pub fn set_attribute(&self, name: &str, value: &str) -> Result<()> {
        self.require_element("set_attribute")?;
        tree::set_attr(&self.node_ref(), name, value);
        Ok(())
    }

    pub fn has_attribute(&self, name: &str) -> Result<bool> {
        self.require_element("has_attribute")?;
        Ok(tree::has_attr(&self.node_ref(), name))
    }

    pub fn remove_attribute(&self, name: &str) -> Result<()> {
        self.require_element("remove_attribute")?;
        tree::remove_attr(&self.node_ref(), name);
        Ok(())
    }

    // === Capability checks ===

    /// What actually lands in the tree for an imported value: the node
    /// itself, or a fragment's children in order.
    fn insertion_units(operation: &'static str, node: &Node) -> Result<Vec<Node>> {
        match node.kind() {
            NodeKind::Fragment => Ok(node.children().nodes()),
            kind if kind.is_child() => Ok(vec![node.clone()]),
            kind => Err(Error::KindMismatch { operation, kind }),
        }
    }

    fn require_parented(&self, operation: &'static str) -> Result<()> {
        if self.node_ref().parent().is_some() {
            Ok(())
        } else {
            Err(Error::Detached { operation })
        }
    }

    fn require_parent_kind(&self, operation: &'static str) -> Result<()> {
        if self.kind.is_parent() {
            Ok(())
        } else {
            Err(Error::KindMismatch {
                operation,
                kind: self.kind,
            })
        }
    }

    fn require_element(&self, operation: &'static str) -> Result<()> {
        if self.kind == NodeKind::Element {
            Ok(())
        } else {
            Err(Error::KindMismatch {
                operation,
                kind: self.kind,
            })
        }
    }
}
