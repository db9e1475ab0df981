//! Tree Operations Adapter
//!
//! The single boundary between this crate and the `dom_query` tree library.
//! Everything above this module speaks in node handles; everything below it
//! is `dom_query`'s arena of [`NodeRef`]s. Structural edits that `dom_query`
//! does not offer as one call (insert-after, child replacement, markup
//! adoption) are composed here from its relinking primitives.

use dom_query::{Document, NodeId, NodeRef, Selection};
use tendril::StrTendril;

use crate::node::NodeKind;

/// Classify an underlying node for the handle's kind tag.
///
/// Fragments never come out of the tree itself: they are holder nodes this
/// crate creates and tags at the handle level.
pub(crate) fn kind(node: &NodeRef) -> NodeKind {
    if node.is_document() {
        NodeKind::Document
    } else if node.is_element() {
        NodeKind::Element
    } else if node.is_text() {
        NodeKind::Text
    } else if node.is_comment() {
        NodeKind::Comment
    } else {
        NodeKind::Other
    }
}

// === Content ===

/// Serialized form of the node itself, entity-escaped.
pub(crate) fn outer_html(node: &NodeRef) -> StrTendril {
    Selection::from(*node).html()
}

/// Serialized form of the node's children, entity-escaped.
pub(crate) fn inner_html(node: &NodeRef) -> StrTendril {
    Selection::from(*node).inner_html()
}

/// Decoded text content of the node and its descendants.
pub(crate) fn text(node: &NodeRef) -> StrTendril {
    Selection::from(*node).text()
}

/// Replace the node's children with the parse of `markup`.
pub(crate) fn set_inner_html(node: &NodeRef, markup: &str) {
    Selection::from(*node).set_html(markup);
}

// === Attributes ===

pub(crate) fn attr(node: &NodeRef, name: &str) -> Option<StrTendril> {
    Selection::from(*node).attr(name)
}

pub(crate) fn set_attr(node: &NodeRef, name: &str, value: &str) {
    Selection::from(*node).set_attr(name, value);
}

pub(crate) fn has_attr(node: &NodeRef, name: &str) -> bool {
    Selection::from(*node).has_attr(name)
}

pub(crate) fn remove_attr(node: &NodeRef, name: &str) {
    Selection::from(*node).remove_attr(name);
}

pub(crate) fn rename(node: &NodeRef, tag: &str) {
    Selection::from(*node).rename(tag);
}

pub(crate) fn node_name(node: &NodeRef) -> Option<StrTendril> {
    node.node_name()
}

// === Navigation ===

/// All direct children in document order, text and comment nodes included.
pub(crate) fn children<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    let mut nodes = Vec::new();
    let mut next = node.first_child();
    while let Some(child) = next {
        next = child.next_sibling();
        nodes.push(child);
    }
    nodes
}

// === Structural edits ===

pub(crate) fn remove_children(node: &NodeRef) {
    for child in children(node) {
        child.remove_from_parent();
    }
}

/// Insert `node` immediately before `anchor` under the anchor's parent.
/// An already-attached `node` is moved, not copied.
pub(crate) fn insert_before(anchor: &NodeRef, node: &NodeRef) {
    node.remove_from_parent();
    anchor.insert_before(node);
}

/// Insert `node` immediately after `anchor` under the anchor's parent.
pub(crate) fn insert_after(anchor: &NodeRef, node: &NodeRef) {
    node.remove_from_parent();
    match anchor.next_sibling() {
        Some(next) => next.insert_before(node),
        None => {
            if let Some(parent) = anchor.parent() {
                parent.append_child(node);
            }
        }
    }
}

pub(crate) fn append(parent: &NodeRef, node: &NodeRef) {
    node.remove_from_parent();
    parent.append_child(node);
}

pub(crate) fn prepend(parent: &NodeRef, node: &NodeRef) {
    node.remove_from_parent();
    parent.prepend_child(node);
}

// === Creation ===

pub(crate) fn new_element(doc: &Document, tag: &str) -> NodeId {
    doc.tree.new_element(tag).id
}

pub(crate) fn new_text(doc: &Document, text: &str) -> NodeId {
    doc.tree.new_text(text).id
}

pub(crate) fn get<'a>(doc: &'a Document, id: NodeId) -> Option<NodeRef<'a>> {
    doc.tree.get(&id)
}

pub(crate) fn root_id(doc: &Document) -> NodeId {
    doc.tree.root().id
}

/// Materialize `markup` as detached nodes owned by `doc`'s tree.
///
/// Parses into a detached staging element and unlinks the results, so the
/// returned ids belong to `doc` but sit outside its document structure.
/// This is the same markup-round-trip technique the tree library's callers
/// use for cross-tree copies; it is what makes cross-document `import`
/// leave the source document untouched.
pub(crate) fn adopt_markup(doc: &Document, markup: &str) -> Vec<NodeId> {
    let holder = doc.tree.new_element("div");
    Selection::from(holder).set_html(markup);
    let ids: Vec<NodeId> = children(&holder).iter().map(|child| child.id).collect();
    for child in children(&holder) {
        child.remove_from_parent();
    }
    ids
}

// === Querying ===

/// Nodes under `node` matching a CSS selector, in document order.
/// Selector syntax and matching are the tree library's contract.
pub(crate) fn select<'a>(node: &NodeRef<'a>, css: &str) -> Vec<NodeRef<'a>> {
    Selection::from(*node).select(css).nodes().to_vec()
}

pub(crate) fn select_in_document<'a>(doc: &'a Document, css: &str) -> Vec<NodeRef<'a>> {
    doc.select(css).nodes().to_vec()
}
