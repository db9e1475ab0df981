//! Document facade: parse/serialize pass-through, node factories, and the
//! import choke point.
//!
//! Every structural mutation primitive accepts external input through
//! [`Document::import`]; callers never hand raw foreign nodes to the tree.
//! Import is idempotent for nodes the document already owns and deep-copies
//! nodes owned by other documents, leaving the source untouched.

use std::fmt;
use std::rc::Rc;

use dom_query::NodeId;
use tendril::StrTendril;

use crate::error::{Error, Result};
use crate::list::NodeList;
use crate::node::{Node, NodeKind};
use crate::tree;

/// Tag of the detached holder element standing in for a fragment node.
/// Holders never enter the document structure; insertion splices their
/// children instead.
const FRAGMENT_TAG: &str = "div";

/// Owning facade over one parsed tree.
///
/// Handles are `Rc`-shared: cloning a `Document` clones the handle, not the
/// tree, and node ownership ("which document does this node belong to") is
/// handle identity.
#[derive(Clone)]
pub struct Document {
    dom: Rc<dom_query::Document>,
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.dom, &other.dom)
    }
}

impl Eq for Document {}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document").finish_non_exhaustive()
    }
}

impl Document {
    /// Parse a complete HTML document.
    #[must_use]
    pub fn parse(markup: &str) -> Self {
        Self {
            dom: Rc::new(dom_query::Document::from(markup)),
        }
    }

    /// Parse markup as a fragment, without the full-document scaffolding.
    #[must_use]
    pub fn parse_fragment(markup: &str) -> Self {
        Self {
            dom: Rc::new(dom_query::Document::fragment(markup)),
        }
    }

    pub(crate) fn dom(&self) -> &dom_query::Document {
        &self.dom
    }

    /// Serialize the whole document back to markup.
    #[must_use]
    pub fn html(&self) -> StrTendril {
        self.dom.html()
    }

    /// The root container node.
    #[must_use]
    pub fn root(&self) -> Node {
        self.node(tree::root_id(&self.dom))
    }

    /// Wrap an underlying node id, classifying its kind from the tree.
    pub(crate) fn node(&self, id: NodeId) -> Node {
        match tree::get(&self.dom, id) {
            Some(node) => Node::from_ref(self, &node),
            None => unreachable!("ids handed out by this document's tree stay valid"),
        }
    }

    /// Nodes matching a CSS selector, in document order.
    /// Selector matching is the underlying tree library's contract.
    #[must_use]
    pub fn query(&self, css: &str) -> NodeList {
        let nodes = tree::select_in_document(&self.dom, css)
            .iter()
            .map(|node| Node::from_ref(self, node))
            .collect();
        NodeList::from_nodes(nodes)
    }

    // === Node factories ===

    /// Create a detached element.
    #[must_use]
    pub fn create_element(&self, tag: &str) -> Node {
        Node::new(self.clone(), tree::new_element(&self.dom, tag), NodeKind::Element)
    }

    /// Create a detached text node holding `text` (decoded form; the
    /// serializer entity-escapes it on output).
    #[must_use]
    pub fn create_text(&self, text: &str) -> Node {
        Node::new(self.clone(), tree::new_text(&self.dom, text), NodeKind::Text)
    }

    /// Create an empty detached fragment. Inserting a fragment splices its
    /// children at the insertion point; the fragment itself never enters
    /// the tree.
    #[must_use]
    pub fn create_fragment(&self) -> Node {
        Node::new(
            self.clone(),
            tree::new_element(&self.dom, FRAGMENT_TAG),
            NodeKind::Fragment,
        )
    }

    // === Import ===

    /// Coerce `value` into a node owned by this document.
    ///
    /// - A node already owned by this document is returned unchanged, with
    ///   no clone and no ownership churn, however many times it is imported.
    /// - A node owned by another document is deep-copied into this one and
    ///   the detached copy returned; the original stays where it was.
    /// - A scalar becomes a new text node holding its display form.
    ///
    /// Whole documents (and kinds with no place in a tree) cannot be
    /// imported and fail with [`Error::UnsupportedImport`].
    pub fn import(&self, value: impl Into<ImportValue>) -> Result<Node> {
        match value.into() {
            ImportValue::Node(node) => {
                if node.document() == *self {
                    return Ok(node);
                }
                self.clone_node(&node)
            }
            ImportValue::Text(text) => Ok(self.create_text(&text)),
            ImportValue::Integer(value) => Ok(self.create_text(&value.to_string())),
            ImportValue::Float(value) => Ok(self.create_text(&value.to_string())),
            ImportValue::Boolean(value) => Ok(self.create_text(&value.to_string())),
        }
    }

    /// Deep-copy `node` (from this or any other document) into this
    /// document. The copy is detached; the source is untouched.
    pub(crate) fn clone_node(&self, node: &Node) -> Result<Node> {
        match node.kind() {
            NodeKind::Fragment => {
                let fragment = self.create_fragment();
                let markup: String = node
                    .children()
                    .iter()
                    .map(|child| tree::outer_html(&child.node_ref()).to_string())
                    .collect();
                if !markup.is_empty() {
                    tree::set_inner_html(&fragment.node_ref(), &markup);
                }
                Ok(fragment)
            }
            kind if kind.is_child() => {
                let markup = tree::outer_html(&node.node_ref());
                Ok(self.adopt_single(&markup))
            }
            kind => Err(Error::UnsupportedImport { kind }),
        }
    }

    fn adopt_single(&self, markup: &str) -> Node {
        let ids = tree::adopt_markup(&self.dom, markup);
        match ids.first() {
            Some(&id) => self.node(id),
            // An empty text node serializes to nothing at all.
            None => self.create_text(""),
        }
    }

    /// Build a detached fragment holding deep clones of every node in
    /// `nodes`, in order. Backs [`NodeList::importable_node`].
    pub fn create_importable_fragment(&self, nodes: &NodeList) -> Result<Node> {
        let fragment = self.create_fragment();
        for node in nodes {
            let copy = self.clone_node(&node)?;
            tree::append(&fragment.node_ref(), &copy.node_ref());
        }
        Ok(fragment)
    }
}

/// A value acceptable to [`Document::import`]: an existing node (from this
/// or another document) or a scalar that coerces to a text node.
#[derive(Debug, Clone)]
pub enum ImportValue {
    Node(Node),
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl From<Node> for ImportValue {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<&Node> for ImportValue {
    fn from(node: &Node) -> Self {
        Self::Node(node.clone())
    }
}

impl From<&str> for ImportValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for ImportValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<i32> for ImportValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for ImportValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for ImportValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ImportValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}
