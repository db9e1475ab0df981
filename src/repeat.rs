//! Duplication and templated repetition.
//!
//! `duplicate` turns one node into an adjacent run of identical siblings;
//! `repeat` pairs such a run with a data sequence, filling each copy from
//! its item. Both return the produced run as a [`NodeList`] in document
//! order, with the original node at the head.

use std::fmt;

use crate::error::{Error, Result};
use crate::list::NodeList;
use crate::node::Node;
use crate::tree;

impl Node {
    /// Produce `times` total nodes: this node followed by `times - 1` deep
    /// clones, each inserted as the immediate next sibling of the
    /// previously produced node.
    ///
    /// `duplicate(1)` returns just this node and touches nothing; zero is
    /// rejected with [`Error::InvalidDuplicateCount`]. A detached node
    /// still yields clones, they are just not attached anywhere.
    pub fn duplicate(&self, times: usize) -> Result<NodeList> {
        if times == 0 {
            return Err(Error::InvalidDuplicateCount);
        }

        let mut nodes = vec![self.clone()];
        let mut anchor = self.clone();
        for _ in 1..times {
            let clone = self.document().clone_node(self)?;
            if anchor.parent().is_some() {
                tree::insert_after(&anchor.node_ref(), &clone.node_ref());
            }
            nodes.push(clone.clone());
            anchor = clone;
        }

        Ok(NodeList::from_nodes(nodes))
    }

    /// Repeat this node once per item, setting each copy's content to the
    /// item's display form. `repeat(node, [a, b, c])` leaves three adjacent
    /// siblings reading `a`, `b`, `c`.
    ///
    /// An empty sequence returns an empty list and leaves this node
    /// untouched.
    pub fn repeat<I>(&self, items: I) -> Result<NodeList>
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        self.repeat_with(items, |node, item| {
            node.set_content(item)?;
            Ok(())
        })
    }

    /// Repeat this node once per item, handing each produced node and its
    /// item to `fill`. The pairing is strictly positional and each item is
    /// consumed once, in iteration order.
    pub fn repeat_with<I, F>(&self, items: I, mut fill: F) -> Result<NodeList>
    where
        I: IntoIterator,
        F: FnMut(&Node, I::Item) -> Result<()>,
    {
        let items: Vec<I::Item> = items.into_iter().collect();
        if items.is_empty() {
            return Ok(NodeList::from_nodes(Vec::new()));
        }

        let nodes = self.duplicate(items.len())?;
        for (node, item) in nodes.iter().zip(items) {
            fill(&node, item)?;
        }
        Ok(nodes)
    }
}
