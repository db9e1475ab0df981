//! # dom-weft
//!
//! An ergonomic structural-edit layer over an HTML document object model.
//!
//! The crate wraps a parsed tree in the handle types [`Document`],
//! [`Node`], and [`NodeList`], and makes structural edits (insert,
//! replace, wrap, duplicate, templated repeat, cross-document import) work
//! identically whether the caller holds a single node or a whole
//! selection. Parsing, serialization, and selector matching come from the
//! underlying `dom_query` tree library; this crate supplies the node
//! collections, the mutation algorithms, and the import logic that keeps
//! node ownership sane across document boundaries.
//!
//! ## Quick Start
//!
//! ```rust
//! use dom_weft::Document;
//!
//! let doc = Document::parse_fragment("<ul><li>item</li></ul>");
//!
//! // Stamp out one <li> per data item.
//! doc.query("li").at(0)?.repeat(["alpha", "beta", "gamma"])?;
//!
//! let list = doc.query("ul").at(0)?;
//! assert_eq!(
//!     list.raw_content().as_ref(),
//!     "<li>alpha</li><li>beta</li><li>gamma</li>"
//! );
//! # Ok::<(), dom_weft::Error>(())
//! ```
//!
//! ## Collections act like one node
//!
//! A [`NodeList`] proxies every single-node operation to a representative
//! element: the first, except for `after`, which acts on the last so that
//! "insert after this selection" lands after the whole run. Lists support
//! negative indexing (`at(-1)` is the last node) and re-read live child
//! lists on every access, so they observe mutation instead of caching a
//! snapshot.

mod error;
mod repeat;
mod tree;

/// Document facade: parsing, serialization, factories, and import.
pub mod document;

/// Ordered node views with negative indexing and representative proxying.
pub mod list;

/// Node handles and structural mutation primitives.
pub mod node;

// Public API - re-exports
pub use document::{Document, ImportValue};
pub use error::{Error, Result};
pub use list::NodeList;
pub use node::{Node, NodeKind};

// Re-export StrTendril, the text type returned by serialized-content getters
pub use tendril::StrTendril;
