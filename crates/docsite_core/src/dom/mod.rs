//! DOM capability contracts.
//!
//! # Responsibility
//! - Define the minimal document interface every component writes through.
//! - Keep table/toast/render logic independent of any rendering environment.
//!
//! # Invariants
//! - Node handles are opaque; only the host that created them can resolve them.
//! - `append_child` moves an already attached node instead of cloning it.
//! - Lookup by id only sees nodes attached to the document tree.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;

pub use memory::MemoryDocument;

pub type DomResult<T> = Result<T, DomError>;

/// Opaque handle to one element owned by a [`DomHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// DOM operation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    /// Handle does not belong to this document.
    UnknownNode(NodeId),
    /// `remove_child` called with a node that is not a child of `parent`.
    NotAChild { parent: NodeId, child: NodeId },
    /// Insertion would make a node its own ancestor.
    HierarchyRequest { parent: NodeId, child: NodeId },
}

impl Display for DomError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownNode(node) => write!(f, "unknown dom node: {node}"),
            Self::NotAChild { parent, child } => {
                write!(f, "{child} is not a child of {parent}")
            }
            Self::HierarchyRequest { parent, child } => {
                write!(f, "cannot insert {child} under its own descendant {parent}")
            }
        }
    }
}

impl Error for DomError {}

/// File handed to the host's download primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadFile {
    pub filename: String,
    pub mime_type: String,
    pub content: String,
}

impl DownloadFile {
    /// Raw bytes as written to disk (UTF-8).
    pub fn bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }
}

/// Capability interface over a browser-like document.
///
/// Required methods are the primitive reads/writes; tree queries and class
/// helpers are provided on top of them.
pub trait DomHost {
    /// Root element of the document (`<html>`).
    fn root(&self) -> NodeId;
    fn head(&self) -> NodeId;
    fn body(&self) -> NodeId;

    /// Finds the first attached element whose `id` attribute equals `id`.
    fn get_by_id(&self, id: &str) -> Option<NodeId>;
    fn create_element(&mut self, tag: &str) -> NodeId;
    fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()>;
    fn remove_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()>;

    fn parent(&self, node: NodeId) -> DomResult<Option<NodeId>>;
    fn children(&self, node: NodeId) -> DomResult<Vec<NodeId>>;
    /// Lowercase tag name.
    fn tag_name(&self, node: NodeId) -> DomResult<String>;
    /// Concatenated text of the node and all of its descendants.
    fn text_content(&self, node: NodeId) -> DomResult<String>;
    /// Replaces all children with a single run of text.
    fn set_text_content(&mut self, node: NodeId, text: &str) -> DomResult<()>;
    fn inner_html(&self, node: NodeId) -> DomResult<String>;
    /// Replaces all children with opaque markup.
    fn set_inner_html(&mut self, node: NodeId, markup: &str) -> DomResult<()>;

    fn attribute(&self, node: NodeId, name: &str) -> DomResult<Option<String>>;
    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> DomResult<()>;
    /// Inline style property; `None` when unset.
    fn style(&self, node: NodeId, property: &str) -> DomResult<Option<String>>;
    /// Sets an inline style property; an empty value clears it.
    fn set_style(&mut self, node: NodeId, property: &str, value: &str) -> DomResult<()>;

    /// Hands a generated file to the user agent.
    fn download(&mut self, file: DownloadFile) -> DomResult<()>;

    /// Descendants of `node` in document order, excluding `node` itself.
    fn descendants(&self, node: NodeId) -> DomResult<Vec<NodeId>> {
        let mut out = Vec::new();
        let mut stack = self.children(node)?;
        stack.reverse();
        while let Some(next) = stack.pop() {
            out.push(next);
            let mut kids = self.children(next)?;
            kids.reverse();
            stack.extend(kids);
        }
        Ok(out)
    }

    /// First descendant with the given tag, like `querySelector(tag)`.
    fn first_by_tag(&self, node: NodeId, tag: &str) -> DomResult<Option<NodeId>> {
        for candidate in self.descendants(node)? {
            if self.tag_name(candidate)? == tag {
                return Ok(Some(candidate));
            }
        }
        Ok(None)
    }

    /// All descendants with one of the given tags, in document order.
    fn all_by_tags(&self, node: NodeId, tags: &[&str]) -> DomResult<Vec<NodeId>> {
        let mut out = Vec::new();
        for candidate in self.descendants(node)? {
            let tag = self.tag_name(candidate)?;
            if tags.contains(&tag.as_str()) {
                out.push(candidate);
            }
        }
        Ok(out)
    }

    /// Attached elements carrying `class`, in document order.
    fn elements_by_class(&self, class: &str) -> DomResult<Vec<NodeId>> {
        let mut out = Vec::new();
        for candidate in self.descendants(self.root())? {
            if self.has_class(candidate, class)? {
                out.push(candidate);
            }
        }
        Ok(out)
    }

    fn has_class(&self, node: NodeId, class: &str) -> DomResult<bool> {
        let classes = self.attribute(node, "class")?.unwrap_or_default();
        Ok(classes.split_whitespace().any(|value| value == class))
    }

    fn add_class(&mut self, node: NodeId, class: &str) -> DomResult<()> {
        if self.has_class(node, class)? {
            return Ok(());
        }
        let mut classes = self.attribute(node, "class")?.unwrap_or_default();
        if !classes.trim().is_empty() {
            classes.push(' ');
        }
        classes.push_str(class);
        self.set_attribute(node, "class", classes.trim())
    }

    fn remove_class(&mut self, node: NodeId, class: &str) -> DomResult<()> {
        let Some(classes) = self.attribute(node, "class")? else {
            return Ok(());
        };
        let kept = classes
            .split_whitespace()
            .filter(|value| *value != class)
            .collect::<Vec<_>>()
            .join(" ");
        self.set_attribute(node, "class", &kept)
    }
}
