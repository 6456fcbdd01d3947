//! In-memory document backing tests and headless rendering.
//!
//! Nodes live in an arena and are never freed; detached nodes stay
//! addressable, the same way a script can keep a reference to a removed
//! element.

use crate::dom::{DomError, DomHost, DomResult, DownloadFile, NodeId};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
struct NodeData {
    tag: String,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: String,
    markup: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena-backed [`DomHost`] with an `html > head + body` skeleton.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    nodes: Vec<NodeData>,
    root: NodeId,
    head: NodeId,
    body: NodeId,
    downloads: Vec<DownloadFile>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    pub fn new() -> Self {
        let mut document = Self {
            nodes: Vec::new(),
            root: NodeId::new(0),
            head: NodeId::new(0),
            body: NodeId::new(0),
            downloads: Vec::new(),
        };
        let root = document.create_element("html");
        let head = document.create_element("head");
        let body = document.create_element("body");
        document.link(root, head);
        document.link(root, body);
        document.root = root;
        document.head = head;
        document.body = body;
        document
    }

    /// Files passed to [`DomHost::download`], oldest first.
    pub fn downloads(&self) -> &[DownloadFile] {
        &self.downloads
    }

    /// Creates `<tag>` under `parent` with the given text.
    pub fn append_text_element(
        &mut self,
        parent: NodeId,
        tag: &str,
        text: &str,
    ) -> DomResult<NodeId> {
        let node = self.create_element(tag);
        self.set_text_content(node, text)?;
        self.append_child(parent, node)?;
        Ok(node)
    }

    /// Whether `node` is reachable from the document root.
    pub fn is_attached(&self, node: NodeId) -> bool {
        let mut cursor = Some(node);
        while let Some(current) = cursor {
            if current == self.root {
                return true;
            }
            cursor = self.nodes.get(current.index()).and_then(|data| data.parent);
        }
        false
    }

    fn data(&self, node: NodeId) -> DomResult<&NodeData> {
        self.nodes
            .get(node.index())
            .ok_or(DomError::UnknownNode(node))
    }

    fn data_mut(&mut self, node: NodeId) -> DomResult<&mut NodeData> {
        self.nodes
            .get_mut(node.index())
            .ok_or(DomError::UnknownNode(node))
    }

    fn link(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[child.index()].parent = Some(parent);
        self.nodes[parent.index()].children.push(child);
    }

    fn detach(&mut self, child: NodeId) {
        let Some(parent) = self.nodes[child.index()].parent.take() else {
            return;
        };
        self.nodes[parent.index()]
            .children
            .retain(|existing| *existing != child);
    }

    fn clear_content(&mut self, node: NodeId) -> DomResult<()> {
        let children = std::mem::take(&mut self.data_mut(node)?.children);
        for child in children {
            self.nodes[child.index()].parent = None;
        }
        let data = self.data_mut(node)?;
        data.text.clear();
        data.markup = None;
        Ok(())
    }

    fn collect_text(&self, node: NodeId, out: &mut String) -> DomResult<()> {
        let data = self.data(node)?;
        out.push_str(&data.text);
        for child in &data.children {
            self.collect_text(*child, out)?;
        }
        Ok(())
    }
}

impl DomHost for MemoryDocument {
    fn root(&self) -> NodeId {
        self.root
    }

    fn head(&self) -> NodeId {
        self.head
    }

    fn body(&self) -> NodeId {
        self.body
    }

    fn get_by_id(&self, id: &str) -> Option<NodeId> {
        let attached = self.descendants(self.root).ok()?;
        attached.into_iter().find(|node| {
            self.nodes[node.index()].attributes.get("id").map(String::as_str) == Some(id)
        })
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        let node = NodeId::new(self.nodes.len());
        self.nodes.push(NodeData {
            tag: tag.trim().to_ascii_lowercase(),
            ..NodeData::default()
        });
        node
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        self.data(parent)?;
        self.data(child)?;

        let mut cursor = Some(parent);
        while let Some(current) = cursor {
            if current == child {
                return Err(DomError::HierarchyRequest { parent, child });
            }
            cursor = self.nodes[current.index()].parent;
        }

        self.detach(child);
        self.link(parent, child);
        Ok(())
    }

    fn remove_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        self.data(parent)?;
        if self.data(child)?.parent != Some(parent) {
            return Err(DomError::NotAChild { parent, child });
        }
        self.detach(child);
        Ok(())
    }

    fn parent(&self, node: NodeId) -> DomResult<Option<NodeId>> {
        Ok(self.data(node)?.parent)
    }

    fn children(&self, node: NodeId) -> DomResult<Vec<NodeId>> {
        Ok(self.data(node)?.children.clone())
    }

    fn tag_name(&self, node: NodeId) -> DomResult<String> {
        Ok(self.data(node)?.tag.clone())
    }

    fn text_content(&self, node: NodeId) -> DomResult<String> {
        let mut out = String::new();
        self.collect_text(node, &mut out)?;
        Ok(out)
    }

    fn set_text_content(&mut self, node: NodeId, text: &str) -> DomResult<()> {
        self.clear_content(node)?;
        self.data_mut(node)?.text = text.to_string();
        Ok(())
    }

    fn inner_html(&self, node: NodeId) -> DomResult<String> {
        let data = self.data(node)?;
        Ok(data.markup.clone().unwrap_or_default())
    }

    fn set_inner_html(&mut self, node: NodeId, markup: &str) -> DomResult<()> {
        self.clear_content(node)?;
        self.data_mut(node)?.markup = Some(markup.to_string());
        Ok(())
    }

    fn attribute(&self, node: NodeId, name: &str) -> DomResult<Option<String>> {
        Ok(self.data(node)?.attributes.get(name).cloned())
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> DomResult<()> {
        self.data_mut(node)?
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn style(&self, node: NodeId, property: &str) -> DomResult<Option<String>> {
        Ok(self.data(node)?.styles.get(property).cloned())
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) -> DomResult<()> {
        let styles = &mut self.data_mut(node)?.styles;
        if value.is_empty() {
            styles.remove(property);
        } else {
            styles.insert(property.to_string(), value.to_string());
        }
        Ok(())
    }

    fn download(&mut self, file: DownloadFile) -> DomResult<()> {
        self.downloads.push(file);
        Ok(())
    }
}
