//! Owned markup tree.
//!
//! Nodes own their children; the "next sibling" of a node is simply the
//! following entry in its parent's `children`. The tree is built once by the
//! reader (or by hand in tests) and is never mutated while a compile runs.

/// The kind of a [`MarkupNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Element,
    Text,
    CData,
    Comment,
    ProcessingInstruction,
    /// A named entity the reader could not resolve. Kept in the tree so the
    /// consumer can decide whether that is acceptable.
    EntityReference,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupNode {
    pub kind: NodeKind,
    /// Element name, PI target or entity name.
    pub name: Option<String>,
    /// Character data of text, CDATA, comment and PI nodes.
    pub content: Option<String>,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<MarkupNode>,
}

impl MarkupNode {
    fn leaf(kind: NodeKind, name: Option<String>, content: Option<String>) -> Self {
        Self {
            kind,
            name,
            content,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn element(name: impl Into<String>) -> Self {
        Self::leaf(NodeKind::Element, Some(name.into()), None)
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::leaf(NodeKind::Text, None, Some(content.into()))
    }

    pub fn cdata(content: impl Into<String>) -> Self {
        Self::leaf(NodeKind::CData, None, Some(content.into()))
    }

    pub fn comment(content: impl Into<String>) -> Self {
        Self::leaf(NodeKind::Comment, None, Some(content.into()))
    }

    pub fn processing_instruction(target: impl Into<String>, data: impl Into<String>) -> Self {
        Self::leaf(
            NodeKind::ProcessingInstruction,
            Some(target.into()),
            Some(data.into()),
        )
    }

    pub fn entity_reference(name: impl Into<String>) -> Self {
        Self::leaf(NodeKind::EntityReference, Some(name.into()), None)
    }

    /// Appends an attribute, keeping declaration order.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: MarkupNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn is_element(&self) -> bool {
        self.kind == NodeKind::Element
    }

    pub fn is_element_named(&self, name: &str) -> bool {
        self.is_element() && self.name.as_deref() == Some(name)
    }

    /// True for a text node made only of whitespace (or empty).
    pub fn is_blank_text(&self) -> bool {
        self.kind == NodeKind::Text
            && self
                .content
                .as_deref()
                .is_none_or(|s| s.chars().all(char::is_whitespace))
    }

    /// True when the element has content worth an end tag: at least one
    /// child, and not just a single blank text node.
    pub fn has_real_content(&self) -> bool {
        match self.children.as_slice() {
            [] => false,
            [only] => !only.is_blank_text(),
            _ => true,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Pre-order iterator over this node and all of its descendants.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

pub struct Descendants<'a> {
    stack: Vec<&'a MarkupNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a MarkupNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

impl Drop for MarkupNode {
    // Flattens the subtree first so deeply nested documents do not recurse
    // once per level on drop.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// A parsed document: the root element and the DOCTYPE public identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupDocument {
    pub public_id: Option<String>,
    pub root: MarkupNode,
}

impl MarkupDocument {
    pub fn new(root: MarkupNode) -> Self {
        Self {
            public_id: None,
            root,
        }
    }

    pub fn with_public_id(mut self, public_id: impl Into<String>) -> Self {
        self.public_id = Some(public_id.into());
        self
    }
}
