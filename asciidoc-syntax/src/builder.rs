//! Incremental construction of [`SyntaxTree`] snapshots.
//!
//! The builder follows the start/token/finish protocol of event-based
//! parsers: elements are opened with [`TreeBuilder::start_node`], leaves are
//! appended with [`TreeBuilder::token`] and elements are closed with
//! [`TreeBuilder::finish_node`]. The document source is the concatenation of
//! all token texts, so ranges are always consistent with the text.

use crate::error::TreeError;
use crate::kind::SyntaxKind;
use crate::tree::{DocumentId, NodeData, NodeId, Payload, SyntaxTree};

pub struct TreeBuilder {
    document: DocumentId,
    name: String,
    source: String,
    nodes: Vec<NodeData>,
    stack: Vec<NodeId>,
    error: Option<TreeError>,
}

impl TreeBuilder {
    /// Starts a tree whose root is a [`SyntaxKind::Document`] element.
    pub fn new(document: DocumentId, name: impl Into<String>) -> Self {
        let mut builder = Self {
            document,
            name: name.into(),
            source: String::new(),
            nodes: Vec::new(),
            stack: Vec::new(),
            error: None,
        };
        builder.push(SyntaxKind::Document, Payload::None, 0..0);
        builder.stack.push(NodeId(0));
        builder
    }

    pub fn start_node(&mut self, kind: SyntaxKind) -> &mut Self {
        self.start_node_with(kind, Payload::None)
    }

    pub fn start_node_with(&mut self, kind: SyntaxKind, payload: Payload) -> &mut Self {
        let offset = self.source.len();
        let id = self.push(kind, payload, offset..offset);
        self.stack.push(id);
        self
    }

    pub fn token(&mut self, kind: SyntaxKind, text: &str) -> &mut Self {
        if kind.is_element() {
            self.record(TreeError::ElementAsToken { kind });
            return self;
        }
        let start = self.source.len();
        self.source.push_str(text);
        let end = self.source.len();
        self.push(kind, Payload::None, start..end);
        self
    }

    pub fn finish_node(&mut self) -> &mut Self {
        // The document root stays open until `finish`.
        if self.stack.len() <= 1 {
            self.record(TreeError::NoOpenElement);
            return self;
        }
        if let Some(id) = self.stack.pop() {
            self.nodes[id.index()].range.end = self.source.len();
        }
        self
    }

    pub fn finish(mut self) -> Result<SyntaxTree, TreeError> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }
        if self.stack.len() > 1 {
            let innermost = self
                .stack
                .last()
                .map(|id| self.nodes[id.index()].kind)
                .unwrap_or(SyntaxKind::Document);
            return Err(TreeError::UnclosedElements {
                count: self.stack.len() - 1,
                innermost,
            });
        }
        self.nodes[0].range.end = self.source.len();
        Ok(SyntaxTree {
            document: self.document,
            name: self.name,
            source: self.source,
            nodes: self.nodes,
        })
    }

    fn push(&mut self, kind: SyntaxKind, payload: Payload, range: std::ops::Range<usize>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        let parent = self.stack.last().copied();
        let index_in_parent = match parent {
            Some(parent) => {
                let siblings = &mut self.nodes[parent.index()].children;
                siblings.push(id);
                (siblings.len() - 1) as u32
            }
            None => 0,
        };
        self.nodes.push(NodeData {
            kind,
            range,
            parent,
            index_in_parent,
            children: Vec::new(),
            payload,
        });
        id
    }

    fn record(&mut self, error: TreeError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }
}
