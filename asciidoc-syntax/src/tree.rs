//! Immutable, arena-backed syntax tree snapshots.
//!
//! A [`SyntaxTree`] owns the source text of one document together with every
//! node parsed from it. Nodes are addressed by [`NodeId`] and navigated through
//! the borrowed [`SyntaxNode`] cursor, which is cheap to copy and never
//! outlives its tree. Trees are never mutated after [`crate::TreeBuilder`]
//! hands them out, so a shared reference is a stable snapshot.

use crate::kind::SyntaxKind;
use std::fmt;
use std::ops::Range;

/// Index of a node inside its [`SyntaxTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Identity of a document within a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(pub u32);

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "doc#{}", self.0)
    }
}

/// Element-specific data computed by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Payload {
    #[default]
    None,
    /// Inline macro such as `footnote:[...]` or `kbd:[...]`.
    Macro { name: String },
    /// Attribute declaration `:name: value`. `checkable` is true when the
    /// value is prose rather than a setting.
    Attribute { name: String, checkable: bool },
    /// Block id declaration `[[id]]` or `[#id]`.
    BlockId { id: String },
}

#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) kind: SyntaxKind,
    pub(crate) range: Range<usize>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) index_in_parent: u32,
    pub(crate) children: Vec<NodeId>,
    pub(crate) payload: Payload,
}

/// Parsed snapshot of one document.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    pub(crate) document: DocumentId,
    pub(crate) name: String,
    pub(crate) source: String,
    pub(crate) nodes: Vec<NodeData>,
}

impl SyntaxTree {
    pub fn document(&self) -> DocumentId {
        self.document
    }

    /// Display name of the owning document, usually its file name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn root(&self) -> SyntaxNode<'_> {
        SyntaxNode {
            tree: self,
            id: NodeId(0),
        }
    }

    pub fn node(&self, id: NodeId) -> Option<SyntaxNode<'_>> {
        (id.index() < self.nodes.len()).then_some(SyntaxNode { tree: self, id })
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// All nodes in pre-order, starting with the document root.
    pub fn descendants(&self) -> impl Iterator<Item = SyntaxNode<'_>> {
        self.root().descendants()
    }

    /// Returns the deepest node whose range contains `offset`.
    ///
    /// Ranges are half-open, so an offset sitting exactly between two tokens
    /// belongs to the second one.
    pub fn node_at_offset(&self, offset: usize) -> Option<SyntaxNode<'_>> {
        let root = self.root();
        if !root.range().contains(&offset) {
            return None;
        }
        let mut current = root;
        'descend: loop {
            for child in current.children() {
                if child.range().contains(&offset) {
                    current = child;
                    continue 'descend;
                }
            }
            return Some(current);
        }
    }

    fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.index()]
    }
}

/// Borrowed cursor over a node of a [`SyntaxTree`].
#[derive(Clone, Copy)]
pub struct SyntaxNode<'a> {
    tree: &'a SyntaxTree,
    id: NodeId,
}

impl<'a> SyntaxNode<'a> {
    pub fn id(self) -> NodeId {
        self.id
    }

    pub fn tree(self) -> &'a SyntaxTree {
        self.tree
    }

    pub fn kind(self) -> SyntaxKind {
        self.data().kind
    }

    /// Byte range of the node in the document source.
    pub fn range(self) -> Range<usize> {
        self.data().range.clone()
    }

    pub fn text(self) -> &'a str {
        let range = self.range();
        &self.tree.source[range]
    }

    pub fn payload(self) -> &'a Payload {
        &self.data().payload
    }

    pub fn parent(self) -> Option<SyntaxNode<'a>> {
        self.data().parent.map(|id| self.with_id(id))
    }

    pub fn children(self) -> impl Iterator<Item = SyntaxNode<'a>> + 'a {
        let tree = self.tree;
        tree.data(self.id)
            .children
            .iter()
            .map(move |&id| SyntaxNode { tree, id })
    }

    pub fn first_child(self) -> Option<SyntaxNode<'a>> {
        self.data().children.first().map(|&id| self.with_id(id))
    }

    pub fn is_leaf(self) -> bool {
        self.data().children.is_empty()
    }

    pub fn prev_sibling(self) -> Option<SyntaxNode<'a>> {
        let index = self.data().index_in_parent as usize;
        let parent = self.data().parent?;
        let siblings = &self.tree.data(parent).children;
        index
            .checked_sub(1)
            .and_then(|prev| siblings.get(prev))
            .map(|&id| self.with_id(id))
    }

    pub fn next_sibling(self) -> Option<SyntaxNode<'a>> {
        let index = self.data().index_in_parent as usize;
        let parent = self.data().parent?;
        self.tree
            .data(parent)
            .children
            .get(index + 1)
            .map(|&id| self.with_id(id))
    }

    /// Siblings following this node, nearest first.
    pub fn next_siblings(self) -> impl Iterator<Item = SyntaxNode<'a>> + 'a {
        std::iter::successors(self.next_sibling(), |node| node.next_sibling())
    }

    pub fn ancestors(self) -> impl Iterator<Item = SyntaxNode<'a>> + 'a {
        std::iter::successors(self.parent(), |node| node.parent())
    }

    /// This node and everything below it, in pre-order.
    pub fn descendants(self) -> impl Iterator<Item = SyntaxNode<'a>> + 'a {
        let tree = self.tree;
        let mut stack = vec![self.id];
        std::iter::from_fn(move || {
            let id = stack.pop()?;
            stack.extend(tree.data(id).children.iter().rev().copied());
            Some(SyntaxNode { tree, id })
        })
    }

    pub fn macro_name(self) -> Option<&'a str> {
        match self.payload() {
            Payload::Macro { name } => Some(name.as_str()),
            _ => None,
        }
    }

    /// Whether an attribute declaration holds prose worth checking.
    pub fn has_checkable_content(self) -> bool {
        matches!(
            self.payload(),
            Payload::Attribute {
                checkable: true,
                ..
            }
        )
    }

    pub fn declared_id(self) -> Option<&'a str> {
        match self.payload() {
            Payload::BlockId { id } => Some(id.as_str()),
            _ => None,
        }
    }

    /// Ranges of the reference keys inside this node, relative to its start.
    pub fn reference_ranges(self) -> Vec<Range<usize>> {
        let start = self.range().start;
        self.children()
            .filter(|child| child.kind() == SyntaxKind::RefKey)
            .map(|child| {
                let range = child.range();
                (range.start - start)..(range.end - start)
            })
            .collect()
    }

    fn data(self) -> &'a NodeData {
        self.tree.data(self.id)
    }

    fn with_id(self, id: NodeId) -> SyntaxNode<'a> {
        SyntaxNode {
            tree: self.tree,
            id,
        }
    }
}

impl PartialEq for SyntaxNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for SyntaxNode<'_> {}

impl fmt::Debug for SyntaxNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{:?} {:?}", self.kind(), self.range(), self.text())
    }
}
