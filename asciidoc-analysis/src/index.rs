//! Project-wide lookup of id declarations.
//!
//! Resolution never walks the project itself; it asks a [`ProjectIndex`].
//! Hosts with a persistent symbol index implement the trait on top of it,
//! while [`InMemoryIndex`] scans a set of tree snapshots on every query.

use crate::section_ids::{derive_section_ids, SectionIdStyle};
use asciidoc_syntax::{DocumentId, NodeId, SyntaxKind, SyntaxTree};
use std::ops::Range;
use std::sync::Arc;

/// An author-assigned id such as `[[intro]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockIdDeclaration {
    pub id: String,
    pub node: NodeId,
    pub document: DocumentId,
    pub range: Range<usize>,
}

/// An id derived from a section heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionDeclaration {
    pub id: String,
    pub title: String,
    /// Counter appended when the derived id collided with an earlier one.
    pub suffix: Option<u32>,
    pub node: NodeId,
    pub document: DocumentId,
    pub range: Range<usize>,
}

/// Anything a reference key can resolve to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    BlockId(BlockIdDeclaration),
    Section(SectionDeclaration),
}

impl Declaration {
    pub fn id(&self) -> &str {
        match self {
            Declaration::BlockId(block_id) => &block_id.id,
            Declaration::Section(section) => &section.id,
        }
    }

    pub fn document(&self) -> DocumentId {
        match self {
            Declaration::BlockId(block_id) => block_id.document,
            Declaration::Section(section) => section.document,
        }
    }

    pub fn node(&self) -> NodeId {
        match self {
            Declaration::BlockId(block_id) => block_id.node,
            Declaration::Section(section) => section.node,
        }
    }

    pub fn range(&self) -> Range<usize> {
        match self {
            Declaration::BlockId(block_id) => block_id.range.clone(),
            Declaration::Section(section) => section.range.clone(),
        }
    }
}

impl From<BlockIdDeclaration> for Declaration {
    fn from(value: BlockIdDeclaration) -> Self {
        Declaration::BlockId(value)
    }
}

impl From<SectionDeclaration> for Declaration {
    fn from(value: SectionDeclaration) -> Self {
        Declaration::Section(value)
    }
}

/// Candidate enumeration over a whole project.
pub trait ProjectIndex {
    /// Explicit block ids equal to `key`.
    fn find_block_ids(&self, key: &str) -> Vec<BlockIdDeclaration>;

    /// Every explicit block id in the project.
    fn all_block_ids(&self) -> Vec<BlockIdDeclaration>;

    /// Derived section ids equal to `key`, collision suffixes included.
    fn find_sections(&self, key: &str) -> Vec<SectionDeclaration>;

    /// Display name of a document, usually its file name.
    fn document_name(&self, document: DocumentId) -> Option<&str>;
}

/// A [`ProjectIndex`] over tree snapshots held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIndex {
    documents: Vec<Arc<SyntaxTree>>,
    section_ids: SectionIdStyle,
}

impl InMemoryIndex {
    pub fn new(section_ids: SectionIdStyle) -> Self {
        Self {
            documents: Vec::new(),
            section_ids,
        }
    }

    pub fn from_documents(documents: impl IntoIterator<Item = Arc<SyntaxTree>>) -> Self {
        let mut index = Self::default();
        for document in documents {
            index.insert(document);
        }
        index
    }

    /// Adds a snapshot, replacing any earlier snapshot of the same document.
    pub fn insert(&mut self, tree: Arc<SyntaxTree>) {
        let document = tree.document();
        match self
            .documents
            .iter_mut()
            .find(|existing| existing.document() == document)
        {
            Some(existing) => *existing = tree,
            None => self.documents.push(tree),
        }
        log::debug!(
            "indexed {} ({} document(s) total)",
            document,
            self.documents.len()
        );
    }

    pub fn remove(&mut self, document: DocumentId) -> Option<Arc<SyntaxTree>> {
        let position = self
            .documents
            .iter()
            .position(|tree| tree.document() == document)?;
        Some(self.documents.remove(position))
    }

    pub fn document(&self, document: DocumentId) -> Option<&Arc<SyntaxTree>> {
        self.documents
            .iter()
            .find(|tree| tree.document() == document)
    }

    pub fn documents(&self) -> &[Arc<SyntaxTree>] {
        &self.documents
    }

    fn block_ids(&self) -> impl Iterator<Item = BlockIdDeclaration> + '_ {
        self.documents.iter().flat_map(|tree| {
            tree.descendants()
                .filter(|node| node.kind() == SyntaxKind::BlockId)
                .map(move |node| BlockIdDeclaration {
                    id: node.declared_id().unwrap_or_default().to_string(),
                    node: node.id(),
                    document: tree.document(),
                    range: node.range(),
                })
        })
    }
}

impl ProjectIndex for InMemoryIndex {
    fn find_block_ids(&self, key: &str) -> Vec<BlockIdDeclaration> {
        self.block_ids().filter(|block_id| block_id.id == key).collect()
    }

    fn all_block_ids(&self) -> Vec<BlockIdDeclaration> {
        self.block_ids().collect()
    }

    fn find_sections(&self, key: &str) -> Vec<SectionDeclaration> {
        self.documents
            .iter()
            .flat_map(|tree| derive_section_ids(tree, &self.section_ids))
            .filter(|section| section.id == key)
            .collect()
    }

    fn document_name(&self, document: DocumentId) -> Option<&str> {
        self.document(document).map(|tree| tree.name())
    }
}
