//! Resolution of anchor references to their declarations.
//!
//! A key like `intro` in `<<intro>>` may point at an explicit block id or at
//! an id derived from a section heading, anywhere in the project. When the
//! referencing document declares the key itself, only its own declarations
//! are offered: an ambiguous key most plausibly means the nearest one.

use crate::index::{Declaration, ProjectIndex};
use asciidoc_syntax::{DocumentId, SyntaxKind, SyntaxNode};
use std::ops::Range;

/// A key found inside a reference node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceKey<'a> {
    pub key: &'a str,
    /// Absolute byte range of the key in the document source.
    pub range: Range<usize>,
}

/// Keys of a reference node, in source order. Nodes that are not
/// references yield nothing.
pub fn reference_keys(node: SyntaxNode<'_>) -> Vec<ReferenceKey<'_>> {
    if node.kind() != SyntaxKind::Ref {
        return Vec::new();
    }
    let start = node.range().start;
    let text = node.text();
    node.reference_ranges()
        .into_iter()
        .map(|relative| ReferenceKey {
            key: &text[relative.clone()],
            range: (start + relative.start)..(start + relative.end),
        })
        .collect()
}

/// A completion entry for an explicit block id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSuggestion {
    pub id: String,
    pub document_name: String,
}

pub struct ReferenceResolver<'a, I: ProjectIndex + ?Sized> {
    index: &'a I,
}

impl<'a, I: ProjectIndex + ?Sized> ReferenceResolver<'a, I> {
    pub fn new(index: &'a I) -> Self {
        Self { index }
    }

    /// Every declaration `key` may refer to from `document`.
    ///
    /// Block ids come before derived section ids. When at least one candidate
    /// lives in `document`, the others are dropped.
    pub fn resolve(&self, key: &str, document: DocumentId) -> Vec<Declaration> {
        let mut candidates: Vec<Declaration> = self
            .index
            .find_block_ids(key)
            .into_iter()
            .map(Declaration::from)
            .collect();
        candidates.extend(
            self.index
                .find_sections(key)
                .into_iter()
                .map(Declaration::from),
        );

        let total = candidates.len();
        if candidates
            .iter()
            .any(|candidate| candidate.document() == document)
        {
            candidates.retain(|candidate| candidate.document() == document);
        }
        log::debug!(
            "resolved `{key}` from {document}: {} of {total} candidate(s)",
            candidates.len()
        );
        candidates
    }

    /// The declaration `key` refers to, if there is exactly one.
    pub fn resolve_unique(&self, key: &str, document: DocumentId) -> Option<Declaration> {
        let mut candidates = self.resolve(key, document);
        if candidates.len() == 1 {
            candidates.pop()
        } else {
            None
        }
    }

    /// Explicit block ids across the project, labelled with their document.
    ///
    /// Derived section ids are left out: they gain suffixes when titles
    /// repeat, which makes them poor insertion text.
    pub fn suggest_completions(&self) -> Vec<IdSuggestion> {
        self.index
            .all_block_ids()
            .into_iter()
            .filter(|block_id| !block_id.id.is_empty())
            .map(|block_id| IdSuggestion {
                document_name: self
                    .index
                    .document_name(block_id.document)
                    .map(str::to_string)
                    .unwrap_or_else(|| block_id.document.to_string()),
                id: block_id.id,
            })
            .collect()
    }
}
