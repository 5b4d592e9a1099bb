//! Completion of anchor references.
//!
//! Inside `<<...>>` or `xref:...[]` the editor offers every explicit block id
//! of the project. Section ids derived from headings are not offered, as
//! they change whenever a heading is reworded or repeated.

use crate::index::ProjectIndex;
use crate::references::ReferenceResolver;
use lsp_types::CompletionItemKind;

/// A completion suggestion with display metadata.
///
/// Maps to LSP `CompletionItem` but remains protocol-agnostic. Uses
/// [`lsp_types::CompletionItemKind`] directly for the icon category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionCandidate {
    /// The text shown in the completion menu and inserted by default.
    pub label: String,
    /// Shown alongside the label; the name of the declaring document.
    pub detail: Option<String>,
    pub kind: CompletionItemKind,
}

impl CompletionCandidate {
    fn new(label: impl Into<String>, kind: CompletionItemKind) -> Self {
        Self {
            label: label.into(),
            detail: None,
            kind,
        }
    }

    fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Candidates for a reference key, in index order. Ids declared in several
/// documents appear once per document.
pub fn reference_completions<I: ProjectIndex + ?Sized>(index: &I) -> Vec<CompletionCandidate> {
    ReferenceResolver::new(index)
        .suggest_completions()
        .into_iter()
        .map(|suggestion| {
            CompletionCandidate::new(suggestion.id, CompletionItemKind::REFERENCE)
                .with_detail(suggestion.document_name)
        })
        .collect()
}
