use crate::index::{Declaration, ProjectIndex};
use crate::references::{reference_keys, ReferenceResolver};
use asciidoc_syntax::{SyntaxKind, SyntaxTree};

/// Declarations of the reference key under `offset`.
///
/// An offset just past the last character of a key still counts, so a
/// cursor placed at the end of `<<intro` resolves. Several results mean the
/// caller should let the user choose.
pub fn goto_definition<I: ProjectIndex + ?Sized>(
    index: &I,
    tree: &SyntaxTree,
    offset: usize,
) -> Vec<Declaration> {
    let Some(node) = tree.node_at_offset(offset.saturating_sub(1)) else {
        return Vec::new();
    };
    let Some(reference) = std::iter::once(node)
        .chain(node.ancestors())
        .find(|candidate| candidate.kind() == SyntaxKind::Ref)
    else {
        return Vec::new();
    };

    let resolver = ReferenceResolver::new(index);
    reference_keys(reference)
        .into_iter()
        .find(|key| key.range.start <= offset && offset <= key.range.end)
        .map(|key| resolver.resolve(key.key, tree.document()))
        .unwrap_or_default()
}
