use asciidoc_syntax::{DocumentId, Payload, SyntaxKind, SyntaxNode, SyntaxTree, TreeBuilder};
use std::sync::Arc;

pub fn build_tree(build: impl FnOnce(&mut TreeBuilder)) -> SyntaxTree {
    build_document(0, "index.adoc", build)
}

pub fn build_document(
    document: u32,
    name: &str,
    build: impl FnOnce(&mut TreeBuilder),
) -> SyntaxTree {
    let mut builder = TreeBuilder::new(DocumentId(document), name);
    build(&mut builder);
    builder.finish().expect("fixture tree is balanced")
}

/// First node of `kind` in document order.
pub fn find_kind(tree: &SyntaxTree, kind: SyntaxKind) -> SyntaxNode<'_> {
    tree.descendants()
        .find(|node| node.kind() == kind)
        .unwrap_or_else(|| panic!("no {kind:?} node in fixture"))
}

/// `[[id]]`
pub fn block_id(builder: &mut TreeBuilder, id: &str) {
    builder
        .start_node_with(
            SyntaxKind::BlockId,
            Payload::BlockId { id: id.to_string() },
        )
        .token(SyntaxKind::BlockIdStart, "[[")
        .token(SyntaxKind::BlockIdName, id)
        .token(SyntaxKind::BlockIdEnd, "]]")
        .finish_node()
        .token(SyntaxKind::Whitespace, "\n");
}

/// `<<key>>`
pub fn reference(builder: &mut TreeBuilder, key: &str) {
    builder
        .start_node(SyntaxKind::Ref)
        .token(SyntaxKind::RefStart, "<<")
        .token(SyntaxKind::RefKey, key)
        .token(SyntaxKind::RefEnd, ">>")
        .finish_node();
}

/// Opens a section with a level-2 heading; the caller closes it.
pub fn open_section(builder: &mut TreeBuilder, title: &str) {
    builder
        .start_node(SyntaxKind::Section)
        .start_node(SyntaxKind::Heading)
        .token(SyntaxKind::HeadingMarker, "==")
        .token(SyntaxKind::Whitespace, " ")
        .token(SyntaxKind::HeadingToken, title)
        .finish_node()
        .token(SyntaxKind::Whitespace, "\n");
}

/// Two chapters that both declare `shared`, plus an appendix declaring
/// nothing, the way a multi-file book often ends up.
pub fn book() -> Vec<Arc<SyntaxTree>> {
    let chapter_one = build_document(1, "chapter-1.adoc", |b| {
        block_id(b, "shared");
        open_section(b, "Getting Started");
        b.token(SyntaxKind::Text, "See ");
        reference(b, "shared");
        b.finish_node();
    });
    let chapter_two = build_document(2, "chapter-2.adoc", |b| {
        block_id(b, "shared");
        block_id(b, "only-two");
        open_section(b, "Getting Started");
        b.finish_node();
    });
    let appendix = build_document(3, "appendix.adoc", |b| {
        open_section(b, "Glossary");
        reference(b, "shared");
        b.finish_node();
    });
    vec![Arc::new(chapter_one), Arc::new(chapter_two), Arc::new(appendix)]
}
