use asciidoc_analysis::completion::reference_completions;
use asciidoc_analysis::diagnostics::check_document;
use asciidoc_analysis::go_to_definition::goto_definition;
use asciidoc_analysis::{AnalysisConfig, Declaration, InMemoryIndex, ReferenceResolver};
use asciidoc_syntax::{DocumentId, Payload, SyntaxKind, SyntaxTree, TreeBuilder};
use proptest::prelude::*;
use std::sync::Arc;

fn declaring(document: u32, ids: &[&str]) -> Arc<SyntaxTree> {
    let mut builder = TreeBuilder::new(DocumentId(document), format!("doc-{document}.adoc"));
    for id in ids {
        builder
            .start_node_with(SyntaxKind::BlockId, Payload::BlockId { id: id.to_string() })
            .token(SyntaxKind::BlockIdStart, "[[")
            .token(SyntaxKind::BlockIdName, id)
            .token(SyntaxKind::BlockIdEnd, "]]")
            .finish_node()
            .token(SyntaxKind::Whitespace, "\n");
    }
    Arc::new(builder.finish().expect("balanced"))
}

/// A chapter titled `title` that links to `key` from its body.
fn chapter(document: u32, title: &str, key: &str) -> Arc<SyntaxTree> {
    let mut builder = TreeBuilder::new(DocumentId(document), format!("chapter-{document}.adoc"));
    builder
        .start_node(SyntaxKind::Section)
        .start_node(SyntaxKind::Heading)
        .token(SyntaxKind::HeadingMarker, "==")
        .token(SyntaxKind::Whitespace, " ")
        .token(SyntaxKind::HeadingToken, title)
        .finish_node()
        .token(SyntaxKind::Whitespace, "\n")
        .start_node(SyntaxKind::Block)
        .token(SyntaxKind::Text, "Read ")
        .start_node(SyntaxKind::Ref)
        .token(SyntaxKind::RefStart, "<<")
        .token(SyntaxKind::RefKey, key)
        .token(SyntaxKind::RefEnd, ">>")
        .finish_node()
        .finish_node()
        .finish_node();
    Arc::new(builder.finish().expect("balanced"))
}

proptest! {
    #[test]
    fn same_document_declarations_win(documents in 2u32..6, requester in 0u32..8) {
        let index = InMemoryIndex::from_documents((0..documents).map(|d| declaring(d, &["foo"])));
        let resolver = ReferenceResolver::new(&index);
        let found = resolver.resolve("foo", DocumentId(requester));

        if requester < documents {
            prop_assert_eq!(found.len(), 1);
            prop_assert_eq!(found[0].document(), DocumentId(requester));
        } else {
            prop_assert_eq!(found.len(), documents as usize);
            prop_assert!(resolver.resolve_unique("foo", DocumentId(requester)).is_none());
        }
        prop_assert!(resolver.resolve("nonexistent-key", DocumentId(requester)).is_empty());
    }
}

#[test]
fn two_documents_and_a_bystander() {
    let index = InMemoryIndex::from_documents([
        declaring(1, &["foo"]),
        declaring(2, &["foo"]),
        declaring(3, &["bar"]),
    ]);
    let resolver = ReferenceResolver::new(&index);

    let from_first = resolver.resolve("foo", DocumentId(1));
    assert_eq!(from_first.len(), 1);
    assert_eq!(from_first[0].document(), DocumentId(1));

    let from_third = resolver.resolve("foo", DocumentId(3));
    let owners: Vec<_> = from_third.iter().map(Declaration::document).collect();
    assert_eq!(owners, vec![DocumentId(1), DocumentId(2)]);
}

#[test]
fn section_references_resolve_across_chapters() {
    let intro = chapter(1, "Introduction", "_installation");
    let install = chapter(2, "Installation", "_introduction");
    let index = InMemoryIndex::from_documents([intro.clone(), install.clone()]);

    let cursor = intro.source().find("_installation").expect("key") + 1;
    let targets = goto_definition(&index, &intro, cursor);
    assert_eq!(targets.len(), 1);
    match &targets[0] {
        Declaration::Section(section) => {
            assert_eq!(section.document, DocumentId(2));
            assert_eq!(section.title, "Installation");
        }
        other => panic!("expected a section, got {other:?}"),
    }

    // Derived ids are never offered as completions.
    assert!(reference_completions(&index).is_empty());
}

#[test]
fn configured_section_style_drives_resolution() {
    let config = AnalysisConfig::from_toml_str(
        "section_id_prefix = \"\"\nsection_id_separator = \"-\"\n",
    )
    .expect("config parses");
    let mut index = InMemoryIndex::new(config.section_id_style());
    index.insert(chapter(1, "Getting Started", "getting-started"));

    let resolver = ReferenceResolver::new(&index);
    assert!(resolver
        .resolve_unique("getting-started", DocumentId(1))
        .is_some());

    let grammar = config.identifier_grammar().expect("grammar compiles");
    let tree = index.document(DocumentId(1)).expect("indexed");
    assert!(check_document(tree, &grammar).is_empty());
}
