use asciidoc_analysis::checking::collect_units;
use asciidoc_analysis::classification::FOOTNOTE_MACRO;
use asciidoc_syntax::{DocumentId, Payload, SyntaxKind, SyntaxTree, TreeBuilder};

/// ```text
/// = User Guide
/// :description: A short guide
/// :toc:
///
/// == My Section->Title
/// // TODO tighten wording
/// * first **b**old item
/// Text with a note.footnote:[Checked alone.]
/// |===
/// | Cell text
/// |===
/// ```
fn guide() -> SyntaxTree {
    let mut b = TreeBuilder::new(DocumentId(0), "guide.adoc");
    b.start_node(SyntaxKind::Title)
        .token(SyntaxKind::HeadingMarker, "=")
        .token(SyntaxKind::Whitespace, " ")
        .token(SyntaxKind::HeadingToken, "User Guide")
        .finish_node()
        .token(SyntaxKind::Whitespace, "\n")
        .start_node_with(
            SyntaxKind::AttributeDeclaration,
            Payload::Attribute {
                name: "description".to_string(),
                checkable: true,
            },
        )
        .token(SyntaxKind::AttributeNameStart, ":")
        .token(SyntaxKind::AttributeName, "description")
        .token(SyntaxKind::AttributeNameEnd, ":")
        .token(SyntaxKind::Whitespace, " ")
        .token(SyntaxKind::AttributeValue, "A short guide")
        .finish_node()
        .token(SyntaxKind::Whitespace, "\n")
        .start_node_with(
            SyntaxKind::AttributeDeclaration,
            Payload::Attribute {
                name: "toc".to_string(),
                checkable: false,
            },
        )
        .token(SyntaxKind::AttributeNameStart, ":")
        .token(SyntaxKind::AttributeName, "toc")
        .token(SyntaxKind::AttributeNameEnd, ":")
        .finish_node()
        .token(SyntaxKind::Whitespace, "\n\n")
        .start_node(SyntaxKind::Section)
        .start_node(SyntaxKind::Heading)
        .token(SyntaxKind::HeadingMarker, "==")
        .token(SyntaxKind::Whitespace, " ")
        .token(SyntaxKind::HeadingToken, "My")
        .token(SyntaxKind::Whitespace, " ")
        .token(SyntaxKind::HeadingToken, "Section")
        .token(SyntaxKind::Arrow, "->")
        .token(SyntaxKind::HeadingToken, "Title")
        .finish_node()
        .token(SyntaxKind::Whitespace, "\n")
        .token(SyntaxKind::LineComment, "// TODO tighten wording")
        .token(SyntaxKind::Whitespace, "\n")
        .start_node(SyntaxKind::Block)
        .token(SyntaxKind::Bullet, "*")
        .token(SyntaxKind::Whitespace, " ")
        .token(SyntaxKind::Text, "first")
        .token(SyntaxKind::Whitespace, " ")
        .token(SyntaxKind::BoldStart, "**")
        .token(SyntaxKind::Bold, "b")
        .token(SyntaxKind::BoldEnd, "**")
        .token(SyntaxKind::Text, "old")
        .token(SyntaxKind::Whitespace, " ")
        .token(SyntaxKind::Text, "item")
        .token(SyntaxKind::Whitespace, "\n")
        .token(SyntaxKind::Text, "Text with a note")
        .token(SyntaxKind::EndOfSentence, ".")
        .start_node_with(
            SyntaxKind::InlineMacro,
            Payload::Macro {
                name: FOOTNOTE_MACRO.to_string(),
            },
        )
        .token(SyntaxKind::InlineMacroId, "footnote:")
        .token(SyntaxKind::LBracket, "[")
        .token(SyntaxKind::MacroText, "Checked alone.")
        .token(SyntaxKind::RBracket, "]")
        .finish_node()
        .token(SyntaxKind::Whitespace, "\n")
        .token(SyntaxKind::BlockDelimiter, "|===")
        .token(SyntaxKind::Whitespace, "\n")
        .token(SyntaxKind::CellSeparator, "|")
        .start_node(SyntaxKind::Cell)
        .token(SyntaxKind::Whitespace, " ")
        .token(SyntaxKind::Text, "Cell text")
        .finish_node()
        .token(SyntaxKind::Whitespace, "\n")
        .token(SyntaxKind::BlockDelimiter, "|===")
        .finish_node()
        .finish_node();
    b.finish().expect("balanced")
}

#[test]
fn guide_splits_into_reader_visible_units() {
    let tree = guide();
    let units: Vec<_> = collect_units(&tree)
        .into_iter()
        .map(|unit| (unit.root().kind(), unit.words()))
        .collect();

    let words = |list: &[&str]| list.iter().map(|w| w.to_string()).collect::<Vec<_>>();
    assert_eq!(
        units,
        vec![
            (SyntaxKind::Title, words(&["User", "Guide"])),
            (
                SyntaxKind::AttributeDeclaration,
                words(&["A", "short", "guide"])
            ),
            (SyntaxKind::Section, words(&[])),
            (SyntaxKind::Heading, words(&["My", "Section", "Title"])),
            (
                SyntaxKind::LineComment,
                words(&["//", "TODO", "tighten", "wording"])
            ),
            (
                SyntaxKind::Block,
                words(&["first", "bold", "item", "Text", "with", "a", "note."])
            ),
            (SyntaxKind::InlineMacro, words(&["Checked", "alone."])),
            (SyntaxKind::Cell, words(&["Cell", "text"])),
        ]
    );
}

#[test]
fn arrow_in_heading_is_a_word_boundary() {
    let tree = guide();
    let heading = collect_units(&tree)
        .into_iter()
        .find(|unit| unit.root().kind() == SyntaxKind::Heading)
        .expect("heading unit");
    assert_eq!(
        heading.text_fragments().filter(|t| !t.trim().is_empty()).collect::<Vec<_>>(),
        vec!["My", "Section", "Title"]
    );
    assert_eq!(heading.rendered_text(), " My Section Title");
}
