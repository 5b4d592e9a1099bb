use asciidoc_syntax::{DocumentId, SyntaxKind, SyntaxTree, TreeBuilder};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Step {
    Open(SyntaxKind),
    Token(SyntaxKind, String),
    Close,
}

fn step_strategy() -> impl Strategy<Value = Step> {
    let elements: Vec<_> = SyntaxKind::ALL
        .iter()
        .copied()
        .filter(|kind| kind.is_element() && *kind != SyntaxKind::Document)
        .collect();
    let tokens: Vec<_> = SyntaxKind::ALL
        .iter()
        .copied()
        .filter(|kind| !kind.is_element())
        .collect();
    prop_oneof![
        prop::sample::select(elements).prop_map(Step::Open),
        (prop::sample::select(tokens), "[a-z \n]{0,5}")
            .prop_map(|(kind, text)| Step::Token(kind, text)),
        Just(Step::Close),
    ]
}

/// Replays `steps`, skipping closes that would pop the root and closing
/// whatever is left open at the end.
fn replay(steps: &[Step]) -> (SyntaxTree, String) {
    let mut builder = TreeBuilder::new(DocumentId(0), "generated.adoc");
    let mut open = 0usize;
    let mut written = String::new();
    for step in steps {
        match step {
            Step::Open(kind) => {
                builder.start_node(*kind);
                open += 1;
            }
            Step::Token(kind, text) => {
                builder.token(*kind, text);
                written.push_str(text);
            }
            Step::Close if open > 0 => {
                builder.finish_node();
                open -= 1;
            }
            Step::Close => {}
        }
    }
    for _ in 0..open {
        builder.finish_node();
    }
    (builder.finish().expect("balanced replay"), written)
}

proptest! {
    #[test]
    fn source_is_the_concatenated_tokens(steps in prop::collection::vec(step_strategy(), 0..40)) {
        let (tree, written) = replay(&steps);
        prop_assert_eq!(tree.source(), written.as_str());
        prop_assert_eq!(tree.root().range(), 0..written.len());

        let leaves: String = tree
            .descendants()
            .filter(|node| !node.kind().is_element())
            .map(|node| node.text())
            .collect();
        prop_assert_eq!(leaves, written);
    }

    #[test]
    fn children_tile_their_parent(steps in prop::collection::vec(step_strategy(), 0..40)) {
        let (tree, _) = replay(&steps);
        for node in tree.descendants() {
            let range = node.range();
            let mut cursor = range.start;
            for child in node.children() {
                prop_assert_eq!(child.parent(), Some(node));
                prop_assert_eq!(child.range().start, cursor);
                cursor = child.range().end;
            }
            if !node.is_leaf() {
                prop_assert_eq!(cursor, range.end);
            }
        }
    }

    #[test]
    fn offsets_land_on_the_deepest_node(steps in prop::collection::vec(step_strategy(), 1..40)) {
        let (tree, written) = replay(&steps);
        for offset in 0..written.len() {
            let node = tree.node_at_offset(offset).expect("offset inside the source");
            prop_assert!(node.range().contains(&offset));
            prop_assert!(node.children().all(|child| !child.range().contains(&offset)));
        }
    }
}
