//! Decides how each syntax node feeds the grammar and spelling checker.
//!
//! Checking works on units rooted at nodes accepted by [`is_context_root`].
//! Within a unit, [`classify`] tells the walker whether a node starts its own
//! unit, is hidden, is prose, or is a word boundary. The goal is to
//! approximate what a reader sees in the rendered document: markup the
//! author typed but AsciiDoc hides must neither be flagged nor glue two
//! visible words together.

use crate::token_sets::{CHECKABLE_CONTAINERS, SEPARATORS, SPACE_EATING, TEXT};
use asciidoc_syntax::{SyntaxKind, SyntaxNode};

/// Name of the inline macro whose body is checked on its own.
pub const FOOTNOTE_MACRO: &str = "footnote";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Behavior {
    /// Nested text that forms its own unit and is left out of this one.
    ///
    /// The heading of a section is checked as a sentence of its own:
    ///
    /// ```text
    /// == Headline
    /// More text
    /// ```
    Absorb,
    /// Not rendered; adjacent text belongs to the same word.
    /// The `**` in `**b**old` is stealth, leaving the word "bold".
    Stealth,
    /// Prose to check. The `b` and `old` in `**b**old` are text.
    Text,
    /// Rendered, but adjacent text forms different words.
    /// The `->` in `one->two` separates "one" and "two".
    Separate,
}

/// Classifies `child`, a node inside the unit rooted at `root` (or `root`
/// itself). The first matching rule wins.
pub fn classify(root: SyntaxNode<'_>, child: SyntaxNode<'_>) -> Behavior {
    let is_root = root == child;
    match child.kind() {
        kind if !is_root && CHECKABLE_CONTAINERS.contains(kind) => Behavior::Absorb,
        SyntaxKind::AttributeDeclaration if is_root => {
            if child.has_checkable_content() {
                Behavior::Text
            } else {
                Behavior::Absorb
            }
        }
        kind if SEPARATORS.contains(kind) => Behavior::Separate,
        SyntaxKind::InlineMacro if !is_root && is_footnote(child) => Behavior::Absorb,
        _ if is_space_ignored_by_asciidoc(child) => Behavior::Separate,
        // A link shows its macro text when present, its target otherwise.
        SyntaxKind::UrlLink | SyntaxKind::UrlEmail if is_inside_link(child) => {
            if macro_text_follows(child) {
                Behavior::Stealth
            } else {
                Behavior::Text
            }
        }
        kind if TEXT.contains(kind) => Behavior::Text,
        _ => Behavior::Stealth,
    }
}

/// Whether `node` starts an independent checking unit.
pub fn is_context_root(node: SyntaxNode<'_>) -> bool {
    let kind = node.kind();
    (kind == SyntaxKind::AttributeDeclaration && node.has_checkable_content())
        || (kind == SyntaxKind::InlineMacro && is_footnote(node))
        || CHECKABLE_CONTAINERS.contains(kind)
        || kind.is_comment()
}

fn is_footnote(node: SyntaxNode<'_>) -> bool {
    node.macro_name() == Some(FOOTNOTE_MACRO)
}

fn is_space_ignored_by_asciidoc(node: SyntaxNode<'_>) -> bool {
    let eats_space = |sibling: Option<SyntaxNode<'_>>| {
        sibling.is_some_and(|sibling| SPACE_EATING.contains(sibling.kind()))
    };
    node.kind().is_whitespace()
        && node.text().chars().all(|ch| ch == ' ')
        && (eats_space(node.prev_sibling()) || eats_space(node.next_sibling()))
}

fn is_inside_link(node: SyntaxNode<'_>) -> bool {
    node.parent()
        .is_some_and(|parent| matches!(parent.kind(), SyntaxKind::Link | SyntaxKind::Url))
}

fn macro_text_follows(node: SyntaxNode<'_>) -> bool {
    node.next_siblings()
        .any(|sibling| sibling.kind() == SyntaxKind::MacroText)
}
