//! Flattens checking units into classified fragments.
//!
//! Hosts that feed a grammar or spelling checker walk the tree, start a unit
//! at every context root and ask the classifier about each node below it.
//! [`collect_units`] is that walk. Text composites are descended into; every
//! other behavior covers the node's whole subtree.

use crate::classification::{classify, is_context_root, Behavior};
use asciidoc_syntax::{SyntaxNode, SyntaxTree};
use std::ops::Range;

/// A classified slice of a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub range: Range<usize>,
    pub behavior: Behavior,
}

/// Text checked as one grammar and spelling pass.
#[derive(Debug, Clone)]
pub struct CheckingUnit<'a> {
    root: SyntaxNode<'a>,
    fragments: Vec<Fragment>,
}

impl<'a> CheckingUnit<'a> {
    /// Classifies the subtree rooted at `root`.
    pub fn new(root: SyntaxNode<'a>) -> Self {
        let mut fragments = Vec::new();
        collect_fragments(root, root, &mut fragments);
        log::trace!(
            "unit {:?} produced {} fragment(s)",
            root.kind(),
            fragments.len()
        );
        Self { root, fragments }
    }

    pub fn root(&self) -> SyntaxNode<'a> {
        self.root
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Text fragments in order, as written in the source.
    pub fn text_fragments(&self) -> impl Iterator<Item = &'a str> + '_ {
        let source = self.root.tree().source();
        self.fragments
            .iter()
            .filter(|fragment| fragment.behavior == Behavior::Text)
            .map(move |fragment| &source[fragment.range.clone()])
    }

    /// The unit as the checker receives it: stealth markup disappears and
    /// separators and absorbed units turn into a single blank.
    pub fn rendered_text(&self) -> String {
        let source = self.root.tree().source();
        let mut rendered = String::new();
        for fragment in &self.fragments {
            match fragment.behavior {
                Behavior::Text => rendered.push_str(&source[fragment.range.clone()]),
                Behavior::Separate | Behavior::Absorb => rendered.push(' '),
                Behavior::Stealth => {}
            }
        }
        rendered
    }

    pub fn words(&self) -> Vec<String> {
        self.rendered_text()
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        !self
            .fragments
            .iter()
            .any(|fragment| fragment.behavior == Behavior::Text)
    }
}

/// Every checking unit of the tree, in document order of their roots.
pub fn collect_units(tree: &SyntaxTree) -> Vec<CheckingUnit<'_>> {
    tree.descendants()
        .filter(|node| is_context_root(*node))
        .map(CheckingUnit::new)
        .collect()
}

fn collect_fragments(root: SyntaxNode<'_>, node: SyntaxNode<'_>, out: &mut Vec<Fragment>) {
    match classify(root, node) {
        Behavior::Text if !node.is_leaf() => {
            for child in node.children() {
                collect_fragments(root, child, out);
            }
        }
        behavior => out.push(Fragment {
            range: node.range(),
            behavior,
        }),
    }
}
