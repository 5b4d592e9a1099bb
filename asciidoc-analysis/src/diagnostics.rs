//! Pattern checks for anchor references and block id declarations.
//!
//! Keys that break the identifier grammar still resolve when possible; these
//! checks only warn, pointing at the offending key and explaining where it
//! deviates.

use crate::identifier::IdentifierGrammar;
use crate::references::reference_keys;
use asciidoc_syntax::{SyntaxKind, SyntaxNode, SyntaxTree};
use lsp_types::DiagnosticSeverity;
use std::ops::Range;

pub const ANCHOR_PATTERN_INVALID: &str = "Anchor pattern invalid";
pub const BLOCK_ID_PATTERN_INVALID: &str = "Block ID pattern invalid";

pub const DIAGNOSTIC_CODE: &str = "reference-pattern";
pub const DIAGNOSTIC_SOURCE: &str = "asciidoc";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternDiagnostic {
    /// Absolute byte range in the document source.
    pub range: Range<usize>,
    pub message: String,
    pub severity: DiagnosticSeverity,
    pub code: &'static str,
    pub source: &'static str,
}

impl PatternDiagnostic {
    fn warning(range: Range<usize>, headline: &str, explanation: String) -> Self {
        let message = if explanation.is_empty() {
            headline.to_string()
        } else {
            format!("{headline}, {explanation}")
        };
        Self {
            range,
            message,
            severity: DiagnosticSeverity::WARNING,
            code: DIAGNOSTIC_CODE,
            source: DIAGNOSTIC_SOURCE,
        }
    }
}

/// One warning per invalid key inside a reference node, anchored at the key.
pub fn check_reference(node: SyntaxNode<'_>, grammar: &IdentifierGrammar) -> Vec<PatternDiagnostic> {
    reference_keys(node)
        .into_iter()
        .filter(|key| !grammar.is_valid(key.key))
        .map(|key| {
            PatternDiagnostic::warning(
                key.range,
                ANCHOR_PATTERN_INVALID,
                grammar.explain_deviation(key.key),
            )
        })
        .collect()
}

/// A warning spanning the whole declaration when its id is invalid.
pub fn check_block_id(node: SyntaxNode<'_>, grammar: &IdentifierGrammar) -> Option<PatternDiagnostic> {
    if node.kind() != SyntaxKind::BlockId {
        return None;
    }
    let id = node.declared_id().unwrap_or_default();
    if grammar.is_valid(id) {
        return None;
    }
    Some(PatternDiagnostic::warning(
        node.range(),
        BLOCK_ID_PATTERN_INVALID,
        grammar.explain_deviation(id),
    ))
}

/// Pattern warnings for every reference and block id, in document order.
pub fn check_document(tree: &SyntaxTree, grammar: &IdentifierGrammar) -> Vec<PatternDiagnostic> {
    let mut diagnostics = Vec::new();
    for node in tree.descendants() {
        match node.kind() {
            SyntaxKind::Ref => diagnostics.extend(check_reference(node, grammar)),
            SyntaxKind::BlockId => diagnostics.extend(check_block_id(node, grammar)),
            _ => {}
        }
    }
    log::debug!(
        "{}: {} pattern diagnostic(s)",
        tree.name(),
        diagnostics.len()
    );
    diagnostics
}
