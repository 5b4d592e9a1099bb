//! Section ids AsciiDoc derives from heading text.
//!
//! A section without an explicit id is addressable as `_getting_started`
//! when its heading reads `Getting Started`. The derivation lowercases the
//! title, drops characters that cannot appear in an id, squeezes blanks,
//! dots and hyphens into the separator and prepends the prefix. Ids that
//! collide inside one document get a counter suffix starting at 2.

use crate::index::SectionDeclaration;
use crate::token_sets::TEXT;
use asciidoc_syntax::{SyntaxKind, SyntaxNode, SyntaxTree};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// First suffix used for colliding section ids.
const UNIQUE_ID_START_INDEX: u32 = 2;

static INVALID_SECTION_ID_CHARS: OnceLock<Regex> = OnceLock::new();

fn invalid_section_id_chars() -> &'static Regex {
    INVALID_SECTION_ID_CHARS.get_or_init(|| {
        Regex::new(
            r"<[^>]+>|&(?:[a-z][a-z]+\d{0,2}|#\d\d\d{0,4}|#x[\da-f][\da-f][\da-f]{0,3});|[^ \w\-.]+",
        )
        .expect("section id character pattern compiles")
    })
}

/// The `idprefix` and `idseparator` document attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionIdStyle {
    pub prefix: String,
    pub separator: String,
}

impl Default for SectionIdStyle {
    fn default() -> Self {
        Self {
            prefix: "_".to_string(),
            separator: "_".to_string(),
        }
    }
}

/// Derives the id for a section titled `title`, ignoring collisions.
pub fn generate_id(title: &str, style: &SectionIdStyle) -> String {
    let lowered = title.to_lowercase();
    let cleaned = invalid_section_id_chars().replace_all(&lowered, "");
    let raw = format!("{}{}", style.prefix, cleaned);

    // Only the first character of a longer separator is honoured.
    let Some(separator) = style.separator.chars().next() else {
        return raw.replace(' ', "");
    };
    let squeezed: &[char] = if separator == '-' || separator == '.' {
        &[' ', '.', '-']
    } else {
        &[' ', separator, '.', '-']
    };

    let mut id = String::with_capacity(raw.len());
    let mut in_run = false;
    for ch in raw.chars() {
        if squeezed.contains(&ch) {
            if !in_run {
                id.push(separator);
            }
            in_run = true;
        } else {
            id.push(ch);
            in_run = false;
        }
    }
    if id.ends_with(separator) {
        id.pop();
    }
    if style.prefix.is_empty() && id.starts_with(separator) {
        id.remove(0);
    }
    id
}

/// Section ids of one document in document order.
///
/// Sections that carry an explicit block id are addressed by that id and
/// get no derived one. Explicit ids still take part in collision checks.
pub fn derive_section_ids(tree: &SyntaxTree, style: &SectionIdStyle) -> Vec<SectionDeclaration> {
    let mut taken: HashSet<String> = tree
        .descendants()
        .filter_map(|node| node.declared_id())
        .map(str::to_string)
        .collect();

    let mut sections = Vec::new();
    for section in tree
        .descendants()
        .filter(|node| node.kind() == SyntaxKind::Section)
    {
        if has_explicit_id(section) {
            continue;
        }
        let Some(title) = section_title(section) else {
            continue;
        };
        let base = generate_id(&title, style);
        if base.is_empty() {
            continue;
        }

        let (id, suffix) = if taken.contains(&base) {
            let separator = style.separator.chars().next().map(String::from).unwrap_or_default();
            let mut counter = UNIQUE_ID_START_INDEX;
            while taken.contains(&format!("{base}{separator}{counter}")) {
                counter += 1;
            }
            (format!("{base}{separator}{counter}"), Some(counter))
        } else {
            (base, None)
        };
        taken.insert(id.clone());

        sections.push(SectionDeclaration {
            id,
            title,
            suffix,
            node: section.id(),
            document: tree.document(),
            range: section.range(),
        });
    }
    sections
}

/// Visible heading text of a section, without the level marker.
pub fn section_title(section: SyntaxNode<'_>) -> Option<String> {
    let heading = section
        .children()
        .find(|child| child.kind() == SyntaxKind::Heading)?;
    let title: String = heading
        .descendants()
        .filter(|node| node.is_leaf() && TEXT.contains(node.kind()))
        .map(|node| node.text())
        .collect();
    let title = title.trim();
    (!title.is_empty()).then(|| title.to_string())
}

fn has_explicit_id(section: SyntaxNode<'_>) -> bool {
    section
        .children()
        .any(|child| child.kind() == SyntaxKind::BlockId && child.declared_id().is_some())
}
