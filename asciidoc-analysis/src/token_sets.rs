//! Static partitions of the node-kind vocabulary used by the classifier.

use asciidoc_syntax::{SyntaxKind, TokenSet};

/// Kinds whose subtree is checked as one self-contained unit.
pub const CHECKABLE_CONTAINERS: TokenSet = TokenSet::new(&[
    SyntaxKind::LineComment,
    SyntaxKind::BlockComment,
    SyntaxKind::LiteralBlock,
    SyntaxKind::BlockRefText,
    SyntaxKind::Section,
    SyntaxKind::Title,
    SyntaxKind::Block,
    SyntaxKind::DescriptionItem,
    SyntaxKind::Cell,
    SyntaxKind::Heading,
]);

/// Kinds that are rendered but never checked; neighbouring text on either
/// side belongs to different words.
pub const SEPARATORS: TokenSet = TokenSet::new(&[
    SyntaxKind::Arrow,
    SyntaxKind::LBracket,
    SyntaxKind::RBracket,
    SyntaxKind::LParen,
    SyntaxKind::RParen,
    SyntaxKind::DoubleQuote,
    SyntaxKind::SingleQuote,
    SyntaxKind::TypographicDoubleQuoteStart,
    SyntaxKind::TypographicDoubleQuoteEnd,
    SyntaxKind::Assignment,
    SyntaxKind::CellSeparator,
    SyntaxKind::Bullet,
    SyntaxKind::Enumeration,
    SyntaxKind::Admonition,
    SyntaxKind::Callout,
]);

/// Kinds whose text is prose, including composites that nest more prose.
///
/// Brackets, parentheses and bullets also appear in [`SEPARATORS`], which the
/// classifier consults first.
pub const TEXT: TokenSet = TokenSet::new(&[
    SyntaxKind::Text,
    SyntaxKind::Italic,
    SyntaxKind::Bold,
    SyntaxKind::BoldItalic,
    SyntaxKind::Mono,
    SyntaxKind::MonoBold,
    SyntaxKind::MonoItalic,
    SyntaxKind::MonoBoldItalic,
    SyntaxKind::Description,
    // stays text until description ends become their own root
    SyntaxKind::DescriptionEnd,
    SyntaxKind::MacroText,
    SyntaxKind::BlockRefText,
    SyntaxKind::RefText,
    SyntaxKind::EndOfSentence,
    SyntaxKind::PassthroughContent,
    SyntaxKind::Lt,
    SyntaxKind::Gt,
    SyntaxKind::TypographicSingleQuoteStart,
    SyntaxKind::TypographicSingleQuoteEnd,
    SyntaxKind::LParen,
    SyntaxKind::RParen,
    SyntaxKind::LBracket,
    SyntaxKind::RBracket,
    SyntaxKind::Bullet,
    // only reached when the declaration holds checkable content
    SyntaxKind::AttributeValue,
    SyntaxKind::AttributeContinuation,
    SyntaxKind::AttributeContinuationLegacy,
    // blanks separate words
    SyntaxKind::Whitespace,
    SyntaxKind::WhitespaceMono,
    SyntaxKind::HeadingToken,
    SyntaxKind::HeadingOldstyle,
    SyntaxKind::Url,
    SyntaxKind::Ref,
    SyntaxKind::Link,
    SyntaxKind::InlineMacro,
    SyntaxKind::MonoSpan,
    SyntaxKind::ItalicSpan,
])
.union(CHECKABLE_CONTAINERS);

/// Markers whose surrounding blanks AsciiDoc does not render.
pub const SPACE_EATING: TokenSet = TokenSet::new(&[SyntaxKind::Bullet, SyntaxKind::Enumeration]);
