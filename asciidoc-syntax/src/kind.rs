//! The closed vocabulary of AsciiDoc syntax node kinds.
//!
//! Element kinds are composite nodes produced by the parser; token kinds are
//! leaves produced by the lexer. A handful of kinds exist as both a token and
//! an element (italic and monospace runs), so the element variants carry a
//! `Span` suffix.

/// Grammatical role of a syntax node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum SyntaxKind {
    // Elements
    Document,
    Section,
    Title,
    Block,
    DescriptionItem,
    Cell,
    Heading,
    Url,
    Ref,
    Link,
    InlineMacro,
    MonoSpan,
    ItalicSpan,
    AttributeDeclaration,
    BlockId,

    // Tokens that hold whole sentences
    LineComment,
    BlockComment,
    LiteralBlock,
    BlockRefText,

    // Punctuation and structure rendered as word boundaries
    Arrow,
    LBracket,
    RBracket,
    LParen,
    RParen,
    DoubleQuote,
    SingleQuote,
    TypographicDoubleQuoteStart,
    TypographicDoubleQuoteEnd,
    Assignment,
    CellSeparator,
    Bullet,
    Enumeration,
    Admonition,
    Callout,

    // Prose
    Text,
    Italic,
    Bold,
    BoldItalic,
    Mono,
    MonoBold,
    MonoItalic,
    MonoBoldItalic,
    Description,
    DescriptionEnd,
    MacroText,
    RefText,
    EndOfSentence,
    PassthroughContent,
    Lt,
    Gt,
    TypographicSingleQuoteStart,
    TypographicSingleQuoteEnd,
    AttributeValue,
    AttributeContinuation,
    AttributeContinuationLegacy,
    Whitespace,
    WhitespaceMono,
    HeadingToken,
    HeadingOldstyle,

    // Link targets
    UrlLink,
    UrlEmail,

    // Markup decoration
    BoldStart,
    BoldEnd,
    ItalicStart,
    ItalicEnd,
    MonoStart,
    MonoEnd,
    PassthroughStart,
    PassthroughEnd,
    HeadingMarker,
    BlockDelimiter,
    CommentBlockDelimiter,
    LiteralBlockDelimiter,
    AttributeNameStart,
    AttributeName,
    AttributeNameEnd,
    AttributeRef,
    InlineMacroId,
    BlockIdStart,
    BlockIdName,
    BlockIdEnd,
    RefStart,
    RefKey,
    RefSeparator,
    RefEnd,
    LinkStart,
    UrlStart,
    UrlEnd,
    Error,
}

impl SyntaxKind {
    /// Every kind, ordered by discriminant.
    pub const ALL: &'static [SyntaxKind] = &[
        SyntaxKind::Document,
        SyntaxKind::Section,
        SyntaxKind::Title,
        SyntaxKind::Block,
        SyntaxKind::DescriptionItem,
        SyntaxKind::Cell,
        SyntaxKind::Heading,
        SyntaxKind::Url,
        SyntaxKind::Ref,
        SyntaxKind::Link,
        SyntaxKind::InlineMacro,
        SyntaxKind::MonoSpan,
        SyntaxKind::ItalicSpan,
        SyntaxKind::AttributeDeclaration,
        SyntaxKind::BlockId,
        SyntaxKind::LineComment,
        SyntaxKind::BlockComment,
        SyntaxKind::LiteralBlock,
        SyntaxKind::BlockRefText,
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
        SyntaxKind::Text,
        SyntaxKind::Italic,
        SyntaxKind::Bold,
        SyntaxKind::BoldItalic,
        SyntaxKind::Mono,
        SyntaxKind::MonoBold,
        SyntaxKind::MonoItalic,
        SyntaxKind::MonoBoldItalic,
        SyntaxKind::Description,
        SyntaxKind::DescriptionEnd,
        SyntaxKind::MacroText,
        SyntaxKind::RefText,
        SyntaxKind::EndOfSentence,
        SyntaxKind::PassthroughContent,
        SyntaxKind::Lt,
        SyntaxKind::Gt,
        SyntaxKind::TypographicSingleQuoteStart,
        SyntaxKind::TypographicSingleQuoteEnd,
        SyntaxKind::AttributeValue,
        SyntaxKind::AttributeContinuation,
        SyntaxKind::AttributeContinuationLegacy,
        SyntaxKind::Whitespace,
        SyntaxKind::WhitespaceMono,
        SyntaxKind::HeadingToken,
        SyntaxKind::HeadingOldstyle,
        SyntaxKind::UrlLink,
        SyntaxKind::UrlEmail,
        SyntaxKind::BoldStart,
        SyntaxKind::BoldEnd,
        SyntaxKind::ItalicStart,
        SyntaxKind::ItalicEnd,
        SyntaxKind::MonoStart,
        SyntaxKind::MonoEnd,
        SyntaxKind::PassthroughStart,
        SyntaxKind::PassthroughEnd,
        SyntaxKind::HeadingMarker,
        SyntaxKind::BlockDelimiter,
        SyntaxKind::CommentBlockDelimiter,
        SyntaxKind::LiteralBlockDelimiter,
        SyntaxKind::AttributeNameStart,
        SyntaxKind::AttributeName,
        SyntaxKind::AttributeNameEnd,
        SyntaxKind::AttributeRef,
        SyntaxKind::InlineMacroId,
        SyntaxKind::BlockIdStart,
        SyntaxKind::BlockIdName,
        SyntaxKind::BlockIdEnd,
        SyntaxKind::RefStart,
        SyntaxKind::RefKey,
        SyntaxKind::RefSeparator,
        SyntaxKind::RefEnd,
        SyntaxKind::LinkStart,
        SyntaxKind::UrlStart,
        SyntaxKind::UrlEnd,
        SyntaxKind::Error,
    ];

    /// Composite kinds built by the parser rather than the lexer.
    pub const fn is_element(self) -> bool {
        matches!(
            self,
            SyntaxKind::Document
                | SyntaxKind::Section
                | SyntaxKind::Title
                | SyntaxKind::Block
                | SyntaxKind::DescriptionItem
                | SyntaxKind::Cell
                | SyntaxKind::Heading
                | SyntaxKind::Url
                | SyntaxKind::Ref
                | SyntaxKind::Link
                | SyntaxKind::InlineMacro
                | SyntaxKind::MonoSpan
                | SyntaxKind::ItalicSpan
                | SyntaxKind::AttributeDeclaration
                | SyntaxKind::BlockId
        )
    }

    pub const fn is_whitespace(self) -> bool {
        matches!(self, SyntaxKind::Whitespace | SyntaxKind::WhitespaceMono)
    }

    pub const fn is_comment(self) -> bool {
        matches!(self, SyntaxKind::LineComment | SyntaxKind::BlockComment)
    }
}

// TokenSet packs kinds into a u128.
const _: () = assert!(SyntaxKind::ALL.len() <= 128);
