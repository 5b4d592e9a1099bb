use crate::kind::SyntaxKind;
use std::fmt;

/// A constant-time membership set over [`SyntaxKind`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TokenSet(u128);

impl TokenSet {
    pub const EMPTY: TokenSet = TokenSet(0);

    pub const fn new(kinds: &[SyntaxKind]) -> TokenSet {
        let mut bits = 0u128;
        let mut i = 0;
        while i < kinds.len() {
            bits |= mask(kinds[i]);
            i += 1;
        }
        TokenSet(bits)
    }

    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }

    pub const fn contains(self, kind: SyntaxKind) -> bool {
        self.0 & mask(kind) != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = SyntaxKind> {
        SyntaxKind::ALL
            .iter()
            .copied()
            .filter(move |kind| self.contains(*kind))
    }
}

impl fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

const fn mask(kind: SyntaxKind) -> u128 {
    1u128 << (kind as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUNCTUATION: TokenSet = TokenSet::new(&[SyntaxKind::Arrow, SyntaxKind::LParen]);

    #[test]
    fn membership_and_union() {
        assert!(PUNCTUATION.contains(SyntaxKind::Arrow));
        assert!(!PUNCTUATION.contains(SyntaxKind::Text));

        let merged = PUNCTUATION.union(TokenSet::new(&[SyntaxKind::Error]));
        assert!(merged.contains(SyntaxKind::Error));
        assert_eq!(
            merged.iter().collect::<Vec<_>>(),
            vec![SyntaxKind::Arrow, SyntaxKind::LParen, SyntaxKind::Error]
        );
    }

    #[test]
    fn empty_set_contains_nothing() {
        assert!(TokenSet::EMPTY.is_empty());
        assert!(SyntaxKind::ALL
            .iter()
            .all(|kind| !TokenSet::EMPTY.contains(*kind)));
    }
}
