//! Validity rules for anchor and block id keys.
//!
//! A key is valid when it fully matches the identifier pattern and contains
//! no whitespace. When it is not, [`IdentifierGrammar::deviation`] locates the
//! first character after which no continuation of the key can match, so
//! diagnostics can point at it.

use crate::error::{AnalysisError, Result};
use regex::Regex;
use regex_automata::dfa::{dense, Automaton};
use regex_automata::{Anchored, Input};
use std::fmt;
use std::sync::OnceLock;

/// AsciiDoc block id rule: a letter, `_` or `:` followed by letters, digits,
/// `_`, `:`, `.` and `-`.
pub const DEFAULT_IDENTIFIER_PATTERN: &str = r"[\p{L}_:][\p{L}\p{N}_:.\-]*";

static ASCIIDOC_GRAMMAR: OnceLock<IdentifierGrammar> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct IdentifierGrammar {
    pattern: Regex,
    /// Same pattern as a DFA, walked byte by byte to find where a key stops
    /// being a viable prefix of any match.
    automaton: dense::DFA<Vec<u32>>,
}

/// Why a key fails the identifier grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deviation {
    /// The key has no characters at all.
    Empty,
    /// The key contains a space, tab or other whitespace.
    Whitespace,
    /// The very first character is not allowed.
    StartsWith(char),
    /// No continuation of this prefix can match; the offending character
    /// is its last one.
    Prefix(String),
}

impl fmt::Display for Deviation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Deviation::Empty => write!(f, "must not be empty"),
            Deviation::Whitespace => write!(f, "must not contain spaces or tabs"),
            Deviation::StartsWith(ch) => write!(f, "problem starting at '{ch}'"),
            Deviation::Prefix(prefix) => write!(f, "problem with prefix: '{prefix}'"),
        }
    }
}

impl IdentifierGrammar {
    /// Compiles a grammar that must match a whole key. The pattern is
    /// anchored here, so callers pass it without `^`/`$`.
    pub fn new(pattern: &str) -> Result<Self> {
        let anchored = format!("^(?:{pattern})$");
        let regex = Regex::new(&anchored).map_err(|source| {
            AnalysisError::InvalidIdentifierPattern {
                pattern: pattern.to_string(),
                source,
            }
        })?;
        let automaton =
            dense::DFA::new(&anchored).map_err(|source| AnalysisError::IdentifierAutomaton {
                pattern: pattern.to_string(),
                source: Box::new(source),
            })?;
        Ok(Self {
            pattern: regex,
            automaton,
        })
    }

    /// The grammar AsciiDoc applies to block ids and anchors.
    pub fn asciidoc() -> &'static IdentifierGrammar {
        ASCIIDOC_GRAMMAR.get_or_init(|| {
            IdentifierGrammar::new(DEFAULT_IDENTIFIER_PATTERN)
                .expect("default identifier pattern compiles")
        })
    }

    /// Whether `key` fully matches the pattern and holds no whitespace.
    pub fn is_valid(&self, key: &str) -> bool {
        !contains_whitespace(key) && self.pattern.is_match(key)
    }

    /// Why `key` is invalid, or `None` when it is valid.
    pub fn deviation(&self, key: &str) -> Option<Deviation> {
        if key.is_empty() {
            return Some(Deviation::Empty);
        }
        if contains_whitespace(key) {
            return Some(Deviation::Whitespace);
        }
        if self.pattern.is_match(key) {
            return None;
        }

        // A key that never leaves the automaton is a truncated match; blame
        // its last character.
        let end = self.dead_end(key).unwrap_or(key.len());
        let (start, ch) = key[..end].char_indices().next_back()?;
        Some(if start == 0 {
            Deviation::StartsWith(ch)
        } else {
            Deviation::Prefix(key[..end].to_string())
        })
    }

    /// Byte offset just past the character on which the automaton reaches
    /// its dead state.
    fn dead_end(&self, key: &str) -> Option<usize> {
        let input = Input::new(key).anchored(Anchored::Yes);
        let mut state = self.automaton.start_state_forward(&input).ok()?;
        for (offset, byte) in key.bytes().enumerate() {
            state = self.automaton.next_state(state, byte);
            if self.automaton.is_dead_state(state) {
                let end = (offset + 1..=key.len()).find(|end| key.is_char_boundary(*end))?;
                return Some(end);
            }
        }
        None
    }

    /// Human-readable reason `key` is invalid, or an empty string when it is
    /// valid.
    pub fn explain_deviation(&self, key: &str) -> String {
        self.deviation(key)
            .map(|deviation| deviation.to_string())
            .unwrap_or_default()
    }
}

impl Default for IdentifierGrammar {
    fn default() -> Self {
        Self::asciidoc().clone()
    }
}

fn contains_whitespace(key: &str) -> bool {
    key.chars().any(char::is_whitespace)
}
