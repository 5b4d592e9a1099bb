//! Syntax tree snapshots for AsciiDoc documents
//!
//! This crate is the contract between an AsciiDoc parser and the analyses
//! built on top of it. It does not parse markup: a parser (or a test) feeds
//! tokens and elements into a [`TreeBuilder`] and receives an immutable
//! [`SyntaxTree`]. Analyses then walk the tree through [`SyntaxNode`] cursors.
//!
//! - `kind`: the closed [`SyntaxKind`] vocabulary
//! - `token_set`: constant-time kind sets used by classification tables
//! - `tree`: the arena, node cursors and element payloads
//! - `builder`: incremental tree construction

pub mod builder;
pub mod error;
pub mod kind;
pub mod token_set;
pub mod tree;

pub use builder::TreeBuilder;
pub use error::TreeError;
pub use kind::SyntaxKind;
pub use token_set::TokenSet;
pub use tree::{DocumentId, NodeId, Payload, SyntaxNode, SyntaxTree};
