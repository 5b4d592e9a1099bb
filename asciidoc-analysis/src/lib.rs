//! Language-aware analysis for AsciiDoc documents
//!
//! This crate provides two analyses over already-parsed AsciiDoc trees:
//! deciding what a grammar and spelling checker should see, and resolving
//! anchor references to the ids they point at.
//!
//! # Architecture
//!
//! - `identifier`: the grammar block ids and anchors must follow
//! - `token_sets`: static partitions of the node-kind vocabulary
//! - `classification`: per-node checking behavior and context roots
//! - `checking`: flattening of checking units into classified fragments
//! - `section_ids`: ids AsciiDoc derives from section headings
//! - `index`: project-wide declaration lookup
//! - `references`: reference keys and resolution with same-document preference
//! - `completion`, `go_to_definition`: editor features on top of resolution
//! - `diagnostics`: pattern warnings for references and block ids
//! - `config`, `error`: settings and failures
//!
//! # Design Principles
//!
//! - **Snapshot-based**: every query takes an immutable tree or index
//! - **Total**: classification and resolution never fail; absence is an
//!   empty result
//! - **Host-agnostic**: no parser, UI or protocol dependencies beyond the
//!   plain data types of `lsp-types`
//!
//! # Usage
//!
//! ```rust,ignore
//! use asciidoc_analysis::{checking, diagnostics, identifier, index, references};
//!
//! let tree = parser.parse(source)?; // produced by the host parser
//!
//! for unit in checking::collect_units(&tree) {
//!     checker.check(&unit.rendered_text());
//! }
//!
//! let warnings = diagnostics::check_document(&tree, identifier::IdentifierGrammar::asciidoc());
//!
//! let index = index::InMemoryIndex::from_documents(project_trees);
//! let targets = references::ReferenceResolver::new(&index).resolve("intro", tree.document());
//! ```

// Core
pub mod classification;
pub mod identifier;
pub mod token_sets;

// Resolution
pub mod index;
pub mod references;
pub mod section_ids;

// Features
pub mod checking;
pub mod completion;
pub mod diagnostics;
pub mod go_to_definition;

pub mod config;
pub mod error;

// Test support (available in tests and behind the `test-support` feature)
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use classification::{classify, is_context_root, Behavior};
pub use config::AnalysisConfig;
pub use error::{AnalysisError, Result};
pub use identifier::IdentifierGrammar;
pub use index::{Declaration, InMemoryIndex, ProjectIndex};
pub use references::ReferenceResolver;
