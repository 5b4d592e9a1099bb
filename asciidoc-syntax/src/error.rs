use crate::kind::SyntaxKind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("finish_node called without an open element")]
    NoOpenElement,

    #[error("{kind:?} is an element kind and cannot be used as a token")]
    ElementAsToken { kind: SyntaxKind },

    #[error("{count} element(s) left open, innermost is {innermost:?}")]
    UnclosedElements { count: usize, innermost: SyntaxKind },
}
