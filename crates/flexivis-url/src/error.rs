//! Construction errors.

use thiserror::Error;

use crate::layout::JoinKind;

/// Convenience alias used by every fallible constructor in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a layout tree.
///
/// All of them are caller mistakes caught at construction time. Once a
/// [`LayoutNode`](crate::LayoutNode) exists it always compiles to a URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{kind} layout needs at least 1 child but got 0")]
    EmptyJoin { kind: JoinKind },
    #[error("raw content must have a URL with an https, http or file scheme, but got: {url}")]
    UnsupportedScheme { url: String },
    #[error("view name must not be empty")]
    EmptyViewName,
}
