//! Errors returned while constructing a tree

/// The error type for tree construction.
///
/// Queries on a constructed tree never fail: a tree always holds at least its
/// root point.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// a tree was requested over an empty point set
    #[error("cannot build a tree from an empty point set")]
    EmptyInput,
}
