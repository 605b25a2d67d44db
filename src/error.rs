use thiserror::Error;

/// Error enumerates over all possible errors that this package
/// shall return.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// Fatal case, root of a non-empty tree must be black.
    #[error("root node is red")]
    RedRoot,
    /// Fatal case, a red node has a red child.
    #[error("consecutive red nodes")]
    ConsecutiveReds,
    /// Fatal case, black-height differs between two paths. The String
    /// component of this variant can be used for debugging.
    #[error("unbalanced blacks, {0}")]
    UnbalancedBlacks(String),
    /// Fatal case, entries are not in comparator order. Holds the in-order
    /// position of the first offending entry.
    #[error("entry {0} is out of sort order")]
    SortError(usize),
    /// Fatal case, a child does not point back to its parent. Holds the
    /// depth at which the broken link was found.
    #[error("broken parent link at depth {0}")]
    BrokenParentLink(usize),
    /// Fatal case, cached length does not match the reachable nodes.
    #[error("size mismatch, len {len} reachable {reachable}")]
    SizeMismatch { len: usize, reachable: usize },
    /// Cursor is not positioned on any entry, call move_next/move_prev.
    #[error("cursor is not positioned on an entry")]
    CursorUnset,
    /// Cursor entry was already removed, move the cursor before removing
    /// again.
    #[error("cursor entry already removed")]
    AlreadyRemoved,
}
