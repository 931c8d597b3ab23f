//! Errors returned by [`Tree`][crate::Tree] queries.
//!
//! Only queries that have no meaningful answer fail. Looking up or removing a value that isn't
//! stored is an ordinary outcome and is reported with a `bool`/`Option` instead.

/// The ways a [`Tree`][crate::Tree] operation can fail.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The tree has no nodes so there is no minimum or maximum to return.
    #[error("tree is empty")]
    Empty,
}

/// Shorthand for results of [`Tree`][crate::Tree] operations.
pub type Result<T> = std::result::Result<T, TreeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_message() {
        assert_eq!(TreeError::Empty.to_string(), "tree is empty");
    }
}
