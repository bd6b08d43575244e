//! Error types for the comment forest.

/// Result type used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building or expanding a comment forest.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A comment with this identifier is already registered in the forest
    #[error("Duplicate comment: {id} is already in the forest")]
    DuplicateComment {
        /// Identifier of the rejected comment
        id: String,
    },

    /// A non-root comment arrived before its parent
    #[error("Missing parent: {parent_id} not found for comment {id}")]
    MissingParent {
        /// Identifier of the rejected comment
        id: String,
        /// Parent identifier that did not resolve
        parent_id: String,
    },

    /// The fetch collaborator failed to resolve a placeholder
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// A scripted fetcher received a request it has no answer for
    #[error("Unexpected fetch: {0}")]
    UnexpectedFetch(String),
}
