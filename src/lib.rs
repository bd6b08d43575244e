//! # comment-forest
//!
//! Threaded comment tree reconstruction with lazy, budgeted expansion of
//! "more comments" placeholders.
//!
//! Discussion APIs rarely hand over a whole comment tree at once. They return
//! a partial tree where omitted subtrees are replaced by placeholders, and
//! later pages of comments arrive detached from the parents they belong to.
//! This library keeps such a tree consistent and expands it on demand.
//!
//! ## Design Philosophy
//!
//! - **Runtime agnostic**: expansion is a plain `async fn`; the fetch is
//!   delegated to a [`MoreCommentsFetcher`] supplied by the caller
//! - **Single owner**: every mutation takes `&mut self`, so one driver at a
//!   time is enforced by the borrow checker
//! - **Deterministic**: traversal and expansion order depend only on the
//!   tree's shape and insertion order
//!
//! ## Examples
//!
//! ```rust
//! use comment_forest::{Anchor, Comment, CommentForest};
//!
//! let mut forest = CommentForest::new(Anchor::Submission("t3_abc".into()));
//! forest.insert(Comment::root("t1_a", "t3_abc").into()).unwrap();
//! forest.insert(Comment::reply("t1_b", "t1_a").into()).unwrap();
//!
//! assert_eq!(forest.comment("t1_b").unwrap().parent_id(), "t1_a");
//! assert_eq!(forest.list().len(), 2);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod error;
pub mod forest;

// Scripted fetcher for testing
pub mod mock;

pub use error::{Error, Result};
pub use forest::{
    Anchor, Comment, CommentForest, CommentKey, CommentRef, ContextId, ExpandOptions,
    MoreComments, MoreCommentsFetcher, Node, NodeRef, PlaceholderQueue,
};
