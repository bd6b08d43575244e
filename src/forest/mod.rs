//! Threaded comment forests with lazy expansion.
//!
//! This module reassembles discussion threads from partially loaded comment
//! data and fills in the gaps on demand:
//!
//! - **Threading**: placing each comment under its parent through a
//!   forest-wide identifier index, whatever order the comments arrive in
//! - **Flattening**: listing the whole tree breadth-first
//! - **Expansion**: resolving "more comments" placeholders against an
//!   external fetcher, within a fetch budget and a size threshold
//!
//! # Overview
//!
//! - [`Comment`] and [`MoreComments`]: the two kinds of [`Node`]
//! - [`CommentForest`]: the tree, its top-level sequence and identifier index
//! - [`NodeRef`] / [`CommentRef`]: borrowed views into a forest
//! - [`PlaceholderQueue`]: placeholders ordered by how many comments they hide
//! - [`MoreCommentsFetcher`]: the boundary to the API client
//! - [`ExpandOptions`]: fetch budget and threshold for [`CommentForest::replace_more`]
//!
//! # Example
//!
//! ```
//! use comment_forest::mock::MockFetcher;
//! use comment_forest::{Anchor, Comment, CommentForest, ExpandOptions, MoreComments};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut forest = CommentForest::with_nodes(
//!     Anchor::Submission("t3_abc".into()),
//!     vec![
//!         Comment::root("t1_a", "t3_abc").into(),
//!         MoreComments::new("t1_more", "t1_a", 1).with_children(["t1_b"]).into(),
//!     ],
//! )?;
//!
//! let mut fetcher = MockFetcher::new(vec![(
//!     "t1_more".to_string(),
//!     vec![Comment::reply("t1_b", "t1_a").into()],
//! )]);
//!
//! let skipped = forest.replace_more(&mut fetcher, ExpandOptions::default()).await?;
//! assert!(skipped.is_empty());
//!
//! let ids: Vec<&str> = forest.list().iter().map(|n| n.id()).collect();
//! assert_eq!(ids, vec!["t1_a", "t1_b"]);
//! # Ok(())
//! # }
//! ```

mod algorithm;
mod expand;
mod tree;
mod types;

// Re-export public types
pub use algorithm::PlaceholderQueue;
pub use expand::{ExpandOptions, MoreCommentsFetcher};
pub use tree::{CommentForest, CommentRef, NodeRef};
pub use types::{Anchor, Comment, CommentKey, ContextId, MoreComments, Node};
