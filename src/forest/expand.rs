//! Lazy expansion of "more comments" placeholders.
//!
//! This module defines the [`MoreCommentsFetcher`] trait, the boundary to
//! whatever client turns a placeholder into real comments, and the
//! [`CommentForest::replace_more`] loop that drives it.

use async_trait::async_trait;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::tree::CommentForest;
use super::types::{MoreComments, Node};

/// Source of the comments hidden behind a placeholder.
///
/// Implementations typically issue one API request per call. The returned
/// nodes may include further placeholders; they are queued and considered
/// by the same expansion run.
///
/// # Example
///
/// ```
/// use async_trait::async_trait;
/// use comment_forest::{Comment, MoreComments, MoreCommentsFetcher, Node, Result};
///
/// struct OneReplyEach;
///
/// #[async_trait]
/// impl MoreCommentsFetcher for OneReplyEach {
///     async fn fetch(&mut self, more: &MoreComments, _update: bool) -> Result<Vec<Node>> {
///         let id = format!("{}-reply", more.id);
///         Ok(vec![Comment::reply(id, more.parent_id.clone()).into()])
///     }
/// }
/// ```
#[async_trait]
pub trait MoreCommentsFetcher {
    /// Fetch the nodes `more` stands in for.
    ///
    /// When `update` is true the fetcher may also bind the returned nodes
    /// itself; [`CommentForest::replace_more`] always passes `false` and
    /// binds them on insertion.
    async fn fetch(&mut self, more: &MoreComments, update: bool) -> Result<Vec<Node>>;
}

/// Options for controlling placeholder expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExpandOptions {
    /// Maximum number of fetches to perform (None = unlimited)
    pub limit: Option<usize>,
    /// Placeholders representing fewer comments than this are never fetched
    pub threshold: u32,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        Self {
            limit: Some(Self::DEFAULT_LIMIT),
            threshold: 0,
        }
    }
}

impl ExpandOptions {
    /// Fetch budget used by [`ExpandOptions::default`].
    pub const DEFAULT_LIMIT: usize = 32;

    /// Create options that resolve every placeholder, however many fetches it takes.
    pub fn unlimited() -> Self {
        Self {
            limit: None,
            threshold: 0,
        }
    }

    /// Set the fetch budget.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Set the minimum placeholder size worth fetching.
    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }
}

impl CommentForest {
    /// Resolve placeholders into comments, smallest first.
    ///
    /// Each iteration pops the placeholder representing the fewest comments.
    /// It is pruned from the forest without a fetch when the budget is spent
    /// or its count is below `options.threshold`. Otherwise it is fetched,
    /// the returned nodes are inserted in order, and the resolved placeholder
    /// is removed. Placeholders in the fetched batch are queued, including
    /// those nested in the replies of fetched comments. Every fetch costs one
    /// unit of budget no matter what it returns.
    ///
    /// When this returns `Ok`, no placeholder is left in the forest. The
    /// pruned placeholders are returned.
    ///
    /// # Errors
    ///
    /// A fetch error aborts the run and is returned as is. Placeholders
    /// resolved so far stay resolved; the failing one and those not yet
    /// reached stay in the forest and can be expanded by a later call.
    /// Inserting fetched nodes can fail with
    /// [`Error::DuplicateComment`](crate::Error::DuplicateComment) or
    /// [`Error::MissingParent`](crate::Error::MissingParent). The batch is
    /// checked as a whole first, so a rejected batch leaves the forest and
    /// its placeholder as they were.
    pub async fn replace_more<F>(
        &mut self,
        fetcher: &mut F,
        options: ExpandOptions,
    ) -> Result<Vec<MoreComments>>
    where
        F: MoreCommentsFetcher + ?Sized,
    {
        let mut remaining = options.limit;
        let mut queue = self.collect_placeholders();
        let mut skipped = Vec::new();
        let mut fetches = 0usize;

        debug!(
            anchor = self.anchor().id(),
            pending = queue.len(),
            limit = ?options.limit,
            threshold = options.threshold,
            "replacing more comments"
        );

        while let Some(more) = queue.pop() {
            if remaining == Some(0) || more.count < options.threshold {
                debug!(id = %more.id, count = more.count, "pruning more comments");
                self.remove_more_comments(&more);
                skipped.push(more);
                continue;
            }

            let nodes = fetcher.fetch(&more, false).await?;
            if let Some(left) = remaining.as_mut() {
                *left -= 1;
            }
            fetches += 1;
            debug!(
                id = %more.id,
                count = more.count,
                fetched = nodes.len(),
                remaining = ?remaining,
                "resolved more comments"
            );

            let inserted = self.insert_batch(nodes)?;
            self.gather_placeholders(inserted.iter().map(|slot| self.node_ref(slot)), &mut queue);

            self.remove_more_comments(&more);
        }

        debug!(fetches, skipped = skipped.len(), "replace more complete");
        Ok(skipped)
    }
}
