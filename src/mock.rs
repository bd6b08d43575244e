//! Scripted fetcher for testing purposes.
//!
//! This module provides a [`MoreCommentsFetcher`] implementation that
//! answers placeholder fetches from a queue of expected interactions, so
//! expansion runs can be tested without a real API client.

use std::collections::VecDeque;

use async_trait::async_trait;

use crate::forest::{CommentForest, ExpandOptions, MoreComments, MoreCommentsFetcher, Node};
use crate::{Error, Result};

/// A mock fetcher that replays scripted answers.
///
/// The fetcher accepts a series of expected placeholder ids paired with the
/// answer to return, and checks that fetches arrive in that order.
pub struct MockFetcher {
    expected_interactions: VecDeque<(String, Result<Vec<Node>>)>,
    strict_mode: bool,
    calls: Vec<(String, bool)>,
}

impl MockFetcher {
    /// Create a new mock fetcher with a series of expected interactions.
    ///
    /// Each interaction consists of the id of the placeholder expected to be
    /// fetched and the nodes to return for it.
    pub fn new(interactions: Vec<(String, Vec<Node>)>) -> Self {
        Self {
            expected_interactions: interactions
                .into_iter()
                .map(|(id, nodes)| (id, Ok(nodes)))
                .collect(),
            strict_mode: true,
            calls: Vec::new(),
        }
    }

    /// Create a new mock fetcher in non-strict mode.
    ///
    /// In non-strict mode an unexpected fetch resolves to no nodes instead
    /// of failing, and the pending interaction stays queued.
    pub fn new_relaxed(interactions: Vec<(String, Vec<Node>)>) -> Self {
        Self {
            strict_mode: false,
            ..Self::new(interactions)
        }
    }

    /// Queue a fetch of `id` that fails with [`Error::Fetch`].
    pub fn then_fail(mut self, id: impl Into<String>, message: impl Into<String>) -> Self {
        self.expected_interactions
            .push_back((id.into(), Err(Error::Fetch(message.into()))));
        self
    }

    /// Answer a fetch of `more`.
    ///
    /// Returns an error if the fetch doesn't match the expected sequence
    /// (in strict mode) or if there are no more expected interactions.
    pub fn handle_fetch(&mut self, more: &MoreComments, update: bool) -> Result<Vec<Node>> {
        self.calls.push((more.id.clone(), update));

        if let Some((expected_id, answer)) = self.expected_interactions.pop_front() {
            if more.id == expected_id {
                answer
            } else if self.strict_mode {
                Err(Error::UnexpectedFetch(format!(
                    "Expected fetch of {expected_id}, got {}",
                    more.id
                )))
            } else {
                self.expected_interactions.push_front((expected_id, answer));
                Ok(Vec::new())
            }
        } else if self.strict_mode {
            Err(Error::UnexpectedFetch(format!(
                "No more expected fetches, got {}",
                more.id
            )))
        } else {
            Ok(Vec::new())
        }
    }

    /// Get the ids of every fetched placeholder, in call order.
    pub fn calls(&self) -> Vec<&str> {
        self.calls.iter().map(|(id, _)| id.as_str()).collect()
    }

    /// Get the number of fetches made so far.
    pub fn fetch_count(&self) -> usize {
        self.calls.len()
    }

    /// Check if any fetch asked the fetcher to bind nodes itself.
    pub fn any_update_requested(&self) -> bool {
        self.calls.iter().any(|(_, update)| *update)
    }

    /// Check if all expected interactions have been processed.
    pub fn is_complete(&self) -> bool {
        self.expected_interactions.is_empty()
    }

    /// Get the number of remaining expected interactions.
    pub fn remaining_interactions(&self) -> usize {
        self.expected_interactions.len()
    }

    /// Reset the mock fetcher with a new set of interactions.
    pub fn reset(&mut self, interactions: Vec<(String, Vec<Node>)>) {
        self.expected_interactions = interactions
            .into_iter()
            .map(|(id, nodes)| (id, Ok(nodes)))
            .collect();
        self.calls.clear();
    }
}

#[async_trait]
impl MoreCommentsFetcher for MockFetcher {
    async fn fetch(&mut self, more: &MoreComments, update: bool) -> Result<Vec<Node>> {
        self.handle_fetch(more, update)
    }
}

/// Test helper that combines a forest and a mock fetcher.
pub struct ExpandMockTest {
    forest: CommentForest,
    fetcher: MockFetcher,
}

impl ExpandMockTest {
    /// Create a new test setup with the given interactions.
    pub fn new(forest: CommentForest, interactions: Vec<(String, Vec<Node>)>) -> Self {
        Self {
            forest,
            fetcher: MockFetcher::new(interactions),
        }
    }

    /// Create a new test setup around an existing fetcher.
    pub fn with_fetcher(forest: CommentForest, fetcher: MockFetcher) -> Self {
        Self { forest, fetcher }
    }

    /// Run one expansion against the scripted fetcher.
    pub async fn expand(&mut self, options: ExpandOptions) -> Result<Vec<MoreComments>> {
        self.forest.replace_more(&mut self.fetcher, options).await
    }

    /// Get a reference to the forest.
    pub fn forest(&self) -> &CommentForest {
        &self.forest
    }

    /// Get a mutable reference to the forest.
    pub fn forest_mut(&mut self) -> &mut CommentForest {
        &mut self.forest
    }

    /// Get a reference to the fetcher.
    pub fn fetcher(&self) -> &MockFetcher {
        &self.fetcher
    }

    /// Check if all expected interactions have been processed.
    pub fn is_complete(&self) -> bool {
        self.fetcher.is_complete()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forest::{Anchor, Comment};

    fn more(id: &str, count: u32) -> MoreComments {
        MoreComments::new(id, "t3_abc", count)
    }

    #[test]
    fn test_mock_fetcher_basic() {
        let interactions = vec![
            (
                "a".to_string(),
                vec![Comment::root("1", "t3_abc").into()],
            ),
            ("b".to_string(), vec![]),
        ];

        let mut mock = MockFetcher::new(interactions);

        let nodes = mock.handle_fetch(&more("a", 1), false).unwrap();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].id(), "1");

        let nodes = mock.handle_fetch(&more("b", 2), false).unwrap();
        assert!(nodes.is_empty());

        assert!(mock.is_complete());
        assert_eq!(mock.calls(), vec!["a", "b"]);
        assert_eq!(mock.fetch_count(), 2);
        assert!(!mock.any_update_requested());
    }

    #[test]
    fn test_mock_fetcher_wrong_placeholder() {
        let mut mock = MockFetcher::new(vec![("a".to_string(), vec![])]);

        let result = mock.handle_fetch(&more("b", 1), false);
        assert!(matches!(result, Err(Error::UnexpectedFetch(_))));
    }

    #[test]
    fn test_mock_fetcher_relaxed_mode() {
        let mut mock = MockFetcher::new_relaxed(vec![("a".to_string(), vec![])]);

        // Wrong placeholder resolves to nothing instead of failing
        let nodes = mock.handle_fetch(&more("b", 1), true).unwrap();
        assert!(nodes.is_empty());

        // Original interaction should still be available
        assert_eq!(mock.remaining_interactions(), 1);
        assert!(mock.any_update_requested());
    }

    #[test]
    fn test_mock_fetcher_no_more_interactions() {
        let mut strict = MockFetcher::new(vec![]);
        assert!(strict.handle_fetch(&more("a", 1), false).is_err());

        let mut relaxed = MockFetcher::new_relaxed(vec![]);
        assert!(relaxed.handle_fetch(&more("a", 1), false).unwrap().is_empty());
    }

    #[test]
    fn test_mock_fetcher_then_fail() {
        let mut mock = MockFetcher::new(vec![]).then_fail("a", "rate limited");

        let err = mock.handle_fetch(&more("a", 1), false).unwrap_err();
        assert_eq!(err, Error::Fetch("rate limited".to_string()));
        assert!(mock.is_complete());
    }

    #[test]
    fn test_mock_fetcher_reset() {
        let mut mock = MockFetcher::new(vec![("a".to_string(), vec![])]);
        mock.handle_fetch(&more("a", 1), false).unwrap();
        assert!(mock.is_complete());

        mock.reset(vec![("b".to_string(), vec![]), ("c".to_string(), vec![])]);
        assert_eq!(mock.remaining_interactions(), 2);
        assert_eq!(mock.fetch_count(), 0);
    }

    #[tokio::test]
    async fn test_expand_mock_test() {
        let forest = CommentForest::with_nodes(
            Anchor::Submission("t3_abc".to_string()),
            vec![more("a", 3).into()],
        )
        .unwrap();
        let mut test = ExpandMockTest::new(
            forest,
            vec![("a".to_string(), vec![Comment::root("1", "t3_abc").into()])],
        );

        let skipped = test.expand(ExpandOptions::default()).await.unwrap();
        assert!(skipped.is_empty());
        assert!(test.is_complete());
        assert_eq!(test.forest().len(), 1);
        assert!(test.forest().contains("1"));
        assert_eq!(test.fetcher().calls(), vec!["a"]);

        test.forest_mut()
            .insert(Comment::reply("2", "1").into())
            .unwrap();
        assert_eq!(test.forest().comment_count(), 2);
    }
}
