//! Breadth-first traversals over a forest.
//!
//! This module implements flattening of the whole tree and the collection
//! of every reachable placeholder into a priority queue keyed by how many
//! comments each placeholder represents.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet, VecDeque};

use super::tree::{CommentForest, NodeRef};
use super::types::{CommentKey, MoreComments};

impl CommentForest {
    /// List every node in the forest in breadth-first order.
    ///
    /// All nodes at depth *d* come before any node at depth *d + 1*, and
    /// siblings keep their stored order. The result is a snapshot of the
    /// forest at call time.
    pub fn list(&self) -> Vec<NodeRef<'_>> {
        let mut result = Vec::new();
        let mut queue: VecDeque<NodeRef<'_>> = self.iter().collect();

        while let Some(node) = queue.pop_front() {
            result.push(node);
            if let NodeRef::Comment(comment) = node {
                queue.extend(comment.replies());
            }
        }
        result
    }

    /// Collect every placeholder reachable from the top-level sequence.
    pub fn collect_placeholders(&self) -> PlaceholderQueue {
        let mut queue = PlaceholderQueue::new();
        self.gather_placeholders(
            self.top_level_slots().iter().map(|slot| self.node_ref(slot)),
            &mut queue,
        );
        queue
    }

    /// Collect every placeholder reachable from `roots`.
    pub fn collect_placeholders_from<'a>(
        &'a self,
        roots: impl IntoIterator<Item = NodeRef<'a>>,
    ) -> PlaceholderQueue {
        let mut queue = PlaceholderQueue::new();
        self.gather_placeholders(roots, &mut queue);
        queue
    }

    /// Walk `roots` breadth-first, pushing placeholders into `queue` in the
    /// order they are met.
    ///
    /// A comment's replies are walked only the first time that comment is
    /// reached. Placeholders themselves are not deduplicated.
    pub(crate) fn gather_placeholders<'a>(
        &'a self,
        roots: impl IntoIterator<Item = NodeRef<'a>>,
        queue: &mut PlaceholderQueue,
    ) {
        let mut seen: HashSet<CommentKey> = HashSet::new();
        let mut pending: VecDeque<NodeRef<'a>> = roots.into_iter().collect();

        while let Some(node) = pending.pop_front() {
            match node {
                NodeRef::More(more) => queue.push(more.clone()),
                NodeRef::Comment(comment) => {
                    if comment.has_replies() && seen.insert(comment.key()) {
                        pending.extend(comment.replies());
                    }
                }
            }
        }
    }
}

/// A placeholder waiting in the queue, with its push sequence number.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Pending {
    seq: u64,
    more: MoreComments,
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the smallest count, oldest push first
        other
            .more
            .count
            .cmp(&self.more.count)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue of placeholders, smallest `count` first.
///
/// Placeholders with equal counts pop in the order they were pushed. New
/// placeholders may be pushed at any point while draining the queue.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderQueue {
    heap: BinaryHeap<Pending>,
    next_seq: u64,
}

impl PlaceholderQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a placeholder.
    pub fn push(&mut self, more: MoreComments) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Pending { seq, more });
    }

    /// Remove and return the placeholder with the smallest count.
    pub fn pop(&mut self) -> Option<MoreComments> {
        self.heap.pop().map(|pending| pending.more)
    }

    /// Get the placeholder that would be popped next.
    pub fn peek(&self) -> Option<&MoreComments> {
        self.heap.peek().map(|pending| &pending.more)
    }

    /// Get the number of queued placeholders.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Check if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drain the queue into a vector in pop order.
    pub fn into_sorted_vec(mut self) -> Vec<MoreComments> {
        let mut sorted = Vec::with_capacity(self.heap.len());
        while let Some(more) = self.pop() {
            sorted.push(more);
        }
        sorted
    }
}

impl Extend<MoreComments> for PlaceholderQueue {
    fn extend<I: IntoIterator<Item = MoreComments>>(&mut self, iter: I) {
        for more in iter {
            self.push(more);
        }
    }
}

impl FromIterator<MoreComments> for PlaceholderQueue {
    fn from_iter<I: IntoIterator<Item = MoreComments>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}
