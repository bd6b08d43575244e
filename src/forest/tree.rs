//! The comment forest: arena storage, identifier index, insertion and removal.

use std::collections::{HashMap, HashSet};
use std::fmt;

use tracing::trace;

use crate::error::{Error, Result};

use super::types::{Anchor, Comment, CommentKey, ContextId, MoreComments, Node};

/// A node as stored in a forest's sequences.
#[derive(Debug, Clone)]
pub(crate) enum Slot {
    Comment(CommentKey),
    More(MoreComments),
}

/// A registered comment and its child forest.
#[derive(Debug, Clone)]
struct Entry {
    /// The record, with `replies` moved out into `children`
    comment: Comment,
    children: Vec<Slot>,
}

/// An ordered forest of comments and placeholders bound to one anchor.
///
/// The forest owns every comment reachable from its top-level sequence in an
/// arena, together with the identifier index used to place replies under
/// their parents no matter how deep those parents sit.
///
/// # Example
///
/// ```
/// use comment_forest::{Anchor, Comment, CommentForest, MoreComments};
///
/// let mut forest = CommentForest::new(Anchor::Submission("t3_abc".into()));
/// forest.insert(Comment::root("t1_a", "t3_abc").into()).unwrap();
/// forest.insert(Comment::reply("t1_b", "t1_a").into()).unwrap();
/// forest.insert(MoreComments::new("t1_more", "t1_a", 12).into()).unwrap();
///
/// let ids: Vec<&str> = forest.list().iter().map(|n| n.id()).collect();
/// assert_eq!(ids, vec!["t1_a", "t1_more", "t1_b"]);
/// ```
#[derive(Debug, Clone)]
pub struct CommentForest {
    anchor: Anchor,
    entries: Vec<Entry>,
    by_id: HashMap<String, CommentKey>,
    top_level: Vec<Slot>,
}

impl CommentForest {
    /// Create an empty forest bound to `anchor`.
    pub fn new(anchor: Anchor) -> Self {
        Self {
            anchor,
            entries: Vec::new(),
            by_id: HashMap::new(),
            top_level: Vec::new(),
        }
    }

    /// Create a forest seeded with `nodes` as its top-level sequence.
    ///
    /// Nested replies keep the shape they arrive in. Every node is bound to
    /// the anchor's context and every comment is registered in the index.
    /// No fetches happen here.
    pub fn with_nodes(anchor: Anchor, nodes: Vec<Node>) -> Result<Self> {
        let mut forest = Self::new(anchor);
        let context = forest.anchor.context();
        for mut node in nodes {
            forest.check_unique(&node, &mut HashSet::new())?;
            node.bind(&context);
            let slot = forest.register(node);
            forest.top_level.push(slot);
        }
        Ok(forest)
    }

    /// Replace the whole forest with a fresh seed.
    ///
    /// On error the forest is left untouched.
    pub fn update(&mut self, nodes: Vec<Node>) -> Result<()> {
        *self = Self::with_nodes(self.anchor.clone(), nodes)?;
        Ok(())
    }

    /// Get the anchor owning this forest.
    pub fn anchor(&self) -> &Anchor {
        &self.anchor
    }

    /// Get the context handle bound onto this forest's nodes.
    pub fn context(&self) -> ContextId {
        self.anchor.context()
    }

    /// Get the number of top-level nodes.
    pub fn len(&self) -> usize {
        self.top_level.len()
    }

    /// Check if the forest has no top-level nodes.
    pub fn is_empty(&self) -> bool {
        self.top_level.is_empty()
    }

    /// Get a top-level node by position.
    pub fn get(&self, index: usize) -> Option<NodeRef<'_>> {
        self.top_level.get(index).map(|slot| self.node_ref(slot))
    }

    /// Iterate over the top-level nodes in order.
    pub fn iter(&self) -> impl Iterator<Item = NodeRef<'_>> + '_ {
        self.top_level.iter().map(move |slot| self.node_ref(slot))
    }

    /// Look up a comment anywhere in the forest by identifier.
    pub fn comment(&self, id: &str) -> Option<CommentRef<'_>> {
        self.by_id.get(id).map(|&key| CommentRef { forest: self, key })
    }

    /// Check if a comment with this identifier is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Get the number of comments registered anywhere in the forest.
    pub fn comment_count(&self) -> usize {
        self.entries.len()
    }

    /// Insert a freshly received node.
    ///
    /// Placeholders and root comments are appended to the top-level sequence;
    /// any other comment is appended to the replies of the comment named by
    /// its `parent_id`. When the forest is anchored on a comment, replies to
    /// that comment form the top-level sequence. Sibling order is insertion
    /// order.
    ///
    /// # Errors
    ///
    /// - [`Error::DuplicateComment`] if a comment in `node` is already registered
    /// - [`Error::MissingParent`] if the parent of a non-root comment is unknown
    ///
    /// Nothing is mutated when an error is returned.
    pub fn insert(&mut self, node: Node) -> Result<()> {
        self.insert_batch(vec![node]).map(|_| ())
    }

    /// Insert `nodes` in order, all or nothing.
    ///
    /// A comment may name an earlier node of the same batch as its parent.
    /// Returns the slots the nodes were stored as.
    pub(crate) fn insert_batch(&mut self, nodes: Vec<Node>) -> Result<Vec<Slot>> {
        self.check_batch(&nodes)?;
        Ok(nodes.into_iter().map(|node| self.place(node)).collect())
    }

    /// Detach a placeholder from wherever it sits.
    ///
    /// The placeholder is first looked for among the replies of its parent
    /// comment. Failing that, when the anchor is a submission, any
    /// placeholder with the same identifier is dropped from the top-level
    /// sequence. A comment-anchored forest only drops that exact placeholder
    /// from its top level. Returns whether anything was removed; removing a
    /// placeholder that is no longer in the forest is a no-op.
    pub fn remove_more_comments(&mut self, more: &MoreComments) -> bool {
        if let Some(&key) = self.by_id.get(&more.parent_id) {
            let children = &mut self.entries[key.0].children;
            if let Some(pos) = children
                .iter()
                .position(|slot| matches!(slot, Slot::More(m) if m == more))
            {
                children.remove(pos);
                trace!(id = %more.id, parent_id = %more.parent_id, "removed nested placeholder");
                return true;
            }
        }

        if !self.anchor.is_root() {
            let Some(pos) = self
                .top_level
                .iter()
                .position(|slot| matches!(slot, Slot::More(m) if m == more))
            else {
                return false;
            };
            self.top_level.remove(pos);
            trace!(id = %more.id, anchor = self.anchor.id(), "removed top-level placeholder");
            return true;
        }

        let before = self.top_level.len();
        self.top_level
            .retain(|slot| !matches!(slot, Slot::More(m) if m.id == more.id));
        let removed = self.top_level.len() != before;
        if removed {
            trace!(id = %more.id, "removed top-level placeholder");
        }
        removed
    }

    pub(crate) fn top_level_slots(&self) -> &[Slot] {
        &self.top_level
    }

    pub(crate) fn node_ref<'a>(&'a self, slot: &'a Slot) -> NodeRef<'a> {
        match slot {
            Slot::Comment(key) => NodeRef::Comment(CommentRef {
                forest: self,
                key: *key,
            }),
            Slot::More(more) => NodeRef::More(more),
        }
    }

    /// Check if `id` names the comment this forest is anchored on.
    fn is_anchor_comment(&self, id: &str) -> bool {
        !self.anchor.is_root() && self.anchor.id() == id
    }

    /// Verify that `nodes` can be placed in order without error.
    fn check_batch(&self, nodes: &[Node]) -> Result<()> {
        let mut incoming: HashSet<&str> = HashSet::new();
        for node in nodes {
            if let Node::Comment(comment) = node {
                let parent = comment.parent_id.as_str();
                if !comment.is_root
                    && !self.is_anchor_comment(parent)
                    && !self.by_id.contains_key(parent)
                    && !incoming.contains(parent)
                {
                    return Err(Error::MissingParent {
                        id: comment.id.clone(),
                        parent_id: comment.parent_id.clone(),
                    });
                }
            }
            self.check_unique(node, &mut incoming)?;
        }
        Ok(())
    }

    /// Verify that no comment in `node` is registered or already in `incoming`.
    fn check_unique<'n>(&self, node: &'n Node, incoming: &mut HashSet<&'n str>) -> Result<()> {
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            if let Node::Comment(comment) = current {
                if self.by_id.contains_key(&comment.id) || !incoming.insert(comment.id.as_str()) {
                    return Err(Error::DuplicateComment {
                        id: comment.id.clone(),
                    });
                }
                stack.extend(comment.replies.iter());
            }
        }
        Ok(())
    }

    /// Bind and register a checked node, then attach it where it belongs.
    fn place(&mut self, mut node: Node) -> Slot {
        let parent = match &node {
            Node::Comment(comment) if !comment.is_root => {
                self.by_id.get(&comment.parent_id).copied()
            }
            _ => None,
        };

        node.bind(&self.anchor.context());
        trace!(
            id = node.id(),
            parent_id = node.parent_id(),
            nested = parent.is_some(),
            "inserting node"
        );

        let slot = self.register(node);
        match parent {
            Some(key) => self.entries[key.0].children.push(slot.clone()),
            None => self.top_level.push(slot.clone()),
        }
        slot
    }

    /// Move `node` (and its nested replies) into the arena.
    ///
    /// Walks the replies with an explicit stack rather than recursion.
    fn register(&mut self, node: Node) -> Slot {
        let (root_slot, root_pending) = self.register_one(node);
        let mut stack = Vec::new();
        if let Some((key, replies)) = root_pending {
            stack.push((key, replies.into_iter()));
        }

        while let Some((parent, replies)) = stack.last_mut() {
            let parent = *parent;
            let Some(reply) = replies.next() else {
                stack.pop();
                continue;
            };
            let (slot, pending) = self.register_one(reply);
            self.entries[parent.0].children.push(slot);
            if let Some((key, nested)) = pending {
                stack.push((key, nested.into_iter()));
            }
        }
        root_slot
    }

    fn register_one(&mut self, node: Node) -> (Slot, Option<(CommentKey, Vec<Node>)>) {
        match node {
            Node::More(more) => (Slot::More(more), None),
            Node::Comment(mut comment) => {
                let key = CommentKey(self.entries.len());
                let replies = std::mem::take(&mut comment.replies);
                self.by_id.insert(comment.id.clone(), key);
                self.entries.push(Entry {
                    comment,
                    children: Vec::new(),
                });
                (Slot::Comment(key), Some((key, replies)))
            }
        }
    }
}

/// A borrowed view of a node stored in a forest.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    /// A registered comment
    Comment(CommentRef<'a>),
    /// A placeholder
    More(&'a MoreComments),
}

impl<'a> NodeRef<'a> {
    /// Get the node's identifier.
    pub fn id(&self) -> &'a str {
        match *self {
            NodeRef::Comment(comment) => comment.id(),
            NodeRef::More(more) => &more.id,
        }
    }

    /// Check if this node is a placeholder.
    pub fn is_more(&self) -> bool {
        matches!(self, NodeRef::More(_))
    }

    /// Get the comment view, if this is a comment.
    pub fn as_comment(&self) -> Option<CommentRef<'a>> {
        match *self {
            NodeRef::Comment(comment) => Some(comment),
            NodeRef::More(_) => None,
        }
    }

    /// Get the placeholder, if this is one.
    pub fn as_more(&self) -> Option<&'a MoreComments> {
        match *self {
            NodeRef::Comment(_) => None,
            NodeRef::More(more) => Some(more),
        }
    }
}

/// A borrowed view of a comment registered in a forest.
#[derive(Clone, Copy)]
pub struct CommentRef<'a> {
    forest: &'a CommentForest,
    key: CommentKey,
}

impl<'a> CommentRef<'a> {
    fn entry(&self) -> &'a Entry {
        &self.forest.entries[self.key.0]
    }

    /// Get the arena key of this comment.
    pub fn key(&self) -> CommentKey {
        self.key
    }

    /// Get the comment record.
    ///
    /// The record's own `replies` is always empty; use [`replies`](Self::replies).
    pub fn comment(&self) -> &'a Comment {
        &self.entry().comment
    }

    /// Get the comment identifier.
    pub fn id(&self) -> &'a str {
        &self.entry().comment.id
    }

    /// Get the parent identifier.
    pub fn parent_id(&self) -> &'a str {
        &self.entry().comment.parent_id
    }

    /// Check if the comment replies directly to the anchor.
    pub fn is_root(&self) -> bool {
        self.entry().comment.is_root
    }

    /// Get the comment text.
    pub fn body(&self) -> &'a str {
        &self.entry().comment.body
    }

    /// Get the context this comment is bound to.
    pub fn context(&self) -> Option<&'a ContextId> {
        self.entry().comment.context()
    }

    /// Iterate over the direct replies in stored order.
    pub fn replies(&self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        let forest = self.forest;
        self.entry()
            .children
            .iter()
            .map(move |slot| forest.node_ref(slot))
    }

    /// Get the number of direct replies (placeholders included).
    pub fn reply_count(&self) -> usize {
        self.entry().children.len()
    }

    /// Check if this comment has any replies.
    pub fn has_replies(&self) -> bool {
        !self.entry().children.is_empty()
    }
}

impl fmt::Debug for CommentRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommentRef")
            .field("key", &self.key)
            .field("id", &self.id())
            .field("reply_count", &self.reply_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUBMISSION: &str = "t3_abc";

    fn submission_forest() -> CommentForest {
        CommentForest::new(Anchor::Submission(SUBMISSION.to_string()))
    }

    fn reply_ids(forest: &CommentForest, id: &str) -> Vec<String> {
        forest
            .comment(id)
            .unwrap()
            .replies()
            .map(|n| n.id().to_string())
            .collect()
    }

    fn top_ids(forest: &CommentForest) -> Vec<&str> {
        forest.iter().map(|n| n.id()).collect()
    }

    #[test]
    fn test_forest_new() {
        let forest = submission_forest();
        assert!(forest.is_empty());
        assert_eq!(forest.len(), 0);
        assert_eq!(forest.comment_count(), 0);
        assert_eq!(forest.anchor().id(), SUBMISSION);
    }

    #[test]
    fn test_with_nodes_keeps_shape_and_binds() {
        let forest = CommentForest::with_nodes(
            Anchor::Submission(SUBMISSION.to_string()),
            vec![
                Comment::root("1", SUBMISSION)
                    .with_replies(vec![
                        Comment::reply("2", "1")
                            .with_replies(vec![Comment::reply("3", "2").into()])
                            .into(),
                        MoreComments::new("m", "1", 4).into(),
                    ])
                    .into(),
                Comment::root("5", SUBMISSION).into(),
            ],
        )
        .unwrap();

        assert_eq!(top_ids(&forest), vec!["1", "5"]);
        assert_eq!(reply_ids(&forest, "1"), vec!["2", "m"]);
        assert_eq!(reply_ids(&forest, "2"), vec!["3"]);
        assert_eq!(forest.comment_count(), 4);

        let context = forest.context();
        for id in ["1", "2", "3", "5"] {
            assert_eq!(forest.comment(id).unwrap().context(), Some(&context));
        }
        let more = forest
            .comment("1")
            .unwrap()
            .replies()
            .find_map(|n| n.as_more())
            .unwrap();
        assert_eq!(more.context(), Some(&context));
        // Registered records never keep their input replies
        assert!(forest.comment("1").unwrap().comment().replies.is_empty());
    }

    #[test]
    fn test_with_nodes_rejects_duplicates() {
        let result = CommentForest::with_nodes(
            Anchor::Submission(SUBMISSION.to_string()),
            vec![
                Comment::root("1", SUBMISSION).into(),
                Comment::root("1", SUBMISSION).into(),
            ],
        );
        assert!(matches!(result, Err(Error::DuplicateComment { id }) if id == "1"));
    }

    #[test]
    fn test_insert_root_and_reply() {
        let mut forest = submission_forest();
        forest.insert(Comment::root("1", SUBMISSION).into()).unwrap();
        forest.insert(Comment::root("5", SUBMISSION).into()).unwrap();
        forest.insert(Comment::reply("2", "1").into()).unwrap();
        forest.insert(Comment::reply("4", "1").into()).unwrap();
        forest.insert(Comment::reply("3", "2").into()).unwrap();

        assert_eq!(top_ids(&forest), vec!["1", "5"]);
        assert_eq!(reply_ids(&forest, "1"), vec!["2", "4"]);
        assert_eq!(reply_ids(&forest, "2"), vec!["3"]);
        assert!(forest.contains("3"));
        assert_eq!(forest.comment("3").unwrap().parent_id(), "2");
    }

    #[test]
    fn test_insert_placeholder_goes_top_level() {
        let mut forest = submission_forest();
        forest.insert(Comment::root("1", SUBMISSION).into()).unwrap();
        forest.insert(MoreComments::new("m", "1", 3).into()).unwrap();

        assert_eq!(top_ids(&forest), vec!["1", "m"]);
        assert!(!forest.comment("1").unwrap().has_replies());
        assert!(!forest.contains("m"));
    }

    #[test]
    fn test_insert_duplicate_is_rejected() {
        let mut forest = submission_forest();
        forest.insert(Comment::root("1", SUBMISSION).into()).unwrap();

        let err = forest
            .insert(Comment::root("1", SUBMISSION).into())
            .unwrap_err();
        assert_eq!(err, Error::DuplicateComment { id: "1".to_string() });
        assert_eq!(forest.len(), 1);
        assert_eq!(forest.comment_count(), 1);
    }

    #[test]
    fn test_insert_nested_duplicate_mutates_nothing() {
        let mut forest = submission_forest();
        forest.insert(Comment::root("1", SUBMISSION).into()).unwrap();

        let node = Comment::root("2", SUBMISSION)
            .with_replies(vec![Comment::reply("1", "2").into()])
            .into();
        assert!(forest.insert(node).is_err());
        assert!(!forest.contains("2"));
        assert_eq!(forest.len(), 1);
    }

    #[test]
    fn test_insert_missing_parent() {
        let mut forest = submission_forest();
        let err = forest.insert(Comment::reply("2", "1").into()).unwrap_err();
        assert_eq!(
            err,
            Error::MissingParent {
                id: "2".to_string(),
                parent_id: "1".to_string()
            }
        );
        assert!(forest.is_empty());
    }

    #[test]
    fn test_insert_binds_context() {
        let mut forest = submission_forest();
        let more = MoreComments::new("m", SUBMISSION, 1);
        assert!(more.context().is_none());
        forest.insert(more.into()).unwrap();

        let stored = forest.get(0).unwrap().as_more().unwrap();
        assert_eq!(stored.context(), Some(&forest.context()));
    }

    #[test]
    fn test_remove_nested_placeholder() {
        let mut forest = CommentForest::with_nodes(
            Anchor::Submission(SUBMISSION.to_string()),
            vec![Comment::root("1", SUBMISSION)
                .with_replies(vec![
                    Comment::reply("2", "1").into(),
                    MoreComments::new("m", "1", 4).into(),
                ])
                .into()],
        )
        .unwrap();

        let more = forest
            .comment("1")
            .unwrap()
            .replies()
            .find_map(|n| n.as_more())
            .cloned()
            .unwrap();

        assert!(forest.remove_more_comments(&more));
        assert_eq!(reply_ids(&forest, "1"), vec!["2"]);
        // Second removal is a no-op
        assert!(!forest.remove_more_comments(&more));
        assert_eq!(reply_ids(&forest, "1"), vec!["2"]);
    }

    #[test]
    fn test_remove_top_level_placeholder() {
        let mut forest = submission_forest();
        forest.insert(Comment::root("1", SUBMISSION).into()).unwrap();
        forest.insert(MoreComments::new("m", "1", 4).into()).unwrap();
        forest.insert(MoreComments::new("n", SUBMISSION, 2).into()).unwrap();

        // Parent "1" exists, but the placeholder sits at the top level
        let more = forest.get(1).unwrap().as_more().cloned().unwrap();
        assert!(forest.remove_more_comments(&more));
        assert_eq!(top_ids(&forest), vec!["1", "n"]);

        let root_more = forest.get(1).unwrap().as_more().cloned().unwrap();
        assert!(forest.remove_more_comments(&root_more));
        assert_eq!(top_ids(&forest), vec!["1"]);
        assert!(!forest.remove_more_comments(&root_more));
    }

    #[test]
    fn test_remove_for_comment_anchor_matches_exact_placeholder() {
        let mut forest = CommentForest::new(Anchor::Comment("t1_anchor".to_string()));
        forest.insert(MoreComments::new("m", "t1_anchor", 3).into()).unwrap();

        // Same identifier, different placeholder: no sweep by identifier
        let mut other = MoreComments::new("m", "t1_anchor", 5);
        other.bind(&forest.context());
        assert!(!forest.remove_more_comments(&other));
        assert_eq!(forest.len(), 1);

        let more = forest.get(0).unwrap().as_more().cloned().unwrap();
        assert!(forest.remove_more_comments(&more));
        assert!(forest.is_empty());
        assert!(!forest.remove_more_comments(&more));
    }

    #[test]
    fn test_insert_reply_to_comment_anchor() {
        let mut forest = CommentForest::new(Anchor::Comment("t1_anchor".to_string()));
        forest.insert(Comment::reply("1", "t1_anchor").into()).unwrap();
        forest.insert(Comment::reply("2", "1").into()).unwrap();

        assert_eq!(top_ids(&forest), vec!["1"]);
        assert_eq!(reply_ids(&forest, "1"), vec!["2"]);

        // A submission-anchored forest has no such comment to reply to
        let mut forest = submission_forest();
        assert!(forest.insert(Comment::reply("1", SUBMISSION).into()).is_err());
    }

    #[test]
    fn test_insert_batch_parents_within_batch() {
        let mut forest = submission_forest();
        let slots = forest
            .insert_batch(vec![
                Comment::root("1", SUBMISSION).into(),
                Comment::reply("2", "1").into(),
                MoreComments::new("m", "2", 4).into(),
            ])
            .unwrap();

        assert_eq!(slots.len(), 3);
        assert_eq!(top_ids(&forest), vec!["1", "m"]);
        assert_eq!(reply_ids(&forest, "1"), vec!["2"]);
    }

    #[test]
    fn test_insert_batch_is_all_or_nothing() {
        let mut forest = submission_forest();

        let err = forest
            .insert_batch(vec![
                Comment::root("1", SUBMISSION).into(),
                Comment::reply("2", "ghost").into(),
            ])
            .unwrap_err();
        assert!(matches!(err, Error::MissingParent { ref id, .. } if id == "2"));
        assert!(forest.is_empty());
        assert_eq!(forest.comment_count(), 0);

        // A child listed before its parent is not resolved out of order
        let err = forest
            .insert_batch(vec![
                Comment::reply("2", "1").into(),
                Comment::root("1", SUBMISSION).into(),
            ])
            .unwrap_err();
        assert!(matches!(err, Error::MissingParent { .. }));

        let err = forest
            .insert_batch(vec![
                Comment::root("1", SUBMISSION).into(),
                Comment::root("1", SUBMISSION).into(),
            ])
            .unwrap_err();
        assert_eq!(err, Error::DuplicateComment { id: "1".to_string() });
        assert!(forest.is_empty());
    }

    #[test]
    fn test_update_replaces_contents() {
        let mut forest = submission_forest();
        forest.insert(Comment::root("1", SUBMISSION).into()).unwrap();

        forest
            .update(vec![Comment::root("9", SUBMISSION).into()])
            .unwrap();
        assert_eq!(top_ids(&forest), vec!["9"]);
        assert!(!forest.contains("1"));

        // A failed update leaves the forest as it was
        assert!(forest
            .update(vec![
                Comment::root("x", SUBMISSION).into(),
                Comment::root("x", SUBMISSION).into(),
            ])
            .is_err());
        assert_eq!(top_ids(&forest), vec!["9"]);
    }

    #[test]
    fn test_deeply_nested_seed() {
        const DEPTH: usize = 1000;

        let mut node: Node =
            Comment::reply((DEPTH - 1).to_string(), (DEPTH - 2).to_string()).into();
        for i in (1..DEPTH - 1).rev() {
            node = Comment::reply(i.to_string(), (i - 1).to_string())
                .with_replies(vec![node])
                .into();
        }
        let root = Comment::root("0", SUBMISSION).with_replies(vec![node]);

        let forest = CommentForest::with_nodes(
            Anchor::Submission(SUBMISSION.to_string()),
            vec![root.into()],
        )
        .unwrap();
        assert_eq!(forest.comment_count(), DEPTH);
        assert_eq!(reply_ids(&forest, "998"), vec!["999"]);
    }
}
