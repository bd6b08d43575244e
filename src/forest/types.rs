//! Core types for comment forests.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Handle naming the anchoring context a node is bound to.
///
/// Every node inserted into a forest carries the handle of the forest's
/// [`Anchor`], so a detached node can still tell which tree it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContextId(String);

impl ContextId {
    /// Create a context handle from an anchor identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The entity owning a forest's top-level sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Anchor {
    /// A submission; the root of a whole discussion
    Submission(String),
    /// A comment whose replies are loaded as a standalone forest
    Comment(String),
}

impl Anchor {
    /// Get the anchor's identifier.
    pub fn id(&self) -> &str {
        match self {
            Anchor::Submission(id) | Anchor::Comment(id) => id,
        }
    }

    /// Get the context handle bound onto nodes of this anchor's forest.
    pub fn context(&self) -> ContextId {
        ContextId::new(self.id())
    }

    /// Check if this anchor is the root of a discussion (a submission).
    pub fn is_root(&self) -> bool {
        matches!(self, Anchor::Submission(_))
    }
}

/// A real comment record.
///
/// `replies` only carries nested nodes on the way *into* a forest (when
/// seeding or when a fetch returns nested data). Once registered, a comment's
/// replies live in the forest and are reached through
/// [`CommentRef::replies`](super::CommentRef::replies).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Comment {
    /// Identifier, unique within one forest
    pub id: String,
    /// Identifier of the parent comment (or of the submission for roots)
    pub parent_id: String,
    /// Whether this comment replies directly to the anchor
    pub is_root: bool,
    /// Comment text
    #[cfg_attr(feature = "serde", serde(default))]
    pub body: String,
    /// Nested replies that arrive together with this comment
    #[cfg_attr(feature = "serde", serde(default))]
    pub replies: Vec<Node>,
    #[cfg_attr(feature = "serde", serde(skip))]
    context: Option<ContextId>,
}

impl Comment {
    /// Create a top-level comment replying to the anchor `parent_id`.
    pub fn root(id: impl Into<String>, parent_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent_id: parent_id.into(),
            is_root: true,
            body: String::new(),
            replies: Vec::new(),
            context: None,
        }
    }

    /// Create a comment replying to the comment `parent_id`.
    pub fn reply(id: impl Into<String>, parent_id: impl Into<String>) -> Self {
        Self {
            is_root: false,
            ..Self::root(id, parent_id)
        }
    }

    /// Set the comment text.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Attach nested replies.
    pub fn with_replies(mut self, replies: Vec<Node>) -> Self {
        self.replies.extend(replies);
        self
    }

    /// Get the context this comment is bound to, if any.
    pub fn context(&self) -> Option<&ContextId> {
        self.context.as_ref()
    }

    /// Bind this comment and all nested replies to `context`.
    pub fn bind(&mut self, context: &ContextId) {
        self.context = Some(context.clone());
        let mut stack: Vec<&mut Node> = self.replies.iter_mut().collect();
        while let Some(node) = stack.pop() {
            match node {
                Node::Comment(comment) => {
                    comment.context = Some(context.clone());
                    stack.extend(comment.replies.iter_mut());
                }
                Node::More(more) => more.bind(context),
            }
        }
    }
}

/// A "more comments" placeholder standing in for an omitted subtree.
///
/// Placeholders never own children; they are resolved in place by fetching
/// the comments listed in `children`, then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoreComments {
    /// Identifier of the placeholder
    pub id: String,
    /// Identifier of the comment (or submission) the omitted replies belong to
    pub parent_id: String,
    /// Number of comments this placeholder represents
    pub count: u32,
    /// Identifiers the placeholder can be resolved into
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<String>,
    #[cfg_attr(feature = "serde", serde(skip))]
    context: Option<ContextId>,
}

impl MoreComments {
    /// Create a placeholder representing `count` omitted comments.
    pub fn new(id: impl Into<String>, parent_id: impl Into<String>, count: u32) -> Self {
        Self {
            id: id.into(),
            parent_id: parent_id.into(),
            count,
            children: Vec::new(),
            context: None,
        }
    }

    /// Set the identifiers this placeholder resolves into.
    pub fn with_children(mut self, children: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.children = children.into_iter().map(Into::into).collect();
        self
    }

    /// Check if this is a "continue this thread" link rather than a batch.
    ///
    /// Such placeholders report no count; resolving them loads a deeper
    /// part of the thread instead of a list of siblings.
    pub fn is_continue_thread(&self) -> bool {
        self.count == 0
    }

    /// Get the context this placeholder is bound to, if any.
    pub fn context(&self) -> Option<&ContextId> {
        self.context.as_ref()
    }

    /// Bind this placeholder to `context`.
    pub fn bind(&mut self, context: &ContextId) {
        self.context = Some(context.clone());
    }
}

/// A node received from the outside: either a comment or a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Node {
    /// A real comment
    Comment(Comment),
    /// A "more comments" placeholder
    More(MoreComments),
}

impl Node {
    /// Get the node's identifier.
    pub fn id(&self) -> &str {
        match self {
            Node::Comment(comment) => &comment.id,
            Node::More(more) => &more.id,
        }
    }

    /// Get the node's parent identifier.
    pub fn parent_id(&self) -> &str {
        match self {
            Node::Comment(comment) => &comment.parent_id,
            Node::More(more) => &more.parent_id,
        }
    }

    /// Check if this node is a placeholder.
    pub fn is_more(&self) -> bool {
        matches!(self, Node::More(_))
    }

    /// Bind this node (and any nested replies) to `context`.
    pub fn bind(&mut self, context: &ContextId) {
        match self {
            Node::Comment(comment) => comment.bind(context),
            Node::More(more) => more.bind(context),
        }
    }
}

impl From<Comment> for Node {
    fn from(comment: Comment) -> Self {
        Node::Comment(comment)
    }
}

impl From<MoreComments> for Node {
    fn from(more: MoreComments) -> Self {
        Node::More(more)
    }
}

/// Arena handle of a comment registered in a forest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommentKey(pub(crate) usize);
