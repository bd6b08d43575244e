//! Example demonstrating lazy expansion of a comment forest.
//!
//! This example builds a small discussion with "more comments" placeholders
//! and resolves them with an in-memory fetcher that invents replies.
//!
//! Run with `RUST_LOG=comment_forest=debug cargo run --example expand_tree`
//! to see every fetch and pruning decision.

use async_trait::async_trait;
use comment_forest::{
    Anchor, Comment, CommentForest, ExpandOptions, MoreComments, MoreCommentsFetcher, Node,
    NodeRef, Result,
};
use tracing_subscriber::EnvFilter;

const SUBMISSION: &str = "t3_demo";

/// Resolves each placeholder into the comments it lists, plus one further
/// placeholder for every third child.
struct SyntheticFetcher {
    requests: usize,
}

#[async_trait]
impl MoreCommentsFetcher for SyntheticFetcher {
    async fn fetch(&mut self, more: &MoreComments, _update: bool) -> Result<Vec<Node>> {
        self.requests += 1;
        let mut nodes: Vec<Node> = Vec::new();
        for (i, child) in more.children.iter().enumerate() {
            let comment = if more.parent_id == SUBMISSION {
                Comment::root(child.clone(), SUBMISSION)
            } else {
                Comment::reply(child.clone(), more.parent_id.clone())
            };
            let body = format!("reply loaded by request #{}", self.requests);
            nodes.push(comment.with_body(body).into());
            if i % 3 == 2 {
                nodes.push(MoreComments::new(format!("{child}_more"), child.clone(), 1).into());
            }
        }
        Ok(nodes)
    }
}

fn print_forest(forest: &CommentForest) {
    for node in forest.list() {
        match node {
            NodeRef::Comment(comment) => println!(
                "  {:<12} parent={:<12} {}",
                comment.id(),
                comment.parent_id(),
                comment.body()
            ),
            NodeRef::More(more) => println!(
                "  {:<12} parent={:<12} [{} more]",
                more.id, more.parent_id, more.count
            ),
        }
    }
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Comment Forest Expansion Example ===\n");

    let mut forest = CommentForest::with_nodes(
        Anchor::Submission(SUBMISSION.to_string()),
        vec![
            Comment::root("t1_a", SUBMISSION)
                .with_body("first!")
                .with_replies(vec![
                    Comment::reply("t1_b", "t1_a").with_body("a reply").into(),
                    MoreComments::new("t1_more_a", "t1_a", 3)
                        .with_children(["t1_c", "t1_d", "t1_e"])
                        .into(),
                ])
                .into(),
            Comment::root("t1_f", SUBMISSION).with_body("second").into(),
            MoreComments::new("t1_more_top", SUBMISSION, 40)
                .with_children(["t1_g", "t1_h"])
                .into(),
        ],
    )?;

    println!("Before expansion:");
    print_forest(&forest);

    let mut fetcher = SyntheticFetcher { requests: 0 };
    let options = ExpandOptions::default().with_limit(Some(2));
    let skipped = forest.replace_more(&mut fetcher, options).await?;

    println!("\nAfter expansion ({} requests):", fetcher.requests);
    print_forest(&forest);

    println!("\nPruned placeholders:");
    for more in &skipped {
        println!("  {} ({} comments)", more.id, more.count);
    }

    Ok(())
}
