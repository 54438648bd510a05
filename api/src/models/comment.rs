use super::UserPreview;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentTargetType {
    Problem,
    Solution,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub content: String,
    pub author: UserPreview,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub target_type: CommentTargetType,
    pub target_id: String,
    pub upvotes: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub is_edited: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentNode {
    #[serde(flatten)]
    pub comment: Comment,
    pub replies: Vec<CommentNode>,
}

impl CommentNode {
    /// Total number of comments in this subtree, including the root.
    pub fn len(&self) -> usize {
        1 + self.replies.iter().map(CommentNode::len).sum::<usize>()
    }
}

/// Nests flat comments under their parents.
///
/// Siblings are ordered oldest first. A reply whose parent is not in the
/// input becomes a root.
pub fn build_thread(comments: &[&Comment]) -> Vec<CommentNode> {
    let mut ordered: Vec<&Comment> = comments.to_vec();
    ordered.sort_by(|a, b| a.created_at.cmp(&b.created_at));

    let known: HashSet<&str> =
        ordered.iter().map(|comment| comment.id.as_str()).collect();

    let mut children: HashMap<&str, Vec<&Comment>> = HashMap::new();
    let mut roots = Vec::new();
    for comment in ordered {
        match comment.parent_id.as_deref() {
            Some(parent) if known.contains(parent) && parent != comment.id => {
                children.entry(parent).or_default().push(comment)
            }
            _ => roots.push(comment),
        }
    }

    roots
        .into_iter()
        .map(|root| attach(root, &children, 0))
        .collect()
}

// Seed data is shallow; the depth cap only guards against parent cycles.
const MAX_DEPTH: usize = 32;

fn attach(comment: &Comment, children: &HashMap<&str, Vec<&Comment>>, depth: usize) -> CommentNode {
    let replies = if depth >= MAX_DEPTH {
        Vec::new()
    } else {
        children
            .get(comment.id.as_str())
            .map(|replies| {
                replies
                    .iter()
                    .map(|reply| attach(reply, children, depth + 1))
                    .collect()
            })
            .unwrap_or_default()
    };

    CommentNode {
        comment: comment.clone(),
        replies,
    }
}
