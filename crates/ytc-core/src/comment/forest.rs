//! Reply threading
//!
//! Surviving comments are held in an arena indexed by id. Linking is a
//! single pass over that arena in encounter order, so each comment is
//! attached to at most one place and parent pointers never become owning
//! references.

use super::model::{CommentForest, NormalizedComment};
use crate::config::OrphanPolicy;
use crate::types::CommentId;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Result of threading: the forest and how many comments were left out
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Threaded {
    pub forest: CommentForest,
    pub orphaned: usize,
}

/// Collects normalized comments and links them into a [`CommentForest`]
#[derive(Debug, Clone, Default)]
pub struct ForestBuilder {
    policy: OrphanPolicy,
    nodes: Vec<NormalizedComment>,
    by_id: HashMap<CommentId, usize>,
}

impl ForestBuilder {
    /// Create a builder with the given orphan policy
    pub fn new(policy: OrphanPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Add a comment in encounter order
    ///
    /// A repeated id replaces the earlier comment's content but keeps its
    /// original position. Comments without an id are kept but cannot be
    /// replied to.
    pub fn insert(&mut self, comment: NormalizedComment) {
        match comment.id.clone() {
            Some(id) => match self.by_id.get(&id) {
                Some(&idx) => {
                    debug!("Duplicate comment id {}, keeping the later record", id);
                    self.nodes[idx] = comment;
                }
                None => {
                    self.by_id.insert(id, self.nodes.len());
                    self.nodes.push(comment);
                }
            },
            None => self.nodes.push(comment),
        }
    }

    /// Number of comments held
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Link every comment under its parent and return the forest
    pub fn build(self) -> Threaded {
        let Self {
            policy,
            nodes,
            by_id,
        } = self;
        let n = nodes.len();

        let mut roots = Vec::new();
        let mut children: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut policy_orphans = 0usize;

        for (idx, node) in nodes.iter().enumerate() {
            let Some(parent_id) = node.parent.as_ref().filter(|p| !p.is_root()) else {
                roots.push(idx);
                continue;
            };

            match by_id.get(parent_id) {
                Some(&parent) if parent != idx => children[parent].push(idx),
                _ => match policy {
                    OrphanPolicy::Drop => {
                        debug!("Dropping orphaned reply (parent {} not kept)", parent_id);
                        policy_orphans += 1;
                    }
                    OrphanPolicy::Promote => {
                        debug!("Promoting orphaned reply (parent {} not kept)", parent_id);
                        roots.push(idx);
                    }
                },
            }
        }

        // Post-order over everything reachable from a root.
        let mut visited = vec![false; n];
        let mut order = Vec::with_capacity(n);
        let mut stack: Vec<(usize, bool)> = roots.iter().rev().map(|&r| (r, false)).collect();
        while let Some((idx, expanded)) = stack.pop() {
            if expanded {
                order.push(idx);
                continue;
            }
            if visited[idx] {
                continue;
            }
            visited[idx] = true;
            stack.push((idx, true));
            stack.extend(children[idx].iter().rev().map(|&c| (c, false)));
        }

        let mut slots: Vec<Option<NormalizedComment>> = nodes.into_iter().map(Some).collect();
        for idx in order {
            if let Some(mut node) = slots[idx].take() {
                node.replies = children[idx]
                    .iter()
                    .filter_map(|&child| slots[child].take())
                    .collect();
                slots[idx] = Some(node);
            }
        }

        let forest = CommentForest(roots.iter().filter_map(|&r| slots[r].take()).collect());

        let orphaned = visited.iter().filter(|v| !**v).count();
        if orphaned > policy_orphans {
            warn!(
                "{} comments form a reply cycle or hang below a dropped reply and were left out",
                orphaned - policy_orphans
            );
        }

        Threaded { forest, orphaned }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn node(id: &str, parent: Option<&str>) -> NormalizedComment {
        NormalizedComment {
            id: Some(CommentId::from(id)),
            parent: parent.map(CommentId::from),
            text: Some(format!("text {}", id)),
            like_count: None,
            author: "a".to_string(),
            author_id: None,
            author_is_uploader: None,
            timestamp: None,
            formatted_datetime: None,
            replies: vec![],
        }
    }

    fn build(policy: OrphanPolicy, nodes: Vec<NormalizedComment>) -> Threaded {
        let mut builder = ForestBuilder::new(policy);
        for n in nodes {
            builder.insert(n);
        }
        builder.build()
    }

    fn ids(comments: &[NormalizedComment]) -> Vec<String> {
        comments
            .iter()
            .map(|c| c.id.as_ref().map(|i| i.to_string()).unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_missing_parent_is_dropped() {
        let threaded = build(
            OrphanPolicy::Drop,
            vec![node("1", Some("root")), node("2", Some("1")), node("3", Some("99"))],
        );

        let mut expected_root = node("1", Some("root"));
        expected_root.replies.push(node("2", Some("1")));
        assert_eq!(threaded.forest, CommentForest(vec![expected_root]));
        assert_eq!(threaded.orphaned, 1);
    }

    #[test]
    fn test_missing_parent_is_promoted() {
        let threaded = build(
            OrphanPolicy::Promote,
            vec![node("1", Some("root")), node("3", Some("99"))],
        );
        assert_eq!(ids(threaded.forest.roots()), vec!["1", "3"]);
        assert_eq!(threaded.orphaned, 0);
    }

    #[test]
    fn test_absent_parent_is_top_level() {
        let threaded = build(OrphanPolicy::Drop, vec![node("1", None), node("2", Some("root"))]);
        assert_eq!(ids(threaded.forest.roots()), vec!["1", "2"]);
    }

    #[test]
    fn test_empty_parent_is_top_level() {
        let threaded = build(
            OrphanPolicy::Drop,
            vec![node("1", Some("")), node("2", Some("1"))],
        );
        let roots = threaded.forest.roots();
        assert_eq!(ids(roots), vec!["1"]);
        assert_eq!(ids(&roots[0].replies), vec!["2"]);
        assert_eq!(threaded.orphaned, 0);
    }

    #[test]
    fn test_reply_before_parent_is_still_attached() {
        let threaded = build(
            OrphanPolicy::Drop,
            vec![node("2", Some("1")), node("1", Some("root")), node("3", Some("1"))],
        );
        let roots = threaded.forest.roots();
        assert_eq!(ids(roots), vec!["1"]);
        assert_eq!(ids(&roots[0].replies), vec!["2", "3"]);
    }

    #[test]
    fn test_nested_replies_keep_order() {
        let threaded = build(
            OrphanPolicy::Drop,
            vec![
                node("a", Some("root")),
                node("b", Some("root")),
                node("a1", Some("a")),
                node("b1", Some("b")),
                node("a2", Some("a")),
                node("a1x", Some("a1")),
            ],
        );
        let roots = threaded.forest.roots();
        assert_eq!(ids(roots), vec!["a", "b"]);
        assert_eq!(ids(&roots[0].replies), vec!["a1", "a2"]);
        assert_eq!(ids(&roots[0].replies[0].replies), vec!["a1x"]);
        assert_eq!(ids(&roots[1].replies), vec!["b1"]);
        assert_eq!(threaded.forest.total_len(), 6);
    }

    #[test]
    fn test_cycles_and_self_parents_are_left_out() {
        for policy in [OrphanPolicy::Drop, OrphanPolicy::Promote] {
            let threaded = build(
                policy,
                vec![
                    node("1", Some("root")),
                    node("x", Some("y")),
                    node("y", Some("x")),
                    node("s", Some("s")),
                ],
            );
            let root_ids = ids(threaded.forest.roots());
            assert!(root_ids.contains(&"1".to_string()));
            assert!(!root_ids.contains(&"x".to_string()));
            assert!(!root_ids.contains(&"y".to_string()));
            assert!(threaded.forest.find(&CommentId::from("x")).is_none());
        }
    }

    #[test]
    fn test_self_parent_counts_as_orphan() {
        let threaded = build(OrphanPolicy::Drop, vec![node("s", Some("s"))]);
        assert!(threaded.forest.is_empty());
        assert_eq!(threaded.orphaned, 1);
    }

    #[test]
    fn test_duplicate_id_keeps_first_position_and_last_content() {
        let mut later = node("1", Some("root"));
        later.text = Some("edited".to_string());
        let threaded = build(
            OrphanPolicy::Drop,
            vec![node("1", Some("root")), node("2", Some("root")), later],
        );
        let roots = threaded.forest.roots();
        assert_eq!(ids(roots), vec!["1", "2"]);
        assert_eq!(roots[0].text.as_deref(), Some("edited"));
    }

    #[test]
    fn test_comment_without_id_is_kept_at_top_level() {
        let mut anon = node("x", Some("root"));
        anon.id = None;
        let threaded = build(OrphanPolicy::Drop, vec![anon]);
        assert_eq!(threaded.forest.len(), 1);
    }

    #[test]
    fn test_empty_builder() {
        let builder = ForestBuilder::new(OrphanPolicy::Drop);
        assert!(builder.is_empty());
        assert_eq!(builder.build(), Threaded::default());
    }
}
