//! Union-find (disjoint set union) used by Kruskal's algorithm.
//!
//! Path compression plus union by rank keeps every operation at amortised
//! `O(α(n))`. Only the accepted/rejected decision is observable, so the
//! choice of representative never affects the resulting forest.

use crate::graph::NodeId;

#[derive(Clone, Debug)]
pub(super) struct DisjointSet {
    parent: Vec<NodeId>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    pub(super) fn new(node_count: usize) -> Self {
        Self {
            parent: (0..node_count).collect(),
            rank: vec![0; node_count],
            components: node_count,
        }
    }

    pub(super) const fn components(&self) -> usize {
        self.components
    }

    pub(super) fn find(&mut self, mut node: NodeId) -> NodeId {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Merges the sets holding `left` and `right`. Returns `false` when they
    /// were already joined, i.e. the edge would close a cycle.
    pub(super) fn union(&mut self, left: NodeId, right: NodeId) -> bool {
        let mut left = self.find(left);
        let mut right = self.find(right);
        if left == right {
            return false;
        }
        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        self.components -= 1;
        true
    }
}
