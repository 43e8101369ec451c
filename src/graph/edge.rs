use super::model::NodeId;

use std::collections::BTreeSet;
use std::collections::btree_set;

/// An undirected edge between two nodes
/// Invariant: always stored in canonical form with from < to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
}

/// Lazy walk over every edge of an adjacency, each reported once as `from < to`.
///
/// Ordered by `from`, then by `to`.
#[derive(Debug, Clone)]
pub struct Edges<'a> {
    adjacency: &'a [BTreeSet<NodeId>],
    next_node: usize,
    from: NodeId,
    higher: Option<btree_set::Range<'a, NodeId>>,
}

impl<'a> Edges<'a> {
    pub(super) fn new(adjacency: &'a [BTreeSet<NodeId>]) -> Self {
        Edges {
            adjacency,
            next_node: 0,
            from: NodeId(0),
            higher: None,
        }
    }
}

impl Iterator for Edges<'_> {
    type Item = Edge;

    fn next(&mut self) -> Option<Edge> {
        loop {
            if let Some(&to) = self.higher.as_mut().and_then(Iterator::next) {
                return Some(Edge { from: self.from, to });
            }

            let neighbors = self.adjacency.get(self.next_node)?;
            self.from = NodeId(self.next_node);
            self.higher = Some(neighbors.range(NodeId(self.next_node + 1)..));
            self.next_node += 1;
        }
    }
}
