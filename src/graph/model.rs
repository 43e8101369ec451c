use super::edge::{Edge, Edges};
use super::error::GraphError;
use super::scatter::PositionProvider;
use crate::config::{ConfigError, LayoutConfig};

use bevy::math::Vec3;
use rand::{Rng, RngCore};
use std::collections::BTreeSet;
use std::fmt;

/// Share of the dragged node's displacement passed on to each direct neighbor
pub const NEIGHBOR_FOLLOW: f32 = 0.5;

/// Stable node identifier, an index into the graph's node list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl NodeId {
    pub const fn new(id: usize) -> Self {
        NodeId(id)
    }

    pub const fn index(&self) -> usize {
        self.0
    }
}

/// Node positions plus a fixed, symmetric adjacency between them.
///
/// Each node keeps an ordered set of neighbors, so adjacency tests are
/// O(log degree) and neighbor lists come out sorted. The adjacency never
/// changes after construction; positions are mutated by the layout.
#[derive(Debug, Clone)]
pub struct GraphModel {
    positions: Vec<Vec3>,
    adjacency: Vec<BTreeSet<NodeId>>,
}

impl GraphModel {
    /// Scatter `config.node_count` nodes and connect each unordered pair with
    /// probability `config.connection_probability`
    pub fn generate<R, P>(
        config: &LayoutConfig,
        rng: &mut R,
        provider: &mut P,
    ) -> Result<Self, GraphError>
    where
        R: RngCore,
        P: PositionProvider + ?Sized,
    {
        config.validate()?;

        let node_count = config.node_count;
        let positions: Vec<Vec3> = (0..node_count)
            .map(|i| provider.position(i, rng))
            .collect();

        let probability = f64::from(config.connection_probability);
        let mut adjacency = vec![BTreeSet::new(); node_count];
        for i in 0..node_count {
            for j in (i + 1)..node_count {
                if rng.random_bool(probability) {
                    adjacency[i].insert(NodeId(j));
                    adjacency[j].insert(NodeId(i));
                }
            }
        }

        let graph = GraphModel {
            positions,
            adjacency,
        };
        log::debug!(
            "Generated graph: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Build a graph from explicit positions and edges.
    ///
    /// Edges are unordered; repeated pairs collapse into one.
    pub fn from_parts<I>(positions: Vec<Vec3>, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let node_count = positions.len();
        let mut adjacency = vec![BTreeSet::new(); node_count];

        for (a, b) in edges {
            for index in [a, b] {
                if index >= node_count {
                    return Err(GraphError::IndexOutOfRange { index, node_count });
                }
            }
            if a == b {
                return Err(ConfigError::SelfLoop(a).into());
            }
            adjacency[a].insert(NodeId(b));
            adjacency[b].insert(NodeId(a));
        }

        Ok(GraphModel {
            positions,
            adjacency,
        })
    }

    pub fn node_count(&self) -> usize {
        self.positions.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(BTreeSet::len).sum::<usize>() / 2
    }

    fn check(&self, node: NodeId) -> Result<usize, GraphError> {
        if node.index() < self.node_count() {
            Ok(node.index())
        } else {
            Err(GraphError::IndexOutOfRange {
                index: node.index(),
                node_count: self.node_count(),
            })
        }
    }

    /// Neighbors of a node in ascending order
    pub fn neighbors_of(
        &self,
        node: NodeId,
    ) -> Result<impl ExactSizeIterator<Item = NodeId> + '_, GraphError> {
        let index = self.check(node)?;
        Ok(self.adjacency[index].iter().copied())
    }

    pub fn degree(&self, node: NodeId) -> Result<usize, GraphError> {
        let index = self.check(node)?;
        Ok(self.adjacency[index].len())
    }

    /// Check if two nodes share an edge
    pub fn is_adjacent(&self, a: NodeId, b: NodeId) -> Result<bool, GraphError> {
        let a = self.check(a)?;
        self.check(b)?;
        Ok(self.adjacency[a].contains(&b))
    }

    /// Every edge once, as `from < to`. Cheap to call again for a fresh pass.
    pub fn all_edges(&self) -> Edges<'_> {
        Edges::new(&self.adjacency)
    }

    pub fn position_of(&self, node: NodeId) -> Result<Vec3, GraphError> {
        let index = self.check(node)?;
        Ok(self.positions[index])
    }

    pub fn set_position(&mut self, node: NodeId, position: Vec3) -> Result<(), GraphError> {
        let index = self.check(node)?;
        self.positions[index] = position;
        Ok(())
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub(crate) fn positions_mut(&mut self) -> &mut [Vec3] {
        &mut self.positions
    }

    /// Neighbor set of an index already known to be valid
    pub(crate) fn neighbor_set(&self, index: usize) -> &BTreeSet<NodeId> {
        &self.adjacency[index]
    }

    /// Move `node` to `target` and shift each direct neighbor by half of the
    /// displacement. Returns the displacement applied to `node`.
    pub(crate) fn drag_node(&mut self, node: NodeId, target: Vec3) -> Result<Vec3, GraphError> {
        let index = self.check(node)?;
        let displacement = target - self.positions[index];
        self.positions[index] = target;

        let follow = displacement * NEIGHBOR_FOLLOW;
        for neighbor in &self.adjacency[index] {
            self.positions[neighbor.index()] += follow;
        }

        Ok(displacement)
    }
}

impl Edge {
    /// Resolve both endpoints to positions, for line drawing
    pub fn endpoints(&self, graph: &GraphModel) -> Result<(Vec3, Vec3), GraphError> {
        Ok((graph.position_of(self.from)?, graph.position_of(self.to)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::SphereScatter;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn generate(node_count: usize, connection_probability: f32, seed: u64) -> GraphModel {
        let config = LayoutConfig {
            node_count,
            connection_probability,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(seed);
        GraphModel::generate(&config, &mut rng, &mut SphereScatter::new(5.0)).unwrap()
    }

    #[test]
    fn test_generate_creates_node_count_nodes() {
        let graph = generate(25, 0.2, 1);
        assert_eq!(graph.node_count(), 25);
        assert_eq!(graph.positions().len(), 25);
        for p in graph.positions() {
            assert!(p.length() <= 5.0 + 1e-4);
        }
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        let graph = generate(40, 0.3, 2);

        for i in 0..40 {
            for j in 0..40 {
                let a_to_b = graph.is_adjacent(NodeId(i), NodeId(j)).unwrap();
                let b_to_a = graph.is_adjacent(NodeId(j), NodeId(i)).unwrap();
                assert_eq!(a_to_b, b_to_a, "Adjacency should be symmetric");
            }

            for neighbor in graph.neighbors_of(NodeId(i)).unwrap() {
                assert!(
                    graph
                        .neighbors_of(neighbor)
                        .unwrap()
                        .any(|back| back == NodeId(i)),
                    "{} lists {} but not the other way round",
                    i,
                    neighbor
                );
            }
        }
    }

    #[test]
    fn test_no_self_loops() {
        let graph = generate(40, 1.0, 3);

        for i in 0..40 {
            assert!(!graph.is_adjacent(NodeId(i), NodeId(i)).unwrap());
            assert!(graph.neighbors_of(NodeId(i)).unwrap().all(|n| n != NodeId(i)));
            // Complete graph: everyone else is a neighbor
            assert_eq!(graph.degree(NodeId(i)).unwrap(), 39);
        }
    }

    #[test]
    fn test_edge_fraction_tracks_probability() {
        let node_count = 200;
        let pairs = (node_count * (node_count - 1) / 2) as f32;

        for (seed, p) in [(10, 0.05), (11, 0.2), (12, 0.5), (13, 0.9)] {
            let graph = generate(node_count, p, seed);
            let fraction = graph.edge_count() as f32 / pairs;
            assert!(
                (fraction - p).abs() < 0.02,
                "p = {}: observed edge fraction {}",
                p,
                fraction
            );
        }
    }

    #[test]
    fn test_extreme_probabilities() {
        assert_eq!(generate(30, 0.0, 4).edge_count(), 0);
        assert_eq!(generate(30, 1.0, 5).edge_count(), 30 * 29 / 2);
    }

    #[test]
    fn test_same_seed_same_graph() {
        let a = generate(30, 0.3, 99);
        let b = generate(30, 0.3, 99);

        assert_eq!(a.positions(), b.positions());
        assert!(a.all_edges().eq(b.all_edges()));
    }

    #[test]
    fn test_empty_graph() {
        let graph = generate(0, 0.5, 6);
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.all_edges().count(), 0);
        assert!(graph.position_of(NodeId(0)).is_err());
    }

    #[test]
    fn test_generate_rejects_invalid_config() {
        let config = LayoutConfig {
            connection_probability: 1.5,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(0);
        let result = GraphModel::generate(&config, &mut rng, &mut SphereScatter::new(5.0));

        assert_eq!(
            result.unwrap_err(),
            GraphError::InvalidConfiguration(ConfigError::ProbabilityOutOfRange(1.5))
        );
    }

    #[test]
    fn test_queries_reject_out_of_range_ids() {
        let graph = generate(3, 0.5, 7);
        let expected = GraphError::IndexOutOfRange {
            index: 3,
            node_count: 3,
        };

        assert_eq!(graph.position_of(NodeId(3)).unwrap_err(), expected);
        assert_eq!(graph.degree(NodeId(3)).unwrap_err(), expected);
        assert_eq!(
            graph.is_adjacent(NodeId(0), NodeId(3)).unwrap_err(),
            expected
        );
        assert_eq!(
            graph.is_adjacent(NodeId(3), NodeId(0)).unwrap_err(),
            expected
        );
        assert!(graph.neighbors_of(NodeId(3)).is_err());
    }

    #[test]
    fn test_all_edges_agrees_with_adjacency() {
        let graph = generate(30, 0.25, 8);

        let mut count = 0;
        for edge in graph.all_edges() {
            assert!(edge.from < edge.to);
            assert!(graph.is_adjacent(edge.from, edge.to).unwrap());
            count += 1;
        }
        assert_eq!(count, graph.edge_count());
    }

    #[test]
    fn test_from_parts() {
        let positions = vec![Vec3::ZERO, Vec3::X, Vec3::Y];
        let graph = GraphModel::from_parts(positions, [(1, 0), (0, 1), (2, 1)]).unwrap();

        assert_eq!(graph.edge_count(), 2);
        let neighbors: Vec<NodeId> = graph.neighbors_of(NodeId(1)).unwrap().collect();
        assert_eq!(neighbors, vec![NodeId(0), NodeId(2)]);
        assert!(!graph.is_adjacent(NodeId(0), NodeId(2)).unwrap());
    }

    #[test]
    fn test_from_parts_rejects_bad_edges() {
        let positions = vec![Vec3::ZERO, Vec3::X];

        assert_eq!(
            GraphModel::from_parts(positions.clone(), [(0, 2)]).unwrap_err(),
            GraphError::IndexOutOfRange {
                index: 2,
                node_count: 2
            }
        );
        assert_eq!(
            GraphModel::from_parts(positions, [(1, 1)]).unwrap_err(),
            GraphError::InvalidConfiguration(ConfigError::SelfLoop(1))
        );
    }

    #[test]
    fn test_drag_node_moves_only_direct_neighbors() {
        // Path 0 - 1 - 2, plus isolated 3
        let positions = vec![Vec3::ZERO, Vec3::X, Vec3::X * 2.0, Vec3::Y * 5.0];
        let mut graph = GraphModel::from_parts(positions.clone(), [(0, 1), (1, 2)]).unwrap();

        let displacement = graph.drag_node(NodeId(0), Vec3::new(0.0, 2.0, 0.0)).unwrap();

        assert_eq!(displacement, Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(graph.positions()[0], Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(graph.positions()[1], positions[1] + Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(graph.positions()[2], positions[2], "two hops away");
        assert_eq!(graph.positions()[3], positions[3]);
    }

    #[test]
    fn test_edge_endpoints() {
        let positions = vec![Vec3::ZERO, Vec3::X];
        let graph = GraphModel::from_parts(positions, [(0, 1)]).unwrap();

        let edge = graph.all_edges().next().unwrap();
        assert_eq!(edge.endpoints(&graph).unwrap(), (Vec3::ZERO, Vec3::X));
    }
}
