use bevy::math::Vec3;
use bevy::prelude::Resource;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::drag::{DragState, HitTest, PointerInput};
use super::forces::pair_force;
use crate::config::{Integration, LayoutConfig};
use crate::graph::{Edges, GraphError, GraphModel, NodeId, SphereScatter};

/// Force-directed layout over a `GraphModel`, with one draggable node at a time.
///
/// Input handling (`begin_drag` / `update_drag` / `end_drag`) and stepping
/// (`step`) are independent calls; callers run input first each frame so the
/// force pass sees the post-drag positions.
#[derive(Debug, Clone, Resource)]
pub struct LayoutSimulator {
    graph: GraphModel,
    config: LayoutConfig,
    drag: DragState,
}

impl LayoutSimulator {
    /// Generate a random graph from `config` and wrap it in a simulator
    pub fn new(config: LayoutConfig) -> Result<Self, GraphError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let mut scatter = SphereScatter::new(config.scatter_radius);
        let graph = GraphModel::generate(&config, &mut rng, &mut scatter)?;

        log::info!(
            "Layout ready: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Self::with_graph(config, graph)
    }

    /// Simulate an existing graph; `config.node_count` is not consulted
    pub fn with_graph(config: LayoutConfig, graph: GraphModel) -> Result<Self, GraphError> {
        config.validate()?;
        Ok(LayoutSimulator {
            graph,
            config,
            drag: DragState::Idle,
        })
    }

    // === Queries ===

    pub fn graph(&self) -> &GraphModel {
        &self.graph
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn dragged_node(&self) -> Option<NodeId> {
        self.drag.node()
    }

    pub fn position_of(&self, node: NodeId) -> Result<Vec3, GraphError> {
        self.graph.position_of(node)
    }

    /// Edges for line drawing
    pub fn all_edges(&self) -> Edges<'_> {
        self.graph.all_edges()
    }

    // === Simulation ===

    /// Advance the layout by `dt` seconds.
    ///
    /// Every node except the dragged one moves by its net force times `dt`
    /// (forward Euler, no velocity carried between steps). Negative or
    /// non-finite `dt` is treated as zero.
    pub fn step(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            if dt != 0.0 {
                log::debug!("Ignoring step with dt = {}", dt);
            }
            return;
        }

        let dragged = self.drag.node().map(|node| node.index());

        match self.config.integration {
            Integration::InPlace => {
                for i in 0..self.graph.node_count() {
                    if Some(i) == dragged {
                        continue;
                    }
                    let force = self.net_force(i, self.graph.positions());
                    self.graph.positions_mut()[i] += force * dt;
                }
            }
            Integration::Buffered => {
                let snapshot = self.graph.positions().to_vec();
                for i in 0..snapshot.len() {
                    if Some(i) == dragged {
                        continue;
                    }
                    let force = self.net_force(i, &snapshot);
                    self.graph.positions_mut()[i] += force * dt;
                }
            }
        }
    }

    /// Call `step` `steps` times with the same `dt`
    pub fn run(&mut self, steps: usize, dt: f32) {
        for _ in 0..steps {
            self.step(dt);
        }
    }

    /// Sum of the forces every other node exerts on node `index`
    fn net_force(&self, index: usize, positions: &[Vec3]) -> Vec3 {
        let origin = positions[index];
        let neighbors = self.graph.neighbor_set(index);

        positions
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != index)
            .fold(Vec3::ZERO, |force, (j, &other)| {
                force + pair_force(origin, other, neighbors.contains(&NodeId(j)), &self.config)
            })
    }

    // === Dragging ===

    /// Start dragging whatever node `hit_test` finds under the pointer.
    ///
    /// A miss leaves the current state alone. A hit replaces any drag in progress.
    pub fn begin_drag<H>(&mut self, pointer: Vec3, hit_test: &H) -> Option<NodeId>
    where
        H: HitTest + ?Sized,
    {
        let node = hit_test.hit_test(pointer)?;
        let position = match self.graph.position_of(node) {
            Ok(position) => position,
            Err(err) => {
                log::warn!("Hit test returned an unknown node: {}", err);
                return None;
            }
        };

        self.drag = DragState::Dragging {
            node,
            offset: position - pointer,
        };
        log::debug!("Started dragging node {}", node);
        Some(node)
    }

    /// Move the dragged node to follow the pointer, pulling its direct
    /// neighbors half as far. Returns the dragged node's displacement, or
    /// `None` when nothing is being dragged.
    pub fn update_drag(&mut self, pointer: Vec3) -> Option<Vec3> {
        let (node, target) = self.drag.target(pointer)?;
        match self.graph.drag_node(node, target) {
            Ok(displacement) => Some(displacement),
            Err(err) => {
                // Only reachable if the graph was swapped under a live drag
                log::warn!("Dropping drag: {}", err);
                self.drag = DragState::Idle;
                None
            }
        }
    }

    /// Release the dragged node, if any
    pub fn end_drag(&mut self) {
        if let Some(node) = self.drag.node() {
            log::debug!("Released node {}", node);
        }
        self.drag = DragState::Idle;
    }

    /// Route one pointer event to the matching drag operation
    pub fn handle_pointer<H>(&mut self, input: PointerInput, hit_test: &H)
    where
        H: HitTest + ?Sized,
    {
        match input {
            PointerInput::Down(pointer) => {
                self.begin_drag(pointer, hit_test);
            }
            PointerInput::Move(pointer) => {
                self.update_drag(pointer);
            }
            PointerInput::Up => self.end_drag(),
        }
    }
}
