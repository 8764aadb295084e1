use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::pathfinding_config::GridDims;

pub type NodeId = u32;
pub type RegionId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub to: NodeId,
    pub weight: f64,
}

/// Directed weighted graph whose nodes each sit in one region of a grid.
///
/// Built once, then only read: searches borrow it immutably, so one graph can
/// back any number of concurrent runs.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    grid: GridDims,
    regions: FxHashMap<NodeId, RegionId>,
    edges: FxHashMap<NodeId, Vec<Edge>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_grid(grid: GridDims) -> Self {
        Self {
            grid,
            ..Self::default()
        }
    }

    pub fn grid(&self) -> GridDims {
        self.grid
    }

    pub fn add_node(&mut self, id: NodeId, region: RegionId) -> Result<(), GraphError> {
        if !self.grid.contains(region) {
            return Err(GraphError::InvalidRegion {
                node: id,
                region,
                region_count: self.grid.region_count(),
            });
        }
        if self.regions.contains_key(&id) {
            return Err(GraphError::DuplicateNode(id));
        }

        self.regions.insert(id, region);
        self.edges.insert(id, Vec::new());
        Ok(())
    }

    /// Parallel edges are kept as-is; the search relaxes every one of them.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: f64) -> Result<(), GraphError> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight { from, to, weight });
        }
        if !self.contains(to) {
            return Err(GraphError::InvalidReference {
                from,
                to,
                missing: to,
            });
        }

        match self.edges.get_mut(&from) {
            Some(outgoing) => {
                outgoing.push(Edge { to, weight });
                Ok(())
            }
            None => Err(GraphError::InvalidReference {
                from,
                to,
                missing: from,
            }),
        }
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.regions.contains_key(&id)
    }

    /// Outgoing edges in insertion order; empty for unknown nodes.
    pub fn neighbors(&self, id: NodeId) -> &[Edge] {
        self.edges.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn region_of(&self, id: NodeId) -> Option<RegionId> {
        self.regions.get(&id).copied()
    }

    pub fn node_count(&self) -> usize {
        self.regions.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// Node ids in ascending order
    pub fn node_ids(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self.regions.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Cheapest direct edge between two nodes, if any
    pub fn edge_weight(&self, from: NodeId, to: NodeId) -> Option<f64> {
        self.neighbors(from)
            .iter()
            .filter(|edge| edge.to == to)
            .map(|edge| edge.weight)
            .min_by(f64::total_cmp)
    }
}
