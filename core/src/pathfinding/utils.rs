use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::graph::{Graph, NodeId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoundPath {
    /// Node ids from start to goal, both included
    pub nodes: Vec<NodeId>,
    pub cost: f64,
}

/// Outcome of one search run. An unreachable goal is a normal result with
/// `path: None`, never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub path: Option<FoundPath>,
    pub nodes_expanded: usize,
    pub peak_frontier_len: usize,
}

impl SearchResult {
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    pub fn cost(&self) -> Option<f64> {
        self.path.as_ref().map(|path| path.cost)
    }

    pub fn nodes(&self) -> Option<&[NodeId]> {
        self.path.as_ref().map(|path| path.nodes.as_slice())
    }
}

pub fn reconstruct_path(
    parent_map: &FxHashMap<NodeId, NodeId>,
    start: NodeId,
    target: NodeId,
) -> Vec<NodeId> {
    let mut path = vec![target];
    let mut current_node = target;

    while current_node != start {
        match parent_map.get(&current_node) {
            Some(&parent_node) => {
                path.push(parent_node);
                current_node = parent_node;
            }
            None => break,
        }
    }

    path.reverse();
    path
}

/// Total weight of walking `nodes` in order over the cheapest parallel edge
/// at each step. `None` if some consecutive pair is not connected.
pub fn path_cost(graph: &Graph, nodes: &[NodeId]) -> Option<f64> {
    nodes
        .windows(2)
        .map(|step| graph.edge_weight(step[0], step[1]))
        .sum()
}
