use crate::graph::{Graph, NodeId, RegionId};
use crate::pathfinding_config::{GridDims, PathfindingConfig};

/// Lower-bound estimate of the remaining cost from `node` to `goal`.
///
/// Implementations must never overestimate, otherwise A* loses optimality.
pub trait Heuristic {
    fn estimate(&self, graph: &Graph, node: NodeId, goal: NodeId) -> f64;
}

/// Always zero. Plugging this into the engine yields Dijkstra.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, _graph: &Graph, _node: NodeId, _goal: NodeId) -> f64 {
        0.0
    }
}

/// Straight-line lower bound derived from the regions two nodes sit in.
///
/// Node coordinates inside a region are unknown, so the bound only counts the
/// regions lying strictly between the two: neighbouring regions contribute
/// nothing along an axis, regions `k` apart contribute `(k - 1) * region_size`.
///
/// Region ids are placed on the grid of the graph being searched.
#[derive(Debug, Clone, Copy)]
pub struct RegionHeuristic {
    region_size: f64,
    weight_scale: f64,
}

impl RegionHeuristic {
    pub fn new(config: &PathfindingConfig) -> Self {
        Self {
            region_size: config.region_size(),
            weight_scale: config.weight_scale(),
        }
    }

    /// Estimate between two regions of `grid`, in edge-weight units
    pub fn estimate_regions(&self, grid: GridDims, from: RegionId, to: RegionId) -> f64 {
        region_separation(from, to, grid, self.region_size) * self.weight_scale
    }
}

impl Default for RegionHeuristic {
    fn default() -> Self {
        Self::new(&PathfindingConfig::default())
    }
}

impl Heuristic for RegionHeuristic {
    fn estimate(&self, graph: &Graph, node: NodeId, goal: NodeId) -> f64 {
        match (graph.region_of(node), graph.region_of(goal)) {
            (Some(from), Some(to)) => self.estimate_regions(graph.grid(), from, to),
            _ => 0.0,
        }
    }
}

/// Number of whole regions strictly between two rows (or two columns)
pub fn axis_gap(a: u32, b: u32) -> u32 {
    a.abs_diff(b).saturating_sub(1)
}

/// Smallest possible map distance between any point of region `a` and any
/// point of region `b`.
pub fn region_separation(a: RegionId, b: RegionId, grid: GridDims, region_size: f64) -> f64 {
    let (row_a, col_a) = grid.position(a);
    let (row_b, col_b) = grid.position(b);

    let forced_rows = f64::from(axis_gap(row_a, row_b)) * region_size;
    let forced_cols = f64::from(axis_gap(col_a, col_b)) * region_size;

    forced_rows.hypot(forced_cols)
}
