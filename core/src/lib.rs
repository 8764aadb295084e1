pub mod algorithm;
pub mod benchmark;
pub mod error;
pub mod graph;
pub mod heuristic;
pub mod parsing;
pub mod pathfinding;
pub mod pathfinding_config;

// Re-export commonly used items
pub use algorithm::Algorithm;
pub use benchmark::{Comparison, InstrumentedRun, RunMetrics, compare_algorithms, run_instrumented};
pub use error::{ConfigError, GraphError, ParseError, SearchError};
pub use graph::{Edge, Graph, NodeId, RegionId};
pub use heuristic::{Heuristic, RegionHeuristic, ZeroHeuristic, region_separation};
pub use parsing::{ParsedGraph, load_graph_file, parse_graph};
pub use pathfinding::{
    FoundPath, SearchResult, astar_find_path, best_first_search, dijkstra_find_path, find_path,
};
pub use pathfinding_config::{GridDims, PathfindingConfig};
