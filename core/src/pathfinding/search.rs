use log::{debug, trace};
use rustc_hash::{FxHashMap, FxHashSet};

use super::frontier::Frontier;
use super::utils::{FoundPath, SearchResult, reconstruct_path};
use crate::algorithm::Algorithm;
use crate::error::SearchError;
use crate::graph::{Graph, NodeId};
use crate::heuristic::{Heuristic, RegionHeuristic, ZeroHeuristic};
use crate::pathfinding_config::PathfindingConfig;

/// Per-run bookkeeping. Built fresh for every search and dropped with it.
struct SearchState {
    frontier: Frontier,
    distances: FxHashMap<NodeId, f64>,
    parent_map: FxHashMap<NodeId, NodeId>,
    finalized: FxHashSet<NodeId>,
    nodes_expanded: usize,
}

impl SearchState {
    fn new(start: NodeId, start_priority: f64) -> Self {
        let mut frontier = Frontier::new();
        let mut distances = FxHashMap::default();

        frontier.push(start, start_priority);
        distances.insert(start, 0.0);

        Self {
            frontier,
            distances,
            parent_map: FxHashMap::default(),
            finalized: FxHashSet::default(),
            nodes_expanded: 0,
        }
    }

    fn visit_neighbor(&mut self, neighbor: NodeId, current: NodeId, new_cost: f64, estimate: f64) {
        if let Some(&existing_cost) = self.distances.get(&neighbor) {
            if new_cost >= existing_cost {
                return;
            }
        }

        // Only reachable with an inconsistent heuristic: reopen the node so
        // the cheaper route propagates to its successors.
        self.finalized.remove(&neighbor);

        self.distances.insert(neighbor, new_cost);
        self.parent_map.insert(neighbor, current);
        self.frontier.push(neighbor, new_cost + estimate);
    }

    fn into_result(self, path: Option<FoundPath>) -> SearchResult {
        SearchResult {
            path,
            nodes_expanded: self.nodes_expanded,
            peak_frontier_len: self.frontier.peak_len(),
        }
    }
}

/// Best-first search from `start` to `goal`, ordered by cost so far plus the
/// heuristic's estimate of the rest.
///
/// With [`ZeroHeuristic`] this is Dijkstra's algorithm, with an admissible
/// estimate it is A*. Both share every line of the expansion loop.
pub fn best_first_search<H: Heuristic + ?Sized>(
    graph: &Graph,
    start: NodeId,
    goal: NodeId,
    heuristic: &H,
) -> Result<SearchResult, SearchError> {
    for endpoint in [start, goal] {
        if !graph.contains(endpoint) {
            return Err(SearchError::UnknownNode(endpoint));
        }
    }

    let mut state = SearchState::new(start, heuristic.estimate(graph, start, goal));

    while let Some((current_node, priority)) = state.frontier.pop_min() {
        if !state.finalized.insert(current_node) {
            continue;
        }
        state.nodes_expanded += 1;

        let Some(&current_cost) = state.distances.get(&current_node) else {
            continue;
        };
        trace!("expanding node {current_node} (cost {current_cost:.2}, priority {priority:.2})");

        if current_node == goal {
            let nodes = reconstruct_path(&state.parent_map, start, goal);
            return Ok(state.into_result(Some(FoundPath {
                nodes,
                cost: current_cost,
            })));
        }

        for edge in graph.neighbors(current_node) {
            let new_cost = current_cost + edge.weight;
            let estimate = heuristic.estimate(graph, edge.to, goal);
            state.visit_neighbor(edge.to, current_node, new_cost, estimate);
        }
    }

    Ok(state.into_result(None))
}

pub fn dijkstra_find_path(
    graph: &Graph,
    start: NodeId,
    goal: NodeId,
) -> Result<SearchResult, SearchError> {
    best_first_search(graph, start, goal, &ZeroHeuristic)
}

/// Region positions come from the graph's own grid; `config` only supplies
/// the region size and weight scale.
pub fn astar_find_path(
    graph: &Graph,
    start: NodeId,
    goal: NodeId,
    config: &PathfindingConfig,
) -> Result<SearchResult, SearchError> {
    best_first_search(graph, start, goal, &RegionHeuristic::new(config))
}

pub fn find_path(
    algorithm: Algorithm,
    graph: &Graph,
    start: NodeId,
    goal: NodeId,
    config: &PathfindingConfig,
) -> Result<SearchResult, SearchError> {
    debug!("{} search from node {start} to node {goal}", algorithm.label());

    let result = match algorithm {
        Algorithm::Dijkstra => dijkstra_find_path(graph, start, goal),
        Algorithm::AStar => astar_find_path(graph, start, goal, config),
    }?;

    debug!(
        "{} finished: found={} expanded={} peak_frontier={}",
        algorithm.label(),
        result.found(),
        result.nodes_expanded,
        result.peak_frontier_len
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_graph() -> Graph {
        // 0 -> 1 -> 2, spread along the top row
        let mut graph = Graph::new();
        graph.add_node(0, 0).unwrap();
        graph.add_node(1, 5).unwrap();
        graph.add_node(2, 9).unwrap();
        graph.add_edge(0, 1, 100.0).unwrap();
        graph.add_edge(1, 2, 200.0).unwrap();
        graph
    }

    fn diamond_graph() -> Graph {
        //     0
        //    / \
        //   1   2
        //    \ /
        //     3
        let mut graph = Graph::new();
        graph.add_node(0, 0).unwrap();
        graph.add_node(1, 10).unwrap();
        graph.add_node(2, 1).unwrap();
        graph.add_node(3, 11).unwrap();
        graph.add_edge(0, 1, 3.0).unwrap();
        graph.add_edge(0, 2, 1.0).unwrap();
        graph.add_edge(1, 3, 1.0).unwrap();
        graph.add_edge(2, 3, 1.0).unwrap();
        graph
    }

    #[test]
    fn test_line_graph_both_algorithms() {
        let graph = line_graph();
        let config = PathfindingConfig::default();

        for algorithm in Algorithm::ALL {
            let result = find_path(algorithm, &graph, 0, 2, &config).unwrap();
            assert_eq!(result.cost(), Some(300.0));
            assert_eq!(result.nodes(), Some(&[0, 1, 2][..]));
        }
    }

    #[test]
    fn test_diamond_prefers_cheaper_branch() {
        let graph = diamond_graph();
        let result = dijkstra_find_path(&graph, 0, 3).unwrap();

        assert_eq!(result.cost(), Some(2.0));
        assert_eq!(result.nodes(), Some(&[0, 2, 3][..]));
    }

    #[test]
    fn test_start_equals_goal() {
        let mut graph = Graph::new();
        graph.add_node(0, 0).unwrap();

        let result = dijkstra_find_path(&graph, 0, 0).unwrap();
        assert_eq!(result.cost(), Some(0.0));
        assert_eq!(result.nodes(), Some(&[0][..]));
        assert_eq!(result.nodes_expanded, 1);
    }

    #[test]
    fn test_unknown_endpoints() {
        let graph = line_graph();
        assert_eq!(
            dijkstra_find_path(&graph, 42, 2),
            Err(SearchError::UnknownNode(42))
        );
        assert_eq!(
            astar_find_path(&graph, 0, 43, &PathfindingConfig::default()),
            Err(SearchError::UnknownNode(43))
        );
    }

    #[test]
    fn test_disconnected_goal_is_not_an_error() {
        let mut graph = Graph::new();
        graph.add_node(0, 0).unwrap();
        graph.add_node(1, 99).unwrap();

        let result = dijkstra_find_path(&graph, 0, 1).unwrap();
        assert!(!result.found());
        assert_eq!(result.cost(), None);
        assert_eq!(result.nodes_expanded, 1);
    }

    #[test]
    fn test_stale_entries_are_skipped() {
        // 2 is first reached at cost 10 then improved to 2 via 1
        let mut graph = Graph::new();
        for id in 0..4 {
            graph.add_node(id, 0).unwrap();
        }
        graph.add_edge(0, 2, 10.0).unwrap();
        graph.add_edge(0, 1, 1.0).unwrap();
        graph.add_edge(1, 2, 1.0).unwrap();
        graph.add_edge(2, 3, 1.0).unwrap();

        let result = dijkstra_find_path(&graph, 0, 3).unwrap();
        assert_eq!(result.cost(), Some(3.0));
        assert_eq!(result.nodes(), Some(&[0, 1, 2, 3][..]));
        assert_eq!(result.nodes_expanded, 4);
    }

    #[test]
    fn test_inconsistent_heuristic_still_optimal() {
        struct Lumpy;
        impl Heuristic for Lumpy {
            // Admissible (never above the true remaining cost) but not
            // consistent across the edge 1 -> 2.
            fn estimate(&self, _graph: &Graph, node: NodeId, _goal: NodeId) -> f64 {
                match node {
                    1 => 4.0,
                    _ => 0.0,
                }
            }
        }

        //   0 --1--> 1 --1--> 2 --3--> 3
        //   0 ----------3---> 2
        let mut graph = Graph::new();
        for id in 0..4 {
            graph.add_node(id, 0).unwrap();
        }
        graph.add_edge(0, 1, 1.0).unwrap();
        graph.add_edge(0, 2, 3.0).unwrap();
        graph.add_edge(1, 2, 1.0).unwrap();
        graph.add_edge(2, 3, 3.0).unwrap();

        let result = best_first_search(&graph, 0, 3, &Lumpy).unwrap();
        assert_eq!(result.cost(), Some(5.0));
        assert_eq!(result.nodes(), Some(&[0, 1, 2, 3][..]));
    }
}
