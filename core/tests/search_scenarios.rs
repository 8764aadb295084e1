use regionpath_core::{
    Algorithm, Graph, GridDims, NodeId, PathfindingConfig, SearchError, compare_algorithms,
    find_path, load_graph_file, parsing::parse_graph, pathfinding::path_cost,
};
use std::io::Write;
use tempfile::NamedTempFile;

/// Top row corridor 0 -> 1 -> ... -> 9 (node k in region k, 1000 per hop),
/// plus a decoy branch from 0 running down the first column through nodes
/// 10, 20, ..., 90 (node id == region id).
fn corridor_with_decoy() -> Graph {
    let mut graph = Graph::new();
    for node in 0..10 {
        graph.add_node(node, node).unwrap();
    }
    for node in (10..100).step_by(10) {
        graph.add_node(node, node).unwrap();
    }

    for node in 0..9 {
        graph.add_edge(node, node + 1, 1000.0).unwrap();
    }
    graph.add_edge(0, 10, 1500.0).unwrap();
    for node in (10..90).step_by(10) {
        graph.add_edge(node, node + 10, 1000.0).unwrap();
    }
    graph
}

#[test]
fn test_astar_expands_fewer_nodes_on_corridor() {
    let graph = corridor_with_decoy();
    let comparison = compare_algorithms(&graph, 0, 9, &PathfindingConfig::default()).unwrap();

    let dijkstra = &comparison.dijkstra.result;
    let astar = &comparison.astar.result;

    assert!(comparison.costs_agree());
    assert_eq!(dijkstra.cost(), Some(9000.0));
    assert_eq!(astar.cost(), Some(9000.0));
    let expected: Vec<NodeId> = (0..10).collect();
    assert_eq!(dijkstra.nodes(), Some(expected.as_slice()));
    assert_eq!(astar.nodes(), Some(expected.as_slice()));

    assert_eq!(dijkstra.nodes_expanded, 18);
    assert_eq!(astar.nodes_expanded, 10);
}

#[test]
fn test_same_region_everywhere_gives_equal_effort() {
    let mut graph = Graph::new();
    for node in 0..6 {
        graph.add_node(node, 44).unwrap();
    }
    graph.add_edge(0, 1, 2.0).unwrap();
    graph.add_edge(0, 2, 1.0).unwrap();
    graph.add_edge(2, 3, 4.0).unwrap();
    graph.add_edge(1, 3, 1.0).unwrap();
    graph.add_edge(3, 4, 1.0).unwrap();
    graph.add_edge(2, 5, 0.5).unwrap();

    let comparison = compare_algorithms(&graph, 0, 4, &PathfindingConfig::default()).unwrap();
    assert_eq!(comparison.dijkstra.result, comparison.astar.result);
    assert_eq!(comparison.dijkstra.result.cost(), Some(4.0));
}

#[test]
fn test_start_without_outgoing_edges() {
    let mut graph = corridor_with_decoy();
    graph.add_node(5000, 0).unwrap();

    for algorithm in Algorithm::ALL {
        let result = find_path(algorithm, &graph, 5000, 9, &PathfindingConfig::default()).unwrap();
        assert!(!result.found());
        assert_eq!(result.path, None);
        assert_eq!(result.nodes_expanded, 1);
    }
}

#[test]
fn test_goal_behind_one_way_edges() {
    let graph = corridor_with_decoy();
    let comparison = compare_algorithms(&graph, 9, 0, &PathfindingConfig::default()).unwrap();

    assert!(!comparison.dijkstra.result.found());
    assert!(!comparison.astar.result.found());
    assert!(comparison.costs_agree());
}

#[test]
fn test_unknown_start_is_rejected() {
    let graph = corridor_with_decoy();
    let outcome = find_path(Algorithm::AStar, &graph, 3, 12345, &PathfindingConfig::default());
    assert_eq!(outcome, Err(SearchError::UnknownNode(12345)));
}

#[test]
fn test_parallel_edges_pick_the_cheapest() {
    let mut graph = Graph::new();
    graph.add_node(0, 0).unwrap();
    graph.add_node(1, 1).unwrap();
    graph.add_edge(0, 1, 700.0).unwrap();
    graph.add_edge(0, 1, 300.0).unwrap();
    graph.add_edge(0, 1, 500.0).unwrap();

    for algorithm in Algorithm::ALL {
        let result = find_path(algorithm, &graph, 0, 1, &PathfindingConfig::default()).unwrap();
        assert_eq!(result.cost(), Some(300.0));
    }
}

#[test]
fn test_graph_loaded_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "# three nodes along the top row").unwrap();
    writeln!(file, "0,0").unwrap();
    writeln!(file, "1,3").unwrap();
    writeln!(file, "2,6 // far right").unwrap();
    writeln!(file, "0,1,3050.5").unwrap();
    writeln!(file, "1,2,3100").unwrap();
    writeln!(file, "0,2,7000").unwrap();
    writeln!(file, "S,0").unwrap();
    writeln!(file, "D,2").unwrap();
    file.flush().unwrap();

    let parsed = load_graph_file(file.path(), GridDims::default()).unwrap();
    let start = parsed.default_start.unwrap();
    let goal = parsed.default_goal.unwrap();

    let comparison =
        compare_algorithms(&parsed.graph, start, goal, &PathfindingConfig::default()).unwrap();
    let result = &comparison.astar.result;

    assert!(comparison.costs_agree());
    assert_eq!(result.nodes(), Some(&[0, 1, 2][..]));
    assert_eq!(result.cost(), Some(6150.5));
    assert_eq!(path_cost(&parsed.graph, &[0, 1, 2]), Some(6150.5));
}

#[test]
fn test_custom_grid_dimensions() {
    let grid = GridDims::new(1, 30).unwrap();
    let parsed = parse_graph("0,0\n1,15\n2,29\n0,1,1500\n1,2,1400\n", grid).unwrap();
    let config = PathfindingConfig::new(grid, 10.0, 10.0).unwrap();

    let comparison = compare_algorithms(&parsed.graph, 0, 2, &config).unwrap();
    assert_eq!(comparison.astar.result.cost(), Some(2900.0));
    assert!(comparison.astar.result.nodes_expanded <= comparison.dijkstra.result.nodes_expanded);
}

#[test]
fn test_config_grid_does_not_override_graph_grid() {
    // square grid: 0 = (0, 0), 50 = (5, 0), 99 = (9, 9)
    let mut graph = Graph::new();
    for node in [0, 50, 99] {
        graph.add_node(node, node).unwrap();
    }
    graph.add_edge(0, 50, 6000.0).unwrap();
    graph.add_edge(50, 99, 9000.0).unwrap();
    graph.add_edge(0, 99, 20000.0).unwrap();

    let strip = GridDims::new(1, 100).unwrap();
    let config = PathfindingConfig::new(strip, 10.0, 100.0).unwrap();
    let comparison = compare_algorithms(&graph, 0, 99, &config).unwrap();

    assert!(comparison.costs_agree());
    for run in comparison.runs() {
        assert_eq!(run.result.cost(), Some(15000.0));
        assert_eq!(run.result.nodes(), Some(&[0, 50, 99][..]));
    }
}

#[test]
fn test_shared_graph_across_threads() {
    let graph = corridor_with_decoy();
    let config = PathfindingConfig::default();

    let (dijkstra, astar) = std::thread::scope(|scope| {
        let dijkstra = scope.spawn(|| find_path(Algorithm::Dijkstra, &graph, 0, 9, &config));
        let astar = scope.spawn(|| find_path(Algorithm::AStar, &graph, 0, 9, &config));
        (dijkstra.join().unwrap(), astar.join().unwrap())
    });

    assert_eq!(dijkstra.unwrap().cost(), astar.unwrap().cost());
}

#[test]
fn test_repeated_runs_are_identical() {
    let graph = corridor_with_decoy();
    let config = PathfindingConfig::default();

    let first = find_path(Algorithm::AStar, &graph, 0, 9, &config).unwrap();
    let second = find_path(Algorithm::AStar, &graph, 0, 9, &config).unwrap();
    assert_eq!(first, second);
}
