use regionpath_core::{Graph, GraphError, NodeId, PathfindingConfig, compare_algorithms};

const SIDE: u32 = 10;

/// One node per region, placed at the region's centre, linked to its four
/// neighbours in both directions. Weights are the scaled centre distance
/// plus a deterministic detour so that routes differ.
fn build_grid_graph() -> Result<Graph, GraphError> {
    let mut graph = Graph::new();
    for region in 0..SIDE * SIDE {
        graph.add_node(region, region)?;
    }

    for row in 0..SIDE {
        for col in 0..SIDE {
            let node = row * SIDE + col;
            let detour = f64::from((row * 7 + col * 13) % 5) * 120.0;
            if col + 1 < SIDE {
                graph.add_edge(node, node + 1, 1000.0 + detour)?;
                graph.add_edge(node + 1, node, 1000.0 + detour)?;
            }
            if row + 1 < SIDE {
                graph.add_edge(node, node + SIDE, 1000.0 + detour)?;
                graph.add_edge(node + SIDE, node, 1000.0 + detour)?;
            }
        }
    }
    Ok(graph)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let graph = build_grid_graph()?;
    let config = PathfindingConfig::default();
    let queries: [(NodeId, NodeId); 4] = [(0, 99), (0, 9), (45, 54), (90, 9)];

    println!("🚀 Comparing Dijkstra and A* on a {SIDE}x{SIDE} grid...\n");
    println!(
        "{:<10} | {:<10} | {:<10} | {:<10} | {}",
        "Query", "Cost", "Dijkstra", "A*", "Agree"
    );

    for (start, goal) in queries {
        let comparison = compare_algorithms(&graph, start, goal, &config)?;
        let cost = comparison
            .dijkstra
            .result
            .cost()
            .map_or_else(|| "N/A".to_string(), |cost| format!("{cost:.2}"));

        println!(
            "{:<10} | {:<10} | {:<10} | {:<10} | {}",
            format!("{start}->{goal}"),
            cost,
            comparison.dijkstra.result.nodes_expanded,
            comparison.astar.result.nodes_expanded,
            if comparison.costs_agree() { "yes" } else { "NO" }
        );
    }

    println!("\n✅ Comparison completed!");
    Ok(())
}
