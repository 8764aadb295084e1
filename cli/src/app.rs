use anyhow::{Context, Result};
use log::info;
use regionpath_core::{
    InstrumentedRun, NodeId, ParsedGraph, RegionId, SearchError, compare_algorithms,
    load_graph_file, run_instrumented,
};
use std::path::PathBuf;

use crate::args::{AlgorithmChoice, Args};

pub const DEFAULT_START: NodeId = 0;
pub const DEFAULT_GOAL: NodeId = 50;

/// Everything the reporting layer needs about one invocation
#[derive(Debug, Clone)]
pub struct Report {
    pub graph_file: PathBuf,
    pub start: NodeId,
    pub goal: NodeId,
    pub start_region: RegionId,
    pub goal_region: RegionId,
    pub runs: Vec<InstrumentedRun>,
    /// Set only when both algorithms ran
    pub costs_agree: Option<bool>,
}

/// Command-line ids win over the file's markers, which win over the defaults.
pub fn resolve_endpoints(args: &Args, parsed: &ParsedGraph) -> (NodeId, NodeId) {
    let start = args
        .start
        .or(parsed.default_start)
        .unwrap_or(DEFAULT_START);
    let goal = args.goal.or(parsed.default_goal).unwrap_or(DEFAULT_GOAL);
    (start, goal)
}

pub fn run(args: &Args) -> Result<Report> {
    let config = args.config().context("invalid search settings")?;
    let parsed = load_graph_file(&args.graph_file, config.grid())
        .with_context(|| format!("could not load graph from {}", args.graph_file.display()))?;
    let (start, goal) = resolve_endpoints(args, &parsed);
    let graph = &parsed.graph;

    let start_region = graph
        .region_of(start)
        .ok_or(SearchError::UnknownNode(start))
        .context("start node not found in graph")?;
    let goal_region = graph
        .region_of(goal)
        .ok_or(SearchError::UnknownNode(goal))
        .context("goal node not found in graph")?;

    info!(
        "searching {} ({} nodes, {} edges) from {start} to {goal}",
        args.graph_file.display(),
        graph.node_count(),
        graph.edge_count()
    );

    let (runs, costs_agree) = match args.algorithm {
        AlgorithmChoice::Both => {
            let comparison = compare_algorithms(graph, start, goal, &config)?;
            let agree = comparison.costs_agree();
            (vec![comparison.dijkstra, comparison.astar], Some(agree))
        }
        choice => {
            let runs = choice
                .algorithms()
                .into_iter()
                .map(|algorithm| run_instrumented(algorithm, graph, start, goal, &config))
                .collect::<Result<Vec<_>, _>>()?;
            (runs, None)
        }
    };

    Ok(Report {
        graph_file: args.graph_file.clone(),
        start,
        goal,
        start_region,
        goal_region,
        runs,
        costs_agree,
    })
}
