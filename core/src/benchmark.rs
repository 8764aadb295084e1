use log::{debug, warn};
use serde::Serialize;
use std::time::{Duration, Instant};
use sysinfo::{Pid, System};

use crate::algorithm::Algorithm;
use crate::error::SearchError;
use crate::graph::{Graph, NodeId};
use crate::pathfinding::{SearchResult, find_path};
use crate::pathfinding_config::PathfindingConfig;

/// Observations taken around a search run. Never fed back into the search.
#[derive(Debug, Clone, Serialize)]
pub struct RunMetrics {
    pub elapsed: Duration,
    /// Larger of the process resident set sizes sampled just before and just
    /// after the search. Allocations freed inside the search are not seen.
    /// `None` when the platform does not expose resident memory.
    pub peak_memory_bytes: Option<u64>,
}

impl RunMetrics {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InstrumentedRun {
    pub algorithm: Algorithm,
    pub result: SearchResult,
    pub metrics: RunMetrics,
}

/// Dijkstra and A* over the same query
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub dijkstra: InstrumentedRun,
    pub astar: InstrumentedRun,
}

impl Comparison {
    /// Both found a path of the same cost, or neither found one
    pub fn costs_agree(&self) -> bool {
        match (self.dijkstra.result.cost(), self.astar.result.cost()) {
            (Some(dijkstra_cost), Some(astar_cost)) => {
                let scale = dijkstra_cost.abs().max(astar_cost.abs()).max(1.0);
                (dijkstra_cost - astar_cost).abs() <= 1e-9 * scale
            }
            (None, None) => true,
            _ => false,
        }
    }

    pub fn runs(&self) -> [&InstrumentedRun; 2] {
        [&self.dijkstra, &self.astar]
    }
}

/// Best-effort resident-memory sampler for the current process. Keeps the
/// largest value over all calls to `sample`.
struct MemorySampler {
    system: System,
    pid: Option<Pid>,
    peak: Option<u64>,
}

impl MemorySampler {
    fn new() -> Self {
        let pid = match sysinfo::get_current_pid() {
            Ok(pid) => Some(pid),
            Err(reason) => {
                warn!("peak memory unavailable: {reason}");
                None
            }
        };

        Self {
            system: System::new(),
            pid,
            peak: None,
        }
    }

    fn sample(&mut self) {
        let Some(pid) = self.pid else {
            return;
        };
        if !self.system.refresh_process(pid) {
            return;
        }
        if let Some(process) = self.system.process(pid) {
            let resident = process.memory();
            self.peak = Some(self.peak.map_or(resident, |peak| peak.max(resident)));
        }
    }

    fn peak(&self) -> Option<u64> {
        self.peak
    }
}

pub fn run_instrumented(
    algorithm: Algorithm,
    graph: &Graph,
    start: NodeId,
    goal: NodeId,
    config: &PathfindingConfig,
) -> Result<InstrumentedRun, SearchError> {
    let mut sampler = MemorySampler::new();
    sampler.sample();

    let search_timer = Instant::now();
    let result = find_path(algorithm, graph, start, goal, config)?;
    let elapsed = search_timer.elapsed();

    sampler.sample();
    let metrics = RunMetrics {
        elapsed,
        peak_memory_bytes: sampler.peak(),
    };
    debug!(
        "{} took {:.3} ms, peak memory {:?}",
        algorithm.label(),
        metrics.elapsed_ms(),
        metrics.peak_memory_bytes
    );

    Ok(InstrumentedRun {
        algorithm,
        result,
        metrics,
    })
}

/// Run Dijkstra then A* on the same query, each with its own fresh state
pub fn compare_algorithms(
    graph: &Graph,
    start: NodeId,
    goal: NodeId,
    config: &PathfindingConfig,
) -> Result<Comparison, SearchError> {
    let dijkstra = run_instrumented(Algorithm::Dijkstra, graph, start, goal, config)?;
    let astar = run_instrumented(Algorithm::AStar, graph, start, goal, config)?;

    let comparison = Comparison { dijkstra, astar };
    if !comparison.costs_agree() {
        warn!(
            "Dijkstra and A* disagree on the cost from {start} to {goal}: {:?} vs {:?}",
            comparison.dijkstra.result.cost(),
            comparison.astar.result.cost()
        );
    }
    Ok(comparison)
}
