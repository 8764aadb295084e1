use regionpath_core::{Algorithm, InstrumentedRun, NodeId, RegionId};
use serde::{Deserialize, Serialize};

use crate::app::Report;

#[derive(Serialize, Deserialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub results: Vec<JsonRun>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub costs_agree: Option<bool>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonQuery {
    pub graph: String,
    pub start: NodeId,
    pub goal: NodeId,
    pub start_region: RegionId,
    pub goal_region: RegionId,
}

#[derive(Serialize, Deserialize)]
pub struct JsonRun {
    pub algorithm: Algorithm,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<NodeId>>,
    pub nodes_expanded: usize,
    pub peak_frontier_len: usize,
    pub elapsed_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peak_memory_bytes: Option<u64>,
}

impl From<&InstrumentedRun> for JsonRun {
    fn from(run: &InstrumentedRun) -> Self {
        Self {
            algorithm: run.algorithm,
            found: run.result.found(),
            cost: run.result.cost(),
            path: run.result.nodes().map(<[NodeId]>::to_vec),
            nodes_expanded: run.result.nodes_expanded,
            peak_frontier_len: run.result.peak_frontier_len,
            elapsed_ms: run.metrics.elapsed_ms(),
            peak_memory_bytes: run.metrics.peak_memory_bytes,
        }
    }
}

pub fn create_json_output(report: &Report) -> JsonOutput {
    JsonOutput {
        query: JsonQuery {
            graph: report.graph_file.display().to_string(),
            start: report.start,
            goal: report.goal,
            start_region: report.start_region,
            goal_region: report.goal_region,
        },
        results: report.runs.iter().map(JsonRun::from).collect(),
        costs_agree: report.costs_agree,
    }
}

pub fn print_json_output(json_output: &JsonOutput) {
    match serde_json::to_string_pretty(json_output) {
        Ok(json_string) => println!("{}", json_string),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}
