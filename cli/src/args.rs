use clap::{Parser, ValueEnum};
use regionpath_core::{Algorithm, ConfigError, GridDims, NodeId, PathfindingConfig};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmChoice {
    /// Run Dijkstra and A* and compare them
    Both,
    Dijkstra,
    Astar,
}

impl AlgorithmChoice {
    pub fn algorithms(&self) -> Vec<Algorithm> {
        match self {
            AlgorithmChoice::Both => Algorithm::ALL.to_vec(),
            AlgorithmChoice::Dijkstra => vec![Algorithm::Dijkstra],
            AlgorithmChoice::Astar => vec![Algorithm::AStar],
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "regionpath")]
#[command(about = "Compare Dijkstra and A* shortest paths on a region-grid graph")]
pub struct Args {
    /// Graph description file
    #[arg(default_value = "p1_graph.txt")]
    pub graph_file: PathBuf,

    /// Start node id (overrides the file's S marker)
    #[arg(requires = "goal")]
    pub start: Option<NodeId>,

    /// Goal node id (overrides the file's D marker)
    pub goal: Option<NodeId>,

    /// Which algorithm(s) to run
    #[arg(short, long, value_enum, default_value_t = AlgorithmChoice::Both)]
    pub algorithm: AlgorithmChoice,

    /// Number of region rows in the grid
    #[arg(long, value_name = "ROWS", default_value = "10", value_parser = clap::value_parser!(u32).range(1..))]
    pub grid_rows: u32,

    /// Number of region columns in the grid
    #[arg(long, value_name = "COLS", default_value = "10", value_parser = clap::value_parser!(u32).range(1..))]
    pub grid_cols: u32,

    /// Side length of one region, in map units
    #[arg(long, value_name = "UNITS", default_value = "10.0", value_parser = parse_scale)]
    pub region_size: f64,

    /// Multiplier from map units to edge weights
    #[arg(long, value_name = "FACTOR", default_value = "100.0", value_parser = parse_scale)]
    pub weight_scale: f64,

    /// Print results as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - debug logging and per-run details
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only print the table
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn grid(&self) -> Result<GridDims, ConfigError> {
        GridDims::new(self.grid_rows, self.grid_cols)
    }

    pub fn config(&self) -> Result<PathfindingConfig, ConfigError> {
        PathfindingConfig::new(self.grid()?, self.region_size, self.weight_scale)
    }
}

fn parse_scale(value: &str) -> Result<f64, String> {
    let scale: f64 = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    if scale.is_finite() && scale >= 0.0 {
        Ok(scale)
    } else {
        Err(format!("`{value}` must be finite and non-negative"))
    }
}
