use std::path::PathBuf;
use thiserror::Error;

use crate::graph::{NodeId, RegionId};

/// Failures while building a graph. Construction aborts on the first one.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("edge {from} -> {to} references unknown node {missing}")]
    InvalidReference {
        from: NodeId,
        to: NodeId,
        missing: NodeId,
    },
    #[error("node {node} has region {region}, expected a region below {region_count}")]
    InvalidRegion {
        node: NodeId,
        region: RegionId,
        region_count: u32,
    },
    #[error("node {0} is declared more than once")]
    DuplicateNode(NodeId),
    #[error("edge {from} -> {to} has weight {weight}, weights must be finite and non-negative")]
    InvalidWeight { from: NodeId, to: NodeId, weight: f64 },
}

/// Rejected grid or scale settings
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("grid {rows}x{cols} has no regions")]
    EmptyGrid { rows: u32, cols: u32 },
    #[error("grid {rows}x{cols} has more regions than a region id can address")]
    GridTooLarge { rows: u32, cols: u32 },
    #[error("{name} must be a finite, non-negative number, got {value}")]
    InvalidScale { name: &'static str, value: f64 },
}

/// Failures that stop a search before it starts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("node {0} is not in the graph")]
    UnknownNode(NodeId),
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("failed to read graph file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: unrecognised entry {content:?}")]
    Malformed { line: usize, content: String },
    #[error("line {line}: invalid number {value:?}")]
    InvalidNumber { line: usize, value: String },
    #[error("line {line}: {source}")]
    Graph {
        line: usize,
        #[source]
        source: GraphError,
    },
}
