use log::debug;
use std::{path::Path, str::FromStr};

use crate::error::ParseError;
use crate::graph::{Graph, NodeId, RegionId};
use crate::pathfinding_config::GridDims;

/// A graph read from text, with the optional default endpoints it declares
#[derive(Debug, Clone)]
pub struct ParsedGraph {
    pub graph: Graph,
    pub default_start: Option<NodeId>,
    pub default_goal: Option<NodeId>,
}

struct EdgeLine {
    line: usize,
    from: NodeId,
    to: NodeId,
    weight: f64,
}

pub fn load_graph_file(path: &Path, grid: GridDims) -> Result<ParsedGraph, ParseError> {
    let text = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_graph(&text, grid)
}

/// Parse the line format:
///
/// ```text
/// # comment            // also a comment
/// 0,11                 node 0 in region 11
/// 0,1,523.5            edge 0 -> 1 with weight 523.5
/// S,0                  default start
/// D,1                  default destination
/// ```
///
/// Nodes are registered before any edge, so lines may come in any order.
pub fn parse_graph(text: &str, grid: GridDims) -> Result<ParsedGraph, ParseError> {
    let mut graph = Graph::with_grid(grid);
    let mut default_start = None;
    let mut default_goal = None;
    let mut edge_lines = Vec::new();

    for (index, raw_line) in text.lines().enumerate() {
        let line = index + 1;
        let content = strip_comment(raw_line);
        if content.is_empty() {
            continue;
        }

        let fields: Vec<&str> = content.split(',').map(str::trim).collect();
        match fields.as_slice() {
            [marker, node] if marker.eq_ignore_ascii_case("s") => {
                default_start = Some(parse_field(node, line)?);
            }
            [marker, node] if marker.eq_ignore_ascii_case("d") => {
                default_goal = Some(parse_field(node, line)?);
            }
            [node, region] => {
                let node: NodeId = parse_field(node, line)?;
                let region: RegionId = parse_field(region, line)?;
                graph
                    .add_node(node, region)
                    .map_err(|source| ParseError::Graph { line, source })?;
            }
            [from, to, weight] => edge_lines.push(EdgeLine {
                line,
                from: parse_field(from, line)?,
                to: parse_field(to, line)?,
                weight: parse_field(weight, line)?,
            }),
            _ => {
                return Err(ParseError::Malformed {
                    line,
                    content: content.to_string(),
                });
            }
        }
    }

    for edge in edge_lines {
        graph
            .add_edge(edge.from, edge.to, edge.weight)
            .map_err(|source| ParseError::Graph {
                line: edge.line,
                source,
            })?;
    }

    debug!(
        "parsed graph with {} nodes and {} edges (start marker {:?}, destination marker {:?})",
        graph.node_count(),
        graph.edge_count(),
        default_start,
        default_goal
    );

    Ok(ParsedGraph {
        graph,
        default_start,
        default_goal,
    })
}

fn strip_comment(line: &str) -> &str {
    let line = line.split("//").next().unwrap_or_default();
    let line = line.split('#').next().unwrap_or_default();
    line.trim()
}

fn parse_field<T: FromStr>(value: &str, line: usize) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidNumber {
        line,
        value: value.to_string(),
    })
}
