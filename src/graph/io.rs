//! Plain-text graph format.
//!
//! The first line holds `<vertex_count> <edge_count>`, every following line one
//! undirected edge as two whitespace-separated vertex ids in
//! `0..vertex_count`. Blank lines are ignored.
//!
//! ```text
//! 3 2
//! 0 1
//! 0 2
//! ```

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::graph::Graph;

/// Largest vertex count accepted from a header. Every declared vertex is
/// allocated before any edge is read.
pub const MAX_VERTICES: usize = 1 << 22;

/// Parses a graph from its text form.
///
/// # Errors
/// * `Parse` with the offending line number for a missing header, a vertex
///   count above [`MAX_VERTICES`], non-integer tokens, lines without exactly
///   two ids, out-of-range ids or self-loops
pub fn parse_graph(input: &str) -> Result<Graph> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (header_line, header) = lines
        .next()
        .ok_or_else(|| Error::parse(1, "missing `<vertex_count> <edge_count>` header"))?;
    let [vertex_count, declared_edges] = parse_pair(header_line, header)?;
    if vertex_count > MAX_VERTICES {
        return Err(Error::parse(
            header_line,
            format!("vertex count {vertex_count} exceeds the limit of {MAX_VERTICES}"),
        ));
    }

    let mut graph = Graph::with_vertices(vertex_count);
    let mut edges = 0;
    for (number, line) in lines {
        let [u, v] = parse_pair(number, line)?;
        if u >= vertex_count || v >= vertex_count {
            return Err(Error::parse(
                number,
                format!("edge {u} {v} references a vertex outside 0..{vertex_count}"),
            ));
        }
        if u == v {
            return Err(Error::parse(number, format!("self-loop on vertex {u}")));
        }
        graph.add_edge(u, v)?;
        edges += 1;
    }

    if edges != declared_edges {
        log::warn!(
            "header declares {} edges but {} were read",
            declared_edges,
            edges
        );
    }
    Ok(graph)
}

/// Reads and parses a graph file.
pub fn read_graph<P: AsRef<Path>>(path: P) -> Result<Graph> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let graph = parse_graph(&contents)?;
    log::info!(
        "loaded {} vertices and {} edges from {}",
        graph.vertex_count(),
        graph.edge_count(),
        path.display()
    );
    Ok(graph)
}

/// Writes `graph` in the text format.
pub fn write_graph<W: Write>(mut writer: W, graph: &Graph) -> Result<()> {
    write!(writer, "{graph}")?;
    writer.flush()?;
    Ok(())
}

fn parse_pair(line: usize, text: &str) -> Result<[usize; 2]> {
    let mut tokens = text.split_whitespace();
    let mut next = || -> Result<usize> {
        let token = tokens
            .next()
            .ok_or_else(|| Error::parse(line, "expected two integers"))?;
        token
            .parse()
            .map_err(|_| Error::parse(line, format!("`{token}` is not a vertex id")))
    };
    let pair = [next()?, next()?];
    if tokens.next().is_some() {
        return Err(Error::parse(line, "expected exactly two integers"));
    }
    Ok(pair)
}

impl FromStr for Graph {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_graph(s)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edges = self.edges();
        writeln!(f, "{} {}", self.vertex_count(), edges.len())?;
        for (u, v) in edges {
            writeln!(f, "{u} {v}")?;
        }
        Ok(())
    }
}
