use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};

use crate::error::{Error, Result};

/// An undirected multigraph stored as adjacency lists.
///
/// Every vertex maps to the ordered list of its neighbors; a neighbor that
/// appears `m` times stands for `m` parallel edges. The lists are kept
/// symmetric and never contain self-loops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: BTreeMap<usize, Vec<usize>>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with vertices `0..n` and no edges.
    pub fn with_vertices(n: usize) -> Self {
        Self {
            adjacency: (0..n).map(|v| (v, Vec::new())).collect(),
        }
    }

    /// Builds a graph with vertices `0..n` from a list of undirected edges.
    ///
    /// # Errors
    /// * `VertexNotFound` if an endpoint is `>= n`
    /// * `InvalidGraph` if an edge is a self-loop
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut graph = Self::with_vertices(n);
        for &(u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Builds a graph from raw adjacency lists and checks that they describe a
    /// valid undirected multigraph.
    ///
    /// # Examples
    /// ```
    /// use std::collections::BTreeMap;
    /// use contraction_mincut::graph::Graph;
    ///
    /// let adjacency = BTreeMap::from([(0, vec![1, 2]), (1, vec![0]), (2, vec![0])]);
    /// let graph = Graph::from_adjacency(adjacency).unwrap();
    /// assert_eq!(graph.edge_count(), 2);
    /// ```
    pub fn from_adjacency(adjacency: BTreeMap<usize, Vec<usize>>) -> Result<Self> {
        let graph = Self { adjacency };
        graph.validate()?;
        Ok(graph)
    }

    /// Adds an isolated vertex. Returns false if it already exists.
    pub fn add_vertex(&mut self, v: usize) -> bool {
        if self.adjacency.contains_key(&v) {
            return false;
        }
        self.adjacency.insert(v, Vec::new());
        true
    }

    /// Adds one undirected edge between two existing vertices. Calling it twice
    /// creates a parallel edge.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<()> {
        if u == v {
            return Err(Error::invalid_graph(format!("self-loop on vertex {u}")));
        }
        self.require_vertex(u)?;
        self.require_vertex(v)?;
        if let Some(list) = self.adjacency.get_mut(&u) {
            list.push(v);
        }
        if let Some(list) = self.adjacency.get_mut(&v) {
            list.push(u);
        }
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of edges, counting parallel edges separately.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    pub fn has_vertex(&self, v: usize) -> bool {
        self.adjacency.contains_key(&v)
    }

    /// Iterates over vertex ids in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = usize> + '_ {
        self.adjacency.keys().copied()
    }

    pub fn neighbors(&self, v: usize) -> Option<&[usize]> {
        self.adjacency.get(&v).map(Vec::as_slice)
    }

    pub fn degree(&self, v: usize) -> Option<usize> {
        self.adjacency.get(&v).map(Vec::len)
    }

    /// Lists every edge once per occurrence.
    ///
    /// A pair `(u, w)` is emitted while scanning `u`'s list only when `w >= u`,
    /// so each undirected edge shows up exactly once and parallel edges show up
    /// as repeated pairs.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for (&u, neighbors) in &self.adjacency {
            for &w in neighbors {
                if w >= u {
                    edges.push((u, w));
                }
            }
        }
        edges
    }

    /// Number of edges leaving the first remaining vertex.
    ///
    /// Once the graph has been contracted to two super-vertices every edge runs
    /// between them, so this is the size of the cut they define. Returns 0 for
    /// an empty graph.
    pub fn cut_size(&self) -> usize {
        self.adjacency.values().next().map_or(0, Vec::len)
    }

    /// Merges `v` into `u`.
    ///
    /// Edges between `u` and `v` disappear, every other edge `(v, w)` becomes
    /// `(u, w)`. Multiplicities add up, so the multigraph keeps all the
    /// information needed to read off cut sizes later.
    ///
    /// # Errors
    /// * `InvalidInput` if `u == v` or the vertices are not adjacent
    /// * `VertexNotFound` if either vertex is missing
    pub fn contract(&mut self, u: usize, v: usize) -> Result<()> {
        if u == v {
            return Err(Error::invalid_input(format!(
                "cannot contract vertex {u} with itself"
            )));
        }
        self.require_vertex(u)?;
        let moved = self.adjacency.remove(&v).ok_or(Error::VertexNotFound(v))?;
        if !moved.contains(&u) {
            self.adjacency.insert(v, moved);
            return Err(Error::invalid_input(format!(
                "vertices {u} and {v} are not adjacent"
            )));
        }

        let moved: Vec<usize> = moved.into_iter().filter(|&w| w != u).collect();
        let touched: BTreeSet<usize> = moved.iter().copied().collect();
        for w in touched {
            if let Some(list) = self.adjacency.get_mut(&w) {
                for x in list.iter_mut().filter(|x| **x == v) {
                    *x = u;
                }
            }
        }
        if let Some(list) = self.adjacency.get_mut(&u) {
            list.retain(|&x| x != v);
            list.extend(moved);
        }
        log::trace!("contracted {} into {}", v, u);
        Ok(())
    }

    /// Checks the structural invariants: no self-loops, no references to
    /// missing vertices and symmetric multiplicities.
    pub fn validate(&self) -> Result<()> {
        let mut multiplicity: HashMap<(usize, usize), usize> = HashMap::new();
        for (&u, neighbors) in &self.adjacency {
            for &w in neighbors {
                if w == u {
                    return Err(Error::invalid_graph(format!("self-loop on vertex {u}")));
                }
                if !self.adjacency.contains_key(&w) {
                    return Err(Error::invalid_graph(format!(
                        "vertex {u} references missing vertex {w}"
                    )));
                }
                *multiplicity.entry((u, w)).or_insert(0) += 1;
            }
        }
        for (&(u, w), &count) in &multiplicity {
            let back = multiplicity.get(&(w, u)).copied().unwrap_or(0);
            if back != count {
                return Err(Error::invalid_graph(format!(
                    "edge {u}-{w} appears {count} times from {u} but {back} times from {w}"
                )));
            }
        }
        Ok(())
    }

    /// True when every vertex is reachable from every other one. The empty
    /// graph counts as connected.
    pub fn is_connected(&self) -> bool {
        let start = match self.adjacency.keys().next() {
            Some(&v) => v,
            None => return true,
        };
        let mut seen = BTreeSet::from([start]);
        let mut queue = VecDeque::from([start]);
        while let Some(u) = queue.pop_front() {
            for &w in self.adjacency.get(&u).into_iter().flatten() {
                if seen.insert(w) {
                    queue.push_back(w);
                }
            }
        }
        seen.len() == self.adjacency.len()
    }

    pub(crate) fn require_estimable(&self) -> Result<()> {
        if self.vertex_count() < 2 {
            return Err(Error::invalid_graph(format!(
                "cut estimation needs at least 2 vertices, got {}",
                self.vertex_count()
            )));
        }
        Ok(())
    }

    fn require_vertex(&self, v: usize) -> Result<()> {
        if self.adjacency.contains_key(&v) {
            Ok(())
        } else {
            Err(Error::VertexNotFound(v))
        }
    }
}
