use crate::error::{Error, Result};
use crate::graph::selector::EdgeSelector;
use crate::graph::Graph;

/// Stopping size used when contracting all the way down to a single cut.
pub const DEFAULT_STOP_SIZE: f64 = 2.0;

/// Outcome of one estimator run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CutEstimate {
    /// Edges left on the first remaining super-vertex. This is a cut size when
    /// exactly two super-vertices remain.
    pub cut_size: usize,
    /// Number of contractions performed to get there.
    pub contractions: usize,
}

/// Implements Karger's randomized contraction algorithm on a copy of `graph`.
///
/// Uniformly random edges are contracted while more than `stop_size` (and more
/// than 2) vertices remain. With the default stop size of 2 the result is the
/// size of one cut of the graph, which is a minimum cut with probability at
/// least `1 / C(n, 2)`.
///
/// # Arguments
/// - `graph`: The graph to estimate. It is left untouched.
/// - `stop_size`: Vertex count at which contraction stops. May be fractional.
/// - `selector`: Source of randomness for edge picks.
///
/// # Errors
/// * `InvalidGraph` if the graph has fewer than 2 vertices
/// * `InvalidInput` if `stop_size` is NaN
///
/// # Examples
/// ```
/// use contraction_mincut::graph::{karger, DefaultSelector, Graph};
///
/// let graph = Graph::from_edges(3, &[(0, 1), (0, 2)]).unwrap();
/// let mut selector = DefaultSelector::seeded(1);
/// let estimate = karger::estimate_cut(&graph, karger::DEFAULT_STOP_SIZE, &mut selector).unwrap();
/// assert_eq!(estimate.cut_size, 1);
/// assert_eq!(graph.vertex_count(), 3);
/// ```
pub fn estimate_cut<S: EdgeSelector>(
    graph: &Graph,
    stop_size: f64,
    selector: &mut S,
) -> Result<CutEstimate> {
    let mut work = graph.clone();
    estimate_cut_in_place(&mut work, stop_size, selector)
}

/// Same as [`estimate_cut`] but contracts the caller's graph directly, leaving
/// it reduced to the stopping size.
pub fn estimate_cut_in_place<S: EdgeSelector>(
    graph: &mut Graph,
    stop_size: f64,
    selector: &mut S,
) -> Result<CutEstimate> {
    if stop_size.is_nan() {
        return Err(Error::invalid_input("stop size must be a number"));
    }
    graph.require_estimable()?;

    let mut contractions = 0;
    while graph.vertex_count() as f64 > stop_size && graph.vertex_count() > 2 {
        let edges = graph.edges();
        if edges.is_empty() {
            // disconnected input, nothing left to merge
            log::debug!(
                "no edges left with {} vertices remaining",
                graph.vertex_count()
            );
            break;
        }
        let (u, v) = edges[selector.select(edges.len())];
        graph.contract(u, v)?;
        contractions += 1;
    }

    let estimate = CutEstimate {
        cut_size: graph.cut_size(),
        contractions,
    };
    log::debug!(
        "karger stopped at {} vertices: cut {} after {} contractions",
        graph.vertex_count(),
        estimate.cut_size,
        estimate.contractions
    );
    Ok(estimate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::selector::{DefaultSelector, ScriptedSelector};
    use std::collections::BTreeMap;

    fn two_triangles_with_bridge() -> Graph {
        Graph::from_edges(
            6,
            &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3), (2, 3)],
        )
        .unwrap()
    }

    #[test]
    fn test_path_of_three_always_cuts_one_edge() {
        let adjacency = BTreeMap::from([(0, vec![1, 2]), (1, vec![0]), (2, vec![0])]);
        let graph = Graph::from_adjacency(adjacency).unwrap();
        let mut selector = DefaultSelector::seeded(11);
        for _ in 0..100 {
            let estimate = estimate_cut(&graph, DEFAULT_STOP_SIZE, &mut selector).unwrap();
            assert_eq!(estimate.cut_size, 1);
            assert_eq!(estimate.contractions, 1);
        }
    }

    #[test]
    fn test_isolated_call_leaves_graph_unchanged() {
        let graph = two_triangles_with_bridge();
        let snapshot = graph.clone();
        let mut selector = DefaultSelector::seeded(5);
        estimate_cut(&graph, DEFAULT_STOP_SIZE, &mut selector).unwrap();
        assert_eq!(graph, snapshot);
    }

    #[test]
    fn test_in_place_call_reduces_graph() {
        let mut graph = two_triangles_with_bridge();
        let mut selector = DefaultSelector::seeded(5);
        let estimate = estimate_cut_in_place(&mut graph, DEFAULT_STOP_SIZE, &mut selector).unwrap();
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(estimate.contractions, 4);
        assert_eq!(estimate.cut_size, graph.cut_size());
        graph.validate().unwrap();
    }

    #[test]
    fn test_fractional_stop_size() {
        let mut graph = two_triangles_with_bridge();
        let mut selector = DefaultSelector::seeded(9);
        // 6 / sqrt(2) = 4.24..., so contraction stops at 4 vertices
        let estimate =
            estimate_cut_in_place(&mut graph, 6.0 / std::f64::consts::SQRT_2, &mut selector)
                .unwrap();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(estimate.contractions, 2);
    }

    #[test]
    fn test_never_contracts_below_two() {
        let mut graph = two_triangles_with_bridge();
        let mut selector = DefaultSelector::seeded(2);
        let estimate = estimate_cut_in_place(&mut graph, 0.5, &mut selector).unwrap();
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(estimate.contractions, 4);
    }

    #[test]
    fn test_stop_size_above_vertex_count_is_a_no_op() {
        let mut graph = two_triangles_with_bridge();
        let mut selector = DefaultSelector::seeded(2);
        let estimate = estimate_cut_in_place(&mut graph, 10.0, &mut selector).unwrap();
        assert_eq!(estimate.contractions, 0);
        assert_eq!(graph, two_triangles_with_bridge());
    }

    #[test]
    fn test_scripted_contraction_finds_bridge() {
        let graph = two_triangles_with_bridge();
        // (0,1), (0,2), then (3,4) and (3,5): both triangles collapse and only
        // the bridge is left
        let mut selector = ScriptedSelector::new(vec![0, 0, 1, 1]);
        let estimate = estimate_cut(&graph, DEFAULT_STOP_SIZE, &mut selector).unwrap();
        assert_eq!(
            estimate,
            CutEstimate {
                cut_size: 1,
                contractions: 4
            }
        );
    }

    #[test]
    fn test_scripted_contraction_through_bridge() {
        let graph = two_triangles_with_bridge();
        // always the first edge: (0,1), (0,2), the bridge (0,3), then (0,4)
        // leaves vertex 5 with its two triangle edges
        let mut selector = ScriptedSelector::new(vec![0]);
        let estimate = estimate_cut(&graph, DEFAULT_STOP_SIZE, &mut selector).unwrap();
        assert_eq!(estimate.cut_size, 2);
        assert_eq!(estimate.contractions, 4);
    }

    #[test]
    fn test_rejects_tiny_graph_and_nan() {
        let mut selector = DefaultSelector::seeded(0);
        assert!(matches!(
            estimate_cut(&Graph::with_vertices(1), DEFAULT_STOP_SIZE, &mut selector),
            Err(Error::InvalidGraph(_))
        ));
        assert!(matches!(
            estimate_cut(&two_triangles_with_bridge(), f64::NAN, &mut selector),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_edgeless_graph_stops_without_contracting() {
        let mut graph = Graph::with_vertices(4);
        let mut selector = DefaultSelector::seeded(4);
        let estimate = estimate_cut_in_place(&mut graph, DEFAULT_STOP_SIZE, &mut selector).unwrap();
        assert_eq!(
            estimate,
            CutEstimate {
                cut_size: 0,
                contractions: 0
            }
        );
        assert_eq!(graph.vertex_count(), 4);
    }

    #[test]
    fn test_disconnected_graph_undercounts() {
        let graph = Graph::from_edges(4, &[(0, 1), (2, 3)]).unwrap();
        let mut selector = DefaultSelector::seeded(4);
        let estimate = estimate_cut(&graph, DEFAULT_STOP_SIZE, &mut selector).unwrap();
        assert_eq!(estimate.cut_size, 0);
    }

    #[test]
    fn test_shared_vertex_triangles_never_below_min_cut() {
        // triangles {0,1,2} and {2,3,4} plus the edge (1,3); vertices 0 and 4
        // have degree 2, which is the minimum cut
        let graph = Graph::from_edges(
            5,
            &[(0, 1), (0, 2), (1, 2), (2, 3), (2, 4), (3, 4), (1, 3)],
        )
        .unwrap();
        let mut selector = DefaultSelector::seeded(2024);
        let mut hits = 0;
        for _ in 0..1000 {
            let estimate = estimate_cut(&graph, DEFAULT_STOP_SIZE, &mut selector).unwrap();
            assert!(estimate.cut_size >= 2);
            if estimate.cut_size == 2 {
                hits += 1;
            }
        }
        assert!(hits > 100, "hit the minimum cut {hits} times out of 1000");
    }

    #[test]
    fn test_bridge_frequency_beats_lower_bound() {
        let graph = two_triangles_with_bridge();
        let mut selector = DefaultSelector::seeded(77);
        let trials = 2000;
        let hits = (0..trials)
            .filter(|_| {
                estimate_cut(&graph, DEFAULT_STOP_SIZE, &mut selector)
                    .unwrap()
                    .cut_size
                    == 1
            })
            .count();
        // 1 / C(6, 2) = 1 / 15
        let frequency = hits as f64 / trials as f64;
        assert!(frequency > 1.0 / 15.0, "frequency {frequency}");
    }
}
