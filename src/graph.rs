//! Undirected multigraphs and contraction-based min-cut estimation.
//!
//! - [`Graph`]: adjacency-list multigraph with in-place edge contraction
//! - [`karger`]: single-pass randomized contraction
//! - [`karger_stein`]: recursive amplification of the single pass
//! - [`selector`]: where the random edge picks come from
//! - [`io`]: the `<vertex_count> <edge_count>` text format
//!
//! # Examples
//!
//! ```rust
//! use contraction_mincut::graph::{karger_stein, AmplifierConfig, DefaultSelector, Graph};
//!
//! let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 0), (2, 3)]).unwrap();
//! let mut selector = DefaultSelector::seeded(7);
//! let estimate =
//!     karger_stein::estimate_cut_amplified(&graph, &AmplifierConfig::default(), &mut selector)
//!         .unwrap();
//! assert!(estimate.cut_size >= 1);
//! ```

pub mod io;
pub mod karger;
pub mod karger_stein;
pub mod multigraph;
pub mod selector;

pub use io::{parse_graph, read_graph, write_graph, MAX_VERTICES};
pub use karger::{estimate_cut, estimate_cut_in_place, CutEstimate, DEFAULT_STOP_SIZE};
pub use karger_stein::{
    estimate_cut_amplified, estimate_cut_amplified_in_place, estimate_cut_amplified_parallel,
    AmplifierConfig, DEFAULT_BRANCH_COUNT, DEFAULT_REDUCTION_FACTOR,
};
pub use multigraph::Graph;
pub use selector::{DefaultSelector, EdgeSelector, ScriptedSelector, UniformSelector};
