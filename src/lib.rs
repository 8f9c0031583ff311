//! Randomized minimum cut estimation for undirected multigraphs.
//!
//! Karger's algorithm contracts uniformly random edges until two
//! super-vertices remain; the edges between them form a cut that is minimum
//! with probability at least `1 / C(n, 2)`. Karger-Stein shares the cheap early
//! contractions and repeats the risky late ones on independent copies, which
//! raises the success probability per unit of work.
//!
//! ```rust
//! use contraction_mincut::{Algorithm, DefaultSelector, Graph};
//!
//! let graph: Graph = "4 4\n0 1\n1 2\n2 0\n2 3\n".parse().unwrap();
//! let mut selector = DefaultSelector::seeded(42);
//! let estimate = Algorithm::recursive().run(&graph, &mut selector).unwrap();
//! assert!(estimate.cut_size >= 1);
//! ```

pub mod algorithm;
pub mod error;
pub mod graph;
pub mod stats;

pub use algorithm::Algorithm;
pub use error::{Error, Result};
pub use graph::{AmplifierConfig, CutEstimate, DefaultSelector, EdgeSelector, Graph};
