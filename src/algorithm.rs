//! Algorithm selection.
//!
//! Callers that pick an estimator at run time (the command-line tool, the
//! statistics harness) describe the choice as an [`Algorithm`] value and hand
//! it to [`Algorithm::run`].

use std::fmt;

use crate::error::{Error, Result};
use crate::graph::karger::{self, CutEstimate, DEFAULT_STOP_SIZE};
use crate::graph::karger_stein::{self, AmplifierConfig};
use crate::graph::selector::EdgeSelector;
use crate::graph::Graph;

/// Default `a` of the custom amplifier: each level halves the graph.
pub const DEFAULT_CUSTOM_A: f64 = 0.5;

/// Default `b` of the custom amplifier.
pub const DEFAULT_CUSTOM_B: usize = 4;

/// An estimator together with its numeric parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Algorithm {
    /// Single contraction pass down to `stop_size` vertices.
    Karger { stop_size: f64 },
    /// Recursive amplification.
    KargerStein(AmplifierConfig),
}

impl Default for Algorithm {
    fn default() -> Self {
        Self::karger()
    }
}

impl Algorithm {
    /// Plain Karger contracting down to two vertices.
    pub fn karger() -> Self {
        Algorithm::Karger {
            stop_size: DEFAULT_STOP_SIZE,
        }
    }

    /// Classic Karger-Stein: shrink by `√2`, two branches per level.
    pub fn recursive() -> Self {
        Algorithm::KargerStein(AmplifierConfig::default())
    }

    /// Amplifier that keeps a fraction `a` of the vertices per level and
    /// launches `b` branches.
    ///
    /// # Errors
    /// * `InvalidInput` unless `0 < a < 1` and `b >= 1`
    pub fn custom(a: f64, b: usize) -> Result<Self> {
        if !(a > 0.0 && a < 1.0) {
            return Err(Error::invalid_input(format!(
                "a must lie strictly between 0 and 1, got {a}"
            )));
        }
        Ok(Algorithm::KargerStein(AmplifierConfig::new(1.0 / a, b)?))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Karger { .. } => "karger",
            Algorithm::KargerStein(_) => "recursive_karger",
        }
    }

    /// Runs the estimator on a copy of `graph`.
    pub fn run<S: EdgeSelector>(&self, graph: &Graph, selector: &mut S) -> Result<CutEstimate> {
        match self {
            Algorithm::Karger { stop_size } => karger::estimate_cut(graph, *stop_size, selector),
            Algorithm::KargerStein(config) => {
                karger_stein::estimate_cut_amplified(graph, config, selector)
            }
        }
    }

    /// Runs the estimator directly on `graph`, which is left contracted.
    pub fn run_in_place<S: EdgeSelector>(
        &self,
        graph: &mut Graph,
        selector: &mut S,
    ) -> Result<CutEstimate> {
        match self {
            Algorithm::Karger { stop_size } => {
                karger::estimate_cut_in_place(graph, *stop_size, selector)
            }
            Algorithm::KargerStein(config) => {
                karger_stein::estimate_cut_amplified_in_place(graph, config, selector)
            }
        }
    }

    /// Like [`Algorithm::run`], with amplifier branches spread over the rayon
    /// pool. A single pass has no branches and runs as usual.
    pub fn run_parallel<S: EdgeSelector + Send>(
        &self,
        graph: &Graph,
        selector: &mut S,
    ) -> Result<CutEstimate> {
        match self {
            Algorithm::KargerStein(config) => {
                karger_stein::estimate_cut_amplified_parallel(graph, config, selector)
            }
            Algorithm::Karger { .. } => self.run(graph, selector),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Karger { stop_size } if *stop_size == DEFAULT_STOP_SIZE => {
                write!(f, "karger")
            }
            Algorithm::Karger { stop_size } => write!(f, "karger(stop={stop_size})"),
            Algorithm::KargerStein(config) if *config == AmplifierConfig::default() => {
                write!(f, "recursive")
            }
            Algorithm::KargerStein(config) => write!(
                f,
                "custom(a={}, b={})",
                1.0 / config.reduction_factor,
                config.branch_count
            ),
        }
    }
}
